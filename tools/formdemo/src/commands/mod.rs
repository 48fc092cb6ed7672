pub mod form;
pub mod schema;
pub mod validate;
