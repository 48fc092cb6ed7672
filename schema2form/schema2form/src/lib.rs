mod engine;
mod error;

pub use engine::{FormEngine, FormEngineBuilder};
pub use error::FormEngineError;
pub use schema2form_config as config;
pub use schema2form_core as core;
pub use schema2form_jsonschema as jsonschema;
pub use schema2form_validate as validate;
