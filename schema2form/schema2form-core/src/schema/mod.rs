//! Renderer-independent schema intermediate representation.

mod format;
mod types;
mod union;

pub use format::format_field_defs;
pub use types::{FieldDef, FieldDefs, FieldType};
pub use union::{ProductUnion, VariantSchema};
