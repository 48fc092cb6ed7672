//! Renderer-independent schema primitives for `schema2form`.
//!
//! This crate provides the closed schema intermediate representation
//! ([`FieldType`] / [`FieldDef`]), the tagged-union registry
//! ([`ProductUnion`]) and presentation-metadata resolution
//! ([`resolve_metadata`]).

mod error;
mod metadata;
mod record;
mod schema;

pub use error::{SchemaShapeError, UnknownVariantError};
pub use metadata::{FieldMetadata, InputKind, MetadataTable, resolve_metadata};
pub use record::Record;
pub use schema::{
    FieldDef, FieldDefs, FieldType, ProductUnion, VariantSchema, format_field_defs,
};
