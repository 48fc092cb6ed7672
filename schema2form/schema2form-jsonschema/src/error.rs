//! Error type for the JSON-Schema source decoder.

use schema2form_core::SchemaShapeError;

/// Errors produced while decoding a union document.
#[derive(Debug, thiserror::Error)]
pub enum JsonSchemaError {
    /// The document root has no `oneOf` array of variant schemas.
    #[error("union document must declare a non-empty 'oneOf' array")]
    MissingOneOf,

    /// The document root has no `discriminator.propertyName`.
    #[error("union document must declare 'discriminator.propertyName'")]
    MissingDiscriminator,

    /// A variant schema is structurally unusable.
    #[error("variant {index}: {detail}")]
    MalformedVariant { index: usize, detail: String },

    /// The decoded schema violates an engine-level shape invariant.
    #[error(transparent)]
    Shape(#[from] SchemaShapeError),
}
