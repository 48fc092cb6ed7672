//! Error types for the form engine facade.

use schema2form_core::{SchemaShapeError, UnknownVariantError};
use schema2form_jsonschema::JsonSchemaError;

/// Errors produced by [`FormEngine`](crate::FormEngine).
#[derive(Debug, thiserror::Error)]
pub enum FormEngineError {
    /// The schema is internally inconsistent. Fatal and operator-facing;
    /// never shown to the end user.
    #[error(transparent)]
    Shape(#[from] SchemaShapeError),

    /// The requested product type is not registered. Recoverable; surfaced
    /// to the caller as a rejected request.
    #[error(transparent)]
    UnknownVariant(#[from] UnknownVariantError),

    /// The schema source document could not be decoded.
    #[error(transparent)]
    SchemaSource(#[from] JsonSchemaError),
}
