//! Error types shared across the engine layers.

/// The schema itself is internally inconsistent.
///
/// Fatal at construction or build time. Surfaces to the operator as a
/// startup/build defect, never to the end user.
#[derive(Debug, thiserror::Error)]
pub enum SchemaShapeError {
    /// A product union was constructed with no variants.
    #[error("product union must declare at least one variant")]
    EmptyUnion,

    /// Variants of the same union disagree on the discriminant field name.
    #[error(
        "variant '{variant}' declares discriminant key '{found}', expected '{expected}'"
    )]
    DiscriminantKeyMismatch {
        expected: String,
        found: String,
        variant: String,
    },

    /// Two variants claim the same discriminant literal.
    #[error("discriminant value '{value}' is declared by more than one variant")]
    DuplicateDiscriminantValue { value: String },

    /// An enum type with no literals has no constructible default value.
    #[error("field '{key}': enum type declares no literals")]
    EmptyEnum { key: String },

    /// A schema source declared a field shape the engine cannot reason about.
    #[error("field '{key}': unsupported schema shape: {detail}")]
    UnsupportedShape { key: String, detail: String },
}

/// Caller supplied a discriminant value absent from the registry.
///
/// Recoverable: surfaced to the caller as a rejected request.
#[derive(Debug, thiserror::Error)]
#[error("unknown product type '{value}' (known: {})", known.join(", "))]
pub struct UnknownVariantError {
    pub value: String,
    pub known: Vec<String>,
}
