//! Tagged-union schema and the discriminant-value registry.

use std::collections::HashMap;

use crate::error::{SchemaShapeError, UnknownVariantError};
use crate::schema::FieldDefs;

/// One record shape of a product union, identified by its discriminant
/// literal.
///
/// `fields` excludes the discriminant field itself; consumers that need the
/// full record re-attach it from `discriminant_key` / `discriminant_value`.
#[derive(Debug, Clone, PartialEq)]
pub struct VariantSchema {
    pub discriminant_key: String,
    pub discriminant_value: String,
    pub fields: FieldDefs,
}

impl VariantSchema {
    pub fn new(
        discriminant_key: impl Into<String>,
        discriminant_value: impl Into<String>,
        fields: impl Into<FieldDefs>,
    ) -> Self {
        Self {
            discriminant_key: discriminant_key.into(),
            discriminant_value: discriminant_value.into(),
            fields: fields.into(),
        }
    }
}

/// Ordered tagged-union schema with an index from discriminant value to
/// variant.
///
/// Immutable once constructed; safe to share across concurrent form
/// sessions without synchronization.
#[derive(Debug, Clone)]
pub struct ProductUnion {
    variants: Vec<VariantSchema>,
    index: HashMap<String, usize>,
}

impl ProductUnion {
    /// Builds the union, validating discriminant consistency.
    ///
    /// All variants must agree on the discriminant key, and no two variants
    /// may claim the same discriminant value.
    pub fn new(variants: Vec<VariantSchema>) -> Result<Self, SchemaShapeError> {
        let Some(first) = variants.first() else {
            return Err(SchemaShapeError::EmptyUnion);
        };
        let discriminant_key = first.discriminant_key.clone();

        let mut index = HashMap::with_capacity(variants.len());
        for (pos, variant) in variants.iter().enumerate() {
            if variant.discriminant_key != discriminant_key {
                return Err(SchemaShapeError::DiscriminantKeyMismatch {
                    expected: discriminant_key,
                    found: variant.discriminant_key.clone(),
                    variant: variant.discriminant_value.clone(),
                });
            }
            if index
                .insert(variant.discriminant_value.clone(), pos)
                .is_some()
            {
                return Err(SchemaShapeError::DuplicateDiscriminantValue {
                    value: variant.discriminant_value.clone(),
                });
            }
        }

        Ok(Self { variants, index })
    }

    /// The discriminant field name shared by every variant.
    pub fn discriminant_key(&self) -> &str {
        &self.variants[0].discriminant_key
    }

    /// Resolves the variant registered for a discriminant value.
    pub fn variant_for(&self, value: &str) -> Result<&VariantSchema, UnknownVariantError> {
        self.index
            .get(value)
            .map(|&pos| &self.variants[pos])
            .ok_or_else(|| UnknownVariantError {
                value: value.to_string(),
                known: self.discriminant_values().map(str::to_string).collect(),
            })
    }

    /// Discriminant values in registration order (drives selector ordering).
    pub fn discriminant_values(&self) -> impl Iterator<Item = &str> {
        self.variants.iter().map(|v| v.discriminant_value.as_str())
    }

    pub fn variants(&self) -> &[VariantSchema] {
        &self.variants
    }
}
