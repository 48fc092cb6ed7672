//! Form engine facade tying registry, builder, metadata, and validation
//! together behind one immutable handle.

use schema2form_config::{FieldDescriptor, build_form_config, default_record};
use schema2form_core::{
    FieldDefs, MetadataTable, ProductUnion, Record, VariantSchema,
};
use schema2form_validate::{ValidationOutcome, validate};
use serde_json::Value;

use crate::error::FormEngineError;

/// Owns an immutable product union plus the external metadata table and
/// exposes the per-variant form lifecycle: configuration, default record,
/// validation.
///
/// All state is read-only after construction, so one engine can serve any
/// number of concurrent form sessions.
#[derive(Debug)]
pub struct FormEngine {
    union: ProductUnion,
    metadata: MetadataTable,
}

/// Builder for configuring [`FormEngine`].
pub struct FormEngineBuilder {
    variants: Vec<VariantSchema>,
    metadata: MetadataTable,
}

impl FormEngine {
    /// Create a builder for [`FormEngine`].
    pub fn builder() -> FormEngineBuilder {
        FormEngineBuilder {
            variants: Vec::new(),
            metadata: MetadataTable::new(),
        }
    }

    /// Build an engine around an already-constructed union.
    pub fn new(union: ProductUnion, metadata: MetadataTable) -> Self {
        Self { union, metadata }
    }

    /// Build an engine from a JSON-Schema-flavoured union document.
    pub fn from_schema_document(
        doc: &Value,
        metadata: MetadataTable,
    ) -> Result<Self, FormEngineError> {
        let union = schema2form_jsonschema::parse_union(doc)?;
        Ok(Self::new(union, metadata))
    }

    pub fn union(&self) -> &ProductUnion {
        &self.union
    }

    /// Registered product types in registration order.
    pub fn discriminant_values(&self) -> impl Iterator<Item = &str> {
        self.union.discriminant_values()
    }

    /// Ordered field descriptors for one product type.
    pub fn form_config(&self, product_type: &str) -> Result<Vec<FieldDescriptor>, FormEngineError> {
        let variant = self.union.variant_for(product_type)?;
        Ok(build_form_config(variant, &self.metadata))
    }

    /// Fresh, fully-initialized record for a variant switch.
    pub fn default_record(&self, product_type: &str) -> Result<Record, FormEngineError> {
        let variant = self.union.variant_for(product_type)?;
        Ok(default_record(variant)?)
    }

    /// Field definitions of one variant, for diagnostics and tooling.
    pub fn variant_field_defs(&self, product_type: &str) -> Result<&FieldDefs, FormEngineError> {
        Ok(&self.union.variant_for(product_type)?.fields)
    }

    /// Validate a submitted candidate record against one product type.
    pub fn validate(
        &self,
        product_type: &str,
        candidate: &Value,
    ) -> Result<ValidationOutcome, FormEngineError> {
        Ok(validate(&self.union, product_type, candidate)?)
    }
}

impl FormEngineBuilder {
    /// Register one variant; registration order drives selector ordering.
    pub fn register_variant(mut self, variant: VariantSchema) -> Self {
        self.variants.push(variant);
        self
    }

    /// Supply the external key-to-metadata table.
    pub fn with_metadata_table(mut self, metadata: MetadataTable) -> Self {
        self.metadata = metadata;
        self
    }

    /// Build the engine, validating discriminant consistency up front.
    pub fn build(self) -> Result<FormEngine, FormEngineError> {
        let union = ProductUnion::new(self.variants)?;
        Ok(FormEngine::new(union, self.metadata))
    }
}
