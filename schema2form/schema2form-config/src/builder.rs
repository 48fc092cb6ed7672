//! Field descriptor assembly and default-record construction.

use schema2form_core::{
    FieldType, MetadataTable, Record, SchemaShapeError, VariantSchema, resolve_metadata,
};
use serde_json::Value;

use crate::descriptor::FieldDescriptor;

/// Builds the ordered field descriptor sequence for a variant.
///
/// Output order equals the schema's field declaration order. The
/// discriminant field is not part of `variant.fields` by construction and
/// therefore never appears; every declared field yields exactly one
/// descriptor.
pub fn build_form_config(variant: &VariantSchema, table: &MetadataTable) -> Vec<FieldDescriptor> {
    variant
        .fields
        .iter()
        .map(|field| {
            let meta = resolve_metadata(field, table);
            FieldDescriptor {
                key: field.key.clone(),
                label: meta.label,
                input_kind: meta.input_kind,
                required: !field.ty.is_optional_like(),
            }
        })
        .collect()
}

/// Constructs the initial record for a variant switch.
///
/// Every declared field receives an explicit value consistent with its base
/// type, and the discriminant field is preset to the variant's literal.
/// The only schema shape without a constructible default is an enum with no
/// literals.
pub fn default_record(variant: &VariantSchema) -> Result<Record, SchemaShapeError> {
    let mut record = Record::new();
    record.insert(
        variant.discriminant_key.clone(),
        Value::String(variant.discriminant_value.clone()),
    );

    for field in variant.fields.iter() {
        record.insert(field.key.clone(), default_value(&field.key, &field.ty)?);
    }

    Ok(record)
}

fn default_value(key: &str, ty: &FieldType) -> Result<Value, SchemaShapeError> {
    match ty {
        // A declared default always wins over the type-derived one.
        FieldType::Defaulted(_, default) => Ok(default.clone()),
        // Optional and nullable fields still get a concrete inner default:
        // the renderer binds inputs to values, not to absence.
        FieldType::Optional(inner) | FieldType::Nullable(inner) => default_value(key, inner),
        FieldType::String { .. } => Ok(Value::String(String::new())),
        FieldType::Number { .. } => Ok(Value::from(0)),
        FieldType::Boolean => Ok(Value::Bool(false)),
        FieldType::Enum(literals) => literals
            .first()
            .map(|lit| Value::String(lit.clone()))
            .ok_or_else(|| SchemaShapeError::EmptyEnum {
                key: key.to_string(),
            }),
    }
}
