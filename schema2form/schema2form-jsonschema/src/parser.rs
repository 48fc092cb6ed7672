//! Conversion from JSON-Schema union documents to the core schema IR.

use schema2form_core::{FieldDef, FieldType, ProductUnion, SchemaShapeError, VariantSchema};
use serde_json::{Map, Value};

use crate::error::JsonSchemaError;

/// Parses a tagged-union document into a [`ProductUnion`].
///
/// The document must carry `discriminator.propertyName` and a non-empty
/// `oneOf` array of flat object schemas. Discriminant consistency is
/// enforced by the union registry after decoding.
pub fn parse_union(doc: &Value) -> Result<ProductUnion, JsonSchemaError> {
    let discriminant_key = doc
        .get("discriminator")
        .and_then(|d| d.get("propertyName"))
        .and_then(Value::as_str)
        .ok_or(JsonSchemaError::MissingDiscriminator)?;

    let variants_json = doc
        .get("oneOf")
        .and_then(Value::as_array)
        .filter(|a| !a.is_empty())
        .ok_or(JsonSchemaError::MissingOneOf)?;

    let variants = variants_json
        .iter()
        .enumerate()
        .map(|(index, variant)| {
            parse_variant(discriminant_key, variant).map_err(|e| match e {
                JsonSchemaError::MalformedVariant { detail, .. } => {
                    JsonSchemaError::MalformedVariant { index, detail }
                }
                other => other,
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(ProductUnion::new(variants)?)
}

/// Parses one flat object schema into a [`VariantSchema`].
///
/// Properties are read in document order; the discriminant property must
/// declare a string `const` and is excluded from the variant's field list.
pub fn parse_variant(
    discriminant_key: &str,
    doc: &Value,
) -> Result<VariantSchema, JsonSchemaError> {
    let malformed =
        |detail: String| JsonSchemaError::MalformedVariant { index: 0, detail };

    let Value::Object(schema) = doc else {
        return Err(malformed("variant schema must be an object".to_string()));
    };
    if let Some(ty) = schema.get("type").and_then(Value::as_str)
        && ty != "object"
    {
        return Err(malformed(format!("variant schema must have type 'object', got '{ty}'")));
    }

    let properties = schema
        .get("properties")
        .and_then(Value::as_object)
        .ok_or_else(|| malformed("variant schema must declare 'properties'".to_string()))?;

    let required = required_keys(schema);

    let discriminant_value = properties
        .get(discriminant_key)
        .ok_or_else(|| {
            malformed(format!("missing discriminant property '{discriminant_key}'"))
        })?
        .get("const")
        .and_then(Value::as_str)
        .ok_or_else(|| {
            malformed(format!(
                "discriminant property '{discriminant_key}' must declare a string 'const'"
            ))
        })?;

    let mut fields = Vec::with_capacity(properties.len().saturating_sub(1));
    for (key, prop) in properties {
        if key == discriminant_key {
            continue;
        }
        let ty = parse_field_type(key, prop, required.contains(&key.as_str()))?;
        fields.push(FieldDef {
            key: key.clone(),
            ty,
            meta: prop.get("x-form").cloned(),
        });
    }

    Ok(VariantSchema::new(discriminant_key, discriminant_value, fields))
}

fn required_keys(schema: &Map<String, Value>) -> Vec<&str> {
    schema
        .get("required")
        .and_then(Value::as_array)
        .map(|keys| keys.iter().filter_map(Value::as_str).collect())
        .unwrap_or_default()
}

/// Maps one property schema to a [`FieldType`], wrapping in document order:
/// `nullable` closest to the base, then `default`, then the optional
/// wrapper for properties absent from `required`.
fn parse_field_type(
    key: &str,
    prop: &Value,
    required: bool,
) -> Result<FieldType, SchemaShapeError> {
    let unsupported = |detail: String| SchemaShapeError::UnsupportedShape {
        key: key.to_string(),
        detail,
    };

    let Value::Object(map) = prop else {
        return Err(unsupported("property schema must be an object".to_string()));
    };

    let base = if let Some(literals) = map.get("enum") {
        let literals = literals
            .as_array()
            .ok_or_else(|| unsupported("'enum' must be an array".to_string()))?;
        let literals = literals
            .iter()
            .map(|lit| {
                lit.as_str()
                    .map(str::to_string)
                    .ok_or_else(|| unsupported(format!("non-string enum literal {lit}")))
            })
            .collect::<Result<Vec<_>, _>>()?;
        FieldType::Enum(literals)
    } else {
        match map.get("type").and_then(Value::as_str) {
            Some("string") => FieldType::String {
                min_length: map.get("minLength").and_then(Value::as_u64).map(|n| n as usize),
            },
            Some("number") | Some("integer") => FieldType::Number {
                minimum: map.get("minimum").and_then(Value::as_f64),
            },
            Some("boolean") => FieldType::Boolean,
            Some(nested @ ("object" | "array")) => {
                return Err(unsupported(format!(
                    "nested '{nested}' schemas are not supported"
                )));
            }
            Some(other) => {
                return Err(unsupported(format!("unrecognized type keyword '{other}'")));
            }
            None => return Err(unsupported("missing 'type' keyword".to_string())),
        }
    };

    let mut ty = base;
    if map.get("nullable").and_then(Value::as_bool) == Some(true) {
        ty = FieldType::nullable(ty);
    }
    if let Some(default) = map.get("default") {
        ty = FieldType::defaulted(ty, default.clone());
    } else if !required {
        ty = FieldType::optional(ty);
    }

    Ok(ty)
}
