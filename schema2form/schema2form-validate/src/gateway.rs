//! Per-field conformance checks and record coercion.

use std::collections::BTreeMap;

use schema2form_core::{
    FieldDef, FieldType, ProductUnion, Record, UnknownVariantError, VariantSchema,
};
use serde_json::Value;

/// Per-field validation messages, keyed by field key.
///
/// A `BTreeMap` keeps iteration order stable for renderers and logs.
pub type FieldErrors = BTreeMap<String, Vec<String>>;

/// Outcome of a validation run.
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationOutcome {
    /// The candidate conformed; the record is coerced to canonical field
    /// types and includes the discriminant field.
    Valid(Record),
    /// At least one field violated the schema. Every offending field is
    /// reported, not just the first.
    Invalid(FieldErrors),
}

impl ValidationOutcome {
    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid(_))
    }

    pub fn errors(&self) -> Option<&FieldErrors> {
        match self {
            Self::Valid(_) => None,
            Self::Invalid(errors) => Some(errors),
        }
    }
}

/// Validates a candidate record against the union variant selected by
/// `discriminant`.
///
/// An unrecognized discriminant is an `Err`; field-level violations are
/// accumulated into [`ValidationOutcome::Invalid`] so the caller sees every
/// problem in a single round-trip.
pub fn validate(
    union: &ProductUnion,
    discriminant: &str,
    candidate: &Value,
) -> Result<ValidationOutcome, UnknownVariantError> {
    let variant = union.variant_for(discriminant)?;
    Ok(validate_variant(variant, candidate))
}

/// Validates a candidate against one already-resolved variant schema.
///
/// Candidate keys not declared by the variant are dropped from the accepted
/// record. A non-object candidate is treated as an empty record, so every
/// required field reports as missing.
pub fn validate_variant(variant: &VariantSchema, candidate: &Value) -> ValidationOutcome {
    let empty = Record::new();
    let candidate = match candidate {
        Value::Object(map) => map,
        _ => &empty,
    };

    let mut record = Record::new();
    record.insert(
        variant.discriminant_key.clone(),
        Value::String(variant.discriminant_value.clone()),
    );
    let mut errors = FieldErrors::new();

    for field in variant.fields.iter() {
        check_field(field, candidate.get(&field.key), &mut record, &mut errors);
    }

    if errors.is_empty() {
        ValidationOutcome::Valid(record)
    } else {
        ValidationOutcome::Invalid(errors)
    }
}

fn check_field(
    field: &FieldDef,
    value: Option<&Value>,
    record: &mut Record,
    errors: &mut FieldErrors,
) {
    let required = !field.ty.is_optional_like();

    let value = match value {
        Some(Value::Null) | None if required => {
            push_error(errors, &field.key, "is required".to_string());
            return;
        }
        Some(Value::Null) | None => {
            match &field.ty {
                // A missing defaulted field is filled in, a missing nullable
                // field is recorded as explicit null, a missing optional
                // field stays absent.
                FieldType::Defaulted(_, default) => {
                    record.insert(field.key.clone(), default.clone());
                }
                FieldType::Nullable(_) if matches!(value, Some(Value::Null)) => {
                    record.insert(field.key.clone(), Value::Null);
                }
                _ => {}
            }
            return;
        }
        Some(value) => value,
    };

    match coerce_base(field.ty.unwrapped(), value) {
        Ok(coerced) => {
            record.insert(field.key.clone(), coerced);
        }
        Err(message) => push_error(errors, &field.key, message),
    }
}

/// Checks one value against the field's base type and returns it coerced to
/// the canonical representation.
fn coerce_base(base: &FieldType, value: &Value) -> Result<Value, String> {
    match base {
        FieldType::String { min_length } => match value {
            Value::String(s) => {
                if let Some(min) = min_length
                    && s.chars().count() < *min
                {
                    return Err(format!("must be at least {min} character(s) long"));
                }
                Ok(value.clone())
            }
            _ => Err("must be a string".to_string()),
        },
        FieldType::Number { minimum } => {
            let coerced = match value {
                Value::Number(_) => value.clone(),
                // Numeric-looking text arrives from plain inputs; parse it
                // rather than bouncing the submission.
                Value::String(s) => parse_number(s).ok_or("must be a number")?,
                _ => return Err("must be a number".to_string()),
            };
            if let Some(min) = minimum {
                let actual = coerced.as_f64().unwrap_or(f64::NAN);
                if !(actual >= *min) {
                    return Err(format!("must be at least {min}"));
                }
            }
            Ok(coerced)
        }
        FieldType::Boolean => match value {
            Value::Bool(_) => Ok(value.clone()),
            _ => Err("must be a boolean".to_string()),
        },
        FieldType::Enum(literals) => match value {
            Value::String(s) if literals.iter().any(|lit| lit == s) => Ok(value.clone()),
            _ => Err(format!("must be one of: {}", literals.join(", "))),
        },
        // unwrapped() never returns a wrapper.
        FieldType::Optional(_) | FieldType::Nullable(_) | FieldType::Defaulted(_, _) => {
            unreachable!("wrapper passed as base type")
        }
    }
}

fn parse_number(s: &str) -> Option<Value> {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        return None;
    }
    if let Ok(int) = trimmed.parse::<i64>() {
        return Some(Value::from(int));
    }
    trimmed
        .parse::<f64>()
        .ok()
        .and_then(serde_json::Number::from_f64)
        .map(Value::Number)
}

fn push_error(errors: &mut FieldErrors, key: &str, message: String) {
    errors.entry(key.to_string()).or_default().push(message);
}
