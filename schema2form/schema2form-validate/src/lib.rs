//! Validation gateway for `schema2form`.
//!
//! Checks a candidate record against the product union and either accepts
//! a canonically-typed record or reports every violation keyed by field.
//! A failed validation is expected data, not an error: only an unknown
//! discriminant value is returned as `Err`.

mod gateway;

pub use gateway::{FieldErrors, ValidationOutcome, validate, validate_variant};
