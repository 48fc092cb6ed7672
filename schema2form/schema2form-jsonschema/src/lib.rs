//! JSON-Schema-flavoured schema source for `schema2form`.
//!
//! [`parse_union`] is the single end-to-end entry point: it takes an
//! already-validated schema description (typically the output of an
//! OpenAPI code-generation step), maps each `oneOf` variant into the
//! closed [`FieldType`](schema2form_core::FieldType) representation, and
//! hands the result to the union registry.
//!
//! Supported per-property keywords: `type` (string / number / integer /
//! boolean), `enum`, `const` (discriminant only), `nullable`, `default`,
//! `minLength`, `minimum`, and the `x-form` presentation annotation.
//! Anything outside that subset — nested objects, arrays, unknown `type`
//! keywords — is a schema shape the presentation layer cannot reason
//! about and fails the parse.

mod error;
mod parser;

pub use error::JsonSchemaError;
pub use parser::{parse_union, parse_variant};
