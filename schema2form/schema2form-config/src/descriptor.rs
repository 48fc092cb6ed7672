//! Render-ready field descriptor emitted by the builder.

use schema2form_core::InputKind;
use serde::Serialize;

/// Render-ready summary of one form field.
///
/// Created fresh per build call, never mutated afterwards, and consumed
/// read-only by the renderer.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldDescriptor {
    pub key: String,
    pub label: String,
    pub input_kind: InputKind,
    pub required: bool,
}
