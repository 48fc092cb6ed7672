//! Presentation metadata and its resolution fallback chain.
//!
//! A field's label and input kind come from, in order: well-formed
//! annotations embedded in the schema, an external key-to-metadata table,
//! and finally the text default. Malformed embedded annotations degrade to
//! the next source instead of failing the build.

use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::schema::FieldDef;

/// Input widget kind understood by the renderer boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InputKind {
    Text,
    Number,
    Textarea,
    Select,
}

impl InputKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Number => "number",
            Self::Textarea => "textarea",
            Self::Select => "select",
        }
    }

    /// Parses a metadata-supplied kind string.
    ///
    /// Unrecognized strings are `None`; the caller decides whether that
    /// degrades or fails.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "text" => Some(Self::Text),
            "number" => Some(Self::Number),
            "textarea" => Some(Self::Textarea),
            "select" => Some(Self::Select),
            _ => None,
        }
    }
}

impl fmt::Display for InputKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Resolved presentation metadata for one field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldMetadata {
    pub label: String,
    pub input_kind: InputKind,
}

impl FieldMetadata {
    pub fn new(label: impl Into<String>, input_kind: InputKind) -> Self {
        Self {
            label: label.into(),
            input_kind,
        }
    }
}

/// External key-to-metadata lookup supplied by the embedding application.
///
/// May be empty; the engine still produces a usable (if unlabeled) form.
#[derive(Debug, Clone, Default)]
pub struct MetadataTable(HashMap<String, FieldMetadata>);

impl MetadataTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: impl Into<String>, meta: FieldMetadata) {
        self.0.insert(key.into(), meta);
    }

    pub fn get(&self, key: &str) -> Option<&FieldMetadata> {
        self.0.get(key)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<(String, FieldMetadata)> for MetadataTable {
    fn from_iter<T: IntoIterator<Item = (String, FieldMetadata)>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Resolves presentation metadata for a field.
///
/// Resolution order: embedded annotations, external table, then
/// `{label: key, input_kind: Text}`. A malformed embedded annotation emits
/// a warning for the schema author and falls through; it never blocks the
/// user-facing flow.
pub fn resolve_metadata(field: &FieldDef, table: &MetadataTable) -> FieldMetadata {
    if let Some(raw) = &field.meta {
        match embedded_metadata(raw) {
            Ok(Some(found)) => return found,
            Ok(None) => {}
            Err(detail) => {
                tracing::warn!(
                    key = %field.key,
                    %detail,
                    "ignoring malformed embedded field metadata"
                );
            }
        }
    }

    if let Some(found) = table.get(&field.key) {
        return found.clone();
    }

    FieldMetadata::new(field.key.clone(), InputKind::Text)
}

/// Extracts `{label, inputKind}` from a raw annotation value.
///
/// `Ok(None)` means the annotation carries no presentation keys at all;
/// `Err` means it tried to and got the shape wrong.
fn embedded_metadata(raw: &Value) -> std::result::Result<Option<FieldMetadata>, String> {
    let Value::Object(map) = raw else {
        return Err(format!("annotation must be an object, got {raw}"));
    };

    if !map.contains_key("label") && !map.contains_key("inputKind") {
        return Ok(None);
    }

    let label = match map.get("label") {
        Some(Value::String(s)) if !s.is_empty() => s.clone(),
        Some(other) => return Err(format!("label must be a non-empty string, got {other}")),
        None => return Err("label is missing".to_string()),
    };

    let input_kind = match map.get("inputKind") {
        Some(Value::String(s)) => {
            InputKind::parse(s).ok_or_else(|| format!("unrecognized inputKind '{s}'"))?
        }
        Some(other) => return Err(format!("inputKind must be a string, got {other}")),
        None => return Err("inputKind is missing".to_string()),
    };

    Ok(Some(FieldMetadata { label, input_kind }))
}
