use std::{
    fmt::{Display, Formatter, Result},
    ops::Deref,
};

use serde_json::Value;

/// Closed field type definition for the schema intermediate representation.
///
/// A field is a base primitive or enum, possibly layered inside modifier
/// wrappers (`Optional` / `Nullable` / `Defaulted`). Required-ness is a
/// property of the outermost node only.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldType {
    String { min_length: Option<usize> },
    Number { minimum: Option<f64> },
    Boolean,
    Enum(Vec<String>),
    Optional(Box<FieldType>),
    Nullable(Box<FieldType>),
    Defaulted(Box<FieldType>, Value),
}

impl FieldType {
    /// Bare string with no length constraint.
    pub fn string() -> Self {
        Self::String { min_length: None }
    }

    /// Bare number with no lower bound.
    pub fn number() -> Self {
        Self::Number { minimum: None }
    }

    pub fn optional(inner: FieldType) -> Self {
        Self::Optional(Box::new(inner))
    }

    pub fn nullable(inner: FieldType) -> Self {
        Self::Nullable(Box::new(inner))
    }

    pub fn defaulted(inner: FieldType, default: Value) -> Self {
        Self::Defaulted(Box::new(inner), default)
    }

    pub fn is_primitive(&self) -> bool {
        !matches!(
            self,
            FieldType::Optional(_) | FieldType::Nullable(_) | FieldType::Defaulted(_, _)
        )
    }

    /// True iff the outermost node is an optional-like wrapper.
    ///
    /// Classification is single-level: `Optional(Nullable(String))` is
    /// optional because of the outermost wrapper alone. A `Defaulted` field
    /// counts as optional-for-submission even though it is always present
    /// after defaulting.
    pub fn is_optional_like(&self) -> bool {
        matches!(
            self,
            FieldType::Optional(_) | FieldType::Nullable(_) | FieldType::Defaulted(_, _)
        )
    }

    /// Peels all wrapper layers down to the base primitive or enum.
    ///
    /// Used for type conformance and default construction; never for
    /// required-flag classification.
    pub fn unwrapped(&self) -> &FieldType {
        let mut ty = self;
        loop {
            match ty {
                FieldType::Optional(inner)
                | FieldType::Nullable(inner)
                | FieldType::Defaulted(inner, _) => ty = inner,
                base => return base,
            }
        }
    }

    pub fn type_name(&self) -> &'static str {
        match self {
            FieldType::String { .. } => "string",
            FieldType::Number { .. } => "number",
            FieldType::Boolean => "boolean",
            FieldType::Enum(_) => "enum",
            FieldType::Optional(_) => "optional",
            FieldType::Nullable(_) => "nullable",
            FieldType::Defaulted(_, _) => "defaulted",
        }
    }
}

/// One field of a variant schema: key, type, and raw embedded annotations.
///
/// `meta` stays untyped JSON so malformed annotations can degrade at
/// resolution time instead of failing schema construction.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldDef {
    pub key: String,
    pub ty: FieldType,
    pub meta: Option<Value>,
}

impl FieldDef {
    pub fn new(key: impl Into<String>, ty: FieldType) -> Self {
        Self {
            key: key.into(),
            ty,
            meta: None,
        }
    }

    pub fn with_meta(key: impl Into<String>, ty: FieldType, meta: Value) -> Self {
        Self {
            key: key.into(),
            ty,
            meta: Some(meta),
        }
    }
}

/// Typed collection of [`FieldDef`] in declaration order.
///
/// Order is load-bearing: it drives the vertical layout of the rendered
/// form.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FieldDefs(pub Vec<FieldDef>);

impl FieldDefs {
    pub fn new(fields: Vec<FieldDef>) -> Self {
        Self(fields)
    }

    pub fn as_slice(&self) -> &[FieldDef] {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &FieldDef> {
        self.0.iter()
    }
}

impl From<Vec<FieldDef>> for FieldDefs {
    fn from(value: Vec<FieldDef>) -> Self {
        Self(value)
    }
}

impl From<FieldDefs> for Vec<FieldDef> {
    fn from(value: FieldDefs) -> Self {
        value.0
    }
}

impl AsRef<[FieldDef]> for FieldDefs {
    fn as_ref(&self) -> &[FieldDef] {
        self.as_slice()
    }
}

impl Deref for FieldDefs {
    type Target = [FieldDef];

    fn deref(&self) -> &Self::Target {
        self.as_slice()
    }
}

impl Display for FieldDefs {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let text = super::format_field_defs(self.as_slice())?;
        f.write_str(&text)
    }
}
