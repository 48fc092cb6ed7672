use std::fmt::{Error, Result, Write as _};

use super::{FieldDef, FieldType};

/// Format field definitions in a readable style, one field per line:
/// base type, required flag, wrapper chain, and declared constraints.
pub fn format_field_defs(fields: impl AsRef<[FieldDef]>) -> std::result::Result<String, Error> {
    let fields = fields.as_ref();
    let mut out = String::new();

    for field in fields.iter() {
        format_field(field, &mut out)?;
    }

    Ok(out)
}

fn format_field(field: &FieldDef, out: &mut String) -> Result {
    write!(
        out,
        "{}: {{ type: {}, required: {}",
        field.key,
        base_name(field.ty.unwrapped()),
        !field.ty.is_optional_like()
    )?;

    let wrappers = wrapper_chain(&field.ty);
    if !wrappers.is_empty() {
        write!(out, ", wrapper: {}", wrappers.join(" < "))?;
    }

    match field.ty.unwrapped() {
        FieldType::String {
            min_length: Some(min),
        } => write!(out, ", min_length: {min}")?,
        FieldType::Number {
            minimum: Some(min), ..
        } => write!(out, ", minimum: {min}")?,
        FieldType::Enum(literals) => write!(out, " [{}]", literals.join("|"))?,
        _ => {}
    }

    if let FieldType::Defaulted(_, default) = &field.ty {
        write!(out, ", default: {default}")?;
    }

    writeln!(out, " }}")
}

fn base_name(base: &FieldType) -> &'static str {
    base.type_name()
}

fn wrapper_chain(ty: &FieldType) -> Vec<&'static str> {
    let mut chain = Vec::new();
    let mut current = ty;
    loop {
        match current {
            FieldType::Optional(inner) => {
                chain.push("optional");
                current = inner;
            }
            FieldType::Nullable(inner) => {
                chain.push("nullable");
                current = inner;
            }
            FieldType::Defaulted(inner, _) => {
                chain.push("defaulted");
                current = inner;
            }
            _ => return chain,
        }
    }
}
