use serde_json::json;

use schema2form_core::{FieldDef, FieldDefs, FieldType, format_field_defs};

#[test]
fn bare_fields_render_on_one_line() {
    let fields = vec![
        FieldDef::new("name", FieldType::String { min_length: Some(1) }),
        FieldDef::new("price", FieldType::Number { minimum: Some(0.0) }),
        FieldDef::new("inStock", FieldType::Boolean),
    ];

    let text = format_field_defs(&fields).unwrap();
    assert_eq!(
        text,
        "name: { type: string, required: true, min_length: 1 }\n\
         price: { type: number, required: true, minimum: 0 }\n\
         inStock: { type: boolean, required: true }\n"
    );
}

#[test]
fn wrapped_fields_show_the_wrapper_chain() {
    let fields = vec![FieldDef::new(
        "description",
        FieldType::optional(FieldType::nullable(FieldType::string())),
    )];

    let text = format_field_defs(&fields).unwrap();
    assert_eq!(
        text,
        "description: { type: string, required: false, wrapper: optional < nullable }\n"
    );
}

#[test]
fn defaulted_fields_show_their_default() {
    let fields = vec![FieldDef::new(
        "warrantyMonths",
        FieldType::defaulted(FieldType::number(), json!(12)),
    )];

    let text = format_field_defs(&fields).unwrap();
    assert_eq!(
        text,
        "warrantyMonths: { type: number, required: false, wrapper: defaulted, default: 12 }\n"
    );
}

#[test]
fn enum_fields_list_their_literals() {
    let fields = vec![FieldDef::new(
        "condition",
        FieldType::Enum(vec!["NEW".to_string(), "USED".to_string()]),
    )];

    let text = format_field_defs(&fields).unwrap();
    assert_eq!(text, "condition: { type: enum, required: true [NEW|USED] }\n");
}

#[test]
fn display_on_field_defs_matches_the_formatter() {
    let defs = FieldDefs::new(vec![FieldDef::new("name", FieldType::string())]);
    assert_eq!(defs.to_string(), format_field_defs(&defs).unwrap());
}
