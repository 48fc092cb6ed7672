use schema2form_core::{
    FieldDef, FieldType, ProductUnion, SchemaShapeError, VariantSchema,
};

fn book_variant() -> VariantSchema {
    VariantSchema::new(
        "productType",
        "BOOK",
        vec![
            FieldDef::new("name", FieldType::String { min_length: Some(1) }),
            FieldDef::new("author", FieldType::String { min_length: Some(1) }),
        ],
    )
}

fn electronics_variant() -> VariantSchema {
    VariantSchema::new(
        "productType",
        "ELECTRONICS",
        vec![
            FieldDef::new("name", FieldType::String { min_length: Some(1) }),
            FieldDef::new("brand", FieldType::string()),
        ],
    )
}

#[test]
fn variant_for_resolves_registered_discriminants() {
    let union = ProductUnion::new(vec![book_variant(), electronics_variant()]).unwrap();

    assert_eq!(union.discriminant_key(), "productType");
    assert_eq!(union.variant_for("BOOK").unwrap().discriminant_value, "BOOK");
    assert_eq!(
        union.variant_for("ELECTRONICS").unwrap().discriminant_value,
        "ELECTRONICS"
    );
}

#[test]
fn variant_for_rejects_unknown_discriminants() {
    let union = ProductUnion::new(vec![book_variant(), electronics_variant()]).unwrap();

    let err = union.variant_for("FURNITURE").unwrap_err();
    assert_eq!(err.value, "FURNITURE");
    assert_eq!(err.known, vec!["BOOK".to_string(), "ELECTRONICS".to_string()]);
}

#[test]
fn discriminant_values_keep_registration_order() {
    let union = ProductUnion::new(vec![electronics_variant(), book_variant()]).unwrap();

    let values: Vec<&str> = union.discriminant_values().collect();
    assert_eq!(values, vec!["ELECTRONICS", "BOOK"]);
}

#[test]
fn construction_rejects_mismatched_discriminant_keys() {
    let mut odd = electronics_variant();
    odd.discriminant_key = "kind".to_string();

    let err = ProductUnion::new(vec![book_variant(), odd]).unwrap_err();
    match err {
        SchemaShapeError::DiscriminantKeyMismatch {
            expected,
            found,
            variant,
        } => {
            assert_eq!(expected, "productType");
            assert_eq!(found, "kind");
            assert_eq!(variant, "ELECTRONICS");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn construction_rejects_colliding_discriminant_values() {
    let mut clone = electronics_variant();
    clone.discriminant_value = "BOOK".to_string();

    let err = ProductUnion::new(vec![book_variant(), clone]).unwrap_err();
    assert!(matches!(
        err,
        SchemaShapeError::DuplicateDiscriminantValue { value } if value == "BOOK"
    ));
}

#[test]
fn construction_rejects_empty_unions() {
    let err = ProductUnion::new(Vec::new()).unwrap_err();
    assert!(matches!(err, SchemaShapeError::EmptyUnion));
}
