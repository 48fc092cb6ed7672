use serde_json::json;

use schema2form::core::{
    FieldDef, FieldMetadata, FieldType, InputKind, MetadataTable, VariantSchema,
};
use schema2form::validate::ValidationOutcome;
use schema2form::{FormEngine, FormEngineError};

fn demo_document() -> serde_json::Value {
    json!({
        "discriminator": { "propertyName": "productType" },
        "oneOf": [
            {
                "type": "object",
                "properties": {
                    "productType": { "const": "BOOK" },
                    "name": {
                        "type": "string",
                        "minLength": 1,
                        "x-form": { "label": "Product name", "inputKind": "text" }
                    },
                    "price": {
                        "type": "number",
                        "minimum": 0,
                        "x-form": { "label": "Price", "inputKind": "number" }
                    },
                    "description": { "type": "string" },
                    "author": {
                        "type": "string",
                        "minLength": 1,
                        "x-form": { "label": "Author", "inputKind": "text" }
                    }
                },
                "required": ["productType", "name", "price", "author"]
            },
            {
                "type": "object",
                "properties": {
                    "productType": { "const": "ELECTRONICS" },
                    "name": {
                        "type": "string",
                        "minLength": 1,
                        "x-form": { "label": "Product name", "inputKind": "text" }
                    },
                    "price": {
                        "type": "number",
                        "minimum": 0,
                        "x-form": { "label": "Price", "inputKind": "number" }
                    },
                    "description": { "type": "string" },
                    "brand": {
                        "type": "string",
                        "minLength": 1,
                        "x-form": { "label": "Brand", "inputKind": "text" }
                    },
                    "warrantyMonths": {
                        "type": "integer",
                        "minimum": 0,
                        "x-form": { "label": "Warranty (months)", "inputKind": "number" }
                    }
                },
                "required": ["productType", "name", "price", "brand", "warrantyMonths"]
            }
        ]
    })
}

fn demo_engine() -> FormEngine {
    let mut table = MetadataTable::new();
    table.insert(
        "description",
        FieldMetadata::new("Description", InputKind::Textarea),
    );
    FormEngine::from_schema_document(&demo_document(), table).unwrap()
}

#[test]
fn form_config_covers_every_field_for_each_variant() {
    let engine = demo_engine();

    let book: Vec<String> = engine
        .form_config("BOOK")
        .unwrap()
        .into_iter()
        .map(|d| d.key)
        .collect();
    assert_eq!(book, vec!["name", "price", "description", "author"]);

    let electronics: Vec<String> = engine
        .form_config("ELECTRONICS")
        .unwrap()
        .into_iter()
        .map(|d| d.key)
        .collect();
    assert_eq!(
        electronics,
        vec!["name", "price", "description", "brand", "warrantyMonths"]
    );
}

#[test]
fn labels_come_from_annotations_then_the_table() {
    let engine = demo_engine();
    let config = engine.form_config("BOOK").unwrap();

    assert_eq!(config[0].label, "Product name");
    assert_eq!(config[2].label, "Description");
    assert_eq!(config[2].input_kind, InputKind::Textarea);
    assert!(!config[2].required);
}

#[test]
fn default_record_matches_the_selected_variant() {
    let engine = demo_engine();

    let record = engine.default_record("ELECTRONICS").unwrap();
    assert_eq!(record.get("productType"), Some(&json!("ELECTRONICS")));
    assert_eq!(record.get("warrantyMonths"), Some(&json!(0)));
    assert!(!record.contains_key("author"));
}

#[test]
fn validate_round_trips_a_well_formed_submission() {
    let engine = demo_engine();

    let outcome = engine
        .validate(
            "ELECTRONICS",
            &json!({
                "name": "Phone",
                "price": 500,
                "brand": "X",
                "warrantyMonths": "12",
            }),
        )
        .unwrap();

    match outcome {
        ValidationOutcome::Valid(record) => {
            assert_eq!(record.get("warrantyMonths"), Some(&json!(12)));
        }
        ValidationOutcome::Invalid(errors) => panic!("unexpected errors: {errors:?}"),
    }
}

#[test]
fn validate_reports_field_errors_as_data() {
    let engine = demo_engine();

    let outcome = engine
        .validate("BOOK", &json!({"name": "", "price": 10, "author": "A"}))
        .unwrap();
    let errors = outcome.errors().expect("expected invalid outcome");
    assert_eq!(errors.len(), 1);
    assert!(errors.contains_key("name"));
}

#[test]
fn unknown_product_type_surfaces_as_engine_error() {
    let engine = demo_engine();

    let err = engine.form_config("FURNITURE").unwrap_err();
    assert!(matches!(err, FormEngineError::UnknownVariant(_)));
}

#[test]
fn builder_rejects_inconsistent_variants_before_any_build() {
    let err = FormEngine::builder()
        .register_variant(VariantSchema::new(
            "productType",
            "BOOK",
            vec![FieldDef::new("name", FieldType::string())],
        ))
        .register_variant(VariantSchema::new(
            "kind",
            "ELECTRONICS",
            vec![FieldDef::new("name", FieldType::string())],
        ))
        .build()
        .unwrap_err();

    assert!(matches!(err, FormEngineError::Shape(_)));
}

#[test]
fn discriminant_values_drive_the_selector_order() {
    let engine = demo_engine();
    let values: Vec<&str> = engine.discriminant_values().collect();
    assert_eq!(values, vec!["BOOK", "ELECTRONICS"]);
}
