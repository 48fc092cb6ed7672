//! Built-in product catalog: the BOOK/ELECTRONICS union document and the
//! external metadata table the demo runs against.
//!
//! The union document takes the shape an OpenAPI code-generation step
//! would produce; `description` deliberately carries no embedded
//! annotation so the external-table fallback stays visible in the demo.

use anyhow::Result;
use schema2form::FormEngine;
use schema2form::core::{FieldMetadata, InputKind, MetadataTable};
use serde_json::json;

pub fn demo_engine() -> Result<FormEngine> {
    let doc = json!({
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
    });

    let mut table = MetadataTable::new();
    table.insert(
        "description",
        FieldMetadata::new("Description", InputKind::Textarea),
    );

    Ok(FormEngine::from_schema_document(&doc, table)?)
}
