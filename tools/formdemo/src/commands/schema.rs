use std::{fs, path::PathBuf};

use anyhow::Result;
use clap::Args;
use schema2form::core::format_field_defs;

use crate::catalog::demo_engine;

#[derive(Args)]
pub struct SchemaArgs {
    /// Product type to inspect; lists all product types when omitted
    #[arg(short, long)]
    product_type: Option<String>,

    /// Output file path (stdout if not specified)
    #[arg(short, long)]
    output: Option<PathBuf>,
}

impl SchemaArgs {
    pub fn run(self) -> Result<()> {
        let engine = demo_engine()?;

        let text = match &self.product_type {
            Some(product_type) => {
                let field_defs = engine.variant_field_defs(product_type)?;
                format_field_defs(field_defs)?
            }
            None => {
                let values: Vec<&str> = engine.discriminant_values().collect();
                format!("{}\n", values.join("\n"))
            }
        };

        match self.output {
            Some(path) => fs::write(path, &text)?,
            None => print!("{text}"),
        }
        Ok(())
    }
}
