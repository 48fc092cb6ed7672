use anyhow::Result;
use clap::Args;

use crate::catalog::demo_engine;
use crate::render;

#[derive(Args)]
pub struct FormArgs {
    /// Product type to render
    #[arg(short, long)]
    product_type: String,

    /// Print descriptors and default record as JSON instead of a preview
    #[arg(long)]
    json: bool,
}

impl FormArgs {
    pub fn run(self) -> Result<()> {
        let engine = demo_engine()?;
        let config = engine.form_config(&self.product_type)?;
        let record = engine.default_record(&self.product_type)?;

        if self.json {
            println!("{}", serde_json::to_string_pretty(&config)?);
            println!("{}", serde_json::to_string_pretty(&record)?);
            return Ok(());
        }

        println!("=== {} ===", self.product_type);
        for descriptor in &config {
            print!("{}", render::paint(descriptor));
        }
        println!();
        println!("default record:");
        println!("{}", serde_json::to_string_pretty(&record)?);
        Ok(())
    }
}
