use std::{
    fs,
    io::{self, Read as _},
    path::PathBuf,
};

use anyhow::{Result, bail};
use clap::Args;
use schema2form::validate::ValidationOutcome;

use crate::catalog::demo_engine;

#[derive(Args)]
pub struct ValidateArgs {
    /// Product type to validate against
    #[arg(short, long)]
    product_type: String,

    /// Path to a JSON record (stdin if not specified)
    input: Option<PathBuf>,
}

impl ValidateArgs {
    pub fn run(self) -> Result<()> {
        let raw = match &self.input {
            Some(path) => fs::read_to_string(path)?,
            None => {
                let mut buf = String::new();
                io::stdin().read_to_string(&mut buf)?;
                buf
            }
        };
        let candidate: serde_json::Value = serde_json::from_str(&raw)?;

        let engine = demo_engine()?;
        match engine.validate(&self.product_type, &candidate)? {
            ValidationOutcome::Valid(record) => {
                println!("{}", serde_json::to_string_pretty(&record)?);
                Ok(())
            }
            ValidationOutcome::Invalid(errors) => {
                for (key, messages) in &errors {
                    for message in messages {
                        eprintln!("{key}: {message}");
                    }
                }
                bail!("validation failed for {} field(s)", errors.len());
            }
        }
    }
}
