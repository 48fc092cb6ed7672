mod catalog;
mod commands;
mod render;

use anyhow::Result;
use clap::{Parser, Subcommand};
use commands::{form::FormArgs, schema::SchemaArgs, validate::ValidateArgs};

#[derive(Parser)]
#[command(name = "formdemo", about = "Inspect and exercise schema-driven product forms")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the field definitions for a product type
    Schema(SchemaArgs),
    /// Print the rendered form configuration and default record
    Form(FormArgs),
    /// Validate a JSON record against a product type
    Validate(ValidateArgs),
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Schema(args) => args.run(),
        Commands::Form(args) => args.run(),
        Commands::Validate(args) => args.run(),
    }
}
