use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use apiforge::{generate_collection, GenerateOptions};

#[derive(Parser)]
#[command(name = "apiforge")]
#[command(author, version, about = "Fast Rust generator for Postman collections from DBML schemas")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a Postman collection from a DBML schema file
    Generate {
        /// Path to the DBML schema file
        #[arg(short, long)]
        schema: PathBuf,

        /// Path to a semantic-analysis JSON document; enables organized output
        #[arg(short, long)]
        analysis: Option<PathBuf>,

        /// Output path (defaults to <schema>.postman_collection.json)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Project identifier bound into generated requests
        #[arg(long, default_value = "")]
        project_id: String,

        /// Environment identifier bound into generated requests
        #[arg(long, default_value = "")]
        environment_id: String,

        /// API key for the x-api-key header (defaults to the {{api_key}} placeholder)
        #[arg(long)]
        api_key: Option<String>,

        /// Base URL bound to the base_url collection variable
        #[arg(long, default_value = "")]
        base_url: String,

        /// Comma-separated table selection overriding the analysis skip list
        #[arg(long, value_delimiter = ',')]
        tables: Option<Vec<String>>,

        /// Enable verbose output
        #[arg(short, long)]
        verbose: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Generate {
            schema,
            analysis,
            output,
            project_id,
            environment_id,
            api_key,
            base_url,
            tables,
            verbose,
        } => {
            let options = GenerateOptions {
                schema_path: schema,
                analysis_path: analysis,
                output_path: output,
                project_id,
                environment_id,
                api_key,
                base_url,
                tables,
                verbose,
            };

            generate_collection(options)?;
        }
    }

    Ok(())
}
