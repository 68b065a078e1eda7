//! apiforge: A fast Rust generator for Postman request collections
//!
//! This library compiles DBML schema text into Postman v2.1 collection JSON,
//! optionally reorganized by an externally computed semantic analysis.

pub mod collection;
pub mod error;
pub mod model;
pub mod parser;
pub mod util;

use std::path::PathBuf;

use anyhow::Result;

pub use collection::GenerationContext;
pub use error::ApiForgeError;

/// Options for generating a collection
#[derive(Debug, Clone)]
pub struct GenerateOptions {
    /// Path to the DBML schema file
    pub schema_path: PathBuf,
    /// Optional path to a semantic-analysis JSON document
    pub analysis_path: Option<PathBuf>,
    /// Output path for the collection JSON
    pub output_path: Option<PathBuf>,
    /// Project identifier bound into generated requests
    pub project_id: String,
    /// Environment identifier bound into generated requests
    pub environment_id: String,
    /// Concrete API key; None leaves the `{{api_key}}` placeholder in headers
    pub api_key: Option<String>,
    /// Base URL bound to the `base_url` collection variable
    pub base_url: String,
    /// Explicit table selection; None means the analysis skip list applies
    pub tables: Option<Vec<String>>,
    /// Enable verbose output
    pub verbose: bool,
}

/// Generate a collection from a DBML schema file
pub fn generate_collection(options: GenerateOptions) -> Result<PathBuf> {
    if options.verbose {
        println!("Reading schema: {}", options.schema_path.display());
    }

    // Step 1: Read and parse the schema
    let dbml =
        std::fs::read_to_string(&options.schema_path).map_err(|e| ApiForgeError::SchemaReadError {
            path: options.schema_path.clone(),
            source: e,
        })?;
    let schema = parser::parse_dbml(&dbml);
    if schema.tables.is_empty() {
        return Err(ApiForgeError::EmptySchema.into());
    }

    if options.verbose {
        println!(
            "Parsed {} tables, {} references",
            schema.tables.len(),
            schema.refs.len()
        );
    }

    // Step 2: Load the analysis, if one was supplied
    let analysis = match &options.analysis_path {
        Some(path) => {
            let text =
                std::fs::read_to_string(path).map_err(|e| ApiForgeError::AnalysisReadError {
                    path: path.clone(),
                    source: e,
                })?;
            let analysis = model::AnalysisResult::from_json(&text).map_err(|e| {
                ApiForgeError::AnalysisParseError {
                    path: path.clone(),
                    source: e,
                }
            })?;
            Some(analysis)
        }
        None => None,
    };

    // Step 3: Build the collection tree
    let ctx = GenerationContext {
        project_id: options.project_id,
        environment_id: options.environment_id,
        api_key: options.api_key,
        base_url: options.base_url,
    };
    let built = match &analysis {
        Some(analysis) => {
            let selection = options
                .tables
                .as_ref()
                .map(|names| model::TableSelection::from_names(&schema, names));
            collection::build_with_analysis(&schema, analysis, &ctx, selection.as_ref())
        }
        None => collection::build_collection(&schema, &ctx),
    };

    if options.verbose {
        println!("Built collection with {} top-level folders", built.item.len());
    }

    // Step 4: Determine output path
    let output_path = options.output_path.unwrap_or_else(|| {
        let schema_dir = options
            .schema_path
            .parent()
            .unwrap_or(std::path::Path::new("."));
        let stem = options
            .schema_path
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("collection");
        schema_dir.join(format!("{}.postman_collection.json", stem))
    });

    // Step 5: Serialize and write
    collection::write_collection(&built, &output_path)?;

    if options.verbose {
        println!("Created collection: {}", output_path.display());
    }

    Ok(output_path)
}
