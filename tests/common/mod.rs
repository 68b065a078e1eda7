//! Common test utilities for apiforge tests

use std::fs;
use std::path::PathBuf;

use tempfile::TempDir;

/// Test context with a temporary directory for isolated generation runs
pub struct TestContext {
    /// Kept to prevent temp directory cleanup until TestContext is dropped
    _temp_dir: TempDir,
    pub work_dir: PathBuf,
}

impl TestContext {
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let work_dir = temp_dir.path().to_path_buf();
        Self {
            _temp_dir: temp_dir,
            work_dir,
        }
    }

    /// Write DBML content to `schema.dbml` in the work directory
    pub fn write_schema(&self, dbml: &str) -> PathBuf {
        let path = self.work_dir.join("schema.dbml");
        fs::write(&path, dbml).expect("Failed to write schema file");
        path
    }

    /// Write analysis JSON to `analysis.json` in the work directory
    pub fn write_analysis(&self, json: &serde_json::Value) -> PathBuf {
        let path = self.work_dir.join("analysis.json");
        fs::write(&path, serde_json::to_string_pretty(json).unwrap())
            .expect("Failed to write analysis file");
        path
    }

    /// Default options generating from `schema.dbml` into the work directory
    pub fn options(&self, schema_path: PathBuf) -> apiforge::GenerateOptions {
        apiforge::GenerateOptions {
            schema_path,
            analysis_path: None,
            output_path: Some(self.work_dir.join("collection.json")),
            project_id: "proj-1".to_string(),
            environment_id: "env-1".to_string(),
            api_key: Some("secret-key".to_string()),
            base_url: "https://api.example.com".to_string(),
            tables: None,
            verbose: false,
        }
    }

    /// Run generation and return the parsed output document
    pub fn generate(&self, options: apiforge::GenerateOptions) -> GenerateResult {
        match apiforge::generate_collection(options) {
            Ok(output_path) => {
                let content =
                    fs::read_to_string(&output_path).expect("Failed to read generated collection");
                let document =
                    serde_json::from_str(&content).expect("Generated collection is not valid JSON");
                GenerateResult {
                    success: true,
                    output_path: Some(output_path),
                    document: Some(document),
                    errors: vec![],
                }
            }
            Err(e) => GenerateResult {
                success: false,
                output_path: None,
                document: None,
                errors: vec![format!("{e:#}")],
            },
        }
    }

    /// Run generation, panicking on failure, and return the parsed document
    pub fn generate_successfully(&self, options: apiforge::GenerateOptions) -> serde_json::Value {
        let result = self.generate(options);
        assert!(result.success, "Generation failed: {:?}", result.errors);
        result.document.expect("Generation succeeded but no output")
    }
}

/// Result of a generation run
pub struct GenerateResult {
    pub success: bool,
    pub output_path: Option<PathBuf>,
    pub document: Option<serde_json::Value>,
    pub errors: Vec<String>,
}

/// Names of the top-level folders in a generated collection document
pub fn top_level_names(document: &serde_json::Value) -> Vec<String> {
    document["item"]
        .as_array()
        .expect("collection has no item array")
        .iter()
        .map(|item| item["name"].as_str().unwrap_or_default().to_string())
        .collect()
}

/// Find a top-level folder by name
pub fn find_folder<'a>(document: &'a serde_json::Value, name: &str) -> Option<&'a serde_json::Value> {
    document["item"]
        .as_array()?
        .iter()
        .find(|item| item["name"] == name)
}
