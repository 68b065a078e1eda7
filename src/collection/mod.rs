//! Request-collection generation

pub mod organized;
pub mod sample;
pub mod standard;
pub mod types;
mod writer;

pub use organized::build_with_analysis;
pub use standard::build_collection;
pub use types::{Collection, RequestItem};
pub use writer::{collection_to_json, write_collection};

/// Inputs shared by every generated request: identifiers and credentials the
/// request templates and the collection variable list are seeded from.
#[derive(Debug, Clone, Default)]
pub struct GenerationContext {
    pub project_id: String,
    pub environment_id: String,
    /// Concrete API key, or None to fall back to the `{{api_key}}` placeholder
    pub api_key: Option<String>,
    pub base_url: String,
}

impl GenerationContext {
    /// Value for the `x-api-key` header
    pub(crate) fn api_key_value(&self) -> String {
        self.api_key
            .clone()
            .unwrap_or_else(|| "{{api_key}}".to_string())
    }
}
