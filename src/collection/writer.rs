//! Serialize and write the generated collection

use std::path::Path;

use anyhow::Result;

use crate::error::ApiForgeError;

use super::types::Collection;

/// Render a collection as pretty-printed Postman JSON
pub fn collection_to_json(collection: &Collection) -> Result<String, ApiForgeError> {
    Ok(serde_json::to_string_pretty(collection)?)
}

/// Write a collection to disk, creating parent directories as needed
pub fn write_collection(collection: &Collection, output_path: &Path) -> Result<()> {
    let json = collection_to_json(collection)?;

    if let Some(parent) = output_path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| ApiForgeError::CollectionWriteError {
            path: output_path.to_path_buf(),
            source: e,
        })?;
    }

    std::fs::write(output_path, json).map_err(|e| ApiForgeError::CollectionWriteError {
        path: output_path.to_path_buf(),
        source: e,
    })?;

    Ok(())
}
