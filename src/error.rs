//! Error types for apiforge

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur during collection generation
#[derive(Error, Debug)]
pub enum ApiForgeError {
    #[error("Failed to read schema file: {path}")]
    SchemaReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("No tables found in schema")]
    EmptySchema,

    #[error("Failed to read analysis file: {path}")]
    AnalysisReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse analysis file: {path}")]
    AnalysisParseError {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to write collection to {path}")]
    CollectionWriteError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Collection serialization error: {message}")]
    SerializationError { message: String },
}

impl From<serde_json::Error> for ApiForgeError {
    fn from(err: serde_json::Error) -> Self {
        ApiForgeError::SerializationError {
            message: err.to_string(),
        }
    }
}
