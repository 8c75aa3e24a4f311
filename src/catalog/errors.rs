//! Catalog loading errors

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Result type for catalog operations
pub type CatalogResult<T> = Result<T, CatalogError>;

/// Failures while reading the movie dataset
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Dataset file could not be read
    #[error("Failed to read dataset {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Dataset is not a JSON array of movie records
    #[error("Invalid dataset: {0}")]
    Parse(#[from] serde_json::Error),
}

impl CatalogError {
    /// Stable error code for log lines
    pub fn code(&self) -> &'static str {
        match self {
            CatalogError::Io { .. } => "MOVIEDEX_CATALOG_IO",
            CatalogError::Parse(_) => "MOVIEDEX_CATALOG_PARSE",
        }
    }
}
