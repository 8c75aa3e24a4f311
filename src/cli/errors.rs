//! CLI-specific error types
//!
//! All CLI errors end the process with a non-zero exit code.

use std::io;

use thiserror::Error;

use crate::catalog::CatalogError;
use crate::http_server::ConfigError;
use crate::query::QueryError;

/// Result type for CLI operations
pub type CliResult<T> = Result<T, CliError>;

/// CLI error
#[derive(Debug, Error)]
pub enum CliError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Dataset error: {0}")]
    Catalog(#[from] CatalogError),

    #[error("{0}")]
    Query(#[from] QueryError),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Failed to write results: {0}")]
    Output(#[from] serde_json::Error),
}

impl CliError {
    /// Get the error code string
    pub fn code(&self) -> &'static str {
        match self {
            CliError::Config(_) => "MOVIEDEX_CLI_CONFIG_ERROR",
            CliError::Catalog(err) => err.code(),
            CliError::Query(_) => "MOVIEDEX_CLI_INVALID_QUERY",
            CliError::Io(_) => "MOVIEDEX_CLI_IO_ERROR",
            CliError::Output(_) => "MOVIEDEX_CLI_OUTPUT_ERROR",
        }
    }
}
