//! CLI error types

use thiserror::Error;

/// CLI error types
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Malformed translation request
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Committed row does not fit its table
    #[error("Schema error: {0}")]
    Schema(#[from] gaming_types::SchemaViolation),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON parsing error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// TOML serialization error
    #[error("TOML error: {0}")]
    Toml(#[from] toml::ser::Error),
}

/// Result type for CLI operations
pub type CliResult<T> = Result<T, CliError>;
