//! Error types for rt-output.

use rt_core::ConfigError;
use thiserror::Error;

/// Errors that can occur when writing output or reading scenarios.
#[derive(Debug, Error)]
pub enum OutputError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV write error: {0}")]
    Csv(#[from] csv::Error),

    #[error("bad scenario JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid scenario: {0}")]
    Config(#[from] ConfigError),
}

/// Alias for `Result<T, OutputError>`.
pub type OutputResult<T> = Result<T, OutputError>;
