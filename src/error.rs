//! Error types for tomate.

use thiserror::Error;

/// Errors that can occur in tomate.
#[derive(Debug, Error)]
pub enum TomateError {
    /// Settings rejected during validation. Prior settings are retained.
    #[error("Invalid settings: {0}")]
    InvalidSettings(String),

    /// Settings file could not be read or written.
    #[error("Storage error: {0}")]
    Storage(String),

    /// Configuration problem (paths, environment).
    #[error("Configuration error: {0}")]
    Config(String),

    /// Terminal setup or rendering failure.
    #[error("Terminal error: {0}")]
    Terminal(String),

    /// JSON (de)serialization failure.
    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),
}
