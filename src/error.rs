//! Error types for tasklink.

use thiserror::Error;

/// Errors produced outside the line parser.
///
/// Parsing a line never fails; these cover configuration, note files and
/// output formatting.
#[derive(Debug, Error)]
pub enum TasklinkError {
    /// Configuration could not be loaded, saved or resolved.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Underlying I/O failure.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization failure.
    #[error("Failed to serialize output: {0}")]
    Parse(#[from] serde_json::Error),

    /// The caller supplied something we cannot work with.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// A note, line or link target does not exist.
    #[error("Not found: {0}")]
    NotFound(String),
}
