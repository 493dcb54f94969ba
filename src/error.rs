//! Error types for tablemap.

use thiserror::Error;

/// Main error type for the tablemap library.
#[derive(Debug, Error)]
pub enum TablemapError {
    /// The supplied source path does not name a readable file.
    /// Checked explicitly before any parsing is attempted.
    #[error("The supplied source file '{0}' does not exist.")]
    InvalidSource(String),

    /// The parsed source document violates the source schema.
    #[error("The source file could not be validated. {}", errors.join("; "))]
    SchemaValidation { errors: Vec<String> },

    /// The embedded source schema failed to parse or compile.
    #[error("schema load error: {0}")]
    SchemaLoad(String),

    /// A validated document did not have the expected shape during
    /// expansion. Unreachable for documents that passed validation.
    #[error("malformed source document: {0}")]
    Malformed(String),

    /// YAML parse error.
    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml_ng::Error),

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// IO error (file operations).
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for tablemap operations.
pub type Result<T> = std::result::Result<T, TablemapError>;
