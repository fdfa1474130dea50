//! Error types for chromastr

use thiserror::Error;

/// Main error type for chromastr operations
#[derive(Error, Debug)]
pub enum ChromaError {
    /// A value fell outside the valid domain of its type
    #[error("Range error: {0}")]
    Range(String),

    /// Escape bytes did not match the SGR grammar
    #[error("Parse error: {0}")]
    Parse(String),

    /// A style or color code is not in the recognized set
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// A structured color specification was ambiguous or malformed
    #[error("Invalid color spec: {0}")]
    InvalidColorSpec(String),

    /// Removal of an entry that is not present
    #[error("Not found: {0}")]
    NotFound(String),

    /// IO error during config file operations
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Result type alias for chromastr operations
pub type Result<T> = std::result::Result<T, ChromaError>;
