//! Error types for the data layer.

use thiserror::Error;

/// Errors produced by the data layer.
#[derive(Debug, Error)]
pub enum DataError {
    /// A required field was empty or absent.
    #[error("missing required field: {0}")]
    MissingField(&'static str),

    /// Underlying filesystem failure.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for data layer operations.
pub type DataResult<T> = Result<T, DataError>;
