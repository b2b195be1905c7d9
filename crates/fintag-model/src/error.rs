//! Error types for model training and lifecycle operations.

use thiserror::Error;

/// Errors that can occur while training, persisting or loading a model.
#[derive(Debug, Error)]
pub enum ModelError {
    /// No artifact exists at the configured path. Fatal at startup: the
    /// service has no fallback model to serve with.
    #[error("model artifact not found at {0}; run `fintag-train` first")]
    ArtifactMissing(String),

    /// The artifact exists but cannot be read back into a classifier.
    #[error("corrupt model artifact: {0}")]
    CorruptModel(String),

    /// The fit step itself failed (empty data, inconsistent inputs).
    #[error("training failed: {0}")]
    Training(String),

    /// Data layer failure while assembling the training set.
    #[error(transparent)]
    Data(#[from] fintag_core::DataError),

    /// Underlying filesystem failure.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for model operations.
pub type ModelResult<T> = Result<T, ModelError>;
