//! Core data types shared across the training pipeline.

use serde::{Deserialize, Serialize};

/// One labeled training example: a transaction description and its category.
///
/// Produced from the embedded seed dataset and from feedback rows. The text
/// is stored raw here; normalization happens during dataset assembly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrainingExample {
    /// Free-text transaction description.
    pub text: String,
    /// Category name, e.g. "Transporte".
    pub label: String,
}

impl TrainingExample {
    /// Create a new training example.
    pub fn new(text: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            label: label.into(),
        }
    }
}
