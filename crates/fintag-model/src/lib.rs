//! # Fintag Model
//!
//! The trainable classifier behind the category service, plus everything
//! needed to run its lifecycle:
//!
//! - [`TextClassifier`] — the capability surface the rest of the system
//!   depends on (predict over normalized text, known label set)
//! - [`TfidfLogisticPipeline`] — the concrete TF-IDF + multinomial
//!   logistic-regression implementation
//! - [`artifact`] — durable, versioned serialization with atomic writes
//! - [`ModelRegistry`] — the single active model, swappable under a lock
//! - [`trainer`] — one synchronous retrain unit of work
//!
//! The pipeline expects already-normalized text; callers go through
//! `fintag_core::normalize` on both the fit and predict paths.

pub mod artifact;
mod classifier;
mod error;
mod linear;
mod registry;
pub mod trainer;
mod vectorizer;

pub use classifier::{TextClassifier, TfidfLogisticPipeline};
pub use error::{ModelError, ModelResult};
pub use registry::ModelRegistry;
pub use trainer::{run_training, TrainingReport};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::trainer::{run_training, TrainingReport};
    pub use crate::{ModelError, ModelRegistry, ModelResult};
    pub use crate::{TextClassifier, TfidfLogisticPipeline};
}
