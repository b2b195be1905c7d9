//! # Fintag Core
//!
//! Training data layer for the fintag category service.
//!
//! This crate owns everything that happens before a model is fit:
//! - Text → canonical form conversion (case, accents, whitespace)
//! - The embedded seed dataset of labeled transaction descriptions
//! - The append-only feedback store of user corrections
//! - Dataset assembly with a label-stratified train/eval split
//!
//! Normalization must be applied identically at training time and at
//! inference time; both paths go through [`normalize`].

mod dataset;
mod error;
mod feedback;
mod normalize;
mod seed;
mod types;

pub use dataset::{assemble, Dataset};
pub use error::{DataError, DataResult};
pub use feedback::FeedbackStore;
pub use normalize::normalize;
pub use seed::seed_examples;
pub use types::TrainingExample;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::{assemble, normalize, seed_examples};
    pub use crate::{DataError, DataResult, Dataset, FeedbackStore, TrainingExample};
}
