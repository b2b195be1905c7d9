//! In-memory registry of the single active classifier.
//!
//! The lock guards only the reference read and the swap, never prediction
//! itself: callers clone the `Arc` out and predict outside the lock. A
//! superseded model lives until the last in-flight prediction drops its
//! reference.

use crate::artifact;
use crate::classifier::TextClassifier;
use crate::error::ModelResult;
use std::path::Path;
use std::sync::{Arc, PoisonError, RwLock};
use tracing::info;

/// Holds the currently active classifier behind a read/write lock.
pub struct ModelRegistry {
    active: RwLock<Arc<dyn TextClassifier>>,
}

impl ModelRegistry {
    /// Load the initial classifier from the durable artifact in `dir`.
    ///
    /// Fails if the artifact is absent or corrupt. There is no fallback
    /// model, so the caller must treat this as fatal and refuse to serve.
    pub fn load_initial(dir: &Path) -> ModelResult<Self> {
        let pipeline = artifact::load(dir)?;
        info!(labels = pipeline.labels().len(), "model loaded");
        Ok(Self::new(Arc::new(pipeline)))
    }

    /// Wrap an already-constructed classifier. Used by tests to install
    /// deterministic stubs.
    pub fn new(classifier: Arc<dyn TextClassifier>) -> Self {
        Self {
            active: RwLock::new(classifier),
        }
    }

    /// Current active classifier. The read lock is held only for the
    /// duration of the reference clone.
    pub fn active(&self) -> Arc<dyn TextClassifier> {
        self.active
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Atomically replace the active classifier.
    pub fn swap(&self, new: Arc<dyn TextClassifier>) {
        let mut guard = self.active.write().unwrap_or_else(PoisonError::into_inner);
        *guard = new;
        info!("active model swapped");
    }
}
