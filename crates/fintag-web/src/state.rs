//! Application state: the model registry, feedback store and retrain
//! orchestration shared by all request handlers.
//!
//! Retraining runs as a background blocking task that never shares a call
//! stack with a request handler. Exactly one retrain may run at a time; a
//! trigger while one is in flight is refused and the caller told so. A
//! failed retrain only logs: the previously active model keeps serving.

use fintag_core::{normalize, DataResult, FeedbackStore};
use fintag_model::{artifact, run_training, ModelRegistry, ModelResult, TextClassifier};
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::{error, info};

/// Outcome of a retrain trigger.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RetrainStatus {
    /// A background training task was started.
    Started,
    /// A retrain is already running; the trigger was refused.
    Busy,
}

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    registry: Arc<ModelRegistry>,
    feedback: Arc<FeedbackStore>,
    model_dir: Arc<PathBuf>,
    retraining: Arc<AtomicBool>,
}

impl AppState {
    /// Wire up the state from its collaborators.
    pub fn new(registry: ModelRegistry, feedback: FeedbackStore, model_dir: PathBuf) -> Self {
        Self {
            registry: Arc::new(registry),
            feedback: Arc::new(feedback),
            model_dir: Arc::new(model_dir),
            retraining: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Classify a raw transaction description.
    ///
    /// Normalizes the text, grabs the active classifier under a brief read
    /// lock, and predicts outside the lock. A swap completing concurrently
    /// is invisible to this call: it uses whichever model it captured.
    pub fn classify(&self, text: &str) -> ModelResult<String> {
        let normalized = normalize(text);
        let classifier = self.registry.active();
        classifier.predict(&normalized)
    }

    /// Append a user correction to the feedback store.
    pub fn record_feedback(&self, text: &str, label: &str) -> DataResult<()> {
        self.feedback.append(text, label)
    }

    /// Kick off a background retrain, unless one is already running.
    ///
    /// The task trains against the feedback store, persists the artifact,
    /// reloads it from disk and swaps it into the registry. Failures are
    /// logged and leave the active model untouched; the HTTP caller never
    /// learns the outcome, only that training started.
    pub fn trigger_retrain(&self) -> RetrainStatus {
        if !self.begin_retrain() {
            return RetrainStatus::Busy;
        }

        let state = self.clone();
        tokio::task::spawn_blocking(move || {
            let outcome = run_training(&state.feedback, &state.model_dir)
                .and_then(|report| artifact::load(&state.model_dir).map(|p| (report, p)));

            match outcome {
                Ok((report, pipeline)) => {
                    state.registry.swap(Arc::new(pipeline));
                    info!(
                        train = report.train_examples,
                        eval = report.eval_examples,
                        accuracy = report.accuracy,
                        labels = report.num_labels,
                        "retrain succeeded, new model active"
                    );
                }
                Err(e) => error!("retrain failed, keeping previous model: {}", e),
            }

            state.end_retrain();
        });

        RetrainStatus::Started
    }

    /// True while a background retrain is in flight.
    pub fn is_retraining(&self) -> bool {
        self.retraining.load(Ordering::SeqCst)
    }

    /// Claim the single retrain slot. Returns false if already claimed.
    fn begin_retrain(&self) -> bool {
        !self.retraining.swap(true, Ordering::SeqCst)
    }

    fn end_retrain(&self) {
        self.retraining.store(false, Ordering::SeqCst);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    struct FixedClassifier(Vec<String>);

    impl TextClassifier for FixedClassifier {
        fn predict(&self, _text: &str) -> ModelResult<String> {
            Ok(self.0[0].clone())
        }

        fn labels(&self) -> &[String] {
            &self.0
        }
    }

    fn stub_state(dir: &TempDir) -> AppState {
        let registry = ModelRegistry::new(Arc::new(FixedClassifier(vec!["Outros".into()])));
        let feedback = FeedbackStore::new(dir.path().join("feedback.csv"));
        AppState::new(registry, feedback, dir.path().join("model"))
    }

    #[test]
    fn classify_goes_through_the_active_model() {
        let dir = TempDir::new().unwrap();
        let state = stub_state(&dir);
        assert_eq!(state.classify("qualquer coisa").unwrap(), "Outros");
    }

    #[test]
    fn retrain_slot_is_exclusive() {
        let dir = TempDir::new().unwrap();
        let state = stub_state(&dir);

        assert!(state.begin_retrain());
        assert!(!state.begin_retrain());

        state.end_retrain();
        assert!(state.begin_retrain());
    }

    #[test]
    fn feedback_validation_propagates() {
        let dir = TempDir::new().unwrap();
        let state = stub_state(&dir);
        assert!(state.record_feedback("texto", "").is_err());
        assert!(state.record_feedback("texto", "Saude").is_ok());
    }
}
