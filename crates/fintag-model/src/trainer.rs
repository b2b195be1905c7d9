//! One retrain unit of work: assemble, fit, evaluate, persist.
//!
//! Synchronous and self-contained so it can run on a background worker.
//! Every failure comes back as an `Err` for the orchestrating caller to
//! log; nothing here panics or touches the active model.

use crate::artifact;
use crate::classifier::{TextClassifier, TfidfLogisticPipeline};
use crate::error::ModelResult;
use fintag_core::{assemble, seed_examples, FeedbackStore};
use std::path::Path;
use tracing::info;

/// Summary of a completed training run.
#[derive(Debug, Clone)]
pub struct TrainingReport {
    /// Examples assembled across seed and feedback.
    pub total_examples: usize,
    /// Examples used for the fit.
    pub train_examples: usize,
    /// Examples held out for evaluation (zero for small datasets).
    pub eval_examples: usize,
    /// Accuracy on the holdout, when one exists. Diagnostic only.
    pub accuracy: Option<f64>,
    /// Distinct labels observed at training time.
    pub num_labels: usize,
}

/// Assemble the dataset, fit a fresh pipeline and persist it into
/// `model_dir`. The feedback store's lock serializes this read against
/// concurrent appends from the serving path.
pub fn run_training(store: &FeedbackStore, model_dir: &Path) -> ModelResult<TrainingReport> {
    let feedback = store.load_all()?;
    let dataset = assemble(&seed_examples(), &feedback);

    info!(
        total = dataset.len(),
        feedback = feedback.len(),
        train = dataset.train_texts.len(),
        eval = dataset.eval_texts.len(),
        labels = dataset.labels.len(),
        "training dataset assembled"
    );

    let pipeline = TfidfLogisticPipeline::fit(&dataset.train_texts, &dataset.train_labels)?;

    let accuracy = if dataset.eval_texts.is_empty() {
        None
    } else {
        let acc = pipeline.evaluate(&dataset.eval_texts, &dataset.eval_labels);
        info!(accuracy = acc, "holdout evaluation");
        Some(acc)
    };

    artifact::save(&pipeline, model_dir)?;
    info!(dir = %model_dir.display(), "model artifact persisted");

    Ok(TrainingReport {
        total_examples: dataset.len(),
        train_examples: dataset.train_texts.len(),
        eval_examples: dataset.eval_texts.len(),
        accuracy,
        num_labels: pipeline.labels().len(),
    })
}
