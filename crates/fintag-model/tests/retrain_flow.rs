//! End-to-end model lifecycle: initial training, serving, feedback,
//! retrain, swap.

use fintag_core::{normalize, FeedbackStore};
use fintag_model::{artifact, run_training, ModelRegistry, TextClassifier};
use std::sync::Arc;
use tempfile::TempDir;

#[test]
fn seed_model_classifies_known_transactions() {
    let dir = TempDir::new().unwrap();
    let store = FeedbackStore::new(dir.path().join("feedback.csv"));
    let model_dir = dir.path().join("model");

    run_training(&store, &model_dir).unwrap();
    let registry = ModelRegistry::load_initial(&model_dir).unwrap();

    let classifier = registry.active();
    assert_eq!(
        classifier.predict(&normalize("uber viagem")).unwrap(),
        "Transporte"
    );
}

#[test]
fn load_initial_fails_without_artifact() {
    let dir = TempDir::new().unwrap();
    assert!(ModelRegistry::load_initial(&dir.path().join("model")).is_err());
}

#[test]
fn feedback_then_retrain_learns_the_correction() {
    let dir = TempDir::new().unwrap();
    let store = FeedbackStore::new(dir.path().join("feedback.csv"));
    let model_dir = dir.path().join("model");

    run_training(&store, &model_dir).unwrap();
    let registry = ModelRegistry::load_initial(&model_dir).unwrap();

    store.append("farmacia popular", "Saude").unwrap();
    run_training(&store, &model_dir).unwrap();

    // The orchestrator reloads from disk and swaps, exactly as the
    // service does after a background retrain.
    let retrained = artifact::load(&model_dir).unwrap();
    registry.swap(Arc::new(retrained));

    // Mixed case and pre-stripped accents must land on the corrected
    // label; "farmacia" is a strong Saude token in both seed and feedback.
    let prediction = registry
        .active()
        .predict(&normalize("Farmacia Popular"))
        .unwrap();
    assert_eq!(prediction, "Saude");
}

#[test]
fn serialization_roundtrip_preserves_predictions() {
    let dir = TempDir::new().unwrap();
    let store = FeedbackStore::new(dir.path().join("feedback.csv"));
    let model_dir = dir.path().join("model");

    run_training(&store, &model_dir).unwrap();
    let first = artifact::load(&model_dir).unwrap();
    let second = artifact::load(&model_dir).unwrap();

    for text in ["uber viagem", "netflix assinatura", "consulta medica"] {
        let normalized = normalize(text);
        assert_eq!(
            first.predict(&normalized).unwrap(),
            second.predict(&normalized).unwrap()
        );
    }
}
