//! Classifier trait and the concrete TF-IDF + logistic-regression pipeline.

use crate::error::{ModelError, ModelResult};
use crate::linear::SoftmaxRegression;
use crate::vectorizer::TfidfVectorizer;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Capability surface of a deployable classifier.
///
/// `predict` takes text that has already been normalized by the caller.
/// Implementors are constructed trained (`TfidfLogisticPipeline::fit`
/// returns the fitted value), so an untrained instance cannot exist.
/// Substitutable with a deterministic stub in tests.
pub trait TextClassifier: Send + Sync {
    /// Predict the category label for a normalized text.
    fn predict(&self, text: &str) -> ModelResult<String>;

    /// The label set observed at training time. Bookkeeping only; future
    /// predictions are not validated against it.
    fn labels(&self) -> &[String];
}

/// TF-IDF vectorization feeding multinomial logistic regression.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TfidfLogisticPipeline {
    vectorizer: TfidfVectorizer,
    model: SoftmaxRegression,
    labels: Vec<String>,
}

impl TfidfLogisticPipeline {
    /// Fit on parallel slices of normalized texts and labels.
    pub fn fit(texts: &[String], labels: &[String]) -> ModelResult<Self> {
        if texts.is_empty() {
            return Err(ModelError::Training("no training examples".into()));
        }
        if texts.len() != labels.len() {
            return Err(ModelError::Training(format!(
                "{} texts but {} labels",
                texts.len(),
                labels.len()
            )));
        }

        let label_set: Vec<String> = labels
            .iter()
            .collect::<BTreeSet<_>>()
            .into_iter()
            .cloned()
            .collect();
        let targets: Vec<usize> = labels
            .iter()
            .map(|l| label_set.binary_search(l).unwrap_or(0))
            .collect();

        let vectorizer = TfidfVectorizer::fit(texts);
        let rows = vectorizer.transform_batch(texts);
        let model = SoftmaxRegression::fit(&rows, &targets, label_set.len(), vectorizer.dimension());

        Ok(Self {
            vectorizer,
            model,
            labels: label_set,
        })
    }

    /// Accuracy over a non-empty evaluation set. Diagnostic only; never
    /// gates deployment.
    pub fn evaluate(&self, texts: &[String], labels: &[String]) -> f64 {
        if texts.is_empty() {
            return 0.0;
        }
        let hits = texts
            .iter()
            .zip(labels)
            .filter(|(text, label)| {
                let idx = self.model.predict(&self.vectorizer.transform(text));
                self.labels.get(idx).map(String::as_str) == Some(label.as_str())
            })
            .count();
        hits as f64 / texts.len() as f64
    }
}

impl TextClassifier for TfidfLogisticPipeline {
    fn predict(&self, text: &str) -> ModelResult<String> {
        let row = self.vectorizer.transform(text);
        let idx = self.model.predict(&row);
        self.labels
            .get(idx)
            .cloned()
            .ok_or_else(|| ModelError::CorruptModel(format!("predicted class index {} out of range", idx)))
    }

    fn labels(&self) -> &[String] {
        &self.labels
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(v: &[&str]) -> Vec<String> {
        v.iter().map(|s| s.to_string()).collect()
    }

    fn fitted() -> TfidfLogisticPipeline {
        let texts = strings(&[
            "uber viagem",
            "onibus bilhete",
            "metro passagem",
            "farmacia araujo",
            "drogasil medicamentos",
            "consulta medica",
        ]);
        let labels = strings(&[
            "Transporte",
            "Transporte",
            "Transporte",
            "Saude",
            "Saude",
            "Saude",
        ]);
        TfidfLogisticPipeline::fit(&texts, &labels).unwrap()
    }

    #[test]
    fn predicts_training_examples() {
        let pipeline = fitted();
        assert_eq!(pipeline.predict("uber viagem").unwrap(), "Transporte");
        assert_eq!(pipeline.predict("farmacia araujo").unwrap(), "Saude");
    }

    #[test]
    fn generalizes_over_shared_tokens() {
        let pipeline = fitted();
        assert_eq!(pipeline.predict("farmacia popular").unwrap(), "Saude");
    }

    #[test]
    fn labels_are_sorted_and_distinct() {
        let pipeline = fitted();
        assert_eq!(pipeline.labels(), &["Saude".to_string(), "Transporte".to_string()]);
    }

    #[test]
    fn evaluate_scores_accuracy() {
        let pipeline = fitted();
        let acc = pipeline.evaluate(
            &strings(&["uber viagem", "consulta medica"]),
            &strings(&["Transporte", "Saude"]),
        );
        assert!((acc - 1.0).abs() < 1e-9);
    }

    #[test]
    fn fit_rejects_empty_and_mismatched_input() {
        assert!(TfidfLogisticPipeline::fit(&[], &[]).is_err());
        assert!(TfidfLogisticPipeline::fit(&strings(&["a b"]), &[]).is_err());
    }
}
