//! Multinomial logistic regression over sparse feature vectors.
//!
//! Trained by full-batch gradient descent from zero-initialized weights,
//! so a fit over the same data always produces the same model. Dataset
//! sizes here are tiny (tens to low thousands of rows), which makes
//! full-batch both the simplest and the most reproducible choice.

use crate::vectorizer::SparseVector;
use serde::{Deserialize, Serialize};

const EPOCHS: usize = 300;
const LEARNING_RATE: f32 = 0.5;
const L2_PENALTY: f32 = 1e-3;

/// A trained softmax classifier: one weight row and bias per class.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SoftmaxRegression {
    weights: Vec<Vec<f32>>,
    bias: Vec<f32>,
}

impl SoftmaxRegression {
    /// Fit on vectorized rows and class-index targets.
    pub fn fit(
        rows: &[SparseVector],
        targets: &[usize],
        num_classes: usize,
        num_features: usize,
    ) -> Self {
        let n = rows.len() as f32;
        let mut weights = vec![vec![0.0f32; num_features]; num_classes];
        let mut bias = vec![0.0f32; num_classes];

        let mut grad_w = vec![vec![0.0f32; num_features]; num_classes];
        let mut grad_b = vec![0.0f32; num_classes];

        for _ in 0..EPOCHS {
            for g in &mut grad_w {
                g.iter_mut().for_each(|v| *v = 0.0);
            }
            grad_b.iter_mut().for_each(|v| *v = 0.0);

            for (row, &target) in rows.iter().zip(targets) {
                let probs = softmax(&logits(&weights, &bias, row));
                for (c, &p) in probs.iter().enumerate() {
                    let err = p - if c == target { 1.0 } else { 0.0 };
                    grad_b[c] += err;
                    for &(idx, val) in row {
                        grad_w[c][idx] += err * val;
                    }
                }
            }

            for c in 0..num_classes {
                for f in 0..num_features {
                    weights[c][f] -=
                        LEARNING_RATE * (grad_w[c][f] / n + L2_PENALTY * weights[c][f]);
                }
                bias[c] -= LEARNING_RATE * grad_b[c] / n;
            }
        }

        Self { weights, bias }
    }

    /// Index of the highest-scoring class.
    pub fn predict(&self, row: &SparseVector) -> usize {
        argmax(&logits(&self.weights, &self.bias, row))
    }
}

fn logits(weights: &[Vec<f32>], bias: &[f32], row: &SparseVector) -> Vec<f32> {
    weights
        .iter()
        .zip(bias)
        .map(|(w, b)| b + row.iter().map(|&(idx, val)| w[idx] * val).sum::<f32>())
        .collect()
}

fn softmax(scores: &[f32]) -> Vec<f32> {
    let max = scores.iter().cloned().fold(f32::NEG_INFINITY, f32::max);
    let exps: Vec<f32> = scores.iter().map(|s| (s - max).exp()).collect();
    let sum: f32 = exps.iter().sum();
    exps.into_iter().map(|e| e / sum).collect()
}

fn argmax(scores: &[f32]) -> usize {
    scores
        .iter()
        .enumerate()
        .max_by(|a, b| a.1.partial_cmp(b.1).unwrap_or(std::cmp::Ordering::Equal))
        .map(|(i, _)| i)
        .unwrap_or(0)
}
