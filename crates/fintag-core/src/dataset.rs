//! Dataset assembly and train/eval split.
//!
//! Merges the seed dataset with feedback corrections, normalizes every
//! text, and computes a label-stratified split that stays well-defined for
//! arbitrarily small or skewed data. An unguarded random split on a few
//! dozen examples can drop a label from training entirely; the guard
//! conditions below send everything to training instead of producing a
//! split a stratifier would reject.

use crate::normalize::normalize;
use crate::types::TrainingExample;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use std::collections::BTreeMap;
use tracing::debug;

/// Fixed seed so the split is reproducible across retrains.
const SPLIT_SEED: u64 = 42;

/// Below this many total examples no evaluation split is attempted.
const MIN_EXAMPLES_FOR_SPLIT: usize = 10;

/// Target share of examples held out for evaluation.
const EVAL_FRACTION: f64 = 0.2;

/// Assembled training data, ready for a classifier fit.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    pub train_texts: Vec<String>,
    pub train_labels: Vec<String>,
    pub eval_texts: Vec<String>,
    pub eval_labels: Vec<String>,
    /// Sorted distinct label set observed across the whole dataset.
    pub labels: Vec<String>,
}

impl Dataset {
    /// Total number of examples across both splits.
    pub fn len(&self) -> usize {
        self.train_texts.len() + self.eval_texts.len()
    }

    /// True when no examples were assembled at all.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Merge seed and feedback examples (seed first), normalize, and split.
///
/// Split policy:
/// - fewer than 10 total examples, fewer than 2 distinct labels, or a
///   rarest label with fewer than 2 examples → everything goes to training;
/// - otherwise hold out exactly `max(num_labels, floor(0.2 * total))`
///   examples, unless that would consume the whole dataset;
/// - the holdout is stratified per label, proportional with at least one
///   eval example per label; every label keeps at least one training
///   example, with its first occurrence always among them. Selection uses
///   a fixed seed, so repeated assemblies of the same data produce the
///   same split.
pub fn assemble(seed: &[TrainingExample], feedback: &[TrainingExample]) -> Dataset {
    let examples: Vec<TrainingExample> = seed
        .iter()
        .chain(feedback.iter())
        .map(|e| TrainingExample::new(normalize(&e.text), e.label.clone()))
        .collect();

    let total = examples.len();

    // Frequencies per label; BTreeMap keeps the label set sorted.
    let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
    for e in &examples {
        *counts.entry(e.label.as_str()).or_insert(0) += 1;
    }
    let labels: Vec<String> = counts.keys().map(|l| l.to_string()).collect();
    let min_count = counts.values().copied().min().unwrap_or(0);

    let splittable = total >= MIN_EXAMPLES_FOR_SPLIT && labels.len() >= 2 && min_count >= 2;
    if !splittable {
        debug!(total, labels = labels.len(), min_count, "dataset too small to split");
        return all_to_training(examples, labels);
    }

    let desired_eval = labels.len().max((total as f64 * EVAL_FRACTION).floor() as usize);
    if desired_eval >= total {
        debug!(total, desired_eval, "degenerate eval size, skipping split");
        return all_to_training(examples, labels);
    }

    // Indices per label, in dataset order. Sorted label order plus the
    // fixed seed makes the whole selection deterministic.
    let mut by_label: BTreeMap<&str, Vec<usize>> = BTreeMap::new();
    for (i, e) in examples.iter().enumerate() {
        by_label.entry(e.label.as_str()).or_default().push(i);
    }

    let group_counts: Vec<usize> = by_label.values().map(|v| v.len()).collect();
    let takes = eval_allocation(&group_counts, desired_eval, total);

    let mut rng = StdRng::seed_from_u64(SPLIT_SEED);
    let mut eval_indices = vec![false; total];
    for (indices, take) in by_label.values_mut().zip(takes) {
        // The first occurrence of each label is pinned to training: the
        // anchor example for a category never vanishes behind the holdout,
        // and its tokens stay in the vocabulary.
        indices[1..].shuffle(&mut rng);
        for &i in indices[1..].iter().take(take) {
            eval_indices[i] = true;
        }
    }

    let mut dataset = Dataset {
        train_texts: Vec::with_capacity(total - desired_eval),
        train_labels: Vec::with_capacity(total - desired_eval),
        eval_texts: Vec::with_capacity(desired_eval),
        eval_labels: Vec::with_capacity(desired_eval),
        labels,
    };
    for (i, e) in examples.into_iter().enumerate() {
        if eval_indices[i] {
            dataset.eval_texts.push(e.text);
            dataset.eval_labels.push(e.label);
        } else {
            dataset.train_texts.push(e.text);
            dataset.train_labels.push(e.label);
        }
    }
    dataset
}

fn all_to_training(examples: Vec<TrainingExample>, labels: Vec<String>) -> Dataset {
    let (train_texts, train_labels) = examples.into_iter().map(|e| (e.text, e.label)).unzip();
    Dataset {
        train_texts,
        train_labels,
        eval_texts: Vec::new(),
        eval_labels: Vec::new(),
        labels,
    }
}

/// Per-label eval counts summing to exactly `desired`, proportional to the
/// label frequencies, with at least one eval example and at least one
/// retained training example per label. Feasible whenever every label has
/// two or more examples and `desired < total`, which the caller guarantees.
fn eval_allocation(group_counts: &[usize], desired: usize, total: usize) -> Vec<usize> {
    let mut takes: Vec<usize> = Vec::with_capacity(group_counts.len());
    let mut remainders: Vec<(usize, f64)> = Vec::with_capacity(group_counts.len());

    for (g, &count) in group_counts.iter().enumerate() {
        let quota = count as f64 * desired as f64 / total as f64;
        let take = (quota.floor() as usize).clamp(1, count - 1);
        remainders.push((g, quota - quota.floor()));
        takes.push(take);
    }

    let mut assigned: usize = takes.iter().sum();

    // Hand out the leftover slots by largest fractional remainder; claw back
    // any excess from the smallest. Ties break on label order.
    while assigned < desired {
        remainders.sort_by(|a, b| {
            b.1.partial_cmp(&a.1)
                .unwrap_or(std::cmp::Ordering::Equal)
                .then(a.0.cmp(&b.0))
        });
        let mut progressed = false;
        for &(g, _) in &remainders {
            if assigned == desired {
                break;
            }
            if takes[g] < group_counts[g] - 1 {
                takes[g] += 1;
                assigned += 1;
                progressed = true;
            }
        }
        debug_assert!(progressed, "eval allocation cannot reach desired size");
        if !progressed {
            break;
        }
    }
    while assigned > desired {
        remainders.sort_by(|a, b| {
            a.1.partial_cmp(&b.1)
                .unwrap_or(std::cmp::Ordering::Equal)
                .then(a.0.cmp(&b.0))
        });
        let mut progressed = false;
        for &(g, _) in &remainders {
            if assigned == desired {
                break;
            }
            if takes[g] > 1 {
                takes[g] -= 1;
                assigned -= 1;
                progressed = true;
            }
        }
        debug_assert!(progressed, "eval allocation cannot shrink to desired size");
        if !progressed {
            break;
        }
    }

    takes
}
