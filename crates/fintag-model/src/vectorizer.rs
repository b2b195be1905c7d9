//! TF-IDF text vectorization.
//!
//! Unigram + bigram vocabulary over alphanumeric tokens of length two or
//! more, smooth IDF weighting, L2-normalized rows. Vectors are sparse
//! (index, weight) pairs since transaction descriptions are a handful of
//! tokens against a vocabulary of hundreds.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A sparse document vector: (feature index, weight) pairs.
pub type SparseVector = Vec<(usize, f32)>;

/// TF-IDF vectorizer fitted on a training corpus.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TfidfVectorizer {
    vocabulary: HashMap<String, usize>,
    idf: Vec<f32>,
}

impl TfidfVectorizer {
    /// Build the vocabulary and IDF table from a corpus of normalized texts.
    pub fn fit(texts: &[String]) -> Self {
        let mut vocabulary: HashMap<String, usize> = HashMap::new();
        let mut doc_freq: Vec<usize> = Vec::new();

        for text in texts {
            let mut seen_in_doc: Vec<usize> = Vec::new();
            for term in terms(text) {
                let next_idx = vocabulary.len();
                let idx = *vocabulary.entry(term).or_insert(next_idx);
                if idx == doc_freq.len() {
                    doc_freq.push(0);
                }
                if !seen_in_doc.contains(&idx) {
                    seen_in_doc.push(idx);
                    doc_freq[idx] += 1;
                }
            }
        }

        let n = texts.len() as f32;
        let idf = doc_freq
            .iter()
            .map(|&df| ((1.0 + n) / (1.0 + df as f32)).ln() + 1.0)
            .collect();

        Self { vocabulary, idf }
    }

    /// Number of features in the fitted vocabulary.
    pub fn dimension(&self) -> usize {
        self.idf.len()
    }

    /// Vectorize one normalized text. Terms outside the vocabulary are
    /// ignored; a text with no known terms yields an empty vector.
    pub fn transform(&self, text: &str) -> SparseVector {
        let mut counts: HashMap<usize, f32> = HashMap::new();
        for term in terms(text) {
            if let Some(&idx) = self.vocabulary.get(&term) {
                *counts.entry(idx).or_insert(0.0) += 1.0;
            }
        }

        let mut vector: SparseVector = counts
            .into_iter()
            .map(|(idx, tf)| (idx, tf * self.idf[idx]))
            .collect();
        vector.sort_by_key(|&(idx, _)| idx);

        let norm: f32 = vector.iter().map(|&(_, w)| w * w).sum::<f32>().sqrt();
        if norm > 0.0 {
            for (_, w) in &mut vector {
                *w /= norm;
            }
        }
        vector
    }

    /// Vectorize a whole corpus.
    pub fn transform_batch(&self, texts: &[String]) -> Vec<SparseVector> {
        texts.iter().map(|t| self.transform(t)).collect()
    }
}

/// Alphanumeric tokens of length >= 2.
fn tokenize(text: &str) -> Vec<&str> {
    text.split(|c: char| !c.is_alphanumeric())
        .filter(|s| s.len() > 1)
        .collect()
}

/// Unigrams plus adjacent-pair bigrams.
fn terms(text: &str) -> Vec<String> {
    let tokens = tokenize(text);
    let mut terms: Vec<String> = tokens.iter().map(|t| t.to_string()).collect();
    for pair in tokens.windows(2) {
        terms.push(format!("{} {}", pair[0], pair[1]));
    }
    terms
}

#[cfg(test)]
mod tests {
    use super::*;

    fn corpus(texts: &[&str]) -> Vec<String> {
        texts.iter().map(|t| t.to_string()).collect()
    }

    #[test]
    fn builds_unigrams_and_bigrams() {
        let v = TfidfVectorizer::fit(&corpus(&["uber viagem", "farmacia araujo"]));
        // 4 unigrams + 2 bigrams
        assert_eq!(v.dimension(), 6);
    }

    #[test]
    fn transform_is_l2_normalized() {
        let v = TfidfVectorizer::fit(&corpus(&["uber viagem", "farmacia araujo"]));
        let row = v.transform("uber viagem");
        let norm: f32 = row.iter().map(|&(_, w)| w * w).sum::<f32>().sqrt();
        assert!((norm - 1.0).abs() < 1e-5);
    }

    #[test]
    fn unknown_terms_yield_empty_vector() {
        let v = TfidfVectorizer::fit(&corpus(&["uber viagem"]));
        assert!(v.transform("cinema ingresso").is_empty());
    }

    #[test]
    fn short_tokens_are_dropped() {
        let v = TfidfVectorizer::fit(&corpus(&["a b c"]));
        assert_eq!(v.dimension(), 0);
    }

    #[test]
    fn rarer_terms_weigh_more() {
        let texts = corpus(&["conta de luz", "conta de agua", "conta de gas"]);
        let v = TfidfVectorizer::fit(&texts);
        // "conta" appears in all three documents and gets index 0; "luz"
        // appears in one. The bigram "conta luz" is out of vocabulary.
        let row = v.transform("conta luz");
        assert_eq!(row.len(), 2);
        assert!(row[1].1 > row[0].1);
    }
}
