//! Text canonicalization applied at both training and inference time.

use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Canonicalize a transaction description.
///
/// Steps, in order: trim surrounding whitespace, lowercase, NFKD-decompose
/// and drop combining marks ("café" → "cafe"), collapse internal whitespace
/// runs to single spaces. Idempotent: `normalize(normalize(x)) == normalize(x)`.
///
/// The same function must run on every text that reaches the vectorizer,
/// whether during fit or during predict. A divergence between the two paths
/// degrades accuracy silently, so there is exactly one implementation.
pub fn normalize(text: &str) -> String {
    let stripped: String = text
        .trim()
        .to_lowercase()
        .nfkd()
        .filter(|c| !is_combining_mark(*c))
        .collect();

    stripped.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_accents_and_case() {
        assert_eq!(normalize("Café  Bom!"), normalize("cafe bom!"));
        assert_eq!(normalize("AÇAÍ na tigela"), "acai na tigela");
    }

    #[test]
    fn collapses_whitespace() {
        assert_eq!(normalize("  uber \t viagem \n centro  "), "uber viagem centro");
    }

    #[test]
    fn empty_input_stays_empty() {
        assert_eq!(normalize(""), "");
        assert_eq!(normalize("   \t\n "), "");
    }

    #[test]
    fn idempotent() {
        for s in ["Farmácia São João", "  PIX   p/ amigo ", "çãéêü", ""] {
            let once = normalize(s);
            assert_eq!(normalize(&once), once);
        }
    }
}
