//! Built-in [`SimilarityOracle`] implementations over cleaned review tokens.
//!
//! - [`TokenCosine`]: cosine of term-frequency vectors. Symmetric, in [0, 1],
//!   exactly 1.0 for identical token bags.
//! - [`EditDistance`]: `strsim::normalized_levenshtein` over the cleaned
//!   strings (f64 cast to f32).

use std::collections::HashMap;
use strsim::normalized_levenshtein;

use crate::oracle::{OracleError, SimilarityOracle};
use crate::preprocess::{clean_text, clean_tokens};

#[derive(Debug, Clone, Copy, Default)]
pub struct TokenCosine;

impl TokenCosine {
    fn term_frequencies(text: &str) -> HashMap<String, u32> {
        let mut tf = HashMap::new();
        for tok in clean_tokens(text) {
            *tf.entry(tok).or_insert(0u32) += 1;
        }
        tf
    }
}

impl SimilarityOracle for TokenCosine {
    fn similarity(&self, a: &str, b: &str) -> Result<f32, OracleError> {
        let ta = Self::term_frequencies(a);
        let tb = Self::term_frequencies(b);
        if ta.is_empty() {
            return Err(OracleError::NoVectors("first review"));
        }
        if tb.is_empty() {
            return Err(OracleError::NoVectors("second review"));
        }

        let dot: f64 = ta
            .iter()
            .filter_map(|(t, &x)| tb.get(t).map(|&y| f64::from(x) * f64::from(y)))
            .sum();
        let norm = |tf: &HashMap<String, u32>| {
            tf.values()
                .map(|&x| f64::from(x) * f64::from(x))
                .sum::<f64>()
                .sqrt()
        };
        let cos = dot / (norm(&ta) * norm(&tb));
        Ok((cos as f32).clamp(0.0, 1.0))
    }

    fn name(&self) -> &'static str {
        "token-cosine"
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct EditDistance;

impl SimilarityOracle for EditDistance {
    fn similarity(&self, a: &str, b: &str) -> Result<f32, OracleError> {
        let ca = clean_text(a);
        let cb = clean_text(b);
        if ca.is_empty() {
            return Err(OracleError::NoVectors("first review"));
        }
        if cb.is_empty() {
            return Err(OracleError::NoVectors("second review"));
        }
        Ok((normalized_levenshtein(&ca, &cb) as f32).clamp(0.0, 1.0))
    }

    fn name(&self) -> &'static str {
        "levenshtein"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn oracles() -> [&'static dyn SimilarityOracle; 2] {
        [&TokenCosine, &EditDistance]
    }

    #[test]
    fn identical_texts_score_one() {
        for o in oracles() {
            let s = o.similarity("great product", "great product").unwrap();
            assert!((s - 1.0).abs() < 1e-6, "{} gave {s}", o.name());
        }
    }

    #[test]
    fn symmetric_and_in_range() {
        let pairs = [
            ("Battery life is great", "great battery, poor screen"),
            ("terrible", "great product"),
            ("kids love this tablet", "my kids love it"),
        ];
        for o in oracles() {
            for (a, b) in pairs {
                let ab = o.similarity(a, b).unwrap();
                let ba = o.similarity(b, a).unwrap();
                assert!((ab - ba).abs() < 1e-6, "{}: {ab} vs {ba}", o.name());
                assert!((0.0..=1.0).contains(&ab));
            }
        }
    }

    #[test]
    fn cosine_ignores_word_order_and_stop_words() {
        let s = TokenCosine
            .similarity("the screen is bright", "bright screen")
            .unwrap();
        assert!((s - 1.0).abs() < 1e-6);
    }

    #[test]
    fn disjoint_tokens_score_zero() {
        let s = TokenCosine.similarity("terrible", "great product").unwrap();
        assert_eq!(s, 0.0);
    }

    #[test]
    fn empty_side_is_an_oracle_error() {
        for o in oracles() {
            assert_eq!(
                o.similarity("", "great").unwrap_err(),
                OracleError::NoVectors("first review")
            );
            assert_eq!(
                o.similarity("great", "it was the").unwrap_err(),
                OracleError::NoVectors("second review")
            );
        }
    }
}
