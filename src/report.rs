//! Result blocks printed after each successful analysis.

use std::fmt;

use crate::labels::{PolarityLabel, SimilarityLabel};

#[derive(Debug, Clone, PartialEq)]
pub struct PolarityReport {
    pub index: usize,
    pub text: String,
    pub tokens: String,
    pub value: f32,
    pub label: PolarityLabel,
}

impl PolarityReport {
    pub fn new(index: usize, text: &str, tokens: String, value: f32) -> Self {
        Self {
            index,
            text: text.to_string(),
            tokens,
            value,
            label: PolarityLabel::of(value),
        }
    }
}

impl fmt::Display for PolarityReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Review #{}", self.index)?;
        writeln!(f, "Original text:\t{}", self.text)?;
        writeln!(f, "Tokens only:\t{}", self.tokens)?;
        writeln!(f, "Polarity value:\t{:.3}", self.value)?;
        write!(f, "Description:\t{}", self.label)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SimilarityReport {
    pub first: usize,
    pub second: usize,
    pub first_tokens: String,
    pub second_tokens: String,
    pub value: f32,
    pub label: SimilarityLabel,
}

impl SimilarityReport {
    pub fn new(
        (first, first_tokens): (usize, String),
        (second, second_tokens): (usize, String),
        value: f32,
    ) -> Self {
        Self {
            first,
            second,
            first_tokens,
            second_tokens,
            value,
            label: SimilarityLabel::of(value),
        }
    }
}

impl fmt::Display for SimilarityReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Review #{} Lemmas:\t{}", self.first, self.first_tokens)?;
        writeln!(f, "Review #{} Lemmas:\t{}", self.second, self.second_tokens)?;
        writeln!(f, "Similarity value:\t{:.3}", self.value)?;
        write!(f, "Description:\t\t{}", self.label)
    }
}
