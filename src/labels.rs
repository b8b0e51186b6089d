//! Qualitative buckets for polarity and similarity values.
//!
//! Seven buckets, lower bound inclusive:
//! `>=0.8`, `>=0.4`, `>=0.1`, `>=-0.1` (neutral), `>=-0.4`, `>=-0.8`, below.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Bucket {
    ExtremelyLow,
    VeryLow,
    SomewhatLow,
    Neutral,
    SomewhatHigh,
    VeryHigh,
    ExtremelyHigh,
}

impl Bucket {
    pub fn of(value: f32) -> Self {
        match value {
            v if v >= 0.8 => Bucket::ExtremelyHigh,
            v if v >= 0.4 => Bucket::VeryHigh,
            v if v >= 0.1 => Bucket::SomewhatHigh,
            v if v >= -0.1 => Bucket::Neutral,
            v if v >= -0.4 => Bucket::SomewhatLow,
            v if v >= -0.8 => Bucket::VeryLow,
            v if v.is_nan() => Bucket::Neutral,
            _ => Bucket::ExtremelyLow,
        }
    }

    fn degree(self) -> &'static str {
        match self {
            Bucket::ExtremelyLow | Bucket::ExtremelyHigh => "Extremely",
            Bucket::VeryLow | Bucket::VeryHigh => "Very",
            Bucket::SomewhatLow | Bucket::SomewhatHigh => "Somewhat",
            Bucket::Neutral => "Neutral",
        }
    }
}

/// Label for a polarity value, e.g. "Very positive".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PolarityLabel(pub Bucket);

/// Label for a similarity value, e.g. "Somewhat dissimilar".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SimilarityLabel(pub Bucket);

impl PolarityLabel {
    pub fn of(value: f32) -> Self {
        Self(Bucket::of(value))
    }
}

impl SimilarityLabel {
    pub fn of(value: f32) -> Self {
        Self(Bucket::of(value))
    }
}

fn write_label(f: &mut fmt::Formatter<'_>, b: Bucket, high: &str, low: &str) -> fmt::Result {
    match b {
        Bucket::Neutral => f.write_str("Neutral"),
        b if b > Bucket::Neutral => write!(f, "{} {high}", b.degree()),
        b => write!(f, "{} {low}", b.degree()),
    }
}

impl fmt::Display for PolarityLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_label(f, self.0, "positive", "negative")
    }
}

impl fmt::Display for SimilarityLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_label(f, self.0, "similar", "dissimilar")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(1.0, "Extremely positive")]
    #[case(0.8, "Extremely positive")]
    #[case(0.79, "Very positive")]
    #[case(0.4, "Very positive")]
    #[case(0.1, "Somewhat positive")]
    #[case(0.09, "Neutral")]
    #[case(0.0, "Neutral")]
    #[case(-0.1, "Neutral")]
    #[case(-0.11, "Somewhat negative")]
    #[case(-0.4, "Somewhat negative")]
    #[case(-0.8, "Very negative")]
    #[case(-0.81, "Extremely negative")]
    #[case(-1.0, "Extremely negative")]
    fn polarity_labels(#[case] value: f32, #[case] expected: &str) {
        assert_eq!(PolarityLabel::of(value).to_string(), expected);
    }

    #[rstest]
    #[case(1.0, "Extremely similar")]
    #[case(0.5, "Very similar")]
    #[case(0.2, "Somewhat similar")]
    #[case(0.0, "Neutral")]
    #[case(-0.5, "Very dissimilar")]
    fn similarity_labels(#[case] value: f32, #[case] expected: &str) {
        assert_eq!(SimilarityLabel::of(value).to_string(), expected);
    }

    #[test]
    fn nan_is_neutral() {
        assert_eq!(Bucket::of(f32::NAN), Bucket::Neutral);
    }
}
