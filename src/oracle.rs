//! Oracle abstraction: the scoring capabilities the session is handed.
//!
//! The session only ever sees these traits, so the interactive loop can be
//! driven by the built-in scorers, by a heavier model wrapper, or by a
//! deterministic stub in tests.

use thiserror::Error;

/// A scoring request that could not be answered. Never fatal for the session.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OracleError {
    /// No comparable tokens on one side of a similarity request.
    #[error("no comparable tokens in {0}")]
    NoVectors(&'static str),
    /// The backing model could not be used for this request.
    #[error("{provider} unavailable: {reason}")]
    Unavailable {
        provider: &'static str,
        reason: String,
    },
}

/// Maps a text to a polarity in `[-1.0, 1.0]`.
pub trait SentimentOracle {
    fn polarity(&self, text: &str) -> Result<f32, OracleError>;
    /// Provider name for diagnostics.
    fn name(&self) -> &'static str;
}

/// Maps a pair of texts to a similarity in `[0.0, 1.0]`.
pub trait SimilarityOracle {
    fn similarity(&self, a: &str, b: &str) -> Result<f32, OracleError>;
    /// Provider name for diagnostics.
    fn name(&self) -> &'static str;
}

/// Always fails; stands in when a scorer is configured off or failed to load.
#[derive(Debug, Clone)]
pub struct DisabledOracle {
    pub reason: String,
}

impl SentimentOracle for DisabledOracle {
    fn polarity(&self, _text: &str) -> Result<f32, OracleError> {
        Err(OracleError::Unavailable {
            provider: "disabled",
            reason: self.reason.clone(),
        })
    }
    fn name(&self) -> &'static str {
        "disabled"
    }
}

impl SimilarityOracle for DisabledOracle {
    fn similarity(&self, _a: &str, _b: &str) -> Result<f32, OracleError> {
        Err(OracleError::Unavailable {
            provider: "disabled",
            reason: self.reason.clone(),
        })
    }
    fn name(&self) -> &'static str {
        "disabled"
    }
}
