//! Lexicon polarity scorer, the built-in [`SentimentOracle`].
//!
//! Each word found in the lexicon contributes its integer score (-5..=5).
//! A negator in the previous 1..=3 tokens flips the sign. Polarity is the mean
//! contribution scaled to [-1, 1]; text with no lexicon hits is neutral (0.0).

use once_cell::sync::Lazy;
use std::borrow::Cow;
use std::collections::HashMap;
use std::{fs, io, path::Path};
use tracing::error;

use crate::oracle::{OracleError, SentimentOracle};
use crate::preprocess::{lemma, tokenize};

/// Largest magnitude a lexicon entry may carry.
pub const MAX_WORD_SCORE: i32 = 5;

static LEXICON: Lazy<HashMap<String, i32>> = Lazy::new(|| {
    let raw = include_str!("../sentiment_lexicon.json");
    serde_json::from_str::<HashMap<String, i32>>(raw).unwrap_or_else(|e| {
        error!(error = %e, "embedded sentiment lexicon is invalid; scoring everything neutral");
        HashMap::new()
    })
});

#[derive(Debug, Clone)]
pub struct LexiconSentiment {
    lexicon: Cow<'static, HashMap<String, i32>>,
}

impl Default for LexiconSentiment {
    fn default() -> Self {
        Self::new()
    }
}

impl LexiconSentiment {
    /// Scorer backed by the embedded lexicon.
    pub fn new() -> Self {
        Self {
            lexicon: Cow::Borrowed(&*LEXICON),
        }
    }

    /// Scorer backed by a JSON object of `word -> score`. Scores are clamped
    /// to the lexicon range and keys lowercased.
    pub fn from_path(path: &Path) -> io::Result<Self> {
        let bytes = fs::read(path)?;
        let raw: HashMap<String, i32> = serde_json::from_slice(&bytes)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        Ok(Self::from_entries(raw))
    }

    pub fn from_entries<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = (S, i32)>,
        S: AsRef<str>,
    {
        let lexicon = entries
            .into_iter()
            .map(|(w, s)| {
                (
                    w.as_ref().to_lowercase(),
                    s.clamp(-MAX_WORD_SCORE, MAX_WORD_SCORE),
                )
            })
            .collect();
        Self {
            lexicon: Cow::Owned(lexicon),
        }
    }

    pub fn len(&self) -> usize {
        self.lexicon.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lexicon.is_empty()
    }

    /// Lexicon score for a token, trying the surface form before its lemma.
    #[inline]
    fn word_score(&self, w: &str) -> Option<i32> {
        self.lexicon
            .get(w)
            .or_else(|| self.lexicon.get(lemma(w).as_str()))
            .copied()
    }

    /// Returns (summed score, number of lexicon hits, number of tokens).
    pub fn score_text(&self, text: &str) -> (i32, usize, usize) {
        // Collected because negation looks backwards.
        let tokens: Vec<String> = tokenize(text).collect();
        let mut score = 0i32;
        let mut hits = 0usize;

        for (i, w) in tokens.iter().enumerate() {
            let Some(base) = self.word_score(w) else {
                continue;
            };
            let negated = (1..=3).any(|k| i >= k && is_negator(tokens[i - k].as_str()));
            score += if negated { -base } else { base };
            hits += 1;
        }

        (score, hits, tokens.len())
    }
}

impl SentimentOracle for LexiconSentiment {
    fn polarity(&self, text: &str) -> Result<f32, OracleError> {
        let (score, hits, _) = self.score_text(text);
        if hits == 0 {
            return Ok(0.0);
        }
        let mean = score as f32 / hits as f32;
        Ok((mean / MAX_WORD_SCORE as f32).clamp(-1.0, 1.0))
    }

    fn name(&self) -> &'static str {
        "lexicon"
    }
}

/// Single-token negators; "no longer" is covered by "no".
fn is_negator(tok: &str) -> bool {
    matches!(
        tok,
        "not"
            | "no"
            | "never"
            | "isn't"
            | "wasn't"
            | "aren't"
            | "won't"
            | "can't"
            | "cannot"
            | "don't"
            | "doesn't"
            | "didn't"
            | "without"
    )
}
