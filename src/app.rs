//! Wiring: config -> review store -> oracles -> interactive session.

use anyhow::{Context, Result};
use std::io::{BufRead, Write};
use tracing::info;

use crate::config::{AppConfig, SimilarityBackend};
use crate::oracle::{DisabledOracle, SentimentOracle, SimilarityOracle};
use crate::prompt::Console;
use crate::sentiment::LexiconSentiment;
use crate::session::{Session, SessionSummary};
use crate::similarity::{EditDistance, TokenCosine};
use crate::store::ReviewStore;

/// The scorers handed to a session.
pub struct Oracles {
    pub sentiment: Box<dyn SentimentOracle>,
    pub similarity: Box<dyn SimilarityOracle>,
}

impl Oracles {
    pub fn from_config(cfg: &AppConfig) -> Result<Self> {
        let sentiment = match &cfg.lexicon_path {
            Some(path) => LexiconSentiment::from_path(path)
                .with_context(|| format!("loading sentiment lexicon {}", path.display()))?,
            None => LexiconSentiment::new(),
        };
        let similarity: Box<dyn SimilarityOracle> = match cfg.similarity {
            SimilarityBackend::Cosine => Box::new(TokenCosine),
            SimilarityBackend::Levenshtein => Box::new(EditDistance),
            SimilarityBackend::Disabled => Box::new(DisabledOracle {
                reason: "similarity is disabled in config".to_string(),
            }),
        };
        info!(
            sentiment = sentiment.name(),
            lexicon_words = sentiment.len(),
            similarity = similarity.name(),
            "oracles ready"
        );
        Ok(Self {
            sentiment: Box::new(sentiment),
            similarity,
        })
    }
}

/// Load the store and run the menu until exit.
///
/// A [`crate::store::LoadError`] comes back inside the `anyhow::Error` before
/// anything is written to `output`.
pub fn run<R: BufRead, W: Write>(cfg: &AppConfig, input: R, output: W) -> Result<SessionSummary> {
    let store = ReviewStore::load_csv(&cfg.data_path, &cfg.text_column)?;
    let oracles = Oracles::from_config(cfg)?;
    let mut session = Session::new(
        &store,
        oracles.sentiment.as_ref(),
        oracles.similarity.as_ref(),
        Console::new(input, output),
        &cfg.break_token,
    );
    session.run().context("terminal I/O failed")
}
