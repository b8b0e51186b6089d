// src/lib.rs
// Public library surface for the binary and integration tests.

pub mod config;
pub mod logging;
pub mod store;

// Text cleaning and the built-in scorers
pub mod labels;
pub mod oracle;
pub mod preprocess;
pub mod sentiment;
pub mod similarity;

// Interactive surface
pub mod app;
pub mod prompt;
pub mod report;
pub mod session;

// ---- Re-exports for stable public API ----
pub use crate::oracle::{OracleError, SentimentOracle, SimilarityOracle};
pub use crate::session::{Session, SessionSummary};
pub use crate::store::{LoadError, Review, ReviewStore};
