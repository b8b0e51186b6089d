// src/config.rs
//! Runtime configuration.
//!
//! Lookup order:
//! 1) `$REVIEWS_CONFIG_PATH` (must exist)
//! 2) `config/reviews.toml`
//! 3) built-in defaults
//!
//! `$REVIEWS_DATA_PATH` and `$REVIEWS_TEXT_COLUMN` then override the file.

use anyhow::{anyhow, Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

pub const ENV_CONFIG_PATH: &str = "REVIEWS_CONFIG_PATH";
pub const ENV_DATA_PATH: &str = "REVIEWS_DATA_PATH";
pub const ENV_TEXT_COLUMN: &str = "REVIEWS_TEXT_COLUMN";
pub const DEFAULT_CONFIG_PATH: &str = "config/reviews.toml";

fn default_data_path() -> PathBuf {
    PathBuf::from("amazon_product_reviews.csv")
}
fn default_text_column() -> String {
    "reviews.text".to_string()
}
fn default_break_token() -> String {
    "stop".to_string()
}

/// Which built-in similarity scorer to hand the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SimilarityBackend {
    #[default]
    Cosine,
    Levenshtein,
    Disabled,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AppConfig {
    #[serde(default = "default_data_path")]
    pub data_path: PathBuf,
    #[serde(default = "default_text_column")]
    pub text_column: String,
    /// Typed at an index prompt to go back to the menu. Case-insensitive.
    #[serde(default = "default_break_token")]
    pub break_token: String,
    #[serde(default)]
    pub similarity: SimilarityBackend,
    /// JSON `word -> score` file replacing the embedded lexicon.
    #[serde(default)]
    pub lexicon_path: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data_path: default_data_path(),
            text_column: default_text_column(),
            break_token: default_break_token(),
            similarity: SimilarityBackend::default(),
            lexicon_path: None,
        }
    }
}

impl AppConfig {
    /// Parse a TOML config file and sanitize it.
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let data = fs::read_to_string(path)
            .with_context(|| format!("reading config from {}", path.display()))?;
        let cfg: AppConfig =
            toml::from_str(&data).with_context(|| format!("parsing config {}", path.display()))?;
        Ok(cfg.sanitized())
    }

    /// Resolve config from env + fallbacks, then apply env overrides.
    pub fn load_default() -> Result<Self> {
        let mut cfg = if let Ok(p) = std::env::var(ENV_CONFIG_PATH) {
            let pb = PathBuf::from(p);
            if !pb.exists() {
                return Err(anyhow!(
                    "{ENV_CONFIG_PATH} points to non-existent path {}",
                    pb.display()
                ));
            }
            Self::load_from_file(&pb)?
        } else if Path::new(DEFAULT_CONFIG_PATH).exists() {
            Self::load_from_file(Path::new(DEFAULT_CONFIG_PATH))?
        } else {
            Self::default()
        };

        if let Ok(p) = std::env::var(ENV_DATA_PATH) {
            if !p.trim().is_empty() {
                cfg.data_path = PathBuf::from(p);
            }
        }
        if let Ok(c) = std::env::var(ENV_TEXT_COLUMN) {
            if !c.trim().is_empty() {
                cfg.text_column = c;
            }
        }
        Ok(cfg.sanitized())
    }

    fn sanitized(mut self) -> Self {
        self.break_token = self.break_token.trim().to_lowercase();
        if self.break_token.is_empty() {
            self.break_token = default_break_token();
        }
        self.text_column = self.text_column.trim().to_string();
        if self.text_column.is_empty() {
            self.text_column = default_text_column();
        }
        self
    }
}
