//! Review store: the ordered, read-only table of review texts.
//!
//! Loaded once at startup from a headered CSV. Rows whose text cell is missing
//! or blank are dropped, so index `i` always points at a usable review.

use std::fs::File;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{debug, info};

/// Failure to build the store. Always fatal for the interactive session.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("cannot open review data {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed review data in {}: {source}", path.display())]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
    #[error("column `{column}` not found in {} (available: {available})", path.display())]
    MissingColumn {
        path: PathBuf,
        column: String,
        available: String,
    },
    #[error("no reviews with text found in column `{column}` of {}", path.display())]
    Empty { path: PathBuf, column: String },
}

/// A single review, identified only by its position in the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Review {
    pub text: String,
}

#[derive(Debug, Clone, Default)]
pub struct ReviewStore {
    reviews: Vec<Review>,
}

impl ReviewStore {
    /// Build a store from in-memory texts. Blank texts are kept as-is here;
    /// only the CSV loader applies row cleaning.
    pub fn from_texts<I, S>(texts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            reviews: texts
                .into_iter()
                .map(|t| Review { text: t.into() })
                .collect(),
        }
    }

    /// Load the `text_column` of a headered CSV file.
    pub fn load_csv(path: &Path, text_column: &str) -> Result<Self, LoadError> {
        let file = File::open(path).map_err(|source| LoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(file);

        let csv_err = |source: csv::Error| LoadError::Csv {
            path: path.to_path_buf(),
            source,
        };

        let headers = reader.headers().map_err(csv_err)?.clone();
        let col = headers
            .iter()
            .position(|h| h.trim() == text_column)
            .ok_or_else(|| LoadError::MissingColumn {
                path: path.to_path_buf(),
                column: text_column.to_string(),
                available: headers.iter().collect::<Vec<_>>().join(", "),
            })?;

        let mut reviews = Vec::new();
        let mut dropped = 0usize;
        for record in reader.records() {
            let record = record.map_err(csv_err)?;
            match record.get(col).map(str::trim) {
                Some(text) if !text.is_empty() => reviews.push(Review {
                    text: text.to_string(),
                }),
                _ => dropped += 1,
            }
        }

        if reviews.is_empty() {
            return Err(LoadError::Empty {
                path: path.to_path_buf(),
                column: text_column.to_string(),
            });
        }

        debug!(dropped, "rows without review text skipped");
        info!(
            path = %path.display(),
            column = text_column,
            reviews = reviews.len(),
            "review store loaded"
        );
        Ok(Self { reviews })
    }

    pub fn len(&self) -> usize {
        self.reviews.len()
    }

    pub fn is_empty(&self) -> bool {
        self.reviews.is_empty()
    }

    /// Highest valid index, or `None` for an empty store.
    pub fn max_index(&self) -> Option<usize> {
        self.reviews.len().checked_sub(1)
    }

    pub fn get(&self, index: usize) -> Option<&Review> {
        self.reviews.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Review> {
        self.reviews.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_csv(body: &str) -> tempfile::NamedTempFile {
        let mut f = tempfile::NamedTempFile::new().unwrap();
        f.write_all(body.as_bytes()).unwrap();
        f.flush().unwrap();
        f
    }

    #[test]
    fn loads_named_column_and_drops_blank_rows() {
        let f = write_csv(
            "id,reviews.text,rating\n\
             1,Great tablet for the price,5\n\
             2,,3\n\
             3,   ,2\n\
             4,\"Battery died, sadly\",1\n",
        );
        let store = ReviewStore::load_csv(f.path(), "reviews.text").unwrap();
        assert_eq!(store.len(), 2);
        assert_eq!(store.get(0).unwrap().text, "Great tablet for the price");
        assert_eq!(store.get(1).unwrap().text, "Battery died, sadly");
        assert_eq!(store.max_index(), Some(1));
    }

    #[test]
    fn quoted_fields_may_span_lines() {
        let f = write_csv("reviews.text\n\"first line\nsecond line\"\nshort\n");
        let store = ReviewStore::load_csv(f.path(), "reviews.text").unwrap();
        assert_eq!(store.len(), 2);
        assert_eq!(store.get(0).unwrap().text, "first line\nsecond line");
    }

    #[test]
    fn short_rows_count_as_missing_text() {
        let f = write_csv("id,reviews.text\n1\n2,kept\n");
        let store = ReviewStore::load_csv(f.path(), "reviews.text").unwrap();
        assert_eq!(store.len(), 1);
        assert_eq!(store.get(0).unwrap().text, "kept");
    }

    #[test]
    fn missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = ReviewStore::load_csv(&dir.path().join("nope.csv"), "reviews.text").unwrap_err();
        assert!(matches!(err, LoadError::Io { .. }), "got {err:?}");
    }

    #[test]
    fn missing_column_lists_available_headers() {
        let f = write_csv("id,body\n1,hello\n");
        let err = ReviewStore::load_csv(f.path(), "reviews.text").unwrap_err();
        match err {
            LoadError::MissingColumn { column, available, .. } => {
                assert_eq!(column, "reviews.text");
                assert_eq!(available, "id, body");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn all_blank_column_is_empty_error() {
        let f = write_csv("reviews.text\n\n\"\"\n");
        let err = ReviewStore::load_csv(f.path(), "reviews.text").unwrap_err();
        assert!(matches!(err, LoadError::Empty { .. }), "got {err:?}");
    }

    #[test]
    fn from_texts_preserves_order() {
        let store = ReviewStore::from_texts(["a", "b", "c"]);
        let texts: Vec<_> = store.iter().map(|r| r.text.as_str()).collect();
        assert_eq!(texts, ["a", "b", "c"]);
        assert!(ReviewStore::default().max_index().is_none());
    }
}
