//! # Interactive session
//! Menu dispatcher plus the two index prompt loops (polarity, similarity).
//!
//! Each loop has two states, PROMPTING and DONE. PROMPTING reads one answer
//! per turn: a valid index is scored and reported, a rejected one is
//! explained, and the break token or end of input moves to DONE, which
//! hands control back to the menu. The store is never mutated.
//!
//! Similarity mode needs two valid indices in a row. A rejected answer at
//! either prompt restarts the pair from the first prompt.

use std::io::{self, BufRead, Write};
use tracing::{debug, info, warn};

use crate::oracle::{SentimentOracle, SimilarityOracle};
use crate::preprocess::clean_text;
use crate::prompt::{classify, Console, Selection, SelectionError};
use crate::report::{PolarityReport, SimilarityReport};
use crate::store::ReviewStore;

/// Top-level menu choices.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Polarity,
    Similarity,
    Exit,
}

impl MenuChoice {
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim() {
            "1" => Some(MenuChoice::Polarity),
            "2" => Some(MenuChoice::Similarity),
            "3" => Some(MenuChoice::Exit),
            _ => None,
        }
    }
}

/// Tally of one session, returned on exit.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionSummary {
    pub polarity_reports: usize,
    pub similarity_reports: usize,
    pub rejected_inputs: usize,
    pub oracle_failures: usize,
}

/// Outcome of one index prompt, as seen by a loop.
enum Pick {
    Index(usize),
    Rejected,
    Done,
}

pub struct Session<'a, R, W> {
    store: &'a ReviewStore,
    sentiment: &'a dyn SentimentOracle,
    similarity: &'a dyn SimilarityOracle,
    console: Console<R, W>,
    break_token: String,
    summary: SessionSummary,
}

impl<'a, R: BufRead, W: Write> Session<'a, R, W> {
    pub fn new(
        store: &'a ReviewStore,
        sentiment: &'a dyn SentimentOracle,
        similarity: &'a dyn SimilarityOracle,
        console: Console<R, W>,
        break_token: &str,
    ) -> Self {
        Self {
            store,
            sentiment,
            similarity,
            console,
            break_token: break_token.trim().to_lowercase(),
            summary: SessionSummary::default(),
        }
    }

    pub fn into_output(self) -> W {
        self.console.into_output()
    }

    /// Menu loop. Returns when the user picks Exit or input ends.
    pub fn run(&mut self) -> io::Result<SessionSummary> {
        loop {
            self.print_menu()?;
            let Some(line) = self.console.ask("\nChoose Option 1-3: ")? else {
                debug!("input closed at menu");
                break;
            };
            self.console.blank()?;
            match MenuChoice::parse(&line) {
                Some(MenuChoice::Polarity) => self.polarity_loop()?,
                Some(MenuChoice::Similarity) => self.similarity_loop()?,
                Some(MenuChoice::Exit) => {
                    self.console.say("Goodbye for now.")?;
                    break;
                }
                None => self.console.say("Option not available.")?,
            }
        }

        let s = self.summary;
        info!(
            polarity = s.polarity_reports,
            similarity = s.similarity_reports,
            rejected = s.rejected_inputs,
            oracle_failures = s.oracle_failures,
            "session finished"
        );
        Ok(s)
    }

    fn print_menu(&mut self) -> io::Result<()> {
        self.console.blank()?;
        self.console
            .say(format_args!("There are {} reviews loaded.", self.store.len()))?;
        self.console.blank()?;
        self.console.say("1. Display Review Polarity")?;
        self.console.say("2. Compare Similarity of Two Reviews")?;
        self.console.say("3. Exit Program")
    }

    /// Polarity mode: one index per turn until break.
    pub fn polarity_loop(&mut self) -> io::Result<()> {
        let Some(max) = self.store.max_index() else {
            return self.console.say("<<< No reviews loaded >>>");
        };
        let prompt = format!(
            "\nSelect an index 0-{max} for polarity analysis ('{}' for main menu): ",
            self.break_token
        );
        loop {
            match self.pick(&prompt)? {
                Pick::Index(i) => self.show_polarity(i)?,
                Pick::Rejected => {}
                Pick::Done => return Ok(()),
            }
        }
    }

    /// Similarity mode: two indices per turn until break.
    pub fn similarity_loop(&mut self) -> io::Result<()> {
        let Some(max) = self.store.max_index() else {
            return self.console.say("<<< No reviews loaded >>>");
        };
        let first_prompt = format!(
            "\nSelect the first review 0-{max} for similarity analysis ('{}' for main menu): ",
            self.break_token
        );
        let second_prompt = format!(
            "Select the second review 0-{max} ('{}' for main menu): ",
            self.break_token
        );
        loop {
            let first = match self.pick(&first_prompt)? {
                Pick::Index(i) => i,
                Pick::Rejected => continue,
                Pick::Done => return Ok(()),
            };
            let second = match self.pick(&second_prompt)? {
                Pick::Index(i) => i,
                Pick::Rejected => continue,
                Pick::Done => return Ok(()),
            };
            self.show_similarity(first, second)?;
        }
    }

    fn pick(&mut self, prompt: &str) -> io::Result<Pick> {
        let line = self.console.ask(prompt)?;
        match classify(line.as_deref(), self.store.len(), &self.break_token) {
            Selection::Index(i) => Ok(Pick::Index(i)),
            Selection::Rejected(err) => {
                self.reject(&err)?;
                Ok(Pick::Rejected)
            }
            Selection::Break => Ok(Pick::Done),
            Selection::Eof => {
                debug!("input closed at index prompt");
                Ok(Pick::Done)
            }
        }
    }

    fn reject(&mut self, err: &SelectionError) -> io::Result<()> {
        debug!(?err, "index input rejected");
        self.summary.rejected_inputs += 1;
        self.console.say(err)
    }

    fn show_polarity(&mut self, index: usize) -> io::Result<()> {
        let store = self.store;
        let Some(review) = store.get(index) else {
            let err = SelectionError::OutOfRange {
                index: index as i64,
                max: store.len().saturating_sub(1),
            };
            return self.reject(&err);
        };
        match self.sentiment.polarity(&review.text) {
            Ok(value) => {
                let report =
                    PolarityReport::new(index, &review.text, clean_text(&review.text), value);
                self.summary.polarity_reports += 1;
                self.console.blank()?;
                self.console.say(report)
            }
            Err(err) => {
                warn!(index, oracle = self.sentiment.name(), error = %err, "polarity failed");
                self.summary.oracle_failures += 1;
                self.console
                    .say(format_args!("<<< Could not compute polarity: {err} >>>"))
            }
        }
    }

    fn show_similarity(&mut self, first: usize, second: usize) -> io::Result<()> {
        let store = self.store;
        let (Some(a), Some(b)) = (store.get(first), store.get(second)) else {
            let err = SelectionError::OutOfRange {
                index: first.max(second) as i64,
                max: store.len().saturating_sub(1),
            };
            return self.reject(&err);
        };
        match self.similarity.similarity(&a.text, &b.text) {
            Ok(value) => {
                let report = SimilarityReport::new(
                    (first, clean_text(&a.text)),
                    (second, clean_text(&b.text)),
                    value,
                );
                self.summary.similarity_reports += 1;
                self.console.blank()?;
                self.console.say(report)
            }
            Err(err) => {
                warn!(
                    first,
                    second,
                    oracle = self.similarity.name(),
                    error = %err,
                    "similarity failed"
                );
                self.summary.oracle_failures += 1;
                self.console
                    .say(format_args!("<<< Could not compute similarity: {err} >>>"))
            }
        }
    }
}
