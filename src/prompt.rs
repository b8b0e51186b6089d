//! Line-oriented prompt I/O and index parsing.
//!
//! `Console` wraps any `BufRead` + `Write` pair so the session runs the same
//! against a terminal or a scripted buffer.

use std::io::{self, BufRead, Write};
use thiserror::Error;

/// Rejected index input. Recovered locally by re-prompting.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectionError {
    #[error("<<< Please enter an integer >>>")]
    NotAnInteger(String),
    #[error("<<< Index out of range: valid indices are 0-{max} >>>")]
    OutOfRange { index: i64, max: usize },
}

/// What a single index prompt produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    Index(usize),
    Rejected(SelectionError),
    Break,
    /// Input stream closed.
    Eof,
}

/// Classify one prompt answer (`None` = end of input) against a store of
/// `len` items and the lowercased `break_token`.
pub fn classify(line: Option<&str>, len: usize, break_token: &str) -> Selection {
    match line {
        None => Selection::Eof,
        Some(l) if is_break(l, break_token) => Selection::Break,
        Some(l) => match parse_index(l, len) {
            Ok(i) => Selection::Index(i),
            Err(e) => Selection::Rejected(e),
        },
    }
}

/// Interpret one line as an index into a store of `len` items.
///
/// With `len == 0` every integer is out of range.
pub fn parse_index(input: &str, len: usize) -> Result<usize, SelectionError> {
    let trimmed = input.trim();
    let max = len.saturating_sub(1);
    let index: i64 = match trimmed.parse() {
        Ok(i) => i,
        Err(_) => {
            return Err(match saturated_integer(trimmed) {
                Some(index) => SelectionError::OutOfRange { index, max },
                None => SelectionError::NotAnInteger(trimmed.to_string()),
            })
        }
    };
    usize::try_from(index)
        .ok()
        .filter(|&i| i < len)
        .ok_or(SelectionError::OutOfRange { index, max })
}

/// An integer literal too wide for `i64`, clamped to the sign's extreme.
fn saturated_integer(s: &str) -> Option<i64> {
    let (negative, digits) = match s.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, s.strip_prefix('+').unwrap_or(s)),
    };
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    Some(if negative { i64::MIN } else { i64::MAX })
}

/// True when `input` is the break token, ignoring surrounding space and case.
/// `token` is expected already lowercased.
pub fn is_break(input: &str, token: &str) -> bool {
    input.trim().to_lowercase() == token
}

pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Print `prompt` (no newline) and read one line. `None` on end of input.
    /// Invalid UTF-8 is replaced rather than failing the read.
    pub fn ask(&mut self, prompt: &str) -> io::Result<Option<String>> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;
        let mut buf = Vec::new();
        if self.input.read_until(b'\n', &mut buf)? == 0 {
            return Ok(None);
        }
        let line = String::from_utf8_lossy(&buf);
        Ok(Some(line.trim_end_matches(['\n', '\r']).to_string()))
    }

    pub fn say(&mut self, text: impl std::fmt::Display) -> io::Result<()> {
        writeln!(self.output, "{text}")
    }

    pub fn blank(&mut self) -> io::Result<()> {
        writeln!(self.output)
    }

    pub fn into_output(self) -> W {
        self.output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::io::Cursor;

    #[rstest]
    #[case("0", 0)]
    #[case(" 2 ", 2)]
    #[case("+1", 1)]
    fn valid_indices(#[case] input: &str, #[case] expected: usize) {
        assert_eq!(parse_index(input, 3), Ok(expected));
    }

    #[rstest]
    #[case("abc")]
    #[case("3.5")]
    #[case("")]
    #[case("   ")]
    #[case("1e3")]
    #[case("-")]
    #[case("12a")]
    fn non_integers_are_format_errors(#[case] input: &str) {
        assert!(matches!(
            parse_index(input, 3),
            Err(SelectionError::NotAnInteger(_))
        ));
    }

    #[rstest]
    #[case("-1", -1)]
    #[case("3", 3)]
    #[case("1000", 1000)]
    #[case("99999999999999999999999", i64::MAX)]
    #[case("+99999999999999999999999", i64::MAX)]
    #[case("-99999999999999999999999", i64::MIN)]
    fn out_of_range_reports_bounds(#[case] input: &str, #[case] index: i64) {
        assert_eq!(
            parse_index(input, 3),
            Err(SelectionError::OutOfRange { index, max: 2 })
        );
    }

    #[test]
    fn error_messages() {
        assert_eq!(
            SelectionError::NotAnInteger("x".into()).to_string(),
            "<<< Please enter an integer >>>"
        );
        assert_eq!(
            SelectionError::OutOfRange { index: 9, max: 2 }.to_string(),
            "<<< Index out of range: valid indices are 0-2 >>>"
        );
    }

    #[rstest]
    #[case("stop", true)]
    #[case("  STOP\t", true)]
    #[case("Stop", true)]
    #[case("stopp", false)]
    #[case("", false)]
    fn break_token(#[case] input: &str, #[case] expected: bool) {
        assert_eq!(is_break(input, "stop"), expected);
    }

    #[test]
    fn classify_checks_break_before_parsing() {
        assert_eq!(classify(Some(" STOP "), 3, "stop"), Selection::Break);
        assert_eq!(classify(Some("1"), 3, "stop"), Selection::Index(1));
        assert_eq!(classify(None, 3, "stop"), Selection::Eof);
        assert_eq!(
            classify(Some("7"), 3, "stop"),
            Selection::Rejected(SelectionError::OutOfRange { index: 7, max: 2 })
        );
        // A numeric break token still wins over index parsing.
        assert_eq!(classify(Some("0"), 3, "0"), Selection::Break);
    }

    #[test]
    fn ask_strips_line_endings_and_signals_eof() {
        let mut console = Console::new(Cursor::new("first\r\nsecond\n"), Vec::new());
        assert_eq!(console.ask("> ").unwrap().as_deref(), Some("first"));
        assert_eq!(console.ask("> ").unwrap().as_deref(), Some("second"));
        assert_eq!(console.ask("> ").unwrap(), None);
        assert_eq!(String::from_utf8(console.into_output()).unwrap(), "> > > ");
    }

    #[test]
    fn ask_replaces_invalid_utf8() {
        let mut console = Console::new(Cursor::new(vec![0xff, 0xfe, b'1', b'\n']), Vec::new());
        let line = console.ask("> ").unwrap().unwrap();
        assert_eq!(line, "\u{fffd}\u{fffd}1");
        assert!(matches!(
            parse_index(&line, 3),
            Err(SelectionError::NotAnInteger(_))
        ));
    }
}
