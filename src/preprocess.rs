//! Review text cleaning: tokens, lowercase, stop-word removal, light lemmas.
//!
//! The built-in oracles clean raw review text with these helpers, and the
//! reports show the cleaned tokens next to each value.

use once_cell::sync::Lazy;
use std::collections::HashSet;

/// English function words that carry no sentiment or topic signal.
/// Negators are not stop words.
static STOP_WORDS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "a", "about", "above", "after", "again", "all", "also", "am", "an", "and", "any", "are",
        "as", "at", "be", "because", "been", "before", "being", "below", "between", "both", "but",
        "by", "can", "could", "did", "do", "does", "doing", "down", "during", "each", "few",
        "for", "from", "further", "had", "has", "have", "having", "he", "her", "here", "hers",
        "herself", "him", "himself", "his", "how", "i", "i'm", "i've", "if", "in", "into", "is",
        "it", "it's", "its", "itself", "just", "me", "more", "most", "my", "myself", "now", "of",
        "off", "on", "once", "only", "or", "other", "our", "ours", "ourselves", "out", "over",
        "own", "same", "she", "should", "so", "some", "such", "than", "that", "the", "their",
        "theirs", "them", "themselves", "then", "there", "these", "they", "this", "those",
        "through", "to", "too", "under", "until", "up", "us", "was", "we", "were", "what",
        "when", "where", "which", "while", "who", "whom", "why", "will", "with", "would", "you",
        "your", "yours", "yourself", "yourselves",
    ]
    .into_iter()
    .collect()
});

/// Split into lowercase word tokens. Apostrophes inside a word are kept
/// ("isn't"), curly apostrophes are folded to ASCII.
pub fn tokenize(text: &str) -> impl Iterator<Item = String> + '_ {
    text.split(|c: char| !(c.is_alphanumeric() || c == '\'' || c == '\u{2019}'))
        .map(|t| t.trim_matches(|c| c == '\'' || c == '\u{2019}'))
        .filter(|t| !t.is_empty())
        .map(|t| t.replace('\u{2019}', "'").to_lowercase())
}

/// Cheap suffix lemmatiser for plural nouns and third-person verbs.
pub fn lemma(token: &str) -> String {
    let n = token.len();
    if n <= 3 || !token.is_ascii() || token.contains('\'') {
        return token.to_string();
    }
    if let Some(stem) = token.strip_suffix("ies") {
        return format!("{stem}y");
    }
    if token.ends_with("sses") {
        return token[..n - 2].to_string();
    }
    if ["xes", "ches", "shes"].iter().any(|s| token.ends_with(s)) {
        return token[..n - 2].to_string();
    }
    if token.ends_with('s') && !["ss", "us", "is", "ous"].iter().any(|s| token.ends_with(s)) {
        return token[..n - 1].to_string();
    }
    token.to_string()
}

pub fn is_stop_word(token: &str) -> bool {
    STOP_WORDS.contains(token)
}

/// Tokenise, drop stop words, lemmatise.
pub fn clean_tokens(text: &str) -> Vec<String> {
    tokenize(text)
        .filter(|t| !is_stop_word(t))
        .map(|t| lemma(&t))
        .collect()
}

/// [`clean_tokens`] joined with single spaces.
pub fn clean_text(text: &str) -> String {
    clean_tokens(text).join(" ")
}
