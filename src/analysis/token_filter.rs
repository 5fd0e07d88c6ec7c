//! Token filter implementations for term transformation.
//!
//! Filters receive the tokenizer's pieces in order and may rewrite or drop
//! them. The default pipeline applies [`LowercaseFilter`],
//! [`PunctuationStripFilter`], [`StopFilter`], and [`RemoveEmptyFilter`]
//! in that order.

use std::collections::HashSet;
use std::sync::{Arc, LazyLock};

use crate::error::Result;

/// Trait for filters that transform a term sequence.
pub trait Filter: Send + Sync {
    /// Apply this filter to a sequence of terms.
    fn filter(&self, terms: Vec<String>) -> Result<Vec<String>>;

    /// Get the name of this filter (for debugging and configuration).
    fn name(&self) -> &'static str;
}

/// Default stop words list.
///
/// Common English function words plus a few tokens that appear in almost
/// every indexed document ("s", "t", "www").
const DEFAULT_STOP_WORDS: &[&str] = &[
    "a", "and", "are", "as", "at", "be", "but", "by", "for", "if", "in", "into", "is", "it", "no",
    "not", "of", "on", "or", "s", "such", "t", "that", "the", "their", "then", "there", "these",
    "they", "this", "to", "was", "will", "with", "www",
];

/// Default stop words as a HashSet.
pub static DEFAULT_STOP_WORDS_SET: LazyLock<HashSet<String>> = LazyLock::new(|| {
    DEFAULT_STOP_WORDS
        .iter()
        .map(|&s| s.to_string())
        .collect()
});

/// Characters removed from every piece by [`PunctuationStripFilter`].
///
/// ASCII punctuation minus the apostrophe, which is already a separator.
const PUNCTUATION_CHARS: &str = "!\"#$%&()*+,-./:;<=>?@[\\]^_`{|}~";

/// A filter that converts terms to lowercase.
#[derive(Clone, Debug, Default)]
pub struct LowercaseFilter;

impl LowercaseFilter {
    /// Create a new lowercase filter.
    pub fn new() -> Self {
        LowercaseFilter
    }
}

impl Filter for LowercaseFilter {
    fn filter(&self, terms: Vec<String>) -> Result<Vec<String>> {
        Ok(terms.into_iter().map(|t| t.to_lowercase()).collect())
    }

    fn name(&self) -> &'static str {
        "lowercase"
    }
}

/// A filter that strips a fixed set of punctuation characters from each term.
#[derive(Clone, Debug, Default)]
pub struct PunctuationStripFilter;

impl PunctuationStripFilter {
    /// Create a new punctuation strip filter.
    pub fn new() -> Self {
        PunctuationStripFilter
    }

    /// Check if a character is in the stripped punctuation set.
    pub fn is_punctuation(c: char) -> bool {
        PUNCTUATION_CHARS.contains(c)
    }
}

impl Filter for PunctuationStripFilter {
    fn filter(&self, terms: Vec<String>) -> Result<Vec<String>> {
        let stripped = terms
            .into_iter()
            .map(|t| t.chars().filter(|&c| !Self::is_punctuation(c)).collect())
            .collect();

        Ok(stripped)
    }

    fn name(&self) -> &'static str {
        "punctuation_strip"
    }
}

/// A filter that removes stop words from the term sequence.
///
/// Stop words are common words that typically don't contribute to search
/// relevance and are not present in the index's term statistics.
#[derive(Clone, Debug)]
pub struct StopFilter {
    /// The set of stop words to remove
    stop_words: Arc<HashSet<String>>,
}

impl StopFilter {
    /// Create a new stop filter with the default stop words.
    pub fn new() -> Self {
        Self::with_stop_words(DEFAULT_STOP_WORDS_SET.clone())
    }

    /// Create a new stop filter with custom stop words.
    pub fn with_stop_words(stop_words: HashSet<String>) -> Self {
        StopFilter {
            stop_words: Arc::new(stop_words),
        }
    }

    /// Create a new stop filter from a list of stop words.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let stop_words = words.into_iter().map(|s| s.into()).collect();
        Self::with_stop_words(stop_words)
    }

    /// Check if a word is a stop word.
    pub fn is_stop_word(&self, word: &str) -> bool {
        self.stop_words.contains(word)
    }

    /// Get the number of stop words.
    pub fn len(&self) -> usize {
        self.stop_words.len()
    }

    /// Check if the stop word set is empty.
    pub fn is_empty(&self) -> bool {
        self.stop_words.is_empty()
    }
}

impl Default for StopFilter {
    fn default() -> Self {
        Self::new()
    }
}

impl Filter for StopFilter {
    fn filter(&self, terms: Vec<String>) -> Result<Vec<String>> {
        Ok(terms
            .into_iter()
            .filter(|t| !self.is_stop_word(t))
            .collect())
    }

    fn name(&self) -> &'static str {
        "stop"
    }
}

/// A filter that removes empty terms.
#[derive(Clone, Debug, Default)]
pub struct RemoveEmptyFilter;

impl RemoveEmptyFilter {
    /// Create a new remove-empty filter.
    pub fn new() -> Self {
        RemoveEmptyFilter
    }
}

impl Filter for RemoveEmptyFilter {
    fn filter(&self, terms: Vec<String>) -> Result<Vec<String>> {
        Ok(terms.into_iter().filter(|t| !t.is_empty()).collect())
    }

    fn name(&self) -> &'static str {
        "remove_empty"
    }
}
