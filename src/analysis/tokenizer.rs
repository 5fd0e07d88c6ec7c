//! Tokenizer implementations for query analysis.

use std::sync::Arc;

use regex::Regex;

use crate::error::{JavelinError, Result};

/// Trait for tokenizers that split text into raw pieces.
pub trait Tokenizer: Send + Sync {
    /// Split the given text into pieces.
    fn tokenize(&self, text: &str) -> Result<Vec<String>>;

    /// Get the name of this tokenizer (for debugging and configuration).
    fn name(&self) -> &'static str;
}

/// The separator characters recognized by [`SeparatorTokenizer::new`]:
/// ASCII comma, ideographic comma (U+3001), ideographic space (U+3000),
/// ASCII space, zero-width space (U+200B), and apostrophe variants
/// (U+0027, U+2019).
pub const DEFAULT_SEPARATOR_PATTERN: &str = "[,'\u{2019}\u{3001}\u{3000} \u{200B}]+";

/// A tokenizer that splits text on runs of separator characters.
///
/// Pieces between separators are returned verbatim, including empty pieces
/// produced by leading or trailing separators; downstream filters decide
/// what survives.
#[derive(Clone, Debug)]
pub struct SeparatorTokenizer {
    /// The regex matching runs of separator characters
    pattern: Arc<Regex>,
}

impl SeparatorTokenizer {
    /// Create a new separator tokenizer with the default separator set.
    pub fn new() -> Result<Self> {
        Self::with_pattern(DEFAULT_SEPARATOR_PATTERN)
    }

    /// Create a new separator tokenizer with a custom separator pattern.
    pub fn with_pattern(pattern: &str) -> Result<Self> {
        let regex = Regex::new(pattern)
            .map_err(|e| JavelinError::analysis(format!("Invalid separator pattern: {e}")))?;

        Ok(SeparatorTokenizer {
            pattern: Arc::new(regex),
        })
    }

    /// Get the separator pattern used by this tokenizer.
    pub fn pattern(&self) -> &str {
        self.pattern.as_str()
    }
}

impl Default for SeparatorTokenizer {
    fn default() -> Self {
        Self::new().expect("Default separator pattern should be valid")
    }
}

impl Tokenizer for SeparatorTokenizer {
    fn tokenize(&self, text: &str) -> Result<Vec<String>> {
        let pieces = self.pattern.split(text).map(|s| s.to_string()).collect();
        Ok(pieces)
    }

    fn name(&self) -> &'static str {
        "separator"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_separator_tokenizer() {
        let tokenizer = SeparatorTokenizer::new().unwrap();
        let pieces = tokenizer.tokenize("lunar new year").unwrap();

        assert_eq!(pieces, vec!["lunar", "new", "year"]);
    }

    #[test]
    fn test_separator_tokenizer_mixed_separators() {
        let tokenizer = SeparatorTokenizer::new().unwrap();
        let pieces = tokenizer.tokenize("東京、京都　大阪,奈良").unwrap();

        assert_eq!(pieces, vec!["東京", "京都", "大阪", "奈良"]);
    }

    #[test]
    fn test_separator_tokenizer_apostrophes() {
        let tokenizer = SeparatorTokenizer::new().unwrap();
        let pieces = tokenizer.tokenize("it's o’clock").unwrap();

        assert_eq!(pieces, vec!["it", "s", "o", "clock"]);
    }

    #[test]
    fn test_separator_tokenizer_leading_zero_width_space() {
        let tokenizer = SeparatorTokenizer::new().unwrap();
        let pieces = tokenizer.tokenize("\u{200B}旧正月").unwrap();

        // A leading separator produces an empty first piece; filters drop it.
        assert_eq!(pieces, vec!["", "旧正月"]);
    }

    #[test]
    fn test_separator_runs_collapse() {
        let tokenizer = SeparatorTokenizer::new().unwrap();
        let pieces = tokenizer.tokenize("a, b,, c").unwrap();

        assert_eq!(pieces, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_tokenizer_name() {
        assert_eq!(SeparatorTokenizer::new().unwrap().name(), "separator");
    }
}
