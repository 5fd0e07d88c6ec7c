//! Text analysis: turning a raw query string into search terms.
//!
//! The pipeline applies processing in this order:
//! 1. Tokenizer: splits text on a fixed set of separator characters
//! 2. Token filters: applied sequentially in the order they were added
//!
//! The default pipeline lowercases each piece, strips punctuation, drops
//! stop words, and drops empty pieces. Order and duplicates of the
//! surviving terms are preserved; there is no stemming.
//!
//! # Examples
//!
//! ```
//! let terms = javelin::analysis::analyze("lunar new year").unwrap();
//! assert_eq!(terms, vec!["lunar", "new", "year"]);
//! ```

use std::sync::LazyLock;

use crate::error::Result;

pub mod analyzer;
pub mod token_filter;
pub mod tokenizer;

pub use analyzer::QueryAnalyzer;
pub use token_filter::{
    Filter, LowercaseFilter, PunctuationStripFilter, RemoveEmptyFilter, StopFilter,
};
pub use tokenizer::{SeparatorTokenizer, Tokenizer};

static DEFAULT_ANALYZER: LazyLock<QueryAnalyzer> = LazyLock::new(QueryAnalyzer::default);

/// Analyze text with the default pipeline, without constructing an index.
///
/// This is a convenience wrapper around [`QueryAnalyzer::analyze`] and has
/// no dependency on shard state.
pub fn analyze(text: &str) -> Result<Vec<String>> {
    DEFAULT_ANALYZER.analyze(text)
}
