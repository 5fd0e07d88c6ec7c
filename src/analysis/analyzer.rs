//! Query analyzer that combines a tokenizer with a chain of filters.
//!
//! # Examples
//!
//! ```
//! use javelin::analysis::QueryAnalyzer;
//!
//! let analyzer = QueryAnalyzer::default();
//! let terms = analyzer.analyze("The Lunar New Year").unwrap();
//!
//! // "the" is removed as a stop word, the rest are lowercased
//! assert_eq!(terms, vec!["lunar", "new", "year"]);
//! ```

use std::sync::Arc;

use crate::analysis::token_filter::{
    Filter, LowercaseFilter, PunctuationStripFilter, RemoveEmptyFilter, StopFilter,
};
use crate::analysis::tokenizer::{SeparatorTokenizer, Tokenizer};
use crate::error::Result;

/// An analyzer that runs a tokenizer and then each filter in order.
///
/// The default pipeline is the one the index was built with: separator
/// split, lowercase, punctuation strip, stop words, drop empties. Order
/// and duplicates of the surviving terms are preserved.
#[derive(Clone)]
pub struct QueryAnalyzer {
    tokenizer: Arc<dyn Tokenizer>,
    filters: Vec<Arc<dyn Filter>>,
}

impl QueryAnalyzer {
    /// Create a new analyzer with the given tokenizer and no filters.
    pub fn new(tokenizer: Arc<dyn Tokenizer>) -> Self {
        QueryAnalyzer {
            tokenizer,
            filters: Vec::new(),
        }
    }

    /// Add a filter to the pipeline.
    pub fn add_filter(mut self, filter: Arc<dyn Filter>) -> Self {
        self.filters.push(filter);
        self
    }

    /// Get the tokenizer used by this analyzer.
    pub fn tokenizer(&self) -> &Arc<dyn Tokenizer> {
        &self.tokenizer
    }

    /// Get the filters used by this analyzer.
    pub fn filters(&self) -> &[Arc<dyn Filter>] {
        &self.filters
    }

    /// Analyze the given text into an ordered sequence of terms.
    pub fn analyze(&self, text: &str) -> Result<Vec<String>> {
        let mut terms = self.tokenizer.tokenize(text)?;

        for filter in &self.filters {
            terms = filter.filter(terms)?;
        }

        Ok(terms)
    }
}

impl Default for QueryAnalyzer {
    fn default() -> Self {
        QueryAnalyzer::new(Arc::new(SeparatorTokenizer::default()))
            .add_filter(Arc::new(LowercaseFilter::new()))
            .add_filter(Arc::new(PunctuationStripFilter::new()))
            .add_filter(Arc::new(StopFilter::new()))
            .add_filter(Arc::new(RemoveEmptyFilter::new()))
    }
}
