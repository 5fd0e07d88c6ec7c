//! Query execution: candidate matching, TF-IDF scoring, and pagination.

use std::collections::{BTreeSet, HashSet};

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::Result;
use crate::index::Index;
use crate::shard::shard_id;

/// Pagination options for a search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchOptions {
    /// Offset of the first hit to materialize.
    pub from: usize,
    /// Maximum number of hits to materialize.
    pub size: usize,
}

impl SearchOptions {
    /// Create options with an explicit offset and page size.
    pub fn new(from: usize, size: usize) -> Self {
        SearchOptions { from, size }
    }
}

impl Default for SearchOptions {
    fn default() -> Self {
        SearchOptions { from: 0, size: 10 }
    }
}

/// A scored, materialized document returned to the caller.
#[derive(Debug, Clone, Serialize)]
pub struct Hit {
    /// The document id.
    pub id: String,
    /// The document's TF-IDF score for the query.
    pub score: f64,
    /// The document body.
    pub source: Value,
}

/// The outcome of a search: materialized hits plus the total match count.
#[derive(Debug, Clone, Serialize)]
pub struct SearchResult {
    /// The hits selected by pagination, sorted ascending by score.
    pub hits: Vec<Hit>,
    /// Total number of matching documents before pagination.
    pub count: usize,
}

impl Index {
    /// Search with the default pagination (`from = 0`, `size = 10`).
    pub async fn search(&self, query: &str) -> Result<SearchResult> {
        self.search_with(query, SearchOptions::default()).await
    }

    /// Search the index for documents matching every query term.
    ///
    /// Terms without a term-stat entry contribute no constraint. Results
    /// sort ascending by score with ties broken on document id; `count`
    /// is always the full candidate count before pagination.
    pub async fn search_with(&self, query: &str, options: SearchOptions) -> Result<SearchResult> {
        self.require_shard_count()?;

        let tokens = self.analyzer().analyze(query)?;

        // Every term's shard is loaded, matching or not.
        for token in &tokens {
            self.ensure_term_loaded(token).await?;
        }

        let candidates = self.find_candidates(&tokens).await;
        let scored = self.score_candidates(candidates, &tokens).await?;
        let count = scored.len();
        let hits = self.fetch_hits(scored, options).await?;

        Ok(SearchResult { hits, count })
    }

    /// Boolean-AND matching over the query terms, in query order.
    ///
    /// The first term with a term-stat entry seeds the candidate set and
    /// each later one intersects it. Once exactly one candidate remains,
    /// remaining terms are not consulted; a later term could in principle
    /// exclude that sole candidate, but this matcher deliberately does not
    /// check. Callers needing a strict AND must not rely on this path.
    async fn find_candidates(&self, tokens: &[String]) -> HashSet<String> {
        let stats = self.term_stats.read().await;

        let mut candidates: HashSet<String> = HashSet::new();
        let mut seeded = false;

        for token in tokens {
            let Some(stat) = stats.entries.get(token) else {
                continue;
            };

            if !seeded {
                candidates.extend(stat.keys().cloned());
                seeded = true;
            } else if candidates.len() == 1 {
                break;
            } else {
                candidates.retain(|id| stat.contains_key(id));
            }
        }

        candidates
    }

    /// Score each candidate as the sum over query tokens of term frequency
    /// times inverse document frequency, then sort ascending by score.
    async fn score_candidates(
        &self,
        candidates: HashSet<String>,
        tokens: &[String],
    ) -> Result<Vec<(String, f64)>> {
        if candidates.is_empty() {
            return Ok(Vec::new());
        }

        let count = self.require_shard_count()?;

        // Page in every candidate's document shard before computing any
        // score: the corpus-size approximation D is the document-cache
        // size, and hoisting the loads keeps D identical between a cold
        // run and a warmed re-run of the same query.
        let shards: BTreeSet<u32> = candidates.iter().map(|id| shard_id(id, count)).collect();
        for shard in shards {
            self.ensure_document_shard_loaded(shard).await?;
        }

        let total_docs = self.loaded_document_count().await as f64;
        let stats = self.term_stats.read().await;

        let mut scored: Vec<(String, f64)> = candidates
            .into_iter()
            .map(|id| {
                let mut score = 0.0;
                for token in tokens {
                    let Some(stat) = stats.entries.get(token) else {
                        continue;
                    };
                    let document_frequency = stat.len();
                    if document_frequency == 0 {
                        continue;
                    }
                    let term_frequency = stat.get(&id).copied().unwrap_or(0) as f64;
                    score += term_frequency * (total_docs / document_frequency as f64).log10();
                }
                (id, score)
            })
            .collect();

        scored.sort_by(|a, b| a.1.total_cmp(&b.1).then_with(|| a.0.cmp(&b.0)));

        Ok(scored)
    }

    /// Materialize the `[from, from + size)` window of the sorted
    /// candidates through the document cache.
    async fn fetch_hits(
        &self,
        scored: Vec<(String, f64)>,
        options: SearchOptions,
    ) -> Result<Vec<Hit>> {
        let mut hits = Vec::new();

        if options.size == 0 || options.from >= scored.len() {
            return Ok(hits);
        }

        for (id, score) in scored.into_iter().skip(options.from).take(options.size) {
            // A candidate missing from its document shard is dropped, not
            // an error.
            if let Some(source) = self.get_document(&id).await? {
                hits.push(Hit { id, score, source });
            }
        }

        Ok(hits)
    }
}
