//! The sharded index: shard-count loading, lazy shard caches, document
//! retrieval, and the search entry points.
//!
//! An [`Index`] never mutates the remote files it reads. Both caches are
//! owned by the instance, append-only, and live for the instance's
//! lifetime; loading a shard merges every record in that shard, so later
//! lookups against the same shard are free.

use std::collections::{HashMap, HashSet};
use std::sync::Arc;
use std::sync::atomic::{AtomicU32, Ordering};

use log::debug;
use serde_json::Value;
use tokio::sync::RwLock;

use crate::analysis::QueryAnalyzer;
use crate::codec;
use crate::error::{JavelinError, Result};
use crate::shard::shard_id;
use crate::transport::Transport;

pub mod search;

pub use search::{Hit, SearchOptions, SearchResult};

/// File name of the shard count metadata.
const SHARD_COUNT_FILE_NAME: &str = "shard_count";
/// File name of a shard's term statistics.
const TERM_STATS_FILE_NAME: &str = "tst";
/// File name of a shard's documents table.
const DOCUMENTS_FILE_NAME: &str = "dcs";

/// Cache of term statistics: term to (document id to frequency).
#[derive(Debug, Default)]
struct TermStatStore {
    entries: HashMap<String, HashMap<String, u64>>,
    /// Shard ids whose term statistics have already been merged.
    loaded_shards: HashSet<u32>,
}

/// Cache of document bodies keyed by document id.
#[derive(Debug, Default)]
struct DocumentStore {
    entries: HashMap<String, Value>,
    /// Shard ids whose documents have already been merged.
    loaded_shards: HashSet<u32>,
}

/// A read-only handle to one sharded index.
///
/// Construct with [`Index::new`], then call [`Index::load`] once before
/// searching; routing a key requires the shard count. Shards are pulled
/// lazily the first time a term or document in them is needed, and stay
/// cached until the instance is dropped. Concurrent searches on one
/// instance share the caches; merges are idempotent, so racing loads of
/// the same shard are safe.
pub struct Index {
    name: String,
    transport: Arc<dyn Transport>,
    analyzer: QueryAnalyzer,
    /// Number of shards, 0 until [`Index::load`] succeeds.
    shard_count: AtomicU32,
    term_stats: RwLock<TermStatStore>,
    documents: RwLock<DocumentStore>,
}

impl Index {
    /// Create a new index handle with the shard count unset.
    pub fn new<S: Into<String>>(name: S, transport: Arc<dyn Transport>) -> Self {
        Index {
            name: name.into(),
            transport,
            analyzer: QueryAnalyzer::default(),
            shard_count: AtomicU32::new(0),
            term_stats: RwLock::new(TermStatStore::default()),
            documents: RwLock::new(DocumentStore::default()),
        }
    }

    /// Replace the query analyzer.
    ///
    /// The analyzer must match the pipeline the index was built with, or
    /// query terms will not line up with indexed terms.
    pub fn with_analyzer(mut self, analyzer: QueryAnalyzer) -> Self {
        self.analyzer = analyzer;
        self
    }

    /// Get the index name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the shard count (0 until loaded).
    pub fn shard_count(&self) -> u32 {
        self.shard_count.load(Ordering::SeqCst)
    }

    /// Fetch and set the shard count. Must succeed before any search.
    pub async fn load(&self) -> Result<()> {
        let path = format!("{}/{}", self.name, SHARD_COUNT_FILE_NAME);
        let body = self.transport.fetch(&path).await?;

        let count: u32 = body
            .trim()
            .parse()
            .map_err(|_| JavelinError::index(format!("Invalid shard count: {:?}", body.trim())))?;
        if count == 0 {
            return Err(JavelinError::index("Shard count must be positive"));
        }

        self.shard_count.store(count, Ordering::SeqCst);
        debug!("index {} loaded with {count} shards", self.name);
        Ok(())
    }

    /// Fetch one document body by id.
    ///
    /// Loads the owning document shard on a cache miss. An id absent from
    /// its shard after loading resolves to `Ok(None)`, not an error.
    pub async fn get_document(&self, doc_id: &str) -> Result<Option<Value>> {
        let count = self.require_shard_count()?;

        {
            let documents = self.documents.read().await;
            if let Some(doc) = documents.entries.get(doc_id) {
                return Ok(Some(doc.clone()));
            }
        }

        self.ensure_document_shard_loaded(shard_id(doc_id, count))
            .await?;

        let documents = self.documents.read().await;
        Ok(documents.entries.get(doc_id).cloned())
    }

    /// Number of distinct documents currently paged into the cache.
    ///
    /// This is the online corpus-size approximation used as `D` in the
    /// inverse document frequency; it only ever grows.
    pub async fn loaded_document_count(&self) -> usize {
        self.documents.read().await.entries.len()
    }

    /// The query analyzer in use.
    pub fn analyzer(&self) -> &QueryAnalyzer {
        &self.analyzer
    }

    fn require_shard_count(&self) -> Result<u32> {
        match self.shard_count() {
            0 => Err(JavelinError::invalid_operation(
                "index not loaded: call load() before searching",
            )),
            count => Ok(count),
        }
    }

    /// Make sure the shard owning `term` has its term statistics merged.
    async fn ensure_term_loaded(&self, term: &str) -> Result<()> {
        let count = self.require_shard_count()?;
        let shard = shard_id(term, count);

        {
            let stats = self.term_stats.read().await;
            if stats.entries.contains_key(term) || stats.loaded_shards.contains(&shard) {
                return Ok(());
            }
        }

        self.load_term_stats_shard(shard).await
    }

    async fn load_term_stats_shard(&self, shard: u32) -> Result<()> {
        let path = format!("{}/{}/{}", self.name, shard, TERM_STATS_FILE_NAME);
        let body = self.transport.fetch(&path).await?;
        let records = codec::decode_term_stats(&body)?;

        let mut stats = self.term_stats.write().await;
        for record in records {
            // Last write wins per (term, doc); each pair originates from
            // exactly one shard, so re-merging cannot corrupt counts.
            let entry = stats.entries.entry(record.term).or_default();
            entry.extend(record.frequencies);
        }
        stats.loaded_shards.insert(shard);

        debug!("index {}: merged term stats shard {shard}", self.name);
        Ok(())
    }

    /// Make sure the given shard's documents are merged.
    async fn ensure_document_shard_loaded(&self, shard: u32) -> Result<()> {
        {
            let documents = self.documents.read().await;
            if documents.loaded_shards.contains(&shard) {
                return Ok(());
            }
        }

        let path = format!("{}/{}/{}", self.name, shard, DOCUMENTS_FILE_NAME);
        let body = self.transport.fetch(&path).await?;
        let records = codec::decode_documents(&body)?;

        let mut documents = self.documents.write().await;
        for record in records {
            documents.entries.insert(record.id, record.source);
        }
        documents.loaded_shards.insert(shard);

        debug!("index {}: merged documents shard {shard}", self.name);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transport::MemoryTransport;

    fn single_shard_transport() -> Arc<MemoryTransport> {
        let transport = Arc::new(MemoryTransport::new());
        transport.insert("wiki/shard_count", "1");
        transport.insert("wiki/0/tst", "bowl,doc1:2 doc2:1\nyear,doc2:3\n");
        transport.insert(
            "wiki/0/dcs",
            "id,title,author.name\ndoc1,First,Alice\ndoc2,Second,Bob\n",
        );
        transport
    }

    #[tokio::test]
    async fn test_load_sets_shard_count() {
        let transport = single_shard_transport();
        let index = Index::new("wiki", transport);

        assert_eq!(index.shard_count(), 0);
        index.load().await.unwrap();
        assert_eq!(index.shard_count(), 1);
    }

    #[tokio::test]
    async fn test_load_rejects_invalid_shard_count() {
        let transport = Arc::new(MemoryTransport::new());
        transport.insert("wiki/shard_count", "not-a-number");
        let index = Index::new("wiki", transport);

        let err = index.load().await.unwrap_err();
        assert!(matches!(err, JavelinError::Index(_)));
    }

    #[tokio::test]
    async fn test_load_rejects_zero_shard_count() {
        let transport = Arc::new(MemoryTransport::new());
        transport.insert("wiki/shard_count", "0");
        let index = Index::new("wiki", transport);

        let err = index.load().await.unwrap_err();
        assert!(matches!(err, JavelinError::Index(_)));
    }

    #[tokio::test]
    async fn test_load_propagates_transport_failure() {
        let transport = Arc::new(MemoryTransport::new());
        let index = Index::new("wiki", transport);

        let err = index.load().await.unwrap_err();
        assert!(matches!(err, JavelinError::Transport(_)));
    }

    #[tokio::test]
    async fn test_get_document_before_load_is_precondition_error() {
        let transport = single_shard_transport();
        let index = Index::new("wiki", transport);

        let err = index.get_document("doc1").await.unwrap_err();
        assert!(matches!(err, JavelinError::InvalidOperation(_)));
    }

    #[tokio::test]
    async fn test_get_document_builds_nested_fields() {
        let transport = single_shard_transport();
        let index = Index::new("wiki", transport);
        index.load().await.unwrap();

        let doc = index.get_document("doc1").await.unwrap().unwrap();
        assert_eq!(doc["title"], "First");
        assert_eq!(doc["author"]["name"], "Alice");
    }

    #[tokio::test]
    async fn test_get_document_absent_after_load_is_none() {
        let transport = single_shard_transport();
        let index = Index::new("wiki", transport);
        index.load().await.unwrap();

        assert!(index.get_document("ghost").await.unwrap().is_none());
        assert_eq!(index.loaded_document_count().await, 2);
    }

    #[tokio::test]
    async fn test_document_shard_fetch_is_memoized() {
        let transport = single_shard_transport();
        let index = Index::new("wiki", transport.clone());
        index.load().await.unwrap();

        index.get_document("doc1").await.unwrap();
        let fetches = transport.fetch_count();

        // Cache hit and not-found lookups against a merged shard issue no
        // further fetches.
        index.get_document("doc2").await.unwrap();
        index.get_document("ghost").await.unwrap();
        assert_eq!(transport.fetch_count(), fetches);
    }

    #[tokio::test]
    async fn test_term_stats_merge_is_idempotent() {
        let transport = single_shard_transport();
        let index = Index::new("wiki", transport);
        index.load().await.unwrap();

        index.load_term_stats_shard(0).await.unwrap();
        let snapshot = {
            let stats = index.term_stats.read().await;
            stats.entries.clone()
        };

        index.load_term_stats_shard(0).await.unwrap();
        let stats = index.term_stats.read().await;
        assert_eq!(stats.entries, snapshot);
        assert_eq!(stats.entries["bowl"]["doc1"], 2);
        assert_eq!(stats.entries["bowl"].len(), 2);
    }
}
