//! In-memory transport for testing.

use std::collections::HashMap;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;

use crate::error::{JavelinError, Result};
use crate::transport::Transport;

/// An in-memory transport serving a path-to-body map.
///
/// Useful for tests and for embedding a small pre-built index directly in
/// a binary. Counts fetches so tests can assert that shard loads are
/// memoized.
#[derive(Debug, Default)]
pub struct MemoryTransport {
    /// The files served, keyed by relative path.
    files: Mutex<HashMap<String, String>>,
    /// Number of fetch calls issued, hits and misses alike.
    fetches: AtomicUsize,
}

impl MemoryTransport {
    /// Create a new empty memory transport.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert (or replace) a file body at the given path.
    pub fn insert<P, B>(&self, path: P, body: B)
    where
        P: Into<String>,
        B: Into<String>,
    {
        let mut files = self.files.lock().unwrap();
        files.insert(path.into(), body.into());
    }

    /// Get the number of files stored.
    pub fn file_count(&self) -> usize {
        self.files.lock().unwrap().len()
    }

    /// Get the number of fetch calls issued so far.
    pub fn fetch_count(&self) -> usize {
        self.fetches.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Transport for MemoryTransport {
    async fn fetch(&self, path: &str) -> Result<String> {
        self.fetches.fetch_add(1, Ordering::SeqCst);

        let files = self.files.lock().unwrap();
        files
            .get(path)
            .cloned()
            .ok_or_else(|| JavelinError::transport(format!("File not found: {path}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_insert_and_fetch() {
        let transport = MemoryTransport::new();
        transport.insert("wiki/shard_count", "4");

        assert_eq!(transport.file_count(), 1);
        assert_eq!(transport.fetch("wiki/shard_count").await.unwrap(), "4");
        assert_eq!(transport.fetch_count(), 1);
    }

    #[tokio::test]
    async fn test_fetch_missing_path() {
        let transport = MemoryTransport::new();

        let err = transport.fetch("nope").await.unwrap_err();
        assert!(matches!(err, JavelinError::Transport(_)));
        assert_eq!(transport.fetch_count(), 1);
    }
}
