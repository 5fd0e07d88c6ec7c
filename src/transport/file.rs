//! Filesystem-backed transport.

use std::path::{Path, PathBuf};

use async_trait::async_trait;

use crate::error::{JavelinError, Result};
use crate::transport::Transport;

/// A transport that reads index files from a local directory.
#[derive(Debug, Clone)]
pub struct FileTransport {
    /// The root directory containing index files.
    root: PathBuf,
}

impl FileTransport {
    /// Create a new file transport rooted at the given directory.
    pub fn new<P: AsRef<Path>>(root: P) -> Result<Self> {
        let root = root.as_ref().to_path_buf();

        if !root.is_dir() {
            return Err(JavelinError::transport(format!(
                "Path is not a directory: {}",
                root.display()
            )));
        }

        Ok(FileTransport { root })
    }

    /// Get the full path for a relative file path.
    fn file_path(&self, path: &str) -> PathBuf {
        self.root.join(path)
    }
}

#[async_trait]
impl Transport for FileTransport {
    async fn fetch(&self, path: &str) -> Result<String> {
        let full_path = self.file_path(path);

        tokio::fs::read_to_string(&full_path).await.map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                JavelinError::transport(format!("File not found: {path}"))
            } else {
                JavelinError::transport(format!("Failed to read {path}: {e}"))
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_fetch_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir(dir.path().join("wiki")).unwrap();
        std::fs::write(dir.path().join("wiki/shard_count"), "8").unwrap();

        let transport = FileTransport::new(dir.path()).unwrap();
        let body = transport.fetch("wiki/shard_count").await.unwrap();

        assert_eq!(body, "8");
    }

    #[tokio::test]
    async fn test_fetch_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let transport = FileTransport::new(dir.path()).unwrap();

        let err = transport.fetch("missing").await.unwrap_err();
        assert!(matches!(err, JavelinError::Transport(_)));
    }

    #[test]
    fn test_new_rejects_non_directory() {
        let err = FileTransport::new("/definitely/not/a/real/dir").unwrap_err();
        assert!(matches!(err, JavelinError::Transport(_)));
    }
}
