//! Transport abstraction: fetch the text at a path, or fail.
//!
//! The index core only assumes this one capability. Retries, backoff,
//! TLS, and connection pooling are the backend's concern; a failed fetch
//! propagates to the caller of the enclosing operation unchanged.

use async_trait::async_trait;

use crate::error::Result;

/// A trait for backends that serve index files by path.
///
/// Paths are relative, `/`-separated, and rooted at wherever the backend
/// was pointed (a directory, a base URL).
#[async_trait]
pub trait Transport: Send + Sync + std::fmt::Debug {
    /// Fetch the file at `path` as text.
    async fn fetch(&self, path: &str) -> Result<String>;
}

pub mod file;
pub mod http;
pub mod memory;

pub use file::FileTransport;
pub use http::HttpTransport;
pub use memory::MemoryTransport;
