//! # Javelin
//!
//! A lightweight client-side full-text search library for Rust. Javelin
//! answers ranked queries against a pre-built, horizontally sharded
//! inverted index served as static files, pulling in only the shards a
//! query needs.
//!
//! ## Features
//!
//! - Pure Rust implementation, no search server required
//! - Deterministic shard routing (matches the offline index builder)
//! - Lazy per-shard loading with idempotent cache merges
//! - Boolean-AND matching with TF-IDF scoring
//! - Pluggable transports (filesystem, HTTP, in-memory)
//!
//! ## Examples
//!
//! ```
//! use std::sync::Arc;
//!
//! use javelin::index::Index;
//! use javelin::transport::MemoryTransport;
//!
//! # fn main() -> javelin::error::Result<()> {
//! let transport = Arc::new(MemoryTransport::new());
//! transport.insert("recipes/shard_count", "1");
//! transport.insert("recipes/0/tst", "bowl,doc1:2 doc2:1\n");
//! transport.insert("recipes/0/dcs", "id,title\ndoc1,Ramen\ndoc2,Udon\n");
//!
//! let index = Index::new("recipes", transport);
//! tokio_test::block_on(async {
//!     index.load().await?;
//!
//!     let results = index.search("bowl").await?;
//!     assert_eq!(results.count, 2);
//!     Ok(())
//! })
//! # }
//! ```

pub mod analysis;
pub mod codec;
pub mod error;
pub mod index;
pub mod shard;
pub mod transport;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
