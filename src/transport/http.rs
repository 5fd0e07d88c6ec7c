//! HTTP-backed transport.

use async_trait::async_trait;

use crate::error::{JavelinError, Result};
use crate::transport::Transport;

/// A transport that fetches index files from a static file host over HTTP.
///
/// Any non-success status is reported as a transport error; there is no
/// retry here. Wrap the [`reqwest::Client`] (connection pooling, proxies,
/// timeouts) via [`HttpTransport::with_client`] when resilience is needed.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    /// Base URL, without a trailing slash.
    base_url: String,
    client: reqwest::Client,
}

impl HttpTransport {
    /// Create a new HTTP transport with a default client.
    pub fn new<S: Into<String>>(base_url: S) -> Self {
        Self::with_client(base_url, reqwest::Client::new())
    }

    /// Create a new HTTP transport with a caller-configured client.
    pub fn with_client<S: Into<String>>(base_url: S, client: reqwest::Client) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();

        HttpTransport { base_url, client }
    }

    /// Get the base URL this transport fetches from.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn fetch(&self, path: &str) -> Result<String> {
        let url = format!("{}/{}", self.base_url, path);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| JavelinError::transport(format!("GET {url} failed: {e}")))?;

        let response = response
            .error_for_status()
            .map_err(|e| JavelinError::transport(format!("GET {url} failed: {e}")))?;

        response
            .text()
            .await
            .map_err(|e| JavelinError::transport(format!("Failed to read body of {url}: {e}")))
    }
}
