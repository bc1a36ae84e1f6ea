//! HTTP client for dereferencing group documents.

use async_trait::async_trait;
use grouptrust_types::Graph;
use std::time::Duration;

use crate::config::GroupTrustConfig;
use crate::error::FetchError;
use crate::fetcher::GraphFetcher;
use crate::ntriples;

/// Default timeout for a whole document request.
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Default connection timeout.
const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_secs(5);

/// Documents larger than this are rejected without parsing.
pub const DEFAULT_MAX_DOCUMENT_BYTES: usize = 1024 * 1024;

const ACCEPT_NTRIPLES: &str = "application/n-triples";

/// Fetches group documents over HTTP as N-Triples.
///
/// Sends `GET {url}` with `Accept: application/n-triples`, rejects non-2xx
/// responses and oversized bodies, and parses what is left.
pub struct HttpGraphFetcher {
    /// HTTP client (reusable connection pool).
    http_client: reqwest::Client,
    max_document_bytes: usize,
}

impl HttpGraphFetcher {
    /// Create a fetcher with default timeout settings.
    pub fn new() -> Self {
        Self::with_timeouts(DEFAULT_TIMEOUT, DEFAULT_CONNECT_TIMEOUT)
    }

    /// Create a fetcher with custom timeouts.
    pub fn with_timeouts(timeout: Duration, connect_timeout: Duration) -> Self {
        let http_client = reqwest::Client::builder()
            .timeout(timeout)
            .connect_timeout(connect_timeout)
            .build()
            .unwrap_or_default();
        Self {
            http_client,
            max_document_bytes: DEFAULT_MAX_DOCUMENT_BYTES,
        }
    }

    /// Create a fetcher from the timeouts and size limit in `config`.
    pub fn from_config(config: &GroupTrustConfig) -> Self {
        Self::with_timeouts(config.fetch_timeout(), config.connect_timeout())
            .with_max_document_bytes(config.max_document_bytes)
    }

    pub fn with_max_document_bytes(mut self, limit: usize) -> Self {
        self.max_document_bytes = limit;
        self
    }

    async fn fetch_body(&self, url: &str) -> Result<String, FetchError> {
        let mut response = self
            .http_client
            .get(url)
            .header(reqwest::header::ACCEPT, ACCEPT_NTRIPLES)
            .send()
            .await
            .map_err(map_request_error)?;

        if !response.status().is_success() {
            return Err(FetchError::Status(response.status().as_u16()));
        }

        let limit = self.max_document_bytes;
        if response
            .content_length()
            .is_some_and(|len| len > limit as u64)
        {
            return Err(FetchError::TooLarge { limit });
        }

        let mut body = Vec::new();
        while let Some(chunk) = response.chunk().await.map_err(map_request_error)? {
            if body.len() + chunk.len() > limit {
                return Err(FetchError::TooLarge { limit });
            }
            body.extend_from_slice(&chunk);
        }

        String::from_utf8(body)
            .map_err(|e| FetchError::InvalidResponse(format!("body is not UTF-8: {e}")))
    }
}

fn map_request_error(e: reqwest::Error) -> FetchError {
    if e.is_timeout() {
        FetchError::Unreachable(format!("request timed out: {e}"))
    } else if e.is_connect() {
        FetchError::Unreachable(format!("connection failed: {e}"))
    } else {
        FetchError::Other(e.to_string())
    }
}

impl Default for HttpGraphFetcher {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl GraphFetcher for HttpGraphFetcher {
    async fn fetch(&self, url: &str) -> Result<Graph, FetchError> {
        let body = self.fetch_body(url).await?;
        let graph = ntriples::parse(&body)?;
        tracing::trace!(url, triples = graph.len(), "fetched graph");
        Ok(graph)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    /// Serve one canned HTTP response on a local port and return its URL.
    async fn serve_once(status: &'static str, body: String) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut buf = [0u8; 4096];
            let _ = socket.read(&mut buf).await;
            let response = format!(
                "HTTP/1.1 {status}\r\ncontent-type: application/n-triples\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{body}",
                body.len()
            );
            let _ = socket.write_all(response.as_bytes()).await;
            let _ = socket.shutdown().await;
        });
        format!("http://{addr}/group")
    }

    #[test]
    fn fetcher_creation() {
        let fetcher = HttpGraphFetcher::new();
        assert_eq!(fetcher.max_document_bytes, DEFAULT_MAX_DOCUMENT_BYTES);
    }

    #[test]
    fn fetcher_from_config_uses_limit() {
        let config = GroupTrustConfig {
            max_document_bytes: 512,
            ..GroupTrustConfig::default()
        };
        let fetcher = HttpGraphFetcher::from_config(&config);
        assert_eq!(fetcher.max_document_bytes, 512);
    }

    #[tokio::test]
    async fn fetches_and_parses_document() {
        let body = "<http://example.com/group> <http://www.w3.org/2006/vcard/ns#hasMember> <http://example.com/webID> .\n".to_string();
        let url = serve_once("200 OK", body).await;
        let graph = HttpGraphFetcher::new().fetch(&url).await.unwrap();
        assert_eq!(graph.len(), 1);
    }

    #[tokio::test]
    async fn non_success_status_is_an_error() {
        let url = serve_once("404 Not Found", String::new()).await;
        let err = HttpGraphFetcher::new().fetch(&url).await.unwrap_err();
        assert!(matches!(err, FetchError::Status(404)));
    }

    #[tokio::test]
    async fn oversized_document_is_rejected() {
        let body = "# padding\n".repeat(100);
        let url = serve_once("200 OK", body).await;
        let err = HttpGraphFetcher::new()
            .with_max_document_bytes(64)
            .fetch(&url)
            .await
            .unwrap_err();
        assert!(matches!(err, FetchError::TooLarge { limit: 64 }));
    }

    #[tokio::test]
    async fn unparsable_document_is_an_error() {
        let url = serve_once("200 OK", "not n-triples\n".to_string()).await;
        let err = HttpGraphFetcher::new().fetch(&url).await.unwrap_err();
        assert!(matches!(err, FetchError::Parse { line: 1, .. }));
    }

    #[tokio::test]
    async fn closed_port_is_unreachable() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);
        let err = HttpGraphFetcher::new()
            .fetch(&format!("http://{addr}/group"))
            .await
            .unwrap_err();
        assert!(matches!(err, FetchError::Unreachable(_)));
    }
}
