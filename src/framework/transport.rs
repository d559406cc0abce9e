//! # Transport
//!
//! The seam between the resource framework and the remote catalogue service.
//! A transport only moves bytes: it reports the status code and raw body and
//! leaves interpretation to [`ResourceClient`](super::ResourceClient), so every
//! implementation (HTTP, mock) gets identical semantics.

use async_trait::async_trait;
use reqwest::{Client, Url};
use tracing::debug;

use super::FetchError;

/// Status and body of a completed request.
#[derive(Debug, Clone, PartialEq)]
pub struct TransportResponse {
    pub status: u16,
    pub body: String,
}

impl TransportResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Performs `GET {base}/{path}` against the remote service.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Returns `Err` only when no response was received at all.
    async fn get(&self, path: &str) -> Result<TransportResponse, FetchError>;
}

/// [`Transport`] backed by a shared `reqwest::Client`.
#[derive(Clone)]
pub struct HttpTransport {
    client: Client,
    base_url: Url,
}

impl HttpTransport {
    pub fn new(client: Client, base_url: Url) -> Self {
        Self { client, base_url }
    }

    /// Joins `path` onto the base URL, tolerating a trailing slash on the base.
    pub fn url_for(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.as_str().trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn get(&self, path: &str) -> Result<TransportResponse, FetchError> {
        let url = self.url_for(path);
        debug!(%url, "GET");
        let response = self.client.get(&url).send().await?;
        let status = response.status().as_u16();
        let body = response.text().await?;
        Ok(TransportResponse { status, body })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_for_joins_segments() {
        let base = Url::parse("https://api.example.com/freetestapi").unwrap();
        let transport = HttpTransport::new(Client::new(), base);
        assert_eq!(
            transport.url_for("actresses/4"),
            "https://api.example.com/freetestapi/actresses/4"
        );
    }

    #[test]
    fn test_url_for_tolerates_trailing_slash() {
        let base = Url::parse("https://api.example.com/freetestapi/").unwrap();
        let transport = HttpTransport::new(Client::new(), base);
        assert_eq!(
            transport.url_for("/actors"),
            "https://api.example.com/freetestapi/actors"
        );
    }

    #[test]
    fn test_success_range() {
        let ok = TransportResponse { status: 204, body: String::new() };
        let missing = TransportResponse { status: 404, body: String::new() };
        assert!(ok.is_success());
        assert!(!missing.is_success());
    }
}
