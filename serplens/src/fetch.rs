//! Document fetching.
//!
//! The [`Fetcher`] trait is the seam between the analyzer and the network;
//! [`HttpFetcher`] is the reqwest-backed default. Timeouts, connection
//! errors, and non-success statuses are reported uniformly as
//! [`FetchOrParseError`]s.

use std::time::Instant;

use async_trait::async_trait;
use tracing::debug;

use crate::config::FetchConfig;
use crate::errors::FetchOrParseError;

/// Raw document returned by a fetch.
#[derive(Debug, Clone)]
pub struct FetchResult {
    /// HTTP status code.
    pub status_code: u16,
    /// Response body as text.
    pub text: String,
    /// Final URL after redirects.
    pub final_url: String,
    /// Content type from headers.
    pub content_type: Option<String>,
    /// Time taken to fetch in milliseconds.
    pub duration_ms: f64,
}

impl FetchResult {
    /// Whether the response declared an HTML content type.
    #[must_use]
    pub fn is_html(&self) -> bool {
        self.content_type
            .as_ref()
            .map(|ct| ct.contains("text/html") || ct.contains("application/xhtml"))
            .unwrap_or(false)
    }
}

/// Protocol for fetching one document within a bounded time.
#[async_trait]
pub trait Fetcher: Send + Sync {
    /// Fetches a URL, returning the raw document or a per-URL failure.
    async fn fetch(&self, url: &str) -> Result<FetchResult, FetchOrParseError>;
}

/// HTTP fetcher backed by reqwest.
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: reqwest::Client,
    config: FetchConfig,
}

impl HttpFetcher {
    /// Creates a fetcher from a configuration.
    #[must_use]
    pub fn new(config: FetchConfig) -> Self {
        let client = reqwest::Client::builder()
            .timeout(config.timeout())
            .redirect(reqwest::redirect::Policy::limited(config.max_redirects))
            .user_agent(config.user_agent.clone())
            .build()
            .unwrap_or_default();

        Self { client, config }
    }

    /// Gets the configuration.
    #[must_use]
    pub fn config(&self) -> &FetchConfig {
        &self.config
    }
}

impl Default for HttpFetcher {
    fn default() -> Self {
        Self::new(FetchConfig::default())
    }
}

#[async_trait]
impl Fetcher for HttpFetcher {
    async fn fetch(&self, url: &str) -> Result<FetchResult, FetchOrParseError> {
        let start = Instant::now();

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| FetchOrParseError::new(url, e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchOrParseError::new(
                url,
                format!("unexpected status {status}"),
            ));
        }

        let final_url = response.url().to_string();
        let content_type = response
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(String::from);

        let text = response
            .text()
            .await
            .map_err(|e| FetchOrParseError::new(url, e.to_string()))?;

        let duration_ms = start.elapsed().as_secs_f64() * 1000.0;
        debug!(url = %url, status = status.as_u16(), duration_ms, "fetched");

        Ok(FetchResult {
            status_code: status.as_u16(),
            text,
            final_url,
            content_type,
            duration_ms,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result_with_content_type(content_type: Option<&str>) -> FetchResult {
        FetchResult {
            status_code: 200,
            text: String::new(),
            final_url: "https://example.com".to_string(),
            content_type: content_type.map(String::from),
            duration_ms: 0.0,
        }
    }

    #[test]
    fn test_fetch_result_is_html() {
        assert!(result_with_content_type(Some("text/html; charset=utf-8")).is_html());
        assert!(result_with_content_type(Some("application/xhtml+xml")).is_html());
        assert!(!result_with_content_type(Some("application/json")).is_html());
        assert!(!result_with_content_type(None).is_html());
    }

    #[test]
    fn test_http_fetcher_keeps_config() {
        let fetcher = HttpFetcher::new(FetchConfig::new().with_timeout(3.0));
        assert!((fetcher.config().timeout_seconds - 3.0).abs() < f64::EPSILON);
    }
}
