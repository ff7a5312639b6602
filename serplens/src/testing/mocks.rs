//! Hand-rolled test doubles for the pipeline's protocol traits.

use std::collections::HashMap;

use async_trait::async_trait;
use parking_lot::Mutex;

use crate::batch::ProgressObserver;
use crate::errors::{FetchOrParseError, SearchError};
use crate::fetch::{FetchResult, Fetcher};
use crate::search::SearchProvider;

/// A fetcher serving canned HTML bodies keyed by URL.
///
/// URLs without a registered body fail with a timeout-shaped error, which
/// makes unreachable pages trivial to simulate.
#[derive(Debug, Clone, Default)]
pub struct StaticFetcher {
    pages: HashMap<String, String>,
}

impl StaticFetcher {
    /// Creates a fetcher with no registered pages.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a canned body for a URL.
    #[must_use]
    pub fn with_page(mut self, url: impl Into<String>, html: impl Into<String>) -> Self {
        self.pages.insert(url.into(), html.into());
        self
    }
}

#[async_trait]
impl Fetcher for StaticFetcher {
    async fn fetch(&self, url: &str) -> Result<FetchResult, FetchOrParseError> {
        match self.pages.get(url) {
            Some(html) => Ok(FetchResult {
                status_code: 200,
                text: html.clone(),
                final_url: url.to_string(),
                content_type: Some("text/html".to_string()),
                duration_ms: 0.0,
            }),
            None => Err(FetchOrParseError::new(url, "connection timed out")),
        }
    }
}

/// A search provider returning a fixed URL list (or a fixed failure).
#[derive(Debug, Clone, Default)]
pub struct StaticSearchProvider {
    urls: Vec<String>,
    fail: bool,
}

impl StaticSearchProvider {
    /// Creates a provider that returns the given URLs in order.
    #[must_use]
    pub fn new(urls: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            urls: urls.into_iter().map(Into::into).collect(),
            fail: false,
        }
    }

    /// Creates a provider whose every search fails.
    #[must_use]
    pub fn failing() -> Self {
        Self {
            urls: Vec::new(),
            fail: true,
        }
    }
}

#[async_trait]
impl SearchProvider for StaticSearchProvider {
    async fn search(
        &self,
        query: &str,
        limit: usize,
        _language: &str,
    ) -> Result<Vec<String>, SearchError> {
        if self.fail {
            return Err(SearchError::new(query, "provider unavailable"));
        }
        Ok(self.urls.iter().take(limit).cloned().collect())
    }
}

/// A progress observer that records every fraction it receives.
#[derive(Debug, Default)]
pub struct RecordingProgress {
    values: Mutex<Vec<f64>>,
}

impl RecordingProgress {
    /// Creates a new recording observer.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// All fractions received so far, in order.
    #[must_use]
    pub fn values(&self) -> Vec<f64> {
        self.values.lock().clone()
    }

    /// The most recent fraction, if any.
    #[must_use]
    pub fn last(&self) -> Option<f64> {
        self.values.lock().last().copied()
    }
}

impl ProgressObserver for RecordingProgress {
    fn on_progress(&self, fraction: f64) {
        self.values.lock().push(fraction);
    }
}
