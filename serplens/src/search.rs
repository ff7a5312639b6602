//! Search providers: query in, ordered URL list out.

use std::collections::HashSet;
use std::sync::LazyLock;

use async_trait::async_trait;
use scraper::{Html, Selector};
use tracing::{debug, info, warn};
use url::Url;

use crate::config::SearchConfig;
use crate::errors::SearchError;

/// Selector pairs tried in order against the result page: the outer
/// selector matches one result block, the inner one its title link.
/// DuckDuckGo has shipped several DOM variants; the first pair that
/// yields links wins.
static RESULT_SELECTORS: LazyLock<Vec<(Selector, Selector)>> = LazyLock::new(|| {
    [
        (".result", ".result__title a"),
        (".web-result", ".result__a"),
        (".links_main", "h2 a"),
    ]
    .iter()
    .map(|(block, link)| {
        (
            Selector::parse(block).unwrap(),
            Selector::parse(link).unwrap(),
        )
    })
    .collect()
});

/// Protocol for turning a query into an ordered list of candidate URLs.
///
/// A provider may return fewer than `limit` results; zero results is a
/// valid (empty) outcome, not an error.
#[async_trait]
pub trait SearchProvider: Send + Sync {
    /// Searches for `query`, returning at most `limit` URLs in rank order.
    /// `language` is a region/language hint; providers may ignore it.
    async fn search(
        &self,
        query: &str,
        limit: usize,
        language: &str,
    ) -> Result<Vec<String>, SearchError>;
}

/// Search provider backed by the DuckDuckGo HTML endpoint.
///
/// The HTML endpoint renders results server-side, so a plain GET plus an
/// HTML parse is enough; no JavaScript rendering and no API key needed.
#[derive(Debug, Clone)]
pub struct DuckDuckGoProvider {
    client: reqwest::Client,
    config: SearchConfig,
}

impl DuckDuckGoProvider {
    /// Creates a provider with the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(SearchConfig::default())
    }

    /// Creates a provider from a configuration.
    #[must_use]
    pub fn with_config(config: SearchConfig) -> Self {
        let client = reqwest::Client::builder()
            .timeout(config.timeout())
            .user_agent(config.user_agent.clone())
            .build()
            .unwrap_or_default();

        Self { client, config }
    }

    /// Gets the configuration.
    #[must_use]
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    fn search_url(&self, query: &str, language: &str) -> Result<Url, SearchError> {
        let mut url = Url::parse(&self.config.endpoint)
            .map_err(|e| SearchError::new(query, format!("bad endpoint: {e}")))?;
        url.query_pairs_mut()
            .append_pair("q", query)
            .append_pair("kl", language);
        Ok(url)
    }
}

impl Default for DuckDuckGoProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SearchProvider for DuckDuckGoProvider {
    async fn search(
        &self,
        query: &str,
        limit: usize,
        language: &str,
    ) -> Result<Vec<String>, SearchError> {
        let url = self.search_url(query, language)?;
        info!(query = %query, limit, "searching");

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| SearchError::new(query, e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(SearchError::new(
                query,
                format!("search endpoint returned status {status}"),
            ));
        }

        let html = response
            .text()
            .await
            .map_err(|e| SearchError::new(query, e.to_string()))?;

        let urls = parse_result_urls(&html, limit);
        if urls.is_empty() {
            warn!(query = %query, "search returned no results");
        } else {
            debug!(query = %query, count = urls.len(), "search results parsed");
        }

        Ok(urls)
    }
}

/// Extracts result URLs from a DuckDuckGo HTML results page, deduplicated
/// and in rank order, truncated to `limit`.
fn parse_result_urls(html: &str, limit: usize) -> Vec<String> {
    let document = Html::parse_document(html);
    let mut seen: HashSet<String> = HashSet::new();
    let mut urls = Vec::new();

    for (block_selector, link_selector) in RESULT_SELECTORS.iter() {
        for block in document.select(block_selector) {
            let Some(link) = block.select(link_selector).next() else {
                continue;
            };
            let Some(href) = link.value().attr("href") else {
                continue;
            };

            let normalized = if href.starts_with("//") {
                format!("https:{href}")
            } else {
                href.to_string()
            };
            if !normalized.starts_with("http") {
                continue;
            }

            if seen.insert(normalized.clone()) {
                urls.push(normalized);
            }
            if urls.len() >= limit {
                return urls;
            }
        }

        // A selector variant that matched anything is the right one for
        // this page; later variants would only re-match the same DOM.
        if !urls.is_empty() {
            break;
        }
    }

    urls
}
