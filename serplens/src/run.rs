//! High-level entry points wiring search, fetch, and aggregation together.

use tracing::{info, warn};

use crate::batch::{run_batch, NoOpProgress, ProgressObserver};
use crate::config::FetchConfig;
use crate::errors::SerplensError;
use crate::fetch::{Fetcher, HttpFetcher};
use crate::models::BatchReport;
use crate::search::{DuckDuckGoProvider, SearchProvider};

/// Default number of search results to analyze.
pub const DEFAULT_RESULT_LIMIT: usize = 10;

/// Default region/language hint passed to the search provider.
pub const DEFAULT_LANGUAGE: &str = "en";

/// Analyzes the pages behind `query` with the default DuckDuckGo provider
/// and HTTP fetcher, and no progress reporting.
pub async fn analyze(query: &str, limit: usize) -> Result<BatchReport, SerplensError> {
    let provider = DuckDuckGoProvider::new();
    let fetcher = HttpFetcher::new(FetchConfig::default());
    analyze_with(&provider, &fetcher, &NoOpProgress, query, limit, DEFAULT_LANGUAGE).await
}

/// Dependency-injected variant of [`analyze`].
///
/// A provider *failure* is fatal and surfaces as
/// [`SerplensError::Search`]; a provider that succeeds with zero URLs
/// yields an empty report (average 0, zero rows) after a single
/// progress-complete emission.
pub async fn analyze_with(
    provider: &dyn SearchProvider,
    fetcher: &dyn Fetcher,
    observer: &dyn ProgressObserver,
    query: &str,
    limit: usize,
    language: &str,
) -> Result<BatchReport, SerplensError> {
    info!(query = %query, limit, language = %language, "starting analysis");

    let urls = provider.search(query, limit, language).await?;
    if urls.is_empty() {
        warn!(query = %query, "no URLs to analyze");
    }

    Ok(run_batch(fetcher, &urls, observer).await)
}
