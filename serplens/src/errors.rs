//! Error types for the serplens pipeline.
//!
//! The taxonomy is deliberately small: a search-provider failure is fatal
//! for the whole run (no URLs means no work), while a per-URL fetch or
//! parse failure is recovered locally by the batch loop. The content
//! extractor and text normalizer never fail.

use thiserror::Error;

/// Error raised when the search provider call itself fails.
///
/// A provider that succeeds but finds nothing returns an empty URL list,
/// not this error.
#[derive(Debug, Clone, Error)]
#[error("search for {query:?} failed: {reason}")]
pub struct SearchError {
    /// The query that was being searched.
    pub query: String,
    /// Human-readable description of the failure.
    pub reason: String,
}

impl SearchError {
    /// Creates a new search error.
    #[must_use]
    pub fn new(query: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            reason: reason.into(),
        }
    }
}

/// Per-URL failure: network error, timeout, non-success status, or a
/// parse failure. Recovered locally by the batch loop: the offending URL
/// is skipped and reported, the batch continues.
#[derive(Debug, Clone, Error)]
#[error("failed to process {url}: {reason}")]
pub struct FetchOrParseError {
    /// The URL that failed.
    pub url: String,
    /// Human-readable description of the underlying cause.
    pub reason: String,
}

impl FetchOrParseError {
    /// Creates a new fetch-or-parse error for a URL.
    #[must_use]
    pub fn new(url: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            reason: reason.into(),
        }
    }
}

/// The main error type for serplens operations.
#[derive(Debug, Clone, Error)]
pub enum SerplensError {
    /// The search provider failed; the run cannot proceed.
    #[error("{0}")]
    Search(#[from] SearchError),

    /// A single page failed to fetch or parse.
    #[error("{0}")]
    Page(#[from] FetchOrParseError),
}
