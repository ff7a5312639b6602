//! Testing utilities for the analysis pipeline.
//!
//! This module provides:
//! - A canned-response fetcher and search provider
//! - A progress observer that records every fraction it receives

mod mocks;

pub use mocks::{RecordingProgress, StaticFetcher, StaticSearchProvider};
