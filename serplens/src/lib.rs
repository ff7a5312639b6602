//! # Serplens
//!
//! Serplens fetches the set of web pages behind a search query, extracts
//! each page's title, main textual content, word count, and heading-based
//! outline, then aggregates the batch into summary statistics and a
//! tabular projection suitable for display or CSV export.
//!
//! The pipeline is a sequential fetch → parse → aggregate loop:
//!
//! - **Text normalization**: whitespace collapsing and word counting
//! - **Content extraction**: heuristic isolation of the main content
//!   region, excluding navigation and boilerplate
//! - **Page analysis**: one URL in, one [`models::PageResult`] out
//! - **Batch aggregation**: skip-and-report error recovery, running
//!   totals, progress reporting
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use serplens::run::analyze;
//!
//! let report = analyze("python for seo", 10).await?;
//! println!("average words: {}", report.summary.average_word_count);
//! for row in &report.rows {
//!     println!("{}: {} ({} words)", row.url, row.title, row.word_count);
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(
    clippy::all,
    clippy::pedantic,
    missing_docs,
    rust_2018_idioms
)]
#![allow(
    clippy::module_name_repetitions,
    clippy::must_use_candidate,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc
)]

pub mod analyzer;
pub mod batch;
pub mod config;
pub mod errors;
pub mod export;
pub mod extract;
pub mod fetch;
pub mod models;
pub mod run;
pub mod search;
pub mod testing;
pub mod text;


/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::analyzer::analyze_page;
    pub use crate::batch::{run_batch, NoOpProgress, ProgressObserver};
    pub use crate::config::{FetchConfig, SearchConfig};
    pub use crate::errors::{FetchOrParseError, SearchError, SerplensError};
    pub use crate::export::{csv_filename, to_csv};
    pub use crate::extract::{extract_main_text, CandidateSearch};
    pub use crate::fetch::{FetchResult, Fetcher, HttpFetcher};
    pub use crate::models::{
        BatchReport, BatchSummary, HeadingLevel, PageFailure, PageResult,
        Section, SummaryRow,
    };
    pub use crate::run::{analyze, analyze_with};
    pub use crate::search::{DuckDuckGoProvider, SearchProvider};
    pub use crate::text::{count_words, normalize_whitespace};
}
