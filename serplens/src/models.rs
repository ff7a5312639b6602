//! Data models for page analysis and batch aggregation.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Heading levels tracked in a page outline (h1 through h5).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HeadingLevel {
    /// `<h1>`
    H1,
    /// `<h2>`
    H2,
    /// `<h3>`
    H3,
    /// `<h4>`
    H4,
    /// `<h5>`
    H5,
}

impl HeadingLevel {
    /// All tracked levels, outermost first.
    pub const ALL: [HeadingLevel; 5] = [
        HeadingLevel::H1,
        HeadingLevel::H2,
        HeadingLevel::H3,
        HeadingLevel::H4,
        HeadingLevel::H5,
    ];

    /// The HTML tag name for this level.
    #[must_use]
    pub fn tag_name(self) -> &'static str {
        match self {
            HeadingLevel::H1 => "h1",
            HeadingLevel::H2 => "h2",
            HeadingLevel::H3 => "h3",
            HeadingLevel::H4 => "h4",
            HeadingLevel::H5 => "h5",
        }
    }
}

impl fmt::Display for HeadingLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag_name())
    }
}

/// A single heading occurrence treated as an outline entry for a page.
///
/// `order` is the zero-based position among same-level headings on the
/// page. `title` is the heading's raw text, preserved verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    /// URL of the page the heading was found on.
    pub url: String,
    /// Title of that page.
    pub page_title: String,
    /// Heading level (h1–h5).
    pub level: HeadingLevel,
    /// Zero-based position among headings of the same level.
    pub order: usize,
    /// Raw heading text.
    pub title: String,
}

/// The analysis of one successfully fetched page.
///
/// Created once per URL and immutable afterwards; a URL whose fetch or
/// parse fails produces no `PageResult` at all.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageResult {
    /// The URL that was analyzed.
    pub url: String,
    /// The page title, or the fixed placeholder when absent.
    pub title: String,
    /// Word count of the extracted main content.
    pub word_count: usize,
    /// Heading outline in document order, grouped by level.
    pub sections: Vec<Section>,
    /// ISO-8601 UTC timestamp of when the page was analyzed.
    pub fetched_at: Option<String>,
}

impl PageResult {
    /// The sections at a given heading level, in document order.
    #[must_use]
    pub fn sections_at(&self, level: HeadingLevel) -> Vec<&Section> {
        self.sections.iter().filter(|s| s.level == level).collect()
    }
}

/// Aggregate statistics over one batch run.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BatchSummary {
    /// Successfully analyzed pages, in input order.
    pub pages: Vec<PageResult>,
    /// Sum of word counts across `pages`.
    pub total_word_count: usize,
    /// `total_word_count / pages.len()`, or 0 when no page succeeded.
    pub average_word_count: f64,
}

impl BatchSummary {
    /// Whether any page was successfully analyzed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }
}

/// One row of the flattened tabular projection used for display and CSV
/// export.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryRow {
    /// Page URL.
    pub url: String,
    /// Page title.
    pub title: String,
    /// Word count of the page's main content.
    pub word_count: usize,
}

impl From<&PageResult> for SummaryRow {
    fn from(page: &PageResult) -> Self {
        Self {
            url: page.url.clone(),
            title: page.title.clone(),
            word_count: page.word_count,
        }
    }
}

/// Record of one URL that was skipped during a batch run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageFailure {
    /// The URL that failed.
    pub url: String,
    /// Human-readable reason it was skipped.
    pub reason: String,
}

impl PageFailure {
    /// Creates a new failure record.
    #[must_use]
    pub fn new(url: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            reason: reason.into(),
        }
    }
}

impl fmt::Display for PageFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Error processing {}: {}", self.url, self.reason)
    }
}

/// The full result of one batch run: summary statistics, the tabular
/// projection, and the skipped URLs.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BatchReport {
    /// Aggregate statistics and per-page results.
    pub summary: BatchSummary,
    /// Flattened `{url, title, word_count}` rows, one per page in
    /// `summary.pages`, same order.
    pub rows: Vec<SummaryRow>,
    /// URLs skipped due to fetch or parse failures.
    pub failures: Vec<PageFailure>,
}
