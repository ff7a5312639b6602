//! Batch aggregation: sequential analysis over a URL list with
//! skip-and-report error recovery and progress reporting.

use tracing::{debug, warn};

use crate::analyzer::analyze_page;
use crate::fetch::Fetcher;
use crate::models::{BatchReport, BatchSummary, PageFailure, SummaryRow};

/// Side channel receiving a fractional-completion value in `[0, 1]` after
/// each processed item.
pub trait ProgressObserver: Send + Sync {
    /// Called after each item with the fraction of the batch completed.
    fn on_progress(&self, fraction: f64);
}

/// Observer that ignores all progress updates.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoOpProgress;

impl ProgressObserver for NoOpProgress {
    fn on_progress(&self, _fraction: f64) {}
}

/// Runs the page analyzer over `urls` sequentially, one URL at a time.
///
/// A page that fails to fetch or parse is skipped and recorded in the
/// report's `failures`; it never aborts the batch. Progress reaches 1.0
/// once all URLs have been processed, including for an empty list.
pub async fn run_batch(
    fetcher: &dyn Fetcher,
    urls: &[String],
    observer: &dyn ProgressObserver,
) -> BatchReport {
    let total = urls.len();
    let mut pages = Vec::new();
    let mut failures = Vec::new();
    let mut total_word_count = 0usize;

    for (index, url) in urls.iter().enumerate() {
        debug!(url = %url, "fetching");
        match analyze_page(fetcher, url).await {
            Ok(page) => {
                total_word_count += page.word_count;
                pages.push(page);
            }
            Err(err) => {
                warn!(url = %url, reason = %err.reason, "page skipped");
                failures.push(PageFailure::new(url, err.reason));
            }
        }

        #[allow(clippy::cast_precision_loss)]
        observer.on_progress((index + 1) as f64 / total as f64);
    }

    if total == 0 {
        observer.on_progress(1.0);
    }

    #[allow(clippy::cast_precision_loss)]
    let average_word_count = if pages.is_empty() {
        0.0
    } else {
        total_word_count as f64 / pages.len() as f64
    };

    let rows: Vec<SummaryRow> = pages.iter().map(SummaryRow::from).collect();

    debug!(
        pages = pages.len(),
        failures = failures.len(),
        average_word_count,
        "batch complete"
    );

    BatchReport {
        summary: BatchSummary {
            pages,
            total_word_count,
            average_word_count,
        },
        rows,
        failures,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{RecordingProgress, StaticFetcher};

    fn page(body_words: &str) -> String {
        format!("<html><head><title>T</title></head><body><main>{body_words}</main></body></html>")
    }

    fn urls(list: &[&str]) -> Vec<String> {
        list.iter().map(ToString::to_string).collect()
    }

    #[tokio::test]
    async fn test_failed_page_skipped_but_batch_continues() {
        let fetcher = StaticFetcher::new()
            .with_page("https://one.example", page("a b c d"))
            .with_page("https://three.example", page("x y"));
        let progress = RecordingProgress::new();

        let report = run_batch(
            &fetcher,
            &urls(&[
                "https://one.example",
                "https://two.example",
                "https://three.example",
            ]),
            &progress,
        )
        .await;

        assert_eq!(report.summary.pages.len(), 2);
        assert_eq!(report.summary.pages[0].url, "https://one.example");
        assert_eq!(report.summary.pages[1].url, "https://three.example");
        assert_eq!(report.summary.total_word_count, 6);
        assert!((report.summary.average_word_count - 3.0).abs() < f64::EPSILON);

        assert_eq!(report.failures.len(), 1);
        assert_eq!(report.failures[0].url, "https://two.example");
    }

    #[tokio::test]
    async fn test_rows_mirror_pages() {
        let fetcher = StaticFetcher::new().with_page("https://one.example", page("a b"));

        let report = run_batch(&fetcher, &urls(&["https://one.example"]), &NoOpProgress).await;

        assert_eq!(report.rows.len(), 1);
        assert_eq!(report.rows[0].url, "https://one.example");
        assert_eq!(report.rows[0].title, "T");
        assert_eq!(report.rows[0].word_count, 2);
    }

    #[tokio::test]
    async fn test_zero_successes_average_is_zero() {
        let fetcher = StaticFetcher::new();
        let report = run_batch(
            &fetcher,
            &urls(&["https://a.example", "https://b.example"]),
            &NoOpProgress,
        )
        .await;

        assert!(report.summary.is_empty());
        assert!(report.rows.is_empty());
        assert_eq!(report.summary.average_word_count, 0.0);
        assert_eq!(report.failures.len(), 2);
    }

    #[tokio::test]
    async fn test_progress_emitted_per_item_and_completes() {
        let fetcher = StaticFetcher::new()
            .with_page("https://one.example", page("a"))
            .with_page("https://two.example", page("b"));
        let progress = RecordingProgress::new();

        run_batch(
            &fetcher,
            &urls(&["https://one.example", "https://two.example"]),
            &progress,
        )
        .await;

        assert_eq!(progress.values(), vec![0.5, 1.0]);
    }

    #[tokio::test]
    async fn test_empty_url_list_still_completes() {
        let fetcher = StaticFetcher::new();
        let progress = RecordingProgress::new();

        let report = run_batch(&fetcher, &[], &progress).await;

        assert!(report.summary.is_empty());
        assert_eq!(report.summary.average_word_count, 0.0);
        assert_eq!(progress.values(), vec![1.0]);
    }
}
