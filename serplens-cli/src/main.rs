//! Command-line presentation layer: query in, table + CSV out.

use std::fs;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use serplens::batch::ProgressObserver;
use serplens::config::{FetchConfig, SearchConfig};
use serplens::export::{csv_filename, to_csv};
use serplens::fetch::HttpFetcher;
use serplens::models::BatchReport;
use serplens::run::analyze_with;
use serplens::search::DuckDuckGoProvider;
use tracing::info;

#[derive(Parser)]
#[command(name = "serplens", about = "Analyze the pages behind a web search query")]
struct Cli {
    /// Search query to analyze
    query: String,

    /// Max search results to fetch
    #[arg(short = 'n', long, default_value_t = 10)]
    limit: usize,

    /// Region/language hint passed to the search provider
    #[arg(short, long, default_value = "en")]
    lang: String,

    /// Per-page fetch timeout in seconds
    #[arg(long, default_value_t = 10.0)]
    timeout: f64,

    /// Write the summary table to this CSV file
    /// (default: seo_analysis_<query>.csv)
    #[arg(long)]
    csv: Option<PathBuf>,

    /// Skip writing the CSV file
    #[arg(long)]
    no_csv: bool,

    /// Print the full report as JSON instead of a table
    #[arg(long)]
    json: bool,
}

/// Adapts the library's fractional progress to an indicatif bar.
struct BarProgress {
    bar: ProgressBar,
}

impl BarProgress {
    fn new() -> Self {
        let bar = ProgressBar::new(100);
        bar.set_style(
            ProgressStyle::default_bar()
                .template("[{elapsed_precise}] {bar:40} {pos}%")
                .unwrap()
                .progress_chars("=> "),
        );
        Self { bar }
    }

    fn finish(&self) {
        self.bar.finish_and_clear();
    }
}

impl ProgressObserver for BarProgress {
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    fn on_progress(&self, fraction: f64) {
        self.bar.set_position((fraction * 100.0).round() as u64);
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let cli = Cli::parse();

    let provider = DuckDuckGoProvider::with_config(SearchConfig::default());
    let fetcher = HttpFetcher::new(FetchConfig::default().with_timeout(cli.timeout));
    let progress = BarProgress::new();

    info!(query = %cli.query, limit = cli.limit, "searching and analyzing content");
    let report = analyze_with(
        &provider,
        &fetcher,
        &progress,
        &cli.query,
        cli.limit,
        &cli.lang,
    )
    .await?;
    progress.finish();

    for failure in &report.failures {
        eprintln!("{failure}");
    }

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_table(&report);
    }

    if !cli.no_csv {
        let path = cli
            .csv
            .unwrap_or_else(|| PathBuf::from(csv_filename(&cli.query)));
        fs::write(&path, to_csv(&report.rows))
            .with_context(|| format!("failed to write {}", path.display()))?;
        println!("\nSaved results to {}", path.display());
    }

    Ok(())
}

#[allow(clippy::cast_possible_truncation)]
fn print_table(report: &BatchReport) {
    println!("\nAnalysis Results");
    println!(
        "Average word count across {} pages: {} words",
        report.summary.pages.len(),
        report.summary.average_word_count as i64
    );

    if report.rows.is_empty() {
        println!("No pages analyzed.");
        return;
    }

    println!(
        "{:>3} | {:<48} | {:<40} | {:>10}",
        "#", "URL", "Title", "Word Count"
    );
    println!("{}", "-".repeat(112));

    for (i, row) in report.rows.iter().enumerate() {
        println!(
            "{:>3} | {:<48} | {:<40} | {:>10}",
            i + 1,
            truncate(&row.url, 48),
            truncate(&row.title, 40),
            row.word_count
        );
    }
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let truncated: String = s.chars().take(max).collect();
        format!("{truncated}...")
    }
}
