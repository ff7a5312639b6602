//! Per-URL page analysis: fetch, parse, title, main text, outline.

use std::sync::LazyLock;

use chrono::Utc;
use scraper::{Html, Selector};
use tracing::debug;

use crate::errors::FetchOrParseError;
use crate::extract::{self, extract_main_text};
use crate::fetch::Fetcher;
use crate::models::{HeadingLevel, PageResult, Section};
use crate::text::count_words;

/// Title used when a page has no `<title>` element.
pub const TITLE_PLACEHOLDER: &str = "No title found";

static TITLE_SELECTOR: LazyLock<Selector> = LazyLock::new(|| Selector::parse("title").unwrap());

static HEADING_SELECTORS: LazyLock<Vec<(HeadingLevel, Selector)>> = LazyLock::new(|| {
    HeadingLevel::ALL
        .iter()
        .map(|&level| (level, Selector::parse(level.tag_name()).unwrap()))
        .collect()
});

/// Analyzes a single URL: fetches the raw document, parses it, and returns
/// the page's title, word count, and heading outline.
///
/// Any failure (network error, timeout, non-success status, unreadable
/// body) yields a [`FetchOrParseError`] carrying the URL; no partial
/// [`PageResult`] is ever produced.
pub async fn analyze_page(
    fetcher: &dyn Fetcher,
    url: &str,
) -> Result<PageResult, FetchOrParseError> {
    let fetched = fetcher.fetch(url).await?;
    if !fetched.is_html() {
        debug!(url = %url, content_type = ?fetched.content_type, "content type is not html");
    }

    let document = Html::parse_document(&fetched.text);

    let title = document.select(&TITLE_SELECTOR).next().map_or_else(
        || TITLE_PLACEHOLDER.to_string(),
        |el| el.text().collect::<String>(),
    );

    let main_text = extract_main_text(&document);
    let word_count = count_words(&main_text);
    let sections = collect_sections(&document, url, &title);

    debug!(
        url = %url,
        word_count,
        sections = sections.len(),
        "page analyzed"
    );

    Ok(PageResult {
        url: url.to_string(),
        title,
        word_count,
        sections,
        fetched_at: Some(Utc::now().to_rfc3339()),
    })
}

/// Walks heading elements h1–h5 in document order, numbering each level
/// independently from zero. Heading text is preserved verbatim; headings
/// inside boilerplate regions do not appear.
fn collect_sections(document: &Html, url: &str, page_title: &str) -> Vec<Section> {
    let mut sections = Vec::new();

    for (level, selector) in HEADING_SELECTORS.iter() {
        let headings = document
            .select(selector)
            .filter(|el| !extract::in_boilerplate(*el));

        for (order, heading) in headings.enumerate() {
            sections.push(Section {
                url: url.to_string(),
                page_title: page_title.to_string(),
                level: *level,
                order,
                title: heading.text().collect(),
            });
        }
    }

    sections
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::StaticFetcher;

    #[tokio::test]
    async fn test_title_and_word_count() {
        let fetcher = StaticFetcher::new().with_page(
            "https://a.example",
            "<html><head><title>Hello</title></head>\
             <body><main>one two three</main></body></html>",
        );

        let page = analyze_page(&fetcher, "https://a.example")
            .await
            .expect("analyze");

        assert_eq!(page.title, "Hello");
        assert_eq!(page.word_count, 3);
        assert!(page.sections.is_empty());
        assert!(page.fetched_at.is_some());
    }

    #[tokio::test]
    async fn test_missing_title_uses_placeholder() {
        let fetcher =
            StaticFetcher::new().with_page("https://a.example", "<html><body>text</body></html>");

        let page = analyze_page(&fetcher, "https://a.example")
            .await
            .expect("analyze");

        assert_eq!(page.title, TITLE_PLACEHOLDER);
    }

    #[tokio::test]
    async fn test_sections_numbered_per_level() {
        let fetcher = StaticFetcher::new().with_page(
            "https://a.example",
            "<html><head><title>T</title></head><body>\
             <h1>First</h1><h2>One</h2><h2>Two</h2><h1>Second</h1><h2>Three</h2>\
             </body></html>",
        );

        let page = analyze_page(&fetcher, "https://a.example")
            .await
            .expect("analyze");

        let h1: Vec<_> = page.sections_at(HeadingLevel::H1);
        let h2: Vec<_> = page.sections_at(HeadingLevel::H2);

        assert_eq!(h1.len(), 2);
        assert_eq!(h2.len(), 3);
        assert_eq!(
            h1.iter().map(|s| s.order).collect::<Vec<_>>(),
            vec![0, 1]
        );
        assert_eq!(
            h2.iter().map(|s| s.order).collect::<Vec<_>>(),
            vec![0, 1, 2]
        );
        assert_eq!(h1[0].title, "First");
        assert_eq!(h1[1].title, "Second");
        assert_eq!(h2[2].title, "Three");
        assert!(page.sections.iter().all(|s| s.page_title == "T"));
    }

    #[tokio::test]
    async fn test_heading_text_kept_verbatim() {
        let fetcher = StaticFetcher::new().with_page(
            "https://a.example",
            "<html><body><h1>  spaced   heading </h1></body></html>",
        );

        let page = analyze_page(&fetcher, "https://a.example")
            .await
            .expect("analyze");

        assert_eq!(page.sections[0].title, "  spaced   heading ");
    }

    #[tokio::test]
    async fn test_headings_in_boilerplate_excluded() {
        let fetcher = StaticFetcher::new().with_page(
            "https://a.example",
            "<html><body>\
             <header><h1>Site name</h1></header>\
             <main><h1>Article title</h1></main>\
             <footer><h2>Footer heading</h2></footer>\
             </body></html>",
        );

        let page = analyze_page(&fetcher, "https://a.example")
            .await
            .expect("analyze");

        assert_eq!(page.sections.len(), 1);
        assert_eq!(page.sections[0].title, "Article title");
        assert_eq!(page.sections[0].order, 0);
    }

    #[tokio::test]
    async fn test_fetch_failure_carries_url() {
        let fetcher = StaticFetcher::new();

        let err = analyze_page(&fetcher, "https://missing.example")
            .await
            .expect_err("should fail");

        assert_eq!(err.url, "https://missing.example");
    }
}
