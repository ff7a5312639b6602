//! Ordered container-selection strategies.

use std::sync::LazyLock;

use regex::Regex;
use scraper::{ElementRef, Html, Selector};

use super::in_boilerplate;

static MAIN_SELECTOR: LazyLock<Selector> = LazyLock::new(|| Selector::parse("main").unwrap());
static ARTICLE_SELECTOR: LazyLock<Selector> = LazyLock::new(|| Selector::parse("article").unwrap());
static CLASSED_SELECTOR: LazyLock<Selector> = LazyLock::new(|| Selector::parse("[class]").unwrap());
static BODY_SELECTOR: LazyLock<Selector> = LazyLock::new(|| Selector::parse("body").unwrap());

// Raw substring match, no word boundaries: "mainstream-news" matches "main".
// Downstream behavior depends on this imprecision; do not tighten it.
static CLASS_HINT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)content|main|post").unwrap());

/// One container-selection strategy. Strategies are evaluated in
/// [`CandidateSearch::PRIORITY`] order; the first element matched in
/// document order wins, and candidates inside boilerplate regions are
/// never considered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CandidateSearch {
    /// The semantic `main` element.
    SemanticMain,
    /// The `article` element.
    Article,
    /// Any element whose class attribute contains one of the substrings
    /// `content`, `main`, or `post` (case-insensitive).
    ClassHint,
    /// The document `body`.
    Body,
}

impl CandidateSearch {
    /// The fixed evaluation order.
    pub const PRIORITY: [CandidateSearch; 4] = [
        CandidateSearch::SemanticMain,
        CandidateSearch::Article,
        CandidateSearch::ClassHint,
        CandidateSearch::Body,
    ];

    /// The first element this strategy matches, in document order.
    #[must_use]
    pub fn find(self, document: &Html) -> Option<ElementRef<'_>> {
        match self {
            CandidateSearch::SemanticMain => first_clean(document, &MAIN_SELECTOR),
            CandidateSearch::Article => first_clean(document, &ARTICLE_SELECTOR),
            CandidateSearch::ClassHint => document
                .select(&CLASSED_SELECTOR)
                .filter(|el| !in_boilerplate(*el))
                .find(|el| {
                    el.value()
                        .attr("class")
                        .is_some_and(|class| CLASS_HINT_RE.is_match(class))
                }),
            CandidateSearch::Body => first_clean(document, &BODY_SELECTOR),
        }
    }
}

fn first_clean<'a>(document: &'a Html, selector: &Selector) -> Option<ElementRef<'a>> {
    document.select(selector).find(|el| !in_boilerplate(*el))
}

/// Resolves the content container for a document, or `None` when even the
/// body fallback is absent.
pub(crate) fn choose_container(document: &Html) -> Option<ElementRef<'_>> {
    CandidateSearch::PRIORITY
        .iter()
        .find_map(|strategy| strategy.find(document))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_priority_order() {
        assert_eq!(
            CandidateSearch::PRIORITY,
            [
                CandidateSearch::SemanticMain,
                CandidateSearch::Article,
                CandidateSearch::ClassHint,
                CandidateSearch::Body,
            ]
        );
    }

    #[test]
    fn test_class_hint_matches_each_keyword() {
        for class in ["site-content", "main-column", "blog-post", "PostBody"] {
            let html = format!("<html><body><div class=\"{class}\">x</div></body></html>");
            let document = Html::parse_document(&html);
            assert!(
                CandidateSearch::ClassHint.find(&document).is_some(),
                "class {class:?} should match"
            );
        }
    }

    #[test]
    fn test_class_hint_ignores_unrelated_classes() {
        let html = r#"<html><body><div class="wrapper footer-ish">x</div></body></html>"#;
        let document = Html::parse_document(html);
        assert!(CandidateSearch::ClassHint.find(&document).is_none());
    }

    #[test]
    fn test_semantic_main_skips_boilerplate_regions() {
        let html = "<html><body><header><main>inside header</main></header></body></html>";
        let document = Html::parse_document(html);
        assert!(CandidateSearch::SemanticMain.find(&document).is_none());
    }

    #[test]
    fn test_choose_container_falls_through_to_body() {
        let html = "<html><body><p>plain</p></body></html>";
        let document = Html::parse_document(html);
        let container = choose_container(&document).expect("body exists");
        assert_eq!(container.value().name(), "body");
    }
}
