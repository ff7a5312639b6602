//! Heuristic main-content extraction.
//!
//! Boilerplate regions (navigation, header, footer, sidebar, aside) are
//! excluded from consideration entirely: they neither qualify as content
//! containers nor contribute text, even when nested inside the chosen
//! container. The container itself is resolved by an ordered list of
//! [`CandidateSearch`] strategies; the first match in document order wins.
//!
//! This is a heuristic, not a guarantee: pages with atypical markup may
//! yield boilerplate-polluted or empty text, and an empty result is not an
//! error.

mod candidates;

pub use candidates::CandidateSearch;

use scraper::{ElementRef, Html, Node};

use crate::text::normalize_whitespace;

/// Tag names excluded from extraction. `sidebar` is not standard HTML but
/// is removed by element name all the same.
const BOILERPLATE_TAGS: [&str; 5] = ["nav", "header", "footer", "sidebar", "aside"];

pub(crate) fn is_boilerplate_tag(name: &str) -> bool {
    BOILERPLATE_TAGS.contains(&name)
}

/// True when the element itself, or any of its ancestors, is a boilerplate
/// element.
pub(crate) fn in_boilerplate(element: ElementRef<'_>) -> bool {
    if is_boilerplate_tag(element.value().name()) {
        return true;
    }
    element.ancestors().any(|node| {
        node.value()
            .as_element()
            .is_some_and(|el| is_boilerplate_tag(el.name()))
    })
}

/// Extracts the normalized main text of a parsed document.
///
/// Returns an empty string when no container can be resolved (a document
/// with no `body` and no earlier candidate).
#[must_use]
pub fn extract_main_text(document: &Html) -> String {
    let Some(container) = candidates::choose_container(document) else {
        return String::new();
    };

    let mut text = String::new();
    collect_text(container, &mut text);
    normalize_whitespace(&text)
}

/// Appends the text of `element`'s subtree, skipping boilerplate subtrees.
fn collect_text(element: ElementRef<'_>, out: &mut String) {
    for child in element.children() {
        match child.value() {
            Node::Text(t) => out.push_str(&t.text),
            Node::Element(el) => {
                if !is_boilerplate_tag(el.name()) {
                    if let Some(child_el) = ElementRef::wrap(child) {
                        collect_text(child_el, out);
                    }
                }
            }
            _ => {}
        }
    }
}
