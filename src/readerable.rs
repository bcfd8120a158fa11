//! Quick readability check without running extraction.
//!
//! This module provides [`is_readerable`], a cheap pre-flight test deciding whether a page
//! is worth offering reader mode for. It looks only at the amount of body text and at the
//! presence of article-like containers, without scoring anything.
//!
//! ```rust
//! use readerview::is_readerable;
//! use scraper::Html;
//!
//! let document = Html::parse_document("<html><body><p>Short</p></body></html>");
//! assert!(!is_readerable(&document));
//! ```

use crate::constants::{ARTICLE_HINT_SELECTORS, MAIN_CONTENT_SELECTORS, READERABLE_MIN_TEXT_LENGTH};
use crate::dom_utils::{select_first, text_length};
use once_cell::sync::Lazy;
use scraper::{Html, Selector};

static BODY: Lazy<Selector> = Lazy::new(|| Selector::parse("body").unwrap());

static ARTICLE_HINTS: Lazy<Vec<Selector>> = Lazy::new(|| {
    ARTICLE_HINT_SELECTORS
        .iter()
        .filter_map(|s| Selector::parse(s).ok())
        .collect()
});

static MAIN_CONTENT: Lazy<Vec<Selector>> = Lazy::new(|| {
    MAIN_CONTENT_SELECTORS
        .iter()
        .filter_map(|s| Selector::parse(s).ok())
        .collect()
});

fn has_any(document: &Html, selectors: &[Selector]) -> bool {
    selectors
        .iter()
        .any(|selector| document.select(selector).next().is_some())
}

/// Trimmed length of the body's text.
pub fn body_text_length(document: &Html) -> usize {
    select_first(document, &BODY)
        .map(|body| text_length(&body))
        .unwrap_or(0)
}

/// Whether the page has article-like markup (`article`, `[role="main"]`, `.article`, `.post`).
pub fn has_article_content(document: &Html) -> bool {
    has_any(document, &ARTICLE_HINTS)
}

/// Whether the page has a main content area (`main`, `.content`, `.main-content`).
pub fn has_main_content(document: &Html) -> bool {
    has_any(document, &MAIN_CONTENT)
}

/// Quick check to determine if a document is likely to be readerable.
///
/// True when the body holds more than 500 characters of text and the page has either
/// article-like content or a main content area.
///
/// ```rust
/// use readerview::is_readerable;
/// use scraper::Html;
///
/// let html = format!("<html><body><main><p>{}</p></main></body></html>", "text ".repeat(120));
/// assert!(is_readerable(&Html::parse_document(&html)));
/// ```
pub fn is_readerable(document: &Html) -> bool {
    body_text_length(document) > READERABLE_MIN_TEXT_LENGTH
        && (has_article_content(document) || has_main_content(document))
}
