//! Title, author and publish-date lookups.
//!
//! Each field walks an ordered list of selectors and takes the first element that yields a
//! non-empty trimmed value. Only the title has a fallback; a missing author or date stays
//! `None`.

use crate::constants::{AUTHOR_SELECTORS, DEFAULT_TITLE, PUBLISH_DATE_SELECTORS, TITLE_SELECTORS};
use crate::dom_utils::text_content;
use once_cell::sync::Lazy;
use scraper::{ElementRef, Html, Selector};

fn compile(selectors: &[&str]) -> Vec<Selector> {
    selectors
        .iter()
        .filter_map(|s| Selector::parse(s).ok())
        .collect()
}

static TITLE: Lazy<Vec<Selector>> = Lazy::new(|| compile(TITLE_SELECTORS));
static AUTHOR: Lazy<Vec<Selector>> = Lazy::new(|| compile(AUTHOR_SELECTORS));
static PUBLISH_DATE: Lazy<Vec<Selector>> = Lazy::new(|| compile(PUBLISH_DATE_SELECTORS));

/// Metadata extracted from the document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Metadata {
    pub title: String,
    pub author: Option<String>,
    pub publish_date: Option<String>,
}

fn non_empty(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

/// Element text, or its `content` attribute for `<meta>`-like elements.
fn text_or_content(element: &ElementRef) -> Option<String> {
    non_empty(&text_content(element))
        .or_else(|| element.value().attr("content").and_then(non_empty))
}

/// `datetime`, then `content`, then element text.
fn date_value(element: &ElementRef) -> Option<String> {
    element
        .value()
        .attr("datetime")
        .and_then(non_empty)
        .or_else(|| element.value().attr("content").and_then(non_empty))
        .or_else(|| non_empty(&text_content(element)))
}

/// First value produced by the first matching element of each selector, in order.
fn first_value<F>(document: &Html, selectors: &[Selector], value: F) -> Option<String>
where
    F: Fn(&ElementRef) -> Option<String>,
{
    selectors
        .iter()
        .filter_map(|selector| document.select(selector).next())
        .find_map(|element| value(&element))
}

/// Article title, or `"Article"` when nothing yields text.
pub fn extract_title(document: &Html) -> String {
    first_value(document, &TITLE, text_or_content).unwrap_or_else(|| DEFAULT_TITLE.to_string())
}

/// Article author, if the page names one.
pub fn extract_author(document: &Html) -> Option<String> {
    first_value(document, &AUTHOR, text_or_content)
}

/// Raw publish date string, unparsed.
pub fn extract_publish_date(document: &Html) -> Option<String> {
    first_value(document, &PUBLISH_DATE, date_value)
}

/// All three lookups at once.
pub fn get_article_metadata(document: &Html) -> Metadata {
    Metadata {
        title: extract_title(document),
        author: extract_author(document),
        publish_date: extract_publish_date(document),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selector_lists_compile() {
        assert_eq!(TITLE.len(), TITLE_SELECTORS.len());
        assert_eq!(AUTHOR.len(), AUTHOR_SELECTORS.len());
        assert_eq!(PUBLISH_DATE.len(), PUBLISH_DATE_SELECTORS.len());
    }

    #[test]
    fn test_title_prefers_h1() {
        let doc = Html::parse_document(
            r#"<html><head><title>Site | Page</title></head><body><h1>  Real Title </h1><div class="title">Other</div></body></html>"#,
        );
        assert_eq!(extract_title(&doc), "Real Title");
    }

    #[test]
    fn test_title_skips_empty_h1() {
        let doc = Html::parse_document(
            r#"<html><head><title>Doc Title</title></head><body><h1>   </h1><p class="headline">Headline</p></body></html>"#,
        );
        assert_eq!(extract_title(&doc), "Headline");
    }

    #[test]
    fn test_title_from_og_meta() {
        let doc = Html::parse_document(
            r#"<html><head><meta property="og:title" content="From OG"><title>Doc</title></head><body></body></html>"#,
        );
        assert_eq!(extract_title(&doc), "From OG");
    }

    #[test]
    fn test_title_from_document_title() {
        let doc = Html::parse_document(
            r#"<html><head><title> Doc Title </title></head><body><p>x</p></body></html>"#,
        );
        assert_eq!(extract_title(&doc), "Doc Title");
    }

    #[test]
    fn test_title_fallback() {
        let doc = Html::parse_document("<html><body><p>No title anywhere</p></body></html>");
        assert_eq!(extract_title(&doc), "Article");
    }

    #[test]
    fn test_author_from_rel_link() {
        let doc = Html::parse_document(
            r#"<html><body><a rel="author" href="/u/jo">Jo Writer</a><span class="author">Someone</span></body></html>"#,
        );
        assert_eq!(extract_author(&doc), Some("Jo Writer".to_string()));
    }

    #[test]
    fn test_author_from_meta() {
        let doc = Html::parse_document(
            r#"<html><head><meta name="author" content=" Meta Author "></head><body></body></html>"#,
        );
        assert_eq!(extract_author(&doc), Some("Meta Author".to_string()));
    }

    #[test]
    fn test_author_absent() {
        let doc = Html::parse_document("<html><body><p>Nobody wrote this</p></body></html>");
        assert_eq!(extract_author(&doc), None);
    }

    #[test]
    fn test_empty_author_element_is_absent() {
        let doc = Html::parse_document(r#"<html><body><span class="byline">  </span></body></html>"#);
        assert_eq!(extract_author(&doc), None);
    }

    #[test]
    fn test_date_prefers_datetime_attribute() {
        let doc = Html::parse_document(
            r#"<html><body><time datetime="2024-03-01T10:00:00Z">March 1</time></body></html>"#,
        );
        assert_eq!(
            extract_publish_date(&doc),
            Some("2024-03-01T10:00:00Z".to_string())
        );
    }

    #[test]
    fn test_date_from_meta_content() {
        let doc = Html::parse_document(
            r#"<html><head><meta property="article:published_time" content="2023-12-24"></head><body><span class="date">Yesterday</span></body></html>"#,
        );
        assert_eq!(extract_publish_date(&doc), Some("2023-12-24".to_string()));
    }

    #[test]
    fn test_date_from_text() {
        let doc = Html::parse_document(
            r#"<html><body><span class="published"> 5 May 2021 </span></body></html>"#,
        );
        assert_eq!(extract_publish_date(&doc), Some("5 May 2021".to_string()));
    }

    #[test]
    fn test_date_absent() {
        let doc = Html::parse_document("<html><body><time>no datetime attr</time></body></html>");
        assert_eq!(extract_publish_date(&doc), None);
    }

    #[test]
    fn test_get_article_metadata() {
        let doc = Html::parse_document(
            r#"<html><body><h1>T</h1><p class="byline">B</p></body></html>"#,
        );
        let metadata = get_article_metadata(&doc);
        assert_eq!(
            metadata,
            Metadata {
                title: "T".to_string(),
                author: Some("B".to_string()),
                publish_date: None,
            }
        );
    }
}
