//! Article data structure representing the extraction output.
//!
//! This module defines the [`Article`] struct, produced once per successful extraction and
//! never modified by the library afterwards.
//!
//! ## Example
//!
//! ```rust,no_run
//! use readerview::Reader;
//! use scraper::Html;
//!
//! let document = Html::parse_document(r#"<html><body><article><h1>My Article</h1><p>Content...</p></article></body></html>"#);
//! let reader = Reader::new(&document, "https://example.com/post", None).unwrap();
//!
//! if let Some(article) = reader.extract().unwrap() {
//!     println!("Title: {}", article.title);
//!     println!("{} words, {}", article.word_count, article.reading_time_label());
//!     println!("Author: {:?}", article.author);
//! }
//! ```

use crate::reading_time::format_reading_time;
use serde::{Deserialize, Serialize};

/// A successfully extracted article with sanitized content and metadata.
///
/// ## Serialization
///
/// `Article` implements `Serialize` and `Deserialize`, so results can be handed to a
/// display layer as JSON:
///
/// ```rust,no_run
/// # use readerview::Reader;
/// # use scraper::Html;
/// # let document = Html::parse_document("<html></html>");
/// # let reader = Reader::new(&document, "https://example.com/", None).unwrap();
/// if let Some(article) = reader.extract().unwrap() {
///     let json = serde_json::to_string_pretty(&article).unwrap();
///     println!("{}", json);
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Article {
    /// The article title.
    ///
    /// Taken from the first of `h1`, `.title`, `.headline`, `.article-title`, `.post-title`,
    /// `.entry-title`, the `og:title` meta property and `<title>` that yields text. Falls
    /// back to `"Article"`.
    pub title: String,

    /// Sanitized HTML of the article container's children.
    ///
    /// Scripts, styles, navigation, headers, footers, asides and ad/social/comment blocks
    /// are removed; only `href`, `src`, `alt` and `title` attributes are kept; every image
    /// carries an `alt` text.
    pub content: String,

    /// Number of whitespace-delimited words in the content text.
    pub word_count: usize,

    /// Estimated reading time, rounded up, at least one minute.
    pub reading_time_minutes: usize,

    /// Author name, when the page names one.
    pub author: Option<String>,

    /// Publish date exactly as found in the page (not parsed).
    pub publish_date: Option<String>,

    /// URL of the page the article was extracted from.
    pub url: String,
}

impl Article {
    /// Reading time as shown to readers, e.g. `"4 minutes"`.
    pub fn reading_time_label(&self) -> String {
        format_reading_time(self.reading_time_minutes)
    }
}
