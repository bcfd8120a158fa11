//! # readerview
//!
//! Reader-mode article extraction for already-parsed HTML documents.
//!
//! ## Overview
//!
//! Given a [`scraper::Html`] tree, readerview finds the single subtree most likely to be
//! the article body, produces a sanitized copy of it suitable for display, and pulls the
//! title, author, publish date and a reading-time estimate. A small session type swaps a
//! page for its reader view and back.
//!
//! ## Key Features
//!
//! - **Content Search**: explicit selector probe, then paragraph-driven scoring
//! - **Sanitization**: works on a copy, keeps only `href`/`src`/`alt`/`title`
//! - **Metadata Extraction**: title, author and raw publish date
//! - **Reading Time**: word count and minutes at a configurable reading speed
//! - **Reader Sessions**: activate/restore with a saved snapshot of the page
//! - **Pre-flight Check**: quick test for whether a page is worth offering reader mode
//!
//! ## Basic Usage
//!
//! ```rust,no_run
//! use readerview::Reader;
//! use scraper::Html;
//!
//! let html = r#"<html><body><article><h1>Title</h1><p>Content...</p></article></body></html>"#;
//! let document = Html::parse_document(html);
//!
//! let reader = Reader::new(&document, "https://example.com/article", None).unwrap();
//!
//! if let Some(article) = reader.extract().unwrap() {
//!     println!("Title: {}", article.title);
//!     println!("Content: {}", article.content);
//!     println!("Author: {:?}", article.author);
//! }
//! ```
//!
//! ### Custom Options
//!
//! ```rust,no_run
//! use readerview::{Reader, ReaderOptions};
//! use scraper::Html;
//!
//! let document = Html::parse_document("<html>...</html>");
//!
//! let options = ReaderOptions::builder()
//!     .min_content_length(150)
//!     .words_per_minute(250)
//!     .build();
//!
//! let reader = Reader::new(&document, "https://example.com/", Some(options)).unwrap();
//! let article = reader.extract();
//! ```
//!
//! ### Reader Sessions
//!
//! ```rust,no_run
//! use readerview::{HtmlPage, ReaderSession};
//!
//! let mut page = HtmlPage::new("<html>...</html>", "https://example.com/").unwrap();
//! let mut session = ReaderSession::default();
//!
//! match session.toggle(&mut page) {
//!     Ok(Some(article)) => println!("Reading {}", article.title),
//!     Ok(None) => println!("Back to the original page"),
//!     Err(e) => eprintln!("Reader mode unavailable: {}", e),
//! }
//! ```
//!
//! ## Error Handling
//!
//! A page without article content is not an error: [`Reader::extract`] returns `Ok(None)`.
//! Errors are reserved for bad input (URL, selectors, element limit) and for rejected
//! session transitions. [`Reader::report`] folds everything into a flat
//! [`ExtractionReport`].
//!
//! ```rust,no_run
//! use readerview::{Reader, ReaderError};
//! use scraper::Html;
//!
//! let document = Html::parse_document("<html>...</html>");
//!
//! match Reader::new(&document, "not a valid url", None) {
//!     Ok(reader) => {
//!         let report = reader.report();
//!         println!("success: {}", report.success);
//!     }
//!     Err(ReaderError::InvalidUrl(url)) => {
//!         eprintln!("Invalid URL: {}", url);
//!     }
//!     Err(e) => {
//!         eprintln!("Error: {}", e);
//!     }
//! }
//! ```
//!
//! ## Logging
//!
//! The library emits [`tracing`] events under the `readerview.*` targets and never
//! installs a subscriber itself.

mod article;
mod cleaner;
mod constants;
mod content_extractor;
mod dom_utils;
mod error;
mod metadata;
mod options;
mod preferences;
mod readability;
mod readerable;
mod reading_time;
mod scoring;
mod session;

// Public exports
pub use article::Article;
pub use cleaner::{sanitize, ArticleCopy};
pub use content_extractor::{
    find_content, find_explicit_content, score_paragraphs, CandidateScores, ScoredNode,
};
pub use error::{ReaderError, Result};
pub use metadata::{
    extract_author, extract_publish_date, extract_title, get_article_metadata, Metadata,
};
pub use options::{ReaderOptions, ReaderOptionsBuilder, ScoringPatterns};
pub use preferences::{render_reader_page, ReaderPreferences, Theme};
pub use readability::{ExtractionReport, Reader};
pub use readerable::is_readerable;
pub use reading_time::{count_words, estimate, format_reading_time, ReadingTime};
pub use scoring::score_node;
pub use session::{DocumentHost, HtmlPage, ReaderSession};
