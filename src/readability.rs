//! The extraction orchestrator.
//!
//! [`Reader`] ties the pipeline together: candidate search, sanitization, reading-time
//! estimate and the three metadata lookups, assembled into one [`Article`].
//!
//! ## Example
//!
//! ```rust,no_run
//! use readerview::{Reader, ReaderOptions};
//! use scraper::Html;
//!
//! let html = std::fs::read_to_string("article.html").unwrap();
//! let document = Html::parse_document(&html);
//!
//! let reader = Reader::new(&document, "https://example.com/article", None)?;
//!
//! match reader.extract()? {
//!     Some(article) => {
//!         println!("Title: {}", article.title);
//!         println!("Reading time: {}", article.reading_time_label());
//!         std::fs::write("output.html", &article.content)?;
//!     }
//!     None => println!("Nothing that looks like an article"),
//! }
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

use crate::{
    article::Article,
    cleaner,
    content_extractor::find_content,
    dom_utils::{count_elements, parse_selectors},
    error::{ReaderError, Result},
    metadata::get_article_metadata,
    options::ReaderOptions,
    reading_time,
};
use scraper::{ElementRef, Html, Selector};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};
use url::Url;

/// The main reader-mode extractor.
///
/// A `Reader` borrows an already-parsed document and never modifies it. Extraction is
/// synchronous and runs to completion on the caller's thread; it can be repeated and
/// always yields the same result for the same document.
///
/// ## Example
///
/// ```rust
/// use readerview::Reader;
/// use scraper::Html;
///
/// let text = "Reader mode keeps the words and drops the chrome. ".repeat(10);
/// let html = format!(
///     "<html><head><title>Doc</title></head><body><nav>Home</nav><article><h1>Hello</h1><p>{}</p></article></body></html>",
///     text
/// );
/// let document = Html::parse_document(&html);
///
/// let reader = Reader::new(&document, "https://example.com/hello", None)?;
/// let article = reader.extract()?.expect("article");
///
/// assert_eq!(article.title, "Hello");
/// assert_eq!(article.reading_time_minutes, 1);
/// assert!(!article.content.contains("<nav>"));
/// # Ok::<(), readerview::ReaderError>(())
/// ```
pub struct Reader<'a> {
    /// The parsed document, read only
    document: &'a Html,

    /// Page URL reported in the result
    url: String,

    /// Configuration options
    options: ReaderOptions,

    /// `options.content_selectors`, compiled
    content_selectors: Vec<Selector>,
}

impl<'a> Reader<'a> {
    /// Create a new Reader
    ///
    /// # Arguments
    /// * `document` - The parsed HTML document
    /// * `url` - URL of the page, copied into the result
    /// * `options` - Optional configuration options
    ///
    /// # Errors
    /// `InvalidUrl` if `url` does not parse, `InvalidSelector` if a configured content
    /// selector does not parse.
    pub fn new(document: &'a Html, url: &str, options: Option<ReaderOptions>) -> Result<Self> {
        let url = Url::parse(url)
            .map_err(|_| ReaderError::InvalidUrl(url.to_string()))?
            .to_string();

        let options = options.unwrap_or_default();
        let content_selectors =
            parse_selectors(&options.content_selectors).map_err(ReaderError::InvalidSelector)?;

        Ok(Self {
            document,
            url,
            options,
            content_selectors,
        })
    }

    /// The options this reader was built with
    pub fn options(&self) -> &ReaderOptions {
        &self.options
    }

    /// Locate the article container without sanitizing it.
    ///
    /// # Returns
    /// `Ok(None)` when no container qualifies.
    pub fn find_content(&self) -> Result<Option<ElementRef<'a>>> {
        if self.options.max_elems_to_parse > 0 {
            let count = count_elements(self.document);
            if count > self.options.max_elems_to_parse {
                return Err(ReaderError::MaxElementsExceeded(count));
            }
        }

        Ok(find_content(
            self.document,
            &self.content_selectors,
            &self.options,
        ))
    }

    /// Extract the article.
    ///
    /// # Returns
    /// `Ok(Some(article))` on success, `Ok(None)` when the page has no article content.
    pub fn extract(&self) -> Result<Option<Article>> {
        let Some(container) = self.find_content()? else {
            debug!(target: "readerview.reader", url = %self.url, "no content candidate");
            return Ok(None);
        };

        let content = cleaner::sanitize(&container);
        let time = reading_time::estimate(&content, self.options.words_per_minute);
        let metadata = get_article_metadata(self.document);

        debug!(
            target: "readerview.reader",
            url = %self.url,
            container = container.value().name(),
            words = time.word_count,
            "article extracted"
        );

        Ok(Some(Article {
            title: metadata.title,
            content,
            word_count: time.word_count,
            reading_time_minutes: time.minutes,
            author: metadata.author,
            publish_date: metadata.publish_date,
            url: self.url.clone(),
        }))
    }

    /// Extract the article, folding every outcome into an [`ExtractionReport`].
    pub fn report(&self) -> ExtractionReport {
        ExtractionReport::from(self.extract())
    }
}

/// Tagged extraction outcome for callers that want a flat shape instead of a `Result`.
///
/// `success` is true only when an article was produced; `error` then is `None`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ExtractionReport {
    pub success: bool,
    pub error: Option<String>,
    pub article: Option<Article>,
}

impl ExtractionReport {
    /// A failed report carrying `error`'s message.
    pub fn failure(error: &ReaderError) -> Self {
        Self {
            success: false,
            error: Some(error.to_string()),
            article: None,
        }
    }
}

impl From<Result<Option<Article>>> for ExtractionReport {
    fn from(result: Result<Option<Article>>) -> Self {
        match result {
            Ok(Some(article)) => Self {
                success: true,
                error: None,
                article: Some(article),
            },
            Ok(None) => Self::failure(&ReaderError::NoContentFound),
            Err(e) => {
                warn!(target: "readerview.reader", error = %e, "extraction failed");
                Self::failure(&e)
            }
        }
    }
}
