//! Configuration options for reader-mode extraction.
//!
//! This module provides [`ReaderOptions`] and [`ReaderOptionsBuilder`] for tuning the
//! content search, and [`ScoringPatterns`] for the class/id classifiers it relies on.
//!
//! ## Example
//!
//! ```rust
//! use readerview::{Reader, ReaderOptions};
//! use scraper::Html;
//!
//! let document = Html::parse_document("<html><body><article><p>Content...</p></article></body></html>");
//!
//! // Using default options
//! let reader = Reader::new(&document, "https://example.com/", None).unwrap();
//!
//! // Using builder for custom options
//! let options = ReaderOptions::builder()
//!     .min_content_length(100)
//!     .words_per_minute(250)
//!     .build();
//!
//! let reader = Reader::new(&document, "https://example.com/", Some(options)).unwrap();
//! ```

use crate::constants::{
    CONTENT_SELECTORS, MIN_CONTENT_LENGTH, MIN_PARAGRAPH_LENGTH, REGEXPS, WORDS_PER_MINUTE,
};
use regex::Regex;

/// The three class/id classifiers used by the node scorer.
///
/// Each classifier is applied independently to the lowercase `class + " " + id` text of a
/// candidate container. Override them to tune or localize the heuristics without touching
/// the scoring code.
///
/// ```rust
/// use readerview::ScoringPatterns;
/// use regex::Regex;
///
/// let patterns = ScoringPatterns {
///     positive: Regex::new(r"(?i)artikel|inhalt").unwrap(),
///     ..ScoringPatterns::default()
/// };
/// assert!(patterns.positive.is_match("artikel-text"));
/// ```
#[derive(Debug, Clone)]
pub struct ScoringPatterns {
    /// Terms that suggest article content (+25).
    pub positive: Regex,

    /// Terms that make a container unlikely to be the article (-25).
    pub unlikely: Regex,

    /// Terms that suggest page chrome (-25).
    pub negative: Regex,
}

impl Default for ScoringPatterns {
    fn default() -> Self {
        Self {
            positive: REGEXPS.positive_candidates.clone(),
            unlikely: REGEXPS.unlikely_candidates.clone(),
            negative: REGEXPS.negative_candidates.clone(),
        }
    }
}

/// Configuration options for the reader.
///
/// Controls the explicit selector probe, the paragraph-scoring fallback, element limits,
/// and the reading speed used for time estimates.
///
/// ## Creating Options
///
/// ```rust
/// use readerview::ReaderOptions;
///
/// let defaults = ReaderOptions::default();
/// assert_eq!(defaults.min_content_length, 300);
///
/// let options = ReaderOptions::builder()
///     .min_paragraph_length(40)
///     .debug(true)
///     .build();
/// assert_eq!(options.min_paragraph_length, 40);
/// ```
#[derive(Debug, Clone)]
pub struct ReaderOptions {
    /// Emit per-candidate score events at `debug` level instead of `trace`.
    ///
    /// Default: `false`
    pub debug: bool,

    /// Maximum number of elements in the document.
    ///
    /// Extraction is refused with [`ReaderError::MaxElementsExceeded`](crate::ReaderError)
    /// when the document holds more elements. Set to 0 to disable the limit.
    ///
    /// Default: `0` (no limit)
    pub max_elems_to_parse: usize,

    /// Selectors probed, in order, before falling back to paragraph scoring.
    ///
    /// The first element matched by each selector is checked; the first one holding more
    /// than [`min_content_length`](Self::min_content_length) characters of text wins.
    ///
    /// Default: `article`, `[role="main"]`, `main`, `.content`, `.post-content`,
    /// `.entry-content`, `.article-content`, `.story-content`, `.post-body`, `.entry-body`
    pub content_selectors: Vec<String>,

    /// Minimum trimmed text length (exclusive) for an explicit selector match.
    ///
    /// Default: `300`
    pub min_content_length: usize,

    /// Minimum trimmed text length for a paragraph to contribute to candidate scores.
    ///
    /// Default: `25`
    pub min_paragraph_length: usize,

    /// Reading speed used for the reading-time estimate.
    ///
    /// Default: `200`
    pub words_per_minute: usize,

    /// Class/id classifiers used to seed candidate scores.
    pub patterns: ScoringPatterns,
}

impl Default for ReaderOptions {
    fn default() -> Self {
        Self {
            debug: false,
            max_elems_to_parse: 0,
            content_selectors: CONTENT_SELECTORS.iter().map(|s| s.to_string()).collect(),
            min_content_length: MIN_CONTENT_LENGTH,
            min_paragraph_length: MIN_PARAGRAPH_LENGTH,
            words_per_minute: WORDS_PER_MINUTE,
            patterns: ScoringPatterns::default(),
        }
    }
}

impl ReaderOptions {
    /// Creates a new builder for ReaderOptions
    pub fn builder() -> ReaderOptionsBuilder {
        ReaderOptionsBuilder::default()
    }
}

/// Builder for [`ReaderOptions`].
///
/// ```rust
/// use readerview::ReaderOptions;
///
/// let options = ReaderOptions::builder()
///     .content_selectors(vec![".story".to_string(), "article".to_string()])
///     .max_elems_to_parse(10_000)
///     .build();
/// assert_eq!(options.content_selectors.len(), 2);
/// ```
#[derive(Default)]
pub struct ReaderOptionsBuilder {
    debug: Option<bool>,
    max_elems_to_parse: Option<usize>,
    content_selectors: Option<Vec<String>>,
    min_content_length: Option<usize>,
    min_paragraph_length: Option<usize>,
    words_per_minute: Option<usize>,
    patterns: Option<ScoringPatterns>,
}

impl ReaderOptionsBuilder {
    /// Enable or disable verbose candidate logging
    pub fn debug(mut self, debug: bool) -> Self {
        self.debug = Some(debug);
        self
    }

    /// Set maximum number of elements to parse
    pub fn max_elems_to_parse(mut self, max: usize) -> Self {
        self.max_elems_to_parse = Some(max);
        self
    }

    /// Replace the explicit content selector list
    pub fn content_selectors(mut self, selectors: Vec<String>) -> Self {
        self.content_selectors = Some(selectors);
        self
    }

    /// Set the text threshold for explicit selector matches
    pub fn min_content_length(mut self, length: usize) -> Self {
        self.min_content_length = Some(length);
        self
    }

    /// Set the minimum scoring paragraph length
    pub fn min_paragraph_length(mut self, length: usize) -> Self {
        self.min_paragraph_length = Some(length);
        self
    }

    /// Set the reading speed
    pub fn words_per_minute(mut self, wpm: usize) -> Self {
        self.words_per_minute = Some(wpm);
        self
    }

    /// Replace the class/id classifiers
    pub fn patterns(mut self, patterns: ScoringPatterns) -> Self {
        self.patterns = Some(patterns);
        self
    }

    /// Build the ReaderOptions
    pub fn build(self) -> ReaderOptions {
        let defaults = ReaderOptions::default();
        ReaderOptions {
            debug: self.debug.unwrap_or(defaults.debug),
            max_elems_to_parse: self
                .max_elems_to_parse
                .unwrap_or(defaults.max_elems_to_parse),
            content_selectors: self
                .content_selectors
                .unwrap_or(defaults.content_selectors),
            min_content_length: self.min_content_length.unwrap_or(defaults.min_content_length),
            min_paragraph_length: self
                .min_paragraph_length
                .unwrap_or(defaults.min_paragraph_length),
            words_per_minute: self.words_per_minute.unwrap_or(defaults.words_per_minute),
            patterns: self.patterns.unwrap_or(defaults.patterns),
        }
    }
}
