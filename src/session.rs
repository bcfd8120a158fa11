//! Reader-mode activation and restoration.
//!
//! A [`ReaderSession`] tracks whether one page is currently showing reader content and
//! keeps the snapshot needed to put the original page back. The page itself lives behind
//! the [`DocumentHost`] trait; [`HtmlPage`] is an in-memory implementation.
//!
//! ```rust
//! use readerview::{DocumentHost, HtmlPage, ReaderSession};
//!
//! let text = "A paragraph of article text, long enough to count. ".repeat(10);
//! let html = format!("<html><head></head><body><article><p>{}</p></article></body></html>", text);
//! let mut page = HtmlPage::new(&html, "https://example.com/a")?;
//! let mut session = ReaderSession::default();
//!
//! let article = session.activate(&mut page)?;
//! assert_eq!(article.url, "https://example.com/a");
//! assert!(session.is_active());
//! assert!(page.document().html().contains("reader-mode"));
//!
//! session.restore(&mut page)?;
//! assert!(!session.is_active());
//! # Ok::<(), readerview::ReaderError>(())
//! ```

use crate::article::Article;
use crate::error::{ReaderError, Result};
use crate::options::ReaderOptions;
use crate::preferences::{render_reader_page, ReaderPreferences};
use crate::readability::Reader;
use crate::readerable::is_readerable;
use scraper::Html;
use tracing::{info, warn};
use url::Url;

/// The page a session reads from and writes to.
///
/// Extraction only issues read queries against [`document`](Self::document). Only
/// activation and restoration read or write the full document.
pub trait DocumentHost {
    /// The parsed page, for read-only queries.
    fn document(&self) -> &Html;

    /// URL of the page.
    fn url(&self) -> &str;

    /// Serialize the whole document.
    fn read_document(&self) -> Result<String>;

    /// Replace the whole document with `markup`.
    fn write_document(&mut self, markup: &str) -> Result<()>;
}

/// An in-memory page: a URL and a parsed tree that is re-parsed on every write.
#[derive(Debug, Clone)]
pub struct HtmlPage {
    url: String,
    document: Html,
}

impl HtmlPage {
    /// Parse `html` as the page at `url`.
    pub fn new(html: &str, url: &str) -> Result<Self> {
        let url = Url::parse(url)
            .map_err(|_| ReaderError::InvalidUrl(url.to_string()))?
            .to_string();
        Ok(Self {
            url,
            document: Html::parse_document(html),
        })
    }
}

impl DocumentHost for HtmlPage {
    fn document(&self) -> &Html {
        &self.document
    }

    fn url(&self) -> &str {
        &self.url
    }

    fn read_document(&self) -> Result<String> {
        Ok(self.document.html())
    }

    fn write_document(&mut self, markup: &str) -> Result<()> {
        self.document = Html::parse_document(markup);
        Ok(())
    }
}

/// Reader-mode state for one page.
///
/// The session is either inactive, or active with the snapshot of the page it replaced.
/// Transitions that do not fit the current state are rejected with an error and leave the
/// session unchanged. A session is meant for a single owner; wrap it in a `Mutex` to share
/// it across threads.
#[derive(Debug, Clone, Default)]
pub struct ReaderSession {
    active: bool,
    saved_document: Option<String>,
    options: ReaderOptions,
    preferences: ReaderPreferences,
}

impl ReaderSession {
    pub fn new(options: ReaderOptions, preferences: ReaderPreferences) -> Self {
        Self {
            active: false,
            saved_document: None,
            options,
            preferences,
        }
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn has_snapshot(&self) -> bool {
        self.saved_document.is_some()
    }

    pub fn preferences(&self) -> &ReaderPreferences {
        &self.preferences
    }

    /// Change display preferences; applies from the next activation.
    pub fn set_preferences(&mut self, preferences: ReaderPreferences) {
        self.preferences = preferences;
    }

    /// Extract the page's article, without touching the session.
    pub fn extract(&self, host: &impl DocumentHost) -> Result<Option<Article>> {
        Reader::new(host.document(), host.url(), Some(self.options.clone()))?.extract()
    }

    /// Swap the page for its reader view.
    ///
    /// # Errors
    /// `AlreadyActive` when called twice, `NoContentFound` when the page has no article,
    /// or the host's error if reading or writing the page fails. The session only becomes
    /// active once the page has been written.
    pub fn activate(&mut self, host: &mut impl DocumentHost) -> Result<Article> {
        if self.active {
            warn!(target: "readerview.session", url = host.url(), "activate while active");
            return Err(ReaderError::AlreadyActive);
        }

        let article = self.extract(&*host)?.ok_or(ReaderError::NoContentFound)?;
        let snapshot = host.read_document()?;
        host.write_document(&render_reader_page(&article, &self.preferences))?;

        self.saved_document = Some(snapshot);
        self.active = true;
        info!(
            target: "readerview.session",
            url = host.url(),
            words = article.word_count,
            "reader mode activated"
        );
        Ok(article)
    }

    /// Put the original page back.
    ///
    /// # Errors
    /// `NotActive` when inactive, `MissingSnapshot` when there is nothing to restore, or
    /// the host's error, in which case the session stays active with its snapshot.
    pub fn restore(&mut self, host: &mut impl DocumentHost) -> Result<()> {
        if !self.active {
            warn!(target: "readerview.session", url = host.url(), "restore while inactive");
            return Err(ReaderError::NotActive);
        }
        let Some(snapshot) = self.saved_document.as_deref() else {
            warn!(target: "readerview.session", url = host.url(), "restore without snapshot");
            return Err(ReaderError::MissingSnapshot);
        };

        host.write_document(snapshot)?;

        self.saved_document = None;
        self.active = false;
        info!(target: "readerview.session", url = host.url(), "reader mode restored");
        Ok(())
    }

    /// Activate when inactive, restore when active.
    ///
    /// Returns the article when the toggle turned reader mode on.
    pub fn toggle(&mut self, host: &mut impl DocumentHost) -> Result<Option<Article>> {
        if self.active {
            self.restore(host).map(|_| None)
        } else {
            self.activate(host).map(Some)
        }
    }

    /// Activate if the preferences ask for it and the page looks readerable.
    ///
    /// Returns `Ok(None)` when nothing was done.
    pub fn auto_activate(&mut self, host: &mut impl DocumentHost) -> Result<Option<Article>> {
        if !self.preferences.auto_enable || self.active || !is_readerable(host.document()) {
            return Ok(None);
        }
        match self.activate(host) {
            Ok(article) => Ok(Some(article)),
            Err(ReaderError::NoContentFound) => Ok(None),
            Err(e) => Err(e),
        }
    }
}
