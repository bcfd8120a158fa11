//! Error types for the reader-mode library.

use thiserror::Error;

/// Result type alias for reader-mode operations
pub type Result<T> = std::result::Result<T, ReaderError>;

/// Errors that can occur during extraction or reader-session transitions
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ReaderError {
    /// Invalid page URL provided
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// A configured selector could not be parsed
    #[error("Invalid selector: {0}")]
    InvalidSelector(String),

    /// Reader preferences could not be decoded
    #[error("Invalid reader preferences: {0}")]
    InvalidPreferences(String),

    /// Maximum element limit exceeded
    #[error("Maximum element limit exceeded: {0}")]
    MaxElementsExceeded(usize),

    /// No article content could be extracted
    #[error("No article content found in document")]
    NoContentFound,

    /// `activate` was called on a session that is already showing reader content
    #[error("Reader mode is already active")]
    AlreadyActive,

    /// `restore` was called on a session that is not active
    #[error("Reader mode is not active")]
    NotActive,

    /// The session is active but holds no saved document to restore
    #[error("No saved document to restore")]
    MissingSnapshot,

    /// The document host failed to read or write the page
    #[error("Document host error: {0}")]
    Host(String),
}
