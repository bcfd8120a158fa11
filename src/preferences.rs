//! Reader display preferences and the reader page shown while reader mode is active.

use crate::article::Article;
use crate::dom_utils::escape_text;
use crate::error::{ReaderError, Result};
use serde::{Deserialize, Serialize};
use std::fmt::Write;

/// Color scheme of the reader page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
    Sepia,
}

impl Theme {
    /// Background and text colors.
    fn colors(self) -> (&'static str, &'static str) {
        match self {
            Theme::Light => ("#ffffff", "#1b1b1b"),
            Theme::Dark => ("#1e1e1e", "#e6e6e6"),
            Theme::Sepia => ("#f4ecd8", "#5b4636"),
        }
    }

    fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
            Theme::Sepia => "sepia",
        }
    }
}

/// How the reader page looks and when reader mode turns on by itself.
///
/// Missing fields take their defaults when decoding:
///
/// ```rust
/// use readerview::{ReaderPreferences, Theme};
///
/// let prefs = ReaderPreferences::from_json(r#"{"theme": "sepia", "font_size": 20}"#).unwrap();
/// assert_eq!(prefs.theme, Theme::Sepia);
/// assert_eq!(prefs.font_size, 20);
/// assert!(prefs.show_estimated_time);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReaderPreferences {
    pub theme: Theme,

    /// Body font size in pixels.
    pub font_size: u32,

    /// CSS font family.
    pub font_family: String,

    pub line_height: f64,

    /// Maximum text column width in pixels.
    pub column_width: u32,

    /// Turn reader mode on automatically for readerable pages.
    pub auto_enable: bool,

    /// Show the reading-time estimate under the title.
    pub show_estimated_time: bool,
}

impl Default for ReaderPreferences {
    fn default() -> Self {
        Self {
            theme: Theme::Light,
            font_size: 18,
            font_family: "serif".to_string(),
            line_height: 1.6,
            column_width: 700,
            auto_enable: false,
            show_estimated_time: true,
        }
    }
}

impl ReaderPreferences {
    /// Decode preferences from JSON.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| ReaderError::InvalidPreferences(e.to_string()))
    }

    /// Encode preferences as JSON.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string(self).map_err(|e| ReaderError::InvalidPreferences(e.to_string()))
    }

    fn stylesheet(&self) -> String {
        let (background, foreground) = self.theme.colors();
        let font_family = self
            .font_family
            .chars()
            .filter(|c| !matches!(c, ';' | '{' | '}' | '<' | '>'))
            .collect::<String>();
        format!(
            "body{{margin:0;background:{background};color:{foreground};}}\
             article{{max-width:{width}px;margin:0 auto;padding:2em 1em;font-family:{font_family};font-size:{size}px;line-height:{line_height};}}\
             article img{{max-width:100%;height:auto;}}\
             .reader-meta{{opacity:0.7;}}",
            width = self.column_width,
            size = self.font_size,
            line_height = self.line_height,
        )
    }
}

/// Full replacement document shown while reader mode is active.
///
/// The title, author and date are escaped; the content is inserted as is, since it has
/// already been sanitized.
pub fn render_reader_page(article: &Article, preferences: &ReaderPreferences) -> String {
    let mut title = String::new();
    escape_text(&article.title, &mut title);

    let mut meta = String::new();
    if let Some(author) = &article.author {
        meta.push_str(r#"<p class="reader-byline">By "#);
        escape_text(author, &mut meta);
        meta.push_str("</p>");
    }
    if let Some(date) = &article.publish_date {
        meta.push_str(r#"<p class="reader-date">"#);
        escape_text(date, &mut meta);
        meta.push_str("</p>");
    }
    if preferences.show_estimated_time {
        let _ = write!(
            meta,
            r#"<p class="reader-time">{}</p>"#,
            article.reading_time_label()
        );
    }

    format!(
        concat!(
            "<!DOCTYPE html><html><head><meta charset=\"utf-8\"><title>{title}</title>",
            "<style>{style}</style></head>",
            "<body class=\"reader-mode reader-theme-{theme}\"><article>",
            "<h1 class=\"reader-title\">{title}</h1><div class=\"reader-meta\">{meta}</div>",
            "<div class=\"reader-content\">{content}</div>",
            "</article></body></html>"
        ),
        title = title,
        style = preferences.stylesheet(),
        theme = preferences.theme.as_str(),
        meta = meta,
        content = article.content,
    )
}
