//! Compiled pattern sets, selector lists, and numeric defaults.

use once_cell::sync::Lazy;
use regex::Regex;

/// Class/id terms that make a container unlikely to hold the article.
pub const UNLIKELY_CANDIDATES_PATTERN: &str = r"(?i)banner|breadcrumbs|combx|comment|community|cover-wrap|disqus|extra|foot|header|legends|menu|modal|related|remark|replies|rss|shoutbox|sidebar|skyscraper|social|sponsor|supplemental|ad-break|agegate|pagination|pager|popup|yom-remote";

/// Class/id terms that suggest article content.
pub const POSITIVE_CANDIDATES_PATTERN: &str =
    r"(?i)article|body|content|entry|hentry|h-entry|main|page|pagination|post|text|blog|story";

/// Class/id terms that suggest page chrome.
pub const NEGATIVE_CANDIDATES_PATTERN: &str = r"(?i)hidden|^hid$|hid$|hid|^hid |banner|combx|comment|com-|contact|foot|footer|footnote|masthead|media|meta|modal|outbrain|promo|related|scroll|share|shoutbox|sidebar|skyscraper|sponsor|shopping|tags|tool|widget";

/// The three class/id classifiers, compiled once.
pub struct Regexps {
    pub unlikely_candidates: Regex,
    pub positive_candidates: Regex,
    pub negative_candidates: Regex,
}

pub static REGEXPS: Lazy<Regexps> = Lazy::new(|| Regexps {
    unlikely_candidates: Regex::new(UNLIKELY_CANDIDATES_PATTERN).unwrap(),
    positive_candidates: Regex::new(POSITIVE_CANDIDATES_PATTERN).unwrap(),
    negative_candidates: Regex::new(NEGATIVE_CANDIDATES_PATTERN).unwrap(),
});

/// Explicit high-confidence content containers, in priority order.
pub const CONTENT_SELECTORS: &[&str] = &[
    "article",
    r#"[role="main"]"#,
    "main",
    ".content",
    ".post-content",
    ".entry-content",
    ".article-content",
    ".story-content",
    ".post-body",
    ".entry-body",
];

/// Descendants removed from the article copy before display.
pub const UNWANTED_SELECTORS: &[&str] = &[
    "script",
    "style",
    "nav",
    "header",
    "footer",
    "aside",
    ".sidebar",
    ".navigation",
    ".menu",
    ".ads",
    ".advertisement",
    ".social",
    ".share",
    ".comments",
    ".related",
    ".pagination",
    r#"[class*="ad"]"#,
    r#"[id*="ad"]"#,
    r#"[class*="social"]"#,
    r#"[id*="social"]"#,
];

/// Attributes that survive sanitization.
pub const ALLOWED_ATTRIBUTES: &[&str] = &["href", "src", "alt", "title"];

pub const DEFAULT_IMAGE_ALT: &str = "Image";

pub const TITLE_SELECTORS: &[&str] = &[
    "h1",
    ".title",
    ".headline",
    ".article-title",
    ".post-title",
    ".entry-title",
    r#"[property="og:title"]"#,
    "title",
];

pub const AUTHOR_SELECTORS: &[&str] = &[
    r#"[rel="author"]"#,
    ".author",
    ".byline",
    ".by-author",
    r#"[property="article:author"]"#,
    r#"[name="author"]"#,
];

pub const PUBLISH_DATE_SELECTORS: &[&str] = &[
    r#"[property="article:published_time"]"#,
    r#"[property="datePublished"]"#,
    ".date",
    ".published",
    ".publish-date",
    "time[datetime]",
];

/// Title used when no title selector yields text.
pub const DEFAULT_TITLE: &str = "Article";

pub const WORDS_PER_MINUTE: usize = 200;

/// Phase A containers must hold more text than this.
pub const MIN_CONTENT_LENGTH: usize = 300;

/// Paragraphs shorter than this do not vote in Phase B.
pub const MIN_PARAGRAPH_LENGTH: usize = 25;

/// Cap on the length bonus a single paragraph can earn.
pub const MAX_LENGTH_BONUS: usize = 3;

pub const READERABLE_MIN_TEXT_LENGTH: usize = 500;

pub const ARTICLE_HINT_SELECTORS: &[&str] = &["article", r#"[role="main"]"#, ".article", ".post"];

pub const MAIN_CONTENT_SELECTORS: &[&str] = &["main", ".content", ".main-content"];

/// Elements serialized without a closing tag.
pub const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "param", "source",
    "track", "wbr",
];
