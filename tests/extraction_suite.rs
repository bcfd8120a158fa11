//! Fixture-driven extraction tests.
//!
//! Each directory under tests/fixtures/ holds a `source.html` page and an
//! `expected-metadata.json` describing what extraction should produce.

use readerview::{is_readerable, sanitize, Reader};
use scraper::{Html, Selector};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Expected metadata for a fixture page
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ExpectedMetadata {
    title: String,
    author: Option<String>,
    publish_date: Option<String>,
    extracted: bool,
    readerable: bool,
}

/// A single fixture page
struct TestCase {
    name: String,
    source_html: String,
    expected: ExpectedMetadata,
}

impl TestCase {
    fn load(path: &Path) -> Result<Self, Box<dyn std::error::Error>> {
        let name = path
            .file_name()
            .and_then(|n| n.to_str())
            .ok_or("Invalid test case name")?
            .to_string();

        let source_html = fs::read_to_string(path.join("source.html"))?;
        let expected: ExpectedMetadata =
            serde_json::from_str(&fs::read_to_string(path.join("expected-metadata.json"))?)?;

        Ok(TestCase {
            name,
            source_html,
            expected,
        })
    }
}

fn fixture_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures")
}

fn load_test_cases() -> Vec<TestCase> {
    let mut test_cases = Vec::new();

    let entries = fs::read_dir(fixture_dir()).expect("fixture directory");
    for entry in entries.flatten() {
        if entry.path().is_dir() {
            match TestCase::load(&entry.path()) {
                Ok(test_case) => test_cases.push(test_case),
                Err(e) => panic!("Failed to load test case {:?}: {}", entry.path(), e),
            }
        }
    }

    test_cases.sort_by(|a, b| a.name.cmp(&b.name));
    test_cases
}

fn load(name: &str) -> String {
    fs::read_to_string(fixture_dir().join(name).join("source.html")).expect("fixture source")
}

#[test]
fn test_fixture_metadata() {
    let test_cases = load_test_cases();
    assert_eq!(test_cases.len(), 3);

    let mut failures = Vec::new();

    for test_case in &test_cases {
        let document = Html::parse_document(&test_case.source_html);
        let url = format!("https://example.com/{}", test_case.name);
        let reader = Reader::new(&document, &url, None).expect("reader");
        let article = reader.extract().expect("extraction");

        if is_readerable(&document) != test_case.expected.readerable {
            failures.push(format!("{}: readerable mismatch", test_case.name));
        }

        match (article, test_case.expected.extracted) {
            (Some(article), true) => {
                if article.title != test_case.expected.title {
                    failures.push(format!(
                        "{}: title expected {:?}, got {:?}",
                        test_case.name, test_case.expected.title, article.title
                    ));
                }
                if article.author != test_case.expected.author {
                    failures.push(format!(
                        "{}: author expected {:?}, got {:?}",
                        test_case.name, test_case.expected.author, article.author
                    ));
                }
                if article.publish_date != test_case.expected.publish_date {
                    failures.push(format!(
                        "{}: publish date expected {:?}, got {:?}",
                        test_case.name, test_case.expected.publish_date, article.publish_date
                    ));
                }
                if article.url != url {
                    failures.push(format!("{}: url {:?}", test_case.name, article.url));
                }
            }
            (None, false) => {
                assert_eq!(
                    readerview::extract_title(&document),
                    test_case.expected.title,
                    "{}",
                    test_case.name
                );
            }
            (Some(_), false) => failures.push(format!("{}: unexpected article", test_case.name)),
            (None, true) => failures.push(format!("{}: no article extracted", test_case.name)),
        }
    }

    assert!(failures.is_empty(), "fixture failures:\n{}", failures.join("\n"));
}

#[test]
fn test_news_article_content_is_sanitized() {
    let html = load("news-article");
    let document = Html::parse_document(&html);
    let reader = Reader::new(&document, "https://example.com/park", None).unwrap();
    let article = reader.extract().unwrap().unwrap();

    let content = &article.content;
    assert!(content.contains("The city council voted on Tuesday evening"));
    assert!(content.contains(r#"<img src="/img/park.jpg" alt="Image">"#));
    assert!(content.contains("<figcaption>The site of the future park.</figcaption>"));
    assert!(!content.contains("Advertisement"));
    assert!(!content.contains("Related:"));
    assert!(!content.contains("Share this story"));
    assert!(!content.contains("class="));
    assert!(!content.contains("style="));
    assert!(!content.contains("<script"));
    assert!(!content.contains("Example News"));

    assert!(article.word_count > 100 && article.word_count < 200);
    assert_eq!(article.reading_time_minutes, 1);
    assert_eq!(article.reading_time_label(), "1 minute");
}

#[test]
fn test_blog_falls_back_to_paragraph_scoring() {
    let html = load("blog-scored");
    let document = Html::parse_document(&html);
    let reader = Reader::new(&document, "https://example.com/garden", None).unwrap();

    let container = reader.find_content().unwrap().unwrap();
    assert_eq!(container.value().attr("id"), Some("blogpost"));

    let article = reader.extract().unwrap().unwrap();
    assert!(article.content.starts_with("\n<h2>Notes from the Garden</h2>"));
    assert!(article.content.contains("<span>March 3, 2023</span>"));
    assert!(!article.content.contains("Subscribe"));
}

#[test]
fn test_sanitize_is_idempotent_on_fixture() {
    let html = load("news-article");
    let document = Html::parse_document(&html);
    let article = document
        .select(&Selector::parse("article").unwrap())
        .next()
        .unwrap();

    let once = sanitize(&article);
    let reparsed = Html::parse_fragment(&once);
    let twice = sanitize(&reparsed.root_element());
    assert_eq!(once, twice);
}

#[test]
fn test_extraction_leaves_document_untouched() {
    let html = load("news-article");
    let document = Html::parse_document(&html);
    let before = document.html();

    let reader = Reader::new(&document, "https://example.com/park", None).unwrap();
    reader.extract().unwrap().unwrap();

    assert_eq!(document.html(), before);
}

#[test]
fn test_deeply_nested_article_extracts() {
    let depth = 20_000;
    let html = format!(
        "<html><body><article><p>{}</p>{}bottom{}</article></body></html>",
        "Some text. ".repeat(40),
        "<span>".repeat(depth),
        "</span>".repeat(depth)
    );
    let document = Html::parse_document(&html);
    let reader = Reader::new(&document, "https://example.com/deep", None).unwrap();

    let article = reader.extract().unwrap().unwrap();
    assert_eq!(article.content.matches("<span>").count(), depth);
    assert!(article.content.contains("<span>bottom</span>"));
    assert!(reader.report().success);
}

#[test]
fn test_no_article_report() {
    let html = load("no-article");
    let document = Html::parse_document(&html);
    let reader = Reader::new(&document, "https://example.com/links", None).unwrap();

    let report = reader.report();
    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json["success"], false);
    assert_eq!(json["error"], "No article content found in document");
    assert!(json["article"].is_null());
}

#[test]
fn test_session_round_trip_on_fixture() {
    use readerview::{DocumentHost, HtmlPage, ReaderError, ReaderPreferences, ReaderSession};

    let html = load("news-article");
    let mut page = HtmlPage::new(&html, "https://example.com/park").unwrap();
    let original = page.read_document().unwrap();

    let mut session = ReaderSession::default();
    let article = session.activate(&mut page).unwrap();
    assert_eq!(article.title, "City Council Approves New Park");
    assert!(session.is_active());

    let reader_page = page.read_document().unwrap();
    assert!(reader_page.contains("reader-mode"));
    assert!(!reader_page.contains("Advertisement"));
    assert!(matches!(
        session.activate(&mut page),
        Err(ReaderError::AlreadyActive)
    ));

    session.restore(&mut page).unwrap();
    assert!(!session.is_active());
    assert_eq!(page.read_document().unwrap(), original);

    // Auto-enable only kicks in when the preference is set.
    assert!(session.auto_activate(&mut page).unwrap().is_none());
    session.set_preferences(ReaderPreferences {
        auto_enable: true,
        ..ReaderPreferences::default()
    });
    assert!(session.auto_activate(&mut page).unwrap().is_some());
    assert!(session.toggle(&mut page).unwrap().is_none());
    assert_eq!(page.read_document().unwrap(), original);
}

#[test]
fn test_session_refuses_page_without_article() {
    use readerview::{DocumentHost, HtmlPage, ReaderError, ReaderSession};

    let html = load("no-article");
    let mut page = HtmlPage::new(&html, "https://example.com/links").unwrap();
    let before = page.read_document().unwrap();

    let mut session = ReaderSession::default();
    assert!(matches!(
        session.activate(&mut page),
        Err(ReaderError::NoContentFound)
    ));
    assert!(!session.is_active());
    assert!(matches!(session.restore(&mut page), Err(ReaderError::NotActive)));
    assert_eq!(page.read_document().unwrap(), before);
}
