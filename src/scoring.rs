//! Node and paragraph scoring used by the candidate search.

use crate::constants::MAX_LENGTH_BONUS;
use crate::options::ScoringPatterns;
use scraper::ElementRef;

const CLASS_WEIGHT: i32 = 25;

/// Base score contributed by a tag name alone.
fn tag_score(tag: &str) -> i32 {
    match tag.to_ascii_lowercase().as_str() {
        "div" => 5,
        "pre" | "td" | "blockquote" => 3,
        "address" | "ol" | "ul" | "dl" | "dd" | "dt" | "li" | "form" => -3,
        "h1" | "h2" | "h3" | "h4" | "h5" | "h6" | "th" => -5,
        _ => 0,
    }
}

/// Score a container from its tag name and its class/id text.
///
/// The three classifiers are independent: a node hit by several of them collects every
/// adjustment.
pub fn score_node(tag: &str, class_and_id: &str, patterns: &ScoringPatterns) -> i32 {
    let mut score = tag_score(tag);
    let class_and_id = class_and_id.to_lowercase();

    if patterns.positive.is_match(&class_and_id) {
        score += CLASS_WEIGHT;
    }
    if patterns.unlikely.is_match(&class_and_id) {
        score -= CLASS_WEIGHT;
    }
    if patterns.negative.is_match(&class_and_id) {
        score -= CLASS_WEIGHT;
    }

    score
}

/// `class` and `id` attribute values joined by a space.
pub fn class_and_id(element: &ElementRef) -> String {
    let class = element.value().attr("class").unwrap_or("");
    let id = element.value().attr("id").unwrap_or("");
    format!("{} {}", class, id)
}

/// Initial score of a candidate container the first time a paragraph votes for it.
pub fn initialize_node_score(element: &ElementRef, patterns: &ScoringPatterns) -> i32 {
    score_node(element.value().name(), &class_and_id(element), patterns)
}

/// Weight of a single paragraph's vote.
///
/// One point for existing, one per comma-separated segment, and one per 100 characters
/// up to three.
pub fn paragraph_score(text: &str) -> usize {
    let segments = text.split(',').count();
    let length_bonus = (text.chars().count() / 100).min(MAX_LENGTH_BONUS);
    1 + segments + length_bonus
}
