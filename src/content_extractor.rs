//! Locating the article container.
//!
//! The search runs in two phases. An explicit probe tries a fixed, ordered list of content
//! selectors and accepts the first container holding enough text. When nothing matches,
//! every `<p>` in the document votes for its parent (full weight) and grandparent (half
//! weight); the container with the highest accumulated score wins.

use crate::dom_utils::{parent_element, text_content, text_length};
use crate::options::ReaderOptions;
use crate::scoring::{initialize_node_score, paragraph_score};
use ego_tree::NodeId;
use once_cell::sync::Lazy;
use scraper::{ElementRef, Html, Selector};
use std::collections::HashMap;
use tracing::{debug, trace};

static PARAGRAPH_SELECTOR: Lazy<Selector> = Lazy::new(|| Selector::parse("p").unwrap());

/// A candidate container paired with its accumulated score.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoredNode {
    pub node: NodeId,
    pub score: f64,
}

/// Candidate scores in first-seen order.
///
/// Scores only ever accumulate; a node's base score is computed once, when the first
/// paragraph attributes to it.
#[derive(Debug, Default)]
pub struct CandidateScores {
    candidates: Vec<ScoredNode>,
    index: HashMap<NodeId, usize>,
}

impl CandidateScores {
    fn add(&mut self, element: &ElementRef, delta: f64, options: &ReaderOptions) {
        let slot = match self.index.get(&element.id()) {
            Some(&slot) => slot,
            None => {
                let base = initialize_node_score(element, &options.patterns);
                self.candidates.push(ScoredNode {
                    node: element.id(),
                    score: f64::from(base),
                });
                self.index.insert(element.id(), self.candidates.len() - 1);
                self.candidates.len() - 1
            }
        };
        self.candidates[slot].score += delta;
    }

    /// Highest strictly-positive score; earlier candidates win ties.
    pub fn best(&self) -> Option<ScoredNode> {
        let mut best: Option<ScoredNode> = None;
        let mut best_score = 0.0;
        for candidate in &self.candidates {
            if candidate.score > best_score {
                best_score = candidate.score;
                best = Some(*candidate);
            }
        }
        best
    }

    pub fn get(&self, node: NodeId) -> Option<f64> {
        self.index.get(&node).map(|&slot| self.candidates[slot].score)
    }

    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ScoredNode> {
        self.candidates.iter()
    }
}

/// Find the element most likely to hold the article body.
pub fn find_content<'a>(
    document: &'a Html,
    content_selectors: &[Selector],
    options: &ReaderOptions,
) -> Option<ElementRef<'a>> {
    if let Some(element) = find_explicit_content(document, content_selectors, options) {
        return Some(element);
    }

    let scores = score_paragraphs(document, options);
    let best = scores.best();
    debug!(
        target: "readerview.content",
        candidates = scores.len(),
        best_score = ?best.map(|b| b.score),
        "paragraph scoring finished"
    );

    best.and_then(|b| document.tree.get(b.node))
        .and_then(ElementRef::wrap)
}

/// Explicit probe: the first match of the first selector whose match holds more than
/// `min_content_length` characters.
pub fn find_explicit_content<'a>(
    document: &'a Html,
    content_selectors: &[Selector],
    options: &ReaderOptions,
) -> Option<ElementRef<'a>> {
    for (position, selector) in content_selectors.iter().enumerate() {
        let Some(element) = document.select(selector).next() else {
            continue;
        };
        let length = text_length(&element);
        if length > options.min_content_length {
            debug!(
                target: "readerview.content",
                selector = position,
                tag = element.value().name(),
                length,
                "explicit content selector matched"
            );
            return Some(element);
        }
    }
    None
}

/// Fallback: accumulate paragraph votes on parents and grandparents.
pub fn score_paragraphs(document: &Html, options: &ReaderOptions) -> CandidateScores {
    let mut scores = CandidateScores::default();

    for paragraph in document.select(&PARAGRAPH_SELECTOR) {
        let Some(parent) = parent_element(&paragraph) else {
            continue;
        };
        if parent.value().name().eq_ignore_ascii_case("blockquote") {
            continue;
        }

        let text = text_content(&paragraph);
        let text = text.trim();
        if text.chars().count() < options.min_paragraph_length {
            continue;
        }

        let score = paragraph_score(text) as f64;
        scores.add(&parent, score, options);
        if let Some(grandparent) = parent_element(&parent) {
            scores.add(&grandparent, score / 2.0, options);
        }

        if options.debug {
            debug!(
                target: "readerview.content",
                parent = parent.value().name(),
                score,
                "paragraph vote"
            );
        } else {
            trace!(
                target: "readerview.content",
                parent = parent.value().name(),
                score,
                "paragraph vote"
            );
        }
    }

    scores
}
