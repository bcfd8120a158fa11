//! Word count and reading-time estimate for sanitized markup.

use scraper::Html;
use serde::{Deserialize, Serialize};

/// Word count and the minutes needed to read it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReadingTime {
    pub word_count: usize,
    pub minutes: usize,
}

/// Whitespace-delimited tokens in the flattened text of `markup`.
///
/// Text is concatenated across element boundaries, so `<b>a</b><b>b</b>` is one word.
/// Markup with no text counts zero words.
pub fn count_words(markup: &str) -> usize {
    let fragment = Html::parse_fragment(markup);
    let text = fragment.root_element().text().collect::<String>();
    text.split_whitespace().count()
}

/// `ceil(word_count / words_per_minute)`, never less than one minute.
pub fn reading_minutes(word_count: usize, words_per_minute: usize) -> usize {
    word_count.div_ceil(words_per_minute.max(1)).max(1)
}

/// Estimate the reading time of sanitized markup.
pub fn estimate(markup: &str, words_per_minute: usize) -> ReadingTime {
    let word_count = count_words(markup);
    ReadingTime {
        word_count,
        minutes: reading_minutes(word_count, words_per_minute),
    }
}

/// Human-readable label for a minute count.
pub fn format_reading_time(minutes: usize) -> String {
    match minutes {
        0 => "Less than 1 minute".to_string(),
        1 => "1 minute".to_string(),
        n => format!("{} minutes", n),
    }
}
