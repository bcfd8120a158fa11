//! Small read-only helpers over the parsed document tree.

use scraper::{ElementRef, Html, Selector};

/// Flattened text of an element and all of its descendants.
pub fn text_content(element: &ElementRef) -> String {
    element.text().collect::<String>()
}

/// Trimmed text length in characters.
pub fn text_length(element: &ElementRef) -> usize {
    text_content(element).trim().chars().count()
}

/// First element in document order matching `selector`.
pub fn select_first<'a>(document: &'a Html, selector: &Selector) -> Option<ElementRef<'a>> {
    document.select(selector).next()
}

/// Number of element nodes in the document.
pub fn count_elements(document: &Html) -> usize {
    document
        .tree
        .nodes()
        .filter(|node| node.value().is_element())
        .count()
}

/// Parse a list of selector strings, keeping their order.
pub fn parse_selectors<S: AsRef<str>>(selectors: &[S]) -> Result<Vec<Selector>, String> {
    selectors
        .iter()
        .map(|s| Selector::parse(s.as_ref()).map_err(|_| s.as_ref().to_string()))
        .collect()
}

/// The parent of `element`, if that parent is itself an element.
pub fn parent_element<'a>(element: &ElementRef<'a>) -> Option<ElementRef<'a>> {
    element.parent().and_then(ElementRef::wrap)
}

/// Append `text` escaped for use as element content.
pub fn escape_text(text: &str, out: &mut String) {
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '\u{a0}' => out.push_str("&nbsp;"),
            _ => out.push(c),
        }
    }
}

/// Append `value` escaped for use inside a double-quoted attribute.
pub fn escape_attr(value: &str, out: &mut String) {
    for c in value.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '"' => out.push_str("&quot;"),
            '\u{a0}' => out.push_str("&nbsp;"),
            _ => out.push(c),
        }
    }
}
