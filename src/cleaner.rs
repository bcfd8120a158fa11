//! Sanitizing the winning container for display.
//!
//! The container is first copied into a standalone arena ([`ArticleCopy`]); every later
//! step mutates the copy only, so the caller's document is never touched. The pipeline
//! removes unwanted descendants, strips all attributes outside a small allowlist, gives
//! every image an `alt` text, and serializes the children of the copy.

use crate::constants::{ALLOWED_ATTRIBUTES, DEFAULT_IMAGE_ALT, UNWANTED_SELECTORS, VOID_ELEMENTS};
use crate::dom_utils::{escape_attr, escape_text};
use ego_tree::NodeId;
use once_cell::sync::Lazy;
use scraper::{ElementRef, Node, Selector};
use std::collections::HashMap;

static UNWANTED: Lazy<Vec<Selector>> = Lazy::new(|| {
    UNWANTED_SELECTORS
        .iter()
        .filter_map(|s| Selector::parse(s).ok())
        .collect()
});

/// Elements whose text children are serialized without escaping.
const RAW_TEXT_ELEMENTS: &[&str] = &[
    "style", "script", "xmp", "iframe", "noembed", "noframes", "plaintext", "noscript",
];

#[derive(Debug, Clone, PartialEq)]
enum CopyData {
    Element {
        name: String,
        attrs: Vec<(String, String)>,
    },
    Text(String),
    Comment(String),
}

#[derive(Debug, Clone)]
struct CopyNode {
    data: CopyData,
    parent: Option<usize>,
    children: Vec<usize>,
}

/// An owned copy of an element subtree, addressed by index.
///
/// Index 0 is the copied element itself. Detached nodes stay in the arena but are no
/// longer reachable from the root.
#[derive(Debug, Clone)]
pub struct ArticleCopy {
    nodes: Vec<CopyNode>,
    origin: HashMap<NodeId, usize>,
}

impl ArticleCopy {
    /// Copy `element` and all of its descendants.
    pub fn from_element(element: &ElementRef) -> Self {
        let mut copy = ArticleCopy {
            nodes: Vec::new(),
            origin: HashMap::new(),
        };

        let mut stack = vec![(**element, None)];
        while let Some((node, parent)) = stack.pop() {
            let data = match node.value() {
                Node::Element(el) => CopyData::Element {
                    name: el.name().to_string(),
                    attrs: el
                        .attrs()
                        .map(|(name, value)| (name.to_string(), value.to_string()))
                        .collect(),
                },
                Node::Text(text) => CopyData::Text(text.text.to_string()),
                Node::Comment(comment) => CopyData::Comment(comment.comment.to_string()),
                _ => continue,
            };

            let index = copy.nodes.len();
            copy.nodes.push(CopyNode {
                data,
                parent,
                children: Vec::new(),
            });
            copy.origin.insert(node.id(), index);
            if let Some(parent) = parent {
                copy.nodes[parent].children.push(index);
            }

            // reversed so children pop in document order
            let children: Vec<_> = node.children().collect();
            for child in children.into_iter().rev() {
                stack.push((child, Some(index)));
            }
        }

        copy
    }

    /// Index of the copy of a source node, if it was copied.
    fn index_of(&self, source: NodeId) -> Option<usize> {
        self.origin.get(&source).copied()
    }

    /// Unlink a node from its parent.
    fn detach(&mut self, index: usize) {
        if let Some(parent) = self.nodes[index].parent.take() {
            self.nodes[parent].children.retain(|&child| child != index);
        }
    }

    /// Remove every descendant of `source` matching one of `selectors`.
    ///
    /// Matching runs against the read-only source tree; removal happens on the copy.
    pub fn remove_matching(&mut self, source: &ElementRef, selectors: &[Selector]) -> usize {
        let mut removed = 0;
        for selector in selectors {
            for element in source.select(selector) {
                if let Some(index) = self.index_of(element.id()) {
                    if index != 0 && self.nodes[index].parent.is_some() {
                        self.detach(index);
                        removed += 1;
                    }
                }
            }
        }
        removed
    }

    /// Indices of all nodes reachable from the root, root excluded, in document order.
    fn descendants(&self) -> Vec<usize> {
        let mut order = Vec::new();
        let mut stack: Vec<usize> = self.nodes[0].children.iter().rev().copied().collect();
        while let Some(index) = stack.pop() {
            order.push(index);
            stack.extend(self.nodes[index].children.iter().rev().copied());
        }
        order
    }

    /// Drop every attribute not in the allowlist. Survivors keep their source order.
    pub fn strip_attributes(&mut self) {
        for index in self.descendants() {
            if let CopyData::Element { attrs, .. } = &mut self.nodes[index].data {
                attrs.retain(|(name, _)| ALLOWED_ATTRIBUTES.contains(&name.as_str()));
            }
        }
    }

    /// Give every image without a usable `alt` the default text.
    pub fn ensure_image_alt(&mut self) {
        for index in self.descendants() {
            let CopyData::Element { name, attrs } = &mut self.nodes[index].data else {
                continue;
            };
            if name.as_str() != "img" {
                continue;
            }
            match attrs.iter_mut().find(|(attr, _)| attr == "alt") {
                Some((_, value)) if !value.is_empty() => {}
                Some((_, value)) => *value = DEFAULT_IMAGE_ALT.to_string(),
                None => attrs.push(("alt".to_string(), DEFAULT_IMAGE_ALT.to_string())),
            }
        }
    }

    /// Serialized markup of the root's children.
    pub fn inner_html(&self) -> String {
        let mut out = String::new();
        let raw = self.is_raw_text(0);
        let mut stack: Vec<Frame> = self.nodes[0]
            .children
            .iter()
            .rev()
            .map(|&child| Frame::Open(child, raw))
            .collect();

        while let Some(frame) = stack.pop() {
            let (index, raw_parent) = match frame {
                Frame::Open(index, raw_parent) => (index, raw_parent),
                Frame::Close(index) => {
                    if let CopyData::Element { name, .. } = &self.nodes[index].data {
                        out.push_str("</");
                        out.push_str(name);
                        out.push('>');
                    }
                    continue;
                }
            };

            match &self.nodes[index].data {
                CopyData::Text(text) if raw_parent => out.push_str(text),
                CopyData::Text(text) => escape_text(text, &mut out),
                CopyData::Comment(comment) => {
                    out.push_str("<!--");
                    out.push_str(comment);
                    out.push_str("-->");
                }
                CopyData::Element { name, attrs } => {
                    out.push('<');
                    out.push_str(name);
                    for (attr, value) in attrs {
                        out.push(' ');
                        out.push_str(attr);
                        out.push_str("=\"");
                        escape_attr(value, &mut out);
                        out.push('"');
                    }
                    out.push('>');
                    if VOID_ELEMENTS.contains(&name.as_str()) {
                        continue;
                    }
                    let raw = self.is_raw_text(index);
                    stack.push(Frame::Close(index));
                    stack.extend(
                        self.nodes[index]
                            .children
                            .iter()
                            .rev()
                            .map(|&child| Frame::Open(child, raw)),
                    );
                }
            }
        }
        out
    }

    fn is_raw_text(&self, index: usize) -> bool {
        matches!(&self.nodes[index].data, CopyData::Element { name, .. } if RAW_TEXT_ELEMENTS.contains(&name.as_str()))
    }
}

/// Serializer work item: open a node (with whether its parent is raw text), or close an element.
enum Frame {
    Open(usize, bool),
    Close(usize),
}

/// Produce display markup for `element` without modifying it.
///
/// Removal runs before attribute stripping so discarded subtrees are never visited.
pub fn sanitize(element: &ElementRef) -> String {
    let mut copy = ArticleCopy::from_element(element);
    copy.remove_matching(element, &UNWANTED);
    copy.strip_attributes();
    copy.ensure_image_alt();
    copy.inner_html()
}

#[cfg(test)]
mod tests {
    use super::*;
    use scraper::Html;

    fn root(doc: &Html) -> ElementRef<'_> {
        doc.select(&Selector::parse("#root").unwrap()).next().unwrap()
    }

    fn sanitize_fragment(markup: &str) -> String {
        let doc = Html::parse_fragment(markup);
        sanitize(&doc.root_element())
    }

    #[test]
    fn test_unwanted_selectors_all_compile() {
        assert_eq!(UNWANTED.len(), UNWANTED_SELECTORS.len());
    }

    #[test]
    fn test_removes_disallowed_tags() {
        let doc = Html::parse_fragment(
            r#"<div id="root"><nav>menu</nav><p>keep</p><script>x()</script><aside>aside</aside><footer>f</footer></div>"#,
        );
        assert_eq!(sanitize(&root(&doc)), "<p>keep</p>");
    }

    #[test]
    fn test_removes_class_and_id_substrings() {
        let doc = Html::parse_fragment(
            r#"<div id="root"><div class="lead">gone: contains "ad"</div><p id="social-bar">gone</p><span class="sharebox">kept</span><p class="share">gone</p><p>text</p></div>"#,
        );
        assert_eq!(sanitize(&root(&doc)), "<span>kept</span><p>text</p>");
    }

    #[test]
    fn test_strips_attributes_to_allowlist() {
        let doc = Html::parse_fragment(
            r#"<div id="root"><a href="/x" style="color:red" title="t" onclick="evil()">link</a></div>"#,
        );
        assert_eq!(sanitize(&root(&doc)), r#"<a href="/x" title="t">link</a>"#);
    }

    #[test]
    fn test_kept_attributes_keep_source_order() {
        let doc = Html::parse_fragment(
            r#"<div id="root"><a title="t" class="x" href="/x">link</a><img alt="" title="T" src="a.png"></div>"#,
        );
        assert_eq!(
            sanitize(&root(&doc)),
            r#"<a title="t" href="/x">link</a><img alt="Image" title="T" src="a.png">"#
        );
    }

    #[test]
    fn test_deeply_nested_content() {
        let depth = 20_000;
        let markup = format!(
            r#"<div id="root"><p>{}</p>{}deep{}</div>"#,
            "x".repeat(400),
            "<span>".repeat(depth),
            "</span>".repeat(depth)
        );
        let doc = Html::parse_fragment(&markup);
        let out = sanitize(&root(&doc));
        assert_eq!(out.matches("<span>").count(), depth);
        assert_eq!(out.matches("</span>").count(), depth);
        assert!(out.contains("<span>deep</span>"));
    }

    #[test]
    fn test_images_get_alt() {
        let doc = Html::parse_fragment(
            r#"<div id="root"><img src="a.png"><img src="b.png" alt="B"><img src="c.png" alt="" title="C"></div>"#,
        );
        assert_eq!(
            sanitize(&root(&doc)),
            r#"<img src="a.png" alt="Image"><img src="b.png" alt="B"><img src="c.png" alt="Image" title="C">"#
        );
    }

    #[test]
    fn test_source_tree_is_untouched() {
        let doc = Html::parse_fragment(
            r#"<div id="root"><p class="intro" data-x="1">keep</p><nav>menu</nav><img src="a.png"></div>"#,
        );
        let before = doc.html();
        let _ = sanitize(&root(&doc));
        assert_eq!(doc.html(), before);
        let nav = Selector::parse("nav").unwrap();
        assert_eq!(doc.select(&nav).count(), 1);
    }

    #[test]
    fn test_escapes_text_and_attributes() {
        let doc = Html::parse_fragment(
            r#"<div id="root"><p title="a &quot;b&quot;">1 &lt; 2 &amp; 3</p></div>"#,
        );
        assert_eq!(
            sanitize(&root(&doc)),
            r#"<p title="a &quot;b&quot;">1 &lt; 2 &amp; 3</p>"#
        );
    }

    #[test]
    fn test_sanitize_is_idempotent() {
        let doc = Html::parse_fragment(
            r#"<div id="root">
                <h2 class="headline" id="top">Heading</h2>
                <p data-track="1">First, paragraph &amp; more.</p>
                <!-- note -->
                <figure><img src="p.jpg" width="10"><figcaption>Cap</figcaption></figure>
                <div class="social-links"><a href="/s">share</a></div>
                <ul><li><a href="/a" rel="nofollow">A</a></li></ul>
                <br>
            </div>"#,
        );
        let once = sanitize(&root(&doc));
        let twice = sanitize_fragment(&once);
        assert_eq!(once, twice);
        assert!(!once.contains("social"));
        assert!(once.contains(r#"<img src="p.jpg" alt="Image">"#));
    }

    #[test]
    fn test_copy_keeps_document_order() {
        let doc = Html::parse_fragment(r#"<div id="root"><b>1</b><i>2</i><u>3</u></div>"#);
        let copy = ArticleCopy::from_element(&root(&doc));
        assert_eq!(copy.inner_html(), "<b>1</b><i>2</i><u>3</u>");
    }
}
