//! Lifts `<style>` blocks out of a text blob before any prose parsing, so
//! CSS never shows up in the content tree.

use std::sync::LazyLock;

use regex::Regex;

use crate::models::{StyleFragment, StyleScope};

// Non-greedy and dot-matches-newline so multiple blocks in one blob are
// captured separately, each possibly spanning lines.
static STYLE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)<style\b[^>]*>(.*?)</style\s*>").expect("style pattern"));

#[derive(Debug, Clone, PartialEq)]
pub struct ExtractedStyles {
    /// The input with every style block removed, trimmed of leading and
    /// trailing whitespace.
    pub content: String,
    /// One fragment per block, in source order. An empty block yields an
    /// empty-string fragment, not an error.
    pub styles: Vec<StyleFragment>,
}

pub fn extract_styles(text: &str, scope: StyleScope) -> ExtractedStyles {
    let mut styles = Vec::new();
    let mut content = String::with_capacity(text.len());
    let mut last = 0;

    for caps in STYLE_RE.captures_iter(text) {
        let whole = caps.get(0).expect("capture 0 always present");
        let css = caps.get(1).expect("style body group").as_str().trim();
        styles.push(StyleFragment {
            css: css.to_string(),
            scope,
        });
        content.push_str(&text[last..whole.start()]);
        last = whole.end();
    }
    content.push_str(&text[last..]);

    ExtractedStyles {
        content: content.trim().to_string(),
        styles,
    }
}
