//! Splices raw `<img>` tags out of HTML-ish text runs. Only `src`, `alt`
//! and `class` are honored; every other attribute is dropped. Text around a
//! tag survives as sibling text nodes unless it is pure whitespace.

use std::sync::LazyLock;

use regex::Regex;

use crate::models::ContentNode;

static IMG_TAG_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)<img\b[^>]*>").expect("img tag pattern"));

static SRC_RE: LazyLock<Regex> = LazyLock::new(|| attr_pattern("src"));
static ALT_RE: LazyLock<Regex> = LazyLock::new(|| attr_pattern("alt"));
static CLASS_RE: LazyLock<Regex> = LazyLock::new(|| attr_pattern("class"));

fn attr_pattern(name: &str) -> Regex {
    Regex::new(&format!(
        r#"(?i)\b{name}\s*=\s*(?:"([^"]*)"|'([^']*)')"#
    ))
    .expect("attribute pattern")
}

fn attr_value(re: &Regex, tag: &str) -> Option<String> {
    re.captures(tag).map(|caps| {
        caps.get(1)
            .or_else(|| caps.get(2))
            .map(|m| m.as_str().to_string())
            .unwrap_or_default()
    })
}

fn image_from_tag(tag: &str) -> ContentNode {
    let classes = attr_value(&CLASS_RE, tag)
        .map(|v| v.split_whitespace().map(str::to_string).collect())
        .unwrap_or_default();
    ContentNode::Image {
        url: attr_value(&SRC_RE, tag).unwrap_or_default(),
        alt: attr_value(&ALT_RE, tag).unwrap_or_default(),
        classes,
    }
}

/// Turns one raw run into a node sequence: text before / image / text after,
/// repeated for as many tags as the run holds. A run with no image tags
/// comes back as a single text node, or nothing if it is only whitespace.
pub fn splice_images(run: &str) -> Vec<ContentNode> {
    let mut out = Vec::new();
    let mut last = 0;

    for m in IMG_TAG_RE.find_iter(run) {
        let before = &run[last..m.start()];
        if !before.trim().is_empty() {
            out.push(ContentNode::text(before));
        }
        out.push(image_from_tag(m.as_str()));
        last = m.end();
    }

    let rest = &run[last..];
    if !rest.trim().is_empty() {
        out.push(ContentNode::text(rest));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn plain_text_passes_through() {
        assert_eq!(splice_images("hello"), vec![ContentNode::text("hello")]);
    }

    #[test]
    fn whitespace_only_run_is_dropped() {
        assert_eq!(splice_images("  \n "), vec![]);
    }

    #[test]
    fn lone_img_with_all_attributes() {
        let out = splice_images(r#"<img src="cat.png" alt="a cat" class="big round">"#);
        assert_eq!(
            out,
            vec![ContentNode::Image {
                url: "cat.png".to_string(),
                alt: "a cat".to_string(),
                classes: vec!["big".to_string(), "round".to_string()],
            }]
        );
    }

    #[test]
    fn unknown_attributes_are_dropped() {
        let out = splice_images(r#"<img src="x.png" onerror="alert(1)" width="10">"#);
        assert_eq!(
            out,
            vec![ContentNode::Image {
                url: "x.png".to_string(),
                alt: String::new(),
                classes: vec![],
            }]
        );
    }

    #[test]
    fn text_around_tag_becomes_siblings() {
        let out = splice_images(r#"before <img src="a.png"> after"#);
        assert_eq!(out.len(), 3);
        assert_eq!(out[0], ContentNode::text("before "));
        assert!(matches!(&out[1], ContentNode::Image { url, .. } if url == "a.png"));
        assert_eq!(out[2], ContentNode::text(" after"));
    }

    #[test]
    fn self_closing_and_single_quotes() {
        let out = splice_images("<img src='b.png' alt='b'/>");
        assert_eq!(
            out,
            vec![ContentNode::Image {
                url: "b.png".to_string(),
                alt: "b".to_string(),
                classes: vec![],
            }]
        );
    }
}
