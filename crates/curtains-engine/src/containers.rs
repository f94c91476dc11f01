//! Recursive descent over literal `<container>` block markers.
//!
//! Each top-level container in a blob is cut out, its body is parsed to a
//! finished subtree (nested containers first, then prose conversion, then
//! assembly), and the block is replaced in the outer text by a unique
//! placeholder token. By the time assembly runs on the outer tree, every
//! container in the side table is already a complete subtree.
//!
//! Matching is balanced: an inner container of the same tag bumps a depth
//! counter so an outer tag finds its own close, not the lexically next one.

use std::collections::HashMap;
use std::sync::LazyLock;

use regex::Regex;
use uuid::Uuid;

use crate::error::ParseError;
use crate::limits::Limits;
use crate::models::ContentNode;
use crate::validate::{validate_class_name, validate_nesting_depth};
use crate::{assemble, prose};

static TAG_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)</?container\b[^>]*>").expect("container tag pattern"));

static CLASS_ATTR_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)\bclass\s*=\s*(?:"([^"]*)"|'([^']*)')"#).expect("class attribute pattern")
});

/// A parsed container: its validated classes and fully-built children.
#[derive(Debug, Clone, PartialEq)]
pub struct ContainerNode {
    pub classes: Vec<String>,
    pub children: Vec<ContentNode>,
}

impl ContainerNode {
    pub fn into_node(self) -> ContentNode {
        ContentNode::Container {
            classes: self.classes,
            children: self.children,
        }
    }
}

/// Prose text with container blocks replaced by placeholder tokens, plus
/// the side table mapping each token to its subtree.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedContainers {
    pub marked: String,
    pub containers: HashMap<String, ContainerNode>,
}

pub fn parse_containers(text: &str, limits: &Limits) -> Result<ParsedContainers, ParseError> {
    extract(text, 0, limits)
}

/// Keys are random per invocation so user text can never alias a token and
/// parallel slide parses can never collide.
fn fresh_key() -> String {
    format!("@@container:{}@@", Uuid::new_v4().simple())
}

fn is_close_tag(tag: &str) -> bool {
    tag.starts_with("</")
}

/// One level of extraction. `depth` counts enclosing containers, so a
/// container found here sits at `depth + 1`.
fn extract(text: &str, depth: usize, limits: &Limits) -> Result<ParsedContainers, ParseError> {
    let mut containers = HashMap::new();
    let mut marked = String::with_capacity(text.len());
    let mut pos = 0;

    while let Some(open) = TAG_RE.find_at(text, pos) {
        if is_close_tag(open.as_str()) {
            return Err(ParseError::structural(format!(
                "closing </container> at offset {} has no matching open tag",
                open.start()
            )));
        }

        let this_depth = depth + 1;
        validate_nesting_depth(this_depth, limits)?;

        let classes = parse_classes(open.as_str())?;
        let close = find_matching_close(text, open.end())?;

        let inner = &text[open.end()..close.0];
        let nested = extract(inner, this_depth, limits)?;
        let tree = prose::to_tree(&nested.marked);
        let root = assemble::build_ast(tree, nested.containers)?;
        let children = match root {
            ContentNode::Root { children } => children,
            _ => unreachable!("prose conversion always yields a root"),
        };

        let key = fresh_key();
        marked.push_str(&text[pos..open.start()]);
        marked.push_str(&key);
        containers.insert(key, ContainerNode { classes, children });
        pos = close.1;
    }

    marked.push_str(&text[pos..]);
    Ok(ParsedContainers { marked, containers })
}

/// Class attribute of an open tag; hard failure on a malformed name. An
/// absent attribute and an explicitly empty one both mean "no classes".
fn parse_classes(open_tag: &str) -> Result<Vec<String>, ParseError> {
    let Some(caps) = CLASS_ATTR_RE.captures(open_tag) else {
        return Ok(vec![]);
    };
    let value = caps
        .get(1)
        .or_else(|| caps.get(2))
        .map(|m| m.as_str())
        .unwrap_or_default();
    validate_class_name(value)?;
    if value.is_empty() {
        Ok(vec![])
    } else {
        Ok(vec![value.to_string()])
    }
}

/// Scans past `start` for the close tag balancing the open tag just before
/// it. Returns `(close_start, close_end)` byte offsets.
fn find_matching_close(text: &str, start: usize) -> Result<(usize, usize), ParseError> {
    let mut level = 1usize;
    let mut pos = start;

    while let Some(tag) = TAG_RE.find_at(text, pos) {
        if is_close_tag(tag.as_str()) {
            level -= 1;
            if level == 0 {
                return Ok((tag.start(), tag.end()));
            }
        } else {
            level += 1;
        }
        pos = tag.end();
    }

    Err(ParseError::structural(
        "unclosed <container> block: missing </container>",
    ))
}
