//! Substitutes container placeholders back into the prose tree.
//!
//! By the time this runs every container subtree is already fully built, so
//! assembly is a flat rewrite: each visit returns a fresh child list, no
//! parent pointers, no second parse. Every placeholder must resolve exactly
//! once; anything else is an internal-consistency defect surfaced as a
//! structural error.

use std::collections::HashMap;
use std::sync::LazyLock;

use regex::Regex;

use crate::containers::ContainerNode;
use crate::error::ParseError;
use crate::models::ContentNode;

/// Placeholder tokens as produced by the container parser: a fixed prefix
/// and a 32-hex-digit random key.
pub(crate) static PLACEHOLDER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"@@container:[0-9a-f]{32}@@").expect("placeholder pattern"));

/// Replaces every placeholder in `tree` with its container subtree.
///
/// Consumes the map: a token missing from it, or an entry left unconsumed
/// at the end, fails hard.
pub fn build_ast(
    tree: ContentNode,
    mut containers: HashMap<String, ContainerNode>,
) -> Result<ContentNode, ParseError> {
    let tree = resolve_node(tree, &mut containers)?;
    if !containers.is_empty() {
        let mut keys: Vec<&String> = containers.keys().collect();
        keys.sort();
        return Err(ParseError::structural(format!(
            "{} container placeholder(s) were never referenced in the tree: {keys:?}",
            containers.len()
        )));
    }
    Ok(tree)
}

fn resolve_node(
    mut node: ContentNode,
    containers: &mut HashMap<String, ContainerNode>,
) -> Result<ContentNode, ParseError> {
    if let Some(children) = node.children_mut() {
        let old = std::mem::take(children);
        *children = resolve_children(old, containers)?;
    }
    Ok(node)
}

fn resolve_children(
    children: Vec<ContentNode>,
    containers: &mut HashMap<String, ContainerNode>,
) -> Result<Vec<ContentNode>, ParseError> {
    let mut out = Vec::with_capacity(children.len());
    for child in children {
        match child {
            ContentNode::Text {
                value,
                bold,
                italic,
            } if PLACEHOLDER_RE.is_match(&value) => {
                split_placeholder_run(&value, bold, italic, containers, &mut out)?;
            }
            ContentNode::Paragraph { children: inner } => {
                let inner = resolve_children(inner, containers)?;
                // A paragraph never wraps a lone container.
                if matches!(inner.as_slice(), [ContentNode::Container { .. }]) {
                    out.push(inner.into_iter().next().expect("one child"));
                } else {
                    out.push(ContentNode::Paragraph { children: inner });
                }
            }
            other => out.push(resolve_node(other, containers)?),
        }
    }
    Ok(out)
}

/// Splits a text run around its placeholder tokens: prose before, the
/// container, prose after, as siblings. Whitespace-only remainders drop.
fn split_placeholder_run(
    value: &str,
    bold: bool,
    italic: bool,
    containers: &mut HashMap<String, ContainerNode>,
    out: &mut Vec<ContentNode>,
) -> Result<(), ParseError> {
    let mut last = 0;
    for m in PLACEHOLDER_RE.find_iter(value) {
        let before = &value[last..m.start()];
        if !before.trim().is_empty() {
            out.push(ContentNode::Text {
                value: before.to_string(),
                bold,
                italic,
            });
        }
        let container = containers.remove(m.as_str()).ok_or_else(|| {
            ParseError::structural(format!("unresolved container placeholder {:?}", m.as_str()))
        })?;
        out.push(container.into_node());
        last = m.end();
    }
    let rest = &value[last..];
    if !rest.trim().is_empty() {
        out.push(ContentNode::Text {
            value: rest.to_string(),
            bold,
            italic,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn key() -> String {
        "@@container:0123456789abcdef0123456789abcdef@@".to_string()
    }

    fn sample_container() -> ContainerNode {
        ContainerNode {
            classes: vec!["highlight".to_string()],
            children: vec![ContentNode::text("inner")],
        }
    }

    fn map_with(key: String, container: ContainerNode) -> HashMap<String, ContainerNode> {
        HashMap::from([(key, container)])
    }

    #[test]
    fn paragraph_wrapping_lone_placeholder_is_replaced() {
        let tree = ContentNode::root(vec![ContentNode::Paragraph {
            children: vec![ContentNode::text(key())],
        }]);
        let ast = build_ast(tree, map_with(key(), sample_container())).unwrap();
        assert_eq!(
            ast,
            ContentNode::root(vec![ContentNode::Container {
                classes: vec!["highlight".to_string()],
                children: vec![ContentNode::text("inner")],
            }])
        );
    }

    #[test]
    fn placeholder_inside_prose_splits_the_run() {
        let tree = ContentNode::root(vec![ContentNode::Paragraph {
            children: vec![ContentNode::text(format!("before {} after", key()))],
        }]);
        let ast = build_ast(tree, map_with(key(), sample_container())).unwrap();
        let ContentNode::Root { children } = &ast else {
            panic!("expected root");
        };
        let ContentNode::Paragraph { children } = &children[0] else {
            panic!("expected paragraph");
        };
        assert_eq!(children.len(), 3);
        assert_eq!(children[0], ContentNode::text("before "));
        assert!(matches!(&children[1], ContentNode::Container { .. }));
        assert_eq!(children[2], ContentNode::text(" after"));
    }

    #[test]
    fn tree_without_placeholders_passes_through() {
        let tree = ContentNode::root(vec![ContentNode::Heading {
            depth: 2,
            children: vec![ContentNode::text("t")],
        }]);
        let ast = build_ast(tree.clone(), HashMap::new()).unwrap();
        assert_eq!(ast, tree);
    }

    #[test]
    fn missing_key_is_a_structural_error() {
        let tree = ContentNode::root(vec![ContentNode::Paragraph {
            children: vec![ContentNode::text(key())],
        }]);
        let err = build_ast(tree, HashMap::new()).unwrap_err();
        assert!(matches!(err, ParseError::Structural { .. }));
    }

    #[test]
    fn unconsumed_entry_is_a_structural_error() {
        let tree = ContentNode::root(vec![]);
        let err = build_ast(tree, map_with(key(), sample_container())).unwrap_err();
        assert!(matches!(err, ParseError::Structural { .. }));
    }

    #[test]
    fn whitespace_around_placeholder_is_dropped() {
        let tree = ContentNode::root(vec![ContentNode::Paragraph {
            children: vec![ContentNode::text(format!("  {}\n", key()))],
        }]);
        let ast = build_ast(tree, map_with(key(), sample_container())).unwrap();
        let ContentNode::Root { children } = &ast else {
            panic!("expected root");
        };
        // Only the container remains, and the paragraph unwrapped around it.
        assert_eq!(children.len(), 1);
        assert!(matches!(&children[0], ContentNode::Container { .. }));
    }
}
