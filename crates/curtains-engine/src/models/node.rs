use serde::{Deserialize, Serialize};

/// Column alignment declared in a table's alignment row, propagated onto
/// every cell of that column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Align {
    Left,
    Center,
    Right,
}

/// The unified content tree for one slide.
///
/// Containers are first-class nodes in the same grammar as prose content,
/// so a single exhaustive match covers everything a slide can hold.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum ContentNode {
    Root {
        children: Vec<ContentNode>,
    },
    Heading {
        depth: u8,
        children: Vec<ContentNode>,
    },
    Paragraph {
        children: Vec<ContentNode>,
    },
    Text {
        value: String,
        #[serde(default, skip_serializing_if = "is_false")]
        bold: bool,
        #[serde(default, skip_serializing_if = "is_false")]
        italic: bool,
    },
    Link {
        url: String,
        children: Vec<ContentNode>,
    },
    Image {
        url: String,
        alt: String,
        #[serde(default, skip_serializing_if = "Vec::is_empty")]
        classes: Vec<String>,
    },
    List {
        ordered: bool,
        children: Vec<ContentNode>,
    },
    ListItem {
        children: Vec<ContentNode>,
    },
    Code {
        value: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        lang: Option<String>,
    },
    Table {
        children: Vec<ContentNode>,
    },
    TableRow {
        children: Vec<ContentNode>,
    },
    TableCell {
        children: Vec<ContentNode>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        align: Option<Align>,
        #[serde(default, skip_serializing_if = "is_false")]
        header: bool,
    },
    Container {
        classes: Vec<String>,
        children: Vec<ContentNode>,
    },
}

fn is_false(b: &bool) -> bool {
    !*b
}

impl ContentNode {
    /// Plain text node with no emphasis flags.
    pub fn text(value: impl Into<String>) -> Self {
        ContentNode::Text {
            value: value.into(),
            bold: false,
            italic: false,
        }
    }

    pub fn root(children: Vec<ContentNode>) -> Self {
        ContentNode::Root { children }
    }

    /// Child list of this node, empty for leaf variants.
    pub fn children(&self) -> &[ContentNode] {
        match self {
            ContentNode::Root { children }
            | ContentNode::Heading { children, .. }
            | ContentNode::Paragraph { children }
            | ContentNode::Link { children, .. }
            | ContentNode::List { children, .. }
            | ContentNode::ListItem { children }
            | ContentNode::Table { children }
            | ContentNode::TableRow { children }
            | ContentNode::TableCell { children, .. }
            | ContentNode::Container { children, .. } => children,
            ContentNode::Text { .. } | ContentNode::Image { .. } | ContentNode::Code { .. } => &[],
        }
    }

    /// Mutable child list, `None` for leaf variants.
    pub(crate) fn children_mut(&mut self) -> Option<&mut Vec<ContentNode>> {
        match self {
            ContentNode::Root { children }
            | ContentNode::Heading { children, .. }
            | ContentNode::Paragraph { children }
            | ContentNode::Link { children, .. }
            | ContentNode::List { children, .. }
            | ContentNode::ListItem { children }
            | ContentNode::Table { children }
            | ContentNode::TableRow { children }
            | ContentNode::TableCell { children, .. }
            | ContentNode::Container { children, .. } => Some(children),
            ContentNode::Text { .. } | ContentNode::Image { .. } | ContentNode::Code { .. } => None,
        }
    }
}
