//! Converts a text blob (with container placeholders embedded) into the
//! unified content tree.
//!
//! Block and inline grammar is delegated to `pulldown-cmark` with the table
//! extension enabled; this module owns the normalization layer that reshapes
//! the event stream into [`ContentNode`]s: emphasis collapses onto text
//! leaves, raw `<img>` tags are spliced out of HTML runs, table structure is
//! made uniform, and placeholder text passes through verbatim.

pub mod images;

use pulldown_cmark::{Alignment, CodeBlockKind, Event, Options, Parser, Tag, TagEnd};

use crate::models::{Align, ContentNode};

/// Parses `text` into a root node. Deterministic: the same input always
/// produces the same tree, down to sibling order.
pub fn to_tree(text: &str) -> ContentNode {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    let parser = Parser::new_ext(text, options);

    let mut builder = TreeBuilder::new();
    for event in parser {
        builder.event(event);
    }
    builder.finish()
}

struct TreeBuilder {
    stack: Vec<ContentNode>,
    bold_depth: usize,
    italic_depth: usize,
    table_aligns: Vec<Option<Align>>,
    in_table_head: bool,
}

impl TreeBuilder {
    fn new() -> Self {
        Self {
            stack: vec![ContentNode::root(vec![])],
            bold_depth: 0,
            italic_depth: 0,
            table_aligns: vec![],
            in_table_head: false,
        }
    }

    fn finish(mut self) -> ContentNode {
        // Unbalanced events would leave extras; pulldown-cmark always closes
        // what it opens, so anything beyond the root is attached defensively.
        while self.stack.len() > 1 {
            self.close();
        }
        self.stack.pop().expect("root node")
    }

    fn event(&mut self, event: Event<'_>) {
        match event {
            Event::Start(tag) => self.start(tag),
            Event::End(tag) => self.end(tag),
            Event::Text(text) => self.push_text(&text),
            Event::Code(code) => self.append(ContentNode::Code {
                value: code.to_string(),
                lang: None,
            }),
            Event::Html(html) | Event::InlineHtml(html) => {
                for node in images::splice_images(&html) {
                    self.append(node);
                }
            }
            Event::SoftBreak | Event::HardBreak => self.push_text("\n"),
            // Rules, footnotes, task markers and math are outside the slide
            // grammar.
            _ => {}
        }
    }

    fn start(&mut self, tag: Tag<'_>) {
        match tag {
            Tag::Paragraph => self.open(ContentNode::Paragraph { children: vec![] }),
            Tag::Heading { level, .. } => self.open(ContentNode::Heading {
                depth: level as u8,
                children: vec![],
            }),
            Tag::Link { dest_url, .. } => self.open(ContentNode::Link {
                url: dest_url.to_string(),
                children: vec![],
            }),
            Tag::Image { dest_url, .. } => self.open(ContentNode::Image {
                url: dest_url.to_string(),
                alt: String::new(),
                classes: vec![],
            }),
            Tag::List(start) => self.open(ContentNode::List {
                ordered: start.is_some(),
                children: vec![],
            }),
            Tag::Item => self.open(ContentNode::ListItem { children: vec![] }),
            Tag::CodeBlock(kind) => {
                let lang = match kind {
                    CodeBlockKind::Fenced(info) => info
                        .split_whitespace()
                        .next()
                        .map(str::to_string)
                        .filter(|l| !l.is_empty()),
                    CodeBlockKind::Indented => None,
                };
                self.open(ContentNode::Code {
                    value: String::new(),
                    lang,
                });
            }
            Tag::Table(alignments) => {
                self.table_aligns = alignments.iter().map(|a| convert_align(*a)).collect();
                self.open(ContentNode::Table { children: vec![] });
            }
            Tag::TableHead => {
                // The header row arrives as a bare TableHead; it becomes an
                // ordinary row whose cells carry the header flag.
                self.in_table_head = true;
                self.open(ContentNode::TableRow { children: vec![] });
            }
            Tag::TableRow => self.open(ContentNode::TableRow { children: vec![] }),
            Tag::TableCell => {
                let column = self
                    .stack
                    .last()
                    .map(|row| row.children().len())
                    .unwrap_or(0);
                let align = self.table_aligns.get(column).copied().flatten();
                self.open(ContentNode::TableCell {
                    children: vec![],
                    align,
                    header: self.in_table_head,
                });
            }
            Tag::Strong => self.bold_depth += 1,
            Tag::Emphasis => self.italic_depth += 1,
            // Block quotes and other unmodeled structure are transparent:
            // their children flow into the enclosing node.
            _ => {}
        }
    }

    fn end(&mut self, tag: TagEnd) {
        match tag {
            TagEnd::Paragraph
            | TagEnd::Heading(_)
            | TagEnd::Link
            | TagEnd::Image
            | TagEnd::List(_)
            | TagEnd::Item
            | TagEnd::CodeBlock
            | TagEnd::Table
            | TagEnd::TableRow
            | TagEnd::TableCell => self.close(),
            TagEnd::TableHead => {
                self.close();
                self.in_table_head = false;
            }
            TagEnd::Strong => self.bold_depth = self.bold_depth.saturating_sub(1),
            TagEnd::Emphasis => self.italic_depth = self.italic_depth.saturating_sub(1),
            _ => {}
        }
    }

    fn open(&mut self, node: ContentNode) {
        self.stack.push(node);
    }

    /// Pops the node under construction, normalizes it, and attaches it to
    /// its parent.
    fn close(&mut self) {
        let Some(node) = self.stack.pop() else {
            return;
        };
        let node = match node {
            // A paragraph holding exactly one image collapses to the image.
            ContentNode::Paragraph { children } if is_single_image(&children) => {
                children.into_iter().next().expect("one child")
            }
            // A paragraph emptied by whitespace-splicing disappears.
            ContentNode::Paragraph { children } if children.is_empty() => return,
            // Cells stay structurally uniform: never childless.
            ContentNode::TableCell {
                children,
                align,
                header,
            } => {
                let children = if children.is_empty() {
                    vec![ContentNode::text("")]
                } else {
                    children
                };
                ContentNode::TableCell {
                    children,
                    align,
                    header,
                }
            }
            ContentNode::Code { mut value, lang } => {
                if value.ends_with('\n') {
                    value.pop();
                }
                ContentNode::Code { value, lang }
            }
            other => other,
        };
        self.append(node);
    }

    fn append(&mut self, node: ContentNode) {
        if let Some(parent) = self.stack.last_mut() {
            match parent {
                // Inside an image, nested content only contributes alt text.
                ContentNode::Image { alt, .. } => {
                    if let ContentNode::Text { value, .. } = node {
                        alt.push_str(&value);
                    }
                }
                _ => {
                    if let Some(children) = parent.children_mut() {
                        children.push(node);
                    }
                }
            }
        }
    }

    fn push_text(&mut self, text: &str) {
        if text.is_empty() {
            return;
        }
        let bold = self.bold_depth > 0;
        let italic = self.italic_depth > 0;

        match self.stack.last_mut() {
            Some(ContentNode::Image { alt, .. }) => {
                alt.push_str(text);
                return;
            }
            Some(ContentNode::Code { value, .. }) => {
                value.push_str(text);
                return;
            }
            _ => {}
        }

        // Merge into the preceding text run when the flags match, so
        // soft-broken lines stay one node and sibling order stays stable.
        if let Some(children) = self.stack.last_mut().and_then(|p| p.children_mut()) {
            if let Some(ContentNode::Text {
                value,
                bold: b,
                italic: i,
            }) = children.last_mut()
            {
                if *b == bold && *i == italic {
                    value.push_str(text);
                    return;
                }
            }
            children.push(ContentNode::Text {
                value: text.to_string(),
                bold,
                italic,
            });
        }
    }
}

fn is_single_image(children: &[ContentNode]) -> bool {
    matches!(children, [ContentNode::Image { .. }])
}

fn convert_align(alignment: Alignment) -> Option<Align> {
    match alignment {
        Alignment::None => None,
        Alignment::Left => Some(Align::Left),
        Alignment::Center => Some(Align::Center),
        Alignment::Right => Some(Align::Right),
    }
}
