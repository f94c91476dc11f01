//! Emits HTML for a slide's content tree. All text and attribute values go
//! through `html-escape`; node structure maps one-to-one onto tags.

use curtains_engine::{Align, ContentNode};
use html_escape::{encode_double_quoted_attribute, encode_text};

/// Renders a node sequence (typically a root's children) to an HTML string.
pub fn render_nodes(nodes: &[ContentNode]) -> String {
    let mut out = String::new();
    for node in nodes {
        render_node(node, &mut out);
    }
    out
}

fn render_node(node: &ContentNode, out: &mut String) {
    match node {
        ContentNode::Root { children } => {
            for child in children {
                render_node(child, out);
            }
        }
        ContentNode::Heading { depth, children } => {
            let depth = (*depth).clamp(1, 6);
            out.push_str(&format!("<h{depth}>"));
            for child in children {
                render_node(child, out);
            }
            out.push_str(&format!("</h{depth}>"));
        }
        ContentNode::Paragraph { children } => {
            out.push_str("<p>");
            for child in children {
                render_node(child, out);
            }
            out.push_str("</p>");
        }
        ContentNode::Text {
            value,
            bold,
            italic,
        } => {
            if *bold {
                out.push_str("<strong>");
            }
            if *italic {
                out.push_str("<em>");
            }
            out.push_str(&encode_text(value));
            if *italic {
                out.push_str("</em>");
            }
            if *bold {
                out.push_str("</strong>");
            }
        }
        ContentNode::Link { url, children } => {
            out.push_str(&format!(
                "<a href=\"{}\">",
                encode_double_quoted_attribute(url)
            ));
            for child in children {
                render_node(child, out);
            }
            out.push_str("</a>");
        }
        ContentNode::Image { url, alt, classes } => {
            out.push_str(&format!(
                "<img src=\"{}\" alt=\"{}\"",
                encode_double_quoted_attribute(url),
                encode_double_quoted_attribute(alt)
            ));
            if !classes.is_empty() {
                out.push_str(&format!(
                    " class=\"{}\"",
                    encode_double_quoted_attribute(&classes.join(" "))
                ));
            }
            out.push_str(">");
        }
        ContentNode::List { ordered, children } => {
            let tag = if *ordered { "ol" } else { "ul" };
            out.push_str(&format!("<{tag}>"));
            for child in children {
                render_node(child, out);
            }
            out.push_str(&format!("</{tag}>"));
        }
        ContentNode::ListItem { children } => {
            out.push_str("<li>");
            for child in children {
                render_node(child, out);
            }
            out.push_str("</li>");
        }
        ContentNode::Code { value, lang } => {
            // One node kind covers fenced blocks and inline spans; a span
            // has no language and no newlines.
            let block = lang.is_some() || value.contains('\n');
            if block {
                match lang {
                    Some(lang) => out.push_str(&format!(
                        "<pre><code class=\"language-{}\">",
                        encode_double_quoted_attribute(lang)
                    )),
                    None => out.push_str("<pre><code>"),
                }
                out.push_str(&encode_text(value));
                out.push_str("</code></pre>");
            } else {
                out.push_str("<code>");
                out.push_str(&encode_text(value));
                out.push_str("</code>");
            }
        }
        ContentNode::Table { children } => {
            out.push_str("<table>");
            for child in children {
                render_node(child, out);
            }
            out.push_str("</table>");
        }
        ContentNode::TableRow { children } => {
            out.push_str("<tr>");
            for child in children {
                render_node(child, out);
            }
            out.push_str("</tr>");
        }
        ContentNode::TableCell {
            children,
            align,
            header,
        } => {
            let tag = if *header { "th" } else { "td" };
            match align {
                Some(align) => out.push_str(&format!(
                    "<{tag} style=\"text-align: {}\">",
                    align_keyword(*align)
                )),
                None => out.push_str(&format!("<{tag}>")),
            }
            for child in children {
                render_node(child, out);
            }
            out.push_str(&format!("</{tag}>"));
        }
        ContentNode::Container { classes, children } => {
            if classes.is_empty() {
                out.push_str("<div>");
            } else {
                out.push_str(&format!(
                    "<div class=\"{}\">",
                    encode_double_quoted_attribute(&classes.join(" "))
                ));
            }
            for child in children {
                render_node(child, out);
            }
            out.push_str("</div>");
        }
    }
}

fn align_keyword(align: Align) -> &'static str {
    match align {
        Align::Left => "left",
        Align::Center => "center",
        Align::Right => "right",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn heading_and_paragraph() {
        let html = render_nodes(&[
            ContentNode::Heading {
                depth: 2,
                children: vec![ContentNode::text("Hi")],
            },
            ContentNode::Paragraph {
                children: vec![ContentNode::text("body")],
            },
        ]);
        assert_eq!(html, "<h2>Hi</h2><p>body</p>");
    }

    #[test]
    fn text_flags_nest_strong_around_em() {
        let html = render_nodes(&[ContentNode::Text {
            value: "x".to_string(),
            bold: true,
            italic: true,
        }]);
        assert_eq!(html, "<strong><em>x</em></strong>");
    }

    #[test]
    fn text_content_is_escaped() {
        let html = render_nodes(&[ContentNode::text("<script>&")]);
        assert_eq!(html, "&lt;script&gt;&amp;");
    }

    #[test]
    fn image_with_classes() {
        let html = render_nodes(&[ContentNode::Image {
            url: "a.png".to_string(),
            alt: "an \"image\"".to_string(),
            classes: vec!["big".to_string(), "round".to_string()],
        }]);
        assert_eq!(
            html,
            "<img src=\"a.png\" alt=\"an &quot;image&quot;\" class=\"big round\">"
        );
    }

    #[test]
    fn fenced_code_vs_inline_code() {
        let block = render_nodes(&[ContentNode::Code {
            value: "fn main() {}".to_string(),
            lang: Some("rust".to_string()),
        }]);
        assert_eq!(
            block,
            "<pre><code class=\"language-rust\">fn main() {}</code></pre>"
        );

        let inline = render_nodes(&[ContentNode::Code {
            value: "x + 1".to_string(),
            lang: None,
        }]);
        assert_eq!(inline, "<code>x + 1</code>");
    }

    #[test]
    fn table_with_header_and_alignment() {
        let html = render_nodes(&[ContentNode::Table {
            children: vec![ContentNode::TableRow {
                children: vec![ContentNode::TableCell {
                    children: vec![ContentNode::text("h")],
                    align: Some(Align::Center),
                    header: true,
                }],
            }],
        }]);
        assert_eq!(
            html,
            "<table><tr><th style=\"text-align: center\">h</th></tr></table>"
        );
    }

    #[test]
    fn container_renders_as_classed_div() {
        let html = render_nodes(&[ContentNode::Container {
            classes: vec!["two-col".to_string()],
            children: vec![ContentNode::Paragraph {
                children: vec![ContentNode::text("a")],
            }],
        }]);
        assert_eq!(html, "<div class=\"two-col\"><p>a</p></div>");
    }

    #[test]
    fn classless_container_gets_a_bare_div() {
        let html = render_nodes(&[ContentNode::Container {
            classes: vec![],
            children: vec![],
        }]);
        assert_eq!(html, "<div></div>");
    }

    #[test]
    fn nested_list() {
        let html = render_nodes(&[ContentNode::List {
            ordered: true,
            children: vec![ContentNode::ListItem {
                children: vec![ContentNode::text("one")],
            }],
        }]);
        assert_eq!(html, "<ol><li>one</li></ol>");
    }
}
