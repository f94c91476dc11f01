pub mod css;
pub mod html;
pub mod template;

use curtains_engine::Presentation;

pub use css::merge_css;
pub use html::render_nodes;
pub use template::render_page;

/// Built-in page themes. Stylesheets are compiled into the binary so the
/// output never references external files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "light" => Some(Theme::Light),
            "dark" => Some(Theme::Dark),
            _ => None,
        }
    }

    pub fn css(self) -> &'static str {
        match self {
            Theme::Light => include_str!("../assets/theme-light.css"),
            Theme::Dark => include_str!("../assets/theme-dark.css"),
        }
    }
}

/// Renders a compiled presentation into one self-contained HTML document.
pub fn render_presentation(presentation: &Presentation, title: &str, theme: Theme) -> String {
    let slides_html: Vec<String> = presentation
        .slides
        .iter()
        .map(|slide| render_nodes(slide.ast.children()))
        .collect();
    let css = merge_css(theme.css(), presentation);
    render_page(title, &css, &slides_html)
}

#[cfg(test)]
mod tests {
    use super::*;
    use curtains_engine::{Limits, compile};

    #[test]
    fn end_to_end_document_render() {
        let p = compile(
            "<style>body{margin:0}</style>\n===\n# Hello\n\n<container class=\"c\">world</container>",
            &Limits::default(),
        )
        .unwrap();
        let page = render_presentation(&p, "deck", Theme::Light);
        assert!(page.contains("<h1>Hello</h1>"));
        assert!(page.contains("<div class=\"c\"><p>world</p></div>"));
        assert!(page.contains("body{margin:0}"));
        assert!(page.contains("--curtains-bg"));
    }

    #[test]
    fn theme_names_round_trip() {
        assert_eq!(Theme::from_name("light"), Some(Theme::Light));
        assert_eq!(Theme::from_name("dark"), Some(Theme::Dark));
        assert_eq!(Theme::from_name("sepia"), None);
    }
}
