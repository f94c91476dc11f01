//! Orders CSS sources into one stylesheet: theme first, then the global
//! fragments, then per-slide fragments in slide order. Later sources win by
//! ordinary cascade rules; nothing here parses or rewrites CSS.

use curtains_engine::Presentation;

pub fn merge_css(theme_css: &str, presentation: &Presentation) -> String {
    let mut sections: Vec<&str> = Vec::new();

    if !theme_css.trim().is_empty() {
        sections.push(theme_css.trim());
    }
    if !presentation.global_css.is_empty() {
        sections.push(&presentation.global_css);
    }
    for slide in &presentation.slides {
        if !slide.slide_css.is_empty() {
            sections.push(&slide.slide_css);
        }
    }

    sections.join("\n\n")
}
