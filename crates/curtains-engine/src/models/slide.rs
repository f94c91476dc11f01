use serde::{Deserialize, Serialize};

use super::node::ContentNode;

/// Whether an extracted style fragment applies to the whole presentation or
/// to the one slide it was written in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StyleScope {
    Global,
    Slide,
}

/// One `<style>` block lifted out of the source text, in source order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StyleFragment {
    pub css: String,
    pub scope: StyleScope,
}

/// One delimiter-separated slice of the raw document, before any parsing.
/// The index is positional and fixed at split time.
#[derive(Debug, Clone, PartialEq)]
pub struct SlideSource {
    pub content: String,
    pub index: usize,
}

/// The finished artifact for one slide: its content tree and the CSS that
/// was scoped to it. Immutable once constructed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurtainsSlide {
    pub index: usize,
    pub ast: ContentNode,
    pub slide_css: String,
}

/// The whole compiled presentation, handed to the renderer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Presentation {
    pub global_css: String,
    pub slides: Vec<CurtainsSlide>,
}
