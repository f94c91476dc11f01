//! The per-slide orchestrator: validate → split → extract styles → parse
//! containers → convert prose → assemble → package.
//!
//! Slides are processed independently and share no state; the pipeline is
//! synchronous and makes no concurrency claims beyond that.

use crate::error::ParseError;
use crate::limits::Limits;
use crate::models::{ContentNode, CurtainsSlide, Presentation, SlideSource, StyleFragment, StyleScope};
use crate::{assemble, containers, prose, split, styles, validate};

/// Compiles a raw document into one [`CurtainsSlide`] per delimiter-separated
/// slide body plus the combined global CSS. Fails fast on the first invalid
/// slide; no partial presentation is returned.
pub fn compile(raw: &str, limits: &Limits) -> Result<Presentation, ParseError> {
    validate::validate_input(raw)?;

    let doc = split::split(raw);
    validate::validate_slide_count(doc.slides.len(), limits)?;

    let global = styles::extract_styles(&doc.global_content, StyleScope::Global);

    let slides = doc
        .slides
        .into_iter()
        .enumerate()
        .map(|(index, content)| process_slide(&SlideSource { content, index }, limits))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Presentation {
        global_css: join_css(&global.styles),
        slides,
    })
}

/// Runs the whole parse for one slide, independent of every other slide.
pub fn process_slide(source: &SlideSource, limits: &Limits) -> Result<CurtainsSlide, ParseError> {
    validate::validate_slide_index(source.index, limits)?;

    let extracted = styles::extract_styles(&source.content, StyleScope::Slide);
    let parsed = containers::parse_containers(&extracted.content, limits)?;
    let tree = prose::to_tree(&parsed.marked);
    let ast = assemble::build_ast(tree, parsed.containers)?;

    debug_assert!(matches!(ast, ContentNode::Root { .. }));

    Ok(CurtainsSlide {
        index: source.index,
        ast,
        slide_css: join_css(&extracted.styles),
    })
}

fn join_css(fragments: &[StyleFragment]) -> String {
    fragments
        .iter()
        .map(|f| f.css.as_str())
        .collect::<Vec<_>>()
        .join("\n")
}
