//! Pure guard functions called at component boundaries. Each one either
//! passes or fails with a specific [`ParseError`]; none of them mutate or
//! repair their input.

use std::sync::LazyLock;

use regex::Regex;

use crate::error::ParseError;
use crate::limits::Limits;

static CLASS_NAME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9_-]+$").expect("class name pattern"));

/// The raw document must contain something other than whitespace.
pub fn validate_input(raw: &str) -> Result<(), ParseError> {
    if raw.trim().is_empty() {
        return Err(ParseError::EmptyInput);
    }
    Ok(())
}

/// A presentation must have at least one slide and at most `max_slides`.
pub fn validate_slide_count(count: usize, limits: &Limits) -> Result<(), ParseError> {
    if count == 0 || count > limits.max_slides {
        return Err(ParseError::SlideCount {
            count,
            max: limits.max_slides,
        });
    }
    Ok(())
}

/// Slide indices are 0-based, so the last legal index is `max_slides - 1`.
pub fn validate_slide_index(index: usize, limits: &Limits) -> Result<(), ParseError> {
    if index >= limits.max_slides {
        return Err(ParseError::SlideIndex {
            index,
            max: limits.max_slides,
        });
    }
    Ok(())
}

/// Container class names are empty or letters/digits/hyphen/underscore only.
pub fn validate_class_name(name: &str) -> Result<(), ParseError> {
    if name.is_empty() || CLASS_NAME_RE.is_match(name) {
        return Ok(());
    }
    Err(ParseError::ClassName {
        name: name.to_string(),
    })
}

/// Container nesting may reach the limit but never exceed it.
pub fn validate_nesting_depth(depth: usize, limits: &Limits) -> Result<(), ParseError> {
    if depth > limits.max_nesting_depth {
        return Err(ParseError::NestingDepth {
            depth,
            max: limits.max_nesting_depth,
        });
    }
    Ok(())
}
