use thiserror::Error;

/// Failures surfaced by the parsing pipeline. All are fail-fast: no partial
/// tree is ever returned alongside one of these.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("input document is empty")]
    EmptyInput,

    #[error("presentation has {count} slides, expected between 1 and {max}")]
    SlideCount { count: usize, max: usize },

    #[error("slide index {index} is out of range (at most {max} slides)")]
    SlideIndex { index: usize, max: usize },

    #[error(
        "invalid container class name {name:?}: only letters, digits, hyphens and underscores are allowed"
    )]
    ClassName { name: String },

    #[error("container nesting depth {depth} exceeds the limit of {max}")]
    NestingDepth { depth: usize, max: usize },

    /// Malformed container structure or a placeholder bookkeeping defect.
    /// Internal-consistency failures share this variant since the pipeline
    /// has no separate channel for impossible states.
    #[error("structural parse error: {reason}")]
    Structural { reason: String },
}

impl ParseError {
    pub(crate) fn structural(reason: impl Into<String>) -> Self {
        ParseError::Structural {
            reason: reason.into(),
        }
    }
}
