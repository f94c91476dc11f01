pub mod assemble;
pub mod containers;
pub mod error;
pub mod limits;
pub mod models;
pub mod pipeline;
pub mod prose;
pub mod split;
pub mod styles;
pub mod validate;

// Re-export key types for easier usage
pub use error::ParseError;
pub use limits::Limits;
pub use models::{Align, ContentNode, CurtainsSlide, Presentation, SlideSource, StyleFragment, StyleScope};
pub use pipeline::{compile, process_slide};
