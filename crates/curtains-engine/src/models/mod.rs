pub mod node;
pub mod slide;

pub use node::{Align, ContentNode};
pub use slide::{CurtainsSlide, Presentation, SlideSource, StyleFragment, StyleScope};
