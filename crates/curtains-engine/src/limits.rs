/// Structural limits enforced by the pipeline. Threaded explicitly so
/// callers can override the defaults without any global state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Limits {
    /// Maximum number of slides a presentation may contain.
    pub max_slides: usize,
    /// Maximum container nesting depth, counted from a slide's top level.
    pub max_nesting_depth: usize,
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            max_slides: 99,
            max_nesting_depth: 10,
        }
    }
}
