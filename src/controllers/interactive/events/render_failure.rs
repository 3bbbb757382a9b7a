use std::error::Error;
use std::fmt;

/// A frame that could not be produced. The previous frame stays on screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderFailure {
    pub generation: u64,
    pub message: String,
}

impl fmt::Display for RenderFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "frame {} failed: {}", self.generation, self.message)
    }
}

impl Error for RenderFailure {}
