use crate::controllers::renderer::errors::RenderError;
use std::{error::Error, fmt};

/// A request that finished without a frame. The previously presented frame stays.
#[derive(Debug, Clone, PartialEq)]
pub struct FrameError {
    pub generation: u64,
    pub error: RenderError,
}

impl fmt::Display for FrameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "frame {} failed: {}", self.generation, self.error)
    }
}

impl Error for FrameError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        Some(&self.error)
    }
}
