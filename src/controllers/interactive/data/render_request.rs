use crate::core::data::viewport::Viewport;
use crate::core::fractals::escape_time::fractal_config::FractalConfig;

/// A snapshot of everything one frame depends on.
///
/// `PartialEq` lets callers skip resubmitting an unchanged view.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderRequest {
    pub viewport: Viewport,
    pub config: FractalConfig,
    pub width: u32,
    pub height: u32,
}

impl RenderRequest {
    #[must_use]
    pub fn new(viewport: Viewport, config: FractalConfig, width: u32, height: u32) -> Self {
        Self {
            viewport,
            config,
            width,
            height,
        }
    }
}
