use std::path::Path;
use std::sync::Arc;
use std::time::Instant;

use crate::controllers::explorer::state::ExplorerState;
use crate::controllers::ports::file_presenter::FilePresenterPort;
use crate::controllers::renderer::errors::RenderError;
use crate::controllers::renderer::fractal_renderer::{FractalRenderer, RenderSettings};
use crate::core::data::pixel_buffer::PixelBuffer;

/// Renders one frame from an explorer state and hands it to a file presenter.
pub struct CliRenderController<P: FilePresenterPort> {
    presenter: P,
    renderer: FractalRenderer,
    buffer: Option<Arc<PixelBuffer>>,
}

impl<P: FilePresenterPort> CliRenderController<P> {
    pub fn new(presenter: P, settings: RenderSettings) -> Self {
        Self {
            presenter,
            renderer: FractalRenderer::new(settings),
            buffer: None,
        }
    }

    pub fn generate(&mut self, state: &ExplorerState) -> Result<(), RenderError> {
        let config = state.config();
        let viewport = state.viewport();

        log::info!("Rendering {}...", state.formula_label());
        log::info!("Image size: {}x{}", state.width(), state.height());
        log::info!(
            "Centre: ({}, {}), zoom {}",
            viewport.center_x(),
            viewport.center_y(),
            viewport.zoom()
        );
        log::info!("Max iterations: {}", config.max_iterations());
        log::info!("Palette: {}", config.palette_name());

        let start = Instant::now();
        let frame = state.render(&mut self.renderer)?;
        log::info!("Duration:   {:?}", start.elapsed());

        self.buffer = Some(frame);

        Ok(())
    }

    #[must_use]
    pub fn buffer(&self) -> Option<&PixelBuffer> {
        self.buffer.as_deref()
    }

    pub fn write(&self, filepath: impl AsRef<Path>) -> std::io::Result<()> {
        if let Some(buffer) = &self.buffer {
            self.presenter.present(buffer, filepath.as_ref())?
        }

        Ok(())
    }
}
