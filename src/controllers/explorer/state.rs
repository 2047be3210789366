use crate::controllers::explorer::telemetry::Telemetry;
use crate::controllers::interactive::data::render_request::RenderRequest;
use crate::controllers::renderer::errors::RenderError;
use crate::controllers::renderer::fractal_renderer::FractalRenderer;
use crate::core::data::complex::Complex;
use crate::core::data::pixel_buffer::PixelBuffer;
use crate::core::data::pixel_rect::PixelRect;
use crate::core::data::viewport::Viewport;
use crate::core::fractals::escape_time::errors::ConfigError;
use crate::core::fractals::escape_time::fractal_config::FractalConfig;
use crate::core::fractals::presets::{Bookmark, EquationPreset, active_preset, bookmarks_for};
use crate::core::palettes::kinds::PaletteKinds;
use std::sync::Arc;

/// Shown in place of a preset's formula when the equations are user-edited.
pub const CUSTOM_FORMULA_LABEL: &str = "Z_{n+1} = ...";

/// The explorer's application state: what is being looked at and how.
///
/// Every gesture computes the new viewport first and only stores it when it
/// is valid, so a rejected gesture leaves the state untouched.
#[derive(Debug, Clone)]
pub struct ExplorerState {
    viewport: Viewport,
    config: FractalConfig,
    pixel_rect: PixelRect,
    last_submitted_request: Option<Arc<RenderRequest>>,
    latest_submitted_generation: u64,
}

impl ExplorerState {
    pub fn new(width: u32, height: u32) -> Result<Self, ConfigError> {
        Self::with_config(FractalConfig::default(), width, height)
    }

    pub fn with_config(config: FractalConfig, width: u32, height: u32) -> Result<Self, ConfigError> {
        Ok(Self {
            viewport: Viewport::INITIAL,
            config,
            pixel_rect: PixelRect::from_size(width, height)?,
            last_submitted_request: None,
            latest_submitted_generation: 0,
        })
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    #[must_use]
    pub fn config(&self) -> &FractalConfig {
        &self.config
    }

    #[must_use]
    pub fn pixel_rect(&self) -> PixelRect {
        self.pixel_rect
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.pixel_rect.width()
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.pixel_rect.height()
    }

    pub fn set_viewport(&mut self, viewport: Viewport) {
        self.viewport = viewport;
    }

    pub fn set_max_iterations(&mut self, max_iterations: u32) -> Result<(), ConfigError> {
        self.config.set_max_iterations(max_iterations)
    }

    pub fn set_palette(&mut self, palette: PaletteKinds) {
        self.config.set_palette(palette);
    }

    pub fn set_palette_by_name(&mut self, name: &str) {
        self.config.set_palette_by_name(name);
    }

    pub fn set_custom_palette<S: AsRef<str>>(&mut self, anchors: &[S]) -> Result<(), ConfigError> {
        self.config.set_custom_palette(anchors)
    }

    pub fn set_equations(&mut self, real: impl Into<String>, imag: impl Into<String>) {
        self.config.set_equations(real, imag);
    }

    /// Switches to the preset's equations and returns to the initial view.
    pub fn apply_preset(&mut self, preset: &EquationPreset) {
        self.config.apply_preset(preset);
        self.reset_view();
    }

    pub fn jump_to_bookmark(&mut self, bookmark: &Bookmark) -> Result<(), ConfigError> {
        self.viewport = bookmark.viewport()?;
        Ok(())
    }

    pub fn reset_view(&mut self) {
        self.viewport = Viewport::INITIAL;
    }

    /// Drag by a screen delta in pixels.
    pub fn pan(&mut self, delta_x: f64, delta_y: f64) -> Result<(), ConfigError> {
        self.viewport = self.viewport.pan(delta_x, delta_y, self.pixel_rect)?;
        Ok(())
    }

    /// Wheel step at a pointer position; positive `delta_y` zooms out.
    pub fn wheel_zoom(&mut self, delta_y: f64, pointer_x: f64, pointer_y: f64) -> Result<(), ConfigError> {
        self.viewport = self
            .viewport
            .wheel_zoom(delta_y, pointer_x, pointer_y, self.pixel_rect)?;
        Ok(())
    }

    pub fn zoom_at(&mut self, pointer_x: f64, pointer_y: f64, factor: f64) -> Result<(), ConfigError> {
        self.viewport = self
            .viewport
            .zoom_at(pointer_x, pointer_y, factor, self.pixel_rect)?;
        Ok(())
    }

    /// New frame size; the viewport's centre and zoom are kept.
    pub fn resize(&mut self, width: u32, height: u32) -> Result<(), ConfigError> {
        self.pixel_rect = PixelRect::from_size(width, height)?;
        Ok(())
    }

    #[must_use]
    pub fn active_preset(&self) -> Option<&'static EquationPreset> {
        active_preset(self.config.real_equation(), self.config.imag_equation())
    }

    #[must_use]
    pub fn formula_label(&self) -> &'static str {
        self.active_preset()
            .map_or(CUSTOM_FORMULA_LABEL, |preset| preset.formula)
    }

    #[must_use]
    pub fn bookmarks(&self) -> &'static [Bookmark] {
        bookmarks_for(self.config.real_equation(), self.config.imag_equation())
    }

    /// The plane point under a screen position.
    #[must_use]
    pub fn plane_point_at(&self, screen_x: f64, screen_y: f64) -> Complex {
        self.viewport.plane_point(screen_x, screen_y, self.pixel_rect)
    }

    #[must_use]
    pub fn telemetry(&self) -> Telemetry {
        Telemetry::from_viewport(self.viewport)
    }

    #[must_use]
    pub fn render_request(&self) -> RenderRequest {
        RenderRequest::new(
            self.viewport,
            self.config.clone(),
            self.width(),
            self.height(),
        )
    }

    /// Synchronous render of the current state.
    pub fn render(&self, renderer: &mut FractalRenderer) -> Result<Arc<PixelBuffer>, RenderError> {
        renderer.render(self.viewport, &self.config, self.width(), self.height())
    }

    #[must_use]
    pub fn should_submit(&self, request: &RenderRequest) -> bool {
        self.last_submitted_request
            .as_ref()
            .is_none_or(|last| last.as_ref() != request)
    }

    pub fn record_submission(&mut self, request: Arc<RenderRequest>, generation: u64) {
        self.last_submitted_request = Some(request);
        self.latest_submitted_generation = generation;
    }

    #[must_use]
    pub fn latest_submitted_generation(&self) -> u64 {
        self.latest_submitted_generation
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::controllers::renderer::fractal_renderer::RenderSettings;
    use crate::core::data::viewport::ViewportError;
    use crate::core::fractals::presets::{BURNING_SHIP, CELTIC, MANDELBROT};

    const TOLERANCE: f64 = 1e-12;

    fn state() -> ExplorerState {
        ExplorerState::new(800, 600).unwrap()
    }

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() <= TOLERANCE * expected.abs().max(1.0),
            "{} != {}",
            actual,
            expected
        );
    }

    #[test]
    fn test_new_state_starts_at_initial_view() {
        let state = state();

        assert_eq!(state.viewport(), Viewport::INITIAL);
        assert_eq!(state.config(), &FractalConfig::default());
        assert_eq!((state.width(), state.height()), (800, 600));
        assert_eq!(state.active_preset(), Some(&MANDELBROT));
    }

    #[test]
    fn test_zero_size_frame_is_rejected() {
        assert!(matches!(
            ExplorerState::new(0, 600),
            Err(ConfigError::FrameSize(_))
        ));

        let mut state = state();
        assert!(state.resize(640, 0).is_err());
        assert_eq!(state.width(), 800);
    }

    #[test]
    fn test_oversized_frame_is_rejected() {
        assert!(matches!(
            ExplorerState::new(100_000, 100_000),
            Err(ConfigError::FrameSize(_))
        ));

        let mut state = state();
        assert!(state.resize(20_000, 20_000).is_err());
        assert_eq!((state.width(), state.height()), (800, 600));
    }

    #[test]
    fn test_pan_moves_centre_against_the_drag() {
        let mut state = state();
        let scale = 1.5 / 600.0;

        state.pan(10.0, -20.0).unwrap();

        assert_close(state.viewport().center_x(), -0.5 - 10.0 * scale);
        assert_close(state.viewport().center_y(), 20.0 * scale);
        assert_eq!(state.viewport().zoom(), 1.5);
    }

    #[test]
    fn test_wheel_zoom_keeps_pointer_anchor() {
        let mut state = state();
        let before = state.plane_point_at(200.0, 150.0);

        state.wheel_zoom(-1.0, 200.0, 150.0).unwrap();
        let after = state.plane_point_at(200.0, 150.0);

        assert_close(state.viewport().zoom(), 1.5 * 0.9);
        assert_close(after.real, before.real);
        assert_close(after.imag, before.imag);
    }

    #[test]
    fn test_zoom_in_then_out_restores_view() {
        let mut state = state();

        state.zoom_at(123.0, 456.0, 0.5).unwrap();
        state.zoom_at(123.0, 456.0, 2.0).unwrap();

        assert_close(state.viewport().center_x(), -0.5);
        assert_close(state.viewport().center_y(), 0.0);
        assert_close(state.viewport().zoom(), 1.5);
    }

    #[test]
    fn test_rejected_zoom_leaves_view_untouched() {
        let mut state = state();

        assert_eq!(
            state.zoom_at(0.0, 0.0, 0.0),
            Err(ConfigError::Viewport(ViewportError::InvalidZoomFactor { factor: 0.0 }))
        );
        assert_eq!(state.viewport(), Viewport::INITIAL);
    }

    #[test]
    fn test_apply_preset_resets_the_view() {
        let mut state = state();
        state.pan(100.0, 100.0).unwrap();

        state.apply_preset(&BURNING_SHIP);

        assert_eq!(state.viewport(), Viewport::INITIAL);
        assert_eq!(state.active_preset(), Some(&BURNING_SHIP));
        assert_eq!(state.formula_label(), BURNING_SHIP.formula);
        assert_eq!(state.bookmarks(), BURNING_SHIP.bookmarks);
    }

    #[test]
    fn test_custom_equations_use_mandelbrot_bookmarks() {
        let mut state = state();
        state.apply_preset(&CELTIC);

        state.set_equations("x*x - y*y + x0", "2*x*y + y0 + 0.1");

        assert!(state.active_preset().is_none());
        assert_eq!(state.formula_label(), CUSTOM_FORMULA_LABEL);
        assert_eq!(state.bookmarks(), MANDELBROT.bookmarks);
    }

    #[test]
    fn test_jump_to_bookmark_sets_view() {
        let mut state = state();
        let seahorse = MANDELBROT.find_bookmark("Seahorse Valley").unwrap();

        state.jump_to_bookmark(seahorse).unwrap();

        assert_eq!(state.viewport().center_x(), seahorse.x);
        assert_eq!(state.viewport().center_y(), seahorse.y);
        assert_eq!(state.viewport().zoom(), seahorse.zoom);

        state.reset_view();
        assert_eq!(state.viewport(), Viewport::INITIAL);
    }

    #[test]
    fn test_unchanged_request_is_not_resubmitted() {
        let mut state = state();

        let request = state.render_request();
        assert!(state.should_submit(&request));
        state.record_submission(Arc::new(request), 1);

        assert!(!state.should_submit(&state.render_request()));
        assert_eq!(state.latest_submitted_generation(), 1);

        state.set_palette(PaletteKinds::Cyberpunk);
        assert!(state.should_submit(&state.render_request()));
    }

    #[test]
    fn test_render_uses_state_size() {
        let state = ExplorerState::new(16, 12).unwrap();
        let mut renderer = FractalRenderer::new(RenderSettings::default());

        let frame = state.render(&mut renderer).unwrap();

        assert_eq!(frame.pixel_rect().width(), 16);
        assert_eq!(frame.pixel_rect().height(), 12);
    }
}
