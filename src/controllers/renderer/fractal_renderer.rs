use crate::controllers::renderer::errors::RenderError;
use crate::core::actions::cancellation::{CancelToken, NeverCancel};
use crate::core::actions::generate_fractal::generate_fractal_parallel_rayon::generate_fractal_parallel_rayon;
use crate::core::actions::generate_fractal::generate_fractal_serial::generate_fractal_serial;
use crate::core::actions::generate_pixel_buffer::generate_pixel_buffer::{
    GeneratePixelBufferError, generate_pixel_buffer,
};
use crate::core::data::pixel_buffer::PixelBuffer;
use crate::core::data::pixel_rect::PixelRect;
use crate::core::data::viewport::Viewport;
use crate::core::formula::compiler::FormulaCompiler;
use crate::core::formula::errors::FormulaError;
use crate::core::formula::step::StepFunction;
use crate::core::fractals::escape_time::algorithm::{EscapeOutcome, EscapeTimeAlgorithm};
use crate::core::fractals::escape_time::colour_map::SmoothPaletteColourMap;
use crate::core::fractals::escape_time::errors::ConfigError;
use crate::core::fractals::escape_time::fractal_config::FractalConfig;
use std::sync::Arc;
use std::time::Instant;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RenderSettings {
    /// Row-parallel evaluation on rayon; output is identical to the serial pass.
    pub parallel: bool,
}

/// Turns a viewport and config into RGBA frames.
///
/// Owns the formula cache and the last frame it produced. A failed pass never
/// replaces that frame, and a formula that fails to compile leaves the
/// previously compiled one in use.
#[derive(Debug, Default)]
pub struct FractalRenderer {
    compiler: FormulaCompiler,
    settings: RenderSettings,
    last_frame: Option<Arc<PixelBuffer>>,
    formula_error: Option<FormulaError>,
}

impl FractalRenderer {
    #[must_use]
    pub fn new(settings: RenderSettings) -> Self {
        Self {
            settings,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn settings(&self) -> RenderSettings {
        self.settings
    }

    /// The frame from the last successful pass.
    #[must_use]
    pub fn last_frame(&self) -> Option<Arc<PixelBuffer>> {
        self.last_frame.clone()
    }

    /// The compile error of the most recent formula, if it did not compile.
    #[must_use]
    pub fn formula_error(&self) -> Option<&FormulaError> {
        self.formula_error.as_ref()
    }

    /// How many times a formula was actually parsed.
    #[must_use]
    pub fn compilations(&self) -> u64 {
        self.compiler.compilations()
    }

    /// Compiles the pair ahead of rendering. On failure the previous step
    /// stays active and the error is returned as a warning.
    pub fn set_formula(&mut self, real: &str, imag: &str) -> Result<(), FormulaError> {
        match self.compiler.compile(real, imag) {
            Ok(_) => {
                self.formula_error = None;
                Ok(())
            }
            Err(err) => {
                log::warn!("{}; keeping previous formula", err);
                self.formula_error = Some(err.clone());
                Err(err)
            }
        }
    }

    fn step_for(&mut self, config: &FractalConfig) -> Result<Arc<StepFunction>, RenderError> {
        match self
            .compiler
            .compile(config.real_equation(), config.imag_equation())
        {
            Ok(step) => {
                self.formula_error = None;
                Ok(step)
            }
            Err(err) => {
                self.formula_error = Some(err.clone());
                match self.compiler.current() {
                    Some(previous) => {
                        log::warn!("{}; rendering with the previous formula", err);
                        Ok(previous)
                    }
                    None => Err(RenderError::Formula(err)),
                }
            }
        }
    }

    pub fn render(
        &mut self,
        viewport: Viewport,
        config: &FractalConfig,
        width: u32,
        height: u32,
    ) -> Result<Arc<PixelBuffer>, RenderError> {
        self.render_cancelable(viewport, config, width, height, &NeverCancel)
    }

    /// Full-frame pass that gives up as soon as `cancel` fires.
    pub fn render_cancelable<C: CancelToken>(
        &mut self,
        viewport: Viewport,
        config: &FractalConfig,
        width: u32,
        height: u32,
        cancel: &C,
    ) -> Result<Arc<PixelBuffer>, RenderError> {
        let pixel_rect = PixelRect::from_size(width, height).map_err(ConfigError::from)?;
        let step = self.step_for(config)?;
        let algorithm =
            EscapeTimeAlgorithm::new(pixel_rect, viewport, config.max_iterations(), step)?;
        let colour_map = SmoothPaletteColourMap::new(
            config.palette(),
            config.palette_name(),
            config.max_iterations(),
        );

        let start = Instant::now();
        let result = self.run_pass(&algorithm, &colour_map, pixel_rect, cancel);

        match result {
            Ok(pixel_buffer) => {
                log::debug!(
                    "rendered {}x{} ({} iterations, {}) in {:?}",
                    width,
                    height,
                    config.max_iterations(),
                    if self.settings.parallel { "parallel" } else { "serial" },
                    start.elapsed()
                );
                let frame = Arc::new(pixel_buffer);
                self.last_frame = Some(Arc::clone(&frame));
                Ok(frame)
            }
            Err(RenderError::Cancelled) => Err(RenderError::Cancelled),
            Err(err) => {
                log::warn!("{}; keeping previous frame", err);
                Err(err)
            }
        }
    }

    fn run_pass<C: CancelToken>(
        &self,
        algorithm: &EscapeTimeAlgorithm,
        colour_map: &SmoothPaletteColourMap,
        pixel_rect: PixelRect,
        cancel: &C,
    ) -> Result<PixelBuffer, RenderError> {
        let generated = if self.settings.parallel {
            generate_fractal_parallel_rayon(algorithm, cancel)
        } else {
            generate_fractal_serial(algorithm, cancel)
        };
        let outcomes: Vec<EscapeOutcome> = generated.map_err(RenderError::from)?;

        generate_pixel_buffer(outcomes, colour_map, pixel_rect, cancel).map_err(|err| match err {
            GeneratePixelBufferError::Cancelled(_) => RenderError::Cancelled,
            GeneratePixelBufferError::ColourMap(never) => match never {},
            GeneratePixelBufferError::PixelBuffer(err) => RenderError::from(err),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::actions::cancellation::GenerationToken;
    use crate::core::data::point::Point;
    use crate::core::data::pixel_rect::PixelRectError;
    use crate::core::formula::errors::EquationSide;
    use crate::core::fractals::presets::{EQUATION_PRESETS, MANDELBROT};
    use crate::core::palettes::kinds::PaletteKinds;
    use std::sync::atomic::AtomicU64;

    const WIDTH: u32 = 48;
    const HEIGHT: u32 = 32;

    fn config_with(real: &str, imag: &str) -> FractalConfig {
        FractalConfig::new(64, PaletteKinds::ElectricBlue, real, imag).unwrap()
    }

    #[test]
    fn test_frame_has_rgba_size_and_is_opaque() {
        let mut renderer = FractalRenderer::default();

        let frame = renderer
            .render(Viewport::INITIAL, &FractalConfig::default(), WIDTH, HEIGHT)
            .unwrap();

        assert_eq!(frame.buffer().len(), (WIDTH * HEIGHT * 4) as usize);
        assert!(frame.buffer().chunks_exact(4).all(|rgba| rgba[3] == 255));
    }

    #[test]
    fn test_centre_of_main_cardioid_is_black() {
        let mut renderer = FractalRenderer::default();
        let viewport = Viewport::new(-0.25, 0.0, 0.1).unwrap();

        let frame = renderer
            .render(viewport, &FractalConfig::default(), WIDTH, HEIGHT)
            .unwrap();

        assert_eq!(
            frame.pixel(Point { x: 24, y: 16 }).unwrap(),
            [0, 0, 0, 255]
        );
    }

    #[test]
    fn test_rendering_is_deterministic() {
        let mut renderer = FractalRenderer::default();
        let config = FractalConfig::default();

        let first = renderer.render(Viewport::INITIAL, &config, WIDTH, HEIGHT).unwrap();
        let second = renderer.render(Viewport::INITIAL, &config, WIDTH, HEIGHT).unwrap();

        assert_eq!(first.buffer(), second.buffer());
        assert_eq!(renderer.compilations(), 1);
    }

    #[test]
    fn test_fresh_renderer_matches_cached_one() {
        let config = FractalConfig::default();
        let mut warm = FractalRenderer::default();
        warm.render(Viewport::INITIAL, &config, WIDTH, HEIGHT).unwrap();

        let cached = warm.render(Viewport::INITIAL, &config, WIDTH, HEIGHT).unwrap();
        let fresh = FractalRenderer::default()
            .render(Viewport::INITIAL, &config, WIDTH, HEIGHT)
            .unwrap();

        assert_eq!(cached.buffer(), fresh.buffer());
    }

    #[test]
    fn test_serial_and_parallel_are_byte_identical() {
        let config = FractalConfig::default();
        let mut serial = FractalRenderer::new(RenderSettings { parallel: false });
        let mut parallel = FractalRenderer::new(RenderSettings { parallel: true });

        for preset in EQUATION_PRESETS {
            let config = {
                let mut config = config.clone();
                config.apply_preset(preset);
                config
            };

            let a = serial.render(Viewport::INITIAL, &config, WIDTH, HEIGHT).unwrap();
            let b = parallel.render(Viewport::INITIAL, &config, WIDTH, HEIGHT).unwrap();

            assert_eq!(a.buffer(), b.buffer(), "{}", preset.name);
        }
    }

    #[test]
    fn test_invalid_formula_keeps_previous_step() {
        let mut renderer = FractalRenderer::default();
        let good = config_with(MANDELBROT.real, MANDELBROT.imag);
        let expected = renderer.render(Viewport::INITIAL, &good, WIDTH, HEIGHT).unwrap();

        let bad = config_with(MANDELBROT.real, "2*x*y + ");
        let err = renderer
            .set_formula(bad.real_equation(), bad.imag_equation())
            .unwrap_err();
        assert_eq!(err.side, EquationSide::Imaginary);

        let frame = renderer.render(Viewport::INITIAL, &bad, WIDTH, HEIGHT).unwrap();

        assert!(!frame.buffer().is_empty());
        assert_eq!(frame.buffer(), expected.buffer());
        assert!(renderer.formula_error().is_some());
    }

    #[test]
    fn test_invalid_formula_without_fallback_is_an_error() {
        let mut renderer = FractalRenderer::default();

        let result = renderer.render(Viewport::INITIAL, &config_with("x +", "y"), WIDTH, HEIGHT);

        assert!(matches!(result, Err(RenderError::Formula(_))));
        assert!(renderer.last_frame().is_none());
    }

    #[test]
    fn test_nan_formula_keeps_last_frame() {
        let mut renderer = FractalRenderer::default();
        let good = renderer
            .render(Viewport::INITIAL, &FractalConfig::default(), WIDTH, HEIGHT)
            .unwrap();

        let result = renderer.render(Viewport::INITIAL, &config_with("x / x", "y0"), WIDTH, HEIGHT);

        assert!(matches!(result, Err(RenderError::NonFiniteIterate { .. })));
        assert_eq!(renderer.last_frame().unwrap().buffer(), good.buffer());
    }

    #[test]
    fn test_zero_sized_frame_is_a_config_error() {
        let mut renderer = FractalRenderer::default();

        let result = renderer.render(Viewport::INITIAL, &FractalConfig::default(), 0, 10);

        assert!(matches!(
            result,
            Err(RenderError::InvalidConfig(ConfigError::FrameSize(_)))
        ));
    }

    #[test]
    fn test_oversized_frame_is_a_config_error() {
        let mut renderer = FractalRenderer::default();

        let result =
            renderer.render(Viewport::INITIAL, &FractalConfig::default(), 100_000, 100_000);

        assert!(matches!(
            result,
            Err(RenderError::InvalidConfig(ConfigError::FrameSize(
                PixelRectError::TooLarge { .. }
            )))
        ));
        assert!(renderer.last_frame().is_none());
    }

    #[test]
    fn test_cancelled_pass_keeps_last_frame() {
        let mut renderer = FractalRenderer::default();
        let config = FractalConfig::default();
        renderer.render(Viewport::INITIAL, &config, WIDTH, HEIGHT).unwrap();
        let before = renderer.last_frame().unwrap();

        let latest = AtomicU64::new(2);
        let stale = GenerationToken::new(&latest, 1);
        let zoomed = Viewport::new(-0.75, 0.1, 0.01).unwrap();

        let result = renderer.render_cancelable(zoomed, &config, WIDTH, HEIGHT, &stale);

        assert_eq!(result, Err(RenderError::Cancelled));
        assert!(Arc::ptr_eq(&before, &renderer.last_frame().unwrap()));
    }

    #[test]
    fn test_every_preset_renders_non_black_pixels() {
        let mut renderer = FractalRenderer::default();

        for preset in EQUATION_PRESETS {
            let mut config = FractalConfig::default();
            config.apply_preset(preset);

            let frame = renderer.render(Viewport::INITIAL, &config, WIDTH, HEIGHT).unwrap();

            assert!(
                frame
                    .buffer()
                    .chunks_exact(4)
                    .any(|rgba| rgba[..3] != [0, 0, 0]),
                "{} rendered an all-black frame",
                preset.name
            );
        }
    }
}
