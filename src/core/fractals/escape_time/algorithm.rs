use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::complex::Complex;
use crate::core::data::pixel_rect::PixelRect;
use crate::core::data::point::Point;
use crate::core::data::viewport::Viewport;
use crate::core::formula::step::StepFunction;
use crate::core::fractals::escape_time::errors::{ConfigError, EscapeTimeError};
use crate::core::fractals::escape_time::fractal_config::validate_max_iterations;
use crate::core::util::pixel_to_plane_coords::pixel_to_plane_coords;
use std::sync::Arc;

/// Squared escape radius; an orbit with `|z|^2 > 4` never returns.
pub const BAILOUT_RADIUS_SQUARED: f64 = 4.0;

/// How one pixel's orbit ended.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EscapeOutcome {
    /// Still bounded after `max_iterations` steps.
    Interior,
    Escaped {
        iterations: u32,
        magnitude_squared: f64,
    },
}

/// Iterates a compiled step from `z = 0` with `c` at the pixel's plane point.
#[derive(Debug, Clone)]
pub struct EscapeTimeAlgorithm {
    pixel_rect: PixelRect,
    viewport: Viewport,
    max_iterations: u32,
    step: Arc<StepFunction>,
}

impl EscapeTimeAlgorithm {
    pub fn new(
        pixel_rect: PixelRect,
        viewport: Viewport,
        max_iterations: u32,
        step: Arc<StepFunction>,
    ) -> Result<Self, ConfigError> {
        Ok(Self {
            pixel_rect,
            viewport,
            max_iterations: validate_max_iterations(max_iterations)?,
            step,
        })
    }

    #[must_use]
    pub fn max_iterations(&self) -> u32 {
        self.max_iterations
    }

    /// Runs one orbit. NaN is a fault; infinities escape normally.
    pub fn escape(&self, c: Complex, pixel: Point) -> Result<EscapeOutcome, EscapeTimeError> {
        let mut z = Complex::ZERO;
        let mut iterations = 0;

        while z.magnitude_squared() <= BAILOUT_RADIUS_SQUARED && iterations < self.max_iterations {
            z = self.step.step(z, c);
            if z.is_nan() {
                return Err(EscapeTimeError::NonFiniteIterate { pixel });
            }
            iterations += 1;
        }

        if iterations == self.max_iterations {
            return Ok(EscapeOutcome::Interior);
        }

        Ok(EscapeOutcome::Escaped {
            iterations,
            magnitude_squared: z.magnitude_squared(),
        })
    }
}

impl FractalAlgorithm for EscapeTimeAlgorithm {
    type Success = EscapeOutcome;
    type Failure = EscapeTimeError;

    fn pixel_rect(&self) -> PixelRect {
        self.pixel_rect
    }

    fn compute(&self, pixel: Point) -> Result<Self::Success, Self::Failure> {
        let c = pixel_to_plane_coords(pixel, self.pixel_rect, self.viewport)?;
        self.escape(c, pixel)
    }
}
