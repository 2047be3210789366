use crate::core::actions::generate_pixel_buffer::ports::colour_map::ColourMap;
use crate::core::data::colour::Colour;
use crate::core::fractals::escape_time::algorithm::EscapeOutcome;
use crate::core::palettes::palette::Palette;
use std::convert::Infallible;
use std::f64::consts::LN_2;

/// Exponent applied to the normalised escape count before wrapping.
pub const SMOOTHING_EXPONENT: f64 = 0.5;

/// Continuous palette position for an escaped orbit.
///
/// Uses the renormalised count `n + 1 - log2(log2|z|)`, scaled by the
/// iteration budget, square-rooted and wrapped into `[0, 1)`. The squared
/// magnitude is clamped into the finite positive range first, so overflowed
/// orbits still land on a colour, and a non-finite result maps to 0.
#[must_use]
pub fn smooth_index(iterations: u32, magnitude_squared: f64, max_iterations: u32) -> f64 {
    let magnitude_squared = magnitude_squared.clamp(f64::MIN_POSITIVE, f64::MAX);
    let log_zn = magnitude_squared.ln() / 2.0;
    let nu = (log_zn / LN_2).ln() / LN_2;
    let t_raw = (iterations as f64 + 1.0 - nu) / max_iterations as f64;
    let t = t_raw.max(0.0).powf(SMOOTHING_EXPONENT).rem_euclid(1.0);

    if t.is_finite() { t } else { 0.0 }
}

/// Interior pixels are black; escaped pixels follow the palette.
#[derive(Debug, Clone)]
pub struct SmoothPaletteColourMap {
    palette: Palette,
    name: String,
    max_iterations: u32,
}

impl SmoothPaletteColourMap {
    #[must_use]
    pub fn new(palette: Palette, name: impl Into<String>, max_iterations: u32) -> Self {
        Self {
            palette,
            name: name.into(),
            max_iterations,
        }
    }

    #[must_use]
    pub fn colour(&self, outcome: EscapeOutcome) -> Colour {
        match outcome {
            EscapeOutcome::Interior => Colour::BLACK,
            EscapeOutcome::Escaped {
                iterations,
                magnitude_squared,
            } => self.palette.interpolate(smooth_index(
                iterations,
                magnitude_squared,
                self.max_iterations,
            )),
        }
    }
}

impl ColourMap<EscapeOutcome> for SmoothPaletteColourMap {
    type Failure = Infallible;

    fn map(&self, outcome: EscapeOutcome) -> Result<Colour, Self::Failure> {
        Ok(self.colour(outcome))
    }

    fn display_name(&self) -> &str {
        &self.name
    }
}
