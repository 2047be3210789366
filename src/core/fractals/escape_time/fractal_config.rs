use crate::core::fractals::escape_time::errors::ConfigError;
use crate::core::fractals::presets::{EquationPreset, MANDELBROT};
use crate::core::palettes::kinds::PaletteKinds;
use crate::core::palettes::palette::Palette;

pub const DEFAULT_MAX_ITERATIONS: u32 = 200;
pub const MAX_ITERATIONS_LIMIT: u32 = 100_000;

const CUSTOM_PALETTE_NAME: &str = "Custom";

pub fn validate_max_iterations(max_iterations: u32) -> Result<u32, ConfigError> {
    if max_iterations == 0 || max_iterations > MAX_ITERATIONS_LIMIT {
        return Err(ConfigError::IterationsOutOfRange { max_iterations });
    }
    Ok(max_iterations)
}

/// Everything that shapes a frame except the viewport and its size.
#[derive(Debug, Clone, PartialEq)]
pub struct FractalConfig {
    max_iterations: u32,
    palette: PaletteKinds,
    custom_palette: Option<Palette>,
    real_equation: String,
    imag_equation: String,
}

impl Default for FractalConfig {
    fn default() -> Self {
        Self {
            max_iterations: DEFAULT_MAX_ITERATIONS,
            palette: PaletteKinds::default(),
            custom_palette: None,
            real_equation: MANDELBROT.real.to_string(),
            imag_equation: MANDELBROT.imag.to_string(),
        }
    }
}

impl FractalConfig {
    pub fn new(
        max_iterations: u32,
        palette: PaletteKinds,
        real_equation: impl Into<String>,
        imag_equation: impl Into<String>,
    ) -> Result<Self, ConfigError> {
        Ok(Self {
            max_iterations: validate_max_iterations(max_iterations)?,
            palette,
            custom_palette: None,
            real_equation: real_equation.into(),
            imag_equation: imag_equation.into(),
        })
    }

    #[must_use]
    pub fn max_iterations(&self) -> u32 {
        self.max_iterations
    }

    #[must_use]
    pub fn palette_kind(&self) -> PaletteKinds {
        self.palette
    }

    #[must_use]
    pub fn real_equation(&self) -> &str {
        &self.real_equation
    }

    #[must_use]
    pub fn imag_equation(&self) -> &str {
        &self.imag_equation
    }

    /// The palette frames are coloured with: the custom one when set,
    /// otherwise the selected built-in.
    #[must_use]
    pub fn palette(&self) -> Palette {
        match &self.custom_palette {
            Some(palette) => palette.clone(),
            None => self.palette.palette(),
        }
    }

    #[must_use]
    pub fn palette_name(&self) -> &str {
        match self.custom_palette {
            Some(_) => CUSTOM_PALETTE_NAME,
            None => self.palette.display_name(),
        }
    }

    pub fn set_max_iterations(&mut self, max_iterations: u32) -> Result<(), ConfigError> {
        self.max_iterations = validate_max_iterations(max_iterations)?;
        Ok(())
    }

    /// Selects a built-in palette and drops any custom one.
    pub fn set_palette(&mut self, palette: PaletteKinds) {
        self.palette = palette;
        self.custom_palette = None;
    }

    /// Selects a built-in palette by name; unknown names select the default.
    pub fn set_palette_by_name(&mut self, name: &str) {
        let kind = PaletteKinds::find(name).unwrap_or_else(|| {
            log::warn!(
                "unknown palette '{}', using {}",
                name,
                PaletteKinds::default()
            );
            PaletteKinds::default()
        });
        self.set_palette(kind);
    }

    /// Replaces the palette with `#rrggbb` anchors; nothing changes on error.
    pub fn set_custom_palette<S: AsRef<str>>(&mut self, anchors: &[S]) -> Result<(), ConfigError> {
        self.custom_palette = Some(Palette::from_hex(anchors)?);
        Ok(())
    }

    /// Equations are stored verbatim; they are validated when compiled.
    pub fn set_equations(&mut self, real: impl Into<String>, imag: impl Into<String>) {
        self.real_equation = real.into();
        self.imag_equation = imag.into();
    }

    pub fn apply_preset(&mut self, preset: &EquationPreset) {
        self.set_equations(preset.real, preset.imag);
    }
}
