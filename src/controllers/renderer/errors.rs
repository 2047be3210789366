use crate::core::actions::generate_fractal::errors::GenerateFractalError;
use crate::core::data::pixel_buffer::PixelBufferError;
use crate::core::data::point::Point;
use crate::core::formula::errors::FormulaError;
use crate::core::fractals::escape_time::errors::{ConfigError, EscapeTimeError};
use std::{error::Error, fmt};

/// Why a frame was not produced. The previous frame stays current in every case.
#[derive(Debug, Clone, PartialEq)]
pub enum RenderError {
    InvalidConfig(ConfigError),
    /// No formula has compiled yet, so there is nothing to fall back on.
    Formula(FormulaError),
    NonFiniteIterate { pixel: Point },
    Evaluation(EscapeTimeError),
    PixelBuffer(PixelBufferError),
    Cancelled,
}

impl fmt::Display for RenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidConfig(err) => write!(f, "{}", err),
            Self::Formula(err) => write!(f, "no usable formula: {}", err),
            Self::NonFiniteIterate { pixel } => {
                write!(
                    f,
                    "formula produced NaN at pixel (x: {}, y: {}), frame abandoned",
                    pixel.x, pixel.y
                )
            }
            Self::Evaluation(err) => write!(f, "evaluation failed: {}", err),
            Self::PixelBuffer(err) => write!(f, "pixel buffer error: {}", err),
            Self::Cancelled => write!(f, "render cancelled"),
        }
    }
}

impl Error for RenderError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::InvalidConfig(err) => Some(err),
            Self::Formula(err) => Some(err),
            Self::Evaluation(err) => Some(err),
            Self::PixelBuffer(err) => Some(err),
            Self::NonFiniteIterate { .. } | Self::Cancelled => None,
        }
    }
}

impl From<ConfigError> for RenderError {
    fn from(err: ConfigError) -> Self {
        Self::InvalidConfig(err)
    }
}

impl From<EscapeTimeError> for RenderError {
    fn from(err: EscapeTimeError) -> Self {
        match err {
            EscapeTimeError::NonFiniteIterate { pixel } => Self::NonFiniteIterate { pixel },
            other => Self::Evaluation(other),
        }
    }
}

impl From<PixelBufferError> for RenderError {
    fn from(err: PixelBufferError) -> Self {
        Self::PixelBuffer(err)
    }
}

impl From<GenerateFractalError<EscapeTimeError>> for RenderError {
    fn from(err: GenerateFractalError<EscapeTimeError>) -> Self {
        match err {
            GenerateFractalError::Cancelled(_) => Self::Cancelled,
            GenerateFractalError::Algorithm(err) => Self::from(err),
        }
    }
}
