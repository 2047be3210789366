use crate::core::data::pixel_rect::PixelRectError;
use crate::core::data::point::Point;
use crate::core::data::viewport::ViewportError;
use crate::core::fractals::escape_time::fractal_config::MAX_ITERATIONS_LIMIT;
use crate::core::palettes::errors::PaletteError;
use crate::core::util::pixel_to_plane_coords::PixelToPlaneCoordsError;
use std::{error::Error, fmt};

/// Rejected settings; raised when a value is set, before any rendering.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    IterationsOutOfRange { max_iterations: u32 },
    Palette(PaletteError),
    Viewport(ViewportError),
    FrameSize(PixelRectError),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::IterationsOutOfRange { max_iterations } => {
                write!(
                    f,
                    "maximum iterations must be between 1 and {}, got {}",
                    MAX_ITERATIONS_LIMIT, max_iterations
                )
            }
            Self::Palette(err) => write!(f, "invalid palette: {}", err),
            Self::Viewport(err) => write!(f, "invalid viewport: {}", err),
            Self::FrameSize(err) => write!(f, "invalid frame size: {}", err),
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::IterationsOutOfRange { .. } => None,
            Self::Palette(err) => Some(err),
            Self::Viewport(err) => Some(err),
            Self::FrameSize(err) => Some(err),
        }
    }
}

impl From<PaletteError> for ConfigError {
    fn from(err: PaletteError) -> Self {
        Self::Palette(err)
    }
}

impl From<ViewportError> for ConfigError {
    fn from(err: ViewportError) -> Self {
        Self::Viewport(err)
    }
}

impl From<PixelRectError> for ConfigError {
    fn from(err: PixelRectError) -> Self {
        Self::FrameSize(err)
    }
}

/// Per-pixel evaluation faults.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EscapeTimeError {
    /// The step produced NaN, e.g. from `0/0`.
    NonFiniteIterate { pixel: Point },
    Coords(PixelToPlaneCoordsError),
}

impl fmt::Display for EscapeTimeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonFiniteIterate { pixel } => {
                write!(
                    f,
                    "formula produced NaN at pixel (x: {}, y: {})",
                    pixel.x, pixel.y
                )
            }
            Self::Coords(err) => write!(f, "{}", err),
        }
    }
}

impl Error for EscapeTimeError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::NonFiniteIterate { .. } => None,
            Self::Coords(err) => Some(err),
        }
    }
}

impl From<PixelToPlaneCoordsError> for EscapeTimeError {
    fn from(err: PixelToPlaneCoordsError) -> Self {
        Self::Coords(err)
    }
}
