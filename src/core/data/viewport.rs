use crate::core::data::complex::Complex;
use crate::core::data::pixel_rect::PixelRect;
use std::error::Error;
use std::fmt;

pub const WHEEL_ZOOM_OUT_FACTOR: f64 = 1.1;
pub const WHEEL_ZOOM_IN_FACTOR: f64 = 0.9;

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum ViewportError {
    NonFiniteCenter { center_x: f64, center_y: f64 },
    InvalidZoom { zoom: f64 },
    InvalidZoomFactor { factor: f64 },
}

impl fmt::Display for ViewportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonFiniteCenter { center_x, center_y } => {
                write!(f, "viewport center must be finite: ({}, {})", center_x, center_y)
            }
            Self::InvalidZoom { zoom } => {
                write!(f, "viewport zoom must be finite and positive: {}", zoom)
            }
            Self::InvalidZoomFactor { factor } => {
                write!(f, "zoom factor must be finite and positive: {}", factor)
            }
        }
    }
}

impl Error for ViewportError {}

/// The window of the complex plane mapped onto the screen.
///
/// `zoom` is the half-extent of the shorter screen dimension in plane units,
/// so smaller values are more magnified. The screen centre maps to
/// `(center_x, center_y)` and every gesture yields a new `Viewport`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Viewport {
    center_x: f64,
    center_y: f64,
    zoom: f64,
}

impl Default for Viewport {
    fn default() -> Self {
        Self::INITIAL
    }
}

impl Viewport {
    pub const INITIAL: Self = Self {
        center_x: -0.5,
        center_y: 0.0,
        zoom: 1.5,
    };

    pub fn new(center_x: f64, center_y: f64, zoom: f64) -> Result<Self, ViewportError> {
        if !center_x.is_finite() || !center_y.is_finite() {
            return Err(ViewportError::NonFiniteCenter { center_x, center_y });
        }

        if !zoom.is_finite() || zoom <= 0.0 {
            return Err(ViewportError::InvalidZoom { zoom });
        }

        Ok(Self {
            center_x,
            center_y,
            zoom,
        })
    }

    #[must_use]
    pub fn center_x(&self) -> f64 {
        self.center_x
    }

    #[must_use]
    pub fn center_y(&self) -> f64 {
        self.center_y
    }

    #[must_use]
    pub fn zoom(&self) -> f64 {
        self.zoom
    }

    /// Plane units per screen pixel.
    #[must_use]
    pub fn scale(&self, pixel_rect: PixelRect) -> f64 {
        self.zoom / pixel_rect.width().min(pixel_rect.height()) as f64
    }

    /// Maps a screen position, relative to the frame's top-left corner, onto the plane.
    #[must_use]
    pub fn plane_point(&self, screen_x: f64, screen_y: f64, pixel_rect: PixelRect) -> Complex {
        let scale = self.scale(pixel_rect);
        let half_width = pixel_rect.width() as f64 / 2.0;
        let half_height = pixel_rect.height() as f64 / 2.0;

        Complex {
            real: self.center_x + (screen_x - half_width) * scale,
            imag: self.center_y + (screen_y - half_height) * scale,
        }
    }

    /// Drag by a screen delta; the content follows the pointer.
    pub fn pan(&self, delta_x: f64, delta_y: f64, pixel_rect: PixelRect) -> Result<Self, ViewportError> {
        let scale = self.scale(pixel_rect);

        Self::new(
            self.center_x - delta_x * scale,
            self.center_y - delta_y * scale,
            self.zoom,
        )
    }

    /// Scales the zoom by `factor` while the plane point under the pointer stays put.
    pub fn zoom_at(
        &self,
        pointer_x: f64,
        pointer_y: f64,
        factor: f64,
        pixel_rect: PixelRect,
    ) -> Result<Self, ViewportError> {
        if !factor.is_finite() || factor <= 0.0 {
            return Err(ViewportError::InvalidZoomFactor { factor });
        }

        let anchor = self.plane_point(pointer_x, pointer_y, pixel_rect);
        let zoom = self.zoom * factor;
        let scale = zoom / pixel_rect.width().min(pixel_rect.height()) as f64;
        let half_width = pixel_rect.width() as f64 / 2.0;
        let half_height = pixel_rect.height() as f64 / 2.0;

        Self::new(
            anchor.real - (pointer_x - half_width) * scale,
            anchor.imag - (pointer_y - half_height) * scale,
            zoom,
        )
    }

    /// Mouse-wheel gesture: scrolling down zooms out, anything else zooms in.
    pub fn wheel_zoom(
        &self,
        delta_y: f64,
        pointer_x: f64,
        pointer_y: f64,
        pixel_rect: PixelRect,
    ) -> Result<Self, ViewportError> {
        let factor = if delta_y > 0.0 {
            WHEEL_ZOOM_OUT_FACTOR
        } else {
            WHEEL_ZOOM_IN_FACTOR
        };

        self.zoom_at(pointer_x, pointer_y, factor, pixel_rect)
    }
}
