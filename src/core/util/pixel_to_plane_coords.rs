use crate::core::data::complex::Complex;
use crate::core::data::pixel_rect::PixelRect;
use crate::core::data::point::Point;
use crate::core::data::viewport::Viewport;
use std::error::Error;
use std::fmt;

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum PixelToPlaneCoordsError {
    PointOutsideRect { point: Point, pixel_rect: PixelRect },
}

impl fmt::Display for PixelToPlaneCoordsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PointOutsideRect { point, pixel_rect } => {
                write!(
                    f,
                    "point (x: {}, y: {}) is outside the rectangle with coords top-left: (x: {}, y: {}) bottom-right: (x: {}, y: {})",
                    point.x,
                    point.y,
                    pixel_rect.top_left().x,
                    pixel_rect.top_left().y,
                    pixel_rect.bottom_right().x,
                    pixel_rect.bottom_right().y
                )
            }
        }
    }
}

impl Error for PixelToPlaneCoordsError {}

/// Maps a pixel of `pixel_rect` onto the plane point it samples.
///
/// Pixel `(px, py)`, relative to the frame's top-left, lands on
/// `center + (p - size / 2) * scale`, so the screen centre is the viewport
/// centre and both axes share one scale.
pub fn pixel_to_plane_coords(
    pixel_position: Point,
    pixel_rect: PixelRect,
    viewport: Viewport,
) -> Result<Complex, PixelToPlaneCoordsError> {
    if !pixel_rect.contains_point(pixel_position) {
        return Err(PixelToPlaneCoordsError::PointOutsideRect {
            point: pixel_position,
            pixel_rect,
        });
    }

    let relative_pixel_x = (pixel_position.x as i64 - pixel_rect.top_left().x as i64) as f64;
    let relative_pixel_y = (pixel_position.y as i64 - pixel_rect.top_left().y as i64) as f64;

    Ok(viewport.plane_point(relative_pixel_x, relative_pixel_y, pixel_rect))
}
