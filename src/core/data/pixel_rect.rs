use crate::core::data::point::Point;
use std::error::Error;
use std::fmt;

/// Largest frame `from_size` accepts, enough for an 8K frame.
pub const MAX_FRAME_PIXELS: u64 = 8192 * 4096;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum PixelRectError {
    InvalidSize { width: i64, height: i64 },
    TooLarge { width: u32, height: u32, max_pixels: u64 },
}

impl fmt::Display for PixelRectError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidSize { width, height } => {
                write!(f, "pixel rect size must be positive: {}x{}", width, height)
            }
            Self::TooLarge {
                width,
                height,
                max_pixels,
            } => {
                write!(
                    f,
                    "frame {}x{} exceeds the {} pixel limit",
                    width, height, max_pixels
                )
            }
        }
    }
}

impl Error for PixelRectError {}

/// Inclusive rectangle of screen pixels.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct PixelRect {
    top_left: Point,
    bottom_right: Point,
}

impl PixelRect {
    pub fn new(top_left: Point, bottom_right: Point) -> Result<Self, PixelRectError> {
        let width = (bottom_right.x as i64) - (top_left.x as i64) + 1;
        let height = (bottom_right.y as i64) - (top_left.y as i64) + 1;

        if width < 1 || height < 1 {
            return Err(PixelRectError::InvalidSize { width, height });
        }

        Ok(Self {
            top_left,
            bottom_right,
        })
    }

    /// A `width` x `height` frame anchored at the origin, at most
    /// [`MAX_FRAME_PIXELS`] in area.
    pub fn from_size(width: u32, height: u32) -> Result<Self, PixelRectError> {
        let invalid = PixelRectError::InvalidSize {
            width: width as i64,
            height: height as i64,
        };

        if width == 0 || height == 0 {
            return Err(invalid);
        }

        if width as u64 * height as u64 > MAX_FRAME_PIXELS {
            return Err(PixelRectError::TooLarge {
                width,
                height,
                max_pixels: MAX_FRAME_PIXELS,
            });
        }

        let right = i32::try_from(width - 1).map_err(|_| invalid)?;
        let bottom = i32::try_from(height - 1).map_err(|_| invalid)?;

        Self::new(Point { x: 0, y: 0 }, Point { x: right, y: bottom })
    }

    #[must_use]
    pub fn top_left(&self) -> Point {
        self.top_left
    }

    #[must_use]
    pub fn bottom_right(&self) -> Point {
        self.bottom_right
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        (self.bottom_right.x as i64 - self.top_left.x as i64 + 1) as u32
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        (self.bottom_right.y as i64 - self.top_left.y as i64 + 1) as u32
    }

    #[must_use]
    pub fn contains_point(&self, point: Point) -> bool {
        self.top_left.x <= point.x
            && self.top_left.y <= point.y
            && self.bottom_right.x >= point.x
            && self.bottom_right.y >= point.y
    }

    #[must_use]
    pub fn size(&self) -> u64 {
        self.width() as u64 * self.height() as u64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pixel_rect_new_valid() {
        let top_left = Point { x: 0, y: 0 };
        let bottom_right = Point { x: 100, y: 100 };

        let rect = PixelRect::new(top_left, bottom_right).unwrap();

        assert_eq!(rect.top_left(), top_left);
        assert_eq!(rect.bottom_right(), bottom_right);
    }

    #[test]
    fn test_pixel_rect_dimensions() {
        let rect = PixelRect::new(Point { x: -10, y: -20 }, Point { x: 110, y: 80 }).unwrap();

        assert_eq!(rect.width(), 121);
        assert_eq!(rect.height(), 101);
        assert_eq!(rect.size(), 12221);
    }

    #[test]
    fn test_pixel_rect_dimensions_must_be_positive() {
        let negative_width = PixelRect::new(Point { x: 0, y: 0 }, Point { x: -100, y: 10 });
        let negative_height = PixelRect::new(Point { x: 0, y: 0 }, Point { x: 100, y: -10 });

        assert_eq!(
            negative_width,
            Err(PixelRectError::InvalidSize {
                width: -99,
                height: 11
            })
        );
        assert_eq!(
            negative_height,
            Err(PixelRectError::InvalidSize {
                width: 101,
                height: -9
            })
        );
    }

    #[test]
    fn test_single_pixel_rect_is_valid() {
        let rect = PixelRect::new(Point { x: 3, y: 3 }, Point { x: 3, y: 3 }).unwrap();

        assert_eq!(rect.width(), 1);
        assert_eq!(rect.height(), 1);
        assert_eq!(rect.size(), 1);
    }

    #[test]
    fn test_from_size_anchors_at_origin() {
        let rect = PixelRect::from_size(800, 600).unwrap();

        assert_eq!(rect.top_left(), Point { x: 0, y: 0 });
        assert_eq!(rect.bottom_right(), Point { x: 799, y: 599 });
        assert_eq!(rect.width(), 800);
        assert_eq!(rect.height(), 600);
    }

    #[test]
    fn test_from_size_rejects_zero_dimensions() {
        assert_eq!(
            PixelRect::from_size(0, 10),
            Err(PixelRectError::InvalidSize {
                width: 0,
                height: 10
            })
        );
        assert!(PixelRect::from_size(10, 0).is_err());
    }

    #[test]
    fn test_from_size_rejects_frames_over_the_pixel_limit() {
        assert_eq!(
            PixelRect::from_size(100_000, 100_000),
            Err(PixelRectError::TooLarge {
                width: 100_000,
                height: 100_000,
                max_pixels: MAX_FRAME_PIXELS
            })
        );
        assert!(PixelRect::from_size(u32::MAX, 1).is_err());
        assert_eq!(PixelRect::from_size(8192, 4096).unwrap().size(), MAX_FRAME_PIXELS);
        assert!(PixelRect::from_size(8192, 4097).is_err());
    }

    #[test]
    fn test_pixel_rect_contains_point() {
        let rect = PixelRect::new(Point { x: -50, y: -50 }, Point { x: 100, y: 100 }).unwrap();

        assert!(rect.contains_point(Point { x: 50, y: 50 }));
        assert!(rect.contains_point(Point { x: -50, y: -50 }));
        assert!(rect.contains_point(Point { x: 100, y: 100 }));
        assert!(!rect.contains_point(Point { x: 101, y: 50 }));
        assert!(!rect.contains_point(Point { x: -51, y: 50 }));
        assert!(!rect.contains_point(Point { x: 50, y: -51 }));
        assert!(!rect.contains_point(Point { x: 50, y: 101 }));
    }
}
