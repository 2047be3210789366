use crate::core::data::colour::Colour;
use crate::core::data::pixel_rect::PixelRect;
use crate::core::data::point::Point;
use std::error::Error;
use std::fmt;

pub const BYTES_PER_PIXEL: usize = 4;
pub const OPAQUE: u8 = 255;

fn pixel_rect_to_buffer_size(pixel_rect: PixelRect) -> usize {
    pixel_rect.size() as usize * BYTES_PER_PIXEL
}

#[derive(Debug, Clone, PartialEq)]
pub enum PixelBufferError {
    PixelOutsideBounds {
        pixel: Point,
        pixel_rect: PixelRect,
    },
    BoundsMismatch {
        pixel_rect_size: usize,
        buffer_size: usize,
    },
}

impl fmt::Display for PixelBufferError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BoundsMismatch {
                pixel_rect_size,
                buffer_size,
            } => {
                write!(
                    f,
                    "pixel rect size {} does not match buffer size {}",
                    pixel_rect_size, buffer_size
                )
            }
            Self::PixelOutsideBounds { pixel, pixel_rect } => {
                write!(
                    f,
                    "pixel at x:{}, y:{} outside of PixelRect bounds top:{}, left:{}, bottom:{}, right:{}",
                    pixel.x,
                    pixel.y,
                    pixel_rect.top_left().y,
                    pixel_rect.top_left().x,
                    pixel_rect.bottom_right().y,
                    pixel_rect.bottom_right().x
                )
            }
        }
    }
}

impl Error for PixelBufferError {}

pub type PixelBufferData = Vec<u8>;

/// Row-major RGBA frame, origin at the top-left pixel.
#[derive(Debug, Clone, PartialEq)]
pub struct PixelBuffer {
    pixel_rect: PixelRect,
    buffer: PixelBufferData,
}

impl PixelBuffer {
    /// Transparent black frame.
    #[must_use]
    pub fn new(pixel_rect: PixelRect) -> Self {
        Self {
            pixel_rect,
            buffer: vec![0; pixel_rect_to_buffer_size(pixel_rect)],
        }
    }

    pub fn from_data(
        pixel_rect: PixelRect,
        buffer: PixelBufferData,
    ) -> Result<Self, PixelBufferError> {
        let buffer_size = pixel_rect_to_buffer_size(pixel_rect);

        if buffer_size != buffer.len() {
            return Err(PixelBufferError::BoundsMismatch {
                pixel_rect_size: buffer_size,
                buffer_size: buffer.len(),
            });
        }

        Ok(Self { pixel_rect, buffer })
    }

    #[must_use]
    pub fn pixel_rect(&self) -> PixelRect {
        self.pixel_rect
    }

    #[must_use]
    pub fn buffer(&self) -> &PixelBufferData {
        &self.buffer
    }

    #[must_use]
    pub fn buffer_size(&self) -> usize {
        self.buffer.len()
    }

    /// Iterates the RGB part of every pixel, dropping alpha.
    pub fn rgb_bytes(&self) -> impl Iterator<Item = u8> + '_ {
        self.buffer
            .chunks_exact(BYTES_PER_PIXEL)
            .flat_map(|rgba| rgba[..3].iter().copied())
    }

    fn index_of(&self, pixel: Point) -> Result<usize, PixelBufferError> {
        if !self.pixel_rect.contains_point(pixel) {
            return Err(PixelBufferError::PixelOutsideBounds {
                pixel,
                pixel_rect: self.pixel_rect,
            });
        }

        let relative_x = (pixel.x as i64 - self.pixel_rect.top_left().x as i64) as usize;
        let relative_y = (pixel.y as i64 - self.pixel_rect.top_left().y as i64) as usize;

        Ok((relative_y * self.pixel_rect.width() as usize + relative_x) * BYTES_PER_PIXEL)
    }

    pub fn set_pixel(&mut self, pixel: Point, colour: Colour) -> Result<(), PixelBufferError> {
        let index = self.index_of(pixel)?;

        self.buffer[index] = colour.r;
        self.buffer[index + 1] = colour.g;
        self.buffer[index + 2] = colour.b;
        self.buffer[index + 3] = OPAQUE;

        Ok(())
    }

    pub fn pixel(&self, pixel: Point) -> Result<[u8; BYTES_PER_PIXEL], PixelBufferError> {
        let index = self.index_of(pixel)?;

        Ok([
            self.buffer[index],
            self.buffer[index + 1],
            self.buffer[index + 2],
            self.buffer[index + 3],
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_pixel_rect(width: u32, height: u32) -> PixelRect {
        PixelRect::from_size(width, height).unwrap()
    }

    fn create_offset_pixel_rect(x: i32, y: i32, width: i32, height: i32) -> PixelRect {
        PixelRect::new(
            Point { x, y },
            Point {
                x: x + width - 1,
                y: y + height - 1,
            },
        )
        .unwrap()
    }

    #[test]
    fn test_new_creates_zeroed_buffer() {
        let pixel_rect = create_pixel_rect(10, 10);
        let buffer = PixelBuffer::new(pixel_rect);

        assert_eq!(buffer.pixel_rect(), pixel_rect);
        assert_eq!(buffer.buffer_size(), 400); // 10 * 10 * 4
        assert!(buffer.buffer().iter().all(|&b| b == 0));
    }

    #[test]
    fn test_from_data_valid() {
        let pixel_rect = create_pixel_rect(2, 1);
        let data: Vec<u8> = vec![
            255, 0, 0, 255, // (0,0) red
            0, 255, 0, 255, // (1,0) green
        ];

        let buffer = PixelBuffer::from_data(pixel_rect, data.clone()).unwrap();

        assert_eq!(buffer.buffer(), &data);
    }

    #[test]
    fn test_from_data_rejects_rgb_sized_buffer() {
        let pixel_rect = create_pixel_rect(2, 2);
        let data: Vec<u8> = vec![0; 12];

        assert_eq!(
            PixelBuffer::from_data(pixel_rect, data).unwrap_err(),
            PixelBufferError::BoundsMismatch {
                pixel_rect_size: 16,
                buffer_size: 12
            }
        );
    }

    #[test]
    fn test_set_pixel_writes_opaque_rgba() {
        let pixel_rect = create_pixel_rect(3, 3);
        let mut buffer = PixelBuffer::new(pixel_rect);

        buffer
            .set_pixel(Point { x: 1, y: 1 }, Colour::new(255, 10, 20))
            .unwrap();

        assert_eq!(&buffer.buffer()[16..20], &[255, 10, 20, 255]);
        assert_eq!(buffer.pixel(Point { x: 1, y: 1 }).unwrap(), [255, 10, 20, 255]);
    }

    #[test]
    fn test_set_pixel_bottom_right_corner() {
        let pixel_rect = create_pixel_rect(3, 3);
        let mut buffer = PixelBuffer::new(pixel_rect);

        buffer
            .set_pixel(Point { x: 2, y: 2 }, Colour::new(0, 0, 255))
            .unwrap();

        assert_eq!(&buffer.buffer()[32..36], &[0, 0, 255, 255]);
    }

    #[test]
    fn test_set_pixel_with_offset_rect() {
        let pixel_rect = create_offset_pixel_rect(10, 20, 3, 3);
        let mut buffer = PixelBuffer::new(pixel_rect);

        buffer
            .set_pixel(Point { x: 11, y: 21 }, Colour::new(255, 255, 255))
            .unwrap();

        assert_eq!(&buffer.buffer()[16..20], &[255, 255, 255, 255]);
    }

    #[test]
    fn test_set_pixel_outside_bounds() {
        let pixel_rect = create_pixel_rect(3, 3);
        let mut buffer = PixelBuffer::new(pixel_rect);
        let result = buffer.set_pixel(Point { x: 5, y: 1 }, Colour::BLACK);

        assert_eq!(
            result,
            Err(PixelBufferError::PixelOutsideBounds {
                pixel: Point { x: 5, y: 1 },
                pixel_rect
            })
        );
        assert!(buffer.pixel(Point { x: -1, y: -1 }).is_err());
    }

    #[test]
    fn test_rgb_bytes_drops_alpha() {
        let pixel_rect = create_pixel_rect(2, 1);
        let buffer =
            PixelBuffer::from_data(pixel_rect, vec![1, 2, 3, 255, 4, 5, 6, 255]).unwrap();

        assert_eq!(buffer.rgb_bytes().collect::<Vec<u8>>(), vec![1, 2, 3, 4, 5, 6]);
    }
}
