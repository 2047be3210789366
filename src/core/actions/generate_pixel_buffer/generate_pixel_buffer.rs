use crate::core::actions::cancellation::{CANCEL_CHECK_INTERVAL_PIXELS, CancelToken, Cancelled};
use crate::core::actions::generate_pixel_buffer::ports::colour_map::ColourMap;
use crate::core::data::colour::Colour;
use crate::core::data::pixel_buffer::{
    BYTES_PER_PIXEL, OPAQUE, PixelBuffer, PixelBufferData, PixelBufferError,
};
use crate::core::data::pixel_rect::PixelRect;
use std::error::Error;
use std::fmt;

#[derive(Debug, PartialEq)]
pub enum GeneratePixelBufferError<E> {
    Cancelled(Cancelled),
    ColourMap(E),
    PixelBuffer(PixelBufferError),
}

impl<E: fmt::Display> fmt::Display for GeneratePixelBufferError<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Cancelled(c) => write!(f, "{}", c),
            Self::ColourMap(err) => write!(f, "colour map error: {}", err),
            Self::PixelBuffer(err) => write!(f, "pixel buffer error: {}", err),
        }
    }
}

impl<E: Error + 'static> Error for GeneratePixelBufferError<E> {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Cancelled(c) => Some(c),
            Self::ColourMap(err) => Some(err),
            Self::PixelBuffer(err) => Some(err),
        }
    }
}

impl<E> From<PixelBufferError> for GeneratePixelBufferError<E> {
    fn from(err: PixelBufferError) -> Self {
        Self::PixelBuffer(err)
    }
}

/// Maps row-major per-pixel values into an opaque RGBA frame.
///
/// Streams into a buffer preallocated to `pixel_rect.size() * 4` bytes and
/// polls the token every [`CANCEL_CHECK_INTERVAL_PIXELS`] pixels. The input
/// length must match the frame exactly.
pub fn generate_pixel_buffer<T, CMap, C>(
    input: Vec<T>,
    mapper: &CMap,
    pixel_rect: PixelRect,
    cancel: &C,
) -> Result<PixelBuffer, GeneratePixelBufferError<CMap::Failure>>
where
    CMap: ColourMap<T>,
    C: CancelToken,
{
    let buffer_size = pixel_rect.size() as usize * BYTES_PER_PIXEL;
    let mut buffer: PixelBufferData = Vec::with_capacity(buffer_size);

    for (i, value) in input.into_iter().enumerate() {
        if i % CANCEL_CHECK_INTERVAL_PIXELS == 0 && cancel.is_cancelled() {
            return Err(GeneratePixelBufferError::Cancelled(Cancelled));
        }

        let Colour { r, g, b } = mapper
            .map(value)
            .map_err(GeneratePixelBufferError::ColourMap)?;

        buffer.extend_from_slice(&[r, g, b, OPAQUE]);
    }

    Ok(PixelBuffer::from_data(pixel_rect, buffer)?)
}
