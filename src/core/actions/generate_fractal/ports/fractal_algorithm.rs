use crate::core::data::pixel_rect::PixelRect;
use crate::core::data::point::Point;
use std::error::Error;

/// Per-pixel computation over a fixed frame.
pub trait FractalAlgorithm {
    type Success;
    type Failure: Error;

    /// The frame every `compute` call is relative to.
    fn pixel_rect(&self) -> PixelRect;

    fn compute(&self, pixel: Point) -> Result<Self::Success, Self::Failure>;
}
