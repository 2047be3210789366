use crate::core::data::colour::Colour;
use std::error::Error;

/// Maps one per-pixel result onto a colour.
pub trait ColourMap<T> {
    type Failure: Error;

    fn map(&self, value: T) -> Result<Colour, Self::Failure>;

    fn display_name(&self) -> &str;
}
