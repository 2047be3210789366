use crate::core::data::colour::Colour;
use crate::core::palettes::errors::PaletteError;
use crate::core::palettes::hex::parse_hex_colour;
use std::borrow::Cow;

/// Ordered anchor colours; order is interpolation order.
#[derive(Debug, Clone, PartialEq)]
pub struct Palette {
    anchors: Cow<'static, [Colour]>,
}

impl Palette {
    pub fn new(anchors: Vec<Colour>) -> Result<Self, PaletteError> {
        if anchors.len() < 2 {
            return Err(PaletteError::TooFewAnchors {
                count: anchors.len(),
            });
        }

        Ok(Self {
            anchors: Cow::Owned(anchors),
        })
    }

    pub fn from_hex<S: AsRef<str>>(values: &[S]) -> Result<Self, PaletteError> {
        let anchors = values
            .iter()
            .map(|value| parse_hex_colour(value.as_ref()))
            .collect::<Result<Vec<_>, _>>()?;

        Self::new(anchors)
    }

    // callers guarantee at least two anchors
    pub(crate) const fn from_static(anchors: &'static [Colour]) -> Self {
        Self {
            anchors: Cow::Borrowed(anchors),
        }
    }

    #[must_use]
    pub fn anchors(&self) -> &[Colour] {
        &self.anchors
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.anchors.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.anchors.is_empty()
    }

    #[must_use]
    pub fn interpolate(&self, t: f64) -> Colour {
        interpolate(&self.anchors, t)
    }
}

fn lerp_channel(from: u8, to: u8, weight: f64) -> u8 {
    let value = from as f64 + (to as f64 - from as f64) * weight;
    value.round().clamp(0.0, 255.0) as u8
}

/// Linear interpolation across `anchors` at position `t`.
///
/// `t` outside `[0, 1]` is clamped and NaN is treated as 0, so any input maps
/// to a valid colour. Fewer than two anchors degrade to the single anchor, or
/// black when there is none.
#[must_use]
pub fn interpolate(anchors: &[Colour], t: f64) -> Colour {
    match anchors {
        [] => return Colour::BLACK,
        [only] => return *only,
        _ => {}
    }

    let last_index = anchors.len() - 1;
    let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
    let position = t * last_index as f64;
    let i = (position.floor() as usize).min(last_index - 1);
    let weight = position - i as f64;

    let from = anchors[i];
    let to = anchors[i + 1];

    Colour {
        r: lerp_channel(from.r, to.r, weight),
        g: lerp_channel(from.g, to.g, weight),
        b: lerp_channel(from.b, to.b, weight),
    }
}
