use crate::core::data::viewport::Viewport;
use std::fmt;

const POSITION_DECIMALS: usize = 12;
const ZOOM_DIGITS: usize = 8;

/// Read-out of where the view is, formatted for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Telemetry {
    pub real_position: String,
    pub imag_position: String,
    pub zoom_scale: String,
}

impl Telemetry {
    #[must_use]
    pub fn from_viewport(viewport: Viewport) -> Self {
        Self {
            real_position: format!("{:.*}", POSITION_DECIMALS, viewport.center_x()),
            imag_position: format!("{:.*}", POSITION_DECIMALS, viewport.center_y()),
            zoom_scale: format_exponential(viewport.zoom(), ZOOM_DIGITS),
        }
    }
}

impl fmt::Display for Telemetry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "REAL_POSITION  {}", self.real_position)?;
        writeln!(f, "IMAG_POSITION  {}", self.imag_position)?;
        write!(f, "ZOOM_SCALE     {}", self.zoom_scale)
    }
}

/// Scientific notation with an explicitly signed exponent, e.g. `1.50000000e+0`.
#[must_use]
pub fn format_exponential(value: f64, digits: usize) -> String {
    let formatted = format!("{:.*e}", digits, value);

    match formatted.split_once('e') {
        Some((mantissa, exponent)) if !exponent.starts_with('-') => {
            format!("{}e+{}", mantissa, exponent)
        }
        _ => formatted,
    }
}
