use crate::core::data::colour::Colour;
use crate::core::palettes::errors::PaletteError;

const fn hex_digit(byte: u8) -> Option<u8> {
    match byte {
        b'0'..=b'9' => Some(byte - b'0'),
        b'a'..=b'f' => Some(byte - b'a' + 10),
        b'A'..=b'F' => Some(byte - b'A' + 10),
        _ => None,
    }
}

/// Decodes `#rrggbb` (the `#` is optional, digits are case-insensitive).
#[must_use]
pub const fn decode_hex_colour(value: &str) -> Option<Colour> {
    let bytes = value.as_bytes();
    let offset = if !bytes.is_empty() && bytes[0] == b'#' { 1 } else { 0 };

    if bytes.len() - offset != 6 {
        return None;
    }

    let mut channels = [0u8; 3];
    let mut i = 0;

    while i < 3 {
        let high = match hex_digit(bytes[offset + 2 * i]) {
            Some(digit) => digit,
            None => return None,
        };
        let low = match hex_digit(bytes[offset + 2 * i + 1]) {
            Some(digit) => digit,
            None => return None,
        };

        channels[i] = high * 16 + low;
        i += 1;
    }

    Some(Colour::new(channels[0], channels[1], channels[2]))
}

pub fn parse_hex_colour(value: &str) -> Result<Colour, PaletteError> {
    decode_hex_colour(value).ok_or_else(|| PaletteError::InvalidHex {
        value: value.to_string(),
    })
}

/// Compile-time anchor for the built-in palette tables.
pub(crate) const fn hex(value: &str) -> Colour {
    match decode_hex_colour(value) {
        Some(colour) => colour,
        None => panic!("built-in palette anchor is not #rrggbb"),
    }
}
