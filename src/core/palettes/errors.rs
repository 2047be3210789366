use std::{error::Error, fmt};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PaletteError {
    TooFewAnchors { count: usize },
    InvalidHex { value: String },
}

impl fmt::Display for PaletteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TooFewAnchors { count } => {
                write!(f, "a palette needs at least 2 colours, got {}", count)
            }
            Self::InvalidHex { value } => {
                write!(f, "invalid hex colour '{}', expected #rrggbb", value)
            }
        }
    }
}

impl Error for PaletteError {}
