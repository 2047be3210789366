use std::{error::Error, fmt};

/// Which of the two update rules an error belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EquationSide {
    Real,
    Imaginary,
}

impl fmt::Display for EquationSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Real => f.write_str("real"),
            Self::Imaginary => f.write_str("imaginary"),
        }
    }
}

/// A syntax or name error at a byte offset of one expression.
#[derive(Debug, Clone, PartialEq)]
pub enum ParseError {
    Empty,
    UnexpectedCharacter { character: char, position: usize },
    InvalidNumber { text: String, position: usize },
    UnexpectedToken { found: String, position: usize },
    UnexpectedEnd { expected: &'static str },
    UnknownVariable { name: String, position: usize },
    UnknownFunction { name: String, position: usize },
    WrongArgumentCount {
        function: &'static str,
        expected: usize,
        found: usize,
        position: usize,
    },
    TooDeep { limit: usize, position: usize },
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => f.write_str("expression is empty"),
            Self::UnexpectedCharacter {
                character,
                position,
            } => {
                write!(f, "unexpected character '{}' at {}", character, position)
            }
            Self::InvalidNumber { text, position } => {
                write!(f, "invalid number '{}' at {}", text, position)
            }
            Self::UnexpectedToken { found, position } => {
                write!(f, "unexpected {} at {}", found, position)
            }
            Self::UnexpectedEnd { expected } => {
                write!(f, "unexpected end of expression, expected {}", expected)
            }
            Self::UnknownVariable { name, position } => {
                write!(
                    f,
                    "unknown name '{}' at {} (available: x, y, x0, y0, pi, e)",
                    name, position
                )
            }
            Self::UnknownFunction { name, position } => {
                write!(f, "unknown function '{}' at {}", name, position)
            }
            Self::WrongArgumentCount {
                function,
                expected,
                found,
                position,
            } => {
                write!(
                    f,
                    "{} takes {} argument(s), got {} at {}",
                    function, expected, found, position
                )
            }
            Self::TooDeep { limit, position } => {
                write!(
                    f,
                    "expression nests deeper than {} levels at {}",
                    limit, position
                )
            }
        }
    }
}

impl Error for ParseError {}

#[derive(Debug, Clone, PartialEq)]
pub struct FormulaError {
    pub side: EquationSide,
    pub error: ParseError,
}

impl fmt::Display for FormulaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} equation: {}", self.side, self.error)
    }
}

impl Error for FormulaError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        Some(&self.error)
    }
}
