use crate::core::actions::cancellation::Cancelled;
use std::error::Error;
use std::fmt;

/// Separates cancellation from algorithm failures so callers can drop the
/// former silently.
#[derive(Debug, PartialEq)]
pub enum GenerateFractalError<E> {
    Cancelled(Cancelled),
    Algorithm(E),
}

impl<E: fmt::Display> fmt::Display for GenerateFractalError<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Cancelled(c) => write!(f, "{}", c),
            Self::Algorithm(e) => write!(f, "algorithm error: {}", e),
        }
    }
}

impl<E: Error + 'static> Error for GenerateFractalError<E> {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Cancelled(c) => Some(c),
            Self::Algorithm(e) => Some(e),
        }
    }
}
