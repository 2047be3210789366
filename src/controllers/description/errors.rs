use std::{error::Error, fmt};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DescribeError {
    NonFiniteView,
    Service { message: String },
}

impl fmt::Display for DescribeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonFiniteView => write!(f, "view coordinates must be finite"),
            Self::Service { message } => write!(f, "description service failed: {}", message),
        }
    }
}

impl Error for DescribeError {}
