use crate::controllers::renderer::errors::RenderError;
use crate::core::data::viewport::ViewportError;
use crate::core::fractals::escape_time::errors::ConfigError;
use std::{error::Error, fmt, io};

#[derive(Debug)]
pub enum CliError {
    UnknownPreset { name: String },
    UnknownBookmark { name: String },
    /// Only one of the real and imaginary equations was given.
    IncompleteEquations,
    Config(ConfigError),
    Render(RenderError),
    Io(io::Error),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownPreset { name } => write!(f, "unknown preset '{}'", name),
            Self::UnknownBookmark { name } => {
                write!(f, "no bookmark named '{}' for the selected equations", name)
            }
            Self::IncompleteEquations => {
                write!(f, "custom equations need both --real and --imag")
            }
            Self::Config(err) => write!(f, "invalid configuration: {}", err),
            Self::Render(err) => write!(f, "render failed: {}", err),
            Self::Io(err) => write!(f, "could not write output: {}", err),
        }
    }
}

impl Error for CliError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Config(err) => Some(err),
            Self::Render(err) => Some(err),
            Self::Io(err) => Some(err),
            Self::UnknownPreset { .. } | Self::UnknownBookmark { .. } | Self::IncompleteEquations => {
                None
            }
        }
    }
}

impl From<ConfigError> for CliError {
    fn from(err: ConfigError) -> Self {
        Self::Config(err)
    }
}

impl From<ViewportError> for CliError {
    fn from(err: ViewportError) -> Self {
        Self::Config(ConfigError::from(err))
    }
}

impl From<RenderError> for CliError {
    fn from(err: RenderError) -> Self {
        Self::Render(err)
    }
}

impl From<io::Error> for CliError {
    fn from(err: io::Error) -> Self {
        Self::Io(err)
    }
}
