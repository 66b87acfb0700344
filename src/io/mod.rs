#[cfg(feature = "svg-io")]
pub mod svg;

use crate::errors::GeneratorError;

/// Errors raised while rendering or writing generator output.
#[derive(Debug)]
pub enum IoError {
    StdIo(std::io::Error),
    /// A generator rejected the requested construction.
    Generator(GeneratorError),
}

impl std::fmt::Display for IoError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        use IoError::*;

        match self {
            StdIo(error) => write!(f, "std::io::Error: {error}"),
            Generator(error) => write!(f, "Could not generate construction: {error}"),
        }
    }
}

impl std::error::Error for IoError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            IoError::StdIo(error) => Some(error),
            IoError::Generator(error) => Some(error),
        }
    }
}

impl From<std::io::Error> for IoError {
    fn from(value: std::io::Error) -> Self {
        Self::StdIo(value)
    }
}

impl From<GeneratorError> for IoError {
    fn from(value: GeneratorError) -> Self {
        Self::Generator(value)
    }
}
