use std::{fmt, io, sync::Arc};

use howl::ArgumentError;

#[derive(Debug, Clone)]
pub enum Error {
    HowlError(howl::Error),
    TomlError(Arc<toml::de::Error>),
    IoError(Arc<io::Error>),
}

impl Error {
    /// The text of a failed argument conversion, which is meant for the invoker.
    pub fn converter_message(&self) -> Option<&str> {
        match self {
            Self::HowlError(howl::Error::ConverterError(message)) => Some(message),
            _ => None,
        }
    }
}

impl ArgumentError for Error {
    fn is_bad_argument(&self) -> bool {
        matches!(self, Self::HowlError(e) if e.is_bad_argument())
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::HowlError(e) => write!(f, "{e}"),
            Self::TomlError(e) => write!(f, "invalid config: {e}"),
            Self::IoError(e) => write!(f, "could not read config: {e}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::HowlError(e) => Some(e),
            Self::TomlError(e) => Some(e.as_ref()),
            Self::IoError(e) => Some(e.as_ref()),
        }
    }
}

impl From<howl::Error> for Error {
    fn from(value: howl::Error) -> Self {
        Self::HowlError(value)
    }
}

impl From<toml::de::Error> for Error {
    fn from(value: toml::de::Error) -> Self {
        Self::TomlError(Arc::new(value))
    }
}

impl From<io::Error> for Error {
    fn from(value: io::Error) -> Self {
        Self::IoError(Arc::new(value))
    }
}
