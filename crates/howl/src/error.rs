use std::{fmt, sync::Arc};

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, Clone)]
pub enum Error {
    ReqwestError(Arc<reqwest::Error>),
    HttpError { status: u16, message: String },
    NotFound,
    MissingParameter,
    /// An argument could not be resolved; the message is shown to the invoker as is.
    ConverterError(String),
    NotInServer,
    InternalError,
}

impl Error {
    pub fn converter<I: Into<String>>(message: I) -> Self {
        Self::ConverterError(message.into())
    }
}

/// Separates an argument that didn't convert from a lookup that failed
/// outright, so optional arguments only absorb the former.
pub trait ArgumentError {
    fn is_bad_argument(&self) -> bool;
}

impl ArgumentError for Error {
    fn is_bad_argument(&self) -> bool {
        matches!(self, Self::ConverterError(_) | Self::MissingParameter)
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ReqwestError(e) => write!(f, "request failed: {e}"),
            Self::HttpError { status, message } => write!(f, "api returned {status}: {message}"),
            Self::NotFound => f.write_str("not found"),
            Self::MissingParameter => f.write_str("missing a required argument"),
            Self::ConverterError(message) => f.write_str(message),
            Self::NotInServer => f.write_str("this command can only be used in a server"),
            Self::InternalError => f.write_str("internal error"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ReqwestError(e) => Some(e.as_ref()),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for Error {
    fn from(value: reqwest::Error) -> Self {
        Self::ReqwestError(Arc::new(value))
    }
}
