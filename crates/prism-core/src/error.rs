use prism_schema::registry::RegistryError;
use std::fmt;
use thiserror::Error as ThisError;

///
/// Error
///
/// Top-level engine error. Request errors are client-input validation
/// failures; schema errors are configuration problems surfaced by the
/// registry or startup validation.
///

#[derive(Debug, ThisError)]
pub enum Error {
    #[error(transparent)]
    Request(#[from] RequestError),

    #[error(transparent)]
    Schema(#[from] prism_schema::Error),
}

impl Error {
    #[must_use]
    pub const fn class(&self) -> ErrorClass {
        match self {
            Self::Request(_) => ErrorClass::InvalidRequest,
            Self::Schema(_) => ErrorClass::Config,
        }
    }
}

impl From<RegistryError> for Error {
    fn from(err: RegistryError) -> Self {
        Self::Schema(err.into())
    }
}

///
/// RequestError
///
/// Raised synchronously at resolution time and propagated unchanged to the
/// outermost `serialize` caller, so the request layer can translate it into
/// a client-facing validation error. A single offending field anywhere in a
/// nested selection invalidates the whole call.
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
pub enum RequestError {
    #[error("'{field}' is not a valid field name for '{entity}'")]
    UnknownField {
        entity: &'static str,
        field: String,
    },

    #[error("selection depth limit of {limit} exceeded while serializing '{entity}'")]
    DepthLimitExceeded {
        entity: &'static str,
        limit: usize,
    },
}

///
/// ErrorClass
/// Coarse classification for hosts that map errors onto response codes.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ErrorClass {
    Config,
    Internal,
    InvalidRequest,
}

impl fmt::Display for ErrorClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Config => "config",
            Self::Internal => "internal",
            Self::InvalidRequest => "invalid_request",
        };
        write!(f, "{label}")
    }
}
