use std::fmt;

use crate::point::ParsePointError;

/// Crate errors
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Malformed transaction output point
    Point(ParsePointError),
    /// Command has been retired, with a hint for the user
    Obsolete(&'static str),
    /// Command exists but does nothing yet
    NotImplemented(&'static str),
}

impl From<ParsePointError> for Error {
    fn from(e: ParsePointError) -> Self {
        Self::Point(e)
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Point(e) => fmt::Display::fmt(e, f),
            Self::Obsolete(msg) => f.write_str(msg),
            Self::NotImplemented(cmd) => write!(f, "{cmd} is not implemented"),
        }
    }
}

impl std::error::Error for Error {}

/// Crate `Result` type
pub type Result<T, E = Error> = core::result::Result<T, E>;
