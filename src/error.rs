use std::error;
use std::fmt;
use std::io;
use std::result;

/// The error type for dictionary operations.
#[derive(Debug)]
pub enum Error {
    /// The key was absent: empty, or only whitespace. The dictionary is left unchanged.
    InvalidKey,
    /// The engine name did not match any known balancing scheme.
    UnknownEngine(String),
    /// Reading a batch of keys failed.
    IOError(io::Error),
}

impl From<io::Error> for Error {
    fn from(err: io::Error) -> Error {
        Error::IOError(err)
    }
}

impl error::Error for Error {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self {
            Error::IOError(error) => Some(error),
            _ => None,
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::InvalidKey => write!(f, "key cannot be empty"),
            Error::UnknownEngine(name) => write!(
                f,
                "unknown engine `{}`, expected `height-balanced` or `color-balanced`",
                name,
            ),
            Error::IOError(error) => write!(f, "{}", error),
        }
    }
}

pub type Result<T> = result::Result<T, Error>;
