//! Error types for colfmt.
//!
//! Formatting itself cannot fail; every error here comes from a sink that
//! refused an element.

use std::fmt;
use std::io;

/// Result type alias for colfmt operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for colfmt operations.
#[derive(Debug)]
pub enum Error {
    /// I/O error from an `io::Write`-backed sink.
    Io(io::Error),
    /// Error from a `fmt::Write`-backed sink.
    Fmt(fmt::Error),
    /// A fixed-size slice sink has no room for another element.
    SliceFull { capacity: usize },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::Fmt(e) => write!(f, "formatter error: {e}"),
            Self::SliceFull { capacity } => {
                write!(f, "output slice full: capacity {capacity} exhausted")
            }
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::Fmt(e) => Some(e),
            Self::SliceFull { .. } => None,
        }
    }
}

impl From<io::Error> for Error {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<fmt::Error> for Error {
    fn from(e: fmt::Error) -> Self {
        Self::Fmt(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn test_error_display() {
        let err = Error::SliceFull { capacity: 8 };
        assert!(err.to_string().contains("capacity 8"));

        let err = Error::Fmt(fmt::Error);
        assert!(err.to_string().starts_with("formatter error"));
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = io::Error::new(io::ErrorKind::BrokenPipe, "test");
        let err: Error = io_err.into();
        assert!(matches!(err, Error::Io(_)));
        assert!(err.source().is_some());
    }

    #[test]
    fn test_slice_full_has_no_source() {
        assert!(Error::SliceFull { capacity: 0 }.source().is_none());
    }
}
