//! Error types for shading-core.

use thiserror::Error;

/// Errors raised by the easing catalogue, geometry builders and gradient config.
#[derive(Error, Debug)]
pub enum Error {
    /// A precondition on an argument was violated.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// A table index fell outside its bounds.
    #[error("Index {index} out of range (0..{len})")]
    OutOfRange { index: i64, len: usize },

    /// Gradient configuration could not be parsed or written.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    pub(crate) fn invalid(msg: impl Into<String>) -> Self {
        Error::InvalidArgument(msg.into())
    }
}

/// Result type alias for shading-core operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Convert a signed index into a checked position in a table of `len` entries.
pub(crate) fn check_index(index: i64, len: usize) -> Result<usize> {
    usize::try_from(index)
        .ok()
        .filter(|&i| i < len)
        .ok_or(Error::OutOfRange { index, len })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = Error::invalid("polygon requires 3+ sides");
        assert_eq!(err.to_string(), "Invalid argument: polygon requires 3+ sides");

        let err = Error::OutOfRange { index: 31, len: 31 };
        assert_eq!(err.to_string(), "Index 31 out of range (0..31)");
    }

    #[test]
    fn check_index_bounds() {
        assert_eq!(check_index(0, 3).unwrap(), 0);
        assert_eq!(check_index(2, 3).unwrap(), 2);
        assert!(matches!(check_index(3, 3), Err(Error::OutOfRange { index: 3, len: 3 })));
        assert!(matches!(check_index(-1, 3), Err(Error::OutOfRange { index: -1, .. })));
    }
}
