//! Public error type for eachwise operations.

use crate::String;

/// Error returned by every fallible eachwise operation.
///
/// Errors surface immediately to the caller; nothing is retried or logged
/// on the caller's behalf.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// A required argument is missing or has the wrong shape (e.g. a callback
    /// that is not a function, or a "sequence" that is not an array).
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// An index outside `0..len` was given to an operation that writes a slot.
    #[error("index {index} is out of range for a sequence of length {len}")]
    IndexOutOfRange { index: usize, len: usize },
}

impl Error {
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Error::InvalidArgument(message.into())
    }

    /// Stable diagnostic code, suitable for documentation lookup.
    pub fn code(&self) -> &'static str {
        match self {
            Error::InvalidArgument(_) => "eachwise::invalid_argument",
            Error::IndexOutOfRange { .. } => "eachwise::index_out_of_range",
        }
    }

    /// A hint on how to fix the error, if there is one.
    pub fn help(&self) -> Option<&'static str> {
        match self {
            Error::InvalidArgument(_) => None,
            Error::IndexOutOfRange { .. } => {
                Some("use `OutOfRange::Ignore` to turn out-of-range writes into no-ops")
            }
        }
    }
}
