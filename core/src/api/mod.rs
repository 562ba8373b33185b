//! Public API types shared by every operation.
//!
//! - [`Error`]: the error type returned by all fallible operations.
//! - [`MutateOptions`]: configuration for [`mutate_with`](crate::mutate_with)
//!   and [`mutator`](crate::mutator).

pub mod error;
pub mod options;

pub use error::Error;
pub use options::{MutateOptions, OutOfRange};
