//! Standard library packages.
//!
//! Each package is a set of native functions over dynamic values, registered
//! by name so that callers can look them up and invoke them directly.

pub mod array;

// Re-export for convenience
pub use array::{build_array_package, register_array_functions};
