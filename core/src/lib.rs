#![cfg_attr(all(not(feature = "std"), not(test)), no_std)]
#![deny(unsafe_code)]

//! Element-wise utilities over caller-owned sequences.
//!
//! The crate exposes two leaf operations:
//!
//! - [`mutate`]: replace the value stored at an index, in place.
//! - [`iterate`]: apply a callback to every element, front to back.
//!
//! Both work on any [`Sequence`] and compose directly:
//!
//! ```
//! use eachwise_core::{iterate, mutate};
//!
//! let mut numbers = vec![1, 2, 3];
//! iterate(&mut numbers, mutate);
//! assert_eq!(numbers, [2, 3, 4]);
//! ```
//!
//! A dynamically typed layer ([`values::dynamic::Value`]) and the
//! [`stdlib::array`] package expose the same operations to callers that
//! cannot check their arguments statically.

// This works on std and no_std and is harmless.
extern crate alloc;

// Exports some symbols publicly so that downstream crates can refer to them uniformly.
#[doc(hidden)]
pub mod shim {
    pub use alloc::{boxed::Box, format, rc::Rc, string::String, string::ToString, vec, vec::Vec};
}

// Re-export (crate only) for convenience so other modules don't need alloc:: prefix
#[allow(unused_imports)]
pub(crate) use shim::*;

pub mod api;
pub mod iterate;
pub mod mutate;
pub mod sequence;
pub mod stdlib;
pub mod values;

pub use api::{Error, MutateOptions, OutOfRange};
pub use iterate::{iterate, try_iterate};
pub use mutate::{Alter, mutate, mutate_with, mutator};
pub use sequence::Sequence;

/// Test utilities for enabling logging in tests
#[cfg(test)]
pub mod test_utils {
    /// Initialize tracing subscriber for tests with DEBUG level
    /// Call this at the start of tests where you want to see logging output
    ///
    /// # Example
    /// ```ignore
    /// #[test]
    /// fn test_skips_removed_indices() {
    ///     test_utils::init_test_logging();
    ///     // ... your test code
    /// }
    /// ```
    pub fn init_test_logging() {
        use tracing_subscriber::{EnvFilter, fmt};

        // Try to initialize, ignore error if already initialized
        let _ = fmt()
            .with_env_filter(
                EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug")),
            )
            .with_test_writer()
            .try_init();
    }
}
