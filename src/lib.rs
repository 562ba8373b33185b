//! eachwise - element-wise helpers over caller-owned sequences
//!
//! # Overview
//!
//! Two small operations, usable on their own or together:
//!
//! - [`mutate`] replaces the element at an index, in place, with a value that
//!   is guaranteed to differ from the old one.
//! - [`iterate`] calls a callback with `(element, index, sequence)` for every
//!   element, in order, using forEach semantics.
//!
//! # Quick Start
//!
//! ```
//! use eachwise::{iterate, mutate};
//!
//! let mut numbers = vec![1, 2, 3];
//! iterate(&mut numbers, mutate);
//! assert_eq!(numbers, [2, 3, 4]);
//! ```
//!
//! # Dynamic API
//!
//! Values whose shape is only known at runtime go through [`Value`]. The
//! Array package exposes both operations as named functions and validates
//! their arguments:
//!
//! ```
//! use eachwise::stdlib::build_array_package;
//! use eachwise::{Error, Value};
//!
//! let package = build_array_package();
//! let do_to_elements = package.get("doToElementsInArray").unwrap();
//! let change = package.get("changeCompletely").unwrap();
//!
//! let array = Value::array([1, 2, 3].map(Value::int));
//! do_to_elements.call(&[array.clone(), change.clone()]).unwrap();
//! assert_eq!(array, Value::array([2, 3, 4].map(Value::int)));
//!
//! let err = do_to_elements.call(&[array, Value::int(0)]).unwrap_err();
//! assert!(matches!(err, Error::InvalidArgument(_)));
//! ```

// Error rendering utilities
pub mod error_renderer;
pub use error_renderer::{CharSet, RenderConfig, render_error, render_error_to};

// Re-export public API from eachwise_core
pub use eachwise_core::api::{Error, MutateOptions, OutOfRange};
pub use eachwise_core::sequence::{self, Sequence};
pub use eachwise_core::{Alter, iterate, mutate, mutate_with, mutator, try_iterate};

// Re-export commonly used values
pub use eachwise_core::stdlib;
pub use eachwise_core::values::{self, Function, NativeFn, NativeFunction, dynamic::Value};
