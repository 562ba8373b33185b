//! Callable values.
//!
//! This module defines the `Function` trait, which represents callable values
//! in the dynamic layer, and `NativeFunction`, which adapts ordinary Rust
//! functions and closures to it.

use super::binder::Binder;
use super::dynamic::Value;
use crate::ToString;
use crate::api::Error;

// ============================================================================
// Function Trait
// ============================================================================

/// Trait for callable dynamic values.
///
/// Arguments arrive unchecked: implementations validate arity and argument
/// kinds themselves and report problems as [`Error::InvalidArgument`].
pub trait Function {
    /// Name used for registration and in debug output.
    fn name(&self) -> &str;

    fn call(&self, args: &[Value]) -> Result<Value, Error>;

    /// Register this function in a binder under its own name.
    fn register<B>(self, builder: B) -> B
    where
        Self: Sized + 'static,
        B: Binder,
    {
        let name = self.name().to_string();
        builder.bind(&name, Value::function(self))
    }
}

/// Type alias for native function pointers.
///
/// # Example
///
/// ```
/// use eachwise_core::Error;
/// use eachwise_core::values::{NativeFn, dynamic::Value};
///
/// fn array_len(args: &[Value]) -> Result<Value, Error> {
///     let [array] = args else {
///         return Err(Error::invalid_argument("Len expects 1 argument"));
///     };
///     Ok(Value::int(array.as_array()?.len() as i64))
/// }
///
/// let len: NativeFn = array_len;
/// ```
pub type NativeFn = fn(&[Value]) -> Result<Value, Error>;

/// Wrapper for native Rust functions and closures.
///
/// Implements the `Function` trait by delegating to the wrapped function.
pub struct NativeFunction<F = NativeFn> {
    name: &'static str,
    func: F,
}

impl<F> NativeFunction<F>
where
    F: Fn(&[Value]) -> Result<Value, Error>,
{
    pub fn new(name: &'static str, func: F) -> Self {
        Self { name, func }
    }
}

impl<F> Function for NativeFunction<F>
where
    F: Fn(&[Value]) -> Result<Value, Error>,
{
    fn name(&self) -> &str {
        self.name
    }

    #[inline]
    fn call(&self, args: &[Value]) -> Result<Value, Error> {
        (self.func)(args)
    }
}
