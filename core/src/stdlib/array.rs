//! `Array` package: element-wise operations over dynamic arrays.
//!
//! Arguments are validated at call time. Anything of the wrong shape is
//! reported as [`Error::InvalidArgument`] before any element is touched.

use crate::{
    api::Error,
    format,
    iterate::try_iterate,
    mutate::mutate,
    values::{
        Function, NativeFunction, Package, PackageBuilder,
        binder::Binder,
        dynamic::{Array, Value},
    },
};

fn arity_error(name: &str, expected: usize, found: usize) -> Error {
    Error::invalid_argument(format!(
        "{} expects {} arguments, found {}",
        name, expected, found
    ))
}

/// Read a slot index; negative integers are rejected.
fn index_arg(value: &Value) -> Result<usize, Error> {
    let index = value.as_int()?;
    usize::try_from(index)
        .map_err(|_| Error::invalid_argument(format!("index must be non-negative, found {}", index)))
}

// ============================================================================
// Element Functions
// ============================================================================

/// Replace the element at `index` of `array` in place
///
/// `changeCompletely(element, index, array)` has the shape of a forEach
/// callback, so it can be passed straight to `doToElementsInArray`. The
/// replacement follows [`Alter`](crate::Alter) for values: ints increment,
/// bools negate.
///
/// # Edge Cases
///
/// - `index >= len`: fails with `IndexOutOfRange`
/// - negative `index`, or `array` not an array: fails with `InvalidArgument`
///
/// # Examples
/// - `changeCompletely(1, 0, [1, 2, 3])` → array becomes `[2, 2, 3]`
pub fn change_completely(args: &[Value]) -> Result<Value, Error> {
    let [element, index, array] = args else {
        return Err(arity_error("changeCompletely", 3, args.len()));
    };
    let index = index_arg(index)?;
    let mut array = array.as_array()?.clone();

    mutate(element.clone(), index, &mut array)?;
    Ok(Value::Null)
}

/// Call `callback(element, index, array)` for every element of `array`
///
/// Iteration follows forEach semantics: indices present at the start are
/// visited once each, in order. The first callback error stops iteration and
/// is returned.
///
/// # Edge Cases
///
/// - Empty array: the callback is never called
/// - `array` not an array, or `callback` not a function: fails with
///   `InvalidArgument` without calling anything
///
/// # Examples
/// - `doToElementsInArray([1, 2, 3], changeCompletely)` → array becomes `[2, 3, 4]`
pub fn do_to_elements_in_array(args: &[Value]) -> Result<Value, Error> {
    let [array, callback] = args else {
        return Err(arity_error("doToElementsInArray", 2, args.len()));
    };
    let mut array = match array {
        Value::Array(array) => array.clone(),
        other => {
            return Err(Error::invalid_argument(format!(
                "{} is not iterable",
                other.kind()
            )));
        }
    };
    let callback = match callback {
        Value::Function(callback) => &**callback,
        other => {
            return Err(Error::invalid_argument(format!(
                "callback is not a function, found {}",
                other.kind()
            )));
        }
    };

    try_iterate(&mut array, |element, index, array: &mut Array| {
        callback
            .call(&[element, Value::Int(index as i64), Value::Array(array.clone())])
            .map(drop)
    })?;
    Ok(Value::Null)
}

// ============================================================================
// Package Registration
// ============================================================================

/// Register all Array functions into a builder.
///
/// Functions are bound under their own names, so this works with any binder.
pub fn register_array_functions<B>(builder: B) -> B
where
    B: Binder,
{
    let builder = NativeFunction::new("changeCompletely", change_completely).register(builder);
    NativeFunction::new("doToElementsInArray", do_to_elements_in_array).register(builder)
}

/// Build the Array package.
///
/// # Panics
///
/// Panics if two functions share a name, which is a bug in this module.
pub fn build_array_package() -> Package {
    register_array_functions(PackageBuilder::new())
        .build()
        .expect("duplicate binding in package - check function names")
}

#[cfg(test)]
#[path = "array_test.rs"]
mod array_test;
