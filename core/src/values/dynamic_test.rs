//! Tests for the dynamic Value API

use crate::{
    Error, iterate, mutate,
    mutate::Alter,
    values::{
        binder::{Binder, Error as BindError},
        dynamic::{Array, Value},
        function::{Function, NativeFunction},
        package::PackageBuilder,
    },
};
use pretty_assertions::assert_eq;

fn ints(values: &[i64]) -> Value {
    Value::array(values.iter().copied().map(Value::int))
}

// ============================================================================
// Extractors
// ============================================================================

#[test]
fn test_dynamic_int() {
    let value = Value::int(42);
    assert_eq!(value.as_int().unwrap(), 42);
    assert_eq!(value.kind(), "int");
}

#[test]
fn test_dynamic_type_mismatch() {
    let value = Value::str("hello");

    assert_eq!(
        value.as_int(),
        Err(Error::invalid_argument("expected int, found string"))
    );
    assert_eq!(value.as_str().unwrap(), "hello");
}

#[test]
fn test_call_non_function_is_invalid_argument() {
    let value = Value::int(1);

    let err = value.call(&[]).unwrap_err();

    assert_eq!(err, Error::invalid_argument("expected function, found int"));
}

#[test]
fn test_call_native_function() {
    fn double(args: &[Value]) -> Result<Value, Error> {
        Ok(Value::int(args[0].as_int()? * 2))
    }
    let func = Value::function(NativeFunction::new("double", double));

    assert_eq!(func.call(&[Value::int(21)]).unwrap(), Value::int(42));
    assert_eq!(func.as_function().unwrap().name(), "double");
}

// ============================================================================
// Equality and formatting
// ============================================================================

#[test]
fn test_functions_compare_by_identity() {
    let a = Value::native("f", |_| Ok(Value::Null));
    let b = Value::native("f", |_| Ok(Value::Null));

    assert_eq!(a, a.clone());
    assert_ne!(a, b);
}

#[test]
fn test_debug_output() {
    let value = Value::array([
        Value::int(1),
        Value::float(2.0),
        Value::str("three"),
        Value::bool(true),
        Value::Null,
    ]);

    assert_eq!(format!("{:?}", value), r#"[1, 2., "three", true, null]"#);
    assert_eq!(format!("{}", Value::str("plain")), "plain");
}

/// Builds `[head, <itself>]`.
fn self_containing(head: i64) -> Value {
    let value = ints(&[head]);
    value.as_array().unwrap().push(value.clone());
    value
}

fn break_cycle(value: &Value) {
    value.as_array().unwrap().truncate(0);
}

#[test]
fn test_cyclic_arrays_compare() {
    let first = self_containing(1);
    let second = self_containing(1);
    let different = self_containing(2);

    assert!(first == first.clone());
    assert!(first == second);
    assert!(first != different);
    assert!(first != ints(&[1, 1]));

    for value in [&first, &second, &different] {
        break_cycle(value);
    }
}

#[test]
fn test_cyclic_arrays_debug() {
    let direct = self_containing(1);
    let outer = ints(&[]);
    let inner = Value::array([outer.clone()]);
    outer.as_array().unwrap().push(inner.clone());

    assert_eq!(format!("{:?}", direct), "[1, [...]]");
    assert_eq!(format!("{:?}", outer), "[[[...]]]");
    assert_eq!(format!("{}", direct), "[1, [...]]");

    break_cycle(&direct);
    break_cycle(&outer);
}

#[test]
fn test_repeated_array_is_not_a_cycle() {
    let shared = ints(&[1]);
    let value = Value::array([shared.clone(), shared]);

    assert_eq!(format!("{:?}", value), "[[1], [1]]");
    assert_eq!(value, Value::array([ints(&[1]), ints(&[1])]));
}

// ============================================================================
// Arrays
// ============================================================================

#[test]
fn test_array_clones_share_storage() {
    let value = ints(&[1, 2]);
    let alias = value.clone();

    value.as_array().unwrap().push(Value::int(3));

    assert_eq!(alias, ints(&[1, 2, 3]));
    assert!(alias.as_array().unwrap().ptr_eq(value.as_array().unwrap()));
}

#[test]
fn test_array_iterate_and_mutate() {
    let mut array = ints(&[1, 2, 3]).as_array().unwrap().clone();

    iterate(&mut array, mutate);

    assert_eq!(array.to_vec(), [Value::int(2), Value::int(3), Value::int(4)]);
}

#[test]
fn test_callback_may_mutate_array_during_iteration() {
    let mut array = ints(&[1, 2]).as_array().unwrap().clone();
    let mut seen = Vec::new();

    iterate(&mut array, |element, _, array: &mut Array| {
        array.push(Value::int(0));
        seen.push(element);
    });

    assert_eq!(seen, [Value::int(1), Value::int(2)]);
    assert_eq!(array.len(), 4);
}

#[test]
fn test_alter_rules() {
    assert_eq!(Value::int(i64::MAX).altered(), Ok(Value::int(i64::MIN)));
    assert_eq!(Value::bool(false).altered(), Ok(Value::bool(true)));
    assert_eq!(
        Value::str("x").altered(),
        Err(Error::invalid_argument("no replacement rule for string elements"))
    );
}

#[test]
fn test_mutate_unsupported_element_leaves_array_untouched() {
    let mut array = Array::new(vec![Value::float(1.5)]);

    let err = mutate(Value::Null, 0, &mut array).unwrap_err();

    assert_eq!(err, Error::invalid_argument("no replacement rule for float elements"));
    assert_eq!(array.get(0), Some(Value::float(1.5)));
}

// ============================================================================
// Binder
// ============================================================================

#[test]
fn test_package_lookup() {
    let package = PackageBuilder::new()
        .bind("b", Value::int(2))
        .bind("a", Value::int(1))
        .build()
        .unwrap();

    assert_eq!(package.len(), 2);
    assert_eq!(package.get("a"), Some(&Value::int(1)));
    assert_eq!(package.get("missing"), None);
    let names: Vec<&str> = package.iter().map(|(name, _)| name).collect();
    assert_eq!(names, ["a", "b"]);
}

#[test]
fn test_package_duplicate_binding() {
    let result = PackageBuilder::new()
        .bind("x", Value::int(1))
        .bind("x", Value::int(2))
        .build();

    let err = result.unwrap_err();
    assert_eq!(err, BindError::DuplicateBinding(vec!["x".to_string()]));
    assert_eq!(err.to_string(), "Duplicate binding for 'x'");
}

#[test]
fn test_function_registers_under_its_name() {
    let package = NativeFunction::new("Noop", |_: &[Value]| Ok(Value::Null))
        .register(PackageBuilder::new())
        .build()
        .unwrap();

    assert!(package.get("Noop").unwrap().as_function().is_ok());
}
