//! Dynamically typed values.
//!
//! `Value` lets callers that cannot check their arguments statically use the
//! same operations as the typed API. Arrays have reference semantics: cloning
//! a `Value::Array` shares the underlying storage, so a callback that receives
//! the array can mutate it in place.

use crate::{
    Rc, String, ToString, Vec, format,
    api::Error,
    mutate::Alter,
    sequence::Sequence,
    values::function::{Function, NativeFunction},
};

use core::cell::RefCell;

#[derive(Clone)]
pub enum Value {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(Rc<str>),
    Array(Array),
    Function(Rc<dyn Function>),
}

// Values are tied to the thread that created them.
static_assertions::assert_not_impl_any!(Value: Send, Sync);

impl Value {
    // ============================================================================
    // Constructors
    // ============================================================================

    pub fn int(value: i64) -> Self {
        Value::Int(value)
    }

    pub fn float(value: f64) -> Self {
        Value::Float(value)
    }

    pub fn bool(value: bool) -> Self {
        Value::Bool(value)
    }

    pub fn str(value: &str) -> Self {
        Value::Str(Rc::from(value))
    }

    /// Creates a new array holding `elements`.
    pub fn array(elements: impl IntoIterator<Item = Value>) -> Self {
        Value::Array(Array::new(elements.into_iter().collect()))
    }

    pub fn function(func: impl Function + 'static) -> Self {
        Value::Function(Rc::new(func))
    }

    /// Wraps a closure as a function value.
    pub fn native<F>(name: &'static str, func: F) -> Self
    where
        F: Fn(&[Value]) -> Result<Value, Error> + 'static,
    {
        Value::function(NativeFunction::new(name, func))
    }

    // ============================================================================
    // Extractors
    // ============================================================================

    /// Name of this value's kind, as used in error messages.
    pub fn kind(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "bool",
            Value::Int(_) => "int",
            Value::Float(_) => "float",
            Value::Str(_) => "string",
            Value::Array(_) => "array",
            Value::Function(_) => "function",
        }
    }

    fn expected(&self, kind: &str) -> Error {
        Error::invalid_argument(format!("expected {}, found {}", kind, self.kind()))
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    pub fn as_int(&self) -> Result<i64, Error> {
        match self {
            Value::Int(value) => Ok(*value),
            other => Err(other.expected("int")),
        }
    }

    pub fn as_float(&self) -> Result<f64, Error> {
        match self {
            Value::Float(value) => Ok(*value),
            other => Err(other.expected("float")),
        }
    }

    pub fn as_bool(&self) -> Result<bool, Error> {
        match self {
            Value::Bool(value) => Ok(*value),
            other => Err(other.expected("bool")),
        }
    }

    pub fn as_str(&self) -> Result<&str, Error> {
        match self {
            Value::Str(value) => Ok(&**value),
            other => Err(other.expected("string")),
        }
    }

    pub fn as_array(&self) -> Result<&Array, Error> {
        match self {
            Value::Array(array) => Ok(array),
            other => Err(other.expected("array")),
        }
    }

    pub fn as_function(&self) -> Result<&dyn Function, Error> {
        match self {
            Value::Function(func) => Ok(func.as_ref()),
            other => Err(other.expected("function")),
        }
    }

    /// Calls this value with `args`.
    ///
    /// Fails with [`Error::InvalidArgument`] if the value is not a function.
    pub fn call(&self, args: &[Value]) -> Result<Value, Error> {
        self.as_function()?.call(args)
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        values_eq(self, other, &mut Vec::new())
    }
}

/// Structural equality that tolerates cyclic arrays.
///
/// `in_progress` holds the array pairs currently being compared. Meeting a
/// pair again means the comparison has come back around a cycle, and the pair
/// is treated as equal so far.
fn values_eq(a: &Value, b: &Value, in_progress: &mut Vec<(StoragePtr, StoragePtr)>) -> bool {
    match (a, b) {
        (Value::Null, Value::Null) => true,
        (Value::Bool(a), Value::Bool(b)) => a == b,
        (Value::Int(a), Value::Int(b)) => a == b,
        (Value::Float(a), Value::Float(b)) => a == b,
        (Value::Str(a), Value::Str(b)) => a == b,
        (Value::Array(a), Value::Array(b)) => a.eq_tracked(b, in_progress),
        // Functions compare by identity
        (Value::Function(a), Value::Function(b)) => Rc::ptr_eq(a, b),
        _ => false,
    }
}

impl core::fmt::Debug for Value {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        debug_value(self, f, &mut Vec::new())
    }
}

/// `open` holds the arrays currently being printed; an array nested inside
/// itself prints as `[...]`.
fn debug_value(
    value: &Value,
    f: &mut core::fmt::Formatter<'_>,
    open: &mut Vec<StoragePtr>,
) -> core::fmt::Result {
    match value {
        Value::Null => write!(f, "null"),
        Value::Bool(value) => write!(f, "{}", value),
        Value::Int(value) => write!(f, "{}", value),
        Value::Float(value) => format_float(f, *value),
        Value::Str(value) => write!(f, "{:?}", value),
        Value::Array(array) => array.fmt_tracked(f, open),
        Value::Function(func) => write!(f, "<Function {}>", func.name()),
    }
}

impl core::fmt::Display for Value {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Value::Float(value) => write!(f, "{}", value),
            Value::Str(value) => write!(f, "{}", value),
            // Complex types: delegate to Debug
            other => write!(f, "{:?}", other),
        }
    }
}

/// Format a float ensuring it always has a decimal point
fn format_float(f: &mut core::fmt::Formatter<'_>, value: f64) -> core::fmt::Result {
    if value.is_nan() {
        write!(f, "nan")
    } else if value.is_infinite() {
        if value.is_sign_positive() {
            write!(f, "inf")
        } else {
            write!(f, "-inf")
        }
    } else {
        let s = value.to_string();
        if s.contains('.') || s.contains('e') || s.contains('E') {
            write!(f, "{}", s)
        } else {
            write!(f, "{}.", s)
        }
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Int(value)
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::str(value)
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::Str(Rc::from(value))
    }
}

impl From<Array> for Value {
    fn from(array: Array) -> Self {
        Value::Array(array)
    }
}

/// `Int` increments (wrapping) and `Bool` negates. Other kinds have no
/// replacement rule.
impl Alter for Value {
    fn altered(&self) -> Result<Self, Error> {
        match self {
            Value::Int(value) => Ok(Value::Int(value.wrapping_add(1))),
            Value::Bool(value) => Ok(Value::Bool(!value)),
            other => Err(Error::invalid_argument(format!(
                "no replacement rule for {} elements",
                other.kind()
            ))),
        }
    }
}

// ============================================================================
// Array
// ============================================================================

/// A shared, mutable array of values.
///
/// Cloning an `Array` yields another handle to the same storage. No borrow of
/// the storage outlives a method call, so callbacks invoked during iteration
/// may read and write the array freely.
///
/// An array may contain itself. Equality and `Debug` handle such cycles, but
/// the storage is reference-counted, so a cycle is never freed unless it is
/// broken first (e.g. with [`Array::truncate`]).
#[derive(Clone, Default)]
pub struct Array(Rc<RefCell<Vec<Value>>>);

impl Array {
    pub fn new(elements: Vec<Value>) -> Self {
        Array(Rc::new(RefCell::new(elements)))
    }

    pub fn len(&self) -> usize {
        self.0.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Get element at index, returning None if out of bounds.
    pub fn get(&self, index: usize) -> Option<Value> {
        self.0.borrow().get(index).cloned()
    }

    pub fn push(&self, value: Value) {
        self.0.borrow_mut().push(value);
    }

    /// Shortens the array to `len` elements; no-op if already shorter.
    pub fn truncate(&self, len: usize) {
        self.0.borrow_mut().truncate(len);
    }

    /// Copies the current elements out.
    pub fn to_vec(&self) -> Vec<Value> {
        self.0.borrow().clone()
    }

    /// Whether both handles share the same storage.
    pub fn ptr_eq(&self, other: &Array) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl PartialEq for Array {
    fn eq(&self, other: &Self) -> bool {
        self.eq_tracked(other, &mut Vec::new())
    }
}

impl core::fmt::Debug for Array {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        self.fmt_tracked(f, &mut Vec::new())
    }
}

type StoragePtr = *const RefCell<Vec<Value>>;

impl Array {
    fn storage_ptr(&self) -> StoragePtr {
        Rc::as_ptr(&self.0)
    }

    fn eq_tracked(&self, other: &Array, in_progress: &mut Vec<(StoragePtr, StoragePtr)>) -> bool {
        if self.ptr_eq(other) {
            return true;
        }
        let pair = (self.storage_ptr(), other.storage_ptr());
        if in_progress.contains(&pair) {
            return true;
        }

        let (lhs, rhs) = (self.0.borrow(), other.0.borrow());
        if lhs.len() != rhs.len() {
            return false;
        }
        in_progress.push(pair);
        let equal = lhs
            .iter()
            .zip(rhs.iter())
            .all(|(a, b)| values_eq(a, b, in_progress));
        in_progress.pop();
        equal
    }

    fn fmt_tracked(
        &self,
        f: &mut core::fmt::Formatter<'_>,
        open: &mut Vec<StoragePtr>,
    ) -> core::fmt::Result {
        let ptr = self.storage_ptr();
        if open.contains(&ptr) {
            return write!(f, "[...]");
        }

        open.push(ptr);
        let result = self.fmt_elements(f, open);
        open.pop();
        result
    }

    fn fmt_elements(
        &self,
        f: &mut core::fmt::Formatter<'_>,
        open: &mut Vec<StoragePtr>,
    ) -> core::fmt::Result {
        write!(f, "[")?;
        for (i, elem) in self.0.borrow().iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            debug_value(elem, f, open)?;
        }
        write!(f, "]")
    }
}

impl Sequence for Array {
    type Item = Value;

    fn len(&self) -> usize {
        Array::len(self)
    }

    fn element(&self, index: usize) -> Option<Value> {
        Array::get(self, index)
    }

    /// Holds the storage mutably while `f` runs; `f` must not touch the array.
    fn update<R, F>(&mut self, index: usize, f: F) -> Option<R>
    where
        F: FnOnce(&mut Value) -> R,
    {
        self.0.borrow_mut().get_mut(index).map(f)
    }
}

#[cfg(test)]
#[path = "dynamic_test.rs"]
mod dynamic_test;
