//! Named sets of dynamic values.

use crate::{
    String, ToString, Vec,
    values::binder::{Binder, Error},
    values::dynamic::Value,
};

use alloc::collections::BTreeMap;

/// An immutable set of named values, sorted by name.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Package {
    entries: Vec<(String, Value)>,
}

impl Package {
    /// Look up a binding by name.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.entries
            .binary_search_by(|(entry, _)| entry.as_str().cmp(name))
            .ok()
            .map(|index| &self.entries[index].1)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over `(name, value)` pairs in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.entries.iter().map(|(name, value)| (name.as_str(), value))
    }
}

/// Builder for a [`Package`].
///
/// # Example
///
/// ```
/// use eachwise_core::values::{Binder, PackageBuilder, dynamic::Value};
///
/// let package = PackageBuilder::new()
///     .bind("Answer", Value::int(42))
///     .build()
///     .unwrap();
/// assert_eq!(package.get("Answer"), Some(&Value::int(42)));
/// ```
#[derive(Default)]
pub struct PackageBuilder {
    entries: BTreeMap<String, Value>,
    duplicates: Vec<String>,
}

impl PackageBuilder {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Binder for PackageBuilder {
    type Output = Package;

    /// Returns the builder for chaining. If a duplicate name is encountered,
    /// an error is stored and returned when `build()` is called.
    fn bind(mut self, name: &str, value: Value) -> Self {
        if self.entries.contains_key(name) {
            self.duplicates.push(name.to_string());
            return self;
        }
        self.entries.insert(name.to_string(), value);
        self
    }

    fn build(mut self) -> Result<Package, Error> {
        if !self.duplicates.is_empty() {
            return Err(Error::DuplicateBinding(core::mem::take(
                &mut self.duplicates,
            )));
        }

        // BTreeMap iteration is already sorted by name
        Ok(Package {
            entries: self.entries.into_iter().collect(),
        })
    }
}
