use crate::{String, Vec, format, values::dynamic::Value};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("Duplicate binding for {}", quoted(.0))]
    DuplicateBinding(Vec<String>),
}

fn quoted(names: &[String]) -> String {
    let quoted: Vec<String> = names.iter().map(|name| format!("'{}'", name)).collect();
    quoted.join(", ")
}

/// A trait for types that can be built by binding names to values.
///
/// This provides a unified, fluent interface for constructing named sets of
/// values such as packages.
pub trait Binder: Sized {
    /// The final, successfully built output type.
    type Output;

    /// Binds a name to a value in the builder.
    ///
    /// This method uses a fluent API, returning the builder to allow for chained calls.
    fn bind(self, name: &str, value: Value) -> Self;

    /// Finalizes the build process.
    ///
    /// This method consumes the builder and returns the final constructed
    /// output or an error if the build fails.
    fn build(self) -> Result<Self::Output, Error>;
}
