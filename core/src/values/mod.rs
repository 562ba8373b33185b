pub mod binder;
pub mod dynamic;
pub mod function;
pub mod package;

pub use binder::Binder;
pub use function::{Function, NativeFn, NativeFunction};
pub use package::{Package, PackageBuilder};
