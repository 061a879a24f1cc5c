//! Swizzle Runtime
//!
//! A dynamic object runtime: a registry of classes with single inheritance,
//! an instance method table per class, a class-level (metaclass) method table
//! per class, and message dispatch through those tables.
//!
//! The set of classes is fixed once `RuntimeBuilder::build` returns. Method
//! tables stay mutable for the life of the runtime through the `MethodTable`
//! interface; every mutation is immediately visible to `Runtime::send`.

mod builder;
mod error;
mod runtime;
mod table;
mod types;

pub use builder::{ClassBuilder, RuntimeBuilder};
pub use error::{RuntimeError, RuntimeResult};
pub use runtime::{ClassMethods, Runtime};
pub use table::{ClassResolver, MethodTable};
pub use types::ClassDef;
