//! Integration test support for swizzle.
//!
//! `Fixture` builds a small class hierarchy whose implementations return a
//! tag naming the code that ran (e.g. `"Foo.bar"`), so tests can observe
//! which implementation a selector dispatches to.

mod fixture;

pub use fixture::Fixture;

/// Everything a test file needs.
pub mod prelude {
    pub use crate::Fixture;
    pub use swizzle_core::{ClassId, MethodKind, Selector, SwizzlePair, PairBuilder, Value};
    pub use swizzle_engine::{class_named, ApplyError, MethodSwizzle, Swizzle, SwizzleError};
    pub use swizzle_runtime::{ClassResolver, MethodTable, Runtime};
}
