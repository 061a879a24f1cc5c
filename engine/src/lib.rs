//! Swizzle Engine
//!
//! Exchange method implementations on a class at runtime.
//!
//! Responsibilities:
//! - Resolve each pair against the instance or metaclass table
//! - Exchange implementations, or add-then-replace for static pairs
//! - Stop at the first unresolvable pair and report where it stopped
//!
//! Swizzles are permanent. Apply them during start-up, before other threads
//! send the affected messages; nothing here locks across pairs.

mod error;
mod swizzle;

pub use error::{ApplyError, SwizzleError, SwizzleResult};
pub use swizzle::{class_named, MethodSwizzle, Swizzle};

pub use swizzle_core::{PairBuilder, SwizzlePair};
