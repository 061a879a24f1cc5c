//! Swizzle Core Types
//!
//! This crate provides the foundational types shared by the runtime and the engine:
//! - Identity types (ClassId, Selector, MethodKind)
//! - Dynamic values passed to and returned from implementations
//! - Method records (Imp, TypeEncoding, MethodRecord, Invocation)
//! - Swizzle pairs and the pair builder

mod id;
mod method;
mod pair;
mod value;

pub use id::*;
pub use method::*;
pub use pair::*;
pub use value::*;
