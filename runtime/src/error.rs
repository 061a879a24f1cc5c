//! Runtime error types.

use swizzle_core::{ClassId, MethodKind, Selector};
use thiserror::Error;

/// Result type for runtime operations.
pub type RuntimeResult<T> = Result<T, RuntimeError>;

/// Errors that can occur while building a runtime or dispatching a message.
#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error("Duplicate class name: {0}")]
    DuplicateClassName(String),

    #[error("Unknown superclass: {0}")]
    UnknownSuperclass(String),

    #[error("Duplicate {kind} method {selector} on class {class}")]
    DuplicateMethod {
        class: String,
        kind: MethodKind,
        selector: Selector,
    },

    #[error("Unknown class: {0}")]
    UnknownClass(ClassId),

    #[error("{class} does not recognize {kind} selector {selector}")]
    UnrecognizedSelector {
        class: String,
        kind: MethodKind,
        selector: Selector,
    },
}

impl RuntimeError {
    pub fn duplicate_method(class: impl Into<String>, kind: MethodKind, selector: Selector) -> Self {
        Self::DuplicateMethod {
            class: class.into(),
            kind,
            selector,
        }
    }

    pub fn unrecognized_selector(
        class: impl Into<String>,
        kind: MethodKind,
        selector: Selector,
    ) -> Self {
        Self::UnrecognizedSelector {
            class: class.into(),
            kind,
            selector,
        }
    }
}
