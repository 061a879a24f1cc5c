//! Swizzle error types.

use swizzle_core::{ClassId, SwizzlePair};
use thiserror::Error;

/// Result type for resolving and applying a single pair.
pub type SwizzleResult<T> = Result<T, SwizzleError>;

/// Why a pair could not be applied.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SwizzleError {
    #[error("Missing class: {name}")]
    MissingClass { name: String },

    #[error("Missing {} method for {class_name}: {pair}", method_side(*is_old, *is_static))]
    MissingMethod {
        class: ClassId,
        class_name: String,
        is_static: bool,
        is_old: bool,
        pair: SwizzlePair,
    },
}

fn method_side(is_old: bool, is_static: bool) -> String {
    let side = if is_old { "old" } else { "new" };
    if is_static {
        format!("{side} static")
    } else {
        side.to_string()
    }
}

impl SwizzleError {
    pub fn missing_class(name: impl Into<String>) -> Self {
        Self::MissingClass { name: name.into() }
    }

    pub fn missing_method(
        class: ClassId,
        class_name: impl Into<String>,
        is_old: bool,
        pair: &SwizzlePair,
    ) -> Self {
        Self::MissingMethod {
            class,
            class_name: class_name.into(),
            is_static: pair.is_static(),
            is_old,
            pair: pair.clone(),
        }
    }

    /// What is missing.
    pub fn failure_reason(&self) -> String {
        format!("SwizzleError: {self}")
    }

    /// How to fix it.
    pub fn recovery_suggestion(&self) -> String {
        match self {
            Self::MissingClass { name } => {
                format!("Replace current class name: {name}, with an existing registered class")
            }
            Self::MissingMethod {
                class_name,
                is_static,
                is_old,
                pair,
                ..
            } => format!(
                "Create {} method for {class_name}: {pair}",
                method_side(*is_old, *is_static)
            ),
        }
    }
}

/// A swizzle that stopped partway.
///
/// Pairs before `index` in set `set` (and every earlier set) were applied and
/// stay applied.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Swizzle set {set} stopped at pair {index} of {total}: {source}")]
pub struct ApplyError {
    /// Position of the failing swizzle in its collection; 0 for a lone swizzle.
    pub set: usize,
    /// Position of the failing pair within its set.
    pub index: usize,
    /// Number of pairs in the failing set.
    pub total: usize,
    #[source]
    pub source: SwizzleError,
}

impl ApplyError {
    pub fn new(set: usize, index: usize, total: usize, source: SwizzleError) -> Self {
        Self {
            set,
            index,
            total,
            source,
        }
    }

    /// Number of pairs of the failing set that were applied.
    pub fn applied(&self) -> usize {
        self.index
    }

    pub fn error(&self) -> &SwizzleError {
        &self.source
    }

    pub fn into_error(self) -> SwizzleError {
        self.source
    }
}
