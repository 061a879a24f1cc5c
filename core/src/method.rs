//! Method records: an implementation plus its type signature.
//!
//! A `MethodRecord` is what a method table stores under a selector. Swizzling
//! moves records between selectors; the records themselves are never edited.

use crate::{ClassId, MethodKind, Selector, Value};
use std::fmt;
use std::sync::Arc;

/// The context an implementation is called with.
#[derive(Debug, Clone, Copy)]
pub struct Invocation<'a> {
    /// The class the message was sent to (or whose instance received it).
    pub receiver: ClassId,
    /// Which table the message was dispatched through.
    pub kind: MethodKind,
    /// The selector that was sent, not the one the implementation was defined under.
    pub selector: &'a Selector,
    /// Message arguments.
    pub args: &'a [Value],
}

impl<'a> Invocation<'a> {
    /// Get an argument by position.
    pub fn arg(&self, index: usize) -> Option<&'a Value> {
        self.args.get(index)
    }
}

type ImpFn = dyn Fn(&Invocation<'_>) -> Value + Send + Sync;

/// A shared method implementation.
///
/// Two `Imp`s are equal only if they are the same allocation, so an
/// implementation keeps its identity as it moves between selectors.
#[derive(Clone)]
pub struct Imp(Arc<ImpFn>);

impl Imp {
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(&Invocation<'_>) -> Value + Send + Sync + 'static,
    {
        Self(Arc::new(f))
    }

    /// An implementation that always returns `value`.
    pub fn constant(value: impl Into<Value>) -> Self {
        let value = value.into();
        Self::new(move |_| value.clone())
    }

    /// Run the implementation.
    pub fn call(&self, invocation: &Invocation<'_>) -> Value {
        (self.0)(invocation)
    }

    /// Returns true if both handles refer to the same implementation.
    pub fn ptr_eq(&self, other: &Imp) -> bool {
        self.addr() == other.addr()
    }

    fn addr(&self) -> *const () {
        Arc::as_ptr(&self.0) as *const ()
    }
}

impl PartialEq for Imp {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other)
    }
}

impl Eq for Imp {}

impl fmt::Debug for Imp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Imp({:p})", self.addr())
    }
}

/// Calling-convention signature of an implementation, e.g. `"v@:"`.
///
/// Opaque to the runtime: it is stored and copied, never interpreted.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TypeEncoding(String);

impl TypeEncoding {
    pub fn new(encoding: impl Into<String>) -> Self {
        Self(encoding.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TypeEncoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for TypeEncoding {
    fn from(encoding: &str) -> Self {
        Self(encoding.to_string())
    }
}

impl From<String> for TypeEncoding {
    fn from(encoding: String) -> Self {
        Self(encoding)
    }
}

/// An implementation together with its signature.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MethodRecord {
    pub imp: Imp,
    pub types: TypeEncoding,
}

impl MethodRecord {
    pub fn new(types: impl Into<TypeEncoding>, imp: Imp) -> Self {
        Self {
            imp,
            types: types.into(),
        }
    }
}
