//! Identity types for classes and methods.
//!
//! Class identifiers are opaque 32-bit values assigned by the runtime builder.
//! Selectors are method names; two selectors are the same method identifier
//! iff their names are equal.

use std::fmt;
use std::sync::Arc;

/// Identifier for a class registered in a runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ClassId(pub u32);

impl ClassId {
    pub fn new(id: u32) -> Self {
        Self(id)
    }
}

impl fmt::Display for ClassId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "c{}", self.0)
    }
}

/// Which method table of a class a selector is resolved against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum MethodKind {
    /// The class's own table, dispatched on instances.
    Instance,
    /// The metaclass table, dispatched on the class itself.
    Class,
}

impl MethodKind {
    /// Select the table kind for a static flag.
    pub fn from_static(is_static: bool) -> Self {
        if is_static {
            MethodKind::Class
        } else {
            MethodKind::Instance
        }
    }

    /// Returns true for the metaclass table.
    pub fn is_static(&self) -> bool {
        matches!(self, MethodKind::Class)
    }
}

impl fmt::Display for MethodKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MethodKind::Instance => write!(f, "instance"),
            MethodKind::Class => write!(f, "class"),
        }
    }
}

/// A method identifier.
///
/// Cloning is cheap: the name is shared.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Selector(Arc<str>);

impl Selector {
    pub fn new(name: impl AsRef<str>) -> Self {
        Self(Arc::from(name.as_ref()))
    }

    /// Get the method name.
    pub fn name(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Selector {
    fn from(name: &str) -> Self {
        Selector::new(name)
    }
}

impl From<String> for Selector {
    fn from(name: String) -> Self {
        Self(Arc::from(name))
    }
}

impl From<&Selector> for Selector {
    fn from(sel: &Selector) -> Self {
        sel.clone()
    }
}

impl AsRef<str> for Selector {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
