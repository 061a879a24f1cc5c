//! Class definition types.

use swizzle_core::ClassId;

/// The shape of a registered class. Immutable after the runtime is built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassDef {
    /// Unique identifier.
    pub id: ClassId,
    /// Class name, unique within a runtime.
    pub name: String,
    /// Direct superclass, `None` for a root class.
    pub superclass: Option<ClassId>,
}

impl ClassDef {
    pub fn new(id: ClassId, name: impl Into<String>, superclass: Option<ClassId>) -> Self {
        Self {
            id,
            name: name.into(),
            superclass,
        }
    }

    /// Returns true if this class has no superclass.
    pub fn is_root(&self) -> bool {
        self.superclass.is_none()
    }
}
