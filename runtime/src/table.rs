//! Capability interfaces over a runtime's classes and method tables.
//!
//! Anything that swizzles methods should go through these traits rather than
//! a concrete runtime representation.

use swizzle_core::{ClassId, MethodKind, MethodRecord, Selector};

/// One method table: the instance table of a class, or its metaclass table.
///
/// Lookups see inherited methods. Mutations only ever touch the slot that
/// owns a selector, or the table's own entries when adding.
pub trait MethodTable {
    /// Resolve a selector, walking the superclass chain.
    fn lookup(&self, selector: &Selector) -> Option<MethodRecord>;

    /// Add an entry to this table's own methods.
    ///
    /// Returns false, leaving the table unchanged, if the table already has
    /// its own entry for `selector`. An inherited entry does not block the add.
    fn add(&self, selector: &Selector, record: MethodRecord) -> bool;

    /// Set this table's own entry for `selector`, adding it if missing.
    ///
    /// Returns the previous own entry.
    fn replace(&self, selector: &Selector, record: MethodRecord) -> Option<MethodRecord>;

    /// Swap the records held by the slots `a` and `b` resolve to.
    ///
    /// The swap is a single update: no lookup observes one slot changed and
    /// the other not. Does nothing if either selector does not resolve.
    fn exchange(&self, a: &Selector, b: &Selector);
}

/// Resolves class handles and hands out their method tables.
pub trait ClassResolver {
    type Table<'a>: MethodTable
    where
        Self: 'a;

    /// Look up a class by name.
    fn class_named(&self, name: &str) -> Option<ClassId>;

    /// The name of a class, if it is registered here.
    fn class_name(&self, class: ClassId) -> Option<&str>;

    /// The instance or metaclass table of a class, if it is registered here.
    fn method_table(&self, class: ClassId, kind: MethodKind) -> Option<Self::Table<'_>>;
}
