//! The Runtime - class lookup, method storage, and message dispatch.

use crate::{ClassDef, ClassResolver, MethodTable, RuntimeError, RuntimeResult};
use std::collections::HashMap;
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};
use swizzle_core::{ClassId, Invocation, MethodKind, MethodRecord, Selector, Value};
use tracing::trace;

/// Own methods of every class, keyed by (class, table kind).
#[derive(Debug, Default)]
pub(crate) struct MethodStore {
    tables: HashMap<(ClassId, MethodKind), HashMap<Selector, MethodRecord>>,
}

impl MethodStore {
    pub(crate) fn insert_table(
        &mut self,
        class: ClassId,
        kind: MethodKind,
        table: HashMap<Selector, MethodRecord>,
    ) {
        self.tables.insert((class, kind), table);
    }

    fn own(&self, class: ClassId, kind: MethodKind, selector: &Selector) -> Option<&MethodRecord> {
        self.tables.get(&(class, kind)).and_then(|t| t.get(selector))
    }

    fn own_mut(&mut self, class: ClassId, kind: MethodKind) -> &mut HashMap<Selector, MethodRecord> {
        self.tables.entry((class, kind)).or_default()
    }
}

/// The Runtime holds the class registry and every method table.
///
/// Method storage sits behind a single lock: lookups share it, and each table
/// mutation holds it exclusively for the whole edit. Implementations are
/// always called with the lock released.
#[derive(Debug)]
pub struct Runtime {
    /// Class definitions by ID.
    classes: HashMap<ClassId, ClassDef>,
    /// Class ID lookup by name.
    class_names: HashMap<String, ClassId>,

    /// Own methods of all classes.
    methods: RwLock<MethodStore>,
}

impl Runtime {
    pub(crate) fn new(
        classes: HashMap<ClassId, ClassDef>,
        class_names: HashMap<String, ClassId>,
        methods: MethodStore,
    ) -> Self {
        Self {
            classes,
            class_names,
            methods: RwLock::new(methods),
        }
    }

    // ==================== Class Lookups ====================

    /// Get a class definition by ID.
    pub fn class(&self, id: ClassId) -> Option<&ClassDef> {
        self.classes.get(&id)
    }

    /// Get a class definition by name.
    pub fn class_by_name(&self, name: &str) -> Option<&ClassDef> {
        self.class_names.get(name).and_then(|id| self.classes.get(id))
    }

    /// Get a class ID by name.
    pub fn class_id(&self, name: &str) -> Option<ClassId> {
        self.class_names.get(name).copied()
    }

    /// Get the number of classes.
    pub fn class_count(&self) -> usize {
        self.classes.len()
    }

    /// Get the direct superclass of a class.
    pub fn superclass(&self, id: ClassId) -> Option<ClassId> {
        self.classes.get(&id).and_then(|c| c.superclass)
    }

    /// Iterate a class and its superclasses, nearest first.
    pub fn ancestry(&self, id: ClassId) -> impl Iterator<Item = ClassId> + '_ {
        let start = self.classes.contains_key(&id).then_some(id);
        std::iter::successors(start, move |&c| self.superclass(c))
    }

    /// Check if `sub` is `sup` or inherits from it.
    pub fn is_subclass(&self, sub: ClassId, sup: ClassId) -> bool {
        self.ancestry(sub).any(|c| c == sup)
    }

    // ==================== Method Lookups ====================

    /// Get one of a class's method tables.
    pub fn methods(&self, class: ClassId, kind: MethodKind) -> Option<ClassMethods<'_>> {
        self.classes.contains_key(&class).then_some(ClassMethods {
            runtime: self,
            class,
            kind,
        })
    }

    /// Selectors a class defines itself (not inherited), sorted by name.
    pub fn own_selectors(&self, class: ClassId, kind: MethodKind) -> Vec<Selector> {
        let store = self.read();
        let mut selectors: Vec<Selector> = store
            .tables
            .get(&(class, kind))
            .map(|t| t.keys().cloned().collect())
            .unwrap_or_default();
        selectors.sort();
        selectors
    }

    /// Check if a message would be understood, including inherited methods.
    pub fn responds_to(&self, class: ClassId, kind: MethodKind, selector: &Selector) -> bool {
        self.resolve(&self.read(), class, kind, selector).is_some()
    }

    // ==================== Dispatch ====================

    /// Send a message through a class's instance or metaclass table.
    pub fn send(
        &self,
        class: ClassId,
        kind: MethodKind,
        selector: &Selector,
        args: &[Value],
    ) -> RuntimeResult<Value> {
        let class_def = self
            .classes
            .get(&class)
            .ok_or(RuntimeError::UnknownClass(class))?;

        // Clone the record so the lock is released before the call
        let record = {
            let store = self.read();
            self.resolve(&store, class, kind, selector)
                .and_then(|owner| store.own(owner, kind, selector).cloned())
        };
        let record = record.ok_or_else(|| {
            RuntimeError::unrecognized_selector(class_def.name.clone(), kind, selector.clone())
        })?;

        Ok(record.imp.call(&Invocation {
            receiver: class,
            kind,
            selector,
            args,
        }))
    }

    /// Send an instance message.
    pub fn send_instance(
        &self,
        class: ClassId,
        selector: impl Into<Selector>,
        args: &[Value],
    ) -> RuntimeResult<Value> {
        self.send(class, MethodKind::Instance, &selector.into(), args)
    }

    /// Send a class-level message.
    pub fn send_class(
        &self,
        class: ClassId,
        selector: impl Into<Selector>,
        args: &[Value],
    ) -> RuntimeResult<Value> {
        self.send(class, MethodKind::Class, &selector.into(), args)
    }

    // ==================== Internals ====================

    fn read(&self) -> RwLockReadGuard<'_, MethodStore> {
        self.methods.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, MethodStore> {
        self.methods.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// Find the class in the chain that owns `selector`.
    fn resolve(
        &self,
        store: &MethodStore,
        class: ClassId,
        kind: MethodKind,
        selector: &Selector,
    ) -> Option<ClassId> {
        self.ancestry(class)
            .find(|&c| store.own(c, kind, selector).is_some())
    }
}

impl ClassResolver for Runtime {
    type Table<'a> = ClassMethods<'a>;

    fn class_named(&self, name: &str) -> Option<ClassId> {
        self.class_id(name)
    }

    fn class_name(&self, class: ClassId) -> Option<&str> {
        self.classes.get(&class).map(|c| c.name.as_str())
    }

    fn method_table(&self, class: ClassId, kind: MethodKind) -> Option<ClassMethods<'_>> {
        self.methods(class, kind)
    }
}

/// A view of one method table of one class.
#[derive(Debug, Clone, Copy)]
pub struct ClassMethods<'rt> {
    runtime: &'rt Runtime,
    class: ClassId,
    kind: MethodKind,
}

impl<'rt> ClassMethods<'rt> {
    pub fn class(&self) -> ClassId {
        self.class
    }

    pub fn kind(&self) -> MethodKind {
        self.kind
    }

    /// The class whose own table holds `selector`, if it resolves.
    pub fn owner(&self, selector: &Selector) -> Option<ClassId> {
        self.runtime
            .resolve(&self.runtime.read(), self.class, self.kind, selector)
    }
}

impl MethodTable for ClassMethods<'_> {
    fn lookup(&self, selector: &Selector) -> Option<MethodRecord> {
        let store = self.runtime.read();
        self.runtime
            .resolve(&store, self.class, self.kind, selector)
            .and_then(|owner| store.own(owner, self.kind, selector).cloned())
    }

    fn add(&self, selector: &Selector, record: MethodRecord) -> bool {
        let mut store = self.runtime.write();
        let table = store.own_mut(self.class, self.kind);
        if table.contains_key(selector) {
            return false;
        }
        table.insert(selector.clone(), record);
        trace!(target: "swizzle::runtime", class = %self.class, kind = %self.kind, %selector, "method added");
        true
    }

    fn replace(&self, selector: &Selector, record: MethodRecord) -> Option<MethodRecord> {
        let mut store = self.runtime.write();
        let previous = store
            .own_mut(self.class, self.kind)
            .insert(selector.clone(), record);
        trace!(
            target: "swizzle::runtime",
            class = %self.class,
            kind = %self.kind,
            %selector,
            added = previous.is_none(),
            "method replaced"
        );
        previous
    }

    fn exchange(&self, a: &Selector, b: &Selector) {
        let mut store = self.runtime.write();
        let resolve = |store: &MethodStore, sel: &Selector| {
            self.runtime
                .resolve(store, self.class, self.kind, sel)
                .and_then(|owner| store.own(owner, self.kind, sel).cloned().map(|r| (owner, r)))
        };
        let (Some((owner_a, record_a)), Some((owner_b, record_b))) =
            (resolve(&*store, a), resolve(&*store, b))
        else {
            return;
        };

        store.own_mut(owner_a, self.kind).insert(a.clone(), record_b);
        store.own_mut(owner_b, self.kind).insert(b.clone(), record_a);
        trace!(
            target: "swizzle::runtime",
            class = %self.class,
            kind = %self.kind,
            %a,
            %b,
            "implementations exchanged"
        );
    }
}
