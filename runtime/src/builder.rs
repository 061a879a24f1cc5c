//! RuntimeBuilder for registering classes and their methods.

use crate::runtime::MethodStore;
use crate::{ClassDef, Runtime, RuntimeError, RuntimeResult};
use std::collections::HashMap;
use swizzle_core::{ClassId, Imp, MethodKind, MethodRecord, Selector, TypeEncoding};

/// Builder for constructing a Runtime.
#[derive(Debug, Default)]
pub struct RuntimeBuilder {
    /// Next class ID to allocate.
    next_class_id: u32,

    /// Classes being built.
    classes: HashMap<ClassId, ClassDef>,
    /// Class name to ID mapping.
    class_names: HashMap<String, ClassId>,

    /// Own methods of every class, both tables.
    methods: MethodStore,
}

impl RuntimeBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a class definition.
    pub fn add_class(&mut self, name: impl Into<String>) -> ClassBuilder<'_> {
        let name = name.into();
        let id = ClassId::new(self.next_class_id);
        self.next_class_id += 1;

        ClassBuilder {
            builder: self,
            id,
            name,
            superclass_name: None,
            methods: Vec::new(),
        }
    }

    /// Build the Runtime.
    pub fn build(self) -> Runtime {
        Runtime::new(self.classes, self.class_names, self.methods)
    }
}

/// Builder for a class definition.
pub struct ClassBuilder<'a> {
    builder: &'a mut RuntimeBuilder,
    id: ClassId,
    name: String,
    superclass_name: Option<String>,
    methods: Vec<(MethodKind, Selector, MethodRecord)>,
}

impl<'a> ClassBuilder<'a> {
    /// Set the superclass by name. The superclass must already be defined.
    pub fn extends(mut self, superclass_name: impl Into<String>) -> Self {
        self.superclass_name = Some(superclass_name.into());
        self
    }

    /// Add an instance method.
    pub fn method(
        self,
        selector: impl Into<Selector>,
        types: impl Into<TypeEncoding>,
        imp: Imp,
    ) -> Self {
        self.define(MethodKind::Instance, selector.into(), MethodRecord::new(types, imp))
    }

    /// Add a class-level method.
    pub fn class_method(
        self,
        selector: impl Into<Selector>,
        types: impl Into<TypeEncoding>,
        imp: Imp,
    ) -> Self {
        self.define(MethodKind::Class, selector.into(), MethodRecord::new(types, imp))
    }

    fn define(mut self, kind: MethodKind, selector: Selector, record: MethodRecord) -> Self {
        self.methods.push((kind, selector, record));
        self
    }

    /// Finish building this class.
    pub fn done(self) -> RuntimeResult<ClassId> {
        // Check for duplicate name
        if self.builder.class_names.contains_key(&self.name) {
            return Err(RuntimeError::DuplicateClassName(self.name));
        }

        // Resolve superclass ID; only earlier classes can be named, so no cycles
        let superclass = match &self.superclass_name {
            Some(name) => match self.builder.class_names.get(name) {
                Some(&id) => Some(id),
                None => return Err(RuntimeError::UnknownSuperclass(name.clone())),
            },
            None => None,
        };

        let mut own: HashMap<MethodKind, HashMap<Selector, MethodRecord>> = HashMap::new();
        for (kind, selector, record) in self.methods {
            let table = own.entry(kind).or_default();
            if table.contains_key(&selector) {
                return Err(RuntimeError::duplicate_method(self.name, kind, selector));
            }
            table.insert(selector, record);
        }

        for (kind, table) in own {
            self.builder.methods.insert_table(self.id, kind, table);
        }

        let class_def = ClassDef::new(self.id, self.name.clone(), superclass);
        self.builder.class_names.insert(self.name, self.id);
        self.builder.classes.insert(self.id, class_def);

        Ok(self.id)
    }
}
