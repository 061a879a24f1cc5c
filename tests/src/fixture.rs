//! The shared class hierarchy.
//!
//! ```text
//! NSObject      description           +new +version
//!   Foo         bar baz tick:         +make +make2
//!     SubFoo    baz                   +subVersion
//! ```

use swizzle_core::{ClassId, Imp, MethodKind, Selector, Value};
use swizzle_runtime::{Runtime, RuntimeBuilder, RuntimeResult};

/// A runtime preloaded with the fixture hierarchy.
pub struct Fixture {
    pub runtime: Runtime,
}

impl Default for Fixture {
    fn default() -> Self {
        Self::new()
    }
}

fn tag(tag: &'static str) -> Imp {
    Imp::constant(tag)
}

impl Fixture {
    pub fn new() -> Self {
        Self::build().expect("fixture hierarchy is valid")
    }

    fn build() -> RuntimeResult<Self> {
        let mut builder = RuntimeBuilder::new();
        builder
            .add_class("NSObject")
            .method("description", "@@:", tag("NSObject.description"))
            .class_method("new", "@#:", tag("NSObject.new"))
            .class_method("version", "q#:", tag("NSObject.version"))
            .done()?;
        builder
            .add_class("Foo")
            .extends("NSObject")
            .method("bar", "@@:", tag("Foo.bar"))
            .method("baz", "@@:", tag("Foo.baz"))
            // Reports the selector it was sent under plus its argument
            .method(
                "tick:",
                "@@:q",
                Imp::new(|inv| {
                    let arg = inv.arg(0).cloned().unwrap_or(Value::Null);
                    Value::from(format!("{}({})", inv.selector, arg))
                }),
            )
            .class_method("make", "@#:", tag("Foo.make"))
            .class_method("make2", "@#:", tag("Foo.make2"))
            .done()?;
        builder
            .add_class("SubFoo")
            .extends("Foo")
            .method("baz", "@@:", tag("SubFoo.baz"))
            .class_method("subVersion", "q#:", tag("SubFoo.subVersion"))
            .done()?;
        Ok(Self {
            runtime: builder.build(),
        })
    }

    /// Get a fixture class by name.
    pub fn class(&self, name: &str) -> ClassId {
        self.runtime
            .class_id(name)
            .unwrap_or_else(|| panic!("no fixture class {name}"))
    }

    /// Send an instance message and return the tag of the code that ran.
    pub fn call(&self, class: &str, selector: &str) -> String {
        self.send(class, MethodKind::Instance, selector, &[])
    }

    /// Send a class-level message and return the tag of the code that ran.
    pub fn call_class(&self, class: &str, selector: &str) -> String {
        self.send(class, MethodKind::Class, selector, &[])
    }

    pub fn send(&self, class: &str, kind: MethodKind, selector: &str, args: &[Value]) -> String {
        let value = self
            .runtime
            .send(self.class(class), kind, &Selector::new(selector), args)
            .unwrap_or_else(|e| panic!("{class} {selector}: {e}"));
        match value.as_str() {
            Some(tag) => tag.to_string(),
            None => value.to_string(),
        }
    }

    /// Own selectors of a class, by name.
    pub fn own(&self, class: &str, kind: MethodKind) -> Vec<String> {
        self.runtime
            .own_selectors(self.class(class), kind)
            .into_iter()
            .map(|s| s.name().to_string())
            .collect()
    }
}
