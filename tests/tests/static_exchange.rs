//! Static pairs: `old <~> new` against the metaclass table.

use pretty_assertions::assert_eq;
use swizzle_tests::prelude::*;

#[test]
fn test_static_pair_with_inherited_old_adds_slot() {
    // GIVEN SubFoo inherits +version from NSObject and owns +subVersion
    let fx = Fixture::new();
    assert!(!fx.own("SubFoo", MethodKind::Class).contains(&"version".to_string()));

    // WHEN applying version <~> subVersion on SubFoo
    Swizzle::new(fx.class("SubFoo"), [SwizzlePair::class("version", "subVersion")])
        .apply(&fx.runtime)
        .unwrap();

    // THEN each runs the other's original code
    assert_eq!(fx.call_class("SubFoo", "version"), "SubFoo.subVersion");
    assert_eq!(fx.call_class("SubFoo", "subVersion"), "NSObject.version");

    // AND SubFoo gained its own slot while NSObject is untouched
    assert_eq!(fx.own("SubFoo", MethodKind::Class), vec!["subVersion", "version"]);
    assert_eq!(fx.call_class("NSObject", "version"), "NSObject.version");
    assert_eq!(fx.call_class("Foo", "version"), "NSObject.version");
}

#[test]
fn test_static_pair_with_both_inherited_leaves_superclasses_alone() {
    // GIVEN +make is inherited from Foo and +new from NSObject
    let fx = Fixture::new();

    Swizzle::new(fx.class("SubFoo"), [SwizzlePair::class("make", "new")])
        .apply(&fx.runtime)
        .unwrap();

    assert_eq!(fx.call_class("SubFoo", "make"), "NSObject.new");
    assert_eq!(fx.call_class("SubFoo", "new"), "Foo.make");
    assert_eq!(fx.call_class("Foo", "make"), "Foo.make");
    assert_eq!(fx.call_class("NSObject", "new"), "NSObject.new");
}

#[test]
fn test_static_pair_with_own_old_matches_plain_exchange() {
    // GIVEN two fixtures, one swizzled statically and one exchanged directly
    let swizzled = Fixture::new();
    let exchanged = Fixture::new();

    Swizzle::new(swizzled.class("Foo"), [SwizzlePair::class("make", "new")])
        .apply(&swizzled.runtime)
        .unwrap();
    exchanged
        .runtime
        .method_table(exchanged.class("Foo"), MethodKind::Class)
        .unwrap()
        .exchange(&Selector::new("make"), &Selector::new("new"));

    // THEN both runtimes dispatch identically
    for class in ["NSObject", "Foo", "SubFoo"] {
        for selector in ["make", "new"] {
            if swizzled
                .runtime
                .responds_to(swizzled.class(class), MethodKind::Class, &Selector::new(selector))
            {
                assert_eq!(
                    swizzled.call_class(class, selector),
                    exchanged.call_class(class, selector)
                );
            }
        }
    }
    assert_eq!(swizzled.call_class("Foo", "make"), "NSObject.new");
    assert_eq!(swizzled.call_class("NSObject", "new"), "Foo.make");
    assert_eq!(swizzled.own("Foo", MethodKind::Class), vec!["make", "make2"]);
}

#[test]
fn test_static_add_path_is_not_self_inverse() {
    // GIVEN version <~> subVersion applied once through the add path
    let fx = Fixture::new();
    let swizzle = Swizzle::new(fx.class("SubFoo"), [SwizzlePair::class("version", "subVersion")]);
    swizzle.apply(&fx.runtime).unwrap();

    // WHEN applied again, version is now owned, so it exchanges back
    swizzle.apply(&fx.runtime).unwrap();

    assert_eq!(fx.call_class("SubFoo", "version"), "NSObject.version");
    assert_eq!(fx.call_class("SubFoo", "subVersion"), "SubFoo.subVersion");
    assert_eq!(fx.own("SubFoo", MethodKind::Class), vec!["subVersion", "version"]);
}

#[test]
fn test_static_and_instance_tables_are_independent() {
    let fx = Fixture::new();

    Swizzle::with(fx.class("Foo"), |p| p.swap_static("make", "make2").swap("bar", "baz"))
        .apply(&fx.runtime)
        .unwrap();

    assert_eq!(fx.call_class("Foo", "make"), "Foo.make2");
    assert_eq!(fx.call("Foo", "bar"), "Foo.baz");
    assert_eq!(fx.call_class("SubFoo", "make2"), "Foo.make");
}
