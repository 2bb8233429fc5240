use super::*;
use pkgstub_types::{PackageId, ProgramBuilder, Type};

struct Fixture {
    table: SymbolTable,
    packages: PackageDb,
    foo: PackageId,
    widget: ClassRef,
    nested: ClassRef,
    sub_widget: ClassRef,
    test_helper: ClassRef,
    outside: ClassRef,
}

fn fixture() -> Fixture {
    let mut b = ProgramBuilder::new();
    let widget = b.class("Foo::Widget");
    let nested = b.class("Foo::Widget::Part");
    let sub_widget = b.class("Foo::Sub::Widget");
    let test_helper = b.class("Test::Foo::Helper");
    let outside = b.class("Outside");
    let foo = b.package("Foo", &["Foo::Widget"], &[]);
    b.package("Foo::Sub", &["Foo::Sub::Widget"], &[]);
    let (table, packages) = b.finish();
    Fixture {
        table,
        packages,
        foo,
        widget,
        nested,
        sub_widget,
        test_helper,
        outside,
    }
}

#[test]
fn roots_cover_public_and_test_namespaces() {
    let f = fixture();
    let roots = PackageRoots::build(&f.table, &f.packages).unwrap_or_default();
    // Foo, Test::Foo, Foo::Sub; no Test::Foo::Sub namespace exists.
    assert_eq!(roots.len(), 3);
    let info = f.packages.get(f.foo);
    assert!(info.namespace(&f.table).is_some_and(|ns| roots.contains(ns)));
    assert!(info.test_namespace(&f.table).is_some_and(|ns| roots.contains(ns)));
}

#[test]
fn empty_registry_is_fatal() {
    let table = SymbolTable::new();
    let packages = PackageDb::new();
    assert!(matches!(
        PackageRoots::build(&table, &packages),
        Err(GenError::EmptyRegistry)
    ));
}

#[test]
fn membership_follows_owner_chain() {
    let f = fixture();
    let roots = PackageRoots::build(&f.table, &f.packages).unwrap_or_default();
    let scope = PackageScope::new(&f.table, &roots, f.packages.get(f.foo));

    assert!(scope.is_in_package(f.widget.into()));
    assert!(scope.is_in_package(f.nested.into()));
    assert!(scope.is_in_package(f.test_helper.into()));
    assert!(!scope.is_in_package(f.outside.into()));
    assert!(!scope.is_in_package(WellKnown::ROOT.into()));
    assert!(!scope.is_in_package(WellKnown::PACKAGE_REGISTRY.into()));
    assert!(!scope.is_in_package(WellKnown::T_ENUM.into()));
}

#[test]
fn nested_package_is_foreign_to_its_parent() {
    let f = fixture();
    let roots = PackageRoots::build(&f.table, &f.packages).unwrap_or_default();
    let scope = PackageScope::new(&f.table, &roots, f.packages.get(f.foo));
    assert!(!scope.is_in_package(f.sub_widget.into()));
}

#[test]
fn package_roots_belong_to_their_own_package() {
    let f = fixture();
    let roots = PackageRoots::build(&f.table, &f.packages).unwrap_or_default();
    let scope = PackageScope::new(&f.table, &roots, f.packages.get(f.foo));
    let namespace = scope.namespace().unwrap_or(WellKnown::ROOT);
    let test_namespace = scope.test_namespace().unwrap_or(WellKnown::ROOT);

    assert!(scope.is_in_package(namespace.into()));
    assert!(scope.is_in_package(test_namespace.into()));
    assert!(!scope.is_in_test_package(namespace.into()));
    assert!(scope.is_in_test_package(test_namespace.into()));
}

#[test]
fn test_package_requires_test_namespace() {
    let f = fixture();
    let roots = PackageRoots::build(&f.table, &f.packages).unwrap_or_default();
    let scope = PackageScope::new(&f.table, &roots, f.packages.get(f.foo));

    assert!(scope.is_in_test_package(f.test_helper.into()));
    assert!(!scope.is_in_test_package(f.widget.into()));
    assert!(!scope.is_in_test_package(f.outside.into()));
    assert!(!scope.is_in_test_package(f.sub_widget.into()));
}

#[test]
fn members_classify_through_their_owner() {
    let mut b = ProgramBuilder::new();
    let widget = b.class("Foo::Widget");
    let outside = b.class("Outside");
    let inside_method = b.method(widget, "call").void().id();
    let outside_field = b.static_field(outside, "LIMIT", Type::Untyped);
    let companion = b.class_of(widget);
    let companion_method = b.method(companion, "build").void().id();
    let foo = b.package("Foo", &[], &[]);
    let (table, packages) = b.finish();

    let roots = PackageRoots::build(&table, &packages).unwrap_or_default();
    let scope = PackageScope::new(&table, &roots, packages.get(foo));
    assert!(scope.is_in_package(inside_method.into()));
    assert!(scope.is_in_package(companion_method.into()));
    assert!(!scope.is_in_package(outside_field.into()));
    assert_eq!(scope.display_name(), "Foo");
}

#[test]
fn package_without_files_claims_nothing() {
    let mut b = ProgramBuilder::new();
    let widget = b.class("Ghost::Widget");
    let ghost = b.package("Phantom", &[], &[]);
    let (table, packages) = b.finish();

    let roots = PackageRoots::build(&table, &packages).unwrap_or_default();
    assert!(roots.is_empty());
    let scope = PackageScope::new(&table, &roots, packages.get(ghost));
    assert_eq!(scope.namespace(), None);
    assert!(!scope.is_in_package(widget.into()));
}
