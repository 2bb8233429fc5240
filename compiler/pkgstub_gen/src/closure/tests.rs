use super::*;
use crate::classify::PackageRoots;
use pkgstub_ir::ClassRef;
use pkgstub_types::{PackageDb, PackageId, ProgramBuilder, SymbolTable, Type, Variance};

struct Fixture {
    table: SymbolTable,
    packages: PackageDb,
    roots: PackageRoots,
    foo: PackageId,
    widget: ClassRef,
    gadget: ClassRef,
    outside: ClassRef,
}

fn fixture() -> Fixture {
    let mut b = ProgramBuilder::new();
    let widget = b.class("Foo::Widget");
    let gadget = b.class("Foo::Gadget");
    let outside = b.class("Bar::Outside");
    let foo = b.package("Foo", &["Foo::Widget"], &[]);
    b.package("Bar", &[], &[]);
    let (table, packages) = b.finish();
    let roots = PackageRoots::build(&table, &packages).unwrap();
    Fixture {
        table,
        packages,
        roots,
        foo,
        widget,
        gadget,
        outside,
    }
}

#[test]
fn schedules_each_symbol_once() {
    let f = fixture();
    let scope = PackageScope::new(&f.table, &f.roots, f.packages.get(f.foo));
    let mut state = EmissionState::new();

    assert!(state.maybe_emit(&scope, f.widget.into()));
    assert!(!state.maybe_emit(&scope, f.widget.into()));
    assert_eq!(state.len(), 1);
    assert_eq!(state.pop(), Some(f.widget.into()));
    assert_eq!(state.pop(), None);
    // Popping does not make a symbol schedulable again.
    assert!(!state.maybe_emit(&scope, f.widget.into()));
}

#[test]
fn foreign_symbols_are_never_scheduled() {
    let f = fixture();
    let scope = PackageScope::new(&f.table, &f.roots, f.packages.get(f.foo));
    let mut state = EmissionState::new();

    assert!(!state.maybe_emit(&scope, f.outside.into()));
    assert!(!state.maybe_emit(&scope, pkgstub_types::WellKnown::OBJECT.into()));
    assert!(state.is_empty());
    assert!(!state.has_pending());
}

#[test]
fn worklist_is_last_in_first_out() {
    let f = fixture();
    let scope = PackageScope::new(&f.table, &f.roots, f.packages.get(f.foo));
    let mut state = EmissionState::new();

    state.maybe_emit(&scope, f.widget.into());
    state.maybe_emit(&scope, f.gadget.into());
    assert_eq!(state.pop(), Some(f.gadget.into()));
    assert_eq!(state.pop(), Some(f.widget.into()));
}

#[test]
fn companions_and_methods_redirect_to_primary() {
    let mut b = ProgramBuilder::new();
    let widget = b.class("Foo::Widget");
    let companion = b.class_of(widget);
    let build = b.method(companion, "build").void().id();
    let call = b.method(widget, "call").void().id();
    let foo = b.package("Foo", &[], &[]);
    let (table, packages) = b.finish();
    let roots = PackageRoots::build(&table, &packages).unwrap();
    let scope = PackageScope::new(&table, &roots, packages.get(foo));

    let mut state = EmissionState::new();
    assert!(state.maybe_emit(&scope, companion.into()));
    assert!(!state.maybe_emit(&scope, widget.into()));
    assert!(!state.maybe_emit(&scope, build.into()));
    assert!(!state.maybe_emit(&scope, call.into()));
    assert!(state.is_emitted(widget.into()));
    assert!(!state.is_emitted(companion.into()));
    assert_eq!(state.pop(), Some(widget.into()));
    assert_eq!(state.pop(), None);
}

#[test]
fn enum_values_and_their_methods_redirect_to_the_enum() {
    let mut b = ProgramBuilder::new();
    let suit = b.enum_class("Cards::Suit");
    let hearts = b.enum_value(suit, "Hearts");
    let colour = b.method(hearts, "colour").void().id();
    let cards = b.package("Cards", &[], &[]);
    let (table, packages) = b.finish();
    let roots = PackageRoots::build(&table, &packages).unwrap();
    let scope = PackageScope::new(&table, &roots, packages.get(cards));

    let mut state = EmissionState::new();
    assert!(state.maybe_emit(&scope, hearts.into()));
    assert!(!state.maybe_emit(&scope, colour.into()));
    assert!(!state.maybe_emit(&scope, suit.into()));
    assert!(!state.is_emitted(hearts.into()));
    assert_eq!(state.pop(), Some(suit.into()));
    assert_eq!(state.pop(), None);
}

#[test]
fn fields_and_type_members_are_scheduled_as_themselves() {
    let mut b = ProgramBuilder::new();
    let widget = b.class("Foo::Widget");
    let limit = b.static_field(widget, "LIMIT", Type::Untyped);
    let elem = b.type_member(widget, "Elem", Variance::Invariant);
    let foo = b.package("Foo", &[], &[]);
    let (table, packages) = b.finish();
    let roots = PackageRoots::build(&table, &packages).unwrap();
    let scope = PackageScope::new(&table, &roots, packages.get(foo));

    let mut state = EmissionState::new();
    assert!(state.maybe_emit(&scope, limit.into()));
    assert!(state.maybe_emit(&scope, elem.into()));
    assert!(!state.is_emitted(widget.into()));
    assert_eq!(state.len(), 2);
}

#[test]
fn mark_emitted_reports_novelty() {
    let f = fixture();
    let mut state = EmissionState::new();
    assert!(state.mark_emitted(f.gadget.into()));
    assert!(!state.mark_emitted(f.gadget.into()));
    assert!(!state.has_pending());
}
