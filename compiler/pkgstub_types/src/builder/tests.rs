use super::*;
use crate::table::FieldKind;
use pkgstub_ir::{NameKind, SymbolRef};
use pretty_assertions::assert_eq;

#[test]
fn paths_create_intermediate_modules() {
    let mut b = ProgramBuilder::new();
    let widget = b.class("Shop::Parts::Widget");
    let table = b.table();
    assert_eq!(table.qualified_name(widget), "Shop::Parts::Widget");
    assert_eq!(table.class(widget).kind, ClassKind::Class);
    let parts = table.class(widget).owner;
    assert_eq!(table.class(parts).kind, ClassKind::Module);
    assert_eq!(b.module("Shop::Parts"), parts);
}

#[test]
fn method_parameters_keep_declaration_order() {
    let mut b = ProgramBuilder::new();
    let widget = b.class("Widget");
    let method = b
        .method(widget, "call")
        .param("a", Type::Untyped)
        .optional_param("b", Type::Untyped)
        .keyword("c", Type::Untyped)
        .optional_keyword("d", Type::Untyped)
        .rest("e", Type::Untyped)
        .keyword_rest("f", Type::Untyped)
        .block("g", Type::Untyped)
        .type_param("U")
        .void()
        .id();

    let table = b.table();
    let data = table.method(method);
    let names: Vec<&str> = data.params.iter().map(|p| table.name_text(p.name)).collect();
    assert_eq!(names, vec!["a", "b", "c", "d", "e", "f", "g"]);
    assert!(data.params[1].has_default());
    assert!(data.params[3].is_keyword() && data.params[3].has_default());
    assert!(data.params[5].is_keyword() && data.params[5].is_repeated());
    assert!(data.params[6].is_block() && !data.params[6].is_synthetic_block());
    assert!(data.has_sig());
    assert_eq!(data.result_type, Some(Type::void()));
    assert_eq!(data.type_params.len(), 1);
}

#[test]
fn unnamed_block_stays_synthetic() {
    let mut b = ProgramBuilder::new();
    let widget = b.class("Widget");
    let method = b.method(widget, "call").param("a", Type::Untyped).id();
    let data = b.table().method(method);
    assert_eq!(data.params.len(), 2);
    assert!(data.params[1].is_synthetic_block());
    assert!(!data.has_sig());
}

#[test]
fn type_template_shadows_a_constant() {
    let mut b = ProgramBuilder::new();
    let widget = b.class("Widget");
    let tm = b.type_template(widget, "Elem", Variance::Covariant);
    let table = b.table();
    let companion = table.class(widget).companion;
    assert_eq!(Some(table.type_member(tm).owner), companion);

    let shadow = table
        .find_member(widget, table.type_member(tm).name)
        .and_then(SymbolRef::as_field);
    let shadow = table.field(shadow.unwrap_or_else(|| panic!("missing shadow constant")));
    assert_eq!(shadow.kind, FieldKind::Static);
    assert_eq!(shadow.result_type, Some(Type::Alias(tm.into())));
}

#[test]
fn fixed_type_member_pins_bounds() {
    let mut b = ProgramBuilder::new();
    let widget = b.class("Widget");
    let tm = b.fixed_type_member(widget, "Elem", Type::class(WellKnown::OBJECT));
    let data = b.table().type_member(tm);
    assert!(data.is_fixed());
    assert_eq!(data.upper, Type::class(WellKnown::OBJECT));
}

#[test]
fn sugar_shapes() {
    let mut b = ProgramBuilder::new();
    let suit = b.enum_class("Suit");
    let spades = b.enum_value(suit, "Spades");
    let point = b.struct_class("Point");

    let table = b.table();
    assert!(table.is_enum(suit));
    assert!(table.is_enum_value(spades));
    assert!(!table.is_enum_value(suit));
    assert!(table.is_struct(point));
    assert!(table.class(suit).is_abstract() && table.class(suit).is_sealed());

    let companion = table.class(suit).companion.unwrap_or_else(|| panic!("no companion"));
    assert!(matches!(
        table.find_member(companion, Name::SEALED_SUBCLASSES),
        Some(SymbolRef::Method(_))
    ));
}

#[test]
fn packages_intern_paths_by_case() {
    let mut b = ProgramBuilder::new();
    let id = b.package("Shop", &["Shop::Widget", "Shop::helper"], &["Test::Shop::Fixture"]);
    let (table, packages) = b.finish();
    let info = packages.get(id);
    assert_eq!(info.display_name(table.names()), "Shop");
    assert_eq!(info.exports.len(), 2);
    assert_eq!(table.names().kind(info.exports[0][1]), NameKind::Constant);
    assert_eq!(table.names().kind(info.exports[1][1]), NameKind::Utf8);
    assert_eq!(info.test_exports[0][0], Name::TEST);
}
