use super::*;
use pkgstub_types::{PackageDb, PackageId, ProgramBuilder, Type};
use pretty_assertions::assert_eq;

struct Fixture {
    table: SymbolTable,
    packages: PackageDb,
    roots: PackageRoots,
    foo: PackageId,
}

/// `Foo` exports a class, a test helper listed with the public exports, a
/// path that does not resolve, and one test export.
fn fixture() -> Fixture {
    let mut b = ProgramBuilder::new();
    let widget = b.class("Foo::Widget");
    b.method(widget, "size").returns(Type::Untyped);
    b.class("Test::Foo::Helper");
    b.class("Test::Foo::Fixture");
    let foo = b.package(
        "Foo",
        &["Foo::Widget", "Test::Foo::Helper", "Foo::Missing"],
        &["Test::Foo::Fixture"],
    );
    let (table, packages) = b.finish();
    let roots = PackageRoots::build(&table, &packages).unwrap();
    Fixture {
        table,
        packages,
        roots,
        foo,
    }
}

fn names(table: &SymbolTable, symbols: &[SymbolRef]) -> Vec<String> {
    symbols.iter().map(|&symbol| table.show_symbol(symbol)).collect()
}

#[test]
fn exports_split_by_namespace() {
    let f = fixture();
    let scope = PackageScope::new(&f.table, &f.roots, f.packages.get(f.foo));
    let exports = resolve_exports(&scope);
    assert_eq!(names(&f.table, &exports.public), vec!["Foo::Widget"]);
    assert_eq!(
        names(&f.table, &exports.test),
        vec!["Test::Foo::Helper", "Test::Foo::Fixture"]
    );
}

#[test]
fn package_produces_both_artifacts() {
    let f = fixture();
    let artifacts = generate_package(
        &f.table,
        &f.roots,
        f.packages.get(f.foo),
        &GeneratorConfig::default(),
    )
    .unwrap();

    assert_eq!(artifacts.mangled_name, "Foo_Package");
    assert_eq!(
        artifacts.public.as_deref(),
        Some(
            "# typed: true\n\n\
             class Foo::Widget < Object\n\
             \x20 sig {returns(T.untyped)}\n\
             \x20 def size; end\n\
             end\n"
        )
    );
    assert_eq!(
        artifacts.test.as_deref(),
        Some(
            "# typed: true\n\n\
             class Test::Foo::Fixture < Object\n\
             end\n\
             class Test::Foo::Helper < Object\n\
             end\n"
        )
    );
}

#[test]
fn header_comes_from_config() {
    let f = fixture();
    let config = GeneratorConfig {
        strictness_header: "# typed: strict".to_owned(),
        ..GeneratorConfig::default()
    };
    let artifacts = generate_package(&f.table, &f.roots, f.packages.get(f.foo), &config).unwrap();
    assert!(artifacts
        .public
        .unwrap()
        .starts_with("# typed: strict\n\nclass Foo::Widget"));
}

#[test]
fn nothing_exported_means_no_artifacts() {
    let mut b = ProgramBuilder::new();
    b.class("Quiet::Inner");
    let quiet = b.package("Quiet", &[], &[]);
    let (table, packages) = b.finish();
    let roots = PackageRoots::build(&table, &packages).unwrap();

    let artifacts =
        generate_package(&table, &roots, packages.get(quiet), &GeneratorConfig::default()).unwrap();
    assert!(artifacts.is_empty());
    assert_eq!(artifacts.mangled_name, "Quiet_Package");
}

#[test]
fn empty_rendering_means_no_artifact() {
    let mut b = ProgramBuilder::new();
    let suit = b.enum_class("Cards::Suit");
    let hearts = b.enum_value(suit, "Hearts");
    let deck = b.class("Cards::Deck");
    b.static_field(deck, "TOP", Type::class(hearts));
    let cards = b.package("Cards", &["Cards::Deck::TOP"], &[]);
    let (table, packages) = b.finish();
    let roots = PackageRoots::build(&table, &packages).unwrap();

    let artifacts =
        generate_package(&table, &roots, packages.get(cards), &GeneratorConfig::default()).unwrap();
    assert_eq!(artifacts.public, None);
}

#[test]
fn exported_enum_value_renders_its_enum() {
    let mut b = ProgramBuilder::new();
    let suit = b.enum_class("Cards::Suit");
    b.enum_value(suit, "Hearts");
    let cards = b.package("Cards", &["Cards::Suit::Hearts"], &[]);
    let (table, packages) = b.finish();
    let roots = PackageRoots::build(&table, &packages).unwrap();

    let artifacts =
        generate_package(&table, &roots, packages.get(cards), &GeneratorConfig::default()).unwrap();
    let public = artifacts.public.as_deref().unwrap();
    assert!(public.contains("class Cards::Suit < T::Enum\n"), "{public}");
    assert!(public.contains("    Hearts = new\n"), "{public}");
}

#[test]
fn exported_method_renders_its_namespace() {
    let mut b = ProgramBuilder::new();
    let widget = b.class("Foo::Widget");
    b.method(widget, "size").void();
    let foo = b.package("Foo", &["Foo::Widget::size"], &[]);
    let (table, packages) = b.finish();
    let roots = PackageRoots::build(&table, &packages).unwrap();
    let scope = PackageScope::new(&table, &roots, packages.get(foo));

    assert_eq!(names(&table, &resolve_exports(&scope).public), vec!["Foo::Widget#size"]);
    let artifacts =
        generate_package(&table, &roots, packages.get(foo), &GeneratorConfig::default()).unwrap();
    assert_eq!(
        artifacts.public.as_deref(),
        Some("# typed: true\n\nclass Foo::Widget < Object\n  sig {void}\n  def size; end\nend\n")
    );
}

#[test]
fn export_in_another_package_is_not_rendered() {
    let mut b = ProgramBuilder::new();
    b.class("Foo::Widget");
    b.class("Bar::Gadget");
    let foo = b.package("Foo", &["Bar::Gadget"], &[]);
    b.package("Bar", &[], &[]);
    let (table, packages) = b.finish();
    let roots = PackageRoots::build(&table, &packages).unwrap();

    let artifacts =
        generate_package(&table, &roots, packages.get(foo), &GeneratorConfig::default()).unwrap();
    assert!(artifacts.is_empty());
}
