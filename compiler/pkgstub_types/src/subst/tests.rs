use super::*;
use crate::table::{ClassKind, Variance, WellKnown};
use pretty_assertions::assert_eq;

struct Generics {
    table: SymbolTable,
    /// `class Box; Elem = type_member`
    boxed: ClassRef,
    elem: TypeMemberRef,
    /// `class Labeled < Box[T.nilable(Label)]; Label = type_member`
    labeled: ClassRef,
    label: TypeMemberRef,
    integer: ClassRef,
    string: ClassRef,
}

fn generics() -> Generics {
    let mut table = SymbolTable::new();
    let integer = table.enter_class(WellKnown::ROOT, "Integer", ClassKind::Class);
    let string = table.enter_class(WellKnown::ROOT, "String", ClassKind::Class);
    let boxed = table.enter_class(WellKnown::ROOT, "Box", ClassKind::Class);
    let elem = table.enter_type_member(boxed, "Elem", Variance::Covariant);
    let labeled = table.enter_class(WellKnown::ROOT, "Labeled", ClassKind::Class);
    let label = table.enter_type_member(labeled, "Label", Variance::Invariant);
    let data = table.class_mut(labeled);
    data.superclass = Some(boxed);
    data.superclass_args = vec![Type::nilable(Type::SelfTypeParam(label))];
    Generics {
        table,
        boxed,
        elem,
        labeled,
        label,
        integer,
        string,
    }
}

#[test]
fn direct_receiver_substitutes_type_members() {
    let g = generics();
    let declared = Type::Tuple(vec![Type::SelfTypeParam(g.elem), Type::class(g.string)]);
    let seen = g
        .table
        .as_seen_from(&declared, g.boxed, g.boxed, &[Type::class(g.integer)]);
    assert_eq!(seen, Type::Tuple(vec![Type::class(g.integer), Type::class(g.string)]));
}

#[test]
fn inherited_member_goes_through_superclass_arguments() {
    let g = generics();
    let declared = Type::SelfTypeParam(g.elem);
    let seen = g
        .table
        .as_seen_from(&declared, g.boxed, g.labeled, &[Type::class(g.string)]);
    assert_eq!(seen, Type::nilable(Type::class(g.string)));
    assert_eq!(g.table.show(&seen), "T.nilable(String)");
}

#[test]
fn missing_arguments_become_untyped() {
    let g = generics();
    let seen = g
        .table
        .as_seen_from(&Type::SelfTypeParam(g.label), g.labeled, g.labeled, &[]);
    assert_eq!(seen, Type::Untyped);
}

#[test]
fn unrelated_owner_is_left_alone() {
    let g = generics();
    let declared = Type::SelfTypeParam(g.label);
    let seen = g
        .table
        .as_seen_from(&declared, g.labeled, g.boxed, &[Type::class(g.integer)]);
    assert_eq!(seen, declared);
}

#[test]
fn lambda_param_bounds_are_replaced() {
    let g = generics();
    let declared = Type::LambdaParam {
        definition: g.elem,
        lower: Box::new(Type::Untyped),
        upper: Box::new(Type::Untyped),
    };
    let seen = g
        .table
        .as_seen_from(&declared, g.boxed, g.boxed, &[Type::class(g.integer)]);
    assert_eq!(seen, Type::class(g.integer));
}

#[test]
fn self_type_is_replaced_by_receiver() {
    let g = generics();
    let receiver = Type::applied(g.boxed, vec![Type::class(g.integer)]);
    let declared = Type::nilable(Type::SelfType);
    assert_eq!(
        SymbolTable::replace_self_type(&declared, &receiver),
        Type::nilable(receiver.clone())
    );
}

#[test]
fn constraint_binds_type_variables() {
    let mut g = generics();
    let u = g.table.names_mut().intern("U");
    let v = g.table.names_mut().intern("V");
    let mut constraint = TypeConstraint::new();
    constraint.bind(u, Type::class(g.string));

    let declared = Type::Tuple(vec![Type::TypeVar(u), Type::TypeVar(v)]);
    assert_eq!(
        SymbolTable::instantiate(&declared, &constraint),
        Type::Tuple(vec![Type::class(g.string), Type::TypeVar(v)])
    );
    assert_eq!(
        SymbolTable::instantiate(&declared, &TypeConstraint::new()),
        declared
    );
}
