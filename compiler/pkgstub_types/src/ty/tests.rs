use super::*;

#[test]
fn void_is_recognized() {
    assert!(Type::void().is_void());
    assert!(!Type::Untyped.is_void());
    assert!(!Type::class(WellKnown::OBJECT).is_void());
}

#[test]
fn nilable_is_union_with_nil() {
    let ty = Type::nilable(Type::class(WellKnown::OBJECT));
    assert_eq!(
        ty,
        Type::Or(
            Box::new(Type::Class(WellKnown::OBJECT)),
            Box::new(Type::Class(WellKnown::NIL_CLASS))
        )
    );
}

#[test]
fn alias_downcast() {
    let target = SymbolRef::from(WellKnown::OBJECT);
    assert_eq!(Type::Alias(target).as_alias(), Some(target));
    assert_eq!(Type::SelfType.as_alias(), None);
}
