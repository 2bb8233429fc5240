//! The resolved type algebra.
//!
//! A `Type` tree is acyclic. Cycles in a program only show up through symbol
//! references (`Class`, `Alias`, `SelfTypeParam`, ...), which consumers must
//! track themselves; walking a single `Type` always terminates.

use crate::table::WellKnown;
use pkgstub_ir::{ClassRef, Name, SymbolRef, TypeMemberRef};

/// A resolved type expression.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub enum Type {
    /// Nominal reference to a namespace.
    Class(ClassRef),
    /// Generic namespace applied to type arguments.
    Applied { class: ClassRef, args: Vec<Type> },
    /// Union of two types.
    Or(Box<Type>, Box<Type>),
    /// Intersection of two types.
    And(Box<Type>, Box<Type>),
    /// Fixed-arity tuple.
    Tuple(Vec<Type>),
    /// Record type; `keys[i]` maps to `values[i]`. Keys are literal types.
    Shape { keys: Vec<Type>, values: Vec<Type> },
    /// Singleton literal type.
    Literal(Literal),
    /// Refers to the type another symbol stands for (a type alias constant,
    /// a type parameter, or a namespace used as a value).
    Alias(SymbolRef),
    /// The type of `self` at the use site.
    SelfType,
    /// A namespace's own type parameter, referenced from inside that namespace.
    SelfTypeParam(TypeMemberRef),
    /// A method-level generic type variable.
    TypeVar(Name),
    /// A generic application whose head could not be resolved to a generic
    /// namespace. `class` is the placeholder namespace, `symbol` the constant
    /// as written.
    UnresolvedApplied {
        class: ClassRef,
        symbol: ClassRef,
        args: Vec<Type>,
    },
    /// A constant path that did not resolve, relative to `scope`.
    UnresolvedClass { scope: ClassRef, names: Vec<Name> },
    /// A type parameter's bounds.
    LambdaParam {
        definition: TypeMemberRef,
        lower: Box<Type>,
        upper: Box<Type>,
    },
    /// Explicitly untyped.
    Untyped,
}

/// Value carried by a literal type.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub enum Literal {
    Integer(i64),
    String(Name),
    Symbol(Name),
    True,
    False,
}

impl Type {
    /// Nominal reference to `class`.
    pub fn class(class: ClassRef) -> Type {
        Type::Class(class)
    }

    /// `class` applied to `args`.
    pub fn applied(class: ClassRef, args: Vec<Type>) -> Type {
        Type::Applied { class, args }
    }

    /// Union of `left` and `right`.
    pub fn or(left: Type, right: Type) -> Type {
        Type::Or(Box::new(left), Box::new(right))
    }

    /// Intersection of `left` and `right`.
    pub fn and(left: Type, right: Type) -> Type {
        Type::And(Box::new(left), Box::new(right))
    }

    /// `inner` or nil.
    pub fn nilable(inner: Type) -> Type {
        Type::or(inner, Type::Class(WellKnown::NIL_CLASS))
    }

    /// The "no value" return type.
    pub fn void() -> Type {
        Type::Class(WellKnown::VOID)
    }

    /// Whether this is the "no value" return type.
    pub fn is_void(&self) -> bool {
        matches!(self, Type::Class(class) if *class == WellKnown::VOID)
    }

    /// Whether this is `Untyped`.
    pub fn is_untyped(&self) -> bool {
        matches!(self, Type::Untyped)
    }

    /// The alias target, if this is an alias.
    pub fn as_alias(&self) -> Option<SymbolRef> {
        match self {
            Type::Alias(symbol) => Some(*symbol),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests;
