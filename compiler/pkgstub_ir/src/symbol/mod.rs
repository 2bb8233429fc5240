//! Typed handles into the resolved symbol table.
//!
//! Each symbol kind has its own index space, so a `MethodRef` can never be
//! confused with a `ClassRef` at compile time. [`SymbolRef`] unifies them
//! wherever any symbol may appear (member maps, closure sets, alias targets).

use std::fmt;

macro_rules! define_symbol_ref {
    ($(#[$meta:meta])* $name:ident, $tag:literal) => {
        $(#[$meta])*
        #[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
        #[repr(transparent)]
        pub struct $name(u32);

        impl $name {
            /// Create from a raw table index.
            #[inline]
            pub const fn from_raw(raw: u32) -> Self {
                Self(raw)
            }

            /// Get the raw table index.
            #[inline]
            pub const fn raw(self) -> u32 {
                self.0
            }

            /// Index into the owning table's storage.
            #[inline]
            pub const fn index(self) -> usize {
                self.0 as usize
            }
        }

        impl fmt::Debug for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, concat!($tag, "#{}"), self.0)
            }
        }
    };
}

define_symbol_ref!(
    /// A class- or module-like namespace (primary or companion).
    ClassRef,
    "Class"
);
define_symbol_ref!(
    /// A method.
    MethodRef,
    "Method"
);
define_symbol_ref!(
    /// An instance field, static field, or class variable.
    FieldRef,
    "Field"
);
define_symbol_ref!(
    /// A type parameter declared on a namespace or its companion.
    TypeMemberRef,
    "TypeMember"
);

impl ClassRef {
    /// The program root. Every owner chain ends here.
    pub const ROOT: ClassRef = ClassRef(0);
}

/// Symbol kind discriminant.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum SymbolKind {
    Class,
    Method,
    Field,
    TypeMember,
}

/// Any symbol in the table.
///
/// Ordering is kind-major, then index, which gives closure sets and member
/// listings a total order that does not depend on hashing.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum SymbolRef {
    Class(ClassRef),
    Method(MethodRef),
    Field(FieldRef),
    TypeMember(TypeMemberRef),
}

impl SymbolRef {
    /// The kind of symbol this handle points at.
    pub const fn kind(self) -> SymbolKind {
        match self {
            SymbolRef::Class(_) => SymbolKind::Class,
            SymbolRef::Method(_) => SymbolKind::Method,
            SymbolRef::Field(_) => SymbolKind::Field,
            SymbolRef::TypeMember(_) => SymbolKind::TypeMember,
        }
    }

    /// The namespace handle, if this is one.
    pub const fn as_class(self) -> Option<ClassRef> {
        match self {
            SymbolRef::Class(class) => Some(class),
            _ => None,
        }
    }

    /// The method handle, if this is one.
    pub const fn as_method(self) -> Option<MethodRef> {
        match self {
            SymbolRef::Method(method) => Some(method),
            _ => None,
        }
    }

    /// The field handle, if this is one.
    pub const fn as_field(self) -> Option<FieldRef> {
        match self {
            SymbolRef::Field(field) => Some(field),
            _ => None,
        }
    }

    /// The type parameter handle, if this is one.
    pub const fn as_type_member(self) -> Option<TypeMemberRef> {
        match self {
            SymbolRef::TypeMember(tm) => Some(tm),
            _ => None,
        }
    }

    /// Whether this is the program root.
    pub fn is_root(self) -> bool {
        self == SymbolRef::Class(ClassRef::ROOT)
    }
}

impl From<ClassRef> for SymbolRef {
    fn from(class: ClassRef) -> Self {
        SymbolRef::Class(class)
    }
}

impl From<MethodRef> for SymbolRef {
    fn from(method: MethodRef) -> Self {
        SymbolRef::Method(method)
    }
}

impl From<FieldRef> for SymbolRef {
    fn from(field: FieldRef) -> Self {
        SymbolRef::Field(field)
    }
}

impl From<TypeMemberRef> for SymbolRef {
    fn from(tm: TypeMemberRef) -> Self {
        SymbolRef::TypeMember(tm)
    }
}
