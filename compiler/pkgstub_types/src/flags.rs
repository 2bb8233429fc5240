//! Symbol flag sets.
//!
//! Flags are set once by the resolver and only queried afterwards.

use bitflags::bitflags;

bitflags! {
    /// Declared qualifiers of a namespace.
    #[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
    pub struct ClassFlags: u8 {
        const ABSTRACT = 1 << 0;
        const FINAL = 1 << 1;
        const INTERFACE = 1 << 2;
        const SEALED = 1 << 3;
    }
}

bitflags! {
    /// Visibility and signature qualifiers of a method.
    #[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
    pub struct MethodFlags: u16 {
        const PRIVATE = 1 << 0;
        const PROTECTED = 1 << 1;
        const ABSTRACT = 1 << 2;
        const OVERRIDABLE = 1 << 3;
        const OVERRIDE = 1 << 4;
        const FINAL = 1 << 5;
        /// The method carries a declared signature.
        const HAS_SIG = 1 << 6;
    }
}

bitflags! {
    /// Positional role of a method parameter.
    #[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
    pub struct ParamFlags: u8 {
        const KEYWORD = 1 << 0;
        /// Rest parameter (`*args`), or variadic keywords with `KEYWORD`.
        const REPEATED = 1 << 1;
        /// Optional; the source declared a default value.
        const DEFAULT = 1 << 2;
        const BLOCK = 1 << 3;
    }
}

bitflags! {
    /// Qualifiers of a type parameter.
    #[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
    pub struct TypeMemberFlags: u8 {
        /// Pinned to its upper bound; carries no variance.
        const FIXED = 1 << 0;
    }
}
