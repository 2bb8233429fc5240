//! Interned identifier handle.
//!
//! A `Name` is a 32-bit index into a [`NameTable`](crate::NameTable). The
//! table also records each name's [`NameKind`], which the stub renderer uses
//! to drop compiler-internal members.

use std::fmt;

/// Interned identifier.
///
/// Equality and hashing are O(1) index comparisons. Ordering is by index and
/// therefore by interning order; use the table's text when a lexical order is
/// needed.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[repr(transparent)]
pub struct Name(u32);

impl Name {
    /// Pre-interned empty string.
    pub const EMPTY: Name = Name(0);
    /// `initialize`, the constructor method.
    pub const INITIALIZE: Name = Name(1);
    /// `<static-init>`, the synthesized body of a namespace's top-level code.
    pub const STATIC_INIT: Name = Name(2);
    /// `<singleton>`, the accessor from a namespace to its companion.
    pub const SINGLETON: Name = Name(3);
    /// `<AttachedClass>`, the implicit type template on every companion.
    pub const ATTACHED_CLASS: Name = Name(4);
    /// `attached_class`, the helper returning a companion's primary namespace.
    pub const ATTACHED: Name = Name(5);
    /// `sealed_subclasses`, synthesized on enum-sugar companions.
    pub const SEALED_SUBCLASSES: Name = Name(6);
    /// `<blk>`, the synthetic block parameter every method carries.
    pub const BLK: Name = Name(7);
    /// `Test`, the root of every package's test namespace.
    pub const TEST: Name = Name(8);

    /// Number of names interned by `NameTable::new()`.
    pub const PRE_INTERNED: u32 = 9;

    /// Create from a raw table index.
    #[inline]
    pub const fn from_raw(raw: u32) -> Self {
        Name(raw)
    }

    /// Get the raw table index.
    #[inline]
    pub const fn raw(self) -> u32 {
        self.0
    }

    #[inline]
    pub(crate) const fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Debug for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Name({})", self.0)
    }
}

impl Default for Name {
    fn default() -> Self {
        Self::EMPTY
    }
}

/// What sort of identifier a [`Name`] denotes.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum NameKind {
    /// Ordinary identifiers: methods, instance and class variables.
    Utf8,
    /// Constant names: namespaces, static fields, type parameters.
    Constant,
    /// Compiler-generated names that never appear in source.
    Unique,
}
