//! Core handles for the package stub generator.
//!
//! This crate holds the small, `Copy` identifiers every other crate passes
//! around:
//! - [`Name`] / [`NameTable`]: interned identifiers with a [`NameKind`]
//! - [`ClassRef`], [`MethodRef`], [`FieldRef`], [`TypeMemberRef`] and the
//!   unifying [`SymbolRef`]: stable handles into a resolved symbol table
//! - [`ensure_sufficient_stack`]: stack growth for deep type recursion
//!
//! # Design Philosophy
//!
//! - **Intern Everything**: strings become `Name(u32)`, symbols become typed `u32` handles
//! - **Read-only after resolution**: nothing here is mutated once generation starts,
//!   so every handle is freely shared across worker threads

mod interner;
mod name;
mod stack;
mod symbol;

pub use interner::{NameTable, StringLookup};
pub use name::{Name, NameKind};
pub use stack::ensure_sufficient_stack;
pub use symbol::{ClassRef, FieldRef, MethodRef, SymbolKind, SymbolRef, TypeMemberRef};

/// Compile-time assertion that a type has a specific size.
///
/// Handles are copied on every closure step; a size change should be deliberate.
#[macro_export]
macro_rules! static_assert_size {
    ($ty:ty, $size:expr) => {
        const _: [(); $size] = [(); ::std::mem::size_of::<$ty>()];
    };
}

#[cfg(target_pointer_width = "64")]
mod size_asserts {
    use super::{Name, SymbolRef};
    crate::static_assert_size!(Name, 4);
    // discriminant (4) + u32 payload (4)
    crate::static_assert_size!(SymbolRef, 8);
}
