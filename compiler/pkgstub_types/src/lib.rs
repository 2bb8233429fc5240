//! Resolved program model for stub generation.
//!
//! Everything here is produced upstream (name resolution, type inference,
//! package discovery) and is read-only by the time stubs are generated:
//!
//! - [`Type`]: the resolved type algebra, one exhaustively matched enum
//! - [`SymbolTable`]: namespaces, methods, fields and type parameters, plus the
//!   construction API the upstream resolver uses to populate it
//! - [`PackageDb`]: the package registry (names and export paths)
//! - [`ProgramBuilder`]: a path-oriented façade over the construction API
//!
//! Display ([`SymbolTable::show`]), traversal ([`TypeVisitor`], [`TypeFolder`])
//! and generic substitution ([`SymbolTable::as_seen_from`] and friends) live
//! alongside the model because every consumer needs them.

mod builder;
mod flags;
mod format;
mod packages;
mod subst;
mod table;
mod traverse;
mod ty;

pub use builder::{MethodBuilder, ProgramBuilder};
pub use flags::{ClassFlags, MethodFlags, ParamFlags, TypeMemberFlags};
pub use packages::{PackageDb, PackageId, PackageInfo};
pub use subst::TypeConstraint;
pub use table::{
    ClassData, ClassKind, FieldData, FieldKind, MethodData, Param, SymbolTable, TypeMemberData,
    Variance, WellKnown,
};
pub use traverse::{TypeFolder, TypeVisitor};
pub use ty::{Literal, Type};

