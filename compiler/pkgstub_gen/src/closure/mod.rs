//! Dependency closure.
//!
//! [`EmissionState`] is the emitted set plus the worklist for one artifact of
//! one package. Symbols enter through [`EmissionState::maybe_emit`], which
//! admits each in-package symbol at most once; the renderer drains the
//! worklist and, while rendering, feeds newly discovered symbols back in.
//! Admission is gated on the emitted set, so cyclic references terminate.

use crate::classify::PackageScope;
use pkgstub_ir::{ClassRef, SymbolRef};
use pkgstub_types::SymbolTable;
use rustc_hash::FxHashSet;

/// Emitted set and pending worklist for one (package, artifact) pair.
#[derive(Debug, Default)]
pub struct EmissionState {
    emitted: FxHashSet<SymbolRef>,
    pending: Vec<SymbolRef>,
}

impl EmissionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedule `symbol` if it belongs to the package and was not scheduled
    /// before. Returns whether it was scheduled.
    ///
    /// Namespaces and methods are scheduled as the namespace whose body
    /// declares them: a companion as its primary, an enum value as its enum,
    /// a method as its owner's primary.
    pub fn maybe_emit(&mut self, scope: &PackageScope<'_>, symbol: SymbolRef) -> bool {
        let table = scope.table();
        let symbol = match symbol {
            SymbolRef::Class(class) => SymbolRef::Class(declaring_namespace(table, class)),
            SymbolRef::Method(method) => {
                SymbolRef::Class(declaring_namespace(table, table.method(method).owner))
            }
            other => other,
        };
        if self.emitted.contains(&symbol) || !scope.is_in_package(symbol) {
            return false;
        }
        tracing::trace!(symbol = %table.show_symbol(symbol), "scheduled");
        self.emitted.insert(symbol);
        self.pending.push(symbol);
        true
    }

    /// Next symbol to render, most recently scheduled first.
    pub fn pop(&mut self) -> Option<SymbolRef> {
        self.pending.pop()
    }

    /// Record `symbol` as emitted without scheduling it. Returns `false` if
    /// it already was.
    pub fn mark_emitted(&mut self, symbol: SymbolRef) -> bool {
        self.emitted.insert(symbol)
    }

    pub fn is_emitted(&self, symbol: SymbolRef) -> bool {
        self.emitted.contains(&symbol)
    }

    /// Number of symbols in the closure so far.
    pub fn len(&self) -> usize {
        self.emitted.len()
    }

    /// Whether nothing has been admitted.
    pub fn is_empty(&self) -> bool {
        self.emitted.is_empty()
    }

    pub fn has_pending(&self) -> bool {
        !self.pending.is_empty()
    }
}

/// The namespace rendered for `class`.
fn declaring_namespace(table: &SymbolTable, class: ClassRef) -> ClassRef {
    let class = table.primary(class);
    match table.class(class).superclass {
        Some(enum_class) if table.is_enum_value(class) => enum_class,
        _ => class,
    }
}

#[cfg(test)]
mod tests;
