//! Type text with closure discovery.

use super::Renderer;
use crate::classify::PackageScope;
use crate::closure::EmissionState;
use pkgstub_ir::{ClassRef, SymbolRef, TypeMemberRef};
use pkgstub_types::{Type, TypeVisitor};

/// Schedules every symbol a type mentions: namespaces (including generic
/// heads and unresolved placeholders), alias targets, and type parameter
/// definitions. Bounds, arguments and branches are walked by the visitor's
/// defaults.
struct SymbolCollector<'s, 'a> {
    scope: &'s PackageScope<'a>,
    state: &'s mut EmissionState,
}

impl TypeVisitor for SymbolCollector<'_, '_> {
    fn visit_class(&mut self, class: ClassRef) {
        self.state.maybe_emit(self.scope, class.into());
    }

    fn visit_alias(&mut self, symbol: SymbolRef) {
        self.state.maybe_emit(self.scope, symbol);
    }

    fn visit_self_type_param(&mut self, tm: TypeMemberRef) {
        self.state.maybe_emit(self.scope, tm.into());
    }
}

impl Renderer<'_> {
    /// Schedule every in-package symbol `ty` mentions.
    pub(super) fn enqueue_type(&mut self, ty: &Type) {
        SymbolCollector {
            scope: &self.scope,
            state: &mut self.state,
        }
        .visit(ty);
    }

    /// Display text for `ty`, scheduling what it mentions.
    pub(super) fn show_type(&mut self, ty: &Type) -> String {
        self.enqueue_type(ty);
        self.table.show(ty)
    }
}
