//! Stub rendering.
//!
//! A [`Renderer`] owns the emission state and output buffer of one artifact.
//! [`Renderer::run`] pops scheduled symbols and renders them; rendering a
//! type schedules every in-package symbol the type mentions, so the closure
//! grows while the worklist drains.
//!
//! - `namespace`: class and module bodies, the initializer block, enum values
//! - `signature`: `sig` blocks and `def` headers
//! - `types`: type text plus closure discovery

mod namespace;
mod signature;
mod types;

pub use signature::{MethodView, MAX_PRETTY_SIG_ARGS, MAX_PRETTY_WIDTH};

use crate::classify::PackageScope;
use crate::closure::EmissionState;
use crate::error::GenError;
use crate::output::Output;
use pkgstub_ir::{FieldRef, Name, NameKind, SymbolRef};
use pkgstub_types::{SymbolTable, Type, WellKnown};

/// How a field's name is written.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
enum FieldName {
    /// Bare name, inside the owning body.
    Bare,
    /// Qualified constant path at top level.
    Qualified,
}

/// Renders one artifact of one package.
pub(crate) struct Renderer<'a> {
    table: &'a SymbolTable,
    scope: PackageScope<'a>,
    state: EmissionState,
    out: Output,
}

impl<'a> Renderer<'a> {
    pub(crate) fn new(scope: PackageScope<'a>) -> Self {
        Renderer {
            table: scope.table(),
            scope,
            state: EmissionState::new(),
            out: Output::new(),
        }
    }

    /// Schedule `symbol` if it belongs to the package.
    pub(crate) fn schedule(&mut self, symbol: SymbolRef) -> bool {
        self.state.maybe_emit(&self.scope, symbol)
    }

    /// Whether nothing has been admitted to the closure.
    pub(crate) fn closure_is_empty(&self) -> bool {
        self.state.is_empty()
    }

    /// Drain the worklist.
    pub(crate) fn run(&mut self) -> Result<(), GenError> {
        while let Some(symbol) = self.state.pop() {
            match symbol {
                SymbolRef::Class(class) => self.emit_class(class)?,
                SymbolRef::Field(field) => self.emit_field(field, FieldName::Qualified),
                // Methods are scheduled through their namespace; type
                // members render with their owner.
                SymbolRef::Method(_) | SymbolRef::TypeMember(_) => {}
            }
        }
        Ok(())
    }

    /// The rendered text.
    pub(crate) fn finish(mut self) -> String {
        self.out.take()
    }

    /// Members the stub never declares: compiler-internal names and the
    /// companion plumbing.
    fn should_skip_member(&self, name: Name) -> bool {
        self.table.names().kind(name) == NameKind::Unique
            || name == Name::SINGLETON
            || name == Name::ATTACHED_CLASS
            || name == Name::ATTACHED
    }

    /// `name = T.let(T.unsafe(nil), Type)`, or `name = Target` for aliases.
    fn emit_field(&mut self, field: FieldRef, naming: FieldName) {
        let table = self.table;
        let data = table.field(field);
        if data.is_static() && self.is_rewriter_constant(data.result_type.as_ref()) {
            return;
        }
        let name = match naming {
            FieldName::Qualified if data.is_static() => table.show_symbol(field.into()),
            _ => table.name_text(data.name).to_owned(),
        };
        let value = self.type_declaration(data.result_type.as_ref());
        self.out.println(&format!("{name} = {value}"));
    }

    /// Constants the upstream rewriters generate alongside sugar that the
    /// stub reproduces another way: the shadow of a type template, and the
    /// constants of enum values.
    fn is_rewriter_constant(&self, ty: Option<&Type>) -> bool {
        match ty {
            Some(Type::Alias(SymbolRef::TypeMember(tm))) => {
                self.table.class(self.table.type_member(*tm).owner).is_companion()
            }
            Some(Type::Class(class)) => {
                *class == WellKnown::T_ENUM || self.table.is_enum_value(*class)
            }
            _ => false,
        }
    }

    fn type_declaration(&mut self, ty: Option<&Type>) -> String {
        match ty {
            None => "T.let(T.unsafe(nil), T.untyped)".to_owned(),
            Some(Type::Alias(symbol)) => {
                self.schedule(*symbol);
                self.table.show_symbol(*symbol)
            }
            Some(ty) => format!("T.let(T.unsafe(nil), {})", self.show_type(ty)),
        }
    }

    #[cfg(test)]
    pub(crate) fn state(&self) -> &EmissionState {
        &self.state
    }
}
