//! Namespace bodies.
//!
//! ```text
//! class Shop::Widget < Shop::Base
//!   abstract!
//!   include Shop::Priced
//!   Elem = type_member(:out)
//!   <members, stable order>
//!   <initializer with instance fields>
//!   <companion: extend, type_template, self. methods>
//!   <enums do ... end>
//! end
//! ```
//!
//! Nested namespaces and plain constants are scheduled rather than written
//! inline; they appear at top level under their qualified name.

use super::{FieldName, MethodView, Renderer};
use crate::error::GenError;
use pkgstub_ir::{ClassRef, FieldRef, MethodRef, Name, SymbolRef, TypeMemberRef};
use pkgstub_types::{ClassFlags, Variance, WellKnown};

impl Renderer<'_> {
    pub(super) fn emit_class(&mut self, class: ClassRef) -> Result<(), GenError> {
        let table = self.table;
        if !self.scope.is_in_package(class.into()) || !self.state.is_emitted(class.into()) {
            return Err(GenError::ForeignSymbol {
                symbol: table.show_symbol(class.into()),
                package: self.scope.display_name(),
            });
        }
        tracing::trace!(class = %table.show_symbol(class.into()), "rendering namespace");

        let data = table.class(class);
        let is_enum = table.is_enum(class);
        let keyword = if data.is_class() { "class" } else { "module" };
        let mut header = format!("{keyword} {}", table.show_symbol(class.into()));
        if let Some(superclass) = data.superclass {
            if superclass != WellKnown::IMPLICIT_MODULE_SUPERCLASS {
                self.schedule(superclass.into());
                header.push_str(" < ");
                header.push_str(&table.show_symbol(superclass.into()));
            }
        }
        self.out.println(&header);

        {
            let _indent = self.out.indent();

            for (flag, text) in [
                (ClassFlags::ABSTRACT, "abstract!"),
                (ClassFlags::FINAL, "final!"),
                (ClassFlags::INTERFACE, "interface!"),
                (ClassFlags::SEALED, "sealed!"),
            ] {
                if data.flags.contains(flag) {
                    self.out.println(text);
                }
            }

            for &mixin in &data.mixins {
                let keyword = if table.class(mixin).is_companion() {
                    "extend"
                } else {
                    "include"
                };
                self.out
                    .println(&format!("{keyword} {}", table.show_symbol(mixin.into())));
                self.schedule(mixin.into());
            }

            for &tm in &data.type_members {
                self.emit_type_member(tm);
            }

            let mut initializer: Option<MethodRef> = None;
            let mut pending_fields: Vec<FieldRef> = Vec::new();
            let mut enum_values: Vec<ClassRef> = Vec::new();
            for (name, member) in table.members_stable_order(class) {
                if self.should_skip_member(name) {
                    continue;
                }
                match member {
                    SymbolRef::Class(nested) => {
                        if is_enum && table.class(nested).superclass == Some(class) {
                            enum_values.push(nested);
                        } else {
                            self.schedule(member);
                        }
                    }
                    // Declared above.
                    SymbolRef::TypeMember(_) => {}
                    SymbolRef::Method(method) => {
                        if name == Name::INITIALIZE {
                            initializer = Some(method);
                        } else {
                            self.emit_method(method, &MethodView::default());
                        }
                    }
                    SymbolRef::Field(field) => {
                        if table.field(field).is_static() {
                            self.emit_static_member(field);
                        } else {
                            pending_fields.push(field);
                        }
                    }
                }
            }

            self.emit_initializer(class, initializer, &pending_fields);

            if let Some(companion) = data.companion {
                self.emit_companion_members(companion, is_enum);
            }

            if !enum_values.is_empty() {
                self.out.println("enums do");
                {
                    let _indent = self.out.indent();
                    for value in enum_values {
                        self.state.mark_emitted(value.into());
                        let name = table.name_text(table.class(value).name);
                        self.out.println(&format!("{name} = new"));
                    }
                }
                self.out.println("end");
            }
        }

        self.out.println("end");
        Ok(())
    }

    /// Class variables are written inline; other constants are scheduled.
    fn emit_static_member(&mut self, field: FieldRef) {
        let table = self.table;
        if table.name_text(table.field(field).name).starts_with("@@") {
            self.emit_field(field, FieldName::Bare);
        } else {
            self.schedule(field.into());
        }
    }

    /// Members of the class-level namespace, folded into the primary's body.
    fn emit_companion_members(&mut self, companion: ClassRef, is_enum: bool) {
        let table = self.table;
        let data = table.class(companion);

        for &mixin in &data.mixins {
            self.out
                .println(&format!("extend {}", table.show_symbol(mixin.into())));
            self.schedule(mixin.into());
        }

        for &tm in &data.type_members {
            self.emit_type_member(tm);
        }

        for (name, member) in table.members_stable_order(companion) {
            if self.should_skip_member(name) {
                continue;
            }
            match member {
                SymbolRef::Class(_) => {
                    self.schedule(member);
                }
                SymbolRef::TypeMember(_) => {}
                SymbolRef::Method(method) => {
                    // Generated for every enum by its rewriter.
                    if !(is_enum && name == Name::SEALED_SUBCLASSES) {
                        self.emit_method(method, &MethodView::default());
                    }
                }
                SymbolRef::Field(field) => {
                    if table.field(field).is_static() {
                        self.emit_static_member(field);
                    } else {
                        self.emit_field(field, FieldName::Bare);
                    }
                }
            }
        }
    }

    /// The initializer together with the instance fields it assigns. A
    /// namespace with fields but no initializer gets an empty one.
    fn emit_initializer(&mut self, class: ClassRef, method: Option<MethodRef>, fields: &[FieldRef]) {
        if method.is_none() && fields.is_empty() {
            return;
        }
        let table = self.table;
        if table.is_struct(class) {
            // The struct rewriter generates its own initializer.
            return;
        }

        let def = match method {
            Some(method) => {
                let data = table.method(method);
                self.state.mark_emitted(method.into());
                for ty in data.params.iter().filter_map(|param| param.ty.as_ref()) {
                    self.enqueue_type(ty);
                }
                if data.has_sig() {
                    let sig = self.pretty_sig(method, &MethodView::default());
                    self.out.println(&sig);
                }
                self.pretty_def(method)
            }
            None => {
                self.out.println("sig {void}");
                "def initialize".to_owned()
            }
        };

        if fields.is_empty() {
            self.out.println(&format!("{def}; end"));
            return;
        }
        self.out.println(&def);
        {
            let _indent = self.out.indent();
            for &field in fields {
                self.state.mark_emitted(field.into());
                self.emit_field(field, FieldName::Bare);
            }
        }
        self.out.println("end");
    }

    /// `Elem = type_member(:out)` or `Elem = type_template(fixed: Integer)`.
    fn emit_type_member(&mut self, tm: TypeMemberRef) {
        let table = self.table;
        let data = table.type_member(tm);
        self.state.mark_emitted(tm.into());
        if data.name == Name::ATTACHED_CLASS {
            return;
        }

        let variance = if data.is_fixed() {
            format!("fixed: {}", self.show_type(&data.upper))
        } else {
            self.enqueue_type(&data.lower);
            self.enqueue_type(&data.upper);
            match data.variance {
                Variance::Covariant => ":out",
                Variance::Invariant => ":invariant",
                Variance::Contravariant => ":in",
            }
            .to_owned()
        };
        let keyword = if table.class(data.owner).is_companion() {
            "type_template"
        } else {
            "type_member"
        };
        let name = table.name_text(data.name);
        self.out.println(&format!("{name} = {keyword}({variance})"));
    }
}
