//! Type display.
//!
//! Renders a [`Type`] the way it must appear in a stub: every namespace by its
//! fully qualified name, never expanded.

#![allow(clippy::format_push_string)] // Display formatting favors clarity over allocation

use crate::table::{SymbolTable, WellKnown};
use crate::ty::{Literal, Type};
use pkgstub_ir::ensure_sufficient_stack;

impl SymbolTable {
    /// Format a type as stub text.
    pub fn show(&self, ty: &Type) -> String {
        let mut buf = String::new();
        self.show_into(ty, &mut buf);
        buf
    }

    /// Format a type into an existing buffer.
    pub fn show_into(&self, ty: &Type, buf: &mut String) {
        ensure_sufficient_stack(|| self.show_into_inner(ty, buf));
    }

    fn show_into_inner(&self, ty: &Type, buf: &mut String) {
        match ty {
            Type::Class(class) => buf.push_str(&self.show_symbol((*class).into())),
            Type::Applied { class, args } => {
                buf.push_str(&self.show_symbol((*class).into()));
                self.show_args(args, buf);
            }
            Type::Or(..) => {
                let mut branches = Vec::new();
                flatten_or(ty, &mut branches);
                let non_nil: Vec<&Type> = branches
                    .iter()
                    .copied()
                    .filter(|branch| !is_nil(branch))
                    .collect();
                if non_nil.len() + 1 == branches.len() && !non_nil.is_empty() {
                    buf.push_str("T.nilable(");
                    if let [single] = non_nil.as_slice() {
                        self.show_into(single, buf);
                    } else {
                        self.show_list("T.any(", &non_nil, buf);
                        buf.push(')');
                    }
                    buf.push(')');
                } else {
                    self.show_list("T.any(", &branches, buf);
                    buf.push(')');
                }
            }
            Type::And(..) => {
                let mut branches = Vec::new();
                flatten_and(ty, &mut branches);
                self.show_list("T.all(", &branches, buf);
                buf.push(')');
            }
            Type::Tuple(elems) => {
                let elems: Vec<&Type> = elems.iter().collect();
                self.show_list("[", &elems, buf);
                buf.push(']');
            }
            Type::Shape { keys, values } => {
                buf.push('{');
                for (i, (key, value)) in keys.iter().zip(values).enumerate() {
                    if i > 0 {
                        buf.push_str(", ");
                    }
                    match key {
                        Type::Literal(Literal::Symbol(name)) => {
                            buf.push_str(self.name_text(*name));
                            buf.push_str(": ");
                        }
                        Type::Literal(Literal::String(name)) => {
                            buf.push_str(&format!("{:?} => ", self.name_text(*name)));
                        }
                        Type::Literal(Literal::Integer(value)) => {
                            buf.push_str(&format!("{value} => "));
                        }
                        other => {
                            self.show_into(other, buf);
                            buf.push_str(" => ");
                        }
                    }
                    self.show_into(value, buf);
                }
                buf.push('}');
            }
            Type::Literal(literal) => match literal {
                Literal::Integer(value) => buf.push_str(&format!("Integer({value})")),
                Literal::String(name) => {
                    buf.push_str(&format!("String({:?})", self.name_text(*name)));
                }
                Literal::Symbol(name) => {
                    buf.push_str(&format!("Symbol(:{})", self.name_text(*name)));
                }
                Literal::True => buf.push_str("TrueClass"),
                Literal::False => buf.push_str("FalseClass"),
            },
            Type::Alias(symbol) => buf.push_str(&self.show_symbol(*symbol)),
            Type::SelfType => buf.push_str("T.self_type"),
            Type::SelfTypeParam(tm) | Type::LambdaParam { definition: tm, .. } => {
                buf.push_str(self.name_text(self.type_member(*tm).name));
            }
            Type::TypeVar(name) => {
                buf.push_str(&format!("T.type_parameter(:{})", self.name_text(*name)));
            }
            Type::UnresolvedApplied { symbol, args, .. } => {
                buf.push_str(&self.qualified_name(*symbol));
                self.show_args(args, buf);
            }
            Type::UnresolvedClass { scope, names } => {
                let mut parts: Vec<String> = Vec::with_capacity(names.len() + 1);
                let scope = self.qualified_name(*scope);
                if !scope.is_empty() {
                    parts.push(scope);
                }
                parts.extend(names.iter().map(|name| self.name_text(*name).to_owned()));
                buf.push_str(&parts.join("::"));
            }
            Type::Untyped => buf.push_str("T.untyped"),
        }
    }

    fn show_args(&self, args: &[Type], buf: &mut String) {
        if args.is_empty() {
            return;
        }
        let args: Vec<&Type> = args.iter().collect();
        self.show_list("[", &args, buf);
        buf.push(']');
    }

    fn show_list(&self, open: &str, items: &[&Type], buf: &mut String) {
        buf.push_str(open);
        for (i, item) in items.iter().enumerate() {
            if i > 0 {
                buf.push_str(", ");
            }
            self.show_into(item, buf);
        }
    }
}

fn is_nil(ty: &Type) -> bool {
    matches!(ty, Type::Class(class) if *class == WellKnown::NIL_CLASS)
}

fn flatten_or<'a>(ty: &'a Type, out: &mut Vec<&'a Type>) {
    ensure_sufficient_stack(|| match ty {
        Type::Or(left, right) => {
            flatten_or(left, out);
            flatten_or(right, out);
        }
        other => out.push(other),
    });
}

fn flatten_and<'a>(ty: &'a Type, out: &mut Vec<&'a Type>) {
    ensure_sufficient_stack(|| match ty {
        Type::And(left, right) => {
            flatten_and(left, out);
            flatten_and(right, out);
        }
        other => out.push(other),
    });
}
