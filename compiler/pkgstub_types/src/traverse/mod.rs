//! Type traversal traits.
//!
//! - [`TypeVisitor`]: walk a type without modifying it (symbol collection)
//! - [`TypeFolder`]: rebuild a type bottom-up (substitution)
//!
//! Both dispatch exhaustively on [`Type`]; override the variant hooks you
//! care about and let the defaults recurse into the rest.

use crate::ty::{Literal, Type};
use pkgstub_ir::{ensure_sufficient_stack, ClassRef, Name, SymbolRef, TypeMemberRef};

/// Trait for visiting types without modification.
///
/// # Example
///
/// ```text
/// struct ClassCollector {
///     classes: Vec<ClassRef>,
/// }
///
/// impl TypeVisitor for ClassCollector {
///     fn visit_class(&mut self, class: ClassRef) {
///         self.classes.push(class);
///     }
/// }
/// ```
pub trait TypeVisitor {
    /// Visit a type by dispatching to variant-specific methods.
    fn visit(&mut self, ty: &Type) {
        ensure_sufficient_stack(|| match ty {
            Type::Class(class) => self.visit_class(*class),
            Type::Applied { class, args } => self.visit_applied(*class, args),
            Type::Or(left, right) | Type::And(left, right) => {
                self.visit(left);
                self.visit(right);
            }
            Type::Tuple(elems) => {
                for elem in elems {
                    self.visit(elem);
                }
            }
            Type::Shape { keys, values } => {
                for key in keys {
                    self.visit(key);
                }
                for value in values {
                    self.visit(value);
                }
            }
            Type::Literal(literal) => self.visit_literal(literal),
            Type::Alias(symbol) => self.visit_alias(*symbol),
            Type::SelfTypeParam(tm) => self.visit_self_type_param(*tm),
            Type::UnresolvedApplied {
                class,
                symbol,
                args,
            } => self.visit_unresolved_applied(*class, *symbol, args),
            Type::LambdaParam {
                definition,
                lower,
                upper,
            } => self.visit_lambda_param(*definition, lower, upper),
            Type::TypeVar(name) => self.visit_type_var(*name),
            Type::SelfType | Type::UnresolvedClass { .. } | Type::Untyped => {}
        });
    }

    /// Visit a nominal reference.
    fn visit_class(&mut self, _class: ClassRef) {}

    /// Visit an applied generic. Default visits the head and the arguments.
    fn visit_applied(&mut self, class: ClassRef, args: &[Type]) {
        self.visit_class(class);
        for arg in args {
            self.visit(arg);
        }
    }

    /// Visit a literal.
    fn visit_literal(&mut self, _literal: &Literal) {}

    /// Visit an alias target.
    fn visit_alias(&mut self, _symbol: SymbolRef) {}

    /// Visit a reference to a namespace's own type parameter.
    fn visit_self_type_param(&mut self, _tm: TypeMemberRef) {}

    /// Visit an unresolved application. Default visits both heads and the arguments.
    fn visit_unresolved_applied(&mut self, class: ClassRef, symbol: ClassRef, args: &[Type]) {
        self.visit_class(class);
        self.visit_class(symbol);
        for arg in args {
            self.visit(arg);
        }
    }

    /// Visit a type parameter's bounds. Default visits both bounds.
    fn visit_lambda_param(&mut self, _definition: TypeMemberRef, lower: &Type, upper: &Type) {
        self.visit(lower);
        self.visit(upper);
    }

    /// Visit a method-level type variable.
    fn visit_type_var(&mut self, _name: Name) {}
}

/// Trait for transforming types via structural recursion.
///
/// # Example
///
/// ```text
/// struct EraseVars;
///
/// impl TypeFolder for EraseVars {
///     fn fold_type_var(&mut self, _name: Name) -> Type {
///         Type::Untyped
///     }
/// }
/// ```
pub trait TypeFolder {
    /// Fold a type by dispatching to variant-specific methods.
    fn fold(&mut self, ty: &Type) -> Type {
        ensure_sufficient_stack(|| match ty {
            Type::Applied { class, args } => Type::Applied {
                class: *class,
                args: self.fold_all(args),
            },
            Type::Or(left, right) => Type::or(self.fold(left), self.fold(right)),
            Type::And(left, right) => Type::and(self.fold(left), self.fold(right)),
            Type::Tuple(elems) => Type::Tuple(self.fold_all(elems)),
            Type::Shape { keys, values } => Type::Shape {
                keys: keys.clone(),
                values: self.fold_all(values),
            },
            Type::SelfType => self.fold_self_type(),
            Type::SelfTypeParam(tm) => self.fold_self_type_param(*tm),
            Type::TypeVar(name) => self.fold_type_var(*name),
            Type::UnresolvedApplied {
                class,
                symbol,
                args,
            } => Type::UnresolvedApplied {
                class: *class,
                symbol: *symbol,
                args: self.fold_all(args),
            },
            Type::LambdaParam {
                definition,
                lower,
                upper,
            } => self.fold_lambda_param(*definition, lower, upper),
            Type::Class(_)
            | Type::Literal(_)
            | Type::Alias(_)
            | Type::UnresolvedClass { .. }
            | Type::Untyped => ty.clone(),
        })
    }

    /// Fold every type in a slice.
    fn fold_all(&mut self, types: &[Type]) -> Vec<Type> {
        types.iter().map(|ty| self.fold(ty)).collect()
    }

    /// Fold the self type. Override to substitute the receiver.
    fn fold_self_type(&mut self) -> Type {
        Type::SelfType
    }

    /// Fold a reference to a namespace's own type parameter.
    fn fold_self_type_param(&mut self, tm: TypeMemberRef) -> Type {
        Type::SelfTypeParam(tm)
    }

    /// Fold a method-level type variable.
    fn fold_type_var(&mut self, name: Name) -> Type {
        Type::TypeVar(name)
    }

    /// Fold a type parameter's bounds. Default folds both bounds.
    fn fold_lambda_param(&mut self, definition: TypeMemberRef, lower: &Type, upper: &Type) -> Type {
        Type::LambdaParam {
            definition,
            lower: Box::new(self.fold(lower)),
            upper: Box::new(self.fold(upper)),
        }
    }
}
