//! Generic substitution.
//!
//! A member declared on a generic namespace mentions that namespace's type
//! parameters (`SelfTypeParam`), the receiver (`SelfType`) and its own method
//! type variables (`TypeVar`). Viewing it through a concrete receiver means
//! replacing all three; these operations do that.

use crate::table::SymbolTable;
use crate::traverse::TypeFolder;
use crate::ty::Type;
use pkgstub_ir::{ClassRef, Name, TypeMemberRef};
use rustc_hash::FxHashMap;

/// Outstanding bindings for a generic method's type variables.
#[derive(Clone, Debug, Default)]
pub struct TypeConstraint {
    bindings: FxHashMap<Name, Type>,
}

impl TypeConstraint {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind type variable `var` to `ty`, replacing any earlier binding.
    pub fn bind(&mut self, var: Name, ty: Type) {
        self.bindings.insert(var, ty);
    }

    /// The binding for `var`, if any.
    pub fn get(&self, var: Name) -> Option<&Type> {
        self.bindings.get(&var)
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}

struct MemberSubst<'a> {
    map: &'a FxHashMap<TypeMemberRef, Type>,
}

impl TypeFolder for MemberSubst<'_> {
    fn fold_self_type_param(&mut self, tm: TypeMemberRef) -> Type {
        self.map
            .get(&tm)
            .cloned()
            .unwrap_or(Type::SelfTypeParam(tm))
    }

    fn fold_lambda_param(&mut self, definition: TypeMemberRef, lower: &Type, upper: &Type) -> Type {
        match self.map.get(&definition) {
            Some(ty) => ty.clone(),
            None => Type::LambdaParam {
                definition,
                lower: Box::new(self.fold(lower)),
                upper: Box::new(self.fold(upper)),
            },
        }
    }
}

struct SelfSubst<'a> {
    receiver: &'a Type,
}

impl TypeFolder for SelfSubst<'_> {
    fn fold_self_type(&mut self) -> Type {
        self.receiver.clone()
    }
}

struct ConstraintSubst<'a> {
    constraint: &'a TypeConstraint,
}

impl TypeFolder for ConstraintSubst<'_> {
    fn fold_type_var(&mut self, name: Name) -> Type {
        self.constraint
            .get(name)
            .cloned()
            .unwrap_or(Type::TypeVar(name))
    }
}

impl SymbolTable {
    /// View `ty`, declared inside `in_what`, from a receiver of type
    /// `receiver[receiver_args]`.
    ///
    /// Walks from `receiver` up its superclass chain, translating the
    /// arguments through each namespace's `superclass_args`, until `in_what`
    /// is reached; then replaces `in_what`'s type parameters. If `in_what`
    /// is not on the chain the type is returned unchanged.
    pub fn as_seen_from(
        &self,
        ty: &Type,
        in_what: ClassRef,
        receiver: ClassRef,
        receiver_args: &[Type],
    ) -> Type {
        match self.type_arguments_for(self.primary(in_what), receiver, receiver_args) {
            Some(map) if !map.is_empty() => MemberSubst { map: &map }.fold(ty),
            _ => ty.clone(),
        }
    }

    fn type_arguments_for(
        &self,
        target: ClassRef,
        receiver: ClassRef,
        receiver_args: &[Type],
    ) -> Option<FxHashMap<TypeMemberRef, Type>> {
        let mut class = receiver;
        let mut current = self.bind_members(class, receiver_args.iter().cloned());

        // A superclass chain never revisits a namespace; the bound keeps a
        // malformed table from looping.
        for _ in 0..self.class_count() {
            if class == target {
                return Some(current);
            }
            let data = self.class(class);
            let superclass = data.superclass?;
            let translated: Vec<Type> = {
                let mut subst = MemberSubst { map: &current };
                data.superclass_args.iter().map(|arg| subst.fold(arg)).collect()
            };
            current = self.bind_members(superclass, translated.into_iter());
            class = superclass;
        }
        None
    }

    fn bind_members(
        &self,
        class: ClassRef,
        args: impl Iterator<Item = Type>,
    ) -> FxHashMap<TypeMemberRef, Type> {
        let mut args = args;
        self.class(class)
            .type_members
            .iter()
            .map(|&tm| (tm, args.next().unwrap_or(Type::Untyped)))
            .collect()
    }

    /// Replace every `SelfType` in `ty` with `receiver`.
    pub fn replace_self_type(ty: &Type, receiver: &Type) -> Type {
        SelfSubst { receiver }.fold(ty)
    }

    /// Replace every type variable bound in `constraint`.
    pub fn instantiate(ty: &Type, constraint: &TypeConstraint) -> Type {
        if constraint.is_empty() {
            return ty.clone();
        }
        ConstraintSubst { constraint }.fold(ty)
    }
}

#[cfg(test)]
mod tests;
