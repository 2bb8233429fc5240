//! Path-oriented construction of whole programs.
//!
//! `ProgramBuilder` sits on top of the `enter_*` API and adds the shapes the
//! upstream rewriters produce (enum and struct sugar, type templates with
//! their shadowing constant) plus the package registry. Tests and embedders
//! use it to describe a program in a few lines:
//!
//! ```text
//! let mut b = ProgramBuilder::new();
//! let widget = b.class("Shop::Widget");
//! b.method(widget, "price").param("qty", Type::class(integer)).returns(Type::class(integer));
//! b.package("Shop", &["Shop::Widget"], &[]);
//! let (table, packages) = b.finish();
//! ```

use crate::flags::{ClassFlags, MethodFlags, ParamFlags, TypeMemberFlags};
use crate::packages::{PackageDb, PackageId, PackageInfo};
use crate::table::{ClassKind, Param, SymbolTable, Variance, WellKnown};
use crate::ty::Type;
use pkgstub_ir::{ClassRef, FieldRef, MethodRef, Name, TypeMemberRef};

/// Builds a [`SymbolTable`] and its [`PackageDb`] together.
#[derive(Default)]
pub struct ProgramBuilder {
    table: SymbolTable,
    packages: PackageDb,
}

impl ProgramBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn table(&self) -> &SymbolTable {
        &self.table
    }

    pub fn table_mut(&mut self) -> &mut SymbolTable {
        &mut self.table
    }

    /// Enter `A::B::C` as a module. Missing intermediate components become
    /// modules; existing ones are reused whatever their kind.
    pub fn module(&mut self, path: &str) -> ClassRef {
        self.enter_path(path, ClassKind::Module)
    }

    /// Enter `A::B::C` as a class.
    pub fn class(&mut self, path: &str) -> ClassRef {
        self.enter_path(path, ClassKind::Class)
    }

    fn enter_path(&mut self, path: &str, kind: ClassKind) -> ClassRef {
        let mut owner = WellKnown::ROOT;
        let mut parts = path.split("::").peekable();
        while let Some(part) = parts.next() {
            let part_kind = if parts.peek().is_some() {
                ClassKind::Module
            } else {
                kind
            };
            owner = self.table.enter_class(owner, part, part_kind);
        }
        owner
    }

    /// The companion namespace of `class`.
    pub fn class_of(&mut self, class: ClassRef) -> ClassRef {
        self.table.companion_of(class)
    }

    pub fn superclass(&mut self, class: ClassRef, superclass: ClassRef) {
        let data = self.table.class_mut(class);
        data.superclass = Some(superclass);
        data.superclass_args.clear();
    }

    /// Inherit from a generic namespace: `class Foo < Box[Integer]`.
    pub fn superclass_applied(&mut self, class: ClassRef, superclass: ClassRef, args: Vec<Type>) {
        let data = self.table.class_mut(class);
        data.superclass = Some(superclass);
        data.superclass_args = args;
    }

    /// Add a mixin. Mixing into a companion extends the primary.
    pub fn mixin(&mut self, class: ClassRef, mixin: ClassRef) {
        self.table.class_mut(class).mixins.push(mixin);
    }

    pub fn flags(&mut self, class: ClassRef, flags: ClassFlags) {
        self.table.class_mut(class).flags.insert(flags);
    }

    /// Enter a method and return a builder for its signature.
    pub fn method(&mut self, owner: ClassRef, name: &str) -> MethodBuilder<'_> {
        let method = self.table.enter_method(owner, name);
        MethodBuilder {
            table: &mut self.table,
            method,
        }
    }

    /// Enter an instance field.
    pub fn field(&mut self, owner: ClassRef, name: &str, ty: Type) -> FieldRef {
        let field = self.table.enter_field(owner, name);
        self.table.field_mut(field).result_type = Some(ty);
        field
    }

    /// Enter a static field or class variable.
    pub fn static_field(&mut self, owner: ClassRef, name: &str, ty: Type) -> FieldRef {
        let field = self.table.enter_static_field(owner, name);
        self.table.field_mut(field).result_type = Some(ty);
        field
    }

    pub fn type_member(&mut self, owner: ClassRef, name: &str, variance: Variance) -> TypeMemberRef {
        self.table.enter_type_member(owner, name, variance)
    }

    /// A type member pinned to `upper`.
    pub fn fixed_type_member(&mut self, owner: ClassRef, name: &str, upper: Type) -> TypeMemberRef {
        let tm = self.table.enter_type_member(owner, name, Variance::Invariant);
        let data = self.table.type_member_mut(tm);
        data.flags.insert(TypeMemberFlags::FIXED);
        data.lower = upper.clone();
        data.upper = upper;
        tm
    }

    /// A type template on the companion of `class`.
    ///
    /// Like the resolver, this also enters a constant of the same name on
    /// `class` itself, aliased to the template.
    pub fn type_template(&mut self, class: ClassRef, name: &str, variance: Variance) -> TypeMemberRef {
        let companion = self.table.companion_of(class);
        let tm = self.table.enter_type_member(companion, name, variance);
        let shadow = self.table.enter_static_field(class, name);
        self.table.field_mut(shadow).result_type = Some(Type::Alias(tm.into()));
        tm
    }

    /// An enum-sugar namespace: abstract, sealed, inheriting from `T::Enum`,
    /// with the `sealed_subclasses` helper on its companion.
    pub fn enum_class(&mut self, path: &str) -> ClassRef {
        let class = self.class(path);
        self.superclass(class, WellKnown::T_ENUM);
        self.flags(class, ClassFlags::ABSTRACT | ClassFlags::SEALED);
        let companion = self.table.companion_of(class);
        self.method(companion, "sealed_subclasses").returns(Type::Untyped);
        class
    }

    /// A value of an enum-sugar namespace: a final child class inheriting
    /// from the enum itself.
    pub fn enum_value(&mut self, enum_class: ClassRef, name: &str) -> ClassRef {
        let value = self.table.enter_class(enum_class, name, ClassKind::Class);
        self.superclass(value, enum_class);
        self.flags(value, ClassFlags::FINAL);
        value
    }

    /// A struct-sugar namespace inheriting from `T::Struct`.
    pub fn struct_class(&mut self, path: &str) -> ClassRef {
        let class = self.class(path);
        self.superclass(class, WellKnown::T_STRUCT);
        class
    }

    /// Register a package. Names and export paths are `::`-separated.
    pub fn package(&mut self, name: &str, exports: &[&str], test_exports: &[&str]) -> PackageId {
        let mut info = PackageInfo::new(self.path_names(name));
        info.exports = exports.iter().map(|path| self.path_names(path)).collect();
        info.test_exports = test_exports
            .iter()
            .map(|path| self.path_names(path))
            .collect();
        self.packages.add(info)
    }

    /// Intern each component of a path: capitalized components as
    /// constants, the rest as identifiers.
    fn path_names(&mut self, path: &str) -> Vec<Name> {
        let names = self.table.names_mut();
        path.split("::")
            .map(|part| {
                if part.starts_with(|c: char| c.is_ascii_uppercase()) {
                    names.intern_constant(part)
                } else {
                    names.intern(part)
                }
            })
            .collect()
    }

    pub fn finish(self) -> (SymbolTable, PackageDb) {
        (self.table, self.packages)
    }
}

/// Fills in one method's parameters and signature.
pub struct MethodBuilder<'a> {
    table: &'a mut SymbolTable,
    method: MethodRef,
}

impl MethodBuilder<'_> {
    fn add(self, name: &str, ty: Option<Type>, flags: ParamFlags) -> Self {
        self.table.add_param(self.method, name, ty, flags);
        self
    }

    /// Required positional parameter.
    pub fn param(self, name: &str, ty: Type) -> Self {
        self.add(name, Some(ty), ParamFlags::empty())
    }

    pub fn optional_param(self, name: &str, ty: Type) -> Self {
        self.add(name, Some(ty), ParamFlags::DEFAULT)
    }

    /// Required keyword parameter.
    pub fn keyword(self, name: &str, ty: Type) -> Self {
        self.add(name, Some(ty), ParamFlags::KEYWORD)
    }

    pub fn optional_keyword(self, name: &str, ty: Type) -> Self {
        self.add(name, Some(ty), ParamFlags::KEYWORD | ParamFlags::DEFAULT)
    }

    /// `*name`
    pub fn rest(self, name: &str, ty: Type) -> Self {
        self.add(name, Some(ty), ParamFlags::REPEATED)
    }

    /// `**name`
    pub fn keyword_rest(self, name: &str, ty: Type) -> Self {
        self.add(name, Some(ty), ParamFlags::KEYWORD | ParamFlags::REPEATED)
    }

    /// Name the block parameter, replacing the synthetic one.
    pub fn block(self, name: &str, ty: Type) -> Self {
        let name = self.table.names_mut().intern(name);
        let ty = Some(ty);
        let params = &mut self.table.method_mut(self.method).params;
        match params.iter_mut().find(|param| param.is_synthetic_block()) {
            Some(block) => {
                block.name = name;
                block.ty = ty;
            }
            None => params.push(Param {
                name,
                ty,
                flags: ParamFlags::BLOCK,
            }),
        }
        self
    }

    /// Generic method type parameter, `type_parameters(:name)`.
    pub fn type_param(self, name: &str) -> Self {
        let name = self.table.names_mut().intern(name);
        self.table.method_mut(self.method).type_params.push(name);
        self
    }

    pub fn flags(self, flags: MethodFlags) -> Self {
        self.table.method_mut(self.method).flags.insert(flags);
        self
    }

    /// Mark the method as carrying a signature without setting a result.
    pub fn sig(self) -> Self {
        self.flags(MethodFlags::HAS_SIG)
    }

    /// Declare the signature's result type.
    pub fn returns(self, ty: Type) -> Self {
        self.table.method_mut(self.method).result_type = Some(ty);
        self.sig()
    }

    pub fn void(self) -> Self {
        self.returns(Type::void())
    }

    pub fn id(self) -> MethodRef {
        self.method
    }
}

#[cfg(test)]
mod tests;
