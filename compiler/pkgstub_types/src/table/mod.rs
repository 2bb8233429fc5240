//! The resolved symbol table.
//!
//! One flat vector per symbol kind, indexed by the typed handles from
//! `pkgstub_ir`. Namespaces form a tree through `owner`; every chain ends at
//! [`WellKnown::ROOT`], whose owner is itself.
//!
//! # Thread Safety
//!
//! The table has no interior mutability. Once built it is shared as
//! `&SymbolTable` with scoped workers.

mod enter;

use crate::flags::{ClassFlags, MethodFlags, ParamFlags, TypeMemberFlags};
use crate::ty::Type;
use pkgstub_ir::{
    ClassRef, FieldRef, MethodRef, Name, NameTable, SymbolKind, SymbolRef, TypeMemberRef,
};
use rustc_hash::FxHashMap;

/// Namespaces every table contains, at fixed indices.
pub struct WellKnown;

impl WellKnown {
    /// The program root.
    pub const ROOT: ClassRef = ClassRef::ROOT;
    /// Holder of package declarations; never part of any package.
    pub const PACKAGE_REGISTRY: ClassRef = ClassRef::from_raw(1);
    pub const OBJECT: ClassRef = ClassRef::from_raw(2);
    pub const NIL_CLASS: ClassRef = ClassRef::from_raw(3);
    pub const T: ClassRef = ClassRef::from_raw(4);
    /// Base of enum-sugar namespaces.
    pub const T_ENUM: ClassRef = ClassRef::from_raw(5);
    /// Base of struct-sugar namespaces.
    pub const T_STRUCT: ClassRef = ClassRef::from_raw(6);
    pub const T_PRIVATE: ClassRef = ClassRef::from_raw(7);
    pub const T_PRIVATE_TYPES: ClassRef = ClassRef::from_raw(8);
    /// The "no value" return type.
    pub const VOID: ClassRef = ClassRef::from_raw(9);
    /// Placeholder superclass of every module.
    pub const IMPLICIT_MODULE_SUPERCLASS: ClassRef = ClassRef::from_raw(10);

    pub(crate) const COUNT: usize = 11;
}

/// Whether a namespace is a class or a module.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum ClassKind {
    Class,
    Module,
}

/// Namespace data.
#[derive(Clone, Debug)]
pub struct ClassData {
    pub name: Name,
    pub owner: ClassRef,
    pub kind: ClassKind,
    pub flags: ClassFlags,
    pub superclass: Option<ClassRef>,
    /// Type arguments this namespace passes to a generic superclass, in the
    /// order of the superclass's type members. May mention this namespace's
    /// own type members through `SelfTypeParam`.
    pub superclass_args: Vec<Type>,
    pub mixins: Vec<ClassRef>,
    /// Declaration order.
    pub type_members: Vec<TypeMemberRef>,
    pub members: FxHashMap<Name, SymbolRef>,
    /// The class-level namespace, on primaries that have one.
    pub companion: Option<ClassRef>,
    /// The primary namespace, on companions.
    pub attached: Option<ClassRef>,
}

impl ClassData {
    /// Whether this is a companion (class-level) namespace.
    pub fn is_companion(&self) -> bool {
        self.attached.is_some()
    }

    pub fn is_class(&self) -> bool {
        self.kind == ClassKind::Class
    }

    pub fn is_abstract(&self) -> bool {
        self.flags.contains(ClassFlags::ABSTRACT)
    }

    pub fn is_final(&self) -> bool {
        self.flags.contains(ClassFlags::FINAL)
    }

    pub fn is_interface(&self) -> bool {
        self.flags.contains(ClassFlags::INTERFACE)
    }

    pub fn is_sealed(&self) -> bool {
        self.flags.contains(ClassFlags::SEALED)
    }
}

/// A method parameter.
#[derive(Clone, Debug)]
pub struct Param {
    pub name: Name,
    pub ty: Option<Type>,
    pub flags: ParamFlags,
}

impl Param {
    /// The block parameter the resolver adds to every method.
    pub fn is_synthetic_block(&self) -> bool {
        self.flags.contains(ParamFlags::BLOCK) && self.name == Name::BLK
    }

    pub fn is_keyword(&self) -> bool {
        self.flags.contains(ParamFlags::KEYWORD)
    }

    pub fn is_repeated(&self) -> bool {
        self.flags.contains(ParamFlags::REPEATED)
    }

    pub fn has_default(&self) -> bool {
        self.flags.contains(ParamFlags::DEFAULT)
    }

    pub fn is_block(&self) -> bool {
        self.flags.contains(ParamFlags::BLOCK)
    }
}

/// Method data.
#[derive(Clone, Debug)]
pub struct MethodData {
    pub name: Name,
    pub owner: ClassRef,
    pub flags: MethodFlags,
    pub params: Vec<Param>,
    /// Generic type parameter names, in declaration order.
    pub type_params: Vec<Name>,
    pub result_type: Option<Type>,
}

impl MethodData {
    pub fn has_sig(&self) -> bool {
        self.flags.contains(MethodFlags::HAS_SIG)
    }

    pub fn is_private(&self) -> bool {
        self.flags.contains(MethodFlags::PRIVATE)
    }

    pub fn is_protected(&self) -> bool {
        self.flags.contains(MethodFlags::PROTECTED)
    }
}

/// Whether a field belongs to instances or to the namespace itself.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum FieldKind {
    Instance,
    Static,
}

/// Field data.
#[derive(Clone, Debug)]
pub struct FieldData {
    pub name: Name,
    pub owner: ClassRef,
    pub kind: FieldKind,
    pub result_type: Option<Type>,
}

impl FieldData {
    pub fn is_static(&self) -> bool {
        self.kind == FieldKind::Static
    }
}

/// Declared variance of a type parameter.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Variance {
    Covariant,
    Invariant,
    Contravariant,
}

/// Type parameter data.
#[derive(Clone, Debug)]
pub struct TypeMemberData {
    pub name: Name,
    /// A primary namespace ("type member") or a companion ("type template").
    pub owner: ClassRef,
    pub variance: Variance,
    pub flags: TypeMemberFlags,
    pub lower: Type,
    pub upper: Type,
}

impl TypeMemberData {
    pub fn is_fixed(&self) -> bool {
        self.flags.contains(TypeMemberFlags::FIXED)
    }
}

/// The resolved symbol table.
pub struct SymbolTable {
    names: NameTable,
    classes: Vec<ClassData>,
    methods: Vec<MethodData>,
    fields: Vec<FieldData>,
    type_members: Vec<TypeMemberData>,
}

impl SymbolTable {
    pub fn names(&self) -> &NameTable {
        &self.names
    }

    pub fn names_mut(&mut self) -> &mut NameTable {
        &mut self.names
    }

    pub fn class(&self, class: ClassRef) -> &ClassData {
        &self.classes[class.index()]
    }

    pub fn class_mut(&mut self, class: ClassRef) -> &mut ClassData {
        &mut self.classes[class.index()]
    }

    pub fn method(&self, method: MethodRef) -> &MethodData {
        &self.methods[method.index()]
    }

    pub fn method_mut(&mut self, method: MethodRef) -> &mut MethodData {
        &mut self.methods[method.index()]
    }

    pub fn field(&self, field: FieldRef) -> &FieldData {
        &self.fields[field.index()]
    }

    pub fn field_mut(&mut self, field: FieldRef) -> &mut FieldData {
        &mut self.fields[field.index()]
    }

    pub fn type_member(&self, tm: TypeMemberRef) -> &TypeMemberData {
        &self.type_members[tm.index()]
    }

    pub fn type_member_mut(&mut self, tm: TypeMemberRef) -> &mut TypeMemberData {
        &mut self.type_members[tm.index()]
    }

    /// Number of namespaces, including the well-known ones.
    pub fn class_count(&self) -> usize {
        self.classes.len()
    }

    /// The namespace that directly contains `symbol`.
    pub fn owner(&self, symbol: SymbolRef) -> ClassRef {
        match symbol {
            SymbolRef::Class(class) => self.class(class).owner,
            SymbolRef::Method(method) => self.method(method).owner,
            SymbolRef::Field(field) => self.field(field).owner,
            SymbolRef::TypeMember(tm) => self.type_member(tm).owner,
        }
    }

    /// The declared name of `symbol`.
    pub fn name_of(&self, symbol: SymbolRef) -> Name {
        match symbol {
            SymbolRef::Class(class) => self.class(class).name,
            SymbolRef::Method(method) => self.method(method).name,
            SymbolRef::Field(field) => self.field(field).name,
            SymbolRef::TypeMember(tm) => self.type_member(tm).name,
        }
    }

    /// Text of a name.
    pub fn name_text(&self, name: Name) -> &str {
        self.names.lookup(name)
    }

    /// The primary namespace for `class`: its attached namespace if it is a
    /// companion, otherwise itself.
    pub fn primary(&self, class: ClassRef) -> ClassRef {
        self.class(class).attached.unwrap_or(class)
    }

    /// Whether `class` is a value of an enum-sugar namespace.
    pub fn is_enum_value(&self, class: ClassRef) -> bool {
        self.class(class)
            .superclass
            .is_some_and(|sup| self.class(sup).superclass == Some(WellKnown::T_ENUM))
    }

    /// Whether `class` is an enum-sugar namespace.
    pub fn is_enum(&self, class: ClassRef) -> bool {
        self.class(class).superclass == Some(WellKnown::T_ENUM)
    }

    /// Whether `class` is a struct-sugar namespace.
    pub fn is_struct(&self, class: ClassRef) -> bool {
        self.class(class).superclass == Some(WellKnown::T_STRUCT)
    }

    /// Direct member of `class` named `name`.
    pub fn find_member(&self, class: ClassRef, name: Name) -> Option<SymbolRef> {
        self.class(class).members.get(&name).copied()
    }

    /// Resolve a constant path from the program root, one component at a
    /// time. Fails as soon as a component is missing or a non-namespace is
    /// reached before the last component.
    pub fn lookup_path(&self, path: &[Name]) -> Option<SymbolRef> {
        let mut scope = SymbolRef::Class(WellKnown::ROOT);
        for &name in path {
            let class = scope.as_class()?;
            scope = self.find_member(class, name)?;
        }
        Some(scope)
    }

    /// Members of `class` in a stable, total order: lexical by name text,
    /// then name kind, then symbol kind, then symbol index.
    pub fn members_stable_order(&self, class: ClassRef) -> Vec<(Name, SymbolRef)> {
        let mut members: Vec<(Name, SymbolRef)> = self
            .class(class)
            .members
            .iter()
            .map(|(&name, &symbol)| (name, symbol))
            .collect();
        members.sort_by(|(a_name, a_sym), (b_name, b_sym)| {
            self.names
                .lookup(*a_name)
                .cmp(self.names.lookup(*b_name))
                .then_with(|| self.names.kind(*a_name).cmp(&self.names.kind(*b_name)))
                .then_with(|| kind_rank(a_sym.kind()).cmp(&kind_rank(b_sym.kind())))
                .then_with(|| a_sym.cmp(b_sym))
        });
        members
    }

    /// Fully qualified name of a namespace, `A::B::C`. The root is empty.
    pub fn qualified_name(&self, class: ClassRef) -> String {
        let mut parts = Vec::new();
        let mut current = class;
        while current != WellKnown::ROOT {
            let data = self.class(current);
            parts.push(self.names.lookup(data.name));
            current = data.owner;
        }
        parts.reverse();
        parts.join("::")
    }

    /// Display text for any symbol.
    ///
    /// Companions show as `T.class_of(Primary)`, static fields and type
    /// parameters by qualified constant path, instance fields and methods as
    /// `Owner#name`.
    pub fn show_symbol(&self, symbol: SymbolRef) -> String {
        match symbol {
            SymbolRef::Class(class) => match self.class(class).attached {
                Some(attached) => format!("T.class_of({})", self.qualified_name(attached)),
                None => self.qualified_name(class),
            },
            SymbolRef::Field(field) => {
                let data = self.field(field);
                match data.kind {
                    FieldKind::Static => self.constant_path(data.owner, data.name),
                    FieldKind::Instance => format!(
                        "{}#{}",
                        self.show_symbol(data.owner.into()),
                        self.names.lookup(data.name)
                    ),
                }
            }
            SymbolRef::TypeMember(tm) => {
                let data = self.type_member(tm);
                self.constant_path(data.owner, data.name)
            }
            SymbolRef::Method(method) => {
                let data = self.method(method);
                format!(
                    "{}#{}",
                    self.show_symbol(data.owner.into()),
                    self.names.lookup(data.name)
                )
            }
        }
    }

    fn constant_path(&self, owner: ClassRef, name: Name) -> String {
        let owner = self.qualified_name(self.primary(owner));
        if owner.is_empty() {
            self.names.lookup(name).to_owned()
        } else {
            format!("{owner}::{}", self.names.lookup(name))
        }
    }
}

fn kind_rank(kind: SymbolKind) -> u8 {
    match kind {
        SymbolKind::Class => 0,
        SymbolKind::TypeMember => 1,
        SymbolKind::Field => 2,
        SymbolKind::Method => 3,
    }
}

impl Default for SymbolTable {
    fn default() -> Self {
        Self::new()
    }
}
