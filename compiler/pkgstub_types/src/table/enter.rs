//! Construction API used by the upstream resolver.
//!
//! All `enter_*` methods are idempotent on (owner, name): entering an
//! existing member returns the existing handle.

use super::{
    ClassData, ClassKind, FieldData, FieldKind, MethodData, Param, SymbolTable, TypeMemberData,
    Variance, WellKnown,
};
use crate::flags::{ClassFlags, MethodFlags, ParamFlags, TypeMemberFlags};
use crate::ty::Type;
use pkgstub_ir::{ClassRef, FieldRef, MethodRef, Name, NameTable, SymbolRef, TypeMemberRef};
use rustc_hash::FxHashMap;

impl SymbolTable {
    /// Create a table holding only the well-known namespaces.
    pub fn new() -> Self {
        let mut table = SymbolTable {
            names: NameTable::new(),
            classes: Vec::with_capacity(64),
            methods: Vec::new(),
            fields: Vec::new(),
            type_members: Vec::new(),
        };

        let root_name = table.names.intern_constant("<root>");
        table.classes.push(ClassData {
            name: root_name,
            owner: WellKnown::ROOT,
            kind: ClassKind::Module,
            flags: ClassFlags::empty(),
            superclass: None,
            superclass_args: Vec::new(),
            mixins: Vec::new(),
            type_members: Vec::new(),
            members: FxHashMap::default(),
            companion: None,
            attached: None,
        });

        // Order must match the `WellKnown` constants.
        let registry = table.enter_class(WellKnown::ROOT, "<PackageSpecRegistry>", ClassKind::Module);
        let object = table.enter_class(WellKnown::ROOT, "Object", ClassKind::Class);
        let nil = table.enter_class(WellKnown::ROOT, "NilClass", ClassKind::Class);
        let t = table.enter_class(WellKnown::ROOT, "T", ClassKind::Module);
        let t_enum = table.enter_class(t, "Enum", ClassKind::Class);
        let t_struct = table.enter_class(t, "Struct", ClassKind::Class);
        let t_private = table.enter_class(t, "Private", ClassKind::Module);
        let t_private_types = table.enter_class(t_private, "Types", ClassKind::Module);
        let void = table.enter_class(t_private_types, "Void", ClassKind::Class);
        let implicit =
            table.enter_class(WellKnown::ROOT, "<ImplicitModuleSuperClass>", ClassKind::Class);

        debug_assert_eq!(registry, WellKnown::PACKAGE_REGISTRY);
        debug_assert_eq!(object, WellKnown::OBJECT);
        debug_assert_eq!(nil, WellKnown::NIL_CLASS);
        debug_assert_eq!(t_enum, WellKnown::T_ENUM);
        debug_assert_eq!(t_struct, WellKnown::T_STRUCT);
        debug_assert_eq!(void, WellKnown::VOID);
        debug_assert_eq!(implicit, WellKnown::IMPLICIT_MODULE_SUPERCLASS);
        debug_assert_eq!(table.classes.len(), WellKnown::COUNT);

        table.class_mut(WellKnown::OBJECT).superclass = None;
        table
    }

    fn next_class_ref(&self) -> ClassRef {
        ClassRef::from_raw(index_u32(self.classes.len()))
    }

    /// Enter a namespace named `name` under `owner`.
    ///
    /// Classes default to `Object` as superclass, modules to the implicit
    /// module superclass.
    pub fn enter_class(&mut self, owner: ClassRef, name: &str, kind: ClassKind) -> ClassRef {
        let name = self.names.intern_constant(name);
        self.enter_class_with_name(owner, name, kind)
    }

    /// [`enter_class`](Self::enter_class) with an already-interned name.
    pub fn enter_class_with_name(&mut self, owner: ClassRef, name: Name, kind: ClassKind) -> ClassRef {
        if let Some(SymbolRef::Class(existing)) = self.find_member(owner, name) {
            return existing;
        }
        let class = self.next_class_ref();
        let superclass = match kind {
            ClassKind::Class => Some(WellKnown::OBJECT),
            ClassKind::Module => Some(WellKnown::IMPLICIT_MODULE_SUPERCLASS),
        };
        self.classes.push(ClassData {
            name,
            owner,
            kind,
            flags: ClassFlags::empty(),
            superclass,
            superclass_args: Vec::new(),
            mixins: Vec::new(),
            type_members: Vec::new(),
            members: FxHashMap::default(),
            companion: None,
            attached: None,
        });
        self.class_mut(owner).members.insert(name, class.into());
        class
    }

    /// The companion (class-level) namespace of `class`, created on first use.
    ///
    /// A new companion is reachable from its primary through the `<singleton>`
    /// member and carries the implicit `<AttachedClass>` type template.
    pub fn companion_of(&mut self, class: ClassRef) -> ClassRef {
        if let Some(companion) = self.class(class).companion {
            return companion;
        }
        let primary_name = self.names.lookup(self.class(class).name).to_owned();
        let name = self.names.intern_constant(&format!("<Class:{primary_name}>"));
        let companion = self.next_class_ref();
        self.classes.push(ClassData {
            name,
            owner: class,
            kind: ClassKind::Class,
            flags: ClassFlags::empty(),
            superclass: None,
            superclass_args: Vec::new(),
            mixins: Vec::new(),
            type_members: Vec::new(),
            members: FxHashMap::default(),
            companion: None,
            attached: Some(class),
        });
        let data = self.class_mut(class);
        data.companion = Some(companion);
        data.members.insert(Name::SINGLETON, companion.into());

        let attached_class = TypeMemberData {
            name: Name::ATTACHED_CLASS,
            owner: companion,
            variance: Variance::Covariant,
            flags: TypeMemberFlags::empty(),
            lower: Type::Untyped,
            upper: Type::Class(class),
        };
        self.push_type_member(companion, attached_class);
        companion
    }

    /// Enter a method named `name` on `owner`.
    ///
    /// New methods get the synthetic `<blk>` block parameter; parameters
    /// added later go in front of it.
    pub fn enter_method(&mut self, owner: ClassRef, name: &str) -> MethodRef {
        let name = self.names.intern(name);
        self.enter_method_with_name(owner, name)
    }

    /// [`enter_method`](Self::enter_method) with an already-interned name.
    pub fn enter_method_with_name(&mut self, owner: ClassRef, name: Name) -> MethodRef {
        if let Some(SymbolRef::Method(existing)) = self.find_member(owner, name) {
            return existing;
        }
        let method = MethodRef::from_raw(index_u32(self.methods.len()));
        self.methods.push(MethodData {
            name,
            owner,
            flags: MethodFlags::empty(),
            params: vec![Param {
                name: Name::BLK,
                ty: None,
                flags: ParamFlags::BLOCK,
            }],
            type_params: Vec::new(),
            result_type: None,
        });
        self.class_mut(owner).members.insert(name, method.into());
        method
    }

    /// Add a parameter before the synthetic block parameter.
    pub fn add_param(&mut self, method: MethodRef, name: &str, ty: Option<Type>, flags: ParamFlags) {
        let name = self.names.intern(name);
        let params = &mut self.method_mut(method).params;
        let at = params
            .iter()
            .position(Param::is_synthetic_block)
            .unwrap_or(params.len());
        params.insert(at, Param { name, ty, flags });
    }

    /// Enter an instance field (`@x`) on `owner`.
    pub fn enter_field(&mut self, owner: ClassRef, name: &str) -> FieldRef {
        let name = self.names.intern(name);
        self.enter_field_with_name(owner, name, FieldKind::Instance)
    }

    /// Enter a static field on `owner`.
    ///
    /// Class variables (`@@x`) are ordinary identifiers; everything else is a
    /// constant.
    pub fn enter_static_field(&mut self, owner: ClassRef, name: &str) -> FieldRef {
        let name = if name.starts_with("@@") {
            self.names.intern(name)
        } else {
            self.names.intern_constant(name)
        };
        self.enter_field_with_name(owner, name, FieldKind::Static)
    }

    /// Enter a field with an already-interned name.
    pub fn enter_field_with_name(&mut self, owner: ClassRef, name: Name, kind: FieldKind) -> FieldRef {
        if let Some(SymbolRef::Field(existing)) = self.find_member(owner, name) {
            return existing;
        }
        let field = FieldRef::from_raw(index_u32(self.fields.len()));
        self.fields.push(FieldData {
            name,
            owner,
            kind,
            result_type: None,
        });
        self.class_mut(owner).members.insert(name, field.into());
        field
    }

    /// Enter a type parameter on `owner` (a primary for a type member, a
    /// companion for a type template).
    pub fn enter_type_member(&mut self, owner: ClassRef, name: &str, variance: Variance) -> TypeMemberRef {
        let name = self.names.intern_constant(name);
        if let Some(SymbolRef::TypeMember(existing)) = self.find_member(owner, name) {
            return existing;
        }
        self.push_type_member(
            owner,
            TypeMemberData {
                name,
                owner,
                variance,
                flags: TypeMemberFlags::empty(),
                lower: Type::Untyped,
                upper: Type::Untyped,
            },
        )
    }

    fn push_type_member(&mut self, owner: ClassRef, data: TypeMemberData) -> TypeMemberRef {
        let tm = TypeMemberRef::from_raw(index_u32(self.type_members.len()));
        let name = data.name;
        self.type_members.push(data);
        let class = self.class_mut(owner);
        class.type_members.push(tm);
        class.members.insert(name, tm.into());
        tm
    }
}

fn index_u32(len: usize) -> u32 {
    u32::try_from(len).unwrap_or_else(|_| panic!("symbol table exceeded {} entries", u32::MAX))
}
