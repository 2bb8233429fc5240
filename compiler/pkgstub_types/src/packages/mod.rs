//! Package registry.
//!
//! Package discovery runs upstream; by the time stubs are generated every
//! package is a full name plus two lists of export paths. A package's
//! namespaces are found by resolving its name from the program root: the
//! public namespace at `Foo::Bar`, the test namespace at `Test::Foo::Bar`.

use crate::table::SymbolTable;
use pkgstub_ir::{ClassRef, Name, NameTable};
use std::fmt;

/// Index of a package in a [`PackageDb`].
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct PackageId(u32);

impl PackageId {
    #[inline]
    pub const fn from_raw(raw: u32) -> Self {
        PackageId(raw)
    }

    #[inline]
    pub const fn raw(self) -> u32 {
        self.0
    }

    #[inline]
    fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Debug for PackageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Package#{}", self.0)
    }
}

/// One package declaration.
#[derive(Clone, Debug, Default)]
pub struct PackageInfo {
    /// Name components, outermost first.
    pub name: Vec<Name>,
    /// Public export paths, each resolved from the program root.
    pub exports: Vec<Vec<Name>>,
    /// Test-only export paths.
    pub test_exports: Vec<Vec<Name>>,
}

impl PackageInfo {
    pub fn new(name: Vec<Name>) -> Self {
        PackageInfo {
            name,
            exports: Vec::new(),
            test_exports: Vec::new(),
        }
    }

    pub fn full_name(&self) -> &[Name] {
        &self.name
    }

    /// `Test` followed by the full name.
    pub fn test_name(&self) -> Vec<Name> {
        let mut name = Vec::with_capacity(self.name.len() + 1);
        name.push(Name::TEST);
        name.extend_from_slice(&self.name);
        name
    }

    /// The package's namespace, if any of its files declared it.
    pub fn namespace(&self, table: &SymbolTable) -> Option<ClassRef> {
        table.lookup_path(&self.name)?.as_class()
    }

    /// The package's test namespace, if any test file declared it.
    pub fn test_namespace(&self, table: &SymbolTable) -> Option<ClassRef> {
        table.lookup_path(&self.test_name())?.as_class()
    }

    /// Components joined by `_`, plus `_Package`: `Foo::Bar` → `Foo_Bar_Package`.
    pub fn mangled_name(&self, names: &NameTable) -> String {
        let mut mangled = String::new();
        for &part in &self.name {
            mangled.push_str(names.lookup(part));
            mangled.push('_');
        }
        mangled.push_str("Package");
        mangled
    }

    /// `Foo::Bar`.
    pub fn display_name(&self, names: &NameTable) -> String {
        self.name
            .iter()
            .map(|&part| names.lookup(part))
            .collect::<Vec<_>>()
            .join("::")
    }
}

/// The package registry: packages in declaration order.
#[derive(Clone, Debug, Default)]
pub struct PackageDb {
    packages: Vec<PackageInfo>,
}

impl PackageDb {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, info: PackageInfo) -> PackageId {
        let id = u32::try_from(self.packages.len())
            .unwrap_or_else(|_| panic!("package registry exceeded {} entries", u32::MAX));
        self.packages.push(info);
        PackageId(id)
    }

    pub fn get(&self, id: PackageId) -> &PackageInfo {
        &self.packages[id.index()]
    }

    pub fn get_mut(&mut self, id: PackageId) -> &mut PackageInfo {
        &mut self.packages[id.index()]
    }

    /// All packages with their ids, in declaration order.
    #[allow(clippy::cast_possible_truncation)] // `add` caps the registry at u32::MAX
    pub fn iter(&self) -> impl Iterator<Item = (PackageId, &PackageInfo)> {
        self.packages
            .iter()
            .enumerate()
            .map(|(i, info)| (PackageId(i as u32), info))
    }

    #[allow(clippy::cast_possible_truncation)] // `add` caps the registry at u32::MAX
    pub fn ids(&self) -> impl Iterator<Item = PackageId> + '_ {
        (0..self.packages.len()).map(|i| PackageId(i as u32))
    }

    pub fn len(&self) -> usize {
        self.packages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.packages.is_empty()
    }
}
