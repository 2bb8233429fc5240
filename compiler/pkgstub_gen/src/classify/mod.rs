//! Package membership.
//!
//! A symbol belongs to package P iff walking its owner chain reaches P's
//! namespace or P's test namespace before it reaches the program root, the
//! package registry, or any other package's namespace. The walk is an
//! iterative loop over `owner`, so namespace depth never grows the stack.

use crate::error::GenError;
use pkgstub_ir::{ClassRef, SymbolRef};
use pkgstub_types::{PackageDb, PackageInfo, SymbolTable, WellKnown};
use rustc_hash::FxHashSet;

/// Every package's namespace and test namespace. Built once per run and
/// shared read-only by all workers.
#[derive(Debug, Default)]
pub struct PackageRoots {
    roots: FxHashSet<ClassRef>,
}

impl PackageRoots {
    /// Collect the roots of every package. Packages without files have no
    /// namespace and contribute nothing.
    pub fn build(table: &SymbolTable, packages: &PackageDb) -> Result<Self, GenError> {
        if packages.is_empty() {
            return Err(GenError::EmptyRegistry);
        }
        let mut roots = FxHashSet::default();
        for (_, info) in packages.iter() {
            roots.extend(info.namespace(table));
            roots.extend(info.test_namespace(table));
        }
        tracing::debug!(packages = packages.len(), roots = roots.len(), "collected package roots");
        Ok(PackageRoots { roots })
    }

    pub fn contains(&self, class: ClassRef) -> bool {
        self.roots.contains(&class)
    }

    pub fn len(&self) -> usize {
        self.roots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.roots.is_empty()
    }
}

/// Where an owner-chain walk stopped.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
enum Terminus {
    Namespace,
    TestNamespace,
    Foreign,
}

/// One package as seen by the classifier.
#[derive(Copy, Clone)]
pub struct PackageScope<'a> {
    table: &'a SymbolTable,
    roots: &'a PackageRoots,
    info: &'a PackageInfo,
    namespace: Option<ClassRef>,
    test_namespace: Option<ClassRef>,
}

impl<'a> PackageScope<'a> {
    pub fn new(table: &'a SymbolTable, roots: &'a PackageRoots, info: &'a PackageInfo) -> Self {
        PackageScope {
            table,
            roots,
            info,
            namespace: info.namespace(table),
            test_namespace: info.test_namespace(table),
        }
    }

    pub fn table(&self) -> &'a SymbolTable {
        self.table
    }

    pub fn info(&self) -> &'a PackageInfo {
        self.info
    }

    pub fn namespace(&self) -> Option<ClassRef> {
        self.namespace
    }

    pub fn test_namespace(&self) -> Option<ClassRef> {
        self.test_namespace
    }

    /// `Foo::Bar`, for diagnostics.
    pub fn display_name(&self) -> String {
        self.info.display_name(self.table.names())
    }

    /// Whether `symbol` is declared inside this package, in either its
    /// public or its test namespace.
    pub fn is_in_package(&self, symbol: SymbolRef) -> bool {
        self.walk(symbol) != Terminus::Foreign
    }

    /// Whether `symbol` is declared inside this package's test namespace.
    pub fn is_in_test_package(&self, symbol: SymbolRef) -> bool {
        self.walk(symbol) == Terminus::TestNamespace
    }

    fn walk(&self, symbol: SymbolRef) -> Terminus {
        let mut current = symbol;
        // Owner chains end at the root; the bound only matters for a
        // malformed table.
        for _ in 0..=self.table.class_count() {
            if let SymbolRef::Class(class) = current {
                if class == WellKnown::ROOT || class == WellKnown::PACKAGE_REGISTRY {
                    return Terminus::Foreign;
                }
                if Some(class) == self.namespace {
                    return Terminus::Namespace;
                }
                if Some(class) == self.test_namespace {
                    return Terminus::TestNamespace;
                }
                if self.roots.contains(class) {
                    return Terminus::Foreign;
                }
            }
            current = SymbolRef::Class(self.table.owner(current));
        }
        Terminus::Foreign
    }
}

#[cfg(test)]
mod tests;
