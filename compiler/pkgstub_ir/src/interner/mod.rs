//! Name table for interned identifiers.
//!
//! Names are interned while the upstream resolver builds the symbol table and
//! only looked up afterwards, so the table is a plain owned structure: writers
//! hold `&mut NameTable`, concurrent readers share `&NameTable`.

use super::{Name, NameKind};
use rustc_hash::FxHashMap;

struct NameEntry {
    text: Box<str>,
    kind: NameKind,
}

/// Interned identifier storage.
///
/// `Utf8` and `Constant` names are deduplicated per kind, so `foo` and `Foo`
/// never collide and interning the same text twice returns the same `Name`.
/// `Unique` names are never deduplicated: each call to [`NameTable::fresh_unique`]
/// mints a new one.
pub struct NameTable {
    entries: Vec<NameEntry>,
    utf8: FxHashMap<Box<str>, Name>,
    constants: FxHashMap<Box<str>, Name>,
    unique_counter: u32,
}

impl NameTable {
    /// Create a table with the well-known names at their fixed indices.
    pub fn new() -> Self {
        let mut table = NameTable {
            entries: Vec::with_capacity(256),
            utf8: FxHashMap::default(),
            constants: FxHashMap::default(),
            unique_counter: 0,
        };
        table.pre_intern_well_known();
        table
    }

    fn pre_intern_well_known(&mut self) {
        // Order must match the `Name` constants.
        const WELL_KNOWN: &[(&str, NameKind)] = &[
            ("", NameKind::Utf8),
            ("initialize", NameKind::Utf8),
            ("<static-init>", NameKind::Utf8),
            ("<singleton>", NameKind::Utf8),
            ("<AttachedClass>", NameKind::Constant),
            ("attached_class", NameKind::Utf8),
            ("sealed_subclasses", NameKind::Utf8),
            ("<blk>", NameKind::Utf8),
            ("Test", NameKind::Constant),
        ];

        for &(text, kind) in WELL_KNOWN {
            match kind {
                NameKind::Constant => self.intern_constant(text),
                _ => self.intern(text),
            };
        }
        debug_assert_eq!(self.entries.len(), Name::PRE_INTERNED as usize);
    }

    fn push(&mut self, text: Box<str>, kind: NameKind) -> Name {
        let raw = u32::try_from(self.entries.len())
            .unwrap_or_else(|_| panic!("name table exceeded {} entries", u32::MAX));
        self.entries.push(NameEntry { text, kind });
        Name::from_raw(raw)
    }

    /// Intern an ordinary identifier.
    pub fn intern(&mut self, text: &str) -> Name {
        if let Some(&name) = self.utf8.get(text) {
            return name;
        }
        let name = self.push(text.into(), NameKind::Utf8);
        self.utf8.insert(text.into(), name);
        name
    }

    /// Intern a constant name.
    pub fn intern_constant(&mut self, text: &str) -> Name {
        if let Some(&name) = self.constants.get(text) {
            return name;
        }
        let name = self.push(text.into(), NameKind::Constant);
        self.constants.insert(text.into(), name);
        name
    }

    /// Mint a compiler-internal name that can never clash with a source name.
    pub fn fresh_unique(&mut self, base: &str) -> Name {
        self.unique_counter += 1;
        let text = format!("<{base}>${}", self.unique_counter);
        self.push(text.into_boxed_str(), NameKind::Unique)
    }

    /// Find an already-interned name without interning it.
    pub fn find(&self, text: &str, kind: NameKind) -> Option<Name> {
        match kind {
            NameKind::Utf8 => self.utf8.get(text).copied(),
            NameKind::Constant => self.constants.get(text).copied(),
            NameKind::Unique => None,
        }
    }

    /// Look up the text of a name.
    pub fn lookup(&self, name: Name) -> &str {
        &self.entries[name.index()].text
    }

    /// Look up the kind of a name.
    pub fn kind(&self, name: Name) -> NameKind {
        self.entries[name.index()].kind
    }

    /// Number of interned names, including the well-known ones.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether only the well-known names are present.
    pub fn is_empty(&self) -> bool {
        self.entries.len() <= Name::PRE_INTERNED as usize
    }
}

impl Default for NameTable {
    fn default() -> Self {
        Self::new()
    }
}

/// Trait for looking up interned names.
///
/// Lets display code accept anything that can resolve a `Name` without
/// depending on where the table lives.
pub trait StringLookup {
    /// Look up the text for an interned name.
    fn lookup(&self, name: Name) -> &str;
}

impl StringLookup for NameTable {
    fn lookup(&self, name: Name) -> &str {
        NameTable::lookup(self, name)
    }
}
