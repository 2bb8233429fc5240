//! Generated artifacts and where they go.

use crate::error::GenError;
use parking_lot::Mutex;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

/// Which surface of a package an artifact describes.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub enum ArtifactKind {
    Public,
    Test,
}

impl ArtifactKind {
    pub const ALL: [ArtifactKind; 2] = [ArtifactKind::Public, ArtifactKind::Test];

    /// File suffix, without the leading dot.
    pub fn suffix(self) -> &'static str {
        match self {
            ArtifactKind::Public => "rbi",
            ArtifactKind::Test => "test.rbi",
        }
    }
}

/// Up to two artifacts for one package.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PackageArtifacts {
    /// Package name with `::` replaced by `_`, plus `_Package`.
    pub mangled_name: String,
    pub public: Option<String>,
    pub test: Option<String>,
}

impl PackageArtifacts {
    pub fn get(&self, kind: ArtifactKind) -> Option<&str> {
        match kind {
            ArtifactKind::Public => self.public.as_deref(),
            ArtifactKind::Test => self.test.as_deref(),
        }
    }

    /// Produced artifacts, public first.
    pub fn iter(&self) -> impl Iterator<Item = (ArtifactKind, &str)> {
        ArtifactKind::ALL
            .into_iter()
            .filter_map(|kind| self.get(kind).map(|text| (kind, text)))
    }

    /// `Foo_Bar_Package.rbi` or `Foo_Bar_Package.test.rbi`.
    pub fn file_name(&self, kind: ArtifactKind) -> String {
        file_name(&self.mangled_name, kind)
    }

    pub fn len(&self) -> usize {
        self.iter().count()
    }

    pub fn is_empty(&self) -> bool {
        self.public.is_none() && self.test.is_none()
    }
}

fn file_name(mangled_name: &str, kind: ArtifactKind) -> String {
    format!("{mangled_name}.{}", kind.suffix())
}

/// Destination for generated artifacts.
///
/// Workers call `write` concurrently, one call per artifact.
pub trait ArtifactSink: Sync {
    fn write(&self, mangled_name: &str, kind: ArtifactKind, text: &str) -> Result<(), GenError>;
}

/// Writes `<dir>/<mangled>.<suffix>`, creating `dir` if needed.
#[derive(Clone, Debug)]
pub struct FsSink {
    dir: PathBuf,
}

impl FsSink {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        FsSink { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Where an artifact is written.
    pub fn path(&self, mangled_name: &str, kind: ArtifactKind) -> PathBuf {
        self.dir.join(file_name(mangled_name, kind))
    }
}

impl ArtifactSink for FsSink {
    fn write(&self, mangled_name: &str, kind: ArtifactKind, text: &str) -> Result<(), GenError> {
        fs::create_dir_all(&self.dir).map_err(|source| GenError::Write {
            path: self.dir.clone(),
            source,
        })?;
        let path = self.path(mangled_name, kind);
        fs::write(&path, text).map_err(|source| GenError::Write {
            path: path.clone(),
            source,
        })?;
        tracing::debug!(path = %path.display(), bytes = text.len(), "wrote artifact");
        Ok(())
    }
}

/// Collects artifacts in memory, keyed by file name.
#[derive(Debug, Default)]
pub struct MemorySink {
    files: Mutex<BTreeMap<String, String>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, file_name: &str) -> Option<String> {
        self.files.lock().get(file_name).cloned()
    }

    /// File names written so far, sorted.
    pub fn file_names(&self) -> Vec<String> {
        self.files.lock().keys().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.files.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.lock().is_empty()
    }

    pub fn into_inner(self) -> BTreeMap<String, String> {
        self.files.into_inner()
    }
}

impl ArtifactSink for MemorySink {
    fn write(&self, mangled_name: &str, kind: ArtifactKind, text: &str) -> Result<(), GenError> {
        self.files
            .lock()
            .insert(file_name(mangled_name, kind), text.to_owned());
        Ok(())
    }
}
