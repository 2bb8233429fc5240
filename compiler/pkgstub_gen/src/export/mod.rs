//! Export resolution and the per-package job.
//!
//! A package's export paths are resolved from the program root. Each
//! resolved symbol seeds one of two closures: public exports that actually
//! live under the test namespace join the test closure, everything else
//! stays public. The two closures are rendered with independent emission
//! state, so a symbol reachable from both appears in both artifacts.

use crate::artifact::PackageArtifacts;
use crate::classify::{PackageRoots, PackageScope};
use crate::config::GeneratorConfig;
use crate::error::GenError;
use crate::render::Renderer;
use pkgstub_ir::{Name, SymbolRef};
use pkgstub_types::{PackageInfo, SymbolTable};

/// Export roots of one package, split by artifact.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ResolvedExports {
    pub public: Vec<SymbolRef>,
    pub test: Vec<SymbolRef>,
}

/// Resolve the export paths of `scope`'s package.
///
/// Paths that do not resolve are dropped; upstream has already reported
/// them.
pub fn resolve_exports(scope: &PackageScope<'_>) -> ResolvedExports {
    let table = scope.table();
    let info = scope.info();
    let mut resolved = ResolvedExports::default();

    for path in &info.exports {
        match table.lookup_path(path) {
            Some(symbol) if scope.is_in_test_package(symbol) => resolved.test.push(symbol),
            Some(symbol) => resolved.public.push(symbol),
            None => log_dropped(table, path),
        }
    }
    for path in &info.test_exports {
        match table.lookup_path(path) {
            Some(symbol) => resolved.test.push(symbol),
            None => log_dropped(table, path),
        }
    }
    resolved
}

fn log_dropped(table: &SymbolTable, path: &[Name]) {
    let path: Vec<&str> = path.iter().map(|&name| table.name_text(name)).collect();
    tracing::debug!(path = %path.join("::"), "dropping unresolved export");
}

/// Generate both artifacts of one package.
#[tracing::instrument(
    level = "debug",
    skip_all,
    fields(package = %info.display_name(table.names()))
)]
pub fn generate_package(
    table: &SymbolTable,
    roots: &PackageRoots,
    info: &PackageInfo,
    config: &GeneratorConfig,
) -> Result<PackageArtifacts, GenError> {
    let scope = PackageScope::new(table, roots, info);
    let exports = resolve_exports(&scope);
    let header = config.strictness_header.as_str();

    let public = render_artifact(scope, &exports.public, header)?;
    let test = render_artifact(scope, &exports.test, header)?;
    tracing::debug!(
        public = public.is_some(),
        test = test.is_some(),
        "package generated"
    );

    Ok(PackageArtifacts {
        mangled_name: info.mangled_name(table.names()),
        public,
        test,
    })
}

/// Render the closure of `exports`. `None` when nothing was scheduled or
/// nothing was written.
fn render_artifact(
    scope: PackageScope<'_>,
    exports: &[SymbolRef],
    header: &str,
) -> Result<Option<String>, GenError> {
    let mut renderer = Renderer::new(scope);
    for &symbol in exports {
        renderer.schedule(symbol);
    }
    if renderer.closure_is_empty() {
        return Ok(None);
    }
    renderer.run()?;
    let text = renderer.finish();
    if text.is_empty() {
        return Ok(None);
    }
    Ok(Some(format!("{header}\n\n{text}")))
}

#[cfg(test)]
mod tests;
