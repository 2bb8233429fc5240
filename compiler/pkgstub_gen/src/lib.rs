//! Package interface stub generation.
//!
//! Given a resolved [`SymbolTable`](pkgstub_types::SymbolTable) and the
//! package registry, produce for every package a standalone declaration file
//! describing exactly what the package exports, plus a second one for its
//! test-only exports.
//!
//! # Pipeline
//!
//! ```text
//! exports ──resolve──▶ roots ──schedule──▶ worklist ──render──▶ text
//!                                  ▲                     │
//!                                  └── symbols in types ─┘
//! ```
//!
//! - [`classify`](PackageScope): owner-chain walk deciding which package a
//!   symbol belongs to
//! - [`closure`](EmissionState): emitted set plus worklist; foreign symbols are
//!   never scheduled
//! - `render`: namespace, method, field and type parameter text; rendering a
//!   type schedules every in-package symbol it mentions
//! - [`generate_package`]: one package, both artifacts
//! - [`StubGenerator`]: all packages on a fixed-size worker pool
//!
//! # Thread Safety
//!
//! The symbol table, package registry and [`PackageRoots`] are shared
//! read-only across workers. Everything mutable (emission state, output
//! buffer) lives inside one package job on one worker.

mod artifact;
mod classify;
mod closure;
mod config;
mod driver;
mod error;
mod export;
mod output;
mod render;

pub use artifact::{ArtifactKind, ArtifactSink, FsSink, MemorySink, PackageArtifacts};
pub use classify::{PackageRoots, PackageScope};
pub use closure::EmissionState;
pub use config::GeneratorConfig;
pub use driver::{RunSummary, StubGenerator};
pub use error::GenError;
pub use export::{generate_package, resolve_exports, ResolvedExports};
pub use render::{MethodView, MAX_PRETTY_SIG_ARGS, MAX_PRETTY_WIDTH};

use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Initialize the tracing subscriber.
///
/// Reads the filter from `RUST_LOG`; does nothing when it is unset. Safe to
/// call more than once.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_level(true))
                .with(filter)
                .init();
        }
    });
}
