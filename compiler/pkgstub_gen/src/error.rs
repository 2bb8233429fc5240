//! Generation errors.
//!
//! Every variant aborts the run. Unresolvable export paths and packages with
//! nothing to emit are not errors; they simply produce no output.

use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum GenError {
    /// Package discovery found nothing to generate.
    #[error("no packages found in the package registry")]
    EmptyRegistry,

    /// The renderer reached a symbol outside the package it is rendering.
    /// This is a bug in the generator or a malformed symbol table.
    #[error("refusing to render `{symbol}`: it is not part of package `{package}`")]
    ForeignSymbol { symbol: String, package: String },

    #[error("failed to write `{}`: {source}", path.display())]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to build worker pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
}
