//! Run driver.
//!
//! Every package is an independent job. Package ids go into one bounded
//! queue up front; a fixed number of workers on a dedicated rayon pool
//! drain it. The symbol table, the registry and the package roots are
//! shared read-only; each job owns its emission state and output.
//!
//! The pool's scope is the completion barrier. The first error stops every
//! worker from taking more work and is returned once all of them have
//! finished.

use crate::artifact::{ArtifactSink, FsSink, PackageArtifacts};
use crate::classify::PackageRoots;
use crate::config::GeneratorConfig;
use crate::error::GenError;
use crate::export::generate_package;
use parking_lot::Mutex;
use pkgstub_types::{PackageDb, PackageId, SymbolTable};

/// What a run did.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Packages generated.
    pub packages: usize,
    /// Artifacts handed to the sink.
    pub artifacts: usize,
}

/// Generates stubs for every package in a registry.
pub struct StubGenerator<'a> {
    table: &'a SymbolTable,
    packages: &'a PackageDb,
    config: GeneratorConfig,
}

impl<'a> StubGenerator<'a> {
    pub fn new(table: &'a SymbolTable, packages: &'a PackageDb, config: GeneratorConfig) -> Self {
        StubGenerator {
            table,
            packages,
            config,
        }
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Generate every package and hand each artifact to `sink`.
    #[tracing::instrument(level = "debug", skip_all, fields(packages = self.packages.len()))]
    pub fn run(&self, sink: &dyn ArtifactSink) -> Result<RunSummary, GenError> {
        let summary = Mutex::new(RunSummary::default());
        self.drive(|_, artifacts| {
            let mut written = 0;
            for (kind, text) in artifacts.iter() {
                sink.write(&artifacts.mangled_name, kind, text)?;
                written += 1;
            }
            let mut summary = summary.lock();
            summary.packages += 1;
            summary.artifacts += written;
            Ok(())
        })?;

        let summary = summary.into_inner();
        tracing::debug!(
            packages = summary.packages,
            artifacts = summary.artifacts,
            "stub generation finished"
        );
        Ok(summary)
    }

    /// [`run`](Self::run) into the configured output directory.
    pub fn run_to_dir(&self) -> Result<RunSummary, GenError> {
        self.run(&FsSink::new(&self.config.output_dir))
    }

    /// Generate every package without writing anything, in registry order.
    pub fn generate_all(&self) -> Result<Vec<(PackageId, PackageArtifacts)>, GenError> {
        let results = Mutex::new(Vec::with_capacity(self.packages.len()));
        self.drive(|id, artifacts| {
            results.lock().push((id, artifacts));
            Ok(())
        })?;
        let mut results = results.into_inner();
        results.sort_by_key(|(id, _)| *id);
        Ok(results)
    }

    /// Generate every package on the worker pool, passing each result to
    /// `finish` on the worker that produced it.
    fn drive<F>(&self, finish: F) -> Result<(), GenError>
    where
        F: Fn(PackageId, PackageArtifacts) -> Result<(), GenError> + Sync,
    {
        let roots = PackageRoots::build(self.table, self.packages)?;
        let workers = self.config.effective_workers().min(self.packages.len());

        let (tx, rx) = crossbeam::channel::bounded(self.packages.len());
        for id in self.packages.ids() {
            // Sized to hold every package and `rx` is alive, so this never
            // blocks or fails.
            tx.send(id).ok();
        }
        drop(tx);

        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(workers)
            .thread_name(|index| format!("pkgstub-worker-{index}"))
            .build()?;
        tracing::debug!(workers, "starting workers");

        let first_error: Mutex<Option<GenError>> = Mutex::new(None);
        let (roots, finish, first_error_ref) = (&roots, &finish, &first_error);
        pool.scope(|scope| {
            for worker in 0..workers {
                let rx = rx.clone();
                scope.spawn(move |_| {
                    while let Ok(id) = rx.recv() {
                        if first_error_ref.lock().is_some() {
                            break;
                        }
                        let info = self.packages.get(id);
                        let result = generate_package(self.table, roots, info, &self.config)
                            .and_then(|artifacts| finish(id, artifacts));
                        if let Err(err) = result {
                            tracing::debug!(worker, package = ?id, error = %err, "worker stopping");
                            let mut slot = first_error_ref.lock();
                            if slot.is_none() {
                                *slot = Some(err);
                            }
                            break;
                        }
                    }
                });
            }
        });

        match first_error.into_inner() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}
