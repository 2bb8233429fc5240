//! Generator configuration.

use std::path::PathBuf;

/// Configuration for a stub generation run.
#[derive(Clone, Debug)]
pub struct GeneratorConfig {
    /// Worker threads (0 = one per available core).
    pub workers: usize,
    /// Directory artifacts are written to.
    pub output_dir: PathBuf,
    /// First line of every artifact.
    pub strictness_header: String,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        GeneratorConfig {
            workers: 0, // auto-detect
            output_dir: PathBuf::from("."),
            strictness_header: "# typed: true".to_owned(),
        }
    }
}

impl GeneratorConfig {
    /// Config with a specific worker count.
    pub fn with_workers(workers: usize) -> Self {
        GeneratorConfig {
            workers,
            ..Default::default()
        }
    }

    /// One worker; packages are generated one after another.
    pub fn single_threaded() -> Self {
        Self::with_workers(1)
    }

    #[must_use]
    pub fn output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = dir.into();
        self
    }

    /// Number of workers actually started; never zero.
    pub fn effective_workers(&self) -> usize {
        let workers = if self.workers == 0 {
            rayon::current_num_threads()
        } else {
            self.workers
        };
        workers.max(1)
    }
}
