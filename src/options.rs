//! Execution options shared by every primitive, adapter and combinator.
//!
//! There are no process-wide defaults: each component receives its own
//! [`ExecOptions`] when it is constructed (or per call for the free-standing
//! primitives).

use crate::error::Error;
use anyhow::Result;
use serde::{Deserialize, Serialize};

/// Which worker pool a parallel batch runs on.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Backend {
    /// A dedicated pool of exactly `n_jobs` threads, built for the batch.
    #[default]
    Pool,
    /// Rayon's global pool. `n_jobs > 1` only selects parallel mode; the
    /// number of threads is whatever the global pool was configured with.
    Global,
}

/// How a batch of per-item tasks is executed.
///
/// | option       | effect                                                            |
/// |--------------|-------------------------------------------------------------------|
/// | `n_jobs`     | `1` runs on the calling thread; `> 1` fans out; `0` is rejected   |
/// | `verbose`    | `>= 1` reports progress and batch summaries, `> 10` every task    |
/// | `backend`    | see [`Backend`]                                                   |
/// | `batch_size` | minimum number of consecutive tasks a worker picks up at once     |
///
/// Options deserialize from JSON with every field optional:
///
/// ```
/// use daprs::{Backend, ExecOptions};
///
/// let opts = ExecOptions::from_json(r#"{ "n_jobs": 4, "backend": "global" }"#).unwrap();
/// assert_eq!(opts.n_jobs, 4);
/// assert_eq!(opts.backend, Backend::Global);
/// assert_eq!(opts.verbose, 0);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExecOptions {
    pub n_jobs: usize,
    pub verbose: u8,
    pub backend: Backend,
    pub batch_size: Option<usize>,
}

impl Default for ExecOptions {
    fn default() -> Self {
        Self {
            n_jobs: 1,
            verbose: 0,
            backend: Backend::Pool,
            batch_size: None,
        }
    }
}

impl ExecOptions {
    #[must_use]
    pub fn sequential() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn parallel(n_jobs: usize) -> Self {
        Self {
            n_jobs,
            ..Self::default()
        }
    }

    /// One job per logical CPU.
    #[must_use]
    pub fn all_cores() -> Self {
        Self::parallel(num_cpus::get().max(1))
    }

    /// Parse options from a JSON document and validate them.
    pub fn from_json(json: &str) -> Result<Self> {
        let opts: Self = serde_json::from_str(json)?;
        opts.validate()?;
        Ok(opts)
    }

    #[must_use]
    pub fn with_n_jobs(mut self, n_jobs: usize) -> Self {
        self.n_jobs = n_jobs;
        self
    }

    #[must_use]
    pub fn with_verbose(mut self, verbose: u8) -> Self {
        self.verbose = verbose;
        self
    }

    #[must_use]
    pub fn with_backend(mut self, backend: Backend) -> Self {
        self.backend = backend;
        self
    }

    #[must_use]
    pub fn with_batch_size(mut self, batch_size: usize) -> Self {
        self.batch_size = Some(batch_size);
        self
    }

    #[inline]
    #[must_use]
    pub fn is_parallel(&self) -> bool {
        self.n_jobs > 1
    }

    #[inline]
    #[must_use]
    pub fn progress_enabled(&self) -> bool {
        self.verbose >= 1
    }

    #[inline]
    #[must_use]
    pub(crate) fn reports_tasks(&self) -> bool {
        self.verbose > 10
    }

    pub fn validate(&self) -> std::result::Result<(), Error> {
        if self.n_jobs == 0 {
            return Err(Error::InvalidJobs);
        }
        Ok(())
    }
}
