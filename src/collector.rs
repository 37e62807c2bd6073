//! # Concurrent Collection
//!
//! `ConcurrentCollector` runs a fetch function over a list of identifiers on
//! a dedicated, fixed-size `rayon` thread pool and gathers the results that
//! came back.
//!
//! The collector knows nothing about what is being fetched. It takes any
//! `Fn(u64) -> Option<T>`, so policies such as retries or timeouts can be
//! layered onto the fetch function without touching this module.
//!
//! ## Guarantees
//!
//! - One call per identifier in the input, never more.
//! - The call returns only after every dispatched fetch has finished.
//! - `None` results are dropped; a failed fetch never fails the batch.
//! - Surviving results keep the relative order of their identifiers.

use log::{debug, info};
use rayon::prelude::*;
use rayon::{ThreadPool, ThreadPoolBuilder};

use crate::error::{Error, Result};

/// A bounded worker pool for independent fetch tasks.
pub struct ConcurrentCollector {
    pool: ThreadPool,
    workers: usize,
}

impl ConcurrentCollector {
    /// Creates a collector backed by `workers` threads.
    ///
    /// Fails with `Error::InvalidConfig` when `workers` is zero.
    pub fn new(workers: usize) -> Result<Self> {
        if workers == 0 {
            return Err(Error::InvalidConfig {
                message: "worker count must be at least 1".to_string(),
            });
        }

        let pool = ThreadPoolBuilder::new()
            .num_threads(workers)
            .thread_name(|i| format!("fetch-worker-{}", i))
            .build()?;

        Ok(Self { pool, workers })
    }

    pub fn workers(&self) -> usize {
        self.workers
    }

    /// Runs `a` and `b` potentially in parallel on this collector's pool.
    ///
    /// Batches started from either closure share the same `workers` threads,
    /// so nothing runs on rayon's global pool.
    pub fn join<A, B, RA, RB>(&self, a: A, b: B) -> (RA, RB)
    where
        A: FnOnce() -> RA + Send,
        B: FnOnce() -> RB + Send,
        RA: Send,
        RB: Send,
    {
        self.pool.install(|| rayon::join(a, b))
    }

    /// Runs `fetch` once per identifier and returns the present results.
    pub fn collect_all<T, F>(&self, ids: &[u64], fetch: F) -> Vec<T>
    where
        T: Send,
        F: Fn(u64) -> Option<T> + Sync,
    {
        if ids.is_empty() {
            return Vec::new();
        }

        let results: Vec<T> = self
            .pool
            .install(|| ids.par_iter().filter_map(|&id| fetch(id)).collect());

        debug!(
            "Collected {} of {} results on {} workers",
            results.len(),
            ids.len(),
            self.workers
        );
        let discarded = ids.len() - results.len();
        if discarded > 0 {
            info!("{} of {} fetches returned nothing", discarded, ids.len());
        }

        results
    }
}
