//! Parallel processing strategies
//!
//! Without the `parallel` feature every mode runs sequentially.

#[cfg(feature = "parallel")]
use rayon::prelude::*;
use rastermask_core::Result;
#[cfg(feature = "parallel")]
use rastermask_core::Error;

/// Processing mode for algorithms
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProcessingMode {
    /// Single-threaded processing
    Sequential,
    /// Parallel processing on the global Rayon pool
    #[default]
    Parallel,
    /// Parallel on a dedicated pool with the given number of threads
    /// (0 lets Rayon pick)
    ParallelWith(usize),
}

/// Strategy for executing independent work items
pub trait ParallelStrategy {
    /// Run `f` on every item, stopping at the first error.
    ///
    /// Items must be independent: no ordering between them is guaranteed.
    fn try_for_each<T, F>(&self, items: Vec<T>, f: F) -> Result<()>
    where
        T: Send,
        F: Fn(T) -> Result<()> + Sync + Send;
}

impl ParallelStrategy for ProcessingMode {
    #[cfg(feature = "parallel")]
    fn try_for_each<T, F>(&self, items: Vec<T>, f: F) -> Result<()>
    where
        T: Send,
        F: Fn(T) -> Result<()> + Sync + Send,
    {
        match self {
            ProcessingMode::Sequential => items.into_iter().try_for_each(f),
            ProcessingMode::Parallel => items.into_par_iter().try_for_each(f),
            ProcessingMode::ParallelWith(threads) => {
                let pool = rayon::ThreadPoolBuilder::new()
                    .num_threads(*threads)
                    .build()
                    .map_err(|e| Error::Algorithm(format!("Failed to build thread pool: {}", e)))?;
                pool.install(|| items.into_par_iter().try_for_each(f))
            }
        }
    }

    #[cfg(not(feature = "parallel"))]
    fn try_for_each<T, F>(&self, items: Vec<T>, f: F) -> Result<()>
    where
        T: Send,
        F: Fn(T) -> Result<()> + Sync + Send,
    {
        items.into_iter().try_for_each(f)
    }
}
