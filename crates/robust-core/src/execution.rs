//! Execution strategy for expansion loops
//!
//! Every cell of a combinatorial expansion depends only on two read-only
//! input values, so the fill loops can run on a rayon pool without changing
//! the result. This module decides when that happens.

/// Derived buffers smaller than this are always filled sequentially under
/// [`ExecutionStrategy::Auto`]
pub const PARALLEL_THRESHOLD: usize = 1 << 16;

/// Execution strategy for batch operations
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ExecutionStrategy {
    /// Process items sequentially
    #[default]
    Sequential,
    /// Process items in parallel
    Parallel,
    /// Automatically choose based on workload
    Auto,
}

impl ExecutionStrategy {
    /// Whether a workload of `cells` output values should run in parallel
    ///
    /// Always `false` when the `parallel` feature is disabled.
    pub fn use_parallel(self, cells: usize) -> bool {
        if !parallel_available() {
            return false;
        }
        match self {
            Self::Sequential => false,
            Self::Parallel => true,
            Self::Auto => cells >= PARALLEL_THRESHOLD,
        }
    }
}

/// Whether this build can run work on a thread pool
pub const fn parallel_available() -> bool {
    cfg!(feature = "parallel")
}
