/// Minimum number of pixels before [`ExecutionStrategy::Auto`] switches to
/// the rayon thread pool.
pub const AUTO_PARALLEL_MIN_PIXELS: usize = 100_000;

/// Controls how an operator is executed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExecutionStrategy {
    /// Run sequentially on the current thread.
    ///
    /// Useful for small images or when the overhead of parallelization
    /// outweighs the benefits.
    Serial,

    /// Process rows in parallel on the global rayon thread pool.
    Parallel,

    /// Pick between [`ExecutionStrategy::Serial`] and
    /// [`ExecutionStrategy::Parallel`] based on the number of pixels.
    #[default]
    Auto,
}

impl ExecutionStrategy {
    /// Whether the strategy resolves to parallel execution for the given
    /// number of pixels.
    pub fn is_parallel(&self, num_pixels: usize) -> bool {
        match self {
            ExecutionStrategy::Serial => false,
            ExecutionStrategy::Parallel => true,
            ExecutionStrategy::Auto => num_pixels >= AUTO_PARALLEL_MIN_PIXELS,
        }
    }
}
