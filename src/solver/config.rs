/// Configuration for the search driver
#[derive(Debug, Clone, Default)]
pub struct SolverConfig {
    /// Also search every subset of the source numbers, not just trees using all of them
    pub use_subsets: bool,
    /// Spread permutations across the rayon thread pool
    pub parallel: bool,
}
