/// Tunables for the four pSCAN phases.
///
/// Batch sizes govern how many vertices (or cores, for the non-core eval
/// stage) a single parallel task covers; `thread_count` sizes the
/// short-lived worker pool rebuilt for each parallel phase (see
/// `crate::engine`). Defaults are tuned batch sizes for each phase's
/// inner-loop cost.
#[derive(Copy, Clone, Debug)]
pub struct EngineConfig {
    /// Vertices processed per task while pruning edges by degree bound.
    pub prune_batch: usize,
    /// Vertices processed per task in the first core-check pass.
    pub first_pass_batch: usize,
    /// Vertices processed per task in the second core-check pass.
    pub second_pass_batch: usize,
    /// Cores processed per task while evaluating non-core edges.
    pub assign_batch: usize,
    /// Number of worker threads used for each parallel phase.
    pub thread_count: usize,
}

impl EngineConfig {
    pub const DEFAULT_PRUNE_BATCH: usize = 8192;
    pub const DEFAULT_FIRST_PASS_BATCH: usize = 32;
    pub const DEFAULT_SECOND_PASS_BATCH: usize = 64;
    pub const DEFAULT_ASSIGN_BATCH: usize = 64;

    pub fn new(
        prune_batch: usize,
        first_pass_batch: usize,
        second_pass_batch: usize,
        assign_batch: usize,
        thread_count: usize,
    ) -> Self {
        Self {
            prune_batch,
            first_pass_batch,
            second_pass_batch,
            assign_batch,
            thread_count,
        }
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            prune_batch: Self::DEFAULT_PRUNE_BATCH,
            first_pass_batch: Self::DEFAULT_FIRST_PASS_BATCH,
            second_pass_batch: Self::DEFAULT_SECOND_PASS_BATCH,
            assign_batch: Self::DEFAULT_ASSIGN_BATCH,
            thread_count: num_cpus::get(),
        }
    }
}
