/// Combination steps after which a state is no longer expanded
pub const MAX_DEPTH: usize = 6;

/// Candidates farther from the target than this multiple of the best
/// distance so far are skipped
pub const PRUNE_THRESHOLD: u64 = 2;
