use crate::solver::constants::{MAX_DEPTH, PRUNE_THRESHOLD};

/// Search bounds for [`ExpressionSolver`](crate::solver::ExpressionSolver).
///
/// Both values trade completeness for running time; neither guarantees that
/// the closest reachable value is found.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolverConfig {
    pub max_depth: usize,
    pub prune_threshold: u64,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            max_depth: MAX_DEPTH,
            prune_threshold: PRUNE_THRESHOLD,
        }
    }
}
