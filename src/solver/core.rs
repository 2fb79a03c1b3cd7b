use std::collections::{HashSet, VecDeque};
use std::iter;
use std::sync::atomic::{AtomicBool, Ordering};

use log::{debug, info};
use rayon::prelude::*;

use crate::expression::{Operator, render};
use crate::solver::config::SolverConfig;
use crate::solver::errors::SolverError;
use crate::solver::solution::Solution;
use crate::solver::state::{CanonicalKey, NumericToken, SearchState};
use crate::utils::{validate_numbers, validate_target};

/// Closest value found so far and its distance from the target
#[derive(Debug)]
struct Best {
    diff: u64,
    value: u64,
    expression: String,
}

#[derive(Debug, Default)]
struct SearchStats {
    expanded: usize,
    depth_capped: usize,
    pruned: usize,
    memo_hits: usize,
    duplicates: usize,
}

fn distance(target: i64, value: u64) -> u64 {
    let diff = (i128::from(target) - i128::from(value)).unsigned_abs();
    u64::try_from(diff).unwrap_or(u64::MAX)
}

/// Per-call breadth-first search; dropped when the call returns
struct Search<'a> {
    config: &'a SolverConfig,
    target: i64,
    frontier: VecDeque<SearchState>,
    visited: HashSet<CanonicalKey>,
    memo: HashSet<(u64, CanonicalKey)>,
    best: Option<Best>,
    stats: SearchStats,
}

impl<'a> Search<'a> {
    fn new(config: &'a SolverConfig, target: i64) -> Self {
        Self {
            config,
            target,
            frontier: VecDeque::new(),
            visited: HashSet::new(),
            memo: HashSet::new(),
            best: None,
            stats: SearchStats::default(),
        }
    }

    fn run(mut self, numbers: &[u64], cancel: &AtomicBool) -> Solution {
        let initial = SearchState::initial(numbers);
        self.visited.insert(initial.key());
        self.frontier.push_back(initial);

        while let Some(state) = self.frontier.pop_front() {
            if cancel.load(Ordering::Relaxed) {
                info!("Search cancelled with {} states pending", self.frontier.len() + 1);
                break;
            }

            if state.depth() >= self.config.max_depth {
                self.stats.depth_capped += 1;
                continue;
            }

            self.stats.expanded += 1;
            if let Some(solution) = self.expand(&state) {
                info!("Found exact match: {}", solution);
                debug!("Search stats: {:?}", self.stats);
                return solution;
            }
        }

        debug!("Search stats: {:?}", self.stats);
        match self.best {
            Some(best) => {
                info!(
                    "No exact match, closest is {} (off by {})",
                    best.value, best.diff
                );
                Solution::new(best.value, best.expression)
            }
            None => {
                info!("No candidate value was produced");
                Solution::default()
            }
        }
    }

    fn expand(&mut self, state: &SearchState) -> Option<Solution> {
        let tokens = state.tokens();

        for (i, a) in tokens.iter().enumerate() {
            for (j, b) in tokens.iter().enumerate().skip(i + 1) {
                for op in Operator::ALL {
                    let swapped = (!op.is_commutative()).then_some((b, a));
                    for (left, right) in iter::once((a, b)).chain(swapped) {
                        let Some(value) = op.apply(left.value, right.value) else {
                            continue;
                        };
                        let solution = self.consider(state, (i, j), value, left, right, op);
                        if solution.is_some() {
                            return solution;
                        }
                    }
                }
            }
        }

        None
    }

    fn consider(
        &mut self,
        state: &SearchState,
        (i, j): (usize, usize),
        value: u64,
        left: &NumericToken,
        right: &NumericToken,
        op: Operator,
    ) -> Option<Solution> {
        let diff = distance(self.target, value);

        if let Some(best) = &self.best
            && diff > best.diff.saturating_mul(self.config.prune_threshold)
        {
            self.stats.pruned += 1;
            return None;
        }

        let key = CanonicalKey::from_values(state.values_after(i, j, value));

        if !self.memo.insert((value, key.clone())) {
            self.stats.memo_hits += 1;
            return None;
        }

        if !self.visited.insert(key) {
            self.stats.duplicates += 1;
            return None;
        }

        let expression = render(&left.expr, &right.expr, op);

        if diff == 0 {
            return Some(Solution::new(value, expression));
        }

        if self.best.as_ref().is_none_or(|best| diff < best.diff) {
            debug!("New closest value {} via {}", value, expression);
            self.best = Some(Best {
                diff,
                value,
                expression: expression.clone(),
            });
        }

        self.frontier
            .push_back(state.combine(i, j, NumericToken::new(value, expression)));
        None
    }
}

/// Breadth-first solver for the target number game
#[derive(Debug, Clone, Default)]
pub struct ExpressionSolver {
    config: SolverConfig,
}

impl ExpressionSolver {
    pub fn new(config: SolverConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    /// Combine `numbers` with `+ - × ÷` to reach `target`, or get as close as
    /// the bounded search allows.
    ///
    /// # Errors
    ///
    /// Returns an error if `numbers` is empty or a value is outside the safe
    /// integer range.
    pub fn solve(&self, numbers: &[u64], target: i64) -> Result<Solution, SolverError> {
        let never = AtomicBool::new(false);
        self.solve_cancellable(numbers, target, &never)
    }

    /// Like [`solve`](Self::solve), but stops once `cancel` is set and
    /// returns the closest value found up to that point.
    ///
    /// The flag is checked once per expanded state.
    ///
    /// # Errors
    ///
    /// Same as [`solve`](Self::solve).
    pub fn solve_cancellable(
        &self,
        numbers: &[u64],
        target: i64,
        cancel: &AtomicBool,
    ) -> Result<Solution, SolverError> {
        validate_numbers(numbers)?;
        validate_target(target)?;

        if let Ok(wanted) = u64::try_from(target)
            && numbers.contains(&wanted)
        {
            info!("Target {} is one of the given numbers", target);
            return Ok(Solution::new(wanted, wanted.to_string()));
        }

        info!(
            "Searching for {} using {:?} (max depth {}, prune threshold {})",
            target, numbers, self.config.max_depth, self.config.prune_threshold
        );

        Ok(Search::new(&self.config, target).run(numbers, cancel))
    }

    /// Solve the same numbers for several targets in parallel.
    ///
    /// Results are returned in the order of `targets`.
    ///
    /// # Errors
    ///
    /// Same as [`solve`](Self::solve).
    pub fn solve_many(
        &self,
        numbers: &[u64],
        targets: &[i64],
    ) -> Result<Vec<Solution>, SolverError> {
        targets
            .par_iter()
            .map(|&target| self.solve(numbers, target))
            .collect()
    }
}
