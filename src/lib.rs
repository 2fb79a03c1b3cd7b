//! Moj broj - A solver for the "target number" arithmetic game
//!
//! Given a handful of numbers and a target, this library searches for a way to
//! combine the numbers with `+`, `-`, `×` and `÷` that reaches the target. When
//! no exact combination is found within the search bounds, the closest value
//! reached is returned instead.

pub mod expression;
pub mod solver;
pub mod utils;

// Re-export the main public API
pub use expression::{ExpressionError, Operator, evaluate, render};
pub use solver::{ExpressionSolver, Solution, SolverConfig, SolverError};
pub use utils::{UtilsError, parse_numbers, validate_numbers};

/// Find an expression over `numbers` that evaluates to `target`
///
/// This is a convenience function that creates a default solver and runs it.
///
/// # Arguments
///
/// * `numbers` - The numbers available for combination, each usable once
/// * `target` - The value to reach
///
/// # Returns
///
/// * `Ok(Solution)` - The target with its expression, or the closest value
///   found. A value of `0` with an empty expression means no combination was
///   possible at all.
/// * `Err(SolverError)` - If the input is invalid
///
/// # Errors
///
/// This function will return an error if:
/// * `numbers` is empty
/// * a number or the target lies outside the safe integer range
///
/// # Examples
///
/// ```
/// use moj_broj::solve;
///
/// match solve(&[2, 3], 7) {
///     Ok(solution) => assert_eq!(solution.expression, "2 × 3"),
///     Err(e) => println!("Error: {}", e),
/// }
/// ```
pub fn solve(numbers: &[u64], target: i64) -> Result<Solution, SolverError> {
    let solver = ExpressionSolver::default();
    solver.solve(numbers, target)
}
