use std::sync::atomic::AtomicBool;

use crate::expression::evaluate;
use crate::solver::{
    CanonicalKey, ExpressionSolver, NumericToken, SearchState, Solution, SolverConfig, SolverError,
};
use crate::utils::UtilsError;

fn assert_expression_matches(solution: &Solution) {
    let evaluated = evaluate(&solution.expression);
    assert!(
        evaluated.is_ok(),
        "expression '{}' failed to evaluate: {:?}",
        solution.expression,
        evaluated
    );
    if let Ok(value) = evaluated {
        assert_eq!(value, i128::from(solution.value));
    }
}

#[test]
fn test_target_among_numbers_short_circuits() {
    let solver = ExpressionSolver::default();
    let result = solver.solve(&[3, 75, 8, 1, 10, 100], 75);
    assert!(result.is_ok());
    if let Ok(solution) = result {
        assert_eq!(solution, Solution::new(75, "75".to_string()));
    }
}

#[test]
fn test_single_number_equal_to_target() {
    let solver = ExpressionSolver::default();
    let result = solver.solve(&[5], 5);
    assert!(result.is_ok());
    if let Ok(solution) = result {
        assert_eq!(solution, Solution::new(5, "5".to_string()));
    }
}

#[test]
fn test_sum_of_one_to_six() {
    let solver = ExpressionSolver::default();
    let result = solver.solve(&[1, 2, 3, 4, 5, 6], 21);
    assert!(result.is_ok());
    if let Ok(solution) = result {
        assert_eq!(solution, Solution::new(21, "3 × (1 + 6)".to_string()));
        assert!(solution.is_exact(21));
        assert_expression_matches(&solution);
    }
}

#[test]
fn test_pruning_settles_for_closest_value() {
    let solver = ExpressionSolver::default();
    let result = solver.solve(&[3, 7, 6, 2, 15, 100], 952);
    assert!(result.is_ok());
    if let Ok(solution) = result {
        assert_eq!(
            solution,
            Solution::new(977, "100 × (3 + 7) - 6 - 2 - 15".to_string())
        );
        assert_expression_matches(&solution);
    }
}

#[test]
fn test_disabled_pruning_reaches_exact_target() {
    let solver = ExpressionSolver::new(SolverConfig {
        prune_threshold: u64::MAX,
        ..SolverConfig::default()
    });
    let result = solver.solve(&[3, 7, 6, 2, 15, 100], 952);
    assert!(result.is_ok());
    if let Ok(solution) = result {
        assert_eq!(
            solution,
            Solution::new(952, "7 × (100 + 2 × (3 × 6))".to_string())
        );
        assert_expression_matches(&solution);
    }
}

#[test]
fn test_closest_when_no_exact_combination() {
    let solver = ExpressionSolver::default();
    let result = solver.solve(&[2, 3], 7);
    assert!(result.is_ok());
    if let Ok(solution) = result {
        assert_eq!(solution, Solution::new(6, "2 × 3".to_string()));
        assert!(!solution.is_exact(7));
    }
}

#[test]
fn test_subtraction_reaching_zero() {
    let solver = ExpressionSolver::default();
    let result = solver.solve(&[10, 10], 0);
    assert!(result.is_ok());
    if let Ok(solution) = result {
        assert_eq!(solution, Solution::new(0, "10 - 10".to_string()));
    }
}

#[test]
fn test_fractional_division_never_used() {
    let solver = ExpressionSolver::default();
    let result = solver.solve(&[7, 2], 3);
    assert!(result.is_ok());
    if let Ok(solution) = result {
        assert_eq!(solution, Solution::new(5, "7 - 2".to_string()));
        assert!(!solution.expression.contains('÷'));
    }
}

#[test]
fn test_exact_division_is_used() {
    let solver = ExpressionSolver::default();
    let result = solver.solve(&[100, 4], 25);
    assert!(result.is_ok());
    if let Ok(solution) = result {
        assert_eq!(solution, Solution::new(25, "100 ÷ 4".to_string()));
    }
}

#[test]
fn test_two_step_solution() {
    let solver = ExpressionSolver::default();
    let result = solver.solve(&[1, 2, 3], 7);
    assert!(result.is_ok());
    if let Ok(solution) = result {
        assert_eq!(solution.value, 7);
        assert_expression_matches(&solution);
    }
}

#[test]
fn test_depth_cap_limits_search() {
    let solver = ExpressionSolver::new(SolverConfig {
        max_depth: 1,
        ..SolverConfig::default()
    });
    let result = solver.solve(&[1, 2, 3], 7);
    assert!(result.is_ok());
    if let Ok(solution) = result {
        assert_eq!(solution, Solution::new(6, "2 × 3".to_string()));
    }
}

#[test]
fn test_zero_depth_produces_no_candidate() {
    let solver = ExpressionSolver::new(SolverConfig {
        max_depth: 0,
        ..SolverConfig::default()
    });
    let result = solver.solve(&[2, 3], 7);
    assert!(result.is_ok());
    if let Ok(solution) = result {
        assert_eq!(solution, Solution::default());
        assert_eq!(solution.to_string(), "0");
    }
}

#[test]
fn test_single_number_without_match_defaults() {
    let solver = ExpressionSolver::default();
    let result = solver.solve(&[4], 9);
    assert!(result.is_ok());
    if let Ok(solution) = result {
        assert_eq!(solution, Solution::default());
    }
}

#[test]
fn test_negative_target_gets_closest_value() {
    let solver = ExpressionSolver::default();
    let result = solver.solve(&[2, 3], -1);
    assert!(result.is_ok());
    if let Ok(solution) = result {
        assert_eq!(solution, Solution::new(1, "3 - 2".to_string()));
    }
}

#[test]
fn test_empty_numbers_rejected() {
    let solver = ExpressionSolver::default();
    let result = solver.solve(&[], 100);
    assert!(matches!(
        result,
        Err(SolverError::UtilsError(UtilsError::EmptyNumbers))
    ));
}

#[test]
fn test_game_puzzles_produce_valid_expressions() {
    let solver = ExpressionSolver::default();
    let puzzles: [(&[u64], i64); 4] = [
        (&[3, 7, 6, 2, 15, 100], 952),
        (&[1, 9, 4, 4, 20, 50], 813),
        (&[8, 8, 2, 5, 10, 75], 999),
        (&[6, 1, 3, 9, 15, 25], 347),
    ];

    for (numbers, target) in puzzles {
        let result = solver.solve(numbers, target);
        assert!(result.is_ok());
        if let Ok(solution) = result {
            assert!(!solution.expression.is_empty());
            assert_expression_matches(&solution);
        }
    }
}

#[test]
fn test_solve_is_deterministic() {
    let solver = ExpressionSolver::default();
    let numbers = [4, 7, 1, 9, 20, 75];
    let first = solver.solve(&numbers, 638);
    let second = solver.solve(&numbers, 638);
    assert!(first.is_ok() && second.is_ok());
    if let (Ok(a), Ok(b)) = (first, second) {
        assert_eq!(a, b);
    }
}

#[test]
fn test_cancelled_search_returns_without_expanding() {
    let solver = ExpressionSolver::default();
    let cancel = AtomicBool::new(true);
    let result = solver.solve_cancellable(&[1, 2, 3, 4, 5, 6], 999, &cancel);
    assert!(result.is_ok());
    if let Ok(solution) = result {
        assert_eq!(solution, Solution::default());
    }
}

#[test]
fn test_cancel_flag_does_not_affect_fast_path() {
    let solver = ExpressionSolver::default();
    let cancel = AtomicBool::new(true);
    let result = solver.solve_cancellable(&[1, 2, 3], 3, &cancel);
    assert!(result.is_ok());
    if let Ok(solution) = result {
        assert_eq!(solution, Solution::new(3, "3".to_string()));
    }
}

#[test]
fn test_solve_many_keeps_target_order() {
    let solver = ExpressionSolver::default();
    let result = solver.solve_many(&[2, 3], &[7, 5, 0]);
    assert!(result.is_ok());
    if let Ok(solutions) = result {
        assert_eq!(
            solutions,
            vec![
                Solution::new(6, "2 × 3".to_string()),
                Solution::new(5, "2 + 3".to_string()),
                Solution::new(1, "3 - 2".to_string()),
            ]
        );
    }
}

#[test]
fn test_solve_many_propagates_errors() {
    let solver = ExpressionSolver::default();
    let result = solver.solve_many(&[], &[1, 2]);
    assert!(result.is_err());
}

#[test]
fn test_canonical_key_ignores_order() {
    let a = CanonicalKey::from_values(vec![3, 1, 2, 1]);
    let b = CanonicalKey::from_values(vec![1, 1, 2, 3]);
    assert_eq!(a, b);
    assert_eq!(a.values(), &[1, 1, 2, 3]);
}

#[test]
fn test_search_state_combine_compacts_tokens() {
    let state = SearchState::initial(&[4, 5, 6]);
    assert_eq!(state.depth(), 0);

    let next = state.combine(0, 2, NumericToken::new(24, "4 × 6".to_string()));
    assert_eq!(next.depth(), 1);
    assert_eq!(
        next.tokens(),
        &[
            NumericToken::source(5),
            NumericToken::new(24, "4 × 6".to_string())
        ]
    );
    assert_eq!(state.values_after(0, 2, 24), vec![5, 24]);
    assert_eq!(state.tokens().len(), 3);
}

#[test]
fn test_solution_display() {
    assert_eq!(Solution::new(6, "2 × 3".to_string()).to_string(), "2 × 3 = 6");
    assert_eq!(Solution::new(5, "5".to_string()).to_string(), "5");
}
