//! Tests for the backtracking engine.

use std::sync::atomic::AtomicBool;
use std::sync::Arc;

use queensforge_core::{is_solution, Position, QueensError, SolveStatus, Step};
use queensforge_test::{
    assert_single_step_edits, first_solution, max_step_len, removal_count, rows_to_step,
};

use super::*;
use crate::termination::{ExternalTermination, StepCountTermination};

#[test]
fn test_four_queens_first_solution() {
    let result = solve_backtracking(4).unwrap();

    assert!(result.success());
    assert_eq!(
        result.trace.last().unwrap().positions(),
        &[
            Position::new(0, 1),
            Position::new(1, 3),
            Position::new(2, 0),
            Position::new(3, 2),
        ]
    );
    assert_eq!(result.metrics.steps_count, 12);
    assert_eq!(result.metrics.backtracks(), Some(4));
    assert_eq!(result.metrics.max_depth(), Some(4));
}

#[test]
fn test_single_queen() {
    let result = solve_backtracking(1).unwrap();

    assert!(result.success());
    assert_eq!(result.trace.len(), 1);
    assert_eq!(result.trace[0].positions(), &[Position::new(0, 0)]);
    assert_eq!(result.trace[0].conflicts(), 0);
    assert_eq!(result.metrics.backtracks(), Some(0));
    assert_eq!(result.metrics.max_depth(), Some(1));
}

#[test]
fn test_two_queens_has_no_solution() {
    let result = solve_backtracking(2).unwrap();

    assert!(!result.success());
    assert_eq!(result.metrics.status, SolveStatus::NoSolution);
    assert_eq!(result.metrics.failure_reason(), None);
    assert_eq!(
        result.trace.steps(),
        &[
            Step::new(&[Position::new(0, 0)]),
            Step::new(&[]),
            Step::new(&[Position::new(0, 1)]),
            Step::new(&[]),
        ]
    );
    assert_eq!(result.metrics.backtracks(), Some(2));
    assert_eq!(result.metrics.max_depth(), Some(1));
}

#[test]
fn test_three_queens_has_no_solution() {
    let result = solve_backtracking(3).unwrap();

    assert!(!result.success());
    assert!(!result.trace.is_empty());
    assert_eq!(result.trace.len(), 10);
    assert_eq!(result.metrics.backtracks(), Some(5));
    assert_eq!(result.metrics.max_depth(), Some(2));
    assert!(result.trace.last().unwrap().is_empty());
}

#[test]
fn test_eight_queens_counts() {
    let result = solve_backtracking(8).unwrap();

    assert!(result.success());
    assert_eq!(result.metrics.steps_count, 218);
    assert_eq!(result.metrics.backtracks(), Some(105));
    assert_eq!(result.metrics.visited_states, 218);
    assert!(result.metrics.conflict_trend.is_empty());
}

#[test]
fn test_solves_every_size_from_four() {
    for n in 4..=12 {
        let result = solve_backtracking(n).unwrap();
        let last = result.trace.last().unwrap();

        assert!(result.success(), "n = {n}");
        assert_eq!(last.len(), n);
        assert_eq!(last.conflicts(), 0);
        assert!(is_solution(last.positions(), n));
    }
}

#[test]
fn test_returns_lexicographically_first_solution() {
    for n in 4..=8 {
        let expected = rows_to_step(&first_solution(n).unwrap());
        let result = solve_backtracking(n).unwrap();
        assert_eq!(result.solution(), Some(&expected), "n = {n}");
    }
}

#[test]
fn test_trace_is_single_step_edits() {
    for n in 1..=9 {
        let result = solve_backtracking(n).unwrap();
        assert_single_step_edits(&result.trace);
    }
}

#[test]
fn test_metrics_match_trace() {
    for n in 1..=9 {
        let result = solve_backtracking(n).unwrap();
        let metrics = &result.metrics;

        assert_eq!(metrics.backtracks(), Some(removal_count(&result.trace) as u64));
        assert_eq!(metrics.max_depth(), Some(max_step_len(&result.trace)));
        assert_eq!(metrics.visited_states, result.trace.len() as u64);
        assert_eq!(metrics.steps_count, result.trace.len());
    }
}

#[test]
fn test_zero_is_invalid() {
    assert_eq!(
        solve_backtracking(0),
        Err(QueensError::InvalidInput { n: 0, max: 20 })
    );
}

#[test]
fn test_default_limit_bounds_trace_growth() {
    let n = DEFAULT_BACKTRACKING_MAX_BOARD_SIZE + 1;
    assert_eq!(
        solve_backtracking(n),
        Err(QueensError::InvalidInput { n, max: DEFAULT_BACKTRACKING_MAX_BOARD_SIZE })
    );
    assert_eq!(
        BacktrackingSolver::new().solve(n),
        Err(QueensError::InvalidInput { n, max: DEFAULT_BACKTRACKING_MAX_BOARD_SIZE })
    );
}

#[test]
fn test_explicit_limit_overrides_default() {
    // The step cap keeps the accepted run short.
    let n = DEFAULT_BACKTRACKING_MAX_BOARD_SIZE + 1;
    let result = BacktrackingSolver::new()
        .with_max_board_size(n)
        .with_termination(StepCountTermination::new(10_000))
        .solve(n)
        .unwrap();
    assert!(!result.trace.is_empty());
}

#[test]
fn test_board_size_limit() {
    let solver = BacktrackingSolver::new().with_max_board_size(6);
    assert!(solver.solve(6).is_ok());
    assert_eq!(
        solver.solve(7),
        Err(QueensError::InvalidInput { n: 7, max: 6 })
    );
}

#[test]
fn test_cancelled_before_start() {
    let solver = BacktrackingSolver::new()
        .with_termination(ExternalTermination::new(Arc::new(AtomicBool::new(true))));
    let result = solver.solve(8).unwrap();

    assert_eq!(result.metrics.status, SolveStatus::Cancelled);
    assert!(result.trace.is_empty());
    assert!(result.solution().is_none());
}

#[test]
fn test_cancelled_mid_search_keeps_partial_trace() {
    let solver = BacktrackingSolver::new().with_termination(StepCountTermination::new(20));
    let result = solver.solve(8).unwrap();

    assert_eq!(result.metrics.status, SolveStatus::Cancelled);
    assert!(result.trace.len() >= 20);
    assert!(result.trace.len() < 218);
    assert_single_step_edits(&result.trace);
}
