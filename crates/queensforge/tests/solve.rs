//! End-to-end tests through the facade.

use std::sync::atomic::AtomicBool;
use std::sync::Arc;

use queensforge::prelude::*;
use queensforge::{
    conflict_count, is_solution, QueensError, DEFAULT_BACKTRACKING_MAX_BOARD_SIZE,
};
use queensforge_test::{
    all_solutions, assert_non_increasing_segments, assert_single_step_edits, rows_to_step,
};

#[test]
fn test_both_engines_solve_eight() {
    let config = SolverConfig::new().with_random_seed(8);
    for algorithm in [Algorithm::Backtracking, Algorithm::HillClimbing] {
        let result = solve(8, algorithm, &config).unwrap();
        let board = result.solution().unwrap();

        assert_eq!(result.metrics.algorithm(), algorithm);
        assert!(is_solution(board.positions(), 8), "{algorithm}");
    }
}

#[test]
fn test_solutions_are_known_placements() {
    let known: Vec<Step> = all_solutions(6).iter().map(|c| rows_to_step(c)).collect();
    let config = SolverConfig::new().with_random_seed(3);

    let bt = solve(6, Algorithm::Backtracking, &config).unwrap();
    assert!(known.contains(bt.solution().unwrap()));

    // Hill climbing orders its queens by column; compare as sets.
    let hc = solve(6, Algorithm::HillClimbing, &config).unwrap();
    let mut found = hc.solution().unwrap().positions().to_vec();
    found.sort();
    assert!(known.iter().any(|k| {
        let mut k = k.positions().to_vec();
        k.sort();
        k == found
    }));
}

#[test]
fn test_four_queens_answer() {
    let result = solve(4, Algorithm::Backtracking, &SolverConfig::default()).unwrap();
    assert_eq!(
        result.solution().unwrap().positions(),
        &[
            Position::new(0, 1),
            Position::new(1, 3),
            Position::new(2, 0),
            Position::new(3, 2),
        ]
    );
}

#[test]
fn test_no_solution_differs_from_exhausted() {
    let config = SolverConfig::new()
        .with_random_seed(1)
        .with_hill_climbing(HillClimbingConfig::new().with_max_restarts(4));

    let bt = solve(3, Algorithm::Backtracking, &config).unwrap();
    assert_eq!(bt.metrics.status, SolveStatus::NoSolution);
    assert_eq!(bt.metrics.failure_reason(), None);
    assert!(!bt.trace.is_empty());

    let hc = solve(3, Algorithm::HillClimbing, &config).unwrap();
    assert!(matches!(hc.metrics.status, SolveStatus::Exhausted(_)));
    assert!(hc.metrics.failure_reason().is_some());
    assert_eq!(hc.metrics.restarts(), Some(5));
}

#[test]
fn test_invalid_sizes() {
    let config = SolverConfig::default().with_max_board_size(10);
    for algorithm in [Algorithm::Backtracking, Algorithm::HillClimbing] {
        assert_eq!(
            solve(0, algorithm, &config),
            Err(QueensError::InvalidInput { n: 0, max: 10 })
        );
        assert_eq!(
            solve(11, algorithm, &config),
            Err(QueensError::InvalidInput { n: 11, max: 10 })
        );
    }
}

#[test]
fn test_default_limits_per_engine() {
    let n = DEFAULT_BACKTRACKING_MAX_BOARD_SIZE + 1;
    assert_eq!(
        solve(n, Algorithm::Backtracking, &SolverConfig::default()),
        Err(QueensError::InvalidInput { n, max: DEFAULT_BACKTRACKING_MAX_BOARD_SIZE })
    );

    let capped = SolverConfig::new()
        .with_random_seed(1)
        .with_step_count_limit(100);
    assert!(solve(n, Algorithm::HillClimbing, &capped).is_ok());

    let raised = capped.with_max_board_size(n);
    assert!(solve(n, Algorithm::Backtracking, &raised).is_ok());
}

#[test]
fn test_seeded_runs_repeat() {
    let config = SolverConfig::new().with_random_seed(2024);
    let a = solve(8, Algorithm::HillClimbing, &config).unwrap();
    let b = solve(8, Algorithm::HillClimbing, &config).unwrap();

    assert_eq!(a.trace, b.trace);
    assert_eq!(a.metrics.without_runtime(), b.metrics.without_runtime());
}

#[test]
fn test_trace_properties() {
    let config = SolverConfig::new().with_random_seed(77);

    let bt = solve(7, Algorithm::Backtracking, &config).unwrap();
    assert_single_step_edits(&bt.trace);

    let hc = solve(16, Algorithm::HillClimbing, &config).unwrap();
    assert_non_increasing_segments(&hc.trace);
    for step in &hc.trace {
        assert_eq!(step.conflicts(), conflict_count(step.positions()));
    }
}

#[test]
fn test_step_limit_cancels() {
    let config = SolverConfig::new().with_step_count_limit(30);
    let result = solve(8, Algorithm::Backtracking, &config).unwrap();

    assert_eq!(result.metrics.status, SolveStatus::Cancelled);
    assert!(result.solution().is_none());
    assert!(result.trace.len() >= 30);
}

#[test]
fn test_cancel_flag() {
    let flag = Arc::new(AtomicBool::new(false));
    let solver = Solver::new(SolverConfig::new().with_random_seed(5)).with_cancel_flag(flag);

    assert!(solver.solve(8, Algorithm::HillClimbing).unwrap().success());

    solver.cancel();
    let result = solver.solve(8, Algorithm::HillClimbing).unwrap();
    assert_eq!(result.metrics.status, SolveStatus::Cancelled);
    assert!(result.trace.is_empty());
}

#[test]
fn test_engines_run_on_separate_threads() {
    let handles: Vec<_> = (0..4u64)
        .map(|seed| {
            std::thread::spawn(move || {
                let config = SolverConfig::new().with_random_seed(seed);
                solve(10, Algorithm::HillClimbing, &config).unwrap()
            })
        })
        .collect();

    for handle in handles {
        assert!(handle.join().unwrap().success());
    }
}
