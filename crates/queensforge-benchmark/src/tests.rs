//! Tests for the benchmark harness.

use std::time::Duration;

use queensforge_config::{HillClimbingConfig, SolverConfig};
use queensforge_core::{
    Algorithm, FailureReason, Metrics, QueensError, SearchCounters, SolveStatus,
};

use super::*;

fn run_with(status: SolveStatus, millis: u64, visited: u64) -> Metrics {
    Metrics {
        runtime: Duration::from_millis(millis),
        steps_count: 10,
        visited_states: visited,
        conflict_trend: Vec::new(),
        status,
        counters: SearchCounters::HillClimbing { restarts: 2 },
    }
}

#[test]
fn test_backtracking_runs_are_identical() {
    let result = BenchmarkBuilder::new("bt")
        .with_board_size(8)
        .with_warmup_count(0)
        .with_run_count(3)
        .build()
        .run()
        .unwrap();

    assert_eq!(result.run_count(), 3);
    assert_eq!(result.success_rate(), 1.0);
    assert_eq!(result.avg_steps(), 218.0);
    assert_eq!(result.avg_backtracks(), Some(105.0));
    assert_eq!(result.avg_restarts(), None);
    assert!(result.runs.iter().all(|r| r.seed.is_none()));
}

#[test]
fn test_hill_climbing_seeds_follow_base() {
    let result = BenchmarkBuilder::new("hc")
        .with_algorithm(Algorithm::HillClimbing)
        .with_board_size(8)
        .with_warmup_count(0)
        .with_run_count(4)
        .with_base_seed(100)
        .build()
        .run()
        .unwrap();

    let seeds: Vec<_> = result.runs.iter().map(|r| r.seed).collect();
    assert_eq!(seeds, vec![Some(100), Some(101), Some(102), Some(103)]);
    assert_eq!(result.success_count(), 4);
    assert!(result.avg_restarts().is_some());
}

#[test]
fn test_parallel_matches_sequential() {
    let builder = BenchmarkBuilder::new("hc")
        .with_algorithm(Algorithm::HillClimbing)
        .with_board_size(10)
        .with_warmup_count(0)
        .with_run_count(6)
        .with_base_seed(5);

    let sequential = builder.clone().build().run().unwrap();
    let parallel = builder.with_parallel(true).build().run().unwrap();

    for (a, b) in sequential.runs.iter().zip(&parallel.runs) {
        assert_eq!(a.run_index, b.run_index);
        assert_eq!(a.seed, b.seed);
        assert_eq!(a.metrics.without_runtime(), b.metrics.without_runtime());
    }
}

#[test]
fn test_unsolvable_board_reports_failures() {
    let solver_config = SolverConfig::new()
        .with_hill_climbing(HillClimbingConfig::new().with_max_restarts(3));
    let result = BenchmarkBuilder::new("three")
        .with_algorithm(Algorithm::HillClimbing)
        .with_board_size(3)
        .with_solver_config(solver_config)
        .with_warmup_count(0)
        .with_run_count(5)
        .build()
        .run()
        .unwrap();

    assert_eq!(result.success_count(), 0);
    let failures: usize = result.failure_counts().iter().map(|(_, c)| c).sum();
    assert_eq!(failures, 5);
    assert_eq!(result.avg_restarts(), Some(4.0));
}

#[test]
fn test_invalid_board_size_is_an_error() {
    let err = BenchmarkBuilder::new("zero")
        .with_board_size(0)
        .build()
        .run()
        .unwrap_err();
    assert_eq!(err, QueensError::InvalidInput { n: 0, max: 32 });
}

#[test]
fn test_aggregates() {
    let mut result = BenchmarkResult::new("agg", Algorithm::HillClimbing, 8);
    result.add_run(BenchmarkRun::new(0, Some(1), run_with(SolveStatus::Solved, 10, 100)));
    result.add_run(BenchmarkRun::new(
        1,
        Some(2),
        run_with(SolveStatus::Exhausted(FailureReason::Cycle), 30, 300),
    ));
    result.add_run(BenchmarkRun::new(
        2,
        Some(3),
        run_with(SolveStatus::Exhausted(FailureReason::Plateau), 20, 200),
    ));
    result.add_run(BenchmarkRun::new(3, Some(4), run_with(SolveStatus::Cancelled, 40, 0)));

    assert_eq!(result.success_count(), 1);
    assert_eq!(result.success_rate(), 0.25);
    assert_eq!(result.avg_solve_time(), Duration::from_millis(25));
    assert_eq!(result.min_solve_time(), Duration::from_millis(10));
    assert_eq!(result.max_solve_time(), Duration::from_millis(40));
    assert_eq!(result.avg_visited_states(), 150.0);
    assert_eq!(result.avg_restarts(), Some(2.0));
    assert_eq!(result.cancelled_count(), 1);
    assert_eq!(
        result.failure_counts(),
        vec![(FailureReason::Plateau, 1), (FailureReason::Cycle, 1)]
    );
}

#[test]
fn test_empty_result() {
    let result = BenchmarkResult::new("empty", Algorithm::Backtracking, 8);
    assert_eq!(result.success_rate(), 0.0);
    assert_eq!(result.avg_solve_time(), Duration::ZERO);
    assert_eq!(result.avg_backtracks(), Some(0.0));
    assert!(result.failure_counts().is_empty());
}

#[test]
fn test_csv_rows() {
    let mut result = BenchmarkResult::new("csv", Algorithm::HillClimbing, 8);
    result.add_run(BenchmarkRun::new(0, Some(7), run_with(SolveStatus::Solved, 2, 400)));
    result.add_run(BenchmarkRun::new(
        1,
        Some(8),
        run_with(SolveStatus::Exhausted(FailureReason::Stuck), 4, 800),
    ));

    let csv = CsvExporter::to_string(&result);
    let lines: Vec<&str> = csv.lines().collect();
    assert_eq!(lines.len(), 3);
    assert_eq!(
        lines[0],
        "run_index,seed,status,solve_time_ms,steps,visited_states,restarts,backtracks,states_per_second"
    );
    assert_eq!(lines[1], "0,7,solved,2.000,10,400,2,,200000.00");
    assert_eq!(lines[2], "1,8,exhausted (stuck),4.000,10,800,2,,200000.00");
}

#[test]
fn test_csv_write_to_writer() {
    let result = BenchmarkResult::new("csv", Algorithm::Backtracking, 4);
    let mut buffer = Vec::new();
    CsvExporter::write(&result, &mut buffer).unwrap();
    assert_eq!(String::from_utf8(buffer).unwrap(), CsvExporter::to_string(&result));
}

#[test]
fn test_markdown_sections() {
    let mut result = BenchmarkResult::new("md", Algorithm::HillClimbing, 8);
    result.add_run(BenchmarkRun::new(0, Some(1), run_with(SolveStatus::Solved, 10, 100)));
    result.add_run(BenchmarkRun::new(
        1,
        Some(2),
        run_with(SolveStatus::Exhausted(FailureReason::Cycle), 30, 300),
    ));

    let md = MarkdownReport::to_string(&result);
    assert!(md.contains("- **Algorithm**: Hill Climbing"));
    assert!(md.contains("| Success Rate | 50.0% (1/2) |"));
    assert!(md.contains("| Avg Restarts | 2.00 |"));
    assert!(!md.contains("Avg Backtracks"));
    assert!(md.contains("## Failures"));
    assert!(md.contains("| cycle | 1 |"));
    assert!(md.contains("| 1 | 2 | exhausted (cycle) | 30.000 | 10 | 300 |"));
}
