//! Configuration flowing through the facade.

use std::fs;
use std::path::PathBuf;

use queensforge::prelude::*;

fn temp_file(name: &str, contents: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!("queensforge-{}-{}", std::process::id(), name));
    fs::write(&path, contents).unwrap();
    path
}

#[test]
fn test_toml_file_drives_hill_climbing() {
    let path = temp_file(
        "plateau.toml",
        r#"
            random_seed = 9

            [hill_climbing]
            max_restarts = 1
            sideways_limit = 0
        "#,
    );
    let config = SolverConfig::load(&path).unwrap();
    fs::remove_file(&path).unwrap();

    let result = solve(2, Algorithm::HillClimbing, &config).unwrap();
    assert_eq!(result.metrics.status, SolveStatus::Exhausted(FailureReason::Plateau));
    assert_eq!(result.metrics.restarts(), Some(2));
}

#[test]
fn test_yaml_file_limits_board_size() {
    let path = temp_file("limit.yaml", "max_board_size: 5\n");
    let config = SolverConfig::from_yaml_file(&path).unwrap();
    fs::remove_file(&path).unwrap();

    assert!(solve(5, Algorithm::Backtracking, &config).is_ok());
    assert!(solve(6, Algorithm::Backtracking, &config).is_err());
}

#[test]
fn test_missing_default_config_falls_back() {
    let solver = Solver::from_default_config();
    assert_eq!(solver.config().hill_climbing, HillClimbingConfig::default());
}

#[test]
fn test_huge_time_limit_still_solves() {
    let config =
        SolverConfig::from_toml_str("[termination]\nseconds_spent_limit = 18446744073709552")
            .unwrap();
    let result = solve(6, Algorithm::Backtracking, &config).unwrap();
    assert_eq!(result.metrics.status, SolveStatus::Solved);
}
