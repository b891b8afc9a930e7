//! N-Queens Demo
//!
//! Solves one board with either engine, prints the final board and the run's
//! metrics, and optionally replays every recorded step.
//!
//! **Usage**:
//! ```bash
//! cargo run -p nqueens -- 8
//! cargo run -p nqueens -- 12 --algorithm hill-climbing --seed 42
//! cargo run -p nqueens -- 5 --replay
//! RUST_LOG=debug cargo run -p nqueens -- 3 -a hill-climbing --max-restarts 5
//! ```

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, ValueEnum};
use queensforge::prelude::*;
use queensforge::{ConfigError, Metrics};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum AlgorithmArg {
    Backtracking,
    HillClimbing,
}

impl From<AlgorithmArg> for Algorithm {
    fn from(arg: AlgorithmArg) -> Self {
        match arg {
            AlgorithmArg::Backtracking => Algorithm::Backtracking,
            AlgorithmArg::HillClimbing => Algorithm::HillClimbing,
        }
    }
}

#[derive(Debug, Parser)]
#[command(name = "nqueens")]
#[command(about = "Solve N-Queens and inspect the search trace", long_about = None)]
struct Cli {
    /// Board size (number of queens and board dimension)
    #[arg(value_name = "N", default_value = "8")]
    n: usize,

    /// Search engine
    #[arg(short, long, value_enum, default_value = "backtracking")]
    algorithm: AlgorithmArg,

    /// Seed for hill climbing; overrides the config file
    #[arg(short, long)]
    seed: Option<u64>,

    /// Solver config file (.toml, .yaml or .yml)
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Print every recorded step
    #[arg(long)]
    replay: bool,

    /// Hill-climbing restart budget; overrides the config file
    #[arg(long, value_name = "K")]
    max_restarts: Option<u32>,

    /// Disallow sideways moves in hill climbing
    #[arg(long)]
    no_sideways: bool,
}

fn main() -> ExitCode {
    let args = Cli::parse();

    let config = match load_config(&args) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let algorithm = Algorithm::from(args.algorithm);
    let result = match solve(args.n, algorithm, &config) {
        Ok(result) => result,
        Err(e) => {
            eprintln!("error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    if args.replay {
        print_replay(&result.trace, args.n);
    }

    match result.trace.final_board() {
        Some(board) => print_board(board, args.n),
        None => println!("\nNo board was recorded."),
    }
    print_metrics(&result.metrics);

    ExitCode::SUCCESS
}

fn load_config(args: &Cli) -> Result<SolverConfig, ConfigError> {
    let mut config = match &args.config {
        Some(path) if has_extension(path, &["yaml", "yml"]) => SolverConfig::from_yaml_file(path)?,
        Some(path) => SolverConfig::load(path)?,
        None => SolverConfig::load("queens.toml").unwrap_or_default(),
    };

    if let Some(seed) = args.seed {
        config.random_seed = Some(seed);
    }
    if let Some(max_restarts) = args.max_restarts {
        config.hill_climbing.max_restarts = max_restarts;
    }
    if args.no_sideways {
        config.hill_climbing.allow_sideways = false;
    }
    Ok(config)
}

fn has_extension(path: &Path, extensions: &[&str]) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| extensions.contains(&e))
}

/// Prints the board to stdout.
fn print_board(step: &Step, n: usize) {
    println!("\n{}-Queens Board ({} conflicts):", n, step.conflicts());
    println!("{}", "-".repeat(n * 2 + 1));

    for row in 0..n {
        print!("|");
        for col in 0..n {
            let queen_here = step.contains(row, col);
            print!("{}", if queen_here { "Q|" } else { " |" });
        }
        println!();
    }
    println!("{}", "-".repeat(n * 2 + 1));
}

fn print_replay(trace: &Trace, n: usize) {
    println!("\n─── Replay ({} steps) ───\n", trace.len());
    for (i, step) in trace.iter().enumerate() {
        if step.is_restart_marker() {
            println!("{:>6}  ── restart ──", i);
            continue;
        }
        let queens: Vec<String> = step.positions().iter().map(|p| p.to_string()).collect();
        println!(
            "{:>6}  {:>2}/{} queens  {:>3} conflicts  {}",
            i,
            step.len(),
            n,
            step.conflicts(),
            queens.join(" ")
        );
    }
}

fn print_metrics(metrics: &Metrics) {
    println!("\nResults:");
    println!("  Algorithm:       {}", metrics.algorithm());
    println!("  Status:          {}", metrics.status);
    println!("  Runtime:         {:.3}ms", metrics.runtime_ms());
    println!("  Steps:           {}", metrics.steps_count);
    println!("  Visited states:  {}", metrics.visited_states);
    if let Some(backtracks) = metrics.backtracks() {
        println!("  Backtracks:      {}", backtracks);
    }
    if let Some(max_depth) = metrics.max_depth() {
        println!("  Max depth:       {}", max_depth);
    }
    if let Some(restarts) = metrics.restarts() {
        println!("  Restarts:        {}", restarts);
    }
    if let Some(reason) = metrics.failure_reason() {
        println!("  Failure reason:  {}", reason);
    }
    if !metrics.conflict_trend.is_empty() {
        let tail: Vec<String> = metrics
            .conflict_trend
            .iter()
            .rev()
            .take(12)
            .rev()
            .map(|c| c.to_string())
            .collect();
        println!(
            "  Conflict trend:  {}{}",
            if metrics.conflict_trend.len() > 12 { "… " } else { "" },
            tail.join(" → ")
        );
    }
}
