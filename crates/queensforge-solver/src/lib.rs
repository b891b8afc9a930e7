//! QueensForge Solver Engine
//!
//! This crate provides the two search engines and their shared plumbing:
//! - Backtracking: exhaustive depth-first search with O(1) pruning
//! - Hill climbing: steepest ascent with sideways moves, cycle detection
//!   and random restarts
//! - Solver scope: trace recording and metrics instrumentation
//! - Termination conditions for cooperative cancellation

pub mod backtracking;
pub mod hill_climbing;
pub mod result;
pub mod scope;
pub mod termination;

pub use backtracking::{solve_backtracking, BacktrackingSolver};
pub use hill_climbing::{solve_hill_climbing, HillClimbingSolver};
pub use result::SolveResult;
pub use scope::SolverScope;
pub use termination::{
    ExternalTermination, NoTermination, OrTermination, StepCountTermination, Termination,
    TimeTermination,
};

pub use queensforge_config::HillClimbingConfig;
