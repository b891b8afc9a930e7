//! QueensForge - Replayable N-Queens Search in Rust
//!
//! Pick a board size and an engine, get back the full search trace and the
//! run's metrics.
//!
//! # Example
//!
//! ```rust
//! use queensforge::prelude::*;
//!
//! let result = solve(6, Algorithm::Backtracking, &SolverConfig::default()).unwrap();
//! assert!(result.success());
//!
//! let board = result.solution().unwrap();
//! assert_eq!(board.len(), 6);
//! assert_eq!(board.conflicts(), 0);
//! ```

// Board model and run vocabulary
pub use queensforge_core::{
    column_conflicts, conflict_count, conflict_count_rows, is_solution, positions_from_rows,
    Algorithm, FailureReason, Metrics, Position, QueensError, Result, SearchCounters,
    SolveStatus, Step, Trace, DEFAULT_BACKTRACKING_MAX_BOARD_SIZE,
    DEFAULT_HILL_CLIMBING_MAX_BOARD_SIZE,
};

// Configuration
pub use queensforge_config::{ConfigError, HillClimbingConfig, SolverConfig, TerminationConfig};

// Engines
pub use queensforge_solver::{
    solve_backtracking, solve_hill_climbing, BacktrackingSolver, HillClimbingSolver,
    SolveResult,
};

// Termination conditions
pub use queensforge_solver::termination;

mod solver;
pub use solver::{solve, Solver};

/// Console output, enabled by the `console` feature.
#[cfg(feature = "console")]
pub use queensforge_console as console;

pub mod prelude {
    pub use super::{solve, Solver};
    pub use super::{Algorithm, FailureReason, Position, SolveStatus, Step, Trace};
    pub use super::{HillClimbingConfig, SolveResult, SolverConfig};
}
