//! QueensForge Core - shared vocabulary for N-Queens search engines
//!
//! This crate provides the types every engine speaks:
//! - Board positions, O(1) occupancy and conflict counting
//! - Immutable steps and the append-only trace
//! - Run metrics, status and failure classification
//! - The error type

pub mod board;
pub mod error;
pub mod metrics;
pub mod trace;

#[cfg(test)]
mod board_tests;

pub use board::{
    column_conflicts, conflict_count, conflict_count_rows, is_solution, positions_from_rows,
    Occupancy, Position,
};
pub use error::{
    QueensError, Result, DEFAULT_BACKTRACKING_MAX_BOARD_SIZE, DEFAULT_HILL_CLIMBING_MAX_BOARD_SIZE,
};
pub use metrics::{Algorithm, FailureReason, Metrics, SearchCounters, SolveStatus};
pub use trace::{Step, Trace};
