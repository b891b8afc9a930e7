//! Error types for QueensForge

use thiserror::Error;

/// Largest board backtracking accepts when no explicit limit is configured.
///
/// The trace records every placement and every removal, so it grows
/// exponentially: 20 queens record about 400 thousand steps, 30 queens over
/// a hundred million.
pub const DEFAULT_BACKTRACKING_MAX_BOARD_SIZE: usize = 20;

/// Largest board hill climbing accepts when no explicit limit is configured.
///
/// Its trace is bounded by the restart and step budgets, not by `n`.
pub const DEFAULT_HILL_CLIMBING_MAX_BOARD_SIZE: usize = 32;

/// Main error type for QueensForge operations.
///
/// Only malformed input is an error. Search outcomes, including "no
/// solution" and "budget exhausted", are reported through
/// [`SolveStatus`](crate::SolveStatus).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QueensError {
    /// Board size outside the supported range
    #[error("Invalid input: board size {n} is outside 1..={max}")]
    InvalidInput { n: usize, max: usize },
}

/// Result type alias for QueensForge operations
pub type Result<T> = std::result::Result<T, QueensError>;

/// Checks that `n` lies in `1..=max`.
///
/// # Example
///
/// ```
/// use queensforge_core::error::{validate_board_size, QueensError};
///
/// assert!(validate_board_size(8, 32).is_ok());
/// assert_eq!(
///     validate_board_size(0, 32),
///     Err(QueensError::InvalidInput { n: 0, max: 32 })
/// );
/// ```
pub fn validate_board_size(n: usize, max: usize) -> Result<()> {
    if n == 0 || n > max {
        return Err(QueensError::InvalidInput { n, max });
    }
    Ok(())
}
