//! Exhaustive depth-first backtracking.
//!
//! Places one queen per row, rows in increasing order, columns tried in
//! increasing order. Column and diagonal occupancy is checked in O(1)
//! through [`Occupancy`]. Every placement and every removal is recorded as
//! its own step, so consecutive steps differ by exactly one queen.
//!
//! The search stops at the first complete placement.

use queensforge_core::error::{validate_board_size, Result};
use queensforge_core::{
    Occupancy, Position, SearchCounters, SolveStatus, Step,
    DEFAULT_BACKTRACKING_MAX_BOARD_SIZE,
};
use tracing::{info, trace};

use crate::result::SolveResult;
use crate::scope::SolverScope;
use crate::termination::{NoTermination, Termination};

/// Solves `n`-queens by backtracking with no termination.
///
/// # Errors
///
/// Returns [`QueensError::InvalidInput`] if `n` is zero or above
/// [`DEFAULT_BACKTRACKING_MAX_BOARD_SIZE`].
///
/// [`QueensError::InvalidInput`]: queensforge_core::QueensError::InvalidInput
///
/// # Example
///
/// ```
/// use queensforge_core::Position;
/// use queensforge_solver::solve_backtracking;
///
/// let result = solve_backtracking(4).unwrap();
/// assert!(result.success());
/// assert_eq!(
///     result.solution().unwrap().positions(),
///     &[
///         Position::new(0, 1),
///         Position::new(1, 3),
///         Position::new(2, 0),
///         Position::new(3, 2),
///     ]
/// );
/// assert_eq!(result.metrics.backtracks(), Some(4));
/// ```
pub fn solve_backtracking(n: usize) -> Result<SolveResult> {
    BacktrackingSolver::new().solve(n)
}

/// Configurable backtracking engine.
///
/// # Type Parameters
/// * `T` - The termination polled before every column attempt
#[derive(Debug, Clone)]
pub struct BacktrackingSolver<T = NoTermination> {
    termination: T,
    max_board_size: usize,
}

impl BacktrackingSolver<NoTermination> {
    pub fn new() -> Self {
        Self {
            termination: NoTermination,
            max_board_size: DEFAULT_BACKTRACKING_MAX_BOARD_SIZE,
        }
    }
}

impl Default for BacktrackingSolver<NoTermination> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Termination> BacktrackingSolver<T> {
    /// Sets the termination condition.
    pub fn with_termination<U: Termination>(self, termination: U) -> BacktrackingSolver<U> {
        BacktrackingSolver {
            termination,
            max_board_size: self.max_board_size,
        }
    }

    /// Sets the largest accepted board size.
    ///
    /// Trace memory grows exponentially with `n`; raise this only with a
    /// termination in place.
    pub fn with_max_board_size(mut self, max_board_size: usize) -> Self {
        self.max_board_size = max_board_size;
        self
    }

    /// Runs the search on an `n`×`n` board.
    pub fn solve(&self, n: usize) -> Result<SolveResult> {
        validate_board_size(n, self.max_board_size)?;

        info!(
            event = "solve_start",
            algorithm = "Backtracking",
            n = n as u64,
        );

        let mut search = Search::new(n, &self.termination);
        let status = match search.place_row(0) {
            Descent::Complete => SolveStatus::Solved,
            Descent::DeadEnd => SolveStatus::NoSolution,
            Descent::Aborted => SolveStatus::Cancelled,
        };
        let counters = SearchCounters::Backtracking {
            backtracks: search.backtracks,
            max_depth: search.max_depth,
        };
        let result = search.scope.finish(status, counters);

        info!(
            event = "solve_end",
            algorithm = "Backtracking",
            status = %status,
            steps = result.metrics.steps_count as u64,
            backtracks = search.backtracks,
            max_depth = search.max_depth as u64,
            duration_ms = result.metrics.runtime.as_millis() as u64,
        );

        Ok(result)
    }
}

enum Descent {
    /// Every row holds a queen.
    Complete,
    /// No column in this row leads to a solution.
    DeadEnd,
    /// Termination fired.
    Aborted,
}

/// Mutable search state for one call.
struct Search<'t, T> {
    n: usize,
    occupancy: Occupancy,
    queens: Vec<Position>,
    scope: SolverScope,
    termination: &'t T,
    backtracks: u64,
    max_depth: usize,
}

impl<'t, T: Termination> Search<'t, T> {
    fn new(n: usize, termination: &'t T) -> Self {
        Self {
            n,
            occupancy: Occupancy::new(n),
            queens: Vec::with_capacity(n),
            scope: SolverScope::new(),
            termination,
            backtracks: 0,
            max_depth: 0,
        }
    }

    fn place_row(&mut self, row: usize) -> Descent {
        self.max_depth = self.max_depth.max(row);
        if row == self.n {
            return Descent::Complete;
        }

        for col in 0..self.n {
            if self.termination.is_terminated(&self.scope) {
                return Descent::Aborted;
            }
            if !self.occupancy.is_free(row, col) {
                continue;
            }

            self.occupancy.occupy(row, col);
            self.queens.push(Position::new(row, col));
            self.record();

            match self.place_row(row + 1) {
                Descent::DeadEnd => {}
                outcome => return outcome,
            }

            self.queens.pop();
            self.occupancy.release(row, col);
            self.backtracks += 1;
            self.record();
        }

        Descent::DeadEnd
    }

    fn record(&mut self) {
        self.scope.record_visit();
        self.scope.record_step(Step::new(&self.queens));
        trace!(
            event = "step",
            step = self.scope.total_step_count(),
            depth = self.queens.len() as u64,
        );
    }
}

#[cfg(test)]
mod tests;
