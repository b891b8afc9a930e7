//! Wall-clock budget for a whole solve call.

use std::time::Duration;

use super::Termination;
use crate::scope::SolverScope;

/// Stops the search once the solve call has run for `limit`.
///
/// The clock starts when the engine opens its scope, so hill climbing
/// shares one budget across all restarts rather than one per restart.
/// Backtracking polls it before each column; hill climbing before each
/// restart and each climbing step.
///
/// # Example
///
/// ```
/// use std::time::Duration;
/// use queensforge_core::SolveStatus;
/// use queensforge_solver::termination::TimeTermination;
/// use queensforge_solver::BacktrackingSolver;
///
/// // An exhausted budget cancels before the first queen is placed.
/// let solver = BacktrackingSolver::new().with_termination(TimeTermination::new(Duration::ZERO));
/// let result = solver.solve(8).unwrap();
///
/// assert_eq!(result.metrics.status, SolveStatus::Cancelled);
/// assert!(result.trace.is_empty());
/// ```
#[derive(Debug, Clone)]
pub struct TimeTermination {
    limit: Duration,
}

impl TimeTermination {
    pub fn new(limit: Duration) -> Self {
        Self { limit }
    }

    pub fn millis(ms: u64) -> Self {
        Self::new(Duration::from_millis(ms))
    }

    pub fn seconds(secs: u64) -> Self {
        Self::new(Duration::from_secs(secs))
    }

    pub fn limit(&self) -> Duration {
        self.limit
    }
}

impl Termination for TimeTermination {
    fn is_terminated(&self, solver_scope: &SolverScope) -> bool {
        solver_scope.elapsed() >= self.limit
    }
}
