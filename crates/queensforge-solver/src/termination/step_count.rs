//! Cap on the length of the recorded trace.

use super::Termination;
use crate::scope::SolverScope;

/// Stops the search once the trace holds `limit` steps.
///
/// Every recorded step counts: backtracking placements and removals, hill
/// climbing boards, and the empty markers that close failed restarts. The
/// check runs before the next step is produced, so a cancelled trace holds
/// at least `limit` steps and may overshoot by the steps one engine move
/// records.
///
/// # Example
///
/// ```
/// use queensforge_core::SolveStatus;
/// use queensforge_solver::termination::StepCountTermination;
/// use queensforge_solver::BacktrackingSolver;
///
/// // Eight queens takes 218 steps to solve; stop well short of that.
/// let solver = BacktrackingSolver::new().with_termination(StepCountTermination::new(50));
/// let result = solver.solve(8).unwrap();
///
/// assert_eq!(result.metrics.status, SolveStatus::Cancelled);
/// assert!(result.trace.len() >= 50 && result.trace.len() < 218);
/// ```
#[derive(Debug, Clone)]
pub struct StepCountTermination {
    limit: u64,
}

impl StepCountTermination {
    pub fn new(limit: u64) -> Self {
        Self { limit }
    }

    pub fn limit(&self) -> u64 {
        self.limit
    }
}

impl Termination for StepCountTermination {
    fn is_terminated(&self, solver_scope: &SolverScope) -> bool {
        solver_scope.total_step_count() >= self.limit
    }
}
