//! Termination conditions for cooperative cancellation.
//!
//! Engines poll their termination before every unit of work (a column
//! attempt in backtracking, a restart or climbing step in hill climbing).
//! A fired termination ends the run with [`SolveStatus::Cancelled`] and the
//! trace recorded so far.
//!
//! [`SolveStatus::Cancelled`]: queensforge_core::SolveStatus::Cancelled

mod composite;
mod external;
mod step_count;
mod time;

use std::fmt::Debug;

use crate::scope::SolverScope;

pub use composite::OrTermination;
pub use external::ExternalTermination;
pub use step_count::StepCountTermination;
pub use time::TimeTermination;

/// Trait for determining when to stop searching.
pub trait Termination: Send + Debug {
    /// Returns true if searching should stop.
    fn is_terminated(&self, solver_scope: &SolverScope) -> bool;
}

/// Never terminates.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoTermination;

impl Termination for NoTermination {
    fn is_terminated(&self, _solver_scope: &SolverScope) -> bool {
        false
    }
}

impl<T: Termination> Termination for Option<T> {
    fn is_terminated(&self, solver_scope: &SolverScope) -> bool {
        match self {
            Some(t) => t.is_terminated(solver_scope),
            None => false,
        }
    }
}

impl<T: Termination + ?Sized> Termination for Box<T> {
    fn is_terminated(&self, solver_scope: &SolverScope) -> bool {
        (**self).is_terminated(solver_scope)
    }
}
