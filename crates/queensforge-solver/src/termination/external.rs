//! External termination via AtomicBool flag.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use super::Termination;
use crate::scope::SolverScope;

/// Terminates when an external flag is set.
///
/// Allows another thread to abort a running search by setting a shared
/// `AtomicBool`.
///
/// # Example
///
/// ```
/// use std::sync::atomic::{AtomicBool, Ordering};
/// use std::sync::Arc;
/// use queensforge_solver::termination::ExternalTermination;
///
/// let flag = Arc::new(AtomicBool::new(false));
/// let term = ExternalTermination::new(Arc::clone(&flag));
///
/// // Later, from any thread:
/// flag.store(true, Ordering::SeqCst);
/// assert!(term.is_requested());
/// ```
#[derive(Debug, Clone)]
pub struct ExternalTermination {
    flag: Arc<AtomicBool>,
}

impl ExternalTermination {
    /// Creates a termination that checks the given flag.
    pub fn new(flag: Arc<AtomicBool>) -> Self {
        Self { flag }
    }

    /// Returns true once the flag has been raised.
    pub fn is_requested(&self) -> bool {
        self.flag.load(Ordering::Relaxed)
    }
}

impl Termination for ExternalTermination {
    fn is_terminated(&self, _solver_scope: &SolverScope) -> bool {
        self.is_requested()
    }
}
