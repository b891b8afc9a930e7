//! Solver output.

use queensforge_core::{Metrics, Step, Trace};

/// Complete output of one engine invocation.
///
/// Consumers replay `trace` and report `metrics`; neither is fed back into
/// an engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolveResult {
    pub trace: Trace,
    pub metrics: Metrics,
}

impl SolveResult {
    pub fn success(&self) -> bool {
        self.metrics.success()
    }

    /// The solved board, if the run succeeded.
    pub fn solution(&self) -> Option<&Step> {
        if self.success() {
            self.trace.final_board()
        } else {
            None
        }
    }
}
