//! Solver-level scope.
//!
//! Owns the trace and the shared counters of one invocation. Engines
//! instrument it inline as they search.

use std::time::{Duration, Instant};

use queensforge_core::{Metrics, SearchCounters, SolveStatus, Step, Trace};

use crate::result::SolveResult;

/// Top-level scope for a single solve call.
///
/// # Example
///
/// ```
/// use queensforge_core::{SearchCounters, SolveStatus, Step};
/// use queensforge_solver::SolverScope;
///
/// let mut scope = SolverScope::new();
/// scope.record_step(Step::from_rows(&[0]));
/// scope.record_visit();
///
/// let result = scope.finish(
///     SolveStatus::Solved,
///     SearchCounters::HillClimbing { restarts: 0 },
/// );
/// assert_eq!(result.metrics.steps_count, 1);
/// assert_eq!(result.metrics.visited_states, 1);
/// ```
#[derive(Debug)]
pub struct SolverScope {
    start_time: Instant,
    trace: Trace,
    visited_states: u64,
    conflict_trend: Vec<usize>,
}

impl SolverScope {
    /// Starts the clock and creates an empty trace.
    pub fn new() -> Self {
        Self {
            start_time: Instant::now(),
            trace: Trace::new(),
            visited_states: 0,
            conflict_trend: Vec::new(),
        }
    }

    pub fn elapsed(&self) -> Duration {
        self.start_time.elapsed()
    }

    /// Appends a snapshot to the trace.
    pub fn record_step(&mut self, step: Step) {
        self.trace.push(step);
    }

    /// Appends an accepted state's conflict count to the trend.
    pub fn record_conflicts(&mut self, conflicts: usize) {
        self.conflict_trend.push(conflicts);
    }

    /// Counts one examined board state.
    #[inline]
    pub fn record_visit(&mut self) {
        self.visited_states += 1;
    }

    /// Number of recorded steps so far.
    pub fn total_step_count(&self) -> u64 {
        self.trace.len() as u64
    }

    pub fn visited_states(&self) -> u64 {
        self.visited_states
    }

    pub fn trace(&self) -> &Trace {
        &self.trace
    }

    pub fn conflict_trend(&self) -> &[usize] {
        &self.conflict_trend
    }

    /// Finalizes metrics and hands back the trace.
    pub fn finish(self, status: SolveStatus, counters: SearchCounters) -> SolveResult {
        let runtime = self.elapsed();
        let metrics = Metrics {
            runtime,
            steps_count: self.trace.len(),
            visited_states: self.visited_states,
            conflict_trend: self.conflict_trend,
            status,
            counters,
        };
        SolveResult {
            trace: self.trace,
            metrics,
        }
    }
}

impl Default for SolverScope {
    fn default() -> Self {
        Self::new()
    }
}
