//! Run metrics and outcome classification.

use std::fmt;
use std::time::Duration;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{DEFAULT_BACKTRACKING_MAX_BOARD_SIZE, DEFAULT_HILL_CLIMBING_MAX_BOARD_SIZE};

/// Search strategy that produced a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Algorithm {
    /// Depth-first search with undo.
    #[default]
    Backtracking,
    /// Steepest-ascent local search with random restarts.
    HillClimbing,
}

impl Algorithm {
    pub fn name(&self) -> &'static str {
        match self {
            Algorithm::Backtracking => "Backtracking",
            Algorithm::HillClimbing => "Hill Climbing",
        }
    }

    /// Largest board this engine accepts without an explicit limit.
    pub fn default_max_board_size(&self) -> usize {
        match self {
            Algorithm::Backtracking => DEFAULT_BACKTRACKING_MAX_BOARD_SIZE,
            Algorithm::HillClimbing => DEFAULT_HILL_CLIMBING_MAX_BOARD_SIZE,
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Why the final hill-climbing restart gave up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum FailureReason {
    /// Too many sideways moves without improvement.
    Plateau,
    /// A board state recurred inside the detection window.
    Cycle,
    /// Every neighbor was strictly worse.
    Stuck,
}

impl fmt::Display for FailureReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailureReason::Plateau => write!(f, "plateau"),
            FailureReason::Cycle => write!(f, "cycle"),
            FailureReason::Stuck => write!(f, "stuck"),
        }
    }
}

/// Outcome of a solver invocation.
///
/// None of these are errors; every variant comes with a complete trace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum SolveStatus {
    /// A non-attacking placement was found.
    Solved,
    /// Backtracking exhausted the search space: no solution exists.
    NoSolution,
    /// Hill climbing used its whole restart budget.
    Exhausted(FailureReason),
    /// A termination condition stopped the search early.
    Cancelled,
}

impl SolveStatus {
    pub fn is_success(&self) -> bool {
        matches!(self, SolveStatus::Solved)
    }

    pub fn failure_reason(&self) -> Option<FailureReason> {
        match self {
            SolveStatus::Exhausted(reason) => Some(*reason),
            _ => None,
        }
    }
}

impl fmt::Display for SolveStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SolveStatus::Solved => write!(f, "solved"),
            SolveStatus::NoSolution => write!(f, "no solution"),
            SolveStatus::Exhausted(reason) => write!(f, "exhausted ({reason})"),
            SolveStatus::Cancelled => write!(f, "cancelled"),
        }
    }
}

/// Algorithm-specific counters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "algorithm", rename_all = "snake_case"))]
pub enum SearchCounters {
    Backtracking {
        /// Number of queen removals.
        backtracks: u64,
        /// Deepest row index reached.
        max_depth: usize,
    },
    HillClimbing {
        /// Failed attempts before success or exhaustion.
        restarts: u32,
    },
}

/// Summary of one solver run, finalized when the run returns.
///
/// # Example
///
/// ```
/// use std::time::Duration;
/// use queensforge_core::{FailureReason, Metrics, SearchCounters, SolveStatus};
///
/// let metrics = Metrics {
///     runtime: Duration::from_millis(3),
///     steps_count: 120,
///     visited_states: 5_600,
///     conflict_trend: vec![7, 4, 2, 2],
///     status: SolveStatus::Exhausted(FailureReason::Plateau),
///     counters: SearchCounters::HillClimbing { restarts: 101 },
/// };
///
/// assert!(!metrics.success());
/// assert_eq!(metrics.failure_reason(), Some(FailureReason::Plateau));
/// assert_eq!(metrics.restarts(), Some(101));
/// assert_eq!(metrics.backtracks(), None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Metrics {
    /// Wall-clock duration of the whole call.
    pub runtime: Duration,
    /// Length of the trace.
    pub steps_count: usize,
    /// Number of board states examined.
    pub visited_states: u64,
    /// Conflict count of every accepted hill-climbing state, across restarts.
    pub conflict_trend: Vec<usize>,
    pub status: SolveStatus,
    pub counters: SearchCounters,
}

impl Metrics {
    pub fn success(&self) -> bool {
        self.status.is_success()
    }

    pub fn failure_reason(&self) -> Option<FailureReason> {
        self.status.failure_reason()
    }

    pub fn algorithm(&self) -> Algorithm {
        match self.counters {
            SearchCounters::Backtracking { .. } => Algorithm::Backtracking,
            SearchCounters::HillClimbing { .. } => Algorithm::HillClimbing,
        }
    }

    pub fn runtime_ms(&self) -> f64 {
        self.runtime.as_secs_f64() * 1000.0
    }

    pub fn backtracks(&self) -> Option<u64> {
        match self.counters {
            SearchCounters::Backtracking { backtracks, .. } => Some(backtracks),
            SearchCounters::HillClimbing { .. } => None,
        }
    }

    pub fn max_depth(&self) -> Option<usize> {
        match self.counters {
            SearchCounters::Backtracking { max_depth, .. } => Some(max_depth),
            SearchCounters::HillClimbing { .. } => None,
        }
    }

    pub fn restarts(&self) -> Option<u32> {
        match self.counters {
            SearchCounters::HillClimbing { restarts } => Some(restarts),
            SearchCounters::Backtracking { .. } => None,
        }
    }

    /// Returns a copy with `runtime` zeroed, for comparing runs.
    pub fn without_runtime(&self) -> Self {
        Self {
            runtime: Duration::ZERO,
            ..self.clone()
        }
    }
}
