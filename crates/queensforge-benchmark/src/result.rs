//! Benchmark result types.

use std::time::Duration;

use queensforge_core::{Algorithm, FailureReason, Metrics, SolveStatus};

/// Result of a single benchmark run.
///
/// Keeps the full metrics of one engine invocation; the trace is dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BenchmarkRun {
    /// Run index (0-based).
    pub run_index: usize,
    /// Seed the run was started with. `None` for backtracking.
    pub seed: Option<u64>,
    pub metrics: Metrics,
}

impl BenchmarkRun {
    pub fn new(run_index: usize, seed: Option<u64>, metrics: Metrics) -> Self {
        Self {
            run_index,
            seed,
            metrics,
        }
    }

    /// Total solve time.
    pub fn solve_time(&self) -> Duration {
        self.metrics.runtime
    }

    pub fn success(&self) -> bool {
        self.metrics.success()
    }

    /// Returns examined board states per second.
    ///
    /// # Example
    ///
    /// ```
    /// use std::time::Duration;
    /// use queensforge_benchmark::BenchmarkRun;
    /// use queensforge_core::{Metrics, SearchCounters, SolveStatus};
    ///
    /// let run = BenchmarkRun::new(
    ///     0,
    ///     Some(1),
    ///     Metrics {
    ///         runtime: Duration::from_secs(2),
    ///         steps_count: 10,
    ///         visited_states: 1000,
    ///         conflict_trend: vec![3, 1, 0],
    ///         status: SolveStatus::Solved,
    ///         counters: SearchCounters::HillClimbing { restarts: 0 },
    ///     },
    /// );
    ///
    /// assert!((run.states_per_second() - 500.0).abs() < 0.001);
    /// ```
    pub fn states_per_second(&self) -> f64 {
        if self.metrics.runtime.is_zero() {
            0.0
        } else {
            self.metrics.visited_states as f64 / self.metrics.runtime.as_secs_f64()
        }
    }
}

/// Aggregated results from multiple benchmark runs.
#[derive(Debug, Clone)]
pub struct BenchmarkResult {
    /// Benchmark name.
    pub name: String,
    pub algorithm: Algorithm,
    /// Board size.
    pub n: usize,
    /// Individual runs, ordered by run index.
    pub runs: Vec<BenchmarkRun>,
}

impl BenchmarkResult {
    /// Creates an empty benchmark result.
    pub fn new(name: impl Into<String>, algorithm: Algorithm, n: usize) -> Self {
        Self {
            name: name.into(),
            algorithm,
            n,
            runs: Vec::new(),
        }
    }

    /// Adds a run to the results.
    pub fn add_run(&mut self, run: BenchmarkRun) {
        self.runs.push(run);
    }

    pub fn run_count(&self) -> usize {
        self.runs.len()
    }

    /// Number of runs that found a solution.
    pub fn success_count(&self) -> usize {
        self.runs.iter().filter(|r| r.success()).count()
    }

    /// Fraction of runs that found a solution, in `[0, 1]`.
    pub fn success_rate(&self) -> f64 {
        if self.runs.is_empty() {
            return 0.0;
        }
        self.success_count() as f64 / self.runs.len() as f64
    }

    /// Returns the average solve time.
    pub fn avg_solve_time(&self) -> Duration {
        if self.runs.is_empty() {
            return Duration::ZERO;
        }
        let total: Duration = self.runs.iter().map(|r| r.solve_time()).sum();
        total / self.runs.len() as u32
    }

    /// Returns the minimum solve time.
    pub fn min_solve_time(&self) -> Duration {
        self.runs
            .iter()
            .map(|r| r.solve_time())
            .min()
            .unwrap_or(Duration::ZERO)
    }

    /// Returns the maximum solve time.
    pub fn max_solve_time(&self) -> Duration {
        self.runs
            .iter()
            .map(|r| r.solve_time())
            .max()
            .unwrap_or(Duration::ZERO)
    }

    pub fn avg_steps(&self) -> f64 {
        self.average(|r| r.metrics.steps_count as f64)
    }

    pub fn avg_visited_states(&self) -> f64 {
        self.average(|r| r.metrics.visited_states as f64)
    }

    pub fn avg_states_per_second(&self) -> f64 {
        self.average(BenchmarkRun::states_per_second)
    }

    /// Average restart count, for hill-climbing benchmarks.
    pub fn avg_restarts(&self) -> Option<f64> {
        match self.algorithm {
            Algorithm::HillClimbing => {
                Some(self.average(|r| r.metrics.restarts().unwrap_or(0) as f64))
            }
            Algorithm::Backtracking => None,
        }
    }

    /// Average backtrack count, for backtracking benchmarks.
    pub fn avg_backtracks(&self) -> Option<f64> {
        match self.algorithm {
            Algorithm::Backtracking => {
                Some(self.average(|r| r.metrics.backtracks().unwrap_or(0) as f64))
            }
            Algorithm::HillClimbing => None,
        }
    }

    /// How often each failure reason ended an exhausted run.
    ///
    /// Reasons that never occurred are omitted; the order is plateau, cycle,
    /// stuck.
    pub fn failure_counts(&self) -> Vec<(FailureReason, usize)> {
        [
            FailureReason::Plateau,
            FailureReason::Cycle,
            FailureReason::Stuck,
        ]
        .into_iter()
        .map(|reason| {
            let count = self
                .runs
                .iter()
                .filter(|r| r.metrics.failure_reason() == Some(reason))
                .count();
            (reason, count)
        })
        .filter(|&(_, count)| count > 0)
        .collect()
    }

    /// Number of runs stopped by a termination condition.
    pub fn cancelled_count(&self) -> usize {
        self.runs
            .iter()
            .filter(|r| r.metrics.status == SolveStatus::Cancelled)
            .count()
    }

    fn average(&self, f: impl Fn(&BenchmarkRun) -> f64) -> f64 {
        if self.runs.is_empty() {
            return 0.0;
        }
        let total: f64 = self.runs.iter().map(f).sum();
        total / self.runs.len() as f64
    }
}
