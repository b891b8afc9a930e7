//! Solver entry point that wires configuration into the engines.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use queensforge_config::SolverConfig;
use queensforge_core::{Algorithm, Result};
use queensforge_solver::termination::{
    ExternalTermination, OrTermination, StepCountTermination, TimeTermination,
};
use queensforge_solver::{BacktrackingSolver, HillClimbingSolver, SolveResult};
use tracing::debug;

type ConfiguredTermination = OrTermination<(
    Option<TimeTermination>,
    Option<StepCountTermination>,
    Option<ExternalTermination>,
)>;

/// Solves `n`-queens with `algorithm` under `config`.
///
/// # Errors
///
/// Returns [`QueensError::InvalidInput`] if `n` is zero or above
/// `config.max_board_size_for(algorithm)`.
///
/// [`QueensError::InvalidInput`]: queensforge_core::QueensError::InvalidInput
///
/// # Example
///
/// ```
/// use queensforge::{solve, Algorithm, SolverConfig};
///
/// let config = SolverConfig::new().with_random_seed(42);
/// let first = solve(8, Algorithm::HillClimbing, &config).unwrap();
/// let again = solve(8, Algorithm::HillClimbing, &config).unwrap();
///
/// assert!(first.success());
/// assert_eq!(first.trace, again.trace);
/// ```
pub fn solve(n: usize, algorithm: Algorithm, config: &SolverConfig) -> Result<SolveResult> {
    Solver::new(config.clone()).solve(n, algorithm)
}

/// Configured solver with an optional external cancel flag.
///
/// The flag is shared: setting it from another thread stops a running
/// search at its next termination check.
///
/// # Example
///
/// ```
/// use std::sync::atomic::{AtomicBool, Ordering};
/// use std::sync::Arc;
/// use queensforge::{Algorithm, SolveStatus, Solver, SolverConfig};
///
/// let flag = Arc::new(AtomicBool::new(false));
/// let solver = Solver::new(SolverConfig::default()).with_cancel_flag(flag.clone());
///
/// flag.store(true, Ordering::SeqCst);
/// let result = solver.solve(8, Algorithm::Backtracking).unwrap();
/// assert_eq!(result.metrics.status, SolveStatus::Cancelled);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Solver {
    config: SolverConfig,
    cancel_flag: Option<Arc<AtomicBool>>,
}

impl Solver {
    pub fn new(config: SolverConfig) -> Self {
        Self {
            config,
            cancel_flag: None,
        }
    }

    /// Loads `queens.toml` from the working directory, falling back to
    /// defaults when it is missing or invalid.
    pub fn from_default_config() -> Self {
        Self::new(SolverConfig::load("queens.toml").unwrap_or_default())
    }

    /// Attaches an external cancel flag.
    pub fn with_cancel_flag(mut self, flag: Arc<AtomicBool>) -> Self {
        self.cancel_flag = Some(flag);
        self
    }

    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    /// Requests cancellation through the attached flag, if any.
    pub fn cancel(&self) {
        if let Some(flag) = &self.cancel_flag {
            flag.store(true, Ordering::SeqCst);
        }
    }

    /// Runs `algorithm` on an `n`×`n` board.
    pub fn solve(&self, n: usize, algorithm: Algorithm) -> Result<SolveResult> {
        #[cfg(feature = "console")]
        queensforge_console::init();

        debug!(
            event = "configure",
            algorithm = algorithm.name(),
            max_board_size = self.config.max_board_size_for(algorithm) as u64,
            seeded = self.config.random_seed.is_some(),
        );

        match algorithm {
            Algorithm::Backtracking => self.solve_backtracking(n),
            Algorithm::HillClimbing => self.solve_hill_climbing(n),
        }
    }

    pub fn solve_backtracking(&self, n: usize) -> Result<SolveResult> {
        BacktrackingSolver::new()
            .with_termination(self.termination())
            .with_max_board_size(self.config.max_board_size_for(Algorithm::Backtracking))
            .solve(n)
    }

    /// Runs hill climbing, seeded from `random_seed` when configured.
    pub fn solve_hill_climbing(&self, n: usize) -> Result<SolveResult> {
        let hill_climbing = self.config.hill_climbing.clone();
        let solver = match self.config.random_seed {
            Some(seed) => HillClimbingSolver::seeded(hill_climbing, seed),
            None => HillClimbingSolver::new(hill_climbing),
        };
        solver
            .with_termination(self.termination())
            .with_max_board_size(self.config.max_board_size_for(Algorithm::HillClimbing))
            .solve(n)
    }

    fn termination(&self) -> ConfiguredTermination {
        OrTermination::new((
            self.config.time_limit().map(TimeTermination::new),
            self.config
                .step_count_limit()
                .map(StepCountTermination::new),
            self.cancel_flag.clone().map(ExternalTermination::new),
        ))
    }
}
