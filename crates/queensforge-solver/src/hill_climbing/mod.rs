//! Steepest-ascent hill climbing with random restarts.
//!
//! Each restart begins from a random one-queen-per-column board and
//! repeatedly moves the single queen whose relocation lowers the conflict
//! count the most. Sideways moves, a bounded cycle window and a per-restart
//! step budget keep a restart from wandering forever; a failed restart is
//! closed with an empty restart marker in the trace.
//!
//! Runs are reproducible: the engine draws all randomness from the
//! generator it is given, so a seeded generator yields an identical trace.

mod climb;
mod cycle;

use queensforge_config::HillClimbingConfig;
use queensforge_core::error::{validate_board_size, Result};
use queensforge_core::{
    SearchCounters, SolveStatus, Step, DEFAULT_HILL_CLIMBING_MAX_BOARD_SIZE,
};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::{debug, info};

use crate::result::SolveResult;
use crate::scope::SolverScope;
use crate::termination::{NoTermination, Termination};

use climb::{climb, ClimbOutcome};

/// Solves `n`-queens by hill climbing, drawing randomness from `rng`.
///
/// # Errors
///
/// Returns [`QueensError::InvalidInput`] if `n` is zero or above
/// [`DEFAULT_HILL_CLIMBING_MAX_BOARD_SIZE`].
///
/// [`QueensError::InvalidInput`]: queensforge_core::QueensError::InvalidInput
///
/// # Example
///
/// ```
/// use queensforge_solver::{solve_hill_climbing, HillClimbingConfig};
/// use rand::SeedableRng;
/// use rand_chacha::ChaCha8Rng;
///
/// let mut rng = ChaCha8Rng::seed_from_u64(42);
/// let result = solve_hill_climbing(8, &HillClimbingConfig::default(), &mut rng).unwrap();
/// assert!(result.success());
/// assert_eq!(result.metrics.conflict_trend.last(), Some(&0));
/// ```
pub fn solve_hill_climbing<R: Rng + ?Sized>(
    n: usize,
    config: &HillClimbingConfig,
    rng: &mut R,
) -> Result<SolveResult> {
    validate_board_size(n, DEFAULT_HILL_CLIMBING_MAX_BOARD_SIZE)?;
    Ok(run(n, config, rng, &NoTermination))
}

/// Configurable hill-climbing engine.
///
/// # Type Parameters
/// * `R` - The random number generator
/// * `T` - The termination polled before every restart and every step
///
/// # Example
///
/// ```
/// use queensforge_solver::{HillClimbingConfig, HillClimbingSolver};
///
/// let config = HillClimbingConfig::default().with_max_restarts(3);
/// let mut solver = HillClimbingSolver::seeded(config, 7);
/// let result = solver.solve(3).unwrap();
///
/// assert!(!result.success());
/// assert_eq!(result.metrics.restarts(), Some(4));
/// assert!(result.metrics.failure_reason().is_some());
/// ```
#[derive(Debug, Clone)]
pub struct HillClimbingSolver<R = ChaCha8Rng, T = NoTermination> {
    config: HillClimbingConfig,
    rng: R,
    termination: T,
    max_board_size: usize,
}

impl HillClimbingSolver<ChaCha8Rng, NoTermination> {
    /// Creates an engine seeded from the operating system.
    pub fn new(config: HillClimbingConfig) -> Self {
        Self::with_rng(config, ChaCha8Rng::from_os_rng())
    }

    /// Creates a reproducible engine.
    pub fn seeded(config: HillClimbingConfig, seed: u64) -> Self {
        Self::with_rng(config, ChaCha8Rng::seed_from_u64(seed))
    }
}

impl<R: Rng> HillClimbingSolver<R, NoTermination> {
    /// Creates an engine drawing from `rng`.
    pub fn with_rng(config: HillClimbingConfig, rng: R) -> Self {
        Self {
            config,
            rng,
            termination: NoTermination,
            max_board_size: DEFAULT_HILL_CLIMBING_MAX_BOARD_SIZE,
        }
    }
}

impl<R: Rng, T: Termination> HillClimbingSolver<R, T> {
    /// Sets the termination condition.
    pub fn with_termination<U: Termination>(self, termination: U) -> HillClimbingSolver<R, U> {
        HillClimbingSolver {
            config: self.config,
            rng: self.rng,
            termination,
            max_board_size: self.max_board_size,
        }
    }

    /// Sets the largest accepted board size.
    pub fn with_max_board_size(mut self, max_board_size: usize) -> Self {
        self.max_board_size = max_board_size;
        self
    }

    pub fn config(&self) -> &HillClimbingConfig {
        &self.config
    }

    /// Runs restarts on an `n`×`n` board.
    ///
    /// The generator advances, so calling `solve` twice explores different
    /// boards.
    pub fn solve(&mut self, n: usize) -> Result<SolveResult> {
        validate_board_size(n, self.max_board_size)?;
        Ok(run(n, &self.config, &mut self.rng, &self.termination))
    }
}

fn run<R, T>(n: usize, config: &HillClimbingConfig, rng: &mut R, termination: &T) -> SolveResult
where
    R: Rng + ?Sized,
    T: Termination + ?Sized,
{
    info!(
        event = "solve_start",
        algorithm = "Hill Climbing",
        n = n as u64,
        max_restarts = config.max_restarts,
        allow_sideways = config.allow_sideways,
    );

    let mut scope = SolverScope::new();
    let mut restarts: u32 = 0;
    let status = restart_loop(n, config, rng, termination, &mut scope, &mut restarts);
    let result = scope.finish(status, SearchCounters::HillClimbing { restarts });

    info!(
        event = "solve_end",
        algorithm = "Hill Climbing",
        status = %status,
        steps = result.metrics.steps_count as u64,
        restarts = restarts,
        visited = result.metrics.visited_states,
        duration_ms = result.metrics.runtime.as_millis() as u64,
    );

    result
}

fn restart_loop<R, T>(
    n: usize,
    config: &HillClimbingConfig,
    rng: &mut R,
    termination: &T,
    scope: &mut SolverScope,
    restarts: &mut u32,
) -> SolveStatus
where
    R: Rng + ?Sized,
    T: Termination + ?Sized,
{
    let max_attempts = config.max_attempts();
    let mut attempt: u64 = 0;

    loop {
        if termination.is_terminated(scope) {
            return SolveStatus::Cancelled;
        }

        match climb(n, config, rng, scope, termination) {
            ClimbOutcome::Solved => return SolveStatus::Solved,
            ClimbOutcome::Cancelled => return SolveStatus::Cancelled,
            ClimbOutcome::Failed(reason) => {
                attempt += 1;
                *restarts += 1;
                scope.record_step(Step::restart_marker());

                debug!(
                    event = "restart",
                    attempt = attempt,
                    reason = %reason,
                    steps = scope.total_step_count(),
                );

                if attempt >= max_attempts {
                    return SolveStatus::Exhausted(reason);
                }
            }
        }
    }
}
