//! Benchmark runner.

use queensforge_config::SolverConfig;
use queensforge_core::{Algorithm, Result};
use queensforge_solver::{BacktrackingSolver, HillClimbingSolver, SolveResult};
use rayon::prelude::*;
use tracing::info;

use crate::config::BenchmarkConfig;
use crate::result::{BenchmarkResult, BenchmarkRun};

/// Benchmark runner.
///
/// Executes one engine against one board size multiple times, collecting
/// the metrics of each run. Hill-climbing run `i` is seeded with
/// [`BenchmarkConfig::seed_for_run`], so results are reproducible whether
/// runs execute sequentially or in parallel.
#[derive(Debug, Clone)]
pub struct Benchmark {
    config: BenchmarkConfig,
    algorithm: Algorithm,
    n: usize,
    solver_config: SolverConfig,
}

impl Benchmark {
    /// Creates a new benchmark.
    ///
    /// # Arguments
    ///
    /// * `config` - Benchmark configuration (warmup count, run count, etc.)
    /// * `algorithm` - Engine to measure
    /// * `n` - Board size
    /// * `solver_config` - Engine settings; its `random_seed` is ignored
    pub fn new(
        config: BenchmarkConfig,
        algorithm: Algorithm,
        n: usize,
        solver_config: SolverConfig,
    ) -> Self {
        Self {
            config,
            algorithm,
            n,
            solver_config,
        }
    }

    pub fn config(&self) -> &BenchmarkConfig {
        &self.config
    }

    /// Runs the benchmark and returns aggregated results.
    ///
    /// Executes warmup runs first (not measured), then measurement runs.
    ///
    /// # Errors
    ///
    /// Returns the engine's error if the board size is rejected.
    pub fn run(&self) -> Result<BenchmarkResult> {
        info!(
            event = "benchmark_start",
            algorithm = self.algorithm.name(),
            n = self.n as u64,
            runs = self.config.run_count() as u64,
        );

        for warmup in 0..self.config.warmup_count() {
            self.run_once(self.config.seed_for_run(warmup))?;
        }

        let seeds: Vec<u64> = (0..self.config.run_count())
            .map(|i| self.config.seed_for_run(i))
            .collect();
        let solved: Vec<SolveResult> = if self.config.parallel() {
            seeds
                .par_iter()
                .map(|&seed| self.run_once(seed))
                .collect::<Result<_>>()?
        } else {
            seeds
                .iter()
                .map(|&seed| self.run_once(seed))
                .collect::<Result<_>>()?
        };

        let mut result = BenchmarkResult::new(self.config.name(), self.algorithm, self.n);
        for (run_index, (seed, solve)) in seeds.into_iter().zip(solved).enumerate() {
            let seed = match self.algorithm {
                Algorithm::HillClimbing => Some(seed),
                Algorithm::Backtracking => None,
            };
            result.add_run(BenchmarkRun::new(run_index, seed, solve.metrics));
        }

        Ok(result)
    }

    /// Executes a single run.
    fn run_once(&self, seed: u64) -> Result<SolveResult> {
        let max = self.solver_config.max_board_size_for(self.algorithm);
        match self.algorithm {
            Algorithm::Backtracking => BacktrackingSolver::new()
                .with_max_board_size(max)
                .solve(self.n),
            Algorithm::HillClimbing => {
                HillClimbingSolver::seeded(self.solver_config.hill_climbing.clone(), seed)
                    .with_max_board_size(max)
                    .solve(self.n)
            }
        }
    }
}

/// Builder for creating benchmarks with fluent API.
#[derive(Debug, Clone)]
pub struct BenchmarkBuilder {
    config: BenchmarkConfig,
    algorithm: Algorithm,
    n: usize,
    solver_config: SolverConfig,
}

impl BenchmarkBuilder {
    /// Creates a builder for an 8-queens backtracking benchmark.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            config: BenchmarkConfig::new(name),
            algorithm: Algorithm::Backtracking,
            n: 8,
            solver_config: SolverConfig::default(),
        }
    }

    pub fn with_algorithm(mut self, algorithm: Algorithm) -> Self {
        self.algorithm = algorithm;
        self
    }

    pub fn with_board_size(mut self, n: usize) -> Self {
        self.n = n;
        self
    }

    pub fn with_solver_config(mut self, solver_config: SolverConfig) -> Self {
        self.solver_config = solver_config;
        self
    }

    /// Sets the warmup count.
    pub fn with_warmup_count(mut self, count: usize) -> Self {
        self.config = self.config.with_warmup_count(count);
        self
    }

    /// Sets the run count.
    pub fn with_run_count(mut self, count: usize) -> Self {
        self.config = self.config.with_run_count(count);
        self
    }

    pub fn with_base_seed(mut self, seed: u64) -> Self {
        self.config = self.config.with_base_seed(seed);
        self
    }

    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.config = self.config.with_parallel(parallel);
        self
    }

    pub fn build(self) -> Benchmark {
        Benchmark::new(self.config, self.algorithm, self.n, self.solver_config)
    }
}
