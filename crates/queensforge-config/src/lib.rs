//! Configuration system for QueensForge.
//!
//! Load search configuration from TOML or YAML files to control the board
//! size limit, the random seed, termination, and hill-climbing parameters
//! without code changes.
//!
//! # Examples
//!
//! Load configuration from TOML string:
//!
//! ```
//! use queensforge_config::SolverConfig;
//! use std::time::Duration;
//!
//! let config = SolverConfig::from_toml_str(r#"
//!     random_seed = 7
//!
//!     [termination]
//!     seconds_spent_limit = 30
//!
//!     [hill_climbing]
//!     max_restarts = 20
//!     allow_sideways = false
//! "#).unwrap();
//!
//! assert_eq!(config.time_limit(), Some(Duration::from_secs(30)));
//! assert_eq!(config.hill_climbing.max_restarts, 20);
//! assert_eq!(config.hill_climbing.sideways_limit, 200);
//! ```
//!
//! Use default config when file is missing:
//!
//! ```
//! use queensforge_config::SolverConfig;
//!
//! let config = SolverConfig::load("queens.toml").unwrap_or_default();
//! // Proceeds with defaults if file doesn't exist
//! ```

use std::path::Path;
use std::time::Duration;

use queensforge_core::Algorithm;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration error
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Main solver configuration.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct SolverConfig {
    /// Random seed for reproducible hill-climbing runs.
    #[serde(default)]
    pub random_seed: Option<u64>,

    /// Largest accepted board size. When unset, each engine applies its
    /// own default.
    #[serde(default)]
    pub max_board_size: Option<usize>,

    /// Termination configuration.
    #[serde(default)]
    pub termination: Option<TerminationConfig>,

    /// Hill-climbing parameters.
    #[serde(default)]
    pub hill_climbing: HillClimbingConfig,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            random_seed: None,
            max_board_size: None,
            termination: None,
            hill_climbing: HillClimbingConfig::default(),
        }
    }
}

impl SolverConfig {
    /// Creates a new default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns error if file doesn't exist, contains invalid TOML, or fails
    /// validation.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        Self::from_toml_file(path)
    }

    /// Loads configuration from a TOML file.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Parses configuration from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Loads configuration from a YAML file.
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&contents)
    }

    /// Parses configuration from a YAML string.
    pub fn from_yaml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_yaml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks invariants serde cannot express.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_board_size == Some(0) {
            return Err(ConfigError::Invalid(
                "max_board_size must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    /// Sets the termination time limit.
    pub fn with_termination_seconds(mut self, seconds: u64) -> Self {
        self.termination = Some(TerminationConfig {
            seconds_spent_limit: Some(seconds),
            ..self.termination.unwrap_or_default()
        });
        self
    }

    /// Sets the termination step limit.
    pub fn with_step_count_limit(mut self, steps: u64) -> Self {
        self.termination = Some(TerminationConfig {
            step_count_limit: Some(steps),
            ..self.termination.unwrap_or_default()
        });
        self
    }

    /// Sets the random seed.
    pub fn with_random_seed(mut self, seed: u64) -> Self {
        self.random_seed = Some(seed);
        self
    }

    /// Sets the largest accepted board size.
    pub fn with_max_board_size(mut self, max: usize) -> Self {
        self.max_board_size = Some(max);
        self
    }

    /// Returns the largest board `algorithm` accepts under this config.
    pub fn max_board_size_for(&self, algorithm: Algorithm) -> usize {
        self.max_board_size
            .unwrap_or_else(|| algorithm.default_max_board_size())
    }

    /// Replaces the hill-climbing parameters.
    pub fn with_hill_climbing(mut self, hill_climbing: HillClimbingConfig) -> Self {
        self.hill_climbing = hill_climbing;
        self
    }

    /// Returns the termination time limit, if configured.
    ///
    /// Convenience method that delegates to `termination.time_limit()`.
    pub fn time_limit(&self) -> Option<Duration> {
        self.termination.as_ref().and_then(|t| t.time_limit())
    }

    /// Returns the termination step limit, if configured.
    pub fn step_count_limit(&self) -> Option<u64> {
        self.termination.as_ref().and_then(|t| t.step_count_limit)
    }
}

/// Termination configuration.
///
/// A fired termination ends the search cooperatively with a `Cancelled`
/// status and the trace recorded so far.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct TerminationConfig {
    /// Maximum seconds to spend solving.
    pub seconds_spent_limit: Option<u64>,

    /// Maximum milliseconds to spend solving.
    pub millis_spent_limit: Option<u64>,

    /// Maximum number of recorded steps.
    pub step_count_limit: Option<u64>,
}

impl TerminationConfig {
    /// Returns the combined time limit, if any.
    ///
    /// Seconds and milliseconds add up; a sum beyond `Duration::MAX`
    /// saturates.
    pub fn time_limit(&self) -> Option<Duration> {
        let seconds = Duration::from_secs(self.seconds_spent_limit.unwrap_or(0));
        let millis = Duration::from_millis(self.millis_spent_limit.unwrap_or(0));
        let limit = seconds.saturating_add(millis);
        if limit.is_zero() {
            None
        } else {
            Some(limit)
        }
    }
}

/// Hill-climbing configuration.
///
/// Every field may be omitted from a file and falls back to its default.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, rename_all = "snake_case")]
pub struct HillClimbingConfig {
    /// Restarts allowed after the first attempt.
    pub max_restarts: u32,

    /// Whether equally scored neighbors may be accepted.
    pub allow_sideways: bool,

    /// Climbing steps allowed per restart.
    pub max_steps_per_restart: u32,

    /// Consecutive sideways moves tolerated before declaring a plateau.
    pub sideways_limit: u32,

    /// Number of recent states remembered for cycle detection.
    pub cycle_window_size: usize,
}

impl Default for HillClimbingConfig {
    fn default() -> Self {
        Self {
            max_restarts: 100,
            allow_sideways: true,
            max_steps_per_restart: 3000,
            sideways_limit: 200,
            cycle_window_size: 100,
        }
    }
}

impl HillClimbingConfig {
    /// Creates the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_max_restarts(mut self, max_restarts: u32) -> Self {
        self.max_restarts = max_restarts;
        self
    }

    pub fn with_allow_sideways(mut self, allow_sideways: bool) -> Self {
        self.allow_sideways = allow_sideways;
        self
    }

    pub fn with_max_steps_per_restart(mut self, steps: u32) -> Self {
        self.max_steps_per_restart = steps;
        self
    }

    pub fn with_sideways_limit(mut self, limit: u32) -> Self {
        self.sideways_limit = limit;
        self
    }

    pub fn with_cycle_window_size(mut self, size: usize) -> Self {
        self.cycle_window_size = size;
        self
    }

    /// Total attempts the restart loop may make.
    pub fn max_attempts(&self) -> u64 {
        u64::from(self.max_restarts) + 1
    }
}
