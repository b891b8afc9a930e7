//! Benchmarking harness for QueensForge.
//!
//! Runs one engine repeatedly against one board size, collects the metrics
//! of every run and aggregates them into success rates, timing and
//! failure-reason breakdowns.
//!
//! # Overview
//!
//! The harness allows you to:
//! - Run either engine many times on the same board size
//! - Seed each hill-climbing run from a base seed, so a benchmark is reproducible
//! - Execute warmup runs before measurement
//! - Run measurements in parallel with `rayon`
//! - Export results to CSV and Markdown
//!
//! # Example
//!
//! ```
//! use queensforge_benchmark::BenchmarkBuilder;
//! use queensforge_core::Algorithm;
//!
//! let benchmark = BenchmarkBuilder::new("8-Queens")
//!     .with_algorithm(Algorithm::HillClimbing)
//!     .with_board_size(8)
//!     .with_warmup_count(0)
//!     .with_run_count(4)
//!     .with_base_seed(42)
//!     .build();
//!
//! let result = benchmark.run().unwrap();
//! assert_eq!(result.run_count(), 4);
//! assert_eq!(result.success_rate(), 1.0);
//! ```

mod config;
mod report;
mod result;
mod runner;

pub use config::BenchmarkConfig;
pub use report::{CsvExporter, MarkdownReport};
pub use result::{BenchmarkResult, BenchmarkRun};
pub use runner::{Benchmark, BenchmarkBuilder};

#[cfg(test)]
mod tests;
