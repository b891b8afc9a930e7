//! Report generation for benchmark results.

use std::fmt::{self, Write as _};
use std::fs;
use std::io::{self, Write};
use std::path::Path;

use crate::result::BenchmarkResult;

/// CSV exporter for benchmark results.
///
/// One row per run with its seed, status, timing and search counters.
///
/// # Example
///
/// ```
/// use queensforge_benchmark::{BenchmarkResult, CsvExporter};
/// use queensforge_core::Algorithm;
///
/// let result = BenchmarkResult::new("Test", Algorithm::HillClimbing, 8);
/// let csv = CsvExporter::to_string(&result);
/// assert!(csv.starts_with("run_index,seed,status"));
/// ```
pub struct CsvExporter;

impl CsvExporter {
    /// Exports benchmark result to CSV string.
    pub fn to_string(result: &BenchmarkResult) -> String {
        let mut output = String::new();
        // Writing into a String cannot fail.
        let _ = Self::render(result, &mut output);
        output
    }

    fn render(result: &BenchmarkResult, output: &mut String) -> fmt::Result {
        writeln!(
            output,
            "run_index,seed,status,solve_time_ms,steps,visited_states,restarts,backtracks,states_per_second"
        )?;

        for run in &result.runs {
            let m = &run.metrics;
            writeln!(
                output,
                "{},{},{},{:.3},{},{},{},{},{:.2}",
                run.run_index,
                optional(run.seed),
                m.status,
                m.runtime_ms(),
                m.steps_count,
                m.visited_states,
                optional(m.restarts()),
                optional(m.backtracks()),
                run.states_per_second(),
            )?;
        }

        Ok(())
    }

    /// Exports benchmark result to a CSV file.
    pub fn to_file(result: &BenchmarkResult, path: impl AsRef<Path>) -> io::Result<()> {
        fs::write(path, Self::to_string(result))
    }

    /// Writes benchmark result as CSV to a writer.
    pub fn write<W: Write>(result: &BenchmarkResult, mut writer: W) -> io::Result<()> {
        writer.write_all(Self::to_string(result).as_bytes())
    }
}

/// Markdown report generator.
///
/// Generates human-readable Markdown reports from benchmark results,
/// including summary statistics, a failure breakdown and a table of
/// individual runs.
///
/// # Example
///
/// ```
/// use queensforge_benchmark::{BenchmarkResult, MarkdownReport};
/// use queensforge_core::Algorithm;
///
/// let result = BenchmarkResult::new("Test", Algorithm::Backtracking, 8);
/// let md = MarkdownReport::to_string(&result);
/// assert!(md.contains("# Benchmark: Test"));
/// assert!(md.contains("*No runs completed.*"));
/// ```
pub struct MarkdownReport;

impl MarkdownReport {
    /// Generates a Markdown report string.
    pub fn to_string(result: &BenchmarkResult) -> String {
        let mut output = String::new();
        let _ = Self::render(result, &mut output);
        output
    }

    fn render(result: &BenchmarkResult, output: &mut String) -> fmt::Result {
        writeln!(output, "# Benchmark: {}", result.name)?;
        writeln!(output)?;

        writeln!(output, "- **Algorithm**: {}", result.algorithm)?;
        writeln!(output, "- **Board**: {}×{}", result.n, result.n)?;
        writeln!(output, "- **Runs**: {}", result.run_count())?;
        writeln!(output)?;

        writeln!(output, "## Summary")?;
        writeln!(output)?;

        if result.runs.is_empty() {
            writeln!(output, "*No runs completed.*")?;
            return Ok(());
        }

        writeln!(output, "| Metric | Value |")?;
        writeln!(output, "|--------|-------|")?;
        writeln!(
            output,
            "| Success Rate | {:.1}% ({}/{}) |",
            result.success_rate() * 100.0,
            result.success_count(),
            result.run_count()
        )?;
        writeln!(output, "| Avg Time | {:.3} ms |", millis(result.avg_solve_time()))?;
        writeln!(output, "| Min Time | {:.3} ms |", millis(result.min_solve_time()))?;
        writeln!(output, "| Max Time | {:.3} ms |", millis(result.max_solve_time()))?;
        writeln!(output, "| Avg Steps | {:.1} |", result.avg_steps())?;
        writeln!(output, "| Avg Visited States | {:.1} |", result.avg_visited_states())?;
        if let Some(restarts) = result.avg_restarts() {
            writeln!(output, "| Avg Restarts | {:.2} |", restarts)?;
        }
        if let Some(backtracks) = result.avg_backtracks() {
            writeln!(output, "| Avg Backtracks | {:.1} |", backtracks)?;
        }
        writeln!(output)?;

        let failures = result.failure_counts();
        if !failures.is_empty() {
            writeln!(output, "## Failures")?;
            writeln!(output)?;
            writeln!(output, "| Reason | Runs |")?;
            writeln!(output, "|--------|------|")?;
            for (reason, count) in failures {
                writeln!(output, "| {} | {} |", reason, count)?;
            }
            writeln!(output)?;
        }

        writeln!(output, "## Run Details")?;
        writeln!(output)?;
        writeln!(output, "| Run | Seed | Status | Time (ms) | Steps | States |")?;
        writeln!(output, "|-----|------|--------|-----------|-------|--------|")?;
        for run in &result.runs {
            writeln!(
                output,
                "| {} | {} | {} | {:.3} | {} | {} |",
                run.run_index,
                run.seed.map_or_else(|| "-".to_string(), |s| s.to_string()),
                run.metrics.status,
                run.metrics.runtime_ms(),
                run.metrics.steps_count,
                run.metrics.visited_states,
            )?;
        }

        Ok(())
    }

    /// Writes Markdown report to a file.
    pub fn to_file(result: &BenchmarkResult, path: impl AsRef<Path>) -> io::Result<()> {
        fs::write(path, Self::to_string(result))
    }

    /// Writes Markdown report to a writer.
    pub fn write<W: Write>(result: &BenchmarkResult, mut writer: W) -> io::Result<()> {
        writer.write_all(Self::to_string(result).as_bytes())
    }

    /// Generates a comparison table for multiple results.
    ///
    /// # Example
    ///
    /// ```
    /// use queensforge_benchmark::{BenchmarkResult, MarkdownReport};
    /// use queensforge_core::Algorithm;
    ///
    /// let bt = BenchmarkResult::new("8", Algorithm::Backtracking, 8);
    /// let hc = BenchmarkResult::new("8", Algorithm::HillClimbing, 8);
    ///
    /// let comparison = MarkdownReport::comparison(&[&bt, &hc]);
    /// assert!(comparison.contains("## Comparison"));
    /// assert!(comparison.contains("| Hill Climbing | 8 |"));
    /// ```
    pub fn comparison(results: &[&BenchmarkResult]) -> String {
        let mut output = String::new();
        let _ = Self::render_comparison(results, &mut output);
        output
    }

    fn render_comparison(results: &[&BenchmarkResult], output: &mut String) -> fmt::Result {
        writeln!(output, "## Comparison")?;
        writeln!(output)?;
        writeln!(
            output,
            "| Algorithm | N | Success Rate | Avg Time (ms) | Avg Steps | Avg States |"
        )?;
        writeln!(
            output,
            "|-----------|---|--------------|---------------|-----------|------------|"
        )?;

        for result in results {
            writeln!(
                output,
                "| {} | {} | {:.1}% | {:.3} | {:.1} | {:.1} |",
                result.algorithm,
                result.n,
                result.success_rate() * 100.0,
                millis(result.avg_solve_time()),
                result.avg_steps(),
                result.avg_visited_states(),
            )?;
        }

        Ok(())
    }
}

fn millis(d: std::time::Duration) -> f64 {
    d.as_secs_f64() * 1000.0
}

fn optional<T: fmt::Display>(value: Option<T>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}
