//! Colorful console output for search events.
//!
//! Provides a custom `tracing` layer that formats engine events with colors.
//!
//! ## Log Levels
//!
//! - **INFO**: Lifecycle events (solve start/end)
//! - **DEBUG**: Hill-climbing restarts
//! - **TRACE**: Individual trace steps

use num_format::{Locale, ToFormattedString};
use owo_colors::OwoColorize;
use std::io::{self, Write};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::OnceLock;
use std::time::Instant;
use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::layer::Context;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

static INIT: OnceLock<()> = OnceLock::new();
static EPOCH: OnceLock<Instant> = OnceLock::new();
static SOLVE_START_NANOS: AtomicU64 = AtomicU64::new(0);

/// Package version for banner display.
const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Initializes console output.
///
/// Safe to call multiple times - only the first call has effect.
/// Prints the banner and installs the layer with an `RUST_LOG` filter
/// defaulting to `info`.
pub fn init() {
    INIT.get_or_init(|| {
        print_banner();

        let filter = EnvFilter::builder()
            .with_default_directive(LevelFilter::INFO.into())
            .from_env_lossy();

        let _ = tracing_subscriber::registry()
            .with(filter)
            .with(SolverConsoleLayer)
            .try_init();
    });
}

// Marks the start of solving for elapsed time tracking.
fn mark_solve_start() {
    let epoch = EPOCH.get_or_init(Instant::now);
    let nanos = epoch.elapsed().as_nanos() as u64;
    SOLVE_START_NANOS.store(nanos, Ordering::Relaxed);
}

// Returns elapsed time since solve start.
fn elapsed_secs() -> f64 {
    let Some(epoch) = EPOCH.get() else {
        return 0.0;
    };
    let start_nanos = SOLVE_START_NANOS.load(Ordering::Relaxed);
    let now_nanos = epoch.elapsed().as_nanos() as u64;
    now_nanos.saturating_sub(start_nanos) as f64 / 1_000_000_000.0
}

fn print_banner() {
    let banner = r#"
  ___                            _____
 / _ \ _   _  ___  ___ _ __  ___|  ___|__  _ __ __ _  ___
| | | | | | |/ _ \/ _ \ '_ \/ __| |_ / _ \| '__/ _` |/ _ \
| |_| | |_| |  __/  __/ | | \__ \  _| (_) | | | (_| |  __/
 \__\_\\__,_|\___|\___|_| |_|___/_|  \___/|_|  \__, |\___|
                                               |___/
"#;

    let version_line = format!("                   v{} - N-Queens Search Engines\n", VERSION);

    let mut stdout = io::stdout().lock();
    let _ = writeln!(stdout, "{}", banner.bright_cyan());
    let _ = writeln!(stdout, "{}", version_line.bright_white().bold());
    let _ = stdout.flush();
}

/// A tracing layer that formats engine events with colors.
pub struct SolverConsoleLayer;

impl<S: Subscriber> Layer<S> for SolverConsoleLayer {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let metadata = event.metadata();
        let target = metadata.target();

        if !target.starts_with("queensforge_solver")
            && !target.starts_with("queensforge_benchmark")
            && !target.starts_with("queensforge::")
        {
            return;
        }

        let mut visitor = EventVisitor::default();
        event.record(&mut visitor);

        let level = *metadata.level();
        let output = format_event(&visitor, level);
        if !output.is_empty() {
            let _ = writeln!(io::stdout(), "{}", output);
        }
    }
}

#[derive(Default)]
struct EventVisitor {
    event: Option<String>,
    algorithm: Option<String>,
    status: Option<String>,
    reason: Option<String>,
    n: Option<u64>,
    step: Option<u64>,
    steps: Option<u64>,
    depth: Option<u64>,
    col: Option<u64>,
    row: Option<u64>,
    conflicts: Option<u64>,
    sideways: Option<u64>,
    attempt: Option<u64>,
    restarts: Option<u64>,
    max_restarts: Option<u64>,
    backtracks: Option<u64>,
    max_depth: Option<u64>,
    visited: Option<u64>,
    runs: Option<u64>,
    duration_ms: Option<u64>,
    allow_sideways: Option<bool>,
}

impl Visit for EventVisitor {
    fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
        let s = format!("{:?}", value);
        let s = s.trim_matches('"').to_string();
        match field.name() {
            "event" => self.event = Some(s),
            "algorithm" => self.algorithm = Some(s),
            "status" => self.status = Some(s),
            "reason" => self.reason = Some(s),
            _ => {}
        }
    }

    fn record_u64(&mut self, field: &Field, value: u64) {
        match field.name() {
            "n" => self.n = Some(value),
            "step" => self.step = Some(value),
            "steps" => self.steps = Some(value),
            "depth" => self.depth = Some(value),
            "col" => self.col = Some(value),
            "row" => self.row = Some(value),
            "conflicts" => self.conflicts = Some(value),
            "sideways" => self.sideways = Some(value),
            "attempt" => self.attempt = Some(value),
            "restarts" => self.restarts = Some(value),
            "max_restarts" => self.max_restarts = Some(value),
            "backtracks" => self.backtracks = Some(value),
            "max_depth" => self.max_depth = Some(value),
            "visited" => self.visited = Some(value),
            "runs" => self.runs = Some(value),
            "duration_ms" => self.duration_ms = Some(value),
            _ => {}
        }
    }

    fn record_i64(&mut self, field: &Field, value: i64) {
        self.record_u64(field, value as u64);
    }

    fn record_bool(&mut self, field: &Field, value: bool) {
        if field.name() == "allow_sideways" {
            self.allow_sideways = Some(value);
        }
    }

    fn record_str(&mut self, field: &Field, value: &str) {
        match field.name() {
            "event" => self.event = Some(value.to_string()),
            "algorithm" => self.algorithm = Some(value.to_string()),
            "status" => self.status = Some(value.to_string()),
            "reason" => self.reason = Some(value.to_string()),
            _ => {}
        }
    }
}

fn format_event(v: &EventVisitor, level: Level) -> String {
    let event = v.event.as_deref().unwrap_or("");

    match event {
        "solve_start" => format_solve_start(v),
        "solve_end" => format_solve_end(v),
        "restart" => format_restart(v),
        "step" => format_step(v, level),
        "benchmark_start" => format_benchmark_start(v),
        _ => String::new(),
    }
}

fn format_elapsed() -> String {
    format!("{:>7.3}s", elapsed_secs())
        .bright_black()
        .to_string()
}

fn format_solve_start(v: &EventVisitor) -> String {
    mark_solve_start();
    let algorithm = v.algorithm.as_deref().unwrap_or("Unknown");
    let n = v.n.unwrap_or(0);

    let mut output = format!(
        "{} {} {} │ {}×{} board",
        format_elapsed(),
        "▶".bright_green().bold(),
        algorithm.white().bold(),
        n.bright_yellow(),
        n.bright_yellow(),
    );

    if let Some(max_restarts) = v.max_restarts {
        output.push_str(&format!(
            " │ {} restarts max",
            max_restarts
                .to_formatted_string(&Locale::en)
                .bright_yellow()
        ));
    }
    if let Some(false) = v.allow_sideways {
        output.push_str(" │ no sideways moves");
    }

    output
}

fn format_solve_end(v: &EventVisitor) -> String {
    let status = v.status.as_deref().unwrap_or("unknown");
    let solved = status == "solved";
    let steps = v.steps.unwrap_or(0);
    let duration = v.duration_ms.unwrap_or(0);

    let status_colored = if solved {
        status.to_uppercase().bright_green().bold().to_string()
    } else {
        status.to_uppercase().bright_red().bold().to_string()
    };

    let mut output = format!(
        "{} {} {} │ {} │ {} steps │ {}",
        format_elapsed(),
        "■".bright_cyan().bold(),
        v.algorithm.as_deref().unwrap_or("Solve").white().bold(),
        format_duration_ms(duration).yellow(),
        steps.to_formatted_string(&Locale::en).white(),
        status_colored,
    );

    if let Some(backtracks) = v.backtracks {
        output.push_str(&format!(
            " │ {} backtracks",
            backtracks
                .to_formatted_string(&Locale::en)
                .bright_magenta()
        ));
    }
    if let Some(max_depth) = v.max_depth {
        output.push_str(&format!(" │ depth {}", max_depth.bright_magenta()));
    }
    if let Some(restarts) = v.restarts {
        output.push_str(&format!(
            " │ {} restarts",
            restarts.to_formatted_string(&Locale::en).bright_magenta()
        ));
    }
    if let Some(visited) = v.visited {
        output.push_str(&format!(
            " │ {} states",
            visited.to_formatted_string(&Locale::en).bright_magenta()
        ));
    }

    output
}

fn format_restart(v: &EventVisitor) -> String {
    let attempt = v.attempt.unwrap_or(0);
    let reason = v.reason.as_deref().unwrap_or("unknown");

    format!(
        "{} {} Restart {:>5} │ {}",
        format_elapsed(),
        "↻".bright_yellow(),
        attempt.to_formatted_string(&Locale::en).white(),
        reason.yellow()
    )
}

fn format_step(v: &EventVisitor, level: Level) -> String {
    if level != Level::TRACE {
        return String::new();
    }

    let step = v.step.unwrap_or(0);
    let detail = match (v.depth, v.conflicts) {
        (Some(depth), _) => format!("depth {:>3}", depth),
        (None, Some(conflicts)) => format!(
            "col {:>3} → row {:>3} │ {} conflicts",
            v.col.unwrap_or(0),
            v.row.unwrap_or(0),
            conflicts
        ),
        (None, None) => String::new(),
    };

    let icon = match v.sideways {
        Some(s) if s > 0 => "→".bright_yellow().to_string(),
        _ => "✓".bright_green().to_string(),
    };

    format!(
        "{} {} Step {:>10} │ {}",
        format_elapsed(),
        icon,
        step.to_formatted_string(&Locale::en).bright_black(),
        detail.bright_black()
    )
}

fn format_benchmark_start(v: &EventVisitor) -> String {
    format!(
        "{} {} Benchmark {} │ n = {} │ {} runs",
        format_elapsed(),
        "▶".bright_blue(),
        v.algorithm.as_deref().unwrap_or("Unknown").white().bold(),
        v.n.unwrap_or(0).bright_yellow(),
        v.runs
            .unwrap_or(0)
            .to_formatted_string(&Locale::en)
            .bright_yellow()
    )
}

fn format_duration_ms(ms: u64) -> String {
    if ms < 1000 {
        format!("{}ms", ms)
    } else if ms < 60_000 {
        format!("{:.2}s", ms as f64 / 1000.0)
    } else {
        let mins = ms / 60_000;
        let secs = (ms % 60_000) / 1000;
        format!("{}m {}s", mins, secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duration_formatting() {
        assert_eq!(format_duration_ms(12), "12ms");
        assert_eq!(format_duration_ms(1500), "1.50s");
        assert_eq!(format_duration_ms(125_000), "2m 5s");
    }

    #[test]
    fn test_unknown_event_is_silent() {
        let v = EventVisitor {
            event: Some("phase_start".to_string()),
            ..Default::default()
        };
        assert!(format_event(&v, Level::INFO).is_empty());
    }

    #[test]
    fn test_step_only_at_trace() {
        let v = EventVisitor {
            event: Some("step".to_string()),
            step: Some(1234),
            depth: Some(3),
            ..Default::default()
        };
        assert!(format_event(&v, Level::DEBUG).is_empty());

        let line = format_event(&v, Level::TRACE);
        assert!(line.contains("1,234"));
        assert!(line.contains("depth   3"));
    }

    #[test]
    fn test_solve_end_backtracking() {
        let v = EventVisitor {
            event: Some("solve_end".to_string()),
            algorithm: Some("Backtracking".to_string()),
            status: Some("solved".to_string()),
            steps: Some(218),
            backtracks: Some(105),
            max_depth: Some(8),
            duration_ms: Some(3),
            ..Default::default()
        };
        let line = format_event(&v, Level::INFO);
        assert!(line.contains("SOLVED"));
        assert!(line.contains("218"));
        assert!(line.contains("105"));
        assert!(!line.contains("restarts"));
    }

    #[test]
    fn test_restart_line() {
        let v = EventVisitor {
            event: Some("restart".to_string()),
            attempt: Some(4),
            reason: Some("plateau".to_string()),
            ..Default::default()
        };
        let line = format_event(&v, Level::DEBUG);
        assert!(line.contains("Restart"));
        assert!(line.contains("plateau"));
    }
}
