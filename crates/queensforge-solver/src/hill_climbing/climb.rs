//! A single restart of steepest-ascent hill climbing.

use queensforge_config::HillClimbingConfig;
use queensforge_core::{column_conflicts, conflict_count_rows, FailureReason, Step};
use rand::Rng;
use tracing::trace;

use super::cycle::CycleWindow;
use crate::scope::SolverScope;
use crate::termination::Termination;

/// How one restart ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ClimbOutcome {
    Solved,
    Failed(FailureReason),
    Cancelled,
}

/// The best neighbor found by a full scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct BestMove {
    pub(crate) col: usize,
    pub(crate) row: usize,
    pub(crate) conflicts: usize,
}

/// Climbs from a fresh random board until it solves, fails or is cancelled.
///
/// The initial board and every adopted board are recorded as steps, each
/// with its conflict count appended to the trend.
pub(crate) fn climb<R, T>(
    n: usize,
    config: &HillClimbingConfig,
    rng: &mut R,
    scope: &mut SolverScope,
    termination: &T,
) -> ClimbOutcome
where
    R: Rng + ?Sized,
    T: Termination + ?Sized,
{
    let mut rows: Vec<usize> = (0..n).map(|_| rng.random_range(0..n)).collect();
    let mut conflicts = conflict_count_rows(&rows);
    scope.record_step(Step::from_rows(&rows));
    scope.record_conflicts(conflicts);

    let mut window = CycleWindow::new(config.cycle_window_size);
    let mut steps: u32 = 0;
    let mut sideways: u32 = 0;

    while conflicts > 0 {
        if steps >= config.max_steps_per_restart {
            return ClimbOutcome::Failed(FailureReason::Plateau);
        }
        if termination.is_terminated(scope) {
            return ClimbOutcome::Cancelled;
        }
        steps += 1;

        let Some(best) = best_neighbor(&mut rows, conflicts, config.allow_sideways, scope) else {
            return ClimbOutcome::Failed(FailureReason::Stuck);
        };

        if best.conflicts == conflicts {
            sideways += 1;
            if sideways > config.sideways_limit {
                return ClimbOutcome::Failed(FailureReason::Plateau);
            }
        } else {
            sideways = 0;
        }

        rows[best.col] = best.row;
        if !window.insert(&rows) {
            return ClimbOutcome::Failed(FailureReason::Cycle);
        }

        conflicts = best.conflicts;
        scope.record_step(Step::from_rows(&rows));
        scope.record_conflicts(conflicts);

        trace!(
            event = "step",
            step = scope.total_step_count(),
            col = best.col as u64,
            row = best.row as u64,
            conflicts = conflicts as u64,
            sideways = sideways,
        );
    }

    ClimbOutcome::Solved
}

/// Scans every single-queen move and returns the steepest one.
///
/// Columns are scanned in order and, within a column, rows in order. A
/// strictly better neighbor always replaces the incumbent; with sideways
/// moves allowed an equal one does too, so the last equal-best neighbor in
/// scan order wins. Returns `None` if no neighbor qualifies.
///
/// `rows` is left unchanged on return. Every neighbor counts as a visited
/// state.
pub(crate) fn best_neighbor(
    rows: &mut [usize],
    conflicts: usize,
    allow_sideways: bool,
    scope: &mut SolverScope,
) -> Option<BestMove> {
    let n = rows.len();
    let mut best: Option<BestMove> = None;
    let mut best_conflicts = conflicts;

    for col in 0..n {
        let current = rows[col];
        let without = conflicts - column_conflicts(rows, col, current);
        for row in (0..n).filter(|&row| row != current) {
            scope.record_visit();
            let candidate = without + column_conflicts(rows, col, row);
            debug_assert_eq!(candidate, {
                rows[col] = row;
                let recount = conflict_count_rows(rows);
                rows[col] = current;
                recount
            });

            if candidate < best_conflicts || (allow_sideways && candidate == best_conflicts) {
                best_conflicts = candidate;
                best = Some(BestMove {
                    col,
                    row,
                    conflicts: candidate,
                });
            }
        }
    }

    best
}
