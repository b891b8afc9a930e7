//! Replayable search history.

use std::ops::Index;
use std::slice;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::board::{conflict_count, positions_from_rows, Position};

/// Immutable snapshot of a board state.
///
/// Every step owns its positions, so later engine mutation never touches
/// recorded history. An empty step marks a restart boundary in a
/// hill-climbing trace.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Step {
    positions: Box<[Position]>,
}

impl Step {
    /// Creates a step from a copy of `positions`.
    pub fn new(positions: &[Position]) -> Self {
        Self {
            positions: positions.into(),
        }
    }

    /// Creates a step from a per-column row assignment.
    pub fn from_rows(rows: &[usize]) -> Self {
        Self {
            positions: positions_from_rows(rows).into_boxed_slice(),
        }
    }

    /// Creates the empty restart marker.
    pub fn restart_marker() -> Self {
        Self::default()
    }

    pub fn positions(&self) -> &[Position] {
        &self.positions
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Returns true for the empty step separating hill-climbing restarts.
    pub fn is_restart_marker(&self) -> bool {
        self.is_empty()
    }

    /// Number of attacking pairs in this snapshot.
    pub fn conflicts(&self) -> usize {
        conflict_count(&self.positions)
    }

    /// Returns true if a queen stands on `(row, col)`.
    pub fn contains(&self, row: usize, col: usize) -> bool {
        self.positions.contains(&Position::new(row, col))
    }
}

impl From<Vec<Position>> for Step {
    fn from(positions: Vec<Position>) -> Self {
        Self {
            positions: positions.into_boxed_slice(),
        }
    }
}

/// Ordered, append-only sequence of steps for one solver invocation.
///
/// # Example
///
/// ```
/// use queensforge_core::{Position, Step, Trace};
///
/// let mut trace = Trace::new();
/// trace.push(Step::from_rows(&[1, 0]));
/// trace.push(Step::restart_marker());
/// trace.push(Step::new(&[Position::new(0, 0)]));
///
/// assert_eq!(trace.len(), 3);
/// assert_eq!(trace.restart_count(), 1);
/// assert_eq!(trace.segments().count(), 2);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Trace {
    steps: Vec<Step>,
}

impl Trace {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            steps: Vec::with_capacity(capacity),
        }
    }

    /// Appends a step.
    pub fn push(&mut self, step: Step) {
        self.steps.push(step);
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    pub fn iter(&self) -> slice::Iter<'_, Step> {
        self.steps.iter()
    }

    pub fn first(&self) -> Option<&Step> {
        self.steps.first()
    }

    pub fn last(&self) -> Option<&Step> {
        self.steps.last()
    }

    /// Returns the last non-empty step, skipping trailing restart markers.
    pub fn final_board(&self) -> Option<&Step> {
        self.steps.iter().rev().find(|s| !s.is_restart_marker())
    }

    /// Number of restart markers in the trace.
    pub fn restart_count(&self) -> usize {
        self.steps.iter().filter(|s| s.is_restart_marker()).count()
    }

    /// Splits the trace on restart markers.
    ///
    /// Empty segments (a marker at the very end) are skipped.
    pub fn segments(&self) -> impl Iterator<Item = &[Step]> {
        self.steps
            .split(Step::is_restart_marker)
            .filter(|segment| !segment.is_empty())
    }

    pub fn into_steps(self) -> Vec<Step> {
        self.steps
    }
}

impl Index<usize> for Trace {
    type Output = Step;

    fn index(&self, index: usize) -> &Step {
        &self.steps[index]
    }
}

impl<'a> IntoIterator for &'a Trace {
    type Item = &'a Step;
    type IntoIter = slice::Iter<'a, Step>;

    fn into_iter(self) -> Self::IntoIter {
        self.steps.iter()
    }
}

impl IntoIterator for Trace {
    type Item = Step;
    type IntoIter = std::vec::IntoIter<Step>;

    fn into_iter(self) -> Self::IntoIter {
        self.steps.into_iter()
    }
}

impl FromIterator<Step> for Trace {
    fn from_iter<I: IntoIterator<Item = Step>>(iter: I) -> Self {
        Self {
            steps: iter.into_iter().collect(),
        }
    }
}
