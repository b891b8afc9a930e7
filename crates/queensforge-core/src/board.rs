//! Board model and conflict counting.
//!
//! A board state is a collection of [`Position`]s. Both engines keep at most
//! one queen per column, so conflict counting only looks at rows and
//! diagonals.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A single queen on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    /// Creates a position at `(row, col)`.
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Returns true if both queens share a row or a diagonal.
    ///
    /// Columns are not compared.
    ///
    /// # Example
    ///
    /// ```
    /// use queensforge_core::Position;
    ///
    /// assert!(Position::new(0, 0).attacks(&Position::new(2, 2)));
    /// assert!(Position::new(1, 0).attacks(&Position::new(1, 3)));
    /// assert!(!Position::new(0, 1).attacks(&Position::new(1, 3)));
    /// ```
    pub fn attacks(&self, other: &Position) -> bool {
        self.row == other.row || self.row.abs_diff(other.row) == self.col.abs_diff(other.col)
    }
}

impl From<(usize, usize)> for Position {
    fn from((row, col): (usize, usize)) -> Self {
        Self { row, col }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Counts attacking pairs among `positions`.
///
/// A pair conflicts if it shares a row or lies on a common diagonal.
/// Column collisions are never counted.
///
/// # Example
///
/// ```
/// use queensforge_core::{conflict_count, Position};
///
/// let solved = [
///     Position::new(0, 1),
///     Position::new(1, 3),
///     Position::new(2, 0),
///     Position::new(3, 2),
/// ];
/// assert_eq!(conflict_count(&solved), 0);
///
/// let diagonal = [Position::new(0, 0), Position::new(1, 1), Position::new(2, 2)];
/// assert_eq!(conflict_count(&diagonal), 3);
/// ```
pub fn conflict_count(positions: &[Position]) -> usize {
    let mut count = 0;
    for (i, a) in positions.iter().enumerate() {
        for b in &positions[i + 1..] {
            if a.attacks(b) {
                count += 1;
            }
        }
    }
    count
}

/// Counts attacking pairs for a one-queen-per-column board.
///
/// `rows[col]` is the row of the queen in column `col`. The result equals
/// [`conflict_count`] over the corresponding positions.
pub fn conflict_count_rows(rows: &[usize]) -> usize {
    let mut count = 0;
    for (c1, &r1) in rows.iter().enumerate() {
        for (offset, &r2) in rows[c1 + 1..].iter().enumerate() {
            if r1 == r2 || r1.abs_diff(r2) == offset + 1 {
                count += 1;
            }
        }
    }
    count
}

/// Counts queens attacking a queen placed at `(row, col)`, ignoring the
/// queen currently standing in column `col`.
///
/// Moving the queen of column `col` from `rows[col]` to `row` changes the
/// total by `column_conflicts(rows, col, row) - column_conflicts(rows, col, rows[col])`.
///
/// # Example
///
/// ```
/// use queensforge_core::{column_conflicts, conflict_count_rows};
///
/// let mut rows = vec![0, 0, 3, 1];
/// let before = conflict_count_rows(&rows);
/// let delta_out = column_conflicts(&rows, 1, rows[1]);
/// let delta_in = column_conflicts(&rows, 1, 2);
/// rows[1] = 2;
/// assert_eq!(conflict_count_rows(&rows), before - delta_out + delta_in);
/// ```
pub fn column_conflicts(rows: &[usize], col: usize, row: usize) -> usize {
    rows.iter()
        .enumerate()
        .filter(|&(c, &r)| c != col && (r == row || r.abs_diff(row) == c.abs_diff(col)))
        .count()
}

/// Converts a per-column row assignment into positions, in column order.
pub fn positions_from_rows(rows: &[usize]) -> Vec<Position> {
    rows.iter()
        .enumerate()
        .map(|(col, &row)| Position::new(row, col))
        .collect()
}

/// Returns true if `positions` is a complete, non-attacking placement of
/// `n` queens.
pub fn is_solution(positions: &[Position], n: usize) -> bool {
    if positions.len() != n {
        return false;
    }
    let mut columns = vec![false; n];
    for p in positions {
        if p.row >= n || p.col >= n || columns[p.col] {
            return false;
        }
        columns[p.col] = true;
    }
    conflict_count(positions) == 0
}

/// O(1) occupancy of columns and both diagonal families.
///
/// Diagonals are indexed by `row + col`, anti-diagonals by
/// `row - col + n - 1`; both range over `0..=2n-2`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Occupancy {
    n: usize,
    columns: Vec<bool>,
    diagonals: Vec<bool>,
    anti_diagonals: Vec<bool>,
}

impl Occupancy {
    /// Creates an empty occupancy map for an `n`×`n` board.
    pub fn new(n: usize) -> Self {
        let diagonal_count = (2 * n).saturating_sub(1);
        Self {
            n,
            columns: vec![false; n],
            diagonals: vec![false; diagonal_count],
            anti_diagonals: vec![false; diagonal_count],
        }
    }

    /// Returns the board size.
    pub fn size(&self) -> usize {
        self.n
    }

    /// Diagonal index of `(row, col)`.
    #[inline]
    pub fn diagonal_index(row: usize, col: usize) -> usize {
        row + col
    }

    /// Anti-diagonal index of `(row, col)` on an `n`×`n` board.
    #[inline]
    pub fn anti_diagonal_index(row: usize, col: usize, n: usize) -> usize {
        row + n - 1 - col
    }

    #[inline]
    pub fn column_occupied(&self, col: usize) -> bool {
        self.columns[col]
    }

    #[inline]
    pub fn diagonal_occupied(&self, index: usize) -> bool {
        self.diagonals[index]
    }

    #[inline]
    pub fn anti_diagonal_occupied(&self, index: usize) -> bool {
        self.anti_diagonals[index]
    }

    /// Returns true if a queen may be placed at `(row, col)`.
    #[inline]
    pub fn is_free(&self, row: usize, col: usize) -> bool {
        !self.column_occupied(col)
            && !self.diagonal_occupied(Self::diagonal_index(row, col))
            && !self.anti_diagonal_occupied(Self::anti_diagonal_index(row, col, self.n))
    }

    /// Marks the column and both diagonals through `(row, col)`.
    #[inline]
    pub fn occupy(&mut self, row: usize, col: usize) {
        self.set(row, col, true);
    }

    /// Clears the column and both diagonals through `(row, col)`.
    #[inline]
    pub fn release(&mut self, row: usize, col: usize) {
        self.set(row, col, false);
    }

    fn set(&mut self, row: usize, col: usize, value: bool) {
        self.columns[col] = value;
        self.diagonals[Self::diagonal_index(row, col)] = value;
        self.anti_diagonals[Self::anti_diagonal_index(row, col, self.n)] = value;
    }
}
