//! N-Queens reference fixtures.
//!
//! Brute-force enumeration used to cross-check the engines on small
//! boards. Rows are listed per row index: `solution[row] = col`.

use queensforge_core::{Position, Step};

/// Every solution of `n`-queens, as `cols[row]`, in lexicographic order.
///
/// Intended for `n <= 9`.
pub fn all_solutions(n: usize) -> Vec<Vec<usize>> {
    let mut out = Vec::new();
    let mut cols = Vec::with_capacity(n);
    extend(n, &mut cols, &mut out);
    out
}

fn extend(n: usize, cols: &mut Vec<usize>, out: &mut Vec<Vec<usize>>) {
    let row = cols.len();
    if row == n {
        out.push(cols.clone());
        return;
    }
    for col in 0..n {
        let safe = cols
            .iter()
            .enumerate()
            .all(|(r, &c)| c != col && r.abs_diff(row) != c.abs_diff(col));
        if safe {
            cols.push(col);
            extend(n, cols, out);
            cols.pop();
        }
    }
}

/// The lexicographically first solution, which is the one a row-by-row,
/// column-ascending backtracking search reaches.
pub fn first_solution(n: usize) -> Option<Vec<usize>> {
    all_solutions(n).into_iter().next()
}

/// Builds a row-ordered step from `cols[row]`.
pub fn rows_to_step(cols: &[usize]) -> Step {
    let positions: Vec<Position> = cols
        .iter()
        .enumerate()
        .map(|(row, &col)| Position::new(row, col))
        .collect();
    Step::from(positions)
}
