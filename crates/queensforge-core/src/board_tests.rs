//! Tests for the board model

use super::board::*;

fn p(row: usize, col: usize) -> Position {
    Position::new(row, col)
}

#[test]
fn test_conflict_count_empty_and_single() {
    assert_eq!(conflict_count(&[]), 0);
    assert_eq!(conflict_count(&[p(3, 3)]), 0);
}

#[test]
fn test_conflict_count_rows_and_diagonals() {
    // same row
    assert_eq!(conflict_count(&[p(2, 0), p(2, 3)]), 1);
    // main diagonal
    assert_eq!(conflict_count(&[p(0, 0), p(3, 3)]), 1);
    // anti diagonal
    assert_eq!(conflict_count(&[p(0, 3), p(3, 0)]), 1);
    // knight's move apart
    assert_eq!(conflict_count(&[p(0, 0), p(1, 2)]), 0);
}

#[test]
fn test_conflict_count_ignores_columns() {
    assert_eq!(conflict_count(&[p(0, 1), p(2, 1)]), 0);
}

#[test]
fn test_conflict_count_all_in_one_row() {
    let row: Vec<Position> = (0..5).map(|c| p(0, c)).collect();
    assert_eq!(conflict_count(&row), 10);
}

#[test]
fn test_conflict_count_is_pure() {
    let state = [p(0, 0), p(1, 1), p(1, 2), p(3, 0)];
    let first = conflict_count(&state);
    let _ = conflict_count(&[p(0, 0)]);
    assert_eq!(conflict_count(&state), first);
    assert_eq!(first, conflict_count(&state));
}

#[test]
fn test_conflict_count_rows_matches_positions() {
    let n: usize = 4;
    for code in 0..n.pow(n as u32) {
        let mut rest = code;
        let rows: Vec<usize> = (0..n)
            .map(|_| {
                let r = rest % n;
                rest /= n;
                r
            })
            .collect();
        assert_eq!(
            conflict_count_rows(&rows),
            conflict_count(&positions_from_rows(&rows)),
            "rows {:?}",
            rows
        );
    }
}

#[test]
fn test_is_solution() {
    let solved = [p(0, 1), p(1, 3), p(2, 0), p(3, 2)];
    assert!(is_solution(&solved, 4));
    assert!(!is_solution(&solved[..3], 4));
    assert!(!is_solution(&[p(0, 0), p(1, 0)], 2));
    assert!(!is_solution(&[p(0, 0), p(1, 1)], 2));
    assert!(is_solution(&[p(0, 0)], 1));
}

#[test]
fn test_occupancy_indices() {
    let n = 5;
    assert_eq!(Occupancy::diagonal_index(0, 0), 0);
    assert_eq!(Occupancy::diagonal_index(4, 4), 2 * n - 2);
    assert_eq!(Occupancy::anti_diagonal_index(0, 4, n), 0);
    assert_eq!(Occupancy::anti_diagonal_index(4, 0, n), 2 * n - 2);
}

#[test]
fn test_occupancy_occupy_and_release() {
    let mut occ = Occupancy::new(4);
    assert!(occ.is_free(1, 1));

    occ.occupy(1, 1);
    assert!(occ.column_occupied(1));
    assert!(occ.diagonal_occupied(Occupancy::diagonal_index(1, 1)));
    assert!(occ.anti_diagonal_occupied(Occupancy::anti_diagonal_index(1, 1, 4)));

    assert!(!occ.is_free(3, 1)); // column
    assert!(!occ.is_free(2, 2)); // diagonal
    assert!(!occ.is_free(0, 2)); // row + col == 2
    assert!(occ.is_free(2, 3));

    occ.release(1, 1);
    assert_eq!(occ, Occupancy::new(4));
}

#[test]
fn test_occupancy_agrees_with_conflict_count() {
    let n = 5;
    let mut occ = Occupancy::new(n);
    occ.occupy(2, 2);
    for row in 0..n {
        for col in 0..n {
            if col == 2 {
                continue;
            }
            let attacks = conflict_count(&[p(2, 2), p(row, col)]) > 0;
            let diagonal_clash = !occ.is_free(row, col);
            if row != 2 {
                assert_eq!(attacks, diagonal_clash, "({row}, {col})");
            }
        }
    }
}

#[test]
fn test_position_display() {
    assert_eq!(format!("{}", p(3, 7)), "(3, 7)");
    assert_eq!(Position::from((1, 2)), p(1, 2));
}

#[test]
fn test_column_conflicts_delta_matches_recount() {
    let base = vec![3, 0, 4, 2, 2];
    let total = conflict_count_rows(&base);
    for col in 0..base.len() {
        for row in 0..base.len() {
            let mut moved = base.clone();
            moved[col] = row;
            let expected = conflict_count_rows(&moved);
            let delta = total + column_conflicts(&base, col, row)
                - column_conflicts(&base, col, base[col]);
            assert_eq!(delta, expected, "move col {col} to row {row}");
        }
    }
}
