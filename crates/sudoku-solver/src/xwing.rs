//! X-wing: the one technique that scans the whole grid rather than a single cell.
//!
//! Unlike the techniques in [`crate::technique`], X-wing is not triggered by a single
//! cell's state, so it is applied once per grid per round rather than once per cell.

use sudoku_core::{Position, PropagatedGrid, Value};

/// Applies both X-wing passes (columns-fixed and rows-fixed) once, returning whether
/// either eliminated a candidate.
pub fn apply(grid: &mut PropagatedGrid) -> bool {
    let mut changed = column_pass(grid);
    changed |= row_pass(grid);
    changed
}

/// For each candidate, finds pairs of columns that each carry it in exactly the same two
/// rows, and eliminates it from those rows elsewhere.
fn column_pass(grid: &mut PropagatedGrid) -> bool {
    let side = grid.side();
    let mut changed = false;

    for value in Value::all(side) {
        let rows_by_col = candidate_lines(grid, side, value, true);
        for c1 in 0..usize::from(side) {
            if rows_by_col[c1].len() != 2 {
                continue;
            }
            for c2 in (c1 + 1)..usize::from(side) {
                if rows_by_col[c2] != rows_by_col[c1] {
                    continue;
                }
                let (r1, r2) = (rows_by_col[c1][0], rows_by_col[c1][1]);
                for row in [r1, r2] {
                    for col in 0..side {
                        if col == c1 as u8 || col == c2 as u8 {
                            continue;
                        }
                        changed |= grid.remove_candidate(Position::new(row, col), value);
                    }
                }
            }
        }
    }
    changed
}

/// The row/column dual of [`column_pass`].
fn row_pass(grid: &mut PropagatedGrid) -> bool {
    let side = grid.side();
    let mut changed = false;

    for value in Value::all(side) {
        let cols_by_row = candidate_lines(grid, side, value, false);
        for r1 in 0..usize::from(side) {
            if cols_by_row[r1].len() != 2 {
                continue;
            }
            for r2 in (r1 + 1)..usize::from(side) {
                if cols_by_row[r2] != cols_by_row[r1] {
                    continue;
                }
                let (c1, c2) = (cols_by_row[r1][0], cols_by_row[r1][1]);
                for col in [c1, c2] {
                    for row in 0..side {
                        if row == r1 as u8 || row == r2 as u8 {
                            continue;
                        }
                        changed |= grid.remove_candidate(Position::new(row, col), value);
                    }
                }
            }
        }
    }
    changed
}

/// For each column (or row, if `by_column` is false... only used with `true`/`false` to
/// select axis), returns the sorted list of perpendicular coordinates where `value` is
/// still a candidate.
fn candidate_lines(grid: &PropagatedGrid, side: u8, value: Value, by_column: bool) -> Vec<Vec<u8>> {
    let mut lines = vec![Vec::new(); usize::from(side)];
    for primary in 0..side {
        for secondary in 0..side {
            let pos = if by_column { Position::new(secondary, primary) } else { Position::new(primary, secondary) };
            let cell = grid.cell(pos);
            if !cell.has_value() && cell.has_candidate(value) {
                lines[usize::from(primary)].push(secondary);
            }
        }
    }
    lines
}
