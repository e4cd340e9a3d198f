//! Minimum-remaining-values depth-first backtracking search.

use sudoku_core::{Position, SearchGrid, Value};

use crate::error::SolverError;

/// Completes `grid` by backtracking search, assuming constraint propagation has already
/// run to a fixpoint.
///
/// # Errors
///
/// Returns [`SolverError`] if no assignment of the remaining empty cells satisfies every
/// row, column and block constraint.
pub fn solve(mut grid: SearchGrid) -> Result<SearchGrid, SolverError> {
    let mut empties: Vec<Position> = grid.empty_positions().collect();
    if search(&mut grid, &mut empties, 0) { Ok(grid) } else { Err(SolverError) }
}

/// Recursive MRV search over `empties[i..]`. No allocation happens in this hot path;
/// `empties` is reordered in place by swapping the chosen index to the front of the
/// remaining slice.
fn search(grid: &mut SearchGrid, empties: &mut [Position], i: usize) -> bool {
    if i == empties.len() {
        return true;
    }

    let mut best = i;
    let mut best_count = count_possible(grid, empties[i]);
    for j in (i + 1)..empties.len() {
        let count = count_possible(grid, empties[j]);
        if count < best_count {
            best_count = count;
            best = j;
        }
    }
    empties.swap(i, best);

    let pos = empties[i];
    for raw in 1..=grid.side() {
        let value = Value::new(raw);
        if !grid.possible(pos, value) {
            continue;
        }
        grid.set_value(pos, value);
        if search(grid, empties, i + 1) {
            return true;
        }
        grid.unset_value(pos, value);
    }
    false
}

fn count_possible(grid: &SearchGrid, pos: Position) -> u32 {
    Value::all(grid.side()).filter(|&v| grid.possible(pos, v)).count() as u32
}
