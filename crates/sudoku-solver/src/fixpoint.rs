//! Drives the per-cell techniques to a fixpoint.

use sudoku_core::PropagatedGrid;

use crate::technique;

/// Applies the simple techniques (naked single, hidden single, naked pair, hidden pair,
/// in that order) to every cell, once.
///
/// For each still-empty cell, techniques are tried in order and the loop for that cell
/// stops as soon as the cell under the outer cursor acquires a value — not necessarily
/// the cell a hidden single just committed elsewhere. Returns whether any technique made
/// progress anywhere in the pass.
pub fn perform_simple_techniques(grid: &mut PropagatedGrid) -> bool {
    let techniques = technique::simple_techniques();
    let mut any_progress = false;

    for pos in grid.positions().collect::<Vec<_>>() {
        if grid.cell(pos).has_value() {
            continue;
        }
        for t in &techniques {
            let progress = t.apply_at(grid, pos);
            any_progress |= progress;
            if grid.cell(pos).has_value() {
                break;
            }
        }
    }

    any_progress
}


#[cfg(test)]
mod proptests {
    use proptest::prelude::*;

    use super::*;
    use crate::testing::grid_from_canonical_subset;

    fn clue_subset() -> impl Strategy<Value = Vec<bool>> {
        prop::collection::vec(any::<bool>(), 16)
    }

    proptest! {
        /// Running the simple techniques until no further progress, then running once more,
        /// never changes the grid: a fixpoint, once reached, is stable.
        #[test]
        fn reaching_a_fixpoint_is_idempotent(include in clue_subset()) {
            let mut grid = grid_from_canonical_subset(2, &include);
            while perform_simple_techniques(&mut grid) {}

            let before: Vec<_> = grid.positions().map(|pos| grid.cell(pos).value()).collect();
            prop_assert!(!perform_simple_techniques(&mut grid));
            let after: Vec<_> = grid.positions().map(|pos| grid.cell(pos).value()).collect();
            prop_assert_eq!(before, after);
        }
    }
}
