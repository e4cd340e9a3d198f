use sudoku_core::{Position, PropagatedGrid};

use super::BoxedTechnique;
use crate::technique::Technique;

/// A cell with exactly one remaining candidate must hold that value.
#[derive(Debug, Default, Clone, Copy)]
pub struct NakedSingle;

impl NakedSingle {
    #[must_use]
    pub const fn new() -> Self {
        NakedSingle
    }
}

impl Technique for NakedSingle {
    fn name(&self) -> &'static str {
        "naked single"
    }

    fn clone_box(&self) -> BoxedTechnique {
        Box::new(*self)
    }

    fn apply_at(&self, grid: &mut PropagatedGrid, pos: Position) -> bool {
        let cell = grid.cell(pos);
        if cell.has_value() || cell.candidate_count() != 1 {
            return false;
        }
        let value = cell.first_candidate().expect("candidate_count == 1");

        let block = pos.block_index(grid.n());
        let mut changed = grid.remove_candidate_from_row(pos.row(), value);
        changed |= grid.remove_candidate_from_col(pos.col(), value);
        changed |= grid.remove_candidate_from_block(block, value);
        changed
    }
}
