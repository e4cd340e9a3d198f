use sudoku_core::{Position, PropagatedGrid, Value};

use super::BoxedTechnique;
use crate::technique::Technique;

/// Two cells in the same block sharing the same two candidates must hold those two
/// values between them, so no other cell in the block may carry either.
#[derive(Debug, Default, Clone, Copy)]
pub struct NakedPair;

impl NakedPair {
    #[must_use]
    pub const fn new() -> Self {
        NakedPair
    }
}

impl Technique for NakedPair {
    fn name(&self) -> &'static str {
        "naked pair"
    }

    fn clone_box(&self) -> BoxedTechnique {
        Box::new(*self)
    }

    fn apply_at(&self, grid: &mut PropagatedGrid, pos: Position) -> bool {
        let cell = grid.cell(pos);
        if cell.has_value() || cell.candidate_count() != 2 {
            return false;
        }
        let v1 = cell.first_candidate().expect("candidate_count == 2");
        let v2 = cell.kth_candidate(2).expect("candidate_count == 2");

        let block = pos.block_index(grid.n());
        let Some(partner) = find_sole_partner(grid, block, pos, v1, v2) else {
            return false;
        };

        let mut changed = false;
        for p in grid.block_positions(block).collect::<Vec<_>>() {
            if p == pos || p == partner {
                continue;
            }
            changed |= grid.remove_candidate(p, v1);
            changed |= grid.remove_candidate(p, v2);
        }
        changed
    }
}

/// Returns the one other cell in `block` sharing exactly `{v1, v2}` as its candidates,
/// or `None` if zero or more than one such cell exists.
fn find_sole_partner(grid: &PropagatedGrid, block: u8, pos: Position, v1: Value, v2: Value) -> Option<Position> {
    let mut partner = None;
    for p in grid.block_positions(block) {
        if p == pos {
            continue;
        }
        let cell = grid.cell(p);
        if cell.has_value() || cell.candidate_count() != 2 {
            continue;
        }
        if cell.has_candidate(v1) && cell.has_candidate(v2) {
            if partner.is_some() {
                return None;
            }
            partner = Some(p);
        }
    }
    partner
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn eliminates_pair_from_rest_of_block() {
        let mut grid = PropagatedGrid::new(3).unwrap();
        // Leave (0,0) and (0,1) with candidates {1,2}; everything else in block 0
        // keeps {1,2,...,9} minus whatever else.
        for value in 3..=9u8 {
            grid.remove_candidate(Position::new(0, 0), Value::new(value));
            grid.remove_candidate(Position::new(0, 1), Value::new(value));
        }

        let changed = NakedPair::new().apply_at(&mut grid, Position::new(0, 0));
        assert!(changed);
        assert!(!grid.cell(Position::new(0, 2)).has_candidate(Value::new(1)));
        assert!(!grid.cell(Position::new(0, 2)).has_candidate(Value::new(2)));
        assert!(!grid.cell(Position::new(1, 1)).has_candidate(Value::new(1)));
        // Untouched cell outside the block keeps both candidates.
        assert!(grid.cell(Position::new(4, 4)).has_candidate(Value::new(1)));
    }

    #[test]
    fn no_change_with_more_than_one_partner() {
        let mut grid = PropagatedGrid::new(3).unwrap();
        for value in 3..=9u8 {
            grid.remove_candidate(Position::new(0, 0), Value::new(value));
            grid.remove_candidate(Position::new(0, 1), Value::new(value));
            grid.remove_candidate(Position::new(0, 2), Value::new(value));
        }
        assert!(!NakedPair::new().apply_at(&mut grid, Position::new(0, 0)));
    }

    #[test]
    fn no_change_without_exactly_two_candidates() {
        let mut grid = PropagatedGrid::new(3).unwrap();
        assert!(!NakedPair::new().apply_at(&mut grid, Position::new(0, 0)));
    }
}
