use sudoku_core::{Group, Position, PropagatedGrid, Value};

use super::BoxedTechnique;
use crate::technique::Technique;

/// A value that appears as a candidate in exactly one cell of a group must go there,
/// even if that cell has other candidates too.
#[derive(Debug, Default, Clone, Copy)]
pub struct HiddenSingle;

impl HiddenSingle {
    #[must_use]
    pub const fn new() -> Self {
        HiddenSingle
    }
}

impl Technique for HiddenSingle {
    fn name(&self) -> &'static str {
        "hidden single"
    }

    fn clone_box(&self) -> BoxedTechnique {
        Box::new(*self)
    }

    fn apply_at(&self, grid: &mut PropagatedGrid, pos: Position) -> bool {
        let n = grid.n();
        for group in [Group::Block(pos.block_index(n)), Group::Row(pos.row()), Group::Col(pos.col())] {
            if let Some((found, value)) = find_unique_candidate(grid, group) {
                grid.provide_value(found, value);
                remove_from_other_groups(grid, found, value, group);
                return true;
            }
        }
        false
    }
}

/// Scans `group` for the lowest value that appears as a candidate in exactly one of its
/// cells, returning that cell's position together with the value.
///
/// A later value with count one is deliberately left for a subsequent pass: the scan
/// stops at the first hit.
fn find_unique_candidate(grid: &PropagatedGrid, group: Group) -> Option<(Position, Value)> {
    for value in Value::all(grid.side()) {
        let mut found = None;
        let mut count = 0u32;
        for p in grid.group_positions(group) {
            let cell = grid.cell(p);
            if !cell.has_value() && cell.has_candidate(value) {
                count += 1;
                found.get_or_insert(p);
            }
        }
        if count == 1 {
            // `find_unique_candidate` only returns once count reaches exactly one, so
            // `found` must be set; a count of one with no recorded position would be a
            // bug in this loop, not a reachable runtime state.
            return Some((found.expect("count == 1 implies a position was recorded"), value));
        }
    }
    None
}

/// Removes `value` from the two groups containing `found` that are not `scanned`: any
/// other cell in `scanned` is already known to lack `value`, since `scanned` is exactly
/// where `value`'s count was one.
fn remove_from_other_groups(grid: &mut PropagatedGrid, found: Position, value: Value, scanned: Group) {
    let n = grid.n();
    match scanned {
        Group::Block(_) => {
            grid.remove_candidate_from_row(found.row(), value);
            grid.remove_candidate_from_col(found.col(), value);
        }
        Group::Row(_) => {
            grid.remove_candidate_from_block(found.block_index(n), value);
            grid.remove_candidate_from_col(found.col(), value);
        }
        Group::Col(_) => {
            grid.remove_candidate_from_block(found.block_index(n), value);
            grid.remove_candidate_from_row(found.row(), value);
        }
    }
}
