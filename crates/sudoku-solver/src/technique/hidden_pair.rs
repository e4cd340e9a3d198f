use sudoku_core::{Group, Position, PropagatedGrid, Value};

use super::BoxedTechnique;
use crate::technique::Technique;

/// Two values confined to the same two cells of a group, with no other cell in that
/// group carrying either, must occupy those two cells — even if one of the cells also
/// carries other candidates, which this technique then strips away.
#[derive(Debug, Default, Clone, Copy)]
pub struct HiddenPair;

impl HiddenPair {
    #[must_use]
    pub const fn new() -> Self {
        HiddenPair
    }
}

impl Technique for HiddenPair {
    fn name(&self) -> &'static str {
        "hidden pair"
    }

    fn clone_box(&self) -> BoxedTechnique {
        Box::new(*self)
    }

    fn apply_at(&self, grid: &mut PropagatedGrid, pos: Position) -> bool {
        let cell = grid.cell(pos);
        if cell.has_value() || cell.candidate_count() < 2 {
            return false;
        }
        let candidates: Vec<Value> = cell.candidates().iter().collect();
        let n = grid.n();

        for group in [Group::Block(pos.block_index(n)), Group::Row(pos.row()), Group::Col(pos.col())] {
            for i in 0..candidates.len() {
                for j in (i + 1)..candidates.len() {
                    let v1 = candidates[i];
                    let v2 = candidates[j];
                    if let Some(partner) = find_hidden_pair_partner(grid, group, pos, v1, v2) {
                        let mut changed = restrict_to_pair(grid, pos, v1, v2);
                        changed |= restrict_to_pair(grid, partner, v1, v2);
                        return changed;
                    }
                }
            }
        }
        false
    }
}

/// Returns the other cell of `group` pairing with `pos` on exactly `{v1, v2}`, if `pos`
/// and exactly one other cell are the only ones in `group` carrying either value, and at
/// least one of the two also carries some other candidate.
fn find_hidden_pair_partner(grid: &PropagatedGrid, group: Group, pos: Position, v1: Value, v2: Value) -> Option<Position> {
    let mut pair_cells = Vec::new();
    for p in grid.group_positions(group) {
        let cell = grid.cell(p);
        if cell.has_value() {
            continue;
        }
        let has_v1 = cell.has_candidate(v1);
        let has_v2 = cell.has_candidate(v2);
        if has_v1 && has_v2 {
            pair_cells.push(p);
        } else if has_v1 || has_v2 {
            return None;
        }
    }

    if pair_cells.len() != 2 || !pair_cells.contains(&pos) {
        return None;
    }
    let partner = *pair_cells.iter().find(|&&p| p != pos)?;

    let target_has_extra = grid.cell(pos).candidate_count() > 2;
    let partner_has_extra = grid.cell(partner).candidate_count() > 2;
    if !target_has_extra && !partner_has_extra {
        return None;
    }
    Some(partner)
}

/// Removes every candidate from `pos` except `v1` and `v2`.
fn restrict_to_pair(grid: &mut PropagatedGrid, pos: Position, v1: Value, v2: Value) -> bool {
    let to_remove: Vec<Value> = grid.cell(pos).candidates().iter().filter(|&v| v != v1 && v != v2).collect();
    let mut changed = false;
    for value in to_remove {
        changed |= grid.remove_candidate(pos, value);
    }
    changed
}
