//! The propagation-phase grid: values plus live candidate sets.

use crate::cell::Cell;
use crate::containers::CandidateSet;
use crate::error::GridError;
use crate::position::Position;
use crate::search_grid::SearchGrid;
use crate::value::Value;

/// A row, column or block of a grid, identified by its index `0..side`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Group {
    /// A row, identified by its row index.
    Row(u8),
    /// A column, identified by its column index.
    Col(u8),
    /// A block, identified by its block index.
    Block(u8),
}

/// The grid during constraint propagation.
///
/// Every cell carries both its own state (placed value or candidate set) and the grid
/// maintains, redundantly, one [`CandidateSet`] per row/column/block recording which
/// values remain unplaced in that group. Propagation techniques keep these in sync: a
/// value is only ever removed from a cell's candidates and from its row/column/block
/// availability together, by [`PropagatedGrid::remove_candidate`].
///
/// Once no further propagation is useful, [`PropagatedGrid::into_search_grid`] converts
/// this (by value, one-way) into a [`SearchGrid`] for backtracking, which drops
/// per-cell candidates entirely in favor of cheap membership tests.
#[derive(Debug, Clone)]
pub struct PropagatedGrid {
    n: u8,
    side: u8,
    cells: Vec<Cell>,
    row_free: Vec<CandidateSet>,
    col_free: Vec<CandidateSet>,
    block_free: Vec<CandidateSet>,
}

impl PropagatedGrid {
    /// Creates a grid of block side `n` (so `side = n * n`) with every cell empty.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::TooSmall`] if `n < 2`, or [`GridError::TooLarge`] if `n * n`
    /// would overflow `u8` or exceed [`Value::MAX`].
    pub fn new(n: u8) -> Result<Self, GridError> {
        if n < 2 {
            return Err(GridError::TooSmall { n });
        }
        let side = n.checked_mul(n).ok_or(GridError::TooLarge { n })?;
        if side > Value::MAX {
            return Err(GridError::TooLarge { n });
        }

        let cell_count = usize::from(side) * usize::from(side);
        Ok(Self {
            n,
            side,
            cells: vec![Cell::empty(side); cell_count],
            row_free: vec![CandidateSet::full(side); usize::from(side)],
            col_free: vec![CandidateSet::full(side); usize::from(side)],
            block_free: vec![CandidateSet::full(side); usize::from(side)],
        })
    }

    /// Returns the block side `n`.
    #[must_use]
    pub const fn n(&self) -> u8 {
        self.n
    }

    /// Returns the grid side `S = n * n`.
    #[must_use]
    pub const fn side(&self) -> u8 {
        self.side
    }

    /// Returns the cell at `pos`.
    #[must_use]
    pub fn cell(&self, pos: Position) -> Cell {
        self.cells[pos.linear_index(self.side)]
    }

    fn cell_mut(&mut self, pos: Position) -> &mut Cell {
        &mut self.cells[pos.linear_index(self.side)]
    }

    /// Returns `true` if `value` is still consistent with `pos`: not yet ruled out by
    /// `pos`'s column, row or block. Access order is column, row, block, fixed as a
    /// micro-optimization; callers must not rely on any side effects of the order.
    #[must_use]
    pub fn possible(&self, pos: Position, value: Value) -> bool {
        self.col_free[usize::from(pos.col())].contains(value)
            && self.row_free[usize::from(pos.row())].contains(value)
            && self.block_free[usize::from(pos.block_index(self.n))].contains(value)
    }

    /// Returns the positions in `group`.
    pub fn group_positions(&self, group: Group) -> Box<dyn Iterator<Item = Position> + '_> {
        let side = self.side;
        match group {
            Group::Row(row) => Box::new((0..side).map(move |col| Position::new(row, col))),
            Group::Col(col) => Box::new((0..side).map(move |row| Position::new(row, col))),
            Group::Block(block_index) => Box::new(self.block_positions(block_index)),
        }
    }

    /// Returns the positions of `block_index`'s block.
    pub fn block_positions(&self, block_index: u8) -> impl Iterator<Item = Position> + '_ {
        let n = self.n;
        (0..self.side).map(move |cell_index| Position::from_block(n, block_index, cell_index))
    }

    /// Sets `value`'s availability in `pos`'s row, column and block tables.
    fn mark_value_free(&mut self, pos: Position, value: Value, free: bool) {
        let row = usize::from(pos.row());
        let col = usize::from(pos.col());
        let block = usize::from(pos.block_index(self.n));
        if free {
            self.row_free[row].insert(value);
            self.col_free[col].insert(value);
            self.block_free[block].insert(value);
        } else {
            self.row_free[row].remove(value);
            self.col_free[col].remove(value);
            self.block_free[block].remove(value);
        }
    }

    /// Removes `value` from the candidates of every empty cell in `pos`'s row, returning
    /// whether any cell's candidate set changed.
    pub fn remove_candidate_from_row(&mut self, row: u8, value: Value) -> bool {
        let mut changed = false;
        for col in 0..self.side {
            changed |= self.remove_candidate_at(Position::new(row, col), value);
        }
        changed
    }

    /// Removes `value` from the candidates of every empty cell in `pos`'s column,
    /// returning whether any cell's candidate set changed.
    pub fn remove_candidate_from_col(&mut self, col: u8, value: Value) -> bool {
        let mut changed = false;
        for row in 0..self.side {
            changed |= self.remove_candidate_at(Position::new(row, col), value);
        }
        changed
    }

    /// Removes `value` from the candidates of every empty cell in `block_index`'s block,
    /// returning whether any cell's candidate set changed.
    pub fn remove_candidate_from_block(&mut self, block_index: u8, value: Value) -> bool {
        let mut changed = false;
        let n = self.n;
        for cell_index in 0..self.side {
            let pos = Position::from_block(n, block_index, cell_index);
            changed |= self.remove_candidate_at(pos, value);
        }
        changed
    }

    /// Removes `value` from a single cell's candidates.
    ///
    /// If `value` was already the cell's only remaining candidate, this commits it as
    /// the cell's value instead of leaving an empty candidate set: this is how
    /// naked-single resolution happens as a side effect of ordinary elimination, with no
    /// separate commit call, as long as the cell passed in already had exactly one
    /// candidate before this call. A cell that merely drops *to* one candidate as a
    /// result of this removal is left uncommitted, for a later pass to pick up.
    fn remove_candidate_at(&mut self, pos: Position, value: Value) -> bool {
        let cell = self.cell_mut(pos);
        if cell.has_value() || !cell.has_candidate(value) {
            return false;
        }
        if cell.candidate_count() == 1 {
            cell.set_value(value);
            self.mark_value_free(pos, value, false);
            return true;
        }
        self.cell_mut(pos).remove_candidate(value);
        true
    }

    /// Removes a single candidate from the cell at `pos`. Used directly by techniques
    /// (naked pair, hidden pair, X-wing) that eliminate a candidate from one cell
    /// without scanning its whole group.
    pub fn remove_candidate(&mut self, pos: Position, value: Value) -> bool {
        self.remove_candidate_at(pos, value)
    }

    /// Places `value` at `pos`.
    ///
    /// Unlike [`PropagatedGrid::place_initial`], this does not propagate the elimination
    /// to peer cells' candidate sets; callers (currently only hidden-single) do that
    /// explicitly, since they already know which peer groups still need it.
    ///
    /// # Panics
    ///
    /// Panics (debug builds) if `value` is not currently possible at `pos`, or if `pos`
    /// already has a value. Techniques must only ever commit values they have derived as
    /// consistent; use [`PropagatedGrid::place_initial`] to load externally supplied data
    /// that may already be contradictory.
    pub fn provide_value(&mut self, pos: Position, value: Value) {
        debug_assert!(!self.cell(pos).has_value(), "cell already has a value");
        debug_assert!(self.possible(pos, value), "value is not possible at this position");

        self.cell_mut(pos).set_value(value);
        self.mark_value_free(pos, value, false);
    }

    /// Places `value` at `pos` while loading externally supplied data, bypassing the
    /// `possible` precondition that [`PropagatedGrid::provide_value`] enforces.
    ///
    /// A loaded puzzle may already be self-contradictory (e.g. a duplicate in a row);
    /// that must surface later as an unsolvable grid, not as a panic while loading.
    /// Candidate elimination is still propagated to peers here, so any later
    /// contradiction is visible as an empty candidate set rather than silently ignored.
    ///
    /// # Panics
    ///
    /// Panics if `pos` already has a value.
    pub fn place_initial(&mut self, pos: Position, value: Value) {
        assert!(!self.cell(pos).has_value(), "cell already has a value");

        self.cell_mut(pos).set_value(value);
        self.mark_value_free(pos, value, false);

        let row = pos.row();
        let col = pos.col();
        let block = pos.block_index(self.n);
        self.remove_candidate_from_row(row, value);
        self.remove_candidate_from_col(col, value);
        self.remove_candidate_from_block(block, value);
    }

    /// Iterates every position in row-major order.
    pub fn positions(&self) -> impl Iterator<Item = Position> + '_ {
        let side = self.side;
        (0..side).flat_map(move |row| (0..side).map(move |col| Position::new(row, col)))
    }

    /// Returns `true` if every cell has a value and no row/column/block has a value
    /// placed twice.
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.cells.iter().all(|cell| cell.has_value())
    }

    /// Returns `true` if some empty cell has no remaining candidates, which means the
    /// grid can never be completed.
    #[must_use]
    pub fn has_contradiction(&self) -> bool {
        self.cells.iter().any(|cell| !cell.has_value() && cell.candidate_count() == 0)
    }

    /// Consumes this grid and produces the lighter-weight [`SearchGrid`] used by
    /// backtracking. One-way: backtracking never needs candidate sets, only
    /// value-or-empty and row/column/block availability.
    #[must_use]
    pub fn into_search_grid(self) -> SearchGrid {
        let values: Vec<Option<Value>> = self.cells.iter().map(|cell| cell.value()).collect();
        SearchGrid::from_parts(self.n, self.side, values, self.row_free, self.col_free, self.block_free)
    }
}
