//! The search-phase grid: values and row/column/block availability only.

use crate::containers::CandidateSet;
use crate::position::Position;
use crate::value::Value;

/// The grid during backtracking search.
///
/// Produced once, by consuming a [`PropagatedGrid`](crate::PropagatedGrid), after
/// constraint propagation has run to a fixpoint. Backtracking only ever needs to know
/// whether a position is empty and whether a value is still free in its row, column and
/// block; it never needs per-cell candidate sets, so this type drops them to keep the
/// per-assumption clone/restore cycle cheap.
#[derive(Debug, Clone)]
pub struct SearchGrid {
    n: u8,
    side: u8,
    values: Vec<Option<Value>>,
    row_free: Vec<CandidateSet>,
    col_free: Vec<CandidateSet>,
    block_free: Vec<CandidateSet>,
}

impl SearchGrid {
    /// Builds a `SearchGrid` from its raw parts. Only called by
    /// [`PropagatedGrid::into_search_grid`](crate::PropagatedGrid::into_search_grid).
    pub(crate) fn from_parts(
        n: u8,
        side: u8,
        values: Vec<Option<Value>>,
        row_free: Vec<CandidateSet>,
        col_free: Vec<CandidateSet>,
        block_free: Vec<CandidateSet>,
    ) -> Self {
        Self { n, side, values, row_free, col_free, block_free }
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

    /// Returns the value at `pos`, if placed.
    #[must_use]
    pub fn value(&self, pos: Position) -> Option<Value> {
        self.values[pos.linear_index(self.side)]
    }

    /// Returns `true` if `pos` has no value yet.
    #[must_use]
    pub fn is_empty(&self, pos: Position) -> bool {
        self.value(pos).is_none()
    }

    /// Returns `true` if `value` is still free in `pos`'s row, column and block.
    #[must_use]
    pub fn possible(&self, pos: Position, value: Value) -> bool {
        self.row_free[usize::from(pos.row())].contains(value)
            && self.col_free[usize::from(pos.col())].contains(value)
            && self.block_free[usize::from(pos.block_index(self.n))].contains(value)
    }

    /// Places `value` at `pos` and marks it unavailable in the position's row, column
    /// and block.
    ///
    /// # Panics
    ///
    /// Panics (debug builds) if `pos` already has a value.
    pub fn set_value(&mut self, pos: Position, value: Value) {
        debug_assert!(self.is_empty(pos), "cell already has a value");
        self.values[pos.linear_index(self.side)] = Some(value);
        self.row_free[usize::from(pos.row())].remove(value);
        self.col_free[usize::from(pos.col())].remove(value);
        self.block_free[usize::from(pos.block_index(self.n))].remove(value);
    }

    /// Clears the value at `pos` and restores `value`'s availability in its row, column
    /// and block. Used to undo a backtracking assumption.
    ///
    /// # Panics
    ///
    /// Panics (debug builds) if `pos` does not currently hold `value`.
    pub fn unset_value(&mut self, pos: Position, value: Value) {
        debug_assert_eq!(self.value(pos), Some(value), "position does not hold this value");
        self.values[pos.linear_index(self.side)] = None;
        self.row_free[usize::from(pos.row())].insert(value);
        self.col_free[usize::from(pos.col())].insert(value);
        self.block_free[usize::from(pos.block_index(self.n))].insert(value);
    }

    /// Returns every still-empty position, in row-major order.
    pub fn empty_positions(&self) -> impl Iterator<Item = Position> + '_ {
        let side = self.side;
        (0..side)
            .flat_map(move |row| (0..side).map(move |col| Position::new(row, col)))
            .filter(move |pos| self.is_empty(*pos))
    }

    /// Returns `true` if every cell has a value.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.values.iter().all(Option::is_some)
    }
}
