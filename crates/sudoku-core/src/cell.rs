//! A single grid cell: either a placed value or a set of remaining candidates.

use crate::containers::CandidateSet;
use crate::value::Value;

/// One cell of a [`PropagatedGrid`](crate::PropagatedGrid).
///
/// A cell is either filled (`value` is `Some`, `candidates` is empty) or empty (`value`
/// is `None`, `candidates` holds every value still consistent with the cell's row,
/// column and block). The two halves are kept mutually exclusive by the grid, not by
/// this type: `Cell` itself is a plain data holder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    value: Option<Value>,
    candidates: CandidateSet,
}

impl Cell {
    /// An empty cell whose candidates are every value `1..=side`.
    #[must_use]
    pub const fn empty(side: u8) -> Self {
        Self { value: None, candidates: CandidateSet::full(side) }
    }

    /// Returns the placed value, if any.
    #[must_use]
    pub const fn value(self) -> Option<Value> {
        self.value
    }

    /// Returns `true` if this cell has a placed value.
    #[must_use]
    pub const fn has_value(self) -> bool {
        self.value.is_some()
    }

    /// Returns `true` if `value` is among this cell's remaining candidates.
    #[must_use]
    pub const fn has_candidate(self, value: Value) -> bool {
        self.candidates.contains(value)
    }

    /// Returns the number of remaining candidates.
    #[must_use]
    pub const fn candidate_count(self) -> u32 {
        self.candidates.len()
    }

    /// Returns the full candidate set.
    #[must_use]
    pub const fn candidates(self) -> CandidateSet {
        self.candidates
    }

    /// Returns the smallest remaining candidate, if any.
    #[must_use]
    pub const fn first_candidate(self) -> Option<Value> {
        self.candidates.first()
    }

    /// Returns the `k`-th smallest remaining candidate (1-indexed), if any.
    #[must_use]
    pub fn kth_candidate(self, k: u32) -> Option<Value> {
        self.candidates.nth(k)
    }

    /// Removes `value` from the candidate set, returning whether it was present.
    pub(crate) fn remove_candidate(&mut self, value: Value) -> bool {
        self.candidates.remove(value)
    }

    /// Places `value` and clears the candidate set.
    pub(crate) fn set_value(&mut self, value: Value) {
        self.value = Some(value);
        self.candidates = CandidateSet::empty();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_cell_has_no_value_and_full_candidates() {
        let cell = Cell::empty(9);
        assert!(!cell.has_value());
        assert_eq!(cell.candidate_count(), 9);
        assert!(cell.has_candidate(Value::new(5)));
    }

    #[test]
    fn set_value_clears_candidates() {
        let mut cell = Cell::empty(9);
        cell.set_value(Value::new(3));
        assert_eq!(cell.value(), Some(Value::new(3)));
        assert_eq!(cell.candidate_count(), 0);
    }

    #[test]
    fn remove_candidate_reports_presence() {
        let mut cell = Cell::empty(4);
        assert!(cell.remove_candidate(Value::new(2)));
        assert!(!cell.remove_candidate(Value::new(2)));
        assert!(!cell.has_candidate(Value::new(2)));
    }

    #[test]
    fn first_and_kth_candidate() {
        let mut cell = Cell::empty(4);
        cell.remove_candidate(Value::new(1));
        cell.remove_candidate(Value::new(3));
        assert_eq!(cell.first_candidate(), Some(Value::new(2)));
        assert_eq!(cell.kth_candidate(1), Some(Value::new(2)));
        assert_eq!(cell.kth_candidate(2), Some(Value::new(4)));
        assert_eq!(cell.kth_candidate(3), None);
    }
}
