//! Bitset container for candidate values.

use std::fmt::{self, Debug};
use std::ops::{BitOr, BitOrAssign};

use crate::value::Value;

/// A set of candidate [`Value`]s, backed by a single `u32`.
///
/// Bit `v - 1` represents whether value `v` is a member. This bounds the supported grid
/// side at [`Value::MAX`] (32), which covers every block size this crate accepts (`N` up
/// to 5).
///
/// # Examples
///
/// ```
/// use sudoku_core::{Value, containers::CandidateSet};
///
/// let mut set = CandidateSet::full(9);
/// assert_eq!(set.len(), 9);
///
/// set.remove(Value::new(5));
/// assert!(!set.contains(Value::new(5)));
/// assert_eq!(set.len(), 8);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct CandidateSet(u32);

impl CandidateSet {
    /// The empty set.
    #[must_use]
    pub const fn empty() -> Self {
        Self(0)
    }

    /// The set containing every value `1..=side`.
    #[must_use]
    pub const fn full(side: u8) -> Self {
        if side == 32 {
            Self(u32::MAX)
        } else {
            Self((1u32 << side) - 1)
        }
    }

    /// Returns `true` if `value` is a member.
    #[must_use]
    pub const fn contains(self, value: Value) -> bool {
        (self.0 >> value.bit_index()) & 1 != 0
    }

    /// Adds `value` to the set.
    pub fn insert(&mut self, value: Value) {
        self.0 |= 1 << value.bit_index();
    }

    /// Removes `value` from the set, returning whether it was present.
    pub fn remove(&mut self, value: Value) -> bool {
        let was_present = self.contains(value);
        self.0 &= !(1 << value.bit_index());
        was_present
    }

    /// Returns the number of members.
    #[must_use]
    pub const fn len(self) -> u32 {
        self.0.count_ones()
    }

    /// Returns `true` if the set has no members.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Returns the smallest member, if any.
    #[must_use]
    pub const fn first(self) -> Option<Value> {
        if self.0 == 0 {
            None
        } else {
            Some(Value::from_bit_index(self.0.trailing_zeros()))
        }
    }

    /// Returns the `k`-th smallest member (1-indexed), if `k <= len()`.
    #[must_use]
    pub fn nth(self, k: u32) -> Option<Value> {
        if k == 0 {
            return None;
        }
        self.iter().nth((k - 1) as usize)
    }

    /// Iterates members in ascending order.
    pub fn iter(self) -> impl Iterator<Item = Value> {
        (0..32).filter(move |&bit| (self.0 >> bit) & 1 != 0).map(Value::from_bit_index)
    }
}

impl BitOr for CandidateSet {
    type Output = Self;
    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl BitOrAssign for CandidateSet {
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

impl Debug for CandidateSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter().map(Value::get)).finish()
    }
}
