//! Core data model for sudoku grids of generic block size.
//!
//! This crate is organized around two grid types representing the two phases of
//! solving:
//!
//! - [`PropagatedGrid`] carries, for every empty cell, the set of values still
//!   consistent with its row, column and block. Constraint-propagation techniques
//!   (naked single, hidden single, naked pair, hidden pair, X-wing, all in
//!   `sudoku-solver`) read and narrow these candidate sets.
//! - [`SearchGrid`] drops candidate sets entirely, keeping only placed values and
//!   row/column/block availability. It is reached from a `PropagatedGrid` via
//!   [`PropagatedGrid::into_search_grid`], a one-way conversion: backtracking search
//!   clones and mutates `SearchGrid`s cheaply, without the bookkeeping propagation
//!   needs.
//!
//! Grid dimensions are a runtime property (`n`, the block side, with `S = n * n` the
//! full grid side), not a compile-time constant, since the block size is selected by
//! the caller at solve time.

pub mod cell;
pub mod containers;
pub mod error;
pub mod grid;
pub mod position;
pub mod search_grid;
pub mod value;

pub use cell::Cell;
pub use containers::CandidateSet;
pub use error::GridError;
pub use grid::{Group, PropagatedGrid};
pub use position::Position;
pub use search_grid::SearchGrid;
pub use value::Value;
