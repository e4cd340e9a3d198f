//! Solver-level errors.

use derive_more::{Display, Error};

/// The grid has no solution.
///
/// Constraint propagation or backtracking found an empty cell with no remaining
/// candidates, or backtracking exhausted every assumption without completing the grid.
#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
#[display("grid has no solution")]
pub struct SolverError;
