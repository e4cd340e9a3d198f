//! CLI-level errors and their process exit codes.

use std::io;

use derive_more::{Display, Error, From};

/// Everything that can keep the CLI from producing a solved grid.
#[derive(Debug, Display, Error, From)]
pub enum CliError {
    /// The `.sud` input was malformed: a value exceeded the grid side, or the file held
    /// fewer entries than `side * side`.
    #[display("invalid puzzle data: {_0}")]
    #[from(ignore)]
    #[error(ignore)]
    InvalidData(String),
    /// Reading the input or writing the output failed.
    #[display("I/O error: {_0}")]
    Io(io::Error),
    /// `N` was rejected (too small, or too large for the candidate bitset width).
    #[display("invalid grid size: {_0}")]
    Grid(sudoku_core::GridError),
    /// Propagation and backtracking together could not complete the grid.
    #[display("{_0}")]
    Solver(sudoku_solver::SolverError),
}

impl CliError {
    /// Maps this error to the process exit code documented for the CLI: a rejected `N`
    /// is an argument problem (`1`); everything else, including an unsolvable puzzle, is
    /// a data problem (`2`), since puzzle validity is squarely a data concern here.
    #[must_use]
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Grid(_) => 1,
            CliError::InvalidData(_) | CliError::Io(_) | CliError::Solver(_) => 2,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_data_and_solver_errors_share_exit_code() {
        let invalid = CliError::InvalidData("short read".to_owned());
        let unsolvable = CliError::Solver(sudoku_solver::SolverError);
        assert_eq!(invalid.exit_code(), unsolvable.exit_code());
    }

    #[test]
    fn display_carries_the_message() {
        let err = CliError::InvalidData("value 99 exceeds side 9".to_owned());
        assert!(err.to_string().contains("value 99 exceeds side 9"));
    }
}
