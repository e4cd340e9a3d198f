//! The solver facade: constraint propagation to a fixpoint, then backtracking.

use sudoku_core::{PropagatedGrid, SearchGrid};

use crate::error::SolverError;
use crate::{backtrack, fixpoint, xwing};

/// Solves `grid`, running deterministic techniques to a fixpoint before falling back to
/// backtracking search for whatever remains.
///
/// # Errors
///
/// Returns [`SolverError`] if the grid has no solution. The puzzle's validity is
/// conclusively determined only here: deterministic techniques never themselves observe
/// a contradiction, they simply stop making progress.
pub fn solve(mut grid: PropagatedGrid) -> Result<SearchGrid, SolverError> {
    loop {
        let mut progress = fixpoint::perform_simple_techniques(&mut grid);
        progress |= xwing::apply(&mut grid);
        if !progress {
            break;
        }
    }

    backtrack::solve(grid.into_search_grid())
}

#[cfg(test)]
mod tests {
    use sudoku_core::{CandidateSet, Position, Value};

    use super::*;
    use crate::testing::grid_from_clues;

    #[test]
    fn solves_an_easy_puzzle_via_propagation_alone() {
        let grid = grid_from_clues(
            3,
            "
            53..7....
            6..195...
            .98....6.
            8...6...3
            4..8.3..1
            7...2...6
            .6....28.
            ...419..5
            ....8..79
        ",
        );
        let solved = solve(grid).expect("solvable");
        assert!(solved.is_complete());
        assert_eq!(solved.value(Position::new(0, 0)), Some(Value::new(5)));
    }

    #[test]
    fn rejects_a_contradictory_puzzle() {
        let grid = grid_from_clues(
            2,
            "
            11..
            ....
            ....
            ....
        ",
        );
        assert!(solve(grid).is_err());
    }

    #[test]
    fn solves_the_empty_grid_by_backtracking_alone() {
        let grid = PropagatedGrid::new(3).unwrap();
        let solved = solve(grid).expect("solvable");
        assert!(solved.is_complete());
    }

    /// A fully pre-solved grid: every cell is already a given, so `empty_positions()` is
    /// empty and backtracking's search trivially succeeds at depth 0 without trying any
    /// value. The solver must return the input unchanged.
    #[test]
    fn fully_solved_input_is_returned_unchanged() {
        let grid = grid_from_clues(
            2,
            "
            1234
            3412
            2341
            4123
        ",
        );
        let positions: Vec<Position> = grid.positions().collect();
        let given: Vec<Value> = positions.iter().map(|&pos| grid.cell(pos).value().expect("fully solved input")).collect();

        let solved = solve(grid).expect("a fully solved grid is trivially solvable");
        assert!(solved.is_complete());
        for (&pos, &value) in positions.iter().zip(&given) {
            assert_eq!(solved.value(pos), Some(value));
        }
    }

    /// Arto Inkala's "AI Escargot" (23 givens), a puzzle constructed specifically to
    /// resist the simple deterministic techniques and force deep backtracking. This
    /// checks the facade runs propagation to its fixpoint (which alone cannot finish this
    /// puzzle) and then completes it by search, producing a legal grid that preserves
    /// every given.
    #[test]
    fn solves_a_puzzle_that_requires_backtracking() {
        let grid = grid_from_clues(
            3,
            "
            1....7.9.
            .3..2...8
            ..96..5..
            ..53..9..
            .1..8...2
            6....4...
            3......1.
            .4......7
            ..7....3.
        ",
        );
        let positions: Vec<Position> = grid.positions().collect();
        let given: Vec<Option<Value>> = positions.iter().map(|&pos| grid.cell(pos).value()).collect();

        let solved = solve(grid).expect("AI Escargot has a unique solution");
        assert!(solved.is_complete());
        for (&pos, &value) in positions.iter().zip(&given) {
            if let Some(value) = value {
                assert_eq!(solved.value(pos), Some(value));
            }
        }
        for row in 0..9u8 {
            assert!(is_permutation(9, (0..9u8).map(|col| solved.value(Position::new(row, col)).unwrap())));
        }
        for col in 0..9u8 {
            assert!(is_permutation(9, (0..9u8).map(|row| solved.value(Position::new(row, col)).unwrap())));
        }
        for block in 0..9u8 {
            assert!(is_permutation(9, (0..9u8).map(|cell| solved.value(Position::from_block(3, block, cell)).unwrap())));
        }
    }

    /// Returns `true` if `values` is exactly the set `1..=side`, with no repeats.
    fn is_permutation(side: u8, values: impl Iterator<Item = Value>) -> bool {
        let mut set = CandidateSet::empty();
        let mut count = 0u32;
        for value in values {
            set.insert(value);
            count += 1;
        }
        count == u32::from(side) && set.len() == u32::from(side)
    }
}

#[cfg(test)]
mod proptests {
    use proptest::prelude::*;
    use sudoku_core::{CandidateSet, Position, Value};

    use super::*;
    use crate::testing::grid_from_canonical_subset;

    fn clue_subset() -> impl Strategy<Value = Vec<bool>> {
        prop::collection::vec(any::<bool>(), 16)
    }

    proptest! {
        /// Any subset of a legal solved grid's clues is solvable, and the result is a
        /// legal grid that preserves every given. Covers both "sudoku legality" and
        /// "initial-value preservation" from the testable-properties list at once.
        #[test]
        fn any_consistent_clue_subset_solves_to_a_legal_grid(include in clue_subset()) {
            let grid = grid_from_canonical_subset(2, &include);
            let positions: Vec<Position> = grid.positions().collect();
            let given: Vec<Option<Value>> = positions.iter().map(|&pos| grid.cell(pos).value()).collect();

            let solved = solve(grid).expect("a canonical-grid subset is always solvable");
            prop_assert!(solved.is_complete());

            for (&pos, &value) in positions.iter().zip(&given) {
                if let Some(value) = value {
                    prop_assert_eq!(solved.value(pos), Some(value));
                }
            }
            for row in 0..4u8 {
                let mut set = CandidateSet::empty();
                for col in 0..4u8 {
                    set.insert(solved.value(Position::new(row, col)).unwrap());
                }
                prop_assert_eq!(set.len(), 4);
            }
        }
    }
}
