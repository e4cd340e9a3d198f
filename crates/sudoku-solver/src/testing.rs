//! Test-only helpers for building grids from a compact textual layout, and for
//! generating always-consistent grids for property-based tests.

use sudoku_core::{Position, PropagatedGrid, Value};

/// Builds a [`PropagatedGrid`] of block side `n` from `layout`.
///
/// `layout` is read left to right, top to bottom, keeping only ASCII digits and `.`;
/// everything else (whitespace, block-separator characters) is ignored, so callers can
/// format puzzles readably. `.` and `0` mean an empty cell; any other digit is loaded via
/// [`PropagatedGrid::place_initial`].
///
/// # Panics
///
/// Panics if `layout` does not contain exactly `side * side` digit/`.` tokens.
pub fn grid_from_clues(n: u8, layout: &str) -> PropagatedGrid {
    let mut grid = PropagatedGrid::new(n).expect("valid block side in test layout");
    let side = grid.side();
    let tokens: Vec<char> = layout.chars().filter(|c| c.is_ascii_digit() || *c == '.').collect();
    assert_eq!(tokens.len(), usize::from(side) * usize::from(side), "layout must have side*side tokens");

    for (index, token) in tokens.into_iter().enumerate() {
        if token == '.' || token == '0' {
            continue;
        }
        let row = (index / usize::from(side)) as u8;
        let col = (index % usize::from(side)) as u8;
        let value = Value::new(token.to_digit(10).expect("filtered to digits") as u8);
        grid.place_initial(Position::new(row, col), value);
    }
    grid
}

/// The value at `(row, col)` in a simple Latin-square construction, valid for any block
/// side `n` regardless of which cells end up kept.
///
/// Used only to build property-test fixtures: loading any subset of this grid's cells
/// via [`PropagatedGrid::place_initial`] can never produce a row/column/block conflict,
/// since the full grid itself is a legal solved grid.
pub fn canonical_value(n: u8, row: u8, col: u8) -> Value {
    let side = u32::from(n) * u32::from(n);
    let row = u32::from(row);
    let col = u32::from(col);
    let n = u32::from(n);
    Value::new((((row * n + row / n + col) % side) + 1) as u8)
}

/// Builds a [`PropagatedGrid`] of block side `n` keeping only the canonical-grid cells
/// for which `include` is `true` (row-major, `side * side` entries).
///
/// # Panics
///
/// Panics if `include.len() != side * side`.
pub fn grid_from_canonical_subset(n: u8, include: &[bool]) -> PropagatedGrid {
    let mut grid = PropagatedGrid::new(n).expect("valid block side in test fixture");
    let side = grid.side();
    assert_eq!(include.len(), usize::from(side) * usize::from(side));

    for row in 0..side {
        for col in 0..side {
            let index = usize::from(row) * usize::from(side) + usize::from(col);
            if include[index] {
                grid.place_initial(Position::new(row, col), canonical_value(n, row, col));
            }
        }
    }
    grid
}
