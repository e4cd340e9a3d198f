//! Textual pretty-printing of a grid, with block separators.

use std::fmt::Write as _;

use sudoku_core::{Position, Value};

/// Renders a grid's values as human-readable text, with `|`/`-`/`+` block separators and
/// values right-padded to fit the widest possible value for `side`.
///
/// `value` is called once per cell, in row-major order; `None` renders as `.`.
#[must_use]
pub fn render(n: u8, side: u8, mut value: impl FnMut(Position) -> Option<Value>) -> String {
    let width = digit_count(side);
    let mut out = String::new();

    for row in 0..side {
        if row != 0 && row % n == 0 {
            write_separator_row(&mut out, n, side, width);
        }
        for col in 0..side {
            if col != 0 && col % n == 0 {
                out.push('|');
            }
            let cell = match value(Position::new(row, col)) {
                Some(v) => v.to_string(),
                None => ".".to_owned(),
            };
            let _ = write!(out, " {cell:>width$}");
        }
        out.push('\n');
    }
    out
}

fn write_separator_row(out: &mut String, n: u8, side: u8, width: usize) {
    for col in 0..side {
        if col != 0 && col % n == 0 {
            out.push('+');
        }
        for _ in 0..=width {
            out.push('-');
        }
    }
    out.push('\n');
}

/// The number of decimal digits needed to print `side`.
fn digit_count(side: u8) -> usize {
    side.to_string().len()
}
