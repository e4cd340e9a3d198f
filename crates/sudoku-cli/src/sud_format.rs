//! The `.sud` binary grid format: `side * side` little-endian `u32` entries, row-major,
//! `0` for empty and `1..=side` for a given value.

use std::io::{self, Read, Write};

use sudoku_core::{Position, PropagatedGrid, Value};

use crate::error::CliError;

/// Reads a `.sud` file into a fresh [`PropagatedGrid`] of block side `n`.
///
/// Entries are loaded via [`PropagatedGrid::place_initial`] in file order, which is also
/// row-major order, so a self-contradictory file still loads without error; the
/// contradiction surfaces later, from the solver.
///
/// # Errors
///
/// Returns [`CliError::Io`] if `reader` fails, or [`CliError::InvalidData`] if the file
/// is shorter than `side * side` entries or holds a value greater than `side`.
pub fn read(reader: &mut impl Read, n: u8) -> Result<PropagatedGrid, CliError> {
    let mut grid = PropagatedGrid::new(n)?;
    let side = grid.side();
    let cell_count = usize::from(side) * usize::from(side);

    let mut buf = [0u8; 4];
    for index in 0..cell_count {
        read_exact_or_invalid(reader, &mut buf, index)?;
        let raw = u32::from_le_bytes(buf);
        if raw == 0 {
            continue;
        }
        if raw > u32::from(side) {
            return Err(CliError::InvalidData(format!(
                "entry {index} has value {raw}, which exceeds the grid side {side}"
            )));
        }
        let row = (index / usize::from(side)) as u8;
        let col = (index % usize::from(side)) as u8;
        grid.place_initial(Position::new(row, col), Value::new(raw as u8));
    }
    Ok(grid)
}

fn read_exact_or_invalid(reader: &mut impl Read, buf: &mut [u8; 4], index: usize) -> Result<(), CliError> {
    match reader.read_exact(buf) {
        Ok(()) => Ok(()),
        Err(err) if err.kind() == io::ErrorKind::UnexpectedEof => {
            Err(CliError::InvalidData(format!("file ended before entry {index}")))
        }
        Err(err) => Err(CliError::Io(err)),
    }
}

/// Writes every cell of `values`, row-major, to `writer` in `.sud` format; an absent
/// value is written as `0`.
///
/// # Errors
///
/// Returns [`CliError::Io`] if `writer` fails.
pub fn write(writer: &mut impl Write, values: impl Iterator<Item = Option<Value>>) -> Result<(), CliError> {
    for value in values {
        let raw: u32 = value.map_or(0, |v| u32::from(v.get()));
        writer.write_all(&raw.to_le_bytes())?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use sudoku_core::SearchGrid;

    use super::*;

    fn encode(entries: &[u32]) -> Vec<u8> {
        let mut buf = Vec::new();
        for &entry in entries {
            buf.extend_from_slice(&entry.to_le_bytes());
        }
        buf
    }

    #[test]
    fn reads_given_values_in_row_major_order() {
        let mut entries = vec![0u32; 16];
        entries[0] = 1;
        entries[5] = 3;
        let bytes = encode(&entries);
        let grid = read(&mut Cursor::new(bytes), 2).unwrap();
        assert_eq!(grid.cell(Position::new(0, 0)).value(), Some(Value::new(1)));
        assert_eq!(grid.cell(Position::new(1, 1)).value(), Some(Value::new(3)));
        assert!(!grid.cell(Position::new(0, 1)).has_value());
    }

    #[test]
    fn rejects_a_value_above_the_grid_side() {
        let entries = vec![5u32; 16];
        let bytes = encode(&entries);
        let err = read(&mut Cursor::new(bytes), 2).unwrap_err();
        assert!(matches!(err, CliError::InvalidData(_)));
    }

    #[test]
    fn rejects_a_short_file() {
        let bytes = encode(&[1u32; 4]);
        let err = read(&mut Cursor::new(bytes), 2).unwrap_err();
        assert!(matches!(err, CliError::InvalidData(_)));
    }

    #[test]
    fn round_trips_an_unfilled_grid() {
        let mut entries = vec![0u32; 16];
        entries[0] = 2;
        let bytes = encode(&entries);
        let grid = read(&mut Cursor::new(bytes.clone()), 2).unwrap();
        let search: SearchGrid = grid.into_search_grid();

        let mut out = Vec::new();
        write(&mut out, (0..16).map(|i| search.value(Position::new(i / 4, i % 4)))).unwrap();
        assert_eq!(out, bytes);
    }
}
