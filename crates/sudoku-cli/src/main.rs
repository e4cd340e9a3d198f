//! Command-line front end for the sudoku solver.
//!
//! Reads a puzzle from a `.sud` file (or stdin), solves it, and writes the solved grid
//! back out as `.sud` or as pretty-printed text.

use std::fs::File;
use std::io::{self, Read, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use log::{debug, info, warn};
use sudoku_core::Position;

mod error;
mod render;
mod sud_format;

use error::CliError;

/// Solves a square Sudoku puzzle of block side `n` (grid side `n * n`).
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// Block side length; the grid side is `n * n` (9 for classic Sudoku, n = 3).
    n: u8,

    /// Input `.sud` file; reads stdin if omitted.
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Output file; writes stdout if omitted.
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Print the solved grid as human-readable text instead of writing `.sud` bytes.
    #[arg(short, long)]
    pretty: bool,
}

fn main() -> ExitCode {
    env_logger::init();
    let args = Args::parse();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            warn!("{err}");
            eprintln!("error: {err}");
            ExitCode::from(err.exit_code() as u8)
        }
    }
}

fn run(args: &Args) -> Result<(), CliError> {
    let mut reader: Box<dyn Read> = match &args.input {
        Some(path) => Box::new(File::open(path)?),
        None => Box::new(io::stdin()),
    };
    let grid = sud_format::read(&mut reader, args.n)?;
    let side = grid.side();
    info!("solving a grid of block side {} (side {side})", args.n);

    let clue_count = grid.positions().filter(|&pos| grid.cell(pos).has_value()).count();
    debug!("loaded {clue_count} given clue(s) out of {}", usize::from(side) * usize::from(side));

    let solved = sudoku_solver::solve(grid)?;
    info!("puzzle solved");

    let mut writer: Box<dyn Write> = match &args.output {
        Some(path) => Box::new(File::create(path)?),
        None => Box::new(io::stdout()),
    };

    if args.pretty {
        let text = render::render(args.n, side, |pos| solved.value(pos));
        writer.write_all(text.as_bytes())?;
    } else {
        let values = (0..side).flat_map(|row| (0..side).map(move |col| Position::new(row, col))).map(|pos| solved.value(pos));
        sud_format::write(&mut writer, values)?;
    }

    Ok(())
}
