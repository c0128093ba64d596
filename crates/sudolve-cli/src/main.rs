//! Command-line front end for the Sudolve engine.
//!
//! Puzzles are 81-character strings in row-major order, with `1`-`9`
//! for digits and `.` (or `0`) for blanks. Cell coordinates use a row
//! letter `A`-`I` and a column digit `1`-`9`.
//!
//! # Usage
//!
//! Solve a puzzle:
//!
//! ```sh
//! sudolve solve '5..91372.3...8.5.9.9.25..8.68.47.23...95..46.7.4.....5.2.......4..8916..85.72...3'
//! ```
//!
//! Solve a batch, one puzzle per line on stdin:
//!
//! ```sh
//! sudolve solve < puzzles.txt
//! ```
//!
//! Check a single placement, or list a cell's candidates:
//!
//! ```sh
//! sudolve check "$PUZZLE" A2 6
//! sudolve candidates "$PUZZLE" A2
//! ```

use std::{
    io::{self, BufRead as _},
    process::ExitCode,
};

use clap::{Parser, Subcommand};
use sudolve_core::{Digit, Grid, Position};
use sudolve_solver::{Conflicts, Placement, PropagationSolver, check_placement};

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Solve puzzles given as 81-character strings.
    Solve {
        /// Puzzle string; when omitted, puzzles are read line by line
        /// from stdin.
        puzzle: Option<String>,
        /// Print solutions as 9-line blocks instead of flat lines.
        #[arg(long)]
        pretty: bool,
    },
    /// Check whether a value may be placed at a coordinate.
    Check {
        /// Puzzle string.
        puzzle: String,
        /// Cell coordinate, like `A2`.
        coordinate: String,
        /// Value to test.
        #[arg(value_parser = clap::value_parser!(u8).range(1..=9))]
        value: u8,
    },
    /// List the candidate digits for a blank cell.
    Candidates {
        /// Puzzle string.
        puzzle: String,
        /// Cell coordinate, like `A2`.
        coordinate: String,
    },
}

fn main() -> ExitCode {
    env_logger::init();

    let args = Args::parse();
    match run(args.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(message) => {
            eprintln!("error: {message}");
            ExitCode::FAILURE
        }
    }
}

fn run(command: Command) -> Result<(), String> {
    match command {
        Command::Solve { puzzle, pretty } => match puzzle {
            Some(puzzle) => solve_one(&puzzle, pretty),
            None => solve_stdin(pretty),
        },
        Command::Check {
            puzzle,
            coordinate,
            value,
        } => {
            let grid = parse_grid(&puzzle)?;
            let pos = parse_coordinate(&coordinate)?;
            report_placement(check_placement(&grid, pos, Digit::from_value(value)));
            Ok(())
        }
        Command::Candidates { puzzle, coordinate } => {
            let grid = parse_grid(&puzzle)?;
            let pos = parse_coordinate(&coordinate)?;
            let candidates = grid.candidates_at(pos);
            if candidates.is_empty() {
                println!("(none)");
            } else {
                let digits: Vec<String> = candidates.iter().map(|d| d.to_string()).collect();
                println!("{}", digits.join(" "));
            }
            Ok(())
        }
    }
}

fn parse_grid(puzzle: &str) -> Result<Grid, String> {
    puzzle.parse().map_err(|err| format!("{err}"))
}

fn parse_coordinate(coordinate: &str) -> Result<Position, String> {
    coordinate.parse().map_err(|err| format!("{err}"))
}

fn solve_one(puzzle: &str, pretty: bool) -> Result<(), String> {
    let grid = parse_grid(puzzle)?;
    let solved = PropagationSolver::new()
        .solve(&grid)
        .map_err(|err| format!("{err}"))?;
    if pretty {
        print!("{}", solved.to_pretty_string());
    } else {
        println!("{solved}");
    }
    Ok(())
}

fn solve_stdin(pretty: bool) -> Result<(), String> {
    let mut total = 0usize;
    let mut failed = 0usize;
    for line in io::stdin().lock().lines() {
        let line = line.map_err(|err| format!("{err}"))?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        total += 1;
        if let Err(message) = solve_one(line, pretty) {
            eprintln!("puzzle {total}: {message}");
            failed += 1;
        }
    }
    log::debug!("solved {}/{total} puzzles", total - failed);
    if failed > 0 {
        return Err(format!("{failed} of {total} puzzles failed"));
    }
    Ok(())
}

fn report_placement(placement: Placement) {
    match placement {
        Placement::Valid => println!("valid"),
        Placement::Occupied => println!("invalid: cell already holds a different digit"),
        Placement::Conflicts(conflicts) => {
            let names: Vec<&str> = [
                (Conflicts::ROW, "row"),
                (Conflicts::COLUMN, "column"),
                (Conflicts::REGION, "region"),
            ]
            .iter()
            .filter(|(flag, _)| conflicts.contains(*flag))
            .map(|(_, name)| *name)
            .collect();
            println!("invalid: conflict in {}", names.join(", "));
        }
    }
}
