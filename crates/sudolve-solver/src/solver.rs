use sudolve_core::{Grid, Position};
use tinyvec::ArrayVec;

use crate::SolveError;

/// A solver that fills a grid by repeated single-candidate elimination.
///
/// The solver scans blank cells in increasing flat-index order and
/// commits every cell whose candidate set is a singleton. Because the
/// grid is the single source of truth and views are re-derived from it,
/// a commit is immediately visible to the candidate computation of
/// later cells in the same pass; that in-pass ordering is part of the
/// solver's contract and keeps results reproducible.
///
/// This is deliberately *not* a backtracking search. Puzzles whose
/// solution requires guessing report [`SolveError::Unsolvable`] even
/// when a unique solution exists.
///
/// The solver is stateless and reentrant; one value may be shared
/// across any number of calls.
///
/// # Examples
///
/// ```
/// use sudolve_core::Grid;
/// use sudolve_solver::PropagationSolver;
///
/// let puzzle: Grid =
///     "5..91372.3...8.5.9.9.25..8.68.47.23...95..46.7.4.....5.2.......4..8916..85.72...3"
///         .parse()?;
///
/// let solver = PropagationSolver::new();
/// let solved = solver.solve(&puzzle)?;
/// assert!(solved.is_complete());
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Default, Clone, Copy)]
pub struct PropagationSolver;

impl PropagationSolver {
    /// Creates a new solver.
    #[must_use]
    pub const fn new() -> Self {
        PropagationSolver
    }

    /// Solves a puzzle, returning the fully-filled grid.
    ///
    /// The input grid is left untouched; solving works on a copy. A
    /// complete, consistent input is returned unchanged without a
    /// propagation pass.
    ///
    /// # Errors
    ///
    /// - [`SolveError::Inconsistent`] if the grid fails the row /
    ///   column / region uniqueness pre-check. No propagation is
    ///   attempted in that case.
    /// - [`SolveError::Unsolvable`] if some blank cell runs out of
    ///   candidates, or a full pass commits nothing while blanks
    ///   remain (propagation stalled).
    pub fn solve(&self, grid: &Grid) -> Result<Grid, SolveError> {
        grid.check_consistency()?;

        let mut work = grid.clone();
        let mut blanks: ArrayVec<[Position; 81]> = work.blank_positions().collect();
        while !blanks.is_empty() {
            let mut remaining = ArrayVec::<[Position; 81]>::new();
            for &pos in blanks.iter() {
                let candidates = work.candidates_at(pos);
                match candidates.as_single() {
                    Some(digit) => work.set(pos, Some(digit)),
                    None if candidates.is_empty() => return Err(SolveError::Unsolvable),
                    None => remaining.push(pos),
                }
            }
            if remaining.len() == blanks.len() {
                // No commit in a full pass: single-candidate
                // elimination has stalled.
                return Err(SolveError::Unsolvable);
            }
            blanks = remaining;
        }
        Ok(work)
    }
}

#[cfg(test)]
mod tests {
    use sudolve_core::{ConsistencyError, Digit, ViewKind};

    use super::*;

    const PUZZLE: &str =
        "5..91372.3...8.5.9.9.25..8.68.47.23...95..46.7.4.....5.2.......4..8916..85.72...3";
    const SOLUTION: &str =
        "568913724342687519197254386685479231219538467734162895926345178473891652851726943";

    fn solve(text: &str) -> Result<Grid, SolveError> {
        PropagationSolver::new().solve(&text.parse().unwrap())
    }

    #[test]
    fn test_solves_by_elimination_alone() {
        let solved = solve(PUZZLE).unwrap();
        assert_eq!(solved.to_string(), SOLUTION);
    }

    #[test]
    fn test_complete_grid_echoes() {
        let solved = solve(SOLUTION).unwrap();
        assert_eq!(solved.to_string(), SOLUTION);
    }

    #[test]
    fn test_inconsistent_grid_fails_precheck() {
        // Two 5s in row A
        let text = format!("5...5{}", ".".repeat(76));
        assert_eq!(
            solve(&text),
            Err(SolveError::Inconsistent(ConsistencyError::DuplicateDigit(
                ViewKind::Rows,
            ))),
        );
    }

    #[test]
    fn test_complete_but_inconsistent_grid_fails() {
        // A filled grid with a duplicated digit is rejected, not echoed
        let mut text = SOLUTION.to_string();
        text.replace_range(0..1, "6");
        assert!(matches!(solve(&text), Err(SolveError::Inconsistent(_))));
    }

    #[test]
    fn test_empty_grid_stalls() {
        // Every cell keeps all nine candidates, so the first pass
        // commits nothing
        let text = ".".repeat(81);
        assert_eq!(solve(&text), Err(SolveError::Unsolvable));
    }

    #[test]
    fn test_search_requiring_puzzle_is_unsolvable() {
        // Solvable by backtracking, but not by single-candidate
        // elimination; the documented limitation reports it as
        // unsolvable
        let text =
            "4.....8.5.3..........7......2.....6.....8.4......1.......6.3.7.5..2.....1.4......";
        assert_eq!(solve(text), Err(SolveError::Unsolvable));
    }

    #[test]
    fn test_exhausted_cell_is_unsolvable() {
        // Consistent grid where (0, 0) sees all nine digits across its
        // row, column, and region
        let mut grid = Grid::new();
        for (col, digit) in [Digit::D1, Digit::D2, Digit::D3, Digit::D4, Digit::D5]
            .into_iter()
            .enumerate()
        {
            #[expect(clippy::cast_possible_truncation)]
            let col = col as u8 + 1;
            grid.set(Position::new(0, col), Some(digit));
        }
        grid.set(Position::new(1, 0), Some(Digit::D6));
        grid.set(Position::new(2, 0), Some(Digit::D7));
        grid.set(Position::new(3, 0), Some(Digit::D8));
        grid.set(Position::new(1, 1), Some(Digit::D9));

        assert_eq!(grid.check_consistency(), Ok(()));
        assert!(grid.candidates_at(Position::new(0, 0)).is_empty());
        assert_eq!(
            PropagationSolver::new().solve(&grid),
            Err(SolveError::Unsolvable),
        );
    }

    #[test]
    fn test_input_grid_untouched() {
        let grid: Grid = PUZZLE.parse().unwrap();
        let _ = PropagationSolver::new().solve(&grid).unwrap();
        assert_eq!(grid.to_string(), PUZZLE);
    }
}
