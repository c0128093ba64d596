use derive_more::{Display, Error, From};
use sudolve_core::ConsistencyError;

/// Error returned when a puzzle cannot be solved.
///
/// Both variants are terminal for the solve call: there is no retry and
/// no partial result. They stay distinct so a caller can report "the
/// puzzle contradicts itself" separately from "no solution was found".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error, From)]
pub enum SolveError {
    /// The initial grid already violates row/column/region uniqueness.
    ///
    /// Detected by the pre-check before any propagation runs.
    #[display("puzzle is inconsistent: {_0}")]
    #[from]
    Inconsistent(ConsistencyError),
    /// Propagation stalled with blank cells remaining, or some blank
    /// cell ran out of candidates.
    ///
    /// This also covers puzzles that are only solvable by search:
    /// single-candidate elimination cannot distinguish them from truly
    /// contradictory grids.
    #[display("no solution found")]
    Unsolvable,
}
