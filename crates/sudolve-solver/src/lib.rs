//! Constraint-propagation solving for 9x9 Sudoku grids.
//!
//! This crate builds on [`sudolve_core`] and provides:
//!
//! - [`PropagationSolver`]: repeated single-candidate elimination over
//!   a grid until it is filled or propagation stalls
//! - [`check_placement`]: validation of one proposed digit placement,
//!   with per-view conflict reporting
//! - [`SolveError`]: the typed failure taxonomy (inconsistent puzzle
//!   vs. no solution found)
//!
//! # Examples
//!
//! ```
//! use sudolve_core::Grid;
//! use sudolve_solver::{PropagationSolver, SolveError};
//!
//! let solver = PropagationSolver::new();
//!
//! // An empty grid gives propagation nothing to work with
//! let empty = Grid::new();
//! assert_eq!(solver.solve(&empty), Err(SolveError::Unsolvable));
//! ```

pub use self::{error::*, placement::*, solver::*};

mod error;
mod placement;
mod solver;
