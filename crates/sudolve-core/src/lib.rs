//! Core data model for 9x9 Sudoku validation and solving.
//!
//! This crate provides the grid representation and the pure operations
//! the solver is built on:
//!
//! - [`digit`]: type-safe digits 1-9 ([`Digit`]); blanks are `Option`
//! - [`digit_set`]: candidate sets as a `u16` bitset ([`DigitSet`])
//! - [`position`]: board coordinates, flat-index and region math, and
//!   the user-facing `A1`-`I9` coordinate form ([`Position`])
//! - [`grid`]: the 81-cell grid with puzzle-string parsing and
//!   formatting ([`Grid`])
//! - [`view`]: derived row/column/region projections, consistency
//!   checking, and candidate computation ([`ViewKind`])
//!
//! The grid is the single source of truth; row, column, and region
//! views are always re-derived from it, never stored separately.
//!
//! # Examples
//!
//! ```
//! use sudolve_core::{Digit, Grid, Position};
//!
//! let grid: Grid =
//!     "5..91372.3...8.5.9.9.25..8.68.47.23...95..46.7.4.....5.2.......4..8916..85.72...3"
//!         .parse()?;
//!
//! grid.check_consistency().expect("puzzle has no duplicates");
//!
//! let candidates = grid.candidates_at(Position::new(0, 1));
//! assert!(!candidates.contains(Digit::D5)); // 5 already in row A
//! # Ok::<(), sudolve_core::ParseGridError>(())
//! ```

pub mod digit;
pub mod digit_set;
pub mod grid;
pub mod position;
pub mod view;

pub use self::{
    digit::Digit,
    digit_set::DigitSet,
    grid::{Cell, Grid, ParseGridError},
    position::{ParsePositionError, Position},
    view::{ConsistencyError, View, ViewKind},
};
