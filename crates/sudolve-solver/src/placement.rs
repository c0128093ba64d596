//! Ad-hoc placement validation.
//!
//! Answers "may this digit go in this cell?" for a single proposed
//! placement, reporting which of the cell's row, column, and region
//! already contain the digit when it may not.

use derive_more::IsVariant;
use sudolve_core::{Digit, Grid, Position};

bitflags::bitflags! {
    /// The views in which a proposed placement clashes with an
    /// existing digit.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct Conflicts: u8 {
        /// The digit is already present in the cell's row.
        const ROW = 1;
        /// The digit is already present in the cell's column.
        const COLUMN = 1 << 1;
        /// The digit is already present in the cell's region.
        const REGION = 1 << 2;
    }
}

/// The outcome of checking a single proposed placement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, IsVariant)]
pub enum Placement {
    /// The digit may be placed: the cell is blank and the digit is
    /// among its candidates, or the cell already holds this digit.
    Valid,
    /// The cell is blank, but the digit clashes with its row, column,
    /// or region. At least one flag is set.
    Conflicts(Conflicts),
    /// The cell already holds a different digit.
    Occupied,
}

/// Checks whether `digit` may be placed at `pos`.
///
/// A blank cell accepts any digit in its candidate set; otherwise the
/// returned conflicts name every group that already holds the digit. A
/// filled cell accepts only its own digit.
///
/// # Examples
///
/// ```
/// use sudolve_core::{Digit, Grid, Position};
/// use sudolve_solver::{Placement, check_placement};
///
/// let grid: Grid =
///     "5..91372.3...8.5.9.9.25..8.68.47.23...95..46.7.4.....5.2.......4..8916..85.72...3"
///         .parse()?;
///
/// let a2: Position = "A2".parse()?;
/// assert_eq!(check_placement(&grid, a2, Digit::D6), Placement::Valid);
/// assert!(check_placement(&grid, a2, Digit::D1).is_conflicts());
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[must_use]
pub fn check_placement(grid: &Grid, pos: Position, digit: Digit) -> Placement {
    match grid.get(pos) {
        Some(existing) if existing == digit => Placement::Valid,
        Some(_) => Placement::Occupied,
        None => {
            if grid.candidates_at(pos).contains(digit) {
                return Placement::Valid;
            }
            let cell = Some(digit);
            let mut conflicts = Conflicts::empty();
            conflicts.set(Conflicts::ROW, grid.row(pos.row()).contains(&cell));
            conflicts.set(Conflicts::COLUMN, grid.column(pos.col()).contains(&cell));
            conflicts.set(Conflicts::REGION, grid.region(pos.region()).contains(&cell));
            Placement::Conflicts(conflicts)
        }
    }
}
