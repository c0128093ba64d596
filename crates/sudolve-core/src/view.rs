//! Row, column, and region views of a grid.
//!
//! Views are derived from the [`Grid`] on demand. There is deliberately
//! no stored row/column/region state to keep in sync with cell writes;
//! every projection reads the one authoritative cell array.

use derive_more::{Display, Error};

use crate::{Cell, DigitSet, Grid, Position};

/// Nine groups of nine cells: one full projection of a grid.
pub type View = [[Cell; 9]; 9];

/// The three ways of grouping a grid into nine groups of nine cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum ViewKind {
    /// Groups are the nine rows, top to bottom.
    #[display("row")]
    Rows,
    /// Groups are the nine columns, left to right.
    #[display("column")]
    Columns,
    /// Groups are the nine 3x3 regions, left to right, top to bottom.
    #[display("region")]
    Regions,
}

impl ViewKind {
    /// All three view kinds, in row, column, region order.
    pub const ALL: [Self; 3] = [Self::Rows, Self::Columns, Self::Regions];
}

/// Error returned when a grid violates the uniqueness constraint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum ConsistencyError {
    /// Some group of the named view contains the same digit twice.
    #[display("duplicate digit in a {_0}")]
    DuplicateDigit(#[error(not(source))] ViewKind),
}

fn group_is_consistent(group: &[Cell; 9]) -> bool {
    let mut seen = DigitSet::new();
    group
        .iter()
        .filter_map(|cell| *cell)
        .all(|digit| seen.insert(digit))
}

fn group_digits(group: &[Cell; 9]) -> DigitSet {
    group.iter().filter_map(|cell| *cell).collect()
}

impl Grid {
    /// Returns the cells of a row (0-8), left to right.
    ///
    /// # Panics
    ///
    /// Panics if `row` is not in the range 0-8.
    #[must_use]
    pub fn row(&self, row: u8) -> [Cell; 9] {
        std::array::from_fn(|col| {
            #[expect(clippy::cast_possible_truncation)]
            let col = col as u8;
            self.get(Position::new(row, col))
        })
    }

    /// Returns the cells of a column (0-8), top to bottom.
    ///
    /// # Panics
    ///
    /// Panics if `col` is not in the range 0-8.
    #[must_use]
    pub fn column(&self, col: u8) -> [Cell; 9] {
        std::array::from_fn(|row| {
            #[expect(clippy::cast_possible_truncation)]
            let row = row as u8;
            self.get(Position::new(row, col))
        })
    }

    /// Returns the cells of a 3x3 region (0-8), in row-major order
    /// within the region.
    ///
    /// # Panics
    ///
    /// Panics if `region` is not in the range 0-8.
    #[must_use]
    pub fn region(&self, region: u8) -> [Cell; 9] {
        assert!(region < 9, "region index out of range: {region}");
        std::array::from_fn(|i| {
            #[expect(clippy::cast_possible_truncation)]
            let i = i as u8;
            self.get(Position::new(
                region / 3 * 3 + i / 3,
                region % 3 * 3 + i % 3,
            ))
        })
    }

    /// Projects the grid into all nine groups of the given view kind.
    ///
    /// # Examples
    ///
    /// ```
    /// use sudolve_core::{Grid, Position, ViewKind};
    ///
    /// let grid: Grid = format!("123456789{}", ".".repeat(72)).parse()?;
    /// let rows = grid.view(ViewKind::Rows);
    /// let regions = grid.view(ViewKind::Regions);
    ///
    /// let pos = Position::new(0, 4);
    /// assert_eq!(rows[0][4], grid.get(pos));
    /// assert_eq!(
    ///     regions[pos.region() as usize][pos.region_cell() as usize],
    ///     grid.get(pos),
    /// );
    /// # Ok::<(), sudolve_core::ParseGridError>(())
    /// ```
    #[must_use]
    pub fn view(&self, kind: ViewKind) -> View {
        std::array::from_fn(|i| {
            #[expect(clippy::cast_possible_truncation)]
            let i = i as u8;
            match kind {
                ViewKind::Rows => self.row(i),
                ViewKind::Columns => self.column(i),
                ViewKind::Regions => self.region(i),
            }
        })
    }

    /// Returns `true` if no group of the given view contains a
    /// duplicate digit. Blank cells are ignored.
    #[must_use]
    pub fn view_is_consistent(&self, kind: ViewKind) -> bool {
        self.view(kind).iter().all(group_is_consistent)
    }

    /// Checks all three views and reports the first kind that contains
    /// a duplicate digit.
    ///
    /// # Errors
    ///
    /// Returns [`ConsistencyError::DuplicateDigit`] naming the
    /// violating view kind.
    pub fn check_consistency(&self) -> Result<(), ConsistencyError> {
        for kind in ViewKind::ALL {
            if !self.view_is_consistent(kind) {
                return Err(ConsistencyError::DuplicateDigit(kind));
            }
        }
        Ok(())
    }

    /// Returns the digits that may legally be placed at a position:
    /// all digits 1-9 absent from the cell's row, column, and region.
    ///
    /// The cell's own value, if any, counts as part of those groups, so
    /// a filled cell never has its own digit among its candidates.
    ///
    /// # Examples
    ///
    /// ```
    /// use sudolve_core::{Digit, Grid, Position};
    ///
    /// let mut grid = Grid::new();
    /// grid.set(Position::new(0, 0), Some(Digit::D1));
    ///
    /// let candidates = grid.candidates_at(Position::new(0, 8));
    /// assert!(!candidates.contains(Digit::D1)); // same row
    /// assert_eq!(candidates.len(), 8);
    /// ```
    #[must_use]
    pub fn candidates_at(&self, pos: Position) -> DigitSet {
        let used = group_digits(&self.row(pos.row()))
            | group_digits(&self.column(pos.col()))
            | group_digits(&self.region(pos.region()));
        DigitSet::FULL.difference(used)
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use crate::Digit;

    use super::*;

    fn puzzle() -> Grid {
        "5..91372.3...8.5.9.9.25..8.68.47.23...95..46.7.4.....5.2.......4..8916..85.72...3"
            .parse()
            .unwrap()
    }

    #[test]
    fn test_projection_round_trip() {
        // Mapping every group back through the coordinate math recovers
        // the original cell for all 81 indices.
        let grid = puzzle();
        let rows = grid.view(ViewKind::Rows);
        let cols = grid.view(ViewKind::Columns);
        let regions = grid.view(ViewKind::Regions);
        for pos in Position::all() {
            let cell = grid.get(pos);
            assert_eq!(rows[pos.row() as usize][pos.col() as usize], cell);
            assert_eq!(cols[pos.col() as usize][pos.row() as usize], cell);
            assert_eq!(
                regions[pos.region() as usize][pos.region_cell() as usize],
                cell,
            );
        }
    }

    #[test]
    fn test_consistent_puzzle_passes_all_views() {
        let grid = puzzle();
        for kind in ViewKind::ALL {
            assert!(grid.view_is_consistent(kind), "{kind} view inconsistent");
        }
        assert_eq!(grid.check_consistency(), Ok(()));
    }

    #[test]
    fn test_duplicate_in_row_detected() {
        let mut grid = Grid::new();
        grid.set(Position::new(3, 0), Some(Digit::D7));
        grid.set(Position::new(3, 8), Some(Digit::D7));
        assert!(!grid.view_is_consistent(ViewKind::Rows));
        assert!(grid.view_is_consistent(ViewKind::Columns));
        assert!(grid.view_is_consistent(ViewKind::Regions));
        assert_eq!(
            grid.check_consistency(),
            Err(ConsistencyError::DuplicateDigit(ViewKind::Rows)),
        );
    }

    #[test]
    fn test_duplicate_in_column_detected() {
        let mut grid = Grid::new();
        grid.set(Position::new(0, 4), Some(Digit::D2));
        grid.set(Position::new(8, 4), Some(Digit::D2));
        assert_eq!(
            grid.check_consistency(),
            Err(ConsistencyError::DuplicateDigit(ViewKind::Columns)),
        );
    }

    #[test]
    fn test_duplicate_in_region_detected() {
        let mut grid = Grid::new();
        grid.set(Position::new(0, 0), Some(Digit::D6));
        grid.set(Position::new(2, 2), Some(Digit::D6));
        assert_eq!(
            grid.check_consistency(),
            Err(ConsistencyError::DuplicateDigit(ViewKind::Regions)),
        );
    }

    #[test]
    fn test_consistency_is_idempotent() {
        let grid = puzzle();
        for kind in ViewKind::ALL {
            assert_eq!(grid.view_is_consistent(kind), grid.view_is_consistent(kind));
        }
    }

    #[test]
    fn test_candidates_exclude_all_three_groups() {
        let mut grid = Grid::new();
        grid.set(Position::new(0, 0), Some(Digit::D1)); // same row and region
        grid.set(Position::new(0, 5), Some(Digit::D2)); // same row
        grid.set(Position::new(5, 2), Some(Digit::D3)); // same column
        grid.set(Position::new(1, 1), Some(Digit::D4)); // same region

        let candidates = grid.candidates_at(Position::new(0, 2));
        assert_eq!(
            candidates,
            DigitSet::from_iter([Digit::D5, Digit::D6, Digit::D7, Digit::D8, Digit::D9]),
        );
    }

    #[test]
    fn test_candidates_on_empty_grid_are_full() {
        let grid = Grid::new();
        assert_eq!(grid.candidates_at(Position::new(4, 4)), DigitSet::FULL);
    }

    proptest! {
        #[test]
        fn candidates_never_conflict(text in "[1-9.]{81}") {
            let grid: Grid = text.parse().unwrap();
            for pos in grid.blank_positions() {
                let candidates = grid.candidates_at(pos);
                let used = group_digits(&grid.row(pos.row()))
                    | group_digits(&grid.column(pos.col()))
                    | group_digits(&grid.region(pos.region()));
                prop_assert!(candidates.intersection(used).is_empty());
            }
        }
    }
}
