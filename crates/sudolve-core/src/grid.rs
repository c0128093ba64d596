//! The 9x9 puzzle grid.

use std::{
    fmt::{self, Debug, Display},
    str::FromStr,
};

use derive_more::{Display, Error};

use crate::{Digit, Position};

/// A single grid cell: a digit, or `None` for a blank.
pub type Cell = Option<Digit>;

/// A 9x9 sudoku grid.
///
/// The grid is the single source of truth for cell values, stored in
/// row-major order (`index = row * 9 + col`). Row, column, and region
/// views are derived from it on demand (see the methods in
/// [`view`](crate::view)) rather than kept as separate copies, so a
/// cell write can never leave the views out of sync.
///
/// A grid is parsed from the flat 81-character puzzle form (or a
/// whitespace-formatted variant of it) and displays back as the flat
/// form:
///
/// ```
/// use sudolve_core::Grid;
///
/// let grid: Grid = "
///     53_ _7_ ___
///     6__ 195 ___
///     _98 ___ _6_
///     8__ _6_ __3
///     4__ 8_3 __1
///     7__ _2_ __6
///     _6_ ___ 28_
///     ___ 419 __5
///     ___ _8_ _79
/// "
/// .parse()?;
///
/// assert!(grid.to_string().starts_with("53..7...."));
/// # Ok::<(), sudolve_core::ParseGridError>(())
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct Grid([Cell; 81]);

impl Grid {
    /// Creates an empty grid with all 81 cells blank.
    #[must_use]
    pub const fn new() -> Self {
        Self([None; 81])
    }

    /// Returns the cell at the given position.
    #[inline]
    #[must_use]
    pub fn get(&self, pos: Position) -> Cell {
        self.0[pos.index()]
    }

    /// Sets the cell at the given position.
    #[inline]
    pub fn set(&mut self, pos: Position, cell: Cell) {
        self.0[pos.index()] = cell;
    }

    /// Returns all 81 cells in flat-index order.
    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        self.0.iter().copied()
    }

    /// Returns the positions of all blank cells in flat-index order.
    pub fn blank_positions(&self) -> impl Iterator<Item = Position> + '_ {
        self.0
            .iter()
            .enumerate()
            .filter(|(_, cell)| cell.is_none())
            .map(|(index, _)| Position::from_index(index))
    }

    /// Returns `true` if no cell is blank.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.0.iter().all(Option::is_some)
    }

    /// Renders the grid as nine lines of space-separated cell triples,
    /// with `.` for blanks.
    #[must_use]
    pub fn to_pretty_string(&self) -> String {
        let mut out = String::with_capacity(12 * 9);
        for (index, cell) in self.0.iter().enumerate() {
            out.push(cell.map_or('.', Digit::to_char));
            match index % 9 {
                8 => out.push('\n'),
                2 | 5 => out.push(' '),
                _ => {}
            }
        }
        out
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::new()
    }
}

impl Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use fmt::Write as _;

        for cell in self.0 {
            f.write_char(cell.map_or('.', Digit::to_char))?;
        }
        Ok(())
    }
}

impl Debug for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Grid(\"{self}\")")
    }
}

/// Error returned when parsing a puzzle string fails.
///
/// This is the malformed-input taxonomy: it is produced at the parsing
/// boundary, before any solving logic runs, and is distinct from the
/// solver's own error type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum ParseGridError {
    /// The puzzle did not contain exactly 81 cell characters.
    #[display("expected puzzle to be 81 cells, found {_0}")]
    WrongLength(#[error(not(source))] usize),
    /// The puzzle contained a character other than `1`-`9`, `.`, `0`,
    /// or `_`.
    #[display("invalid character in puzzle: `{_0}`")]
    InvalidCharacter(#[error(not(source))] char),
}

impl FromStr for Grid {
    type Err = ParseGridError;

    /// Parses a grid from a puzzle string.
    ///
    /// Whitespace is ignored; the remaining characters must be exactly
    /// 81 cells, where `1`-`9` are digits and `.`, `0`, or `_` are
    /// blanks.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut cells = [None; 81];
        let mut count = 0;
        for c in s.chars().filter(|c| !c.is_whitespace()) {
            let cell = match c {
                '.' | '0' | '_' => None,
                c => match Digit::from_char(c) {
                    Some(digit) => Some(digit),
                    None => return Err(ParseGridError::InvalidCharacter(c)),
                },
            };
            if count < 81 {
                cells[count] = cell;
            }
            count += 1;
        }
        if count != 81 {
            return Err(ParseGridError::WrongLength(count));
        }
        Ok(Self(cells))
    }
}
