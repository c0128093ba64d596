//! Board position types and coordinate parsing.

use std::{
    fmt::{self, Display},
    str::FromStr,
};

use derive_more::{Display, Error};

/// A cell position on the 9x9 board.
///
/// Rows and columns are 0-indexed. The flat index is `row * 9 + col`,
/// matching the cell order of the 81-character puzzle string.
///
/// User-facing coordinates use a row letter `A`-`I` and a column digit
/// `1`-`9`; [`FromStr`] and [`Display`] translate between the two forms.
///
/// # Examples
///
/// ```
/// use sudolve_core::Position;
///
/// let pos: Position = "A9".parse()?;
/// assert_eq!(pos, Position::new(0, 8));
/// assert_eq!(pos.index(), 8);
/// assert_eq!(pos.region(), 2);
/// assert_eq!(pos.to_string(), "A9");
/// # Ok::<(), sudolve_core::ParsePositionError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Position {
    row: u8,
    col: u8,
}

impl Position {
    /// Creates a position from 0-indexed row and column.
    ///
    /// # Panics
    ///
    /// Panics if `row` or `col` is not in the range 0-8.
    #[must_use]
    pub fn new(row: u8, col: u8) -> Self {
        assert!(row < 9, "row out of range: {row}");
        assert!(col < 9, "column out of range: {col}");
        Self { row, col }
    }

    /// Creates a position from a flat cell index.
    ///
    /// # Panics
    ///
    /// Panics if `index` is not in the range 0-80.
    #[must_use]
    pub fn from_index(index: usize) -> Self {
        assert!(index < 81, "cell index out of range: {index}");
        #[expect(clippy::cast_possible_truncation)]
        let (row, col) = ((index / 9) as u8, (index % 9) as u8);
        Self { row, col }
    }

    /// Returns all positions in flat-index order.
    pub fn all() -> impl Iterator<Item = Self> {
        (0..81).map(Self::from_index)
    }

    /// Returns the 0-indexed row (0-8).
    #[inline]
    #[must_use]
    pub const fn row(self) -> u8 {
        self.row
    }

    /// Returns the 0-indexed column (0-8).
    #[inline]
    #[must_use]
    pub const fn col(self) -> u8 {
        self.col
    }

    /// Returns the flat cell index (0-80).
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self.row as usize * 9 + self.col as usize
    }

    /// Returns the index of the 3x3 region containing this position
    /// (0-8, left to right, top to bottom).
    #[inline]
    #[must_use]
    pub const fn region(self) -> u8 {
        self.row / 3 * 3 + self.col / 3
    }

    /// Returns the position of this cell within its 3x3 region (0-8).
    #[inline]
    #[must_use]
    pub const fn region_cell(self) -> u8 {
        self.row % 3 * 3 + self.col % 3
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", (b'A' + self.row) as char, self.col + 1)
    }
}

/// Error returned when parsing a user-facing coordinate fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum ParsePositionError {
    /// The coordinate was not exactly two characters long.
    #[display("coordinate must be a row letter followed by a column digit, like `A1`")]
    BadLength,
    /// The row character was not a letter `A`-`I`.
    #[display("invalid row letter: `{_0}`")]
    InvalidRow(#[error(not(source))] char),
    /// The column character was not a digit `1`-`9`.
    #[display("invalid column digit: `{_0}`")]
    InvalidColumn(#[error(not(source))] char),
}

impl FromStr for Position {
    type Err = ParsePositionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        let (Some(row_char), Some(col_char), None) = (chars.next(), chars.next(), chars.next())
        else {
            return Err(ParsePositionError::BadLength);
        };
        let row = match row_char.to_ascii_uppercase() {
            c @ 'A'..='I' => c as u8 - b'A',
            _ => return Err(ParsePositionError::InvalidRow(row_char)),
        };
        let col = match col_char {
            c @ '1'..='9' => c as u8 - b'1',
            _ => return Err(ParsePositionError::InvalidColumn(col_char)),
        };
        Ok(Self::new(row, col))
    }
}
