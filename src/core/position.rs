//! Board coordinates.
//!
//! Rows and columns are 0-based and run from 0 to 7. Row 0 is Black's back
//! row and Red's promotion row. Only dark squares, where `row + col` is odd,
//! are ever occupied.

use serde::{Deserialize, Serialize};

/// Number of rows and columns on the board.
pub const BOARD_SIZE: i8 = 8;

/// The four diagonal unit steps as `(d_row, d_col)`.
pub const DIAGONALS: [(i8, i8); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];

/// A square on the board.
///
/// Coordinates are signed so that neighbour arithmetic can step off the
/// board; use [`Position::offset`] to get bounds-checked neighbours.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Position {
    pub row: i8,
    pub col: i8,
}

impl Position {
    /// Create a position. May lie off the board; check with `is_in_bounds`.
    #[must_use]
    pub const fn new(row: i8, col: i8) -> Self {
        Self { row, col }
    }

    /// Check that both coordinates are within `[0, 8)`.
    #[must_use]
    pub const fn is_in_bounds(self) -> bool {
        self.row >= 0 && self.row < BOARD_SIZE && self.col >= 0 && self.col < BOARD_SIZE
    }

    /// Dark squares are the playable ones.
    #[must_use]
    pub const fn is_dark(self) -> bool {
        (self.row as i16 + self.col as i16).rem_euclid(2) == 1
    }

    /// Row-major cell index. Only meaningful for in-bounds positions.
    #[must_use]
    pub const fn index(self) -> usize {
        (self.row as usize) * (BOARD_SIZE as usize) + self.col as usize
    }

    /// Inverse of [`Position::index`].
    #[must_use]
    pub const fn from_index(index: usize) -> Self {
        Self {
            row: (index / BOARD_SIZE as usize) as i8,
            col: (index % BOARD_SIZE as usize) as i8,
        }
    }

    /// The position `(d_row, d_col)` away, or `None` if that is off the board.
    #[must_use]
    pub fn offset(self, d_row: i8, d_col: i8) -> Option<Self> {
        let target = Self::new(self.row.checked_add(d_row)?, self.col.checked_add(d_col)?);
        target.is_in_bounds().then_some(target)
    }

    /// Signed `(d_row, d_col)` from `self` to `other`. Exact for on-board
    /// positions; saturates at the `i8` limits.
    #[must_use]
    pub const fn delta(self, other: Self) -> (i8, i8) {
        (other.row.saturating_sub(self.row), other.col.saturating_sub(self.col))
    }

    /// Diagonal distance to `other`, or `None` if the two are not on a
    /// common diagonal (or are the same square).
    #[must_use]
    pub fn diagonal_distance(self, other: Self) -> Option<u8> {
        let d_row = i16::from(other.row) - i16::from(self.row);
        let d_col = i16::from(other.col) - i16::from(self.col);
        if d_row == 0 || d_row.abs() != d_col.abs() {
            return None;
        }
        u8::try_from(d_row.unsigned_abs()).ok()
    }

    /// Square halfway to `other` along a diagonal of length 2.
    #[must_use]
    pub fn jumped_square(self, other: Self) -> Option<Self> {
        match self.diagonal_distance(other) {
            Some(2) => {
                let (d_row, d_col) = self.delta(other);
                Some(Self::new(self.row + d_row / 2, self.col + d_col / 2))
            }
            _ => None,
        }
    }

    /// Iterate over all 64 squares in row-major order.
    pub fn all() -> impl Iterator<Item = Position> {
        (0..(BOARD_SIZE as usize * BOARD_SIZE as usize)).map(Position::from_index)
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}
