//! Side identification.
//!
//! ## Color
//!
//! The two sides of a checkers game. Each color owns a direction of travel,
//! a promotion row and a block of starting rows:
//!
//! | Color   | Forward | Promotion row | Starting rows |
//! |---------|---------|---------------|---------------|
//! | `Red`   | -1      | 0             | 5..=7         |
//! | `Black` | +1      | 7             | 0..=2         |

use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;

/// One side of the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Color {
    Red,
    Black,
}

impl Color {
    /// Both colors, Red first (Red moves first).
    pub const ALL: [Color; 2] = [Color::Red, Color::Black];

    /// The other side.
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            Color::Red => Color::Black,
            Color::Black => Color::Red,
        }
    }

    /// Row delta of a forward step for a man of this color.
    #[must_use]
    pub const fn forward(self) -> i8 {
        match self {
            Color::Red => -1,
            Color::Black => 1,
        }
    }

    /// Row on which a man of this color is crowned.
    #[must_use]
    pub const fn promotion_row(self) -> i8 {
        match self {
            Color::Red => 0,
            Color::Black => 7,
        }
    }

    /// Rows filled with this color's men at the start of a game.
    #[must_use]
    pub const fn home_rows(self) -> RangeInclusive<i8> {
        match self {
            Color::Red => 5..=7,
            Color::Black => 0..=2,
        }
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Color::Red => write!(f, "red"),
            Color::Black => write!(f, "black"),
        }
    }
}
