//! Pieces and squares.

use serde::{Deserialize, Serialize};

use super::color::Color;
use super::position::{Position, DIAGONALS};

/// A checker. Men move forward only; kings move along all four diagonals.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Piece {
    pub color: Color,
    pub is_king: bool,
}

/// Contents of one board cell.
pub type Square = Option<Piece>;

impl Piece {
    /// An uncrowned piece.
    #[must_use]
    pub const fn man(color: Color) -> Self {
        Self { color, is_king: false }
    }

    /// A crowned piece.
    #[must_use]
    pub const fn king(color: Color) -> Self {
        Self { color, is_king: true }
    }

    /// This piece after promotion.
    #[must_use]
    pub const fn crowned(self) -> Self {
        Self::king(self.color)
    }

    /// Unit diagonal steps this piece may travel along.
    #[must_use]
    pub fn directions(self) -> &'static [(i8, i8)] {
        const RED_MAN: [(i8, i8); 2] = [(-1, -1), (-1, 1)];
        const BLACK_MAN: [(i8, i8); 2] = [(1, -1), (1, 1)];

        match (self.is_king, self.color) {
            (true, _) => &DIAGONALS,
            (false, Color::Red) => &RED_MAN,
            (false, Color::Black) => &BLACK_MAN,
        }
    }

    /// Check whether landing on `pos` crowns this piece.
    #[must_use]
    pub fn promotes_at(self, pos: Position) -> bool {
        !self.is_king && pos.row == self.color.promotion_row()
    }

    /// Single-character layout symbol: `r`, `R`, `b`, `B`.
    #[must_use]
    pub const fn symbol(self) -> char {
        match (self.color, self.is_king) {
            (Color::Red, false) => 'r',
            (Color::Red, true) => 'R',
            (Color::Black, false) => 'b',
            (Color::Black, true) => 'B',
        }
    }

    /// Parse a layout symbol. `None` for anything that is not a piece.
    #[must_use]
    pub const fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            'r' => Some(Self::man(Color::Red)),
            'R' => Some(Self::king(Color::Red)),
            'b' => Some(Self::man(Color::Black)),
            'B' => Some(Self::king(Color::Black)),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_men_move_forward_only() {
        for color in Color::ALL {
            let dirs = Piece::man(color).directions();
            assert_eq!(dirs.len(), 2);
            assert!(dirs.iter().all(|&(d_row, _)| d_row == color.forward()));
        }
    }

    #[test]
    fn test_kings_move_everywhere() {
        assert_eq!(Piece::king(Color::Red).directions().len(), 4);
        assert_eq!(Piece::king(Color::Black).directions(), &DIAGONALS);
    }

    #[test]
    fn test_promotion_row() {
        let red = Piece::man(Color::Red);
        assert!(red.promotes_at(Position::new(0, 3)));
        assert!(!red.promotes_at(Position::new(7, 2)));
        assert!(!red.crowned().promotes_at(Position::new(0, 3)));

        let black = Piece::man(Color::Black);
        assert!(black.promotes_at(Position::new(7, 2)));
    }

    #[test]
    fn test_symbols() {
        for symbol in ['r', 'R', 'b', 'B'] {
            let piece = Piece::from_symbol(symbol).unwrap();
            assert_eq!(piece.symbol(), symbol);
        }
        assert_eq!(Piece::from_symbol('.'), None);
        assert_eq!(Piece::from_symbol('x'), None);
    }
}
