//! The 8×8 board.
//!
//! ## Persistence
//!
//! Cells live in an `im::Vector`, so cloning a `Board` is O(1) and an update
//! only copies the touched chunk. The capture search relies on this: every
//! recursion level works on its own snapshot instead of applying and undoing
//! moves on a shared board.
//!
//! ## Text layout
//!
//! Boards parse from and render to eight lines of eight symbols:
//!
//! ```
//! use checkers_engine::core::{Board, Color, Position};
//!
//! let board: Board = "
//!     ........
//!     ........
//!     ...b....
//!     ....r...
//!     ........
//!     ........
//!     ........
//!     ........
//! ".parse().unwrap();
//!
//! assert_eq!(board.count(Color::Red), 1);
//! assert!(board.get(Position::new(2, 3)).is_some());
//! ```

use im::Vector;
use serde::{Deserialize, Serialize};

use super::color::Color;
use super::error::LayoutError;
use super::piece::{Piece, Square};
use super::position::{Position, BOARD_SIZE};

const CELL_COUNT: usize = (BOARD_SIZE as usize) * (BOARD_SIZE as usize);

/// Board state: which piece, if any, sits on each square.
///
/// Serializes as a flat row-major list of 64 squares. Deserializing checks
/// the length and that every piece sits on a dark square.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Square>", into = "Vec<Square>")]
pub struct Board {
    cells: Vector<Square>,
}

impl Board {
    /// A board with no pieces.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            cells: std::iter::repeat(None).take(CELL_COUNT).collect(),
        }
    }

    /// The standard opening position: 12 men per side on the dark squares
    /// of each side's three home rows.
    #[must_use]
    pub fn standard() -> Self {
        let mut board = Self::empty();
        for pos in Position::all().filter(|p| p.is_dark()) {
            for color in Color::ALL {
                if color.home_rows().contains(&pos.row) {
                    board.set(pos, Some(Piece::man(color)));
                }
            }
        }
        board
    }

    /// Check whether `(row, col)` lies within `[0, 8)`.
    #[must_use]
    pub fn is_in_bounds(row: i32, col: i32) -> bool {
        let size = i32::from(BOARD_SIZE);
        (0..size).contains(&row) && (0..size).contains(&col)
    }

    /// Contents of a square. Off-board positions read as empty.
    #[must_use]
    pub fn get(&self, pos: Position) -> Square {
        if !pos.is_in_bounds() {
            return None;
        }
        self.cells[pos.index()]
    }

    /// Overwrite a square.
    ///
    /// Panics if `pos` is off the board or if a piece is placed on a light
    /// square; callers check bounds first.
    pub fn set(&mut self, pos: Position, square: Square) {
        assert!(pos.is_in_bounds(), "position {pos} is off the board");
        assert!(
            square.is_none() || pos.is_dark(),
            "pieces may only occupy dark squares, not {pos}"
        );
        self.cells.set(pos.index(), square);
    }

    /// A copy of this board with one square overwritten.
    #[must_use]
    pub fn with(&self, pos: Position, square: Square) -> Self {
        let mut next = self.clone();
        next.set(pos, square);
        next
    }

    /// Check whether a square is on the board and empty.
    #[must_use]
    pub fn is_vacant(&self, pos: Position) -> bool {
        pos.is_in_bounds() && self.get(pos).is_none()
    }

    /// Iterate over every piece of `color` with its position.
    pub fn pieces(&self, color: Color) -> impl Iterator<Item = (Position, Piece)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter_map(move |(i, square)| match square {
                Some(piece) if piece.color == color => Some((Position::from_index(i), *piece)),
                _ => None,
            })
    }

    /// Number of pieces of `color` on the board.
    #[must_use]
    pub fn count(&self, color: Color) -> usize {
        self.pieces(color).count()
    }

    /// Number of kings of `color` on the board.
    #[must_use]
    pub fn kings(&self, color: Color) -> usize {
        self.pieces(color).filter(|(_, piece)| piece.is_king).count()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::standard()
    }
}

impl TryFrom<Vec<Square>> for Board {
    type Error = LayoutError;

    fn try_from(cells: Vec<Square>) -> Result<Self, Self::Error> {
        if cells.len() != CELL_COUNT {
            return Err(LayoutError::CellCount(cells.len()));
        }
        if let Some((i, _)) = cells
            .iter()
            .enumerate()
            .find(|(i, square)| square.is_some() && !Position::from_index(*i).is_dark())
        {
            return Err(LayoutError::LightSquare(Position::from_index(i)));
        }
        Ok(Self {
            cells: cells.into_iter().collect(),
        })
    }
}

impl From<Board> for Vec<Square> {
    fn from(board: Board) -> Self {
        board.cells.into_iter().collect()
    }
}

impl std::str::FromStr for Board {
    type Err = LayoutError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let rows: Vec<&str> = s.lines().map(str::trim).filter(|l| !l.is_empty()).collect();
        if rows.len() != BOARD_SIZE as usize {
            return Err(LayoutError::RowCount(rows.len()));
        }

        let mut board = Board::empty();
        for (row, line) in rows.iter().enumerate() {
            let symbols: Vec<char> = line.chars().collect();
            if symbols.len() != BOARD_SIZE as usize {
                return Err(LayoutError::RowLength {
                    row,
                    found: symbols.len(),
                });
            }

            for (col, &symbol) in symbols.iter().enumerate() {
                if symbol == '.' {
                    continue;
                }
                let piece = Piece::from_symbol(symbol)
                    .ok_or(LayoutError::UnknownSymbol { row, col, symbol })?;
                let pos = Position::new(row as i8, col as i8);
                if !pos.is_dark() {
                    return Err(LayoutError::LightSquare(pos));
                }
                board.set(pos, Some(piece));
            }
        }

        Ok(board)
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in 0..BOARD_SIZE {
            for col in 0..BOARD_SIZE {
                let symbol = self.get(Position::new(row, col)).map_or('.', Piece::symbol);
                write!(f, "{symbol}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_board() {
        let board = Board::empty();
        assert_eq!(board.count(Color::Red), 0);
        assert_eq!(board.count(Color::Black), 0);
        assert!(Position::all().all(|p| board.get(p).is_none()));
    }

    #[test]
    fn test_standard_setup() {
        let board = Board::standard();
        assert_eq!(board.count(Color::Red), 12);
        assert_eq!(board.count(Color::Black), 12);
        assert_eq!(board.kings(Color::Red), 0);

        assert_eq!(board.get(Position::new(0, 1)), Some(Piece::man(Color::Black)));
        assert_eq!(board.get(Position::new(5, 0)), Some(Piece::man(Color::Red)));
        assert_eq!(board.get(Position::new(3, 2)), None);
        assert_eq!(board.get(Position::new(4, 1)), None);

        for color in Color::ALL {
            assert!(board.pieces(color).all(|(pos, _)| pos.is_dark()));
        }
    }

    #[test]
    fn test_is_in_bounds() {
        assert!(Board::is_in_bounds(0, 0));
        assert!(Board::is_in_bounds(7, 7));
        assert!(!Board::is_in_bounds(-1, 3));
        assert!(!Board::is_in_bounds(3, 8));
    }

    #[test]
    fn test_off_board_reads_empty() {
        let board = Board::standard();
        assert_eq!(board.get(Position::new(-1, 0)), None);
        assert_eq!(board.get(Position::new(8, 1)), None);
        assert!(!board.is_vacant(Position::new(8, 1)));
    }

    #[test]
    fn test_with_leaves_original_untouched() {
        let board = Board::empty();
        let pos = Position::new(3, 4);
        let next = board.with(pos, Some(Piece::king(Color::Red)));

        assert_eq!(board.get(pos), None);
        assert_eq!(next.get(pos), Some(Piece::king(Color::Red)));
    }

    #[test]
    #[should_panic(expected = "dark squares")]
    fn test_set_rejects_light_square() {
        let mut board = Board::empty();
        board.set(Position::new(0, 0), Some(Piece::man(Color::Red)));
    }

    #[test]
    #[should_panic(expected = "off the board")]
    fn test_set_rejects_out_of_bounds() {
        let mut board = Board::empty();
        board.set(Position::new(8, 1), None);
    }

    #[test]
    fn test_layout_roundtrip() {
        let board = Board::standard();
        let text = board.to_string();
        assert_eq!(text.lines().next(), Some(".b.b.b.b"));
        assert_eq!(text.parse::<Board>().unwrap(), board);
    }

    #[test]
    fn test_layout_errors() {
        assert_eq!("........".parse::<Board>(), Err(LayoutError::RowCount(1)));

        let short = "........\n".repeat(7) + ".......";
        assert_eq!(
            short.parse::<Board>(),
            Err(LayoutError::RowLength { row: 7, found: 7 })
        );

        let light = "r.......\n".to_string() + &"........\n".repeat(7);
        assert_eq!(
            light.parse::<Board>(),
            Err(LayoutError::LightSquare(Position::new(0, 0)))
        );

        let unknown = ".x......\n".to_string() + &"........\n".repeat(7);
        assert_eq!(
            unknown.parse::<Board>(),
            Err(LayoutError::UnknownSymbol { row: 0, col: 1, symbol: 'x' })
        );
    }

    #[test]
    fn test_serialization() {
        let board = Board::standard();
        let json = serde_json::to_string(&board).unwrap();
        let deserialized: Board = serde_json::from_str(&json).unwrap();
        assert_eq!(board, deserialized);
    }

    #[test]
    fn test_deserialize_rejects_wrong_length() {
        let err = serde_json::from_str::<Board>("[null,null,null]").unwrap_err();
        assert!(err.to_string().contains("expected 64 squares, found 3"));
    }

    #[test]
    fn test_deserialize_rejects_light_square() {
        let mut cells: Vec<Square> = vec![None; CELL_COUNT];
        cells[0] = Some(Piece::man(Color::Red));
        let json = serde_json::to_string(&cells).unwrap();

        let err = serde_json::from_str::<Board>(&json).unwrap_err();
        assert!(err.to_string().contains("light square (0, 0)"));
        assert_eq!(Board::try_from(cells), Err(LayoutError::LightSquare(Position::new(0, 0))));
    }
}
