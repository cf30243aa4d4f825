//! Game state: board, side to move and per-turn bookkeeping.
//!
//! ## GameState
//!
//! Everything the presentation layer needs to render and everything the
//! engine needs to validate the next request:
//! - Board (persistent, O(1) clone)
//! - Side to move and turn number
//! - `turn_version`, bumped on every change so renderers can detect updates
//! - The piece that must finish an open capture chain, if any
//! - The presentation layer's selected piece
//! - Move history
//!
//! The state is passed explicitly to [`CheckersEngine`](crate::rules::CheckersEngine),
//! which is the only code that mutates it.

use im::Vector;
use serde::{Deserialize, Serialize};

use super::board::Board;
use super::color::Color;
use super::moves::MoveRecord;
use super::position::Position;

/// Complete state of one game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    pub(crate) board: Board,

    pub(crate) current_player: Color,

    /// Turn number (starts at 1, increments on every switch).
    pub(crate) turn_number: u32,

    /// Change counter for renderers.
    pub(crate) turn_version: u64,

    /// Landing square of a piece that jumped and can jump again.
    /// While set, only that piece may move and only by capturing.
    pub(crate) chain: Option<Position>,

    /// Piece picked up by the player to move.
    pub(crate) selected: Option<Position>,

    pub(crate) history: Vector<MoveRecord>,
}

impl GameState {
    /// Standard opening position, Red to move.
    #[must_use]
    pub fn new() -> Self {
        Self::from_board(Board::standard(), Color::Red)
    }

    /// Start from an arbitrary position.
    #[must_use]
    pub fn from_board(board: Board, to_move: Color) -> Self {
        Self {
            board,
            current_player: to_move,
            turn_number: 1,
            turn_version: 0,
            chain: None,
            selected: None,
            history: Vector::new(),
        }
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Side to move.
    #[must_use]
    pub fn current_player(&self) -> Color {
        self.current_player
    }

    #[must_use]
    pub fn turn_number(&self) -> u32 {
        self.turn_number
    }

    /// Changes whenever the state does. Compare against a cached value to
    /// decide whether to re-render.
    #[must_use]
    pub fn turn_version(&self) -> u64 {
        self.turn_version
    }

    /// Piece that must continue capturing this turn, if a chain is open.
    #[must_use]
    pub fn chain(&self) -> Option<Position> {
        self.chain
    }

    #[must_use]
    pub fn selected(&self) -> Option<Position> {
        self.selected
    }

    /// Every move made so far, oldest first.
    #[must_use]
    pub fn history(&self) -> &Vector<MoveRecord> {
        &self.history
    }

    pub(crate) fn touch(&mut self) {
        self.turn_version += 1;
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}
