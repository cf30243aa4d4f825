//! Error types.
//!
//! Every rejection the engine produces is a rule violation, not a fault:
//! the state the request was made against is left exactly as it was.

use super::color::Color;
use super::position::Position;

/// Why a move request was rejected.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("it is {expected}'s turn, not {attempted}'s")]
    WrongTurn { expected: Color, attempted: Color },

    #[error("no piece at {0}")]
    EmptyOrigin(Position),

    #[error("piece at {at} belongs to {owner}")]
    NotYourPiece { at: Position, owner: Color },

    #[error("{0} is off the board")]
    OutOfBounds(Position),

    #[error("{from} -> {to} is not a single diagonal step or jump")]
    NotDiagonal { from: Position, to: Position },

    #[error("this piece cannot move from {from} toward {to}")]
    WrongDirection { from: Position, to: Position },

    #[error("destination {0} is occupied")]
    DestinationOccupied(Position),

    #[error("no piece to capture at {0}")]
    NothingToCapture(Position),

    #[error("cannot capture own piece at {0}")]
    CannotCaptureOwnPiece(Position),

    #[error("jump {from} -> {to} passes over {expected}, not {claimed}")]
    CaptureMismatch {
        from: Position,
        to: Position,
        expected: Position,
        claimed: Position,
    },

    #[error("a capture is available for {0}; regular moves are not allowed")]
    CaptureRequired(Color),

    #[error("capture sequence has no steps")]
    EmptySequence,

    #[error("capture step starts at {found}, but the piece is at {expected}")]
    BrokenChain { expected: Position, found: Position },

    #[error("the piece at {0} must finish its capture chain")]
    ChainInProgress(Position),

    #[error("the piece was crowned at {0}; the capture sequence ends there")]
    PromotionEndsSequence(Position),

    #[error("the game is over")]
    GameOver,
}

/// Why a text board layout could not be parsed.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum LayoutError {
    #[error("expected 8 rows, found {0}")]
    RowCount(usize),

    #[error("expected 64 squares, found {0}")]
    CellCount(usize),

    #[error("row {row}: expected 8 squares, found {found}")]
    RowLength { row: usize, found: usize },

    #[error("row {row}, col {col}: unknown symbol {symbol:?}")]
    UnknownSymbol { row: usize, col: usize, symbol: char },

    #[error("piece on light square {0}")]
    LightSquare(Position),
}

/// Why an [`EngineConfig`](super::EngineConfig) is unusable.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("timer tick must be positive")]
    ZeroTick,

    #[error("turn time limit must be positive")]
    ZeroTimeLimit,

    #[error("warning threshold {warning_ms}ms exceeds turn limit {limit_ms}ms")]
    WarningExceedsLimit { warning_ms: u64, limit_ms: u64 },

    #[error("the opponent cannot play the human's color ({0})")]
    OpponentIsHuman(Color),
}
