//! Core types: colors, pieces, positions, the board, moves, state, RNG,
//! configuration and errors.
//!
//! Nothing in this module knows the rules of movement; it only describes
//! what the board looks like and what a move request says.

pub mod color;
pub mod position;
pub mod piece;
pub mod board;
pub mod moves;
pub mod state;
pub mod rng;
pub mod config;
pub mod error;

pub use color::Color;
pub use position::{Position, BOARD_SIZE, DIAGONALS};
pub use piece::{Piece, Square};
pub use board::Board;
pub use moves::{Capture, CaptureSequence, Move, MoveOutcome, MoveRecord};
pub use state::GameState;
pub use rng::{GameRng, GameRngState};
pub use config::{CapturePolicy, EngineConfig, PromotionRule};
pub use error::{ConfigError, LayoutError, MoveError};
