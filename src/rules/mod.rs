//! Rules of movement.
//!
//! - `movegen`: read-only queries (captures, chains, regular moves) under the
//!   mandatory-capture rule
//! - `executor`: pure board transforms for validated moves
//! - `engine`: `CheckersEngine`, which applies moves to a `GameState` and
//!   manages turns
//!
//! The engine calls into the generator and executor; it never stores a board
//! of its own.

pub mod movegen;
pub mod executor;
pub mod engine;

pub use movegen::MoveGenerator;
pub use executor::{apply_capture_sequence, apply_regular_move, Applied};
pub use engine::{CheckersEngine, GameStatus};
