//! # checkers-engine
//!
//! Rules engine for 8x8 checkers with a random computer opponent.
//!
//! ## Design Principles
//!
//! 1. **Explicit State**: All game data lives in a [`GameState`] owned by the
//!    caller. [`CheckersEngine`] is a stateless rule set that validates and
//!    applies moves to it.
//!
//! 2. **Validate Then Commit**: Moves are executed against a copy of the
//!    board. A rejected move leaves the state exactly as it was.
//!
//! 3. **Persistent Data Structures**: Boards are `im::Vector`s, so chain
//!    search can branch on O(1) snapshots instead of mutating and undoing.
//!
//! ## Modules
//!
//! - `core`: Colors, positions, pieces, the board, moves, state, RNG, config
//! - `rules`: Move generation, move execution and the turn controller
//! - `opponent`: Seeded computer player with pluggable selection policies
//! - `session`: Human-vs-opponent pacing on a virtual clock

pub mod core;
pub mod rules;
pub mod opponent;
pub mod session;

// Re-export commonly used types
pub use crate::core::{
    Color, Position, Piece, Square, Board,
    Capture, CaptureSequence, Move, MoveOutcome, MoveRecord,
    GameState, GameRng, GameRngState,
    EngineConfig, CapturePolicy, PromotionRule,
    MoveError, LayoutError, ConfigError,
};

pub use crate::rules::{CheckersEngine, GameStatus, MoveGenerator};

pub use crate::opponent::{Opponent, SelectionPolicy, MaxCaptureRandom, UniformRandom};

pub use crate::session::{Session, SessionEvent, TimerEvent, TurnTimer};
