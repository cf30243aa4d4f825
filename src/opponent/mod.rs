//! The computer-controlled side.
//!
//! An [`Opponent`] pairs a color with a [`SelectionPolicy`] and a seeded
//! RNG. It plays through the same [`CheckersEngine::apply_move`] as a human,
//! so it can never make a move the rules would reject from the UI.
//!
//! ```
//! use checkers_engine::core::{Color, GameState};
//! use checkers_engine::opponent::Opponent;
//! use checkers_engine::rules::CheckersEngine;
//!
//! let engine = CheckersEngine::default();
//! let mut state = GameState::new();
//! let mut red = Opponent::new(Color::Red, 42);
//!
//! let outcome = red.take_turn(&engine, &mut state).unwrap();
//! assert!(outcome.is_some());
//! assert_eq!(state.current_player(), Color::Black);
//! ```

pub mod policy;

pub use policy::{policy_for, MaxCaptureRandom, SelectionPolicy, UniformRandom};

use tracing::{debug, warn};

use crate::core::{Color, EngineConfig, GameRng, GameState, Move, MoveError, MoveOutcome};
use crate::rules::CheckersEngine;

/// A computer player for one color.
pub struct Opponent {
    color: Color,
    policy: Box<dyn SelectionPolicy>,
    rng: GameRng,
}

impl Opponent {
    /// Opponent for `color` using [`MaxCaptureRandom`].
    pub fn new(color: Color, seed: u64) -> Self {
        Self {
            color,
            policy: Box::new(MaxCaptureRandom),
            rng: GameRng::new(seed),
        }
    }

    /// Opponent for `color` drawing from an existing stream, e.g. a
    /// [`GameRng::fork`].
    pub fn with_rng(color: Color, rng: GameRng) -> Self {
        Self {
            color,
            policy: Box::new(MaxCaptureRandom),
            rng,
        }
    }

    /// Opponent playing against `config.human_color` with the configured
    /// capture policy and seed.
    pub fn from_config(config: &EngineConfig) -> Self {
        Self {
            color: config.human_color.opponent(),
            policy: policy_for(config.capture_policy),
            rng: GameRng::new(config.seed),
        }
    }

    /// Set a custom selection policy.
    pub fn with_policy<P: SelectionPolicy + 'static>(mut self, policy: P) -> Self {
        self.policy = Box::new(policy);
        self
    }

    /// Swap the selection policy in place.
    pub fn set_policy(&mut self, policy: Box<dyn SelectionPolicy>) {
        self.policy = policy;
    }

    #[must_use]
    pub fn color(&self) -> Color {
        self.color
    }

    /// Ask the policy for a move without applying it.
    pub fn choose_move(&mut self, engine: &CheckersEngine, state: &GameState) -> Option<Move> {
        self.policy.choose(engine, state, &mut self.rng)
    }

    /// Choose and apply a move for this opponent's color.
    ///
    /// Returns `Ok(None)` when there is no legal move; no move is made and
    /// the turn does not pass. A capture chain is played to its end, so a
    /// returned outcome normally completes the turn.
    pub fn take_turn(
        &mut self,
        engine: &CheckersEngine,
        state: &mut GameState,
    ) -> Result<Option<MoveOutcome>, MoveError> {
        if state.current_player() != self.color {
            return Err(MoveError::WrongTurn {
                expected: state.current_player(),
                attempted: self.color,
            });
        }

        let Some(mv) = self.choose_move(engine, state) else {
            warn!(color = %self.color, "opponent has no legal move");
            return Ok(None);
        };

        debug!(color = %self.color, %mv, "opponent chose move");
        engine.apply_move_as(state, self.color, &mv).map(Some)
    }
}

impl std::fmt::Debug for Opponent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Opponent")
            .field("color", &self.color)
            .field("rng", &self.rng.state())
            .finish_non_exhaustive()
    }
}
