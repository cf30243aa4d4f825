//! Move selection policies.
//!
//! Policies are trait-based so stronger strategies can replace the random
//! ones without touching move generation:
//! - `MaxCaptureRandom`: random among the chains that capture the most
//! - `UniformRandom`: random among every legal move

use crate::core::{CapturePolicy, GameRng, GameState, Move};
use crate::rules::CheckersEngine;

/// Policy for choosing the side to move's next move.
pub trait SelectionPolicy: Send + Sync {
    /// Choose a move for `state.current_player()`.
    ///
    /// Returns `None` if no legal moves exist.
    fn choose(&self, engine: &CheckersEngine, state: &GameState, rng: &mut GameRng)
        -> Option<Move>;
}

/// Build the policy named by a configuration value.
#[must_use]
pub fn policy_for(capture_policy: CapturePolicy) -> Box<dyn SelectionPolicy> {
    match capture_policy {
        CapturePolicy::MaxCaptures => Box::new(MaxCaptureRandom),
        CapturePolicy::AnyCapture => Box::new(UniformRandom),
    }
}

/// Greedy-random policy.
///
/// When captures are available, picks uniformly among the chains with the
/// highest capture count. Otherwise picks uniformly among regular moves.
#[derive(Clone, Debug, Default)]
pub struct MaxCaptureRandom;

impl SelectionPolicy for MaxCaptureRandom {
    fn choose(
        &self,
        engine: &CheckersEngine,
        state: &GameState,
        rng: &mut GameRng,
    ) -> Option<Move> {
        let moves = engine.legal_moves(state);
        let best = moves.iter().map(|mv| mv.captured().len()).max()?;

        let candidates: Vec<&Move> = moves
            .iter()
            .filter(|mv| mv.captured().len() == best)
            .collect();
        rng.choose(&candidates).map(|mv| (*mv).clone())
    }
}

/// Uniform random policy.
///
/// Picks uniformly among all legal moves. Mandatory capture still applies,
/// so while any capture exists only chains are candidates, of any length.
#[derive(Clone, Debug, Default)]
pub struct UniformRandom;

impl SelectionPolicy for UniformRandom {
    fn choose(
        &self,
        engine: &CheckersEngine,
        state: &GameState,
        rng: &mut GameRng,
    ) -> Option<Move> {
        let moves = engine.legal_moves(state);
        rng.choose(&moves).cloned()
    }
}
