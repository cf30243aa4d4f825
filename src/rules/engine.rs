//! The checkers engine: the single mutator of [`GameState`].
//!
//! The engine owns no game data. Callers keep the `GameState` and pass it in,
//! which keeps the rules independent of whatever drives them (a UI event
//! handler, the opponent, a test).
//!
//! ## Turns
//!
//! A completed move hands the turn to the other side. A capture that leaves
//! the moving piece able to capture again keeps the turn open: the state
//! records the piece in `chain`, and only further captures by that piece are
//! accepted until the chain ends or the turn is forced over.
//!
//! ## Game end
//!
//! The engine never declares the game over. [`CheckersEngine::status`] reports
//! when the side to move has no legal move; acting on it is up to the caller.

use tracing::{debug, info};

use crate::core::{
    Color, EngineConfig, GameState, Move, MoveError, MoveOutcome, MoveRecord, Position,
    PromotionRule,
};

use super::executor::{self, Applied};
use super::movegen::MoveGenerator;

/// Whether the side to move can move.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    /// The named side is to move and has no legal move.
    NoLegalMoves(Color),
}

/// Validates and applies moves against a [`GameState`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CheckersEngine {
    generator: MoveGenerator,
}

impl CheckersEngine {
    #[must_use]
    pub const fn new(promotion: PromotionRule) -> Self {
        Self {
            generator: MoveGenerator::new(promotion),
        }
    }

    #[must_use]
    pub const fn from_config(config: &EngineConfig) -> Self {
        Self::new(config.promotion_rule)
    }

    /// Read-only move queries (captures, chains, regular moves).
    #[must_use]
    pub const fn generator(&self) -> &MoveGenerator {
        &self.generator
    }

    /// Every move the side to move may make now.
    ///
    /// While a chain is open, only the chain piece's captures.
    #[must_use]
    pub fn legal_moves(&self, state: &GameState) -> Vec<Move> {
        let player = state.current_player;
        match state.chain {
            Some(at) => self
                .generator
                .find_capture_sequences(&state.board, at, player)
                .into_iter()
                .map(Move::Capture)
                .collect(),
            None => self.generator.legal_moves(&state.board, player),
        }
    }

    /// Legal moves of the piece on `pos`, for highlighting targets.
    #[must_use]
    pub fn legal_moves_from(&self, state: &GameState, pos: Position) -> Vec<Move> {
        self.legal_moves(state)
            .into_iter()
            .filter(|mv| mv.from() == pos)
            .collect()
    }

    /// Report whether the side to move has any legal move. Does not change
    /// the state.
    #[must_use]
    pub fn status(&self, state: &GameState) -> GameStatus {
        if self.legal_moves(state).is_empty() {
            GameStatus::NoLegalMoves(state.current_player)
        } else {
            GameStatus::InProgress
        }
    }

    /// Pick up the piece on `pos` for the side to move.
    pub fn select_piece(&self, state: &mut GameState, pos: Position) -> Result<(), MoveError> {
        let player = state.current_player;
        match state.board.get(pos) {
            None if !pos.is_in_bounds() => return Err(MoveError::OutOfBounds(pos)),
            None => return Err(MoveError::EmptyOrigin(pos)),
            Some(piece) if piece.color != player => {
                return Err(MoveError::NotYourPiece { at: pos, owner: piece.color })
            }
            Some(_) => {}
        }
        if let Some(at) = state.chain {
            if at != pos {
                return Err(MoveError::ChainInProgress(at));
            }
        }

        if state.selected != Some(pos) {
            state.selected = Some(pos);
            state.touch();
        }
        Ok(())
    }

    /// Drop the current selection, if any. The chain piece stays selected
    /// while its chain is open.
    pub fn clear_selection(&self, state: &mut GameState) {
        if state.chain.is_none() && state.selected.take().is_some() {
            state.touch();
        }
    }

    /// Apply a move for the side to move.
    ///
    /// On success the board, history and `turn_version` are updated and the
    /// turn passes unless a capture chain stays open. On failure nothing
    /// changes.
    pub fn apply_move(&self, state: &mut GameState, mv: &Move) -> Result<MoveOutcome, MoveError> {
        let player = state.current_player;
        self.apply_move_as(state, player, mv)
    }

    /// Apply a move on behalf of `player`, rejecting it if `player` is not the
    /// side to move.
    pub fn apply_move_as(
        &self,
        state: &mut GameState,
        player: Color,
        mv: &Move,
    ) -> Result<MoveOutcome, MoveError> {
        if player != state.current_player {
            return Err(MoveError::WrongTurn {
                expected: state.current_player,
                attempted: player,
            });
        }
        if let Some(at) = state.chain {
            if mv.from() != at || !mv.is_capture() {
                return Err(MoveError::ChainInProgress(at));
            }
        }

        let Applied {
            board,
            landing,
            captured,
            promoted,
        } = match mv {
            Move::Regular { from, to } => {
                executor::apply_regular_move(&self.generator, &state.board, player, *from, *to)?
            }
            Move::Capture(sequence) => {
                executor::apply_capture_sequence(&self.generator, &state.board, player, sequence)?
            }
        };

        let chain_ended_by_crown =
            promoted && self.generator.promotion_rule() == PromotionRule::EndsSequence;
        let continues = mv.is_capture()
            && !chain_ended_by_crown
            && !self
                .generator
                .find_piece_captures(&board, landing, player)
                .is_empty();

        state.board = board;
        state.history.push_back(MoveRecord {
            turn: state.turn_number,
            player,
            mv: mv.clone(),
        });
        state.touch();

        debug!(
            %player,
            %mv,
            captured = captured.len(),
            promoted,
            continues,
            "move applied"
        );

        if continues {
            state.chain = Some(landing);
            state.selected = Some(landing);
        } else {
            self.switch_turn(state);
        }

        Ok(MoveOutcome {
            player,
            from: mv.from(),
            to: landing,
            captured,
            promoted,
            turn_complete: !continues,
        })
    }

    /// Hand the turn to the other side and reset per-turn state.
    pub fn switch_turn(&self, state: &mut GameState) {
        state.current_player = state.current_player.opponent();
        state.turn_number += 1;
        state.chain = None;
        state.selected = None;
        state.touch();

        debug!(player = %state.current_player, turn = state.turn_number, "turn switched");
    }

    /// End the current turn without a move, e.g. when the turn timer runs
    /// out. An open capture chain is abandoned.
    pub fn force_end_turn(&self, state: &mut GameState) {
        info!(
            player = %state.current_player,
            abandoned_chain = state.chain.is_some(),
            "turn forced over"
        );
        self.switch_turn(state);
    }
}
