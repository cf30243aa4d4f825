//! Human-vs-opponent game controller.
//!
//! A [`Session`] wires the engine, one [`Opponent`] and the human's
//! [`TurnTimer`] together on a virtual millisecond clock. The presentation
//! layer forwards validated drops to [`Session::submit`] and calls
//! [`Session::advance`] from its frame or interval callback; nothing here
//! sleeps or spawns.
//!
//! ## Pacing
//!
//! - When the human's turn ends, the opponent's reply is scheduled
//!   `opponent_delay_ms` later. Only [`Session::end_game`] cancels it.
//! - The timer runs only during the human's turn. On expiry the turn is
//!   forced over and the opponent is scheduled as usual.

pub mod timer;

pub use timer::{TimerEvent, TurnTimer};

use tracing::{info, warn};

use crate::core::{Color, ConfigError, EngineConfig, GameState, Move, MoveError, MoveOutcome, Position};
use crate::opponent::Opponent;
use crate::rules::{CheckersEngine, GameStatus};

/// What happened during [`Session::advance`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SessionEvent {
    /// The human's time is running low.
    TimerWarning { remaining_ms: u64 },
    /// The human's time ran out and the turn passed.
    TurnForfeited { player: Color },
    /// The opponent completed its turn.
    OpponentMoved(MoveOutcome),
    /// The opponent had no legal move; the turn did not pass.
    OpponentStuck { color: Color },
}

/// A game between a human and the built-in opponent.
#[derive(Debug)]
pub struct Session {
    engine: CheckersEngine,
    state: GameState,
    opponent: Opponent,
    human: Color,
    timer: Option<TurnTimer>,
    opponent_delay_ms: u64,
    clock_ms: u64,
    opponent_due_ms: Option<u64>,
    finished: bool,
}

impl Session {
    /// New game from the standard position.
    pub fn new(config: &EngineConfig) -> Result<Self, ConfigError> {
        Self::with_state(config, GameState::new())
    }

    /// New game from an arbitrary state.
    pub fn with_state(config: &EngineConfig, state: GameState) -> Result<Self, ConfigError> {
        config.validate()?;

        let timer = config
            .turn_time_limit_ms
            .map(|limit| TurnTimer::new(limit, config.timer_tick_ms, config.timer_warning_ms));

        let mut session = Self {
            engine: CheckersEngine::from_config(config),
            state,
            opponent: Opponent::from_config(config),
            human: config.human_color,
            timer,
            opponent_delay_ms: config.opponent_delay_ms,
            clock_ms: 0,
            opponent_due_ms: None,
            finished: false,
        };
        session.begin_turn();
        Ok(session)
    }

    /// Replace the opponent, e.g. to install a different policy.
    ///
    /// The opponent must play the color the human does not.
    pub fn with_opponent(mut self, opponent: Opponent) -> Result<Self, ConfigError> {
        if opponent.color() == self.human {
            return Err(ConfigError::OpponentIsHuman(self.human));
        }
        self.opponent = opponent;
        Ok(self)
    }

    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    #[must_use]
    pub fn engine(&self) -> &CheckersEngine {
        &self.engine
    }

    #[must_use]
    pub fn human(&self) -> Color {
        self.human
    }

    /// Virtual time elapsed since the session started.
    #[must_use]
    pub fn clock_ms(&self) -> u64 {
        self.clock_ms
    }

    /// Time left on the human's turn, if the game is timed.
    #[must_use]
    pub fn timer(&self) -> Option<&TurnTimer> {
        self.timer.as_ref()
    }

    /// Check whether an opponent reply is scheduled.
    #[must_use]
    pub fn is_opponent_pending(&self) -> bool {
        self.opponent_due_ms.is_some()
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Pick up a human piece.
    pub fn select(&mut self, pos: Position) -> Result<(), MoveError> {
        self.ensure_human_turn()?;
        self.engine.select_piece(&mut self.state, pos)
    }

    /// Apply a human move.
    pub fn submit(&mut self, mv: &Move) -> Result<MoveOutcome, MoveError> {
        if self.finished {
            return Err(MoveError::GameOver);
        }
        let outcome = self.engine.apply_move_as(&mut self.state, self.human, mv)?;
        if outcome.turn_complete {
            self.begin_turn();
        }
        Ok(outcome)
    }

    /// Advance the virtual clock, firing the timer and any due opponent move.
    pub fn advance(&mut self, dt_ms: u64) -> Vec<SessionEvent> {
        let mut events = Vec::new();
        if self.finished {
            return events;
        }
        self.clock_ms += dt_ms;

        if self.state.current_player() == self.human {
            let fired = self.timer.as_mut().and_then(|timer| timer.advance(dt_ms));
            match fired {
                Some(TimerEvent::Warning { remaining_ms }) => {
                    events.push(SessionEvent::TimerWarning { remaining_ms });
                }
                Some(TimerEvent::Expired) => {
                    self.engine.force_end_turn(&mut self.state);
                    events.push(SessionEvent::TurnForfeited { player: self.human });
                    self.begin_turn();
                }
                None => {}
            }
        }

        if self.opponent_due_ms.is_some_and(|due| self.clock_ms >= due) {
            self.opponent_due_ms = None;
            events.extend(self.play_opponent());
        }

        events
    }

    /// Stop the game: cancels a pending opponent reply and the timer.
    pub fn end_game(&mut self) {
        if self.finished {
            return;
        }
        self.finished = true;
        self.opponent_due_ms = None;
        if let Some(timer) = self.timer.as_mut() {
            timer.stop();
        }
        info!(turn = self.state.turn_number(), "game ended");
    }

    fn ensure_human_turn(&self) -> Result<(), MoveError> {
        if self.finished {
            return Err(MoveError::GameOver);
        }
        if self.state.current_player() != self.human {
            return Err(MoveError::WrongTurn {
                expected: self.state.current_player(),
                attempted: self.human,
            });
        }
        Ok(())
    }

    fn play_opponent(&mut self) -> Option<SessionEvent> {
        match self.opponent.take_turn(&self.engine, &mut self.state) {
            Ok(Some(outcome)) => {
                if outcome.turn_complete {
                    self.begin_turn();
                } else {
                    // a custom policy stopped mid-chain; let it continue next tick
                    self.opponent_due_ms = Some(self.clock_ms);
                }
                Some(SessionEvent::OpponentMoved(outcome))
            }
            Ok(None) => Some(SessionEvent::OpponentStuck {
                color: self.opponent.color(),
            }),
            Err(err) => {
                warn!(error = %err, "opponent move rejected");
                None
            }
        }
    }

    fn begin_turn(&mut self) {
        if self.state.current_player() == self.human {
            self.opponent_due_ms = None;
            if let Some(timer) = self.timer.as_mut() {
                timer.start();
            }
            if let GameStatus::NoLegalMoves(color) = self.engine.status(&self.state) {
                warn!(%color, "side to move has no legal move");
            }
        } else {
            if let Some(timer) = self.timer.as_mut() {
                timer.stop();
            }
            self.opponent_due_ms = Some(self.clock_ms + self.opponent_delay_ms);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_session_waits_for_human() {
        let session = Session::new(&EngineConfig::default()).unwrap();
        assert_eq!(session.human(), Color::Red);
        assert!(!session.is_opponent_pending());
        assert!(session.timer().is_some_and(TurnTimer::is_running));
    }

    #[test]
    fn test_invalid_config_rejected() {
        let config = EngineConfig::default().with_turn_time_limit(Some(0));
        assert_eq!(Session::new(&config).unwrap_err(), ConfigError::ZeroTimeLimit);
    }

    #[test]
    fn test_opponent_opens_when_human_is_black() {
        let config = EngineConfig::default().with_human_color(Color::Black);
        let mut session = Session::new(&config).unwrap();
        assert!(session.is_opponent_pending());

        assert!(session.advance(999).is_empty());
        let events = session.advance(1);
        assert!(matches!(events.as_slice(), [SessionEvent::OpponentMoved(_)]));
        assert_eq!(session.state().current_player(), Color::Black);
    }

    #[test]
    fn test_with_opponent_checks_color() {
        let session = Session::new(&EngineConfig::default()).unwrap();
        let err = session.with_opponent(Opponent::new(Color::Red, 7)).unwrap_err();
        assert_eq!(err, ConfigError::OpponentIsHuman(Color::Red));

        let session = Session::new(&EngineConfig::default()).unwrap();
        let custom = Opponent::new(Color::Black, 7).with_policy(crate::opponent::UniformRandom);
        let mut session = session.with_opponent(custom).unwrap();

        let mv = Move::Regular { from: Position::new(5, 2), to: Position::new(4, 3) };
        session.submit(&mv).unwrap();
        let events = session.advance(1_000);
        assert!(matches!(events.as_slice(), [SessionEvent::OpponentMoved(_)]));
    }

    #[test]
    fn test_select_out_of_turn() {
        let config = EngineConfig::default().with_human_color(Color::Black);
        let mut session = Session::new(&config).unwrap();

        assert_eq!(
            session.select(Position::new(2, 1)),
            Err(MoveError::WrongTurn { expected: Color::Red, attempted: Color::Black })
        );
    }

    #[test]
    fn test_end_game_cancels_reply() {
        let mut session = Session::new(&EngineConfig::default()).unwrap();
        let mv = Move::Regular { from: Position::new(5, 2), to: Position::new(4, 3) };
        session.submit(&mv).unwrap();
        assert!(session.is_opponent_pending());

        session.end_game();
        assert!(!session.is_opponent_pending());
        assert!(session.advance(5_000).is_empty());
        assert_eq!(session.state().current_player(), Color::Black);
        assert_eq!(session.submit(&mv), Err(MoveError::GameOver));
    }
}
