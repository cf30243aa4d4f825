//! Engine and session configuration.
//!
//! One serde-friendly struct carries the rule variants the engine supports
//! and the pacing knobs of a [`Session`](crate::session::Session):
//! - `PromotionRule`: what a man crowned partway through a chain does next
//! - `CapturePolicy`: how the opponent chooses among captures
//! - opponent delay and turn timer, in milliseconds

use serde::{Deserialize, Serialize};

use super::color::Color;
use super::error::ConfigError;

/// What happens when a man reaches the far row partway through a chain.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PromotionRule {
    /// The piece is crowned and the chain stops on the promotion square.
    #[default]
    EndsSequence,
    /// The piece is crowned and may keep capturing as a king.
    ContinueAsKing,
}

/// How the built-in opponent chooses among available captures.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CapturePolicy {
    /// Uniformly among the chains that capture the most pieces.
    #[default]
    MaxCaptures,
    /// Uniformly among every available chain.
    AnyCapture,
}

/// Configuration parameters.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Seed for the opponent's RNG. Same seed, same games.
    pub seed: u64,

    /// Side controlled by the human player. The opponent plays the other.
    pub human_color: Color,

    /// Opponent's choice among captures.
    pub capture_policy: CapturePolicy,

    /// Mid-chain promotion behaviour.
    pub promotion_rule: PromotionRule,

    /// Pause before the opponent replies, for pacing only.
    pub opponent_delay_ms: u64,

    /// Time the human has to move (`None` = untimed).
    /// On expiry the turn passes to the opponent.
    pub turn_time_limit_ms: Option<u64>,

    /// Timer granularity.
    pub timer_tick_ms: u64,

    /// Remaining time at or below which the timer reports a warning.
    pub timer_warning_ms: u64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            human_color: Color::Red,
            capture_policy: CapturePolicy::MaxCaptures,
            promotion_rule: PromotionRule::EndsSequence,
            opponent_delay_ms: 1_000,
            turn_time_limit_ms: Some(10_000),
            timer_tick_ms: 100,
            timer_warning_ms: 3_000,
        }
    }
}

impl EngineConfig {
    /// Set the RNG seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Set the human's color.
    #[must_use]
    pub fn with_human_color(mut self, color: Color) -> Self {
        self.human_color = color;
        self
    }

    /// Set the opponent's capture policy.
    #[must_use]
    pub fn with_capture_policy(mut self, policy: CapturePolicy) -> Self {
        self.capture_policy = policy;
        self
    }

    /// Set the mid-chain promotion rule.
    #[must_use]
    pub fn with_promotion_rule(mut self, rule: PromotionRule) -> Self {
        self.promotion_rule = rule;
        self
    }

    /// Set the opponent's reply delay.
    #[must_use]
    pub fn with_opponent_delay(mut self, delay_ms: u64) -> Self {
        self.opponent_delay_ms = delay_ms;
        self
    }

    /// Set the human's turn limit, or `None` for untimed play.
    #[must_use]
    pub fn with_turn_time_limit(mut self, limit_ms: Option<u64>) -> Self {
        self.turn_time_limit_ms = limit_ms;
        self
    }

    /// Check that the timer settings are coherent.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.timer_tick_ms == 0 {
            return Err(ConfigError::ZeroTick);
        }
        if let Some(limit_ms) = self.turn_time_limit_ms {
            if limit_ms == 0 {
                return Err(ConfigError::ZeroTimeLimit);
            }
            if self.timer_warning_ms > limit_ms {
                return Err(ConfigError::WarningExceedsLimit {
                    warning_ms: self.timer_warning_ms,
                    limit_ms,
                });
            }
        }
        Ok(())
    }
}
