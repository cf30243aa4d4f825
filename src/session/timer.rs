//! Per-turn countdown.
//!
//! The timer counts down in whole ticks on a caller-driven clock. It reports
//! a warning once when the remaining time first drops to the warning
//! threshold, and expiry once when it reaches zero, after which it stops.

use serde::{Deserialize, Serialize};

/// Something the presentation layer should react to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimerEvent {
    /// Remaining time crossed the warning threshold.
    Warning { remaining_ms: u64 },
    /// Time ran out; the turn should be forced over.
    Expired,
}

/// Countdown for the human's turn.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnTimer {
    limit_ms: u64,
    tick_ms: u64,
    warning_ms: u64,
    remaining_ms: u64,
    /// Time advanced but not yet a whole tick.
    carry_ms: u64,
    running: bool,
    warned: bool,
}

impl TurnTimer {
    /// A stopped timer. `tick_ms` must be non-zero.
    #[must_use]
    pub fn new(limit_ms: u64, tick_ms: u64, warning_ms: u64) -> Self {
        assert!(tick_ms > 0, "timer tick must be positive");
        Self {
            limit_ms,
            tick_ms,
            warning_ms,
            remaining_ms: limit_ms,
            carry_ms: 0,
            running: false,
            warned: false,
        }
    }

    /// Reset to the full limit and start counting.
    pub fn start(&mut self) {
        self.remaining_ms = self.limit_ms;
        self.carry_ms = 0;
        self.warned = false;
        self.running = true;
    }

    /// Stop counting. Remaining time is kept for display.
    pub fn stop(&mut self) {
        self.running = false;
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.running
    }

    #[must_use]
    pub fn remaining_ms(&self) -> u64 {
        self.remaining_ms
    }

    /// Check whether the remaining time is in the warning zone.
    #[must_use]
    pub fn is_warning(&self) -> bool {
        self.remaining_ms <= self.warning_ms
    }

    /// Advance the clock by `dt_ms`.
    pub fn advance(&mut self, dt_ms: u64) -> Option<TimerEvent> {
        if !self.running {
            return None;
        }

        self.carry_ms += dt_ms;
        let ticks = self.carry_ms / self.tick_ms;
        self.carry_ms %= self.tick_ms;
        self.remaining_ms = self.remaining_ms.saturating_sub(ticks * self.tick_ms);

        if self.remaining_ms == 0 {
            self.running = false;
            return Some(TimerEvent::Expired);
        }
        if !self.warned && self.is_warning() {
            self.warned = true;
            return Some(TimerEvent::Warning {
                remaining_ms: self.remaining_ms,
            });
        }
        None
    }
}
