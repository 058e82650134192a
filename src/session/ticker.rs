//! One-second tick source for the session controller.
//!
//! The TUI loop polls input with a short timeout; between polls it asks
//! the ticker whether a one-second tick is due. Ticks are keyed to the
//! controller epoch they were armed under, so an interval that started
//! before a reset or session transition is discarded rather than
//! delivered against the new session.

use std::time::{Duration, Instant};

/// Interval between ticks.
pub const TICK_INTERVAL: Duration = Duration::from_secs(1);

/// Delivers at most one tick per elapsed second while running.
#[derive(Debug, Clone)]
pub struct Ticker {
    armed_at: Instant,
    epoch: u64,
}

impl Ticker {
    /// Create a ticker armed at the given instant under the given epoch.
    #[must_use]
    pub const fn new(now: Instant, epoch: u64) -> Self {
        Self {
            armed_at: now,
            epoch,
        }
    }

    /// Check whether a tick should be delivered at `now`.
    ///
    /// Returns false and re-arms when the controller is paused or when
    /// the epoch has changed since the interval started; no tick is ever
    /// delivered against a session it was not scheduled under.
    pub fn poll(&mut self, now: Instant, running: bool, epoch: u64) -> bool {
        if !running || epoch != self.epoch {
            self.armed_at = now;
            self.epoch = epoch;
            return false;
        }

        if now.duration_since(self.armed_at) >= TICK_INTERVAL {
            self.armed_at = now;
            true
        } else {
            false
        }
    }
}
