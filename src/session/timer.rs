//! Delayed reveal of the game result.
//!
//! The timer is a plain deadline owned by the session. It never fires on
//! its own: the session polls it from `tick`. Cancelling is dropping the
//! handle, so a reset, an undo, or dropping the session itself leaves
//! nothing behind that could fire later.

use std::time::{Duration, Instant};

/// A pending reveal.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RevealTimer {
    armed_at: Instant,
    fires_at: Instant,
}

impl RevealTimer {
    /// Arm a timer that is due `delay` after `now`.
    #[must_use]
    pub fn arm(now: Instant, delay: Duration) -> Self {
        Self {
            armed_at: now,
            fires_at: now + delay,
        }
    }

    /// When the timer was armed.
    #[must_use]
    pub fn armed_at(&self) -> Instant {
        self.armed_at
    }

    /// When the timer is due.
    #[must_use]
    pub fn deadline(&self) -> Instant {
        self.fires_at
    }

    /// True once `now` has reached the deadline.
    #[must_use]
    pub fn is_due(&self, now: Instant) -> bool {
        now >= self.fires_at
    }

    /// Time left until the deadline; zero once due.
    #[must_use]
    pub fn remaining(&self, now: Instant) -> Duration {
        self.fires_at.saturating_duration_since(now)
    }
}
