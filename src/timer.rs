//! Drop timer driven by the engine's arm/disarm signals.
//!
//! The timer never fires on its own; the game loop asks how long it may block
//! waiting for input and then polls [`DropTimer::fire`].

use std::time::{Duration, Instant};

use crate::core::TimerSignal;

/// Poll timeout while disarmed, so the loop still wakes up periodically.
pub const IDLE_POLL: Duration = Duration::from_millis(250);

#[derive(Debug, Clone)]
pub struct DropTimer {
    interval: Option<Duration>,
    next_due: Instant,
}

impl DropTimer {
    /// A disarmed timer.
    pub fn new() -> Self {
        Self {
            interval: None,
            next_due: Instant::now(),
        }
    }

    pub fn is_armed(&self) -> bool {
        self.interval.is_some()
    }

    /// (Re)start the timer; the first tick is one full interval after `now`.
    pub fn arm(&mut self, interval: Duration, now: Instant) {
        self.interval = Some(interval);
        self.next_due = now + interval;
    }

    pub fn disarm(&mut self) {
        self.interval = None;
    }

    pub fn apply(&mut self, signal: TimerSignal, now: Instant) {
        match signal {
            TimerSignal::Arm { interval_ms } => {
                self.arm(Duration::from_millis(interval_ms as u64), now)
            }
            TimerSignal::Disarm => self.disarm(),
        }
    }

    /// How long the loop may wait before the next tick is due.
    pub fn time_until_due(&self, now: Instant) -> Duration {
        match self.interval {
            Some(_) => self.next_due.saturating_duration_since(now),
            None => IDLE_POLL,
        }
    }

    /// Returns true (and schedules the next tick) if a tick is due at `now`.
    ///
    /// At most one tick is reported per call; a late loop does not replay
    /// missed ticks.
    pub fn fire(&mut self, now: Instant) -> bool {
        let Some(interval) = self.interval else {
            return false;
        };
        if now < self.next_due {
            return false;
        }
        self.next_due = now + interval;
        true
    }
}

impl Default for DropTimer {
    fn default() -> Self {
        Self::new()
    }
}
