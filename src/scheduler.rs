// src/scheduler.rs
//
// Recurring-refresh timer for the report view. Lifecycle-scoped: the timer
// exists only while the view is active, and `stop()` guarantees no further
// due ticks. Time comes in as an explicit `Instant` so tests can drive it.
//
// Overlap between a manual refresh and a timer tick is allowed by design;
// the store is last-write-wins and a superseded result is just overwritten.

use std::time::{Duration, Instant};

#[derive(Clone, Debug)]
pub struct Scheduler {
    interval: Duration,
    last_fired: Option<Instant>,
    active: bool,
}

impl Scheduler {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            last_fired: None,
            active: false,
        }
    }

    /// Activate the timer. The first `due()` after this fires immediately.
    pub fn start(&mut self) {
        self.active = true;
        self.last_fired = None;
    }

    /// Deactivate; no tick fires until `start()` again.
    pub fn stop(&mut self) {
        self.active = false;
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn set_interval(&mut self, interval: Duration) {
        self.interval = interval;
    }

    /// Should a sync fire now? True immediately after `start()`, then once
    /// per elapsed interval. Callers must `mark()` when they actually fire.
    pub fn due(&self, now: Instant) -> bool {
        if !self.active {
            return false;
        }
        match self.last_fired {
            None => true,
            Some(t) => now.duration_since(t) >= self.interval,
        }
    }

    /// Record a fire (timer tick or manual refresh — both reset the clock).
    pub fn mark(&mut self, now: Instant) {
        self.last_fired = Some(now);
    }

    /// Time until the next tick, for frontends that want to sleep instead
    /// of poll. Zero when already due or inactive.
    pub fn time_to_next(&self, now: Instant) -> Duration {
        if !self.active {
            return Duration::ZERO;
        }
        match self.last_fired {
            None => Duration::ZERO,
            Some(t) => {
                let elapsed = now.duration_since(t);
                self.interval.saturating_sub(elapsed)
            }
        }
    }
}
