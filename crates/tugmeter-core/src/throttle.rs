//! Publish rate limiting.
//!
//! The observed gauge value is a notification channel for the host, not a
//! render input, so it runs on a coarser cadence than the frame loop. This
//! gate is independent of frame coalescing: the two limit different
//! consumers of the same state.

use web_time::{Duration, Instant};

/// Allows at most one publication per interval.
#[derive(Debug)]
pub struct PublishThrottle {
    interval: Duration,
    last_publish: Option<Instant>,
}

impl PublishThrottle {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            last_publish: None,
        }
    }

    /// Returns `true` when a publish is due and records it. The first call
    /// always passes.
    pub fn allow(&mut self, now: Instant) -> bool {
        let due = match self.last_publish {
            None => true,
            Some(last) => now.saturating_duration_since(last) >= self.interval,
        };
        if due {
            self.last_publish = Some(now);
        }
        due
    }

    /// Record an out-of-band publication (e.g. the forced sync on release)
    /// so the next throttled one waits a full interval again.
    pub fn mark(&mut self, now: Instant) {
        self.last_publish = Some(now);
    }

    pub fn reset(&mut self) {
        self.last_publish = None;
    }
}
