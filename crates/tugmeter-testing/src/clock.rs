//! Manually advanced time source.

use std::cell::Cell;

use web_time::{Duration, Instant};

/// A clock that only moves when told to. `now()` is `base + elapsed`, so all
/// instants it hands out are ordinary [`Instant`]s and compare correctly
/// with deadlines derived from them.
#[derive(Debug, Clone)]
pub struct ManualClock {
    base: Instant,
    elapsed: Cell<Duration>,
}

impl ManualClock {
    pub fn new() -> Self {
        Self {
            base: Instant::now(),
            elapsed: Cell::new(Duration::ZERO),
        }
    }

    pub fn now(&self) -> Instant {
        self.base + self.elapsed.get()
    }

    pub fn advance(&self, by: Duration) {
        self.elapsed.set(self.elapsed.get() + by);
    }

    pub fn advance_millis(&self, millis: u64) {
        self.advance(Duration::from_millis(millis));
    }

    pub fn elapsed(&self) -> Duration {
        self.elapsed.get()
    }
}

impl Default for ManualClock {
    fn default() -> Self {
        Self::new()
    }
}
