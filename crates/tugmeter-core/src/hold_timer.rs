//! Deadline-based hold timer.
//!
//! Models the "stay pinned at the edge for N seconds" countdown as a single
//! armed deadline serviced by `tick(now)`:
//! - At most one deadline is armed at a time; re-arming replaces it.
//! - The deadline is keyed by the drag session that armed it. A tick under a
//!   different live session disarms without firing, so a leaked deadline can
//!   never act on state from a later drag.
//! - `next_deadline()` exposes the pending instant for `WaitUntil`-style
//!   host scheduling instead of per-frame polling.

use web_time::{Duration, Instant};

use crate::session::SessionId;

#[derive(Debug, Clone, Copy)]
struct ArmedHold {
    deadline: Instant,
    session: SessionId,
}

/// A single cancellable countdown, fired at most once per arm.
#[derive(Debug, Default)]
pub struct HoldTimer {
    armed: Option<ArmedHold>,
}

impl HoldTimer {
    pub fn new() -> Self {
        Self { armed: None }
    }

    /// Arm (or re-arm) the countdown to fire `duration` after `now`.
    pub fn arm(&mut self, now: Instant, duration: Duration, session: SessionId) {
        log::trace!("hold timer armed for {duration:?} (session {session})");
        self.armed = Some(ArmedHold {
            deadline: now + duration,
            session,
        });
    }

    pub fn cancel(&mut self) {
        if self.armed.take().is_some() {
            log::trace!("hold timer cancelled");
        }
    }

    pub fn is_armed(&self) -> bool {
        self.armed.is_some()
    }

    /// The pending deadline, if any. Use this for `WaitUntil` scheduling.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.armed.map(|hold| hold.deadline)
    }

    /// Advance the timer. Returns `true` exactly once per armed deadline,
    /// when it has passed and still belongs to `live_session`. A stale
    /// session disarms silently.
    pub fn tick(&mut self, now: Instant, live_session: SessionId) -> bool {
        let Some(hold) = self.armed else {
            return false;
        };
        if hold.session != live_session {
            log::trace!(
                "discarding stale hold deadline (session {} != {live_session})",
                hold.session
            );
            self.armed = None;
            return false;
        }
        if now < hold.deadline {
            return false;
        }
        self.armed = None;
        log::trace!("hold timer fired (session {live_session})");
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const HOLD: Duration = Duration::from_millis(3000);

    #[test]
    fn fires_at_deadline_not_before() {
        let mut timer = HoldTimer::new();
        let start = Instant::now();
        timer.arm(start, HOLD, 1);

        assert!(!timer.tick(start + Duration::from_millis(2999), 1));
        assert!(timer.is_armed());
        assert!(timer.tick(start + HOLD, 1));
        assert!(!timer.is_armed());
    }

    #[test]
    fn fires_at_most_once() {
        let mut timer = HoldTimer::new();
        let start = Instant::now();
        timer.arm(start, HOLD, 1);

        assert!(timer.tick(start + HOLD, 1));
        assert!(!timer.tick(start + HOLD + Duration::from_secs(10), 1));
    }

    #[test]
    fn cancel_prevents_firing() {
        let mut timer = HoldTimer::new();
        let start = Instant::now();
        timer.arm(start, HOLD, 1);
        timer.cancel();

        assert!(!timer.is_armed());
        assert!(!timer.tick(start + HOLD, 1));
    }

    #[test]
    fn stale_session_disarms_without_firing() {
        let mut timer = HoldTimer::new();
        let start = Instant::now();
        timer.arm(start, HOLD, 1);

        assert!(!timer.tick(start + HOLD, 2));
        assert!(!timer.is_armed());
        // Even the original session cannot revive it afterwards.
        assert!(!timer.tick(start + HOLD, 1));
    }

    #[test]
    fn rearm_replaces_deadline() {
        let mut timer = HoldTimer::new();
        let start = Instant::now();
        timer.arm(start, HOLD, 1);
        timer.arm(start + Duration::from_secs(1), HOLD, 2);

        assert_eq!(timer.next_deadline(), Some(start + Duration::from_secs(1) + HOLD));
        // The replaced deadline belongs to session 2 now.
        assert!(!timer.tick(start + HOLD, 1));
        assert!(!timer.is_armed());
    }
}
