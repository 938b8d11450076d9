//! Drag session tokens.
//!
//! Every press begins a new session. Deferred work (the hold timer) carries
//! the session id it was armed under; work whose id no longer matches the
//! live session is discarded instead of firing against fresh state.

pub type SessionId = u64;

/// Monotonically increasing source of [`SessionId`]s.
///
/// Session `0` is reserved for "no session yet" so a freshly created gauge
/// can never match a stale token.
#[derive(Debug, Default)]
pub struct SessionCounter {
    current: SessionId,
}

impl SessionCounter {
    pub fn new() -> Self {
        Self { current: 0 }
    }

    /// Begin a new session, invalidating deferred work keyed to earlier ones.
    pub fn begin(&mut self) -> SessionId {
        self.current += 1;
        self.current
    }

    pub fn current(&self) -> SessionId {
        self.current
    }
}
