//! Per-frame input coalescing.
//!
//! Pointer moves can arrive far more often than the display refreshes.
//! Layout-facing work only ever needs the newest position, so submissions
//! between frames collapse to one pending value and the frame loop takes at
//! most one position per tick.

/// Latest-wins slot for track-axis pointer positions.
#[derive(Debug, Default)]
pub struct MoveCoalescer {
    pending: Option<f32>,
}

impl MoveCoalescer {
    pub fn new() -> Self {
        Self { pending: None }
    }

    /// Record a new position, replacing any not-yet-drained one.
    pub fn submit(&mut self, position: f32) {
        self.pending = Some(position);
    }

    /// Drain the pending position. Called once per frame tick.
    pub fn take(&mut self) -> Option<f32> {
        self.pending.take()
    }

    pub fn has_pending(&self) -> bool {
        self.pending.is_some()
    }

    pub fn clear(&mut self) {
        self.pending = None;
    }
}
