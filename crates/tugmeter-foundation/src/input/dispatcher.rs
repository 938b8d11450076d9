//! Pointer event queue with capture semantics.
//!
//! Once a pointer is captured (on press), subsequent move/up events from
//! that pointer are routed to the capturing control regardless of where the
//! cursor sits, and events from other pointers are dropped until the capture
//! is released. This is what keeps the gauge a single-drag control: a second
//! finger pressing mid-drag never reaches it.

use smallvec::SmallVec;

use super::types::{PointerEvent, PointerEventKind, PointerId};

#[derive(Default)]
pub struct PointerDispatcher {
    queue: SmallVec<[PointerEvent; 8]>,
    captured: Option<PointerId>,
}

impl PointerDispatcher {
    pub fn new() -> Self {
        Self {
            queue: SmallVec::new(),
            captured: None,
        }
    }

    /// Route subsequent events for `id` to the capturing control and drop
    /// everything else.
    pub fn capture(&mut self, id: PointerId) {
        log::trace!("pointer {id} captured");
        self.captured = Some(id);
    }

    pub fn release_capture(&mut self) {
        if self.captured.take().is_some() {
            log::trace!("pointer capture released");
        }
    }

    pub fn captured(&self) -> Option<PointerId> {
        self.captured
    }

    /// Enqueue an event, subject to the capture filter.
    pub fn push(&mut self, event: PointerEvent) {
        if let Some(owner) = self.captured {
            if event.id() != owner {
                // Secondary pointers are ignored while a drag is active.
                if event.kind() == PointerEventKind::Down {
                    log::trace!("dropping secondary pointer {} press", event.id());
                }
                return;
            }
        }
        self.queue.push(event);
    }

    pub fn drain<F>(&mut self, mut handler: F)
    where
        F: FnMut(PointerEvent),
    {
        for event in self.queue.drain(..) {
            handler(event);
        }
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }
}
