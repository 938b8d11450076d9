use std::cell::Cell;
use std::rc::Rc;

pub type PointerId = u64;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerEventKind {
    Down,
    Move,
    Up,
    Cancel,
}

/// Pointer event projected onto the gauge's track axis, with consumption
/// tracking.
///
/// The host translates platform pointer coordinates into an offset relative
/// to the track origin before handing events over. Consumption lets the
/// gauge claim move events mid-drag so co-located handlers (page scroll,
/// clickables underneath) do not also act on them.
#[derive(Clone, Debug)]
pub struct PointerEvent {
    id: PointerId,
    kind: PointerEventKind,
    /// Offset along the track axis, relative to the track origin. Unclamped:
    /// negative values and values past the track end are meaningful input.
    track_offset: f32,
    /// Shared via `Rc<Cell>` so consumption is visible across clones.
    consumed: Rc<Cell<bool>>,
}

impl PointerEvent {
    pub fn new(kind: PointerEventKind, track_offset: f32) -> Self {
        Self {
            id: 0,
            kind,
            track_offset,
            consumed: Rc::new(Cell::new(false)),
        }
    }

    pub fn with_id(mut self, id: PointerId) -> Self {
        self.id = id;
        self
    }

    pub fn id(&self) -> PointerId {
        self.id
    }

    pub fn kind(&self) -> PointerEventKind {
        self.kind
    }

    pub fn track_offset(&self) -> f32 {
        self.track_offset
    }

    /// Mark this event as consumed, preventing other handlers from acting
    /// on it.
    pub fn consume(&self) {
        self.consumed.set(true);
    }

    pub fn is_consumed(&self) -> bool {
        self.consumed.get()
    }
}
