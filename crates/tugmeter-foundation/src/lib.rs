//! Pointer input model and shared tuning constants for the Tugmeter gauge.

pub mod gauge_constants;
pub mod input;

pub use input::dispatcher::PointerDispatcher;
pub use input::types::{PointerEvent, PointerEventKind, PointerId};
