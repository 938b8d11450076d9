//! Core runtime primitives for the Tugmeter gauge.
//!
//! Everything here is driven by explicit timestamps handed in by the host:
//! pointer handlers submit input, the frame loop drains it, and `tick`
//! advances deadlines. No module in this crate reads the wall clock on its
//! own, which keeps the whole stack deterministic under test.

pub mod coalescer;
pub mod hold_timer;
pub mod session;
pub mod throttle;

pub use coalescer::MoveCoalescer;
pub use hold_timer::HoldTimer;
pub use session::{SessionCounter, SessionId};
pub use throttle::PublishThrottle;
