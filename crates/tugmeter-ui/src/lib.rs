//! The resistive drag gauge widget.
//!
//! A 1-D slider whose final stretch damps pointer movement, demands a timed
//! hold at the track end to break through, and afterwards rewards unbounded
//! overshoot with a super-linear value.
//!
//! The crate is split along the seams that matter:
//! - [`transition`] is the pure phase state machine: pointer event + time in,
//!   new state out. No callbacks, no timers, no interior mutability.
//! - [`visuals`] projects state into drawable properties for the host.
//! - [`gauge`] is the component that owns the state and wires input capture,
//!   the hold timer, and throttled value publication together.

pub mod gauge;
pub mod transition;
pub mod visuals;

pub use gauge::ResistiveGauge;
pub use transition::{GaugeConfig, GaugePhase, GaugeState, TimerAction};
pub use visuals::GaugeVisuals;
