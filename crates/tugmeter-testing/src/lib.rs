//! Deterministic test harness for the Tugmeter gauge.
//!
//! Provides a [`ManualClock`] so scenarios control time explicitly, and a
//! [`GaugeRobot`] that drives a [`ResistiveGauge`] through the same pointer
//! dispatcher a real host would use: press, drag, hold, release, with frame
//! and timer servicing between steps.

pub mod clock;
pub mod robot;

pub use clock::ManualClock;
pub use robot::GaugeRobot;
