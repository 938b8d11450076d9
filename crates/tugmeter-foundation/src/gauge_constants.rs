//! Shared gauge tuning constants.
//!
//! These thresholds are intentionally kept in one module: the resistance
//! "feel" depends on the damping travel, the edge-arrival tolerance, and the
//! resistance-zone width staying consistent with each other. Tuning one in
//! isolation produces a zone the thumb can never finish crossing.
//!
//! Lengths are in logical pixels along the track axis; durations are in
//! milliseconds.

/// Fraction of the track length at which resistance begins.
///
/// The final 4% of travel is the resistance zone. Wide enough that the
/// damped approach is visible, narrow enough that the undamped portion of
/// the track still reads as a plain slider.
pub const RESISTANCE_START_RATIO: f32 = 0.96;

/// How long the thumb must stay pinned at the track end before the gauge
/// breaks through, in milliseconds.
pub const HOLD_DURATION_MS: u64 = 3000;

/// Damped-position ratio that counts as having arrived at the edge.
///
/// The cubic damping approaches the edge asymptotically; without this
/// tolerance the hold countdown would never start.
pub const EDGE_ARRIVAL_RATIO: f32 = 0.998;

/// Multiple of the remaining range the pointer must cover to nominally
/// complete the resistance zone. A factor of 3 means the pointer travels 3x
/// the visible distance, which is what makes the zone feel "hard to push".
pub const RESISTANCE_TRAVEL_FACTOR: f32 = 3.0;

/// Minimum interval between published value updates, in milliseconds.
///
/// Consumers typically re-render on every publish, so this runs at a much
/// coarser cadence (~12 Hz) than the frame loop. The forced sync on release
/// bypasses it.
pub const PUBLISH_INTERVAL_MS: u64 = 80;

/// Exponent applied to overshoot distance past the track end. Values above
/// 1 make continued dragging past the break point pay off super-linearly.
pub const OVERSHOOT_EXPONENT: f32 = 1.5;

/// Shake intensity while resisting: `base + span * resistance_progress`.
pub const RESIST_SHAKE_BASE: f32 = 1.0;
pub const RESIST_SHAKE_SPAN: f32 = 4.0;

/// Shake intensity while holding: `base + span * hold_progress`. Tops out
/// around 17 right before break-through.
pub const HOLD_SHAKE_BASE: f32 = 3.0;
pub const HOLD_SHAKE_SPAN: f32 = 14.0;

/// Thumb pressure during resistance is deliberately mild; the full ramp is
/// reserved for the hold countdown.
pub const RESIST_PRESSURE_SCALE: f32 = 0.3;

/// Thumb scale gain per unit of pressure (scale = 1 + gain * pressure).
pub const PRESSURE_THUMB_SCALE_GAIN: f32 = 0.35;
