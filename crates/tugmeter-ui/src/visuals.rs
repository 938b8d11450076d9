//! Presentation adapter.
//!
//! Projects [`GaugeState`] into drawable properties as a pure snapshot. The
//! host renders from this once per frame; nothing here mutates state, which
//! keeps the state machine and the drawing concerns independently testable.

use web_time::Instant;

use tugmeter_foundation::gauge_constants::PRESSURE_THUMB_SCALE_GAIN;

use crate::transition::{GaugeConfig, GaugePhase, GaugeState};

/// Drawable properties for one frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GaugeVisuals {
    /// Thumb centre offset from the track origin, in px.
    pub thumb_offset: f32,
    /// Thumb scale factor; grows with pressure during resistance and hold.
    pub thumb_scale: f32,
    /// Glow strength in `[0, 1]`, driven by thumb pressure.
    pub glow: f32,
    /// Filled fraction of the nominal track, in `[0, 1]`.
    pub fill_fraction: f32,
    /// Length of the overshoot extension past the track end, in px.
    pub overshoot: f32,
    /// Whether the overshoot extension should be shown at all.
    pub overshoot_visible: bool,
    /// Card shake feedback; 0 when calm.
    pub shake_intensity: f32,
}

impl GaugeVisuals {
    pub fn from_state(state: &GaugeState, now: Instant, config: &GaugeConfig) -> Self {
        if !state.is_measured() {
            return Self::resting();
        }
        let track = state.track_length();
        let clamped = state.clamped_position();
        let pressure = state.thumb_pressure(now, config);
        let overshoot = (clamped - track).max(0.0);
        let overshoot_visible = state.phase() == GaugePhase::Broken && overshoot > 0.0;

        Self {
            thumb_offset: clamped,
            thumb_scale: 1.0 + PRESSURE_THUMB_SCALE_GAIN * pressure,
            glow: pressure,
            fill_fraction: (clamped / track).min(1.0),
            overshoot,
            overshoot_visible,
            shake_intensity: state.shake_intensity(now, config),
        }
    }

    fn resting() -> Self {
        Self {
            thumb_offset: 0.0,
            thumb_scale: 1.0,
            glow: 0.0,
            fill_fraction: 0.0,
            overshoot: 0.0,
            overshoot_visible: false,
            shake_intensity: 0.0,
        }
    }
}
