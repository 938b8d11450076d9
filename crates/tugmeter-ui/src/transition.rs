//! Pure phase state machine for the resistive gauge.
//!
//! Every transition is a synchronous function of (input, timestamp, config).
//! Timer work is *requested* through [`TimerAction`] return values and
//! performed by the owning component, so this module stays deterministic and
//! directly testable.

use web_time::{Duration, Instant};

use tugmeter_core::SessionId;
use tugmeter_foundation::gauge_constants::{
    EDGE_ARRIVAL_RATIO, HOLD_DURATION_MS, HOLD_SHAKE_BASE, HOLD_SHAKE_SPAN, OVERSHOOT_EXPONENT,
    PUBLISH_INTERVAL_MS, RESISTANCE_START_RATIO, RESISTANCE_TRAVEL_FACTOR, RESIST_PRESSURE_SCALE,
    RESIST_SHAKE_BASE, RESIST_SHAKE_SPAN,
};

/// Behavior mode of the gauge.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GaugePhase {
    /// Never pressed.
    Idle,
    /// Dragging (or resting) below the resistance zone.
    Normal,
    /// Inside the resistance zone; pointer movement is damped.
    Resisting,
    /// Pinned at the track end, hold countdown running.
    Holding,
    /// Broke through; movement past the track end is unrestricted.
    Broken,
}

/// Tunable gauge geometry and timing.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GaugeConfig {
    /// Fraction of the track at which resistance begins.
    pub resistance_start_ratio: f32,
    /// How long the thumb must stay pinned before break-through.
    pub hold_duration: Duration,
    /// Damped-position ratio that counts as having reached the edge.
    pub edge_arrival_ratio: f32,
    /// Multiple of the remaining range the pointer must cover to complete
    /// the resistance zone.
    pub travel_factor: f32,
    /// Minimum interval between published value updates.
    pub publish_interval: Duration,
    /// Exponent applied to overshoot distance past the track end.
    pub overshoot_exponent: f32,
}

impl Default for GaugeConfig {
    fn default() -> Self {
        Self {
            resistance_start_ratio: RESISTANCE_START_RATIO,
            hold_duration: Duration::from_millis(HOLD_DURATION_MS),
            edge_arrival_ratio: EDGE_ARRIVAL_RATIO,
            travel_factor: RESISTANCE_TRAVEL_FACTOR,
            publish_interval: Duration::from_millis(PUBLISH_INTERVAL_MS),
            overshoot_exponent: OVERSHOOT_EXPONENT,
        }
    }
}

/// Timer work requested by a transition.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TimerAction {
    None,
    /// Start the hold countdown for the current session.
    Arm,
    /// Cancel any pending countdown.
    Cancel,
}

/// The gauge's mutable state. One instance per component, created on mount.
#[derive(Clone, Debug)]
pub struct GaugeState {
    track_length: f32,
    raw_position: f32,
    clamped_position: f32,
    phase: GaugePhase,
    hold_started: Option<Instant>,
    dragging: bool,
    session: SessionId,
}

impl GaugeState {
    pub fn new() -> Self {
        Self {
            track_length: 0.0,
            raw_position: 0.0,
            clamped_position: 0.0,
            phase: GaugePhase::Idle,
            hold_started: None,
            dragging: false,
            session: 0,
        }
    }

    /// Record a (re-)measured track length. Zero or non-finite lengths leave
    /// the gauge inert rather than dividing by them.
    pub fn measure(&mut self, track_length: f32) {
        self.track_length = track_length;
    }

    pub fn is_measured(&self) -> bool {
        self.track_length.is_finite() && self.track_length > 0.0
    }

    pub fn phase(&self) -> GaugePhase {
        self.phase
    }

    pub fn dragging(&self) -> bool {
        self.dragging
    }

    pub fn track_length(&self) -> f32 {
        self.track_length
    }

    pub fn raw_position(&self) -> f32 {
        self.raw_position
    }

    pub fn clamped_position(&self) -> f32 {
        self.clamped_position
    }

    pub fn hold_started(&self) -> Option<Instant> {
        self.hold_started
    }

    pub fn session(&self) -> SessionId {
        self.session
    }

    fn resistance_start(&self, config: &GaugeConfig) -> f32 {
        self.track_length * config.resistance_start_ratio
    }

    /// Begin a drag session. A press originating below the resistance zone
    /// re-arms the break mechanism ("starting from scratch"); one at or
    /// above it keeps a previous [`GaugePhase::Broken`] in effect.
    pub fn press(&mut self, origin: f32, session: SessionId, config: &GaugeConfig) {
        if !self.is_measured() {
            return;
        }
        self.dragging = true;
        self.session = session;
        self.raw_position = origin;
        if origin < self.resistance_start(config) || self.phase != GaugePhase::Broken {
            if self.phase == GaugePhase::Broken {
                log::debug!("gauge re-armed by press at {origin}");
            }
            self.set_phase(GaugePhase::Normal);
        }
        self.hold_started = None;
    }

    /// Apply a coalesced pointer move. Returns the timer work the component
    /// must perform for this transition.
    pub fn apply_move(&mut self, raw: f32, now: Instant, config: &GaugeConfig) -> TimerAction {
        if !self.is_measured() || !self.dragging {
            return TimerAction::None;
        }
        self.raw_position = raw;

        if self.phase == GaugePhase::Broken {
            // Unrestricted movement past the edge once broken through.
            self.clamped_position = raw.max(0.0);
            return TimerAction::None;
        }

        let track = self.track_length;
        if raw < self.resistance_start(config) {
            // Pointer retreated out of the resistance zone: full reset of
            // the resistance sub-state.
            let action = if self.phase == GaugePhase::Holding {
                TimerAction::Cancel
            } else {
                TimerAction::None
            };
            self.set_phase(GaugePhase::Normal);
            self.hold_started = None;
            self.clamped_position = raw.max(0.0);
            return action;
        }

        if self.phase == GaugePhase::Holding {
            // Pinned at the edge until the countdown resolves.
            self.clamped_position = track;
            return TimerAction::None;
        }

        let damped = resistance_transform(raw, track, config);
        if damped >= track * config.edge_arrival_ratio {
            self.set_phase(GaugePhase::Holding);
            self.hold_started = Some(now);
            self.clamped_position = track;
            return TimerAction::Arm;
        }

        self.set_phase(GaugePhase::Resisting);
        self.clamped_position = damped;
        TimerAction::None
    }

    /// End the drag session. `Broken` persists; every other phase reverts to
    /// `Normal` and any pending countdown must be cancelled.
    pub fn release(&mut self) -> TimerAction {
        if !self.dragging {
            return TimerAction::None;
        }
        self.dragging = false;
        let action = if self.phase == GaugePhase::Holding {
            TimerAction::Cancel
        } else {
            TimerAction::None
        };
        if self.phase != GaugePhase::Broken {
            self.set_phase(GaugePhase::Normal);
        }
        self.hold_started = None;
        action
    }

    /// Complete the hold countdown. Returns `true` when the gauge actually
    /// broke through; stale invocations (released, retreated) are no-ops.
    pub fn break_through(&mut self) -> bool {
        if self.phase != GaugePhase::Holding || !self.dragging {
            return false;
        }
        self.set_phase(GaugePhase::Broken);
        self.hold_started = None;
        true
    }

    /// Display value: linear percentage along the track, super-linear once
    /// past it.
    pub fn value(&self, config: &GaugeConfig) -> f32 {
        if !self.is_measured() {
            return 0.0;
        }
        if self.clamped_position <= self.track_length {
            self.clamped_position / self.track_length * 100.0
        } else {
            100.0 + (self.clamped_position - self.track_length).powf(config.overshoot_exponent)
        }
    }

    /// Progress through the resistance zone, in `[0, 1]`, as a function of
    /// how far the pointer has pushed past the resistance start.
    pub fn resistance_progress(&self, config: &GaugeConfig) -> f32 {
        resistance_progress(self.raw_position, self.track_length, config)
    }

    /// Progress through the hold countdown, in `[0, 1]`.
    pub fn hold_progress(&self, now: Instant, config: &GaugeConfig) -> f32 {
        let Some(started) = self.hold_started else {
            return 0.0;
        };
        let duration = config.hold_duration.as_secs_f32();
        if duration <= 0.0 {
            return 1.0;
        }
        let elapsed = now.saturating_duration_since(started).as_secs_f32();
        (elapsed / duration).clamp(0.0, 1.0)
    }

    /// Feedback signal for the presentation layer: ~1..5 while resisting,
    /// ~3..17 over the hold countdown, 0 otherwise.
    pub fn shake_intensity(&self, now: Instant, config: &GaugeConfig) -> f32 {
        match self.phase {
            GaugePhase::Resisting => {
                RESIST_SHAKE_BASE + RESIST_SHAKE_SPAN * self.resistance_progress(config)
            }
            GaugePhase::Holding => {
                HOLD_SHAKE_BASE + HOLD_SHAKE_SPAN * self.hold_progress(now, config)
            }
            _ => 0.0,
        }
    }

    /// Pressure on the thumb, in `[0, 1]`: mild while resisting, ramping to
    /// full over the hold countdown.
    pub fn thumb_pressure(&self, now: Instant, config: &GaugeConfig) -> f32 {
        match self.phase {
            GaugePhase::Resisting => RESIST_PRESSURE_SCALE * self.resistance_progress(config),
            GaugePhase::Holding => self.hold_progress(now, config),
            _ => 0.0,
        }
    }

    fn set_phase(&mut self, phase: GaugePhase) {
        if self.phase != phase {
            log::debug!("gauge phase {:?} -> {:?}", self.phase, phase);
            self.phase = phase;
        }
    }
}

impl Default for GaugeState {
    fn default() -> Self {
        Self::new()
    }
}

fn resistance_progress(raw: f32, track: f32, config: &GaugeConfig) -> f32 {
    let start = track * config.resistance_start_ratio;
    let range = track - start;
    if range <= 0.0 {
        return 1.0;
    }
    ((raw - start) / (range * config.travel_factor)).clamp(0.0, 1.0)
}

/// Damped visual position for a raw pointer position inside the resistance
/// zone. Cubic ease-out: fast at first, rapidly diminishing returns near the
/// edge. Never exceeds the track length.
pub fn resistance_transform(raw: f32, track: f32, config: &GaugeConfig) -> f32 {
    let start = track * config.resistance_start_ratio;
    let range = track - start;
    if range <= 0.0 {
        return raw.min(track);
    }
    let progress = resistance_progress(raw, track, config);
    let eased = 1.0 - (1.0 - progress).powi(3);
    (start + range * eased).min(track)
}

#[cfg(test)]
#[path = "tests/transition_tests.rs"]
mod tests;
