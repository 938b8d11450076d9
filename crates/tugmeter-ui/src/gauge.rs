//! The gauge component.
//!
//! Owns the [`GaugeState`] instance and wires the surrounding machinery to
//! it: pointer capture, per-frame move coalescing, the session-keyed hold
//! timer, throttled value publication, and the one-shot break callback.
//!
//! Host integration contract:
//! - feed pointer events through [`ResistiveGauge::handle_pointer`],
//! - call [`ResistiveGauge::on_frame`] once per display refresh,
//! - call [`ResistiveGauge::tick`] when [`ResistiveGauge::next_deadline`]
//!   passes (or simply every frame),
//! - call [`ResistiveGauge::detach`] on teardown.

use std::cell::RefCell;
use std::rc::Rc;

use web_time::Instant;

use tugmeter_core::{HoldTimer, MoveCoalescer, PublishThrottle, SessionCounter};
use tugmeter_foundation::input::types::{PointerEvent, PointerEventKind, PointerId};

use crate::transition::{GaugeConfig, GaugePhase, GaugeState, TimerAction};
use crate::visuals::GaugeVisuals;

type ValueHandler = Rc<RefCell<dyn FnMut(f32)>>;
type BreakHandler = Rc<RefCell<dyn FnMut()>>;

/// The resistive drag gauge widget.
pub struct ResistiveGauge {
    state: GaugeState,
    config: GaugeConfig,
    sessions: SessionCounter,
    hold_timer: HoldTimer,
    coalescer: MoveCoalescer,
    throttle: PublishThrottle,
    active_pointer: Option<PointerId>,
    on_value: Option<ValueHandler>,
    on_break: Option<BreakHandler>,
    detached: bool,
}

impl ResistiveGauge {
    pub fn new(config: GaugeConfig) -> Self {
        Self {
            state: GaugeState::new(),
            throttle: PublishThrottle::new(config.publish_interval),
            config,
            sessions: SessionCounter::new(),
            hold_timer: HoldTimer::new(),
            coalescer: MoveCoalescer::new(),
            active_pointer: None,
            on_value: None,
            on_break: None,
            detached: false,
        }
    }

    /// Consumer notified with the (floored, throttled) display value.
    pub fn on_value(mut self, handler: impl FnMut(f32) + 'static) -> Self {
        self.on_value = Some(Rc::new(RefCell::new(handler)));
        self
    }

    /// Trigger fired once per successful break-through.
    pub fn on_break(mut self, handler: impl FnMut() + 'static) -> Self {
        self.on_break = Some(Rc::new(RefCell::new(handler)));
        self
    }

    /// Record a (re-)measured track length from the host's layout query.
    pub fn measure(&mut self, track_length: f32) {
        if self.detached {
            return;
        }
        self.state.measure(track_length);
    }

    pub fn phase(&self) -> GaugePhase {
        self.state.phase()
    }

    /// Current continuous display value. The published value is this,
    /// floored.
    pub fn value(&self) -> f32 {
        self.state.value(&self.config)
    }

    pub fn is_dragging(&self) -> bool {
        self.state.dragging()
    }

    pub fn shake_intensity(&self, now: Instant) -> f32 {
        self.state.shake_intensity(now, &self.config)
    }

    /// Drawable snapshot for the current frame.
    pub fn visuals(&self, now: Instant) -> GaugeVisuals {
        GaugeVisuals::from_state(&self.state, now, &self.config)
    }

    /// Pending hold deadline, for `WaitUntil`-style host scheduling.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.hold_timer.next_deadline()
    }

    /// Route a pointer event into the gauge. Down captures the pointer;
    /// events from other pointer ids are ignored until release.
    pub fn handle_pointer(&mut self, event: &PointerEvent, now: Instant) {
        if self.detached {
            return;
        }
        match event.kind() {
            PointerEventKind::Down => {
                if self.active_pointer.is_some() || !self.state.is_measured() {
                    return;
                }
                self.active_pointer = Some(event.id());
                event.consume();
                let session = self.sessions.begin();
                self.state.press(event.track_offset(), session, &self.config);
            }
            PointerEventKind::Move => {
                if self.active_pointer != Some(event.id()) {
                    return;
                }
                event.consume();
                // Coalesced: applied on the next frame, newest position wins.
                self.coalescer.submit(event.track_offset());
            }
            PointerEventKind::Up => {
                if self.active_pointer != Some(event.id()) {
                    return;
                }
                event.consume();
                self.finish(now, true);
            }
            PointerEventKind::Cancel => {
                if self.active_pointer != Some(event.id()) {
                    return;
                }
                self.finish(now, false);
            }
        }
    }

    /// Drain coalesced input and advance the gauge. Call once per display
    /// refresh.
    pub fn on_frame(&mut self, now: Instant) {
        if self.detached {
            return;
        }
        if let Some(position) = self.coalescer.take() {
            let action = self.state.apply_move(position, now, &self.config);
            self.apply_timer_action(action, now);
            self.publish(now, false);
        }
    }

    /// Advance the hold timer. Fires the break transition when the deadline
    /// has passed for the live session.
    pub fn tick(&mut self, now: Instant) {
        if self.detached {
            return;
        }
        if self.hold_timer.tick(now, self.state.session()) && self.state.break_through() {
            log::debug!("gauge broke through (value {})", self.value());
            if let Some(handler) = self.on_break.clone() {
                (handler.borrow_mut())();
            }
            self.publish(now, true);
        }
    }

    /// Tear the component down: cancel pending timer work, drop queued
    /// input, and release the callbacks. Idempotent; nothing observable
    /// happens afterwards.
    pub fn detach(&mut self) {
        if self.detached {
            return;
        }
        self.detached = true;
        self.hold_timer.cancel();
        self.coalescer.clear();
        self.active_pointer = None;
        self.on_value = None;
        self.on_break = None;
        log::debug!("gauge detached");
    }

    fn finish(&mut self, now: Instant, sync_value: bool) {
        self.active_pointer = None;
        if sync_value {
            // Apply any not-yet-drained move so the final sync reflects the
            // latest pointer position.
            if let Some(position) = self.coalescer.take() {
                let action = self.state.apply_move(position, now, &self.config);
                self.apply_timer_action(action, now);
            }
        } else {
            self.coalescer.clear();
        }
        let action = self.state.release();
        self.apply_timer_action(action, now);
        if sync_value {
            self.publish(now, true);
        }
    }

    fn apply_timer_action(&mut self, action: TimerAction, now: Instant) {
        match action {
            TimerAction::Arm => {
                self.hold_timer
                    .arm(now, self.config.hold_duration, self.state.session());
            }
            TimerAction::Cancel => self.hold_timer.cancel(),
            TimerAction::None => {}
        }
    }

    fn publish(&mut self, now: Instant, force: bool) {
        if force {
            self.throttle.mark(now);
        } else if !self.throttle.allow(now) {
            return;
        }
        let value = self.value().floor();
        if let Some(handler) = self.on_value.clone() {
            (handler.borrow_mut())(value);
        }
    }
}

impl Drop for ResistiveGauge {
    fn drop(&mut self) {
        self.detach();
    }
}

#[cfg(test)]
#[path = "tests/gauge_tests.rs"]
mod tests;
