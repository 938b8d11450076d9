//! Scripted gauge driver.
//!
//! Replays pointer scenarios against a [`ResistiveGauge`] exactly the way a
//! host would: events go through a capture-aware [`PointerDispatcher`], the
//! frame loop drains coalesced input once per step, and the hold timer is
//! serviced from the robot's [`ManualClock`].

use std::cell::RefCell;
use std::rc::Rc;

use tugmeter_foundation::input::types::{PointerEvent, PointerEventKind, PointerId};
use tugmeter_foundation::PointerDispatcher;
use tugmeter_ui::{GaugeConfig, GaugePhase, ResistiveGauge};

use crate::clock::ManualClock;

/// Milliseconds between simulated frames while holding.
const HOLD_STEP_MS: u64 = 100;

pub struct GaugeRobot {
    gauge: ResistiveGauge,
    dispatcher: PointerDispatcher,
    clock: ManualClock,
    pointer_seq: PointerId,
    active_pointer: Option<PointerId>,
    values: Rc<RefCell<Vec<f32>>>,
    breaks: Rc<RefCell<u32>>,
}

impl GaugeRobot {
    pub fn new(track_length: f32) -> Self {
        Self::with_config(GaugeConfig::default(), track_length)
    }

    pub fn with_config(config: GaugeConfig, track_length: f32) -> Self {
        let values = Rc::new(RefCell::new(Vec::new()));
        let breaks = Rc::new(RefCell::new(0u32));
        let mut gauge = ResistiveGauge::new(config)
            .on_value({
                let values = Rc::clone(&values);
                move |value| values.borrow_mut().push(value)
            })
            .on_break({
                let breaks = Rc::clone(&breaks);
                move || *breaks.borrow_mut() += 1
            });
        gauge.measure(track_length);
        Self {
            gauge,
            dispatcher: PointerDispatcher::new(),
            clock: ManualClock::new(),
            pointer_seq: 0,
            active_pointer: None,
            values,
            breaks,
        }
    }

    /// Press with a fresh pointer id and capture it, as a host would on
    /// pointer-down over the thumb.
    pub fn press(&mut self, x: f32) {
        self.pointer_seq += 1;
        let id = self.pointer_seq;
        self.dispatcher
            .push(PointerEvent::new(PointerEventKind::Down, x).with_id(id));
        self.pump();
        self.dispatcher.capture(id);
        self.active_pointer = Some(id);
    }

    /// A second finger pressing mid-drag. The dispatcher's capture filter is
    /// expected to drop it.
    pub fn press_secondary(&mut self, x: f32) {
        self.pointer_seq += 1;
        let id = self.pointer_seq;
        self.dispatcher
            .push(PointerEvent::new(PointerEventKind::Down, x).with_id(id));
        self.dispatcher
            .push(PointerEvent::new(PointerEventKind::Move, x).with_id(id));
        self.pump();
        self.frame();
    }

    /// Move the active pointer and run one frame.
    pub fn drag_to(&mut self, x: f32) {
        let id = self.active_pointer.unwrap_or(self.pointer_seq);
        self.dispatcher
            .push(PointerEvent::new(PointerEventKind::Move, x).with_id(id));
        self.pump();
        self.frame();
    }

    pub fn release(&mut self) {
        let id = self.active_pointer.take().unwrap_or(self.pointer_seq);
        self.dispatcher
            .push(PointerEvent::new(PointerEventKind::Up, 0.0).with_id(id));
        self.pump();
        self.dispatcher.release_capture();
    }

    pub fn cancel(&mut self) {
        let id = self.active_pointer.take().unwrap_or(self.pointer_seq);
        self.dispatcher
            .push(PointerEvent::new(PointerEventKind::Cancel, 0.0).with_id(id));
        self.pump();
        self.dispatcher.release_capture();
    }

    /// Let simulated time pass in frame-sized steps, servicing the hold
    /// timer and the frame loop on each step.
    pub fn wait(&mut self, millis: u64) {
        let mut remaining = millis;
        while remaining > 0 {
            let chunk = HOLD_STEP_MS.min(remaining);
            self.clock.advance_millis(chunk);
            remaining -= chunk;
            self.gauge.tick(self.clock.now());
            self.gauge.on_frame(self.clock.now());
        }
    }

    pub fn frame(&mut self) {
        self.gauge.on_frame(self.clock.now());
    }

    pub fn detach(&mut self) {
        self.gauge.detach();
    }

    pub fn phase(&self) -> GaugePhase {
        self.gauge.phase()
    }

    pub fn value(&self) -> f32 {
        self.gauge.value()
    }

    pub fn published(&self) -> Vec<f32> {
        self.values.borrow().clone()
    }

    pub fn break_count(&self) -> u32 {
        *self.breaks.borrow()
    }

    pub fn clock(&self) -> &ManualClock {
        &self.clock
    }

    pub fn gauge(&self) -> &ResistiveGauge {
        &self.gauge
    }

    pub fn gauge_mut(&mut self) -> &mut ResistiveGauge {
        &mut self.gauge
    }

    fn pump(&mut self) {
        let now = self.clock.now();
        let gauge = &mut self.gauge;
        self.dispatcher.drain(|event| gauge.handle_pointer(&event, now));
    }
}

#[cfg(test)]
#[path = "tests/scenario_tests.rs"]
mod tests;
