//! Replays a complete gauge session against simulated time and logs what a
//! host UI would observe: throttled value updates, shake feedback, the
//! break-through trigger, and overshoot.
//!
//! Run with `RUST_LOG=debug` to also see phase transitions and timer
//! activity from the library crates.

use std::cell::RefCell;
use std::rc::Rc;

use tugmeter_foundation::input::types::{PointerEvent, PointerEventKind};
use tugmeter_foundation::PointerDispatcher;
use tugmeter_testing::ManualClock;
use tugmeter_ui::{GaugeConfig, ResistiveGauge};

const TRACK_LENGTH: f32 = 300.0;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let broke = Rc::new(RefCell::new(false));
    let mut gauge = ResistiveGauge::new(GaugeConfig::default())
        .on_value(|value| log::info!("value -> {value}"))
        .on_break({
            let broke = Rc::clone(&broke);
            move || {
                *broke.borrow_mut() = true;
                log::info!("*** break-through! ***");
            }
        });
    gauge.measure(TRACK_LENGTH);

    let mut dispatcher = PointerDispatcher::new();
    let clock = ManualClock::new();

    let pump = |dispatcher: &mut PointerDispatcher, gauge: &mut ResistiveGauge| {
        let now = clock.now();
        dispatcher.drain(|event| gauge.handle_pointer(&event, now));
        gauge.tick(now);
        gauge.on_frame(now);
    };

    log::info!("-- sweeping along the track --");
    dispatcher.push(PointerEvent::new(PointerEventKind::Down, 0.0).with_id(1));
    dispatcher.capture(1);
    pump(&mut dispatcher, &mut gauge);
    for x in (0..=280).step_by(40) {
        dispatcher.push(PointerEvent::new(PointerEventKind::Move, x as f32).with_id(1));
        clock.advance_millis(90);
        pump(&mut dispatcher, &mut gauge);
    }

    log::info!("-- pushing into the resistance zone --");
    for x in [292.0, 300.0, 320.0, 360.0, 400.0] {
        dispatcher.push(PointerEvent::new(PointerEventKind::Move, x).with_id(1));
        clock.advance_millis(90);
        pump(&mut dispatcher, &mut gauge);
        let visuals = gauge.visuals(clock.now());
        log::info!(
            "raw {x:>5.1} -> thumb {:>6.2} (phase {:?}, shake {:.1})",
            visuals.thumb_offset,
            gauge.phase(),
            visuals.shake_intensity
        );
    }

    log::info!("-- holding at the edge --");
    while !*broke.borrow() {
        clock.advance_millis(100);
        pump(&mut dispatcher, &mut gauge);
        let shake = gauge.shake_intensity(clock.now());
        if shake > 0.0 {
            log::debug!("holding, shake {shake:.1}");
        }
    }

    log::info!("-- dragging past the edge --");
    for x in [320.0, 360.0, 420.0] {
        dispatcher.push(PointerEvent::new(PointerEventKind::Move, x).with_id(1));
        clock.advance_millis(90);
        pump(&mut dispatcher, &mut gauge);
        let visuals = gauge.visuals(clock.now());
        log::info!(
            "overshoot {:>6.2}px, value {:>8.2}",
            visuals.overshoot,
            gauge.value()
        );
    }

    dispatcher.push(PointerEvent::new(PointerEventKind::Up, 0.0).with_id(1));
    pump(&mut dispatcher, &mut gauge);
    dispatcher.release_capture();
    gauge.detach();
    log::info!("session complete, final value {:.2}", gauge.value());
}
