use super::*;

use web_time::Instant;

const TRACK: f32 = 300.0;

fn config() -> GaugeConfig {
    GaugeConfig::default()
}

fn pressed_state() -> (GaugeState, GaugeConfig, Instant) {
    let config = config();
    let mut state = GaugeState::new();
    state.measure(TRACK);
    state.press(0.0, 1, &config);
    (state, config, Instant::now())
}

/// Raw position far enough past the resistance start that the damped
/// position lands on the edge (progress clamps to 1).
const EDGE_RAW: f32 = 400.0;

#[test]
fn press_enters_normal_phase() {
    let (state, _, _) = pressed_state();
    assert_eq!(state.phase(), GaugePhase::Normal);
    assert!(state.dragging());
}

#[test]
fn unmeasured_gauge_is_inert() {
    let config = config();
    let mut state = GaugeState::new();
    state.press(10.0, 1, &config);

    assert_eq!(state.phase(), GaugePhase::Idle);
    assert!(!state.dragging());
    assert_eq!(state.apply_move(50.0, Instant::now(), &config), TimerAction::None);
    assert_eq!(state.value(&config), 0.0);
}

#[test]
fn zero_width_track_is_inert() {
    let config = config();
    let mut state = GaugeState::new();
    state.measure(0.0);
    state.press(10.0, 1, &config);

    assert!(!state.dragging());
    assert_eq!(state.value(&config), 0.0);
}

#[test]
fn moves_below_resistance_track_pointer_directly() {
    let (mut state, config, now) = pressed_state();
    state.apply_move(150.0, now, &config);

    assert_eq!(state.phase(), GaugePhase::Normal);
    assert_eq!(state.clamped_position(), 150.0);
    assert!((state.value(&config) - 50.0).abs() < 1e-4);
}

#[test]
fn negative_positions_clamp_to_zero() {
    let (mut state, config, now) = pressed_state();
    state.apply_move(-40.0, now, &config);

    assert_eq!(state.clamped_position(), 0.0);
    assert_eq!(state.value(&config), 0.0);
}

#[test]
fn entering_resistance_zone_damps_movement() {
    let (mut state, config, now) = pressed_state();
    // start = 288, range = 12; raw 295 gives progress 7/36.
    state.apply_move(295.0, now, &config);

    assert_eq!(state.phase(), GaugePhase::Resisting);
    assert!(state.clamped_position() < 295.0);
    assert!(state.clamped_position() > 288.0);
    assert!(state.clamped_position() <= TRACK);
}

#[test]
fn damped_position_never_exceeds_track_before_break() {
    let (mut state, config, now) = pressed_state();
    for raw in [289.0, 295.0, 300.0, 320.0, 400.0, 1000.0] {
        state.apply_move(raw, now, &config);
        assert!(
            state.clamped_position() <= TRACK,
            "clamped {} for raw {raw}",
            state.clamped_position()
        );
    }
}

#[test]
fn value_monotonic_for_nondecreasing_moves_below_break() {
    let (mut state, config, now) = pressed_state();
    let mut last = state.value(&config);
    for raw in [0.0, 10.0, 80.0, 150.0, 287.0, 290.0, 295.0, 305.0, 350.0, 500.0] {
        state.apply_move(raw, now, &config);
        let value = state.value(&config);
        assert!(
            value >= last,
            "value regressed from {last} to {value} at raw {raw}"
        );
        last = value;
    }
    assert_ne!(state.phase(), GaugePhase::Broken);
}

#[test]
fn reaching_the_edge_requests_hold_timer() {
    let (mut state, config, now) = pressed_state();
    let action = state.apply_move(EDGE_RAW, now, &config);

    assert_eq!(action, TimerAction::Arm);
    assert_eq!(state.phase(), GaugePhase::Holding);
    assert_eq!(state.clamped_position(), TRACK);
    assert_eq!(state.hold_started(), Some(now));
}

#[test]
fn holding_stays_pinned_under_further_movement() {
    let (mut state, config, now) = pressed_state();
    state.apply_move(EDGE_RAW, now, &config);
    let action = state.apply_move(EDGE_RAW + 200.0, now, &config);

    assert_eq!(action, TimerAction::None);
    assert_eq!(state.phase(), GaugePhase::Holding);
    assert_eq!(state.clamped_position(), TRACK);
}

#[test]
fn retreat_from_holding_cancels_timer_and_resets() {
    let (mut state, config, now) = pressed_state();
    state.apply_move(EDGE_RAW, now, &config);
    let action = state.apply_move(100.0, now, &config);

    assert_eq!(action, TimerAction::Cancel);
    assert_eq!(state.phase(), GaugePhase::Normal);
    assert_eq!(state.hold_started(), None);
    assert_eq!(state.clamped_position(), 100.0);
}

#[test]
fn retreat_from_resisting_resets_without_timer_work() {
    let (mut state, config, now) = pressed_state();
    state.apply_move(295.0, now, &config);
    assert_eq!(state.phase(), GaugePhase::Resisting);

    let action = state.apply_move(100.0, now, &config);
    assert_eq!(action, TimerAction::None);
    assert_eq!(state.phase(), GaugePhase::Normal);
}

#[test]
fn release_while_holding_cancels_and_reverts_to_normal() {
    let (mut state, config, now) = pressed_state();
    state.apply_move(EDGE_RAW, now, &config);

    let action = state.release();
    assert_eq!(action, TimerAction::Cancel);
    assert_eq!(state.phase(), GaugePhase::Normal);
    assert!(!state.dragging());
    assert_eq!(state.hold_started(), None);
}

#[test]
fn break_through_requires_holding_while_dragging() {
    let (mut state, config, now) = pressed_state();
    assert!(!state.break_through());

    state.apply_move(EDGE_RAW, now, &config);
    state.release();
    // Timer fired after release: must not break.
    assert!(!state.break_through());
    assert_eq!(state.phase(), GaugePhase::Normal);
}

#[test]
fn break_through_unlocks_overshoot() {
    let (mut state, config, now) = pressed_state();
    state.apply_move(EDGE_RAW, now, &config);
    assert!(state.break_through());
    assert_eq!(state.phase(), GaugePhase::Broken);
    assert_eq!(state.hold_started(), None);

    state.apply_move(TRACK + 20.0, now, &config);
    assert_eq!(state.clamped_position(), 320.0);
    // value = 100 + 20^1.5
    assert!((state.value(&config) - 189.44272).abs() < 1e-3);
}

#[test]
fn broken_persists_across_release() {
    let (mut state, config, now) = pressed_state();
    state.apply_move(EDGE_RAW, now, &config);
    state.break_through();
    state.release();

    assert_eq!(state.phase(), GaugePhase::Broken);
}

#[test]
fn press_below_zone_rearms_after_break() {
    let (mut state, config, now) = pressed_state();
    state.apply_move(EDGE_RAW, now, &config);
    state.break_through();
    state.release();

    state.press(10.0, 2, &config);
    assert_eq!(state.phase(), GaugePhase::Normal);
    assert_eq!(state.session(), 2);

    // The full resist/hold/break cycle is available again.
    let action = state.apply_move(EDGE_RAW, now, &config);
    assert_eq!(action, TimerAction::Arm);
    assert_eq!(state.phase(), GaugePhase::Holding);
}

#[test]
fn press_inside_zone_does_not_rearm_after_break() {
    let (mut state, config, now) = pressed_state();
    state.apply_move(EDGE_RAW, now, &config);
    state.break_through();
    state.release();

    state.press(TRACK * 0.97, 2, &config);
    assert_eq!(state.phase(), GaugePhase::Broken);

    // Movement past the edge stays unrestricted.
    state.apply_move(TRACK + 50.0, now, &config);
    assert_eq!(state.clamped_position(), TRACK + 50.0);
}

#[test]
fn broken_movement_below_zone_keeps_broken_within_session() {
    let (mut state, config, now) = pressed_state();
    state.apply_move(EDGE_RAW, now, &config);
    state.break_through();

    // Dragging back below the resistance zone mid-session does not revert.
    state.apply_move(50.0, now, &config);
    assert_eq!(state.phase(), GaugePhase::Broken);
    assert_eq!(state.clamped_position(), 50.0);
}

#[test]
fn move_without_press_is_ignored() {
    let config = config();
    let mut state = GaugeState::new();
    state.measure(TRACK);
    assert_eq!(state.apply_move(150.0, Instant::now(), &config), TimerAction::None);
    assert_eq!(state.clamped_position(), 0.0);
}

#[test]
fn release_without_press_is_ignored() {
    let mut state = GaugeState::new();
    state.measure(TRACK);
    assert_eq!(state.release(), TimerAction::None);
    assert_eq!(state.phase(), GaugePhase::Idle);
}

#[test]
fn hold_started_set_exactly_while_holding() {
    let (mut state, config, now) = pressed_state();
    assert!(state.hold_started().is_none());

    state.apply_move(295.0, now, &config);
    assert!(state.hold_started().is_none());

    state.apply_move(EDGE_RAW, now, &config);
    assert!(state.hold_started().is_some());

    state.apply_move(100.0, now, &config);
    assert!(state.hold_started().is_none());
}

#[test]
fn value_is_continuous_at_the_track_end() {
    let (mut state, config, now) = pressed_state();
    state.apply_move(EDGE_RAW, now, &config);
    state.break_through();

    state.apply_move(TRACK, now, &config);
    let at_edge = state.value(&config);
    state.apply_move(TRACK + 0.01, now, &config);
    let just_past = state.value(&config);

    assert!((at_edge - 100.0).abs() < 1e-4);
    assert!(just_past > at_edge);
    assert!(just_past - at_edge < 0.01);
}

#[test]
fn resistance_transform_matches_cubic_ease_out() {
    let config = config();
    // start = 288, range = 12, raw 295 -> d = 7, progress = 7/36.
    let progress: f32 = 7.0 / 36.0;
    let expected = 288.0 + 12.0 * (1.0 - (1.0 - progress).powi(3));
    let actual = resistance_transform(295.0, TRACK, &config);
    assert!((actual - expected).abs() < 1e-4);
}

#[test]
fn shake_intensity_ramps_with_hold_progress() {
    let (mut state, config, now) = pressed_state();
    state.apply_move(295.0, now, &config);
    let resisting = state.shake_intensity(now, &config);
    assert!(resisting >= 1.0 && resisting < 5.0);

    state.apply_move(EDGE_RAW, now, &config);
    let hold_start = state.shake_intensity(now, &config);
    let hold_end = state.shake_intensity(now + config.hold_duration, &config);
    assert!((hold_start - 3.0).abs() < 1e-4);
    assert!((hold_end - 17.0).abs() < 1e-4);
}

#[test]
fn shake_intensity_zero_outside_resistance() {
    let (mut state, config, now) = pressed_state();
    state.apply_move(150.0, now, &config);
    assert_eq!(state.shake_intensity(now, &config), 0.0);

    state.apply_move(EDGE_RAW, now, &config);
    state.break_through();
    assert_eq!(state.shake_intensity(now, &config), 0.0);
}

#[test]
fn thumb_pressure_is_mild_resisting_and_full_holding() {
    let (mut state, config, now) = pressed_state();
    state.apply_move(295.0, now, &config);
    let resisting = state.thumb_pressure(now, &config);
    assert!(resisting > 0.0 && resisting <= 0.3);

    state.apply_move(EDGE_RAW, now, &config);
    let held = state.thumb_pressure(now + config.hold_duration, &config);
    assert!((held - 1.0).abs() < 1e-4);
}
