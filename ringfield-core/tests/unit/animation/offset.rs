use super::*;

#[test]
fn manual_steps_clamp_to_limit() {
    let mut s = OffsetState::new(2);
    s.step_left();
    s.step_left();
    s.step_left();
    assert_eq!(s.offset(), -2);
    assert_eq!(s.array_index(), 0);
    for _ in 0..10 {
        s.step_right();
    }
    assert_eq!(s.offset(), 2);
    assert_eq!(s.array_index(), 4);
}

#[test]
fn array_index_survives_saturated_limit() {
    let mut s = OffsetState::new(u32::MAX);
    assert_eq!(s.limit(), i32::MAX);
    assert_eq!(s.array_index(), i32::MAX as usize);
    s.step_right();
    assert_eq!(s.array_index(), i32::MAX as usize + 1);
    s.step_left();
    s.step_left();
    assert_eq!(s.array_index(), i32::MAX as usize - 1);
}

#[test]
fn manual_steps_are_ignored_in_auto_mode() {
    let mut s = OffsetState::new(15);
    s.step_right();
    s.start_auto();
    assert_eq!(s.offset(), 0);
    s.step_right();
    s.step_left();
    assert_eq!(s.offset(), 0);
}

#[test]
fn tick_waits_for_the_interval() {
    let mut s = OffsetState::new(15);
    s.start_auto();
    assert!(!s.tick(10));
    assert!(s.tick(50));
    assert_eq!(s.offset(), -1);
    assert!(!s.tick(99));
    assert!(s.tick(100));
    assert_eq!(s.offset(), -2);
}

#[test]
fn auto_mode_bounces_between_bounds() {
    let mut s = OffsetState::new(2).with_interval_ms(1);
    s.start_auto();
    let mut seen = Vec::new();
    for now in 1..=10 {
        s.tick(now);
        seen.push(s.offset());
    }
    assert_eq!(seen, vec![-1, -2, -2, -1, 0, 1, 2, 2, 1, 0]);
}

#[test]
fn manual_mode_ignores_ticks() {
    let mut s = OffsetState::new(15);
    assert!(!s.tick(1_000));
    assert_eq!(s.offset(), 0);
}

#[test]
fn stop_auto_keeps_offset() {
    let mut s = OffsetState::new(15).with_interval_ms(1);
    s.start_auto();
    s.tick(1);
    s.tick(2);
    s.stop_auto();
    assert!(!s.is_auto());
    assert_eq!(s.offset(), -2);
    s.step_right();
    assert_eq!(s.offset(), -1);
}
