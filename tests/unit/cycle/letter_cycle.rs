use super::*;

fn cycle() -> LetterCycle {
    LetterCycle::new(LetterRegistry::new())
}

fn assert_next_follows(c: &LetterCycle) {
    let s = c.state();
    assert_eq!(s.next_index, (s.current_index + 1) % Letter::COUNT);
}

#[test]
fn full_time_cycle_rolls_over_once() {
    let mut c = cycle();
    let changed = c.update(8000.0, 8000.0);
    assert!(changed);
    assert_eq!(c.state().current_index, 1);
    assert_eq!(c.state().next_index, 2);
    assert_eq!(c.state().transition, 0.0);
    assert_eq!(c.current_letter(), Letter::U);
}

#[test]
fn partial_time_step_accumulates() {
    let mut c = cycle();
    assert!(!c.update(2000.0, 8000.0));
    assert_eq!(c.state().transition, 0.25);
    assert_eq!(c.state().current_index, 0);
}

#[test]
fn scroll_dominant_snaps_to_target_letter() {
    let mut c = cycle();
    c.state.scroll_progress = 0.5;
    let changed = c.update(16.0, 8000.0);
    assert!(changed);
    assert_eq!(c.state().current_index, 2);
    assert_eq!(c.current_letter(), Letter::P);
    assert_eq!(c.state().transition, 0.0);
    assert_next_follows(&c);
}

#[test]
fn scroll_eases_transition_instead_of_snapping() {
    let mut c = cycle();
    c.state.scroll_progress = 0.125; // letter progress 0.5 within L
    c.update(16.0, 8000.0);
    assert_eq!(c.state().current_index, 0);
    assert!((c.state().transition - 0.05).abs() < 1e-12);
    c.update(16.0, 8000.0);
    assert!((c.state().transition - 0.095).abs() < 1e-12);
}

#[test]
fn weak_scroll_still_drifts_on_time() {
    let mut c = cycle();
    c.state.scroll_progress = 0.02; // influence 0.08
    c.update(800.0, 8000.0);
    assert!((c.state().transition - 0.1).abs() < 1e-12);
}

#[test]
fn full_scroll_wraps_back_to_first_letter() {
    let mut c = cycle();
    c.state.current_index = 3;
    c.state.next_index = 0;
    c.state.scroll_progress = 1.0;
    c.update(16.0, 8000.0);
    assert_eq!(c.state().current_index, 0);
    assert_next_follows(&c);
}

#[test]
fn scroll_low_pass_moves_five_percent() {
    let mut c = cycle();
    c.set_target_scroll(1.0);
    c.ease_scroll();
    assert!((c.state().scroll_progress - 0.05).abs() < 1e-12);
    c.ease_scroll();
    assert!((c.state().scroll_progress - 0.0975).abs() < 1e-12);
    c.set_target_scroll(5.0);
    assert_eq!(c.state().target_scroll_progress, 1.0);
}

#[test]
fn next_index_invariant_holds_over_mixed_updates() {
    let mut c = cycle();
    for i in 0..500 {
        let target = ((i as f64) * 0.013).sin().abs();
        c.set_target_scroll(target);
        c.ease_scroll();
        c.update(16.7 * ((i % 7) as f64), 400.0);
        assert_next_follows(&c);
        assert!((0.0..1.0).contains(&c.state().transition));
    }
}

#[test]
fn position_blends_with_smoothstep() {
    let mut c = cycle();
    assert_eq!(c.position(0), c.current_layout()[0]);
    c.state.transition = 0.5;
    let a = c.current_layout()[3];
    let b = c.next_layout()[3];
    let mid = c.position(3);
    assert!((mid.x - (a.x + b.x) / 2.0).abs() < 1e-6);
    assert!((mid.y - (a.y + b.y) / 2.0).abs() < 1e-6);
}

#[test]
fn position_past_both_layouts_is_origin() {
    let c = cycle();
    // L has 22 points and U has 30.
    assert_eq!(c.position(35), Point3::ORIGIN);
}

#[test]
fn position_blends_toward_origin_past_next_layout() {
    let mut c = cycle();
    c.state.transition = 1.0 - 1e-9;
    // Point 25 exists in U but not in L.
    let p = c.position(25);
    let u = c.next_layout()[25];
    assert!((p.x - u.x).abs() < 1e-5);
    c.state.transition = 0.0;
    assert_eq!(c.position(25), Point3::ORIGIN);
}
