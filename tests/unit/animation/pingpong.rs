use super::*;

#[test]
fn reaches_top_then_reverses() {
    let step = 0.003 * 0.8;
    let mut p = PingPong::default();
    let mut steps = 0;
    while p.value < 1.0 {
        p.step(step);
        steps += 1;
        assert!(steps < 10_000);
    }
    assert!(!p.forward);
    let top = p.value;
    p.step(step);
    assert!(p.value < top);
}

#[test]
fn never_leaves_one_step_band() {
    let step = 0.07;
    let mut p = PingPong::default();
    let mut flips = 0;
    let mut last_dir = p.forward;
    for _ in 0..2_000 {
        p.step(step);
        assert!(p.value >= -step - 1e-12);
        assert!(p.value <= 1.0 + step + 1e-12);
        if p.forward != last_dir {
            flips += 1;
            last_dir = p.forward;
        }
    }
    assert!(flips > 10);
}

#[test]
fn zero_step_holds_value() {
    let mut p = PingPong::new(0.4);
    for _ in 0..10 {
        assert_eq!(p.step(0.0), 0.4);
    }
}
