use super::*;

#[test]
fn reports_once_per_window() {
    let mut m = FpsMeter::new();
    let mut reports = Vec::new();
    for i in 0..=120 {
        if let Some(fps) = m.tick(f64::from(i) * 1000.0 / 60.0) {
            reports.push(fps);
        }
    }
    assert_eq!(reports, vec![60, 60]);
    assert_eq!(m.last(), Some(60));
}

#[test]
fn nothing_before_first_window_closes() {
    let mut m = FpsMeter::new();
    assert_eq!(m.tick(0.0), None);
    assert_eq!(m.tick(500.0), None);
    assert_eq!(m.last(), None);
}
