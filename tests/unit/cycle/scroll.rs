use super::*;

#[test]
fn fraction_uses_scrollable_range() {
    assert_eq!(scroll_fraction(500.0, 2000.0, 1000.0), 0.5);
    assert_eq!(scroll_fraction(5000.0, 2000.0, 1000.0), 1.0);
    assert_eq!(scroll_fraction(-20.0, 2000.0, 1000.0), 0.0);
}

#[test]
fn short_documents_do_not_divide_by_zero() {
    assert_eq!(scroll_fraction(0.0, 800.0, 800.0), 0.0);
    assert_eq!(scroll_fraction(3.0, 800.0, 900.0), 1.0);
}

#[test]
fn last_value_wins_across_clones() {
    let signal = ScrollSignal::new();
    let handler = signal.clone();
    handler.set(0.2);
    handler.set(0.9);
    handler.record(250.0, 1500.0, 1000.0);
    assert_eq!(signal.latest(), 0.5);
}

#[test]
fn invalid_values_are_sanitized() {
    let signal = ScrollSignal::new();
    signal.set(f64::NAN);
    assert_eq!(signal.latest(), 0.0);
    signal.set(7.0);
    assert_eq!(signal.latest(), 1.0);
}
