use super::*;

#[test]
fn with_length_rescales_and_keeps_direction() {
    let p = Point3::new(0.07, -0.07, 0.07).with_length(0.07);
    assert!((p.length() - 0.07).abs() < 1e-6);
    assert!(p.x > 0.0 && p.y < 0.0 && p.z > 0.0);
    assert_eq!(Point3::ORIGIN.with_length(3.0), Point3::ORIGIN);
}

#[test]
fn point_lerp_hits_endpoints_and_midpoint() {
    let a = Point3::new(0.0, 1.0, -2.0);
    let b = Point3::new(2.0, 3.0, 2.0);
    assert_eq!(Point3::lerp(&a, &b, 0.0), a);
    assert_eq!(Point3::lerp(&a, &b, 1.0), b);
    assert_eq!(Point3::lerp(&a, &b, 0.5), Point3::new(1.0, 2.0, 0.0));
}

#[test]
fn component_order_matches_array() {
    let p = Point3::new(1.0, 2.0, 3.0);
    let arr = p.to_array();
    for (l, v) in arr.iter().enumerate() {
        assert_eq!(p.component(l), *v);
    }
}

#[test]
fn scalar_lerp_covers_a_share_of_the_gap() {
    assert_eq!(<f64 as Lerp>::lerp(&0.0, &1.0, 0.05), 0.05);
    assert_eq!(<f64 as Lerp>::lerp(&0.4, &0.4, 0.1), 0.4);
    assert_eq!(<f32 as Lerp>::lerp(&2.0, &4.0, 0.5), 3.0);
}
