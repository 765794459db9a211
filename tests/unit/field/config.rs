use super::*;

#[test]
fn defaults_are_valid() {
    let cfg = FieldConfig::default();
    cfg.validate().unwrap();
    assert_eq!(cfg.letter_cycle_speed_ms, 8000.0);
    assert_eq!(cfg.base_shape, Shape::Cube);
    assert_eq!(cfg.morph_shape, Shape::Sphere);
}

#[test]
fn json_overrides_only_given_keys() {
    let cfg = FieldConfig::from_json_str(r#"{ "hue": 0.1, "base_shape": "diamond" }"#).unwrap();
    assert_eq!(cfg.hue, 0.1);
    assert_eq!(cfg.base_shape, Shape::Diamond);
    assert_eq!(cfg.saturation, FieldConfig::default().saturation);
}

#[test]
fn malformed_json_is_a_serde_error() {
    let err = FieldConfig::from_json_str("{ nope").unwrap_err();
    assert!(err.to_string().contains("serialization error:"));
}

#[test]
fn invalid_ranges_are_rejected() {
    let bad = [
        r#"{ "letter_cycle_speed_ms": 0 }"#,
        r#"{ "path_duration": 1.5 }"#,
        r#"{ "speed": -1 }"#,
        r#"{ "cube_size": 0 }"#,
        r#"{ "time_step": 0 }"#,
    ];
    for s in bad {
        let err = FieldConfig::from_json_str(s).unwrap_err();
        assert!(err.to_string().contains("validation error:"), "{s}");
    }
}

#[test]
fn only_speed_changes_skip_rebuild() {
    assert!(!ConfigChange::Speed(0.01).requires_rebuild());
    assert!(!ConfigChange::MorphSpeed(0.01).requires_rebuild());
    assert!(ConfigChange::Hue(0.2).requires_rebuild());
    assert!(ConfigChange::HueSpread(0.2).requires_rebuild());
    assert!(ConfigChange::Saturation(0.2).requires_rebuild());
    assert!(ConfigChange::Lightness(0.2).requires_rebuild());
    assert!(ConfigChange::BaseShape(Shape::Diamond).requires_rebuild());
}

#[test]
fn rejected_change_leaves_config_untouched() {
    let mut cfg = FieldConfig::default();
    assert!(ConfigChange::Speed(f64::NAN).apply_to(&mut cfg).is_err());
    assert_eq!(cfg, FieldConfig::default());
    ConfigChange::Hue(0.9).apply_to(&mut cfg).unwrap();
    assert_eq!(cfg.hue, 0.9);
}

#[test]
fn change_serializes_with_field_tag() {
    let json = serde_json::to_string(&ConfigChange::HueSpread(0.3)).unwrap();
    assert_eq!(json, r#"{"field":"hue_spread","value":0.3}"#);
}
