use super::*;
use crate::{
    geometry::shapes::Shape,
    pipeline::uniforms::{U_PROGRESS, U_TIME},
    render::recording::{RecordingRenderer, RenderEvent},
};

fn installed() -> (MorphingField, RecordingRenderer) {
    let mut field = MorphingField::new(FieldConfig::default()).unwrap();
    let mut r = RecordingRenderer::new(field.renderer_settings());
    field.install(&mut r, 0.0).unwrap();
    r.clear_events();
    (field, r)
}

#[test]
fn invalid_config_is_rejected_up_front() {
    let cfg = FieldConfig {
        letter_cycle_speed_ms: 0.0,
        ..FieldConfig::default()
    };
    assert!(MorphingField::new(cfg).is_err());
}

#[test]
fn frame_before_install_fails() {
    let mut field = MorphingField::new(FieldConfig::default()).unwrap();
    let mut r = RecordingRenderer::new(field.renderer_settings());
    let err = field.frame(&mut r, 16.0).unwrap_err();
    assert!(err.to_string().contains("not installed"));
    assert!(field.rebuild_now(&mut r, 16.0).is_err());
}

#[test]
fn install_twice_fails() {
    let (mut field, mut r) = installed();
    assert!(field.install(&mut r, 0.0).is_err());
    assert_eq!(r.live_count(), 1);
}

#[test]
fn speed_changes_apply_live() {
    let (mut field, mut r) = installed();
    assert!(!field.apply(ConfigChange::Speed(0.01)).unwrap());
    assert!(!field.rebuild_pending());
    let report = field.frame(&mut r, 16.0).unwrap();
    assert!(!report.rebuilt);
    assert!((report.progress - 0.01 * 0.8).abs() < 1e-12);
}

#[test]
fn rejected_change_leaves_config_and_flag_alone() {
    let (mut field, _) = installed();
    assert!(field.apply(ConfigChange::Speed(-1.0)).is_err());
    assert_eq!(field.config().speed, FieldConfig::default().speed);
    assert!(!field.rebuild_pending());
}

#[test]
fn hue_change_rebuilds_once_before_the_next_uniform_write() {
    let (mut field, mut r) = installed();
    assert!(field.apply(ConfigChange::Hue(0.1)).unwrap());
    assert!(field.apply(ConfigChange::BaseShape(Shape::Diamond)).unwrap());
    let report = field.frame(&mut r, 16.0).unwrap();
    assert!(report.rebuilt);
    assert_eq!(
        r.events(),
        &[
            RenderEvent::Remove {
                name: INSTANCE_NAME.into(),
                instance: 1
            },
            RenderEvent::Add {
                name: INSTANCE_NAME.into(),
                instance: 2
            },
            RenderEvent::Render {
                name: INSTANCE_NAME.into(),
                instance: 2
            },
        ]
    );
    assert_eq!(field.rebuild_count(), 1);
    assert!(!field.rebuild_pending());
}

#[test]
fn rebuild_restarts_the_animation_from_zero() {
    let (mut field, mut r) = installed();
    for i in 1..=100 {
        field.frame(&mut r, i as f64 * 16.0).unwrap();
    }
    assert!(field.driver().uniforms().progress > 0.2);

    let rolled = field.frame(&mut r, 8100.0).unwrap();
    assert!(rolled.rebuild_scheduled);
    let report = field.frame(&mut r, 8116.0).unwrap();
    assert!(report.rebuilt);

    let cfg = FieldConfig::default();
    assert!((report.progress - cfg.speed * 0.8).abs() < 1e-15);
    assert!((report.morph - cfg.morph_speed * 0.7).abs() < 1e-15);
    assert!((report.elapsed_time - cfg.time_step).abs() < 1e-15);
    let uniforms = &r.instance(INSTANCE_NAME).unwrap().descriptor.uniforms;
    assert_eq!(uniforms.float(U_TIME).unwrap(), cfg.time_step as f32);
}

#[test]
fn rebuilt_descriptor_declares_zeroed_uniforms() {
    let (mut field, mut r) = installed();
    for i in 1..=5 {
        field.frame(&mut r, i as f64 * 16.0).unwrap();
    }
    field.rebuild_now(&mut r, 80.0).unwrap();
    let inst = r.instance(INSTANCE_NAME).unwrap();
    assert_eq!(inst.id, 2);
    assert_eq!(inst.descriptor.uniforms.float(U_PROGRESS).unwrap(), 0.0);
    assert_eq!(inst.descriptor.uniforms.float(U_TIME).unwrap(), 0.0);
    assert_eq!(field.driver().uniforms().elapsed_time, 0.0);
}

struct StuckRenderer(RecordingRenderer);

impl Renderer for StuckRenderer {
    fn add(&mut self, name: &str, descriptor: InstanceDescriptor) -> FieldResult<()> {
        self.0.add(name, descriptor)
    }

    fn remove(&mut self, _name: &str) -> FieldResult<bool> {
        Err(FieldError::renderer("context lost"))
    }

    fn resize(&mut self, width: u32, height: u32) -> FieldResult<()> {
        self.0.resize(width, height)
    }

    fn uniforms_mut(&mut self, name: &str) -> Option<&mut UniformMap> {
        self.0.uniforms_mut(name)
    }
}

#[test]
fn failed_uninstall_keeps_the_field_installed() {
    let mut field = MorphingField::new(FieldConfig::default()).unwrap();
    let mut r = StuckRenderer(RecordingRenderer::new(field.renderer_settings()));
    field.install(&mut r, 0.0).unwrap();
    field.apply(ConfigChange::Hue(0.2)).unwrap();

    assert!(field.uninstall(&mut r).is_err());
    assert!(field.is_installed());
    assert!(field.rebuild_pending());
    assert_eq!(r.0.live_count(), 1);
}

#[test]
fn uninstall_clears_pending_work() {
    let (mut field, mut r) = installed();
    field.apply(ConfigChange::Lightness(0.3)).unwrap();
    assert!(field.uninstall(&mut r).unwrap());
    assert!(!field.rebuild_pending());
    assert!(!field.is_installed());
    assert_eq!(r.live_count(), 0);
}

#[test]
fn resize_and_settings_reach_the_renderer() {
    let (mut field, mut r) = installed();
    field.resize(&mut r, 1280, 720).unwrap();
    assert_eq!(r.size(), (1280, 720));
    assert_eq!(r.settings().camera_position, [0.0, 0.0, 2.0]);
    assert_eq!(r.settings().clear_color, [0.0, 0.0, 0.0, 1.0]);
}
