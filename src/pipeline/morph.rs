use std::collections::BTreeMap;

use crate::{
    color::hsl::hsl_to_rgb,
    cycle::letter_cycle::LetterCycle,
    field::config::FieldConfig,
    foundation::{error::FieldResult, math::Rng64},
    geometry::shapes::MorphPair,
    pipeline::{
        attributes::{AttributeSpec, sample_attributes},
        descriptor::{DrawMode, InstanceDescriptor},
        modifiers::{Modifier, face_shade, morph_target},
        shaders::{FRAGMENT_SOURCE, vertex_source},
        uniforms::UniformMap,
    },
};

/// Vertical distance of the Bezier anchors above and below the letter position.
pub const SETTLE_OFFSET: f32 = 0.2;
/// Horizontal (x, z) jitter range of the control points.
pub const CONTROL_JITTER_XZ: f64 = 0.3;
/// Vertical jitter range of the control points.
pub const CONTROL_JITTER_Y: f64 = 0.2;

/// Attribute names of the morphing instance.
pub mod names {
    /// Bezier start anchor.
    pub const POSITION_START: &str = "aPositionStart";
    /// First Bezier control point.
    pub const CONTROL_POINT_ONE: &str = "aControlPointOne";
    /// Second Bezier control point.
    pub const CONTROL_POINT_TWO: &str = "aControlPointTwo";
    /// Bezier end anchor.
    pub const POSITION_END: &str = "aPositionEnd";
    /// Per-point color.
    pub const COLOR: &str = "aColor";
    /// Animation phase stagger.
    pub const OFFSET: &str = "aOffset";
    /// Morph-target vertex, filled by modifier.
    pub const POSITION_MORPH: &str = "aPositionMorph";
}

/// Phase stagger for point `index` so traversals start in a wave.
pub fn stagger_offset(index: usize, point_count: usize, path_duration: f64) -> f64 {
    if point_count < 2 {
        return 0.0;
    }
    index as f64 * ((1.0 - path_duration) / (point_count - 1) as f64)
}

fn control_point(rng: &mut Rng64) -> Vec<f32> {
    vec![
        rng.symmetric(CONTROL_JITTER_XZ) as f32,
        rng.symmetric(CONTROL_JITTER_Y) as f32,
        rng.symmetric(CONTROL_JITTER_XZ) as f32,
    ]
}

/// Assemble the morphing-letter descriptor for the cycle's current frame.
///
/// Control points are drawn from `rng`, so every call yields fresh jitter.
#[tracing::instrument(skip_all, fields(letter = %cycle.current_letter().glyph()))]
pub fn build_morph_descriptor(
    cycle: &LetterCycle,
    cfg: &FieldConfig,
    rng: &mut Rng64,
    uniforms: UniformMap,
) -> FieldResult<InstanceDescriptor> {
    let geometry = MorphPair::from_shapes(cfg.base_shape, cfg.morph_shape, cfg.cube_size)?;
    let multiplier = cycle.registry().max_count();

    let mut rng_one = Rng64::new(rng.next_u64());
    let mut rng_two = Rng64::new(rng.next_u64());
    let (hue, spread) = (cfg.hue, cfg.hue_spread);
    let (sat, light) = (cfg.saturation, cfg.lightness);
    let duration = cfg.path_duration;

    let specs = vec![
        AttributeSpec::new(names::POSITION_START, 3, |i, _| {
            cycle.position(i).offset_y(SETTLE_OFFSET).to_array().to_vec()
        }),
        AttributeSpec::new(names::CONTROL_POINT_ONE, 3, move |_, _| {
            control_point(&mut rng_one)
        }),
        AttributeSpec::new(names::CONTROL_POINT_TWO, 3, move |_, _| {
            control_point(&mut rng_two)
        }),
        AttributeSpec::new(names::POSITION_END, 3, |i, _| {
            cycle.position(i).offset_y(-SETTLE_OFFSET).to_array().to_vec()
        }),
        AttributeSpec::new(names::COLOR, 3, move |i, total| {
            let h = hue + (i as f64 / total as f64) * spread;
            hsl_to_rgb(h, sat, light).to_array_f32().to_vec()
        }),
        AttributeSpec::new(names::OFFSET, 1, move |i, total| {
            vec![stagger_offset(i, total, duration) as f32]
        }),
        AttributeSpec::zeroed(names::POSITION_MORPH, 3),
    ];
    let attributes = sample_attributes(specs, multiplier)?;

    let mut modifiers: BTreeMap<String, Modifier> = BTreeMap::new();
    modifiers.insert(names::COLOR.to_string(), face_shade);
    modifiers.insert(names::POSITION_MORPH.to_string(), morph_target);

    let descriptor = InstanceDescriptor {
        attributes,
        multiplier,
        uniforms,
        vertex: vertex_source(duration),
        fragment: FRAGMENT_SOURCE.to_string(),
        mode: DrawMode::Triangles,
        geometry,
        modifiers,
    };
    descriptor.validate()?;
    Ok(descriptor)
}

#[cfg(test)]
#[path = "../../tests/unit/pipeline/morph.rs"]
mod tests;
