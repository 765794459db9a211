use super::*;
use crate::{
    geometry::shapes::{SHAPE_VERTEX_COUNT, Shape},
    pipeline::{
        attributes::{AttributeSpec, sample_attributes},
        modifiers::{face_shade, morph_target},
        uniforms::UniformValue,
    },
};

fn descriptor(points: usize) -> InstanceDescriptor {
    let attributes = sample_attributes(
        vec![
            AttributeSpec::new("aColor", 3, |i, _| vec![i as f32, 0.5, 1.0]),
            AttributeSpec::zeroed("aPositionMorph", 3),
            AttributeSpec::new("aOffset", 1, |i, _| vec![i as f32 * 0.1]),
        ],
        points,
    )
    .unwrap();
    let mut uniforms = UniformMap::new();
    uniforms.declare("uTime", UniformValue::Float(0.0));
    let mut modifiers: BTreeMap<String, Modifier> = BTreeMap::new();
    modifiers.insert("aColor".into(), face_shade);
    modifiers.insert("aPositionMorph".into(), morph_target);
    InstanceDescriptor {
        attributes,
        multiplier: points,
        uniforms,
        vertex: "attribute vec3 aPosition;\nattribute vec3 aColor;\nuniform mat4 uViewMatrix;\n"
            .into(),
        fragment: "uniform float uTime;\n".into(),
        mode: DrawMode::Triangles,
        geometry: MorphPair::from_shapes(Shape::Cube, Shape::Sphere, 0.07).unwrap(),
        modifiers,
    }
}

#[test]
fn well_formed_descriptor_validates() {
    descriptor(4).validate().unwrap();
}

#[test]
fn modifier_for_unknown_attribute_is_rejected() {
    let mut d = descriptor(2);
    d.modifiers.insert("aGhost".into(), face_shade);
    let err = d.validate().unwrap_err();
    assert!(err.to_string().contains("aGhost"));
}

#[test]
fn shader_uniform_without_declaration_is_rejected() {
    let mut d = descriptor(2);
    d.fragment.push_str("uniform float uMissing;\n");
    let err = d.validate().unwrap_err();
    assert!(err.to_string().contains("uMissing"));
}

#[test]
fn shader_attribute_without_data_is_rejected() {
    let mut d = descriptor(2);
    d.vertex.push_str("attribute float aWeight;\n");
    assert!(d.validate().is_err());
}

#[test]
fn short_attribute_buffer_is_rejected() {
    let mut d = descriptor(3);
    d.attributes[2].values.pop();
    let err = d.validate().unwrap_err();
    assert!(err.to_string().contains("aOffset"));
}

#[test]
fn expansion_replicates_geometry_and_applies_modifiers() {
    let d = descriptor(2);
    let bufs = d.expand().unwrap();
    assert_eq!(bufs.vertices_per_point, SHAPE_VERTEX_COUNT);
    assert_eq!(bufs.vertex_count, 2 * SHAPE_VERTEX_COUNT);

    let pos = bufs.get(BASE_POSITION_ATTRIBUTE).unwrap();
    assert_eq!(pos.values.len(), bufs.vertex_count * 3);
    assert_eq!(pos.values[..3], pos.values[SHAPE_VERTEX_COUNT * 3..SHAPE_VERTEX_COUNT * 3 + 3]);

    let color = bufs.get("aColor").unwrap();
    // point 1, vertex 0: unshaded
    assert_eq!(color.values[SHAPE_VERTEX_COUNT * 3], 1.0);
    // point 0, vertex 24 (third band): two shade steps
    assert!((color.values[24 * 3 + 1] - 0.46).abs() < 1e-6);

    let morph = bufs.get("aPositionMorph").unwrap();
    let target = d.geometry.target()[5];
    assert_eq!(morph.values[5 * 3..5 * 3 + 3], target.to_array());

    let offset = bufs.get("aOffset").unwrap();
    assert_eq!(offset.values.len(), bufs.vertex_count);
    assert!(offset.values[SHAPE_VERTEX_COUNT..].iter().all(|v| (*v - 0.1).abs() < 1e-7));
}

#[test]
fn draw_mode_codes_match_webgl() {
    assert_eq!(DrawMode::Points.gl_code(), 0);
    assert_eq!(DrawMode::Lines.gl_code(), 1);
    assert_eq!(DrawMode::Triangles.gl_code(), 4);
}
