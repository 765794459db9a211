use super::*;
use crate::geometry::shapes::{SHAPE_VERTEX_COUNT, Shape};

fn pair() -> MorphPair {
    MorphPair::from_shapes(Shape::Cube, Shape::Sphere, 0.07).unwrap()
}

#[test]
fn face_shade_steps_every_twelve_vertices() {
    let shapes = pair();
    let ctx = ModifierContext { shapes: &shapes };
    let raw = [0.5, 0.6, 0.7];
    assert_eq!(face_shade(&raw, 0, 0, &ctx), 0.5);
    assert_eq!(face_shade(&raw, 11, 1, &ctx), 0.6);
    assert!((face_shade(&raw, 12, 2, &ctx) - 0.68).abs() < 1e-6);
    assert!((face_shade(&raw, 35, 0, &ctx) - 0.46).abs() < 1e-6);
}

#[test]
fn morph_target_reads_wrapped_sphere_vertex() {
    let shapes = pair();
    let ctx = ModifierContext { shapes: &shapes };
    for k in 0..SHAPE_VERTEX_COUNT * 2 {
        let expected = shapes.target()[k % SHAPE_VERTEX_COUNT];
        for l in 0..3 {
            assert_eq!(morph_target(&[0.0; 3], k, l, &ctx), expected.component(l));
        }
    }
}
