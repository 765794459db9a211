use crate::geometry::shapes::MorphPair;

/// Luminance removed per face band in the color modifier.
pub const FACE_SHADE_STEP: f32 = -0.02;

/// Geometry visible to modifiers.
#[derive(Clone, Copy, Debug)]
pub struct ModifierContext<'a> {
    /// Base shape and morph target.
    pub shapes: &'a MorphPair,
}

/// Post-process of one component of one expanded vertex.
///
/// Arguments are the point's raw attribute value, the base vertex index, the component index
/// and the geometry context. Modifiers are plain functions and cannot hold state.
pub type Modifier =
    fn(raw: &[f32], vertex: usize, component: usize, ctx: &ModifierContext<'_>) -> f32;

/// Darken each third of the base vertices by one more shade step.
pub fn face_shade(raw: &[f32], vertex: usize, component: usize, ctx: &ModifierContext<'_>) -> f32 {
    let band = ctx.shapes.base().len() as f32 / 3.0;
    let face = (vertex as f32 / band).floor();
    raw[component] + face * FACE_SHADE_STEP
}

/// Morph-target coordinate for the base vertex, wrapping into the target list.
pub fn morph_target(
    _raw: &[f32],
    vertex: usize,
    component: usize,
    ctx: &ModifierContext<'_>,
) -> f32 {
    ctx.shapes.target_at(vertex).component(component)
}

#[cfg(test)]
#[path = "../../tests/unit/pipeline/modifiers.rs"]
mod tests;
