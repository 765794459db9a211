use crate::foundation::{
    core::Point3,
    error::{FieldError, FieldResult},
};

/// Number of vertices every base shape emits (12 triangles, not indexed).
pub const SHAPE_VERTEX_COUNT: usize = 36;

/// Base shapes that can be drawn per point or used as a morph target.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Shape {
    /// Axis-aligned cube.
    #[default]
    Cube,
    /// Cube vertices pushed out onto a sphere.
    Sphere,
    /// Octahedron padded with center points.
    Diamond,
}

impl Shape {
    /// Generate the vertex list for this shape at `size`.
    pub fn vertices(self, size: f32) -> Vec<Point3> {
        match self {
            Self::Cube => cube(size),
            Self::Sphere => sphere(size),
            Self::Diamond => diamond(size),
        }
    }
}

/// 36 explicit cube vertices, two triangles per face.
///
/// Winding is not consistent across faces; shading downstream is luminance-based.
pub fn cube(size: f32) -> Vec<Point3> {
    let s = size;
    let p = Point3::new;
    vec![
        // +x
        p(s, s, s),
        p(s, -s, s),
        p(s, s, -s),
        p(s, -s, s),
        p(s, -s, -s),
        p(s, s, -s),
        // -x
        p(-s, s, -s),
        p(-s, -s, -s),
        p(-s, s, s),
        p(-s, -s, -s),
        p(-s, -s, s),
        p(-s, s, s),
        // +y
        p(-s, s, -s),
        p(-s, s, s),
        p(s, s, -s),
        p(-s, s, s),
        p(s, s, s),
        p(s, s, -s),
        // -y
        p(-s, -s, s),
        p(-s, -s, -s),
        p(s, -s, s),
        p(-s, -s, -s),
        p(s, -s, -s),
        p(s, -s, s),
        // +z
        p(-s, s, s),
        p(-s, -s, s),
        p(s, s, s),
        p(-s, -s, s),
        p(s, -s, s),
        p(s, s, s),
        // -z
        p(s, s, -s),
        p(s, -s, -s),
        p(-s, s, -s),
        p(s, -s, -s),
        p(-s, -s, -s),
        p(-s, s, -s),
    ]
}

/// Cube vertices normalized onto a sphere of radius `size`.
///
/// Index `i` here is the same corner as index `i` of [`cube`].
pub fn sphere(size: f32) -> Vec<Point3> {
    cube(size).into_iter().map(|v| v.with_length(size)).collect()
}

/// Octahedron (8 faces, 24 vertices) padded with 12 center points to 36 vertices.
pub fn diamond(size: f32) -> Vec<Point3> {
    let s = size * 1.2;
    let top = Point3::new(0.0, s, 0.0);
    let bottom = Point3::new(0.0, -s, 0.0);
    let px = Point3::new(s, 0.0, 0.0);
    let nx = Point3::new(-s, 0.0, 0.0);
    let pz = Point3::new(0.0, 0.0, s);
    let nz = Point3::new(0.0, 0.0, -s);

    let mut out = vec![
        top, px, pz, //
        top, pz, nx, //
        top, nx, nz, //
        top, nz, px, //
        bottom, pz, px, //
        bottom, nx, pz, //
        bottom, nz, nx, //
        bottom, px, nz,
    ];
    out.resize(SHAPE_VERTEX_COUNT, Point3::ORIGIN);
    out
}

/// A base shape and the morph target it blends into, index for index.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct MorphPair {
    #[serde(rename = "vertices")]
    base: Vec<Point3>,
    #[serde(rename = "morph_vertices")]
    target: Vec<Point3>,
}

impl MorphPair {
    /// Pair two vertex lists. They must have the same length.
    pub fn new(base: Vec<Point3>, target: Vec<Point3>) -> FieldResult<Self> {
        if base.is_empty() {
            return Err(FieldError::validation("morph base shape has no vertices"));
        }
        if base.len() != target.len() {
            return Err(FieldError::validation(format!(
                "morph shapes must have equal vertex counts (base {}, target {})",
                base.len(),
                target.len()
            )));
        }
        Ok(Self { base, target })
    }

    /// Generate and pair two shapes at the same size.
    pub fn from_shapes(base: Shape, target: Shape, size: f32) -> FieldResult<Self> {
        Self::new(base.vertices(size), target.vertices(size))
    }

    /// Vertices drawn at rest.
    pub fn base(&self) -> &[Point3] {
        &self.base
    }

    /// Vertices the base morphs toward.
    pub fn target(&self) -> &[Point3] {
        &self.target
    }

    /// Morph target for vertex `k`, wrapping past the end.
    pub fn target_at(&self, k: usize) -> Point3 {
        self.target[k % self.target.len()]
    }
}

#[cfg(test)]
#[path = "../../tests/unit/geometry/shapes.rs"]
mod tests;
