use std::collections::BTreeMap;

use crate::{
    foundation::error::{FieldError, FieldResult},
    geometry::shapes::MorphPair,
    pipeline::{
        attributes::AttributeData,
        modifiers::{Modifier, ModifierContext},
        shaders::{RENDERER_UNIFORMS, ShaderInput, declared_inputs},
        uniforms::UniformMap,
    },
};

/// Name of the base-geometry attribute the renderer derives from `geometry`.
pub const BASE_POSITION_ATTRIBUTE: &str = "aPosition";

/// Primitive assembly mode.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DrawMode {
    /// `GL_POINTS`
    Points,
    /// `GL_LINES`
    Lines,
    /// `GL_TRIANGLES`
    #[default]
    Triangles,
}

impl DrawMode {
    /// WebGL enum value.
    pub fn gl_code(self) -> u32 {
        match self {
            Self::Points => 0,
            Self::Lines => 1,
            Self::Triangles => 4,
        }
    }
}

/// Everything a renderer needs to upload and draw one batch.
///
/// Built fresh on every rebuild and never patched in place.
#[derive(Clone, serde::Serialize)]
pub struct InstanceDescriptor {
    /// Per-point attribute values, one entry per logical point.
    pub attributes: Vec<AttributeData>,
    /// Logical point count; every attribute holds this many points.
    pub multiplier: usize,
    /// Uniform declarations with their initial values.
    pub uniforms: UniformMap,
    /// Vertex shader source.
    pub vertex: String,
    /// Fragment shader source.
    pub fragment: String,
    /// Primitive mode.
    pub mode: DrawMode,
    /// Base shape replicated per point, plus its morph target.
    pub geometry: MorphPair,
    /// Per-attribute post-processing, keyed by attribute name.
    #[serde(skip)]
    pub modifiers: BTreeMap<String, Modifier>,
}

impl std::fmt::Debug for InstanceDescriptor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InstanceDescriptor")
            .field("attributes", &self.attributes.len())
            .field("multiplier", &self.multiplier)
            .field("uniforms", &self.uniforms)
            .field("mode", &self.mode)
            .field("vertices", &self.geometry.base().len())
            .field("modifiers", &self.modifiers.keys().collect::<Vec<_>>())
            .finish()
    }
}

/// One attribute after per-vertex expansion.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct ExpandedAttribute {
    /// Attribute name.
    pub name: String,
    /// Components per vertex.
    pub size: usize,
    /// `multiplier * vertex_count * size` floats, point-major then vertex then component.
    pub values: Vec<f32>,
}

/// GPU-ready buffers for a descriptor.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct ExpandedBuffers {
    /// Vertices per logical point.
    pub vertices_per_point: usize,
    /// Total vertices drawn.
    pub vertex_count: usize,
    /// Base positions first, then declared attributes in order.
    pub attributes: Vec<ExpandedAttribute>,
}

impl ExpandedBuffers {
    /// Look up an expanded attribute by name.
    pub fn get(&self, name: &str) -> Option<&ExpandedAttribute> {
        self.attributes.iter().find(|a| a.name == name)
    }
}

impl InstanceDescriptor {
    /// Look up sampled attribute data by name.
    pub fn attribute(&self, name: &str) -> Option<&AttributeData> {
        self.attributes.iter().find(|a| a.name == name)
    }

    /// Check the attribute/uniform contract.
    ///
    /// Fails when an attribute holds the wrong number of values, a modifier targets an
    /// undeclared attribute, or a shader reads an input the descriptor does not provide.
    pub fn validate(&self) -> FieldResult<()> {
        if self.multiplier == 0 {
            return Err(FieldError::descriptor("multiplier must be > 0"));
        }
        if self.geometry.base().is_empty() {
            return Err(FieldError::descriptor("geometry has no vertices"));
        }

        let mut seen = std::collections::BTreeSet::new();
        for attr in &self.attributes {
            if attr.name == BASE_POSITION_ATTRIBUTE {
                return Err(FieldError::descriptor(format!(
                    "attribute '{BASE_POSITION_ATTRIBUTE}' is reserved for base geometry"
                )));
            }
            if !seen.insert(attr.name.as_str()) {
                return Err(FieldError::descriptor(format!(
                    "attribute '{}' is declared twice",
                    attr.name
                )));
            }
            if attr.size == 0 || attr.values.len() != self.multiplier * attr.size {
                return Err(FieldError::descriptor(format!(
                    "attribute '{}' holds {} values, expected {} x {}",
                    attr.name,
                    attr.values.len(),
                    self.multiplier,
                    attr.size
                )));
            }
        }

        for name in self.modifiers.keys() {
            if !seen.contains(name.as_str()) {
                return Err(FieldError::descriptor(format!(
                    "modifier targets undeclared attribute '{name}'"
                )));
            }
        }

        for src in [&self.vertex, &self.fragment] {
            for input in declared_inputs(src) {
                match input {
                    ShaderInput::Attribute(name) => {
                        if name != BASE_POSITION_ATTRIBUTE && !seen.contains(name.as_str()) {
                            return Err(FieldError::descriptor(format!(
                                "shader reads attribute '{name}' which is not provided"
                            )));
                        }
                    }
                    ShaderInput::Uniform(name) => {
                        if !RENDERER_UNIFORMS.contains(&name.as_str())
                            && !self.uniforms.contains(&name)
                        {
                            return Err(FieldError::descriptor(format!(
                                "shader reads uniform '{name}' which is not declared"
                            )));
                        }
                    }
                }
            }
        }
        Ok(())
    }

    /// Expand per-point attributes to per-vertex buffers, applying modifiers.
    ///
    /// This is the work a GPU backend performs at upload time.
    pub fn expand(&self) -> FieldResult<ExpandedBuffers> {
        self.validate()?;
        let base = self.geometry.base();
        let per_point = base.len();
        let vertex_count = self.multiplier * per_point;
        let ctx = ModifierContext {
            shapes: &self.geometry,
        };

        let mut attributes = Vec::with_capacity(self.attributes.len() + 1);

        let mut positions = Vec::with_capacity(vertex_count * 3);
        for _ in 0..self.multiplier {
            for v in base {
                positions.extend_from_slice(&v.to_array());
            }
        }
        attributes.push(ExpandedAttribute {
            name: BASE_POSITION_ATTRIBUTE.to_string(),
            size: 3,
            values: positions,
        });

        for attr in &self.attributes {
            let modifier = self.modifiers.get(&attr.name).copied();
            let mut values = Vec::with_capacity(vertex_count * attr.size);
            for i in 0..self.multiplier {
                let raw = attr.point(i);
                for k in 0..per_point {
                    for l in 0..attr.size {
                        values.push(match modifier {
                            Some(m) => m(raw, k, l, &ctx),
                            None => raw[l],
                        });
                    }
                }
            }
            attributes.push(ExpandedAttribute {
                name: attr.name.clone(),
                size: attr.size,
                values,
            });
        }

        Ok(ExpandedBuffers {
            vertices_per_point: per_point,
            vertex_count,
            attributes,
        })
    }
}

#[cfg(test)]
#[path = "../../tests/unit/pipeline/descriptor.rs"]
mod tests;
