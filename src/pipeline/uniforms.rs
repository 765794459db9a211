use std::collections::BTreeMap;

use crate::foundation::error::{FieldError, FieldResult};

/// Path progress along each point's Bezier curve.
pub const U_PROGRESS: &str = "uProgress";
/// Base/target shape blend.
pub const U_MORPH: &str = "uMorph";
/// Rotation angle fed to the shader's rotation matrices.
pub const U_ROTATION: &str = "uRotation";
/// Three-channel color oscillation.
pub const U_COLOR_SHIFT: &str = "uColorShift";
/// Letter-cycle transition scalar.
pub const U_LETTER_TRANSITION: &str = "uLetterTransition";
/// Elapsed shader time.
pub const U_TIME: &str = "uTime";

/// A uniform's type and current value.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "lowercase")]
pub enum UniformValue {
    /// `float`
    Float(f32),
    /// `vec3`
    Vec3([f32; 3]),
}

impl UniformValue {
    /// GLSL type name.
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Float(_) => "float",
            Self::Vec3(_) => "vec3",
        }
    }
}

/// Named uniforms of one instance.
///
/// Setters refuse names that were never declared or whose type differs: writing to a uniform
/// the descriptor does not carry is a contract violation.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct UniformMap(BTreeMap<String, UniformValue>);

impl UniformMap {
    /// Empty map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare (or redeclare) a uniform with its initial value.
    pub fn declare(&mut self, name: impl Into<String>, value: UniformValue) {
        self.0.insert(name.into(), value);
    }

    /// Current value of `name`.
    pub fn get(&self, name: &str) -> Option<UniformValue> {
        self.0.get(name).copied()
    }

    /// Whether `name` is declared.
    pub fn contains(&self, name: &str) -> bool {
        self.0.contains_key(name)
    }

    /// Read a declared `float`.
    pub fn float(&self, name: &str) -> FieldResult<f32> {
        match self.get(name) {
            Some(UniformValue::Float(v)) => Ok(v),
            Some(other) => Err(type_mismatch(name, "float", other)),
            None => Err(missing(name)),
        }
    }

    /// Read a declared `vec3`.
    pub fn vec3(&self, name: &str) -> FieldResult<[f32; 3]> {
        match self.get(name) {
            Some(UniformValue::Vec3(v)) => Ok(v),
            Some(other) => Err(type_mismatch(name, "vec3", other)),
            None => Err(missing(name)),
        }
    }

    /// Overwrite a declared `float`.
    pub fn set_float(&mut self, name: &str, value: f32) -> FieldResult<()> {
        match self.0.get_mut(name) {
            Some(UniformValue::Float(v)) => {
                *v = value;
                Ok(())
            }
            Some(other) => Err(type_mismatch(name, "float", *other)),
            None => Err(missing(name)),
        }
    }

    /// Overwrite a declared `vec3`.
    pub fn set_vec3(&mut self, name: &str, value: [f32; 3]) -> FieldResult<()> {
        match self.0.get_mut(name) {
            Some(UniformValue::Vec3(v)) => {
                *v = value;
                Ok(())
            }
            Some(other) => Err(type_mismatch(name, "vec3", *other)),
            None => Err(missing(name)),
        }
    }

    /// Iterate in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &UniformValue)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }
}

fn missing(name: &str) -> FieldError {
    FieldError::descriptor(format!("uniform '{name}' is not declared"))
}

fn type_mismatch(name: &str, wanted: &str, found: UniformValue) -> FieldError {
    FieldError::descriptor(format!(
        "uniform '{name}' is {}, not {wanted}",
        found.type_name()
    ))
}

#[cfg(test)]
#[path = "../../tests/unit/pipeline/uniforms.rs"]
mod tests;
