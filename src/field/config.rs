use std::path::Path;

use anyhow::Context as _;

use crate::{
    foundation::error::{FieldError, FieldResult},
    geometry::shapes::Shape,
};

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
/// Tunable parameters of the morphing field.
///
/// Every field has a default, so a JSON file only needs the keys it overrides.
pub struct FieldConfig {
    /// Share of the path-progress range each point spends on its Bezier traversal.
    pub path_duration: f64,
    /// Half-extent of the per-point shape.
    pub cube_size: f32,
    /// Path-progress speed (scaled by 0.8 per frame).
    pub speed: f64,
    /// Morph speed (scaled by 0.7 per frame).
    pub morph_speed: f64,
    /// Milliseconds of pure time drift per letter.
    pub letter_cycle_speed_ms: f64,
    /// Renderer clear color, RGBA.
    pub clear_color: [f32; 4],
    /// Camera position handed to the renderer.
    pub camera_position: [f32; 3],
    /// Base hue, wraps.
    pub hue: f64,
    /// Saturation in `[0, 1]`.
    pub saturation: f64,
    /// Lightness in `[0, 1]`.
    pub lightness: f64,
    /// Hue range spread linearly across points.
    pub hue_spread: f64,
    /// Fixed shader-time increment per frame, independent of frame rate.
    pub time_step: f64,
    /// Seed for control-point jitter.
    pub seed: u64,
    /// Shape drawn at rest.
    pub base_shape: Shape,
    /// Shape the base morphs into.
    pub morph_shape: Shape,
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            path_duration: 0.6,
            cube_size: 0.07,
            speed: 0.003,
            morph_speed: 0.002,
            letter_cycle_speed_ms: 8000.0,
            clear_color: [0.0, 0.0, 0.0, 1.0],
            camera_position: [0.0, 0.0, 2.0],
            hue: 0.55,
            saturation: 0.65,
            lightness: 0.55,
            hue_spread: 0.15,
            time_step: 0.016,
            seed: 0x4C55_504F,
            base_shape: Shape::Cube,
            morph_shape: Shape::Sphere,
        }
    }
}

impl FieldConfig {
    /// Parse a config from JSON text.
    pub fn from_json_str(s: &str) -> FieldResult<Self> {
        let cfg: Self = serde_json::from_str(s).map_err(|e| FieldError::serde(e.to_string()))?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Read and parse a JSON config file.
    pub fn from_path(path: &Path) -> FieldResult<Self> {
        let s = std::fs::read_to_string(path)
            .with_context(|| format!("read config '{}'", path.display()))?;
        Self::from_json_str(&s)
    }

    /// Check the numeric ranges the field relies on.
    pub fn validate(&self) -> FieldResult<()> {
        if !(self.letter_cycle_speed_ms.is_finite() && self.letter_cycle_speed_ms > 0.0) {
            return Err(FieldError::validation("letter_cycle_speed_ms must be > 0"));
        }
        if !(self.path_duration > 0.0 && self.path_duration <= 1.0) {
            return Err(FieldError::validation("path_duration must be in (0, 1]"));
        }
        for (name, v) in [("speed", self.speed), ("morph_speed", self.morph_speed)] {
            if !(v.is_finite() && v >= 0.0) {
                return Err(FieldError::validation(format!("{name} must be >= 0")));
            }
        }
        if !(self.cube_size.is_finite() && self.cube_size > 0.0) {
            return Err(FieldError::validation("cube_size must be > 0"));
        }
        if !(self.time_step.is_finite() && self.time_step > 0.0) {
            return Err(FieldError::validation("time_step must be > 0"));
        }
        for (name, v) in [
            ("hue", self.hue),
            ("saturation", self.saturation),
            ("lightness", self.lightness),
            ("hue_spread", self.hue_spread),
        ] {
            if !v.is_finite() {
                return Err(FieldError::validation(format!("{name} must be finite")));
            }
        }
        Ok(())
    }
}

/// A live edit coming from the UI controls.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "field", content = "value", rename_all = "snake_case")]
pub enum ConfigChange {
    /// Path-progress speed.
    Speed(f64),
    /// Morph speed.
    MorphSpeed(f64),
    /// Base hue.
    Hue(f64),
    /// Saturation.
    Saturation(f64),
    /// Lightness.
    Lightness(f64),
    /// Hue spread across points.
    HueSpread(f64),
    /// Shape drawn at rest.
    BaseShape(Shape),
    /// Morph target shape.
    MorphShape(Shape),
}

impl ConfigChange {
    /// Whether the instance must be rebuilt for this change to show.
    ///
    /// Speeds feed per-frame steps and apply live; everything else is baked into attributes.
    pub fn requires_rebuild(self) -> bool {
        !matches!(self, Self::Speed(_) | Self::MorphSpeed(_))
    }

    /// Write the change into `cfg`, validating the result.
    ///
    /// On error `cfg` is left unchanged.
    pub fn apply_to(self, cfg: &mut FieldConfig) -> FieldResult<()> {
        let mut next = cfg.clone();
        match self {
            Self::Speed(v) => next.speed = v,
            Self::MorphSpeed(v) => next.morph_speed = v,
            Self::Hue(v) => next.hue = v,
            Self::Saturation(v) => next.saturation = v,
            Self::Lightness(v) => next.lightness = v,
            Self::HueSpread(v) => next.hue_spread = v,
            Self::BaseShape(s) => next.base_shape = s,
            Self::MorphShape(s) => next.morph_shape = s,
        }
        next.validate()?;
        *cfg = next;
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/field/config.rs"]
mod tests;
