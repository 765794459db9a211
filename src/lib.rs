//! Letterfield is a procedural point field that morphs through letterforms.
//!
//! Forty small shapes fly along randomized Bezier paths toward the points of a letter, while
//! each shape morphs between a base and a target geometry. The field cycles through the
//! letters `L`, `U`, `P`, `O`, driven by wall-clock time or, once the page scrolls, by the
//! scroll position.
//!
//! # Pipeline overview
//!
//! 1. **Cycle**: [`LetterCycle`] advances the current/next letter pair and the blend between them
//! 2. **Build**: [`build_morph_descriptor`] samples per-point attributes into an
//!    [`InstanceDescriptor`] (positions, control points, colors, offsets, shaders, uniforms)
//! 3. **Render**: a [`Renderer`] installs the descriptor and expands it per vertex
//! 4. **Drive**: [`AnimationDriver`] writes uniforms once per frame; a letter change schedules
//!    a full rebuild on the next frame
//!
//! [`MorphingField`] owns all of the above and is the entry point for hosts.
//!
//! Design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **No incremental patching**: descriptors are rebuilt from scratch and never edited in place.
//! - **Remove before add**: only one instance named [`INSTANCE_NAME`] is live at a time.
//! - **Deterministic for a seed**: control-point jitter comes from a seeded [`Rng64`].
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod animation;
mod color;
mod cycle;
mod field;
mod foundation;
mod geometry;
mod pipeline;
mod render;

pub use animation::ease::{Ease, smoothstep};
pub use animation::pingpong::PingPong;
pub use color::hsl::{ColorPreview, Rgb, hsl_to_rgb, hue_name, wrap_hue};
pub use cycle::letter_cycle::{
    LetterCycle, LetterCycleState, SCROLL_EASE, SCROLL_INFLUENCE_GAIN, TIME_DRIFT_THRESHOLD,
    TRANSITION_EASE,
};
pub use cycle::scroll::{ScrollSignal, scroll_fraction};
pub use field::config::{ConfigChange, FieldConfig};
pub use field::context::{FrameReport, INSTANCE_NAME, MorphingField};
pub use field::driver::{
    AnimationDriver, AnimationUniforms, DriverStep, MORPH_RATE, PROGRESS_RATE, ROTATION_RATE,
    color_shift_at,
};
pub use field::stats::{FPS_WINDOW_MS, FpsMeter};
pub use foundation::core::{Lerp, Point3};
pub use foundation::error::{FieldError, FieldResult};
pub use foundation::math::Rng64;
pub use geometry::letters::{
    LETTER_DEPTH, LETTER_SPACING, Letter, LetterRegistry, letter_l, letter_o, letter_p,
    letter_position, letter_u,
};
pub use geometry::shapes::{MorphPair, SHAPE_VERTEX_COUNT, Shape, cube, diamond, sphere};
pub use pipeline::attributes::{AttributeData, AttributeSpec, PointFn, sample_attributes};
pub use pipeline::descriptor::{
    BASE_POSITION_ATTRIBUTE, DrawMode, ExpandedAttribute, ExpandedBuffers, InstanceDescriptor,
};
pub use pipeline::modifiers::{
    FACE_SHADE_STEP, Modifier, ModifierContext, face_shade, morph_target,
};
pub use pipeline::morph::{
    CONTROL_JITTER_XZ, CONTROL_JITTER_Y, SETTLE_OFFSET, build_morph_descriptor, names,
    stagger_offset,
};
pub use pipeline::shaders::{
    FRAGMENT_SOURCE, RENDERER_UNIFORMS, ShaderInput, declared_inputs, vertex_source,
};
pub use pipeline::uniforms::{
    U_COLOR_SHIFT, U_LETTER_TRANSITION, U_MORPH, U_PROGRESS, U_ROTATION, U_TIME, UniformMap,
    UniformValue,
};
pub use render::backend::{Renderer, RendererSettings};
pub use render::recording::{LiveInstance, RecordingRenderer, RenderEvent};
