use crate::{
    animation::pingpong::PingPong,
    cycle::letter_cycle::LetterCycle,
    field::config::FieldConfig,
    foundation::error::FieldResult,
    pipeline::uniforms::{
        U_COLOR_SHIFT, U_LETTER_TRANSITION, U_MORPH, U_PROGRESS, U_ROTATION, U_TIME, UniformMap,
        UniformValue,
    },
};

/// Per-frame path-progress step as a share of `speed`.
pub const PROGRESS_RATE: f64 = 0.8;
/// Per-frame morph step as a share of `morph_speed`.
pub const MORPH_RATE: f64 = 0.7;
/// Rotation angle per unit of elapsed time.
pub const ROTATION_RATE: f64 = 0.7;

/// Scalar uniform state owned by the driver.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize)]
pub struct AnimationUniforms {
    /// Path progress, ping-pongs in `[0, 1]`.
    pub progress: f64,
    /// Morph blend, ping-pongs in `[0, 1]`.
    pub morph: f64,
    /// Unbounded rotation angle.
    pub rotation_angle: f64,
    /// Three independently phased color oscillators.
    pub color_shift: [f64; 3],
    /// Fixed-step shader time.
    pub elapsed_time: f64,
    /// Mirror of the letter-cycle transition.
    pub letter_transition: f64,
}

impl AnimationUniforms {
    /// Uniform declarations carrying the current values.
    pub fn declare(&self) -> UniformMap {
        let mut m = UniformMap::new();
        m.declare(U_PROGRESS, UniformValue::Float(self.progress as f32));
        m.declare(U_MORPH, UniformValue::Float(self.morph as f32));
        m.declare(U_ROTATION, UniformValue::Float(self.rotation_angle as f32));
        m.declare(U_COLOR_SHIFT, UniformValue::Vec3(self.color_shift_f32()));
        m.declare(
            U_LETTER_TRANSITION,
            UniformValue::Float(self.letter_transition as f32),
        );
        m.declare(U_TIME, UniformValue::Float(self.elapsed_time as f32));
        m
    }

    /// Push the current values into an instance's uniforms.
    pub fn write(&self, m: &mut UniformMap) -> FieldResult<()> {
        m.set_float(U_PROGRESS, self.progress as f32)?;
        m.set_float(U_MORPH, self.morph as f32)?;
        m.set_float(U_ROTATION, self.rotation_angle as f32)?;
        m.set_vec3(U_COLOR_SHIFT, self.color_shift_f32())?;
        m.set_float(U_LETTER_TRANSITION, self.letter_transition as f32)?;
        m.set_float(U_TIME, self.elapsed_time as f32)?;
        Ok(())
    }

    fn color_shift_f32(&self) -> [f32; 3] {
        self.color_shift.map(|c| c as f32)
    }
}

/// Color oscillators at shader time `t`.
pub fn color_shift_at(t: f64) -> [f64; 3] {
    [
        (t * 0.3).sin() * 0.15,
        (t * 0.2).sin() * 0.1,
        (t * 0.4).sin() * 0.15,
    ]
}

/// What one driver step observed.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DriverStep {
    /// Measured wall-clock delta handed to the letter cycle.
    pub delta_ms: f64,
    /// The current letter differs from the one seen on the previous step.
    pub letter_changed: bool,
}

/// Advances uniform state once per frame and watches for letter changes.
#[derive(Clone, Debug)]
pub struct AnimationDriver {
    uniforms: AnimationUniforms,
    progress: PingPong,
    morph: PingPong,
    last_frame_ms: Option<f64>,
    last_letter_index: usize,
}

impl AnimationDriver {
    /// Fresh driver observing `letter_index` as the starting letter.
    pub fn new(letter_index: usize) -> Self {
        Self {
            uniforms: AnimationUniforms::default(),
            progress: PingPong::default(),
            morph: PingPong::default(),
            last_frame_ms: None,
            last_letter_index: letter_index,
        }
    }

    /// Current uniform state.
    pub fn uniforms(&self) -> &AnimationUniforms {
        &self.uniforms
    }

    /// Anchor the wall clock so the first step measures from `now_ms`.
    pub fn start_clock(&mut self, now_ms: f64) {
        self.last_frame_ms = Some(now_ms);
    }

    /// Driver for a freshly installed instance: phase, shader time and ping-pong directions
    /// start from zero, and the clock measures from `now_ms`.
    pub fn started_at(letter_index: usize, now_ms: f64) -> Self {
        let mut next = Self::new(letter_index);
        next.start_clock(now_ms);
        next
    }

    /// Run one frame: advance the letter cycle and every uniform, then write them out.
    ///
    /// `scroll_target` is the latest sampled scroll fraction.
    pub fn on_render(
        &mut self,
        now_ms: f64,
        scroll_target: f64,
        cycle: &mut LetterCycle,
        cfg: &FieldConfig,
        out: &mut UniformMap,
    ) -> FieldResult<DriverStep> {
        let delta_ms = match self.last_frame_ms {
            Some(last) => (now_ms - last).max(0.0),
            None => 0.0,
        };
        self.last_frame_ms = Some(now_ms);

        let u = &mut self.uniforms;
        u.elapsed_time += cfg.time_step;

        cycle.set_target_scroll(scroll_target);
        cycle.ease_scroll();
        cycle.update(delta_ms, cfg.letter_cycle_speed_ms);
        u.letter_transition = cycle.state().transition;

        let index = cycle.state().current_index;
        let letter_changed = index != self.last_letter_index;

        u.progress = self.progress.step(cfg.speed * PROGRESS_RATE);
        u.morph = self.morph.step(cfg.morph_speed * MORPH_RATE);
        u.rotation_angle = u.elapsed_time * ROTATION_RATE;
        u.color_shift = color_shift_at(u.elapsed_time);

        tracing::trace!(
            delta_ms,
            progress = u.progress,
            morph = u.morph,
            transition = u.letter_transition,
            "frame"
        );

        // A failed write leaves the letter unobserved so the next step reports the change.
        self.uniforms.write(out)?;
        self.last_letter_index = index;
        Ok(DriverStep {
            delta_ms,
            letter_changed,
        })
    }
}

#[cfg(test)]
#[path = "../../tests/unit/field/driver.rs"]
mod tests;
