use crate::{
    cycle::{letter_cycle::LetterCycle, scroll::ScrollSignal},
    field::{
        config::{ConfigChange, FieldConfig},
        driver::AnimationDriver,
    },
    foundation::{
        error::{FieldError, FieldResult},
        math::Rng64,
    },
    geometry::letters::LetterRegistry,
    pipeline::{
        descriptor::InstanceDescriptor, morph::build_morph_descriptor, uniforms::UniformMap,
    },
    render::backend::{Renderer, RendererSettings},
};

/// Name under which the field's single instance lives in the renderer.
pub const INSTANCE_NAME: &str = "morphingShapes";

/// Summary of one tick, as printed by the CLI trace.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct FrameReport {
    /// Tick number, starting at 1.
    pub frame: u64,
    /// Letter shown after the tick.
    pub letter: char,
    /// Letter being blended toward.
    pub next_letter: char,
    /// Blend between the two letters.
    pub transition: f64,
    /// Smoothed scroll fraction.
    pub scroll_progress: f64,
    /// Path progress uniform.
    pub progress: f64,
    /// Morph uniform.
    pub morph: f64,
    /// Rotation uniform.
    pub rotation: f64,
    /// Shader time.
    pub elapsed_time: f64,
    /// A pending rebuild ran at the start of this tick.
    pub rebuilt: bool,
    /// The letter changed during this tick; a rebuild runs on the next one.
    pub rebuild_scheduled: bool,
}

/// The whole animation state, owned in one place and threaded through each tick.
///
/// A field drives exactly one renderer instance named [`INSTANCE_NAME`]. Letter changes and
/// geometry-affecting config edits never touch the live instance directly; they raise a
/// pending flag and the next [`MorphingField::frame`] replaces the instance (remove, then add)
/// before any uniforms are written.
#[derive(Debug)]
pub struct MorphingField {
    config: FieldConfig,
    cycle: LetterCycle,
    driver: AnimationDriver,
    rng: Rng64,
    scroll: ScrollSignal,
    pending_rebuild: bool,
    installed: bool,
    frame: u64,
    rebuilds: u64,
}

impl MorphingField {
    /// Validate `config` and set up a field positioned on the first letter.
    pub fn new(config: FieldConfig) -> FieldResult<Self> {
        config.validate()?;
        let cycle = LetterCycle::new(LetterRegistry::new());
        let driver = AnimationDriver::new(cycle.state().current_index);
        let rng = Rng64::new(config.seed);
        Ok(Self {
            config,
            cycle,
            driver,
            rng,
            scroll: ScrollSignal::new(),
            pending_rebuild: false,
            installed: false,
            frame: 0,
            rebuilds: 0,
        })
    }

    /// Current configuration.
    pub fn config(&self) -> &FieldConfig {
        &self.config
    }

    /// Letter-cycle state machine.
    pub fn cycle(&self) -> &LetterCycle {
        &self.cycle
    }

    /// Animation driver and its uniform state.
    pub fn driver(&self) -> &AnimationDriver {
        &self.driver
    }

    /// Handle for the host's scroll handler. Writes are seen on the next tick.
    pub fn scroll_signal(&self) -> ScrollSignal {
        self.scroll.clone()
    }

    /// Settings to construct the renderer with.
    pub fn renderer_settings(&self) -> RendererSettings {
        RendererSettings {
            clear_color: self.config.clear_color,
            camera_position: self.config.camera_position,
        }
    }

    /// Whether the next tick starts with a rebuild.
    pub fn rebuild_pending(&self) -> bool {
        self.pending_rebuild
    }

    /// Whether an instance has been added and not removed since.
    pub fn is_installed(&self) -> bool {
        self.installed
    }

    /// Ticks run so far.
    pub fn frame_count(&self) -> u64 {
        self.frame
    }

    /// Rebuilds performed since install.
    pub fn rebuild_count(&self) -> u64 {
        self.rebuilds
    }

    /// A fresh descriptor for the current letter blend, drawing new control-point jitter.
    ///
    /// Initial uniform values are the driver's current ones.
    pub fn build_descriptor(&mut self) -> FieldResult<InstanceDescriptor> {
        let uniforms = self.driver.uniforms().declare();
        self.descriptor_with(uniforms)
    }

    fn descriptor_with(&mut self, uniforms: UniformMap) -> FieldResult<InstanceDescriptor> {
        build_morph_descriptor(&self.cycle, &self.config, &mut self.rng, uniforms)
    }

    /// Add the first instance and start its animation clock at `now_ms`.
    pub fn install<R: Renderer + ?Sized>(
        &mut self,
        renderer: &mut R,
        now_ms: f64,
    ) -> FieldResult<()> {
        if self.installed {
            return Err(FieldError::renderer("field is already installed"));
        }
        let driver = AnimationDriver::started_at(self.cycle.state().current_index, now_ms);
        let descriptor = self.descriptor_with(driver.uniforms().declare())?;
        renderer.add(INSTANCE_NAME, descriptor)?;
        self.driver = driver;
        self.installed = true;
        self.pending_rebuild = false;
        tracing::info!(
            letter = %self.cycle.current_letter().glyph(),
            "installed '{INSTANCE_NAME}'"
        );
        Ok(())
    }

    /// Remove the field's instance. Returns whether one was live.
    pub fn uninstall<R: Renderer + ?Sized>(&mut self, renderer: &mut R) -> FieldResult<bool> {
        let removed = renderer.remove(INSTANCE_NAME)?;
        self.installed = false;
        self.pending_rebuild = false;
        Ok(removed)
    }

    /// Replace the live instance right away, restarting the animation at `now_ms`.
    ///
    /// The new instance starts with progress, morph and shader time at zero, so every rebuild
    /// replays the settle motion from the path start. The new descriptor is built before the
    /// old instance is removed, so a build failure leaves the old one (and its driver) in place.
    #[tracing::instrument(skip_all, fields(rebuild = self.rebuilds + 1))]
    pub fn rebuild_now<R: Renderer + ?Sized>(
        &mut self,
        renderer: &mut R,
        now_ms: f64,
    ) -> FieldResult<()> {
        if !self.installed {
            return Err(FieldError::renderer("cannot rebuild before install"));
        }
        let driver = AnimationDriver::started_at(self.cycle.state().current_index, now_ms);
        let descriptor = self.descriptor_with(driver.uniforms().declare())?;
        renderer.remove(INSTANCE_NAME)?;
        renderer.add(INSTANCE_NAME, descriptor)?;
        self.driver = driver;
        self.pending_rebuild = false;
        self.rebuilds += 1;
        tracing::info!(
            letter = %self.cycle.current_letter().glyph(),
            next = %self.cycle.next_letter().glyph(),
            "rebuilt '{INSTANCE_NAME}'"
        );
        Ok(())
    }

    /// Apply a live config edit. Returns whether it scheduled a rebuild.
    pub fn apply(&mut self, change: ConfigChange) -> FieldResult<bool> {
        change.apply_to(&mut self.config)?;
        let rebuild = change.requires_rebuild();
        if rebuild {
            self.pending_rebuild = true;
            tracing::debug!(?change, "rebuild scheduled");
        }
        Ok(rebuild)
    }

    /// Forward a viewport size change.
    pub fn resize<R: Renderer + ?Sized>(
        &mut self,
        renderer: &mut R,
        width: u32,
        height: u32,
    ) -> FieldResult<()> {
        renderer.resize(width, height)
    }

    /// Run one tick at wall time `now_ms`.
    pub fn frame<R: Renderer + ?Sized>(
        &mut self,
        renderer: &mut R,
        now_ms: f64,
    ) -> FieldResult<FrameReport> {
        if !self.installed {
            return Err(FieldError::renderer("field is not installed"));
        }
        let rebuilt = self.pending_rebuild;
        if rebuilt {
            self.rebuild_now(renderer, now_ms)?;
        }

        let scroll = self.scroll.latest();
        let uniforms = renderer.uniforms_mut(INSTANCE_NAME).ok_or_else(|| {
            FieldError::renderer(format!("instance '{INSTANCE_NAME}' is not live"))
        })?;
        let step = self
            .driver
            .on_render(now_ms, scroll, &mut self.cycle, &self.config, uniforms)?;
        if step.letter_changed {
            self.pending_rebuild = true;
            tracing::debug!(
                letter = %self.cycle.current_letter().glyph(),
                "letter changed, rebuild scheduled"
            );
        }
        self.frame += 1;

        let u = self.driver.uniforms();
        let s = self.cycle.state();
        Ok(FrameReport {
            frame: self.frame,
            letter: self.cycle.current_letter().glyph(),
            next_letter: self.cycle.next_letter().glyph(),
            transition: s.transition,
            scroll_progress: s.scroll_progress,
            progress: u.progress,
            morph: u.morph,
            rotation: u.rotation_angle,
            elapsed_time: u.elapsed_time,
            rebuilt,
            rebuild_scheduled: step.letter_changed,
        })
    }
}

#[cfg(test)]
#[path = "../../tests/unit/field/context.rs"]
mod tests;
