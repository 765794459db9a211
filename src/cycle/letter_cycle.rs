use crate::{
    animation::ease::Ease,
    foundation::core::{Lerp, Point3},
    geometry::letters::{Letter, LetterRegistry, letter_position},
};

/// Share of the remaining distance `scroll_progress` covers toward its target each frame.
pub const SCROLL_EASE: f64 = 0.05;
/// Share of the remaining distance `transition` covers toward the scroll target each frame.
pub const TRANSITION_EASE: f64 = 0.1;
/// Below this scroll influence the cycle drifts on time alone.
pub const TIME_DRIFT_THRESHOLD: f64 = 0.1;
/// Scroll influence reaches 1 after this reciprocal of the scroll range (a quarter).
pub const SCROLL_INFLUENCE_GAIN: f64 = 4.0;

/// Letter-cycle state, advanced once per frame.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct LetterCycleState {
    /// Active letter position in [`Letter::ORDER`].
    pub current_index: usize,
    /// Always `(current_index + 1) % 4`.
    pub next_index: usize,
    /// Blend from the current toward the next letter, in `[0, 1]`.
    pub transition: f64,
    /// Smoothed scroll fraction.
    pub scroll_progress: f64,
    /// Latest raw scroll fraction from the host.
    pub target_scroll_progress: f64,
}

impl Default for LetterCycleState {
    fn default() -> Self {
        Self {
            current_index: 0,
            next_index: 1,
            transition: 0.0,
            scroll_progress: 0.0,
            target_scroll_progress: 0.0,
        }
    }
}

/// Blends a time clock and a scroll signal into the active letter and its transition.
#[derive(Clone, Debug, Default)]
pub struct LetterCycle {
    registry: LetterRegistry,
    state: LetterCycleState,
}

impl LetterCycle {
    /// Start on the first letter with no transition.
    pub fn new(registry: LetterRegistry) -> Self {
        Self {
            registry,
            state: LetterCycleState::default(),
        }
    }

    /// Current state snapshot.
    pub fn state(&self) -> &LetterCycleState {
        &self.state
    }

    /// Layout registry backing the cycle.
    pub fn registry(&self) -> &LetterRegistry {
        &self.registry
    }

    /// Letter currently displayed.
    pub fn current_letter(&self) -> Letter {
        Letter::from_index(self.state.current_index)
    }

    /// Letter being blended toward.
    pub fn next_letter(&self) -> Letter {
        Letter::from_index(self.state.next_index)
    }

    /// Layout of the current letter.
    pub fn current_layout(&self) -> &[Point3] {
        self.registry.layout_at(self.state.current_index)
    }

    /// Layout of the next letter.
    pub fn next_layout(&self) -> &[Point3] {
        self.registry.layout_at(self.state.next_index)
    }

    /// Set the raw scroll fraction the smoothed value chases.
    pub fn set_target_scroll(&mut self, target: f64) {
        self.state.target_scroll_progress = if target.is_finite() {
            target.clamp(0.0, 1.0)
        } else {
            0.0
        };
    }

    /// Low-pass `scroll_progress` toward the target.
    pub fn ease_scroll(&mut self) {
        let s = &mut self.state;
        s.scroll_progress =
            <f64 as Lerp>::lerp(&s.scroll_progress, &s.target_scroll_progress, SCROLL_EASE);
    }

    /// Advance by `delta_ms` of wall time.
    ///
    /// Returns `true` when the current letter changed during this call.
    pub fn update(&mut self, delta_ms: f64, cycle_speed_ms: f64) -> bool {
        let before = self.state.current_index;
        let scroll = self.state.scroll_progress;
        let influence = (scroll * SCROLL_INFLUENCE_GAIN).min(1.0);

        if influence < TIME_DRIFT_THRESHOLD {
            self.state.transition += delta_ms.max(0.0) / cycle_speed_ms;
        } else {
            let letter_progress = scroll * Letter::COUNT as f64;
            let target_index = (letter_progress.floor() as usize) % Letter::COUNT;
            let target_transition = letter_progress.rem_euclid(1.0);

            if target_index != self.state.current_index {
                self.jump_to(target_index);
            }
            self.state.transition =
                <f64 as Lerp>::lerp(&self.state.transition, &target_transition, TRANSITION_EASE);
        }

        if self.state.transition >= 1.0 {
            self.state.transition = 0.0;
            self.jump_to(self.state.next_index);
        }

        self.state.current_index != before
    }

    fn jump_to(&mut self, index: usize) {
        let index = index % Letter::COUNT;
        tracing::debug!(
            from = %self.current_letter().glyph(),
            to = %Letter::from_index(index).glyph(),
            "letter switch"
        );
        self.state.current_index = index;
        self.state.next_index = (index + 1) % Letter::COUNT;
    }

    /// Blended position of logical point `index` for the current frame.
    ///
    /// Indices past a layout's end blend from or toward the origin.
    pub fn position(&self, index: usize) -> Point3 {
        let a = letter_position(index, self.current_layout());
        let b = letter_position(index, self.next_layout());
        Point3::lerp(&a, &b, Ease::Smoothstep.apply(self.state.transition))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/cycle/letter_cycle.rs"]
mod tests;
