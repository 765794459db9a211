/// A scalar that bounces between 0 and 1.
///
/// The direction flips after a step lands on or past a bound, so the value can overshoot a
/// bound by at most one step before heading back.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct PingPong {
    /// Current value.
    pub value: f64,
    /// `true` while the value is increasing.
    pub forward: bool,
}

impl Default for PingPong {
    fn default() -> Self {
        Self {
            value: 0.0,
            forward: true,
        }
    }
}

impl PingPong {
    /// Start at `value`, moving forward.
    pub fn new(value: f64) -> Self {
        Self {
            value,
            forward: true,
        }
    }

    /// Advance by `step` in the current direction and return the new value.
    pub fn step(&mut self, step: f64) -> f64 {
        self.value += if self.forward { step } else { -step };
        if self.value >= 1.0 {
            self.forward = false;
        }
        if self.value <= 0.0 {
            self.forward = true;
        }
        self.value
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/pingpong.rs"]
mod tests;
