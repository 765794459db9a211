/// Window over which frames are counted before a rate is reported.
pub const FPS_WINDOW_MS: f64 = 1000.0;

/// Frames-per-second counter reporting once per window.
#[derive(Clone, Copy, Debug, Default)]
pub struct FpsMeter {
    frames: u32,
    window_start_ms: Option<f64>,
    last_fps: Option<u32>,
}

impl FpsMeter {
    /// Meter with no frames counted.
    pub fn new() -> Self {
        Self::default()
    }

    /// Count a frame at `now_ms`; returns the rate when a window closes.
    ///
    /// The first call only opens the window.
    pub fn tick(&mut self, now_ms: f64) -> Option<u32> {
        let Some(start) = self.window_start_ms else {
            self.window_start_ms = Some(now_ms);
            return None;
        };
        self.frames += 1;
        let elapsed = now_ms - start;
        if elapsed < FPS_WINDOW_MS {
            return None;
        }
        let fps = (f64::from(self.frames) * 1000.0 / elapsed).round() as u32;
        self.frames = 0;
        self.window_start_ms = Some(now_ms);
        self.last_fps = Some(fps);
        Some(fps)
    }

    /// Most recently reported rate.
    pub fn last(&self) -> Option<u32> {
        self.last_fps
    }
}

#[cfg(test)]
#[path = "../../tests/unit/field/stats.rs"]
mod tests;
