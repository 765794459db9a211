use std::sync::{
    Arc,
    atomic::{AtomicU64, Ordering},
};

/// Single-slot, last-value-wins scroll sample.
///
/// The host's scroll handler writes whenever it fires; the field reads the latest value once
/// per frame. Clones share the same slot.
#[derive(Clone, Debug, Default)]
pub struct ScrollSignal {
    bits: Arc<AtomicU64>,
}

impl ScrollSignal {
    /// New signal holding `0.0`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a scroll fraction, clamped into `[0, 1]`. Non-finite input stores `0.0`.
    pub fn set(&self, progress: f64) {
        let v = if progress.is_finite() {
            progress.clamp(0.0, 1.0)
        } else {
            0.0
        };
        self.bits.store(v.to_bits(), Ordering::Relaxed);
    }

    /// Store the fraction for a scroll offset against the scrollable document range.
    pub fn record(&self, scroll_y: f64, document_height: f64, viewport_height: f64) {
        self.set(scroll_fraction(scroll_y, document_height, viewport_height));
    }

    /// Latest stored fraction.
    pub fn latest(&self) -> f64 {
        f64::from_bits(self.bits.load(Ordering::Relaxed))
    }
}

/// Fraction of the scrollable range covered, in `[0, 1]`.
///
/// The scrollable range is floored at one pixel so short documents do not divide by zero.
pub fn scroll_fraction(scroll_y: f64, document_height: f64, viewport_height: f64) -> f64 {
    let range = (document_height - viewport_height).max(1.0);
    (scroll_y / range).clamp(0.0, 1.0)
}

#[cfg(test)]
#[path = "../../tests/unit/cycle/scroll.rs"]
mod tests;
