//! Temporal smoothing of the raw openness signal
//!
//! The raw per-frame estimate is noisy and disappears entirely when the
//! detector loses the hand. The smoother keeps one persistent scalar and
//! moves it a fixed fraction of the remaining gap per detection frame,
//! with asymmetric rates: losing the hand collapses the signal faster than
//! a present hand moves it, so the tree closes promptly. Values inside the
//! dead zone snap to exactly 0 to kill micro-jitter at rest.

use tinsel_core::math::lerp;

/// Fraction of the remaining gap covered per frame while a hand is present.
pub const ATTACK_RATE: f32 = 0.15;

/// Fraction of the remaining gap covered per frame while no hand is present.
/// Strictly greater than [`ATTACK_RATE`].
pub const DECAY_RATE: f32 = 0.2;

/// Below this the hand-present value snaps to 0.
pub const ATTACK_SNAP: f32 = 0.02;

/// Below this the hand-absent value snaps to 0.
pub const DECAY_SNAP: f32 = 0.01;

/// Persistent openness filter. One instance is the process-wide source of
/// truth for global openness; it starts at 0 and stays within [0,1].
#[derive(Debug, Clone, Default)]
pub struct OpennessSmoother {
    smoothed: f32,
}

impl OpennessSmoother {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current smoothed value.
    #[inline]
    pub fn value(&self) -> f32 {
        self.smoothed
    }

    /// Advance one detection frame. `raw` is the single-frame estimate when
    /// a hand is present, `None` when it is not. Returns the updated value.
    pub fn update(&mut self, raw: Option<f32>) -> f32 {
        match raw {
            Some(raw) => {
                let target = raw.clamp(0.0, 1.0);
                self.smoothed = lerp(self.smoothed, target, ATTACK_RATE);
                if self.smoothed < ATTACK_SNAP {
                    self.smoothed = 0.0;
                }
            }
            None => {
                self.smoothed = lerp(self.smoothed, 0.0, DECAY_RATE);
                if self.smoothed < DECAY_SNAP {
                    self.smoothed = 0.0;
                }
            }
        }
        self.smoothed
    }

    /// Reset to the startup state.
    pub fn reset(&mut self) {
        self.smoothed = 0.0;
    }
}
