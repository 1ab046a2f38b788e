//! Shared control state
//!
//! The single source of truth for global openness. Exactly one writer (the
//! detection loop) publishes whole-value replacements; the render loop reads
//! a snapshot each frame and tolerates a value that is one detection frame
//! stale. Owned and passed explicitly rather than living in a global.

use std::sync::Arc;

use parking_lot::RwLock;

/// The control value flowing from detection to animation.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ControlState {
    /// Smoothed global openness, in [0,1].
    pub openness: f32,
    /// Whether the last processed frame contained a hand.
    pub hand_present: bool,
}

/// Cloneable handle to the control state. Clones share the same underlying
/// value, so the detection and render callbacks can each hold one.
#[derive(Debug, Clone, Default)]
pub struct SharedControl {
    inner: Arc<RwLock<ControlState>>,
}

impl SharedControl {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the control value. Detection-loop only.
    pub fn publish(&self, state: ControlState) {
        *self.inner.write() = state;
    }

    /// Read the current value.
    pub fn snapshot(&self) -> ControlState {
        *self.inner.read()
    }
}
