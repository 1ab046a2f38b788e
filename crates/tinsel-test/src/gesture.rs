//! Scripted gesture sources
//!
//! Synthetic hands are constructed to invert the openness estimator exactly:
//! a hand built for target openness `o` estimates back to `o`. Sources
//! implement [`LandmarkSource`], so consumers cannot tell them from a real
//! detector.

use std::time::Duration;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use tinsel_core::{FrameTime, TinselResult};
use tinsel_vision::{HandLandmarks, Landmark, LandmarkIndex, LandmarkSource, VideoFrame};

/// Camera cadence of the simulated sources, ~30 fps.
pub const FRAME_INTERVAL: Duration = Duration::from_millis(33);

/// Build a hand whose raw openness estimate is exactly `openness` (clamped
/// to [0,1]). Wrist at frame center, palm one tenth of the frame, all five
/// fingertips at the ratio that maps back to the target.
pub fn synthetic_hand(openness: f32) -> HandLandmarks {
    let palm = 0.1;
    let wrist = Landmark::new(0.5, 0.5, 0.0);
    let mut points = vec![wrist; LandmarkIndex::count()];
    points[LandmarkIndex::MiddleMcp as usize] = Landmark::new(0.5, 0.5 - palm, 0.0);

    let ratio = 1.1 + openness.clamp(0.0, 1.0);
    for &tip in LandmarkIndex::fingertips() {
        points[tip as usize] = Landmark::new(0.5 + palm * ratio, 0.5, 0.0);
    }
    HandLandmarks::from_points(points).expect("21 points by construction")
}

/// A pre-scripted sequence of detection frames. Each entry is the raw
/// openness of a present hand, or `None` for a no-hand frame.
pub struct ScriptedGesture {
    frames: Vec<Option<f32>>,
    cursor: usize,
    timestamp: FrameTime,
    noise: Option<(StdRng, f32)>,
}

impl ScriptedGesture {
    pub fn new() -> Self {
        Self {
            frames: Vec::new(),
            cursor: 0,
            timestamp: FrameTime::ZERO,
            noise: None,
        }
    }

    /// Hold a present hand at `openness` for `count` frames.
    pub fn hold(mut self, openness: f32, count: usize) -> Self {
        self.frames.extend(std::iter::repeat(Some(openness)).take(count));
        self
    }

    /// No hand for `count` frames.
    pub fn absent(mut self, count: usize) -> Self {
        self.frames.extend(std::iter::repeat(None).take(count));
        self
    }

    /// Add seeded uniform noise of the given amplitude to every present
    /// frame, approximating detector jitter.
    pub fn with_noise(mut self, amplitude: f32, seed: u64) -> Self {
        self.noise = Some((StdRng::seed_from_u64(seed), amplitude));
        self
    }

    /// Frames remaining in the script.
    pub fn remaining(&self) -> usize {
        self.frames.len().saturating_sub(self.cursor)
    }
}

impl Default for ScriptedGesture {
    fn default() -> Self {
        Self::new()
    }
}

impl LandmarkSource for ScriptedGesture {
    fn next_frame(&mut self) -> TinselResult<Option<VideoFrame>> {
        let Some(&entry) = self.frames.get(self.cursor) else {
            return Ok(None);
        };
        self.cursor += 1;
        self.timestamp = self.timestamp + FRAME_INTERVAL;

        let hand = entry.map(|openness| {
            let openness = match &mut self.noise {
                Some((rng, amplitude)) => {
                    (openness + rng.gen_range(-*amplitude..=*amplitude)).clamp(0.0, 1.0)
                }
                None => openness,
            };
            synthetic_hand(openness)
        });

        Ok(Some(VideoFrame::new(self.timestamp, hand)))
    }
}
