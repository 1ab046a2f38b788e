//! Detector interface
//!
//! The hand-landmark detector is an external perception model invoked as a
//! black box. This module owns its configuration, lifecycle status, and the
//! per-frame input envelope the rest of the pipeline consumes. A malformed
//! detection (wrong point count) is mapped to hand-absent at this boundary -
//! downstream it is indistinguishable from "no hand", never a fatal error.

use tinsel_core::{FrameTime, TinselResult};

use crate::{HandLandmarks, Landmark};

/// Detector tuning, mirrored from the perception model's options.
#[derive(Clone, Debug)]
pub struct DetectorConfig {
    /// At most one hand is tracked.
    pub max_hands: u32,
    /// Minimum confidence for an initial detection.
    pub min_detection_confidence: f32,
    /// Minimum confidence that a hand is still present.
    pub min_presence_confidence: f32,
    /// Minimum confidence for frame-to-frame tracking.
    pub min_tracking_confidence: f32,
    /// Capture width in pixels.
    pub capture_width: u32,
    /// Capture height in pixels.
    pub capture_height: u32,
}

impl Default for DetectorConfig {
    fn default() -> Self {
        DetectorConfig {
            max_hands: 1,
            min_detection_confidence: 0.7,
            min_presence_confidence: 0.7,
            min_tracking_confidence: 0.6,
            capture_width: 320,
            capture_height: 240,
        }
    }
}

/// Detector lifecycle. Initialization failure is terminal: it is reported
/// once and the pipeline degrades to the hand-absent path indefinitely.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DetectorStatus {
    #[default]
    Initializing,
    Ready,
    Failed,
}

impl DetectorStatus {
    #[inline]
    pub fn is_ready(self) -> bool {
        self == DetectorStatus::Ready
    }
}

/// One detection frame: a capture timestamp plus zero or one hand.
#[derive(Debug, Clone)]
pub struct VideoFrame {
    pub timestamp: FrameTime,
    pub hand: Option<HandLandmarks>,
}

impl VideoFrame {
    pub fn new(timestamp: FrameTime, hand: Option<HandLandmarks>) -> Self {
        Self { timestamp, hand }
    }

    /// A frame with no detected hand.
    pub fn absent(timestamp: FrameTime) -> Self {
        Self {
            timestamp,
            hand: None,
        }
    }
}

/// Build a frame from raw detector output. Point sets with the wrong count
/// are treated identically to "no hand present".
pub fn frame_from_detection(timestamp: FrameTime, points: Option<Vec<Landmark>>) -> VideoFrame {
    let hand = points.and_then(|p| HandLandmarks::from_points(p).ok());
    VideoFrame::new(timestamp, hand)
}

/// Anything that can deliver detection frames - real hardware behind a
/// camera, or a scripted simulator in tests. Consumers cannot tell the
/// difference.
pub trait LandmarkSource {
    /// Poll for the next frame. `Ok(None)` means no new frame is available
    /// yet; errors are detector initialization failures.
    fn next_frame(&mut self) -> TinselResult<Option<VideoFrame>>;
}
