//! Hand openness estimation
//!
//! Maps one hand's landmark set to a scalar in [0,1]: 0 = closed fist,
//! 1 = fully open. Fingertip distances are normalized by palm size (wrist to
//! middle knuckle) so the metric is invariant to how far the hand is from
//! the camera.

use crate::{HandLandmarks, LandmarkIndex};

/// Palm reference scales below this are degenerate detections; the estimate
/// is 0 rather than a division by (almost) zero.
pub const MIN_PALM_SCALE: f32 = 0.005;

/// Average fingertip/palm ratio of a tight fist - tips rest near the
/// knuckles, so the ratio sits just above 1.
pub const RATIO_CLOSED: f32 = 1.1;

/// Average fingertip/palm ratio of an open hand, reachable without
/// over-stretching.
pub const RATIO_OPEN: f32 = 2.1;

/// Estimate how open a hand is, in [0,1].
pub fn estimate_openness(hand: &HandLandmarks) -> f32 {
    let wrist = hand.point(LandmarkIndex::Wrist);
    let middle_mcp = hand.point(LandmarkIndex::MiddleMcp);

    // Reference scale: palm size in the image plane
    let scale = wrist.distance_2d(&middle_mcp);
    if scale < MIN_PALM_SCALE {
        return 0.0;
    }

    let tips = LandmarkIndex::fingertips();
    let total_ratio: f32 = tips
        .iter()
        .map(|&tip| hand.point(tip).distance_2d(&wrist) / scale)
        .sum();
    let avg_ratio = total_ratio / tips.len() as f32;

    let openness = (avg_ratio - RATIO_CLOSED) / (RATIO_OPEN - RATIO_CLOSED);
    openness.clamp(0.0, 1.0)
}
