//! Tree layout
//!
//! Ornament rest positions sit on a conical spiral: higher indices climb the
//! tree and pull toward the axis. The light cloud uses a denser golden-angle
//! spiral on a slightly wider cone.

use tinsel_core::Vec3;

/// Tree cone height for ornament slots.
pub const TREE_HEIGHT: f32 = 12.0;

/// Tree cone base radius for ornament slots.
pub const TREE_RADIUS: f32 = 3.5;

/// Angular step between consecutive ornament slots, radians.
pub const SLOT_ANGLE_STEP: f32 = 2.4;

/// Rest position to expanded position scale factor.
pub const EXPAND_FACTOR: f32 = 2.0;

/// Expanded position to fly-out position scale factor (non-hero objects
/// above the hero threshold).
pub const FLY_OUT_FACTOR: f32 = 2.5;

/// Light cloud cone base radius.
pub const LIGHT_CONE_RADIUS: f32 = 3.8;

/// Light cloud cone height.
pub const LIGHT_CONE_HEIGHT: f32 = 13.0;

/// Golden angle, degrees.
const GOLDEN_ANGLE_DEG: f32 = 137.5;

/// Rest position (spiral slot) for ornament `index` of `total`.
pub fn spiral_slot(index: usize, total: usize) -> Vec3 {
    let total = total.max(1);
    let ratio = index as f32 / total as f32;
    let y = ratio * TREE_HEIGHT - TREE_HEIGHT / 2.0;
    let r = TREE_RADIUS * (1.0 - ratio);
    let angle = index as f32 * SLOT_ANGLE_STEP;
    Vec3::new(angle.cos() * r, y, angle.sin() * r)
}

/// Expanded position derived from a rest position.
pub fn expanded_slot(rest: Vec3) -> Vec3 {
    rest * EXPAND_FACTOR
}

/// Distribute `count` points on a cone, bottom to top, golden-angle spiral.
pub fn cone_points(count: usize, radius: f32, height: f32) -> Vec<Vec3> {
    let golden = GOLDEN_ANGLE_DEG.to_radians();
    (0..count)
        .map(|i| {
            let ratio = i as f32 / count.max(1) as f32;
            let y = ratio * height - height / 2.0;
            let r = radius * (1.0 - ratio);
            let angle = i as f32 * golden;
            Vec3::new(angle.cos() * r, y, angle.sin() * r)
        })
        .collect()
}
