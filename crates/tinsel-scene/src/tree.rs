//! Tree group pose and spin
//!
//! Ornaments live in the local space of a rotating group. The group spins
//! fast while the hand is closed, slows as it opens, and stops entirely near
//! full openness so the hero photo can be viewed. The group's pose is what
//! the hero transition uses to convert camera-space targets into ornament
//! parent space.

use tinsel_core::{lerp, Quat, Vec3};

/// World position of the tree group.
pub const TREE_ORIGIN: Vec3 = Vec3 {
    x: 0.0,
    y: -2.0,
    z: 0.0,
};

/// Spin speed at openness 0, radians per second.
pub const SPIN_CLOSED: f32 = 1.2;

/// Spin speed approached as openness nears the stop band.
pub const SPIN_OPEN: f32 = 0.1;

/// Openness at and above which the tree stops completely.
pub const SPIN_STOP_AT: f32 = 0.9;

/// Yaw speed for a given shared openness.
pub fn spin_speed(openness: f32) -> f32 {
    if openness < SPIN_STOP_AT {
        lerp(SPIN_CLOSED, SPIN_OPEN, openness / SPIN_STOP_AT)
    } else {
        0.0
    }
}

/// Pose of the ornament parent group: fixed origin plus accumulated yaw.
#[derive(Debug, Clone, Copy)]
pub struct TreePose {
    pub position: Vec3,
    pub rotation: Quat,
}

impl TreePose {
    pub fn new(position: Vec3, rotation: Quat) -> Self {
        Self { position, rotation }
    }

    /// Convert a world-space point into this group's local space.
    pub fn world_to_local_point(&self, world: Vec3) -> Vec3 {
        self.rotation.conjugate().rotate(world - self.position)
    }

    /// Convert a local-space point into world space.
    pub fn local_to_world_point(&self, local: Vec3) -> Vec3 {
        self.rotation.rotate(local) + self.position
    }

    /// Express a world-space orientation in this group's local frame.
    pub fn world_to_local_rotation(&self, world: &Quat) -> Quat {
        self.rotation.conjugate().mul(world)
    }
}

impl Default for TreePose {
    fn default() -> Self {
        Self {
            position: TREE_ORIGIN,
            rotation: Quat::IDENTITY,
        }
    }
}

/// Accumulated rotation of the tree group.
#[derive(Debug, Clone, Default)]
pub struct TreeMotion {
    yaw: f32,
}

impl TreeMotion {
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance one rendered frame.
    pub fn advance(&mut self, openness: f32, dt: f32) {
        self.yaw += spin_speed(openness) * dt;
    }

    #[inline]
    pub fn yaw(&self) -> f32 {
        self.yaw
    }

    /// Current parent pose for ornament updates.
    pub fn pose(&self) -> TreePose {
        TreePose::new(TREE_ORIGIN, Quat::from_yaw(self.yaw))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spin_speed_bands() {
        assert!((spin_speed(0.0) - SPIN_CLOSED).abs() < 1e-6);
        assert_eq!(spin_speed(0.9), 0.0);
        assert_eq!(spin_speed(1.0), 0.0);

        // Monotone decreasing below the stop band
        let mut prev = spin_speed(0.0);
        for i in 1..=8 {
            let speed = spin_speed(i as f32 * 0.1);
            assert!(speed < prev);
            prev = speed;
        }
    }

    #[test]
    fn test_motion_accumulates_yaw() {
        let mut motion = TreeMotion::new();
        motion.advance(0.0, 1.0);
        assert!((motion.yaw() - SPIN_CLOSED).abs() < 1e-6);

        motion.advance(1.0, 1.0);
        assert!((motion.yaw() - SPIN_CLOSED).abs() < 1e-6, "stopped when open");
    }

    #[test]
    fn test_world_local_roundtrip() {
        let pose = TreePose::new(TREE_ORIGIN, Quat::from_yaw(0.7));
        let world = Vec3::new(1.0, 2.0, 3.0);
        let local = pose.world_to_local_point(world);
        let back = pose.local_to_world_point(local);
        assert!(back.distance(&world) < 1e-4);
    }

    #[test]
    fn test_world_to_local_accounts_for_rotation() {
        // A quarter turn: world +X maps onto a different local axis
        let pose = TreePose::new(Vec3::ZERO, Quat::from_yaw(std::f32::consts::FRAC_PI_2));
        let local = pose.world_to_local_point(Vec3::new(1.0, 0.0, 0.0));
        assert!(local.distance(&Vec3::new(0.0, 0.0, 1.0)) < 1e-4);
    }
}
