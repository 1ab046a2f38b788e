//! Ornament animation controller
//!
//! Each tracked photo owns its full animation state: rest and expanded
//! positions, a locally smoothed copy of the shared openness value, and the
//! interpolated transform the renderer reads. The update is a pure function
//! of (state, dt, shared control value, camera pose, parent pose) so it can
//! be driven and asserted without a live renderer.
//!
//! Four openness bands, continuous targets, exponential approach - crossing
//! a band boundary never snaps.

use tinsel_core::{approach_factor, lerp, PhotoId, Quat, Vec3};

use crate::{expanded_slot, spiral_slot, TreePose, FLY_OUT_FACTOR};

/// Below this the ornament is contracted into its spiral slot, invisible.
pub const CONTRACTED_BELOW: f32 = 0.10;

/// At and above this the hero transition takes over.
pub const HERO_ABOVE: f32 = 0.85;

/// Per-object refilter rate of the shared openness value, per second.
/// Each ornament lags the shared signal independently, desynchronizing
/// motion phase across the tree.
pub const LOCAL_FILTER_RATE: f32 = 2.5;

/// Exponential approach rate for position, orientation, and scale.
pub const APPROACH_RATE: f32 = 5.0;

/// Distance in front of the camera where the hero settles, world units.
pub const HERO_DISTANCE: f32 = 4.0;

/// Scale at the start of the expanding band.
pub const SCALE_EXPAND_START: f32 = 0.1;

/// Scale at full expansion, before the hero band.
pub const SCALE_EXPANDED: f32 = 1.5;

/// Hero scale at full openness.
pub const SCALE_HERO: f32 = 3.0;

/// Active camera pose, read once per rendered frame.
#[derive(Debug, Clone, Copy)]
pub struct CameraPose {
    pub position: Vec3,
    pub orientation: Quat,
}

impl CameraPose {
    pub fn new(position: Vec3, orientation: Quat) -> Self {
        Self {
            position,
            orientation,
        }
    }

    /// View direction: cameras look down their local -Z.
    pub fn forward(&self) -> Vec3 {
        self.orientation.rotate(Vec3::new(0.0, 0.0, -1.0))
    }
}

impl Default for CameraPose {
    fn default() -> Self {
        // Host default: camera on the +Z axis looking at the tree
        Self {
            position: Vec3::new(0.0, 0.0, 18.0),
            orientation: Quat::IDENTITY,
        }
    }
}

/// Which animation band an ornament evaluated this frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrnamentPhase {
    Contracted,
    Expanding,
    Hero,
    FlyOut,
}

/// One photo-ornament's animation state.
#[derive(Debug, Clone)]
pub struct Ornament {
    pub id: PhotoId,
    rest: Vec3,
    expanded: Vec3,
    local_openness: f32,
    pub position: Vec3,
    pub orientation: Quat,
    pub scale: f32,
}

impl Ornament {
    /// New ornament in slot `index` of `total`, starting contracted.
    pub fn new(id: PhotoId, index: usize, total: usize) -> Self {
        let rest = spiral_slot(index, total);
        Self {
            id,
            rest,
            expanded: expanded_slot(rest),
            local_openness: 0.0,
            position: rest,
            orientation: Quat::IDENTITY,
            scale: 0.0,
        }
    }

    /// Move to a new slot after the collection changed, keeping the
    /// in-flight animation state.
    pub fn re_slot(&mut self, index: usize, total: usize) {
        self.rest = spiral_slot(index, total);
        self.expanded = expanded_slot(self.rest);
    }

    #[inline]
    pub fn rest_position(&self) -> Vec3 {
        self.rest
    }

    #[inline]
    pub fn expanded_position(&self) -> Vec3 {
        self.expanded
    }

    #[inline]
    pub fn local_openness(&self) -> f32 {
        self.local_openness
    }

    /// Advance one rendered frame. Returns the band that was evaluated.
    pub fn update(
        &mut self,
        shared_openness: f32,
        dt: f32,
        camera: &CameraPose,
        parent: &TreePose,
        is_hero: bool,
    ) -> OrnamentPhase {
        // Independent refilter of the shared signal, at render cadence
        self.local_openness = lerp(
            self.local_openness,
            shared_openness.clamp(0.0, 1.0),
            approach_factor(LOCAL_FILTER_RATE, dt),
        );
        let o = self.local_openness;

        let target_pos;
        let target_scale;
        let phase;
        let mut hero_orientation = None;
        let mut billboard = false;

        if o < CONTRACTED_BELOW {
            target_pos = self.rest;
            target_scale = 0.0;
            phase = OrnamentPhase::Contracted;
        } else if o < HERO_ABOVE {
            let t = (o - CONTRACTED_BELOW) / (HERO_ABOVE - CONTRACTED_BELOW);
            target_pos = self.rest.lerp(&self.expanded, t);
            target_scale = lerp(SCALE_EXPAND_START, SCALE_EXPANDED, t);
            billboard = true;
            phase = OrnamentPhase::Expanding;
        } else {
            let t = (o - HERO_ABOVE) / (1.0 - HERO_ABOVE);
            if is_hero {
                // Target sits a fixed distance in front of the camera, in
                // world space, then converted into the rotating parent's
                // frame so the tree's own yaw cannot drag it off-center.
                let world = camera.position + camera.forward() * HERO_DISTANCE;
                target_pos = parent.world_to_local_point(world);
                hero_orientation = Some(parent.world_to_local_rotation(&camera.orientation));
                target_scale = lerp(SCALE_EXPANDED, SCALE_HERO, t);
                phase = OrnamentPhase::Hero;
            } else {
                let out = self.expanded * FLY_OUT_FACTOR;
                target_pos = self.expanded.lerp(&out, t);
                target_scale = lerp(SCALE_EXPANDED, 0.0, t);
                billboard = true;
                phase = OrnamentPhase::FlyOut;
            }
        }

        let k = approach_factor(APPROACH_RATE, dt);
        self.position = self.position.lerp(&target_pos, k);
        self.scale = lerp(self.scale, target_scale, k);

        if let Some(target) = hero_orientation {
            self.orientation = self.orientation.slerp(&target, k);
        } else if billboard {
            // Instant look-at, evaluated at the post-approach position
            let world_pos = parent.local_to_world_point(self.position);
            let look = Quat::face_toward(world_pos, camera.position, Vec3::UP);
            self.orientation = parent.world_to_local_rotation(&look);
        }

        phase
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Large dt: approach factors clamp to 1, the local filter tracks the
    // shared value exactly, and targets are reached in one step.
    const SNAP_DT: f32 = 0.5;

    fn ornament() -> Ornament {
        Ornament::new(PhotoId::new(1), 0, 2)
    }

    #[test]
    fn test_contracted_band() {
        let mut orn = ornament();
        let phase = orn.update(
            0.0,
            SNAP_DT,
            &CameraPose::default(),
            &TreePose::default(),
            false,
        );
        assert_eq!(phase, OrnamentPhase::Contracted);
        assert!(orn.position.distance(&orn.rest_position()) < 1e-4);
        assert!(orn.scale.abs() < 1e-4);
    }

    #[test]
    fn test_expanding_band_blends_toward_expanded() {
        let mut orn = ornament();
        let phase = orn.update(
            0.5,
            SNAP_DT,
            &CameraPose::default(),
            &TreePose::default(),
            false,
        );
        assert_eq!(phase, OrnamentPhase::Expanding);

        // Position sits strictly between rest and expanded
        let to_rest = orn.position.distance(&orn.rest_position());
        let to_expanded = orn.position.distance(&orn.expanded_position());
        let span = orn.rest_position().distance(&orn.expanded_position());
        assert!(to_rest > 1e-3);
        assert!(to_expanded > 1e-3);
        assert!((to_rest + to_expanded - span).abs() < 1e-3);

        assert!(orn.scale > SCALE_EXPAND_START && orn.scale < SCALE_EXPANDED);
    }

    #[test]
    fn test_expanding_band_billboards_toward_camera() {
        let mut orn = ornament();
        let camera = CameraPose::default();
        let parent = TreePose::default();
        orn.update(0.5, SNAP_DT, &camera, &parent, false);

        let world_pos = parent.local_to_world_point(orn.position);
        let world_facing = parent.rotation.mul(&orn.orientation);
        let normal = world_facing.rotate(Vec3::new(0.0, 0.0, 1.0));
        let to_camera = (camera.position - world_pos).normalize();
        assert!(normal.dot(&to_camera) > 0.999);
    }

    #[test]
    fn test_hero_band_settles_in_front_of_camera() {
        let mut orn = ornament();
        let camera = CameraPose::default();
        // Rotated parent: the conversion must cancel the tree yaw
        let parent = TreePose::new(crate::TREE_ORIGIN, Quat::from_yaw(1.1));

        let mut phase = OrnamentPhase::Contracted;
        for _ in 0..40 {
            phase = orn.update(1.0, SNAP_DT, &camera, &parent, true);
        }
        assert_eq!(phase, OrnamentPhase::Hero);

        let world_pos = parent.local_to_world_point(orn.position);
        let expected = camera.position + camera.forward() * HERO_DISTANCE;
        assert!(world_pos.distance(&expected) < 1e-2);
        assert!((orn.scale - SCALE_HERO).abs() < 1e-2);

        // Orientation converges on the camera's, expressed in parent space
        let world_q = parent.rotation.mul(&orn.orientation);
        assert!((world_q.dot(&camera.orientation).abs() - 1.0).abs() < 1e-3);
    }

    #[test]
    fn test_fly_out_band_fades_and_recedes() {
        let mut orn = ornament();
        let camera = CameraPose::default();
        let parent = TreePose::default();

        // Reach full expansion first, then push past the hero threshold
        for _ in 0..20 {
            orn.update(0.8, SNAP_DT, &camera, &parent, false);
        }
        let mut phase = OrnamentPhase::Contracted;
        for _ in 0..40 {
            phase = orn.update(1.0, SNAP_DT, &camera, &parent, false);
        }
        assert_eq!(phase, OrnamentPhase::FlyOut);

        let out = orn.expanded_position() * FLY_OUT_FACTOR;
        assert!(orn.position.distance(&out) < 1e-2);
        assert!(orn.scale < 1e-2);
    }

    #[test]
    fn test_local_filter_lags_shared_value() {
        let mut orn = ornament();
        // Small dt: the local copy must trail a step input
        orn.update(
            1.0,
            0.016,
            &CameraPose::default(),
            &TreePose::default(),
            false,
        );
        assert!(orn.local_openness() > 0.0);
        assert!(orn.local_openness() < 0.1);
    }

    #[test]
    fn test_re_slot_preserves_animation_state() {
        let mut orn = ornament();
        for _ in 0..5 {
            orn.update(
                0.6,
                SNAP_DT,
                &CameraPose::default(),
                &TreePose::default(),
                false,
            );
        }
        let position = orn.position;
        let local = orn.local_openness();

        orn.re_slot(4, 9);
        assert_eq!(orn.position, position);
        assert_eq!(orn.local_openness(), local);
        assert!(orn.rest_position().distance(&spiral_slot(4, 9)) < 1e-6);
    }
}
