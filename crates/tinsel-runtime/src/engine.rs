//! TINSEL Engine - the two cooperative tick entry points
//!
//! The engine owns the gallery, the ornaments, the hero policy, the smoother,
//! and the shared control value. The host drives it with two repeating
//! callbacks: `detection_tick` at camera cadence and `render_tick` at display
//! refresh. Neither spawns threads; both are plain synchronous calls so the
//! whole pipeline runs under a test without a camera or a renderer.

use std::time::{Duration, Instant};

use bytes::Bytes;
use tracing::{debug, info, warn};

use tinsel_core::{FrameTime, PhotoId, TinselError};
use tinsel_scene::{
    CameraPose, Gallery, HeroSelector, LightCloud, Ornament, PhotoData, TopStar, TreeMotion,
    LIGHT_COUNT, PLACEHOLDER_COUNT,
};
use tinsel_vision::{estimate_openness, DetectorStatus, OpennessSmoother, VideoFrame};

use crate::{status_banner, ControlState, SharedControl, StatusBanner};

/// Engine construction options.
#[derive(Clone, Debug)]
pub struct EngineConfig {
    /// Placeholder photos seeded into the gallery at startup.
    pub placeholder_photos: usize,
    /// Number of points in the light cloud.
    pub light_count: usize,
    /// Deterministic seed for id generation, hero picks, and light colors.
    pub seed: Option<u64>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        EngineConfig {
            placeholder_photos: PLACEHOLDER_COUNT,
            light_count: LIGHT_COUNT,
            seed: None,
        }
    }
}

/// Counters for both loops.
#[derive(Clone, Debug, Default)]
pub struct RuntimeStats {
    pub detection_frames: u64,
    pub stale_frames: u64,
    pub render_frames: u64,
    pub hero_cycles: u64,
    pub last_render_duration: Duration,
}

/// What one detection tick did.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DetectionOutcome {
    /// A fresh frame was processed; the new smoothed openness.
    Processed { openness: f32 },
    /// Frame timestamp unchanged since the last tick - skipped.
    Stale,
    /// Detector not ready (initializing or failed) - ignored.
    NotReady,
}

/// The runtime entity both loops tick.
pub struct Engine {
    gallery: Gallery,
    ornaments: Vec<Ornament>,
    hero: HeroSelector,
    smoother: OpennessSmoother,
    control: SharedControl,
    tree: TreeMotion,
    star: TopStar,
    lights: LightCloud,
    detector_status: DetectorStatus,
    failure_reported: bool,
    last_frame: Option<FrameTime>,
    elapsed: f32,
    stats: RuntimeStats,
}

impl Engine {
    /// Engine with default configuration.
    pub fn new() -> Self {
        Self::with_config(EngineConfig::default())
    }

    /// Engine with custom configuration.
    pub fn with_config(config: EngineConfig) -> Self {
        let mut gallery = match config.seed {
            Some(seed) => Gallery::with_seed(seed),
            None => Gallery::new(),
        };
        let placeholders = (0..config.placeholder_photos)
            .map(|i| Bytes::from(vec![i as u8]))
            .collect();
        gallery.add_photos(placeholders);

        let hero = match config.seed {
            Some(seed) => HeroSelector::with_seed(seed),
            None => HeroSelector::new(),
        };
        let lights = match config.seed {
            Some(seed) => LightCloud::with_seed(config.light_count, seed),
            None => LightCloud::new(config.light_count),
        };

        let mut engine = Engine {
            gallery,
            ornaments: Vec::new(),
            hero,
            smoother: OpennessSmoother::new(),
            control: SharedControl::new(),
            tree: TreeMotion::new(),
            star: TopStar::new(),
            lights,
            detector_status: DetectorStatus::Initializing,
            failure_reported: false,
            last_frame: None,
            elapsed: 0.0,
            stats: RuntimeStats::default(),
        };
        engine.sync_ornaments();
        engine
    }

    /// The host's camera stream is up; detection frames will follow.
    pub fn mark_camera_ready(&mut self) {
        self.detector_status = DetectorStatus::Ready;
        info!("detector ready");
    }

    /// Detector initialization failed. Reported once; the pipeline degrades
    /// to the hand-absent state indefinitely. No retry.
    pub fn report_detector_failure(&mut self, error: &TinselError) {
        if self.failure_reported {
            return;
        }
        self.failure_reported = true;
        self.detector_status = DetectorStatus::Failed;
        warn!(%error, "detector failed; gesture control disabled");

        self.smoother.reset();
        self.control.publish(ControlState::default());
    }

    /// Detection loop entry point. Skip-if-stale on the frame timestamp;
    /// the only writer of the shared control value.
    pub fn detection_tick(&mut self, frame: &VideoFrame) -> DetectionOutcome {
        if !self.detector_status.is_ready() {
            return DetectionOutcome::NotReady;
        }
        if self.last_frame == Some(frame.timestamp) {
            self.stats.stale_frames += 1;
            return DetectionOutcome::Stale;
        }
        self.last_frame = Some(frame.timestamp);
        self.stats.detection_frames += 1;

        let (openness, hand_present) = match &frame.hand {
            Some(hand) => {
                let raw = estimate_openness(hand);
                (self.smoother.update(Some(raw)), true)
            }
            None => (self.smoother.update(None), false),
        };

        self.control.publish(ControlState {
            openness,
            hand_present,
        });
        DetectionOutcome::Processed { openness }
    }

    /// Render loop entry point. Reads the shared control value, never
    /// writes it; evaluates the hero policy, the tree decor, and every
    /// ornament for this frame.
    pub fn render_tick(&mut self, dt: f32, camera: &CameraPose) {
        let start = Instant::now();
        self.stats.render_frames += 1;
        self.elapsed += dt;

        let control = self.control.snapshot();
        let openness = control.openness;

        // The hero index must be valid before any ornament reads it
        self.hero.clamp(self.gallery.len());
        if let Some(next) = self.hero.observe(openness, self.gallery.len()) {
            self.stats.hero_cycles += 1;
            debug!(hero = next, "hero cycled");
        }

        self.tree.advance(openness, dt);
        self.star.update(openness, self.elapsed, dt);
        self.lights.update(openness, dt);

        let parent = self.tree.pose();
        let hero_index = self.hero.index();
        for (index, ornament) in self.ornaments.iter_mut().enumerate() {
            ornament.update(openness, dt, camera, &parent, index == hero_index);
        }

        self.stats.last_render_duration = start.elapsed();
    }

    /// Add photos to the gallery (newest first, capped) and re-slot the
    /// ornaments. Returns the assigned ids in input order.
    pub fn add_photos(&mut self, images: Vec<Bytes>) -> Vec<PhotoId> {
        let ids = self.gallery.add_photos(images);
        debug!(added = ids.len(), total = self.gallery.len(), "photos added");
        self.sync_ornaments();
        ids
    }

    /// Remove a photo by id; a no-op when absent.
    pub fn remove_photo(&mut self, id: PhotoId) -> bool {
        let removed = self.gallery.remove(id);
        if removed {
            debug!(%id, total = self.gallery.len(), "photo removed");
            self.sync_ornaments();
            self.hero.clamp(self.gallery.len());
        }
        removed
    }

    /// Current photo collection, newest first.
    pub fn photos(&self) -> &[PhotoData] {
        self.gallery.photos()
    }

    /// Current ornament transforms, in collection order.
    pub fn ornaments(&self) -> &[Ornament] {
        &self.ornaments
    }

    pub fn hero_index(&self) -> usize {
        self.hero.index()
    }

    pub fn detector_status(&self) -> DetectorStatus {
        self.detector_status
    }

    /// Cloneable handle to the shared control value, for hosts that read it
    /// outside the render tick (meters, overlays).
    pub fn control(&self) -> SharedControl {
        self.control.clone()
    }

    pub fn tree(&self) -> &TreeMotion {
        &self.tree
    }

    pub fn star(&self) -> &TopStar {
        &self.star
    }

    pub fn lights(&self) -> &LightCloud {
        &self.lights
    }

    pub fn stats(&self) -> &RuntimeStats {
        &self.stats
    }

    /// Banner for the host overlay.
    pub fn status_banner(&self) -> StatusBanner {
        status_banner(self.detector_status, &self.control.snapshot())
    }

    /// Rebuild the ornament list to mirror the gallery, preserving in-flight
    /// animation state for photos that survived the change.
    fn sync_ornaments(&mut self) {
        let total = self.gallery.len();
        let mut existing = std::mem::take(&mut self.ornaments);

        self.ornaments = self
            .gallery
            .photos()
            .iter()
            .enumerate()
            .map(|(index, photo)| {
                match existing.iter().position(|o| o.id == photo.id) {
                    Some(pos) => {
                        let mut ornament = existing.swap_remove(pos);
                        ornament.re_slot(index, total);
                        ornament
                    }
                    None => Ornament::new(photo.id, index, total),
                }
            })
            .collect();
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tinsel_vision::{HandLandmarks, Landmark, LandmarkIndex};

    fn test_engine(photos: usize) -> Engine {
        let mut engine = Engine::with_config(EngineConfig {
            placeholder_photos: photos,
            light_count: 50,
            seed: Some(1234),
        });
        engine.mark_camera_ready();
        engine
    }

    /// Hand whose raw openness estimate is exactly `openness`.
    fn synthetic_hand(openness: f32) -> HandLandmarks {
        let palm = 0.1;
        let wrist = Landmark::new(0.5, 0.5, 0.0);
        let mut points = vec![wrist; 21];
        points[LandmarkIndex::MiddleMcp as usize] = Landmark::new(0.5, 0.5 - palm, 0.0);
        let ratio = 1.1 + openness.clamp(0.0, 1.0);
        for &tip in LandmarkIndex::fingertips() {
            points[tip as usize] = Landmark::new(0.5 + palm * ratio, 0.5, 0.0);
        }
        HandLandmarks::from_points(points).expect("21 points")
    }

    #[test]
    fn test_skip_if_stale() {
        let mut engine = test_engine(2);
        let frame = VideoFrame::new(FrameTime::from_millis(33), Some(synthetic_hand(1.0)));

        let first = engine.detection_tick(&frame);
        assert!(matches!(first, DetectionOutcome::Processed { .. }));

        let second = engine.detection_tick(&frame);
        assert_eq!(second, DetectionOutcome::Stale);
        assert_eq!(engine.stats().detection_frames, 1);
        assert_eq!(engine.stats().stale_frames, 1);
    }

    #[test]
    fn test_not_ready_before_camera() {
        let mut engine = Engine::with_config(EngineConfig {
            placeholder_photos: 0,
            light_count: 10,
            seed: Some(1),
        });
        let frame = VideoFrame::absent(FrameTime::from_millis(1));
        assert_eq!(engine.detection_tick(&frame), DetectionOutcome::NotReady);
    }

    #[test]
    fn test_detection_writes_shared_control() {
        let mut engine = test_engine(2);
        let reader = engine.control();

        for i in 0..50 {
            let frame =
                VideoFrame::new(FrameTime::from_millis(i * 33), Some(synthetic_hand(1.0)));
            engine.detection_tick(&frame);
        }

        let state = reader.snapshot();
        assert!(state.hand_present);
        assert!(state.openness > 0.9);
    }

    #[test]
    fn test_detector_failure_degrades_to_closed() {
        let mut engine = test_engine(2);

        // Open the tree first
        for i in 0..50 {
            let frame =
                VideoFrame::new(FrameTime::from_millis(i * 33), Some(synthetic_hand(1.0)));
            engine.detection_tick(&frame);
        }
        assert!(engine.control().snapshot().openness > 0.9);

        engine.report_detector_failure(&TinselError::DetectorInit("no camera".into()));
        assert_eq!(engine.detector_status(), DetectorStatus::Failed);
        assert_eq!(engine.control().snapshot().openness, 0.0);
        assert_eq!(engine.status_banner(), StatusBanner::CameraUnavailable);

        // Subsequent frames are ignored; openness stays at 0
        let frame = VideoFrame::new(FrameTime::from_millis(9999), Some(synthetic_hand(1.0)));
        assert_eq!(engine.detection_tick(&frame), DetectionOutcome::NotReady);
        assert_eq!(engine.control().snapshot().openness, 0.0);

        // Reporting again is a no-op
        engine.report_detector_failure(&TinselError::CameraNotReady);
        assert_eq!(engine.detector_status(), DetectorStatus::Failed);
    }

    #[test]
    fn test_empty_gallery_render_does_not_panic() {
        let mut engine = Engine::with_config(EngineConfig {
            placeholder_photos: 0,
            light_count: 10,
            seed: Some(5),
        });
        engine.mark_camera_ready();
        assert_eq!(engine.hero_index(), 0);

        for _ in 0..10 {
            engine.render_tick(0.016, &CameraPose::default());
        }
        assert_eq!(engine.hero_index(), 0);
        assert_eq!(engine.stats().render_frames, 10);
    }

    #[test]
    fn test_add_and_remove_keep_ornaments_in_sync() {
        let mut engine = test_engine(3);
        assert_eq!(engine.ornaments().len(), 3);

        let ids = engine.add_photos(vec![Bytes::from_static(b"new")]);
        assert_eq!(engine.ornaments().len(), 4);
        assert_eq!(engine.ornaments()[0].id, ids[0]);

        assert!(engine.remove_photo(ids[0]));
        assert_eq!(engine.ornaments().len(), 3);
        assert!(!engine.remove_photo(ids[0]));
    }

    #[test]
    fn test_hero_clamped_when_collection_shrinks() {
        let mut engine = test_engine(5);

        // Cycle the hero away from 0
        while engine.hero_index() == 0 {
            engine.control().publish(ControlState {
                openness: 0.05,
                hand_present: true,
            });
            engine.render_tick(0.016, &CameraPose::default());
            engine.control().publish(ControlState {
                openness: 0.5,
                hand_present: true,
            });
            engine.render_tick(0.016, &CameraPose::default());
        }

        // Shrink the collection beneath the hero index
        let keep = engine.photos()[0].id;
        let ids: Vec<PhotoId> = engine.photos().iter().map(|p| p.id).collect();
        for id in ids {
            if id != keep {
                engine.remove_photo(id);
            }
        }
        assert_eq!(engine.photos().len(), 1);
        assert_eq!(engine.hero_index(), 0);

        engine.render_tick(0.016, &CameraPose::default());
        assert_eq!(engine.hero_index(), 0);
    }

    #[test]
    fn test_ornament_state_survives_re_slot() {
        let mut engine = test_engine(4);
        engine.control().publish(ControlState {
            openness: 0.6,
            hand_present: true,
        });
        for _ in 0..30 {
            engine.render_tick(0.05, &CameraPose::default());
        }

        let survivor = engine.photos()[1].id;
        let local_before = engine
            .ornaments()
            .iter()
            .find(|o| o.id == survivor)
            .map(|o| o.local_openness())
            .expect("survivor present");

        engine.remove_photo(engine.photos()[0].id);

        let local_after = engine
            .ornaments()
            .iter()
            .find(|o| o.id == survivor)
            .map(|o| o.local_openness())
            .expect("survivor still present");
        assert_eq!(local_before, local_after);
    }
}
