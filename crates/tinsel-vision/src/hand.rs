//! Hand landmark model
//!
//! One detected hand is an ordered set of 21 named points in normalized
//! image coordinates, indexed by the detector's fixed anatomical numbering
//! (0 = wrist, 9 = middle-finger base knuckle, 4/8/12/16/20 = fingertips).
//! The set is produced fresh each frame and is read-only input to the
//! pipeline.

use tinsel_core::{TinselError, TinselResult};

/// Anatomical landmark identifier for one hand
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LandmarkIndex {
    Wrist,

    // Thumb
    ThumbCmc,
    ThumbMcp,
    ThumbIp,
    ThumbTip,

    // Index finger
    IndexMcp,
    IndexPip,
    IndexDip,
    IndexTip,

    // Middle finger
    MiddleMcp,
    MiddlePip,
    MiddleDip,
    MiddleTip,

    // Ring finger
    RingMcp,
    RingPip,
    RingDip,
    RingTip,

    // Pinky
    PinkyMcp,
    PinkyPip,
    PinkyDip,
    PinkyTip,
}

impl LandmarkIndex {
    /// All landmarks in detector order
    pub fn all() -> &'static [LandmarkIndex] {
        &[
            LandmarkIndex::Wrist,
            LandmarkIndex::ThumbCmc,
            LandmarkIndex::ThumbMcp,
            LandmarkIndex::ThumbIp,
            LandmarkIndex::ThumbTip,
            LandmarkIndex::IndexMcp,
            LandmarkIndex::IndexPip,
            LandmarkIndex::IndexDip,
            LandmarkIndex::IndexTip,
            LandmarkIndex::MiddleMcp,
            LandmarkIndex::MiddlePip,
            LandmarkIndex::MiddleDip,
            LandmarkIndex::MiddleTip,
            LandmarkIndex::RingMcp,
            LandmarkIndex::RingPip,
            LandmarkIndex::RingDip,
            LandmarkIndex::RingTip,
            LandmarkIndex::PinkyMcp,
            LandmarkIndex::PinkyPip,
            LandmarkIndex::PinkyDip,
            LandmarkIndex::PinkyTip,
        ]
    }

    /// Number of landmarks per hand
    pub fn count() -> usize {
        21
    }

    /// The five fingertips, thumb first
    pub fn fingertips() -> &'static [LandmarkIndex] {
        &[
            LandmarkIndex::ThumbTip,
            LandmarkIndex::IndexTip,
            LandmarkIndex::MiddleTip,
            LandmarkIndex::RingTip,
            LandmarkIndex::PinkyTip,
        ]
    }
}

/// One landmark point in normalized coordinates (0..1 within the capture
/// frame; z is detector depth, unused by the openness metric).
#[derive(Debug, Clone, Copy, Default)]
pub struct Landmark {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Landmark {
    pub fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    /// Planar Euclidean distance, ignoring depth
    pub fn distance_2d(&self, other: &Landmark) -> f32 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }
}

/// A validated set of 21 landmarks for one hand
#[derive(Debug, Clone)]
pub struct HandLandmarks {
    points: Vec<Landmark>,
}

impl HandLandmarks {
    /// Build from detector output, rejecting sets with the wrong point count.
    pub fn from_points(points: Vec<Landmark>) -> TinselResult<Self> {
        if points.len() != LandmarkIndex::count() {
            return Err(TinselError::MalformedLandmarks {
                expected: LandmarkIndex::count(),
                actual: points.len(),
            });
        }
        Ok(Self { points })
    }

    /// Get a landmark by anatomical index
    #[inline]
    pub fn point(&self, index: LandmarkIndex) -> Landmark {
        self.points[index as usize]
    }

    pub fn points(&self) -> &[Landmark] {
        &self.points
    }
}
