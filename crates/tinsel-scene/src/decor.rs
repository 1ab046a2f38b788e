//! Tree decor - top star and light cloud
//!
//! Ambient animation driven by the same shared openness value as the
//! ornaments: the star pulses while the tree is closed and fades out as it
//! expands so it never blocks the hero; the light cloud swells with openness
//! and disappears once the hero moment starts.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use tinsel_core::{approach_factor, lerp, Vec3};

use crate::{cone_points, LIGHT_CONE_HEIGHT, LIGHT_CONE_RADIUS};

/// Color in RGB (0.0 - 1.0 range)
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Color {
    pub fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    pub fn lerp(&self, other: &Color, t: f32) -> Color {
        Color {
            r: lerp(self.r, other.r, t),
            g: lerp(self.g, other.g, t),
            b: lerp(self.b, other.b, t),
        }
    }
}

/// The four light colors: red, green, gold, white.
pub fn festive_palette() -> [Color; 4] {
    [
        Color::new(0.937, 0.267, 0.267),
        Color::new(0.133, 0.773, 0.369),
        Color::new(0.984, 0.749, 0.141),
        Color::new(1.0, 1.0, 1.0),
    ]
}

/// World position of the top star.
pub const STAR_POSITION: Vec3 = Vec3 {
    x: 0.0,
    y: 6.5,
    z: 0.0,
};

/// Star spin, radians per elapsed second.
pub const STAR_SPIN_RATE: f32 = 0.5;

/// Star pulse frequency and amplitude.
pub const STAR_PULSE_RATE: f32 = 3.0;
pub const STAR_PULSE_AMPLITUDE: f32 = 0.1;

/// Openness band over which the star fades from full to invisible.
pub const STAR_FADE_START: f32 = 0.2;
pub const STAR_FADE_END: f32 = 0.8;

/// Star visibility for a given openness: 1 below the fade band, 0 above it.
pub fn star_visibility(openness: f32) -> f32 {
    if openness <= STAR_FADE_START {
        return 1.0;
    }
    1.0 - ((openness - STAR_FADE_START) / (STAR_FADE_END - STAR_FADE_START)).clamp(0.0, 1.0)
}

/// Top star animation state.
#[derive(Debug, Clone)]
pub struct TopStar {
    yaw: f32,
    scale: f32,
}

impl TopStar {
    pub fn new() -> Self {
        Self {
            yaw: 0.0,
            scale: 1.0,
        }
    }

    /// Advance one rendered frame. `elapsed` is seconds since startup.
    pub fn update(&mut self, openness: f32, elapsed: f32, dt: f32) {
        self.yaw = elapsed * STAR_SPIN_RATE;

        let pulse = 1.0 + (elapsed * STAR_PULSE_RATE).sin() * STAR_PULSE_AMPLITUDE;
        let target = pulse * star_visibility(openness);
        self.scale = lerp(self.scale, target, approach_factor(5.0, dt));
    }

    #[inline]
    pub fn yaw(&self) -> f32 {
        self.yaw
    }

    #[inline]
    pub fn scale(&self) -> f32 {
        self.scale
    }
}

impl Default for TopStar {
    fn default() -> Self {
        Self::new()
    }
}

/// Number of points in the light cloud.
pub const LIGHT_COUNT: usize = 2000;

/// Cloud scale gain per unit of openness.
pub const LIGHT_EXPAND_GAIN: f32 = 2.0;

/// Openness above which the cloud fades out for the hero moment.
pub const LIGHT_FADE_ABOVE: f32 = 0.8;

const LIGHT_SCALE_RATE: f32 = 2.0;
const LIGHT_FADE_RATE: f32 = 5.0;

/// One light: a fixed cone position and palette color.
#[derive(Debug, Clone, Copy)]
pub struct LightPoint {
    pub position: Vec3,
    pub color: Color,
}

/// Golden-angle cloud of colored points wrapping the tree.
#[derive(Debug, Clone)]
pub struct LightCloud {
    points: Vec<LightPoint>,
    scale: f32,
    opacity: f32,
}

impl LightCloud {
    pub fn new(count: usize) -> Self {
        Self::with_seed(count, rand::random())
    }

    /// Deterministic color assignment for tests.
    pub fn with_seed(count: usize, seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let palette = festive_palette();
        let points = cone_points(count, LIGHT_CONE_RADIUS, LIGHT_CONE_HEIGHT)
            .into_iter()
            .map(|position| LightPoint {
                position,
                color: palette[rng.gen_range(0..palette.len())],
            })
            .collect();

        Self {
            points,
            scale: 1.0,
            opacity: 1.0,
        }
    }

    /// Advance one rendered frame.
    pub fn update(&mut self, openness: f32, dt: f32) {
        let target_scale = 1.0 + openness * LIGHT_EXPAND_GAIN;
        self.scale = lerp(
            self.scale,
            target_scale,
            approach_factor(LIGHT_SCALE_RATE, dt),
        );

        let target_opacity = if openness > LIGHT_FADE_ABOVE { 0.0 } else { 1.0 };
        self.opacity = lerp(
            self.opacity,
            target_opacity,
            approach_factor(LIGHT_FADE_RATE, dt),
        );
    }

    pub fn points(&self) -> &[LightPoint] {
        &self.points
    }

    #[inline]
    pub fn scale(&self) -> f32 {
        self.scale
    }

    #[inline]
    pub fn opacity(&self) -> f32 {
        self.opacity
    }
}
