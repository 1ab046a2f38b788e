//! Open/close cycle driving
//!
//! Pumps a full engine through detection and render ticks with synthetic
//! hands until the shared openness crosses a condition. One render tick per
//! detection frame, which is the coarsest cadence the pipeline supports.

use std::time::Duration;

use tinsel_core::FrameTime;
use tinsel_runtime::Engine;
use tinsel_scene::CameraPose;
use tinsel_vision::VideoFrame;

use crate::synthetic_hand;

/// Render delta matched to the simulated camera cadence.
pub const RENDER_DT: f32 = 0.033;

/// Drives an engine through scripted openness with paired detection and
/// render ticks.
pub struct CycleDriver {
    timestamp: FrameTime,
    camera: CameraPose,
}

impl CycleDriver {
    pub fn new() -> Self {
        Self {
            timestamp: FrameTime::ZERO,
            camera: CameraPose::default(),
        }
    }

    /// One detection frame (present hand at `raw`, or absent) plus one
    /// render frame. Returns the shared openness after the pair.
    pub fn step(&mut self, engine: &mut Engine, raw: Option<f32>) -> f32 {
        self.timestamp = self.timestamp + Duration::from_millis(33);
        let frame = VideoFrame::new(self.timestamp, raw.map(synthetic_hand));
        engine.detection_tick(&frame);
        engine.render_tick(RENDER_DT, &self.camera);
        engine.control().snapshot().openness
    }

    /// Step with a constant input until the shared openness satisfies the
    /// condition. Panics after `max_steps` - a failed convergence is a test
    /// failure, not a recoverable state.
    pub fn drive_until(
        &mut self,
        engine: &mut Engine,
        raw: Option<f32>,
        condition: impl Fn(f32) -> bool,
        max_steps: usize,
    ) -> usize {
        for step in 1..=max_steps {
            let openness = self.step(engine, raw);
            if condition(openness) {
                return step;
            }
        }
        panic!("openness condition not reached within {max_steps} steps");
    }

    /// Open the hand until the signal clears the hero re-arm threshold.
    pub fn open(&mut self, engine: &mut Engine) -> usize {
        self.drive_until(engine, Some(1.0), |o| o > 0.3, 200)
    }

    /// Close the hand until the signal snaps to exactly 0.
    pub fn close(&mut self, engine: &mut Engine) -> usize {
        self.drive_until(engine, Some(0.0), |o| o == 0.0, 200)
    }

    /// One full open -> close cycle.
    pub fn run_cycle(&mut self, engine: &mut Engine) {
        self.open(engine);
        self.close(engine);
    }
}

impl Default for CycleDriver {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tinsel_runtime::EngineConfig;

    #[test]
    fn test_driver_opens_and_closes() {
        let mut engine = Engine::with_config(EngineConfig {
            placeholder_photos: 3,
            light_count: 20,
            seed: Some(8),
        });
        engine.mark_camera_ready();
        let mut driver = CycleDriver::new();

        let open_steps = driver.open(&mut engine);
        assert!(open_steps > 1, "opening takes several smoothing steps");
        assert!(engine.control().snapshot().openness > 0.3);

        driver.close(&mut engine);
        assert_eq!(engine.control().snapshot().openness, 0.0);
    }

    #[test]
    fn test_losing_hand_closes_faster_than_closing_it() {
        let make_engine = || {
            let mut engine = Engine::with_config(EngineConfig {
                placeholder_photos: 2,
                light_count: 20,
                seed: Some(9),
            });
            engine.mark_camera_ready();
            engine
        };

        let mut engine_a = make_engine();
        let mut driver_a = CycleDriver::new();
        driver_a.drive_until(&mut engine_a, Some(1.0), |o| o > 0.8, 200);
        let absent_steps = driver_a.drive_until(&mut engine_a, None, |o| o < 0.1, 200);

        let mut engine_b = make_engine();
        let mut driver_b = CycleDriver::new();
        driver_b.drive_until(&mut engine_b, Some(1.0), |o| o > 0.8, 200);
        let closed_steps = driver_b.drive_until(&mut engine_b, Some(0.0), |o| o < 0.1, 200);

        assert!(
            absent_steps < closed_steps,
            "decay ({absent_steps}) must beat attack ({closed_steps})"
        );
    }
}
