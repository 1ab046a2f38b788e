//! User-facing status derivation
//!
//! Maps detector lifecycle and the current control value to the banner the
//! host overlay displays.

use tinsel_vision::DetectorStatus;

use crate::ControlState;

/// Openness below which the tree reads as contracted.
pub const BANNER_CONTRACTED_BELOW: f32 = 0.2;

/// Openness above which the tree reads as fully open.
pub const BANNER_OPEN_ABOVE: f32 = 0.8;

/// What the overlay should say right now.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusBanner {
    /// Detector still initializing.
    StartingCamera,
    /// Detector initialization failed; the feature is permanently degraded.
    CameraUnavailable,
    /// Camera running, no hand in view.
    ShowHand,
    /// Hand present, tree contracted.
    Contracted,
    /// Hand present, tree opening; percentage of full openness.
    Opening { percent: u8 },
    /// Hand fully open, hero moment.
    FullyOpen,
}

/// Derive the banner for the current frame.
pub fn status_banner(detector: DetectorStatus, control: &ControlState) -> StatusBanner {
    match detector {
        DetectorStatus::Initializing => return StatusBanner::StartingCamera,
        DetectorStatus::Failed => return StatusBanner::CameraUnavailable,
        DetectorStatus::Ready => {}
    }

    if !control.hand_present {
        return StatusBanner::ShowHand;
    }

    if control.openness < BANNER_CONTRACTED_BELOW {
        StatusBanner::Contracted
    } else if control.openness <= BANNER_OPEN_ABOVE {
        StatusBanner::Opening {
            percent: (control.openness * 100.0).round() as u8,
        }
    } else {
        StatusBanner::FullyOpen
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn present(openness: f32) -> ControlState {
        ControlState {
            openness,
            hand_present: true,
        }
    }

    #[test]
    fn test_banner_follows_detector_lifecycle() {
        let state = ControlState::default();
        assert_eq!(
            status_banner(DetectorStatus::Initializing, &state),
            StatusBanner::StartingCamera
        );
        assert_eq!(
            status_banner(DetectorStatus::Failed, &state),
            StatusBanner::CameraUnavailable
        );
        assert_eq!(
            status_banner(DetectorStatus::Ready, &state),
            StatusBanner::ShowHand
        );
    }

    #[test]
    fn test_banner_openness_bands() {
        assert_eq!(
            status_banner(DetectorStatus::Ready, &present(0.1)),
            StatusBanner::Contracted
        );
        assert_eq!(
            status_banner(DetectorStatus::Ready, &present(0.5)),
            StatusBanner::Opening { percent: 50 }
        );
        assert_eq!(
            status_banner(DetectorStatus::Ready, &present(0.95)),
            StatusBanner::FullyOpen
        );
    }
}
