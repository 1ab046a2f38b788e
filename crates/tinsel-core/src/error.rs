//! Error types for TINSEL

use thiserror::Error;

/// Core TINSEL errors
#[derive(Error, Debug)]
pub enum TinselError {
    // Detector errors
    #[error("detector initialization failed: {0}")]
    DetectorInit(String),

    #[error("camera not ready")]
    CameraNotReady,

    // Landmark errors
    #[error("malformed landmark set: expected {expected} points, got {actual}")]
    MalformedLandmarks { expected: usize, actual: usize },
}

/// Result type for TINSEL operations
pub type TinselResult<T> = Result<T, TinselError>;
