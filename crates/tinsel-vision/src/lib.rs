//! TINSEL Vision - Hand signal extraction
//!
//! Turns per-frame hand landmark detections into a stable openness control
//! signal. The landmark detector itself is an external collaborator invoked
//! as a black box; this crate owns everything downstream of it:
//!
//! - the 21-point hand landmark model
//! - the palm-scale-normalized openness estimator
//! - the asymmetric attack/decay signal smoother
//! - the detector configuration and per-frame input envelope
//!
//! Absence of a hand is not an error here - it is the decay path of the
//! smoother.

pub mod detector;
pub mod hand;
pub mod openness;
pub mod smoothing;

pub use detector::*;
pub use hand::*;
pub use openness::*;
pub use smoothing::*;
