//! TINSEL Runtime - The control loops
//!
//! Two independent periodic loops, cooperatively scheduled by the host:
//!
//! - the **detection loop** runs at the camera's cadence, skip-if-stale,
//!   and is the sole writer of the shared control value
//! - the **render loop** runs at display refresh, reads the shared value,
//!   and evaluates every per-object animation
//!
//! The shared value is a single whole-value replacement written by one loop
//! and read by the other; readers tolerate staleness of at most one frame.

pub mod control;
pub mod engine;
pub mod status;

pub use control::*;
pub use engine::*;
pub use status::*;
