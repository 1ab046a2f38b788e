//! TINSEL Core - Fundamental types and primitives
//!
//! This crate defines the core types used throughout the TINSEL pipeline:
//! - Identifiers (PhotoId)
//! - Frame timestamps (FrameTime)
//! - 3D math for the animation controller (Vec3, Quat)
//! - Error types

pub mod error;
pub mod id;
pub mod math;
pub mod time;

pub use error::*;
pub use id::*;
pub use math::*;
pub use time::*;
