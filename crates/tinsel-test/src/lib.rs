//! TINSEL Test Harness - Gesture simulation and scenario validation
//!
//! This crate provides:
//! - Synthetic hands with exact target openness
//! - Scripted and noisy gesture sources
//! - Open/close cycle drivers for the full engine
//! - End-to-end scenario tests

pub mod cycle;
pub mod gesture;
pub mod integration;

pub use cycle::*;
pub use gesture::*;
