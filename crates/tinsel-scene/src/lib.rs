//! TINSEL Scene - The ornament tree as state
//!
//! Everything between the control signal and the renderer: the capped photo
//! gallery, the spiral layout, the per-ornament multi-phase animation
//! controller, the debounced hero selection policy, and the tree-wide decor
//! (spin, top star, light cloud). The renderer reads transforms from here;
//! nothing in this crate draws.

pub mod decor;
pub mod gallery;
pub mod hero;
pub mod layout;
pub mod ornament;
pub mod tree;

pub use decor::*;
pub use gallery::*;
pub use hero::*;
pub use layout::*;
pub use ornament::*;
pub use tree::*;
