//! End-to-end scenario suite
//!
//! Drives the full pipeline - gallery, smoother, shared control, hero
//! policy, ornament animation - through the behaviors the system promises:
//! one hero change per open/close cycle, the contracted/expanding/hero/
//! fly-out phase walk, the gallery cap, and detector failure degradation.
