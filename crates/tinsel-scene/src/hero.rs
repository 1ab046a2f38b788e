//! Hero selection policy
//!
//! Exactly one hero change per full open→close cycle: the trigger fires when
//! the shared openness drops below the contraction threshold, then stays
//! latched until the hand re-opens past a higher re-arm threshold. The
//! hysteresis gap keeps a single contraction from firing twice.
//!
//! The trigger is evaluated against the shared smoothed value, not the
//! per-ornament copies; a one-frame disagreement with individual phase
//! transitions near the band edge is intended behavior.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Openness below which a contraction fires the cycle trigger.
pub const CYCLE_BELOW: f32 = 0.10;

/// Openness above which the trigger re-arms.
pub const REARM_ABOVE: f32 = 0.20;

/// Debounced random hero cycling.
#[derive(Debug)]
pub struct HeroSelector {
    index: usize,
    has_cycled: bool,
    rng: StdRng,
}

impl HeroSelector {
    /// Entropy-seeded selector.
    pub fn new() -> Self {
        Self {
            index: 0,
            has_cycled: false,
            rng: StdRng::from_entropy(),
        }
    }

    /// Deterministic selector for tests.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            index: 0,
            has_cycled: false,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Current hero index. Always 0 for empty or single-member collections
    /// once [`clamp`](Self::clamp) has run.
    #[inline]
    pub fn index(&self) -> usize {
        self.index
    }

    /// Defensive reset when the collection shrank beneath the index. The
    /// animation controller has no validity check of its own, so this runs
    /// before it reads the index each frame.
    pub fn clamp(&mut self, collection_len: usize) {
        if self.index >= collection_len {
            self.index = 0;
        }
    }

    /// Evaluate the transition rule once per rendered frame against the
    /// shared smoothed openness. Returns the new index when a cycle fired.
    pub fn observe(&mut self, shared_openness: f32, collection_len: usize) -> Option<usize> {
        if shared_openness < CYCLE_BELOW && !self.has_cycled {
            self.has_cycled = true;
            self.index = self.pick_next(collection_len);
            return Some(self.index);
        }
        if shared_openness > REARM_ABOVE {
            self.has_cycled = false;
        }
        None
    }

    /// Uniform pick excluding the current index: on a self-match, advance
    /// once modulo the collection size.
    fn pick_next(&mut self, collection_len: usize) -> usize {
        if collection_len <= 1 {
            return 0;
        }
        let mut next = self.rng.gen_range(0..collection_len);
        if next == self.index {
            next = (next + 1) % collection_len;
        }
        next
    }
}

impl Default for HeroSelector {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exactly_one_change_per_cycle() {
        let mut selector = HeroSelector::with_seed(42);
        let len = 7;
        let mut prev = selector.index();

        for cycle in 0..1000 {
            // Contraction: several frames below the trigger
            let mut fired = 0;
            for _ in 0..5 {
                if let Some(next) = selector.observe(0.05, len) {
                    assert_ne!(next, prev, "cycle {cycle}: hero repeated");
                    prev = next;
                    fired += 1;
                }
            }
            assert_eq!(fired, 1, "cycle {cycle}: expected exactly one change");

            // Open back up past the re-arm threshold
            for _ in 0..5 {
                assert!(selector.observe(0.5, len).is_none());
            }
        }
    }

    #[test]
    fn test_dead_band_does_not_rearm() {
        let mut selector = HeroSelector::with_seed(7);
        assert!(selector.observe(0.05, 4).is_some());

        // Hovering between the trigger and re-arm thresholds keeps the
        // latch set
        for _ in 0..10 {
            assert!(selector.observe(0.15, 4).is_none());
        }
        assert!(selector.observe(0.05, 4).is_none());

        // Only crossing the re-arm threshold enables the next cycle
        selector.observe(0.25, 4);
        assert!(selector.observe(0.05, 4).is_some());
    }

    #[test]
    fn test_single_member_collection_pins_zero() {
        let mut selector = HeroSelector::with_seed(3);
        assert_eq!(selector.observe(0.0, 1), Some(0));
        selector.observe(0.5, 1);
        assert_eq!(selector.observe(0.0, 1), Some(0));
    }

    #[test]
    fn test_empty_collection_pins_zero() {
        let mut selector = HeroSelector::with_seed(3);
        assert_eq!(selector.observe(0.0, 0), Some(0));
        assert_eq!(selector.index(), 0);
    }

    #[test]
    fn test_clamp_after_shrink() {
        let mut selector = HeroSelector::with_seed(11);
        // Force the index away from 0
        while selector.index() == 0 {
            selector.observe(0.05, 10);
            selector.observe(0.5, 10);
        }

        let idx = selector.index();
        selector.clamp(idx); // collection shrank to exactly idx members
        assert_eq!(selector.index(), 0);

        selector.clamp(0);
        assert_eq!(selector.index(), 0);
    }

    #[test]
    fn test_pick_distribution_covers_collection() {
        let mut selector = HeroSelector::with_seed(99);
        let len = 5;
        let mut seen = [false; 5];

        for _ in 0..200 {
            selector.observe(0.05, len);
            seen[selector.index()] = true;
            selector.observe(0.5, len);
        }
        assert!(seen.iter().all(|&s| s), "all indices should be reachable");
    }
}
