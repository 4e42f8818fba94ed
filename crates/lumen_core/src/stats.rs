//! Traversal counters.
//!
//! Statistics are never stored on the scene. Callers that want them pass an
//! accumulator to the `*_with_stats` queries; the plain queries skip all
//! bookkeeping.

use std::ops::AddAssign;

/// Counters accumulated over scene queries.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TraversalStats {
    /// Primary rays traced
    pub rays: u64,
    /// Ray-primitive intersection tests performed (primary and shadow)
    pub primitive_tests: u64,
    /// Primary rays that found a hit
    pub hits: u64,
    /// Primitive hits discarded because their material index was dangling
    pub skipped_primitives: u64,
    /// Shadow rays traced
    pub shadow_rays: u64,
    /// Shadow rays that found an occluder
    pub occluded: u64,
}

impl TraversalStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold another accumulator into this one.
    pub fn merge(&mut self, other: &TraversalStats) {
        self.rays += other.rays;
        self.primitive_tests += other.primitive_tests;
        self.hits += other.hits;
        self.skipped_primitives += other.skipped_primitives;
        self.shadow_rays += other.shadow_rays;
        self.occluded += other.occluded;
    }

    /// Fraction of primary rays that hit something.
    pub fn hit_rate(&self) -> f64 {
        if self.rays == 0 {
            0.0
        } else {
            self.hits as f64 / self.rays as f64
        }
    }

    /// Fraction of shadow rays that were blocked.
    pub fn occlusion_rate(&self) -> f64 {
        if self.shadow_rays == 0 {
            0.0
        } else {
            self.occluded as f64 / self.shadow_rays as f64
        }
    }

    /// Reset every counter to zero.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

impl AddAssign<&TraversalStats> for TraversalStats {
    fn add_assign(&mut self, rhs: &TraversalStats) {
        self.merge(rhs);
    }
}
