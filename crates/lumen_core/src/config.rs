//! Trace configuration and construction-time limits.

use serde::{Deserialize, Serialize};

/// Smallest radius a sphere is clamped to.
pub const MIN_RADIUS: f32 = 1e-4;
/// Largest radius a sphere is clamped to.
pub const MAX_RADIUS: f32 = 1000.0;
/// Coordinates are clamped into `[-MAX_COORDINATE, MAX_COORDINATE]` when infinite.
pub const MAX_COORDINATE: f32 = 1e6;
/// Roughness floor; below this the GGX lobe degenerates numerically.
pub const MIN_ROUGHNESS: f32 = 0.01;
/// Dielectric reflectance at normal incidence used when none is given.
pub const DEFAULT_SPECULAR: f32 = 0.04;
/// Smallest width or height of an area light.
pub const MIN_LIGHT_EXTENT: f32 = 1e-4;
/// Base seed for area lights that are not given one explicitly.
pub const DEFAULT_AREA_LIGHT_SEED: u64 = 0x5eed_11c4_7a3e_0001;

/// Tunables for scene traversal and shadow testing.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TraceConfig {
    /// Ray parameters at or below this are rejected as self-intersections.
    pub hit_epsilon: f32,
    /// Shadow rays start this far along the light direction, and the
    /// occlusion window stops this far short of the light.
    pub shadow_bias: f32,
    /// Emit per-primitive debug diagnostics on primary traversals.
    pub verbose: bool,
}

impl Default for TraceConfig {
    fn default() -> Self {
        Self {
            hit_epsilon: 1e-6,
            shadow_bias: 1e-3,
            verbose: false,
        }
    }
}

impl TraceConfig {
    /// Create the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method to set the hit epsilon.
    pub fn with_hit_epsilon(mut self, hit_epsilon: f32) -> Self {
        self.hit_epsilon = tolerance("hit epsilon", hit_epsilon, self.hit_epsilon);
        self
    }

    /// Builder method to set the shadow bias.
    pub fn with_shadow_bias(mut self, shadow_bias: f32) -> Self {
        self.shadow_bias = tolerance("shadow bias", shadow_bias, self.shadow_bias);
        self
    }

    /// Builder method to toggle verbose diagnostics.
    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    /// Replace negative or non-finite tolerances with their defaults.
    ///
    /// The fields are public and deserialized as-is, so a scene runs every
    /// config through this before using it.
    pub fn sanitized(self) -> Self {
        let defaults = Self::default();
        Self {
            hit_epsilon: tolerance("hit epsilon", self.hit_epsilon, defaults.hit_epsilon),
            shadow_bias: tolerance("shadow bias", self.shadow_bias, defaults.shadow_bias),
            verbose: self.verbose,
        }
    }
}

fn tolerance(name: &str, value: f32, default: f32) -> f32 {
    if value.is_finite() && value >= 0.0 {
        value
    } else {
        log::warn!("{} {} is negative or not finite, using {}", name, value, default);
        default
    }
}
