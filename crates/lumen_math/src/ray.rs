use crate::{Point3, Vec3, VectorExt};

/// Directions with a squared length at or below this are degenerate.
pub const MIN_DIRECTION_LENGTH_SQUARED: f32 = 1e-12;

/// A ray in 3D space with an origin and a direction.
///
/// Rays represent the half-line `P(t) = origin + t * direction` for `t >= 0`.
/// The direction does not have to be normalized, but it has to be finite and
/// non-degenerate for the ray to be traced (see [`Ray::is_valid`]).
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Ray {
    pub origin: Point3,
    pub direction: Vec3,
}

impl Ray {
    /// Create a new ray.
    pub fn new(origin: Point3, direction: Vec3) -> Self {
        Self { origin, direction }
    }

    /// Get the origin point of the ray.
    ///
    /// Note: Since `origin` is public, you can also access it directly via `ray.origin`.
    #[inline]
    pub fn origin(&self) -> Point3 {
        self.origin
    }

    /// Get the direction vector of the ray.
    ///
    /// Note: Since `direction` is public, you can also access it directly via `ray.direction`.
    #[inline]
    pub fn direction(&self) -> Vec3 {
        self.direction
    }

    /// Get the point along the ray at parameter t.
    ///
    /// Returns: origin + t * direction
    #[inline]
    pub fn at(&self, t: f32) -> Point3 {
        self.origin + self.direction * t
    }

    /// True if the ray can be traced: finite origin and direction, and a
    /// direction that is not degenerate.
    pub fn is_valid(&self) -> bool {
        self.origin.is_finite()
            && self.direction.is_finite()
            && self.direction.length_squared() > MIN_DIRECTION_LENGTH_SQUARED
    }

    /// The same ray with a unit-length direction.
    ///
    /// A degenerate direction normalizes to zero, which keeps the ray invalid.
    pub fn normalized(&self) -> Self {
        Self::new(self.origin, self.direction.safe_normalize())
    }
}

impl Default for Ray {
    fn default() -> Self {
        Self {
            origin: Point3::ORIGIN,
            direction: Vec3::NEG_Z,
        }
    }
}
