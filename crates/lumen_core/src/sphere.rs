//! Sphere primitive for ray tracing.

use crate::config::{MAX_RADIUS, MIN_RADIUS};
use crate::intersection::SurfaceHit;
use crate::validate;
use lumen_math::{Interval, Point3, Ray, VectorExt, MIN_DIRECTION_LENGTH_SQUARED};

/// A sphere primitive.
///
/// Parameters are validated once at construction and never change.
#[derive(Debug, Clone, PartialEq)]
pub struct Sphere {
    center: Point3,
    radius: f32,
    material_index: usize,
}

impl Sphere {
    /// Create a new sphere.
    ///
    /// Non-finite center coordinates and a radius outside
    /// `[MIN_RADIUS, MAX_RADIUS]` are clamped with a warning.
    pub fn new(center: Point3, radius: f32, material_index: usize) -> Self {
        let center = validate::finite_point("sphere center", center);
        let radius = validate::clamp_scalar("sphere radius", radius, MIN_RADIUS, MAX_RADIUS, MIN_RADIUS);

        Self {
            center,
            radius,
            material_index,
        }
    }

    #[inline]
    pub fn center(&self) -> Point3 {
        self.center
    }

    #[inline]
    pub fn radius(&self) -> f32 {
        self.radius
    }

    /// Index of this sphere's material in the owning scene.
    #[inline]
    pub fn material_index(&self) -> usize {
        self.material_index
    }

    /// True if the geometry is usable: finite center and a radius in
    /// `(0, MAX_RADIUS]`.
    pub fn is_valid(&self) -> bool {
        self.center.is_finite() && self.radius > 0.0 && self.radius <= MAX_RADIUS
    }

    /// Surface area.
    pub fn area(&self) -> f32 {
        4.0 * std::f32::consts::PI * self.radius * self.radius
    }

    /// Intersect a ray with the sphere, accepting only roots strictly inside
    /// `ray_t`.
    ///
    /// Substituting the ray into `|P - C|^2 = r^2` gives a quadratic in t.
    /// The near root wins when it is in range; otherwise the far root is
    /// tried, which is the exit point for a ray starting inside the sphere.
    /// The returned normal always points away from the center.
    pub fn intersect(&self, ray: &Ray, ray_t: Interval) -> Option<SurfaceHit> {
        let direction = ray.direction();
        let a = direction.length_squared();
        if !(a > MIN_DIRECTION_LENGTH_SQUARED) || !a.is_finite() {
            return None;
        }

        // Half-b form: b = -2h, so the discriminant is 4 * (h^2 - a*c).
        let oc = self.center - ray.origin();
        let h = direction.dot(oc);
        let c = oc.length_squared() - self.radius * self.radius;

        let discriminant = h * h - a * c;
        if !(discriminant >= 0.0) {
            return None;
        }

        let sqrtd = discriminant.sqrt();

        // Find the nearest root in the acceptable range
        let mut root = (h - sqrtd) / a;
        if !ray_t.surrounds(root) {
            root = (h + sqrtd) / a;
            if !ray_t.surrounds(root) {
                return None;
            }
        }

        let point = ray.at(root);
        let normal = (point - self.center).safe_normalize();

        Some(SurfaceHit {
            t: root,
            point,
            normal,
        })
    }
}
