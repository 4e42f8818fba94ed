//! Hit records produced by primitive and scene intersection.

use lumen_math::{Point3, Ray, Vec3, VectorExt};

/// Where a ray meets a single primitive.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SurfaceHit {
    /// Parameter t where the intersection occurs
    pub t: f32,
    /// Point of intersection
    pub point: Point3,
    /// Outward unit normal at the intersection
    pub normal: Vec3,
}

/// Closest hit found by [`Scene::intersect`](crate::Scene::intersect).
///
/// The primitive and material are referenced by index into the scene's
/// arenas; resolve them with [`Scene::primitive_for`](crate::Scene::primitive_for)
/// and [`Scene::material_for`](crate::Scene::material_for).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Intersection {
    /// Parameter t where the intersection occurs
    pub t: f32,
    /// Point of intersection
    pub point: Point3,
    /// Outward unit normal. For a ray starting inside a sphere this still
    /// points away from the center; use [`Intersection::face_forward`] for a
    /// normal that opposes the ray.
    pub normal: Vec3,
    /// Index of the hit primitive
    pub primitive_index: usize,
    /// Index of the primitive's material
    pub material_index: usize,
}

impl Intersection {
    pub(crate) fn from_surface(hit: SurfaceHit, primitive_index: usize, material_index: usize) -> Self {
        Self {
            t: hit.t,
            point: hit.point,
            normal: hit.normal,
            primitive_index,
            material_index,
        }
    }

    /// Normal oriented against the ray, and whether the ray hit the front
    /// (outside) face.
    pub fn face_forward(&self, ray: &Ray) -> (Vec3, bool) {
        // If the ray and normal point in the same direction, we're inside
        let front_face = ray.direction().dot(self.normal) < 0.0;
        let normal = if front_face { self.normal } else { -self.normal };
        (normal, front_face)
    }

    /// Direction from the hit point back toward the ray origin.
    pub fn outgoing(&self, ray: &Ray) -> Vec3 {
        -ray.direction().safe_normalize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hit_with_normal(normal: Vec3) -> Intersection {
        Intersection {
            t: 1.0,
            point: Point3::new(0.0, 0.0, -1.0),
            normal,
            primitive_index: 0,
            material_index: 0,
        }
    }

    #[test]
    fn test_face_forward_front() {
        let hit = hit_with_normal(Vec3::Z);
        let ray = Ray::new(Point3::ORIGIN, Vec3::NEG_Z);
        let (n, front) = hit.face_forward(&ray);
        assert!(front);
        assert_eq!(n, Vec3::Z);
    }

    #[test]
    fn test_face_forward_back() {
        let hit = hit_with_normal(Vec3::NEG_Z);
        let ray = Ray::new(Point3::ORIGIN, Vec3::NEG_Z);
        let (n, front) = hit.face_forward(&ray);
        assert!(!front);
        assert_eq!(n, Vec3::Z);
    }

    #[test]
    fn test_outgoing() {
        let hit = hit_with_normal(Vec3::Z);
        let ray = Ray::new(Point3::ORIGIN, Vec3::new(0.0, 0.0, -3.0));
        assert_eq!(hit.outgoing(&ray), Vec3::Z);
    }

    #[test]
    fn test_outgoing_tiny_direction_is_zero() {
        let hit = hit_with_normal(Vec3::Z);
        let ray = Ray::new(Point3::ORIGIN, Vec3::new(0.0, 0.0, -1e-8));
        assert_eq!(hit.outgoing(&ray), Vec3::ZERO);
    }
}
