//! Direction helpers layered on top of `glam::Vec3`.
//!
//! glam's own `normalize` produces NaN for a zero vector and its
//! `normalize_or_zero` uses a different cutoff. Everything in Lumen that
//! normalizes a direction goes through [`VectorExt::safe_normalize`] so the
//! zero-vector behavior is the same everywhere.

use glam::Vec3;

/// Vectors shorter than this normalize to zero.
pub const NORMALIZE_EPSILON: f32 = 1e-6;

/// Allowed deviation from length 1 for a vector to count as normalized.
pub const UNIT_TOLERANCE: f32 = 1e-6;

/// Extra operations Lumen needs on `Vec3`.
pub trait VectorExt {
    /// Normalize, returning the zero vector when the length is below
    /// [`NORMALIZE_EPSILON`].
    fn safe_normalize(self) -> Self;

    /// True if the length is within `tolerance` of 1.
    fn is_normalized_within(self, tolerance: f32) -> bool;

    /// True if the length is within [`UNIT_TOLERANCE`] of 1.
    fn is_unit(self) -> bool;
}

impl VectorExt for Vec3 {
    #[inline]
    fn safe_normalize(self) -> Vec3 {
        let len = self.length();
        if !len.is_finite() || len < NORMALIZE_EPSILON {
            return Vec3::ZERO;
        }
        self / len
    }

    #[inline]
    fn is_normalized_within(self, tolerance: f32) -> bool {
        (self.length() - 1.0).abs() <= tolerance
    }

    #[inline]
    fn is_unit(self) -> bool {
        self.is_normalized_within(UNIT_TOLERANCE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_safe_normalize_length() {
        let vectors = [
            Vec3::new(3.0, 4.0, 0.0),
            Vec3::new(-0.001, 0.002, 0.0005),
            Vec3::new(1e3, -2e3, 5e2),
            Vec3::new(0.0, 0.0, -7.0),
        ];
        for v in vectors {
            let n = v.safe_normalize();
            assert!((n.length() - 1.0).abs() < 1e-6, "{:?} -> {:?}", v, n);
        }
    }

    #[test]
    fn test_safe_normalize_zero() {
        assert_eq!(Vec3::ZERO.safe_normalize(), Vec3::ZERO);
        assert_eq!(Vec3::splat(1e-8).safe_normalize(), Vec3::ZERO);
    }

    #[test]
    fn test_safe_normalize_non_finite() {
        assert_eq!(Vec3::new(f32::NAN, 0.0, 0.0).safe_normalize(), Vec3::ZERO);
        assert_eq!(Vec3::new(f32::INFINITY, 0.0, 0.0).safe_normalize(), Vec3::ZERO);
    }

    #[test]
    fn test_is_unit() {
        assert!(Vec3::X.is_unit());
        assert!(Vec3::new(1.0, 1.0, 0.0).safe_normalize().is_unit());
        assert!(!Vec3::new(1.0, 1.0, 0.0).is_unit());
        assert!(!Vec3::ZERO.is_unit());
    }

    #[test]
    fn test_cross_orthogonality() {
        let pairs = [
            (Vec3::X, Vec3::Y),
            (
                Vec3::new(1.0, 2.0, 3.0).safe_normalize(),
                Vec3::new(-2.0, 0.5, 1.0).safe_normalize(),
            ),
            (
                Vec3::new(0.3, -0.9, 0.1).safe_normalize(),
                Vec3::new(0.7, 0.7, -0.2).safe_normalize(),
            ),
        ];
        for (a, b) in pairs {
            let c = a.cross(b);
            assert!(c.dot(a).abs() < 1e-5);
            assert!(c.dot(b).abs() < 1e-5);

            // |a x b| = |a||b| sin(theta)
            let cos_theta = a.dot(b) / (a.length() * b.length());
            let sin_theta = (1.0 - cos_theta * cos_theta).max(0.0).sqrt();
            assert!((c.length() - a.length() * b.length() * sin_theta).abs() < 1e-5);
        }
    }

    #[test]
    fn test_cross_properties() {
        let a = Vec3::new(1.0, 2.0, 3.0);
        let b = Vec3::new(4.0, 5.0, 6.0);
        assert_eq!(a.cross(a), Vec3::ZERO);
        assert_eq!(a.cross(b), -b.cross(a));
        // Right-hand rule
        assert_eq!(Vec3::X.cross(Vec3::Y), Vec3::Z);
    }

    #[test]
    fn test_dot_properties() {
        let a = Vec3::new(1.0, -2.0, 0.5);
        let b = Vec3::new(3.0, 1.0, -4.0);
        let c = Vec3::new(-1.0, 0.25, 2.0);
        assert_eq!(a.dot(b), b.dot(a));
        assert!((a.dot(b + c) - (a.dot(b) + a.dot(c))).abs() < 1e-5);
    }

    #[test]
    fn test_is_finite() {
        assert!(Vec3::new(1.0, 2.0, 3.0).is_finite());
        assert!(!Vec3::new(f32::NAN, 0.0, 0.0).is_finite());
        assert!(!Vec3::new(0.0, f32::NEG_INFINITY, 0.0).is_finite());
    }
}
