//! Clamping of construction-time parameters.
//!
//! Out-of-range input is never fatal: every helper here returns the nearest
//! valid value and reports the adjustment through `log::warn!`.

use crate::config::MAX_COORDINATE;
use crate::material::Color;
use lumen_math::{Point3, Vec3, VectorExt};

/// Clamp `value` into `[min, max]`. NaN becomes `fallback`.
pub(crate) fn clamp_scalar(name: &str, value: f32, min: f32, max: f32, fallback: f32) -> f32 {
    if value.is_nan() {
        log::warn!("{} is NaN, using {}", name, fallback);
        return fallback;
    }
    let clamped = value.clamp(min, max);
    if clamped != value {
        log::warn!("{} {} out of range [{}, {}], clamped to {}", name, value, min, max, clamped);
    }
    clamped
}

/// Clamp every component of a color into `[0, 1]`. NaN components become 0.
pub(crate) fn clamp_color(name: &str, color: Color) -> Color {
    let fixed = Color::new(
        unit_component(color.x),
        unit_component(color.y),
        unit_component(color.z),
    );
    if fixed != color {
        log::warn!("{} {:?} outside [0, 1], clamped to {:?}", name, color, fixed);
    }
    fixed
}

/// Replace non-finite coordinates: NaN becomes 0, infinities become
/// `±MAX_COORDINATE`.
pub(crate) fn finite_point(name: &str, point: Point3) -> Point3 {
    if point.is_finite() {
        return point;
    }
    let fixed = Point3::new(
        finite_component(point.x),
        finite_component(point.y),
        finite_component(point.z),
    );
    log::warn!("{} {:?} is not finite, replaced with {:?}", name, point, fixed);
    fixed
}

/// Normalize a direction, falling back when it is degenerate or non-finite.
pub(crate) fn unit_direction(name: &str, direction: Vec3, fallback: Vec3) -> Vec3 {
    let unit = direction.safe_normalize();
    if unit == Vec3::ZERO {
        log::warn!("{} {:?} is degenerate, using {:?}", name, direction, fallback);
        return fallback;
    }
    unit
}

#[inline]
fn unit_component(x: f32) -> f32 {
    if x.is_nan() {
        0.0
    } else {
        x.clamp(0.0, 1.0)
    }
}

#[inline]
fn finite_component(x: f32) -> f32 {
    if x.is_nan() {
        0.0
    } else {
        x.clamp(-MAX_COORDINATE, MAX_COORDINATE)
    }
}
