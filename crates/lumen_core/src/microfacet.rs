//! Microfacet terms for the Cook-Torrance BRDF.
//!
//! Each term is a pure function of the cosines it documents so it can be
//! checked in isolation. Degenerate inputs yield 0 instead of NaN.

use crate::material::Color;
use lumen_math::Vec3;
use std::f32::consts::PI;

/// GGX/Trowbridge-Reitz normal distribution `D(h)`.
///
/// `alpha` is the squared perceptual roughness.
#[inline]
pub fn ggx_distribution(n_dot_h: f32, alpha: f32) -> f32 {
    if !(n_dot_h > 0.0) {
        return 0.0;
    }
    let a2 = alpha * alpha;
    let denom = n_dot_h * n_dot_h * (a2 - 1.0) + 1.0;
    let denom = PI * denom * denom;
    if !(denom > 0.0) || !denom.is_finite() {
        return 0.0;
    }
    a2 / denom
}

/// Smith masking term for one direction, `G1 = 2 / (1 + sqrt(1 + a^2 tan^2))`.
///
/// Exactly 1 at normal incidence and 0 for directions below the surface.
#[inline]
pub fn smith_g1(cos_theta: f32, alpha: f32) -> f32 {
    if !(cos_theta > 0.0) {
        return 0.0;
    }
    let cos2 = (cos_theta * cos_theta).min(1.0);
    let tan2 = (1.0 - cos2) / cos2;
    2.0 / (1.0 + (1.0 + alpha * alpha * tan2).sqrt())
}

/// Uncorrelated Smith masking-shadowing, `G1(l) * G1(v)`.
#[inline]
pub fn smith_g(n_dot_l: f32, n_dot_v: f32, alpha: f32) -> f32 {
    smith_g1(n_dot_l, alpha) * smith_g1(n_dot_v, alpha)
}

/// Schlick weight, `(1 - cos_theta)^5` with the cosine clamped to `[0, 1]`.
#[inline]
pub fn schlick_weight(cos_theta: f32) -> f32 {
    let x = 1.0 - cos_theta.clamp(0.0, 1.0);
    let x2 = x * x;
    x2 * x2 * x
}

/// Schlick Fresnel approximation, `F0 + (1 - F0) (1 - v.h)^5`.
#[inline]
pub fn fresnel_schlick(f0: Color, v_dot_h: f32) -> Color {
    f0 + (Color::ONE - f0) * schlick_weight(v_dot_h)
}

/// Reflectance at normal incidence: blends the achromatic dielectric
/// `specular` toward the colored conductor `base_color` by `metallic`.
#[inline]
pub fn f0_blend(base_color: Color, specular: f32, metallic: f32) -> Color {
    Color::splat(specular * (1.0 - metallic)) + base_color * metallic
}

/// Build an orthonormal basis `(tangent, bitangent)` around a unit normal.
pub fn build_orthonormal_basis(n: Vec3) -> (Vec3, Vec3) {
    let sign = if n.z >= 0.0 { 1.0 } else { -1.0 };
    let a = -1.0 / (sign + n.z);
    let b = n.x * n.y * a;

    let tangent = Vec3::new(1.0 + sign * n.x * n.x * a, sign * b, -sign * n.x);
    let bitangent = Vec3::new(b, sign + n.y * n.y * a, -n.y);

    (tangent, bitangent)
}
