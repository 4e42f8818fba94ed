//! Surface reflectance models.
//!
//! Materials form a closed set, dispatched by `match` in [`Material`]. The
//! BRDF value excludes the cosine term; the shading loop multiplies by
//! `max(0, n.l)` itself.

use crate::config::{DEFAULT_SPECULAR, MIN_ROUGHNESS};
use crate::microfacet::{f0_blend, fresnel_schlick, ggx_distribution, smith_g};
use crate::validate;
use lumen_math::{Vec3, VectorExt};

/// Color type alias (RGB values typically 0-1)
pub type Color = Vec3;

/// Discriminant of a [`Material`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MaterialKind {
    Lambert,
    CookTorrance,
}

/// Lambertian (diffuse) material.
#[derive(Debug, Clone, PartialEq)]
pub struct Lambert {
    albedo: Color,
}

impl Lambert {
    /// Create a new Lambert material; albedo components are clamped to `[0, 1]`.
    pub fn new(albedo: Color) -> Self {
        Self {
            albedo: validate::clamp_color("lambert albedo", albedo),
        }
    }

    pub fn albedo(&self) -> Color {
        self.albedo
    }

    /// Reflectance toward any direction pair: the albedo itself.
    #[inline]
    pub fn evaluate_brdf(&self, _wi: Vec3, _wo: Vec3, _normal: Vec3) -> Color {
        self.albedo
    }
}

/// Cook-Torrance microfacet material: GGX distribution, uncorrelated Smith
/// masking-shadowing and Schlick Fresnel.
#[derive(Debug, Clone, PartialEq)]
pub struct CookTorrance {
    /// Base color (F0 for metals)
    base_color: Color,

    /// Roughness: 0.01 = glossy, 1 = rough
    roughness: f32,

    /// Metallic: 0 = dielectric, 1 = conductor
    metallic: f32,

    /// Specular: reflectance at normal incidence for the dielectric part
    specular: f32,
}

impl Default for CookTorrance {
    fn default() -> Self {
        Self {
            base_color: Color::new(0.8, 0.8, 0.8),
            roughness: 0.5,
            metallic: 0.0,
            specular: DEFAULT_SPECULAR,
        }
    }
}

impl CookTorrance {
    /// Create a new Cook-Torrance material with all parameters clamped into
    /// their valid ranges.
    pub fn new(base_color: Color, roughness: f32, metallic: f32, specular: f32) -> Self {
        Self::default()
            .with_base_color(base_color)
            .with_roughness(roughness)
            .with_metallic(metallic)
            .with_specular(specular)
    }

    /// Create a metallic material.
    pub fn metal(color: Color, roughness: f32) -> Self {
        Self::new(color, roughness, 1.0, DEFAULT_SPECULAR)
    }

    /// Create a glossy dielectric (plastic-like) material.
    pub fn dielectric(color: Color, roughness: f32) -> Self {
        Self::new(color, roughness, 0.0, DEFAULT_SPECULAR)
    }

    /// Builder method to set base color.
    pub fn with_base_color(mut self, color: Color) -> Self {
        self.base_color = validate::clamp_color("cook-torrance base color", color);
        self
    }

    /// Builder method to set roughness.
    pub fn with_roughness(mut self, roughness: f32) -> Self {
        self.roughness = validate::clamp_scalar("roughness", roughness, MIN_ROUGHNESS, 1.0, 0.5);
        self
    }

    /// Builder method to set metallic.
    pub fn with_metallic(mut self, metallic: f32) -> Self {
        self.metallic = validate::clamp_scalar("metallic", metallic, 0.0, 1.0, 0.0);
        self
    }

    /// Builder method to set specular.
    pub fn with_specular(mut self, specular: f32) -> Self {
        self.specular = validate::clamp_scalar("specular", specular, 0.0, 1.0, DEFAULT_SPECULAR);
        self
    }

    pub fn base_color(&self) -> Color {
        self.base_color
    }

    pub fn roughness(&self) -> f32 {
        self.roughness
    }

    pub fn metallic(&self) -> f32 {
        self.metallic
    }

    pub fn specular(&self) -> f32 {
        self.specular
    }

    /// GGX alpha, the square of the perceptual roughness.
    #[inline]
    pub fn alpha(&self) -> f32 {
        self.roughness * self.roughness
    }

    /// Reflectance at normal incidence.
    #[inline]
    pub fn f0(&self) -> Color {
        f0_blend(self.base_color, self.specular, self.metallic)
    }

    /// Evaluate `D * G * F / (4 (n.l) (n.v))`.
    ///
    /// `wi` points toward the light, `wo` toward the viewer; all three
    /// vectors are unit length. Light or viewer at or below the horizon
    /// gives zero.
    pub fn evaluate_brdf(&self, wi: Vec3, wo: Vec3, normal: Vec3) -> Color {
        let n_dot_l = normal.dot(wi).max(0.0);
        let n_dot_v = normal.dot(wo).max(0.0);
        if n_dot_l <= 0.0 || n_dot_v <= 0.0 {
            return Color::ZERO;
        }

        let h = (wi + wo).safe_normalize();
        if h == Vec3::ZERO {
            return Color::ZERO;
        }
        let n_dot_h = normal.dot(h).max(0.0);
        let v_dot_h = wo.dot(h).max(0.0);

        let alpha = self.alpha();
        let d = ggx_distribution(n_dot_h, alpha);
        let g = smith_g(n_dot_l, n_dot_v, alpha);
        let f = fresnel_schlick(self.f0(), v_dot_h);

        let denom = 4.0 * n_dot_l * n_dot_v;
        if !(denom > 0.0) {
            return Color::ZERO;
        }
        f * (d * g / denom)
    }
}

/// A surface material owned by the scene and referenced by index.
#[derive(Debug, Clone, PartialEq)]
pub enum Material {
    Lambert(Lambert),
    CookTorrance(CookTorrance),
}

impl From<Lambert> for Material {
    fn from(m: Lambert) -> Self {
        Material::Lambert(m)
    }
}

impl From<CookTorrance> for Material {
    fn from(m: CookTorrance) -> Self {
        Material::CookTorrance(m)
    }
}

impl Material {
    /// Shorthand for a Lambert material.
    pub fn lambert(albedo: Color) -> Self {
        Lambert::new(albedo).into()
    }

    /// Shorthand for a Cook-Torrance material.
    pub fn cook_torrance(base_color: Color, roughness: f32, metallic: f32, specular: f32) -> Self {
        CookTorrance::new(base_color, roughness, metallic, specular).into()
    }

    pub fn kind(&self) -> MaterialKind {
        match self {
            Material::Lambert(_) => MaterialKind::Lambert,
            Material::CookTorrance(_) => MaterialKind::CookTorrance,
        }
    }

    /// Albedo or base color.
    pub fn base_color(&self) -> Color {
        match self {
            Material::Lambert(m) => m.albedo(),
            Material::CookTorrance(m) => m.base_color(),
        }
    }

    /// Reflectance for light arriving along `wi` and leaving along `wo` at a
    /// surface with the given normal.
    pub fn evaluate_brdf(&self, wi: Vec3, wo: Vec3, normal: Vec3) -> Color {
        match self {
            Material::Lambert(m) => m.evaluate_brdf(wi, wo, normal),
            Material::CookTorrance(m) => m.evaluate_brdf(wi, wo, normal),
        }
    }
}
