//! Light sources: point, directional and rectangular area lights.
//!
//! Every light answers the same three questions for a surface point: how much
//! radiance arrives and from where ([`Light::illuminate`]), which direction to
//! sample and with what density ([`Light::sample_direction`]), and whether
//! the path to it is blocked ([`Light::is_occluded`]).

use std::cell::RefCell;
use std::f32::consts::PI;

use lumen_math::{Point3, Vec3};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::config::{DEFAULT_AREA_LIGHT_SEED, MIN_LIGHT_EXTENT};
use crate::material::Color;
use crate::microfacet::build_orthonormal_basis;
use crate::scene::Scene;
use crate::validate;

/// Distances at or below this are treated as coincident with the light.
pub const MIN_LIGHT_DISTANCE: f32 = 1e-6;

/// Discriminant of a [`Light`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LightKind {
    Point,
    Directional,
    Area,
}

/// Incident light at a surface point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Illumination {
    /// Radiance arriving at the point (already attenuated)
    pub radiance: Color,
    /// Unit direction from the point toward the light
    pub direction: Vec3,
    /// Distance to the light, `f32::INFINITY` for directional lights
    pub distance: f32,
}

impl Illumination {
    fn black(direction: Vec3, distance: f32) -> Self {
        Self {
            radiance: Color::ZERO,
            direction,
            distance,
        }
    }

    /// True if nothing arrives.
    pub fn is_black(&self) -> bool {
        self.radiance == Color::ZERO
    }
}

/// A sampled direction toward a light with its solid-angle density.
///
/// Delta lights (point, directional) report a density of 1.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DirectionSample {
    pub direction: Vec3,
    pub pdf: f32,
}

fn light_color(color: Color) -> Color {
    validate::clamp_color("light color", color)
}

fn light_intensity(intensity: f32) -> f32 {
    validate::clamp_scalar("light intensity", intensity, 0.0, f32::MAX, 0.0)
}

/// Omnidirectional light at a position, falling off with the inverse square.
#[derive(Debug, Clone, PartialEq)]
pub struct PointLight {
    position: Point3,
    color: Color,
    intensity: f32,
}

impl PointLight {
    pub fn new(position: Point3, color: Color, intensity: f32) -> Self {
        Self {
            position: validate::finite_point("point light position", position),
            color: light_color(color),
            intensity: light_intensity(intensity),
        }
    }

    pub fn position(&self) -> Point3 {
        self.position
    }

    /// `color * intensity / (4 pi d^2)` along the direction to the light.
    pub fn illuminate(&self, point: Point3) -> Illumination {
        let to_light = self.position - point;
        let distance = to_light.length();
        if !(distance > MIN_LIGHT_DISTANCE) {
            return Illumination::black(Vec3::ZERO, 0.0);
        }

        let falloff = 1.0 / (4.0 * PI * distance * distance);
        Illumination {
            radiance: self.color * self.intensity * falloff,
            direction: to_light / distance,
            distance,
        }
    }

    pub fn sample_direction(&self, point: Point3) -> DirectionSample {
        let to_light = self.position - point;
        let distance = to_light.length();
        if !(distance > MIN_LIGHT_DISTANCE) {
            return DirectionSample {
                direction: Vec3::ZERO,
                pdf: 0.0,
            };
        }
        DirectionSample {
            direction: to_light / distance,
            pdf: 1.0,
        }
    }
}

/// Light arriving from a fixed direction with no attenuation.
#[derive(Debug, Clone, PartialEq)]
pub struct DirectionalLight {
    /// Unit direction the light travels in
    direction: Vec3,
    color: Color,
    intensity: f32,
}

impl DirectionalLight {
    /// `direction` is the direction light travels (e.g. `-Y` for a sun
    /// overhead); it is normalized here, and a degenerate value becomes `-Y`.
    pub fn new(direction: Vec3, color: Color, intensity: f32) -> Self {
        Self {
            direction: validate::unit_direction("directional light direction", direction, Vec3::NEG_Y),
            color: light_color(color),
            intensity: light_intensity(intensity),
        }
    }

    pub fn direction(&self) -> Vec3 {
        self.direction
    }

    pub fn illuminate(&self, _point: Point3) -> Illumination {
        Illumination {
            radiance: self.color * self.intensity,
            direction: -self.direction,
            distance: f32::INFINITY,
        }
    }

    pub fn sample_direction(&self, _point: Point3) -> DirectionSample {
        DirectionSample {
            direction: -self.direction,
            pdf: 1.0,
        }
    }
}

/// One-sided rectangular emitter.
///
/// Each query samples a fresh point on the rectangle using the light's own
/// generator, so repeated calls for the same surface point vary.
#[derive(Debug, Clone)]
pub struct AreaLight {
    center: Point3,
    normal: Vec3,
    width: f32,
    height: f32,
    u: Vec3,
    v: Vec3,
    color: Color,
    intensity: f32,
    rng: RefCell<StdRng>,
}

/// FNV-style mix of the light's position and orientation bits into the base seed.
fn placement_seed(center: Point3, normal: Vec3) -> u64 {
    [center.x, center.y, center.z, normal.x, normal.y, normal.z]
        .iter()
        .fold(DEFAULT_AREA_LIGHT_SEED, |seed, c| {
            (seed ^ u64::from(c.to_bits())).wrapping_mul(0x0000_0100_0000_01b3)
        })
}

impl AreaLight {
    /// Create an area light centered at `center`, emitting on the side
    /// `normal` faces. `width` runs along the basis vector `u` and `height`
    /// along `v`.
    ///
    /// The sample sequence is seeded from the light's placement, so lights
    /// built in different places draw uncorrelated samples while rebuilding
    /// the same light reproduces its sequence. Use [`AreaLight::with_seed`]
    /// to pick the seed explicitly.
    pub fn new(center: Point3, normal: Vec3, width: f32, height: f32, color: Color, intensity: f32) -> Self {
        let normal = validate::unit_direction("area light normal", normal, Vec3::NEG_Y);
        let center = validate::finite_point("area light center", center);
        let (u, v) = build_orthonormal_basis(normal);

        Self {
            center,
            normal,
            width: validate::clamp_scalar("area light width", width, MIN_LIGHT_EXTENT, f32::MAX, 1.0),
            height: validate::clamp_scalar("area light height", height, MIN_LIGHT_EXTENT, f32::MAX, 1.0),
            u,
            v,
            color: light_color(color),
            intensity: light_intensity(intensity),
            rng: RefCell::new(StdRng::seed_from_u64(placement_seed(center, normal))),
        }
    }

    /// Builder method to seed this light's sample sequence.
    pub fn with_seed(self, seed: u64) -> Self {
        self.reseed(seed);
        self
    }

    /// Restart this light's sample sequence from `seed`.
    pub fn reseed(&self, seed: u64) {
        *self.rng.borrow_mut() = StdRng::seed_from_u64(seed);
    }

    pub fn center(&self) -> Point3 {
        self.center
    }

    pub fn normal(&self) -> Vec3 {
        self.normal
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn height(&self) -> f32 {
        self.height
    }

    /// Tangent basis `(u, v)` spanning the rectangle.
    pub fn basis(&self) -> (Vec3, Vec3) {
        (self.u, self.v)
    }

    pub fn area(&self) -> f32 {
        self.width * self.height
    }

    /// A uniformly distributed point on the rectangle.
    pub fn sample_point(&self) -> Point3 {
        let (s, t): (f32, f32) = {
            let mut rng = self.rng.borrow_mut();
            (rng.gen(), rng.gen())
        };
        self.center + self.u * ((s - 0.5) * self.width) + self.v * ((t - 0.5) * self.height)
    }

    /// Radiance from one sampled point, attenuated by `cos * area / d^2`.
    pub fn illuminate(&self, point: Point3) -> Illumination {
        let sample = self.sample_point();
        let to_light = sample - point;
        let distance = to_light.length();
        if !(distance > MIN_LIGHT_DISTANCE) {
            return Illumination::black(Vec3::ZERO, 0.0);
        }
        let direction = to_light / distance;

        // Emission leaves the front face only
        let cos_light = self.normal.dot(-direction);
        if cos_light <= 0.0 {
            return Illumination::black(direction, distance);
        }

        let attenuation = cos_light * self.area() / (distance * distance);
        Illumination {
            radiance: self.color * self.intensity * attenuation,
            direction,
            distance,
        }
    }

    /// Direction to a sampled point with the solid-angle density
    /// `d^2 / (cos * area)`; zero for back-facing samples.
    pub fn sample_direction(&self, point: Point3) -> DirectionSample {
        let sample = self.sample_point();
        let to_light = sample - point;
        let distance = to_light.length();
        if !(distance > MIN_LIGHT_DISTANCE) {
            return DirectionSample {
                direction: Vec3::ZERO,
                pdf: 0.0,
            };
        }
        let direction = to_light / distance;
        let cos_light = self.normal.dot(-direction);
        let pdf = if cos_light > 0.0 {
            distance * distance / (cos_light * self.area())
        } else {
            0.0
        };
        DirectionSample { direction, pdf }
    }
}

impl PartialEq for AreaLight {
    fn eq(&self, other: &Self) -> bool {
        self.center == other.center
            && self.normal == other.normal
            && self.width == other.width
            && self.height == other.height
            && self.color == other.color
            && self.intensity == other.intensity
    }
}

/// A light source owned by the scene.
#[derive(Debug, Clone, PartialEq)]
pub enum Light {
    Point(PointLight),
    Directional(DirectionalLight),
    Area(AreaLight),
}

impl From<PointLight> for Light {
    fn from(l: PointLight) -> Self {
        Light::Point(l)
    }
}

impl From<DirectionalLight> for Light {
    fn from(l: DirectionalLight) -> Self {
        Light::Directional(l)
    }
}

impl From<AreaLight> for Light {
    fn from(l: AreaLight) -> Self {
        Light::Area(l)
    }
}

impl Light {
    pub fn kind(&self) -> LightKind {
        match self {
            Light::Point(_) => LightKind::Point,
            Light::Directional(_) => LightKind::Directional,
            Light::Area(_) => LightKind::Area,
        }
    }

    pub fn color(&self) -> Color {
        match self {
            Light::Point(l) => l.color,
            Light::Directional(l) => l.color,
            Light::Area(l) => l.color,
        }
    }

    pub fn intensity(&self) -> f32 {
        match self {
            Light::Point(l) => l.intensity,
            Light::Directional(l) => l.intensity,
            Light::Area(l) => l.intensity,
        }
    }

    /// True for lights that can only be reached along a single direction.
    pub fn is_delta(&self) -> bool {
        !matches!(self, Light::Area(_))
    }

    /// Emitted power estimate, for diagnostics. Directional lights report
    /// power per unit area.
    pub fn power(&self) -> Color {
        match self {
            Light::Point(l) => l.color * l.intensity * 4.0 * PI,
            Light::Directional(l) => l.color * l.intensity,
            Light::Area(l) => l.color * l.intensity * PI * l.area(),
        }
    }

    /// Incident radiance at `point`, the direction it arrives from and the
    /// distance to the light.
    pub fn illuminate(&self, point: Point3) -> Illumination {
        match self {
            Light::Point(l) => l.illuminate(point),
            Light::Directional(l) => l.illuminate(point),
            Light::Area(l) => l.illuminate(point),
        }
    }

    pub fn sample_direction(&self, point: Point3) -> DirectionSample {
        match self {
            Light::Point(l) => l.sample_direction(point),
            Light::Directional(l) => l.sample_direction(point),
            Light::Area(l) => l.sample_direction(point),
        }
    }

    /// Fire a shadow ray from `point` toward the light and report whether
    /// anything in `scene` blocks it before `distance`.
    pub fn is_occluded(&self, point: Point3, direction: Vec3, distance: f32, scene: &Scene) -> bool {
        scene.is_occluded(point, direction, distance)
    }
}
