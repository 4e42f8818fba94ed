//! Serializable scene descriptions.
//!
//! These records are what an external loader hands to the core after it has
//! parsed its own file format and resolved material names to indices.
//! [`Scene::from_description`] runs every record through the same
//! validating constructors as hand-built scenes.

use serde::{Deserialize, Serialize};

use lumen_math::{Point3, Vec3};

use crate::config::{TraceConfig, DEFAULT_AREA_LIGHT_SEED, DEFAULT_SPECULAR};
use crate::error::SceneResult;
use crate::light::{AreaLight, DirectionalLight, Light, PointLight};
use crate::material::{Color, CookTorrance, Lambert, Material};
use crate::scene::Scene;
use crate::sphere::Sphere;

fn default_roughness() -> f32 {
    0.5
}

fn default_specular() -> f32 {
    DEFAULT_SPECULAR
}

fn default_color() -> Color {
    Color::ONE
}

fn default_intensity() -> f32 {
    1.0
}

/// A material record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum MaterialRecord {
    Lambert {
        base_color: Color,
    },
    CookTorrance {
        base_color: Color,
        #[serde(default = "default_roughness")]
        roughness: f32,
        #[serde(default)]
        metallic: f32,
        #[serde(default = "default_specular")]
        specular: f32,
    },
}

impl MaterialRecord {
    pub fn to_material(&self) -> Material {
        match *self {
            MaterialRecord::Lambert { base_color } => Lambert::new(base_color).into(),
            MaterialRecord::CookTorrance {
                base_color,
                roughness,
                metallic,
                specular,
            } => CookTorrance::new(base_color, roughness, metallic, specular).into(),
        }
    }
}

/// A sphere record; `material` is an index into the description's materials.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SphereRecord {
    pub center: Point3,
    pub radius: f32,
    pub material: usize,
}

impl SphereRecord {
    pub fn to_sphere(&self) -> Sphere {
        Sphere::new(self.center, self.radius, self.material)
    }
}

/// A light record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum LightRecord {
    Point {
        position: Point3,
        #[serde(default = "default_color")]
        color: Color,
        #[serde(default = "default_intensity")]
        intensity: f32,
    },
    Directional {
        direction: Vec3,
        #[serde(default = "default_color")]
        color: Color,
        #[serde(default = "default_intensity")]
        intensity: f32,
    },
    Area {
        center: Point3,
        normal: Vec3,
        width: f32,
        height: f32,
        #[serde(default = "default_color")]
        color: Color,
        #[serde(default = "default_intensity")]
        intensity: f32,
        #[serde(default)]
        seed: Option<u64>,
    },
}

impl LightRecord {
    /// Build the light. Area lights without an explicit seed get one derived
    /// from `index` so that lights in the same scene sample independently.
    pub fn to_light(&self, index: usize) -> Light {
        match *self {
            LightRecord::Point {
                position,
                color,
                intensity,
            } => PointLight::new(position, color, intensity).into(),
            LightRecord::Directional {
                direction,
                color,
                intensity,
            } => DirectionalLight::new(direction, color, intensity).into(),
            LightRecord::Area {
                center,
                normal,
                width,
                height,
                color,
                intensity,
                seed,
            } => {
                let seed = seed.unwrap_or(DEFAULT_AREA_LIGHT_SEED.wrapping_add(index as u64));
                AreaLight::new(center, normal, width, height, color, intensity)
                    .with_seed(seed)
                    .into()
            }
        }
    }
}

/// Everything needed to build a [`Scene`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneDescription {
    pub config: TraceConfig,
    pub materials: Vec<MaterialRecord>,
    pub spheres: Vec<SphereRecord>,
    pub lights: Vec<LightRecord>,
}

impl Scene {
    /// Build a scene from a description.
    ///
    /// Materials are inserted first so sphere indices can be checked; the
    /// first sphere with a dangling index aborts the build.
    pub fn from_description(description: &SceneDescription) -> SceneResult<Scene> {
        let mut scene = Scene::new().with_config(description.config);

        for record in &description.materials {
            scene.add_material(record.to_material());
        }
        for record in &description.spheres {
            scene.add_sphere(record.to_sphere())?;
        }
        for (index, record) in description.lights.iter().enumerate() {
            scene.add_light(record.to_light(index));
        }

        log::info!(
            "Built scene: {} spheres, {} materials, {} lights",
            scene.sphere_count(),
            scene.material_count(),
            scene.light_count()
        );
        Ok(scene)
    }
}
