//! Lumen Core - CPU light transport
//!
//! Computes what a ray sees in a scene of spheres lit by point, directional
//! and area lights:
//!
//! - **Traversal**: linear closest-hit search over spheres ([`Scene::intersect`])
//! - **Materials**: Lambert and Cook-Torrance (GGX, Smith, Schlick) BRDFs
//! - **Lights**: incident radiance, direction sampling and shadow rays
//!
//! Composing these into the rendering equation, generating camera rays and
//! writing images are left to the caller.
//!
//! # Example
//!
//! ```
//! use lumen_core::{Material, Point3, PointLight, Ray, Scene, Sphere, Vec3};
//!
//! let mut scene = Scene::new();
//! let grey = scene.add_material(Material::lambert(Vec3::splat(0.5)));
//! scene.add_sphere(Sphere::new(Point3::new(0.0, 0.0, -5.0), 1.0, grey)).unwrap();
//! scene.add_light(PointLight::new(Point3::new(0.0, 5.0, 0.0), Vec3::ONE, 100.0));
//!
//! let hit = scene.intersect(&Ray::new(Point3::ORIGIN, Vec3::NEG_Z)).unwrap();
//! assert!((hit.t - 4.0).abs() < 1e-5);
//! ```

pub mod config;
pub mod description;
pub mod error;
mod intersection;
pub mod light;
mod material;
pub mod microfacet;
mod scene;
mod sphere;
mod stats;
mod validate;

pub use config::TraceConfig;
pub use description::{LightRecord, MaterialRecord, SceneDescription, SphereRecord};
pub use error::{SceneError, SceneResult};
pub use intersection::{Intersection, SurfaceHit};
pub use light::{
    AreaLight, DirectionSample, DirectionalLight, Illumination, Light, LightKind, PointLight,
};
pub use material::{Color, CookTorrance, Lambert, Material, MaterialKind};
pub use scene::Scene;
pub use sphere::Sphere;
pub use stats::TraversalStats;

/// Re-export the math types from lumen_math
pub use lumen_math::{Interval, Point3, Ray, Vec3, VectorExt};
