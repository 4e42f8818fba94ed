//! Scene ownership and closest-hit traversal.

use lumen_math::{Interval, Point3, Ray, Vec3, VectorExt};

use crate::config::TraceConfig;
use crate::error::{SceneError, SceneResult};
use crate::intersection::Intersection;
use crate::light::Light;
use crate::material::Material;
use crate::sphere::Sphere;
use crate::stats::TraversalStats;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RayKind {
    Primary,
    Shadow,
}

/// Primitives, materials and lights, stored in flat arrays.
///
/// Spheres refer to materials by index and intersections refer to both by
/// index, so nothing borrows into the scene across calls. All mutation
/// happens through the `add_*` methods and `replace_materials`, which must
/// not run concurrently with queries.
///
/// Traversal is a linear scan in insertion order. When two primitives are hit
/// at exactly the same distance the one added first wins.
#[derive(Debug, Clone, Default)]
pub struct Scene {
    spheres: Vec<Sphere>,
    materials: Vec<Material>,
    lights: Vec<Light>,
    config: TraceConfig,
}

impl Scene {
    /// Create an empty scene with the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method to set the trace configuration. Negative or
    /// non-finite tolerances fall back to their defaults.
    pub fn with_config(mut self, config: TraceConfig) -> Self {
        self.config = config.sanitized();
        self
    }

    pub fn config(&self) -> &TraceConfig {
        &self.config
    }

    /// Add a material and return its index.
    pub fn add_material(&mut self, material: impl Into<Material>) -> usize {
        let index = self.materials.len();
        self.materials.push(material.into());
        index
    }

    /// Add a sphere and return its index.
    ///
    /// Fails without storing anything if the sphere's material index does not
    /// refer to a material already in the scene.
    pub fn add_sphere(&mut self, sphere: Sphere) -> SceneResult<usize> {
        let material_count = self.materials.len();
        if sphere.material_index() >= material_count {
            log::warn!(
                "rejecting sphere at {:?}: material index {} out of range ({} materials)",
                sphere.center(),
                sphere.material_index(),
                material_count
            );
            return Err(SceneError::InvalidMaterialIndex {
                index: sphere.material_index(),
                material_count,
            });
        }

        let index = self.spheres.len();
        self.spheres.push(sphere);
        Ok(index)
    }

    /// Add a light and return its index.
    pub fn add_light(&mut self, light: impl Into<Light>) -> usize {
        let index = self.lights.len();
        self.lights.push(light.into());
        index
    }

    /// Swap in a new material list.
    ///
    /// Spheres keep their indices. Any sphere whose index no longer resolves
    /// is skipped by traversal until a matching material exists again.
    pub fn replace_materials(&mut self, materials: Vec<Material>) {
        self.materials = materials;
        let dangling = self
            .spheres
            .iter()
            .filter(|s| s.material_index() >= self.materials.len())
            .count();
        if dangling > 0 {
            log::warn!(
                "{} spheres reference missing materials after reload and will be skipped",
                dangling
            );
        }
    }

    pub fn spheres(&self) -> &[Sphere] {
        &self.spheres
    }

    pub fn materials(&self) -> &[Material] {
        &self.materials
    }

    pub fn lights(&self) -> &[Light] {
        &self.lights
    }

    pub fn sphere_count(&self) -> usize {
        self.spheres.len()
    }

    pub fn material_count(&self) -> usize {
        self.materials.len()
    }

    pub fn light_count(&self) -> usize {
        self.lights.len()
    }

    /// Get a material by index.
    pub fn material(&self, index: usize) -> Option<&Material> {
        self.materials.get(index)
    }

    /// Get a light by index.
    pub fn light(&self, index: usize) -> SceneResult<&Light> {
        self.lights.get(index).ok_or(SceneError::InvalidLightIndex {
            index,
            light_count: self.lights.len(),
        })
    }

    /// Material of the primitive behind an intersection.
    pub fn material_for(&self, hit: &Intersection) -> Option<&Material> {
        self.materials.get(hit.material_index)
    }

    /// The primitive behind an intersection.
    pub fn primitive_for(&self, hit: &Intersection) -> Option<&Sphere> {
        self.spheres.get(hit.primitive_index)
    }

    /// Find the closest hit along `ray`.
    ///
    /// Returns `None` for a miss or an invalid ray. Primitives whose material
    /// index is dangling are treated as misses.
    pub fn intersect(&self, ray: &Ray) -> Option<Intersection> {
        self.closest_hit(ray, Interval::forward(self.config.hit_epsilon), None, RayKind::Primary)
    }

    /// [`Scene::intersect`], recording counters into `stats`.
    pub fn intersect_with_stats(&self, ray: &Ray, stats: &mut TraversalStats) -> Option<Intersection> {
        stats.rays += 1;
        let hit = self.closest_hit(
            ray,
            Interval::forward(self.config.hit_epsilon),
            Some(&mut *stats),
            RayKind::Primary,
        );
        if hit.is_some() {
            stats.hits += 1;
        }
        hit
    }

    /// True if something lies between `point` and a light `distance` away
    /// along `direction`.
    ///
    /// The shadow ray starts `shadow_bias` along the direction so it cannot
    /// hit the surface it leaves, and any hit with `t < distance - shadow_bias`
    /// counts as an occluder. Shadow rays never log.
    pub fn is_occluded(&self, point: Point3, direction: Vec3, distance: f32) -> bool {
        self.occlusion_query(point, direction, distance, None)
    }

    /// [`Scene::is_occluded`], recording counters into `stats`.
    pub fn is_occluded_with_stats(
        &self,
        point: Point3,
        direction: Vec3,
        distance: f32,
        stats: &mut TraversalStats,
    ) -> bool {
        stats.shadow_rays += 1;
        let occluded = self.occlusion_query(point, direction, distance, Some(&mut *stats));
        if occluded {
            stats.occluded += 1;
        }
        occluded
    }

    fn occlusion_query(
        &self,
        point: Point3,
        direction: Vec3,
        distance: f32,
        stats: Option<&mut TraversalStats>,
    ) -> bool {
        let direction = direction.safe_normalize();
        if direction == Vec3::ZERO {
            return false;
        }

        let bias = self.config.shadow_bias;
        let max_t = distance - bias;
        let window = Interval::new(self.config.hit_epsilon, max_t);
        if window.is_empty() {
            return false;
        }

        let shadow_ray = Ray::new(point + direction * bias, direction);
        self.closest_hit(&shadow_ray, window, stats, RayKind::Shadow)
            .is_some()
    }

    fn closest_hit(
        &self,
        ray: &Ray,
        ray_t: Interval,
        mut stats: Option<&mut TraversalStats>,
        kind: RayKind,
    ) -> Option<Intersection> {
        if !ray.is_valid() {
            if kind == RayKind::Primary && self.config.verbose {
                log::debug!("not tracing invalid ray {:?}", ray);
            }
            return None;
        }

        let mut closest = None;
        let mut window = ray_t;

        for (index, sphere) in self.spheres.iter().enumerate() {
            if let Some(stats) = stats.as_deref_mut() {
                stats.primitive_tests += 1;
            }

            let Some(hit) = sphere.intersect(ray, window) else {
                continue;
            };

            let material_index = sphere.material_index();
            if material_index >= self.materials.len() {
                if let Some(stats) = stats.as_deref_mut() {
                    stats.skipped_primitives += 1;
                }
                if kind == RayKind::Primary && self.config.verbose {
                    log::debug!(
                        "skipping sphere {}: material index {} out of range ({} materials)",
                        index,
                        material_index,
                        self.materials.len()
                    );
                }
                continue;
            }

            // Later primitives must be strictly closer to win
            window = window.with_max(hit.t);
            closest = Some(Intersection::from_surface(hit, index, material_index));
        }

        closest
    }
}
