//! Direct lighting example.
//!
//! Builds a small scene, traces an orthographic grid of rays through it and
//! prints an ASCII luminance map followed by traversal statistics. The
//! shading loop here is the caller's side of the rendering equation; the
//! core only supplies intersections, BRDFs, light samples and shadow tests.

use anyhow::Result;
use lumen_core::{
    AreaLight, Color, CookTorrance, DirectionalLight, Material, Point3, PointLight, Ray, Scene,
    Sphere, TraceConfig, TraversalStats, Vec3,
};

const WIDTH: usize = 72;
const HEIGHT: usize = 32;
const AREA_SAMPLES: usize = 8;
const RAMP: &[u8] = b" .:-=+*#%@";

fn main() -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    let scene = build_scene()?;
    log::info!(
        "Scene ready: {} spheres, {} lights",
        scene.sphere_count(),
        scene.light_count()
    );

    let mut stats = TraversalStats::new();
    let mut rows = Vec::with_capacity(HEIGHT);
    for y in 0..HEIGHT {
        let mut row = String::with_capacity(WIDTH);
        for x in 0..WIDTH {
            // Orthographic camera looking down -Z, 2:1 character aspect
            let u = (x as f32 + 0.5) / WIDTH as f32 * 2.0 - 1.0;
            let v = 1.0 - (y as f32 + 0.5) / HEIGHT as f32 * 2.0;
            let ray = Ray::new(Point3::new(u * 4.0, v * 2.0 + 0.5, 0.0), Vec3::NEG_Z);

            let color = trace(&scene, &ray, &mut stats);
            row.push(to_ascii(color) as char);
        }
        rows.push(row);
    }

    for row in &rows {
        println!("{}", row);
    }
    println!();
    println!("rays:            {}", stats.rays);
    println!("hit rate:        {:.1}%", stats.hit_rate() * 100.0);
    println!("primitive tests: {}", stats.primitive_tests);
    println!("shadow rays:     {}", stats.shadow_rays);
    println!("occlusion rate:  {:.1}%", stats.occlusion_rate() * 100.0);

    Ok(())
}

fn build_scene() -> Result<Scene> {
    let mut scene = Scene::new().with_config(TraceConfig::new().with_verbose(true));

    let ground = scene.add_material(Material::lambert(Color::new(0.5, 0.5, 0.5)));
    let red = scene.add_material(Material::lambert(Color::new(0.7, 0.15, 0.1)));
    let gold = scene.add_material(CookTorrance::metal(Color::new(1.0, 0.78, 0.34), 0.3));
    let plastic = scene.add_material(CookTorrance::dielectric(Color::new(0.1, 0.3, 0.8), 0.15));

    scene.add_sphere(Sphere::new(Point3::new(0.0, -1001.0, -6.0), 1000.0, ground))?;
    scene.add_sphere(Sphere::new(Point3::new(-2.2, 0.0, -6.0), 1.0, red))?;
    scene.add_sphere(Sphere::new(Point3::new(0.0, 0.0, -6.0), 1.0, gold))?;
    scene.add_sphere(Sphere::new(Point3::new(2.2, 0.0, -6.0), 1.0, plastic))?;

    scene.add_light(PointLight::new(Point3::new(-3.0, 5.0, -2.0), Color::ONE, 400.0));
    scene.add_light(DirectionalLight::new(
        Vec3::new(1.0, -1.0, -0.5),
        Color::new(1.0, 0.95, 0.85),
        0.6,
    ));
    scene.add_light(
        AreaLight::new(
            Point3::new(2.0, 4.0, -5.0),
            Vec3::NEG_Y,
            1.5,
            1.5,
            Color::ONE,
            30.0,
        )
        .with_seed(17),
    );

    Ok(scene)
}

fn trace(scene: &Scene, ray: &Ray, stats: &mut TraversalStats) -> Color {
    let Some(hit) = scene.intersect_with_stats(ray, stats) else {
        return Color::ZERO;
    };
    let Some(material) = scene.material_for(&hit) else {
        return Color::ZERO;
    };

    let (normal, _) = hit.face_forward(ray);
    let wo = hit.outgoing(ray);

    let mut radiance = Color::ZERO;
    for light in scene.lights() {
        let samples = if light.is_delta() { 1 } else { AREA_SAMPLES };
        let mut sum = Color::ZERO;
        for _ in 0..samples {
            let illum = light.illuminate(hit.point);
            let n_dot_l = normal.dot(illum.direction).max(0.0);
            if illum.is_black() || n_dot_l <= 0.0 {
                continue;
            }
            if scene.is_occluded_with_stats(hit.point, illum.direction, illum.distance, stats) {
                continue;
            }
            sum += material.evaluate_brdf(illum.direction, wo, normal) * illum.radiance * n_dot_l;
        }
        radiance += sum / samples as f32;
    }
    radiance
}

fn to_ascii(color: Color) -> u8 {
    let luminance = 0.2126 * color.x + 0.7152 * color.y + 0.0722 * color.z;
    // Simple Reinhard tone map into [0, 1)
    let mapped = luminance / (1.0 + luminance);
    let index = (mapped * RAMP.len() as f32) as usize;
    RAMP[index.min(RAMP.len() - 1)]
}
