//! Shadow rays fired through the scene for every light kind.

use lumen_core::{
    AreaLight, Color, DirectionalLight, Light, Material, Point3, PointLight, Scene, Sphere, Vec3,
};

fn ground_point_scene(with_blocker: bool) -> Scene {
    let _ = env_logger::builder().is_test(true).try_init();

    let mut scene = Scene::new();
    let grey = scene.add_material(Material::lambert(Color::splat(0.5)));
    // Large ground sphere whose top is at y = 0
    scene
        .add_sphere(Sphere::new(Point3::new(0.0, -100.0, 0.0), 100.0, grey))
        .unwrap();
    if with_blocker {
        scene
            .add_sphere(Sphere::new(Point3::new(0.0, 3.0, 0.0), 1.0, grey))
            .unwrap();
    }
    scene
}

fn shadowed(scene: &Scene, light: &Light, point: Point3) -> bool {
    let illum = light.illuminate(point);
    light.is_occluded(point, illum.direction, illum.distance, scene)
}

#[test]
fn test_point_light_blocked_and_unblocked() {
    let light: Light = PointLight::new(Point3::new(0.0, 10.0, 0.0), Color::ONE, 100.0).into();
    let point = Point3::ORIGIN;

    assert!(shadowed(&ground_point_scene(true), &light, point));
    assert!(!shadowed(&ground_point_scene(false), &light, point));
}

#[test]
fn test_point_light_between_surface_and_blocker() {
    // The light sits below the blocker, so the blocker is behind it
    let light: Light = PointLight::new(Point3::new(0.0, 1.0, 0.0), Color::ONE, 100.0).into();
    assert!(!shadowed(&ground_point_scene(true), &light, Point3::ORIGIN));
}

#[test]
fn test_directional_light_blocked_and_unblocked() {
    let sun: Light = DirectionalLight::new(Vec3::NEG_Y, Color::ONE, 1.0).into();

    assert!(shadowed(&ground_point_scene(true), &sun, Point3::ORIGIN));
    assert!(!shadowed(&ground_point_scene(false), &sun, Point3::ORIGIN));
    // Off to the side the blocker no longer matters
    assert!(!shadowed(&ground_point_scene(true), &sun, Point3::new(5.0, 0.0, 0.0)));
}

#[test]
fn test_area_light_fully_blocked() {
    // A 0.5 x 0.5 light well inside the blocker's shadow cone
    let light: Light = AreaLight::new(
        Point3::new(0.0, 10.0, 0.0),
        Vec3::NEG_Y,
        0.5,
        0.5,
        Color::ONE,
        10.0,
    )
    .with_seed(3)
    .into();

    let blocked = ground_point_scene(true);
    let open = ground_point_scene(false);
    for _ in 0..64 {
        assert!(shadowed(&blocked, &light, Point3::ORIGIN));
        assert!(!shadowed(&open, &light, Point3::ORIGIN));
    }
}

#[test]
fn test_surface_point_does_not_shadow_itself() {
    let scene = ground_point_scene(false);
    let light: Light = PointLight::new(Point3::new(3.0, 4.0, 0.0), Color::ONE, 100.0).into();

    // Points taken from actual hits on the ground sphere
    for x in [-2.0_f32, -0.5, 0.0, 0.7, 1.9] {
        let ray = lumen_core::Ray::new(Point3::new(x, 5.0, 0.0), Vec3::NEG_Y);
        let hit = scene.intersect(&ray).expect("ground hit");
        assert!(!shadowed(&scene, &light, hit.point), "self-shadowed at x = {}", x);
    }
}

#[test]
fn test_scene_owned_lights() {
    let mut scene = ground_point_scene(true);
    scene.add_light(PointLight::new(Point3::new(0.0, 10.0, 0.0), Color::ONE, 100.0));
    scene.add_light(PointLight::new(Point3::new(10.0, 10.0, 0.0), Color::ONE, 100.0));

    let point = Point3::ORIGIN;
    let results: Vec<bool> = scene
        .lights()
        .iter()
        .map(|light| shadowed(&scene, light, point))
        .collect();
    assert_eq!(results, vec![true, false]);
}
