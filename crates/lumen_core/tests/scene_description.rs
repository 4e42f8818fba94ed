//! Loading scenes from JSON descriptions.

use lumen_core::{LightKind, MaterialKind, Point3, Ray, Scene, SceneDescription, SceneError, Vec3};

const SCENE_JSON: &str = r#"{
    "config": { "shadow_bias": 0.002 },
    "materials": [
        { "type": "lambert", "base_color": [0.8, 0.8, 0.8] },
        { "type": "cook_torrance", "base_color": [1.0, 0.8, 0.3], "roughness": 0.25, "metallic": 1.0 }
    ],
    "spheres": [
        { "center": [0.0, 0.0, -5.0], "radius": 1.0, "material": 1 },
        { "center": [0.0, -1001.0, -5.0], "radius": 1000.0, "material": 0 }
    ],
    "lights": [
        { "type": "point", "position": [0.0, 5.0, 0.0], "intensity": 200.0 },
        { "type": "directional", "direction": [0.0, -1.0, -1.0], "color": [1.0, 0.95, 0.9] },
        { "type": "area", "center": [0.0, 6.0, -5.0], "normal": [0.0, -1.0, 0.0],
          "width": 2.0, "height": 2.0, "intensity": 20.0, "seed": 42 }
    ]
}"#;

#[test]
fn test_load_json_scene() -> anyhow::Result<()> {
    let _ = env_logger::builder().is_test(true).try_init();

    let description: SceneDescription = serde_json::from_str(SCENE_JSON)?;
    let scene = Scene::from_description(&description)?;

    assert_eq!(scene.config().shadow_bias, 0.002);
    assert_eq!(scene.config().hit_epsilon, 1e-6);

    assert_eq!(scene.material_count(), 2);
    assert_eq!(scene.materials()[0].kind(), MaterialKind::Lambert);
    assert_eq!(scene.materials()[1].kind(), MaterialKind::CookTorrance);

    let kinds: Vec<LightKind> = scene.lights().iter().map(|l| l.kind()).collect();
    assert_eq!(kinds, vec![LightKind::Point, LightKind::Directional, LightKind::Area]);
    assert_eq!(scene.light(0)?.intensity(), 200.0);
    assert_eq!(scene.light(1)?.intensity(), 1.0);

    let hit = scene
        .intersect(&Ray::new(Point3::ORIGIN, Vec3::NEG_Z))
        .expect("sphere in front of the origin");
    assert_eq!(hit.primitive_index, 0);
    assert_eq!(hit.material_index, 1);
    Ok(())
}

#[test]
fn test_json_values_are_clamped() -> anyhow::Result<()> {
    let json = r#"{
        "materials": [
            { "type": "cook_torrance", "base_color": [1.5, 0.5, -0.5], "roughness": 0.0, "specular": 3.0 }
        ],
        "spheres": [ { "center": [0.0, 0.0, 0.0], "radius": -2.0, "material": 0 } ]
    }"#;
    let description: SceneDescription = serde_json::from_str(json)?;
    let scene = Scene::from_description(&description)?;

    match &scene.materials()[0] {
        lumen_core::Material::CookTorrance(ct) => {
            assert_eq!(ct.base_color(), Vec3::new(1.0, 0.5, 0.0));
            assert_eq!(ct.roughness(), lumen_core::config::MIN_ROUGHNESS);
            assert_eq!(ct.specular(), 1.0);
        }
        other => panic!("unexpected material {:?}", other),
    }
    assert!(scene.spheres()[0].radius() > 0.0);
    Ok(())
}

#[test]
fn test_json_dangling_material_rejected() -> anyhow::Result<()> {
    let json = r#"{
        "materials": [ { "type": "lambert", "base_color": [0.5, 0.5, 0.5] } ],
        "spheres": [ { "center": [0.0, 0.0, -5.0], "radius": 1.0, "material": 3 } ]
    }"#;
    let description: SceneDescription = serde_json::from_str(json)?;
    let err = Scene::from_description(&description).unwrap_err();
    assert_eq!(
        err,
        SceneError::InvalidMaterialIndex {
            index: 3,
            material_count: 1
        }
    );
    Ok(())
}

#[test]
fn test_description_roundtrip_through_json() -> anyhow::Result<()> {
    let description: SceneDescription = serde_json::from_str(SCENE_JSON)?;
    let json = serde_json::to_string(&description)?;
    let reparsed: SceneDescription = serde_json::from_str(&json)?;
    assert_eq!(description, reparsed);
    Ok(())
}

#[test]
fn test_json_negative_tolerances_fall_back_to_defaults() -> anyhow::Result<()> {
    let json = r#"{
        "config": { "hit_epsilon": -100.0, "shadow_bias": -0.5 },
        "materials": [ { "type": "lambert", "base_color": [0.5, 0.5, 0.5] } ],
        "spheres": [ { "center": [0.0, 0.0, 5.0], "radius": 1.0, "material": 0 } ]
    }"#;
    let description: SceneDescription = serde_json::from_str(json)?;
    let scene = Scene::from_description(&description)?;

    assert_eq!(scene.config().hit_epsilon, 1e-6);
    assert_eq!(scene.config().shadow_bias, 1e-3);

    // The only sphere sits behind the ray origin
    assert!(scene.intersect(&Ray::new(Point3::ORIGIN, Vec3::NEG_Z)).is_none());
    Ok(())
}
