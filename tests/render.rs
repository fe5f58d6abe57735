use std::fs;

use raycast::canvas::PpmFormat;
use raycast::color::Color;
use raycast::config::{ RenderOptions, render_scene, render_to_file };
use raycast::intersect::Intersection;
use raycast::ray::Ray3D;
use raycast::scene::Scene;
use raycast::tuple::Tuple3D;
use raycast::Error;

const RED_SPHERE: &str = r#"[
    { "type": "camera", "width": 2, "height": 2 },
    { "type": "sphere", "position": [0, 0, 5], "radius": 1,
      "diffuse_color": [1, 0, 0], "specular_color": [0, 0, 0] },
    { "type": "light", "position": [0, 0, 0], "color": [1, 1, 1],
      "radial-a0": 1, "radial-a1": 0, "radial-a2": 0 }
]"#;

const LIT_ROOM: &str = r#"[
    { "type": "camera", "width": 1.6, "height": 1.2 },
    { "type": "sphere", "position": [-0.6, 0, 4], "radius": 0.7,
      "diffuse_color": [0.9, 0.2, 0.2], "specular_color": [1, 1, 1] },
    { "type": "sphere", "position": [0.8, 0.3, 6], "radius": 1,
      "diffuse_color": [0.2, 0.3, 0.9], "specular_color": [0.5, 0.5, 0.5] },
    { "type": "plane", "position": [0, -1, 0], "normal": [0, 1, 0],
      "diffuse_color": [0.8, 0.8, 0.8], "specular_color": [0, 0, 0] },
    { "type": "light", "position": [2, 4, 1], "color": [1.5, 1.5, 1.5],
      "radial-a0": 1, "radial-a1": 0.05, "radial-a2": 0.01, "angular-a0": 0 },
    { "type": "light", "position": [-3, 2, 2], "color": [0.4, 0.4, 0.6] }
]"#;

fn render_bytes(text: &str, width: usize, height: usize, format: PpmFormat)
    -> Vec<u8> {
    let scene = Scene::from_json(text).unwrap();
    let mut options = RenderOptions::new(width, height, "scene.json", "out.ppm");
    options.format = format;

    let canvas = render_scene(&scene, &options).unwrap();
    let mut out = Vec::new();
    canvas.write_ppm(&mut out, format).unwrap();
    out
}

#[test]
fn single_pixel_red_sphere() {
    let scene = Scene::from_json(RED_SPHERE).unwrap();
    let options = RenderOptions::new(1, 1, "scene.json", "out.ppm");

    let canvas = render_scene(&scene, &options).unwrap();
    let [r, g, b] = canvas.read_pixel(0, 0).unwrap();

    assert!(r > 0);
    assert!(r > g && r > b);
    assert_eq!([r, g, b], [255, 0, 0]);
}

#[test]
fn camera_only_scene_is_all_background() {
    let scene = Scene::from_json(r#"[
        { "type": "camera", "width": 1, "height": 1 }
    ]"#).unwrap();
    let mut options = RenderOptions::new(5, 4, "scene.json", "out.ppm");
    options.background = Color::rgb(0.2, 0.4, 0.6);

    let canvas = render_scene(&scene, &options).unwrap();

    for y in 0..4 {
        for x in 0..5 {
            assert_eq!(canvas.read_pixel(x, y), Some([51, 102, 153]));
        }
    }
}

#[test]
fn unlit_scene_renders_black_silhouettes() {
    let scene = Scene::from_json(r#"[
        { "type": "camera", "width": 2, "height": 2 },
        { "type": "sphere", "position": [0, 0, 5], "radius": 1,
          "diffuse_color": [1, 1, 1], "specular_color": [1, 1, 1] }
    ]"#).unwrap();
    let mut options = RenderOptions::new(3, 3, "scene.json", "out.ppm");
    options.background = Color::white();

    let canvas = render_scene(&scene, &options).unwrap();

    assert_eq!(canvas.read_pixel(1, 1), Some([0, 0, 0]));
    assert_eq!(canvas.read_pixel(0, 0), Some([255, 255, 255]));
}

#[test]
fn tangent_primary_ray_hits() {
    let scene = Scene::from_json(r#"[
        { "type": "camera", "width": 1, "height": 1 },
        { "type": "sphere", "position": [1, 0, 5], "radius": 1,
          "diffuse_color": [1, 1, 1], "specular_color": [0, 0, 0] }
    ]"#).unwrap();
    let r = Ray3D::new(Tuple3D::zero(), Tuple3D::new(0.0, 0.0, 1.0));

    assert_eq!(scene.world.nearest_hit(&r, None, f64::INFINITY),
        Some(Intersection { t: 5.0, index: 0 }));
}

#[test]
fn rendering_is_deterministic() {
    for &format in [PpmFormat::Binary, PpmFormat::Ascii].iter() {
        let first = render_bytes(LIT_ROOM, 64, 48, format);
        let second = render_bytes(LIT_ROOM, 64, 48, format);

        assert_eq!(first, second);
    }
}

#[test]
fn binary_output_has_one_triple_per_pixel() {
    let out = render_bytes(LIT_ROOM, 32, 24, PpmFormat::Binary);
    let header = b"P6\n32 24\n255\n";

    assert!(out.starts_with(header));
    assert_eq!(out.len(), header.len() + 32 * 24 * 3);
}

#[test]
fn render_to_file_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let scene_path = dir.path().join("scene.json");
    let output_path = dir.path().join("out.ppm");
    fs::write(&scene_path, LIT_ROOM).unwrap();

    let options = RenderOptions::new(16, 12, &scene_path, &output_path);
    render_to_file(&options).unwrap();
    let first = fs::read(&output_path).unwrap();

    render_to_file(&options).unwrap();
    let second = fs::read(&output_path).unwrap();

    assert_eq!(first, second);
    assert_eq!(first, render_bytes(LIT_ROOM, 16, 12, PpmFormat::Binary));
}

#[test]
fn invalid_scene_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let scene_path = dir.path().join("scene.json");
    let output_path = dir.path().join("out.ppm");
    fs::write(&scene_path, r#"[
        { "type": "sphere", "position": [0, 0, 5], "radius": 1,
          "diffuse_color": [1, 0, 0], "specular_color": [0, 0, 0] }
    ]"#).unwrap();

    let options = RenderOptions::new(4, 4, &scene_path, &output_path);

    assert!(matches!(render_to_file(&options), Err(Error::MissingCamera)));
    assert!(!output_path.exists());
}

#[test]
fn unwritable_output_is_an_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let scene_path = dir.path().join("scene.json");
    fs::write(&scene_path, RED_SPHERE).unwrap();

    let output_path = dir.path().join("missing-dir").join("out.ppm");
    let options = RenderOptions::new(1, 1, &scene_path, &output_path);

    assert!(matches!(render_to_file(&options), Err(Error::Io { .. })));
}
