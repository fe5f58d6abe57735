use std::path::PathBuf;

use crate::consts::DEFAULT_BACKGROUND;
use crate::error::{ Error, Result };
use crate::color::Color;
use crate::canvas::{ Canvas, PpmFormat };
use crate::scene::Scene;

/// Everything needed to turn a scene file into an image file.
#[derive(Clone, Debug, PartialEq)]
pub struct RenderOptions {
    /// Output width, in pixels.
    pub width: usize,

    /// Output height, in pixels.
    pub height: usize,

    pub scene_path: PathBuf,
    pub output_path: PathBuf,

    /// Color of pixels whose ray hits nothing.
    pub background: Color,

    pub format: PpmFormat,
}

impl RenderOptions {
    pub fn new(width: usize, height: usize, scene_path: impl Into<PathBuf>,
        output_path: impl Into<PathBuf>) -> RenderOptions {
        RenderOptions {
            width,
            height,
            scene_path: scene_path.into(),
            output_path: output_path.into(),
            background: DEFAULT_BACKGROUND,
            format: Default::default(),
        }
    }

    /// Checks the options that don't depend on any file contents.
    pub fn validate(&self) -> Result<()> {
        if self.width == 0 || self.height == 0 {
            return Err(Error::InvalidDimensions {
                width: self.width,
                height: self.height,
            });
        }

        Ok(())
    }
}

/// Renders a scene into a canvas sized by `options`.
pub fn render_scene(scene: &Scene, options: &RenderOptions) -> Result<Canvas> {
    options.validate()?;

    let mut canvas = Canvas::new(options.width, options.height);
    scene.camera.render(&scene.world, &mut canvas, options.background);

    Ok(canvas)
}

/// Loads the scene, renders it and saves the image.
///
/// Nothing is written unless the scene loads and the render completes.
pub fn render_to_file(options: &RenderOptions) -> Result<()> {
    options.validate()?;

    let scene = Scene::load(&options.scene_path)?;
    let canvas = render_scene(&scene, options)?;
    canvas.save(&options.output_path, options.format)?;

    log::info!("wrote {}x{} image to '{}'",
        options.width, options.height, options.output_path.display());

    Ok(())
}

#[test]
fn zero_dimension_is_rejected() {
    let options = RenderOptions::new(0, 10, "scene.json", "out.ppm");

    assert!(matches!(options.validate(),
        Err(Error::InvalidDimensions { width: 0, height: 10 })));
}

#[test]
fn defaults() {
    let options = RenderOptions::new(4, 3, "scene.json", "out.ppm");

    assert!(options.validate().is_ok());
    assert_eq!(options.background, Color::black());
    assert_eq!(options.format, PpmFormat::Binary);
}

#[test]
fn render_scene_sizes_canvas() {
    let scene = Scene::from_json(r#"[
        { "type": "camera", "width": 1, "height": 1 }
    ]"#).unwrap();
    let mut options = RenderOptions::new(4, 3, "scene.json", "out.ppm");
    options.background = Color::rgb(0.0, 1.0, 0.0);

    let canvas = render_scene(&scene, &options).unwrap();
    assert_eq!((canvas.width, canvas.height), (4, 3));
    assert_eq!(canvas.read_pixel(3, 2), Some([0, 255, 0]));
}

#[test]
fn missing_scene_file_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("out.ppm");
    let options = RenderOptions::new(2, 2, dir.path().join("nope.json"),
        output.clone());

    assert!(matches!(render_to_file(&options), Err(Error::Io { .. })));
    assert!(!output.exists());
}
