use std::convert::TryFrom;
use std::fs;
use std::path::Path;

use serde::{ Serialize, Deserialize };

use crate::error::{ Error, Result };
use crate::tuple::Tuple3D;
use crate::color::Color;
use crate::shape::Shape;
use crate::light::{ Light, Material };
use crate::world::World;
use crate::camera::Camera;

/// A fully loaded and validated scene, ready to render.
#[derive(Clone, Debug, PartialEq)]
pub struct Scene {
    pub camera: Camera,
    pub world: World,
}

impl Scene {
    /// Loads a scene description from a JSON file.
    pub fn load(path: &Path) -> Result<Scene> {
        let text = fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        let scene = Scene::from_json(&text)?;

        log::info!("loaded scene '{}': {} object(s), {} light(s)",
            path.display(), scene.world.objects.len(), scene.world.lights.len());
        for (i, obj) in scene.world.objects.iter().enumerate() {
            log::debug!("object {}: {} {:?}", i, obj.kind(), obj.material);
        }

        Ok(scene)
    }

    /// Parses and validates a scene description.
    pub fn from_json(text: &str) -> Result<Scene> {
        let scene_json: SceneJson = serde_json::from_str(text)?;
        Scene::try_from(scene_json)
    }
}

/// The on-disk scene description: an array of typed records.
///
/// ```json
/// [
///   { "type": "camera", "width": 2.0, "height": 2.0 },
///   { "type": "sphere", "position": [0, 0, 5], "radius": 1,
///     "diffuse_color": [1, 0, 0], "specular_color": [1, 1, 1] },
///   { "type": "light", "position": [0, 5, 0], "color": [1, 1, 1],
///     "radial-a0": 1, "radial-a1": 0.1 }
/// ]
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SceneJson {
    records: Vec<RecordJson>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
enum RecordJson {
    Camera(CameraJson),
    Sphere(SphereJson),
    Plane(PlaneJson),
    Light(LightJson),
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
struct CameraJson {
    width: f64,
    height: f64,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
struct SphereJson {
    position: [f64; 3],
    radius: f64,
    diffuse_color: [f64; 3],
    specular_color: [f64; 3],
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
struct PlaneJson {
    position: [f64; 3],
    normal: [f64; 3],
    diffuse_color: [f64; 3],
    specular_color: [f64; 3],
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
struct LightJson {
    position: [f64; 3],
    color: [f64; 3],

    #[serde(rename = "radial-a0", default)]
    radial_a0: f64,
    #[serde(rename = "radial-a1", default)]
    radial_a1: f64,
    #[serde(rename = "radial-a2", default)]
    radial_a2: f64,
    #[serde(rename = "angular-a0", default)]
    angular_a0: f64,
}

/// Range checks for the fields of one record, tagging failures with the
/// record's position and type.
struct Validator {
    record: usize,
    kind: &'static str,
}

impl Validator {
    fn invalid(&self, field: &'static str, reason: String) -> Error {
        Error::InvalidField { record: self.record, kind: self.kind, field, reason }
    }

    fn finite(&self, field: &'static str, v: f64) -> Result<f64> {
        if v.is_finite() {
            Ok(v)
        } else {
            Err(self.invalid(field, format!("must be a finite number, got {}", v)))
        }
    }

    fn positive(&self, field: &'static str, v: f64) -> Result<f64> {
        if self.finite(field, v)? > 0.0 {
            Ok(v)
        } else {
            Err(self.invalid(field, format!("must be positive, got {}", v)))
        }
    }

    fn non_negative(&self, field: &'static str, v: f64) -> Result<f64> {
        if self.finite(field, v)? >= 0.0 {
            Ok(v)
        } else {
            Err(self.invalid(field, format!("must not be negative, got {}", v)))
        }
    }

    fn vector(&self, field: &'static str, v: [f64; 3]) -> Result<Tuple3D> {
        for &c in v.iter() {
            self.finite(field, c)?;
        }

        Ok(v.into())
    }

    fn direction(&self, field: &'static str, v: [f64; 3]) -> Result<Tuple3D> {
        let t = self.vector(field, v)?;
        if t.magnitude() > 0.0 {
            Ok(t)
        } else {
            Err(self.invalid(field, "must not be the zero vector".into()))
        }
    }

    /// A surface color, each channel within `[0, 1]`.
    fn surface_color(&self, field: &'static str, v: [f64; 3]) -> Result<Color> {
        for &c in v.iter() {
            if !(0.0..=1.0).contains(&self.finite(field, c)?) {
                return Err(self.invalid(field,
                    format!("channels must lie within [0, 1], got {:?}", v)));
            }
        }

        Ok(v.into())
    }

    /// A light color, each channel at least 0 and unbounded above.
    fn light_color(&self, field: &'static str, v: [f64; 3]) -> Result<Color> {
        for &c in v.iter() {
            if self.finite(field, c)? < 0.0 {
                return Err(self.invalid(field,
                    format!("channels must not be negative, got {:?}", v)));
            }
        }

        Ok(v.into())
    }
}

impl TryFrom<SceneJson> for Scene {
    type Error = Error;

    fn try_from(scene_json: SceneJson) -> Result<Scene> {
        if scene_json.records.is_empty() {
            return Err(Error::EmptyScene);
        }

        let mut camera = None;
        let mut world = World::empty();

        for (record, record_json) in scene_json.records.into_iter().enumerate() {
            match record_json {
                RecordJson::Camera(c) => {
                    let v = Validator { record, kind: "camera" };
                    if camera.is_some() {
                        return Err(Error::DuplicateCamera { record });
                    }

                    camera = Some(Camera::new(
                        v.positive("width", c.width)?,
                        v.positive("height", c.height)?,
                    ));
                },

                RecordJson::Sphere(s) => {
                    let v = Validator { record, kind: "sphere" };
                    let mut sphere = Shape::sphere(
                        v.vector("position", s.position)?,
                        v.positive("radius", s.radius)?,
                    );
                    sphere.material = Material {
                        diffuse: v.surface_color("diffuse_color", s.diffuse_color)?,
                        specular: v.surface_color("specular_color", s.specular_color)?,
                    };

                    world.objects.push(sphere);
                },

                RecordJson::Plane(p) => {
                    let v = Validator { record, kind: "plane" };
                    let mut plane = Shape::plane(
                        v.vector("position", p.position)?,
                        v.direction("normal", p.normal)?,
                    );
                    plane.material = Material {
                        diffuse: v.surface_color("diffuse_color", p.diffuse_color)?,
                        specular: v.surface_color("specular_color", p.specular_color)?,
                    };

                    world.objects.push(plane);
                },

                RecordJson::Light(l) => {
                    let v = Validator { record, kind: "light" };
                    world.lights.push(Light {
                        position: v.vector("position", l.position)?,
                        color: v.light_color("color", l.color)?,
                        radial_a0: v.non_negative("radial-a0", l.radial_a0)?,
                        radial_a1: v.non_negative("radial-a1", l.radial_a1)?,
                        radial_a2: v.non_negative("radial-a2", l.radial_a2)?,
                        angular_a0: v.non_negative("angular-a0", l.angular_a0)?,
                    });
                },
            }
        }

        let camera = camera.ok_or(Error::MissingCamera)?;
        Ok(Scene { camera, world })
    }
}

#[cfg(test)]
use crate::shape::ShapeType;

#[test]
fn load_full_scene() {
    let scene = Scene::from_json(r#"[
        { "type": "camera", "width": 2.0, "height": 1.5 },
        { "type": "sphere", "position": [0, 1, 5], "radius": 2.0,
          "diffuse_color": [1, 0, 0], "specular_color": [0.5, 0.5, 0.5] },
        { "type": "light", "position": [1, 2, 3], "color": [2, 2, 2],
          "radial-a2": 0.125, "radial-a1": 0.25, "radial-a0": 1,
          "angular-a0": 0 },
        { "type": "plane", "position": [0, -1, 0], "normal": [0, 3, 0],
          "diffuse_color": [0, 0, 1], "specular_color": [0, 0, 0] }
    ]"#).unwrap();

    assert_eq!(scene.camera, Camera::new(2.0, 1.5));

    assert_eq!(scene.world.objects.len(), 2);
    assert_eq!(scene.world.objects[0].ty, ShapeType::Sphere {
        center: Tuple3D::new(0.0, 1.0, 5.0),
        radius: 2.0,
    });
    assert_eq!(scene.world.objects[0].material.specular,
        Color::rgb(0.5, 0.5, 0.5));
    assert_eq!(scene.world.objects[1].ty, ShapeType::Plane {
        point: Tuple3D::new(0.0, -1.0, 0.0),
        normal: Tuple3D::new(0.0, 1.0, 0.0),
    });

    assert_eq!(scene.world.lights, vec![Light {
        position: Tuple3D::new(1.0, 2.0, 3.0),
        color: Color::rgb(2.0, 2.0, 2.0),
        radial_a0: 1.0,
        radial_a1: 0.25,
        radial_a2: 0.125,
        angular_a0: 0.0,
    }]);
}

#[test]
fn light_attenuation_defaults_to_zero() {
    let scene = Scene::from_json(r#"[
        { "type": "camera", "width": 1, "height": 1 },
        { "type": "light", "position": [0, 0, 0], "color": [1, 1, 1] }
    ]"#).unwrap();

    let light = scene.world.lights[0];
    assert_eq!(light.radial_a0, 0.0);
    assert_eq!(light.radial_attenuation(12.0), 1.0);
}

#[test]
fn missing_camera() {
    let e = Scene::from_json(r#"[
        { "type": "light", "position": [0, 0, 0], "color": [1, 1, 1] }
    ]"#).unwrap_err();

    assert!(matches!(e, Error::MissingCamera));
}

#[test]
fn duplicate_camera() {
    let e = Scene::from_json(r#"[
        { "type": "camera", "width": 1, "height": 1 },
        { "type": "camera", "width": 1, "height": 1 }
    ]"#).unwrap_err();

    assert!(matches!(e, Error::DuplicateCamera { record: 1 }));
}

#[test]
fn empty_scene() {
    assert!(matches!(Scene::from_json("[]").unwrap_err(), Error::EmptyScene));
}

#[test]
fn non_positive_camera_dimension() {
    let e = Scene::from_json(r#"[
        { "type": "camera", "width": 1, "height": 0 }
    ]"#).unwrap_err();

    assert!(matches!(e,
        Error::InvalidField { record: 0, kind: "camera", field: "height", .. }));
}

#[test]
fn non_positive_radius() {
    let e = Scene::from_json(r#"[
        { "type": "camera", "width": 1, "height": 1 },
        { "type": "sphere", "position": [0, 0, 5], "radius": -1,
          "diffuse_color": [1, 0, 0], "specular_color": [0, 0, 0] }
    ]"#).unwrap_err();

    assert!(matches!(e,
        Error::InvalidField { record: 1, kind: "sphere", field: "radius", .. }));
}

#[test]
fn surface_color_out_of_range() {
    let e = Scene::from_json(r#"[
        { "type": "camera", "width": 1, "height": 1 },
        { "type": "plane", "position": [0, 0, 5], "normal": [0, 0, -1],
          "diffuse_color": [1, 0, 0], "specular_color": [0, 1.5, 0] }
    ]"#).unwrap_err();

    assert!(matches!(e,
        Error::InvalidField { field: "specular_color", .. }));
}

#[test]
fn negative_light_values() {
    let e = Scene::from_json(r#"[
        { "type": "camera", "width": 1, "height": 1 },
        { "type": "light", "position": [0, 0, 0], "color": [1, -1, 1] }
    ]"#).unwrap_err();
    assert!(matches!(e, Error::InvalidField { kind: "light", field: "color", .. }));

    let e = Scene::from_json(r#"[
        { "type": "camera", "width": 1, "height": 1 },
        { "type": "light", "position": [0, 0, 0], "color": [1, 1, 1],
          "radial-a1": -0.5 }
    ]"#).unwrap_err();
    assert!(matches!(e, Error::InvalidField { field: "radial-a1", .. }));
}

#[test]
fn zero_plane_normal() {
    let e = Scene::from_json(r#"[
        { "type": "camera", "width": 1, "height": 1 },
        { "type": "plane", "position": [0, 0, 5], "normal": [0, 0, 0],
          "diffuse_color": [1, 0, 0], "specular_color": [0, 0, 0] }
    ]"#).unwrap_err();

    assert!(matches!(e, Error::InvalidField { field: "normal", .. }));
}

#[test]
fn field_on_wrong_record_type() {
    // Only lights have a plain `color`
    let e = Scene::from_json(r#"[
        { "type": "camera", "width": 1, "height": 1 },
        { "type": "sphere", "position": [0, 0, 5], "radius": 1,
          "color": [1, 0, 0], "diffuse_color": [1, 0, 0],
          "specular_color": [0, 0, 0] }
    ]"#).unwrap_err();

    assert!(matches!(e, Error::Json(_)));
}

#[test]
fn malformed_records() {
    for text in [
        r#"{ "type": "camera", "width": 1, "height": 1 }"#,
        r#"[ { "type": "cube" } ]"#,
        r#"[ { "type": "camera", "width": 1 } ]"#,
        r#"[ { "type": "light", "position": [0, 0], "color": [1, 1, 1] } ]"#,
        r#"[ { "type": "camera", "width": 1, "height": 1 }"#,
    ].iter() {
        assert!(matches!(Scene::from_json(text).unwrap_err(), Error::Json(_)),
            "accepted {}", text);
    }
}
