use crate::consts::SHININESS;
use crate::color::Color;
use crate::tuple::Tuple3D;

/// A point light.
///
/// Light leaves `position` in every direction with `color`, losing intensity
/// with distance according to the radial coefficients:
///
/// `f_rad(d) = 1 / (radial_a2 * d^2 + radial_a1 * d + radial_a0)`
///
/// `angular_a0` is carried along from the scene description for spot lights,
/// but no cone direction or angle exists to apply it against.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Light {
    pub position: Tuple3D,
    pub color: Color,

    pub radial_a0: f64,
    pub radial_a1: f64,
    pub radial_a2: f64,
    pub angular_a0: f64,
}

impl Default for Light {
    fn default() -> Light {
        Light {
            position: Tuple3D::zero(),
            color: Color::white(),

            radial_a0: 1.0,
            radial_a1: 0.0,
            radial_a2: 0.0,
            angular_a0: 0.0,
        }
    }
}

impl Light {
    /// Creates a light without falloff.
    pub fn new(color: Color, position: Tuple3D) -> Light {
        Light { color, position, ..Default::default() }
    }

    /// Intensity factor for a point `distance` away from the light.
    ///
    /// With all three coefficients zero there is no falloff and the factor is
    /// exactly 1.
    pub fn radial_attenuation(&self, distance: f64) -> f64 {
        if self.radial_a0 == 0.0 && self.radial_a1 == 0.0
            && self.radial_a2 == 0.0 {
            return 1.0;
        }

        1.0 / (self.radial_a2 * distance.powi(2)
            + self.radial_a1 * distance
            + self.radial_a0)
    }

    /// Intensity factor for light leaving along `_direction` (pointing from
    /// the light to the lit point).
    ///
    /// Every light is omnidirectional, so this is always 1.
    pub fn angular_attenuation(&self, _direction: Tuple3D) -> f64 {
        1.0
    }
}

/// The surface colors of a shape.
///
/// Both colors have components in `[0, 1]`.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Material {
    pub diffuse: Color,
    pub specular: Color,
}

impl Default for Material {
    fn default() -> Material {
        Material {
            diffuse: Color::white(),
            specular: Color::black(),
        }
    }
}

/// Lambertian diffuse term.
///
/// Surfaces facing away from the light receive nothing.
pub fn diffuse(normalv: Tuple3D, lightv: Tuple3D, light_color: Color,
    surface_color: Color) -> Color {
    let light_dot_normal = normalv.dot(&lightv);
    if light_dot_normal <= 0.0 {
        return Color::black();
    }

    surface_color * light_color * light_dot_normal
}

/// Phong specular term.
///
/// `reflectv` is the light vector mirrored about the normal and `eyev`
/// points from the surface towards the viewer.
pub fn specular(shininess: f64, lightv: Tuple3D, reflectv: Tuple3D,
    normalv: Tuple3D, eyev: Tuple3D, surface_color: Color, light_color: Color)
    -> Color {
    // Light behind the surface can't produce a highlight
    if normalv.dot(&lightv) <= 0.0 {
        return Color::black();
    }

    let reflect_dot_eye = reflectv.dot(&eyev);
    if reflect_dot_eye <= 0.0 {
        return Color::black();
    }

    surface_color * light_color * reflect_dot_eye.powf(shininess)
}

/// Calculate the light a single source contributes to a point.
///
/// Takes the material and normal at `point`, the eye vector and the light,
/// and returns the diffuse and specular contribution after attenuation. There
/// is no ambient term: a point in shadow (`in_shadow`) receives nothing from
/// this light, as does a point sitting exactly on the light.
pub fn lighting(m: Material, light: &Light, point: Tuple3D, eyev: Tuple3D,
    normalv: Tuple3D, in_shadow: bool) -> Color {
    if in_shadow {
        return Color::black();
    }

    let to_light = light.position - point;
    let distance = to_light.magnitude();
    if distance == 0.0 {
        return Color::black();
    }

    let lightv = to_light.normalize();
    let reflectv = (-lightv).reflect(&normalv);

    let diffuse = diffuse(normalv, lightv, light.color, m.diffuse);
    let specular = specular(SHININESS, lightv, reflectv, normalv, eyev,
        m.specular, light.color);

    let attenuation = light.radial_attenuation(distance)
        * light.angular_attenuation(-lightv);

    (diffuse + specular) * attenuation
}

#[cfg(test)]
fn shiny() -> Material {
    Material { diffuse: Color::white(), specular: Color::white() }
}

#[test]
fn radial_attenuation_all_zero_is_one() {
    let light = Light {
        radial_a0: 0.0,
        radial_a1: 0.0,
        radial_a2: 0.0,
        ..Default::default()
    };

    for &d in [0.001, 1.0, 3.5, 1000.0].iter() {
        assert_eq!(light.radial_attenuation(d), 1.0);
    }
}

#[test]
fn radial_attenuation_quadratic() {
    let light = Light {
        radial_a0: 1.0,
        radial_a1: 0.5,
        radial_a2: 0.25,
        ..Default::default()
    };

    // 1 / (0.25 * 4 + 0.5 * 2 + 1)
    assert!(crate::feq(light.radial_attenuation(2.0), 1.0 / 3.0));
}

#[test]
fn angular_attenuation_is_pass_through() {
    let light = Light { angular_a0: 4.0, ..Default::default() };

    assert_eq!(light.angular_attenuation(Tuple3D::new(0.0, -1.0, 0.0)), 1.0);
}

#[test]
fn diffuse_facing_away_is_black() {
    let n = Tuple3D::new(0.0, 0.0, -1.0);
    let l = Tuple3D::new(0.0, 0.0, 1.0);

    assert_eq!(diffuse(n, l, Color::white(), Color::white()), Color::black());
}

#[test]
fn diffuse_filters_light_through_surface() {
    let n = Tuple3D::new(0.0, 1.0, 0.0);
    let l = Tuple3D::new(0.0, 0.5, 3.0f64.sqrt() / 2.0);

    assert_eq!(diffuse(n, l, Color::rgb(1.0, 1.0, 0.5), Color::rgb(0.8, 0.2, 1.0)),
        Color::rgb(0.4, 0.1, 0.25));
}

#[test]
fn specular_light_behind_surface_is_black() {
    let n = Tuple3D::new(0.0, 0.0, -1.0);
    let l = Tuple3D::new(0.0, 0.0, 1.0);
    let r = (-l).reflect(&n);
    let e = Tuple3D::new(0.0, 0.0, -1.0);

    assert_eq!(specular(20.0, l, r, n, e, Color::white(), Color::white()),
        Color::black());
}

#[test]
fn eye_between_light_and_surface() {
    let light = Light::new(Color::white(), Tuple3D::new(0.0, 0.0, -10.0));
    let eyev = Tuple3D::new(0.0, 0.0, -1.0);
    let normalv = Tuple3D::new(0.0, 0.0, -1.0);

    let res = lighting(shiny(), &light, Tuple3D::zero(), eyev, normalv, false);
    assert_eq!(res, Color::rgb(2.0, 2.0, 2.0));
}

#[test]
fn eye_between_light_and_surface_offset_45() {
    let light = Light::new(Color::white(), Tuple3D::new(0.0, 0.0, -10.0));
    let eyev = Tuple3D::new(0.0, 2.0f64.sqrt() / 2.0, -(2.0f64.sqrt()) / 2.0);
    let normalv = Tuple3D::new(0.0, 0.0, -1.0);

    // Highlight is (sqrt(2)/2)^20 = 1/1024
    let res = lighting(shiny(), &light, Tuple3D::zero(), eyev, normalv, false);
    assert_eq!(res, Color::rgb(1.00098, 1.00098, 1.00098));
}

#[test]
fn eye_in_path_of_reflection() {
    let light = Light::new(Color::white(), Tuple3D::new(0.0, 10.0, -10.0));
    let eyev = Tuple3D::new(0.0, -(2.0f64.sqrt()) / 2.0, -(2.0f64.sqrt()) / 2.0);
    let normalv = Tuple3D::new(0.0, 0.0, -1.0);

    let res = lighting(shiny(), &light, Tuple3D::zero(), eyev, normalv, false);
    assert_eq!(res, Color::rgb(1.70711, 1.70711, 1.70711));
}

#[test]
fn light_behind_surface() {
    let light = Light::new(Color::white(), Tuple3D::new(0.0, 0.0, 10.0));
    let eyev = Tuple3D::new(0.0, 0.0, -1.0);
    let normalv = Tuple3D::new(0.0, 0.0, -1.0);

    let res = lighting(shiny(), &light, Tuple3D::zero(), eyev, normalv, false);
    assert_eq!(res, Color::black());
}

#[test]
fn lighting_in_shadow_is_black() {
    let light = Light::new(Color::white(), Tuple3D::new(0.0, 0.0, -10.0));
    let eyev = Tuple3D::new(0.0, 0.0, -1.0);
    let normalv = Tuple3D::new(0.0, 0.0, -1.0);

    let res = lighting(shiny(), &light, Tuple3D::zero(), eyev, normalv, true);
    assert_eq!(res, Color::black());
}

#[test]
fn lighting_applies_radial_falloff() {
    let light = Light {
        position: Tuple3D::new(0.0, 0.0, -10.0),
        radial_a0: 1.0,
        radial_a2: 0.01,
        ..Default::default()
    };
    let eyev = Tuple3D::new(0.0, 0.0, -1.0);
    let normalv = Tuple3D::new(0.0, 0.0, -1.0);

    // (1 diffuse + 1 specular) / (0.01 * 100 + 1)
    let res = lighting(shiny(), &light, Tuple3D::zero(), eyev, normalv, false);
    assert_eq!(res, Color::rgb(1.0, 1.0, 1.0));
}

#[test]
fn light_at_point_contributes_nothing() {
    let light = Light::new(Color::white(), Tuple3D::zero());
    let normalv = Tuple3D::new(0.0, 0.0, -1.0);

    let res = lighting(shiny(), &light, Tuple3D::zero(), normalv, normalv, false);
    assert_eq!(res, Color::black());
}
