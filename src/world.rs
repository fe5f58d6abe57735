use crate::ray::Ray3D;
use crate::tuple::Tuple3D;
use crate::color::Color;
use crate::shape::Shape;
use crate::light::{ Light, lighting };
use crate::intersect::{ Intersection, nearest_hit };

/// A world with objects and lights.
///
/// Objects are kept in declaration order; an object's index in `objects` is
/// its identity during shading. The world is built once and only read while
/// rendering.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct World {
    pub objects: Vec<Shape>,
    pub lights: Vec<Light>,
}

impl World {
    /// Creates an empty world with no objects and no lights.
    pub fn empty() -> World {
        Default::default()
    }

    /// Finds the closest object hit by a ray. See `intersect::nearest_hit`.
    pub fn nearest_hit(&self, r: &Ray3D, exclude: Option<usize>,
        max_distance: f64) -> Option<Intersection> {
        nearest_hit(&self.objects, r, exclude, max_distance)
    }

    /// Determines whether `light` is blocked from reaching point `p`.
    ///
    /// `p` lies on the object at index `on`, which is left out of the test.
    /// Anything between `p` and the light (inclusive of the light's own
    /// distance) casts a shadow; objects beyond the light don't.
    pub fn is_shadowed(&self, p: Tuple3D, on: usize, light: &Light) -> bool {
        let v = light.position - p;
        let distance = v.magnitude();
        if distance == 0.0 {
            return false;
        }

        let r = Ray3D::new(p, v);
        self.nearest_hit(&r, Some(on), distance).is_some()
    }

    /// Calculates the color for a hit, summing up every light that reaches it.
    ///
    /// The result isn't clamped; several lights can push channels above 1.
    pub fn shade_hit(&self, r: &Ray3D, hit: &Intersection) -> Color {
        let obj = &self.objects[hit.index];
        let point = r.position(hit.t);
        let eyev = -r.direction;
        let normalv = obj.normal_at(point);

        self.lights.iter().fold(Color::black(), |acc, light| {
            let in_shadow = self.is_shadowed(point, hit.index, light);
            acc + lighting(obj.material, light, point, eyev, normalv, in_shadow)
        })
    }

    /// Determines the color seen along a primary ray.
    ///
    /// Rays which hit nothing see `background`.
    pub fn color_at(&self, r: &Ray3D, background: Color) -> Color {
        match self.nearest_hit(r, None, f64::INFINITY) {
            Some(hit) if hit.t.is_finite() => self.shade_hit(r, &hit),
            _ => background,
        }
    }
}

#[cfg(test)]
use crate::light::Material;

#[cfg(test)]
fn red_sphere_world() -> World {
    let mut sphere = Shape::sphere(Tuple3D::new(0.0, 0.0, 5.0), 1.0);
    sphere.material = Material {
        diffuse: Color::rgb(1.0, 0.0, 0.0),
        specular: Color::black(),
    };

    World {
        objects: vec![sphere],
        lights: vec![Light::new(Color::white(), Tuple3D::zero())],
    }
}

#[test]
fn shade_hit_from_front() {
    let w = red_sphere_world();
    let r = Ray3D::new(Tuple3D::zero(), Tuple3D::new(0.0, 0.0, 1.0));
    let hit = w.nearest_hit(&r, None, f64::INFINITY).unwrap();

    assert_eq!(hit, Intersection { t: 4.0, index: 0 });
    assert_eq!(w.shade_hit(&r, &hit), Color::rgb(1.0, 0.0, 0.0));
}

#[test]
fn shade_hit_sums_lights_unclamped() {
    let mut w = red_sphere_world();
    w.lights.push(Light::new(Color::rgb(2.0, 1.0, 1.0), Tuple3D::zero()));
    let r = Ray3D::new(Tuple3D::zero(), Tuple3D::new(0.0, 0.0, 1.0));
    let hit = w.nearest_hit(&r, None, f64::INFINITY).unwrap();

    assert_eq!(w.shade_hit(&r, &hit), Color::rgb(3.0, 0.0, 0.0));
}

#[test]
fn shade_hit_without_lights_is_black() {
    let mut w = red_sphere_world();
    w.lights.clear();
    let r = Ray3D::new(Tuple3D::zero(), Tuple3D::new(0.0, 0.0, 1.0));
    let hit = w.nearest_hit(&r, None, f64::INFINITY).unwrap();

    assert_eq!(w.shade_hit(&r, &hit), Color::black());
}

#[test]
fn shade_hit_in_shadow() {
    let mut w = red_sphere_world();
    // A small sphere between the camera-side light and the big one
    w.objects.push(Shape::sphere(Tuple3D::new(0.0, 0.0, 2.0), 0.5));

    let r = Ray3D::new(Tuple3D::new(0.0, 0.0, 3.0), Tuple3D::new(0.0, 0.0, 1.0));
    let hit = Intersection { t: 1.0, index: 0 };

    assert_eq!(w.shade_hit(&r, &hit), Color::black());
}

#[test]
fn unblocked_light_ignores_bystanders() {
    let w = red_sphere_world();
    let r = Ray3D::new(Tuple3D::zero(), Tuple3D::new(0.0, 0.0, 1.0));
    let hit = w.nearest_hit(&r, None, f64::INFINITY).unwrap();
    let alone = w.shade_hit(&r, &hit);

    let mut crowded = w.clone();
    crowded.objects.push(Shape::sphere(Tuple3D::new(5.0, 0.0, 5.0), 1.0));
    crowded.objects.push(Shape::sphere(Tuple3D::new(0.0, 0.0, 20.0), 3.0));
    crowded.objects.push(
        Shape::plane(Tuple3D::new(0.0, -10.0, 0.0), Tuple3D::new(0.0, 1.0, 0.0))
    );

    assert_eq!(crowded.shade_hit(&r, &hit), alone);
}

#[test]
fn shadow_object_behind_light() {
    let mut w = red_sphere_world();
    w.objects.push(Shape::sphere(Tuple3D::new(0.0, 0.0, -5.0), 1.0));

    assert!(!w.is_shadowed(Tuple3D::new(0.0, 0.0, 4.0), 0, &w.lights[0]));
}

#[test]
fn shadow_object_between_point_and_light() {
    let mut w = red_sphere_world();
    w.objects.push(Shape::sphere(Tuple3D::new(0.0, 0.0, 2.0), 1.0));

    assert!(w.is_shadowed(Tuple3D::new(0.0, 0.0, 4.0), 0, &w.lights[0]));
}

#[test]
fn hit_object_never_shadows_itself() {
    let w = red_sphere_world();

    // The far side of the sphere faces away from the light, but the sphere
    // itself is excluded from its own shadow test
    assert!(!w.is_shadowed(Tuple3D::new(0.0, 0.0, 6.0), 0, &w.lights[0]));
}

#[test]
fn color_ray_miss() {
    let w = red_sphere_world();
    let r = Ray3D::new(Tuple3D::zero(), Tuple3D::new(0.0, 1.0, 0.0));
    let background = Color::rgb(0.1, 0.2, 0.3);

    assert_eq!(w.color_at(&r, background), background);
}

#[test]
fn color_ray_hit() {
    let w = red_sphere_world();
    let r = Ray3D::new(Tuple3D::zero(), Tuple3D::new(0.0, 0.0, 1.0));

    assert_eq!(w.color_at(&r, Color::black()), Color::rgb(1.0, 0.0, 0.0));
}
