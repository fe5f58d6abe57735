use crate::ray::Ray3D;
use crate::shape::Shape;

/// An intersection.
///
/// `t` is the distance from the ray origin to the hit and `index` is the
/// position of the shape that was hit within the scene's shape list. The
/// index doubles as the shape's identity, e.g. to keep a surface from
/// shadowing itself.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Intersection {
    pub t: f64,
    pub index: usize,
}

/// Finds the closest shape hit by a ray.
///
/// Every shape in `shapes` is tested except the one at `exclude`. Hits
/// farther away than `max_distance` are ignored; pass `f64::INFINITY` to
/// accept hits at any distance. Only strictly positive distances count.
///
/// Returns `None` if no shape qualifies.
pub fn nearest_hit(shapes: &[Shape], ray: &Ray3D, exclude: Option<usize>,
    max_distance: f64) -> Option<Intersection> {
    let mut best: Option<Intersection> = None;

    for (index, shape) in shapes.iter().enumerate() {
        if exclude == Some(index) {
            continue;
        }

        let t = match shape.intersect(ray) {
            Some(t) => t,
            None => continue,
        };

        if t <= 0.0 || t > max_distance {
            continue;
        }

        if best.map_or(true, |b| t < b.t) {
            best = Some(Intersection { t, index });
        }
    }

    best
}

#[cfg(test)]
use crate::tuple::Tuple3D;

#[cfg(test)]
fn row_of_spheres() -> Vec<Shape> {
    vec![
        Shape::sphere(Tuple3D::new(0.0, 0.0, 10.0), 1.0),
        Shape::sphere(Tuple3D::new(0.0, 0.0, 5.0), 1.0),
        Shape::plane(Tuple3D::new(0.0, -1.0, 0.0), Tuple3D::new(0.0, 1.0, 0.0)),
    ]
}

#[test]
fn nearest_hit_picks_closest() {
    let shapes = row_of_spheres();
    let r = Ray3D::new(Tuple3D::zero(), Tuple3D::new(0.0, 0.0, 1.0));

    assert_eq!(nearest_hit(&shapes, &r, None, f64::INFINITY),
        Some(Intersection { t: 4.0, index: 1 }));
}

#[test]
fn nearest_hit_skips_excluded_shape() {
    let shapes = row_of_spheres();
    let r = Ray3D::new(Tuple3D::zero(), Tuple3D::new(0.0, 0.0, 1.0));

    assert_eq!(nearest_hit(&shapes, &r, Some(1), f64::INFINITY),
        Some(Intersection { t: 9.0, index: 0 }));
}

#[test]
fn nearest_hit_respects_max_distance() {
    let shapes = row_of_spheres();
    let r = Ray3D::new(Tuple3D::zero(), Tuple3D::new(0.0, 0.0, 1.0));

    assert_eq!(nearest_hit(&shapes, &r, None, 3.0), None);
    assert_eq!(nearest_hit(&shapes, &r, None, 4.0),
        Some(Intersection { t: 4.0, index: 1 }));
}

#[test]
fn nearest_hit_beyond_sphere_pointing_away() {
    let shapes = vec![Shape::sphere(Tuple3D::zero(), 1.0)];

    for &z in [1.5, 2.0, 10.0, 100.0].iter() {
        let r = Ray3D::new(Tuple3D::new(0.0, 0.0, z), Tuple3D::new(0.0, 0.0, 1.0));
        assert_eq!(nearest_hit(&shapes, &r, None, f64::INFINITY), None);
    }
}

#[test]
fn nearest_hit_in_empty_scene() {
    let r = Ray3D::new(Tuple3D::zero(), Tuple3D::new(0.0, 0.0, 1.0));

    assert_eq!(nearest_hit(&[], &r, None, f64::INFINITY), None);
}

#[test]
fn nearest_hit_finds_plane_below() {
    let shapes = row_of_spheres();
    let r = Ray3D::new(Tuple3D::zero(), Tuple3D::new(0.0, -1.0, 0.0));

    assert_eq!(nearest_hit(&shapes, &r, None, f64::INFINITY),
        Some(Intersection { t: 1.0, index: 2 }));
}
