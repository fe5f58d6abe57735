use crate::consts::PLANE_PARALLEL_EPSILON;
use crate::tuple::Tuple3D;
use crate::ray::Ray3D;

/// Intersects a ray with a sphere.
///
/// Solves `|O + tD - C|^2 = r^2` for `t`. Because the ray direction is unit
/// length the quadratic's `a` coefficient is 1 and drops out.
///
/// The nearer root is preferred. If the ray starts inside the sphere the
/// nearer root is negative and the farther one is used instead. A sphere
/// entirely behind the ray origin is a miss, as is a negative discriminant.
/// A tangent ray (zero discriminant) hits at its single root.
pub fn sphere_intersect(ray: &Ray3D, center: Tuple3D, radius: f64)
    -> Option<f64> {
    let center_to_origin = ray.origin - center;

    let b = 2.0 * ray.direction.dot(&center_to_origin);
    let c = center_to_origin.dot(&center_to_origin) - radius.powi(2);

    let discriminant = b.powi(2) - 4.0 * c;
    if discriminant < 0.0 {
        return None;
    }

    let root = discriminant.sqrt();
    let mut t = (-b - root) / 2.0;
    if t < 0.0 {
        t = (-b + root) / 2.0;
    }

    if t < 0.0 {
        None
    } else {
        Some(t)
    }
}

/// Intersects a ray with an infinite plane.
///
/// The plane is given by any `point` on it and its `normal`, which doesn't
/// need to be unit length. Rays running (nearly) parallel to the plane never
/// hit it, nor do planes behind the ray origin.
pub fn plane_intersect(ray: &Ray3D, point: Tuple3D, normal: Tuple3D)
    -> Option<f64> {
    let normal = normal.normalize();

    let vd = normal.dot(&ray.direction);
    if vd.abs() < PLANE_PARALLEL_EPSILON {
        return None;
    }

    let t = normal.dot(&(point - ray.origin)) / vd;
    if t < 0.0 {
        None
    } else {
        Some(t)
    }
}

#[test]
fn sphere_hit_head_on_is_distance_minus_radius() {
    let center = Tuple3D::new(0.0, 0.0, 10.0);

    for &radius in [0.5, 1.0, 2.0, 7.5].iter() {
        let r = Ray3D::new(Tuple3D::zero(), Tuple3D::new(0.0, 0.0, 1.0));
        let t = sphere_intersect(&r, center, radius).unwrap();
        assert!(crate::feq(t, 10.0 - radius));
    }

    // Off-axis approach, still aimed at the center
    let origin = Tuple3D::new(3.0, -4.0, 0.0);
    let center = Tuple3D::new(6.0, 0.0, 12.0);
    let r = Ray3D::new(origin, center - origin);
    let t = sphere_intersect(&r, center, 1.0).unwrap();
    assert!(crate::feq(t, 12.0));
}

#[test]
fn sphere_tangent_ray_hits_once() {
    let r = Ray3D::new(Tuple3D::new(0.0, 1.0, -5.0), Tuple3D::new(0.0, 0.0, 1.0));

    assert_eq!(sphere_intersect(&r, Tuple3D::zero(), 1.0), Some(5.0));
}

#[test]
fn sphere_missed() {
    let r = Ray3D::new(Tuple3D::new(0.0, 2.0, -5.0), Tuple3D::new(0.0, 0.0, 1.0));

    assert_eq!(sphere_intersect(&r, Tuple3D::zero(), 1.0), None);
}

#[test]
fn sphere_from_inside_uses_far_root() {
    let r = Ray3D::new(Tuple3D::zero(), Tuple3D::new(0.0, 0.0, 1.0));

    assert_eq!(sphere_intersect(&r, Tuple3D::zero(), 1.0), Some(1.0));
}

#[test]
fn sphere_behind_ray() {
    let r = Ray3D::new(Tuple3D::new(0.0, 0.0, 5.0), Tuple3D::new(0.0, 0.0, 1.0));

    assert_eq!(sphere_intersect(&r, Tuple3D::zero(), 1.0), None);
}

#[test]
fn sphere_off_origin_uses_relative_vector() {
    // A sphere nowhere near the world origin must still be hit where expected
    let r = Ray3D::new(Tuple3D::new(10.0, 10.0, 0.0), Tuple3D::new(0.0, 0.0, 1.0));

    assert_eq!(sphere_intersect(&r, Tuple3D::new(10.0, 10.0, 5.0), 2.0),
        Some(3.0));
}

#[test]
fn plane_hit_from_above() {
    let r = Ray3D::new(Tuple3D::new(0.0, 1.0, 0.0), Tuple3D::new(0.0, -1.0, 0.0));
    let t = plane_intersect(&r, Tuple3D::zero(), Tuple3D::new(0.0, 1.0, 0.0));

    assert_eq!(t, Some(1.0));
}

#[test]
fn plane_hit_from_below_with_unnormalized_normal() {
    let r = Ray3D::new(Tuple3D::new(0.0, -2.0, 0.0), Tuple3D::new(0.0, 1.0, 1.0));
    let t = plane_intersect(&r, Tuple3D::zero(), Tuple3D::new(0.0, 5.0, 0.0))
        .unwrap();

    assert!(crate::feq(t, 2.0 * 2.0f64.sqrt()));
}

#[test]
fn plane_parallel_ray_never_hits() {
    let normal = Tuple3D::new(0.0, 1.0, 0.0);
    let direction = Tuple3D::new(1.0, 0.0, 1.0);

    for &y in [-10.0, -1.0, 0.0, 1.0, 10.0].iter() {
        let r = Ray3D::new(Tuple3D::new(0.0, y, 0.0), direction);
        assert_eq!(plane_intersect(&r, Tuple3D::zero(), normal), None);
    }
}

#[test]
fn plane_behind_ray() {
    let r = Ray3D::new(Tuple3D::new(0.0, 1.0, 0.0), Tuple3D::new(0.0, 1.0, 0.0));
    let t = plane_intersect(&r, Tuple3D::zero(), Tuple3D::new(0.0, 1.0, 0.0));

    assert_eq!(t, None);
}
