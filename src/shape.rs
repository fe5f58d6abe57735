use crate::tuple::Tuple3D;
use crate::ray::Ray3D;
use crate::light::Material;
use crate::geometry::{ sphere_intersect, plane_intersect };

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ShapeType {
    /// A sphere around `center`.
    Sphere { center: Tuple3D, radius: f64 },

    /// An infinite plane through `point`, facing along `normal`.
    Plane { point: Tuple3D, normal: Tuple3D },
}

/// A renderable primitive: its geometry and the material covering it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Shape {
    pub ty: ShapeType,
    pub material: Material,
}

impl Shape {
    /// Creates a sphere with the default material.
    pub fn sphere(center: Tuple3D, radius: f64) -> Shape {
        Shape {
            ty: ShapeType::Sphere { center, radius },
            material: Default::default(),
        }
    }

    /// Creates a plane with the default material.
    ///
    /// The normal is normalized here, so it can be used directly when
    /// shading. It must not be the zero vector.
    pub fn plane(point: Tuple3D, normal: Tuple3D) -> Shape {
        Shape {
            ty: ShapeType::Plane { point, normal: normal.normalize() },
            material: Default::default(),
        }
    }

    /// A short name for the kind of shape, for diagnostics.
    pub fn kind(&self) -> &'static str {
        match self.ty {
            ShapeType::Sphere { .. } => "sphere",
            ShapeType::Plane { .. } => "plane",
        }
    }

    /// Distance along `ray` to this shape, if the ray hits it.
    pub fn intersect(&self, ray: &Ray3D) -> Option<f64> {
        match self.ty {
            ShapeType::Sphere { center, radius }
                => sphere_intersect(ray, center, radius),
            ShapeType::Plane { point, normal }
                => plane_intersect(ray, point, normal),
        }
    }

    /// The unit surface normal at `point`, assumed to lie on the shape.
    ///
    /// Sphere normals always point outward, even when viewed from inside.
    pub fn normal_at(&self, point: Tuple3D) -> Tuple3D {
        match self.ty {
            ShapeType::Sphere { center, .. } => (point - center).normalize(),
            ShapeType::Plane { normal, .. } => normal,
        }
    }
}

#[test]
fn plane_normal_is_normalized() {
    let p = Shape::plane(Tuple3D::zero(), Tuple3D::new(0.0, 0.0, -4.0));

    assert_eq!(p.normal_at(Tuple3D::new(7.0, 3.0, 0.0)),
        Tuple3D::new(0.0, 0.0, -1.0));
}

#[test]
fn sphere_normal_points_outward() {
    let s = Shape::sphere(Tuple3D::new(1.0, 1.0, 1.0), 2.0);

    assert_eq!(s.normal_at(Tuple3D::new(1.0, 3.0, 1.0)),
        Tuple3D::new(0.0, 1.0, 0.0));
    assert_eq!(s.normal_at(Tuple3D::new(1.0, 1.0, -1.0)),
        Tuple3D::new(0.0, 0.0, -1.0));
}

#[test]
fn intersect_dispatches_on_type() {
    let r = Ray3D::new(Tuple3D::zero(), Tuple3D::new(0.0, 0.0, 1.0));
    let s = Shape::sphere(Tuple3D::new(0.0, 0.0, 5.0), 1.0);
    let p = Shape::plane(Tuple3D::new(0.0, 0.0, 9.0), Tuple3D::new(0.0, 0.0, -1.0));

    assert_eq!(s.intersect(&r), Some(4.0));
    assert_eq!(p.intersect(&r), Some(9.0));
    assert_eq!(s.kind(), "sphere");
    assert_eq!(p.kind(), "plane");
}
