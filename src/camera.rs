use crate::consts::VIEWPORT_DISTANCE;
use crate::ray::Ray3D;
use crate::tuple::Tuple3D;
use crate::color::Color;
use crate::world::World;
use crate::canvas::Canvas;

/// A camera record for generating a canvas.
///
/// The camera sits at the world origin looking down +Z. Its viewport is a
/// `width` by `height` rectangle centered on the Z axis, one unit in front of
/// the camera; every pixel of the canvas maps onto a cell of that viewport.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Camera {
    /// The horizontal extent of the viewport, in world units.
    pub width: f64,

    /// The vertical extent of the viewport, in world units.
    pub height: f64,
}

impl Camera {
    pub fn new(width: f64, height: f64) -> Camera {
        Camera { width, height }
    }

    /// Builds the primary ray through the center of pixel (`px`, `py`) on a
    /// `hsize` by `vsize` canvas.
    ///
    /// Row 0 is the top of the image, so the vertical axis is flipped.
    pub fn ray_for_pixel(&self, px: usize, py: usize, hsize: usize,
        vsize: usize) -> Ray3D {
        let pixel_width = self.width / hsize as f64;
        let pixel_height = self.height / vsize as f64;

        let x = -self.width / 2.0 + pixel_width * (px as f64 + 0.5);
        let y = -(-self.height / 2.0 + pixel_height * (py as f64 + 0.5));

        Ray3D::new(Tuple3D::zero(), Tuple3D::new(x, y, VIEWPORT_DISTANCE))
    }

    /// Casts one ray per pixel into `w`, filling every pixel of `image`.
    ///
    /// Pixels whose ray hits nothing are painted `background`.
    pub fn render(&self, w: &World, image: &mut Canvas, background: Color) {
        let hsize = image.width;
        let vsize = image.height;

        log::debug!("viewport {}x{}, pixel size {}x{}",
            self.width, self.height,
            self.width / hsize as f64, self.height / vsize as f64);

        for y in 0..vsize {
            for x in 0..hsize {
                let ray = self.ray_for_pixel(x, y, hsize, vsize);
                let color = w.color_at(&ray, background);
                image.write_pixel(x, y, &color);
            }
        }
    }
}

#[test]
fn ray_through_center() {
    let c = Camera::new(2.0, 2.0);
    let r = c.ray_for_pixel(0, 0, 1, 1);

    assert_eq!(r.origin, Tuple3D::zero());
    assert_eq!(r.direction, Tuple3D::new(0.0, 0.0, 1.0));
}

#[test]
fn ray_through_top_left_corner() {
    let c = Camera::new(2.0, 2.0);
    let r = c.ray_for_pixel(0, 0, 2, 2);

    // Viewport point (-0.5, 0.5, 1)
    let e = Tuple3D::new(-0.5, 0.5, 1.0).normalize();
    assert_eq!(r.direction, e);
    assert!(r.direction.y > 0.0);
}

#[test]
fn ray_through_bottom_right_corner() {
    let c = Camera::new(4.0, 2.0);
    let r = c.ray_for_pixel(3, 1, 4, 2);

    // Viewport point (1.5, -0.5, 1)
    assert_eq!(r.direction, Tuple3D::new(1.5, -0.5, 1.0).normalize());
}

#[test]
fn render_background_only() {
    let w = World::empty();
    let c = Camera::new(1.0, 1.0);
    let mut image = Canvas::new(3, 2);
    let background = Color::rgb(0.0, 0.5, 1.0);

    c.render(&w, &mut image, background);

    for y in 0..2 {
        for x in 0..3 {
            assert_eq!(image.read_pixel(x, y), Some([0, 128, 255]));
        }
    }
}

#[test]
fn render_lit_red_sphere() {
    use crate::shape::Shape;
    use crate::light::{ Light, Material };

    let mut sphere = Shape::sphere(Tuple3D::new(0.0, 0.0, 5.0), 1.0);
    sphere.material = Material {
        diffuse: Color::rgb(1.0, 0.0, 0.0),
        specular: Color::black(),
    };

    let w = World {
        objects: vec![sphere],
        lights: vec![Light::new(Color::white(), Tuple3D::zero())],
    };

    let mut image = Canvas::new(1, 1);
    Camera::new(2.0, 2.0).render(&w, &mut image, Color::black());

    let [r, g, b] = image.read_pixel(0, 0).unwrap();
    assert!(r > 0);
    assert!(r > g && r > b);
}
