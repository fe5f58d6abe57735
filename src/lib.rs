pub mod consts;
pub mod error;

pub mod tuple;
pub mod ray;
pub mod geometry;
pub mod shape;
pub mod light;
pub mod intersect;

pub mod world;
pub mod camera;

pub mod color;
pub mod canvas;

pub mod scene;
pub mod config;

pub use error::{ Error, Result };

use consts::FEQ_EPSILON;

/// Approximate floating point equality, used by the `PartialEq`
/// implementations on `Tuple3D` and `Color`.
pub fn feq(left: f64, right: f64) -> bool {
    (left - right).abs() < FEQ_EPSILON
}
