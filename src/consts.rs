use crate::color::Color;

// Floating point comparisons
pub const FEQ_EPSILON: f64 = 0.0001;

// Rays whose direction is this close to perpendicular with a plane's normal
// are treated as parallel to it.
pub const PLANE_PARALLEL_EPSILON: f64 = 0.0001;

// Phong specular exponent, shared by every surface
pub const SHININESS: f64 = 20.0;

// Output quantization
pub const MAX_COLOR_VALUE: f64 = 255.0;

// Distance from the camera to the viewport, along +Z
pub const VIEWPORT_DISTANCE: f64 = 1.0;

// Runtime defaults
pub const DEFAULT_BACKGROUND: Color = Color { r: 0.0, g: 0.0, b: 0.0 };
