use std::ops::{ Add, Mul };
use std::str::FromStr;

use crate::feq;
use crate::consts::MAX_COLOR_VALUE;
use crate::error::Error;

/// A color.
///
/// Represented conventionally with red-green-blue (RGB) values. Surface
/// colors range from 0.0 to 1.0 inclusive; light colors and accumulated
/// shading results may exceed 1.0 and are only clamped when quantized.
///
/// # Examples
///
/// Filter white light through a red surface:
///
/// ```
/// # use raycast::color::Color;
/// let lit = Color::red() * Color::white();
/// assert_eq!(lit, Color::rgb(1.0, 0.0, 0.0));
/// ```
#[derive(Copy, Clone, Debug, Default, PartialOrd)]
pub struct Color {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

/// Partial equality on two colors.
///
/// Colors are compared component-wise, accounting for possible floating point
/// error in comparisons.
impl PartialEq for Color {
    fn eq(&self, other: &Color) -> bool {
        feq(self.r, other.r) &&
            feq(self.g, other.g) &&
            feq(self.b, other.b)
    }
}

impl From<[f64; 3]> for Color {
    fn from(v: [f64; 3]) -> Color {
        Color { r: v[0], g: v[1], b: v[2] }
    }
}

/// Parses a color written as `r,g,b`, e.g. `0.2,0.4,1`.
impl FromStr for Color {
    type Err = Error;

    fn from_str(s: &str) -> Result<Color, Error> {
        let channels = s.split(',')
            .map(|c| c.trim().parse::<f64>())
            .collect::<Result<Vec<f64>, _>>()
            .map_err(|_| Error::InvalidColor(s.into()))?;

        match channels.as_slice() {
            &[r, g, b] if r.is_finite() && g.is_finite() && b.is_finite()
                => Ok(Color { r, g, b }),
            _ => Err(Error::InvalidColor(s.into())),
        }
    }
}

impl Color {
    /// Creates a color with red, green and blue values.
    pub fn rgb(r: f64, g: f64, b: f64) -> Color {
        Color { r, g, b }
    }

    /// The color black.
    pub fn black() -> Color {
        Color {
            r: 0.0,
            g: 0.0,
            b: 0.0
        }
    }

    /// The color white.
    pub fn white() -> Color {
        Color {
            r: 1.0,
            g: 1.0,
            b: 1.0
        }
    }

    /// The color red.
    pub fn red() -> Color {
        Color {
            r: 1.0,
            g: 0.0,
            b: 0.0
        }
    }

    /// Computes the Hadamard product of two colors.
    ///
    /// The hadamard product multiplies each component of the two colors, and
    /// yields a new color containing those products. This is how a surface
    /// color filters the color of the light hitting it.
    pub fn hadamard(c1: &Color, c2: &Color) -> Color {
        let r = c1.r * c2.r;
        let g = c1.g * c2.g;
        let b = c1.b * c2.b;

        Color { r, g, b }
    }

    /// Clamps every component into `[0, 1]`.
    pub fn clamp(&self) -> Color {
        Color {
            r: self.r.clamp(0.0, 1.0),
            g: self.g.clamp(0.0, 1.0),
            b: self.b.clamp(0.0, 1.0),
        }
    }

    /// Quantizes the color into 8-bit channels.
    ///
    /// Each channel becomes `round(255 * clamp(channel, 0, 1))`.
    ///
    /// ```
    /// # use raycast::color::Color;
    /// let c = Color::rgb(1.5, 0.5, -0.25);
    /// assert_eq!(c.to_rgb8(), [255, 128, 0]);
    /// ```
    pub fn to_rgb8(&self) -> [u8; 3] {
        let c = self.clamp();
        [
            (c.r * MAX_COLOR_VALUE).round() as u8,
            (c.g * MAX_COLOR_VALUE).round() as u8,
            (c.b * MAX_COLOR_VALUE).round() as u8,
        ]
    }
}

/// Adds two colors together.
///
/// Components are added together individually.
impl Add<Color> for Color {
    type Output = Color;

    fn add(self, other: Color) -> Self::Output {
        Color {
            r: self.r + other.r,
            g: self.g + other.g,
            b: self.b + other.b,
        }
    }
}

/// Multiplies a color by a scalar.
///
/// Each component is multiplied by the scalar.
impl Mul<f64> for Color {
    type Output = Color;

    fn mul(self, other: f64) -> Self::Output {
        Color {
            r: self.r * other,
            g: self.g * other,
            b: self.b * other,
        }
    }
}

/// Multiplies a scalar by a color.
impl Mul<Color> for f64 {
    type Output = Color;

    fn mul(self, other: Color) -> Self::Output {
        Color {
            r: self * other.r,
            g: self * other.g,
            b: self * other.b,
        }
    }
}

/// Multiplies a color by a color.
///
/// For colors `c1` and `c2`, `c1 * c2` is shorthand for
/// `Color::hadamard(&c1, &c2)`.
impl Mul<Color> for Color {
    type Output = Color;

    fn mul(self, other: Color) -> Self::Output {
        Color::hadamard(&self, &other)
    }
}

#[test]
fn add_colors() {
    let c1 = Color::rgb(0.9, 0.6, 0.75);
    let c2 = Color::rgb(0.7, 0.1, 0.25);
    let c3 = Color { r: 1.6, g: 0.7, b: 1.0 };

    assert_eq!(c1 + c2, c3);
}

#[test]
fn multiply_colors() {
    let c1 = Color::rgb(0.2, 0.3, 0.4);

    assert_eq!(c1 * 2.0, Color::rgb(0.4, 0.6, 0.8));
    assert_eq!(2.0 * c1, Color::rgb(0.4, 0.6, 0.8));
}

#[test]
fn hadamard_colors() {
    let c1 = Color::rgb(1.0, 0.2, 0.4);
    let c2 = Color::rgb(0.9, 1.0, 0.1);

    assert_eq!(c1 * c2, Color::rgb(0.9, 0.2, 0.04));
}

#[test]
fn quantize_clamps_and_rounds() {
    assert_eq!(Color::black().to_rgb8(), [0, 0, 0]);
    assert_eq!(Color::white().to_rgb8(), [255, 255, 255]);
    assert_eq!(Color::rgb(250.0, -3.0, 0.2).to_rgb8(), [255, 0, 51]);
    assert_eq!(Color::rgb(0.499 / 255.0, 0.501 / 255.0, 0.0).to_rgb8(),
        [0, 1, 0]);
}

#[test]
fn parse_color() {
    assert_eq!("0.2, 0.4,1".parse::<Color>().unwrap(), Color::rgb(0.2, 0.4, 1.0));
    assert!("0.2,0.4".parse::<Color>().is_err());
    assert!("red".parse::<Color>().is_err());
    assert!("1,2,3,4".parse::<Color>().is_err());
    assert!("nan,0,0".parse::<Color>().is_err());
}
