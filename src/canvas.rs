use std::io;
use std::io::{ BufWriter, Write };
use std::fs::File;
use std::path::Path;
use std::str::FromStr;

use crate::color::Color;
use crate::consts::MAX_COLOR_VALUE;
use crate::error::{ Error, Result };

/// The flavor of PPM image written by `Canvas::write_ppm`.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum PpmFormat {
    /// `P3`: channel values as decimal text.
    Ascii,

    /// `P6`: channel values as raw bytes.
    Binary,
}

impl Default for PpmFormat {
    fn default() -> PpmFormat {
        PpmFormat::Binary
    }
}

impl FromStr for PpmFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<PpmFormat> {
        match s.to_ascii_lowercase().as_str() {
            "p3" | "ascii" => Ok(PpmFormat::Ascii),
            "p6" | "binary" => Ok(PpmFormat::Binary),
            _ => Err(Error::InvalidFormat(s.into())),
        }
    }
}

/// A canvas for drawing pixels.
///
/// The canvas stores the results of the raycaster: one 8-bit RGB triple per
/// pixel, row-major with the top row first. Colors are clamped and quantized
/// as they're written. Once rendering finishes, the `Canvas` can be saved as
/// a PPM image.
#[derive(Clone, Default, Debug, PartialEq)]
pub struct Canvas {
    /// The width of the canvas, in pixels.
    pub width: usize,

    /// The height of the canvas, in pixels.
    pub height: usize,

    /// The pixels of the canvas, stored as a flattened vector.
    pixels: Vec<[u8; 3]>,
}

impl Canvas {
    /// Creates a new black canvas with specified width and height.
    pub fn new(width: usize, height: usize) -> Canvas {
        Canvas {
            width,
            height,
            pixels: vec![[0, 0, 0]; width * height]
        }
    }

    /// Writes a color to a location on the `Canvas`.
    ///
    /// Out-of-bounds pixels are ignored. `x` is the column of the pixel and
    /// `y` its row, both zero-indexed.
    ///
    /// # Examples
    ///
    /// ```
    /// # use raycast::color::Color;
    /// # use raycast::canvas::Canvas;
    /// let mut canvas = Canvas::new(8, 8);
    /// canvas.write_pixel(4, 2, &Color::rgb(1.0, 0.0, 2.0));
    /// assert_eq!(canvas.read_pixel(4, 2), Some([255, 0, 255]));
    /// ```
    pub fn write_pixel(&mut self, x: usize, y: usize, pixel: &Color) {
        if x >= self.width || y >= self.height {
            return;
        }

        self.pixels[(y * self.width) + x] = pixel.to_rgb8();
    }

    /// Reads the quantized color at a location on the `Canvas`.
    ///
    /// Returns `None` if the location is out-of-bounds.
    pub fn read_pixel(&self, x: usize, y: usize) -> Option<[u8; 3]> {
        if x >= self.width || y >= self.height {
            return None
        }

        Some(self.pixels[(y * self.width) + x])
    }

    /// Writes the canvas as a PPM image.
    ///
    /// In ASCII form no line exceeds 70 columns; a pixel which wouldn't fit
    /// on the current line is moved to the next one.
    pub fn write_ppm<W: Write>(&self, out: &mut W, format: PpmFormat)
        -> io::Result<()> {
        let magic = match format {
            PpmFormat::Ascii => "P3",
            PpmFormat::Binary => "P6",
        };

        writeln!(out, "{}", magic)?;
        writeln!(out, "{} {}", self.width, self.height)?;
        writeln!(out, "{}", MAX_COLOR_VALUE as u8)?;

        match format {
            PpmFormat::Binary => {
                for pixel in self.pixels.iter() {
                    out.write_all(pixel)?;
                }
            },
            PpmFormat::Ascii => {
                let mut col = 0;
                for pixel in self.pixels.iter() {
                    let text = format!("{} {} {}", pixel[0], pixel[1], pixel[2]);

                    if col == 0 {
                        col = text.len();
                    } else if col + 1 + text.len() > 70 {
                        writeln!(out)?;
                        col = text.len();
                    } else {
                        write!(out, " ")?;
                        col += 1 + text.len();
                    }

                    write!(out, "{}", text)?;
                }

                writeln!(out)?;
            },
        }

        Ok(())
    }

    /// Saves the canvas to a PPM file, replacing any existing file.
    pub fn save(&self, path: &Path, format: PpmFormat) -> Result<()> {
        let file = File::create(path).map_err(|e| Error::io(path, e))?;
        let mut out = BufWriter::new(file);

        self.write_ppm(&mut out, format)
            .and_then(|_| out.flush())
            .map_err(|e| Error::io(path, e))
    }
}

#[test]
fn new_canvas_is_black() {
    let c = Canvas::new(10, 20);

    assert_eq!(c.width, 10);
    assert_eq!(c.height, 20);
    assert_eq!(c.read_pixel(9, 19), Some([0, 0, 0]));
    assert_eq!(c.read_pixel(10, 0), None);
}

#[test]
fn write_pixel_out_of_bounds_is_ignored() {
    let mut c = Canvas::new(2, 2);
    c.write_pixel(2, 0, &Color::white());

    assert_eq!(c, Canvas::new(2, 2));
}

#[test]
fn ppm_binary() {
    let mut c = Canvas::new(2, 1);
    c.write_pixel(0, 0, &Color::rgb(1.0, 0.0, 0.0));
    c.write_pixel(1, 0, &Color::rgb(0.0, 0.5, 1.0));

    let mut out = Vec::new();
    c.write_ppm(&mut out, PpmFormat::Binary).unwrap();

    let mut expected = b"P6\n2 1\n255\n".to_vec();
    expected.extend_from_slice(&[255, 0, 0, 0, 128, 255]);
    assert_eq!(out, expected);
}

#[test]
fn ppm_ascii() {
    let mut c = Canvas::new(2, 2);
    c.write_pixel(0, 0, &Color::rgb(1.5, 0.0, 0.0));
    c.write_pixel(1, 1, &Color::rgb(0.0, 0.5, -0.5));

    let mut out = Vec::new();
    c.write_ppm(&mut out, PpmFormat::Ascii).unwrap();

    assert_eq!(String::from_utf8(out).unwrap(),
        "P3\n2 2\n255\n255 0 0 0 0 0 0 0 0 0 128 0\n");
}

#[test]
fn ppm_ascii_lines_wrap_at_70_columns() {
    let mut c = Canvas::new(10, 2);
    for y in 0..2 {
        for x in 0..10 {
            c.write_pixel(x, y, &Color::rgb(1.0, 0.8, 0.6));
        }
    }

    let mut out = Vec::new();
    c.write_ppm(&mut out, PpmFormat::Ascii).unwrap();
    let text = String::from_utf8(out).unwrap();

    assert!(text.lines().all(|l| l.len() <= 70));
    assert!(text.ends_with('\n'));
    // Each pixel is "255 204 153"; five fit on a line
    assert_eq!(text.lines().count(), 3 + 4);
}

#[test]
fn parse_format() {
    assert_eq!("p3".parse::<PpmFormat>().unwrap(), PpmFormat::Ascii);
    assert_eq!("P6".parse::<PpmFormat>().unwrap(), PpmFormat::Binary);
    assert!("png".parse::<PpmFormat>().is_err());
}
