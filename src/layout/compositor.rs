//! Shared collage canvas and alpha-aware compositing

use crate::SourceImage;
use crate::color::FULLY_OPAQUE;
use crate::io::configuration::BACKGROUND_COLOR;
use image::{Rgb, Rgba, RgbaImage};

/// The single output pixel grid every component image is drawn onto
#[derive(Debug, Clone)]
pub struct Canvas {
    pixels: RgbaImage,
}

/// How the opaque pixels of a component are drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fill {
    /// Copy the component's own pixels
    Source,
    /// Replace fully opaque pixels with a flat colour
    Silhouette(Rgb<u8>),
}

impl Canvas {
    /// Create a canvas of the given size filled with opaque white
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            pixels: RgbaImage::from_pixel(width, height, Rgba(BACKGROUND_COLOR)),
        }
    }

    /// Canvas width in pixels
    pub fn width(&self) -> u32 {
        self.pixels.width()
    }

    /// Canvas height in pixels
    pub fn height(&self) -> u32 {
        self.pixels.height()
    }

    /// Pixel at `(x, y)`, or `None` outside the canvas
    pub fn pixel(&self, x: u32, y: u32) -> Option<Rgba<u8>> {
        self.pixels.get_pixel_checked(x, y).copied()
    }

    /// Borrow the underlying pixel buffer
    pub const fn as_image(&self) -> &RgbaImage {
        &self.pixels
    }

    /// Consume the canvas and return its pixel buffer
    pub fn into_image(self) -> RgbaImage {
        self.pixels
    }

    fn write(&mut self, x: i64, y: i64, color: Rgba<u8>) -> bool {
        let (Ok(x), Ok(y)) = (u32::try_from(x), u32::try_from(y)) else {
            return false;
        };
        self.pixels.get_pixel_mut_checked(x, y).is_some_and(|pixel| {
            *pixel = color;
            true
        })
    }
}

/// Draw `component` with its top-left corner at `(x, y)`
///
/// Fully transparent pixels never touch the canvas. In silhouette mode a
/// fully opaque pixel is replaced by the fill colour, while partially
/// transparent pixels keep their own colour and alpha. Written pixels
/// replace the canvas pixel outright, so later components cover earlier
/// ones. Pixels falling outside the canvas are dropped.
///
/// Returns the number of canvas pixels written.
pub fn composite(canvas: &mut Canvas, component: &SourceImage, x: i64, y: i64, fill: Fill) -> usize {
    let mut written = 0;

    for (i, j, pixel) in component.enumerate_pixels() {
        let [r, g, b, a] = pixel.0;
        let color = match fill {
            Fill::Silhouette(Rgb([fr, fg, fb])) if a == FULLY_OPAQUE => Rgba([fr, fg, fb, u8::MAX]),
            _ if a > 0 => Rgba([narrow(r), narrow(g), narrow(b), narrow(a)]),
            _ => continue,
        };

        if canvas.write(x + i64::from(i), y + i64::from(j), color) {
            written += 1;
        }
    }

    written
}

const fn narrow(channel: u16) -> u8 {
    (channel >> 8) as u8
}
