//! Average colour of the fully opaque pixels of a component image

use crate::SourceImage;
use crate::color::FULLY_OPAQUE;
use image::Rgb;

/// Compute the mean colour of every fully opaque pixel
///
/// Channels are summed at 16 bits and the mean is narrowed to 8 bits
/// afterwards, so rounding happens once on the averaged value. Pixels with
/// any transparency, even a single step below opaque, are ignored.
///
/// Returns `None` when the image has no fully opaque pixel.
pub fn average_color(image: &SourceImage) -> Option<Rgb<u8>> {
    let (mut red, mut green, mut blue) = (0_u64, 0_u64, 0_u64);
    let mut count = 0_u64;

    for pixel in image.pixels() {
        let [r, g, b, a] = pixel.0;
        if a == FULLY_OPAQUE {
            red += u64::from(r);
            green += u64::from(g);
            blue += u64::from(b);
            count += 1;
        }
    }

    if count == 0 {
        return None;
    }

    let narrow = |sum: u64| ((sum / count) >> 8) as u8;
    Some(Rgb([narrow(red), narrow(green), narrow(blue)]))
}

