//! RGB to HSV conversion with integer hue degrees

use image::Rgb;

/// Hue in whole degrees, saturation and value in `[0, 1]`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsv {
    /// Hue in degrees, always below 360
    pub hue: u16,
    /// Chroma relative to the brightest channel
    pub saturation: f64,
    /// Brightest channel
    pub value: f64,
}

/// Round to the nearest integer with ties going up (`floor(x + 0.5)`)
pub fn round_half_up(x: f64) -> i64 {
    (x + 0.5).floor() as i64
}

/// Convert an 8-bit RGB colour to HSV
///
/// The hue branch is picked by testing red, then green, then blue for the
/// maximum, so ties resolve toward red. Only the red branch wraps into
/// `[0, 360)`; the green and blue branches already land in `[60, 300]`.
// Channels are compared for identity with the maximum, not closeness
#[allow(clippy::float_cmp)]
pub fn rgb_to_hsv(color: Rgb<u8>) -> Hsv {
    let [r, g, b] = color.0.map(|channel| f64::from(channel) / 255.0);
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let delta = max - min;

    let hue = if delta == 0.0 {
        0
    } else if max == r {
        round_half_up(60.0 * ((g - b) / delta + 6.0)) % 360
    } else if max == g {
        round_half_up(60.0 * ((b - r) / delta + 2.0))
    } else {
        round_half_up(60.0 * ((r - g) / delta + 4.0))
    };

    let saturation = if max > 0.0 { delta / max } else { 0.0 };

    Hsv {
        hue: hue as u16,
        saturation,
        value: max,
    }
}
