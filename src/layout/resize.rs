//! Normalized-size resize policy for component images

use crate::SourceImage;
use image::imageops::{self, FilterType};

/// Target dimensions mapping the longer source side exactly to `max_size`
///
/// The shorter side is scaled by `max_size / max(width, height)` and
/// truncated. Square sources are treated as width-constrained. Neither
/// dimension drops below one pixel.
pub fn normalized_dimensions(source_width: u32, source_height: u32, max_size: u32) -> (u32, u32) {
    let width = f64::from(source_width);
    let height = f64::from(source_height);
    let scale = f64::from(max_size) / width.max(height);

    let (target_width, target_height) = if source_width >= source_height {
        (max_size, (scale * height) as u32)
    } else {
        ((scale * width) as u32, max_size)
    };

    (target_width.max(1), target_height.max(1))
}

/// Resample a component image to its normalized dimensions
pub fn resize_component(image: &SourceImage, max_size: u32) -> SourceImage {
    let (width, height) = normalized_dimensions(image.width(), image.height(), max_size);
    imageops::resize(image, width, height, FilterType::Nearest)
}
