//! Collage builder that places images by the colour of their opaque pixels
//!
//! Each component image is reduced to the average colour of its fully opaque
//! pixels. Hue picks the horizontal position and HSV value the vertical
//! position on a shared canvas, where the image is drawn at a normalized size
//! or as a flat silhouette of that colour.

#![forbid(unsafe_code)]

/// Average colour sampling and HSV conversion
pub mod color;
/// Input/output operations and error handling
pub mod io;
/// Resize policy, canvas compositing and placement
pub mod layout;

pub use io::error::{CollageError, Result};

/// Decoded component image at 16 bits per channel
pub type SourceImage = image::ImageBuffer<image::Rgba<u16>, Vec<u16>>;
