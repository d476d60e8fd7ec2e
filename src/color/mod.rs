//! Colour analysis of component images
//!
//! This module contains:
//! - Average colour sampling over fully opaque pixels
//! - RGB to HSV conversion used for canvas placement

/// RGB to hue/saturation/value conversion
pub mod hsv;
/// Average colour of the opaque pixels of an image
pub mod sampler;

pub use hsv::{Hsv, rgb_to_hsv};
pub use sampler::average_color;

/// Alpha value of a pixel with no transparency in a decoded source image
pub const FULLY_OPAQUE: u16 = u16::MAX;
