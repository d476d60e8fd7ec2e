//! Collage defaults and fixed rendering constants

// Default values for configurable parameters
/// Default width of the hue axis
pub const DEFAULT_TARGET_WIDTH: u32 = 4000;
/// Default height of the value axis
pub const DEFAULT_TARGET_HEIGHT: u32 = 4000;
/// Default length of the longer side of every component
pub const DEFAULT_MAX_SIZE: u32 = 400;

// Output settings
/// Output file written to the working directory
pub const DEFAULT_OUTPUT_FILE: &str = "sorted.png";
/// Canvas colour where no component was drawn
pub const BACKGROUND_COLOR: [u8; 4] = [255, 255, 255, 255];

// Source selection
/// Extension (and legacy name suffix) of component images
pub const SOURCE_EXTENSION: &str = "png";

// Safety limit to prevent excessive memory allocation
/// Maximum canvas side, margin included
pub const MAX_CANVAS_DIMENSION: u32 = 100_000;

/// Degrees in a full hue circle
pub const HUE_DEGREES: i64 = 360;

// Progress bar display settings
/// Width of progress bars in characters
pub const PROGRESS_BAR_WIDTH: u16 = 40;
