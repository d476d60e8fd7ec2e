//! Per-image placement: sample, convert, size, position and composite

use crate::SourceImage;
use crate::color::{Hsv, average_color, rgb_to_hsv};
use crate::io::configuration::{
    DEFAULT_MAX_SIZE, DEFAULT_TARGET_HEIGHT, DEFAULT_TARGET_WIDTH, HUE_DEGREES,
    MAX_CANVAS_DIMENSION,
};
use crate::io::error::{Result, invalid_parameter};
use crate::layout::compositor::{Canvas, Fill, composite};
use crate::layout::resize::resize_component;
use image::Rgb;
use std::fmt;

/// Parameters fixed for the whole collage run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CollageConfig {
    /// Width of the hue axis in pixels
    pub target_width: u32,
    /// Height of the value axis in pixels
    pub target_height: u32,
    /// Length of the longer side of every resized component
    pub max_size: u32,
    /// Draw opaque pixels as flat average-colour silhouettes
    pub silhouette: bool,
}

impl Default for CollageConfig {
    fn default() -> Self {
        Self {
            target_width: DEFAULT_TARGET_WIDTH,
            target_height: DEFAULT_TARGET_HEIGHT,
            max_size: DEFAULT_MAX_SIZE,
            silhouette: false,
        }
    }
}

impl CollageConfig {
    /// Check every dimension is usable
    ///
    /// # Errors
    ///
    /// Returns an error if the target width, target height or maximum
    /// component size is zero, if a canvas side overflows `u32` or exceeds
    /// `MAX_CANVAS_DIMENSION`, or if the RGBA buffer size overflows `usize`
    pub fn validate(&self) -> Result<()> {
        for (parameter, value) in [
            ("width", self.target_width),
            ("height", self.target_height),
            ("max-size", self.max_size),
        ] {
            if value == 0 {
                return Err(invalid_parameter(parameter, &value, &"must be positive"));
            }
        }

        let (Some(canvas_width), Some(canvas_height)) = (
            self.target_width.checked_add(self.max_size),
            self.target_height.checked_add(self.max_size),
        ) else {
            return Err(invalid_parameter(
                "max-size",
                &self.max_size,
                &"canvas dimensions overflow",
            ));
        };

        for (parameter, value) in [("width", canvas_width), ("height", canvas_height)] {
            if value > MAX_CANVAS_DIMENSION {
                return Err(invalid_parameter(
                    parameter,
                    &value,
                    &format!("canvas side exceeds {MAX_CANVAS_DIMENSION} pixels"),
                ));
            }
        }

        let buffer_len = u64::from(canvas_width)
            .checked_mul(u64::from(canvas_height))
            .and_then(|pixels| pixels.checked_mul(4))
            .and_then(|bytes| usize::try_from(bytes).ok());
        if buffer_len.is_none() {
            return Err(invalid_parameter(
                "width",
                &format!("{canvas_width}x{canvas_height}"),
                &"canvas buffer does not fit in memory",
            ));
        }

        Ok(())
    }

    /// Canvas size: the target area plus a `max_size` margin on each axis
    pub const fn canvas_dimensions(&self) -> (u32, u32) {
        (
            self.target_width.saturating_add(self.max_size),
            self.target_height.saturating_add(self.max_size),
        )
    }
}

/// Where a resized component lands on the canvas
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlacementRect {
    /// Left edge on the canvas
    pub x: i64,
    /// Top edge on the canvas
    pub y: i64,
    /// Resized component width
    pub width: u32,
    /// Resized component height
    pub height: u32,
}

/// Why a component was left off the canvas
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// No pixel is fully opaque, so there is no average colour
    NoOpaquePixels,
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoOpaquePixels => write!(f, "image has no fully opaque pixels"),
        }
    }
}

/// Outcome of placing one component
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Placement {
    /// The component was drawn onto the canvas
    Placed {
        /// Footprint on the canvas
        rect: PlacementRect,
        /// Average colour of the opaque pixels
        color: Rgb<u8>,
        /// Colour space coordinates the position was derived from
        hsv: Hsv,
    },
    /// The component could not be placed and the canvas is unchanged
    Skipped(SkipReason),
}

/// Top-left offset of a `width` x `height` component with the given colour
///
/// Hue spreads components across the target width and value down the
/// target height. The half-`max_size` margin keeps the extreme positions
/// (hue 0 and value 0, hue 359 and value 1) fully inside the canvas.
pub fn placement_offset(config: &CollageConfig, hsv: Hsv, width: u32, height: u32) -> (i64, i64) {
    let margin = i64::from(config.max_size) / 2;
    let x = margin + i64::from(config.target_width) * i64::from(hsv.hue) / HUE_DEGREES
        - i64::from(width) / 2;
    let y = margin + (f64::from(config.target_height) * hsv.value) as i64 - i64::from(height) / 2;
    (x, y)
}

/// Owns the canvas and places components onto it one at a time
///
/// Components are drawn in call order and later ones overwrite earlier ones
/// where they overlap.
#[derive(Debug)]
pub struct LayoutEngine {
    config: CollageConfig,
    canvas: Canvas,
}

impl LayoutEngine {
    /// Create an engine with a fresh white canvas
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration fails validation
    pub fn new(config: CollageConfig) -> Result<Self> {
        config.validate()?;
        let (width, height) = config.canvas_dimensions();

        Ok(Self {
            config,
            canvas: Canvas::new(width, height),
        })
    }

    /// Sample, resize, position and draw one component
    pub fn place(&mut self, image: &SourceImage) -> Placement {
        let Some(color) = average_color(image) else {
            return Placement::Skipped(SkipReason::NoOpaquePixels);
        };
        let hsv = rgb_to_hsv(color);

        let resized = resize_component(image, self.config.max_size);
        let (x, y) = placement_offset(&self.config, hsv, resized.width(), resized.height());

        let fill = if self.config.silhouette {
            Fill::Silhouette(color)
        } else {
            Fill::Source
        };
        composite(&mut self.canvas, &resized, x, y, fill);

        Placement::Placed {
            rect: PlacementRect {
                x,
                y,
                width: resized.width(),
                height: resized.height(),
            },
            color,
            hsv,
        }
    }

    /// Borrow the canvas
    pub const fn canvas(&self) -> &Canvas {
        &self.canvas
    }

    /// Finish the run and hand back the canvas
    pub fn into_canvas(self) -> Canvas {
        self.canvas
    }
}
