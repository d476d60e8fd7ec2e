//! Sizing, positioning and compositing of component images
//!
//! This module contains:
//! - The normalized-size resize policy
//! - The shared canvas and per-pixel compositing
//! - The layout engine driving one image at a time

/// Canvas ownership and alpha-aware compositing
pub mod compositor;
/// Per-image orchestration from colour to canvas position
pub mod engine;
/// Normalized-size policy and nearest-neighbour resampling
pub mod resize;

pub use compositor::{Canvas, Fill};
pub use engine::{CollageConfig, LayoutEngine, Placement, PlacementRect, SkipReason};
