//! Shared configuration for Kaleido
//!
//! This crate provides the single source of truth for canvas dimensions,
//! the brush preview size, and the initial brush and mirror settings the UI
//! controls start from.

use serde::{Deserialize, Serialize};

/// Default canvas width in pixels
pub const DEFAULT_CANVAS_WIDTH: u32 = 800;

/// Default canvas height in pixels
pub const DEFAULT_CANVAS_HEIGHT: u32 = 600;

/// Default side length of the square brush preview
pub const DEFAULT_PREVIEW_SIZE: u32 = 100;

/// Default number of rotational copies
pub const DEFAULT_MIRROR_COUNT: u32 = 8;

/// Default brush size in pixels
pub const DEFAULT_BRUSH_SIZE: u32 = 5;

/// Default brush shape name
pub const DEFAULT_BRUSH_SHAPE: &str = "circle";

/// Default brush color
pub const DEFAULT_BRUSH_COLOR: &str = "#000000";

/// Environment variable overriding the canvas width
pub const CANVAS_WIDTH_ENV: &str = "KALEIDO_CANVAS_WIDTH";

/// Environment variable overriding the canvas height
pub const CANVAS_HEIGHT_ENV: &str = "KALEIDO_CANVAS_HEIGHT";

/// Canvas configuration for the drawing surface and its preview
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CanvasConfig {
    /// Surface width in pixels
    pub width: u32,
    /// Surface height in pixels
    pub height: u32,
    /// Side length of the brush preview surface
    pub preview_size: u32,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_CANVAS_WIDTH,
            height: DEFAULT_CANVAS_HEIGHT,
            preview_size: DEFAULT_PREVIEW_SIZE,
        }
    }
}

impl CanvasConfig {
    /// Create a new canvas config with the given dimensions
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            preview_size: DEFAULT_PREVIEW_SIZE,
        }
    }

    /// Defaults, with dimensions overridden by KALEIDO_CANVAS_WIDTH / KALEIDO_CANVAS_HEIGHT
    pub fn from_env() -> Self {
        let width = std::env::var(CANVAS_WIDTH_ENV).ok();
        let height = std::env::var(CANVAS_HEIGHT_ENV).ok();
        let defaults = Self::default();
        Self {
            width: parse_dimension(width.as_deref()).unwrap_or(defaults.width),
            height: parse_dimension(height.as_deref()).unwrap_or(defaults.height),
            ..defaults
        }
    }

    /// Canvas center, the default mirror pivot
    pub fn center(&self) -> (f32, f32) {
        (self.width as f32 / 2.0, self.height as f32 / 2.0)
    }
}

/// Parse a positive pixel dimension, ignoring surrounding whitespace
pub fn parse_dimension(value: Option<&str>) -> Option<u32> {
    value
        .and_then(|v| v.trim().parse::<u32>().ok())
        .filter(|&v| v > 0)
}

/// Initial values of the brush and mirror controls
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BrushDefaults {
    pub mirror_count: u32,
    pub brush_size: u32,
    pub shape: String,
    pub color: String,
}

impl Default for BrushDefaults {
    fn default() -> Self {
        Self {
            mirror_count: DEFAULT_MIRROR_COUNT,
            brush_size: DEFAULT_BRUSH_SIZE,
            shape: DEFAULT_BRUSH_SHAPE.to_string(),
            color: DEFAULT_BRUSH_COLOR.to_string(),
        }
    }
}
