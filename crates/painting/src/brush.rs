//! Brush description used by the stamp renderer
//!
//! A [`BrushSpec`] is an immutable value captured at the moment a stamp is
//! painted. Changing the UI controls afterwards produces a new brush value
//! and never alters pixels that were already painted.

use std::sync::Arc;

use glam::Vec2;
use image::RgbaImage;
use tracing::{debug, warn};

use crate::constants::MAX_BRUSH_SIZE;
use crate::error::PaintError;
use crate::surface::{decode_stretched, stretch};
use crate::types::BrushShape;
use crate::validation::{ValidationError, clamp_brush_size, validate_brush_size};

/// An image fill for the brush
///
/// The image is stretched to the surface size when loaded. It is placed once
/// with its origin at the mirror pivot, in the rotated frame of each copy, so
/// every copy shows the same content turned with it. Points outside the image
/// are not painted ("no-repeat").
#[derive(Clone)]
pub struct Pattern {
    image: RgbaImage,
}

impl std::fmt::Debug for Pattern {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Pattern")
            .field("width", &self.image.width())
            .field("height", &self.image.height())
            .finish()
    }
}

impl Pattern {
    /// Decode encoded image bytes (PNG, JPEG, ...) into a pattern sized to the surface
    pub fn decode(bytes: &[u8], width: u32, height: u32) -> Result<Self, PaintError> {
        Ok(Self {
            image: decode_stretched(bytes, width, height)?,
        })
    }

    /// Build a pattern from a decoded image, stretching it to `width` x `height`
    pub fn from_image(image: RgbaImage, width: u32, height: u32) -> Self {
        Self {
            image: stretch(image, width, height),
        }
    }

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    /// Pattern color at a point of a copy's frame (pivot at the origin),
    /// None outside the pattern
    #[inline]
    pub fn sample(&self, point: Vec2) -> Option<[u8; 4]> {
        if !(point.x >= 0.0 && point.y >= 0.0) {
            return None;
        }
        self.image
            .get_pixel_checked(point.x as u32, point.y as u32)
            .map(|p| p.0)
    }
}

/// Immutable brush parameters for one stamp
#[derive(Debug, Clone)]
pub struct BrushSpec {
    /// Shape drawn for every copy
    pub shape: BrushShape,
    /// Radius / half-extent in pixels, always >= 1
    pub size: u32,
    /// Solid fill, used when there is no pattern
    pub color: [u8; 4],
    /// Image fill, takes precedence over `color`
    pub pattern: Option<Arc<Pattern>>,
}

impl Default for BrushSpec {
    fn default() -> Self {
        Self {
            shape: BrushShape::Circle,
            size: 5,
            color: [0, 0, 0, 255],
            pattern: None,
        }
    }
}

impl BrushSpec {
    /// Create a brush, rejecting sizes outside 1..=MAX_BRUSH_SIZE
    pub fn new(shape: BrushShape, size: i64, color: [u8; 4]) -> Result<Self, ValidationError> {
        Ok(Self {
            shape,
            size: validate_brush_size(size)?,
            color,
            pattern: None,
        })
    }

    /// Create a brush, clamping the size into 1..=MAX_BRUSH_SIZE
    pub fn clamped(shape: BrushShape, size: i64, color: [u8; 4]) -> Self {
        if !(1..=MAX_BRUSH_SIZE as i64).contains(&size) {
            debug!("BrushSpec: clamping size {}", size);
        }
        Self {
            shape,
            size: clamp_brush_size(size),
            color,
            pattern: None,
        }
    }

    /// Same brush with the given pattern fill
    pub fn with_pattern(mut self, pattern: Option<Arc<Pattern>>) -> Self {
        self.pattern = pattern;
        self
    }

    /// Same brush with a pattern decoded from `bytes`
    ///
    /// If the image cannot be decoded the brush keeps painting with its solid
    /// color.
    pub fn with_pattern_bytes(self, bytes: &[u8], width: u32, height: u32) -> Self {
        match Pattern::decode(bytes, width, height) {
            Ok(pattern) => self.with_pattern(Some(Arc::new(pattern))),
            Err(e) => {
                warn!("Brush pattern unusable, falling back to solid color: {}", e);
                self.with_pattern(None)
            }
        }
    }

    /// Fill color at a point of a copy's frame, None where nothing should be
    /// painted
    #[inline]
    pub fn fill_at(&self, point: Vec2) -> Option<[u8; 4]> {
        match &self.pattern {
            Some(pattern) => pattern.sample(point),
            None => Some(self.color),
        }
    }
}
