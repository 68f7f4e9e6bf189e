//! Full-surface snapshots for the history

use std::sync::Arc;

use image::{ImageFormat, RgbaImage};

use crate::error::PaintError;
use crate::surface::CpuSurface;

/// A lossless PNG encoding of the whole surface at one instant
///
/// Snapshots are immutable; clones share the encoded bytes.
#[derive(Clone)]
pub struct Snapshot {
    width: u32,
    height: u32,
    png: Arc<[u8]>,
}

impl std::fmt::Debug for Snapshot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Snapshot")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("encoded_len", &self.png.len())
            .finish()
    }
}

impl Snapshot {
    /// Encode the current contents of `surface`
    pub fn capture(surface: &CpuSurface) -> Result<Self, PaintError> {
        Ok(Self {
            width: surface.width,
            height: surface.height,
            png: surface.encode_png()?.into(),
        })
    }

    /// Wrap already-encoded PNG bytes
    ///
    /// The bytes are not checked until the snapshot is decoded.
    pub fn from_encoded(width: u32, height: u32, png: Vec<u8>) -> Self {
        Self {
            width,
            height,
            png: png.into(),
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Encoded PNG bytes
    pub fn encoded(&self) -> &[u8] {
        &self.png
    }

    /// Decode back into pixels, checking the recorded dimensions
    pub fn decode(&self) -> Result<RgbaImage, PaintError> {
        let image = image::load_from_memory_with_format(&self.png, ImageFormat::Png)
            .map_err(|e| PaintError::Decode(e.to_string()))?
            .to_rgba8();

        if image.dimensions() != (self.width, self.height) {
            return Err(PaintError::DimensionMismatch {
                expected_width: self.width,
                expected_height: self.height,
                width: image.width(),
                height: image.height(),
            });
        }

        Ok(image)
    }
}
