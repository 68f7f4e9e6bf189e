//! CPU surface for painting - 8-bit RGBA storage

use image::codecs::png::PngEncoder;
use image::imageops::{self, FilterType};
use image::{ExtendedColorType, ImageEncoder, RgbaImage};
use tracing::debug;

use crate::constants::TRANSPARENT;
use crate::error::PaintError;

/// An 8-bit RGBA CPU surface for painting
/// Stores pixels as [u8; 4] with straight (non-premultiplied) alpha
#[derive(Clone, PartialEq, Eq)]
pub struct CpuSurface {
    /// Surface dimensions
    pub width: u32,
    pub height: u32,
    /// Pixel data in row-major order, each pixel is [r, g, b, a]
    pixels: Vec<[u8; 4]>,
}

impl std::fmt::Debug for CpuSurface {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CpuSurface")
            .field("width", &self.width)
            .field("height", &self.height)
            .finish()
    }
}

impl CpuSurface {
    /// Create a new surface with the given dimensions, initialized to transparent black
    pub fn new(width: u32, height: u32) -> Self {
        let pixel_count = (width as usize) * (height as usize);
        Self {
            width,
            height,
            pixels: vec![TRANSPARENT; pixel_count],
        }
    }

    /// Clear the surface to a solid color
    pub fn clear(&mut self, color: [u8; 4]) {
        self.pixels.fill(color);
    }

    #[inline]
    fn index(&self, x: u32, y: u32) -> Option<usize> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some((y as usize) * (self.width as usize) + (x as usize))
    }

    /// Get a pixel at the given coordinates
    /// Returns None if coordinates are out of bounds
    #[inline]
    pub fn get_pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        self.index(x, y).map(|i| self.pixels[i])
    }

    /// Set a pixel at the given coordinates
    /// Does nothing if coordinates are out of bounds
    #[inline]
    pub fn set_pixel(&mut self, x: u32, y: u32, color: [u8; 4]) {
        if let Some(i) = self.index(x, y) {
            self.pixels[i] = color;
        }
    }

    /// Composite a color over an existing pixel (source-over)
    #[inline]
    pub fn blend_pixel(&mut self, x: u32, y: u32, color: [u8; 4]) {
        let Some(index) = self.index(x, y) else {
            return;
        };

        match color[3] {
            0 => {}
            255 => self.pixels[index] = color,
            alpha => {
                let dst = self.pixels[index];
                let src_a = alpha as f32 / 255.0;
                let dst_a = dst[3] as f32 / 255.0;
                let out_a = src_a + dst_a * (1.0 - src_a);

                let channel = |s: u8, d: u8| {
                    let c = (s as f32 * src_a + d as f32 * dst_a * (1.0 - src_a)) / out_a;
                    c.round().clamp(0.0, 255.0) as u8
                };

                self.pixels[index] = [
                    channel(color[0], dst[0]),
                    channel(color[1], dst[1]),
                    channel(color[2], dst[2]),
                    (out_a * 255.0).round().clamp(0.0, 255.0) as u8,
                ];
            }
        }
    }

    /// Get raw pixel data (RGBA8, row-major)
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.pixels)
    }

    /// Get the total number of pixels
    #[inline]
    pub fn pixel_count(&self) -> usize {
        self.pixels.len()
    }

    /// Get direct access to pixel data (for advanced operations)
    #[inline]
    pub fn pixels(&self) -> &[[u8; 4]] {
        &self.pixels
    }

    /// Encode the current pixels as PNG bytes
    pub fn encode_png(&self) -> Result<Vec<u8>, PaintError> {
        let mut bytes = Vec::new();
        PngEncoder::new(&mut bytes)
            .write_image(
                self.as_bytes(),
                self.width,
                self.height,
                ExtendedColorType::Rgba8,
            )
            .map_err(|e| PaintError::Encode(e.to_string()))?;
        Ok(bytes)
    }

    /// Overwrite every pixel with the contents of an image of the same size
    ///
    /// This replaces rather than blends. The surface is untouched on error.
    pub fn replace_with(&mut self, image: &RgbaImage) -> Result<(), PaintError> {
        self.check_size(image)?;
        bytemuck::cast_slice_mut::<[u8; 4], u8>(&mut self.pixels).copy_from_slice(image.as_raw());
        Ok(())
    }

    /// Composite an image of the same size over the surface (source-over)
    pub fn draw_image(&mut self, image: &RgbaImage) -> Result<(), PaintError> {
        self.check_size(image)?;
        for (x, y, pixel) in image.enumerate_pixels() {
            self.blend_pixel(x, y, pixel.0);
        }
        Ok(())
    }

    fn check_size(&self, image: &RgbaImage) -> Result<(), PaintError> {
        if image.dimensions() != (self.width, self.height) {
            return Err(PaintError::DimensionMismatch {
                expected_width: self.width,
                expected_height: self.height,
                width: image.width(),
                height: image.height(),
            });
        }
        Ok(())
    }
}

/// Decode encoded image bytes (PNG, JPEG, ...) and stretch to `width` x `height`
pub fn decode_stretched(bytes: &[u8], width: u32, height: u32) -> Result<RgbaImage, PaintError> {
    let image = image::load_from_memory(bytes)
        .map_err(|e| PaintError::Decode(e.to_string()))?
        .to_rgba8();
    Ok(stretch(image, width, height))
}

/// Resize `image` to exactly `width` x `height` (aspect ratio is not kept)
pub fn stretch(image: RgbaImage, width: u32, height: u32) -> RgbaImage {
    if image.dimensions() == (width, height) || width == 0 || height == 0 {
        return image;
    }
    debug!(
        "stretch: {}x{} -> {}x{}",
        image.width(),
        image.height(),
        width,
        height
    );
    imageops::resize(&image, width, height, FilterType::Triangle)
}
