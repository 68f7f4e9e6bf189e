//! Background image loading for the painting pipeline

use tracing::debug;

use crate::error::PaintError;
use crate::surface::decode_stretched;

use super::PaintingPipeline;

impl PaintingPipeline {
    /// Paint an encoded image (PNG, JPEG, ...) over the whole surface
    ///
    /// The image is stretched to the surface size and composited source-over
    /// on top of the current pixels. No history entry is recorded; the next
    /// stroke's capture includes it. On a decode error the surface is left
    /// untouched.
    pub fn load_background(&mut self, bytes: &[u8]) -> Result<(), PaintError> {
        let image = decode_stretched(bytes, self.width(), self.height())?;
        self.surface.draw_image(&image)?;
        debug!(
            "load_background: {} bytes onto {}x{}",
            bytes.len(),
            self.width(),
            self.height()
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use image::{Rgba, RgbaImage};

    use super::*;
    use crate::constants::TRANSPARENT;

    fn png_bytes(image: &RgbaImage) -> Vec<u8> {
        let mut bytes = Vec::new();
        image
            .write_to(
                &mut std::io::Cursor::new(&mut bytes),
                image::ImageFormat::Png,
            )
            .unwrap();
        bytes
    }

    #[test]
    fn test_background_stretched_to_surface() {
        let mut pipeline = PaintingPipeline::new(40, 20);
        let image = RgbaImage::from_pixel(4, 4, Rgba([0, 128, 255, 255]));
        pipeline.load_background(&png_bytes(&image)).unwrap();

        for (x, y) in [(0, 0), (39, 0), (0, 19), (39, 19), (20, 10)] {
            let pixel = pipeline.get_pixel(x, y).unwrap();
            for (got, want) in pixel.iter().zip([0u8, 128, 255, 255]) {
                assert!((*got as i32 - want as i32).abs() <= 1, "({}, {})", x, y);
            }
        }
    }

    #[test]
    fn test_background_composites_over_paint() {
        let mut pipeline = PaintingPipeline::new(10, 10);
        pipeline.begin_stroke(5.0, 5.0);
        pipeline.end_stroke();

        let mut image = RgbaImage::new(10, 10);
        image.put_pixel(0, 0, Rgba([255, 0, 0, 255]));
        pipeline.load_background(&png_bytes(&image)).unwrap();

        // Transparent background pixels keep the stroke underneath
        assert_eq!(pipeline.get_pixel(5, 5), Some([0, 0, 0, 255]));
        assert_eq!(pipeline.get_pixel(0, 0), Some([255, 0, 0, 255]));
        assert_eq!(pipeline.get_pixel(9, 0), Some(TRANSPARENT));
    }

    #[test]
    fn test_background_is_not_recorded() {
        let mut pipeline = PaintingPipeline::new(10, 10);
        let image = RgbaImage::from_pixel(10, 10, Rgba([1, 2, 3, 255]));
        pipeline.load_background(&png_bytes(&image)).unwrap();

        assert!(pipeline.history().is_empty());
        assert!(!pipeline.can_undo());
    }

    #[test]
    fn test_bad_background_leaves_surface() {
        let mut pipeline = PaintingPipeline::new(10, 10);
        pipeline.begin_stroke(5.0, 5.0);
        pipeline.end_stroke();
        let before = pipeline.surface().clone();

        let result = pipeline.load_background(b"not an image at all");
        assert!(matches!(result, Err(PaintError::Decode(_))));
        assert_eq!(pipeline.surface(), &before);
    }
}
