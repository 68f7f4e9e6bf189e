//! Brush size preview
//!
//! The preview lives on its own small surface. It shows a single unmirrored
//! disk of the current brush size and never touches the drawing surface or
//! the history.

use glam::Vec2;

use crate::brush::BrushSpec;
use crate::constants::{PREVIEW_COLOR, TRANSPARENT};
use crate::mirror::MirrorConfig;
use crate::stamp::stamp;
use crate::surface::CpuSurface;
use crate::types::BrushShape;

pub struct BrushPreview {
    surface: CpuSurface,
    size: u32,
}

impl BrushPreview {
    /// Create an empty square preview with the given side length
    pub fn new(side: u32) -> Self {
        Self {
            surface: CpuSurface::new(side, side),
            size: 0,
        }
    }

    /// Clear the preview and draw a disk of radius `size` at its center
    pub fn render(&mut self, size: u32) {
        self.surface.clear(TRANSPARENT);
        self.size = size;
        if size == 0 {
            return;
        }

        let center = Vec2::new(
            self.surface.width as f32 / 2.0,
            self.surface.height as f32 / 2.0,
        );
        let brush = BrushSpec {
            shape: BrushShape::Circle,
            size,
            color: PREVIEW_COLOR,
            pattern: None,
        };
        stamp(
            &mut self.surface,
            center,
            &brush,
            &MirrorConfig::default().with_center(center),
        );
    }

    /// Size shown by the last render
    pub fn size(&self) -> u32 {
        self.size
    }

    pub fn surface(&self) -> &CpuSurface {
        &self.surface
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn painted_count(surface: &CpuSurface) -> usize {
        surface.pixels().iter().filter(|&&p| p != TRANSPARENT).count()
    }

    #[test]
    fn test_preview_draws_centered_disk() {
        let mut preview = BrushPreview::new(100);
        preview.render(10);

        assert_eq!(preview.size(), 10);
        assert_eq!(preview.surface().get_pixel(50, 50), Some(PREVIEW_COLOR));
        assert_eq!(preview.surface().get_pixel(50, 38), Some(TRANSPARENT));
        assert_eq!(preview.surface().get_pixel(0, 0), Some(TRANSPARENT));
    }

    #[test]
    fn test_preview_is_redrawn_from_scratch() {
        let mut preview = BrushPreview::new(100);
        preview.render(30);
        let big = painted_count(preview.surface());

        preview.render(5);
        let small = painted_count(preview.surface());

        assert!(small < big);
        assert_eq!(preview.surface().get_pixel(50, 75), Some(TRANSPARENT));
    }
}
