//! Complete painting pipeline
//!
//! This module connects the pieces the UI collaborator drives:
//! - Input handling (pointer gestures via `begin_stroke` / `stroke_to` / `end_stroke`)
//! - Current brush and mirror values (set by the UI controls)
//! - The symmetric stamp renderer (applied to the drawing surface)
//! - The snapshot history (captured once per stroke)
//! - The brush preview (redrawn on every size change)
//!
//! The pipeline owns the surface and the history, so everything runs through
//! `&mut self` on one thread.

mod background;
mod commands;
mod export;
mod stroke;

use glam::Vec2;
use kaleido_config::{BrushDefaults, CanvasConfig, DEFAULT_PREVIEW_SIZE};

use crate::brush::BrushSpec;
use crate::error::PaintError;
use crate::history::{DecodedRestore, History, PendingRestore};
use crate::mirror::MirrorConfig;
use crate::preview::BrushPreview;
use crate::surface::CpuSurface;
use crate::types::BrushShape;
use crate::validation::parse_hex_color;

pub use export::{ExportedImage, export_file_name};

/// Complete painting pipeline for a canvas
///
/// This struct manages the full painting workflow:
/// 1. Input comes in via `begin_stroke`, `stroke_to`, `end_stroke`
/// 2. Each input position is stamped with the current brush and mirror
/// 3. The first stamp of a stroke is followed by a history capture
/// 4. Undo/redo restore captured snapshots onto the surface
pub struct PaintingPipeline {
    /// Drawing surface
    pub(crate) surface: CpuSurface,
    /// Snapshot history
    pub(crate) history: History,
    /// Brush size preview
    pub(crate) preview: BrushPreview,
    /// Brush used for the next stamp
    pub(crate) brush: BrushSpec,
    /// Mirror used for the next stamp
    pub(crate) mirror: MirrorConfig,
    /// Whether a stroke is in progress
    pub(crate) stroking: bool,
    /// Stamps painted in the current stroke
    pub(crate) stroke_stamps: u32,
}

impl PaintingPipeline {
    /// Create a new painting pipeline with the given surface dimensions
    ///
    /// The brush starts at its defaults and the mirror pivot at the surface
    /// center with a single copy.
    pub fn new(width: u32, height: u32) -> Self {
        let center = Vec2::new(width as f32 / 2.0, height as f32 / 2.0);
        Self::with_parts(
            CpuSurface::new(width, height),
            BrushPreview::new(DEFAULT_PREVIEW_SIZE),
            BrushSpec::default(),
            MirrorConfig::default().with_center(center),
        )
    }

    /// Create a pipeline from shared configuration
    pub fn from_config(canvas: &CanvasConfig, defaults: &BrushDefaults) -> Result<Self, PaintError> {
        let shape: BrushShape = defaults.shape.parse()?;
        let color = parse_hex_color(&defaults.color)?;
        let brush = BrushSpec::new(shape, defaults.brush_size as i64, color)?;

        let (cx, cy) = canvas.center();
        let mirror = MirrorConfig::new(defaults.mirror_count as i64, Vec2::new(cx, cy))?;

        Ok(Self::with_parts(
            CpuSurface::new(canvas.width, canvas.height),
            BrushPreview::new(canvas.preview_size),
            brush,
            mirror,
        ))
    }

    fn with_parts(
        surface: CpuSurface,
        preview: BrushPreview,
        brush: BrushSpec,
        mirror: MirrorConfig,
    ) -> Self {
        let mut pipeline = Self {
            surface,
            history: History::new(),
            preview,
            brush,
            mirror,
            stroking: false,
            stroke_stamps: 0,
        };
        pipeline.preview.render(pipeline.brush.size);
        pipeline
    }

    /// Get the surface width
    pub fn width(&self) -> u32 {
        self.surface.width
    }

    /// Get the surface height
    pub fn height(&self) -> u32 {
        self.surface.height
    }

    /// Get the drawing surface
    pub fn surface(&self) -> &CpuSurface {
        &self.surface
    }

    /// Get the brush preview
    pub fn preview(&self) -> &BrushPreview {
        &self.preview
    }

    /// Get the history
    pub fn history(&self) -> &History {
        &self.history
    }

    /// Set the brush used by subsequent stamps
    ///
    /// The preview is redrawn when the size changes.
    pub fn set_brush(&mut self, brush: BrushSpec) {
        let resized = brush.size != self.brush.size;
        self.brush = brush;
        if resized {
            self.preview.render(self.brush.size);
        }
    }

    /// Get the current brush
    pub fn brush(&self) -> &BrushSpec {
        &self.brush
    }

    /// Set the mirror used by subsequent stamps
    pub fn set_mirror(&mut self, mirror: MirrorConfig) {
        self.mirror = mirror;
    }

    /// Get the current mirror
    pub fn mirror(&self) -> &MirrorConfig {
        &self.mirror
    }

    /// Undo the last stroke
    ///
    /// Returns true if an undo was performed. Ends any stroke in progress.
    pub fn undo(&mut self) -> bool {
        self.end_stroke();
        self.history.undo(&mut self.surface)
    }

    /// Redo the last undone stroke
    ///
    /// Returns true if a redo was performed. Ends any stroke in progress.
    pub fn redo(&mut self) -> bool {
        self.end_stroke();
        self.history.redo(&mut self.surface)
    }

    /// Check if undo is available
    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    /// Check if redo is available
    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// Start an undo whose decode happens elsewhere (see [`PendingRestore`])
    ///
    /// New strokes are refused until the restore is finished.
    pub fn begin_undo(&mut self) -> Option<PendingRestore> {
        self.end_stroke();
        self.history.begin_undo()
    }

    /// Start a redo whose decode happens elsewhere (see [`PendingRestore`])
    pub fn begin_redo(&mut self) -> Option<PendingRestore> {
        self.end_stroke();
        self.history.begin_redo()
    }

    /// Apply a decoded undo/redo to the surface
    pub fn finish_restore(&mut self, decoded: DecodedRestore) -> bool {
        self.history.finish_restore(decoded, &mut self.surface)
    }

    /// Drop a pending undo/redo without touching the surface
    pub fn abandon_restore(&mut self, pending: PendingRestore) {
        self.history.abandon_restore(pending);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::TRANSPARENT;

    #[test]
    fn test_pipeline_creation() {
        let pipeline = PaintingPipeline::new(256, 128);
        assert_eq!(pipeline.width(), 256);
        assert_eq!(pipeline.height(), 128);
        assert_eq!(pipeline.mirror().center, Vec2::new(128.0, 64.0));
        assert!(pipeline.history().is_empty());
        assert!(!pipeline.is_stroking());
    }

    #[test]
    fn test_pipeline_from_config() {
        let canvas = CanvasConfig::new(300, 200);
        let defaults = BrushDefaults {
            mirror_count: 6,
            brush_size: 9,
            shape: "triangle".to_string(),
            color: "#00ff00".to_string(),
        };
        let pipeline = PaintingPipeline::from_config(&canvas, &defaults).unwrap();

        assert_eq!(pipeline.width(), 300);
        assert_eq!(pipeline.mirror().count, 6);
        assert_eq!(pipeline.mirror().center, Vec2::new(150.0, 100.0));
        assert_eq!(pipeline.brush().shape, BrushShape::Triangle);
        assert_eq!(pipeline.brush().color, [0, 255, 0, 255]);
        assert_eq!(pipeline.preview().size(), 9);
    }

    #[test]
    fn test_pipeline_from_bad_config() {
        let canvas = CanvasConfig::default();
        let defaults = BrushDefaults {
            shape: "hexagon".to_string(),
            ..Default::default()
        };
        assert!(matches!(
            PaintingPipeline::from_config(&canvas, &defaults),
            Err(PaintError::Validation(_))
        ));

        let defaults = BrushDefaults {
            mirror_count: 0,
            ..Default::default()
        };
        assert!(PaintingPipeline::from_config(&canvas, &defaults).is_err());
    }

    #[test]
    fn test_set_brush_redraws_preview() {
        let mut pipeline = PaintingPipeline::new(64, 64);
        pipeline.set_brush(BrushSpec {
            size: 20,
            ..Default::default()
        });
        assert_eq!(pipeline.preview().size(), 20);
        // Preview changes never reach the drawing surface or history
        assert!(pipeline.surface().pixels().iter().all(|&p| p == TRANSPARENT));
        assert!(pipeline.history().is_empty());
    }
}
