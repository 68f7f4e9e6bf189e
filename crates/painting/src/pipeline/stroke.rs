//! Stroke handling for the painting pipeline

use glam::Vec2;
use tracing::{debug, warn};

use crate::stamp::stamp;

use super::PaintingPipeline;

impl PaintingPipeline {
    /// Begin a stroke at `(x, y)` (pointer-down / touch-start)
    ///
    /// Stamps once, then captures the surface into the history, so the
    /// recorded entry already contains the stroke's first stamp.
    ///
    /// Returns false (and paints nothing) while an undo/redo restore is in
    /// flight.
    pub fn begin_stroke(&mut self, x: f32, y: f32) -> bool {
        if self.history.is_restoring() {
            debug!("begin_stroke: restore in flight, ignoring");
            return false;
        }
        if self.stroking {
            debug!("begin_stroke: previous stroke still open, ending it");
            self.end_stroke();
        }

        self.stroking = true;
        self.stroke_stamps = 0;
        self.stamp_at(x, y);

        if let Err(e) = self.history.capture(&self.surface) {
            warn!("begin_stroke: history capture failed: {}", e);
        }
        true
    }

    /// Continue a stroke with a new pointer position (pointer-move)
    ///
    /// Ignored when no stroke is in progress. Every reported position is
    /// stamped; there is no distance or time throttling.
    pub fn stroke_to(&mut self, x: f32, y: f32) {
        if !self.stroking {
            debug!("stroke_to: no active stroke, ignoring");
            return;
        }
        self.stamp_at(x, y);
    }

    /// End the current stroke (pointer-up, touch-end, pointer leaving the canvas)
    pub fn end_stroke(&mut self) {
        if self.stroking {
            debug!("end_stroke: {} stamps", self.stroke_stamps);
        }
        self.stroking = false;
        self.stroke_stamps = 0;
    }

    /// Check if a stroke is currently in progress
    pub fn is_stroking(&self) -> bool {
        self.stroking
    }

    fn stamp_at(&mut self, x: f32, y: f32) {
        // Clones are cheap (the pattern is shared) and pin the values used
        // for this stamp.
        let brush = self.brush.clone();
        let mirror = self.mirror;
        stamp(&mut self.surface, Vec2::new(x, y), &brush, &mirror);
        self.stroke_stamps = self.stroke_stamps.saturating_add(1);
    }
}

#[cfg(test)]
mod tests {
    use glam::Vec2;

    use super::*;
    use crate::brush::BrushSpec;
    use crate::constants::TRANSPARENT;
    use crate::mirror::MirrorConfig;
    use crate::types::BrushShape;

    const BLUE: [u8; 4] = [0, 0, 255, 255];

    fn pipeline() -> PaintingPipeline {
        let mut pipeline = PaintingPipeline::new(100, 100);
        pipeline.set_brush(BrushSpec {
            shape: BrushShape::Square,
            size: 4,
            color: BLUE,
            pattern: None,
        });
        pipeline
    }

    fn painted(pipeline: &PaintingPipeline, x: u32, y: u32) -> bool {
        pipeline
            .surface()
            .get_pixel(x, y)
            .is_some_and(|p| p != TRANSPARENT)
    }

    #[test]
    fn test_pipeline_stroke() {
        let mut pipeline = pipeline();

        assert!(pipeline.begin_stroke(10.0, 10.0));
        assert!(pipeline.is_stroking());
        pipeline.stroke_to(30.0, 10.0);
        pipeline.stroke_to(50.0, 10.0);
        pipeline.end_stroke();

        assert!(!pipeline.is_stroking());
        assert!(painted(&pipeline, 10, 10));
        assert!(painted(&pipeline, 30, 10));
        assert!(painted(&pipeline, 50, 10));
        // Stamps are not interpolated between move events
        assert!(!painted(&pipeline, 20, 10));
    }

    #[test]
    fn test_stroke_to_without_stroke_is_ignored() {
        let mut pipeline = pipeline();
        pipeline.stroke_to(10.0, 10.0);

        assert!(!painted(&pipeline, 10, 10));
        assert!(pipeline.history().is_empty());
    }

    #[test]
    fn test_stroke_to_after_end_is_ignored() {
        let mut pipeline = pipeline();
        pipeline.begin_stroke(10.0, 10.0);
        pipeline.end_stroke();
        pipeline.stroke_to(60.0, 60.0);

        assert!(!painted(&pipeline, 60, 60));
    }

    #[test]
    fn test_one_capture_per_stroke() {
        let mut pipeline = pipeline();

        pipeline.begin_stroke(10.0, 10.0);
        for x in 11..40 {
            pipeline.stroke_to(x as f32, 10.0);
        }
        pipeline.end_stroke();
        assert_eq!(pipeline.history().len(), 1);

        pipeline.begin_stroke(10.0, 50.0);
        pipeline.stroke_to(20.0, 50.0);
        pipeline.end_stroke();
        assert_eq!(pipeline.history().len(), 2);
        assert_eq!(pipeline.history().cursor(), Some(1));
    }

    #[test]
    fn test_capture_includes_first_stamp() {
        let mut pipeline = pipeline();

        pipeline.begin_stroke(10.0, 10.0);
        pipeline.stroke_to(40.0, 10.0);
        pipeline.end_stroke();
        pipeline.begin_stroke(10.0, 70.0);
        pipeline.stroke_to(40.0, 70.0);
        pipeline.end_stroke();

        // Back to the capture of stroke one: its first stamp only
        assert!(pipeline.undo());
        assert!(painted(&pipeline, 10, 10));
        assert!(!painted(&pipeline, 40, 10));
        assert!(!painted(&pipeline, 10, 70));
    }

    #[test]
    fn test_undo_redo_round_trip() {
        let mut pipeline = pipeline();
        pipeline.set_mirror(MirrorConfig::new(3, Vec2::new(50.0, 50.0)).unwrap());

        pipeline.begin_stroke(70.0, 50.0);
        pipeline.end_stroke();
        pipeline.begin_stroke(50.0, 20.0);
        pipeline.end_stroke();

        let before_undo = pipeline.surface().clone();
        assert!(pipeline.undo());
        assert_ne!(pipeline.surface(), &before_undo);
        assert!(pipeline.redo());
        assert_eq!(pipeline.surface(), &before_undo);
    }

    #[test]
    fn test_new_stroke_after_undo_clears_redo() {
        let mut pipeline = pipeline();
        pipeline.begin_stroke(10.0, 10.0);
        pipeline.end_stroke();
        pipeline.begin_stroke(20.0, 20.0);
        pipeline.end_stroke();

        assert!(pipeline.undo());
        assert!(pipeline.can_redo());

        pipeline.begin_stroke(80.0, 80.0);
        pipeline.end_stroke();
        assert!(!pipeline.can_redo());
        assert!(!pipeline.redo());
    }

    #[test]
    fn test_brush_change_does_not_repaint() {
        let mut pipeline = pipeline();
        pipeline.begin_stroke(10.0, 10.0);
        pipeline.end_stroke();

        pipeline.set_brush(BrushSpec {
            color: [255, 0, 0, 255],
            ..pipeline.brush().clone()
        });
        assert_eq!(pipeline.surface().get_pixel(10, 10), Some(BLUE));
    }

    #[test]
    fn test_stroke_refused_while_restore_pending() {
        let mut pipeline = pipeline();
        pipeline.begin_stroke(10.0, 10.0);
        pipeline.end_stroke();
        pipeline.begin_stroke(20.0, 20.0);
        pipeline.end_stroke();

        let pending = pipeline.begin_undo().unwrap();
        assert!(!pipeline.begin_stroke(60.0, 60.0));
        assert!(!painted(&pipeline, 60, 60));
        assert!(pipeline.begin_redo().is_none());

        assert!(pipeline.finish_restore(pending.decode()));
        assert!(pipeline.begin_stroke(60.0, 60.0));
        assert!(painted(&pipeline, 60, 60));
    }

    #[test]
    fn test_long_stroke_stamp_count_saturates() {
        let mut pipeline = pipeline();
        pipeline.begin_stroke(10.0, 10.0);
        pipeline.stroke_stamps = u32::MAX - 1;

        pipeline.stroke_to(20.0, 10.0);
        pipeline.stroke_to(30.0, 10.0);
        assert_eq!(pipeline.stroke_stamps, u32::MAX);
        assert!(painted(&pipeline, 30, 10));

        pipeline.end_stroke();
        assert_eq!(pipeline.stroke_stamps, 0);
    }

    #[test]
    fn test_undo_ends_stroke() {
        let mut pipeline = pipeline();
        pipeline.begin_stroke(10.0, 10.0);
        pipeline.end_stroke();
        pipeline.begin_stroke(20.0, 20.0);

        assert!(pipeline.undo());
        assert!(!pipeline.is_stroking());
        pipeline.stroke_to(60.0, 60.0);
        assert!(!painted(&pipeline, 60, 60));
    }
}
