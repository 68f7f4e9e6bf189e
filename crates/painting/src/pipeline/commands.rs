//! UI command handling for the painting pipeline
//!
//! Raw values from the UI controls are validated here, before they reach the
//! renderer. Slider values (counts, sizes) are clamped; free-form values
//! (shape names, colors) are rejected with a validation error and leave the
//! current brush unchanged.

use glam::Vec2;
use kaleido_ipc::{PaintCommand, PainterToUi, PointerEvent, UiToPainter};
use tracing::{debug, warn};

use crate::brush::BrushSpec;
use crate::error::PaintError;
use crate::mirror::MirrorConfig;
use crate::types::BrushShape;
use crate::validation::{clamp_brush_size, parse_hex_color};

use super::PaintingPipeline;

impl PaintingPipeline {
    /// Apply a brush, mirror or history command
    pub fn handle_command(&mut self, command: PaintCommand) -> Result<(), PaintError> {
        match command {
            PaintCommand::SetMirrorCount { count } => {
                self.mirror = MirrorConfig::clamped(count, self.mirror.center);
            }
            PaintCommand::SetBrushSize { size } => {
                self.set_brush(BrushSpec {
                    size: clamp_brush_size(size),
                    ..self.brush.clone()
                });
            }
            PaintCommand::SetMirrorCenter { x, y } => {
                if !x.is_finite() || !y.is_finite() {
                    warn!("SetMirrorCenter: ignoring non-finite pivot ({}, {})", x, y);
                    return Ok(());
                }
                self.mirror = self.mirror.with_center(Vec2::new(x, y));
            }
            PaintCommand::SetBrushShape { shape } => {
                self.brush.shape = shape.parse::<BrushShape>()?;
            }
            PaintCommand::SetBrushColor { color } => {
                self.brush.color = parse_hex_color(&color)?;
            }
            PaintCommand::SetBrushPattern { image } => {
                let brush = self
                    .brush
                    .clone()
                    .with_pattern_bytes(&image, self.width(), self.height());
                self.set_brush(brush);
            }
            PaintCommand::ClearBrushPattern => {
                self.brush.pattern = None;
            }
            PaintCommand::SetBackground { image } => {
                self.load_background(&image)?;
            }
            PaintCommand::Undo => {
                let done = self.undo();
                debug!("Undo command: performed={}", done);
            }
            PaintCommand::Redo => {
                let done = self.redo();
                debug!("Redo command: performed={}", done);
            }
        }
        Ok(())
    }

    /// Apply a pointer or touch event
    ///
    /// Non-finite coordinates are dropped.
    pub fn handle_pointer(&mut self, event: PointerEvent) {
        if let Some((x, y)) = event.position() {
            if !x.is_finite() || !y.is_finite() {
                debug!("handle_pointer: dropping non-finite position");
                return;
            }
        }

        match event {
            PointerEvent::Down { x, y } => {
                self.begin_stroke(x, y);
            }
            PointerEvent::Move { x, y } => self.stroke_to(x, y),
            PointerEvent::Up | PointerEvent::Leave => self.end_stroke(),
        }
    }

    /// Handle one UI message and collect the replies for the UI
    ///
    /// Validation and export failures are reported as an `Error` reply rather
    /// than aborting the session. A `HistoryChanged` reply is sent whenever
    /// undo/redo availability may have changed.
    pub fn handle_message(&mut self, message: UiToPainter) -> Vec<PainterToUi> {
        let mut replies = Vec::new();
        let history_before = (self.can_undo(), self.can_redo());
        let size_before = self.brush.size;

        match message {
            UiToPainter::PaintCommand(command) => {
                if let Err(e) = self.handle_command(command) {
                    replies.push(error_reply(&e));
                }
            }
            UiToPainter::Pointer(event) => self.handle_pointer(event),
            UiToPainter::Export => match self.export_png() {
                Ok(exported) => replies.push(PainterToUi::Exported {
                    file_name: exported.file_name,
                    png: exported.png,
                }),
                Err(e) => replies.push(error_reply(&e)),
            },
        }

        if self.brush.size != size_before {
            replies.push(PainterToUi::PreviewUpdated {
                size: self.brush.size,
            });
        }

        let history_after = (self.can_undo(), self.can_redo());
        if history_after != history_before {
            replies.push(PainterToUi::HistoryChanged {
                can_undo: history_after.0,
                can_redo: history_after.1,
            });
        }

        replies
    }
}

fn error_reply(error: &PaintError) -> PainterToUi {
    let code = match error {
        PaintError::Validation(_) => "validation",
        PaintError::Encode(_) => "encode",
        PaintError::Decode(_) => "decode",
        PaintError::DimensionMismatch { .. } => "dimension_mismatch",
        PaintError::RestoreInProgress => "restore_in_progress",
    };
    warn!("Command failed ({}): {}", code, error);
    PainterToUi::Error {
        code: code.to_string(),
        message: error.to_string(),
    }
}
