//! Paint command types for the painting system.

use serde::{Deserialize, Serialize};

/// Commands for controlling the painting system.
///
/// Numeric fields are deliberately wide and signed: they carry whatever the
/// UI control produced, and the painting core rejects or clamps them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum PaintCommand {
    /// Set the number of rotational copies per stamp
    SetMirrorCount { count: i64 },
    /// Set brush size in pixels (radius / half-extent)
    SetBrushSize { size: i64 },
    /// Set the pivot the copies rotate around, in canvas pixels
    SetMirrorCenter { x: f32, y: f32 },
    /// Set brush shape by name ("circle", "square", "oval", "rectangle", "triangle")
    SetBrushShape { shape: String },
    /// Set brush color as a CSS hex string ("#rrggbb" or "#rgb")
    SetBrushColor { color: String },
    /// Set an image pattern fill from encoded image bytes
    SetBrushPattern { image: Vec<u8> },
    /// Drop the pattern fill and paint with the solid color again
    ClearBrushPattern,
    /// Paint an encoded image over the whole canvas, stretched to fit
    SetBackground { image: Vec<u8> },
    /// Undo the last stroke
    Undo,
    /// Redo the last undone stroke
    Redo,
}
