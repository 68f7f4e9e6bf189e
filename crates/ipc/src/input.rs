//! Pointer input events for the drawing canvas.

use serde::{Deserialize, Serialize};

/// Pointer and touch events, already converted to canvas pixel coordinates.
///
/// Mouse and touch input map onto the same gesture: `Down` starts a stroke,
/// `Move` continues it, `Up` or `Leave` ends it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum PointerEvent {
    Down { x: f32, y: f32 },
    Move { x: f32, y: f32 },
    Up,
    Leave,
}

impl PointerEvent {
    /// Canvas position carried by the event, if any
    pub fn position(&self) -> Option<(f32, f32)> {
        match *self {
            Self::Down { x, y } | Self::Move { x, y } => Some((x, y)),
            Self::Up | Self::Leave => None,
        }
    }
}
