//! Main IPC message enums for communication between the UI and the painter.

use serde::{Deserialize, Serialize};

use crate::commands::PaintCommand;
use crate::error::IpcError;
use crate::input::PointerEvent;

/// Messages from the UI to the painting core.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum UiToPainter {
    /// Brush, mirror and history commands
    PaintCommand(PaintCommand),
    /// Pointer or touch input on the canvas
    Pointer(PointerEvent),
    /// Request the current canvas as a PNG download
    Export,
}

/// Messages from the painting core to the UI.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum PainterToUi {
    /// Undo/redo availability changed (drives button enabled state)
    HistoryChanged { can_undo: bool, can_redo: bool },
    /// The brush preview was redrawn for a new size
    PreviewUpdated { size: u32 },
    /// An exported image is ready for download
    Exported { file_name: String, png: Vec<u8> },
    /// Error notification
    Error { code: String, message: String },
}

impl UiToPainter {
    /// Parse a message from its JSON wire form
    pub fn from_json(json: &str) -> Result<Self, IpcError> {
        if json.trim().is_empty() {
            return Err(IpcError::InvalidFormat("empty message".to_string()));
        }
        Ok(serde_json::from_str(json)?)
    }
}

impl PainterToUi {
    /// Serialize a message to its JSON wire form
    pub fn to_json(&self) -> Result<String, IpcError> {
        Ok(serde_json::to_string(self)?)
    }
}
