//! Error types for painting operations.

use thiserror::Error;

use crate::validation::ValidationError;

/// Errors that can occur while painting, snapshotting or restoring.
#[derive(Debug, Error)]
pub enum PaintError {
    #[error("Failed to encode image: {0}")]
    Encode(String),

    #[error("Failed to decode image: {0}")]
    Decode(String),

    #[error("Size mismatch: surface is {expected_width}x{expected_height}, image is {width}x{height}")]
    DimensionMismatch {
        expected_width: u32,
        expected_height: u32,
        width: u32,
        height: u32,
    },

    #[error("A history restore is already in progress")]
    RestoreInProgress,

    #[error(transparent)]
    Validation(#[from] ValidationError),
}
