//! Kaleido painting core - symmetric stamps and snapshot history
//!
//! This crate provides the core of the kaleidoscope drawing surface:
//! - [`surface`] - CPU 8-bit RGBA surface for painting
//! - [`types`] - Brush shapes and their geometry
//! - [`brush`] - Immutable brush values (shape, size, color or pattern)
//! - [`mirror`] - Rotational symmetry configuration
//! - [`stamp`] - Symmetric stamp renderer
//! - [`preview`] - Isolated brush size preview
//! - [`history`] - Undo/redo over full-surface snapshots
//! - [`pipeline`] - Stroke gestures, UI commands and export

pub mod brush;
pub mod constants;
pub mod error;
pub mod history;
pub mod mirror;
pub mod pipeline;
pub mod preview;
pub mod stamp;
pub mod surface;
pub mod types;
pub mod validation;

pub use brush::*;
pub use constants::*;
pub use error::*;
pub use history::*;
pub use mirror::*;
pub use pipeline::*;
pub use preview::*;
pub use stamp::*;
pub use surface::*;
pub use types::*;
pub use validation::*;
