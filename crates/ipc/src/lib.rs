//! IPC message protocol for Kaleido
//!
//! Defines the message types exchanged between the UI layer (sliders, pickers,
//! canvas pointer handlers) and the painting core. Values carried here are raw
//! UI values; the painting core validates them before they reach the renderer.

pub mod commands;
pub mod error;
pub mod input;
pub mod messages;

pub use commands::*;
pub use error::*;
pub use input::*;
pub use messages::*;
