//! Undo/redo history over full-surface snapshots
//!
//! The history is a linear sequence of snapshots with a cursor on the newest
//! one, plus a redo buffer of snapshots left behind by undo:
//! - `capture` appends a snapshot, moves the cursor onto it and empties the
//!   redo buffer (drawing after an undo discards the undone future)
//! - `undo` steps the cursor back, restores the snapshot now under it and
//!   moves the one it left onto the redo buffer
//! - `redo` moves the newest redo snapshot back onto the sequence and
//!   restores it
//!
//! Snapshots are never evicted otherwise; memory grows with the session.

mod restore;
mod snapshot;

use tracing::debug;

use crate::error::PaintError;
use crate::surface::CpuSurface;

use restore::InFlight;

pub use restore::{DecodedRestore, PendingRestore, RestoreKind};
pub use snapshot::Snapshot;

/// Linear undo/redo history
#[derive(Debug, Default)]
pub struct History {
    /// Undo sequence; the cursor is always the last index
    pub(crate) entries: Vec<Snapshot>,
    /// Redo buffer (most recent at end)
    pub(crate) redo: Vec<Snapshot>,
    /// Restore handed out by begin_undo/begin_redo and not yet finished
    pub(crate) in_flight: Option<InFlight>,
}

impl History {
    /// Create an empty history (no cursor, empty redo buffer)
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the current surface as a new entry
    ///
    /// Clears the redo buffer. Fails without changing the history if the
    /// surface cannot be encoded or a restore is in flight.
    pub fn capture(&mut self, surface: &CpuSurface) -> Result<(), PaintError> {
        if self.in_flight.is_some() {
            return Err(PaintError::RestoreInProgress);
        }

        let snapshot = Snapshot::capture(surface)?;
        self.push(snapshot);
        Ok(())
    }

    /// Append an already-taken snapshot, clearing the redo buffer
    pub(crate) fn push(&mut self, snapshot: Snapshot) {
        if !self.redo.is_empty() {
            debug!("Capture: discarding {} redo entries", self.redo.len());
            self.redo.clear();
        }

        debug!(
            "Capture: entry {} ({} bytes)",
            self.entries.len(),
            snapshot.encoded().len()
        );
        self.entries.push(snapshot);
    }

    /// Undo the last stroke, overwriting `surface`
    ///
    /// Returns true if an undo was performed, false if no undo was available,
    /// a restore is in flight, or the snapshot could not be decoded.
    pub fn undo(&mut self, surface: &mut CpuSurface) -> bool {
        match self.begin_undo() {
            Some(pending) => self.finish_restore(pending.decode(), surface),
            None => false,
        }
    }

    /// Redo the last undone stroke, overwriting `surface`
    ///
    /// Returns true if a redo was performed, false if the redo buffer is
    /// empty, a restore is in flight, or the snapshot could not be decoded.
    pub fn redo(&mut self, surface: &mut CpuSurface) -> bool {
        match self.begin_redo() {
            Some(pending) => self.finish_restore(pending.decode(), surface),
            None => false,
        }
    }

    /// Check if undo is available
    pub fn can_undo(&self) -> bool {
        self.entries.len() > 1
    }

    /// Check if redo is available
    pub fn can_redo(&self) -> bool {
        !self.redo.is_empty()
    }

    /// Index of the current entry, None before the first capture
    pub fn cursor(&self) -> Option<usize> {
        self.entries.len().checked_sub(1)
    }

    /// Number of entries in the undo sequence
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of entries available for redo
    pub fn redo_len(&self) -> usize {
        self.redo.len()
    }

    /// Check if a restore has been handed out and not finished
    pub fn is_restoring(&self) -> bool {
        self.in_flight.is_some()
    }
}
