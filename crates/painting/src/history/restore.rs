//! Two-phase restore for undo/redo
//!
//! Decoding a snapshot is the slow part of undo/redo. The history hands out a
//! [`PendingRestore`] holding the snapshot to decode; the caller may decode it
//! on any thread and then hand the result back through
//! [`History::finish_restore`]. Only one restore may be in flight at a time,
//! and a history only accepts the restore it handed out itself.

use std::sync::atomic::{AtomicU64, Ordering};

use image::RgbaImage;
use tracing::{debug, warn};

use crate::error::PaintError;
use crate::surface::CpuSurface;

use super::History;
use super::snapshot::Snapshot;

static NEXT_RESTORE_ID: AtomicU64 = AtomicU64::new(1);

/// Which history operation a restore belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RestoreKind {
    Undo,
    Redo,
}

/// The restore a history is waiting for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct InFlight {
    pub(crate) kind: RestoreKind,
    /// Unique across every history in the process
    pub(crate) id: u64,
}

impl InFlight {
    fn next(kind: RestoreKind) -> Self {
        Self {
            kind,
            id: NEXT_RESTORE_ID.fetch_add(1, Ordering::Relaxed),
        }
    }
}

/// A restore handed out by the history, waiting to be decoded
#[derive(Debug)]
#[must_use = "a pending restore blocks further undo/redo until it is finished"]
pub struct PendingRestore {
    ticket: InFlight,
    snapshot: Snapshot,
}

/// A restore whose snapshot has been decoded (or failed to decode)
#[derive(Debug)]
pub struct DecodedRestore {
    ticket: InFlight,
    pixels: Result<RgbaImage, PaintError>,
}

impl PendingRestore {
    pub fn kind(&self) -> RestoreKind {
        self.ticket.kind
    }

    /// Decode the snapshot. Safe to run off the UI thread.
    pub fn decode(self) -> DecodedRestore {
        DecodedRestore {
            ticket: self.ticket,
            pixels: self.snapshot.decode(),
        }
    }
}

impl DecodedRestore {
    pub fn kind(&self) -> RestoreKind {
        self.ticket.kind
    }

    /// Whether the snapshot decoded into usable pixels
    pub fn is_ok(&self) -> bool {
        self.pixels.is_ok()
    }
}

impl History {
    /// Start an undo: step the cursor back and hand out the entry now under it
    ///
    /// Returns None when there is nothing to undo or a restore is already in
    /// flight.
    pub fn begin_undo(&mut self) -> Option<PendingRestore> {
        if self.in_flight.is_some() {
            debug!("Undo: restore already in flight, ignoring");
            return None;
        }
        if !self.can_undo() {
            debug!("Undo: no entries available");
            return None;
        }

        let snapshot = self.entries.get(self.entries.len() - 2)?.clone();
        let left = self.entries.pop()?;
        self.redo.push(left);
        let ticket = InFlight::next(RestoreKind::Undo);
        self.in_flight = Some(ticket);

        debug!(
            "Undo: cursor -> {:?} ({} redo entries)",
            self.cursor(),
            self.redo.len()
        );
        Some(PendingRestore { ticket, snapshot })
    }

    /// Start a redo: move the newest redo entry back onto the undo sequence
    ///
    /// Returns None when the redo buffer is empty or a restore is already in
    /// flight.
    pub fn begin_redo(&mut self) -> Option<PendingRestore> {
        if self.in_flight.is_some() {
            debug!("Redo: restore already in flight, ignoring");
            return None;
        }

        let Some(entry) = self.redo.pop() else {
            debug!("Redo: no entries available");
            return None;
        };

        let snapshot = entry.clone();
        self.entries.push(entry);
        let ticket = InFlight::next(RestoreKind::Redo);
        self.in_flight = Some(ticket);

        debug!(
            "Redo: cursor -> {:?} ({} redo entries)",
            self.cursor(),
            self.redo.len()
        );
        Some(PendingRestore { ticket, snapshot })
    }

    /// Apply a decoded restore to `surface`
    ///
    /// The surface is overwritten (not blended). If decoding failed the
    /// surface is left alone, the cursor move is rolled back, and false is
    /// returned.
    pub fn finish_restore(&mut self, decoded: DecodedRestore, surface: &mut CpuSurface) -> bool {
        let kind = decoded.ticket.kind;
        if self.in_flight != Some(decoded.ticket) {
            warn!("Restore: {:?} was not handed out by this history, discarding", kind);
            return false;
        }
        self.in_flight = None;

        let applied = decoded
            .pixels
            .and_then(|image| surface.replace_with(&image));

        match applied {
            Ok(()) => {
                debug!("Restore: {:?} applied", kind);
                true
            }
            Err(e) => {
                warn!("Restore: {:?} failed, keeping surface: {}", kind, e);
                self.roll_back(kind);
                false
            }
        }
    }

    /// Give up on a pending restore without touching the surface
    pub fn abandon_restore(&mut self, pending: PendingRestore) {
        if self.in_flight == Some(pending.ticket) {
            debug!("Restore: {:?} abandoned", pending.ticket.kind);
            self.in_flight = None;
            self.roll_back(pending.ticket.kind);
        }
    }

    /// Undo the cursor move made by `begin_undo` / `begin_redo`
    fn roll_back(&mut self, kind: RestoreKind) {
        match kind {
            RestoreKind::Undo => {
                if let Some(entry) = self.redo.pop() {
                    self.entries.push(entry);
                }
            }
            RestoreKind::Redo => {
                if let Some(entry) = self.entries.pop() {
                    self.redo.push(entry);
                }
            }
        }
    }
}
