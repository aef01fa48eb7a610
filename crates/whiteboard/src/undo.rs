//! Bounded snapshot history

use std::collections::VecDeque;
use tracing::{debug, error};

use whiteboard_config::DEFAULT_UNDO_CAPACITY;

use crate::canvas::{PixelCanvas, UndoSnapshot};
use crate::error::CanvasError;

/// Newest-last stack of whole-canvas snapshots.
///
/// Pushing past capacity evicts the oldest entry.
#[derive(Debug, Clone)]
pub struct UndoHistory {
    entries: VecDeque<UndoSnapshot>,
    capacity: usize,
}

impl Default for UndoHistory {
    fn default() -> Self {
        Self::with_default_capacity()
    }
}

impl UndoHistory {
    /// History keeping at most `capacity` snapshots. Zero disables undo.
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: VecDeque::new(),
            capacity,
        }
    }

    pub fn with_default_capacity() -> Self {
        Self::new(DEFAULT_UNDO_CAPACITY)
    }

    /// Push the current canvas contents
    pub fn capture(&mut self, canvas: &PixelCanvas) {
        if self.capacity == 0 {
            return;
        }
        self.entries.push_back(canvas.snapshot());
        while self.entries.len() > self.capacity {
            self.entries.pop_front();
        }
        debug!(
            "UndoHistory: captured snapshot ({}/{})",
            self.entries.len(),
            self.capacity
        );
    }

    /// Restore the newest snapshot. `Ok(false)` when there is nothing to undo.
    pub fn undo(&mut self, canvas: &mut PixelCanvas) -> Result<bool, CanvasError> {
        let Some(snapshot) = self.entries.back() else {
            debug!("UndoHistory: nothing to undo");
            return Ok(false);
        };

        // Checked before popping so a mismatched entry stays on the stack
        if let Err(err) = canvas.check_snapshot(snapshot) {
            error!("UndoHistory: refusing to restore: {}", err);
            return Err(err);
        }

        if let Some(snapshot) = self.entries.pop_back() {
            canvas.restore(&snapshot)?;
        }
        debug!("UndoHistory: undo applied, {} remaining", self.entries.len());
        Ok(true)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
