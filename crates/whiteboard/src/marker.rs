//! Per-controller stroke state
//!
//! A marker turns the contact samples of one controller into segments and
//! makes sure each stroke is undoable as a unit: the first sample of a
//! stroke on a board captures one snapshot, later samples do not. Moving
//! onto a different board mid-gesture starts a new undo unit there.

use glam::Vec2;
use tracing::debug;

use crate::brush::ActiveBrush;
use crate::rasterizer::StrokeRasterizer;
use crate::types::WhiteboardId;
use crate::whiteboard::Whiteboard;

/// Where the marker is in a stroke
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum StrokeState {
    /// Trigger released
    #[default]
    Idle,
    /// Trigger held. `last` is the previous contact sample, if the ray is
    /// still on the board since then.
    Drawing { last: Option<Vec2> },
}

#[derive(Debug, Clone, Default)]
pub struct Marker {
    state: StrokeState,
    /// Board the current undo unit belongs to
    target: Option<WhiteboardId>,
    /// Whether this stroke already captured its snapshot on `target`
    snapshot_taken: bool,
}

impl Marker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> StrokeState {
        self.state
    }

    pub fn target(&self) -> Option<WhiteboardId> {
        self.target
    }

    pub fn is_drawing(&self) -> bool {
        matches!(self.state, StrokeState::Drawing { .. })
    }

    /// Feed one contact sample in pixel space. Returns the number of stamps.
    pub fn sample(
        &mut self,
        board: &mut Whiteboard,
        position: Vec2,
        is_first_sample: bool,
        brush: &mut ActiveBrush,
        rasterizer: &StrokeRasterizer,
    ) -> usize {
        if self.target != Some(board.id()) {
            debug!("Marker: retarget {:?} -> {:?}", self.target, board.id());
            self.target = Some(board.id());
            self.snapshot_taken = false;
            self.state = StrokeState::Drawing { last: None };
        }

        // A first sample opens a new stroke even without a release in between
        if is_first_sample {
            self.snapshot_taken = false;
        }
        let last = match self.state {
            StrokeState::Drawing { last } if !is_first_sample => last,
            _ => None,
        };

        if !self.snapshot_taken {
            board.save_undo_state();
            self.snapshot_taken = true;
            debug!("Marker: stroke started on {:?}", board.id());
        }

        let from = last.unwrap_or(position);
        let stamps = brush.paint_segment(board.canvas_mut(), from, position, rasterizer);
        self.state = StrokeState::Drawing {
            last: Some(position),
        };
        stamps
    }

    /// The ray left the board while the trigger is held
    pub fn lose_contact(&mut self) {
        if let StrokeState::Drawing { last } = &mut self.state {
            *last = None;
        }
    }

    /// Trigger released; the next sample starts a new undo unit
    pub fn release(&mut self) {
        if self.is_drawing() {
            debug!("Marker: stroke finished on {:?}", self.target);
        }
        self.state = StrokeState::Idle;
        self.snapshot_taken = false;
    }
}
