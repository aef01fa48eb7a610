//! Two-hand brush routing over several whiteboards
//!
//! Both controllers paint with the same [`ActiveBrush`] but keep their own
//! [`Marker`], so each hand's stroke is a separate undo unit on whichever
//! board its ray hits.

use glam::Vec2;
use tracing::{debug, warn};

use whiteboard_config::WhiteboardConfig;

use crate::brush::ActiveBrush;
use crate::error::{CanvasError, SetupError};
use crate::marker::Marker;
use crate::rasterizer::StrokeRasterizer;
use crate::types::{Hand, WhiteboardId};
use crate::whiteboard::Whiteboard;

#[derive(Debug)]
pub struct BrushController {
    config: WhiteboardConfig,
    boards: Vec<Whiteboard>,
    markers: [Marker; 2],
    brush: ActiveBrush,
    rasterizer: StrokeRasterizer,
    /// Board that undo applies to
    last_touched: Option<WhiteboardId>,
}

impl BrushController {
    /// Controller with no boards; add them with [`Self::add_board`]
    pub fn new(config: &WhiteboardConfig) -> Result<Self, SetupError> {
        Ok(Self {
            config: config.clone(),
            boards: Vec::new(),
            markers: [Marker::new(), Marker::new()],
            brush: ActiveBrush::from_config(config)?,
            rasterizer: StrokeRasterizer::new(),
            last_touched: None,
        })
    }

    /// Controller with one configured board per id
    pub fn with_boards(
        config: &WhiteboardConfig,
        ids: impl IntoIterator<Item = WhiteboardId>,
    ) -> Result<Self, SetupError> {
        let mut controller = Self::new(config)?;
        for id in ids {
            controller.add_board(id)?;
        }
        Ok(controller)
    }

    /// Create a board sized by the config. An existing board with the same
    /// id is replaced.
    pub fn add_board(&mut self, id: WhiteboardId) -> Result<&mut Whiteboard, CanvasError> {
        let board = Whiteboard::new(id, &self.config)?;
        let index = self.insert_board(board);
        Ok(&mut self.boards[index])
    }

    /// Add a prepared board, replacing one with the same id. Strokes in
    /// progress on a replaced board end. Returns the board's slot.
    pub fn insert_board(&mut self, board: Whiteboard) -> usize {
        let id = board.id();
        match self.index_of(id) {
            Some(index) => {
                warn!("BrushController: replacing board {:?}", id);
                for marker in &mut self.markers {
                    if marker.target() == Some(id) {
                        marker.release();
                    }
                }
                self.boards[index] = board;
                index
            }
            None => {
                debug!("BrushController: added board {:?}", id);
                self.boards.push(board);
                self.boards.len() - 1
            }
        }
    }

    pub fn board(&self, id: WhiteboardId) -> Option<&Whiteboard> {
        self.boards.iter().find(|b| b.id() == id)
    }

    pub fn boards(&self) -> &[Whiteboard] {
        &self.boards
    }

    pub fn brush(&self) -> &ActiveBrush {
        &self.brush
    }

    /// Brush changes apply to both hands
    pub fn brush_mut(&mut self) -> &mut ActiveBrush {
        &mut self.brush
    }

    pub fn marker(&self, hand: Hand) -> &Marker {
        &self.markers[hand.slot()]
    }

    pub fn last_touched(&self) -> Option<WhiteboardId> {
        self.last_touched
    }

    /// Contact sample from `hand` on `board_id` in pixel space.
    /// Unknown boards are ignored and return 0.
    pub fn sample(
        &mut self,
        hand: Hand,
        board_id: WhiteboardId,
        position: Vec2,
        is_first_sample: bool,
    ) -> usize {
        let Some(index) = self.index_of(board_id) else {
            warn!("BrushController: {:?} hit unknown board {:?}", hand, board_id);
            return 0;
        };
        self.last_touched = Some(board_id);
        self.markers[hand.slot()].sample(
            &mut self.boards[index],
            position,
            is_first_sample,
            &mut self.brush,
            &self.rasterizer,
        )
    }

    /// Same as [`Self::sample`] with a texture coordinate in `0..=1`
    pub fn sample_uv(
        &mut self,
        hand: Hand,
        board_id: WhiteboardId,
        uv: Vec2,
        is_first_sample: bool,
    ) -> usize {
        let Some(position) = self.board(board_id).map(|b| b.uv_to_pixel(uv)) else {
            warn!("BrushController: {:?} hit unknown board {:?}", hand, board_id);
            return 0;
        };
        self.sample(hand, board_id, position, is_first_sample)
    }

    /// The ray of `hand` left every board while its trigger is held
    pub fn lose_contact(&mut self, hand: Hand) {
        self.markers[hand.slot()].lose_contact();
    }

    /// Trigger of `hand` released
    pub fn release(&mut self, hand: Hand) {
        self.markers[hand.slot()].release();
    }

    /// Undo on the most recently touched board. `Ok(false)` if there is none
    /// or its history is empty.
    pub fn undo(&mut self) -> Result<bool, CanvasError> {
        let Some(index) = self.last_touched.and_then(|id| self.index_of(id)) else {
            debug!("BrushController: no board to undo");
            return Ok(false);
        };
        self.boards[index].undo()
    }

    fn index_of(&self, id: WhiteboardId) -> Option<usize> {
        self.boards.iter().position(|b| b.id() == id)
    }
}
