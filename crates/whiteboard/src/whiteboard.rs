//! A paintable surface: one canvas and its undo history

use glam::Vec2;
use tracing::debug;

use whiteboard_config::WhiteboardConfig;

use crate::canvas::PixelCanvas;
use crate::error::CanvasError;
use crate::types::{Color, WHITE, WhiteboardId};
use crate::undo::UndoHistory;

#[derive(Debug, Clone)]
pub struct Whiteboard {
    id: WhiteboardId,
    canvas: PixelCanvas,
    history: UndoHistory,
}

impl Whiteboard {
    /// A white board sized and bounded by `config`
    pub fn new(id: WhiteboardId, config: &WhiteboardConfig) -> Result<Self, CanvasError> {
        let canvas = PixelCanvas::filled(config.canvas_width, config.canvas_height, WHITE)?;
        Ok(Self::with_canvas(id, canvas, config.undo_capacity))
    }

    /// Wrap an existing canvas, e.g. one with a pre-printed baseline
    pub fn with_canvas(id: WhiteboardId, canvas: PixelCanvas, undo_capacity: usize) -> Self {
        Self {
            id,
            canvas,
            history: UndoHistory::new(undo_capacity),
        }
    }

    pub fn id(&self) -> WhiteboardId {
        self.id
    }

    pub fn canvas(&self) -> &PixelCanvas {
        &self.canvas
    }

    pub fn canvas_mut(&mut self) -> &mut PixelCanvas {
        &mut self.canvas
    }

    pub fn history(&self) -> &UndoHistory {
        &self.history
    }

    /// Snapshot the canvas onto the undo stack
    pub fn save_undo_state(&mut self) {
        self.history.capture(&self.canvas);
    }

    pub fn undo(&mut self) -> Result<bool, CanvasError> {
        self.history.undo(&mut self.canvas)
    }

    /// Start a new artwork. The previous drawing stays undoable.
    pub fn clear(&mut self) {
        self.save_undo_state();
        self.canvas.reset_to_baseline();
        debug!("Whiteboard {:?}: cleared", self.id);
    }

    /// Replace the drawing with a loaded one. The previous drawing stays undoable.
    pub fn load_buffer(&mut self, buffer: &[Color]) -> Result<(), CanvasError> {
        if buffer.len() != self.canvas.pixel_count() {
            return Err(CanvasError::SizeMismatch {
                expected: self.canvas.pixel_count(),
                actual: buffer.len(),
            });
        }
        self.save_undo_state();
        self.canvas.load_buffer(buffer)
    }

    /// Raw texel bytes for upload as an Rgba32Float texture
    pub fn texture_bytes(&self) -> &[u8] {
        self.canvas.as_bytes()
    }

    /// Map a texture coordinate in `0..=1` to pixel space
    pub fn uv_to_pixel(&self, uv: Vec2) -> Vec2 {
        uv * Vec2::new(self.canvas.width() as f32, self.canvas.height() as f32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::RED;

    fn board() -> Whiteboard {
        Whiteboard::new(WhiteboardId(1), &WhiteboardConfig::with_canvas(16, 8)).unwrap()
    }

    #[test]
    fn test_new_board_is_white() {
        let board = board();
        assert_eq!(board.canvas().dimensions(), (16, 8));
        assert_eq!(board.canvas().get_pixel(3, 3), Some(WHITE));
        assert_eq!(board.history().capacity(), 5);
        assert_eq!(board.texture_bytes().len(), 16 * 8 * 16);
    }

    #[test]
    fn test_clear_is_undoable() {
        let mut board = board();
        board.canvas_mut().set_pixel(2, 2, RED);
        board.clear();
        assert!(board.canvas().is_pristine());

        assert_eq!(board.undo(), Ok(true));
        assert_eq!(board.canvas().get_pixel(2, 2), Some(RED));
    }

    #[test]
    fn test_load_buffer() {
        let mut board = board();
        let buffer = vec![RED; 16 * 8];
        board.load_buffer(&buffer).unwrap();
        assert_eq!(board.canvas().get_pixel(15, 7), Some(RED));

        let err = board.load_buffer(&buffer[..10]).unwrap_err();
        assert_eq!(
            err,
            CanvasError::SizeMismatch {
                expected: 128,
                actual: 10
            }
        );
        assert_eq!(board.history().len(), 1);
    }

    #[test]
    fn test_uv_to_pixel() {
        let board = board();
        assert_eq!(board.uv_to_pixel(Vec2::new(0.5, 0.25)), Vec2::new(8.0, 2.0));
        assert_eq!(board.uv_to_pixel(Vec2::ONE), Vec2::new(16.0, 8.0));
    }
}
