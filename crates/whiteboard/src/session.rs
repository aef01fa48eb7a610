//! Single-canvas facade for input collaborators
//!
//! A [`Session`] wires one [`Whiteboard`], one [`Marker`] and the
//! [`ActiveBrush`] together. Input code calls [`Session::on_contact_sample`]
//! once per frame while the tool touches the board and
//! [`Session::on_contact_end`] when it lets go.

use glam::Vec2;
use tracing::{debug, warn};

use whiteboard_config::WhiteboardConfig;

use crate::brush::{ActiveBrush, BrushConfig};
use crate::canvas::PixelCanvas;
use crate::error::{BrushError, CanvasError, SetupError};
use crate::marker::Marker;
use crate::rasterizer::StrokeRasterizer;
use crate::settings::BrushSettings;
use crate::types::{Color, StrategyKind, WhiteboardId};
use crate::whiteboard::Whiteboard;

#[derive(Debug)]
pub struct Session {
    board: Whiteboard,
    marker: Marker,
    brush: ActiveBrush,
    rasterizer: StrokeRasterizer,
}

impl Session {
    /// White canvas and solid brush as configured
    pub fn new(config: &WhiteboardConfig) -> Result<Self, SetupError> {
        let board = Whiteboard::new(WhiteboardId(0), config)?;
        Self::with_whiteboard(board, config)
    }

    /// Drive an existing board, e.g. one with a custom baseline
    pub fn with_whiteboard(board: Whiteboard, config: &WhiteboardConfig) -> Result<Self, SetupError> {
        let brush = ActiveBrush::from_config(config)?;
        debug!(
            "Session: {}x{} canvas, brush size {}",
            board.canvas().width(),
            board.canvas().height(),
            brush.config().size()
        );
        Ok(Self {
            board,
            marker: Marker::new(),
            brush,
            rasterizer: StrokeRasterizer::new(),
        })
    }

    pub fn with_rasterizer(mut self, rasterizer: StrokeRasterizer) -> Self {
        self.rasterizer = rasterizer;
        self
    }

    /// Contact sample in pixel space. Returns the number of stamps.
    pub fn on_contact_sample(&mut self, position: Vec2, is_first_sample_of_stroke: bool) -> usize {
        self.marker.sample(
            &mut self.board,
            position,
            is_first_sample_of_stroke,
            &mut self.brush,
            &self.rasterizer,
        )
    }

    /// The tool left the board but the stroke continues
    pub fn on_contact_lost(&mut self) {
        self.marker.lose_contact();
    }

    /// The stroke is over
    pub fn on_contact_end(&mut self) {
        self.marker.release();
    }

    /// Revert the most recent stroke. `Ok(false)` when there is none.
    pub fn undo(&mut self) -> Result<bool, CanvasError> {
        self.board.undo()
    }

    pub fn set_brush(
        &mut self,
        size: u32,
        color: Color,
        erasing: bool,
        kind: StrategyKind,
    ) -> Result<(), BrushError> {
        self.brush.set_brush(size, color, erasing, kind)
    }

    pub fn apply_settings(&mut self, settings: &BrushSettings) -> Result<(), BrushError> {
        self.brush.apply_settings(settings)
    }

    pub fn toggle_erase(&mut self) -> bool {
        self.brush.toggle_erase()
    }

    pub fn cycle_strategy(&mut self) -> StrategyKind {
        self.brush.cycle_strategy()
    }

    /// Out-of-range indices are ignored
    pub fn set_strategy_index(&mut self, index: usize) {
        self.brush.set_strategy_index(index);
    }

    /// Reset to the baseline. The previous drawing can be undone.
    pub fn new_artwork(&mut self) {
        self.marker.release();
        self.board.clear();
    }

    /// Replace the drawing with a persisted one
    pub fn load_buffer(&mut self, buffer: &[Color]) -> Result<(), CanvasError> {
        self.board.load_buffer(buffer).inspect_err(|err| {
            warn!("Session::load_buffer rejected: {}", err);
        })
    }

    pub fn texture_bytes(&self) -> &[u8] {
        self.board.texture_bytes()
    }

    pub fn canvas(&self) -> &PixelCanvas {
        self.board.canvas()
    }

    pub fn whiteboard(&self) -> &Whiteboard {
        &self.board
    }

    pub fn brush(&self) -> &BrushConfig {
        self.brush.config()
    }

    pub fn strategy(&self) -> StrategyKind {
        self.brush.kind()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{BLACK, RED, WHITE};

    fn session() -> Session {
        let mut config = WhiteboardConfig::with_canvas(64, 64);
        config.brush_size = 8;
        config.rng_seed = Some(3);
        Session::new(&config).unwrap()
    }

    #[test]
    fn test_stroke_then_undo() {
        let mut session = session();
        session.on_contact_sample(Vec2::new(10.0, 10.0), true);
        session.on_contact_sample(Vec2::new(30.0, 10.0), false);
        session.on_contact_end();
        assert_eq!(session.canvas().get_pixel(20, 10), Some(RED));

        assert_eq!(session.undo(), Ok(true));
        assert!(session.canvas().is_pristine());
        assert_eq!(session.undo(), Ok(false));
    }

    #[test]
    fn test_set_brush_and_erase() {
        let mut session = session();
        session
            .set_brush(4, BLACK, false, StrategyKind::Solid)
            .unwrap();
        session.on_contact_sample(Vec2::new(20.0, 20.0), true);
        session.on_contact_end();
        assert_eq!(session.canvas().get_pixel(20, 20), Some(BLACK));

        assert!(session.toggle_erase());
        session.on_contact_sample(Vec2::new(20.0, 20.0), true);
        session.on_contact_end();
        assert_eq!(session.canvas().get_pixel(20, 20), Some(WHITE));

        assert_eq!(
            session.set_brush(0, RED, false, StrategyKind::Solid),
            Err(BrushError::InvalidSize(0))
        );
    }

    #[test]
    fn test_strategy_selection() {
        let mut session = session();
        assert_eq!(session.cycle_strategy(), StrategyKind::Spray);
        session.set_strategy_index(9);
        assert_eq!(session.strategy(), StrategyKind::Spray);
        session.set_strategy_index(2);
        assert_eq!(session.strategy(), StrategyKind::Diffuse);
    }

    #[test]
    fn test_new_artwork_is_undoable() {
        let mut session = session();
        session.on_contact_sample(Vec2::new(10.0, 10.0), true);
        session.on_contact_end();
        session.new_artwork();
        assert!(session.canvas().is_pristine());

        assert_eq!(session.undo(), Ok(true));
        assert_eq!(session.canvas().get_pixel(10, 10), Some(RED));
    }

    #[test]
    fn test_load_buffer_checks_size() {
        let mut session = session();
        assert!(matches!(
            session.load_buffer(&[RED; 4]),
            Err(CanvasError::SizeMismatch { .. })
        ));
        session.load_buffer(&vec![BLACK; 64 * 64]).unwrap();
        assert_eq!(session.canvas().get_pixel(63, 63), Some(BLACK));
        assert_eq!(session.texture_bytes().len(), 64 * 64 * 16);
    }
}
