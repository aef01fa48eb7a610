//! Full-canvas snapshots for undo

use tracing::error;

use crate::error::CanvasError;
use crate::types::Color;

use super::PixelCanvas;

/// A deep copy of the canvas pixels at one point in time
#[derive(Clone, PartialEq)]
pub struct UndoSnapshot {
    width: u32,
    height: u32,
    pixels: Vec<Color>,
}

// Pixel data is too large to print
impl std::fmt::Debug for UndoSnapshot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UndoSnapshot")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("pixel_count", &self.pixels.len())
            .finish()
    }
}

impl UndoSnapshot {
    /// (width, height) of the canvas this snapshot was taken from
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    pub fn pixels(&self) -> &[Color] {
        &self.pixels
    }
}

impl PixelCanvas {
    /// Copy the current canvas state (not the baseline)
    pub fn snapshot(&self) -> UndoSnapshot {
        UndoSnapshot {
            width: self.width,
            height: self.height,
            pixels: self.pixels.clone(),
        }
    }

    /// Check that a snapshot can be restored onto this canvas
    pub fn check_snapshot(&self, snapshot: &UndoSnapshot) -> Result<(), CanvasError> {
        if snapshot.dimensions() != self.dimensions() {
            return Err(CanvasError::DimensionMismatch {
                expected: self.dimensions(),
                actual: snapshot.dimensions(),
            });
        }
        Ok(())
    }

    /// Overwrite the canvas with a snapshot.
    ///
    /// A snapshot from a canvas of different size is a pairing bug; the
    /// canvas is left untouched and `DimensionMismatch` is returned.
    pub fn restore(&mut self, snapshot: &UndoSnapshot) -> Result<(), CanvasError> {
        if let Err(err) = self.check_snapshot(snapshot) {
            error!("PixelCanvas::restore: {}", err);
            return Err(err);
        }
        self.pixels.copy_from_slice(&snapshot.pixels);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{BLACK, RED};

    #[test]
    fn test_snapshot_restore_round_trip() {
        let mut canvas = PixelCanvas::new(16, 16).unwrap();
        canvas.set_pixel(4, 4, RED);
        let before = canvas.pixels().to_vec();

        let snapshot = canvas.snapshot();
        canvas.restore(&snapshot).unwrap();
        assert_eq!(canvas.pixels(), &before[..]);
    }

    #[test]
    fn test_restore_reverts_later_paint() {
        let mut canvas = PixelCanvas::new(8, 8).unwrap();
        canvas.set_pixel(1, 1, RED);
        let snapshot = canvas.snapshot();

        canvas.set_pixel(1, 1, BLACK);
        canvas.set_pixel(2, 2, BLACK);
        canvas.restore(&snapshot).unwrap();

        assert_eq!(canvas.get_pixel(1, 1), Some(RED));
        assert_eq!(canvas.get_pixel(2, 2), canvas.baseline_pixel(2, 2));
    }

    #[test]
    fn test_snapshot_excludes_baseline() {
        let mut canvas = PixelCanvas::filled(4, 4, BLACK).unwrap();
        canvas.set_pixel(0, 0, RED);
        let snapshot = canvas.snapshot();
        assert_eq!(snapshot.pixels()[0], RED);
        assert_eq!(snapshot.dimensions(), (4, 4));
    }

    #[test]
    fn test_restore_dimension_mismatch() {
        let small = PixelCanvas::new(4, 4).unwrap();
        let mut large = PixelCanvas::new(8, 8).unwrap();
        large.set_pixel(0, 0, RED);

        let err = large.restore(&small.snapshot()).unwrap_err();
        assert_eq!(
            err,
            CanvasError::DimensionMismatch {
                expected: (8, 8),
                actual: (4, 4)
            }
        );
        // Untouched
        assert_eq!(large.get_pixel(0, 0), Some(RED));
    }
}
