//! Rectangular region access

use crate::error::CanvasError;
use crate::types::Color;

use super::PixelCanvas;

impl PixelCanvas {
    /// Validate that a rectangle lies fully inside the canvas.
    ///
    /// No clamping is applied: any overhang is `OutOfBounds`. A zero-area
    /// rectangle is accepted when its origin is inside the canvas.
    fn check_region(&self, x: u32, y: u32, width: u32, height: u32) -> Result<(), CanvasError> {
        let fits_x = x < self.width && x.checked_add(width).is_some_and(|end| end <= self.width);
        let fits_y = y < self.height && y.checked_add(height).is_some_and(|end| end <= self.height);

        if fits_x && fits_y {
            Ok(())
        } else {
            Err(CanvasError::OutOfBounds {
                x,
                y,
                width,
                height,
                canvas_width: self.width,
                canvas_height: self.height,
            })
        }
    }

    fn copy_region(
        &self,
        source: &[Color],
        x: u32,
        y: u32,
        width: u32,
        height: u32,
    ) -> Result<Vec<Color>, CanvasError> {
        self.check_region(x, y, width, height)?;

        let stride = self.width as usize;
        let mut data = Vec::with_capacity((width as usize) * (height as usize));
        for row in y..y + height {
            let start = (row as usize) * stride + x as usize;
            data.extend_from_slice(&source[start..start + width as usize]);
        }
        Ok(data)
    }

    /// Copy a rectangle of canvas pixels in row-major order
    pub fn get_region(
        &self,
        x: u32,
        y: u32,
        width: u32,
        height: u32,
    ) -> Result<Vec<Color>, CanvasError> {
        self.copy_region(&self.pixels, x, y, width, height)
    }

    /// Copy a rectangle of baseline pixels in row-major order
    pub fn baseline_region(
        &self,
        x: u32,
        y: u32,
        width: u32,
        height: u32,
    ) -> Result<Vec<Color>, CanvasError> {
        self.copy_region(&self.baseline, x, y, width, height)
    }

    /// Overwrite a rectangle of canvas pixels from a row-major buffer
    pub fn set_region(
        &mut self,
        x: u32,
        y: u32,
        width: u32,
        height: u32,
        buffer: &[Color],
    ) -> Result<(), CanvasError> {
        let expected = (width as usize) * (height as usize);
        if buffer.len() != expected {
            return Err(CanvasError::SizeMismatch {
                expected,
                actual: buffer.len(),
            });
        }
        self.check_region(x, y, width, height)?;

        let stride = self.width as usize;
        for (row, chunk) in buffer.chunks_exact(width.max(1) as usize).enumerate() {
            let start = (y as usize + row) * stride + x as usize;
            self.pixels[start..start + chunk.len()].copy_from_slice(chunk);
        }
        Ok(())
    }
}
