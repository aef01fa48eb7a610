//! Pixel canvas with an immutable baseline
//!
//! The canvas is the drawable grid; the baseline is the pristine image
//! captured once at creation and used as the erase and clear target.

mod export;
mod region;
mod snapshot;

use tracing::debug;

use crate::error::CanvasError;
use crate::types::{Color, WHITE};

pub use snapshot::UndoSnapshot;

/// A fixed-size RGBA canvas stored row-major as [f32; 4] per pixel
#[derive(Clone)]
pub struct PixelCanvas {
    width: u32,
    height: u32,
    /// Drawable pixels
    pixels: Vec<Color>,
    /// Pristine copy, never written after construction
    baseline: Vec<Color>,
}

impl std::fmt::Debug for PixelCanvas {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PixelCanvas")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("pristine", &self.is_pristine())
            .finish()
    }
}

impl PixelCanvas {
    /// Create a canvas whose baseline is solid white
    pub fn new(width: u32, height: u32) -> Result<Self, CanvasError> {
        Self::filled(width, height, WHITE)
    }

    /// Create a canvas whose baseline is a single color
    pub fn filled(width: u32, height: u32, color: Color) -> Result<Self, CanvasError> {
        let count = pixel_count(width, height)?;
        Self::with_baseline(width, height, vec![color; count])
    }

    /// Create a canvas from an existing baseline image
    pub fn with_baseline(
        width: u32,
        height: u32,
        baseline: Vec<Color>,
    ) -> Result<Self, CanvasError> {
        let expected = pixel_count(width, height)?;
        if baseline.len() != expected {
            return Err(CanvasError::SizeMismatch {
                expected,
                actual: baseline.len(),
            });
        }

        debug!("PixelCanvas: created {}x{}", width, height);
        Ok(Self {
            width,
            height,
            pixels: baseline.clone(),
            baseline,
        })
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// (width, height)
    #[inline]
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    #[inline]
    pub fn pixel_count(&self) -> usize {
        self.pixels.len()
    }

    #[inline]
    fn index(&self, x: u32, y: u32) -> Option<usize> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some((y as usize) * (self.width as usize) + (x as usize))
    }

    /// Get a canvas pixel, None if out of bounds
    #[inline]
    pub fn get_pixel(&self, x: u32, y: u32) -> Option<Color> {
        self.index(x, y).map(|i| self.pixels[i])
    }

    /// Get a baseline pixel, None if out of bounds
    #[inline]
    pub fn baseline_pixel(&self, x: u32, y: u32) -> Option<Color> {
        self.index(x, y).map(|i| self.baseline[i])
    }

    /// Set a canvas pixel. Does nothing if out of bounds
    #[inline]
    pub fn set_pixel(&mut self, x: u32, y: u32, color: Color) {
        if let Some(i) = self.index(x, y) {
            self.pixels[i] = color;
        }
    }

    /// Copy the baseline back over the whole canvas
    pub fn reset_to_baseline(&mut self) {
        self.pixels.copy_from_slice(&self.baseline);
    }

    /// Replace the canvas content with a previously persisted image
    pub fn load_buffer(&mut self, buffer: &[Color]) -> Result<(), CanvasError> {
        if buffer.len() != self.pixels.len() {
            return Err(CanvasError::SizeMismatch {
                expected: self.pixels.len(),
                actual: buffer.len(),
            });
        }
        self.pixels.copy_from_slice(buffer);
        Ok(())
    }

    /// Canvas pixels in row-major order
    #[inline]
    pub fn pixels(&self) -> &[Color] {
        &self.pixels
    }

    /// Baseline pixels in row-major order
    #[inline]
    pub fn baseline(&self) -> &[Color] {
        &self.baseline
    }

    /// Raw canvas bytes for texture upload or encoding
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.pixels)
    }

    /// True when the canvas equals its baseline
    pub fn is_pristine(&self) -> bool {
        self.pixels == self.baseline
    }
}

fn pixel_count(width: u32, height: u32) -> Result<usize, CanvasError> {
    if width == 0 || height == 0 {
        return Err(CanvasError::InvalidDimensions { width, height });
    }
    Ok((width as usize) * (height as usize))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{BLACK, RED};

    #[test]
    fn test_new_canvas() {
        let canvas = PixelCanvas::new(100, 50).unwrap();
        assert_eq!(canvas.dimensions(), (100, 50));
        assert_eq!(canvas.pixel_count(), 5000);
        assert_eq!(canvas.get_pixel(99, 49), Some(WHITE));
        assert_eq!(canvas.get_pixel(100, 0), None);
        assert!(canvas.is_pristine());
    }

    #[test]
    fn test_zero_dimensions_rejected() {
        assert!(matches!(
            PixelCanvas::new(0, 10),
            Err(CanvasError::InvalidDimensions { width: 0, height: 10 })
        ));
    }

    #[test]
    fn test_with_baseline_size_checked() {
        let result = PixelCanvas::with_baseline(2, 2, vec![BLACK; 3]);
        assert_eq!(
            result.err(),
            Some(CanvasError::SizeMismatch {
                expected: 4,
                actual: 3
            })
        );
    }

    #[test]
    fn test_reset_to_baseline() {
        let mut canvas = PixelCanvas::filled(10, 10, BLACK).unwrap();
        canvas.set_pixel(3, 4, RED);
        assert!(!canvas.is_pristine());

        canvas.reset_to_baseline();
        assert_eq!(canvas.get_pixel(3, 4), Some(BLACK));
        assert!(canvas.is_pristine());
    }

    #[test]
    fn test_set_pixel_leaves_baseline() {
        let mut canvas = PixelCanvas::new(4, 4).unwrap();
        canvas.set_pixel(1, 1, RED);
        assert_eq!(canvas.get_pixel(1, 1), Some(RED));
        assert_eq!(canvas.baseline_pixel(1, 1), Some(WHITE));
    }

    #[test]
    fn test_load_buffer() {
        let mut canvas = PixelCanvas::new(2, 2).unwrap();
        canvas.load_buffer(&[RED, BLACK, RED, BLACK]).unwrap();
        assert_eq!(canvas.get_pixel(1, 0), Some(BLACK));
        assert_eq!(canvas.get_pixel(0, 1), Some(RED));

        assert!(matches!(
            canvas.load_buffer(&[RED]),
            Err(CanvasError::SizeMismatch { expected: 4, actual: 1 })
        ));
    }

    #[test]
    fn test_as_bytes() {
        let canvas = PixelCanvas::new(2, 2).unwrap();
        // 4 pixels * 4 channels * 4 bytes per f32
        assert_eq!(canvas.as_bytes().len(), 64);
    }
}
