//! Conversion to and from 8-bit images for persistence collaborators

use image::{Rgba, RgbaImage};

use crate::error::CanvasError;
use crate::types::Color;

use super::PixelCanvas;

#[inline]
fn to_u8(channel: f32) -> u8 {
    (channel.clamp(0.0, 1.0) * 255.0).round() as u8
}

#[inline]
fn to_color(pixel: &Rgba<u8>) -> Color {
    let [r, g, b, a] = pixel.0;
    [
        r as f32 / 255.0,
        g as f32 / 255.0,
        b as f32 / 255.0,
        a as f32 / 255.0,
    ]
}

impl PixelCanvas {
    /// Quantize the canvas to an 8-bit RGBA image
    pub fn to_rgba_image(&self) -> RgbaImage {
        let width = self.width as usize;
        RgbaImage::from_fn(self.width, self.height, |x, y| {
            let c = self.pixels[(y as usize) * width + x as usize];
            Rgba([to_u8(c[0]), to_u8(c[1]), to_u8(c[2]), to_u8(c[3])])
        })
    }

    /// Load an 8-bit RGBA image of the same size into the canvas
    pub fn load_rgba_image(&mut self, image: &RgbaImage) -> Result<(), CanvasError> {
        let actual = image.dimensions();
        if actual != self.dimensions() {
            return Err(CanvasError::DimensionMismatch {
                expected: self.dimensions(),
                actual,
            });
        }
        let buffer: Vec<Color> = image.pixels().map(to_color).collect();
        self.load_buffer(&buffer)
    }
}
