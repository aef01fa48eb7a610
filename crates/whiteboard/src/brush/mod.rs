//! Brush strategies and the shared stamp machinery
//!
//! Every strategy stamps the same footprint: a square of side `size`
//! whose top-left corner is `trunc(center - size / 2)`, masked to the
//! circle of radius `size / 2` around the square's center. Strategies only
//! differ in how a masked pixel moves toward its target, which is the brush
//! color when painting and the baseline pixel when erasing.

mod active;
mod diffuse;
mod solid;
mod spray;

use glam::Vec2;
use tracing::{trace, warn};

use crate::canvas::PixelCanvas;
use crate::constants::MAX_BRUSH_SPAN;
use crate::error::BrushError;
use crate::types::{Color, StrategyKind};

pub use active::ActiveBrush;
pub use diffuse::Diffuse;
pub use solid::Solid;
pub use spray::Spray;

/// Brush parameters shared by all strategies
#[derive(Debug, Clone, PartialEq)]
pub struct BrushConfig {
    /// Span of the stamp square in pixels (the mask diameter)
    size: u32,
    /// Fill color
    color: Color,
    /// Per-pixel colors for the stamp square, size * size entries
    colors: Vec<Color>,
    /// Blend toward the baseline instead of the brush color
    erasing: bool,
}

impl BrushConfig {
    /// Create a brush filled with a single color
    pub fn new(size: u32, color: Color, erasing: bool) -> Result<Self, BrushError> {
        let count = buffer_len(size)?;
        Ok(Self {
            size,
            color,
            colors: vec![color; count],
            erasing,
        })
    }

    /// Create a brush with an explicit per-pixel color buffer.
    /// `color` is reported as the first entry.
    pub fn with_colors(size: u32, colors: Vec<Color>, erasing: bool) -> Result<Self, BrushError> {
        let expected = buffer_len(size)?;
        if colors.len() != expected {
            return Err(BrushError::ColorBufferMismatch {
                expected,
                actual: colors.len(),
            });
        }
        Ok(Self {
            size,
            color: colors[0],
            colors,
            erasing,
        })
    }

    #[inline]
    pub fn size(&self) -> u32 {
        self.size
    }

    /// Mask radius: half the span, rounded down
    #[inline]
    pub fn radius(&self) -> u32 {
        self.size / 2
    }

    #[inline]
    pub fn color(&self) -> Color {
        self.color
    }

    #[inline]
    pub fn colors(&self) -> &[Color] {
        &self.colors
    }

    #[inline]
    pub fn is_erasing(&self) -> bool {
        self.erasing
    }

    /// Switch between paint and erase without rebuilding the color buffer
    pub fn set_erasing(&mut self, erasing: bool) {
        self.erasing = erasing;
    }
}

/// Entries in the color buffer of a brush, `size * size`
fn buffer_len(size: u32) -> Result<usize, BrushError> {
    if size == 0 || size > MAX_BRUSH_SPAN {
        return Err(BrushError::InvalidSize(size));
    }
    Ok((size as usize) * (size as usize))
}

/// A per-pixel blending policy applied inside the circular mask
pub trait BrushStrategy {
    /// Which variant this is
    fn kind(&self) -> StrategyKind;

    /// Stamp the brush once at `center` (pixel space).
    ///
    /// Returns false when the footprint does not fit on the canvas, in
    /// which case the canvas is untouched.
    fn stamp(&mut self, canvas: &mut PixelCanvas, center: Vec2, brush: &BrushConfig) -> bool;
}

/// Create a strategy instance, seeding the randomized ones when a seed is given
pub fn new_strategy(kind: StrategyKind, seed: Option<u64>) -> Box<dyn BrushStrategy> {
    match (kind, seed) {
        (StrategyKind::Solid, _) => Box::new(Solid),
        (StrategyKind::Spray, Some(seed)) => Box::new(Spray::seeded(seed)),
        (StrategyKind::Spray, None) => Box::new(Spray::new()),
        (StrategyKind::Diffuse, Some(seed)) => Box::new(Diffuse::seeded(seed)),
        (StrategyKind::Diffuse, None) => Box::new(Diffuse::new()),
    }
}

/// The square of canvas pixels one stamp may touch
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StampFootprint {
    /// Left column
    pub x: u32,
    /// Top row
    pub y: u32,
    /// Side length
    pub size: u32,
}

impl StampFootprint {
    /// Place a footprint for a stamp at `center`.
    ///
    /// Returns None when the stamp must be skipped: non-finite center, zero
    /// size, or a square that is not strictly inside the far canvas edges.
    pub fn locate(center: Vec2, size: u32, canvas_width: u32, canvas_height: u32) -> Option<Self> {
        if size == 0 || !center.is_finite() {
            return None;
        }
        let half = (size / 2) as f32;
        // Truncation toward zero, so centers just left of the edge still land on 0
        let x = (center.x - half) as i64;
        let y = (center.y - half) as i64;
        let size_i = size as i64;

        if x < 0
            || y < 0
            || x.saturating_add(size_i) >= canvas_width as i64
            || y.saturating_add(size_i) >= canvas_height as i64
        {
            return None;
        }

        Some(Self {
            x: x as u32,
            y: y as u32,
            size,
        })
    }

    #[inline]
    pub fn radius(&self) -> u32 {
        self.size / 2
    }

    /// Whether local pixel (i, j) of the square lies in the circular mask
    #[inline]
    pub fn in_mask(&self, i: u32, j: u32) -> bool {
        let r = self.radius() as i64;
        let dx = i as i64 - r;
        let dy = j as i64 - r;
        dx * dx + dy * dy <= r * r
    }

    /// Whether canvas pixel (px, py) lies in the square
    #[inline]
    pub fn contains(&self, px: u32, py: u32) -> bool {
        px >= self.x && py >= self.y && px - self.x < self.size && py - self.y < self.size
    }

    /// Whether canvas pixel (px, py) lies in the circular mask
    pub fn masks(&self, px: u32, py: u32) -> bool {
        self.contains(px, py) && self.in_mask(px - self.x, py - self.y)
    }
}

/// Run one stamp: read the footprint, blend each masked pixel from
/// `(current, target)`, write the square back.
pub(crate) fn stamp_masked<F>(
    canvas: &mut PixelCanvas,
    center: Vec2,
    brush: &BrushConfig,
    mut blend: F,
) -> bool
where
    F: FnMut(Color, Color) -> Color,
{
    let Some(footprint) =
        StampFootprint::locate(center, brush.size(), canvas.width(), canvas.height())
    else {
        trace!(
            "stamp skipped: ({:.1}, {:.1}) size={} outside {}x{}",
            center.x,
            center.y,
            brush.size(),
            canvas.width(),
            canvas.height()
        );
        return false;
    };

    let StampFootprint { x, y, size } = footprint;
    let region = canvas.get_region(x, y, size, size).and_then(|pixels| {
        canvas
            .baseline_region(x, y, size, size)
            .map(|baseline| (pixels, baseline))
    });
    let (mut pixels, baseline) = match region {
        Ok(region) => region,
        Err(err) => {
            warn!("stamp: footprint read failed: {}", err);
            return false;
        }
    };

    let colors = brush.colors();
    for j in 0..size {
        for i in 0..size {
            if !footprint.in_mask(i, j) {
                continue;
            }
            let index = (j * size + i) as usize;
            let target = if brush.is_erasing() {
                baseline[index]
            } else {
                colors[index]
            };
            pixels[index] = blend(pixels[index], target);
        }
    }

    if let Err(err) = canvas.set_region(x, y, size, size, &pixels) {
        warn!("stamp: footprint write failed: {}", err);
        return false;
    }
    true
}
