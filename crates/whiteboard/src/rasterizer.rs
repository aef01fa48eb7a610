//! Stroke rasterization
//!
//! Consecutive contact samples are joined by stamping the brush at a fixed
//! set of interpolation offsets along the segment, then at the new sample
//! itself. The offsets do not depend on segment length, so fast strokes
//! leave visible gaps between stamps.

use glam::Vec2;
use tracing::trace;

use crate::brush::{BrushConfig, BrushStrategy};
use crate::canvas::PixelCanvas;
use crate::constants::{SWEEP_START, SWEEP_STEP};

/// Smallest accepted sweep step
const MIN_SWEEP_STEP: f32 = 0.01;

/// Turns a segment between two samples into stamp centers
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StrokeRasterizer {
    start: f32,
    step: f32,
}

impl Default for StrokeRasterizer {
    fn default() -> Self {
        Self {
            start: SWEEP_START,
            step: SWEEP_STEP,
        }
    }
}

impl StrokeRasterizer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Custom sweep. `step` is clamped to `0.01..=1` and `start` to `0..=1`.
    /// Non-finite values fall back to the defaults.
    pub fn with_sweep(start: f32, step: f32) -> Self {
        let start = if start.is_finite() { start } else { SWEEP_START };
        let step = if step.is_finite() { step } else { SWEEP_STEP };
        Self {
            start: start.clamp(0.0, 1.0),
            step: step.clamp(MIN_SWEEP_STEP, 1.0),
        }
    }

    /// Interpolation factors strictly below 1.0
    pub fn offsets(&self) -> Vec<f32> {
        let mut offsets = Vec::new();
        let mut k = 0u32;
        loop {
            // Computed from k to avoid accumulating rounding error
            let t = self.start + self.step * k as f32;
            if t >= 1.0 {
                break;
            }
            offsets.push(t);
            k += 1;
        }
        offsets
    }

    /// Stamp centers for a segment, in the order they are applied
    pub fn segment_points(&self, from: Vec2, to: Vec2) -> Vec<Vec2> {
        if from == to {
            return vec![to];
        }
        let mut points: Vec<Vec2> = self
            .offsets()
            .into_iter()
            .map(|t| from.lerp(to, t))
            .collect();
        points.push(to);
        points
    }

    /// Stamp `strategy` along the segment. Returns the number of stamp calls,
    /// including ones skipped because they fell off the canvas.
    pub fn rasterize_segment(
        &self,
        canvas: &mut PixelCanvas,
        from: Vec2,
        to: Vec2,
        brush: &BrushConfig,
        strategy: &mut dyn BrushStrategy,
    ) -> usize {
        let points = self.segment_points(from, to);
        let mut applied = 0usize;
        for &center in &points {
            if strategy.stamp(canvas, center, brush) {
                applied += 1;
            }
        }
        trace!(
            "Rasterized {:?} -> {:?}: {} stamps, {} applied",
            from,
            to,
            points.len(),
            applied
        );
        points.len()
    }
}
