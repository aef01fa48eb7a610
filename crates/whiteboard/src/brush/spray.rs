//! Spray brush: sparse randomized grain

use glam::Vec2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::{BrushConfig, BrushStrategy, stamp_masked};
use crate::canvas::PixelCanvas;
use crate::constants::{SPRAY_BLEND_MAX, SPRAY_BLEND_MIN, SPRAY_COVERAGE};
use crate::types::{StrategyKind, lerp_color};

/// Touches roughly one masked pixel in a hundred per stamp, blending it
/// 40-80% toward the target.
#[derive(Debug, Clone)]
pub struct Spray<R = StdRng> {
    rng: R,
}

impl Spray<StdRng> {
    /// Seeded from OS entropy
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }

    /// Reproducible grain
    pub fn seeded(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }
}

impl Default for Spray<StdRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> Spray<R> {
    pub fn with_rng(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> BrushStrategy for Spray<R> {
    fn kind(&self) -> StrategyKind {
        StrategyKind::Spray
    }

    fn stamp(&mut self, canvas: &mut PixelCanvas, center: Vec2, brush: &BrushConfig) -> bool {
        let rng = &mut self.rng;
        stamp_masked(canvas, center, brush, |current, target| {
            if rng.gen_range(0.0f32..1.0) > 1.0 - SPRAY_COVERAGE {
                lerp_color(
                    current,
                    target,
                    rng.gen_range(SPRAY_BLEND_MIN..=SPRAY_BLEND_MAX),
                )
            } else {
                current
            }
        })
    }
}
