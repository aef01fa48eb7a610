//! Diffuse brush: soft watercolor accumulation

use glam::Vec2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::{BrushConfig, BrushStrategy, stamp_masked};
use crate::canvas::PixelCanvas;
use crate::constants::{DIFFUSE_ATTENUATION_MAX, DIFFUSE_BLEND};
use crate::types::{StrategyKind, lerp_color};

/// Blends every masked pixel 2% toward the target. When painting, that 2%
/// is randomly pulled back toward the current pixel by up to half, so
/// overlapping stamps build up unevenly.
#[derive(Debug, Clone)]
pub struct Diffuse<R = StdRng> {
    rng: R,
}

impl Diffuse<StdRng> {
    /// Seeded from OS entropy
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }

    /// Reproducible accumulation
    pub fn seeded(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }
}

impl Default for Diffuse<StdRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> Diffuse<R> {
    pub fn with_rng(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> BrushStrategy for Diffuse<R> {
    fn kind(&self) -> StrategyKind {
        StrategyKind::Diffuse
    }

    fn stamp(&mut self, canvas: &mut PixelCanvas, center: Vec2, brush: &BrushConfig) -> bool {
        let erasing = brush.is_erasing();
        let rng = &mut self.rng;
        stamp_masked(canvas, center, brush, |current, target| {
            let blended = lerp_color(current, target, DIFFUSE_BLEND);
            if erasing {
                blended
            } else {
                lerp_color(
                    blended,
                    current,
                    rng.gen_range(0.0..=DIFFUSE_ATTENUATION_MAX),
                )
            }
        })
    }
}
