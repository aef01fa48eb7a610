//! Solid brush: full replacement inside the mask

use glam::Vec2;

use super::{BrushConfig, BrushStrategy, stamp_masked};
use crate::canvas::PixelCanvas;
use crate::types::StrategyKind;

/// Replaces each masked pixel with its target. Deterministic and idempotent.
#[derive(Debug, Clone, Copy, Default)]
pub struct Solid;

impl BrushStrategy for Solid {
    fn kind(&self) -> StrategyKind {
        StrategyKind::Solid
    }

    fn stamp(&mut self, canvas: &mut PixelCanvas, center: Vec2, brush: &BrushConfig) -> bool {
        stamp_masked(canvas, center, brush, |_, target| target)
    }
}
