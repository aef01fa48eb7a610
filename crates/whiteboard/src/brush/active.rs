//! The brush currently held by the user, shared by every controller

use glam::Vec2;
use tracing::debug;

use whiteboard_config::WhiteboardConfig;

use super::{BrushConfig, BrushStrategy, new_strategy};
use crate::canvas::PixelCanvas;
use crate::error::BrushError;
use crate::rasterizer::StrokeRasterizer;
use crate::settings::BrushSettings;
use crate::types::{Color, StrategyKind};

/// Selected strategy, brush parameters and erase mode
pub struct ActiveBrush {
    config: BrushConfig,
    kind: StrategyKind,
    strategy: Box<dyn BrushStrategy>,
    /// Base seed for the randomized strategies this brush creates
    seed: Option<u64>,
    /// Strategies created so far, mixed into the seed of the next one
    generation: u64,
}

impl std::fmt::Debug for ActiveBrush {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ActiveBrush")
            .field("size", &self.config.size())
            .field("color", &self.config.color())
            .field("erasing", &self.config.is_erasing())
            .field("kind", &self.kind)
            .field("seed", &self.seed)
            .field("generation", &self.generation)
            .finish()
    }
}

impl ActiveBrush {
    pub fn new(config: BrushConfig, kind: StrategyKind, seed: Option<u64>) -> Self {
        Self {
            config,
            kind,
            strategy: new_strategy(kind, seed),
            seed,
            generation: 0,
        }
    }

    /// Solid brush with the configured size, color and seed
    pub fn from_config(config: &WhiteboardConfig) -> Result<Self, BrushError> {
        let brush = BrushConfig::new(config.brush_size, config.brush_color, false)?;
        Ok(Self::new(brush, StrategyKind::Solid, config.rng_seed))
    }

    pub fn config(&self) -> &BrushConfig {
        &self.config
    }

    pub fn kind(&self) -> StrategyKind {
        self.kind
    }

    pub fn is_erasing(&self) -> bool {
        self.config.is_erasing()
    }

    /// Replace all brush parameters at once
    pub fn set_brush(
        &mut self,
        size: u32,
        color: Color,
        erasing: bool,
        kind: StrategyKind,
    ) -> Result<(), BrushError> {
        self.config = BrushConfig::new(size, color, erasing)?;
        self.set_kind(kind);
        debug!(
            "ActiveBrush: size={} color={:?} erasing={} kind={:?}",
            size, color, erasing, kind
        );
        Ok(())
    }

    /// Change the span, keeping color and erase mode
    pub fn set_size(&mut self, size: u32) -> Result<(), BrushError> {
        self.config = BrushConfig::new(size, self.config.color(), self.config.is_erasing())?;
        Ok(())
    }

    /// Change the color, keeping span and erase mode
    pub fn set_color(&mut self, color: Color) -> Result<(), BrushError> {
        self.config = BrushConfig::new(self.config.size(), color, self.config.is_erasing())?;
        Ok(())
    }

    /// Switch strategy. A fresh instance is created only when the kind changes.
    pub fn set_kind(&mut self, kind: StrategyKind) {
        if kind != self.kind {
            self.generation += 1;
            self.strategy = new_strategy(kind, self.next_seed());
            self.kind = kind;
            debug!("ActiveBrush: strategy -> {}", kind.name());
        }
    }

    /// Base seed mixed with the current generation
    fn next_seed(&self) -> Option<u64> {
        self.seed
            .map(|seed| seed ^ self.generation.wrapping_mul(0x9E37_79B9_7F4A_7C15))
    }

    /// Select a strategy by menu index; out-of-range indices are ignored
    pub fn set_strategy_index(&mut self, index: usize) -> bool {
        match StrategyKind::from_index(index) {
            Some(kind) => {
                self.set_kind(kind);
                true
            }
            None => {
                debug!("ActiveBrush: ignoring strategy index {}", index);
                false
            }
        }
    }

    /// Advance to the next strategy and return it
    pub fn cycle_strategy(&mut self) -> StrategyKind {
        self.set_kind(self.kind.next());
        self.kind
    }

    pub fn set_erasing(&mut self, erasing: bool) {
        self.config.set_erasing(erasing);
    }

    /// Flip erase mode and return the new state
    pub fn toggle_erase(&mut self) -> bool {
        let erasing = !self.config.is_erasing();
        self.config.set_erasing(erasing);
        debug!("ActiveBrush: erasing={}", erasing);
        erasing
    }

    /// Take size, color and strategy from the settings model
    pub fn apply_settings(&mut self, settings: &BrushSettings) -> Result<(), BrushError> {
        let kind = StrategyKind::from_index(settings.strategy_index()).unwrap_or(self.kind);
        self.set_brush(settings.size(), settings.color(), self.is_erasing(), kind)
    }

    /// Stamp one stroke segment with this brush
    pub fn paint_segment(
        &mut self,
        canvas: &mut PixelCanvas,
        from: Vec2,
        to: Vec2,
        rasterizer: &StrokeRasterizer,
    ) -> usize {
        rasterizer.rasterize_segment(canvas, from, to, &self.config, self.strategy.as_mut())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{BLACK, RED};

    fn brush() -> ActiveBrush {
        ActiveBrush::new(
            BrushConfig::new(10, RED, false).unwrap(),
            StrategyKind::Solid,
            Some(1),
        )
    }

    #[test]
    fn test_from_config() {
        let active = ActiveBrush::from_config(&WhiteboardConfig::default()).unwrap();
        assert_eq!(active.config().size(), 50);
        assert_eq!(active.config().color(), RED);
        assert_eq!(active.kind(), StrategyKind::Solid);
        assert!(!active.is_erasing());
    }

    #[test]
    fn test_cycle_and_index() {
        let mut active = brush();
        assert_eq!(active.cycle_strategy(), StrategyKind::Spray);
        assert_eq!(active.cycle_strategy(), StrategyKind::Diffuse);
        assert_eq!(active.cycle_strategy(), StrategyKind::Solid);

        assert!(active.set_strategy_index(2));
        assert_eq!(active.kind(), StrategyKind::Diffuse);
        assert!(!active.set_strategy_index(7));
        assert_eq!(active.kind(), StrategyKind::Diffuse);
    }

    #[test]
    fn test_toggle_erase_keeps_colors() {
        let mut active = brush();
        assert!(active.toggle_erase());
        assert!(active.is_erasing());
        assert_eq!(active.config().color(), RED);
        assert!(!active.toggle_erase());
    }

    #[test]
    fn test_set_size_and_color_recompute_buffer() {
        let mut active = brush();
        active.set_size(4).unwrap();
        assert_eq!(active.config().colors().len(), 16);

        active.set_color(BLACK).unwrap();
        assert!(active.config().colors().iter().all(|&c| c == BLACK));
        assert_eq!(active.config().size(), 4);

        assert_eq!(active.set_size(0), Err(BrushError::InvalidSize(0)));
        // Failed update leaves the brush usable
        assert_eq!(active.config().size(), 4);
    }

    #[test]
    fn test_reselected_strategy_gets_new_grain() {
        let paint = |active: &mut ActiveBrush| {
            let mut canvas = PixelCanvas::new(128, 128).unwrap();
            let rasterizer = StrokeRasterizer::new();
            active.paint_segment(
                &mut canvas,
                Vec2::new(40.0, 64.0),
                Vec2::new(80.0, 64.0),
                &rasterizer,
            );
            canvas.pixels().to_vec()
        };

        let mut active = ActiveBrush::new(
            BrushConfig::new(40, RED, false).unwrap(),
            StrategyKind::Solid,
            Some(9),
        );
        active.set_kind(StrategyKind::Spray);
        let first = paint(&mut active);

        active.set_kind(StrategyKind::Diffuse);
        active.set_kind(StrategyKind::Spray);
        let second = paint(&mut active);
        assert_ne!(first, second);

        // Same history of selections, same grain
        let mut replay = ActiveBrush::new(
            BrushConfig::new(40, RED, false).unwrap(),
            StrategyKind::Solid,
            Some(9),
        );
        replay.set_kind(StrategyKind::Spray);
        assert_eq!(paint(&mut replay), first);
    }

    #[test]
    fn test_apply_settings() {
        let mut active = brush();
        let mut settings = BrushSettings::default();
        settings.set_size(12.4);
        settings.set_strategy_index(1);

        active.apply_settings(&settings).unwrap();
        assert_eq!(active.config().size(), 12);
        assert_eq!(active.kind(), StrategyKind::Spray);
        assert_eq!(active.config().color(), settings.color());
    }
}
