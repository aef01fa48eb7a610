//! Brush settings model behind the hand menu sliders

use serde::{Deserialize, Serialize};
use tracing::debug;

use whiteboard_config::{DEFAULT_BRUSH_COLOR, DEFAULT_BRUSH_SIZE, MAX_BRUSH_SIZE, MIN_BRUSH_SIZE};

use crate::types::{BLACK, Color, StrategyKind, WHITE, lerp_color};

/// Brightness at which the base color is used unchanged
pub const NEUTRAL_BRIGHTNESS: f32 = 50.0;

/// Slider state and the brush color derived from it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BrushSettings {
    size: u32,
    /// Fully saturated color picked on the hue slider
    base_color: Color,
    /// 1..=100, 50 is neutral
    brightness: f32,
    strategy_index: usize,
    /// `base_color` after brightness is applied
    color: Color,
}

impl Default for BrushSettings {
    fn default() -> Self {
        Self {
            size: DEFAULT_BRUSH_SIZE,
            base_color: DEFAULT_BRUSH_COLOR,
            brightness: NEUTRAL_BRIGHTNESS,
            strategy_index: StrategyKind::Solid.index(),
            color: DEFAULT_BRUSH_COLOR,
        }
    }
}

impl BrushSettings {
    pub fn size(&self) -> u32 {
        self.size
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn base_color(&self) -> Color {
        self.base_color
    }

    pub fn brightness(&self) -> f32 {
        self.brightness
    }

    pub fn strategy_index(&self) -> usize {
        self.strategy_index
    }

    /// Round the slider value and clamp it to the allowed span
    pub fn set_size(&mut self, value: f32) -> u32 {
        let rounded = if value.is_finite() { value.round() } else { 0.0 };
        self.size = (rounded.max(0.0) as u32).clamp(MIN_BRUSH_SIZE, MAX_BRUSH_SIZE);
        debug!("BrushSettings: size={}", self.size);
        self.size
    }

    /// Pick a fully saturated, full value color from a hue in `0..=1`
    pub fn set_hue(&mut self, hue: f32) -> Color {
        self.base_color = hsv_to_rgb(hue, 1.0, 1.0);
        self.update_color()
    }

    /// Set brightness in `1..=100`. Below 50 tints toward white, above 50
    /// shades toward black.
    pub fn set_brightness(&mut self, brightness: f32) -> Color {
        self.brightness = brightness.clamp(1.0, 100.0);
        self.update_color()
    }

    pub fn set_strategy_index(&mut self, index: usize) {
        self.strategy_index = index;
    }

    /// The strategy this index selects, if any
    pub fn strategy(&self) -> Option<StrategyKind> {
        StrategyKind::from_index(self.strategy_index)
    }

    fn update_color(&mut self) -> Color {
        let b = self.brightness;
        self.color = if b < NEUTRAL_BRIGHTNESS {
            lerp_color(WHITE, self.base_color, b / NEUTRAL_BRIGHTNESS)
        } else if b > NEUTRAL_BRIGHTNESS {
            lerp_color(
                self.base_color,
                BLACK,
                (b - NEUTRAL_BRIGHTNESS) / NEUTRAL_BRIGHTNESS,
            )
        } else {
            self.base_color
        };
        debug!("BrushSettings: color={:?}", self.color);
        self.color
    }
}

/// HSV to opaque RGBA. Hue wraps, saturation and value are clamped to `0..=1`.
pub fn hsv_to_rgb(hue: f32, saturation: f32, value: f32) -> Color {
    let h = if hue.is_finite() { hue.rem_euclid(1.0) } else { 0.0 } * 6.0;
    let s = saturation.clamp(0.0, 1.0);
    let v = value.clamp(0.0, 1.0);

    let sector = (h.floor() as u32) % 6;
    let f = h - h.floor();
    let p = v * (1.0 - s);
    let q = v * (1.0 - s * f);
    let t = v * (1.0 - s * (1.0 - f));

    let (r, g, b) = match sector {
        0 => (v, t, p),
        1 => (q, v, p),
        2 => (p, v, t),
        3 => (p, q, v),
        4 => (t, p, v),
        _ => (v, p, q),
    };
    [r, g, b, 1.0]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::RED;

    fn approx(a: Color, b: Color) -> bool {
        a.iter().zip(b).all(|(x, y)| (x - y).abs() < 1e-5)
    }

    #[test]
    fn test_defaults() {
        let settings = BrushSettings::default();
        assert_eq!(settings.size(), 50);
        assert_eq!(settings.color(), RED);
        assert_eq!(settings.brightness(), 50.0);
        assert_eq!(settings.strategy(), Some(StrategyKind::Solid));
    }

    #[test]
    fn test_size_rounds_and_clamps() {
        let mut settings = BrushSettings::default();
        assert_eq!(settings.set_size(12.6), 13);
        assert_eq!(settings.set_size(0.2), MIN_BRUSH_SIZE);
        assert_eq!(settings.set_size(-5.0), MIN_BRUSH_SIZE);
        assert_eq!(settings.set_size(400.0), MAX_BRUSH_SIZE);
        assert_eq!(settings.set_size(f32::NAN), MIN_BRUSH_SIZE);
    }

    #[test]
    fn test_hue_wheel() {
        assert!(approx(hsv_to_rgb(0.0, 1.0, 1.0), [1.0, 0.0, 0.0, 1.0]));
        assert!(approx(hsv_to_rgb(1.0 / 3.0, 1.0, 1.0), [0.0, 1.0, 0.0, 1.0]));
        assert!(approx(hsv_to_rgb(2.0 / 3.0, 1.0, 1.0), [0.0, 0.0, 1.0, 1.0]));
        assert!(approx(hsv_to_rgb(1.0, 1.0, 1.0), [1.0, 0.0, 0.0, 1.0]));
        assert!(approx(hsv_to_rgb(0.5, 0.0, 0.5), [0.5, 0.5, 0.5, 1.0]));
    }

    #[test]
    fn test_brightness_tints_and_shades() {
        let mut settings = BrushSettings::default();
        settings.set_hue(2.0 / 3.0);
        let blue = settings.base_color();

        // Neutral keeps the base color
        assert!(approx(settings.color(), blue));

        // 25 is halfway from white to blue
        let tint = settings.set_brightness(25.0);
        assert!(approx(tint, [0.5, 0.5, 1.0, 1.0]));

        // 75 is halfway from blue to black
        let shade = settings.set_brightness(75.0);
        assert!(approx(shade, [0.0, 0.0, 0.5, 1.0]));

        let black = settings.set_brightness(100.0);
        assert!(approx(black, BLACK));
    }

    #[test]
    fn test_hue_keeps_brightness() {
        let mut settings = BrushSettings::default();
        settings.set_brightness(75.0);
        let color = settings.set_hue(0.0);
        assert!(approx(color, [0.5, 0.0, 0.0, 1.0]));
    }
}
