use serde::{Deserialize, Serialize};

/// RGBA color, one f32 per channel (Rgba32Float texel layout)
pub type Color = [f32; 4];

pub const WHITE: Color = [1.0, 1.0, 1.0, 1.0];
pub const BLACK: Color = [0.0, 0.0, 0.0, 1.0];
pub const RED: Color = [1.0, 0.0, 0.0, 1.0];
pub const TRANSPARENT: Color = [0.0, 0.0, 0.0, 0.0];

/// Linear interpolation between two colors, all four channels.
/// `t` is clamped to 0..=1.
#[inline]
pub fn lerp_color(a: Color, b: Color, t: f32) -> Color {
    let t = t.clamp(0.0, 1.0);
    [
        a[0] + (b[0] - a[0]) * t,
        a[1] + (b[1] - a[1]) * t,
        a[2] + (b[2] - a[2]) * t,
        a[3] + (b[3] - a[3]) * t,
    ]
}

/// Brush blending algorithm selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[repr(u8)]
pub enum StrategyKind {
    /// Full replacement inside the mask
    #[default]
    Solid = 0,
    /// Sparse randomized grain
    Spray = 1,
    /// Low-alpha watercolor accumulation
    Diffuse = 2,
}

impl StrategyKind {
    pub const ALL: [StrategyKind; 3] = [Self::Solid, Self::Spray, Self::Diffuse];

    /// Index as used by the brush settings menu
    pub fn index(self) -> usize {
        self as usize
    }

    /// Look up a strategy by menu index
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// The next strategy in menu order, wrapping around
    pub fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Solid => "Solid",
            Self::Spray => "Spray",
            Self::Diffuse => "Diffuse",
        }
    }
}

/// Controller hand
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Hand {
    Left,
    Right,
}

impl Hand {
    pub(crate) fn slot(self) -> usize {
        match self {
            Self::Left => 0,
            Self::Right => 1,
        }
    }
}

/// Identity of a whiteboard surface
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct WhiteboardId(pub u32);
