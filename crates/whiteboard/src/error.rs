//! Error types for canvas and brush operations

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CanvasError {
    #[error("Canvas dimensions must be non-zero, got {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },

    #[error(
        "Region {width}x{height} at ({x}, {y}) exceeds canvas {canvas_width}x{canvas_height}"
    )]
    OutOfBounds {
        x: u32,
        y: u32,
        width: u32,
        height: u32,
        canvas_width: u32,
        canvas_height: u32,
    },

    #[error("Buffer holds {actual} pixels, expected {expected}")]
    SizeMismatch { expected: usize, actual: usize },

    #[error("Snapshot is {actual:?}, canvas is {expected:?}")]
    DimensionMismatch {
        expected: (u32, u32),
        actual: (u32, u32),
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BrushError {
    #[error("Invalid brush size: {0}")]
    InvalidSize(u32),

    #[error("Brush color buffer holds {actual} entries, expected {expected}")]
    ColorBufferMismatch { expected: usize, actual: usize },
}

/// Failure while building a session or controller from config
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SetupError {
    #[error(transparent)]
    Canvas(#[from] CanvasError),

    #[error(transparent)]
    Brush(#[from] BrushError),
}
