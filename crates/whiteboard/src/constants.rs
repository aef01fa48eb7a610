/// First interpolation offset along a segment.
pub const SWEEP_START: f32 = 0.05;

/// Step between interpolation offsets; the sweep stops before 1.0.
pub const SWEEP_STEP: f32 = 0.2;

/// Probability that the spray brush touches a masked pixel.
pub const SPRAY_COVERAGE: f32 = 0.01;

/// Blend range for a sprayed pixel.
pub const SPRAY_BLEND_MIN: f32 = 0.4;
pub const SPRAY_BLEND_MAX: f32 = 0.8;

/// Nominal blend of the diffuse (watercolor) brush per stamp.
pub const DIFFUSE_BLEND: f32 = 0.02;

/// Upper bound of the random pull back toward the current pixel.
pub const DIFFUSE_ATTENUATION_MAX: f32 = 0.5;

/// Largest brush span accepted by `BrushConfig`; a larger stamp could
/// never fit on a default canvas.
pub const MAX_BRUSH_SPAN: u32 = 1024;
