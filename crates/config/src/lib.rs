//! Shared configuration for the whiteboard
//!
//! This crate provides the single source of truth for canvas dimensions,
//! undo depth and brush defaults, shared by the engine and the headless
//! driver binary.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Default canvas width and height in pixels
pub const DEFAULT_CANVAS_SIZE: u32 = 2048;

/// Default number of undo snapshots kept per whiteboard
pub const DEFAULT_UNDO_CAPACITY: usize = 5;

/// Default brush span in pixels
pub const DEFAULT_BRUSH_SIZE: u32 = 50;

/// Smallest brush span the settings slider allows
pub const MIN_BRUSH_SIZE: u32 = 1;

/// Largest brush span the settings slider allows
pub const MAX_BRUSH_SIZE: u32 = 100;

/// Largest undo depth accepted from configuration
pub const MAX_UNDO_CAPACITY: usize = 64;

/// Default brush color (opaque red)
pub const DEFAULT_BRUSH_COLOR: [f32; 4] = [1.0, 0.0, 0.0, 1.0];

/// Environment variable names read by [`WhiteboardConfig::from_env`]
pub mod env {
    pub const CANVAS_SIZE: &str = "WHITEBOARD_CANVAS_SIZE";
    pub const UNDO_CAPACITY: &str = "WHITEBOARD_UNDO_CAPACITY";
    pub const BRUSH_SIZE: &str = "WHITEBOARD_BRUSH_SIZE";
    pub const SEED: &str = "WHITEBOARD_SEED";
    pub const VERBOSE: &str = "WHITEBOARD_VERBOSE";
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid value for {var}: {value:?}")]
    InvalidEnv { var: &'static str, value: String },

    #[error("Canvas dimensions must be non-zero, got {width}x{height}")]
    InvalidCanvas { width: u32, height: u32 },

    #[error("Brush size {0} outside {min}..={max}", min = MIN_BRUSH_SIZE, max = MAX_BRUSH_SIZE)]
    InvalidBrushSize(u32),

    #[error("Undo capacity {0} exceeds {max}", max = MAX_UNDO_CAPACITY)]
    InvalidUndoCapacity(usize),

    #[error("Failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Whiteboard configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WhiteboardConfig {
    /// Canvas width in pixels
    pub canvas_width: u32,
    /// Canvas height in pixels
    pub canvas_height: u32,
    /// Snapshots kept per whiteboard (0 disables undo)
    pub undo_capacity: usize,
    /// Initial brush span in pixels
    pub brush_size: u32,
    /// Initial brush color as RGBA
    pub brush_color: [f32; 4],
    /// Seed for the randomized brushes; `None` seeds from entropy
    pub rng_seed: Option<u64>,
    /// Enable debug-level logging
    pub verbose: bool,
}

impl Default for WhiteboardConfig {
    fn default() -> Self {
        Self {
            canvas_width: DEFAULT_CANVAS_SIZE,
            canvas_height: DEFAULT_CANVAS_SIZE,
            undo_capacity: DEFAULT_UNDO_CAPACITY,
            brush_size: DEFAULT_BRUSH_SIZE,
            brush_color: DEFAULT_BRUSH_COLOR,
            rng_seed: None,
            verbose: false,
        }
    }
}

impl WhiteboardConfig {
    /// Create a config for a canvas of the given size, other fields default
    pub fn with_canvas(width: u32, height: u32) -> Self {
        Self {
            canvas_width: width,
            canvas_height: height,
            ..Default::default()
        }
    }

    /// Read overrides from the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read overrides through an arbitrary key lookup.
    ///
    /// Unset keys keep their defaults. The result is validated.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(size) = parse_var::<u32>(&lookup, env::CANVAS_SIZE)? {
            config.canvas_width = size;
            config.canvas_height = size;
        }
        if let Some(capacity) = parse_var::<usize>(&lookup, env::UNDO_CAPACITY)? {
            config.undo_capacity = capacity;
        }
        if let Some(size) = parse_var::<u32>(&lookup, env::BRUSH_SIZE)? {
            config.brush_size = size;
        }
        if let Some(seed) = parse_var::<u64>(&lookup, env::SEED)? {
            config.rng_seed = Some(seed);
        }
        if let Some(raw) = lookup(env::VERBOSE) {
            config.verbose = match raw.trim() {
                "1" | "true" | "yes" | "on" => true,
                "0" | "false" | "no" | "off" | "" => false,
                _ => {
                    return Err(ConfigError::InvalidEnv {
                        var: env::VERBOSE,
                        value: raw,
                    });
                }
            };
        }

        config.validate()?;
        Ok(config)
    }

    /// Parse a JSON document; missing fields take their defaults
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Check that all values are usable by the engine
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.canvas_width == 0 || self.canvas_height == 0 {
            return Err(ConfigError::InvalidCanvas {
                width: self.canvas_width,
                height: self.canvas_height,
            });
        }
        if !(MIN_BRUSH_SIZE..=MAX_BRUSH_SIZE).contains(&self.brush_size) {
            return Err(ConfigError::InvalidBrushSize(self.brush_size));
        }
        if self.undo_capacity > MAX_UNDO_CAPACITY {
            return Err(ConfigError::InvalidUndoCapacity(self.undo_capacity));
        }
        Ok(())
    }
}

fn parse_var<T: std::str::FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    var: &'static str,
) -> Result<Option<T>, ConfigError> {
    match lookup(var) {
        None => Ok(None),
        Some(raw) => raw
            .trim()
            .parse::<T>()
            .map(Some)
            .map_err(|_| ConfigError::InvalidEnv { var, value: raw }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_default_config() {
        let config = WhiteboardConfig::default();
        assert_eq!(config.canvas_width, DEFAULT_CANVAS_SIZE);
        assert_eq!(config.canvas_height, DEFAULT_CANVAS_SIZE);
        assert_eq!(config.undo_capacity, 5);
        assert_eq!(config.brush_size, 50);
        assert!(config.rng_seed.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_lookup_overrides() {
        let config = WhiteboardConfig::from_lookup(lookup_from(&[
            (env::CANVAS_SIZE, "512"),
            (env::UNDO_CAPACITY, "8"),
            (env::SEED, "42"),
            (env::VERBOSE, "true"),
        ]))
        .unwrap();

        assert_eq!(config.canvas_width, 512);
        assert_eq!(config.canvas_height, 512);
        assert_eq!(config.undo_capacity, 8);
        assert_eq!(config.rng_seed, Some(42));
        assert!(config.verbose);
        assert_eq!(config.brush_size, DEFAULT_BRUSH_SIZE);
    }

    #[test]
    fn test_lookup_rejects_garbage() {
        let result = WhiteboardConfig::from_lookup(lookup_from(&[(env::SEED, "abc")]));
        assert!(matches!(
            result,
            Err(ConfigError::InvalidEnv { var: env::SEED, .. })
        ));

        let result = WhiteboardConfig::from_lookup(lookup_from(&[(env::VERBOSE, "maybe")]));
        assert!(result.is_err());
    }

    #[test]
    fn test_validate_ranges() {
        let result = WhiteboardConfig::from_lookup(lookup_from(&[(env::CANVAS_SIZE, "0")]));
        assert!(matches!(result, Err(ConfigError::InvalidCanvas { .. })));

        let mut config = WhiteboardConfig::default();
        config.brush_size = 0;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidBrushSize(0))
        ));
    }

    #[test]
    fn test_undo_capacity_bound() {
        let max = usize::MAX.to_string();
        let result = WhiteboardConfig::from_lookup(lookup_from(&[(env::UNDO_CAPACITY, max.as_str())]));
        assert!(matches!(
            result,
            Err(ConfigError::InvalidUndoCapacity(usize::MAX))
        ));

        let config = WhiteboardConfig {
            undo_capacity: MAX_UNDO_CAPACITY,
            ..Default::default()
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            ConfigError::InvalidBrushSize(0).to_string(),
            "Brush size 0 outside 1..=100"
        );
        assert_eq!(
            ConfigError::InvalidUndoCapacity(65).to_string(),
            "Undo capacity 65 exceeds 64"
        );
    }

    #[test]
    fn test_json_partial() {
        let config =
            WhiteboardConfig::from_json_str(r#"{ "canvas_width": 100, "canvas_height": 64 }"#)
                .unwrap();
        assert_eq!(config.canvas_width, 100);
        assert_eq!(config.canvas_height, 64);
        assert_eq!(config.undo_capacity, DEFAULT_UNDO_CAPACITY);

        assert!(matches!(
            WhiteboardConfig::from_json_str("{ nope"),
            Err(ConfigError::Parse(_))
        ));
    }
}
