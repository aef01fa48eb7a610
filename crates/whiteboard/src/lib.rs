//! Whiteboard raster brush engine
//!
//! This crate provides the 2D painting core of the VR whiteboard:
//! - [`canvas`] - Pixel canvas with an immutable baseline and snapshots
//! - [`brush`] - Brush strategies (Solid, Spray, Diffuse) over a circular mask
//! - [`rasterizer`] - Fixed-sweep interpolation between contact samples
//! - [`undo`] - Bounded snapshot history
//! - [`whiteboard`] - A paintable surface with its own history
//! - [`marker`] - Per-controller stroke state
//! - [`session`] - Single-canvas facade for input collaborators
//! - [`controller`] - Two-hand, multi-board routing
//! - [`settings`] - Brush size, hue and brightness model

pub mod brush;
pub mod canvas;
pub mod constants;
pub mod controller;
pub mod error;
pub mod marker;
pub mod rasterizer;
pub mod session;
pub mod settings;
pub mod types;
pub mod undo;
pub mod whiteboard;

pub use brush::*;
pub use canvas::*;
pub use constants::*;
pub use controller::*;
pub use error::*;
pub use marker::*;
pub use rasterizer::*;
pub use session::*;
pub use settings::*;
pub use types::*;
pub use undo::*;
pub use whiteboard::*;
