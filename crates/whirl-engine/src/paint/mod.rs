//! Paint model shared between the facade and the shape renderers.
//!
//! Scope:
//! - packed straight-alpha RGBA colors (one `u32` per vertex)

pub mod color;

pub use color::Color;
