//! Batched 2D shape rendering.
//!
//! Each shape kind gets its own [`ShapeRenderer`]: shapes are queued on the
//! CPU, expanded to four vertices and six indices each, uploaded in one go
//! and drawn with a single indexed call per frame. [`GuiRenderer`] owns one
//! renderer per kind and the shared projection.
//!
//! Convention:
//! - CPU geometry is in pixels (top-left origin, +Y down).
//! - Vertex shaders convert to NDC with the `u_Projection` uniform.

mod batch;
mod config;
mod gui;
mod renderer;
pub mod shapes;

pub use batch::ShapeBatch;
pub use config::GuiRendererConfig;
pub use gui::{
    CircleRenderer, FrameStats, GuiRenderer, PendingShapes, QuadRenderer, RoundedQuadRenderer,
};
pub use renderer::{ShapeRenderer, PROJECTION_UNIFORM};
