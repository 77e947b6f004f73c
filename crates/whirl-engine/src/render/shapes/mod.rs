//! Shape kinds understood by the batching engine.

pub mod common;

pub mod circle;
pub mod quad;
pub mod rounded_quad;

pub use circle::{Circle, CircleKind, CircleVertex};
pub use common::{InvalidShape, ShapeKind, QUAD_INDICES};
pub use quad::{Quad, QuadKind, QuadVertex};
pub use rounded_quad::{RoundedQuad, RoundedQuadKind, RoundedQuadVertex};
