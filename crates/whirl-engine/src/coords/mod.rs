//! Screen-space types.
//!
//! Canonical CPU space:
//! - Pixels
//! - Origin top-left
//! - +X right, +Y down
//!
//! Shape shaders convert to NDC with the projection built from [`Viewport`].

mod viewport;

pub use viewport::Viewport;
