//! Whirl engine crate.
//!
//! Batched 2D GUI shapes (quads, rounded quads, circles) on OpenGL 3.3.
//! The windowing layer owns the GL context and hands it to
//! [`render::GuiRenderer`] through a [`gl::GlBackend`].

pub mod coords;
pub mod gl;
pub mod logging;
pub mod paint;
pub mod render;
