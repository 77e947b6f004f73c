//! OpenGL object wrappers.
//!
//! This module is responsible for:
//! - the `GlBackend` seam and its `glow` implementation
//! - RAII wrappers for buffers, vertex arrays and shader programs
//! - vertex layout descriptors and the annotated shader source format
//!
//! Every wrapper holds the backend as `Rc<G>`: GPU objects are tied to the
//! render thread and released when their wrapper drops.

mod backend;
mod buffer;
mod context;
mod error;
mod layout;
mod shader;
mod source;
mod vertex_array;

#[cfg(test)]
pub(crate) mod testing;

pub use backend::{BufferTarget, BufferUsage, GlBackend, ShaderStage};
pub use buffer::{IndexBuffer, VertexBuffer};
pub use context::GlowContext;
pub use error::{drain_errors, error_name, GpuAllocError};
pub use layout::{ScalarKind, VertexAttribute, VertexLayout};
pub use shader::{ShaderBuildError, ShaderProgram};
pub use source::{ShaderSource, ShaderSourceError};
pub use vertex_array::VertexArray;
