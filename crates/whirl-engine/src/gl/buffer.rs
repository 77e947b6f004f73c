use std::rc::Rc;

use anyhow::Result;
use bytemuck::Pod;

use super::backend::{BufferTarget, BufferUsage, GlBackend};
use super::error::GpuAllocError;

/// One GPU buffer object bound to a fixed target.
///
/// Allocated on construction, released on drop. Move-only.
struct RawBuffer<G: GlBackend> {
    gl: Rc<G>,
    handle: G::Buffer,
    target: BufferTarget,
}

impl<G: GlBackend> RawBuffer<G> {
    fn new(gl: Rc<G>, target: BufferTarget, object: &'static str) -> Result<Self> {
        let handle = gl
            .create_buffer()
            .map_err(|e| GpuAllocError::new(object, e))?;
        log::trace!("created {object} {handle:?}");
        Ok(Self { gl, handle, target })
    }

    /// Replaces the whole buffer store with `bytes`. Leaves the buffer bound.
    fn data(&self, bytes: &[u8], usage: BufferUsage) {
        self.bind();
        self.gl.buffer_data(self.target, bytes, usage);
    }

    #[inline]
    fn bind(&self) {
        self.gl.bind_buffer(self.target, Some(self.handle));
    }

    #[inline]
    fn unbind(&self) {
        self.gl.bind_buffer(self.target, None);
    }
}

impl<G: GlBackend> Drop for RawBuffer<G> {
    fn drop(&mut self) {
        log::trace!("deleting buffer {:?}", self.handle);
        self.gl.delete_buffer(self.handle);
    }
}

/// Vertex attribute storage (`GL_ARRAY_BUFFER`).
pub struct VertexBuffer<G: GlBackend> {
    raw: RawBuffer<G>,
}

impl<G: GlBackend> VertexBuffer<G> {
    pub fn new(gl: Rc<G>) -> Result<Self> {
        Ok(Self { raw: RawBuffer::new(gl, BufferTarget::Array, "vertex buffer")? })
    }

    /// Uploads `vertices` as a full replacement of the buffer contents.
    pub fn data<V: Pod>(&self, vertices: &[V], usage: BufferUsage) {
        self.raw.data(bytemuck::cast_slice(vertices), usage);
    }

    pub fn bind(&self) {
        self.raw.bind();
    }

    pub fn unbind(&self) {
        self.raw.unbind();
    }

    #[inline]
    pub fn handle(&self) -> G::Buffer {
        self.raw.handle
    }
}

/// `u32` index storage (`GL_ELEMENT_ARRAY_BUFFER`).
///
/// The element binding is vertex-array state: unbinding while a vertex
/// array is bound detaches the buffer from it. Unbind the vertex array first.
pub struct IndexBuffer<G: GlBackend> {
    raw: RawBuffer<G>,
}

impl<G: GlBackend> IndexBuffer<G> {
    pub fn new(gl: Rc<G>) -> Result<Self> {
        Ok(Self { raw: RawBuffer::new(gl, BufferTarget::ElementArray, "index buffer")? })
    }

    pub fn data(&self, indices: &[u32], usage: BufferUsage) {
        self.raw.data(bytemuck::cast_slice(indices), usage);
    }

    pub fn bind(&self) {
        self.raw.bind();
    }

    pub fn unbind(&self) {
        self.raw.unbind();
    }

    #[inline]
    pub fn handle(&self) -> G::Buffer {
        self.raw.handle
    }
}
