use std::rc::Rc;

use anyhow::{ensure, Context, Result};

use super::backend::GlBackend;
use super::buffer::{IndexBuffer, VertexBuffer};
use super::error::GpuAllocError;
use super::layout::VertexLayout;

/// Vertex array object owning one vertex buffer and one index buffer.
///
/// Attribute wiring is configured exactly once, in [`VertexArray::new`];
/// afterwards only buffer contents change. Released on drop.
pub struct VertexArray<G: GlBackend> {
    gl: Rc<G>,
    handle: G::VertexArray,
    vertex_buffer: VertexBuffer<G>,
    index_buffer: IndexBuffer<G>,
    layout: VertexLayout,
}

impl<G: GlBackend> VertexArray<G> {
    /// Allocates fresh buffers and wires `layout` into a new vertex array.
    pub fn new(gl: Rc<G>, layout: VertexLayout) -> Result<Self> {
        let vertex_buffer = VertexBuffer::new(gl.clone()).context("vertex array storage")?;
        let index_buffer = IndexBuffer::new(gl.clone()).context("vertex array storage")?;
        Self::with_buffers(gl, vertex_buffer, index_buffer, layout)
    }

    /// Takes ownership of existing buffers and wires `layout` over them.
    pub fn with_buffers(
        gl: Rc<G>,
        vertex_buffer: VertexBuffer<G>,
        index_buffer: IndexBuffer<G>,
        layout: VertexLayout,
    ) -> Result<Self> {
        ensure!(!layout.is_empty(), "vertex layout has no attributes");
        if let Some((i, a)) = layout
            .attributes()
            .iter()
            .enumerate()
            .find(|(_, a)| !(1..=4).contains(&a.components))
        {
            anyhow::bail!("vertex attribute {i} has {} components (expected 1..=4)", a.components);
        }

        let handle = gl
            .create_vertex_array()
            .map_err(|e| GpuAllocError::new("vertex array", e))?;
        log::debug!("creating vertex array {handle:?}");

        let va = Self { gl, handle, vertex_buffer, index_buffer, layout };
        va.configure();
        Ok(va)
    }

    fn configure(&self) {
        log::trace!("configuring vertex array attributes...");
        self.bind();
        self.vertex_buffer.bind();
        self.index_buffer.bind();

        let stride = self.layout.stride() as i32;
        for (i, attr) in self.layout.attributes().iter().enumerate() {
            let index = i as u32;
            let offset = self.layout.offset(i) as i32;
            let components = attr.components as i32;
            if attr.kind.is_integer() {
                self.gl.vertex_attrib_pointer_i32(
                    index,
                    components,
                    attr.kind.gl_type(),
                    stride,
                    offset,
                );
            } else {
                self.gl.vertex_attrib_pointer_f32(
                    index,
                    components,
                    attr.kind.gl_type(),
                    false,
                    stride,
                    offset,
                );
            }
            self.gl.enable_vertex_attrib_array(index);
        }

        self.unbind();
        self.vertex_buffer.unbind();
        self.index_buffer.unbind();
        log::trace!("configured vertex array attributes");
    }

    #[inline]
    pub fn bind(&self) {
        self.gl.bind_vertex_array(Some(self.handle));
    }

    #[inline]
    pub fn unbind(&self) {
        self.gl.bind_vertex_array(None);
    }

    #[inline]
    pub fn vertex_buffer(&self) -> &VertexBuffer<G> {
        &self.vertex_buffer
    }

    #[inline]
    pub fn index_buffer(&self) -> &IndexBuffer<G> {
        &self.index_buffer
    }

    #[inline]
    pub fn handle(&self) -> G::VertexArray {
        self.handle
    }
}

impl<G: GlBackend> Drop for VertexArray<G> {
    fn drop(&mut self) {
        log::debug!("deleting vertex array {:?}", self.handle);
        self.gl.delete_vertex_array(self.handle);
    }
}
