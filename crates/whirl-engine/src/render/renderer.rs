use std::rc::Rc;

use anyhow::{ensure, Context, Result};
use glam::Mat4;

use crate::gl::{drain_errors, BufferUsage, GlBackend, ShaderProgram, VertexArray};

use super::batch::ShapeBatch;
use super::config::GuiRendererConfig;
use super::shapes::common::ShapeKind;

/// Uniform every shape shader declares for the screen-to-NDC transform.
pub const PROJECTION_UNIFORM: &str = "u_Projection";

/// Batching renderer for one shape kind.
///
/// Accumulates shapes via [`submit`](Self::submit) and flushes them with a
/// single indexed draw in [`draw`](Self::draw).
pub struct ShapeRenderer<G: GlBackend, K: ShapeKind> {
    gl: Rc<G>,
    batch: ShapeBatch<K>,
    vertex_array: VertexArray<G>,
    shader: ShaderProgram<G>,
}

impl<G: GlBackend, K: ShapeKind> ShapeRenderer<G, K> {
    /// Creates the GPU objects for `K` around an already built `shader`.
    pub fn new(gl: Rc<G>, shader: ShaderProgram<G>, capacity: usize) -> Result<Self> {
        let layout = K::layout();
        ensure!(
            layout.stride() == std::mem::size_of::<K::Vertex>(),
            "{} vertex layout stride {} does not match vertex size {}",
            K::NAME,
            layout.stride(),
            std::mem::size_of::<K::Vertex>()
        );

        let vertex_array = VertexArray::new(gl.clone(), layout)
            .with_context(|| format!("failed to create {} vertex array", K::NAME))?;

        log::debug!("creating {} renderer", K::NAME);
        Ok(Self {
            gl,
            batch: ShapeBatch::with_capacity(capacity),
            vertex_array,
            shader,
        })
    }

    /// Builds the shader from the configured directory, or the built-in source.
    pub fn from_config(gl: Rc<G>, config: &GuiRendererConfig) -> Result<Self> {
        let shader = match &config.shader_dir {
            Some(dir) => ShaderProgram::from_path(gl.clone(), dir.join(K::SHADER_FILE))?,
            None => ShaderProgram::from_source(gl.clone(), K::SHADER_FILE, K::SHADER_SOURCE)?,
        };
        Self::new(gl, shader, config.initial_capacity)
    }

    /// Queues `shape`; invalid geometry is logged and dropped.
    #[inline]
    pub fn submit(&mut self, shape: K::Shape) -> bool {
        self.batch.submit(shape)
    }

    #[inline]
    pub fn pending(&self) -> usize {
        self.batch.pending()
    }

    /// Uploads and draws every pending shape, then empties the queue.
    ///
    /// Returns the number of shapes drawn; with nothing pending no GPU
    /// work is issued and 0 is returned.
    pub fn draw(&mut self, projection: &Mat4) -> usize {
        if self.batch.is_empty() {
            return 0;
        }
        let drawn = self.batch.pending();

        self.vertex_array.bind();

        let (vertices, indices) = self.batch.build();
        let index_count = indices.len() as i32;
        self.vertex_array
            .vertex_buffer()
            .data(vertices, BufferUsage::Dynamic);
        self.vertex_array
            .index_buffer()
            .data(indices, BufferUsage::Dynamic);

        self.shader.bind();
        self.shader.set_mat4(PROJECTION_UNIFORM, projection);
        self.gl.draw_triangles_u32(index_count);

        // Vertex array first: it records the element buffer binding.
        self.vertex_array.unbind();
        self.vertex_array.vertex_buffer().unbind();
        self.vertex_array.index_buffer().unbind();

        self.batch.clear();

        drain_errors(self.gl.as_ref(), K::NAME);
        drawn
    }
}

impl<G: GlBackend, K: ShapeKind> Drop for ShapeRenderer<G, K> {
    fn drop(&mut self) {
        log::debug!("deleting {} renderer", K::NAME);
    }
}
