use std::fmt::Debug;

/// Buffer binding point.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum BufferTarget {
    /// Vertex attribute data (`GL_ARRAY_BUFFER`).
    Array,
    /// Vertex indices (`GL_ELEMENT_ARRAY_BUFFER`).
    ElementArray,
}

impl BufferTarget {
    #[inline]
    pub const fn gl_enum(self) -> u32 {
        match self {
            BufferTarget::Array => glow::ARRAY_BUFFER,
            BufferTarget::ElementArray => glow::ELEMENT_ARRAY_BUFFER,
        }
    }
}

/// Driver hint describing how often buffer contents change relative to draws.
///
/// Chosen by the caller on every upload; never inferred.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Default)]
pub enum BufferUsage {
    /// Written rarely, drawn many times.
    #[default]
    Static,
    /// Written often, drawn many times.
    Dynamic,
    /// Written once, drawn once.
    Stream,
}

impl BufferUsage {
    #[inline]
    pub const fn gl_enum(self) -> u32 {
        match self {
            BufferUsage::Static => glow::STATIC_DRAW,
            BufferUsage::Dynamic => glow::DYNAMIC_DRAW,
            BufferUsage::Stream => glow::STREAM_DRAW,
        }
    }
}

/// Programmable pipeline stage of a shader object.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum ShaderStage {
    Vertex,
    Fragment,
}

impl ShaderStage {
    #[inline]
    pub const fn gl_enum(self) -> u32 {
        match self {
            ShaderStage::Vertex => glow::VERTEX_SHADER,
            ShaderStage::Fragment => glow::FRAGMENT_SHADER,
        }
    }

    #[inline]
    pub const fn name(self) -> &'static str {
        match self {
            ShaderStage::Vertex => "vertex",
            ShaderStage::Fragment => "fragment",
        }
    }
}

/// The slice of OpenGL the renderer consumes.
///
/// Every call must happen on the thread that owns the current context.
/// Implementations are expected to be thin forwards to the driver; all
/// policy (validation, logging, batching) lives in the wrappers built on top.
pub trait GlBackend {
    type Buffer: Copy + Debug;
    type VertexArray: Copy + Debug;
    type Shader: Copy + Debug;
    type Program: Copy + Debug;
    type UniformLocation: Debug;

    // ── buffers ───────────────────────────────────────────────────────────

    fn create_buffer(&self) -> Result<Self::Buffer, String>;
    fn delete_buffer(&self, buffer: Self::Buffer);
    fn bind_buffer(&self, target: BufferTarget, buffer: Option<Self::Buffer>);
    fn buffer_data(&self, target: BufferTarget, data: &[u8], usage: BufferUsage);

    // ── vertex arrays ─────────────────────────────────────────────────────

    fn create_vertex_array(&self) -> Result<Self::VertexArray, String>;
    fn delete_vertex_array(&self, vertex_array: Self::VertexArray);
    fn bind_vertex_array(&self, vertex_array: Option<Self::VertexArray>);

    /// Float attribute pointer (`glVertexAttribPointer`).
    fn vertex_attrib_pointer_f32(
        &self,
        index: u32,
        components: i32,
        data_type: u32,
        normalized: bool,
        stride: i32,
        offset: i32,
    );

    /// Integer attribute pointer (`glVertexAttribIPointer`).
    fn vertex_attrib_pointer_i32(
        &self,
        index: u32,
        components: i32,
        data_type: u32,
        stride: i32,
        offset: i32,
    );

    fn enable_vertex_attrib_array(&self, index: u32);

    // ── shaders & programs ────────────────────────────────────────────────

    fn create_shader(&self, stage: ShaderStage) -> Result<Self::Shader, String>;
    fn shader_source(&self, shader: Self::Shader, source: &str);
    fn compile_shader(&self, shader: Self::Shader);
    fn get_shader_compile_status(&self, shader: Self::Shader) -> bool;
    fn get_shader_info_log(&self, shader: Self::Shader) -> String;
    fn delete_shader(&self, shader: Self::Shader);

    fn create_program(&self) -> Result<Self::Program, String>;
    fn attach_shader(&self, program: Self::Program, shader: Self::Shader);
    fn detach_shader(&self, program: Self::Program, shader: Self::Shader);
    fn link_program(&self, program: Self::Program);
    fn get_program_link_status(&self, program: Self::Program) -> bool;
    fn get_program_info_log(&self, program: Self::Program) -> String;
    fn delete_program(&self, program: Self::Program);
    fn use_program(&self, program: Option<Self::Program>);

    // ── uniforms ──────────────────────────────────────────────────────────

    fn get_uniform_location(
        &self,
        program: Self::Program,
        name: &str,
    ) -> Option<Self::UniformLocation>;
    fn uniform_1_i32(&self, location: &Self::UniformLocation, value: i32);
    fn uniform_1_u32(&self, location: &Self::UniformLocation, value: u32);
    fn uniform_1_f32(&self, location: &Self::UniformLocation, value: f32);
    fn uniform_matrix_4_f32(&self, location: &Self::UniformLocation, columns: &[f32; 16]);

    // ── drawing & state ───────────────────────────────────────────────────

    /// Indexed triangle list over `count` `u32` indices from the bound element buffer.
    fn draw_triangles_u32(&self, count: i32);

    /// Pops one entry off the driver error queue; `glow::NO_ERROR` when empty.
    fn get_error(&self) -> u32;

    fn set_viewport(&self, x: i32, y: i32, width: i32, height: i32);
    fn clear_color(&self, rgba: [f32; 4]);
    fn enable_alpha_blend(&self);
}
