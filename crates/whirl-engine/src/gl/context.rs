use std::ffi::{c_void, CStr};

use glow::HasContext;

use super::backend::{BufferTarget, BufferUsage, GlBackend, ShaderStage};

/// `GlBackend` over a loaded `glow::Context`.
///
/// Constructing one is the single unsafe step of the crate: the caller
/// vouches that the wrapped context is current on this thread for as long
/// as the value (and every wrapper created from it) lives.
pub struct GlowContext {
    gl: glow::Context,
}

impl GlowContext {
    /// Wraps an already loaded context.
    ///
    /// # Safety
    /// The context must be current on the calling thread and remain current
    /// until this value and all GPU objects created through it are dropped.
    pub unsafe fn new(gl: glow::Context) -> Self {
        Self { gl }
    }

    /// Loads GL entry points through `loader` (e.g. a display's `get_proc_address`).
    ///
    /// # Safety
    /// Same contract as [`GlowContext::new`]; `loader` must return valid
    /// function pointers for the current context.
    pub unsafe fn load_with<F>(loader: F) -> Self
    where
        F: FnMut(&CStr) -> *const c_void,
    {
        // SAFETY: forwarded to the caller.
        let gl = unsafe { glow::Context::from_loader_function_cstr(loader) };
        Self { gl }
    }
}

// SAFETY (all blocks below): `GlowContext` can only be built through the unsafe
// constructors above, whose contract guarantees a current context on this thread.
impl GlBackend for GlowContext {
    type Buffer = <glow::Context as HasContext>::Buffer;
    type VertexArray = <glow::Context as HasContext>::VertexArray;
    type Shader = <glow::Context as HasContext>::Shader;
    type Program = <glow::Context as HasContext>::Program;
    type UniformLocation = <glow::Context as HasContext>::UniformLocation;

    fn create_buffer(&self) -> Result<Self::Buffer, String> {
        unsafe { self.gl.create_buffer() }
    }

    fn delete_buffer(&self, buffer: Self::Buffer) {
        unsafe { self.gl.delete_buffer(buffer) }
    }

    fn bind_buffer(&self, target: BufferTarget, buffer: Option<Self::Buffer>) {
        unsafe { self.gl.bind_buffer(target.gl_enum(), buffer) }
    }

    fn buffer_data(&self, target: BufferTarget, data: &[u8], usage: BufferUsage) {
        unsafe { self.gl.buffer_data_u8_slice(target.gl_enum(), data, usage.gl_enum()) }
    }

    fn create_vertex_array(&self) -> Result<Self::VertexArray, String> {
        unsafe { self.gl.create_vertex_array() }
    }

    fn delete_vertex_array(&self, vertex_array: Self::VertexArray) {
        unsafe { self.gl.delete_vertex_array(vertex_array) }
    }

    fn bind_vertex_array(&self, vertex_array: Option<Self::VertexArray>) {
        unsafe { self.gl.bind_vertex_array(vertex_array) }
    }

    fn vertex_attrib_pointer_f32(
        &self,
        index: u32,
        components: i32,
        data_type: u32,
        normalized: bool,
        stride: i32,
        offset: i32,
    ) {
        unsafe {
            self.gl
                .vertex_attrib_pointer_f32(index, components, data_type, normalized, stride, offset)
        }
    }

    fn vertex_attrib_pointer_i32(
        &self,
        index: u32,
        components: i32,
        data_type: u32,
        stride: i32,
        offset: i32,
    ) {
        unsafe {
            self.gl
                .vertex_attrib_pointer_i32(index, components, data_type, stride, offset)
        }
    }

    fn enable_vertex_attrib_array(&self, index: u32) {
        unsafe { self.gl.enable_vertex_attrib_array(index) }
    }

    fn create_shader(&self, stage: ShaderStage) -> Result<Self::Shader, String> {
        unsafe { self.gl.create_shader(stage.gl_enum()) }
    }

    fn shader_source(&self, shader: Self::Shader, source: &str) {
        unsafe { self.gl.shader_source(shader, source) }
    }

    fn compile_shader(&self, shader: Self::Shader) {
        unsafe { self.gl.compile_shader(shader) }
    }

    fn get_shader_compile_status(&self, shader: Self::Shader) -> bool {
        unsafe { self.gl.get_shader_compile_status(shader) }
    }

    fn get_shader_info_log(&self, shader: Self::Shader) -> String {
        unsafe { self.gl.get_shader_info_log(shader) }
    }

    fn delete_shader(&self, shader: Self::Shader) {
        unsafe { self.gl.delete_shader(shader) }
    }

    fn create_program(&self) -> Result<Self::Program, String> {
        unsafe { self.gl.create_program() }
    }

    fn attach_shader(&self, program: Self::Program, shader: Self::Shader) {
        unsafe { self.gl.attach_shader(program, shader) }
    }

    fn detach_shader(&self, program: Self::Program, shader: Self::Shader) {
        unsafe { self.gl.detach_shader(program, shader) }
    }

    fn link_program(&self, program: Self::Program) {
        unsafe { self.gl.link_program(program) }
    }

    fn get_program_link_status(&self, program: Self::Program) -> bool {
        unsafe { self.gl.get_program_link_status(program) }
    }

    fn get_program_info_log(&self, program: Self::Program) -> String {
        unsafe { self.gl.get_program_info_log(program) }
    }

    fn delete_program(&self, program: Self::Program) {
        unsafe { self.gl.delete_program(program) }
    }

    fn use_program(&self, program: Option<Self::Program>) {
        unsafe { self.gl.use_program(program) }
    }

    fn get_uniform_location(
        &self,
        program: Self::Program,
        name: &str,
    ) -> Option<Self::UniformLocation> {
        unsafe { self.gl.get_uniform_location(program, name) }
    }

    fn uniform_1_i32(&self, location: &Self::UniformLocation, value: i32) {
        unsafe { self.gl.uniform_1_i32(Some(location), value) }
    }

    fn uniform_1_u32(&self, location: &Self::UniformLocation, value: u32) {
        unsafe { self.gl.uniform_1_u32(Some(location), value) }
    }

    fn uniform_1_f32(&self, location: &Self::UniformLocation, value: f32) {
        unsafe { self.gl.uniform_1_f32(Some(location), value) }
    }

    fn uniform_matrix_4_f32(&self, location: &Self::UniformLocation, columns: &[f32; 16]) {
        unsafe { self.gl.uniform_matrix_4_f32_slice(Some(location), false, columns) }
    }

    fn draw_triangles_u32(&self, count: i32) {
        unsafe { self.gl.draw_elements(glow::TRIANGLES, count, glow::UNSIGNED_INT, 0) }
    }

    fn get_error(&self) -> u32 {
        unsafe { self.gl.get_error() }
    }

    fn set_viewport(&self, x: i32, y: i32, width: i32, height: i32) {
        unsafe { self.gl.viewport(x, y, width, height) }
    }

    fn clear_color(&self, rgba: [f32; 4]) {
        unsafe {
            self.gl.clear_color(rgba[0], rgba[1], rgba[2], rgba[3]);
            self.gl.clear(glow::COLOR_BUFFER_BIT);
        }
    }

    fn enable_alpha_blend(&self) {
        unsafe {
            self.gl.enable(glow::BLEND);
            self.gl.blend_func(glow::SRC_ALPHA, glow::ONE_MINUS_SRC_ALPHA);
        }
    }
}
