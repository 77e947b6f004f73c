//! In-memory `GlBackend` used by unit tests.
//!
//! Hands out sequential handles, records every call, and tracks which
//! handles are still alive so RAII release can be asserted.

use std::cell::{Cell, RefCell};
use std::collections::{BTreeSet, VecDeque};

use super::backend::{BufferTarget, BufferUsage, GlBackend, ShaderStage};

#[derive(Debug, Clone, PartialEq)]
pub enum UniformValue {
    Int(i32),
    UInt(u32),
    Float(f32),
    Mat4([f32; 16]),
}

#[derive(Debug, Clone, PartialEq)]
pub enum GlCall {
    CreateBuffer(u32),
    DeleteBuffer(u32),
    BindBuffer(BufferTarget, Option<u32>),
    BufferData { target: BufferTarget, bytes: Vec<u8>, usage: BufferUsage },
    CreateVertexArray(u32),
    DeleteVertexArray(u32),
    BindVertexArray(Option<u32>),
    AttribPointerF32 { index: u32, components: i32, data_type: u32, stride: i32, offset: i32 },
    AttribPointerI32 { index: u32, components: i32, data_type: u32, stride: i32, offset: i32 },
    EnableAttrib(u32),
    CreateShader(ShaderStage, u32),
    ShaderSource(u32, String),
    CompileShader(u32),
    DeleteShader(u32),
    CreateProgram(u32),
    AttachShader(u32, u32),
    DetachShader(u32, u32),
    LinkProgram(u32),
    DeleteProgram(u32),
    UseProgram(Option<u32>),
    Uniform(String, UniformValue),
    DrawTriangles(i32),
    Viewport(i32, i32, i32, i32),
    Clear([f32; 4]),
    EnableBlend,
}

pub struct RecordingGl {
    next_handle: Cell<u32>,
    calls: RefCell<Vec<GlCall>>,
    live: RefCell<BTreeSet<u32>>,
    shader_stages: RefCell<Vec<(u32, ShaderStage)>>,
    uniforms: RefCell<Vec<String>>,
    errors: RefCell<VecDeque<u32>>,
    fail_compile: Cell<Option<ShaderStage>>,
    fail_link: Cell<bool>,
    fail_alloc: Cell<bool>,
}

impl Default for RecordingGl {
    fn default() -> Self {
        Self {
            next_handle: Cell::new(1),
            calls: RefCell::new(Vec::new()),
            live: RefCell::new(BTreeSet::new()),
            shader_stages: RefCell::new(Vec::new()),
            uniforms: RefCell::new(vec!["u_Projection".to_string()]),
            errors: RefCell::new(VecDeque::new()),
            fail_compile: Cell::new(None),
            fail_link: Cell::new(false),
            fail_alloc: Cell::new(false),
        }
    }
}

impl RecordingGl {
    pub fn new() -> Self {
        Self::default()
    }

    /// Declares `name` as an active uniform of every program.
    pub fn add_uniform(&self, name: &str) {
        self.uniforms.borrow_mut().push(name.to_string());
    }

    pub fn fail_compile(&self, stage: ShaderStage) {
        self.fail_compile.set(Some(stage));
    }

    pub fn fail_link(&self) {
        self.fail_link.set(true);
    }

    pub fn fail_alloc(&self) {
        self.fail_alloc.set(true);
    }

    pub fn queue_error(&self, code: u32) {
        self.errors.borrow_mut().push_back(code);
    }

    pub fn calls(&self) -> Vec<GlCall> {
        self.calls.borrow().clone()
    }

    pub fn clear_calls(&self) {
        self.calls.borrow_mut().clear();
    }

    pub fn count(&self, pred: impl Fn(&GlCall) -> bool) -> usize {
        self.calls.borrow().iter().filter(|c| pred(c)).count()
    }

    pub fn draw_counts(&self) -> Vec<i32> {
        self.calls
            .borrow()
            .iter()
            .filter_map(|c| match c {
                GlCall::DrawTriangles(n) => Some(*n),
                _ => None,
            })
            .collect()
    }

    /// Bytes of the most recent upload to `target`.
    pub fn last_upload(&self, target: BufferTarget) -> Option<Vec<u8>> {
        self.calls.borrow().iter().rev().find_map(|c| match c {
            GlCall::BufferData { target: t, bytes, .. } if *t == target => Some(bytes.clone()),
            _ => None,
        })
    }

    pub fn live_handles(&self) -> usize {
        self.live.borrow().len()
    }

    fn record(&self, call: GlCall) {
        self.calls.borrow_mut().push(call);
    }

    fn alloc(&self) -> Result<u32, String> {
        if self.fail_alloc.get() {
            return Err("out of memory".to_string());
        }
        let h = self.next_handle.get();
        self.next_handle.set(h + 1);
        self.live.borrow_mut().insert(h);
        Ok(h)
    }

    fn release(&self, handle: u32) {
        self.live.borrow_mut().remove(&handle);
    }

    fn stage_of(&self, shader: u32) -> Option<ShaderStage> {
        self.shader_stages
            .borrow()
            .iter()
            .find(|(h, _)| *h == shader)
            .map(|(_, s)| *s)
    }
}

impl GlBackend for RecordingGl {
    type Buffer = u32;
    type VertexArray = u32;
    type Shader = u32;
    type Program = u32;
    type UniformLocation = String;

    fn create_buffer(&self) -> Result<u32, String> {
        let h = self.alloc()?;
        self.record(GlCall::CreateBuffer(h));
        Ok(h)
    }

    fn delete_buffer(&self, buffer: u32) {
        self.release(buffer);
        self.record(GlCall::DeleteBuffer(buffer));
    }

    fn bind_buffer(&self, target: BufferTarget, buffer: Option<u32>) {
        self.record(GlCall::BindBuffer(target, buffer));
    }

    fn buffer_data(&self, target: BufferTarget, data: &[u8], usage: BufferUsage) {
        self.record(GlCall::BufferData { target, bytes: data.to_vec(), usage });
    }

    fn create_vertex_array(&self) -> Result<u32, String> {
        let h = self.alloc()?;
        self.record(GlCall::CreateVertexArray(h));
        Ok(h)
    }

    fn delete_vertex_array(&self, vertex_array: u32) {
        self.release(vertex_array);
        self.record(GlCall::DeleteVertexArray(vertex_array));
    }

    fn bind_vertex_array(&self, vertex_array: Option<u32>) {
        self.record(GlCall::BindVertexArray(vertex_array));
    }

    fn vertex_attrib_pointer_f32(
        &self,
        index: u32,
        components: i32,
        data_type: u32,
        _normalized: bool,
        stride: i32,
        offset: i32,
    ) {
        self.record(GlCall::AttribPointerF32 { index, components, data_type, stride, offset });
    }

    fn vertex_attrib_pointer_i32(
        &self,
        index: u32,
        components: i32,
        data_type: u32,
        stride: i32,
        offset: i32,
    ) {
        self.record(GlCall::AttribPointerI32 { index, components, data_type, stride, offset });
    }

    fn enable_vertex_attrib_array(&self, index: u32) {
        self.record(GlCall::EnableAttrib(index));
    }

    fn create_shader(&self, stage: ShaderStage) -> Result<u32, String> {
        let h = self.alloc()?;
        self.shader_stages.borrow_mut().push((h, stage));
        self.record(GlCall::CreateShader(stage, h));
        Ok(h)
    }

    fn shader_source(&self, shader: u32, source: &str) {
        self.record(GlCall::ShaderSource(shader, source.to_string()));
    }

    fn compile_shader(&self, shader: u32) {
        self.record(GlCall::CompileShader(shader));
    }

    fn get_shader_compile_status(&self, shader: u32) -> bool {
        self.fail_compile.get() != self.stage_of(shader)
    }

    fn get_shader_info_log(&self, shader: u32) -> String {
        format!("0:1(1): error: syntax error in shader {shader}")
    }

    fn delete_shader(&self, shader: u32) {
        self.release(shader);
        self.record(GlCall::DeleteShader(shader));
    }

    fn create_program(&self) -> Result<u32, String> {
        let h = self.alloc()?;
        self.record(GlCall::CreateProgram(h));
        Ok(h)
    }

    fn attach_shader(&self, program: u32, shader: u32) {
        self.record(GlCall::AttachShader(program, shader));
    }

    fn detach_shader(&self, program: u32, shader: u32) {
        self.record(GlCall::DetachShader(program, shader));
    }

    fn link_program(&self, program: u32) {
        self.record(GlCall::LinkProgram(program));
    }

    fn get_program_link_status(&self, _program: u32) -> bool {
        !self.fail_link.get()
    }

    fn get_program_info_log(&self, _program: u32) -> String {
        "error: vertex output `v_Color` not consumed".to_string()
    }

    fn delete_program(&self, program: u32) {
        self.release(program);
        self.record(GlCall::DeleteProgram(program));
    }

    fn use_program(&self, program: Option<u32>) {
        self.record(GlCall::UseProgram(program));
    }

    fn get_uniform_location(&self, _program: u32, name: &str) -> Option<String> {
        self.uniforms
            .borrow()
            .iter()
            .find(|u| u.as_str() == name)
            .cloned()
    }

    fn uniform_1_i32(&self, location: &String, value: i32) {
        self.record(GlCall::Uniform(location.clone(), UniformValue::Int(value)));
    }

    fn uniform_1_u32(&self, location: &String, value: u32) {
        self.record(GlCall::Uniform(location.clone(), UniformValue::UInt(value)));
    }

    fn uniform_1_f32(&self, location: &String, value: f32) {
        self.record(GlCall::Uniform(location.clone(), UniformValue::Float(value)));
    }

    fn uniform_matrix_4_f32(&self, location: &String, columns: &[f32; 16]) {
        self.record(GlCall::Uniform(location.clone(), UniformValue::Mat4(*columns)));
    }

    fn draw_triangles_u32(&self, count: i32) {
        self.record(GlCall::DrawTriangles(count));
    }

    fn get_error(&self) -> u32 {
        self.errors.borrow_mut().pop_front().unwrap_or(glow::NO_ERROR)
    }

    fn set_viewport(&self, x: i32, y: i32, width: i32, height: i32) {
        self.record(GlCall::Viewport(x, y, width, height));
    }

    fn clear_color(&self, rgba: [f32; 4]) {
        self.record(GlCall::Clear(rgba));
    }

    fn enable_alpha_blend(&self) {
        self.record(GlCall::EnableBlend);
    }
}
