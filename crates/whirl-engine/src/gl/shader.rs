use std::cell::RefCell;
use std::collections::HashSet;
use std::fmt;
use std::path::Path;
use std::rc::Rc;

use anyhow::{Context, Result};
use glam::Mat4;

use super::backend::{GlBackend, ShaderStage};
use super::error::GpuAllocError;
use super::source::ShaderSource;

/// Compile or link failure, carrying the driver's info log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShaderBuildError {
    /// Failing stage; `None` for a link failure.
    pub stage: Option<ShaderStage>,
    pub log: String,
}

impl fmt::Display for ShaderBuildError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.stage {
            Some(stage) => {
                write!(f, "{} shader failed to compile: {}", stage.name(), self.log.trim())
            }
            None => write!(f, "shader program failed to link: {}", self.log.trim()),
        }
    }
}

impl std::error::Error for ShaderBuildError {}

/// Compiled stage object; deleted when it goes out of scope.
struct StageObject<'a, G: GlBackend> {
    gl: &'a G,
    handle: G::Shader,
}

impl<'a, G: GlBackend> StageObject<'a, G> {
    fn compile(gl: &'a G, stage: ShaderStage, code: &str) -> Result<Self> {
        let handle = gl
            .create_shader(stage)
            .map_err(|e| GpuAllocError::new("shader object", e))?;
        let obj = Self { gl, handle };

        gl.shader_source(handle, code);
        gl.compile_shader(handle);
        if !gl.get_shader_compile_status(handle) {
            let log = gl.get_shader_info_log(handle);
            log::error!("{} shader compile log:\n{log}", stage.name());
            return Err(ShaderBuildError { stage: Some(stage), log }.into());
        }
        Ok(obj)
    }
}

impl<G: GlBackend> Drop for StageObject<'_, G> {
    fn drop(&mut self) {
        self.gl.delete_shader(self.handle);
    }
}

/// Linked vertex + fragment program.
///
/// Only the program handle survives construction; stage objects are deleted
/// right after linking. Released on drop.
pub struct ShaderProgram<G: GlBackend> {
    gl: Rc<G>,
    program: G::Program,
    name: String,
    warned_missing: RefCell<HashSet<String>>,
}

impl<G: GlBackend> ShaderProgram<G> {
    /// Reads and builds an annotated `#shader vertex` / `#shader fragment` file.
    pub fn from_path(gl: Rc<G>, path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        log::debug!("reading shader file {}", path.display());
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read shader file {}", path.display()))?;
        Self::from_source(gl, &path.display().to_string(), &text)
    }

    /// Builds a program from annotated source text. `name` is used in diagnostics.
    pub fn from_source(gl: Rc<G>, name: &str, text: &str) -> Result<Self> {
        let source = ShaderSource::parse(text)
            .with_context(|| format!("failed to parse shader {name}"))?;
        Self::build(gl, name, &source)
    }

    pub fn build(gl: Rc<G>, name: &str, source: &ShaderSource) -> Result<Self> {
        let program = {
            let vs = StageObject::compile(gl.as_ref(), ShaderStage::Vertex, &source.vertex)
                .with_context(|| format!("failed to build shader {name}"))?;
            let fs = StageObject::compile(gl.as_ref(), ShaderStage::Fragment, &source.fragment)
                .with_context(|| format!("failed to build shader {name}"))?;

            let program = gl
                .create_program()
                .map_err(|e| GpuAllocError::new("shader program", e))
                .with_context(|| format!("failed to build shader {name}"))?;

            gl.attach_shader(program, vs.handle);
            gl.attach_shader(program, fs.handle);
            gl.link_program(program);
            gl.detach_shader(program, vs.handle);
            gl.detach_shader(program, fs.handle);

            if !gl.get_program_link_status(program) {
                let log = gl.get_program_info_log(program);
                gl.delete_program(program);
                log::error!("shader {name} link log:\n{log}");
                return Err(anyhow::Error::new(ShaderBuildError { stage: None, log }))
                    .with_context(|| format!("failed to build shader {name}"));
            }
            program
            // `vs` / `fs` deleted here
        };

        log::debug!("built shader program {name} ({program:?})");
        Ok(Self {
            gl,
            program,
            name: name.to_string(),
            warned_missing: RefCell::new(HashSet::new()),
        })
    }

    #[inline]
    pub fn bind(&self) {
        self.gl.use_program(Some(self.program));
    }

    #[inline]
    pub fn unbind(&self) {
        self.gl.use_program(None);
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn handle(&self) -> G::Program {
        self.program
    }

    // ── uniforms ──────────────────────────────────────────────────────────
    //
    // Each setter looks the location up by name and returns whether it
    // resolved. The program must be bound.

    pub fn set_bool(&self, name: &str, value: bool) -> bool {
        self.with_location(name, |gl, loc| gl.uniform_1_i32(loc, value as i32))
    }

    pub fn set_int(&self, name: &str, value: i32) -> bool {
        self.with_location(name, |gl, loc| gl.uniform_1_i32(loc, value))
    }

    pub fn set_uint(&self, name: &str, value: u32) -> bool {
        self.with_location(name, |gl, loc| gl.uniform_1_u32(loc, value))
    }

    pub fn set_float(&self, name: &str, value: f32) -> bool {
        self.with_location(name, |gl, loc| gl.uniform_1_f32(loc, value))
    }

    pub fn set_mat4(&self, name: &str, value: &Mat4) -> bool {
        let columns = value.to_cols_array();
        self.with_location(name, |gl, loc| gl.uniform_matrix_4_f32(loc, &columns))
    }

    fn with_location(&self, name: &str, f: impl FnOnce(&G, &G::UniformLocation)) -> bool {
        match self.gl.get_uniform_location(self.program, name) {
            Some(loc) => {
                f(self.gl.as_ref(), &loc);
                true
            }
            None => {
                // Usually an unused uniform the compiler optimized out.
                if self.warned_missing.borrow_mut().insert(name.to_string()) {
                    log::warn!("shader {}: uniform `{name}` is not active", self.name);
                } else {
                    log::trace!("shader {}: uniform `{name}` is not active", self.name);
                }
                false
            }
        }
    }
}

impl<G: GlBackend> Drop for ShaderProgram<G> {
    fn drop(&mut self) {
        log::debug!("deleting shader program {} ({:?})", self.name, self.program);
        self.gl.delete_program(self.program);
    }
}
