use std::fmt;

use super::backend::GlBackend;

/// Upper bound on errors popped per sweep; a lost context can report forever.
const MAX_DRAINED_ERRORS: usize = 32;

/// The driver refused to hand out a GPU object.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GpuAllocError {
    pub object: &'static str,
    pub message: String,
}

impl GpuAllocError {
    pub(crate) fn new(object: &'static str, message: impl Into<String>) -> Self {
        Self { object, message: message.into() }
    }
}

impl fmt::Display for GpuAllocError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "failed to allocate {}: {}", self.object, self.message)
    }
}

impl std::error::Error for GpuAllocError {}

/// Symbolic name for a `glGetError` code.
pub fn error_name(code: u32) -> &'static str {
    match code {
        glow::INVALID_ENUM => "GL_INVALID_ENUM",
        glow::INVALID_VALUE => "GL_INVALID_VALUE",
        glow::INVALID_OPERATION => "GL_INVALID_OPERATION",
        glow::INVALID_FRAMEBUFFER_OPERATION => "GL_INVALID_FRAMEBUFFER_OPERATION",
        glow::OUT_OF_MEMORY => "GL_OUT_OF_MEMORY",
        glow::STACK_UNDERFLOW => "GL_STACK_UNDERFLOW",
        glow::STACK_OVERFLOW => "GL_STACK_OVERFLOW",
        glow::CONTEXT_LOST => "GL_CONTEXT_LOST",
        _ => "unknown GL error",
    }
}

/// Pops and logs every pending driver error. Returns how many were drained.
///
/// Diagnostic only: errors are not surfaced to the caller.
pub fn drain_errors<G: GlBackend>(gl: &G, scope: &str) -> usize {
    let mut drained = 0;
    while drained < MAX_DRAINED_ERRORS {
        let code = gl.get_error();
        if code == glow::NO_ERROR {
            break;
        }
        log::error!("{scope}: GL error 0x{code:04x} ({})", error_name(code));
        drained += 1;
    }
    drained
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gl::testing::RecordingGl;

    #[test]
    fn drain_stops_at_no_error() {
        let gl = RecordingGl::new();
        gl.queue_error(glow::INVALID_ENUM);
        gl.queue_error(glow::INVALID_OPERATION);
        assert_eq!(drain_errors(&gl, "test"), 2);
        assert_eq!(drain_errors(&gl, "test"), 0);
    }

    #[test]
    fn drain_is_bounded() {
        let gl = RecordingGl::new();
        for _ in 0..100 {
            gl.queue_error(glow::CONTEXT_LOST);
        }
        assert_eq!(drain_errors(&gl, "test"), MAX_DRAINED_ERRORS);
    }

    #[test]
    fn names_known_codes() {
        assert_eq!(error_name(glow::OUT_OF_MEMORY), "GL_OUT_OF_MEMORY");
        assert_eq!(error_name(0xdead), "unknown GL error");
    }
}
