use std::path::PathBuf;

/// Construction options for [`GuiRenderer`](super::GuiRenderer).
#[derive(Debug, Clone)]
pub struct GuiRendererConfig {
    /// Directory holding `quad.wsh`, `rquad.wsh` and `circle.wsh`.
    ///
    /// `None` uses the shaders built into the crate.
    pub shader_dir: Option<PathBuf>,

    /// Shapes per kind to reserve room for up front. Grows as needed.
    pub initial_capacity: usize,
}

impl Default for GuiRendererConfig {
    fn default() -> Self {
        Self {
            shader_dir: None,
            initial_capacity: 16,
        }
    }
}

impl GuiRendererConfig {
    pub fn with_shader_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.shader_dir = Some(dir.into());
        self
    }

    pub fn with_initial_capacity(mut self, shapes: usize) -> Self {
        self.initial_capacity = shapes;
        self
    }
}
