use std::fmt;

use super::backend::ShaderStage;

const TAG: &str = "#shader";

/// Malformed two-section shader file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShaderSourceError {
    /// `#shader <x>` where `<x>` names neither stage.
    UnknownTag { line: usize, text: String },
    /// A stage tag repeated while that stage is already being read.
    DuplicateTag { line: usize, stage: ShaderStage },
    /// One or both stages ended up with no code.
    MissingSource { vertex: bool, fragment: bool },
}

impl fmt::Display for ShaderSourceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShaderSourceError::UnknownTag { line, text } => {
                write!(f, "unknown shader tag at line {line}: `{text}`")
            }
            ShaderSourceError::DuplicateTag { line, stage } => {
                write!(f, "unexpected duplicate `{TAG} {}` tag at line {line}", stage.name())
            }
            ShaderSourceError::MissingSource { vertex, fragment } => {
                let missing = match (vertex, fragment) {
                    (true, true) => "vertex and fragment",
                    (true, false) => "vertex",
                    _ => "fragment",
                };
                write!(f, "missing {missing} shader code")
            }
        }
    }
}

impl std::error::Error for ShaderSourceError {}

/// Vertex and fragment code split out of one annotated file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShaderSource {
    pub vertex: String,
    pub fragment: String,
}

impl ShaderSource {
    /// Splits `text` at `#shader vertex` / `#shader fragment` tags.
    ///
    /// Lines before the first tag and blank lines are dropped. Switching to
    /// the other stage is always allowed, so a stage may be re-entered after
    /// the other one; repeating the tag of the stage being read is an error.
    pub fn parse(text: &str) -> Result<Self, ShaderSourceError> {
        let mut vertex = String::new();
        let mut fragment = String::new();
        let mut current: Option<ShaderStage> = None;

        for (i, line) in text.lines().enumerate() {
            let line_no = i + 1;

            if line.contains(TAG) {
                let stage = if line.contains("vertex") {
                    ShaderStage::Vertex
                } else if line.contains("fragment") {
                    ShaderStage::Fragment
                } else {
                    return Err(ShaderSourceError::UnknownTag {
                        line: line_no,
                        text: line.trim().to_string(),
                    });
                };

                if current == Some(stage) {
                    return Err(ShaderSourceError::DuplicateTag { line: line_no, stage });
                }
                log::trace!("reading {} shader source from line {line_no}", stage.name());
                current = Some(stage);
                continue;
            }

            if line.trim().is_empty() {
                continue;
            }

            let target = match current {
                Some(ShaderStage::Vertex) => &mut vertex,
                Some(ShaderStage::Fragment) => &mut fragment,
                None => continue,
            };
            target.push_str(line);
            target.push('\n');
        }

        if vertex.is_empty() || fragment.is_empty() {
            return Err(ShaderSourceError::MissingSource {
                vertex: vertex.is_empty(),
                fragment: fragment.is_empty(),
            });
        }

        Ok(Self { vertex, fragment })
    }
}
