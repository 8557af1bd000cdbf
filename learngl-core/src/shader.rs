//! Shader source handling.
//!
//! Compilation itself needs a GPU context and lives in the client; this module only deals with
//! the stage kinds and getting the GLSL text into memory, either inline or from files on disk.

use std::{fmt, path::Path};

use crate::error::ShaderError;

/// The pipeline step a shader runs in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ShaderStage {
    Vertex,
    Fragment,
}

impl fmt::Display for ShaderStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShaderStage::Vertex => f.write_str("vertex"),
            ShaderStage::Fragment => f.write_str("fragment"),
        }
    }
}

/// The GLSL text for a vertex + fragment program.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ShaderSources {
    pub vertex: String,
    pub fragment: String,
}

impl ShaderSources {
    /// Wraps inline source text.
    pub fn new(vertex: impl Into<String>, fragment: impl Into<String>) -> Self {
        Self {
            vertex: vertex.into(),
            fragment: fragment.into(),
        }
    }

    /// Reads both stages from disk. Relative paths resolve against the working directory.
    pub fn load(vertex_path: impl AsRef<Path>, fragment_path: impl AsRef<Path>) -> Result<Self, ShaderError> {
        Ok(Self {
            vertex: read_source(vertex_path.as_ref())?,
            fragment: read_source(fragment_path.as_ref())?,
        })
    }

    /// Reads `<dir>/<name>/vert.glsl` and `<dir>/<name>/frag.glsl`.
    pub fn load_named(dir: impl AsRef<Path>, name: &str) -> Result<Self, ShaderError> {
        let base = dir.as_ref().join(name);
        Self::load(base.join("vert.glsl"), base.join("frag.glsl"))
    }

    /// Returns the source text of the given stage.
    pub fn stage(&self, stage: ShaderStage) -> &str {
        match stage {
            ShaderStage::Vertex => &self.vertex,
            ShaderStage::Fragment => &self.fragment,
        }
    }
}

fn read_source(path: &Path) -> Result<String, ShaderError> {
    log::debug!("Loading shader source from {}", path.display());
    std::fs::read_to_string(path).map_err(|source| ShaderError::Source {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_named_reads_both_stages() {
        let dir = tempfile::tempdir().unwrap();
        let program_dir = dir.path().join("basic");
        std::fs::create_dir(&program_dir).unwrap();
        std::fs::write(program_dir.join("vert.glsl"), "void main() {}\n").unwrap();
        std::fs::write(program_dir.join("frag.glsl"), "out vec4 c; void main() {}\n").unwrap();

        let sources = ShaderSources::load_named(dir.path(), "basic").unwrap();
        assert_eq!(sources.stage(ShaderStage::Vertex), "void main() {}\n");
        assert_eq!(sources.stage(ShaderStage::Fragment), "out vec4 c; void main() {}\n");
    }

    #[test]
    fn missing_stage_file_reports_path() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("vert.glsl"), "void main() {}").unwrap();
        let missing = dir.path().join("frag.glsl");

        match ShaderSources::load(dir.path().join("vert.glsl"), &missing) {
            Err(ShaderError::Source { path, source }) => {
                assert_eq!(path, missing);
                assert_eq!(source.kind(), std::io::ErrorKind::NotFound);
            }
            other => panic!("expected a source error, got {other:?}"),
        }
    }

    #[test]
    fn stage_names() {
        assert_eq!(ShaderStage::Vertex.to_string(), "vertex");
        assert_eq!(ShaderStage::Fragment.to_string(), "fragment");
    }
}
