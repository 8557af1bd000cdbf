//! Error types shared by the core and the client.

use std::path::PathBuf;

use crate::shader::ShaderStage;

/// The window or OpenGL context could not be created. Always fatal.
#[derive(Debug, thiserror::Error)]
pub enum ContextInitError {
    #[error("failed to initialize SDL: {0}")]
    Sdl(String),
    #[error("failed to initialize the video subsystem: {0}")]
    Video(String),
    #[error("failed to create window: {0}")]
    Window(String),
    #[error("failed to create OpenGL context: {0}")]
    GlContext(String),
    #[error("failed to create event pump: {0}")]
    EventPump(String),
}

/// Failures while building a shader program.
#[derive(Debug, thiserror::Error)]
pub enum ShaderError {
    #[error("{stage} shader failed to compile: {log}")]
    Compile { stage: ShaderStage, log: String },
    #[error("shader program failed to link: {log}")]
    Link { log: String },
    #[error("failed to create shader object: {0}")]
    Create(String),
    #[error("failed to read shader source {path:?}: {source}")]
    Source {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// A vertex/index set that does not match its declared layout.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GeometryError {
    #[error("vertex layout has no position attribute")]
    MissingPosition,
    #[error("vertex data length {len} is not a multiple of the layout stride {stride}")]
    Stride { len: usize, stride: usize },
    #[error("index {index} is out of range for {vertex_count} vertices")]
    IndexOutOfRange { index: u32, vertex_count: usize },
}

/// The compiled-in configuration could not be parsed.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid configuration: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("field of view range [{min}, {max}] is empty")]
    FovRange { min: f32, max: f32 },
}
