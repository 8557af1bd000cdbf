//! Client side error types.

use std::path::PathBuf;

use learngl_core::{ConfigError, ContextInitError, GeometryError, ShaderError};

#[derive(Debug, thiserror::Error)]
pub enum TextureError {
    #[error("failed to load texture {path:?}: {source}")]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
    #[error("failed to create texture object: {0}")]
    Create(String),
}

/// A stage could not build one of its GPU resources.
#[derive(Debug, thiserror::Error)]
pub enum StageError {
    #[error(transparent)]
    Shader(#[from] ShaderError),
    #[error(transparent)]
    Texture(#[from] TextureError),
    #[error(transparent)]
    Geometry(#[from] GeometryError),
    #[error("failed to create mesh: {0}")]
    Mesh(String),
}

/// Anything that ends the program with a non-zero exit code.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Context(#[from] ContextInitError),
    #[error(transparent)]
    Stage(#[from] StageError),
    #[error("failed to install logger: {0}")]
    Logger(#[from] log::SetLoggerError),
}
