//! Module for anything related to rendering.
//!
//! This module holds the GLSL sources of every stage under `shaders/` and the [`Loader`] that
//! turns sources, geometry and image files into GPU resources under the configured
//! [`FailurePolicy`](learngl_core::FailurePolicy).

use std::{path::Path, sync::Arc};

use learngl_core::{Config, GeometryBuffer, ShaderSources};

use crate::{
    abs::{Mesh, ShaderProgram, Texture},
    error::StageError,
};

/// Builds GPU resources for a stage.
pub struct Loader<'a> {
    gl: &'a Arc<glow::Context>,
    config: &'a Config,
}

impl<'a> Loader<'a> {
    pub fn new(gl: &'a Arc<glow::Context>, config: &'a Config) -> Self {
        Self { gl, config }
    }

    pub fn config(&self) -> &'a Config {
        self.config
    }

    /// Builds the program called `name`. The embedded sources are used unless a shader directory
    /// is configured.
    ///
    /// Under [`LogAndContinue`](learngl_core::FailurePolicy::LogAndContinue) a broken program comes back as `None`.
    pub fn program(&self, name: &str, embedded: ShaderSources) -> Result<Option<ShaderProgram>, StageError> {
        let result = match &self.config.shader_dir {
            Some(dir) => ShaderSources::load_named(dir, name),
            None => Ok(embedded),
        }
        .and_then(|sources| ShaderProgram::from_sources(self.gl, &sources));
        self.config
            .failure_policy
            .recover(format_args!("shader program {name:?}"), result.map_err(StageError::from))
    }

    /// Loads a texture. Under [`LogAndContinue`](learngl_core::FailurePolicy::LogAndContinue) a missing or corrupt image comes
    /// back as `None` and the texture unit stays unbound.
    pub fn texture(&self, path: &Path) -> Result<Option<Texture>, StageError> {
        let result = Texture::from_path(self.gl, path).map_err(StageError::from);
        self.config
            .failure_policy
            .recover(format_args!("texture {}", path.display()), result)
    }

    /// Uploads a geometry buffer. Failing to allocate buffer objects is always an error.
    pub fn mesh(&self, geometry: &GeometryBuffer) -> Result<Mesh, StageError> {
        let mesh = Mesh::new(self.gl, geometry).map_err(StageError::Mesh)?;
        log::debug!("Uploaded mesh with {} elements", mesh.count());
        Ok(mesh)
    }
}
