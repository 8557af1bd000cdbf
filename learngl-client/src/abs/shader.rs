//! OpenGL Shaders
//!
//! This module defines the [`Shader`] and [`ShaderProgram`] structs that own compiled stages and
//! linked programs, and the [`Uniform`] trait for uploading values to a program.

use std::sync::Arc;

use glam::{Mat4, Vec2, Vec3, Vec4};
use glow::HasContext;
use learngl_core::{ShaderError, ShaderSources, ShaderStage};

fn gl_stage(stage: ShaderStage) -> u32 {
    match stage {
        ShaderStage::Vertex => glow::VERTEX_SHADER,
        ShaderStage::Fragment => glow::FRAGMENT_SHADER,
    }
}

/// A single compiled shader stage. The GL object is deleted on drop.
pub struct Shader {
    gl: Arc<glow::Context>,
    id: glow::Shader,
}

impl Shader {
    /// Compiles one stage. The driver's diagnostic is returned on failure.
    pub fn new(gl: &Arc<glow::Context>, stage: ShaderStage, source: &str) -> Result<Self, ShaderError> {
        unsafe {
            let shader = gl.create_shader(gl_stage(stage)).map_err(ShaderError::Create)?;
            gl.shader_source(shader, source);
            gl.compile_shader(shader);

            if !gl.get_shader_compile_status(shader) {
                let log = gl.get_shader_info_log(shader);
                gl.delete_shader(shader);
                log::debug!("{stage} shader compilation failed: {}", log.trim_end());
                return Err(ShaderError::Compile { stage, log });
            }

            Ok(Self {
                gl: Arc::clone(gl),
                id: shader,
            })
        }
    }
}

impl Drop for Shader {
    fn drop(&mut self) {
        unsafe {
            self.gl.delete_shader(self.id);
        }
    }
}

/// A value that can be uploaded to a uniform location.
pub trait Uniform {
    fn upload(&self, gl: &glow::Context, location: &glow::UniformLocation);
}

impl Uniform for bool {
    fn upload(&self, gl: &glow::Context, location: &glow::UniformLocation) {
        unsafe { gl.uniform_1_i32(Some(location), *self as i32) }
    }
}

impl Uniform for i32 {
    fn upload(&self, gl: &glow::Context, location: &glow::UniformLocation) {
        unsafe { gl.uniform_1_i32(Some(location), *self) }
    }
}

impl Uniform for f32 {
    fn upload(&self, gl: &glow::Context, location: &glow::UniformLocation) {
        unsafe { gl.uniform_1_f32(Some(location), *self) }
    }
}

impl Uniform for Vec2 {
    fn upload(&self, gl: &glow::Context, location: &glow::UniformLocation) {
        unsafe { gl.uniform_2_f32(Some(location), self.x, self.y) }
    }
}

impl Uniform for Vec3 {
    fn upload(&self, gl: &glow::Context, location: &glow::UniformLocation) {
        unsafe { gl.uniform_3_f32(Some(location), self.x, self.y, self.z) }
    }
}

impl Uniform for Vec4 {
    fn upload(&self, gl: &glow::Context, location: &glow::UniformLocation) {
        unsafe { gl.uniform_4_f32(Some(location), self.x, self.y, self.z, self.w) }
    }
}

impl Uniform for Mat4 {
    fn upload(&self, gl: &glow::Context, location: &glow::UniformLocation) {
        unsafe { gl.uniform_matrix_4_f32_slice(Some(location), false, self.as_ref()) }
    }
}

impl<T: Uniform> Uniform for &T {
    fn upload(&self, gl: &glow::Context, location: &glow::UniformLocation) {
        (*self).upload(gl, location);
    }
}

/// A linked vertex + fragment program.
///
/// A `ShaderProgram` only exists once both stages compiled and linking succeeded, so a broken
/// program can never be bound.
pub struct ShaderProgram {
    gl: Arc<glow::Context>,
    id: glow::Program,
}

impl ShaderProgram {
    /// Compiles both stages of `sources` and links them.
    pub fn from_sources(gl: &Arc<glow::Context>, sources: &ShaderSources) -> Result<Self, ShaderError> {
        let vertex = Shader::new(gl, ShaderStage::Vertex, sources.stage(ShaderStage::Vertex))?;
        let fragment = Shader::new(gl, ShaderStage::Fragment, sources.stage(ShaderStage::Fragment))?;
        Self::link(gl, vertex, fragment)
    }

    /// Links two compiled stages. The stages are consumed and released whether or not linking
    /// succeeds.
    pub fn link(gl: &Arc<glow::Context>, vertex: Shader, fragment: Shader) -> Result<Self, ShaderError> {
        unsafe {
            let program = gl.create_program().map_err(ShaderError::Create)?;
            let shaders = [&vertex, &fragment];

            for shader in shaders {
                gl.attach_shader(program, shader.id);
            }

            gl.link_program(program);

            for shader in shaders {
                gl.detach_shader(program, shader.id);
            }

            if !gl.get_program_link_status(program) {
                let log = gl.get_program_info_log(program);
                gl.delete_program(program);
                log::debug!("Shader program link failed: {}", log.trim_end());
                return Err(ShaderError::Link { log });
            }

            log::debug!("Linked shader program {:?}", program);
            Ok(Self {
                gl: Arc::clone(gl),
                id: program,
            })
        }
    }

    /// The driver handle of the linked program.
    #[cfg(test)]
    pub fn handle(&self) -> glow::Program {
        self.id
    }

    /// Binds the shader program for use.
    pub fn use_program(&self) {
        unsafe {
            self.gl.use_program(Some(self.id));
        }
    }

    /// Sets a uniform on this program, which must currently be bound. Names that are not an
    /// active uniform are ignored, the same as the GL does for location -1.
    pub fn set_uniform<T: Uniform>(&self, name: &str, value: T) {
        let location = unsafe { self.gl.get_uniform_location(self.id, name) };
        match location {
            Some(location) => value.upload(&self.gl, &location),
            None => log::trace!("Uniform {name:?} is not active in program {:?}", self.id),
        }
    }
}

impl Drop for ShaderProgram {
    fn drop(&mut self) {
        unsafe {
            self.gl.delete_program(self.id);
        }
    }
}
