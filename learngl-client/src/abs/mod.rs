//! This module contains the thin RAII wrappers around SDL2 and OpenGL objects: application
//! setup, shader programs, meshes and textures.

pub mod app;
pub mod mesh;
pub mod shader;
pub mod texture;

pub use app::*;
pub use mesh::*;
pub use shader::*;
pub use texture::*;
