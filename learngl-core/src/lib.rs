//! The GPU independent half of the LearnOpenGL tutorial scaffold. This crate holds everything
//! that can be reasoned about without a graphics context, such as the fly camera, configuration,
//! vertex data and shader sources.

pub mod camera;
pub mod config;
pub mod error;
pub mod frame;
pub mod geometry;
pub mod scene;
pub mod shader;

pub use camera::{CameraController, CameraKey, CameraState, KeyState};
pub use config::{Config, FailurePolicy};
pub use error::{ConfigError, ContextInitError, GeometryError, ShaderError};
pub use frame::FrameClock;
pub use geometry::{Attribute, GeometryBuffer, VertexLayout};
pub use scene::StageKind;
pub use shader::{ShaderSources, ShaderStage};
