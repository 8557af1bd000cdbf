//! Application configuration.
//!
//! The configuration is compiled into the binary as JSON. Every section falls back to its
//! defaults, so a config only needs to name the values it changes.

use std::{fmt::Display, path::PathBuf};

use glam::Vec3;
use serde::Deserialize;

use crate::{error::ConfigError, scene::StageKind};

/// What to do when a shader or texture fails to build.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FailurePolicy {
    /// Log the error and keep running without the resource.
    #[default]
    LogAndContinue,
    /// Propagate the error and exit.
    FailFast,
}

impl FailurePolicy {
    /// Applies the policy to the outcome of building `what`. A failure is logged and swallowed
    /// under [`LogAndContinue`](Self::LogAndContinue) and handed back under
    /// [`FailFast`](Self::FailFast).
    pub fn recover<T, E: Display>(self, what: impl Display, result: Result<T, E>) -> Result<Option<T>, E> {
        match (result, self) {
            (Ok(value), _) => Ok(Some(value)),
            (Err(e), FailurePolicy::FailFast) => Err(e),
            (Err(e), FailurePolicy::LogAndContinue) => {
                log::error!("Skipping {what}: {e}");
                Ok(None)
            }
        }
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub title: String,
    pub width: u32,
    pub height: u32,
    pub fullscreen: bool,
    pub vsync: bool,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "LearnOpenGL".to_string(),
            width: 800,
            height: 600,
            fullscreen: false,
            vsync: true,
        }
    }
}

/// Camera starting state and tuning. Angles are in degrees.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    pub position: [f32; 3],
    pub yaw: f32,
    pub pitch: f32,
    pub fov: f32,
    pub fov_min: f32,
    pub fov_max: f32,
    /// Units per second.
    pub speed: f32,
    /// Degrees per pixel of mouse motion.
    pub sensitivity: f32,
    pub near: f32,
    pub far: f32,
}

impl CameraConfig {
    pub fn position(&self) -> Vec3 {
        Vec3::from(self.position)
    }
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            position: [0.0, 0.0, 3.0],
            yaw: -90.0,
            pitch: 0.0,
            fov: 45.0,
            fov_min: 1.0,
            fov_max: 45.0,
            speed: 2.5,
            sensitivity: 0.1,
            near: 0.1,
            far: 100.0,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct TextureConfig {
    pub container: PathBuf,
    pub face: PathBuf,
}

impl Default for TextureConfig {
    fn default() -> Self {
        Self {
            container: PathBuf::from("learngl-client/assets/textures/container.png"),
            face: PathBuf::from("learngl-client/assets/textures/awesomeface.png"),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    pub window: WindowConfig,
    pub camera: CameraConfig,
    pub textures: TextureConfig,
    /// Stage shown at startup.
    pub stage: StageKind,
    pub failure_policy: FailurePolicy,
    /// When set, shader sources are read from `<shader_dir>/<program>/{vert,frag}.glsl`
    /// instead of the copies embedded in the binary.
    pub shader_dir: Option<PathBuf>,
    pub log_level: log::LevelFilter,
    pub clear_color: [f32; 4],
}

impl Default for Config {
    fn default() -> Self {
        Self {
            window: WindowConfig::default(),
            camera: CameraConfig::default(),
            textures: TextureConfig::default(),
            stage: StageKind::default(),
            failure_policy: FailurePolicy::default(),
            shader_dir: None,
            log_level: log::LevelFilter::Info,
            clear_color: [0.2, 0.3, 0.3, 1.0],
        }
    }
}

impl Config {
    /// Parses and validates a JSON configuration.
    pub fn from_json(s: &str) -> Result<Self, ConfigError> {
        let config: Config = serde_json::from_str(s)?;
        let (min, max) = (config.camera.fov_min, config.camera.fov_max);
        if min > max {
            return Err(ConfigError::FovRange { min, max });
        }
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_object_uses_defaults() {
        let config = Config::from_json("{}").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.camera.fov_min, 1.0);
        assert_eq!(config.camera.fov_max, 45.0);
        assert_eq!(config.camera.position(), Vec3::new(0.0, 0.0, 3.0));
    }

    #[test]
    fn partial_sections_keep_other_defaults() {
        let config = Config::from_json(
            r#"{
                "window": { "width": 1280 },
                "camera": { "speed": 5.0 },
                "stage": "camera_cubes",
                "failure_policy": "fail_fast",
                "log_level": "debug"
            }"#,
        )
        .unwrap();
        assert_eq!(config.window.width, 1280);
        assert_eq!(config.window.height, 600);
        assert_eq!(config.camera.speed, 5.0);
        assert_eq!(config.camera.sensitivity, 0.1);
        assert_eq!(config.stage, StageKind::CameraCubes);
        assert_eq!(config.failure_policy, FailurePolicy::FailFast);
        assert_eq!(config.log_level, log::LevelFilter::Debug);
    }

    #[test]
    fn log_and_continue_swallows_failures() {
        let policy = FailurePolicy::default();
        assert_eq!(policy, FailurePolicy::LogAndContinue);
        assert_eq!(policy.recover("texture a.png", Ok::<_, String>(7)), Ok(Some(7)));
        assert_eq!(
            policy.recover("texture a.png", Err::<i32, _>("no such file".to_string())),
            Ok(None)
        );
    }

    #[test]
    fn fail_fast_hands_failures_back() {
        let policy = FailurePolicy::FailFast;
        assert_eq!(policy.recover("program \"cube\"", Ok::<_, String>(7)), Ok(Some(7)));
        assert_eq!(
            policy.recover("program \"cube\"", Err::<i32, _>("link failed".to_string())),
            Err("link failed".to_string())
        );
    }

    #[test]
    fn rejects_inverted_fov_range() {
        let err = Config::from_json(r#"{ "camera": { "fov_min": 60.0, "fov_max": 10.0 } }"#)
            .unwrap_err();
        assert!(matches!(err, ConfigError::FovRange { .. }));
    }

    #[test]
    fn rejects_malformed_json() {
        assert!(matches!(
            Config::from_json("{ \"window\": "),
            Err(ConfigError::Parse(_))
        ));
    }
}
