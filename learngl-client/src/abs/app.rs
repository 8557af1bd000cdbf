//! SDL2 and OpenGL application management.
//!
//! This module defines the [`App`] struct which encapsulates the SDL2
//! and OpenGL context necessary for creating a windowed application.

use std::sync::Arc;

use glow::HasContext;

use learngl_core::{ContextInitError, config::WindowConfig};

/// The [`App`] struct encapsulates the SDL2 and OpenGL context.
///
/// GPU resources hold a clone of [`App::gl`], so they must be dropped before the `App` that
/// owns the context.
pub struct App {
    pub sdl: sdl2::Sdl,
    pub video_subsystem: sdl2::VideoSubsystem,
    pub window: sdl2::video::Window,
    pub gl_context: sdl2::video::GLContext,
    pub gl: Arc<glow::Context>,
    pub event_pump: sdl2::EventPump,
}

impl App {
    /// Creates the window and a 3.3 core profile context. The width and height are ignored in
    /// fullscreen mode.
    pub fn new(config: &WindowConfig) -> Result<Self, ContextInitError> {
        Self::build(config, false)
    }

    /// Creates a small hidden window, for code that only needs a live context.
    #[cfg(test)]
    pub fn hidden() -> Result<Self, ContextInitError> {
        let config = WindowConfig {
            width: 64,
            height: 64,
            vsync: false,
            ..WindowConfig::default()
        };
        Self::build(&config, true)
    }

    fn build(config: &WindowConfig, hidden: bool) -> Result<Self, ContextInitError> {
        let sdl = sdl2::init().map_err(ContextInitError::Sdl)?;
        let video_subsystem = sdl.video().map_err(ContextInitError::Video)?;
        let gl_attr = video_subsystem.gl_attr();
        gl_attr.set_context_profile(sdl2::video::GLProfile::Core);
        gl_attr.set_context_version(3, 3);
        #[cfg(target_os = "macos")]
        gl_attr.set_context_flags().forward_compatible().set();

        let mut builder = video_subsystem.window(&config.title, config.width, config.height);
        builder.opengl().resizable().position_centered();
        if hidden {
            builder.hidden();
        }
        let mut window = builder
            .build()
            .map_err(|e| ContextInitError::Window(e.to_string()))?;
        if config.fullscreen {
            window
                .set_fullscreen(sdl2::video::FullscreenType::Desktop)
                .map_err(ContextInitError::Window)?;
        }

        let gl_context = window.gl_create_context().map_err(ContextInitError::GlContext)?;
        window
            .gl_make_current(&gl_context)
            .map_err(ContextInitError::GlContext)?;
        let interval = if config.vsync {
            sdl2::video::SwapInterval::VSync
        } else {
            sdl2::video::SwapInterval::Immediate
        };
        if let Err(e) = video_subsystem.gl_set_swap_interval(interval) {
            log::warn!("Could not set swap interval: {e}");
        }

        let gl = unsafe {
            glow::Context::from_loader_function(|s| {
                video_subsystem.gl_get_proc_address(s) as *const _
            })
        };
        let event_pump = sdl.event_pump().map_err(ContextInitError::EventPump)?;

        let (width, height) = window.drawable_size();
        log::info!(
            "Created {}x{} window with OpenGL {}.{}",
            width,
            height,
            gl.version().major,
            gl.version().minor
        );

        Ok(Self {
            sdl,
            video_subsystem,
            window,
            gl_context,
            gl: Arc::new(gl),
            event_pump,
        })
    }

    /// Width over height of the drawable area.
    pub fn aspect_ratio(&self) -> f32 {
        let (width, height) = self.window.drawable_size();
        width as f32 / height.max(1) as f32
    }

    /// Hides the pointer and reports relative motion only, for mouse look.
    pub fn set_mouse_grabbed(&self, grabbed: bool) {
        self.sdl.mouse().set_relative_mouse_mode(grabbed);
    }
}
