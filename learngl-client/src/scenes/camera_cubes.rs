//! A field of textured cubes explored with a fly camera.
//!
//! Mouse look uses relative mouse mode, so the pointer is hidden while this stage is active. The
//! scroll wheel zooms and escape quits.

use glow::HasContext;
use learngl_core::{
    CameraController, KeyState, StageKind,
    geometry::{self, CUBE_POSITIONS},
    scene::cube_model,
};

use crate::{
    abs::{App, Mesh, ShaderProgram, Texture, unbind_texture},
    embedded_shader,
    error::StageError,
    other::{UpdateContext, camera_key},
    render::Loader,
};

const MIX: f32 = 0.2;

pub struct CameraCubes {
    program: Option<ShaderProgram>,
    mesh: Mesh,
    textures: [Option<Texture>; 2],
    camera: CameraController,
    aspect_ratio: f32,
    clear_color: [f32; 4],
}

impl CameraCubes {
    pub fn new(loader: &Loader) -> Result<Self, StageError> {
        let config = loader.config();
        let program = loader.program("cube", embedded_shader!(cube))?;
        if let Some(program) = &program {
            program.use_program();
            program.set_uniform("u_texture1", 0);
            program.set_uniform("u_texture2", 1);
            program.set_uniform("u_mix", MIX);
        }
        Ok(Self {
            program,
            mesh: loader.mesh(&geometry::textured_cube()?)?,
            textures: [
                loader.texture(&config.textures.container)?,
                loader.texture(&config.textures.face)?,
            ],
            camera: CameraController::new(&config.camera),
            aspect_ratio: config.window.width as f32 / config.window.height.max(1) as f32,
            clear_color: config.clear_color,
        })
    }
}

impl super::Scene for CameraCubes {
    fn kind(&self) -> StageKind {
        StageKind::CameraCubes
    }

    fn activate(&mut self, app: &App) {
        app.set_mouse_grabbed(true);
        self.camera.reset_mouse();
    }

    fn update(&mut self, ctx: &UpdateContext, _app: &App) -> super::SceneSwitch {
        self.aspect_ratio = ctx.aspect_ratio;

        let keyboard = ctx.keyboard;
        for (keys, state) in [
            (&keyboard.down, KeyState::Pressed),
            (&keyboard.released, KeyState::Released),
        ] {
            for key in keys.iter().filter_map(|&keycode| camera_key(keycode)) {
                self.camera.on_key(key, state, ctx.delta_time);
            }
        }

        // SDL reports y growing down the screen.
        let delta = ctx.mouse.delta;
        if delta != glam::Vec2::ZERO {
            self.camera.on_mouse_move(delta.x, -delta.y);
        }
        if ctx.mouse.scroll_delta.y != 0.0 {
            self.camera.on_scroll(ctx.mouse.scroll_delta.y);
        }

        if self.camera.should_close() {
            super::SceneSwitch::Quit
        } else {
            super::SceneSwitch::None
        }
    }

    fn render(&mut self, gl: &glow::Context) {
        let [r, g, b, a] = self.clear_color;
        unsafe {
            gl.enable(glow::DEPTH_TEST);
            gl.clear_color(r, g, b, a);
            gl.clear(glow::COLOR_BUFFER_BIT | glow::DEPTH_BUFFER_BIT);
        }

        let Some(program) = &self.program else {
            return;
        };
        for (unit, texture) in self.textures.iter().enumerate() {
            match texture {
                Some(texture) => texture.bind(unit as u32),
                None => unbind_texture(gl, unit as u32),
            }
        }
        program.use_program();
        program.set_uniform("u_view", self.camera.view_matrix());
        program.set_uniform("u_projection", self.camera.projection_matrix(self.aspect_ratio));
        for index in 0..CUBE_POSITIONS.len() {
            program.set_uniform("u_model", cube_model(index));
            self.mesh.draw();
        }
    }
}
