//! An indexed quad blending two textures, spinning about its own center.

use glam::Mat4;
use glow::HasContext;
use learngl_core::{StageKind, geometry, scene::spinning_quad_transform};

use crate::{
    abs::{App, Mesh, ShaderProgram, Texture, unbind_texture},
    embedded_shader,
    error::StageError,
    other::UpdateContext,
    render::Loader,
};

/// How much of the second texture shows through.
const MIX: f32 = 0.2;

pub struct TexturedQuad {
    program: Option<ShaderProgram>,
    mesh: Mesh,
    textures: [Option<Texture>; 2],
    transform: Mat4,
    clear_color: [f32; 4],
}

impl TexturedQuad {
    pub fn new(loader: &Loader) -> Result<Self, StageError> {
        let textures = &loader.config().textures;
        let program = loader.program("textured_quad", embedded_shader!(textured_quad))?;
        if let Some(program) = &program {
            program.use_program();
            program.set_uniform("u_texture1", 0);
            program.set_uniform("u_texture2", 1);
            program.set_uniform("u_mix", MIX);
        }
        Ok(Self {
            program,
            mesh: loader.mesh(&geometry::textured_quad()?)?,
            textures: [
                loader.texture(&textures.container)?,
                loader.texture(&textures.face)?,
            ],
            transform: spinning_quad_transform(0.0),
            clear_color: loader.config().clear_color,
        })
    }
}

impl super::Scene for TexturedQuad {
    fn kind(&self) -> StageKind {
        StageKind::TexturedQuad
    }

    fn update(&mut self, ctx: &UpdateContext, _app: &App) -> super::SceneSwitch {
        self.transform = spinning_quad_transform(ctx.time);
        super::quit_on_escape(ctx)
    }

    fn render(&mut self, gl: &glow::Context) {
        let [r, g, b, a] = self.clear_color;
        unsafe {
            gl.disable(glow::DEPTH_TEST);
            gl.clear_color(r, g, b, a);
            gl.clear(glow::COLOR_BUFFER_BIT);
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
        program.set_uniform("u_transform", self.transform);
        self.mesh.draw();
    }
}
