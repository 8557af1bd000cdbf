//! One triangle whose corner colors are interpolated across its face.

use glow::HasContext;
use learngl_core::{StageKind, geometry};

use crate::{
    abs::{App, Mesh, ShaderProgram},
    embedded_shader,
    error::StageError,
    other::UpdateContext,
    render::Loader,
};

pub struct VertexColors {
    program: Option<ShaderProgram>,
    mesh: Mesh,
    clear_color: [f32; 4],
}

impl VertexColors {
    pub fn new(loader: &Loader) -> Result<Self, StageError> {
        Ok(Self {
            program: loader.program("vertex_color", embedded_shader!(vertex_color))?,
            mesh: loader.mesh(&geometry::colored_triangle()?)?,
            clear_color: loader.config().clear_color,
        })
    }
}

impl super::Scene for VertexColors {
    fn kind(&self) -> StageKind {
        StageKind::VertexColors
    }

    fn update(&mut self, ctx: &UpdateContext, _app: &App) -> super::SceneSwitch {
        super::quit_on_escape(ctx)
    }

    fn render(&mut self, gl: &glow::Context) {
        let [r, g, b, a] = self.clear_color;
        unsafe {
            gl.disable(glow::DEPTH_TEST);
            gl.clear_color(r, g, b, a);
            gl.clear(glow::COLOR_BUFFER_BIT);
        }

        if let Some(program) = &self.program {
            program.use_program();
            self.mesh.draw();
        }
    }
}
