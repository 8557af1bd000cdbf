//! Two flat colored triangles, each with its own buffer and program.

use glow::HasContext;
use learngl_core::{StageKind, geometry};

use crate::{
    abs::{App, Mesh, ShaderProgram},
    embedded_shader,
    error::StageError,
    other::UpdateContext,
    render::Loader,
};

pub struct HelloTriangle {
    orange: Option<ShaderProgram>,
    yellow: Option<ShaderProgram>,
    meshes: [Mesh; 2],
    clear_color: [f32; 4],
}

impl HelloTriangle {
    pub fn new(loader: &Loader) -> Result<Self, StageError> {
        let [left, right] = geometry::two_triangles()?;
        Ok(Self {
            orange: loader.program("orange", embedded_shader!(orange))?,
            yellow: loader.program("yellow", embedded_shader!(yellow))?,
            meshes: [loader.mesh(&left)?, loader.mesh(&right)?],
            clear_color: loader.config().clear_color,
        })
    }
}

impl super::Scene for HelloTriangle {
    fn kind(&self) -> StageKind {
        StageKind::HelloTriangle
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

        for (program, mesh) in [&self.orange, &self.yellow].into_iter().zip(&self.meshes) {
            // A program that failed to build leaves its triangle undrawn.
            if let Some(program) = program {
                program.use_program();
                mesh.draw();
            }
        }
    }
}
