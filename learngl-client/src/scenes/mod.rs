//! Module providing the `Scene` trait and all scene implementations.
//!
//! Every tutorial stage is a scene. The [`SceneManager`] runs exactly one of them and swaps it
//! out when asked.

use learngl_core::StageKind;

use crate::{abs::App, error::StageError, other::UpdateContext, render::Loader};

pub mod camera_cubes;
pub mod hello_triangle;
pub mod textured_quad;
pub mod vertex_colors;

pub enum SceneSwitch {
    None,
    Quit,
}

/// The Scene trait defines the common interface for all tutorial stages.
pub trait Scene {
    fn kind(&self) -> StageKind;

    /// Called when the scene becomes the active one.
    fn activate(&mut self, _app: &App) {}

    /// Handles an event.
    fn handle_event(&mut self, _event: &sdl2::event::Event) {}

    /// Updates the scene state.
    fn update(&mut self, _ctx: &UpdateContext, _app: &App) -> SceneSwitch {
        SceneSwitch::None
    }

    /// Renders the scene.
    fn render(&mut self, gl: &glow::Context);
}

/// Builds the scene for a stage.
pub fn build_stage(kind: StageKind, loader: &Loader) -> Result<Box<dyn Scene>, StageError> {
    log::info!("Building stage {:?}", kind);
    Ok(match kind {
        StageKind::HelloTriangle => Box::new(hello_triangle::HelloTriangle::new(loader)?),
        StageKind::VertexColors => Box::new(vertex_colors::VertexColors::new(loader)?),
        StageKind::TexturedQuad => Box::new(textured_quad::TexturedQuad::new(loader)?),
        StageKind::CameraCubes => Box::new(camera_cubes::CameraCubes::new(loader)?),
    })
}

/// Owns the active scene.
pub struct SceneManager {
    scene: Box<dyn Scene>,
}

impl SceneManager {
    pub fn new(app: &App, mut scene: Box<dyn Scene>) -> Self {
        scene.activate(app);
        Self { scene }
    }

    pub fn kind(&self) -> StageKind {
        self.scene.kind()
    }

    /// Drops the current scene, releasing its GPU resources, and activates `scene`.
    pub fn replace(&mut self, app: &App, mut scene: Box<dyn Scene>) {
        app.set_mouse_grabbed(false);
        scene.activate(app);
        self.scene = scene;
    }

    /// Handles an event by passing it to the current scene.
    pub fn handle_event(&mut self, event: &sdl2::event::Event) {
        self.scene.handle_event(event);
    }

    /// Updates the current scene. Returns `false` once the scene asks to quit.
    pub fn update(&mut self, ctx: &UpdateContext, app: &App) -> bool {
        match self.scene.update(ctx, app) {
            SceneSwitch::None => true,
            SceneSwitch::Quit => false,
        }
    }

    /// Renders the current scene.
    pub fn render(&mut self, gl: &glow::Context) {
        self.scene.render(gl);
    }
}

/// Escape quits every stage that does not handle it itself.
fn quit_on_escape(ctx: &UpdateContext) -> SceneSwitch {
    if ctx.keyboard.pressed.contains(&sdl2::keyboard::Keycode::Escape) {
        SceneSwitch::Quit
    } else {
        SceneSwitch::None
    }
}
