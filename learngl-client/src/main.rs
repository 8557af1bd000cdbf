use std::time::Instant;

use glow::HasContext;
use learngl_core::{Config, FrameClock, StageKind};

use crate::{
    abs::App,
    error::AppError,
    other::{InputState, UpdateContext, number_key},
    render::Loader,
    scenes::{SceneManager, build_stage},
};

mod abs;
mod error;
mod logging;
mod other;
mod render;
mod scenes;

const CONFIG_JSON: &str = include_str!("../assets/config.json");

/// Embeds `render/shaders/<name>/{vert,frag}.glsl` as [`learngl_core::ShaderSources`].
#[macro_export]
macro_rules! embedded_shader {
    ($name:ident) => {
        learngl_core::ShaderSources::new(
            include_str!(concat!(
                env!("CARGO_MANIFEST_DIR"),
                "/src/render/shaders/",
                stringify!($name),
                "/vert.glsl"
            )),
            include_str!(concat!(
                env!("CARGO_MANIFEST_DIR"),
                "/src/render/shaders/",
                stringify!($name),
                "/frag.glsl"
            )),
        )
    };
}

fn main() {
    if let Err(e) = run() {
        match e {
            AppError::Logger(_) => eprintln!("error: {e}"),
            _ => log::error!("{e}"),
        }
        std::process::exit(-1);
    }
}

fn run() -> Result<(), AppError> {
    let config = Config::from_json(CONFIG_JSON);
    logging::init(
        config
            .as_ref()
            .map_or(log::LevelFilter::Info, |config| config.log_level),
    )?;
    let config = config?;

    let mut app = App::new(&config.window)?;
    let mut scene_manager = {
        let loader = Loader::new(&app.gl, &config);
        let scene = build_stage(config.stage, &loader)?;
        SceneManager::new(&app, scene)
    };
    set_title(&mut app, &config, scene_manager.kind());

    let mut input = InputState::default();
    let mut clock = FrameClock::new();

    'running: loop {
        let delta_time = clock.tick(Instant::now());

        input.begin_frame();
        for event in app.event_pump.poll_iter() {
            input.handle_event(&event);
            scene_manager.handle_event(&event);
            match event {
                sdl2::event::Event::Quit { .. } => break 'running,
                sdl2::event::Event::Window {
                    win_event: sdl2::event::WindowEvent::SizeChanged(..),
                    ..
                } => {
                    let (width, height) = app.window.drawable_size();
                    unsafe {
                        app.gl.viewport(0, 0, width as i32, height as i32);
                    }
                }
                _ => {}
            }
        }

        let requested = input
            .keyboard
            .pressed
            .iter()
            .find_map(|&keycode| number_key(keycode).and_then(StageKind::from_number));
        if let Some(kind) = requested.filter(|&kind| kind != scene_manager.kind()) {
            let loader = Loader::new(&app.gl, &config);
            let scene = build_stage(kind, &loader)?;
            scene_manager.replace(&app, scene);
            set_title(&mut app, &config, kind);
        }

        let ctx = UpdateContext::new(&input, delta_time, clock.elapsed(), app.aspect_ratio());
        if !scene_manager.update(&ctx, &app) {
            break 'running;
        }

        scene_manager.render(&app.gl);
        app.window.gl_swap_window();
    }

    log::info!("Shutting down");
    Ok(())
}

fn set_title(app: &mut App, config: &Config, kind: StageKind) {
    let title = format!("{} - {}", config.window.title, kind.title());
    if let Err(e) = app.window.set_title(&title) {
        log::warn!("Could not set window title: {e}");
    }
}
