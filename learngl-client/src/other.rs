use std::collections::HashSet;

use glam::Vec2;
use learngl_core::CameraKey;
use sdl2::{event::Event, keyboard::Keycode};

/// The current state of the keyboard.
#[derive(Default)]
pub struct KeyboardState {
    pub down: HashSet<Keycode>,
    pub pressed: HashSet<Keycode>,
    pub released: HashSet<Keycode>,
}

/// Mouse motion gathered over one frame.
#[derive(Default)]
pub struct MouseState {
    /// Relative motion in window coordinates, y pointing down.
    pub delta: Vec2,
    pub scroll_delta: Vec2,
}

/// Input gathered from the event queue, reset at the start of each frame.
#[derive(Default)]
pub struct InputState {
    pub keyboard: KeyboardState,
    pub mouse: MouseState,
}

impl InputState {
    /// Clears the per-frame edges. Held keys persist.
    pub fn begin_frame(&mut self) {
        self.keyboard.pressed.clear();
        self.keyboard.released.clear();
        self.mouse.delta = Vec2::ZERO;
        self.mouse.scroll_delta = Vec2::ZERO;
    }

    pub fn handle_event(&mut self, event: &Event) {
        match *event {
            Event::MouseMotion { xrel, yrel, .. } => self.mouse_motion(xrel, yrel),
            Event::MouseWheel { x, y, .. } => {
                self.mouse.scroll_delta += Vec2::new(x as f32, y as f32);
            }
            Event::KeyDown {
                keycode: Some(keycode),
                repeat,
                ..
            } => self.key_down(keycode, repeat),
            Event::KeyUp {
                keycode: Some(keycode),
                ..
            } => self.key_up(keycode),
            _ => {}
        }
    }

    fn mouse_motion(&mut self, xrel: i32, yrel: i32) {
        self.mouse.delta += Vec2::new(xrel as f32, yrel as f32);
    }

    fn key_down(&mut self, keycode: Keycode, repeat: bool) {
        if repeat {
            return;
        }
        self.keyboard.down.insert(keycode);
        self.keyboard.pressed.insert(keycode);
    }

    fn key_up(&mut self, keycode: Keycode) {
        self.keyboard.down.remove(&keycode);
        self.keyboard.released.insert(keycode);
    }
}

/// Context handed to scenes during the update phase.
pub struct UpdateContext<'a> {
    pub keyboard: &'a KeyboardState,
    pub mouse: &'a MouseState,
    pub delta_time: f32,
    /// Seconds since the loop started.
    pub time: f32,
    pub aspect_ratio: f32,
}

impl<'a> UpdateContext<'a> {
    pub fn new(input: &'a InputState, delta_time: f32, time: f32, aspect_ratio: f32) -> Self {
        Self {
            keyboard: &input.keyboard,
            mouse: &input.mouse,
            delta_time,
            time,
            aspect_ratio,
        }
    }
}

/// WASD to move, space and left shift to rise and sink, escape to quit.
pub fn camera_key(keycode: Keycode) -> Option<CameraKey> {
    match keycode {
        Keycode::W => Some(CameraKey::Forward),
        Keycode::S => Some(CameraKey::Backward),
        Keycode::A => Some(CameraKey::Left),
        Keycode::D => Some(CameraKey::Right),
        Keycode::Space => Some(CameraKey::Up),
        Keycode::LShift => Some(CameraKey::Down),
        Keycode::Escape => Some(CameraKey::Escape),
        _ => None,
    }
}

/// The number printed on a number row key.
pub fn number_key(keycode: Keycode) -> Option<u32> {
    match keycode {
        Keycode::Num1 => Some(1),
        Keycode::Num2 => Some(2),
        Keycode::Num3 => Some(3),
        Keycode::Num4 => Some(4),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn held_keys_survive_frames_but_edges_do_not() {
        let mut input = InputState::default();
        input.key_down(Keycode::W, false);
        input.key_down(Keycode::W, true);
        assert!(input.keyboard.down.contains(&Keycode::W));
        assert!(input.keyboard.pressed.contains(&Keycode::W));

        input.begin_frame();
        assert!(input.keyboard.down.contains(&Keycode::W));
        assert!(input.keyboard.pressed.is_empty());

        input.key_up(Keycode::W);
        assert!(input.keyboard.down.is_empty());
        assert!(input.keyboard.released.contains(&Keycode::W));
    }

    #[test]
    fn repeats_are_not_new_presses() {
        let mut input = InputState::default();
        input.key_down(Keycode::S, true);
        assert!(input.keyboard.down.is_empty());
        assert!(input.keyboard.pressed.is_empty());
    }

    #[test]
    fn mouse_motion_accumulates_within_a_frame() {
        let mut input = InputState::default();
        input.mouse_motion(3, -1);
        input.mouse_motion(2, 4);
        assert_eq!(input.mouse.delta, Vec2::new(5.0, 3.0));
        input.begin_frame();
        assert_eq!(input.mouse.delta, Vec2::ZERO);
    }

    #[test]
    fn key_mapping() {
        assert_eq!(camera_key(Keycode::W), Some(CameraKey::Forward));
        assert_eq!(camera_key(Keycode::LShift), Some(CameraKey::Down));
        assert_eq!(camera_key(Keycode::Escape), Some(CameraKey::Escape));
        assert_eq!(camera_key(Keycode::Q), None);
        assert_eq!(number_key(Keycode::Num3), Some(3));
        assert_eq!(number_key(Keycode::Num9), None);
    }
}
