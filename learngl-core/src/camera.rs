//! First person fly camera.
//!
//! The [`CameraController`] owns all camera and pointer state that the frame loop mutates, so
//! input handlers receive it explicitly instead of reaching for globals.

use glam::{Mat4, Vec3};

use crate::config::CameraConfig;

/// Pitch limit in degrees. Going past straight up/down flips the view.
pub const PITCH_LIMIT: f32 = 89.0;

/// Keys the camera understands.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CameraKey {
    Forward,
    Backward,
    Left,
    Right,
    Up,
    Down,
    Escape,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyState {
    Pressed,
    Released,
}

/// The current placement and lens of the camera. Angles are in degrees.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CameraState {
    pub position: Vec3,
    pub forward: Vec3,
    pub up: Vec3,
    pub yaw: f32,
    pub pitch: f32,
    pub fov: f32,
}

/// Computes the unit facing direction for the given yaw and pitch in degrees.
pub fn forward_from_angles(yaw: f32, pitch: f32) -> Vec3 {
    let (yaw, pitch) = (yaw.to_radians(), pitch.to_radians());
    Vec3::new(
        yaw.cos() * pitch.cos(),
        pitch.sin(),
        yaw.sin() * pitch.cos(),
    )
    .normalize()
}

pub struct CameraController {
    state: CameraState,
    speed: f32,
    sensitivity: f32,
    fov_range: (f32, f32),
    near: f32,
    far: f32,
    first_mouse: bool,
    should_close: bool,
}

impl CameraController {
    pub fn new(config: &CameraConfig) -> Self {
        let pitch = config.pitch.clamp(-PITCH_LIMIT, PITCH_LIMIT);
        let fov_range = (config.fov_min, config.fov_max);
        Self {
            state: CameraState {
                position: config.position(),
                forward: forward_from_angles(config.yaw, pitch),
                up: Vec3::Y,
                yaw: config.yaw,
                pitch,
                fov: config.fov.clamp(fov_range.0, fov_range.1),
            },
            speed: config.speed,
            sensitivity: config.sensitivity,
            fov_range,
            near: config.near,
            far: config.far,
            first_mouse: true,
            should_close: false,
        }
    }

    pub fn state(&self) -> &CameraState {
        &self.state
    }

    /// Whether escape was pressed. The frame loop decides when to actually stop.
    pub fn should_close(&self) -> bool {
        self.should_close
    }

    /// Applies one key for the current frame. Movement is scaled by `delta_time` so speed does not
    /// depend on the frame rate.
    pub fn on_key(&mut self, key: CameraKey, state: KeyState, delta_time: f32) {
        if state == KeyState::Released {
            return;
        }
        let step = self.speed * delta_time;
        let right = self.right();
        match key {
            CameraKey::Forward => self.state.position += self.state.forward * step,
            CameraKey::Backward => self.state.position -= self.state.forward * step,
            CameraKey::Left => self.state.position -= right * step,
            CameraKey::Right => self.state.position += right * step,
            CameraKey::Up => self.state.position += self.state.up * step,
            CameraKey::Down => self.state.position -= self.state.up * step,
            CameraKey::Escape => self.should_close = true,
        }
    }

    /// Applies a relative pointer motion. Positive `dy` means the pointer moved up the screen.
    ///
    /// The first sample after construction or [`reset_mouse`](Self::reset_mouse) only sets the
    /// baseline.
    pub fn on_mouse_move(&mut self, dx: f32, dy: f32) {
        if self.first_mouse {
            self.first_mouse = false;
            return;
        }
        self.rotate(dx, dy);
    }

    /// Re-arms the baseline so the next pointer sample does not jump the view.
    pub fn reset_mouse(&mut self) {
        self.first_mouse = true;
    }

    /// Zooms by narrowing or widening the field of view.
    pub fn on_scroll(&mut self, dy: f32) {
        let (min, max) = self.fov_range;
        self.state.fov = (self.state.fov - dy).clamp(min, max);
    }

    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(
            self.state.position,
            self.state.position + self.state.forward,
            self.state.up,
        )
    }

    pub fn projection_matrix(&self, aspect_ratio: f32) -> Mat4 {
        Mat4::perspective_rh_gl(self.state.fov.to_radians(), aspect_ratio, self.near, self.far)
    }

    fn right(&self) -> Vec3 {
        self.state.forward.cross(self.state.up).normalize()
    }

    fn rotate(&mut self, dx: f32, dy: f32) {
        self.state.yaw += dx * self.sensitivity;
        self.state.pitch = (self.state.pitch + dy * self.sensitivity).clamp(-PITCH_LIMIT, PITCH_LIMIT);
        self.state.forward = forward_from_angles(self.state.yaw, self.state.pitch);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 1e-5;

    fn controller() -> CameraController {
        CameraController::new(&CameraConfig::default())
    }

    /// A deterministic spread of deltas, including very large ones.
    fn deltas() -> impl Iterator<Item = (f32, f32)> {
        let mut seed: u32 = 0x9e37_79b9;
        (0..500).map(move |i| {
            seed ^= seed << 13;
            seed ^= seed >> 17;
            seed ^= seed << 5;
            let scale = if i % 7 == 0 { 100_000.0 } else { 500.0 };
            let dx = (seed % 2001) as f32 / 1000.0 - 1.0;
            let dy = ((seed >> 11) % 2001) as f32 / 1000.0 - 1.0;
            (dx * scale, dy * scale)
        })
    }

    #[test]
    fn initial_forward_faces_negative_z() {
        let forward = forward_from_angles(-90.0, 0.0);
        assert!(forward.abs_diff_eq(Vec3::new(0.0, 0.0, -1.0), EPSILON));
        assert!(controller().state().forward.abs_diff_eq(Vec3::NEG_Z, EPSILON));
    }

    #[test]
    fn pitch_stays_clamped() {
        let mut camera = controller();
        camera.on_mouse_move(0.0, 0.0);
        for (dx, dy) in deltas() {
            camera.on_mouse_move(dx, dy);
            let pitch = camera.state().pitch;
            assert!((-PITCH_LIMIT..=PITCH_LIMIT).contains(&pitch), "pitch {pitch}");
        }

        camera.on_mouse_move(0.0, 1.0e9);
        assert_eq!(camera.state().pitch, PITCH_LIMIT);
        camera.on_mouse_move(0.0, -1.0e9);
        assert_eq!(camera.state().pitch, -PITCH_LIMIT);
    }

    #[test]
    fn forward_stays_unit_length() {
        let mut camera = controller();
        for (dx, dy) in deltas() {
            camera.on_mouse_move(dx, dy);
            let length = camera.state().forward.length();
            assert!((length - 1.0).abs() < EPSILON, "length {length}");
        }
        assert!((camera.state().up.length() - 1.0).abs() < EPSILON);
    }

    #[test]
    fn first_mouse_sample_is_a_baseline() {
        let mut camera = controller();
        let before = *camera.state();
        camera.on_mouse_move(400.0, -250.0);
        assert_eq!(camera.state().yaw, before.yaw);
        assert_eq!(camera.state().pitch, before.pitch);

        camera.on_mouse_move(10.0, 0.0);
        assert!((camera.state().yaw - (before.yaw + 1.0)).abs() < EPSILON);

        camera.reset_mouse();
        let before = *camera.state();
        camera.on_mouse_move(-900.0, 900.0);
        assert_eq!(camera.state().yaw, before.yaw);
        assert_eq!(camera.state().pitch, before.pitch);
    }

    #[test]
    fn downward_motion_decreases_pitch() {
        let mut camera = controller();
        camera.on_mouse_move(0.0, 0.0);
        camera.on_mouse_move(0.0, -20.0);
        assert!((camera.state().pitch + 2.0).abs() < EPSILON);
        assert!(camera.state().forward.y < 0.0);
    }

    #[test]
    fn fov_stays_within_range() {
        let mut camera = controller();
        for (_, dy) in deltas() {
            camera.on_scroll(dy);
            let fov = camera.state().fov;
            assert!((1.0..=45.0).contains(&fov), "fov {fov}");
        }

        camera.on_scroll(-1000.0);
        assert_eq!(camera.state().fov, 45.0);
        camera.on_scroll(1000.0);
        assert_eq!(camera.state().fov, 1.0);
        camera.on_scroll(-2.5);
        assert_eq!(camera.state().fov, 3.5);
    }

    #[test]
    fn keys_move_along_camera_axes() {
        let mut camera = controller();
        let start = camera.state().position;

        camera.on_key(CameraKey::Forward, KeyState::Pressed, 0.5);
        let expected = start + Vec3::NEG_Z * 2.5 * 0.5;
        assert!(camera.state().position.abs_diff_eq(expected, EPSILON));

        camera.on_key(CameraKey::Right, KeyState::Pressed, 1.0);
        let expected = expected + Vec3::X * 2.5;
        assert!(camera.state().position.abs_diff_eq(expected, EPSILON));

        camera.on_key(CameraKey::Up, KeyState::Pressed, 1.0);
        let expected = expected + Vec3::Y * 2.5;
        assert!(camera.state().position.abs_diff_eq(expected, EPSILON));

        camera.on_key(CameraKey::Left, KeyState::Released, 1.0);
        assert!(camera.state().position.abs_diff_eq(expected, EPSILON));
    }

    #[test]
    fn escape_only_raises_the_flag() {
        let mut camera = controller();
        let start = *camera.state();
        assert!(!camera.should_close());
        camera.on_key(CameraKey::Escape, KeyState::Pressed, 0.016);
        assert!(camera.should_close());
        assert_eq!(*camera.state(), start);
    }

    #[test]
    fn view_matrix_maps_the_target_onto_negative_z() {
        let camera = controller();
        let state = camera.state();
        let target = camera
            .view_matrix()
            .transform_point3(state.position + state.forward * 2.0);
        assert!(target.abs_diff_eq(Vec3::new(0.0, 0.0, -2.0), EPSILON));
    }

    #[test]
    fn projection_follows_fov() {
        let mut camera = controller();
        let wide = camera.projection_matrix(4.0 / 3.0);
        camera.on_scroll(20.0);
        let narrow = camera.projection_matrix(4.0 / 3.0);
        // A narrower field of view scales x and y up.
        assert!(narrow.x_axis.x > wide.x_axis.x);
        assert!(narrow.y_axis.y > wide.y_axis.y);
        assert!(!wide.is_nan());
    }
}
