//! Tutorial stages and the per-frame transforms they animate.

use glam::{Mat4, Vec3};
use serde::Deserialize;

use crate::geometry::CUBE_POSITIONS;

/// The tutorial stages, in the order they build on each other.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StageKind {
    HelloTriangle,
    VertexColors,
    TexturedQuad,
    #[default]
    CameraCubes,
}

impl StageKind {
    pub const ALL: [StageKind; 4] = [
        StageKind::HelloTriangle,
        StageKind::VertexColors,
        StageKind::TexturedQuad,
        StageKind::CameraCubes,
    ];

    /// Maps the number keys 1 to 4 onto stages.
    pub fn from_number(n: u32) -> Option<Self> {
        n.checked_sub(1).and_then(|i| Self::ALL.get(i as usize).copied())
    }

    pub fn title(self) -> &'static str {
        match self {
            StageKind::HelloTriangle => "Hello Triangle",
            StageKind::VertexColors => "Vertex Colors",
            StageKind::TexturedQuad => "Textured Quad",
            StageKind::CameraCubes => "Camera",
        }
    }
}

/// Transform of the spinning quad: moved to the bottom right and rotated about z by `time`
/// radians.
pub fn spinning_quad_transform(time: f32) -> Mat4 {
    Mat4::from_translation(Vec3::new(0.5, -0.5, 0.0)) * Mat4::from_rotation_z(time)
}

/// Model matrix of the `index`th cube in the cube field. Each cube gets a fixed tilt of
/// 20 degrees times its index.
pub fn cube_model(index: usize) -> Mat4 {
    let position = CUBE_POSITIONS[index % CUBE_POSITIONS.len()];
    let angle = (20.0 * index as f32).to_radians();
    Mat4::from_translation(position)
        * Mat4::from_axis_angle(Vec3::new(1.0, 0.3, 0.5).normalize(), angle)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn number_keys_select_stages() {
        assert_eq!(StageKind::from_number(0), None);
        assert_eq!(StageKind::from_number(1), Some(StageKind::HelloTriangle));
        assert_eq!(StageKind::from_number(4), Some(StageKind::CameraCubes));
        assert_eq!(StageKind::from_number(5), None);
    }

    #[test]
    fn spinning_quad_moves_origin_to_bottom_right() {
        for time in [0.0, 1.0, 2.5, 10.0] {
            let origin = spinning_quad_transform(time).transform_point3(Vec3::ZERO);
            assert!(origin.abs_diff_eq(Vec3::new(0.5, -0.5, 0.0), 1e-5));
        }
        let quarter = spinning_quad_transform(std::f32::consts::FRAC_PI_2).transform_vector3(Vec3::X);
        assert!(quarter.abs_diff_eq(Vec3::Y, 1e-5));
    }

    #[test]
    fn first_cube_is_untransformed() {
        assert!(cube_model(0).abs_diff_eq(Mat4::IDENTITY, 1e-6));
        let third = cube_model(2).transform_point3(Vec3::ZERO);
        assert!(third.abs_diff_eq(CUBE_POSITIONS[2], 1e-6));
    }
}
