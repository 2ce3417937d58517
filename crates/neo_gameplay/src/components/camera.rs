//! Camera view (provided by the host every frame) and billboard marker.

use bevy::prelude::*;

/// Current gameplay camera pose.
///
/// Хост обновляет каждый кадр; движение игрока и billboard читают отсюда.
#[derive(Resource, Debug, Clone, Copy, PartialEq, Reflect)]
#[reflect(Resource)]
pub struct CameraView {
    pub location: Vec3,
    pub rotation: Quat,
}

impl Default for CameraView {
    fn default() -> Self {
        Self {
            location: Vec3::new(0.0, -1000.0, 200.0),
            rotation: Quat::IDENTITY,
        }
    }
}

impl CameraView {
    /// Yaw around +Z (radians).
    pub fn yaw(&self) -> f32 {
        let (yaw, _, _) = self.rotation.to_euler(EulerRot::ZYX);
        yaw
    }

    /// Camera X/Y axes flattened onto the ground plane: (right, forward).
    pub fn ground_axes(&self) -> (Vec3, Vec3) {
        let yaw = Quat::from_rotation_z(self.yaw());
        (yaw * Vec3::X, yaw * Vec3::Y)
    }

    /// Stick input → world direction on the ground plane (length ≤ 1).
    pub fn move_direction(&self, axis: Vec2) -> Vec3 {
        let (right, forward) = self.ground_axes();
        (right * axis.x + forward * axis.y).clamp_length_max(1.0)
    }
}

/// Actor turns about Z to face the camera every frame.
#[derive(Component, Debug, Clone, Copy, Default, PartialEq, Reflect)]
#[reflect(Component)]
pub struct FaceCamera {
    /// Added to the facing yaw (radians), for meshes authored off-axis
    pub yaw_offset: f32,
}
