//! Billboard: background actors turn about Z toward the camera.

use bevy::prelude::*;

use crate::components::{CameraView, FaceCamera};

/// Yaw that points `from` at `to` (X forward), `None` if they share X/Y.
pub fn facing_yaw(from: Vec3, to: Vec3) -> Option<f32> {
    let delta = (to - from).truncate();
    if delta.length_squared() <= f32::EPSILON {
        return None;
    }
    Some(delta.y.atan2(delta.x))
}

/// System: rotate every `FaceCamera` actor toward `CameraView::location` (Update).
pub fn face_camera(camera: Res<CameraView>, mut query: Query<(&FaceCamera, &mut Transform)>) {
    for (billboard, mut transform) in query.iter_mut() {
        if let Some(yaw) = facing_yaw(transform.translation, camera.location) {
            transform.rotation = Quat::from_rotation_z(yaw + billboard.yaw_offset);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::FRAC_PI_2;

    #[test]
    fn test_faces_camera_location() {
        let mut app = App::new();
        app.insert_resource(CameraView {
            location: Vec3::new(0.0, -1000.0, 200.0),
            rotation: Quat::IDENTITY,
        });
        app.add_systems(Update, face_camera);

        let actor = app
            .world_mut()
            .spawn((FaceCamera::default(), Transform::from_xyz(0.0, 500.0, 0.0)))
            .id();
        app.update();

        let forward = app.world().get::<Transform>(actor).unwrap().rotation * Vec3::X;
        assert!((forward - Vec3::NEG_Y).length() < 1e-4);
    }

    #[test]
    fn test_yaw_offset_is_added() {
        let mut app = App::new();
        app.insert_resource(CameraView {
            location: Vec3::new(100.0, 0.0, 0.0),
            rotation: Quat::IDENTITY,
        });
        app.add_systems(Update, face_camera);

        let actor = app
            .world_mut()
            .spawn((FaceCamera { yaw_offset: FRAC_PI_2 }, Transform::default()))
            .id();
        app.update();

        let forward = app.world().get::<Transform>(actor).unwrap().rotation * Vec3::X;
        assert!((forward - Vec3::Y).length() < 1e-4);
    }

    #[test]
    fn test_actor_at_camera_keeps_rotation() {
        let rotation = Quat::from_rotation_z(1.0);
        let mut app = App::new();
        app.insert_resource(CameraView {
            location: Vec3::new(10.0, 10.0, 300.0),
            rotation: Quat::IDENTITY,
        });
        app.add_systems(Update, face_camera);

        let actor = app
            .world_mut()
            .spawn((
                FaceCamera::default(),
                Transform::from_xyz(10.0, 10.0, 0.0).with_rotation(rotation),
            ))
            .id();
        app.update();

        assert_eq!(app.world().get::<Transform>(actor).unwrap().rotation, rotation);
    }
}
