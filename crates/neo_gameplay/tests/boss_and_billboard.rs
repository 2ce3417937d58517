//! Boss notifies + billboard через полный GameplayPlugin

use std::f32::consts::FRAC_PI_2;

use bevy::prelude::*;
use neo_gameplay::*;

fn create_app() -> App {
    let mut app = create_headless_app(42);
    app.add_plugins(GameplayPlugin);
    app
}

#[test]
fn test_boss_notifies_flip_flags() {
    let mut app = create_app();
    let boss = spawn_boss(&mut app.world_mut().commands(), Vec3::new(800.0, 0.0, 0.0));
    app.world_mut().flush();
    app.update();

    app.world_mut().send_event(AnimNotify {
        owner: boss,
        kind: NotifyKind::BossAttack1Combo,
    });
    app.world_mut().send_event(AnimNotify {
        owner: boss,
        kind: NotifyKind::BossUltSpawn,
    });
    app.update();

    let flags = *app.world().get::<Boss>(boss).unwrap();
    assert!(flags.stop_after_first_combo);
    assert!(flags.ult_spawn);

    // player notify на боссе: warning, ничего не меняется
    app.world_mut().send_event(AnimNotify {
        owner: boss,
        kind: NotifyKind::ResetCombo,
    });
    app.update();
    assert_eq!(*app.world().get::<Boss>(boss).unwrap(), flags);
}

#[test]
fn test_billboard_tracks_camera() {
    let mut app = create_app();
    let actor = spawn_billboard(&mut app.world_mut().commands(), Vec3::ZERO, 0.0);
    app.world_mut().flush();

    app.world_mut().resource_mut::<CameraView>().location = Vec3::new(0.0, 500.0, 200.0);
    app.update();

    let rotation = app.world().get::<Transform>(actor).unwrap().rotation;
    let forward = rotation * Vec3::X;
    assert!((forward - Vec3::Y).length() < 1e-4, "forward = {:?}", forward);

    // камера ушла влево → actor разворачивается следом
    app.world_mut().resource_mut::<CameraView>().location = Vec3::new(-500.0, 0.0, 200.0);
    app.update();

    let rotation = app.world().get::<Transform>(actor).unwrap().rotation;
    let yaw = rotation.to_euler(EulerRot::ZYX).0;
    assert!((yaw.abs() - 2.0 * FRAC_PI_2).abs() < 1e-4, "yaw = {}", yaw);
}
