//! Kinematic движение без физики
//!
//! - ground_detection: Z-проверка против пола из config
//! - advance_jumps: синусная дуга прыжка (player)
//! - integrate_movement: direction * speed * dt → Transform
//!
//! Коллизии и root motion остаются на стороне хоста.

use bevy::prelude::*;

use crate::components::{Grounded, JumpState, MovementInput, MovementSpeed, Player};
use crate::config::GameplayConfig;

/// System: grounded если Z у пола (floor height + tolerance)
pub fn ground_detection(
    mut query: Query<(&Transform, &mut Grounded)>,
    config: Res<GameplayConfig>,
) {
    let floor = config.ground_height + config.ground_tolerance;

    for (transform, mut grounded) in query.iter_mut() {
        let on_ground = transform.translation.z <= floor;
        if grounded.0 != on_ground {
            grounded.0 = on_ground;
        }
    }
}

/// System: one frame of every running jump arc.
pub fn advance_jumps(
    mut query: Query<(Entity, &mut JumpState, &Grounded, &mut Transform), With<Player>>,
    config: Res<GameplayConfig>,
) {
    for (entity, mut jump, grounded, mut transform) in query.iter_mut() {
        if !jump.is_jumping {
            continue;
        }

        let Some(z) = jump.advance(config.player.jump_height, grounded.0) else {
            continue;
        };
        transform.translation.z = z;

        if !jump.is_jumping {
            crate::logger::log(&format!(
                "🦶 Landed after {} frames (entity: {:?}, z: {:.1})",
                jump.frame, entity, z
            ));
        }
    }
}

/// System: horizontal movement (X/Y) from `MovementInput`.
///
/// Player input is consumed each tick; enemy AI rewrites its direction itself.
pub fn integrate_movement(
    mut query: Query<(&mut MovementInput, &MovementSpeed, &mut Transform, Has<Player>)>,
    time: Res<Time<Fixed>>,
) {
    let delta = time.delta_secs();

    for (mut input, speed, mut transform, is_player) in query.iter_mut() {
        let planar = Vec3::new(input.direction.x, input.direction.y, 0.0);
        if planar.length_squared() > 0.0 {
            transform.translation += planar * speed.current() * delta;
        }

        if is_player && input.direction != Vec3::ZERO {
            input.direction = Vec3::ZERO;
        }
    }
}
