//! Spawn helpers: player, enemies, weapons, boss.
//!
//! Создают entity с полным набором компонентов; ассеты (меши, монтажи)
//! подключает хост по `GameplayEffect`.

use bevy::prelude::*;

use crate::components::{
    Boss, CombatState, Enemy, EnemyAIState, EnemyKind, Facing, FaceCamera, Grounded, Health,
    HeldWeapon, JumpState, MovementInput, MovementSpeed, Player, WeaponItem, WeaponType,
};
use crate::config::GameplayConfig;
use crate::events::GameplayEffect;

/// Player with its default weapon already in hand (when it has one).
pub fn spawn_player(
    commands: &mut Commands,
    position: Vec3,
    default_weapon: WeaponType,
    config: &GameplayConfig,
) -> Entity {
    let status = &config.player;

    let player = commands
        .spawn((
            Transform::from_translation(position),
            Player { default_weapon },
            Health::new(status.hp, status.remaining_lives),
            CombatState::new(default_weapon, status.weapon_drop_limit),
            HeldWeapon::empty(),
            MovementInput::default(),
            MovementSpeed {
                walk: status.walk_speed,
                run: status.run_speed,
                is_running: false,
            },
            Facing::default(),
            JumpState::default(),
            Grounded(true),
        ))
        .id();

    let Some(socket) = default_weapon.socket_name() else {
        return player;
    };

    let weapon = commands
        .spawn((
            WeaponItem {
                weapon_type: default_weapon,
                held_by: Some(player),
            },
            Transform::from_translation(position),
        ))
        .id();
    commands.entity(player).insert(HeldWeapon::holding(weapon));
    commands.send_event(GameplayEffect::AttachWeapon {
        owner: player,
        weapon,
        weapon_type: default_weapon,
        socket,
    });

    player
}

/// Soldier or lancer with AI state taken from its tuning.
pub fn spawn_enemy(
    commands: &mut Commands,
    kind: EnemyKind,
    position: Vec3,
    config: &GameplayConfig,
) -> Entity {
    let tuning = config.enemy(kind);

    commands
        .spawn((
            Transform::from_translation(position),
            Enemy { kind },
            EnemyAIState::from_tuning(tuning),
            MovementInput::default(),
            MovementSpeed::walking(tuning.movement_speed),
            Grounded(true),
        ))
        .id()
}

/// Weapon lying on the ground.
pub fn spawn_weapon(commands: &mut Commands, weapon_type: WeaponType, position: Vec3) -> Entity {
    commands
        .spawn((
            WeaponItem::lying(weapon_type),
            Transform::from_translation(position),
        ))
        .id()
}

pub fn spawn_boss(commands: &mut Commands, position: Vec3) -> Entity {
    commands
        .spawn((Transform::from_translation(position), Boss::default()))
        .id()
}

/// Background actor that always faces the camera.
pub fn spawn_billboard(commands: &mut Commands, position: Vec3, yaw_offset: f32) -> Entity {
    commands
        .spawn((Transform::from_translation(position), FaceCamera { yaw_offset }))
        .id()
}
