//! Player control marker component
//!
//! Отмечает entity которым управляет игрок через input (в отличие от AI).

use bevy::prelude::*;

use super::WeaponType;

/// Marker component для player-controlled entity
///
/// Enemy AI ищет цели через `With<Player>`.
/// `default_weapon`: оружие, с которым игрок появляется (spawn и respawn).
#[derive(Component, Debug, Clone, Copy, Default, Reflect)]
#[reflect(Component)]
pub struct Player {
    pub default_weapon: WeaponType,
}
