//! Enemy components: kind tag and approach/attack AI state.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// Вид рядового врага (отличаются только тюнингом)
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Reflect, Serialize, Deserialize)]
pub enum EnemyKind {
    Soldier,
    Lancer,
}

#[derive(Component, Debug, Clone, Copy, PartialEq, Eq, Reflect)]
#[reflect(Component)]
pub struct Enemy {
    pub kind: EnemyKind,
}

/// AI state of a melee enemy (transitions live in `enemy::approach`).
///
/// Инвариант: `combo_counter ∈ {0, 1, 2}`; пока `on_cooldown`, новых атак нет.
#[derive(Component, Debug, Clone, PartialEq, Reflect)]
#[reflect(Component)]
pub struct EnemyAIState {
    /// Fixed-clock time of the last combo step (seconds)
    pub last_attack_time: f32,
    pub attack_cooldown: f32,
    /// Combo steps already delivered in the current chain
    pub combo_counter: u8,
    pub on_cooldown: bool,
    pub desired_distance: f32,
    /// Wander target while no player is around
    pub patrol_target: Option<Vec3>,
}
