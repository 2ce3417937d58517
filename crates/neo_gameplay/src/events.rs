//! Gameplay events
//!
//! In: `PlayerInput` (input subsystem), `PlayerCommand` (other actors,
//! hitboxes, blueprints), `AnimNotify` (animation subsystem).
//! Out: `GameplayEffect` (animation/vfx/attach/spawn collaborators),
//! `EnemyAttackStarted` (hitbox collaborator).

use bevy::prelude::*;

use crate::animation::Montage;
use crate::components::WeaponType;
use crate::player::combo::AttackButton;

// ============================================================================
// Input
// ============================================================================

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum InputAction {
    /// Continuous stick/WASD value (x = right, y = forward)
    Move(Vec2),
    ToggleRun,
    Jump,
    Attack(AttackButton),
    PickUp,
}

#[derive(Event, Clone, Copy, Debug, PartialEq)]
pub struct PlayerInput {
    pub entity: Entity,
    pub action: InputAction,
}

// ============================================================================
// Commands
// ============================================================================

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum CommandKind {
    /// Enemy hit landed; `is_final_hit` = last step of the enemy combo
    TakeDamage { amount: f32, is_final_hit: bool },
    /// HP loss computed by an external damage rule
    ApplyHpLoss(f32),
    SetControl(bool),
    SetInvincibility(bool),
    SetAbsolutelyInvincible(bool),
    ContinuationCombo,
    ResetCombo,
}

#[derive(Event, Clone, Copy, Debug, PartialEq)]
pub struct PlayerCommand {
    pub entity: Entity,
    pub command: CommandKind,
}

// ============================================================================
// Animation notifies
// ============================================================================

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NotifyKind {
    ContinuationCombo,
    ResetCombo,
    /// Hit frame: enable the weapon hitbox
    SetCollision,
    SetInvincibility(bool),
    /// Death montage reached the floor
    SlowDownDeathAnimation,
    BossAttack1Combo,
    BossUltSpawn,
}

/// Animation notify fired on the mesh of `owner`.
#[derive(Event, Clone, Copy, Debug, PartialEq, Eq)]
pub struct AnimNotify {
    pub owner: Entity,
    pub kind: NotifyKind,
}

// ============================================================================
// Effects for collaborators
// ============================================================================

#[derive(Event, Clone, Debug, PartialEq)]
pub enum GameplayEffect {
    PlayMontage {
        entity: Entity,
        montage: Montage,
        asset_path: String,
        section: Option<&'static str>,
        play_rate: f32,
    },
    SetAnimationRate {
        entity: Entity,
        rate: f32,
    },
    SpawnHitEffect {
        entity: Entity,
        location: Vec3,
    },
    /// Aim assist: snap attack direction toward the nearest enemy
    CorrectAttackAngle {
        entity: Entity,
    },
    AttachWeapon {
        owner: Entity,
        weapon: Entity,
        weapon_type: WeaponType,
        socket: &'static str,
    },
    DetachWeapon {
        owner: Entity,
        weapon: Entity,
    },
    EnableWeaponCollision {
        owner: Entity,
        weapon: Entity,
    },
    RespawnPlayer {
        entity: Entity,
        remaining_lives: u32,
    },
    DestroyPlayer {
        entity: Entity,
    },
}

/// Enemy started a combo step against `target`.
#[derive(Event, Clone, Copy, Debug, PartialEq)]
pub struct EnemyAttackStarted {
    pub attacker: Entity,
    pub target: Entity,
    /// 1..=3
    pub step: u8,
    pub damage: f32,
    pub is_final_hit: bool,
}
