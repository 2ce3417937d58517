//! Tuning data: player status, enemy tuning, global gameplay constants.
//!
//! Defaults reproduce the shipped tuning. Designers override them with a JSON
//! file; missing fields fall back to the defaults (`#[serde(default)]`).

use std::path::Path;

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::components::EnemyKind;
use crate::error::{GameplayError, GameplayResult};

/// Player status block (HP, lives, invincibility windows, jump, speeds).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Reflect)]
#[serde(default)]
pub struct PlayerStatus {
    pub hp: f32,
    pub remaining_lives: u32,
    /// Hits a weapon survives before it is knocked out of the hand
    pub weapon_drop_limit: i32,
    /// Base damage of the first combo section
    pub damage_amount: f32,
    pub invincibility_time_short: f32,
    pub invincibility_time_long: f32,
    pub combo_damage_factor: f32,
    pub jump_height: f32,
    pub walk_speed: f32,
    pub run_speed: f32,
    /// Death montage play rate once the body hits the floor (1.0 = normal)
    pub dead_anim_rate: f32,
    /// Seconds between death and respawn / game over
    pub dead_to_game_over_time: f32,
}

impl Default for PlayerStatus {
    fn default() -> Self {
        Self {
            hp: 100.0,
            remaining_lives: 2,
            weapon_drop_limit: 2,
            damage_amount: 10.0,
            invincibility_time_short: 0.3,
            invincibility_time_long: 0.5,
            combo_damage_factor: 1.0,
            jump_height: 150.0,
            walk_speed: 500.0,
            run_speed: 1500.0,
            dead_anim_rate: 0.01,
            dead_to_game_over_time: 3.0,
        }
    }
}

/// Melee enemy tuning (soldier / lancer).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Reflect)]
#[serde(default)]
pub struct EnemyTuning {
    /// Approach stops once the player is this close
    pub desired_distance: f32,
    pub movement_speed: f32,
    /// Seconds between two combo steps
    pub attack_cooldown: f32,
    /// Seconds of rest after the third combo step
    pub combo_cooldown: f32,
    /// Max |Δy| for the attack lane check
    pub attack_axis_tolerance: f32,
    /// Max horizontal distance for an attack to start
    pub attack_range: f32,
    /// Damage per combo step 1/2/3
    pub combo_damage: [f32; 3],
}

impl Default for EnemyTuning {
    fn default() -> Self {
        Self {
            desired_distance: 100.0,
            movement_speed: 100.0,
            attack_cooldown: 1.0,
            combo_cooldown: 3.0,
            attack_axis_tolerance: 50.0,
            attack_range: 150.0,
            combo_damage: [5.0, 10.0, 15.0],
        }
    }
}

/// Top-level tuning resource.
#[derive(Resource, Debug, Clone, PartialEq, Serialize, Deserialize, Reflect)]
#[reflect(Resource)]
#[serde(default)]
pub struct GameplayConfig {
    pub player: PlayerStatus,
    pub soldier: EnemyTuning,
    pub lancer: EnemyTuning,
    /// Seconds after the last combo section before the combo resets
    pub combo_cooldown: f32,
    /// Max distance to a weapon for the pick-up action
    pub pickup_radius: f32,
    /// Floor height for ground detection
    pub ground_height: f32,
    pub ground_tolerance: f32,
}

impl Default for GameplayConfig {
    fn default() -> Self {
        Self {
            player: PlayerStatus::default(),
            soldier: EnemyTuning::default(),
            // копьё длиннее меча
            lancer: EnemyTuning {
                attack_range: 200.0,
                ..EnemyTuning::default()
            },
            combo_cooldown: 0.8,
            pickup_radius: 150.0,
            ground_height: 0.0,
            ground_tolerance: 1.0,
        }
    }
}

impl GameplayConfig {
    pub fn from_json_str(json: &str) -> GameplayResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> GameplayResult<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| GameplayError::ConfigIo {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&json)
    }

    pub fn enemy(&self, kind: EnemyKind) -> &EnemyTuning {
        match kind {
            EnemyKind::Soldier => &self.soldier,
            EnemyKind::Lancer => &self.lancer,
        }
    }

    /// Rejects values that would stall or invert the state machines.
    pub fn validate(&self) -> GameplayResult<()> {
        let p = &self.player;
        positive("player.hp", p.hp)?;
        positive("player.walk_speed", p.walk_speed)?;
        positive("player.run_speed", p.run_speed)?;
        non_negative("player.invincibility_time_short", p.invincibility_time_short)?;
        non_negative("player.invincibility_time_long", p.invincibility_time_long)?;
        non_negative("player.dead_to_game_over_time", p.dead_to_game_over_time)?;
        non_negative("player.jump_height", p.jump_height)?;
        if p.weapon_drop_limit < 0 {
            return Err(GameplayError::InvalidConfig {
                field: "player.weapon_drop_limit",
                reason: format!("must be >= 0, got {}", p.weapon_drop_limit),
            });
        }

        for kind in [EnemyKind::Soldier, EnemyKind::Lancer] {
            validate_enemy(kind, self.enemy(kind))?;
        }

        non_negative("combo_cooldown", self.combo_cooldown)?;
        non_negative("pickup_radius", self.pickup_radius)?;
        Ok(())
    }
}

fn validate_enemy(kind: EnemyKind, enemy: &EnemyTuning) -> GameplayResult<()> {
    let (speed, cooldown, combo, distance) = match kind {
        EnemyKind::Soldier => (
            "soldier.movement_speed",
            "soldier.attack_cooldown",
            "soldier.combo_cooldown",
            "soldier.desired_distance",
        ),
        EnemyKind::Lancer => (
            "lancer.movement_speed",
            "lancer.attack_cooldown",
            "lancer.combo_cooldown",
            "lancer.desired_distance",
        ),
    };

    positive(speed, enemy.movement_speed)?;
    non_negative(cooldown, enemy.attack_cooldown)?;
    non_negative(combo, enemy.combo_cooldown)?;
    non_negative(distance, enemy.desired_distance)?;
    Ok(())
}

fn positive(field: &'static str, value: f32) -> GameplayResult<()> {
    if value > 0.0 && value.is_finite() {
        Ok(())
    } else {
        Err(GameplayError::InvalidConfig {
            field,
            reason: format!("must be > 0, got {}", value),
        })
    }
}

fn non_negative(field: &'static str, value: f32) -> GameplayResult<()> {
    if value >= 0.0 && value.is_finite() {
        Ok(())
    } else {
        Err(GameplayError::InvalidConfig {
            field,
            reason: format!("must be >= 0, got {}", value),
        })
    }
}
