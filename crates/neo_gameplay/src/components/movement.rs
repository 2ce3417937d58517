//! Movement компоненты: input direction, speed, ground contact, facing, jump

use bevy::prelude::*;

/// Направление движения на этот тик (horizontal, normalized or zero)
///
/// Player: заполняется из Move input, обнуляется после интеграции.
/// Enemy: перезаписывается AI каждый тик.
#[derive(Component, Debug, Clone, Copy, Default, Reflect)]
#[reflect(Component)]
pub struct MovementInput {
    pub direction: Vec3,
}

/// Walk/run speed (units/sec)
#[derive(Component, Debug, Clone, Copy, Reflect)]
#[reflect(Component)]
pub struct MovementSpeed {
    pub walk: f32,
    pub run: f32,
    pub is_running: bool,
}

impl Default for MovementSpeed {
    fn default() -> Self {
        Self::walking(500.0)
    }
}

impl MovementSpeed {
    /// Speed without a run mode (enemies).
    pub fn walking(speed: f32) -> Self {
        Self {
            walk: speed,
            run: speed,
            is_running: false,
        }
    }

    pub fn current(&self) -> f32 {
        if self.is_running {
            self.run
        } else {
            self.walk
        }
    }

    pub fn toggle_run(&mut self) {
        self.is_running = !self.is_running;
    }
}

/// На земле ли актор (пишет ground_detection)
#[derive(Component, Debug, Clone, Copy, Default, PartialEq, Eq, Reflect)]
#[reflect(Component)]
pub struct Grounded(pub bool);

/// Side the character looks at along the scroll axis.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq, Reflect)]
#[reflect(Component)]
pub struct Facing {
    pub right: bool,
}

impl Default for Facing {
    fn default() -> Self {
        Self { right: true }
    }
}

/// Scripted jump arc state (see `player::jump`)
#[derive(Component, Debug, Clone, Copy, Default, PartialEq, Reflect)]
#[reflect(Component)]
pub struct JumpState {
    pub is_jumping: bool,
    /// Frames since the jump started
    pub frame: u32,
    /// Z before takeoff
    pub baseline_z: f32,
}
