//! Boss flags driven by animation notifies.

use bevy::prelude::*;

/// Flags a boss behaviour reads between montages.
#[derive(Component, Debug, Clone, Copy, Default, PartialEq, Eq, Reflect)]
#[reflect(Component)]
pub struct Boss {
    /// Attack-1 montage asked to stop after its first combo
    pub stop_after_first_combo: bool,
    /// Ultimate montage reached its spawn frame (toggled per notify)
    pub ult_spawn: bool,
}

impl Boss {
    pub fn request_single_combo(&mut self) {
        self.stop_after_first_combo = true;
    }

    pub fn toggle_ult_spawn(&mut self) {
        self.ult_spawn = !self.ult_spawn;
    }
}
