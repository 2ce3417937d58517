//! Player combat state: control flags, combo index, weapon type.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// Montage section names of the ground combo, in order.
pub const COMBO_SECTIONS: [&str; 4] = ["First", "Second", "Third", "Fourth"];

/// Index of the final combo section.
pub const MAX_COMBO_INDEX: usize = COMBO_SECTIONS.len() - 1;

/// Combo index forced by an air attack (damage multiplier of the third hit).
pub const AIR_ATTACK_COMBO_INDEX: usize = 2;

/// Тип оружия в руках
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Reflect, Serialize, Deserialize)]
pub enum WeaponType {
    #[default]
    None,
    Sword,
    Lance,
    Gun,
}

impl WeaponType {
    /// Skeleton socket the weapon attaches to.
    pub fn socket_name(self) -> Option<&'static str> {
        match self {
            WeaponType::Sword => Some("hand_rSocket_Sword"),
            WeaponType::Lance => Some("hand_rSocket_Lance"),
            WeaponType::Gun => Some("hand_rSocket_Gun"),
            WeaponType::None => None,
        }
    }
}

/// Combo phases: Idle → Attacking → Cooldown → Idle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Reflect)]
pub enum ComboPhase {
    #[default]
    Idle,
    Attacking,
    /// Final section played, waiting for the combo cooldown timer
    Cooldown,
}

/// Боевое состояние игрока
///
/// Инварианты:
/// - `combo_index ∈ [0, MAX_COMBO_INDEX]`
/// - `is_attacking` ⇒ `!is_controllable` пока не пришёл ContinuationCombo/ResetCombo
#[derive(Component, Debug, Clone, PartialEq, Reflect)]
#[reflect(Component)]
pub struct CombatState {
    pub is_controllable: bool,
    pub is_attacking: bool,
    pub can_combo: bool,
    pub combo_index: usize,
    pub weapon_type: WeaponType,
    pub weapon_drop_limit: i32,
    pub default_weapon_drop_limit: i32,
    /// Gun kick in progress (hitbox is the foot, not the weapon)
    pub is_kicking: bool,
    pub phase: ComboPhase,
}

impl Default for CombatState {
    fn default() -> Self {
        Self::new(WeaponType::None, 2)
    }
}

impl CombatState {
    pub fn new(weapon_type: WeaponType, weapon_drop_limit: i32) -> Self {
        Self {
            is_controllable: true,
            is_attacking: false,
            can_combo: false,
            combo_index: 0,
            weapon_type,
            weapon_drop_limit,
            default_weapon_drop_limit: weapon_drop_limit,
            is_kicking: false,
            phase: ComboPhase::Idle,
        }
    }

    pub fn combo_index(&self) -> usize {
        self.combo_index
    }

    pub fn weapon_type(&self) -> WeaponType {
        self.weapon_type
    }

    /// Montage section for the current combo index.
    pub fn combo_section(&self) -> &'static str {
        COMBO_SECTIONS[self.combo_index.min(MAX_COMBO_INDEX)]
    }

    pub fn is_final_section(&self) -> bool {
        self.combo_index >= MAX_COMBO_INDEX
    }

    pub fn set_control(&mut self, is_controllable: bool) {
        self.is_controllable = is_controllable;
    }

    /// Clears every attack flag. Control stays off: the caller decides when
    /// the player gets it back.
    pub fn reset_all_attack_flags(&mut self) {
        self.is_attacking = false;
        self.can_combo = false;
        self.is_controllable = false;
        self.is_kicking = false;
        self.combo_index = 0;
        self.phase = ComboPhase::Idle;
    }

    /// New weapon in hand: type changes, drop counter refills.
    pub fn equip(&mut self, weapon_type: WeaponType) {
        self.weapon_type = weapon_type;
        self.weapon_drop_limit = self.default_weapon_drop_limit;
    }

    pub fn unequip(&mut self) {
        self.weapon_type = WeaponType::None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state_is_idle_and_controllable() {
        let state = CombatState::new(WeaponType::Sword, 2);
        assert!(state.is_controllable);
        assert!(!state.is_attacking);
        assert_eq!(state.phase, ComboPhase::Idle);
        assert_eq!(state.combo_section(), "First");
    }

    #[test]
    fn test_reset_all_attack_flags_keeps_control_off() {
        let mut state = CombatState::new(WeaponType::Lance, 2);
        state.is_attacking = true;
        state.can_combo = true;
        state.combo_index = 3;
        state.is_kicking = true;

        state.reset_all_attack_flags();

        assert!(!state.is_attacking);
        assert!(!state.can_combo);
        assert!(!state.is_controllable);
        assert!(!state.is_kicking);
        assert_eq!(state.combo_index, 0);
    }

    #[test]
    fn test_equip_refills_drop_limit() {
        let mut state = CombatState::new(WeaponType::Sword, 2);
        state.weapon_drop_limit = 0;

        state.equip(WeaponType::Gun);
        assert_eq!(state.weapon_type(), WeaponType::Gun);
        assert_eq!(state.weapon_drop_limit, 2);

        state.unequip();
        assert_eq!(state.weapon_type(), WeaponType::None);
    }

    #[test]
    fn test_sockets_per_weapon() {
        assert_eq!(WeaponType::Sword.socket_name(), Some("hand_rSocket_Sword"));
        assert_eq!(WeaponType::Lance.socket_name(), Some("hand_rSocket_Lance"));
        assert_eq!(WeaponType::Gun.socket_name(), Some("hand_rSocket_Gun"));
        assert_eq!(WeaponType::None.socket_name(), None);
    }
}
