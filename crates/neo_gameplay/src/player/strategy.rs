//! Weapon strategies: one attack handler per weapon type.

use super::combo::AttackButton;
use super::effects::{play_montage, CombatEffect};
use crate::animation::Montage;
use crate::components::{CombatState, ComboPhase, WeaponType, AIR_ATTACK_COMBO_INDEX};

/// Attack behaviour of a weapon type.
pub trait AttackStrategy: Send + Sync {
    fn weapon_type(&self) -> WeaponType;

    fn attack(
        &self,
        state: &mut CombatState,
        button: AttackButton,
        airborne: bool,
        out: &mut Vec<CombatEffect>,
    );
}

pub struct SwordStrategy;
pub struct LanceStrategy;
pub struct GunStrategy;

static SWORD: SwordStrategy = SwordStrategy;
static LANCE: LanceStrategy = LanceStrategy;
static GUN: GunStrategy = GunStrategy;

/// `None` for an empty hand.
pub fn strategy_for(weapon_type: WeaponType) -> Option<&'static dyn AttackStrategy> {
    match weapon_type {
        WeaponType::Sword => Some(&SWORD),
        WeaponType::Lance => Some(&LANCE),
        WeaponType::Gun => Some(&GUN),
        WeaponType::None => None,
    }
}

/// Shared sword/lance combo step.
fn melee_combo(
    state: &mut CombatState,
    button: AttackButton,
    airborne: bool,
    out: &mut Vec<CombatEffect>,
) {
    if airborne {
        state.combo_index = AIR_ATTACK_COMBO_INDEX;
        play_montage(state, out, Montage::AirAttack, None);
        return;
    }

    if !state.is_attacking {
        state.is_attacking = true;
        state.combo_index = 0;
    } else if state.can_combo && !state.is_final_section() {
        state.combo_index += 1;
    }
    // attacking без can_combo: та же секция проигрывается заново

    state.can_combo = false;
    state.phase = ComboPhase::Attacking;

    let section = state.combo_section();
    play_montage(state, out, Montage::combo(button), Some(section));
}

impl AttackStrategy for SwordStrategy {
    fn weapon_type(&self) -> WeaponType {
        WeaponType::Sword
    }

    fn attack(
        &self,
        state: &mut CombatState,
        button: AttackButton,
        airborne: bool,
        out: &mut Vec<CombatEffect>,
    ) {
        melee_combo(state, button, airborne, out);
    }
}

impl AttackStrategy for LanceStrategy {
    fn weapon_type(&self) -> WeaponType {
        WeaponType::Lance
    }

    fn attack(
        &self,
        state: &mut CombatState,
        button: AttackButton,
        airborne: bool,
        out: &mut Vec<CombatEffect>,
    ) {
        // копьё доворачивает персонажа на ближайшего врага
        out.push(CombatEffect::CorrectAttackAngle);
        melee_combo(state, button, airborne, out);
    }
}

impl AttackStrategy for GunStrategy {
    fn weapon_type(&self) -> WeaponType {
        WeaponType::Gun
    }

    fn attack(
        &self,
        state: &mut CombatState,
        button: AttackButton,
        _airborne: bool,
        out: &mut Vec<CombatEffect>,
    ) {
        match button {
            AttackButton::Primary => {
                state.is_kicking = true;
                play_montage(state, out, Montage::Kick, None);
            }
            AttackButton::Secondary => {
                play_montage(state, out, Montage::GunShot, None);
            }
        }
    }
}
