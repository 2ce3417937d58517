//! Combo attack state machine.
//!
//! Idle → Attacking(combo_index 0..=MAX) → Cooldown → Idle
//!
//! - Attack input без контроля игнорируется (никакой очереди).
//! - Weapon strategy (sword/lance/gun) решает что именно играть.
//! - Последняя секция взводит ComboCooldown; по таймеру combo сбрасывается.
//! - ContinuationCombo (animation notify) открывает окно для следующего удара.

use bevy::prelude::*;

use super::effects::CombatEffect;
use super::strategy::strategy_for;
use crate::components::{CombatState, ComboPhase};
use crate::config::PlayerStatus;
use crate::timers::TimerKind;

/// The two attack buttons. Each one owns a combo montage.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Reflect)]
pub enum AttackButton {
    Primary,
    Secondary,
}

/// Attack input. Returns the effects to dispatch (empty when ignored).
pub fn handle_attack_input(
    state: &mut CombatState,
    button: AttackButton,
    airborne: bool,
    combo_cooldown: f32,
) -> Vec<CombatEffect> {
    let mut out = Vec::new();

    if !state.is_controllable || state.phase == ComboPhase::Cooldown {
        return out;
    }

    let Some(strategy) = strategy_for(state.weapon_type) else {
        return out;
    };

    strategy.attack(state, button, airborne, &mut out);

    if state.phase == ComboPhase::Attacking && state.is_attacking && state.is_final_section() {
        state.phase = ComboPhase::Cooldown;
        out.push(CombatEffect::ScheduleTimer {
            kind: TimerKind::ComboCooldown,
            seconds: combo_cooldown,
        });
    }

    out
}

/// Combo window opened by the animation: control back, next input chains.
pub fn continuation_combo(state: &mut CombatState) {
    state.is_controllable = true;
    state.can_combo = true;
}

/// Drop the combo entirely and give control back.
pub fn reset_combo(state: &mut CombatState) -> Vec<CombatEffect> {
    state.reset_all_attack_flags();
    state.is_controllable = true;
    vec![CombatEffect::CancelTimer(TimerKind::ComboCooldown)]
}

/// ComboCooldown fired. Returns false if the combo was already reset.
pub fn finish_combo_cooldown(state: &mut CombatState) -> bool {
    if state.phase != ComboPhase::Cooldown {
        return false;
    }
    state.reset_all_attack_flags();
    state.is_controllable = true;
    true
}

/// Damage of the current combo section.
pub fn damage_amount(state: &CombatState, status: &PlayerStatus) -> f32 {
    status.damage_amount * ((state.combo_index as f32 + 1.0) * status.combo_damage_factor)
}
