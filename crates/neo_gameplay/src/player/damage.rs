//! Incoming hits, invincibility windows, death and respawn bookkeeping.
//!
//! Hit flow:
//! - Мёртв/неуязвим → игнор
//! - Без оружия в руках → смерть (ровно один раз)
//! - С оружием → flinch (drop limit −1) или knock-back с потерей оружия
//!
//! HP здесь не меняется: урон по HP считает внешнее правило (`apply_hp_loss`).

use super::effects::{play_montage, CombatEffect};
use crate::animation::Montage;
use crate::components::{CombatState, Health, HeldWeapon};
use crate::config::PlayerStatus;
use crate::timers::TimerKind;

/// What a `TakeDamage` command ended up doing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DamageOutcome {
    /// Dead or invincible
    Ignored,
    /// Flinch, weapon kept
    Flinched,
    /// Weapon knocked out of the hand
    KnockedBack,
    Died,
}

/// Enemy hit landed on the player.
pub fn take_damage(
    health: &mut Health,
    state: &mut CombatState,
    held: &mut HeldWeapon,
    is_final_hit: bool,
    status: &PlayerStatus,
    out: &mut Vec<CombatEffect>,
) -> DamageOutcome {
    if !health.can_be_hit() {
        return DamageOutcome::Ignored;
    }

    if !held.is_holding {
        die(health, state, status, out);
        return DamageOutcome::Died;
    }

    state.reset_all_attack_flags();
    out.push(CombatEffect::CancelTimer(TimerKind::ComboCooldown));

    // последний удар вражеского комбо всегда выбивает оружие
    if is_final_hit {
        state.weapon_drop_limit = 0;
    }

    let (outcome, window) = if state.weapon_drop_limit <= 0 {
        if let Some(weapon) = held.release() {
            out.push(CombatEffect::DetachWeapon(weapon));
        }
        state.unequip();
        play_montage(state, out, Montage::KnockBack, None);
        (DamageOutcome::KnockedBack, status.invincibility_time_long)
    } else {
        state.weapon_drop_limit -= 1;
        play_montage(state, out, Montage::TakeDamage, None);
        (DamageOutcome::Flinched, status.invincibility_time_short)
    };

    out.push(CombatEffect::SpawnHitEffect);

    health.invincible = true;
    out.push(CombatEffect::ScheduleTimer {
        kind: TimerKind::InvincibilityRelease,
        seconds: window,
    });

    outcome
}

/// Death transition. Returns false when the player was already dead.
pub fn die(
    health: &mut Health,
    state: &mut CombatState,
    status: &PlayerStatus,
    out: &mut Vec<CombatEffect>,
) -> bool {
    if health.is_dead {
        return false;
    }

    health.is_dead = true;
    health.invincible = false;
    state.reset_all_attack_flags();

    out.push(CombatEffect::SpawnHitEffect);
    play_montage(state, out, Montage::Death, None);

    out.push(CombatEffect::CancelTimer(TimerKind::ComboCooldown));
    out.push(CombatEffect::CancelTimer(TimerKind::InvincibilityRelease));
    out.push(CombatEffect::ScheduleTimer {
        kind: TimerKind::DeathToRespawn,
        seconds: status.dead_to_game_over_time,
    });

    true
}

/// HP loss from an external damage rule. Zero HP → death.
///
/// Only god mode blocks it; the post-hit window is for `take_damage`.
pub fn apply_hp_loss(
    health: &mut Health,
    state: &mut CombatState,
    amount: f32,
    status: &PlayerStatus,
    out: &mut Vec<CombatEffect>,
) -> bool {
    if health.absolutely_invincible {
        return false;
    }

    if health.lose_hp(amount) {
        return die(health, state, status, out);
    }
    false
}

/// InvincibilityRelease fired.
pub fn release_invincibility(health: &mut Health) {
    health.invincible = false;
}

/// DeathToRespawn fired: spend a life and restore HP.
///
/// False → no lives left, game over.
pub fn begin_respawn(health: &mut Health) -> bool {
    if health.remaining_lives == 0 {
        return false;
    }
    health.remaining_lives -= 1;
    health.restore();
    true
}
