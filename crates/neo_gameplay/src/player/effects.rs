//! Side effects requested by the pure player transitions.
//!
//! Transitions push `CombatEffect`s; systems hand them to
//! `dispatch_combat_effects`, which routes timers to `GameTimers` and
//! everything else to `GameplayEffect` events.

use bevy::prelude::*;

use crate::animation::{Montage, MontageLibrary};
use crate::components::CombatState;
use crate::events::GameplayEffect;
use crate::timers::{GameTimers, TimerKind};

#[derive(Debug, Clone, PartialEq)]
pub enum CombatEffect {
    PlayMontage {
        montage: Montage,
        section: Option<&'static str>,
        play_rate: f32,
    },
    SetAnimationRate(f32),
    ScheduleTimer { kind: TimerKind, seconds: f32 },
    CancelTimer(TimerKind),
    SpawnHitEffect,
    CorrectAttackAngle,
    DetachWeapon(Entity),
}

/// Request a montage. A playing montage always takes control away.
pub fn play_montage(
    state: &mut CombatState,
    out: &mut Vec<CombatEffect>,
    montage: Montage,
    section: Option<&'static str>,
) {
    state.is_controllable = false;
    out.push(CombatEffect::PlayMontage {
        montage,
        section,
        play_rate: 1.0,
    });
}

pub fn dispatch_combat_effects(
    entity: Entity,
    location: Vec3,
    effects: Vec<CombatEffect>,
    timers: &mut GameTimers,
    library: &MontageLibrary,
    writer: &mut EventWriter<GameplayEffect>,
) {
    for effect in effects {
        match effect {
            CombatEffect::PlayMontage {
                montage,
                section,
                play_rate,
            } => {
                let Some(path) = library.resolve(montage) else {
                    crate::logger::log(&format!(
                        "🎞️ Montage {:?} not resolved, skipping (entity: {:?})",
                        montage, entity
                    ));
                    continue;
                };
                writer.write(GameplayEffect::PlayMontage {
                    entity,
                    montage,
                    asset_path: path.to_string(),
                    section,
                    play_rate,
                });
            }
            CombatEffect::SetAnimationRate(rate) => {
                writer.write(GameplayEffect::SetAnimationRate { entity, rate });
            }
            CombatEffect::ScheduleTimer { kind, seconds } => {
                timers.schedule(entity, kind, seconds);
            }
            CombatEffect::CancelTimer(kind) => {
                timers.cancel(entity, kind);
            }
            CombatEffect::SpawnHitEffect => {
                writer.write(GameplayEffect::SpawnHitEffect { entity, location });
            }
            CombatEffect::CorrectAttackAngle => {
                writer.write(GameplayEffect::CorrectAttackAngle { entity });
            }
            CombatEffect::DetachWeapon(weapon) => {
                writer.write(GameplayEffect::DetachWeapon {
                    owner: entity,
                    weapon,
                });
            }
        }
    }
}
