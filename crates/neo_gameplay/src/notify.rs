//! Animation notify dispatch
//!
//! Notifies прилетают от анимационной системы хоста (кадр монтажа).
//! Player notifies → `PlayerCommand` (обрабатываются в этом же тике),
//! boss notifies → флаги на `Boss`. Владелец без нужного компонента → warning.

use bevy::prelude::*;

use crate::components::{Boss, CombatState, Health, HeldWeapon};
use crate::config::GameplayConfig;
use crate::events::{AnimNotify, CommandKind, GameplayEffect, NotifyKind, PlayerCommand};

/// System: route animation notifies (runs before `handle_player_commands`).
pub fn dispatch_anim_notifies(
    mut notifies: EventReader<AnimNotify>,
    players: Query<(&CombatState, &HeldWeapon, &Health)>,
    mut bosses: Query<&mut Boss>,
    config: Res<GameplayConfig>,
    mut commands_out: EventWriter<PlayerCommand>,
    mut effects: EventWriter<GameplayEffect>,
) {
    for notify in notifies.read() {
        let owner = notify.owner;

        match notify.kind {
            NotifyKind::BossAttack1Combo => {
                let Ok(mut boss) = bosses.get_mut(owner) else {
                    crate::logger::log_warning(&format!("⚠️ Boss not found for {:?} ({:?})", notify.kind, owner));
                    continue;
                };
                boss.request_single_combo();
            }
            NotifyKind::BossUltSpawn => {
                let Ok(mut boss) = bosses.get_mut(owner) else {
                    crate::logger::log_warning(&format!("⚠️ Boss not found for {:?} ({:?})", notify.kind, owner));
                    continue;
                };
                boss.toggle_ult_spawn();
            }
            kind => {
                let Ok((state, held, health)) = players.get(owner) else {
                    crate::logger::log_warning(&format!("⚠️ Player not found for {:?} ({:?})", kind, owner));
                    continue;
                };

                match kind {
                    NotifyKind::ContinuationCombo => {
                        commands_out.write(PlayerCommand { entity: owner, command: CommandKind::ContinuationCombo });
                    }
                    NotifyKind::ResetCombo => {
                        commands_out.write(PlayerCommand { entity: owner, command: CommandKind::ResetCombo });
                    }
                    NotifyKind::SetInvincibility(value) => {
                        commands_out.write(PlayerCommand {
                            entity: owner,
                            command: CommandKind::SetInvincibility(value),
                        });
                    }
                    NotifyKind::SetCollision => {
                        // пинок бьёт ногой, оружие не нужно
                        if state.is_kicking {
                            continue;
                        }
                        match held.weapon {
                            Some(weapon) => {
                                effects.write(GameplayEffect::EnableWeaponCollision { owner, weapon });
                            }
                            None => crate::logger::log(&format!(
                                "🗡️ SetCollision skipped: no weapon in hand ({:?})",
                                owner
                            )),
                        }
                    }
                    NotifyKind::SlowDownDeathAnimation => {
                        if health.is_dead {
                            effects.write(GameplayEffect::SetAnimationRate {
                                entity: owner,
                                rate: config.player.dead_anim_rate,
                            });
                        }
                    }
                    NotifyKind::BossAttack1Combo | NotifyKind::BossUltSpawn => {}
                }
            }
        }
    }
}
