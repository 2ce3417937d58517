//! Player systems: input, commands, timers, weapon bookkeeping.
//!
//! Системы только достают компоненты и зовут чистые переходы из
//! combo / damage / jump / pickup; эффекты уходят через `dispatch_combat_effects`.

use bevy::prelude::*;

use super::combo::{continuation_combo, finish_combo_cooldown, handle_attack_input, reset_combo};
use super::damage::{apply_hp_loss, begin_respawn, release_invincibility, take_damage, DamageOutcome};
use super::effects::dispatch_combat_effects;
use super::pickup::closest_pickup;
use crate::animation::MontageLibrary;
use crate::components::{
    CameraView, CombatState, Facing, Health, HeldWeapon, JumpState, MovementInput, MovementSpeed,
    Player, WeaponItem, WeaponType,
};
use crate::config::GameplayConfig;
use crate::events::{CommandKind, GameplayEffect, InputAction, PlayerCommand, PlayerInput};
use crate::timers::{GameTimers, TimerFired, TimerKind};

/// System: input events → movement/jump/combo/pickup.
///
/// Любой input без контроля игнорируется (никакой очереди).
#[allow(clippy::too_many_arguments)]
pub fn handle_player_input(
    mut inputs: EventReader<PlayerInput>,
    mut players: Query<
        (
            &Transform,
            &mut CombatState,
            &mut MovementInput,
            &mut MovementSpeed,
            &mut Facing,
            &mut JumpState,
            &mut HeldWeapon,
        ),
        With<Player>,
    >,
    weapons: Query<(Entity, &Transform, &WeaponItem)>,
    camera: Res<CameraView>,
    config: Res<GameplayConfig>,
    library: Res<MontageLibrary>,
    mut timers: ResMut<GameTimers>,
    mut effects: EventWriter<GameplayEffect>,
) {
    // оружие уже подобрано в этом тике (WeaponItem обновится позже в chain)
    let mut claimed: Vec<Entity> = Vec::new();

    for input in inputs.read() {
        let Ok((transform, mut state, mut movement, mut speed, mut facing, mut jump, mut held)) =
            players.get_mut(input.entity)
        else {
            continue;
        };

        if !state.is_controllable {
            continue;
        }

        match input.action {
            InputAction::Move(axis) => {
                movement.direction = camera.move_direction(axis);
                if axis.y != 0.0 {
                    facing.right = axis.y < 0.0;
                }
            }
            InputAction::ToggleRun => {
                speed.toggle_run();
                crate::logger::log(&format!(
                    "🏃 Run {} (entity: {:?}, speed: {:.0})",
                    if speed.is_running { "on" } else { "off" },
                    input.entity,
                    speed.current()
                ));
            }
            InputAction::Jump => {
                if jump.start(transform.translation.z) {
                    crate::logger::log(&format!(
                        "🦘 Jump (entity: {:?}, from z: {:.1})",
                        input.entity, transform.translation.z
                    ));
                }
            }
            InputAction::Attack(button) => {
                let out = handle_attack_input(
                    &mut state,
                    button,
                    jump.is_jumping,
                    config.combo_cooldown,
                );
                if out.is_empty() {
                    continue;
                }

                crate::logger::log(&format!(
                    "⚔️ Attack {:?} with {:?} (entity: {:?}, section: {})",
                    button,
                    state.weapon_type(),
                    input.entity,
                    state.combo_section()
                ));
                dispatch_combat_effects(
                    input.entity,
                    transform.translation,
                    out,
                    &mut timers,
                    &library,
                    &mut effects,
                );
            }
            InputAction::PickUp => {
                let candidates = weapons
                    .iter()
                    .filter(|(entity, _, _)| !claimed.contains(entity))
                    .map(|(entity, t, item)| (entity, t.translation, item));

                let Some((weapon, weapon_type)) =
                    closest_pickup(transform.translation, config.pickup_radius, candidates)
                else {
                    continue;
                };

                if let Some(old) = held.release() {
                    effects.write(GameplayEffect::DetachWeapon {
                        owner: input.entity,
                        weapon: old,
                    });
                }

                *held = HeldWeapon::holding(weapon);
                state.equip(weapon_type);
                claimed.push(weapon);

                if let Some(socket) = weapon_type.socket_name() {
                    effects.write(GameplayEffect::AttachWeapon {
                        owner: input.entity,
                        weapon,
                        weapon_type,
                        socket,
                    });
                }

                crate::logger::log(&format!(
                    "🗡️ Picked up {:?} (entity: {:?}, weapon: {:?})",
                    weapon_type, input.entity, weapon
                ));
            }
        }
    }
}

/// System: commands from enemies, hitboxes and scripts.
pub fn handle_player_commands(
    mut commands_in: EventReader<PlayerCommand>,
    mut players: Query<(&Transform, &mut Health, &mut CombatState, &mut HeldWeapon), With<Player>>,
    config: Res<GameplayConfig>,
    library: Res<MontageLibrary>,
    mut timers: ResMut<GameTimers>,
    mut effects: EventWriter<GameplayEffect>,
) {
    for command in commands_in.read() {
        let Ok((transform, mut health, mut state, mut held)) = players.get_mut(command.entity) else {
            crate::logger::log_warning(&format!(
                "⚠️ {:?} sent to non-player {:?}, dropped",
                command.command, command.entity
            ));
            continue;
        };

        let mut out = Vec::new();

        match command.command {
            CommandKind::TakeDamage { amount, is_final_hit } => {
                let outcome = take_damage(
                    &mut health,
                    &mut state,
                    &mut held,
                    is_final_hit,
                    &config.player,
                    &mut out,
                );

                match outcome {
                    DamageOutcome::Ignored => {}
                    DamageOutcome::Died => crate::logger::log(&format!(
                        "💀 Player {:?} died (hit: {:.0}, no weapon in hand)",
                        command.entity, amount
                    )),
                    _ => crate::logger::log(&format!(
                        "💥 Player {:?} hit: {:.0} → {:?} (drop limit: {})",
                        command.entity, amount, outcome, state.weapon_drop_limit
                    )),
                }
            }
            CommandKind::ApplyHpLoss(amount) => {
                if apply_hp_loss(&mut health, &mut state, amount, &config.player, &mut out) {
                    crate::logger::log(&format!(
                        "💀 Player {:?} died (HP depleted)",
                        command.entity
                    ));
                }
            }
            CommandKind::SetControl(value) => {
                if health.is_alive() {
                    state.set_control(value);
                }
            }
            CommandKind::SetInvincibility(value) => health.invincible = value,
            CommandKind::SetAbsolutelyInvincible(value) => health.absolutely_invincible = value,
            CommandKind::ContinuationCombo => {
                if health.is_alive() {
                    continuation_combo(&mut state);
                }
            }
            CommandKind::ResetCombo => {
                if health.is_alive() {
                    out = reset_combo(&mut state);
                }
            }
        }

        dispatch_combat_effects(
            command.entity,
            transform.translation,
            out,
            &mut timers,
            &library,
            &mut effects,
        );
    }
}

/// System: expired player timers (combo cooldown, invincibility, death).
#[allow(clippy::too_many_arguments)]
pub fn handle_player_timers(
    mut fired: EventReader<TimerFired>,
    mut players: Query<
        (
            &Player,
            &Transform,
            &mut Health,
            &mut CombatState,
            &mut HeldWeapon,
            &mut JumpState,
        ),
    >,
    mut commands: Commands,
    config: Res<GameplayConfig>,
    mut timers: ResMut<GameTimers>,
    mut effects: EventWriter<GameplayEffect>,
) {
    for event in fired.read() {
        let Ok((player, transform, mut health, mut state, mut held, mut jump)) =
            players.get_mut(event.owner)
        else {
            continue;
        };

        match event.kind {
            TimerKind::ComboCooldown => {
                if health.is_alive() && finish_combo_cooldown(&mut state) {
                    crate::logger::log(&format!("🔄 Combo reset (entity: {:?})", event.owner));
                }
            }
            TimerKind::InvincibilityRelease => release_invincibility(&mut health),
            TimerKind::DeathToRespawn => {
                if let Some(old) = held.release() {
                    effects.write(GameplayEffect::DetachWeapon {
                        owner: event.owner,
                        weapon: old,
                    });
                }

                if !begin_respawn(&mut health) {
                    timers.cancel_all(event.owner);
                    crate::logger::log_info(&format!(
                        "☠️ Game over: no lives left (entity: {:?})",
                        event.owner
                    ));
                    effects.write(GameplayEffect::DestroyPlayer { entity: event.owner });
                    continue;
                }

                *state = CombatState::new(player.default_weapon, config.player.weapon_drop_limit);
                *jump = JumpState::default();

                if player.default_weapon != WeaponType::None {
                    let weapon = commands
                        .spawn((
                            WeaponItem {
                                weapon_type: player.default_weapon,
                                held_by: Some(event.owner),
                            },
                            Transform::from_translation(transform.translation),
                        ))
                        .id();
                    *held = HeldWeapon::holding(weapon);

                    if let Some(socket) = player.default_weapon.socket_name() {
                        effects.write(GameplayEffect::AttachWeapon {
                            owner: event.owner,
                            weapon,
                            weapon_type: player.default_weapon,
                            socket,
                        });
                    }
                }

                crate::logger::log_info(&format!(
                    "✨ Respawn (entity: {:?}, lives left: {})",
                    event.owner, health.remaining_lives
                ));
                effects.write(GameplayEffect::RespawnPlayer {
                    entity: event.owner,
                    remaining_lives: health.remaining_lives,
                });
            }
            TimerKind::EnemyComboCooldown => {}
        }
    }
}

/// System: keep `WeaponItem` ownership in sync with attach/detach effects.
///
/// Отпущенное оружие остаётся лежать там, где стоял владелец.
pub fn sync_weapon_items(
    mut effects: EventReader<GameplayEffect>,
    mut items: Query<(&mut WeaponItem, &mut Transform), Without<Player>>,
    owners: Query<&Transform, With<Player>>,
) {
    for effect in effects.read() {
        match effect {
            GameplayEffect::AttachWeapon { owner, weapon, .. } => {
                if let Ok((mut item, _)) = items.get_mut(*weapon) {
                    item.held_by = Some(*owner);
                }
            }
            GameplayEffect::DetachWeapon { owner, weapon } => {
                let Ok((mut item, mut transform)) = items.get_mut(*weapon) else {
                    continue;
                };
                item.held_by = None;
                if let Ok(owner_transform) = owners.get(*owner) {
                    transform.translation = owner_transform.translation;
                }
            }
            _ => {}
        }
    }
}
