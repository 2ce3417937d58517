//! Enemy ECS systems: AI tick and combo cooldown expiry.

use bevy::prelude::*;

use super::approach::{decide, finish_enemy_cooldown, patrol_direction, planar_distance};
use crate::animation::{Montage, MontageLibrary};
use crate::components::{Enemy, EnemyAIState, Health, MovementInput, Player};
use crate::config::GameplayConfig;
use crate::events::{EnemyAttackStarted, GameplayEffect};
use crate::player::effects::{dispatch_combat_effects, CombatEffect};
use crate::timers::{GameTimers, TimerFired, TimerKind};
use crate::DeterministicRng;

/// Wander points used while no player is alive.
#[derive(Resource, Debug, Clone, Default, PartialEq)]
pub struct PatrolPoints(pub Vec<Vec3>);

/// System: approach/attack decision for every enemy.
///
/// Цель = ближайший живой игрок. Нет игрока → патруль по `PatrolPoints`.
#[allow(clippy::too_many_arguments)]
pub fn enemy_ai_tick(
    mut enemies: Query<
        (Entity, &Enemy, &mut EnemyAIState, &mut MovementInput, &Transform),
        Without<Player>,
    >,
    players: Query<(Entity, &Transform, &Health), With<Player>>,
    config: Res<GameplayConfig>,
    time: Res<Time<Fixed>>,
    patrol: Res<PatrolPoints>,
    mut rng: ResMut<DeterministicRng>,
    library: Res<MontageLibrary>,
    mut timers: ResMut<GameTimers>,
    mut effects: EventWriter<GameplayEffect>,
    mut attacks: EventWriter<EnemyAttackStarted>,
) {
    let now = time.elapsed_secs();

    for (entity, enemy, mut state, mut movement, transform) in enemies.iter_mut() {
        let from = transform.translation;
        let tuning = config.enemy(enemy.kind);

        let target = players
            .iter()
            .filter(|(_, _, health)| health.is_alive())
            .map(|(player, t, _)| (player, t.translation, planar_distance(from, t.translation)))
            .min_by(|a, b| a.2.total_cmp(&b.2));

        let Some((target, target_pos, _)) = target else {
            movement.direction =
                patrol_direction(&mut state, from, &patrol.0, &mut rng.rng).unwrap_or(Vec3::ZERO);
            continue;
        };

        state.patrol_target = None;

        let decision = decide(&mut state, tuning, from, target_pos, now);
        movement.direction = decision.movement.unwrap_or(Vec3::ZERO);

        let Some(attack) = decision.attack else {
            continue;
        };

        let mut out = Vec::new();
        if let Some(montage) = Montage::enemy_attack(attack.step) {
            out.push(CombatEffect::PlayMontage {
                montage,
                section: None,
                play_rate: 1.0,
            });
        }
        if attack.is_final_hit {
            out.push(CombatEffect::ScheduleTimer {
                kind: TimerKind::EnemyComboCooldown,
                seconds: tuning.combo_cooldown,
            });
        }
        dispatch_combat_effects(entity, from, out, &mut timers, &library, &mut effects);

        crate::logger::log(&format!(
            "👹 {:?} {:?} attack step {} → {:?} (damage: {:.0}, t: {:.2}s)",
            enemy.kind, entity, attack.step, target, attack.damage, now
        ));

        attacks.write(EnemyAttackStarted {
            attacker: entity,
            target,
            step: attack.step,
            damage: attack.damage,
            is_final_hit: attack.is_final_hit,
        });
    }
}

/// System: EnemyComboCooldown fired → combo counter back to 0.
pub fn handle_enemy_timers(
    mut fired: EventReader<TimerFired>,
    mut enemies: Query<&mut EnemyAIState>,
) {
    for event in fired.read() {
        if event.kind != TimerKind::EnemyComboCooldown {
            continue;
        }
        if let Ok(mut state) = enemies.get_mut(event.owner) {
            finish_enemy_cooldown(&mut state);
            crate::logger::log(&format!(
                "🔄 Enemy {:?} combo cooldown over",
                event.owner
            ));
        }
    }
}
