//! Enemy approach & attack AI (pure transitions).
//!
//! Approach → AttackWindow → Cooldown → Approach
//!
//! - Движение только по одной горизонтальной оси (меньшая компонента обнуляется)
//! - Атака: cooldown истёк, нет combo cooldown, цель в "линии" (|Δy|) и в радиусе
//! - Шаги комбо 1/2/3; после третьего длинный EnemyComboCooldown

use bevy::prelude::*;
use rand::seq::SliceRandom;
use rand::Rng;

use crate::components::EnemyAIState;
use crate::config::EnemyTuning;

/// Number of steps in an enemy combo.
pub const ENEMY_COMBO_STEPS: u8 = 3;

/// One combo step the AI decided to start.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AttackRequest {
    /// 1..=3
    pub step: u8,
    pub damage: f32,
    pub is_final_hit: bool,
}

/// What the AI wants this tick.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct AiDecision {
    /// Unit axis-snapped direction, `None` = hold position
    pub movement: Option<Vec3>,
    pub attack: Option<AttackRequest>,
}

impl EnemyAIState {
    pub fn from_tuning(tuning: &EnemyTuning) -> Self {
        Self {
            last_attack_time: 0.0,
            attack_cooldown: tuning.attack_cooldown,
            combo_counter: 0,
            on_cooldown: false,
            desired_distance: tuning.desired_distance,
            patrol_target: None,
        }
    }
}

/// Horizontal distance (X/Y plane).
pub fn planar_distance(from: Vec3, to: Vec3) -> f32 {
    (to - from).truncate().length()
}

/// Direction `from → to` snapped to the dominant horizontal axis.
///
/// Ничья по модулю → остаётся X. Совпадающие точки → ноль.
pub fn snapped_direction(from: Vec3, to: Vec3) -> Vec3 {
    let delta = to - from;
    let snapped = if delta.x.abs() >= delta.y.abs() {
        Vec3::new(delta.x, 0.0, 0.0)
    } else {
        Vec3::new(0.0, delta.y, 0.0)
    };
    snapped.normalize_or_zero()
}

/// Approach step: snapped direction while farther than `desired_distance`.
pub fn approach_direction(state: &EnemyAIState, from: Vec3, to: Vec3) -> Option<Vec3> {
    if planar_distance(from, to) <= state.desired_distance {
        return None;
    }
    let direction = snapped_direction(from, to);
    (direction != Vec3::ZERO).then_some(direction)
}

/// Attack gate: cooldown elapsed, no combo rest, target in lane and in range.
pub fn can_attack(state: &EnemyAIState, tuning: &EnemyTuning, from: Vec3, to: Vec3, now: f32) -> bool {
    if state.on_cooldown {
        return false;
    }
    if now - state.last_attack_time < state.attack_cooldown {
        return false;
    }

    let in_lane = (to.y - from.y).abs() <= tuning.attack_axis_tolerance;
    let in_range = planar_distance(from, to) <= tuning.attack_range;
    in_lane && in_range
}

/// Start the next combo step. The third step puts the enemy on cooldown.
pub fn trigger_attack(state: &mut EnemyAIState, tuning: &EnemyTuning, now: f32) -> AttackRequest {
    let step = state.combo_counter + 1;
    let damage = tuning.combo_damage[usize::from(step - 1)];
    state.last_attack_time = now;

    let is_final_hit = step >= ENEMY_COMBO_STEPS;
    if is_final_hit {
        state.on_cooldown = true;
    } else {
        state.combo_counter = step;
    }

    AttackRequest {
        step,
        damage,
        is_final_hit,
    }
}

/// EnemyComboCooldown fired.
pub fn finish_enemy_cooldown(state: &mut EnemyAIState) {
    state.combo_counter = 0;
    state.on_cooldown = false;
}

/// Patrol without a player: walk to a random point, pick another on arrival.
///
/// Нет точек → стоим на месте.
pub fn patrol_direction<R: Rng + ?Sized>(
    state: &mut EnemyAIState,
    from: Vec3,
    points: &[Vec3],
    rng: &mut R,
) -> Option<Vec3> {
    let arrived = state
        .patrol_target
        .is_none_or(|target| planar_distance(from, target) <= state.desired_distance);

    if arrived {
        state.patrol_target = points.choose(rng).copied();
    }

    let target = state.patrol_target?;
    approach_direction(state, from, target)
}

/// Full per-tick decision against a target.
pub fn decide(
    state: &mut EnemyAIState,
    tuning: &EnemyTuning,
    from: Vec3,
    target: Vec3,
    now: f32,
) -> AiDecision {
    let movement = approach_direction(state, from, target);
    let attack = can_attack(state, tuning, from, target, now)
        .then(|| trigger_attack(state, tuning, now));

    AiDecision { movement, attack }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state() -> (EnemyAIState, EnemyTuning) {
        let tuning = EnemyTuning::default();
        (EnemyAIState::from_tuning(&tuning), tuning)
    }

    #[test]
    fn test_snapped_direction_keeps_dominant_axis() {
        let dir = snapped_direction(Vec3::ZERO, Vec3::new(300.0, -40.0, 80.0));
        assert_eq!(dir, Vec3::X);

        let dir = snapped_direction(Vec3::ZERO, Vec3::new(-10.0, -200.0, 0.0));
        assert_eq!(dir, Vec3::NEG_Y);

        // ничья → X
        let dir = snapped_direction(Vec3::ZERO, Vec3::new(-50.0, 50.0, 0.0));
        assert_eq!(dir, Vec3::NEG_X);

        assert_eq!(snapped_direction(Vec3::ONE, Vec3::ONE), Vec3::ZERO);
    }

    #[test]
    fn test_holds_position_inside_desired_distance() {
        let (state, _) = state();

        assert_eq!(
            approach_direction(&state, Vec3::ZERO, Vec3::new(500.0, 0.0, 0.0)),
            Some(Vec3::X)
        );
        assert_eq!(approach_direction(&state, Vec3::ZERO, Vec3::new(100.0, 0.0, 0.0)), None);
        assert_eq!(approach_direction(&state, Vec3::ZERO, Vec3::new(60.0, 20.0, 0.0)), None);
    }

    #[test]
    fn test_combo_damage_sequence_and_cooldown() {
        let (mut state, tuning) = state();
        let target = Vec3::new(80.0, 10.0, 0.0);

        let mut damages = Vec::new();
        let mut now = 1.0;
        for _ in 0..3 {
            assert!(can_attack(&state, &tuning, Vec3::ZERO, target, now));
            let request = trigger_attack(&mut state, &tuning, now);
            damages.push((request.step, request.damage, request.is_final_hit));
            now += 1.0;
        }

        assert_eq!(
            damages,
            vec![(1, 5.0, false), (2, 10.0, false), (3, 15.0, true)]
        );
        assert!(state.on_cooldown);
        // counter сбрасывается только по таймеру
        assert_eq!(state.combo_counter, 2);
        assert!(!can_attack(&state, &tuning, Vec3::ZERO, target, now + 10.0));

        finish_enemy_cooldown(&mut state);
        assert_eq!(state.combo_counter, 0);
        assert!(can_attack(&state, &tuning, Vec3::ZERO, target, now));
        assert_eq!(trigger_attack(&mut state, &tuning, now).step, 1);
    }

    #[test]
    fn test_attack_cooldown_between_steps() {
        let (mut state, tuning) = state();
        let target = Vec3::new(50.0, 0.0, 0.0);

        trigger_attack(&mut state, &tuning, 2.0);

        assert!(!can_attack(&state, &tuning, Vec3::ZERO, target, 2.5));
        assert!(can_attack(&state, &tuning, Vec3::ZERO, target, 3.0));
    }

    #[test]
    fn test_attack_needs_lane_and_range() {
        let (state, tuning) = state();

        // слишком далеко по Y (вне линии)
        assert!(!can_attack(&state, &tuning, Vec3::ZERO, Vec3::new(0.0, 80.0, 0.0), 5.0));
        // в линии, но дальше attack_range
        assert!(!can_attack(&state, &tuning, Vec3::ZERO, Vec3::new(400.0, 0.0, 0.0), 5.0));
        assert!(can_attack(&state, &tuning, Vec3::ZERO, Vec3::new(140.0, 30.0, 0.0), 5.0));
    }

    #[test]
    fn test_first_attack_waits_for_initial_cooldown() {
        let (state, tuning) = state();
        let target = Vec3::new(50.0, 0.0, 0.0);

        assert!(!can_attack(&state, &tuning, Vec3::ZERO, target, 0.5));
        assert!(can_attack(&state, &tuning, Vec3::ZERO, target, 1.0));
    }

    #[test]
    fn test_patrol_picks_points_deterministically() {
        use rand::SeedableRng;
        use rand_chacha::ChaCha8Rng;

        let points = [Vec3::new(1000.0, 0.0, 0.0), Vec3::new(0.0, -1000.0, 0.0)];
        let run = |seed: u64| {
            let (mut state, _) = state();
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            let dir = patrol_direction(&mut state, Vec3::ZERO, &points, &mut rng);
            (dir, state.patrol_target)
        };

        let (dir, target) = run(42);
        assert!(target.is_some());
        assert!(dir == Some(Vec3::X) || dir == Some(Vec3::NEG_Y));
        assert_eq!(run(42), (dir, target));
    }

    #[test]
    fn test_patrol_without_points_idles() {
        use rand::SeedableRng;

        let (mut state, _) = state();
        let mut rng = rand_chacha::ChaCha8Rng::seed_from_u64(1);
        assert_eq!(patrol_direction(&mut state, Vec3::ZERO, &[], &mut rng), None);
        assert_eq!(state.patrol_target, None);
    }

    #[test]
    fn test_decide_moves_and_attacks_independently() {
        let (mut state, tuning) = state();

        // ближе attack_range, но дальше desired_distance → идёт и бьёт
        let decision = decide(&mut state, &tuning, Vec3::ZERO, Vec3::new(120.0, 0.0, 0.0), 1.0);
        assert_eq!(decision.movement, Some(Vec3::X));
        assert_eq!(decision.attack.map(|a| a.step), Some(1));

        let decision = decide(&mut state, &tuning, Vec3::ZERO, Vec3::new(600.0, 0.0, 0.0), 5.0);
        assert_eq!(decision.movement, Some(Vec3::X));
        assert_eq!(decision.attack, None);
    }
}
