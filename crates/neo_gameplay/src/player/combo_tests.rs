//! Tests for the combo state machine and weapon strategies.

#[cfg(test)]
mod tests {
    use crate::animation::Montage;
    use crate::components::{CombatState, ComboPhase, WeaponType, MAX_COMBO_INDEX};
    use crate::config::PlayerStatus;
    use crate::player::combo::*;
    use crate::player::effects::CombatEffect;
    use crate::timers::TimerKind;

    const COOLDOWN: f32 = 0.8;

    fn played(effects: &[CombatEffect]) -> Vec<(Montage, Option<&'static str>)> {
        effects
            .iter()
            .filter_map(|e| match e {
                CombatEffect::PlayMontage { montage, section, .. } => Some((*montage, *section)),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn test_first_attack_starts_combo() {
        let mut state = CombatState::new(WeaponType::Sword, 2);

        let fx = handle_attack_input(&mut state, AttackButton::Primary, false, COOLDOWN);

        assert_eq!(played(&fx), vec![(Montage::Combo1, Some("First"))]);
        assert!(state.is_attacking);
        assert!(!state.is_controllable);
        assert_eq!(state.combo_index(), 0);
        assert_eq!(state.phase, ComboPhase::Attacking);
    }

    #[test]
    fn test_input_without_control_is_dropped() {
        let mut state = CombatState::new(WeaponType::Sword, 2);
        handle_attack_input(&mut state, AttackButton::Primary, false, COOLDOWN);

        // окно комбо ещё не открыто
        let fx = handle_attack_input(&mut state, AttackButton::Primary, false, COOLDOWN);
        assert!(fx.is_empty());
        assert_eq!(state.combo_index(), 0);
    }

    #[test]
    fn test_full_chain_arms_cooldown_on_last_section() {
        let mut state = CombatState::new(WeaponType::Sword, 2);
        let mut sections = Vec::new();
        let mut last = Vec::new();

        for _ in 0..4 {
            last = handle_attack_input(&mut state, AttackButton::Secondary, false, COOLDOWN);
            sections.extend(played(&last).into_iter().map(|(_, s)| s));
            continuation_combo(&mut state);
        }

        assert_eq!(
            sections,
            vec![Some("First"), Some("Second"), Some("Third"), Some("Fourth")]
        );
        assert_eq!(state.combo_index(), MAX_COMBO_INDEX);
        assert_eq!(state.phase, ComboPhase::Cooldown);
        assert!(last.contains(&CombatEffect::ScheduleTimer {
            kind: TimerKind::ComboCooldown,
            seconds: COOLDOWN,
        }));

        // во время cooldown атаки игнорируются, index не растёт
        let fx = handle_attack_input(&mut state, AttackButton::Secondary, false, COOLDOWN);
        assert!(fx.is_empty());
        assert_eq!(state.combo_index(), MAX_COMBO_INDEX);

        assert!(finish_combo_cooldown(&mut state));
        assert_eq!(state.phase, ComboPhase::Idle);
        assert_eq!(state.combo_index(), 0);
        assert!(!state.can_combo);
        assert!(state.is_controllable);
    }

    #[test]
    fn test_control_reopened_without_window_replays_section() {
        let mut state = CombatState::new(WeaponType::Sword, 2);
        handle_attack_input(&mut state, AttackButton::Primary, false, COOLDOWN);
        continuation_combo(&mut state);
        handle_attack_input(&mut state, AttackButton::Primary, false, COOLDOWN);
        assert_eq!(state.combo_index(), 1);

        // контроль вернули снаружи, can_combo нет
        state.set_control(true);
        let fx = handle_attack_input(&mut state, AttackButton::Primary, false, COOLDOWN);
        assert_eq!(played(&fx), vec![(Montage::Combo1, Some("Second"))]);
        assert_eq!(state.combo_index(), 1);
    }

    #[test]
    fn test_reset_combo_restores_control_and_cancels_cooldown() {
        let mut state = CombatState::new(WeaponType::Lance, 2);
        handle_attack_input(&mut state, AttackButton::Primary, false, COOLDOWN);
        continuation_combo(&mut state);
        handle_attack_input(&mut state, AttackButton::Primary, false, COOLDOWN);

        let fx = reset_combo(&mut state);

        assert_eq!(fx, vec![CombatEffect::CancelTimer(TimerKind::ComboCooldown)]);
        assert!(state.is_controllable);
        assert!(!state.is_attacking);
        assert_eq!(state.combo_index(), 0);
        assert_eq!(state.phase, ComboPhase::Idle);
        // уже сброшено → таймер ничего не делает
        assert!(!finish_combo_cooldown(&mut state));
    }

    #[test]
    fn test_air_attack_forces_third_hit_multiplier() {
        let mut state = CombatState::new(WeaponType::Sword, 2);

        let fx = handle_attack_input(&mut state, AttackButton::Primary, true, COOLDOWN);

        assert_eq!(played(&fx), vec![(Montage::AirAttack, None)]);
        assert_eq!(state.combo_index(), 2);
        assert!(!state.is_controllable);
        assert_eq!(damage_amount(&state, &PlayerStatus::default()), 30.0);
    }

    #[test]
    fn test_lance_requests_angle_correction() {
        let mut state = CombatState::new(WeaponType::Lance, 2);

        let fx = handle_attack_input(&mut state, AttackButton::Primary, false, COOLDOWN);

        assert_eq!(fx.first(), Some(&CombatEffect::CorrectAttackAngle));
        assert_eq!(played(&fx), vec![(Montage::Combo1, Some("First"))]);
    }

    #[test]
    fn test_gun_kick_and_shot() {
        let mut state = CombatState::new(WeaponType::Gun, 2);

        let fx = handle_attack_input(&mut state, AttackButton::Primary, false, COOLDOWN);
        assert_eq!(played(&fx), vec![(Montage::Kick, None)]);
        assert!(state.is_kicking);
        assert!(!state.is_attacking);

        state.set_control(true);
        let fx = handle_attack_input(&mut state, AttackButton::Secondary, false, COOLDOWN);
        assert_eq!(played(&fx), vec![(Montage::GunShot, None)]);
        assert_eq!(state.phase, ComboPhase::Idle);
    }

    #[test]
    fn test_empty_hand_does_not_attack() {
        let mut state = CombatState::new(WeaponType::None, 2);

        let fx = handle_attack_input(&mut state, AttackButton::Primary, false, COOLDOWN);

        assert!(fx.is_empty());
        assert!(state.is_controllable);
        assert!(!state.is_attacking);
    }

    #[test]
    fn test_damage_scales_with_combo_index() {
        let status = PlayerStatus {
            damage_amount: 10.0,
            combo_damage_factor: 1.5,
            ..PlayerStatus::default()
        };
        let mut state = CombatState::new(WeaponType::Sword, 2);

        assert_eq!(damage_amount(&state, &status), 15.0);
        state.combo_index = 3;
        assert_eq!(damage_amount(&state, &status), 60.0);
    }

    #[test]
    fn test_combo_index_never_exceeds_max() {
        let mut state = CombatState::new(WeaponType::Sword, 2);

        for _ in 0..20 {
            handle_attack_input(&mut state, AttackButton::Primary, false, COOLDOWN);
            continuation_combo(&mut state);
            assert!(state.combo_index() <= MAX_COMBO_INDEX);
        }
    }
}
