//! Health, lives and invincibility of a player actor.

use bevy::prelude::*;

/// Здоровье + жизни + неуязвимость
///
/// Инвариант: 0 ≤ hp ≤ max_hp; `is_dead` выставляется ровно один раз за жизнь.
#[derive(Component, Debug, Clone, PartialEq, Reflect)]
#[reflect(Component)]
pub struct Health {
    pub hp: f32,
    pub max_hp: f32,
    pub remaining_lives: u32,
    /// Post-hit invincibility window
    pub invincible: bool,
    /// Debug god mode
    pub absolutely_invincible: bool,
    pub is_dead: bool,
}

impl Default for Health {
    fn default() -> Self {
        Self::new(100.0, 2)
    }
}

impl Health {
    pub fn new(max_hp: f32, remaining_lives: u32) -> Self {
        Self {
            hp: max_hp,
            max_hp,
            remaining_lives,
            invincible: false,
            absolutely_invincible: false,
            is_dead: false,
        }
    }

    pub fn hp(&self) -> f32 {
        self.hp
    }

    pub fn is_alive(&self) -> bool {
        !self.is_dead
    }

    /// Can an incoming hit do anything at all.
    pub fn can_be_hit(&self) -> bool {
        !self.is_dead && !self.invincible && !self.absolutely_invincible
    }

    /// Lower HP. Returns true when this call brought HP to zero.
    pub fn lose_hp(&mut self, amount: f32) -> bool {
        if self.is_dead || self.hp <= 0.0 {
            return false;
        }
        self.hp = (self.hp - amount.max(0.0)).max(0.0);
        self.hp <= 0.0
    }

    /// Back to full HP for a new life.
    pub fn restore(&mut self) {
        self.hp = self.max_hp;
        self.invincible = false;
        self.is_dead = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lose_hp_reports_zero_once() {
        let mut health = Health::new(100.0, 2);

        assert!(!health.lose_hp(30.0));
        assert_eq!(health.hp(), 70.0);

        assert!(health.lose_hp(100.0)); // clamp to 0
        assert_eq!(health.hp(), 0.0);

        assert!(!health.lose_hp(10.0)); // already at 0
        assert_eq!(health.hp(), 0.0);
    }

    #[test]
    fn test_negative_damage_does_not_heal() {
        let mut health = Health::new(100.0, 0);
        health.lose_hp(20.0);
        health.lose_hp(-50.0);
        assert_eq!(health.hp(), 80.0);
    }

    #[test]
    fn test_can_be_hit_flags() {
        let mut health = Health::default();
        assert!(health.can_be_hit());

        health.invincible = true;
        assert!(!health.can_be_hit());

        health.invincible = false;
        health.absolutely_invincible = true;
        assert!(!health.can_be_hit());

        health.absolutely_invincible = false;
        health.is_dead = true;
        assert!(!health.can_be_hit());

        health.restore();
        assert!(health.can_be_hit());
        assert_eq!(health.hp(), health.max_hp);
    }
}
