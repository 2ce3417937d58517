//! Weapon ownership: the item in the world and the player's hand slot.

use bevy::prelude::*;

use super::WeaponType;

/// Оружие как объект мира (лежит на земле или в руке)
#[derive(Component, Debug, Clone, Copy, PartialEq, Reflect)]
#[reflect(Component)]
pub struct WeaponItem {
    pub weapon_type: WeaponType,
    pub held_by: Option<Entity>,
}

impl WeaponItem {
    pub fn lying(weapon_type: WeaponType) -> Self {
        Self {
            weapon_type,
            held_by: None,
        }
    }

    pub fn is_free(&self) -> bool {
        self.held_by.is_none()
    }
}

/// Hand slot of a player.
///
/// `is_holding` can be true with `weapon == None` when the weapon actor was
/// never spawned; damage rules only look at `is_holding`.
#[derive(Component, Debug, Clone, Copy, Default, PartialEq, Reflect)]
#[reflect(Component)]
pub struct HeldWeapon {
    pub weapon: Option<Entity>,
    pub is_holding: bool,
}

impl HeldWeapon {
    pub fn holding(weapon: Entity) -> Self {
        Self {
            weapon: Some(weapon),
            is_holding: true,
        }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    /// Let go of the weapon, returning the entity that was in hand.
    pub fn release(&mut self) -> Option<Entity> {
        self.is_holding = false;
        self.weapon.take()
    }
}
