//! Weapon pickup: nearest free weapon in reach.

use bevy::prelude::*;

use crate::components::{WeaponItem, WeaponType};

/// Closest free weapon within `radius` of `origin`.
pub fn closest_pickup<'a>(
    origin: Vec3,
    radius: f32,
    candidates: impl IntoIterator<Item = (Entity, Vec3, &'a WeaponItem)>,
) -> Option<(Entity, WeaponType)> {
    let mut best: Option<(Entity, WeaponType, f32)> = None;

    for (entity, position, item) in candidates {
        if !item.is_free() || item.weapon_type == WeaponType::None {
            continue;
        }

        let distance = origin.distance(position);
        if distance > radius {
            continue;
        }

        if best.is_none_or(|(_, _, d)| distance < d) {
            best = Some((entity, item.weapon_type, distance));
        }
    }

    best.map(|(entity, weapon_type, _)| (entity, weapon_type))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_picks_nearest_free_weapon() {
        let sword = WeaponItem::lying(WeaponType::Sword);
        let lance = WeaponItem::lying(WeaponType::Lance);
        let mut held_gun = WeaponItem::lying(WeaponType::Gun);
        held_gun.held_by = Some(Entity::from_raw(99));

        let candidates = [
            (Entity::from_raw(1), Vec3::new(120.0, 0.0, 0.0), &sword),
            (Entity::from_raw(2), Vec3::new(0.0, 60.0, 0.0), &lance),
            (Entity::from_raw(3), Vec3::new(10.0, 0.0, 0.0), &held_gun),
        ];

        let picked = closest_pickup(Vec3::ZERO, 150.0, candidates);
        assert_eq!(picked, Some((Entity::from_raw(2), WeaponType::Lance)));
    }

    #[test]
    fn test_nothing_in_reach() {
        let sword = WeaponItem::lying(WeaponType::Sword);
        let candidates = [(Entity::from_raw(1), Vec3::new(500.0, 0.0, 0.0), &sword)];

        assert_eq!(closest_pickup(Vec3::ZERO, 150.0, candidates), None);
    }
}
