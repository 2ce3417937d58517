//! Montage ids and their asset paths.
//!
//! Gameplay only names montages; the host resolves paths to playable assets.
//! A montage missing from the library is skipped when played, the state
//! transition that asked for it still happens.

use std::collections::HashMap;

use bevy::prelude::*;

use crate::player::combo::AttackButton;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Reflect)]
pub enum Montage {
    /// Ground combo started by the primary attack button
    Combo1,
    /// Ground combo started by the secondary attack button
    Combo2,
    AirAttack,
    GunShot,
    Kick,
    /// Flinch
    TakeDamage,
    KnockBack,
    Death,
    EnemyAttack1,
    EnemyAttack2,
    EnemyAttack3,
}

impl Montage {
    pub const ALL: [Montage; 11] = [
        Montage::Combo1,
        Montage::Combo2,
        Montage::AirAttack,
        Montage::GunShot,
        Montage::Kick,
        Montage::TakeDamage,
        Montage::KnockBack,
        Montage::Death,
        Montage::EnemyAttack1,
        Montage::EnemyAttack2,
        Montage::EnemyAttack3,
    ];

    pub fn combo(button: AttackButton) -> Self {
        match button {
            AttackButton::Primary => Montage::Combo1,
            AttackButton::Secondary => Montage::Combo2,
        }
    }

    /// Enemy montage for combo step 1..=3.
    pub fn enemy_attack(step: u8) -> Option<Self> {
        match step {
            1 => Some(Montage::EnemyAttack1),
            2 => Some(Montage::EnemyAttack2),
            3 => Some(Montage::EnemyAttack3),
            _ => None,
        }
    }

    pub fn default_asset_path(self) -> &'static str {
        match self {
            Montage::Combo1 => "/Game/0122/Player/Animation/Montage/Combo/Combo1",
            Montage::Combo2 => "/Game/0122/Player/Animation/Montage/Combo/Combo2",
            Montage::AirAttack => "/Game/0122/Player/Animation/Montage/Combo/JumpAttack_Montage",
            Montage::GunShot => "/Game/0122/Player/Animation/Montage/GunAttack_Montage",
            Montage::Kick => "/Game/0122/Player/Animation/Montage/Kick_Montage",
            Montage::TakeDamage => "/Game/0122/Player/Animation/Montage/Damaged_Montage",
            Montage::KnockBack => "/Game/0122/Player/Animation/Montage/KnockBack_Montage",
            Montage::Death => "/Game/0122/Player/Animation/Montage/Death_Montage",
            Montage::EnemyAttack1 => "/Game/0122/Enemy/Animation/Montage/Attack1_Montage",
            Montage::EnemyAttack2 => "/Game/0122/Enemy/Animation/Montage/Attack2_Montage",
            Montage::EnemyAttack3 => "/Game/0122/Enemy/Animation/Montage/Attack3_Montage",
        }
    }
}

/// Montage → asset path table.
#[derive(Resource, Debug, Clone, PartialEq)]
pub struct MontageLibrary {
    paths: HashMap<Montage, String>,
}

impl Default for MontageLibrary {
    fn default() -> Self {
        let paths = Montage::ALL
            .iter()
            .map(|m| (*m, m.default_asset_path().to_string()))
            .collect();
        Self { paths }
    }
}

impl MontageLibrary {
    pub fn empty() -> Self {
        Self {
            paths: HashMap::new(),
        }
    }

    pub fn resolve(&self, montage: Montage) -> Option<&str> {
        self.paths.get(&montage).map(String::as_str)
    }

    pub fn insert(&mut self, montage: Montage, path: impl Into<String>) {
        self.paths.insert(montage, path.into());
    }

    pub fn remove(&mut self, montage: Montage) -> Option<String> {
        self.paths.remove(&montage)
    }
}
