//! ECS Components для игровых entity
//!
//! Организация по доменам:
//! - actor: здоровье, жизни, неуязвимость (Health)
//! - combat: боевое состояние игрока (CombatState, WeaponType)
//! - movement: направление, скорость, земля, прыжок
//! - weapon: оружие в мире и в руке (WeaponItem, HeldWeapon)
//! - player: player control marker (Player)
//! - enemy: рядовые враги (Enemy, EnemyAIState)
//! - boss: флаги босса от animation notify
//! - camera: поза камеры и billboard marker

pub mod actor;
pub mod combat;
pub mod movement;
pub mod weapon;
pub mod player;
pub mod enemy;
pub mod boss;
pub mod camera;

// Re-exports для удобного импорта
pub use actor::*;
pub use combat::*;
pub use movement::*;
pub use weapon::*;
pub use player::*;
pub use enemy::*;
pub use boss::*;
pub use camera::*;
