//! Player domain
//!
//! Чистые переходы (без ECS):
//! - combo: combo state machine (Idle → Attacking → Cooldown → Idle)
//! - strategy: sword / lance / gun attack handlers
//! - damage: hit, invincibility, death, respawn
//! - jump: синусная дуга прыжка
//! - pickup: ближайшее свободное оружие
//!
//! ECS обвязка: systems (input, commands, timers, weapon sync).

pub mod combo;
pub mod damage;
pub mod effects;
pub mod jump;
pub mod pickup;
pub mod strategy;
pub mod systems;

// Tests (separate files with _tests suffix)
#[cfg(test)]
mod combo_tests;

pub use combo::{damage_amount, AttackButton};
pub use damage::DamageOutcome;
pub use effects::CombatEffect;
pub use strategy::{strategy_for, AttackStrategy};
pub use systems::{handle_player_commands, handle_player_input, handle_player_timers, sync_weapon_items};
