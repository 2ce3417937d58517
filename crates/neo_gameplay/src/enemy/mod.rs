//! Enemy domain (soldier / lancer melee units)
//!
//! - approach: чистая логика сближения и комбо (без ECS)
//! - systems: AI tick, combo cooldown timer, patrol points

pub mod approach;
pub mod systems;

pub use approach::{AiDecision, AttackRequest, ENEMY_COMBO_STEPS};
pub use systems::{enemy_ai_tick, handle_enemy_timers, PatrolPoints};
