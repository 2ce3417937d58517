//! NEO Gameplay Core
//!
//! Геймплейная логика side-scroller action игры на Bevy 0.16 (headless ECS):
//! - player: combo state machine, weapon strategies, jump, damage/death/respawn
//! - enemy: approach + 3-step combo AI (soldier / lancer)
//! - notify: animation notify hooks (player + boss)
//! - billboard: background actors face the camera
//!
//! Хост (рендер, анимация, физика, input) снаружи:
//! в ядро: события (`PlayerInput`, `PlayerCommand`, `AnimNotify`),
//! из ядра: `GameplayEffect` и `EnemyAttackStarted`.

use std::time::Duration;

use bevy::prelude::*;
use bevy::time::TimeUpdateStrategy;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

// Публичные модули
pub mod animation;
pub mod billboard;
pub mod components;
pub mod config;
pub mod enemy;
pub mod error;
pub mod events;
pub mod logger;
pub mod movement;
pub mod notify;
pub mod player;
pub mod spawn;
pub mod timers;

// Re-exports для удобства
pub use animation::{Montage, MontageLibrary};
pub use components::*;
pub use config::{EnemyTuning, GameplayConfig, PlayerStatus};
pub use enemy::PatrolPoints;
pub use error::{GameplayError, GameplayResult};
pub use events::{
    AnimNotify, CommandKind, EnemyAttackStarted, GameplayEffect, InputAction, NotifyKind,
    PlayerCommand, PlayerInput,
};
pub use logger::{init_logger, LogLevel, LogPrinter};
pub use player::{AttackButton, DamageOutcome};
pub use spawn::{spawn_billboard, spawn_boss, spawn_enemy, spawn_player, spawn_weapon};
pub use timers::{GameTimers, TimerFired, TimerKind};

/// Fixed simulation rate (один тик = один кадр прыжка)
pub const FIXED_HZ: f64 = 60.0;

/// Главный plugin геймплея
///
/// Регистрирует события, ресурсы и системы. Всё в FixedUpdate (60Hz),
/// последовательно:
/// 1. tick_game_timers: истёкшие таймеры → TimerFired
/// 2. ground_detection: Grounded по высоте пола
/// 3. dispatch_anim_notifies: notifies → PlayerCommand / Boss
/// 4. handle_player_commands: TakeDamage, ApplyHpLoss, combo window...
/// 5. handle_player_input: move/run/jump/attack/pickup
/// 6. handle_player_timers: combo cooldown, invincibility, respawn
/// 7. handle_enemy_timers: enemy combo cooldown
/// 8. enemy_ai_tick: approach + attack
/// 9. sync_weapon_items: attach/detach → WeaponItem.held_by
/// 10. advance_jumps: синусная дуга
/// 11. integrate_movement: direction * speed * dt
///
/// Billboard (face_camera): в Update, каждый кадр рендера.
pub struct GameplayPlugin;

impl Plugin for GameplayPlugin {
    fn build(&self, app: &mut App) {
        // Регистрация событий
        app.add_event::<PlayerInput>()
            .add_event::<PlayerCommand>()
            .add_event::<AnimNotify>()
            .add_event::<GameplayEffect>()
            .add_event::<EnemyAttackStarted>()
            .add_event::<TimerFired>();

        // Ресурсы (уже вставленные хостом не перезаписываются)
        app.init_resource::<GameplayConfig>()
            .init_resource::<MontageLibrary>()
            .init_resource::<CameraView>()
            .init_resource::<GameTimers>()
            .init_resource::<PatrolPoints>();
        if !app.world().contains_resource::<DeterministicRng>() {
            app.insert_resource(DeterministicRng::new(42));
        }

        app.register_type::<Health>()
            .register_type::<CombatState>()
            .register_type::<EnemyAIState>()
            .register_type::<JumpState>()
            .register_type::<Boss>()
            .register_type::<FaceCamera>();

        app.add_systems(
            FixedUpdate,
            (
                // Фаза 1: время и сенсоры
                timers::tick_game_timers,
                movement::ground_detection,
                // Фаза 2: внешние события
                notify::dispatch_anim_notifies,
                player::handle_player_commands,
                player::handle_player_input,
                // Фаза 3: таймеры
                player::handle_player_timers,
                enemy::handle_enemy_timers,
                // Фаза 4: AI
                enemy::enemy_ai_tick,
                // Фаза 5: ownership + кинематика
                player::sync_weapon_items,
                movement::advance_jumps,
                movement::integrate_movement,
            )
                .chain(), // Последовательное выполнение
        );

        app.add_systems(Update, billboard::face_camera);
    }
}

/// Детерминистичный RNG resource (seeded)
#[derive(Resource)]
pub struct DeterministicRng {
    pub rng: ChaCha8Rng,
    pub seed: u64,
}

impl DeterministicRng {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }
}

/// Создаёт minimal Bevy App для headless симуляции
///
/// Время ручное: каждый `app.update()` = ровно один FixedUpdate тик
/// (первый update только инициализирует часы).
pub fn create_headless_app(seed: u64) -> App {
    let mut app = App::new();
    init_logger();
    app.add_plugins(MinimalPlugins)
        .insert_resource(DeterministicRng::new(seed))
        .insert_resource(Time::<Fixed>::from_hz(FIXED_HZ))
        .insert_resource(TimeUpdateStrategy::ManualDuration(Duration::from_secs_f64(
            1.0 / FIXED_HZ,
        )));

    app
}

/// Snapshot мира для сравнения детерминизма
pub fn world_snapshot<T: Component>(world: &mut World) -> Vec<u8>
where
    T: std::fmt::Debug,
{
    let mut snapshot = Vec::new();

    let mut query = world.query::<(Entity, &T)>();
    let mut entities: Vec<_> = query.iter(world).collect();

    // Сортируем по Entity ID для детерминизма
    entities.sort_by_key(|(entity, _)| entity.index());

    // Сериализуем в байты через Debug (простейший способ)
    for (entity, component) in entities {
        snapshot.extend_from_slice(&entity.index().to_le_bytes());
        snapshot.extend_from_slice(format!("{:?}", component).as_bytes());
    }

    snapshot
}
