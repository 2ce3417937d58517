//! Headless симуляция NEO gameplay
//!
//! Игрок с мечом против копейщика. Хитбоксы хоста заменены простой
//! пересылкой: каждый шаг вражеского комбо сразу попадает в игрока.
//!
//! `neo_gameplay [config.json]`: опциональный файл тюнинга.

use bevy::prelude::*;
use neo_gameplay::*;

/// Demo hitbox: EnemyAttackStarted → TakeDamage + ApplyHpLoss.
fn forward_enemy_hits(
    mut attacks: EventReader<EnemyAttackStarted>,
    mut commands_out: EventWriter<PlayerCommand>,
) {
    for attack in attacks.read() {
        commands_out.write(PlayerCommand {
            entity: attack.target,
            command: CommandKind::TakeDamage {
                amount: attack.damage,
                is_final_hit: attack.is_final_hit,
            },
        });
        commands_out.write(PlayerCommand {
            entity: attack.target,
            command: CommandKind::ApplyHpLoss(attack.damage),
        });
    }
}

/// Demo input: игрок жмёт атаку каждые полсекунды.
fn scripted_player_input(
    players: Query<Entity, With<Player>>,
    time: Res<Time<Fixed>>,
    mut inputs: EventWriter<PlayerInput>,
) {
    let tick = (time.elapsed_secs() * FIXED_HZ as f32).round() as u64;
    if tick % 30 != 0 {
        return;
    }
    for entity in players.iter() {
        inputs.write(PlayerInput {
            entity,
            action: InputAction::Attack(AttackButton::Primary),
        });
    }
}

fn main() {
    let seed = 42;
    println!("Starting NEO headless gameplay (seed: {})", seed);

    let mut app = create_headless_app(seed);

    let config = match std::env::args().nth(1) {
        Some(path) => match GameplayConfig::from_json_file(&path) {
            Ok(config) => config,
            Err(err) => {
                logger::log_error(&format!("❌ Config {}: {}", path, err));
                std::process::exit(1);
            }
        },
        None => GameplayConfig::default(),
    };

    app.insert_resource(config.clone())
        .add_plugins(GameplayPlugin)
        .add_systems(
            FixedUpdate,
            (
                scripted_player_input.before(player::handle_player_input),
                forward_enemy_hits
                    .after(enemy::enemy_ai_tick)
                    .before(player::sync_weapon_items),
            ),
        );

    let player = spawn_player(
        &mut app.world_mut().commands(),
        Vec3::ZERO,
        WeaponType::Sword,
        &config,
    );
    spawn_enemy(
        &mut app.world_mut().commands(),
        EnemyKind::Lancer,
        Vec3::new(600.0, 20.0, 0.0),
        &config,
    );

    // 20 секунд при 60Hz
    for tick in 0..1200 {
        app.update();

        if tick % 120 == 0 {
            let Some(health) = app.world().get::<Health>(player) else {
                break;
            };
            println!(
                "Tick {}: hp {:.0}, lives {}, dead {}",
                tick,
                health.hp(),
                health.remaining_lives,
                health.is_dead
            );
        }
    }

    println!("Simulation complete!");
}
