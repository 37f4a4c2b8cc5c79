//! Headless симуляция тарелок
//!
//! Хост-заглушка: спавнит тарелки, запускает их со случайным разбросом,
//! "стреляет" по части из них и печатает что пришло обратно из ECS.

use std::time::Duration;

use bevy::prelude::*;
use bevy::time::TimeUpdateStrategy;
use rand::Rng;

use clay_pigeon_simulation::{
    create_headless_app, spawn_clay_pigeon, ClayPigeon, ClayPigeonConfig, DeterministicRng,
    LaunchPigeon, OneShotEffect, PigeonHitNotification, PigeonRemoved, PigeonScored, PigeonSet,
    RemovalReason, SimulationPlugin, SIMULATION_HZ,
};

const PIGEON_COUNT: usize = 8;
const SHOOT_AT_TICK: usize = 45;
const TICKS: usize = 1000;

/// Что хост получил из ECS
#[derive(Resource, Default)]
struct HostStats {
    effects: usize,
    score: i32,
    destroyed: usize,
    timed_out: usize,
}

fn collect_host_events(
    mut stats: ResMut<HostStats>,
    mut effects: EventReader<OneShotEffect>,
    mut scored: EventReader<PigeonScored>,
    mut removed: EventReader<PigeonRemoved>,
) {
    stats.effects += effects.read().count();
    stats.score += scored.read().map(|s| s.score_value).sum::<i32>();

    for event in removed.read() {
        match event.reason {
            RemovalReason::Destroyed => stats.destroyed += 1,
            RemovalReason::TimedOut => stats.timed_out += 1,
        }
    }
}

fn main() {
    let seed = 42;
    println!("Starting clay pigeon headless simulation (seed: {})", seed);

    let mut app = create_headless_app(seed);
    app.add_plugins(SimulationPlugin)
        .insert_resource(TimeUpdateStrategy::ManualDuration(Duration::from_secs_f64(
            1.0 / SIMULATION_HZ,
        )))
        .init_resource::<HostStats>()
        .add_systems(FixedUpdate, collect_host_events.after(PigeonSet::Lifecycle));

    let config = ClayPigeonConfig {
        lifespan_secs: 4.0,
        destruction_particles: Some("fx/clay_shatter".into()),
        destruction_sound: Some("sfx/clay_break".into()),
        ..default()
    };

    let pigeons: Vec<Entity> = (0..PIGEON_COUNT)
        .map(|i| {
            spawn_clay_pigeon(
                &mut app.world_mut().commands(),
                Transform::from_xyz(i as f32 * 50.0, 100.0, 0.0),
                &config,
            )
        })
        .collect();
    app.world_mut().flush();

    // Разброс направлений запуска: вверх-вперёд ± jitter
    for &pigeon in &pigeons {
        let direction = {
            let mut rng = app.world_mut().resource_mut::<DeterministicRng>();
            Vec3::new(
                rng.rng.gen_range(-0.2..0.2),
                rng.rng.gen_range(0.6..1.0),
                -1.0,
            )
        };
        app.world_mut().send_event(LaunchPigeon::towards(pigeon, direction));
    }

    for tick in 0..TICKS {
        if tick == SHOOT_AT_TICK {
            // Каждая вторая тарелка; двойное попадание проверяет HitGuard
            for &pigeon in pigeons.iter().step_by(2) {
                app.world_mut().send_event(PigeonHitNotification { pigeon });
                app.world_mut().send_event(PigeonHitNotification { pigeon });
            }
        }

        app.update();

        if tick % 100 == 0 {
            let airborne = app
                .world_mut()
                .query::<&ClayPigeon>()
                .iter(app.world())
                .count();
            println!("Tick {}: {} pigeons alive", tick, airborne);
        }
    }

    let stats = app.world().resource::<HostStats>();
    println!(
        "Simulation complete! score={} effects={} destroyed={} timed_out={}",
        stats.score, stats.effects, stats.destroyed, stats.timed_out
    );
}
