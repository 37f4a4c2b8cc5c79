//! Clay Pigeon Simulation Core
//!
//! ECS-симуляция тарелок на Bevy 0.16 (headless)
//!
//! HYBRID ARCHITECTURE:
//! - ECS = game state тарелки (launch, hit, вращение, таймеры жизни)
//! - Host engine = рендер, звук, collision detection, game mode

use bevy::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

// Публичные модули
pub mod components;
pub mod config;
pub mod logger;
pub mod motion;
pub mod pigeon;

// Re-exports для удобства
pub use components::*;
pub use config::ClayPigeonConfig;
pub use logger::{log, log_error, log_info, log_warning, set_logger, LogLevel, LogPrinter, LOGGER_LEVEL};
pub use motion::{ProjectileMotion, ProjectileMotionPlugin};
pub use pigeon::{
    launch_velocity, spawn_clay_pigeon, ClayPigeonPlugin, EffectKind, LaunchPigeon, OneShotEffect,
    PigeonHitNotification, PigeonRemoved, PigeonScored, PigeonSet, RemovalReason,
};

/// Fixed simulation tick
pub const SIMULATION_HZ: f64 = 60.0;

/// Главный plugin симуляции (объединяет все подсистемы)
pub struct SimulationPlugin;

impl Plugin for SimulationPlugin {
    fn build(&self, app: &mut App) {
        app
            // Fixed timestep 60Hz для simulation tick
            .insert_resource(Time::<Fixed>::from_hz(SIMULATION_HZ))
            .add_plugins((ClayPigeonPlugin, ProjectileMotionPlugin));

        if !app.world().contains_resource::<DeterministicRng>() {
            app.insert_resource(DeterministicRng::new(42));
        }
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
pub fn create_headless_app(seed: u64) -> App {
    let mut app = App::new();
    logger::init_logger();
    app.add_plugins(MinimalPlugins)
        .insert_resource(DeterministicRng::new(seed))
        .insert_resource(Time::<Fixed>::from_hz(SIMULATION_HZ));

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
