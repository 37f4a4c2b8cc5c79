//! Clay pigeon domain (ECS side)
//!
//! ECS ответственность:
//! - State: ClayPigeon (hit flag, фаза), Tumble, PigeonBody, Lifespan
//! - Rules: launch velocity, единый hit transition, таймер удаления
//! - Events: LaunchPigeon / PigeonHitNotification (host → ECS),
//!   OneShotEffect / PigeonScored / PigeonRemoved (ECS → host)
//!
//! Host ответственность:
//! - spawn тарелок (spawn_clay_pigeon), вызов App::update каждый кадр
//! - collision detection → PigeonHitNotification
//! - рендер, particles, звук по OneShotEffect

use bevy::prelude::*;
use bevy_rapier3d::prelude::*;

use crate::components::{ClayPigeon, DestructionEffects, Lifespan, PigeonBody, Tumble};
use crate::config::{ClayPigeonConfig, NEARLY_ZERO_TOLERANCE};
use crate::motion::ProjectileMotion;

pub mod events;
pub mod systems;

#[cfg(test)]
mod hit_tests;

pub use events::*;
pub use systems::*;

/// Порядок внутри FixedUpdate
#[derive(SystemSet, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PigeonSet {
    /// OnSpawn hooks (arm lifespan)
    Spawn,
    /// Launch + hit intents от хоста
    Intents,
    /// Projectile motion integration
    Motion,
    /// Per-frame вращение
    Tumble,
    /// Таймеры жизни, despawn
    Lifecycle,
}

/// Clay pigeon plugin
///
/// Порядок выполнения (FixedUpdate, 60Hz):
/// 1. arm_lifespan_on_spawn — взвод таймера у новых тарелок
/// 2. process_launch_requests — LaunchPigeon → ProjectileMotion
/// 3. process_hit_notifications — hit transition, эффекты, RequestDestruction
/// 4. (ProjectileMotionPlugin) — интеграция движения
/// 5. tumble_pigeons — вращение + time_alive
/// 6. expire_pigeons — despawn по таймеру
pub struct ClayPigeonPlugin;

impl Plugin for ClayPigeonPlugin {
    fn build(&self, app: &mut App) {
        app.add_event::<LaunchPigeon>()
            .add_event::<PigeonHitNotification>()
            .add_event::<OneShotEffect>()
            .add_event::<PigeonScored>()
            .add_event::<PigeonRemoved>();

        app.register_type::<ClayPigeon>()
            .register_type::<Tumble>()
            .register_type::<PigeonBody>()
            .register_type::<DestructionEffects>()
            .register_type::<Lifespan>();

        app.configure_sets(
            FixedUpdate,
            (
                PigeonSet::Spawn,
                PigeonSet::Intents,
                PigeonSet::Motion,
                PigeonSet::Tumble,
                PigeonSet::Lifecycle,
            )
                .chain(),
        );

        app.add_systems(
            FixedUpdate,
            (
                arm_lifespan_on_spawn.in_set(PigeonSet::Spawn),
                (process_launch_requests, process_hit_notifications)
                    .chain()
                    .in_set(PigeonSet::Intents),
                tumble_pigeons.in_set(PigeonSet::Tumble),
                expire_pigeons.in_set(PigeonSet::Lifecycle),
            ),
        );
    }
}

/// Вычисляет стартовую скорость
///
/// - Явная скорость не "почти ноль" → используется как есть (direction игнорируется)
/// - Иначе normalize(direction) * launch_speed (нулевой direction → нулевая скорость)
pub fn launch_velocity(explicit_velocity: Vec3, direction: Vec3, launch_speed: f32) -> Vec3 {
    if !is_nearly_zero(explicit_velocity) {
        return explicit_velocity;
    }

    direction.normalize_or_zero() * launch_speed
}

fn is_nearly_zero(v: Vec3) -> bool {
    v.abs().max_element() <= NEARLY_ZERO_TOLERANCE
}

/// Spawn helper для тарелки
///
/// Создаёт entity с полным набором компонентов:
/// - Transform (начальная ориентация → Tumble.euler_degrees)
/// - ClayPigeon (+ required: Tumble, PigeonBody, DestructionEffects, Lifespan)
/// - ProjectileMotion (velocity 0 до Launch)
/// - Rapier: KinematicPositionBased (без встроенной физики), диск-коллайдер,
///   BLOCK на всех группах
pub fn spawn_clay_pigeon(
    commands: &mut Commands,
    transform: Transform,
    config: &ClayPigeonConfig,
) -> Entity {
    let (yaw, pitch, roll) = transform.rotation.to_euler(EulerRot::YXZ);
    let tumble = Tumble {
        euler_degrees: Vec3::new(pitch.to_degrees(), yaw.to_degrees(), roll.to_degrees()),
        rate_degrees: config.rotation_rate(),
    };

    commands
        .spawn((
            Name::new("ClayPigeon"),
            transform,
            ClayPigeon::from_config(config),
            tumble,
            PigeonBody::default(),
            DestructionEffects {
                particles: config.destruction_particles.clone(),
                sound: config.destruction_sound.clone(),
            },
            ProjectileMotion {
                gravity_scale: config.gravity_scale,
                ..ProjectileMotion::new(config.max_speed)
            },
            // Rapier physics
            RigidBody::KinematicPositionBased,
            Collider::cylinder(1.25, 5.5), // Диск ~11cm, толщина 2.5cm
            CollisionGroups::new(Group::ALL, Group::ALL),
            ActiveEvents::COLLISION_EVENTS,
            Velocity::default(),
        ))
        .id()
}
