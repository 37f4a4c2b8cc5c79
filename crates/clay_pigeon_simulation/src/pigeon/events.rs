//! Events между хостом и ECS
//!
//! Host → ECS: LaunchPigeon, PigeonHitNotification
//! ECS → Host: OneShotEffect, PigeonScored, PigeonRemoved

use bevy::prelude::*;

/// Event: запустить тарелку (host → ECS)
///
/// `explicit_velocity` не ноль → используется как есть,
/// иначе normalize(direction) * launch_speed.
#[derive(Event, Debug, Clone)]
pub struct LaunchPigeon {
    pub pigeon: Entity,
    pub explicit_velocity: Vec3,
    pub direction: Vec3,
}

impl LaunchPigeon {
    /// Запуск по направлению со скоростью launch_speed тарелки
    pub fn towards(pigeon: Entity, direction: Vec3) -> Self {
        Self {
            pigeon,
            explicit_velocity: Vec3::ZERO,
            direction,
        }
    }

    /// Запуск с явной скоростью
    pub fn with_velocity(pigeon: Entity, velocity: Vec3) -> Self {
        Self {
            pigeon,
            explicit_velocity: velocity,
            direction: Vec3::ZERO,
        }
    }
}

/// Event: в тарелку попали (host collision → ECS)
#[derive(Event, Debug, Clone, Copy)]
pub struct PigeonHitNotification {
    pub pigeon: Entity,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EffectKind {
    Particles,
    Sound,
}

/// Event: one-shot эффект (ECS → host)
///
/// Fire-and-forget: хост спавнит particles / играет звук в точке и больше
/// не связывает их с тарелкой.
#[derive(Event, Debug, Clone)]
pub struct OneShotEffect {
    pub pigeon: Entity,
    pub kind: EffectKind,
    /// Asset path (particle system или sound)
    pub asset: String,
    pub translation: Vec3,
    pub rotation: Quat,
    /// Particles: масштаб
    pub scale: Vec3,
    /// Sound: громкость
    pub volume: f32,
    /// Sound: pitch
    pub pitch: f32,
}

impl OneShotEffect {
    pub fn particles(pigeon: Entity, asset: &str, transform: &Transform) -> Self {
        Self {
            pigeon,
            kind: EffectKind::Particles,
            asset: asset.to_owned(),
            translation: transform.translation,
            rotation: transform.rotation,
            scale: Vec3::ONE,
            volume: 1.0,
            pitch: 1.0,
        }
    }

    pub fn sound(pigeon: Entity, asset: &str, transform: &Transform) -> Self {
        Self {
            kind: EffectKind::Sound,
            ..Self::particles(pigeon, asset, transform)
        }
    }
}

/// Event: тарелка засчитана (ECS → game mode)
///
/// Подсчёт очков — забота game mode хоста, здесь только уведомление.
#[derive(Event, Debug, Clone, Copy)]
pub struct PigeonScored {
    pub pigeon: Entity,
    pub score_value: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RemovalReason {
    /// Попадание → RequestDestruction → задержка истекла
    Destroyed,
    /// lifespan истёк без попадания
    TimedOut,
}

/// Event: entity тарелки удалена
#[derive(Event, Debug, Clone, Copy)]
pub struct PigeonRemoved {
    pub pigeon: Entity,
    pub reason: RemovalReason,
}
