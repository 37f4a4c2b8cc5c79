//! ClayPigeon — цель в воздухе (state + hit transition)

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::components::{DestructionEffects, Lifespan, PigeonBody};
use crate::config::ClayPigeonConfig;

/// Политика повторных попаданий
///
/// Исторически было два варианта актора: один игнорировал повторный OnHit,
/// второй отрабатывал каждый вызов. Оба сведены к одной функции перехода
/// (`ClayPigeon::register_hit`), отличается только политика.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Reflect, Serialize, Deserialize)]
pub enum HitGuard {
    /// Только первое попадание засчитывается (повторные — no-op)
    #[default]
    Once,
    /// Каждое попадание заново запускает эффекты и разрушение
    EveryCall,
}

/// Фаза жизненного цикла
///
/// Spawned → Airborne → Hit → PendingRemoval → (despawn)
/// Spawned → Airborne → TimedOut → (despawn)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Reflect)]
pub enum PigeonPhase {
    #[default]
    Spawned,
    Airborne,
    Hit,
    PendingRemoval,
    TimedOut,
}

/// Результат `register_hit`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitOutcome {
    /// Эффекты + разрушение должны отработать. `first` — первое ли это попадание.
    Triggered { first: bool },
    /// Повтор при HitGuard::Once
    Ignored,
}

/// Тарелка
///
/// Автоматически добавляет Tumble, PigeonBody, DestructionEffects, Lifespan, Transform.
#[derive(Component, Debug, Clone, Reflect)]
#[reflect(Component)]
#[require(Tumble, PigeonBody, DestructionEffects, Lifespan, Transform)]
pub struct ClayPigeon {
    pub launch_speed: f32,
    pub gravity_scale: f32,
    pub lifespan_secs: f32,
    pub score_value: i32,
    pub hit_guard: HitGuard,
    /// Инвариант: false → true ровно один раз, обратно никогда
    pub hit: bool,
    /// Накапливается каждый тик, дальше не используется
    pub time_alive: f32,
    pub phase: PigeonPhase,
}

impl Default for ClayPigeon {
    fn default() -> Self {
        Self::from_config(&ClayPigeonConfig::default())
    }
}

impl ClayPigeon {
    pub fn from_config(config: &ClayPigeonConfig) -> Self {
        Self {
            launch_speed: config.launch_speed,
            gravity_scale: config.gravity_scale,
            lifespan_secs: config.lifespan_secs,
            score_value: config.score_value,
            hit_guard: config.hit_guard,
            hit: false,
            time_alive: 0.0,
            phase: PigeonPhase::Spawned,
        }
    }

    /// Единая функция перехода для попадания
    pub fn register_hit(&mut self) -> HitOutcome {
        if self.hit && self.hit_guard == HitGuard::Once {
            return HitOutcome::Ignored;
        }

        let first = !self.hit;
        self.hit = true;
        self.phase = PigeonPhase::Hit;
        HitOutcome::Triggered { first }
    }

    /// Spawned → Airborne. Повторный Launch фазу не трогает.
    pub fn mark_launched(&mut self) {
        if self.phase == PigeonPhase::Spawned {
            self.phase = PigeonPhase::Airborne;
        }
    }

    pub fn mark_pending_removal(&mut self) {
        self.phase = PigeonPhase::PendingRemoval;
    }

    pub fn is_pending_removal(&self) -> bool {
        self.phase == PigeonPhase::PendingRemoval
    }

    /// Вращение продолжается пока не было попадания
    pub fn should_tumble(&self) -> bool {
        !self.hit
    }
}

/// Вращение в воздухе
///
/// Ориентация хранится как накопленные Euler углы (pitch, yaw, roll в градусах)
/// без нормализации: orientation = initial + rate * dt * n.
/// Transform.rotation пересобирается из них каждый тик.
#[derive(Component, Debug, Clone, Copy, Reflect)]
#[reflect(Component)]
pub struct Tumble {
    /// Текущая ориентация: x = pitch, y = yaw, z = roll (deg)
    pub euler_degrees: Vec3,
    /// Скорость вращения (deg/s)
    pub rate_degrees: Vec3,
}

impl Default for Tumble {
    fn default() -> Self {
        Self {
            euler_degrees: Vec3::ZERO,
            rate_degrees: ClayPigeonConfig::default().rotation_rate(),
        }
    }
}

impl Tumble {
    pub fn new(rate_degrees: Vec3) -> Self {
        Self {
            euler_degrees: Vec3::ZERO,
            rate_degrees,
        }
    }

    /// Euler integration: euler += rate * dt
    pub fn advance(&mut self, delta_secs: f32) {
        self.euler_degrees += self.rate_degrees * delta_secs;
    }

    /// Yaw вокруг Y, pitch вокруг X, roll вокруг Z (Y-up)
    pub fn rotation(&self) -> Quat {
        Quat::from_euler(
            EulerRot::YXZ,
            self.euler_degrees.y.to_radians(),
            self.euler_degrees.x.to_radians(),
            self.euler_degrees.z.to_radians(),
        )
    }
}
