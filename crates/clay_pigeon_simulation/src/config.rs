//! Designer tuning для тарелок
//!
//! Единицы — как в движке хоста: сантиметры, секунды, градусы.
//! 3000 cm/s ≈ 108 km/h.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::components::HitGuard;

/// Ускорение свободного падения движка (cm/s², ось +Y вверх)
pub const ENGINE_GRAVITY: f32 = -980.0;

/// Задержка между RequestDestruction и удалением entity (эффекты успевают отыграть)
pub const DESTROY_DELAY_SECS: f32 = 0.1;

/// Порог "почти ноль" для явной скорости запуска
pub const NEARLY_ZERO_TOLERANCE: f32 = 1e-4;

/// Tuning одной тарелки. Копируется в компоненты при spawn.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClayPigeonConfig {
    /// Скорость запуска, когда явная скорость не задана
    pub launch_speed: f32,
    /// 1.0 = нормальная гравитация, 0.5 = половина
    pub gravity_scale: f32,
    /// Ограничение модуля скорости projectile motion
    pub max_speed: f32,
    /// Скорость вращения в воздухе: pitch, yaw, roll (deg/s)
    pub rotation_rate_degrees: [f32; 3],
    /// Время жизни без попадания (секунды)
    pub lifespan_secs: f32,
    /// Очки за попадание (уходят в PigeonScored)
    pub score_value: i32,
    /// Once = повторные попадания игнорируются
    pub hit_guard: HitGuard,
    /// Particle asset для one-shot эффекта разрушения
    pub destruction_particles: Option<String>,
    /// Sound asset для one-shot звука разрушения
    pub destruction_sound: Option<String>,
}

impl Default for ClayPigeonConfig {
    fn default() -> Self {
        Self {
            launch_speed: 3000.0,
            gravity_scale: 1.0,
            max_speed: 5000.0,
            rotation_rate_degrees: [180.0, 360.0, 90.0],
            lifespan_secs: 10.0,
            score_value: 10,
            hit_guard: HitGuard::Once,
            destruction_particles: None,
            destruction_sound: None,
        }
    }
}

impl ClayPigeonConfig {
    pub fn rotation_rate(&self) -> Vec3 {
        Vec3::from_array(self.rotation_rate_degrees)
    }
}
